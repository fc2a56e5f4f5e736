//! Typed argument list consumed by the encoder
//!
//! `ArgList` plays the role of a C `va_list`: the scanner pulls the next
//! argument of the kind the current directive expects. Arguments are
//! statically typed, so a caller that breaks the format/argument contract
//! gets a deterministic coercion instead of undefined behavior, and the
//! breach is remembered for the checked entry points.

use crate::error::Error;

/// A single deferred argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    /// C `int`; consumed by `c`, the integer family and `*`
    Int(i32),
    /// C `double`; consumed by the float family
    Double(f64),
    /// String bytes; content ends at the first zero byte or the end of the slice
    Str(&'a [u8]),
}

impl<'a> Arg<'a> {
    /// String content up to (not including) the first zero byte
    #[inline]
    pub fn c_str(bytes: &'a [u8]) -> &'a [u8] {
        match bytes.iter().position(|&b| b == 0) {
            Some(end) => &bytes[..end],
            None => bytes,
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Arg::Int(value as i32)
                }
            }
        )*
    };
}

// u32 is reinterpreted bitwise, as when passed through a C `int`
impl_from_int!(i8, u8, i16, u16, i32, u32);

impl From<char> for Arg<'_> {
    #[inline]
    fn from(value: char) -> Self {
        Arg::Int(value as u32 as i32)
    }
}

impl From<bool> for Arg<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Arg::Int(value as i32)
    }
}

impl From<f32> for Arg<'_> {
    #[inline]
    fn from(value: f32) -> Self {
        Arg::Double(value as f64)
    }
}

impl From<f64> for Arg<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Arg::Double(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Arg::Str(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    #[inline]
    fn from(value: &'a [u8]) -> Self {
        Arg::Str(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    #[inline]
    fn from(value: &'a [u8; N]) -> Self {
        Arg::Str(value)
    }
}

/// Forward cursor over a slice of arguments
#[derive(Debug, Clone)]
pub struct ArgList<'a, 'b> {
    args: &'b [Arg<'a>],
    pos: usize,
    fault: Option<Error>,
}

impl<'a, 'b> ArgList<'a, 'b> {
    /// Create a list positioned at the first argument
    #[inline]
    pub fn new(args: &'b [Arg<'a>]) -> Self {
        Self {
            args,
            pos: 0,
            fault: None,
        }
    }

    #[inline]
    fn next(&mut self) -> Option<Arg<'a>> {
        let arg = self.args.get(self.pos).copied();
        self.pos += 1;
        if arg.is_none() {
            self.record(Error::MissingArgument);
        }
        arg
    }

    #[inline]
    fn record(&mut self, error: Error) {
        if self.fault.is_none() {
            self.fault = Some(error);
        }
    }

    /// Consume the next argument as a C `int`
    #[inline]
    pub fn next_int(&mut self) -> i32 {
        match self.next() {
            Some(Arg::Int(v)) => v,
            Some(Arg::Double(d)) => {
                self.record(Error::ArgumentMismatch);
                d as i32
            }
            Some(Arg::Str(_)) => {
                self.record(Error::ArgumentMismatch);
                0
            }
            None => 0,
        }
    }

    /// Consume the next argument as a C `double`
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        match self.next() {
            Some(Arg::Double(d)) => d,
            Some(Arg::Int(v)) => {
                self.record(Error::ArgumentMismatch);
                v as f64
            }
            Some(Arg::Str(_)) => {
                self.record(Error::ArgumentMismatch);
                0.0
            }
            None => 0.0,
        }
    }

    /// Consume the next argument as a string, trimmed at its first zero byte
    #[inline]
    pub fn next_str(&mut self) -> &'a [u8] {
        match self.next() {
            Some(Arg::Str(s)) => Arg::c_str(s),
            Some(_) => {
                self.record(Error::ArgumentMismatch);
                &[]
            }
            None => &[],
        }
    }

    /// Number of arguments requested so far, including missing ones
    #[inline]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Number of supplied arguments not yet consumed
    #[inline]
    pub fn remaining(&self) -> usize {
        self.args.len().saturating_sub(self.pos)
    }

    /// First contract breach observed, if any
    #[inline]
    pub fn fault(&self) -> Option<Error> {
        self.fault
    }
}
