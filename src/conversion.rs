//! Directive character classification

/// What a format character means once a directive has started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `c`: one character, 1-byte payload
    Char,
    /// `s`: string payload
    Str,
    /// `e E f F g G`: 4-byte single-precision payload
    Float,
    /// `d i o x X u`: 1, 2 or 4-byte integer payload
    Int,
    /// `%`: literal percent, no argument
    Percent,
    /// `*`: 1-byte payload, directive continues
    Star,
    /// Format string terminator reached inside a directive
    End,
    /// Flags, width and precision digits, length modifiers, anything else
    Modifier,
}

impl Conversion {
    /// Classify a format character seen inside a directive
    #[inline]
    pub const fn classify(c: u8) -> Self {
        match c {
            b'c' => Conversion::Char,
            b's' => Conversion::Str,
            b'e' | b'E' | b'f' | b'F' | b'g' | b'G' => Conversion::Float,
            b'd' | b'i' | b'o' | b'x' | b'X' | b'u' => Conversion::Int,
            b'%' => Conversion::Percent,
            b'*' => Conversion::Star,
            0 => Conversion::End,
            _ => Conversion::Modifier,
        }
    }

    /// Whether this character ends the directive
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Conversion::Star | Conversion::Modifier)
    }
}

/// Nominal payload width of an integer directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    /// `hh`
    Byte = 1,
    /// `h`
    Short = 2,
    /// no modifier, or any modifier other than `h`/`hh`
    Word = 4,
}

impl IntWidth {
    /// Width implied by the two format characters preceding the specifier
    ///
    /// `prev` sits directly before the specifier and `prev2` before that.
    #[inline]
    pub const fn from_modifiers(prev: u8, prev2: u8) -> Self {
        match (prev, prev2) {
            (b'h', b'h') => IntWidth::Byte,
            (b'h', _) => IntWidth::Short,
            _ => IntWidth::Word,
        }
    }

    /// Payload size in bytes
    #[inline]
    pub const fn bytes(self) -> usize {
        self as usize
    }
}
