//! Deferred-format encoder
//!
//! Scans a printf-style format string once, copying literal text and
//! replacing every directive with its binary form:
//!
//! ```text
//! literal bytes ........................... copied verbatim
//! %  -> 0xA5 marker, then modifiers verbatim, then the specifier byte
//! c  -> 1 byte         (bare "%c" collapses to the raw byte alone)
//! s  -> string + 0x00  (bare "%s" collapses to the string bytes alone)
//! eEfFgG -> 4 bytes    f32, little-endian
//! dioxXu -> 1/2/4 bytes little-endian; values <= 255 are stored in
//!                      1 byte and the specifier byte gets its high bit set
//! %% -> 0xA5 '%'
//! *  -> 1 byte, directive continues
//! ```
//!
//! The core entry points ([`encode`], [`encode_with_list`]) never fail and
//! never check capacity. [`try_encode`] and [`encode_to_vec`] validate the
//! call first.

use alloc::vec;
use alloc::vec::Vec;

use crate::arg::{Arg, ArgList};
use crate::conversion::{Conversion, IntWidth};
use crate::error::{Error, Result};
use crate::writer::{ByteWriter, LenCounter, Sink};
use crate::MARKER;

/// Outcome of one scan over a format string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ScanSummary {
    /// Terminal specifiers processed, `%%` included
    pub directives: usize,
    /// The format ended inside a directive
    pub unterminated: bool,
}

/// Run the encoding state machine into `out`
pub(crate) fn scan<S: Sink>(out: &mut S, fmt: &[u8], args: &mut ArgList<'_, '_>) -> ScanSummary {
    // the first zero byte or the end of the slice terminates the format
    let at = |i: usize| fmt.get(i).copied().unwrap_or(0);

    let mut summary = ScanSummary::default();
    let mut i = 0;

    while at(i) != 0 {
        if at(i) != b'%' {
            out.put_u8(at(i));
            i += 1;
            continue;
        }

        i += 1;

        // a bare "%c" / "%s" keeps neither marker nor specifier
        let bare = matches!(
            Conversion::classify(at(i)),
            Conversion::Char | Conversion::Str
        );
        if !bare {
            out.put_u8(MARKER);
        }

        loop {
            let c = at(i);
            i += 1;

            let conversion = Conversion::classify(c);
            if !bare {
                out.put_u8(c);
            }

            match conversion {
                Conversion::Char => out.put_u8(args.next_int() as u8),
                Conversion::Str => {
                    out.put_slice(args.next_str());
                    if !bare {
                        out.put_u8(0);
                    }
                }
                Conversion::Float => {
                    let value = args.next_double() as f32;
                    out.put_slice(&value.to_le_bytes());
                }
                Conversion::Int => {
                    // the directive always holds '%' before the specifier, so i >= 2
                    let mut width = IntWidth::from_modifiers(at(i - 2), at(i.wrapping_sub(3)));
                    let value = args.next_int();
                    if value as u32 <= u8::MAX as u32 {
                        out.tag_last();
                        width = IntWidth::Byte;
                    }
                    out.put_slice(&value.to_le_bytes()[..width.bytes()]);
                }
                Conversion::Star => out.put_u8(args.next_int() as u8),
                Conversion::Percent | Conversion::End | Conversion::Modifier => {}
            }

            if !conversion.is_terminal() {
                continue;
            }

            if conversion == Conversion::End {
                // step back so the outer loop sees the terminator
                i -= 1;
                summary.unterminated = true;
            } else {
                summary.directives += 1;
            }
            break;
        }
    }

    summary
}

/// Encode `fmt` with an already captured argument list
///
/// Returns the number of bytes written. Arguments are consumed from `args`
/// left to right, one per terminal specifier and one per `*`.
///
/// # Panics
///
/// Panics if `buf` is shorter than the encoded record. Use
/// [`encoded_len`] to size the buffer, or [`try_encode`] for a checked call.
/// A format/argument mismatch does not panic; see [`ArgList`] for how
/// mismatched arguments are coerced.
#[inline]
pub fn encode_with_list(buf: &mut [u8], fmt: &[u8], args: &mut ArgList<'_, '_>) -> usize {
    let mut writer = ByteWriter::new(buf);
    scan(&mut writer, fmt, args);
    writer.position()
}

/// Encode `fmt` with the given arguments
///
/// Same contract as [`encode_with_list`]; the [`defer_fmt!`](crate::defer_fmt)
/// macro builds the argument slice from plain values.
#[inline]
pub fn encode(buf: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> usize {
    encode_with_list(buf, fmt, &mut ArgList::new(args))
}

/// Exact number of bytes [`encode`] would write for this call
///
/// This is also the capacity `encode` needs: the writer never runs ahead of
/// the final record.
#[inline]
pub fn encoded_len(fmt: &[u8], args: &[Arg<'_>]) -> usize {
    let mut counter = LenCounter::new();
    scan(&mut counter, fmt, &mut ArgList::new(args));
    counter.position()
}

/// Check a call against its format string, returning the encoded size
fn validate(fmt: &[u8], args: &[Arg<'_>]) -> Result<usize> {
    let mut counter = LenCounter::new();
    let mut list = ArgList::new(args);
    let summary = scan(&mut counter, fmt, &mut list);

    let outcome = if summary.unterminated {
        Err(Error::MalformedFormat)
    } else if let Some(fault) = list.fault() {
        Err(fault)
    } else if list.remaining() > 0 {
        Err(Error::ExcessArguments)
    } else {
        Ok(counter.position())
    };

    #[cfg(feature = "tracing")]
    if let Err(error) = outcome {
        tracing::debug!(
            error = error.description(),
            directives = summary.directives,
            consumed = list.consumed(),
            supplied = args.len(),
            "rejected deferred format call"
        );
    }

    outcome
}

/// Checked variant of [`encode`]
///
/// Validates the whole call before writing anything: the format must not
/// end inside a directive, every directive must get an argument of its
/// kind, no argument may be left over, and `buf` must hold the record.
/// On success the bytes written are identical to [`encode`]'s.
pub fn try_encode(buf: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> Result<usize> {
    let required = validate(fmt, args)?;

    if required > buf.len() {
        #[cfg(feature = "tracing")]
        tracing::debug!(required, capacity = buf.len(), "deferred record does not fit");
        return Err(Error::ShortBuffer);
    }

    let written = encode(buf, fmt, args);
    debug_assert_eq!(written, required);

    #[cfg(feature = "tracing")]
    tracing::trace!(written, "encoded deferred record");

    Ok(written)
}

/// Encode into a freshly allocated, exactly sized vector
pub fn encode_to_vec(fmt: &[u8], args: &[Arg<'_>]) -> Result<Vec<u8>> {
    let required = validate(fmt, args)?;
    let mut out = vec![0u8; required];
    encode(&mut out, fmt, args);
    Ok(out)
}
