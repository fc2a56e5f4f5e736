//! deferfmt: deferred printf-style formatting
//!
//! This crate encodes a printf-style format string together with its
//! arguments into a compact binary record, so the expensive textual
//! formatting can happen later: off the hot path, on the other side of a
//! transport, or when a ring buffer is dumped post-mortem.
//!
//! Encoding is reentrant and allocation-free. It holds no state between
//! calls and touches nothing but its arguments and the caller's buffer,
//! so it can run concurrently from any number of threads or interrupt
//! contexts on distinct buffers.
//!
//! # Record Format
//!
//! ```text
//! +----------------+-----------------------------------------------+
//! | literal text   | copied verbatim                               |
//! | 0xA5           | directive marker ('%' | 0x80)                 |
//! | modifiers      | flags, width, precision, length, verbatim     |
//! | specifier      | conversion char, | 0x80 for 1-byte integers   |
//! | payload        | argument bytes, little-endian                 |
//! +----------------+-----------------------------------------------+
//! ```
//!
//! A bare `%c` or `%s` drops its marker and specifier and stores only the
//! payload. See [`encoder`] for the per-conversion layout.
//!
//! # Features
//!
//! - Single pass over the format string, no allocation
//! - Integers that fit one unsigned byte are stored in one byte
//! - Checked variant that rejects malformed calls before writing
//! - Optional `tracing` diagnostics on the checked path
//! - `no_std` support with `alloc`
//!
//! # Example
//!
//! ```rust
//! use deferfmt::*;
//!
//! let mut buf = [0u8; 64];
//! let size = defer_fmt!(&mut buf, "temp=%d.%hhu %s", 21, 5u8, "ok");
//!
//! assert_eq!(size, encoded_len(b"temp=%d.%hhu %s", &[Arg::from(21), Arg::from(5u8), Arg::from("ok")]));
//! assert_eq!(&buf[..5], b"temp=");
//! assert_eq!(buf[5], MARKER);
//!
//! // checked variant
//! let size = try_defer_fmt!(&mut buf, "%f", 3.5)?;
//! assert_eq!(&buf[..size], &[MARKER, b'f', 0x00, 0x00, 0x60, 0x40]);
//! # Ok::<(), deferfmt::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod arg;
pub mod conversion;
pub mod encoder;
pub mod error;
pub mod writer;

// Re-export main types
pub use arg::{Arg, ArgList};
pub use conversion::{Conversion, IntWidth};
pub use encoder::{encode, encode_to_vec, encode_with_list, encoded_len, try_encode};
pub use error::Error;
pub use writer::{ByteWriter, LenCounter, Sink};

/// High bit used to tag directive bytes
pub const SIZE_HINT: u8 = 0x80;

/// Directive marker byte ('%' with the high bit set)
pub const MARKER: u8 = b'%' | SIZE_HINT;

/// Payload size of a float-family directive
pub const FLOAT_PAYLOAD_SIZE: usize = 4;

/// Largest integer payload (wider C types are not supported)
pub const MAX_INT_PAYLOAD_SIZE: usize = 4;

/// Encode a format string and its arguments into a buffer
///
/// Each argument is converted with [`Arg::from`]. Expands to a call to
/// [`encode`] and evaluates to the number of bytes written.
///
/// # Panics
///
/// Panics if the buffer cannot hold the record.
#[macro_export]
macro_rules! defer_fmt {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::encode(
            $buf,
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

/// Checked form of [`defer_fmt!`]
///
/// Expands to a call to [`try_encode`] and evaluates to `Result<usize>`.
#[macro_export]
macro_rules! try_defer_fmt {
    ($buf:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::try_encode(
            $buf,
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::Arg::from($arg)),*],
        )
    };
}
