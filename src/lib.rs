//! # Adaptive-Width LZW
//!
//! `varlzw` is a safe, pure-Rust implementation of LZW compression in which
//! the codeword width grows with the dictionary. Codewords start at
//! `min_code_width` bits and widen one bit at a time as entries accumulate,
//! up to `max_code_width`. When the dictionary fills at the widest width, a
//! run-wide policy decides whether it starts over from the seeded byte
//! alphabet or freezes and keeps encoding with the entries it has.
//!
//! The compressed stream is a single policy bit followed by codewords packed
//! most-significant-bit-first, terminated by the reserved end-of-stream code.
//! Compressor and expander never exchange widths; each derives the width of
//! the next codeword from its own dictionary state, which both sides advance
//! through identical deterministic transitions.
//!
//! ## Example
//!
//! ```rust
//! use varlzw::{Options, compress, decompress};
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let mut packed = Vec::new();
//! compress(data, &mut packed, &Options::default()).expect("compression failed");
//!
//! let mut restored = Vec::new();
//! decompress(&packed, &mut restored, &Options::default()).expect("expansion failed");
//! assert_eq!(restored, data);
//! ```

#![forbid(unsafe_code)]

pub mod compress;
pub mod decompress;
pub mod error;
mod policy;
mod table;
mod trie;

pub use compress::compress;
pub use decompress::decompress;
pub use error::Error;

/// Number of distinct input symbols. Codewords `0..ALPHABET_SIZE` always mean
/// the corresponding single byte, in both fresh and reseeded dictionaries.
pub(crate) const ALPHABET_SIZE: usize = 256;

/// Reserved codeword marking end of stream, one past the byte alphabet.
/// Occupies a dictionary slot but is never assigned to data.
pub(crate) const END_OF_STREAM: u32 = ALPHABET_SIZE as u32;

/// Narrowest usable codeword width. The seeded alphabet plus the end-of-stream
/// code occupy 257 slots, which need nine bits.
pub const MIN_CODE_WIDTH: u32 = 9;

/// Widest supported codeword width; bounds the expansion table's index space.
pub const MAX_CODE_WIDTH: u32 = 24;

/// Knobs for a compression or expansion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Codeword width in bits at the start of each dictionary epoch.
    pub min_code_width: u32,
    /// Widest the codewords are allowed to grow.
    pub max_code_width: u32,
    /// Whether a dictionary that fills at the widest width starts over from
    /// the seeded alphabet (`true`) or freezes (`false`). The compressor
    /// records this in the stream header; the expander follows the stream,
    /// not this field.
    pub reset_on_full: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_code_width: MIN_CODE_WIDTH,
            max_code_width: 16,
            reset_on_full: false,
        }
    }
}

impl Options {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.min_code_width < MIN_CODE_WIDTH
            || self.max_code_width > MAX_CODE_WIDTH
            || self.min_code_width > self.max_code_width
        {
            return Err(Error::InvalidWidths {
                min: self.min_code_width,
                max: self.max_code_width,
            });
        }
        Ok(())
    }
}
