//! Compression driver: greedy longest-match LZW over the trie codebook.

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::END_OF_STREAM;
use crate::Options;
use crate::error::Error;
use crate::trie::TrieCodebook;

/// Compresses `input` into `output` (appended to) as a policy bit followed by
/// variable-width codewords, terminated by the end-of-stream code.
///
/// Each codeword stands for the longest dictionary string matching the
/// upcoming input; every emission also registers that string plus its next
/// byte as a new entry, so the dictionary adapts to the data as it streams.
pub fn compress(input: &[u8], output: &mut Vec<u8>, opts: &Options) -> Result<(), Error> {
    opts.validate()?;

    let mut writer = BitWriter::endian(output, BigEndian);
    writer.write_bit(opts.reset_on_full)?;

    let mut codebook = TrieCodebook::new(opts);
    for &byte in input {
        if !codebook.advance(byte) {
            if let Some(code) = codebook.current_code() {
                writer.write(codebook.code_width(), code)?;
            }
            codebook.register();
            // Single bytes are always seeded, so the retry cannot fail.
            codebook.advance(byte);
        }
    }
    if let Some(code) = codebook.current_code() {
        writer.write(codebook.code_width(), code)?;
    }

    // The expander is fully caught up once it has consumed the codewords
    // above, so the terminator goes out at the width it will anticipate.
    writer.write(codebook.next_code_width(), END_OF_STREAM)?;
    writer.byte_align()?;
    Ok(())
}
