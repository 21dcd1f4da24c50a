//! Expansion driver: rebuilds the byte stream from variable-width codewords,
//! mirroring the compressor's dictionary insertions one codeword behind.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::END_OF_STREAM;
use crate::Options;
use crate::error::Error;
use crate::table::TableCodebook;

/// Expands a stream produced by [`compress`](crate::compress::compress) into `output`
/// (appended to). `opts` supplies the width bounds; the full-table policy is
/// taken from the stream header, not from `opts`.
///
/// Fails on a stream that ends before the end-of-stream code or that contains
/// a codeword the dictionary cannot have assigned yet.
pub fn decompress(input: &[u8], output: &mut Vec<u8>, opts: &Options) -> Result<(), Error> {
    opts.validate()?;

    let mut reader = BitReader::endian(Cursor::new(input), BigEndian);
    let reset_on_full = reader.read_bit().map_err(|_| Error::UnexpectedEof)?;

    let run = Options {
        reset_on_full,
        ..*opts
    };
    let mut codebook = TableCodebook::new(&run);

    let first = reader
        .read::<u32>(codebook.next_code_width())
        .map_err(|_| Error::UnexpectedEof)?;
    if first == END_OF_STREAM {
        return Ok(());
    }
    // The first codeword predates any insertion, so it must already be seeded.
    let mut val: Vec<u8> = codebook.lookup(first)?.to_vec();

    loop {
        output.extend_from_slice(&val);

        let code = reader
            .read::<u32>(codebook.next_code_width())
            .map_err(|_| Error::UnexpectedEof)?;
        if code == END_OF_STREAM {
            break;
        }

        // The compressor registers one entry ahead of us. A codeword equal to
        // our entry count names the entry we are about to mirror, which by
        // construction is the current string extended with its own first byte.
        let step: Vec<u8> = if code == codebook.next_code() {
            let mut step = val.clone();
            step.push(val[0]);
            step
        } else {
            codebook.lookup(code)?.to_vec()
        };

        let mut entry = val;
        entry.push(step[0]);
        codebook.insert(entry);

        val = step;
    }

    Ok(())
}
