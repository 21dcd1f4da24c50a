#![no_main]

use libfuzzer_sys::fuzz_target;
use varlzw::{Options, compress, decompress};

/// Feeds arbitrary bytes straight to the expander.
///
/// Corrupted or random input must come back as `Ok(_)` or `Err(_)`; the
/// expander may never panic, whatever the bits decode to.
fn verify_decompression_robustness(data: &[u8], opts: &Options) {
    let mut output = Vec::new();
    let _ = decompress(data, &mut output, opts);
}

/// Verifies the lossless round-trip property, `decompress(compress(data)) ==
/// data`, under both full-table policies.
///
/// A mismatch means the compressor dropped information, the expander
/// corrupted it, or the two sides' dictionaries fell out of lockstep.
fn verify_round_trip(data: &[u8], opts: &Options) {
    let mut compressed = Vec::new();
    compress(data, &mut compressed, opts).expect("compression failed");

    let mut decompressed = Vec::new();
    match decompress(&compressed, &mut decompressed, opts) {
        Ok(()) => assert_eq!(
            decompressed,
            data,
            "round-trip mismatch (input len {}, compressed len {})",
            data.len(),
            compressed.len()
        ),
        Err(e) => panic!(
            "expander rejected valid compressed data: {e:?} (input len {})",
            data.len()
        ),
    }
}

fuzz_target!(|data: &[u8]| {
    // Narrow widths make the full-table paths reachable from small inputs.
    let freeze = Options {
        min_code_width: 9,
        max_code_width: 10,
        reset_on_full: false,
    };
    let reset = Options {
        reset_on_full: true,
        ..freeze
    };

    verify_decompression_robustness(data, &freeze);
    verify_round_trip(data, &freeze);
    verify_round_trip(data, &reset);
});
