//! varlzw CLI
//! Usage:
//!   varlzw compress [-r|-n] <input_file> <output_file>
//!   varlzw expand   <input_file> <output_file>
//!
//! `-r` resets the dictionary when it fills at the widest codeword width,
//! `-n` (the default) freezes it instead. The choice is recorded in the
//! stream, so `expand` needs no flag.

use std::{env, fs, process};

use varlzw::{Options, compress, decompress};

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  varlzw compress [-r|-n] <input> <output>");
    eprintln!("  varlzw expand   <input> <output>");
    process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let command = args[1].as_str();
    let mut opts = Options::default();

    let (input_path, output_path) = match command {
        "compress" => match args.len() {
            4 => (&args[2], &args[3]),
            5 => {
                match args[2].as_str() {
                    "-r" => opts.reset_on_full = true,
                    "-n" => opts.reset_on_full = false,
                    _ => usage(),
                }
                (&args[3], &args[4])
            }
            _ => usage(),
        },
        "expand" => {
            if args.len() == 4 {
                (&args[2], &args[3])
            } else {
                usage()
            }
        }
        _ => usage(),
    };

    let input = fs::read(input_path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", input_path, e);
        process::exit(1);
    });

    let mut output = Vec::new();
    let result = match command {
        "compress" => compress(&input, &mut output, &opts),
        _ => decompress(&input, &mut output, &opts),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    fs::write(output_path, &output).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {}", output_path, e);
        process::exit(1);
    });

    println!("Done. {} bytes → {} bytes", input.len(), output.len());
}
