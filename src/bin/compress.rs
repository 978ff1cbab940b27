//! Huffman-compress a file: `compress <input> <output>`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "compress", about = "Huffman-compress a file")]
struct Args {
    /// File to compress.
    input: PathBuf,
    /// Destination for the compressed stream.
    output: PathBuf,
}

fn run(args: &Args) -> huff::Result<()> {
    let data = fs::read(&args.input)?;
    let unique = huff::count_frequencies(&data)
        .iter()
        .filter(|&&f| f > 0)
        .count();

    let mut out = BufWriter::new(File::create(&args.output)?);
    huff::compress(&data, &mut out)?;
    out.flush()?;

    println!(
        "compressed {} ({} bytes, {} unique symbols) -> {}",
        args.input.display(),
        data.len(),
        unique,
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    // try_parse instead of parse: argument errors must exit 1, not clap's 2.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("compress: {err}");
            ExitCode::FAILURE
        }
    }
}
