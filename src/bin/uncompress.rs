//! Restore a Huffman-compressed file: `uncompress <input> <output>`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "uncompress", about = "Restore a Huffman-compressed file")]
struct Args {
    /// Compressed file to restore.
    input: PathBuf,
    /// Destination for the original bytes.
    output: PathBuf,
}

fn run(args: &Args) -> huff::Result<()> {
    let input = BufReader::new(File::open(&args.input)?);
    let mut out = BufWriter::new(File::create(&args.output)?);
    let restored = huff::decompress(input, &mut out)?;
    out.flush()?;

    println!(
        "restored {} bytes from {} -> {}",
        restored,
        args.input.display(),
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
            eprintln!("uncompress: {err}");
            ExitCode::FAILURE
        }
    }
}
