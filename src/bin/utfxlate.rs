use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use tracing_subscriber::prelude::*;
use utfxlate_rs::{Encoding, TranscodingReader};

fn usage(me: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("{} <from> <to> [infile] [outfile]", me);
    eprintln!("  Transcodes [infile] (or stdin) from <from> to <to>, writing to [outfile] (or stdout).");
    eprintln!("  <from>/<to> are one of: narrow utf8 utf16be utf16le utf32be utf32le");
    eprintln!("{} --allow-fallback <from> <to> [infile] [outfile]", me);
    eprintln!("  Same, but substitutes '?' instead of erroring on undecodable/unencodable data.");
    std::process::exit(1);
}

fn parse_encoding(name: &str) -> Option<Encoding> {
    match name {
        "narrow" => Some(Encoding::Narrow),
        "utf8" => Some(Encoding::Utf8),
        "utf16be" => Some(Encoding::Utf16Be),
        "utf16le" => Some(Encoding::Utf16Le),
        "utf32be" => Some(Encoding::Utf32Be),
        "utf32le" => Some(Encoding::Utf32Le),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args: Vec<String> = std::env::args().collect();
    let me = args[0].clone();

    let mut allow_fallback = false;
    if args.len() > 1 && args[1] == "--allow-fallback" {
        allow_fallback = true;
        args.remove(1);
    }

    if !(3..=5).contains(&args.len()) {
        usage(&me);
    }

    let from = parse_encoding(&args[1]).unwrap_or_else(|| usage(&me));
    let to = parse_encoding(&args[2]).unwrap_or_else(|| usage(&me));

    let input: Box<dyn io::Read> = match args.get(3).map(String::as_str) {
        None | Some("-") => Box::new(io::stdin()),
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(|e| {
            eprintln!("Failed to open {}: {}", path, e);
            e
        })?)),
    };
    let mut output: Box<dyn io::Write> = match args.get(4).map(String::as_str) {
        None | Some("-") => Box::new(io::stdout()),
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            eprintln!("Failed to create {}: {}", path, e);
            e
        })?)),
    };

    let mut reader = TranscodingReader::new(input, from, to);
    reader.set_allow_fallback(allow_fallback);
    io::copy(&mut reader, &mut output)?;
    output.flush()
}
