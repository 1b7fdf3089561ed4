//! SYML command-line tool for validating SYML documents and dumping them.
//!
//! Usage: syml [OPTIONS] <FILE>
//!
//! Options:
//!   -t, --to <FORMAT>      Dump format (json, yaml, toml) [default: json]
//!   --check                Check if file is valid (exit 0 if valid, 1 if invalid)
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! `-` as FILE reads the document from stdin.

use clap::{Parser, ValueEnum};
use libsyml::{parse, to_json, Document};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

mod transcode;

/// Parse a SYML file and print its top-level keys as JSON, YAML, or TOML.
#[derive(Parser)]
#[command(name = "syml", version, about, long_about = None)]
struct Cli {
    /// Input file (`-` for stdin)
    file: PathBuf,

    /// Dump format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    to: Format,

    /// Only check that the file parses (exit 0 if valid, 1 if invalid)
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let input = match read_input(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let doc = match parse(&input) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return 1;
        }
    };

    if cli.check {
        println!("{}: ok", cli.file.display());
        return 0;
    }

    let output = match render(&doc, cli.to) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: Cannot convert to {}: {}", cli.to.name(), e);
            return 1;
        }
    };

    let noun = if doc.len() == 1 { "key" } else { "keys" };
    println!("Parsed {} top-level {}:", doc.len(), noun);
    print!("{}", output);
    // Ensure output ends with newline
    if !output.ends_with('\n') {
        println!();
    }
    0
}

/// Read the whole document before parsing; `-` means stdin.
fn read_input(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("reading stdin: {}", e))?;
        return Ok(buffer);
    }

    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => format!("File not found: {}", path.display()),
        _ => format!("reading {}: {}", path.display(), e),
    })
}

fn render(doc: &Document, format: Format) -> Result<String, String> {
    match format {
        Format::Json => Ok(to_json(doc)),
        Format::Yaml => transcode::yaml::encode(doc),
        Format::Toml => transcode::toml::encode(doc),
    }
}
