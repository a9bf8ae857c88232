//! `pdfpages` — dump the text of every page of a PDF into a text file.
//!
//! Each page becomes a block headed by `--- PAGE n ---`; blocks are
//! separated by a blank line. Text extraction itself is delegated to
//! `pdf-extract`.

#![allow(clippy::redundant_pub_crate)]

mod error;
mod paths;
mod pdf;
mod render;

use error::Result;
use pdf::{Document, ExtractBackend, PdfReader};

use std::io::{self, Write};
use std::path::Path;
use std::process;

const USAGE: &str = "Usage: pdfpages <input.pdf> [output.txt]";

const HELP: &str = "\
pdfpages - write the text of every page of a PDF to a text file

Usage: pdfpages [OPTIONS] <input.pdf> [output.txt]

Options:
  -h, --help        Show this help
  -V, --version     Show version information
  --                Treat every following argument as a path

Each page is written as a block starting with `--- PAGE n ---`, blocks
separated by a blank line. Pages without extractable text are kept with an
empty body.

When output.txt is omitted the text goes next to the input, with the
extension replaced by .extracted.txt (report.pdf -> report.extracted.txt).
An existing output file is overwritten.

Set RUST_LOG=debug for diagnostic logging on stderr.";

/// Exit status for usage errors and a missing input file.
const EXIT_USAGE: i32 = 2;

/// Exit status when the document cannot be read or the output written.
const EXIT_FAILURE: i32 = 1;

/// What the command line asks for.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Extract {
        input: String,
        output: Option<String>,
    },
}

/// Problems with the command line itself.
#[derive(Debug, PartialEq)]
enum ArgsError {
    MissingInput,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = run(
        &args,
        &ExtractBackend,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    process::exit(code);
}

fn parse_args(args: &[String]) -> std::result::Result<Command, ArgsError> {
    let mut positional: Vec<&String> = Vec::new();
    let mut options_done = false;

    for arg in args {
        if options_done {
            positional.push(arg);
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--" => options_done = true,
            // Anything else, dashes included, names a file.
            _ => positional.push(arg),
        }
    }

    // Anything past the output path is ignored.
    let mut positional = positional.into_iter();
    let input = positional.next().ok_or(ArgsError::MissingInput)?.clone();
    let output = positional.next().cloned();
    Ok(Command::Extract { input, output })
}

/// Run the program and return its exit status.
fn run<R, O, E>(args: &[String], reader: &R, out: &mut O, err: &mut E) -> i32
where
    R: PdfReader,
    O: Write,
    E: Write,
{
    let (input, output) = match parse_args(args) {
        Ok(Command::Help) => {
            let _ = writeln!(out, "{HELP}");
            return 0;
        }
        Ok(Command::Version) => {
            let _ = writeln!(out, "pdfpages {}", env!("CARGO_PKG_VERSION"));
            return 0;
        }
        Ok(Command::Extract { input, output }) => (input, output),
        Err(ArgsError::MissingInput) => {
            let _ = writeln!(err, "{USAGE}");
            return EXIT_USAGE;
        }
    };

    let input_path = match paths::resolve(&input) {
        Ok(p) => p,
        Err(e) => {
            let _ = writeln!(err, "pdfpages: {input}: {e}");
            return EXIT_FAILURE;
        }
    };
    log::debug!("input: {}", input_path.display());

    if !input_path.exists() {
        let _ = writeln!(err, "Input file not found: {}", input_path.display());
        return EXIT_USAGE;
    }

    let output_path = match output {
        Some(raw) => match paths::resolve(&raw) {
            Ok(p) => p,
            Err(e) => {
                let _ = writeln!(err, "pdfpages: {raw}: {e}");
                return EXIT_FAILURE;
            }
        },
        None => paths::default_output(&input_path),
    };
    log::debug!("output: {}", output_path.display());

    match extract(reader, &input_path, &output_path) {
        Ok(pages) => match writeln!(out, "Wrote {pages} pages to {}", output_path.display()) {
            Ok(()) => 0,
            Err(e) => {
                let _ = writeln!(err, "pdfpages: stdout: {e}");
                EXIT_FAILURE
            }
        },
        Err(e) => {
            let _ = writeln!(err, "pdfpages: {}: {e}", input_path.display());
            EXIT_FAILURE
        }
    }
}

/// Open `input`, render all its pages and write them to `output`.
/// Returns the page count.
fn extract<R: PdfReader>(reader: &R, input: &Path, output: &Path) -> Result<usize> {
    let doc = reader.open(input)?;
    let text = render::render_document(&doc)?;
    render::write_output(output, &text)?;
    Ok(doc.page_count())
}
