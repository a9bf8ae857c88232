use man::prelude::*;
use std::path::Path;

fn main() {
    let page = Manual::new("pdfpages")
        .about("write the text of every page of a PDF to a text file")
        .flag(
            Flag::new()
                .short("-h")
                .long("--help")
                .help("Show help information."),
        )
        .flag(
            Flag::new()
                .short("-V")
                .long("--version")
                .help("Show version information."),
        )
        .arg(Arg::new("INPUT.pdf"))
        .arg(Arg::new("[OUTPUT.txt]"))
        .custom(
            Section::new("description")
                .paragraph(
                    "pdfpages extracts the text of each page of INPUT.pdf and \
                     writes it to OUTPUT.txt. Every page becomes a block that \
                     starts with a \\fB--- PAGE n ---\\fR line, n counting from \
                     1; blocks are separated by one blank line. Pages without \
                     extractable text are kept with an empty body.",
                )
                .paragraph(
                    "When OUTPUT.txt is omitted the output is written next to \
                     the input with its extension replaced by \
                     \\fB.extracted.txt\\fR. Both paths may start with ~. An \
                     existing output file is overwritten.",
                )
                .paragraph(
                    "On success a single line, \\fBWrote N pages to PATH\\fR, \
                     is printed to standard output.",
                ),
        )
        .custom(
            Section::new("exit status")
                .paragraph("\\fB0\\fR  the output file was written.")
                .paragraph("\\fB1\\fR  the PDF could not be read or the output could not be written.")
                .paragraph("\\fB2\\fR  missing input argument or input file not found."),
        )
        .example(
            Example::new()
                .text("Extract next to the input (writes report.extracted.txt)")
                .command("pdfpages report.pdf"),
        )
        .example(
            Example::new()
                .text("Choose the output file")
                .command("pdfpages ~/papers/draft.pdf draft.txt"),
        )
        .custom(Section::new("environment").paragraph(
            "\\fBRUST_LOG\\fR controls diagnostic logging on standard error \
             (for example RUST_LOG=debug).",
        ))
        .custom(Section::new("see also").paragraph("pdftotext(1)"))
        .render();

    // Write to OUT_DIR (standard cargo output directory)
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("pdfpages.1");
    std::fs::write(&out_path, &page).unwrap();

    // Also write to target/man/ so packaging scripts have a stable path
    // that doesn't depend on the hash-based OUT_DIR.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let man_dir = Path::new(&manifest_dir).join("target").join("man");
    std::fs::create_dir_all(&man_dir).unwrap();
    std::fs::write(man_dir.join("pdfpages.1"), &page).unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
