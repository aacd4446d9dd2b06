//! Command-line front end: load XML files, query them by qualified name, and
//! print the results.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use xmlx::error::LoadError;
use xmlx::parser::ParseOptions;
use xmlx::{Document, NodeId, ANY_NAMESPACE};

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// xmlx -- load XML files and query them by qualified name.
#[derive(Parser, Debug)]
#[command(name = "xmlx", version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// XML files to process (use `-` for stdin).
    #[arg(required = true)]
    files: Vec<String>,

    /// Namespace used by --select and --value (`*` matches any).
    #[arg(long, short = 'n', default_value = ANY_NAMESPACE)]
    namespace: String,

    /// Print every element with this local name (outermost matches only).
    #[arg(long, short = 's', value_name = "NAME")]
    select: Option<String>,

    /// With --select, stop at the first match.
    #[arg(long, requires = "select")]
    first: bool,

    /// Print the text value of the first element with this local name.
    #[arg(long, value_name = "NAME")]
    value: Option<String>,

    /// Print this attribute of each selected element (or of the document element).
    #[arg(long, value_name = "NAME")]
    attr: Option<String>,

    /// Namespace used by --attr (`*` matches any).
    #[arg(long, value_name = "NS", default_value = ANY_NAMESPACE)]
    attr_namespace: String,

    /// Print the number of matches instead of the matches.
    #[arg(long, requires = "select")]
    count: bool,

    /// Keep whitespace around text instead of trimming it.
    #[arg(long)]
    keep_blanks: bool,

    /// Drop comments while loading.
    #[arg(long)]
    no_comments: bool,

    /// Do not print the document when no query is given.
    #[arg(long)]
    noout: bool,
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_SUCCESS: u8 = 0;
const EXIT_LOAD_ERROR: u8 = 1;
const EXIT_NO_MATCH: u8 = 2;

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = parse_options(&cli);

    let mut worst_exit = EXIT_SUCCESS;
    for file in &cli.files {
        let exit = process_file(&cli, &options, file);
        worst_exit = worst_exit.max(exit);
    }

    ExitCode::from(worst_exit)
}

fn parse_options(cli: &Cli) -> ParseOptions {
    ParseOptions::default()
        .trim_text(!cli.keep_blanks)
        .keep_comments(!cli.no_comments)
}

/// Loads and queries a single input file, returning an exit code.
fn process_file(cli: &Cli, options: &ParseOptions, filename: &str) -> u8 {
    let doc = match load(filename, options) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{filename}: {err}");
            return EXIT_LOAD_ERROR;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let exit = report(cli, filename, &doc, &mut out);
    let _ = out.flush();
    exit
}

fn load(filename: &str, options: &ParseOptions) -> Result<Document, LoadError> {
    if filename != "-" {
        return Document::load_file_with_options(filename, options);
    }

    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .map_err(|source| LoadError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(Document::parse_bytes_with_options(&buf, options)?)
}

/// Runs the queries against `doc` and maps the outcome to an exit code.
fn report(cli: &Cli, filename: &str, doc: &Document, out: &mut impl Write) -> u8 {
    match query(cli, doc, out) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_NO_MATCH,
        Err(err) => {
            eprintln!("{filename}: {err}");
            EXIT_LOAD_ERROR
        }
    }
}

/// Runs the requested queries. Returns `Ok(false)` when a query found nothing.
fn query(cli: &Cli, doc: &Document, out: &mut impl Write) -> io::Result<bool> {
    let ns = cli.namespace.as_str();
    let mut matched = true;

    if let Some(name) = &cli.value {
        matched &= doc.select_node(doc.root(), ns, name).is_some();
        writeln!(out, "{}", doc.value_str(doc.root(), ns, name))?;
    }

    let targets: Vec<NodeId> = match &cli.select {
        Some(name) if cli.first => doc.select_node(doc.root(), ns, name).into_iter().collect(),
        Some(name) => doc.select_nodes(doc.root(), ns, name),
        None => doc.root_element().into_iter().collect(),
    };

    if cli.count {
        writeln!(out, "{}", targets.len())?;
        return Ok(matched && !targets.is_empty());
    }

    if let Some(attr) = &cli.attr {
        matched &= !targets.is_empty();
        let attr_ns = cli.attr_namespace.as_str();
        for &id in &targets {
            if doc.has_attr(id, attr_ns, attr) {
                writeln!(out, "{}", doc.attr_str(id, attr_ns, attr))?;
            } else {
                matched = false;
            }
        }
        return Ok(matched);
    }

    if cli.select.is_some() {
        matched &= !targets.is_empty();
        for &id in &targets {
            writeln!(out, "{}", doc.display(id))?;
        }
    } else if cli.value.is_none() && !cli.noout {
        writeln!(out, "{}", doc.display(doc.root()))?;
    }

    Ok(matched)
}
