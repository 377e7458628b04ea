use std::{
    fs,
    io::{self, Read},
};

use clap::{ArgAction, Parser};
use linepad::{Document, Options, util::num::{DEFAULT_PRECISION, format_number}};
use tracing_subscriber::EnvFilter;

/// linepad evaluates a notepad of calculations: one expression or assignment
/// per line, with `#N` referring to the result of line N.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linepad to read the document from a file instead of the
    /// argument itself.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of fractional digits shown in results (at most 20).
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Print the variables defined by the document after the results.
    #[arg(short, long)]
    scope: bool,

    /// Log more detail to stderr (-v for passes, -vv for every line).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The document, a path with `--file`, or `-` to read from stdin.
    contents: String,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let text = read_document(&args).unwrap_or_else(|e| {
                                       eprintln!("Failed to read the document '{}': {e}",
                                                 &args.contents);
                                       std::process::exit(1);
                                   });
    let text = text.strip_suffix('\n').unwrap_or(&text);
    let text = text.strip_suffix('\r').unwrap_or(text);

    let mut document = Document::new(Options { precision: args.precision });
    document.set_text(text);
    println!("{}", document.render());

    if args.scope {
        println!();
        for (name, value) in document.variables() {
            println!("{name} = {}", format_number(value, args.precision));
        }
    }
}

fn read_document(args: &Args) -> io::Result<String> {
    if args.contents == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else if args.file {
        fs::read_to_string(&args.contents)
    } else {
        Ok(args.contents.clone())
    }
}

/// Installs the stderr logger. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("linepad={level}")));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(true)
                             .init();
}
