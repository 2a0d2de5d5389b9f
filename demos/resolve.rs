//! An example to resolve URI references against a base URI.

use uri_norm::resolve::resolve_reference;
use uri_norm::types::UriReference;

const USAGE: &str = "\
USAGE:
    resolve [FLAGS] [--] BASE REFERENCE...

FLAGS:
    -h, --help      Prints this help
    -v, --verbose   Logs resolution steps to stderr

ARGS:
    <BASE>          Absolute base URI
    <REFERENCE>...  URI references to resolve
";

fn print_help() {
    eprintln!("{}", USAGE);
}

fn help_and_exit() -> ! {
    print_help();
    std::process::exit(1);
}

fn die(msg: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}", msg);
    eprintln!();
    print_help();
    std::process::exit(1);
}

/// CLI options.
#[derive(Default, Debug, Clone)]
struct CliOpt {
    /// Base URI.
    base: String,
    /// References.
    references: Vec<String>,
    /// Whether to log resolution steps.
    verbose: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut positional = Vec::new();
        let mut verbose = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => positional.push(arg),
            }
        }
        positional.extend(args);

        let mut positional = positional.into_iter();
        let base = positional
            .next()
            .unwrap_or_else(|| die("Base URI should be specified"));
        let references: Vec<_> = positional.collect();
        if references.is_empty() {
            die("At least one reference should be specified");
        }
        Self {
            base,
            references,
            verbose,
        }
    }
}

/// Installs a subscriber printing `trace` events to stderr.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn main() {
    let opt = CliOpt::parse();
    if opt.verbose {
        init_logging();
    }

    let base = match UriReference::parse(&opt.base) {
        Ok(UriReference::Absolute(uri)) => uri,
        Ok(UriReference::Relative(_)) => die(format_args!("Base {:?} is not absolute", opt.base)),
        Err(e) => die(format_args!("Failed to parse {:?}: {}", opt.base, e)),
    };
    println!("base: {}", base);

    for raw in &opt.references {
        let resolved = UriReference::parse(raw)
            .and_then(|reference| resolve_reference(base.as_ref(), &reference));
        match resolved {
            Ok(uri) => println!("{} -> {}", raw, uri),
            Err(e) => println!("{} -> ERROR: {}", raw, e),
        }
    }
}
