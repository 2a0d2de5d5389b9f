//! An example to parse and normalize a URI reference from the CLI argument.

use uri_norm::types::{Reference, UriReference};

const USAGE: &str = "\
USAGE:
    parse [FLAGS] [--] URI

FLAGS:
    -h, --help      Prints this help
    -v, --verbose   Logs parser diagnostics to stderr

ARGS:
    <URI>           URI reference
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
    /// URI reference.
    uri: String,
    /// Whether to log diagnostics.
    verbose: bool,
}

impl CliOpt {
    fn parse() -> Self {
        let mut args = std::env::args();
        // Skip `argv[0]`.
        args.next();

        let mut uri = None;
        let mut verbose = false;

        for arg in args.by_ref() {
            match arg.as_str() {
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => help_and_exit(),
                "--" => break,
                opt if opt.starts_with('-') => die(format_args!("Unknown option: {}", opt)),
                _ => {
                    if uri.replace(arg).is_some() {
                        die("URI can be specified at most once");
                    }
                }
            }
        }

        for arg in args {
            if uri.replace(arg).is_some() {
                die("URI can be specified at most once");
            }
        }

        let uri = uri.unwrap_or_else(|| die("URI should be specified"));
        Self { uri, verbose }
    }
}

/// Installs a subscriber printing `debug` events to stderr.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
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

    let raw = opt.uri.as_str();
    let reference = match UriReference::parse(raw) {
        Ok(v) => v,
        Err(e) => die(format_args!("Failed to parse {:?}: {}", raw, e)),
    };
    println!("Normalized: {}", reference);

    match reference.as_absolute() {
        Some(uri) => println!("Absolute URI, scheme {:?}.", uri.scheme()),
        None => println!("Relative reference."),
    }
    println!("  user info: {:?}", reference.user_info());
    println!("  host:      {:?}", reference.host());
    println!("  port:      {:?}", reference.port());
    println!("  path:      {:?}", reference.path_segments());
    println!("  query:     {:?}", reference.query());
    println!("  fragment:  {:?}", reference.fragment());
    if let Some(Ok(pairs)) = reference.query_pairs() {
        for (key, value) in pairs {
            println!("    {:?} = {:?}", key, value);
        }
    }
}
