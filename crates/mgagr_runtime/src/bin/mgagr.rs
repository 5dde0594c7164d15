//! mgagr CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use mgagr_engine::{PronounceabilityMode, UnpackConfig};
use mgagr_runtime::{Session, report, serialize};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    file: Option<PathBuf>,
    exact: bool,
    no_consistency: bool,
    keep_duplicates: bool,
    max_variants: Option<usize>,
    parallel: bool,
    emit: Option<PathBuf>,
    show_input: bool,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

impl CliConfig {
    fn unpack_config(&self) -> UnpackConfig {
        let mut config = UnpackConfig::default()
            .with_consistency(!self.no_consistency)
            .with_deduplicate(!self.keep_duplicates)
            .with_parallel(self.parallel);
        if self.exact {
            config = config.with_pronounceability(PronounceabilityMode::Exact);
        }
        if let Some(limit) = self.max_variants {
            config = config.with_max_variants(limit);
        }
        config
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" => config.verbosity = config.verbosity.max(1),
            "-vv" => config.verbosity = 2,
            "--exact" => config.exact = true,
            "--no-consistency" => config.no_consistency = true,
            "--keep-duplicates" => config.keep_duplicates = true,
            "--parallel" => config.parallel = true,
            "--show-input" => config.show_input = true,
            "--max-variants" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-variants requires a value".into());
                }
                config.max_variants = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --max-variants value: {}", args[i]))?,
                );
            }
            "--emit" => {
                i += 1;
                if i >= args.len() {
                    return Err("--emit requires a path".into());
                }
                config.emit = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.file.is_some() {
                    return Err(format!("unexpected argument: {path}").into());
                }
                config.file = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Logs go to stderr so the listing on stdout stays clean.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("mgagr {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(file) = &config.file else {
        return Err("no lexicon file given (see --help)".into());
    };

    init_tracing(config.verbosity);

    let session = Session::load(file)?.with_config(config.unpack_config());

    if config.show_input {
        println!("\x1b[1;36m=== Input ===\x1b[0m");
        print!("{}", report::listing(session.lexicon().entries()));
        println!();
        println!("\x1b[1;36m=== Accepted ===\x1b[0m");
    }

    let outcome = session.run()?;
    print!("{}", report::accepted_listing(&outcome));
    eprintln!("{}", report::summary(&outcome.stats));

    if let Some(path) = &config.emit {
        serialize::save_to_file(&session.accepted(&outcome), path)?;
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mmgagr\x1b[0m - Agreement unpacking for minimalist grammar lexicons

\x1b[1mUSAGE:\x1b[0m
    mgagr [OPTIONS] <FILE>

\x1b[1mARGUMENTS:\x1b[0m
    <FILE>    Lexicon (.mg) to unpack

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -v, -vv              Log progress (info, debug) to stderr
    --exact              Require surface features to equal a morpheme's
    --no-consistency     Skip the consistency filter
    --keep-duplicates    Keep structurally identical variants
    --max-variants N     Fail if an entry would enumerate more than N variants
    --parallel           Unpack entries in parallel (needs the parallel feature)
    --emit PATH          Write the accepted lexicon as MessagePack
    --show-input         Print the input entries before the accepted ones

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG             Overrides the -v log filter

\x1b[1mEXAMPLES:\x1b[0m
    mgagr english.mg                     List accepted variants
    mgagr --exact english.mg             Pin each variant to one realization
    mgagr --max-variants 10000 big.mg    Guard against blow-up
    mgagr --emit out.msgpack english.mg  Save for the grammar compiler"
    );
}
