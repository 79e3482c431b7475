use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use kleene::shell::DEFAULT_MARKER;
use kleene::{DEFAULT_BUDGET, Limits, Shell, StdConsole};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Most characters a single match may consume
    #[arg(long, env = "KLEENE_BUDGET", default_value_t = DEFAULT_BUDGET)]
    budget: usize,

    /// Longest accepted pattern, in characters
    #[arg(long, env = "KLEENE_MAX_PATTERN_LEN", default_value_t = Limits::default().max_pattern_len)]
    max_pattern_len: usize,

    /// Longest accepted input line, in characters
    #[arg(long, env = "KLEENE_MAX_INPUT_LEN", default_value_t = Limits::default().max_input_len)]
    max_input_len: usize,

    /// Reject '*' over expressions that can match the empty string
    #[arg(short = 's', long)]
    strict: bool,

    /// Character printed after each match
    #[arg(short = 'm', long, default_value_t = DEFAULT_MARKER)]
    marker: char,

    /// Print the compiled tree for each pattern
    #[arg(long)]
    dump_ast: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("KLEENE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("kleene: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let shell = Shell {
        limits: Limits {
            max_pattern_len: args.max_pattern_len,
            max_input_len: args.max_input_len,
            budget: args.budget,
            strict_repetition: args.strict,
        },
        marker: args.marker,
        dump_ast: args.dump_ast,
    };
    tracing::debug!(?shell, "starting shell");

    shell.run(&mut StdConsole::new())
}
