use clap::{Parser, Subcommand};

use compose_cli::commands::{lookup_ops, replay_ops, table_ops};
use compose_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "composetool", about = "Compose sequence table diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show whether keystrokes are a complete sequence, a prefix, or neither
    Lookup {
        /// Keystrokes typed so far
        input: String,
    },
    /// List registered sequences
    List {
        /// Only list sequences starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the embedded sequence table TOML
    Export,
    /// Check a sequence table TOML for authoring defects
    Validate {
        /// Path to the TOML file (default: the embedded table)
        file: Option<String>,
    },
    /// Run keystrokes through compose mode and print the result
    Replay {
        /// Keystrokes to replay
        keys: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Lookup { input } => lookup_ops::lookup(&input),
        Command::List { prefix, json } => table_ops::list(prefix.as_deref(), json),
        Command::Export => table_ops::export(),
        Command::Validate { file } => table_ops::validate_file(file.as_deref()),
        Command::Replay { keys } => replay_ops::replay_cmd(&keys),
    }
}
