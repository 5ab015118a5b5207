mod cmd;

use clap::{Parser, Subcommand};
use cmd::encode::OutputFormat;
use cmd::keycodes::GroupArg;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "keymacro",
    about = "Encode keyboard macros into the Vial macro wire format",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a keymacro.toml file into a padded macro buffer
    Encode {
        /// Path of the macro file
        file: PathBuf,

        /// Override `keymacro.vial_protocol` from the file
        #[arg(long)]
        protocol: Option<u32>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List the keycodes usable in macro sequences
    Keycodes {
        /// Only list one group of the catalog
        #[arg(long, value_enum)]
        group: Option<GroupArg>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Encode {
            file,
            protocol,
            format,
            output,
        } => cmd::encode::run(&file, protocol, format, output.as_deref()),
        Commands::Keycodes { group } => cmd::keycodes::run(group),
    }
}
