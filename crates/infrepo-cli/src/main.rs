//! infrepo CLI - Update repository generator
//!
//! Commands:
//! - `infrepo generate` - Write product.inf and product.infz for a directory of packages
//! - `infrepo list` - Show the contents of a product.infz bundle

use clap::{Parser, Subcommand};

mod generate;
mod list;

#[derive(Parser)]
#[command(name = "infrepo")]
#[command(author, version, about = "Generator for Android plugin update repositories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate product.inf and product.infz from the packages in a directory
    Generate {
        /// Path to an infrepo.toml configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Path to the aapt executable (overrides the configuration file)
        #[arg(short = 't', long)]
        dump_tool: Option<String>,

        /// Directory holding the packages (overrides the configuration file)
        #[arg(short, long)]
        dir: Option<String>,

        /// Log level: trace, debug, info, warn, error or off
        #[arg(short, long)]
        log_level: Option<String>,
    },

    /// List the entries of a product.infz bundle
    List {
        /// Path to the bundle
        bundle: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            dump_tool,
            dir,
            log_level,
        } => {
            let overrides = generate::Overrides {
                dump_tool,
                dir,
                log_level,
            };
            generate::run(config, overrides)?;
        }
        Commands::List { bundle } => {
            list::run(&bundle)?;
        }
    }

    Ok(())
}
