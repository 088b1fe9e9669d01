use anyhow::Result;
use clap::{Parser, Subcommand};

use fintalk_core::Classifier;
use fintalk_markets::ListingResolver;

mod chat;
mod config;

#[derive(Parser, Debug)]
#[command(name = "fintalk", version, about = "fintalk chat-bot CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat over stdin/stdout
    Chat,

    /// Classify one line of text and print the result
    Classify {
        /// The chat line to classify (quote it if it contains spaces).
        /// Leading hyphens are data here: `-120` is the expense shorthand.
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Emit the tagged intent as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.fintalk/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the config file path
    Path,
}

fn build_resolver() -> Result<ListingResolver> {
    let cfg = config::load_config()?;
    ListingResolver::with_extra(&cfg.symbols.extra)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Chat => {
            let resolver = build_resolver()?;
            let classifier = Classifier::new(&resolver);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            chat::run_repl(&classifier, stdin.lock(), stdout.lock())?;
        }
        Command::Classify { text, json } => {
            let resolver = build_resolver()?;
            let classifier = Classifier::new(&resolver);
            let intent = classifier.classify(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&intent)?);
            } else {
                println!("{}", chat::reply_for(&intent));
            }
        }
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}
