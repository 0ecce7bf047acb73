use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "orcachat", version, about = "Chat front-end for Orca Security reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat HTTP API server
    Serve(ServeArgs),
    /// Ask one question and print the reply
    Ask(AskArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides config)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (overrides config)
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Args, Clone)]
pub struct AskArgs {
    /// Question to ask, e.g. "show me critical vulnerabilities"
    pub question: String,

    /// Orca API key, or $VAR to read it from the environment
    #[arg(long, default_value = "$ORCA_API_KEY")]
    pub api_key: String,

    /// Orca API root (defaults to config, then the public endpoint)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
