use clap::Parser;
use orcachat::cli::{self, Commands};
use orcachat::config::{self, OrcaChatConfig};
use orcachat::errors::OrcaChatError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let config = match config::load_or_default(cli.config.as_deref().map(std::path::Path::new)).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logging(&cli, &config);

    let result = match cli.command {
        Commands::Serve(args) => cli::serve::handle_serve(args, &config).await,
        Commands::Ask(args) => cli::ask::handle_ask(args, &config).await,
        Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(cli: &cli::Cli, config: &OrcaChatConfig) {
    let default_level = match cli.verbose {
        0 => config.logging.as_ref().and_then(|l| l.level.clone()).unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color);

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), OrcaChatError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
