use anyhow::Result;
use chatroi::cli::{Cli, Commands};
use chatroi::commands::{self, EstimateConfig};
use chatroi::config;
use chatroi::formatting::{FormattingConfig, Language};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Estimate {
            industry,
            tier,
            days_open,
            overrides,
            format,
            output,
            config,
            language,
            plain,
            strict,
        } => commands::handle_estimate(EstimateConfig {
            industry,
            tier,
            days_open: days_open.map(Into::into),
            overrides,
            format: format.map(Into::into),
            output,
            config,
            language: language.map(Into::into),
            plain,
            strict,
        }),
        Commands::Industries { format } => {
            let formatting = listing_formatting();
            commands::write_industries(&mut std::io::stdout().lock(), format, &formatting)
        }
        Commands::Tiers { format } => {
            let formatting = listing_formatting();
            commands::write_tiers(&mut std::io::stdout().lock(), format, &formatting)
        }
        Commands::Payback { months, language } => {
            let language: Language = match language {
                Some(language) => language.into(),
                None => config::load_config().language(),
            };
            commands::write_payback(&mut std::io::stdout().lock(), months, language)
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

/// `-v` raises the level from warn; RUST_LOG wins when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn listing_formatting() -> FormattingConfig {
    let file_config = config::load_config();
    FormattingConfig::from_env().with_currency_symbol(file_config.currency_symbol())
}
