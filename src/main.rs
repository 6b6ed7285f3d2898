use anyhow::{Context, Result};

use layout_assert::config::{Config, OutputFormat};
use layout_assert::{Scenario, Verdict};

fn print_verdict(verdict: &Verdict, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for message in verdict.messages() {
                println!("{}", message);
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(verdict).context("Failed to serialize verdict")?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let mut scenario = Scenario::load(&config.scenario)?;
    if let Some(units) = config.units {
        scenario = scenario.with_default_units(units);
    }

    let verdict = scenario.run()?;
    print_verdict(&verdict, config.format)?;

    if !verdict.passed {
        log::warn!("{} check failure(s)", verdict.errors.len());
        std::process::exit(1);
    }

    Ok(())
}
