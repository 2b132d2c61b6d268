mod bootstrap;

use std::{borrow::Cow, env, process};

use bootstrap::{AppConfig, OutputFormat, init_logging};
use tripsplit_application::SettlementService;
use tripsplit_infrastructure::JsonTripSource;
use tripsplit_presentation::{JsonSettlementPresenter, SettlementPresenter};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: tripsplit <trip.json>".into());
    };

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;

    let source = JsonTripSource;
    let service = SettlementService::new(&source);
    let result = service.settle(&path).map_err(|err| {
        tracing::error!(path = %path, error = %err, "settlement failed");
        err.to_string()
    })?;

    let output = match config.output {
        OutputFormat::Text => SettlementPresenter::render(&result, &config.currency).to_text(),
        OutputFormat::Json => JsonSettlementPresenter::render(&result, &config.currency)
            .map_err(|err| format!("Failed to encode settlement: {err}"))?,
    };
    print!("{output}");
    if config.output == OutputFormat::Json {
        println!();
    }

    Ok(())
}
