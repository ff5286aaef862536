use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use catfacts::api::{CatFactsApi, CatFactsClient};
use catfacts::cli::{Cli, Command};
use catfacts::config::Config;
use catfacts::form::submit_fact;
use catfacts::logging::{init_cli_tracing, init_tui_tracing};
use catfacts::store::{AddFactOutcome, FactStore, RandomFactOutcome};
use catfacts::ui::fact_list::{sorted_by_id, NO_FACTS};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command();

    if command == Command::Tui {
        init_tui_tracing();
    } else {
        init_cli_tracing();
    }

    match run(&cli, command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, command: Command) -> anyhow::Result<ExitCode> {
    let config = cli.resolve_config().context("Invalid configuration")?;

    match command {
        Command::Tui => catfacts::ui::run(config).map(|()| ExitCode::SUCCESS),
        Command::List => block_on(list(config))?,
        Command::Add { text } => block_on(add(config, text))?,
        Command::Random => block_on(random(config))?,
    }
}

/// One-shot commands only need a single-threaded runtime.
fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;
    Ok(rt.block_on(future))
}

fn store(config: &Config) -> anyhow::Result<FactStore> {
    let client = CatFactsClient::new(&config.api)?;
    tracing::debug!(base_url = %client.base_url(), "Using backend");
    Ok(FactStore::new(Arc::new(client)))
}

async fn list(config: Config) -> anyhow::Result<ExitCode> {
    let client = CatFactsClient::new(&config.api)?;
    let facts = client.list_facts().await?;
    if facts.is_empty() {
        println!("{NO_FACTS}");
    }
    for fact in sorted_by_id(&facts) {
        println!("#{} {}", fact.id, fact.fact);
    }
    Ok(ExitCode::SUCCESS)
}

async fn add(config: Config, text: String) -> anyhow::Result<ExitCode> {
    let store = store(&config)?;
    match submit_fact(&store, Some(text.as_str())).await {
        AddFactOutcome::Saved(fact) => {
            println!("Added #{} {}", fact.id, fact.fact);
            Ok(ExitCode::SUCCESS)
        }
        AddFactOutcome::Rejected { errors, .. } => {
            for error in errors {
                eprintln!("{error}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn random(config: Config) -> anyhow::Result<ExitCode> {
    match store(&config)?.random_fact().await {
        RandomFactOutcome::Fact(fact) => {
            println!("{fact}");
            Ok(ExitCode::SUCCESS)
        }
        RandomFactOutcome::Error(message) => {
            eprintln!("{message}");
            Ok(ExitCode::FAILURE)
        }
    }
}
