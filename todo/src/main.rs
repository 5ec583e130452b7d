//! Terminal front end for the to-do list.
//!
//! Reads one command per line from stdin. A renderer task watches the
//! store and reprints the list after every change.

use anyhow::Context;
use todomvc::shell::{Command, HELP};
use todomvc::{AppConfig, TodoEnvironment, TodoReducer, TodoStore, ViewModel};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config);
    tracing::info!(?config, "Starting todomvc");

    let store = TodoStore::with_config(
        config.initial_state(),
        TodoReducer::new(),
        TodoEnvironment,
        config.store_config(),
    );

    print!("{}", store.state(ViewModel::from_state).await.render_text());
    let renderer = tokio::spawn(render_changes(store.clone()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                if !handle_line(&store, &line).await? {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    renderer.abort();
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    // Logs go to stderr so they never interleave with the rendered list.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| todomvc::config::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Runs one shell line. Returns false when the shell should exit.
async fn handle_line(store: &TodoStore, line: &str) -> anyhow::Result<bool> {
    let command = match Command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(true),
        Err(error) => {
            eprintln!("{error}");
            return Ok(true);
        },
    };

    match command {
        Command::Quit => return Ok(false),
        Command::Help => println!("{HELP}"),
        Command::List => print!("{}", store.state(ViewModel::from_state).await.render_text()),
        Command::Json => {
            let view = store.state(ViewModel::from_state).await;
            println!("{}", serde_json::to_string_pretty(&view)?);
        },
        // One gesture is one revision, so the renderer never prints a
        // half-applied gesture such as a typed but unsubmitted draft.
        command => {
            if let Err(error) = store.send_batch(command.actions()).await {
                tracing::warn!(%error, "Action aborted");
                eprintln!("{error}");
            }
        },
    }

    Ok(true)
}

/// Reprints the list whenever the store revision moves
async fn render_changes(store: TodoStore) {
    let mut revisions = store.subscribe();
    while revisions.changed().await.is_ok() {
        let view = store.state(ViewModel::from_state).await;
        print!("{}", view.render_text());
    }
}
