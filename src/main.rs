use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};
use user_directory::api::client::UserSourceClient;
use user_directory::core::config::{Config, SourceConfig};
use user_directory::core::error::FetchError;
use user_directory::core::startup::load_seed;
use user_directory::core::state::AppState;
use user_directory::core::tracing_init::init_tracing;
use user_directory::models::user::UserRecord;
use user_directory::ui::commands::Command;
use user_directory::ui::dispatch::{apply, Outcome};
use user_directory::ui::render::{render_add_error, render_user_detail, render_view, HELP};

type SeedResult = Result<Vec<UserRecord>, FetchError>;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    // Load and validate configuration
    let config = Config::from_file(&config_path).context(format!(
        "Failed to load configuration from '{}'",
        config_path.display()
    ))?;

    init_tracing(&config.logging);

    // Every mutation happens on this one thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        endpoint = %config.source.endpoint,
        synthetic_count = config.source.synthetic_count,
        page_size = config.view.page_size,
        search_mode = %config.view.search_mode,
        "User directory starting"
    );

    let client = UserSourceClient::new(
        config.source.endpoint.clone(),
        Duration::from_secs(config.source.timeout_secs),
    )
    .context("Failed to create user source client")?;

    let mut state = AppState::new(config);
    let (seed_tx, mut seed_rx) = mpsc::unbounded_channel::<SeedResult>();

    spawn_seed_load(client.clone(), state.config.source.clone(), seed_tx.clone());

    println!("{}", render_view(&state));
    println!("Type 'help' for a list of commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(result) = seed_rx.recv() => {
                state.finish_load(result);
                println!("{}", render_view(&state));
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    debug!("stdin closed");
                    break;
                };

                let command = match Command::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };

                match apply(&mut state, command) {
                    Outcome::Render | Outcome::Added(_) => println!("{}", render_view(&state)),
                    Outcome::Rejected(e) => println!("{}", render_add_error(&e)),
                    Outcome::Details(record) => println!("{}", render_user_detail(&record)),
                    Outcome::Reload => {
                        spawn_seed_load(client.clone(), state.config.source.clone(), seed_tx.clone());
                        println!("{}", render_view(&state));
                    }
                    Outcome::Notice(message) => println!("{message}"),
                    Outcome::Help => println!("{HELP}"),
                    Outcome::Quit => break,
                }
            }
        }
    }

    info!(users = state.view.records().len(), "User directory shutting down");

    Ok(())
}

/// Run the seed load in the background; the result is applied by the event loop
fn spawn_seed_load(
    client: UserSourceClient,
    source: SourceConfig,
    results: mpsc::UnboundedSender<SeedResult>,
) {
    tokio::spawn(async move {
        let result = load_seed(&client, &source).await;
        // Receiver is gone only when the loop has exited
        let _ = results.send(result);
    });
}
