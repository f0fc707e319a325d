//! Entry point: parse CLI, load the app once and dispatch to command handlers.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use nufl::{
    api::ApiClient,
    app::App,
    cli::{AdminCmd, Commands, Nufl},
    commands::{
        admin::{handle_dashboard, handle_login, handle_logout, handle_whoami},
        manage::{handle_fixture_cmd, handle_news_cmd, handle_player_cmd, handle_team_cmd},
        public::{
            handle_fixtures, handle_news, handle_open, handle_page, handle_players,
            handle_results, handle_teams,
        },
    },
    core::ClientConfig,
    guard::Route,
    NuflError,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "nufl=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Nufl) -> anyhow::Result<()> {
    let config = ClientConfig::resolve(cli.api_url).context("invalid API configuration")?;
    let api = ApiClient::from_config(&config).context("failed to build the API client")?;
    let mut app = App::start(api).await;
    let json = cli.json;

    match cli.command {
        Commands::Home => handle_page(&mut app, Route::Home, json).await?,
        Commands::Fixtures { filter, id } => handle_fixtures(&mut app, filter, id, json).await?,
        Commands::Results { matchweek } => handle_results(&mut app, matchweek, json).await?,
        Commands::Tables => handle_page(&mut app, Route::Tables, json).await?,
        Commands::Stats => handle_page(&mut app, Route::Stats, json).await?,
        Commands::News { id } => handle_news(&mut app, id, json).await?,
        Commands::Teams { id } => handle_teams(&mut app, id, json).await?,
        Commands::Players { team, id } => handle_players(&mut app, team, id, json).await?,
        Commands::Open { path } => handle_open(&mut app, &path, json).await?,

        Commands::Admin { cmd } => match cmd {
            AdminCmd::Login { username, password } => {
                handle_login(&mut app, username, password).await?
            }
            AdminCmd::Logout => handle_logout(&mut app).await?,
            AdminCmd::Whoami => handle_whoami(&app, json)?,
            AdminCmd::Dashboard => handle_dashboard(&mut app, json).await?,
            AdminCmd::Teams { cmd } => handle_team_cmd(&mut app, cmd, json).await?,
            AdminCmd::Players { cmd } => handle_player_cmd(&mut app, cmd, json).await?,
            AdminCmd::Fixtures { cmd } => handle_fixture_cmd(&mut app, cmd, json).await?,
            AdminCmd::News { cmd } => handle_news_cmd(&mut app, cmd, json).await?,
        },
    }

    Ok(())
}

/// Run the CLI.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Nufl::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            if e
                .downcast_ref::<NuflError>()
                .is_some_and(NuflError::is_auth_failure)
            {
                eprintln!("  Sign in with `nufl admin login --username <name>`.");
            }
            ExitCode::FAILURE
        }
    }
}
