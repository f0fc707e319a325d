//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{FixtureFilter, FixtureId, FixtureStatus, NewsId, PlayerId, Position, TeamId};

#[derive(Debug, Parser)]
#[clap(
    name = "nufl",
    version,
    about = "Nigerian Universities Football League: public pages and league admin"
)]
pub struct Nufl {
    /// API base URL (or set `NUFL_API_URL`).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log requests and decisions to stderr (same as `RUST_LOG=nufl=debug`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upcoming matches, the top of the table and the latest news.
    Home,

    /// Fixture list with season summary and the next match.
    Fixtures {
        /// Which fixtures to list.
        #[clap(long, short, value_enum, default_value_t = FixtureFilter::All)]
        filter: FixtureFilter,

        /// Show a single fixture.
        #[clap(long)]
        id: Option<FixtureId>,
    },

    /// Completed matches.
    Results {
        /// Only this matchweek (a fixture id).
        #[clap(long, short)]
        matchweek: Option<FixtureId>,
    },

    /// League table with zones and summary.
    Tables,

    /// League statistics.
    Stats,

    /// Published news, or one article.
    News { id: Option<NewsId> },

    /// Teams, or one team with its squad.
    Teams { id: Option<TeamId> },

    /// Players, or one player's profile.
    Players {
        /// Only players of this team.
        #[clap(long, short)]
        team: Option<TeamId>,

        id: Option<PlayerId>,
    },

    /// Open any page by path, e.g. `/tables` or `/admin/teams`.
    Open { path: String },

    /// League administration (requires signing in).
    Admin {
        #[clap(subcommand)]
        cmd: AdminCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCmd {
    /// Sign in and keep the session for later commands.
    Login {
        #[clap(long, short)]
        username: String,

        /// Password (or set `NUFL_PASSWORD`; read from stdin otherwise).
        #[clap(long, short)]
        password: Option<String>,
    },

    /// Sign out and forget the stored session.
    Logout,

    /// Show who is signed in.
    Whoami,

    /// League counters and admin sections.
    Dashboard,

    /// Manage teams.
    Teams {
        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Manage players.
    Players {
        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Manage fixtures and results.
    Fixtures {
        #[clap(subcommand)]
        cmd: FixtureCmd,
    },

    /// Manage news articles.
    News {
        #[clap(subcommand)]
        cmd: NewsCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// List teams.
    List,
    /// Create a team.
    Add(TeamArgs),
    /// Edit a team; unset fields keep their current value.
    Edit {
        id: TeamId,
        #[clap(flatten)]
        args: TeamArgs,
    },
    /// Delete a team.
    Delete {
        id: TeamId,
        /// Skip the confirmation prompt.
        #[clap(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct TeamArgs {
    #[clap(long)]
    pub name: Option<String>,
    #[clap(long)]
    pub university: Option<String>,
    #[clap(long)]
    pub city: Option<String>,
    #[clap(long)]
    pub stadium: Option<String>,
    /// Year founded.
    #[clap(long)]
    pub founded: Option<u16>,
    #[clap(long)]
    pub coach: Option<String>,
    /// Logo URL.
    #[clap(long, conflicts_with = "logo")]
    pub logo_url: Option<String>,
    /// Upload this image file and use it as the logo.
    #[clap(long)]
    pub logo: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// List players.
    List,
    /// Register a player.
    Add(PlayerArgs),
    /// Edit a player; unset fields keep their current value.
    Edit {
        id: PlayerId,
        #[clap(flatten)]
        args: PlayerArgs,
    },
    /// Delete a player.
    Delete {
        id: PlayerId,
        /// Skip the confirmation prompt.
        #[clap(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlayerArgs {
    #[clap(long)]
    pub name: Option<String>,
    /// Goalkeeper, Defender, Midfielder or Forward (GK/DEF/MID/FWD).
    #[clap(long)]
    pub position: Option<Position>,
    #[clap(long)]
    pub team: Option<TeamId>,
    #[clap(long = "number")]
    pub jersey_number: Option<u32>,
    #[clap(long)]
    pub age: Option<u32>,
    #[clap(long)]
    pub nationality: Option<String>,
    /// Height in centimetres.
    #[clap(long)]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[clap(long)]
    pub weight: Option<f64>,
    /// Photo URL.
    #[clap(long, conflicts_with = "photo")]
    pub photo_url: Option<String>,
    /// Upload this image file and use it as the photo.
    #[clap(long)]
    pub photo: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum FixtureCmd {
    /// List fixtures.
    List,
    /// Schedule a fixture.
    Add {
        #[clap(flatten)]
        args: FixtureArgs,
        /// Create through the legacy `/add_fixture` endpoint.
        #[clap(long)]
        legacy: bool,
    },
    /// Edit a fixture; unset fields keep their current value.
    Edit {
        id: FixtureId,
        #[clap(flatten)]
        args: FixtureArgs,
    },
    /// Record the final score.
    Result {
        id: FixtureId,
        home_score: u32,
        away_score: u32,
        /// Send through the legacy `/update_result/:id` endpoint.
        #[clap(long)]
        legacy: bool,
    },
    /// Delete a fixture.
    Delete {
        id: FixtureId,
        /// Skip the confirmation prompt.
        #[clap(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FixtureArgs {
    /// Home team id.
    #[clap(long)]
    pub home: Option<TeamId>,
    /// Away team id.
    #[clap(long)]
    pub away: Option<TeamId>,
    /// Match date, YYYY-MM-DD.
    #[clap(long)]
    pub date: Option<String>,
    /// Kick-off time, HH:MM.
    #[clap(long)]
    pub time: Option<String>,
    #[clap(long)]
    pub venue: Option<String>,
    /// scheduled, live, completed or cancelled.
    #[clap(long)]
    pub status: Option<FixtureStatus>,
}

#[derive(Debug, Subcommand)]
pub enum NewsCmd {
    /// List articles.
    List,
    /// Write an article.
    Add(NewsArgs),
    /// Edit an article; unset fields keep their current value.
    Edit {
        id: NewsId,
        #[clap(flatten)]
        args: NewsArgs,
    },
    /// Delete an article.
    Delete {
        id: NewsId,
        /// Skip the confirmation prompt.
        #[clap(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct NewsArgs {
    #[clap(long)]
    pub title: Option<String>,
    #[clap(long)]
    pub content: Option<String>,
    #[clap(long)]
    pub author: Option<String>,
    #[clap(long)]
    pub category: Option<String>,
    /// Image URL.
    #[clap(long, conflicts_with = "image")]
    pub image_url: Option<String>,
    /// Upload this image file and use it as the article image.
    #[clap(long)]
    pub image: Option<PathBuf>,
    /// Publish (`true`) or keep as a draft (`false`).
    #[clap(long)]
    pub published: Option<bool>,
}
