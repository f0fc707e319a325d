//! Typed values shared by the CLI, the API client and the views.

pub mod filters;
pub mod ids;
pub mod position;
pub mod status;

pub use filters::FixtureFilter;
pub use ids::{FixtureId, NewsId, PlayerId, TeamId};
pub use position::Position;
pub use status::FixtureStatus;
