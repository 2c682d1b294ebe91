//! Project records tracked on the board.

pub mod model;

pub use model::{Project, ProjectId, ProjectStatus};
