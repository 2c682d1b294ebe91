//! Projboard Core Library
//!
//! Observable project state, the drag-and-drop protocol that moves projects
//! between the active and finished columns, and the headless views built on
//! top of them.

pub mod board;
pub mod config;
pub mod dnd;
pub mod error;
pub mod project;
pub mod state;
pub mod validation;
pub mod view;

pub use board::Board;
pub use config::{BoardConfig, FormRules};
pub use error::{BoardError, BoardResult};
pub use project::{Project, ProjectId, ProjectStatus};
pub use state::{NotifyPolicy, ProjectState, Snapshot};
