//! Headless views.
//!
//! Each view keeps the observable parts of its rendering (element ids,
//! headings, rendered cards, the drop highlight) and translates user events
//! into state mutations.

pub mod input;
pub mod item;
pub mod list;

pub use input::ProjectInput;
pub use item::ProjectItem;
pub use list::ProjectList;
