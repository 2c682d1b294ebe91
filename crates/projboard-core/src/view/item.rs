//! A single rendered project card.

use tracing::debug;

use crate::dnd::{DragEvent, Draggable, DropEffect, PLAIN_TEXT};
use crate::project::{Project, ProjectId};

/// Card view for one project. Always draggable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// Element id of the card, identical to the project id.
    pub fn element_id(&self) -> &ProjectId {
        &self.project.id
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn title(&self) -> &str {
        &self.project.title
    }

    pub fn description(&self) -> &str {
        &self.project.description
    }

    /// e.g. `3 persons assigned`.
    pub fn persons_assigned(&self) -> String {
        format!("{} assigned", self.project.persons_label())
    }

    pub fn draggable(&self) -> bool {
        true
    }
}

impl Draggable for ProjectItem {
    fn drag_start_handler(&self, event: &mut DragEvent) {
        let dt = event.data_transfer.get_or_insert_with(Default::default);
        dt.set_data(PLAIN_TEXT, self.project.id.as_str());
        dt.effect_allowed = DropEffect::Move;
        debug!(project_id = %self.project.id, "Drag started");
    }

    fn drag_end_handler(&self, _event: &DragEvent) {
        debug!(project_id = %self.project.id, "Drag ended");
    }
}
