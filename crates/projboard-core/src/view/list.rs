//! One board column.
//!
//! A [`ProjectList`] subscribes to the shared [`ProjectState`] when it is
//! built. Every snapshot it receives is filtered down to the column's status
//! and replaces the rendered items wholesale, in snapshot order.
//!
//! Render state lives in its own `RefCell`, separate from the column, so a
//! drop handler holding the state mutably can still be re-rendered by the
//! notification it triggers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

use crate::dnd::{DragEvent, DragTarget, PLAIN_TEXT};
use crate::project::{Project, ProjectId, ProjectStatus};
use crate::state::ProjectState;
use crate::view::item::ProjectItem;

#[derive(Debug, Default)]
struct Rendered {
    items: Vec<ProjectItem>,
    render_count: usize,
}

impl Rendered {
    fn rebuild(&mut self, status: ProjectStatus, projects: impl IntoIterator<Item = Project>) {
        self.items.clear();
        self.items.extend(
            projects
                .into_iter()
                .filter(|p| p.status == status)
                .map(ProjectItem::new),
        );
    }
}

/// Column view for one status.
pub struct ProjectList {
    status: ProjectStatus,
    state: Rc<RefCell<ProjectState>>,
    rendered: Rc<RefCell<Rendered>>,
    droppable: Cell<bool>,
}

impl ProjectList {
    /// Build the column and subscribe it to `state`.
    ///
    /// Projects already in the state are rendered immediately.
    pub fn new(state: Rc<RefCell<ProjectState>>, status: ProjectStatus) -> Self {
        let rendered = Rc::new(RefCell::new(Rendered::default()));
        {
            let mut state_mut = state.borrow_mut();
            rendered
                .borrow_mut()
                .rebuild(status, state_mut.projects());

            let sink = Rc::clone(&rendered);
            state_mut.subscribe(move |snapshot| {
                let mut rendered = sink.borrow_mut();
                rendered.rebuild(status, snapshot);
                rendered.render_count += 1;
                debug!(
                    column = %status,
                    items = rendered.items.len(),
                    "Column re-rendered"
                );
            });
        }

        Self {
            status,
            state,
            rendered,
            droppable: Cell::new(false),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// e.g. `active-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status)
    }

    /// e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        self.status.heading()
    }

    /// Currently rendered cards, in creation order.
    pub fn items(&self) -> Vec<ProjectItem> {
        self.rendered.borrow().items.clone()
    }

    pub fn find_item(&self, id: &ProjectId) -> Option<ProjectItem> {
        self.rendered
            .borrow()
            .items
            .iter()
            .find(|item| item.element_id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rendered.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.borrow().items.is_empty()
    }

    /// Number of rebuilds triggered by state notifications.
    pub fn render_count(&self) -> usize {
        self.rendered.borrow().render_count
    }

    /// Whether the drop highlight is currently shown.
    pub fn is_droppable(&self) -> bool {
        self.droppable.get()
    }
}

impl DragTarget for ProjectList {
    fn drag_over_handler(&self, event: &mut DragEvent) {
        if event.carries_plain_text() {
            event.prevent_default();
            self.droppable.set(true);
        }
    }

    fn drop_handler(&self, event: &DragEvent) {
        self.droppable.set(false);

        let id = event
            .data_transfer
            .as_ref()
            .map(|dt| dt.get_data(PLAIN_TEXT))
            .unwrap_or("");
        if id.is_empty() {
            debug!(column = %self.status, "Drop without a project id ignored");
            return;
        }

        debug!(column = %self.status, project_id = %id, "Project dropped");
        self.state
            .borrow_mut()
            .move_project(&ProjectId::from(id), self.status);
    }

    fn drag_leave_handler(&self, _event: &DragEvent) {
        self.droppable.set(false);
    }
}
