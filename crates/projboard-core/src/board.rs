//! Application root.
//!
//! A [`Board`] owns the one [`ProjectState`] for its lifetime and hands it
//! to the form and to both columns when they are built.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

use crate::config::BoardConfig;
use crate::dnd::{perform_drag, DropOutcome};
use crate::error::BoardResult;
use crate::project::{ProjectId, ProjectStatus};
use crate::state::ProjectState;
use crate::validation::Validator;
use crate::view::{ProjectInput, ProjectItem, ProjectList};

/// The form plus the active and finished columns over one shared state.
pub struct Board {
    state: Rc<RefCell<ProjectState>>,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl Board {
    pub fn new(config: &BoardConfig) -> Self {
        let state = Rc::new(RefCell::new(ProjectState::new(config.notify)));
        let input = ProjectInput::new(
            Rc::clone(&state),
            config.form.clone(),
            Validator::new(config.length_bounds),
        );
        let active = ProjectList::new(Rc::clone(&state), ProjectStatus::Active);
        let finished = ProjectList::new(Rc::clone(&state), ProjectStatus::Finished);

        info!(
            notify = ?config.notify,
            length_bounds = ?config.length_bounds,
            "Board initialized"
        );

        Self {
            state,
            input,
            active,
            finished,
        }
    }

    pub fn state(&self) -> Rc<RefCell<ProjectState>> {
        Rc::clone(&self.state)
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    pub fn column(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Columns in display order.
    pub fn columns(&self) -> [&ProjectList; 2] {
        [&self.active, &self.finished]
    }

    /// Fill the form and submit it.
    ///
    /// A rejected submission leaves the values in the form.
    pub fn submit(&mut self, title: &str, description: &str, people: &str) -> BoardResult<ProjectId> {
        self.input.set_title(title);
        self.input.set_description(description);
        self.input.set_people(people);
        self.input.submit()
    }

    /// Locate a rendered card in either column.
    pub fn find_item(&self, id: &ProjectId) -> Option<ProjectItem> {
        self.columns().iter().find_map(|column| column.find_item(id))
    }

    /// Drag the card `id` onto the `target` column.
    ///
    /// Returns `None` when no rendered card has that id.
    pub fn drag(&self, id: &ProjectId, target: ProjectStatus) -> Option<DropOutcome> {
        let Some(item) = self.find_item(id) else {
            debug!(project_id = %id, "No rendered card to drag");
            return None;
        };
        Some(perform_drag(&item, self.column(target)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NotifyPolicy;

    fn ids(column: &ProjectList) -> Vec<ProjectId> {
        column.items().iter().map(|i| i.element_id().clone()).collect()
    }

    #[test]
    fn test_new_project_lands_in_active_column() {
        let mut board = Board::default();

        let id = board.submit("Build API", "Design the API", "3").unwrap();

        let project = board.state().borrow().get(&id).cloned().unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.people, 3);
        assert_eq!(ids(board.column(ProjectStatus::Active)), vec![id]);
        assert!(board.column(ProjectStatus::Finished).is_empty());
    }

    #[test]
    fn test_drag_to_finished_moves_card() {
        let mut board = Board::default();
        let id = board.submit("Build API", "Design the API", "3").unwrap();
        let other = board.submit("Write docs", "Document endpoints", "2").unwrap();
        let renders_before = board.column(ProjectStatus::Finished).render_count();

        let outcome = board.drag(&id, ProjectStatus::Finished);

        assert_eq!(outcome, Some(DropOutcome::Dropped));
        assert_eq!(ids(board.column(ProjectStatus::Active)), vec![other]);
        assert_eq!(ids(board.column(ProjectStatus::Finished)), vec![id]);
        assert_eq!(
            board.column(ProjectStatus::Finished).render_count(),
            renders_before + 1
        );
    }

    #[test]
    fn test_drag_onto_same_column_still_notifies() {
        let mut board = Board::default();
        let id = board.submit("Build API", "Design the API", "3").unwrap();
        let renders_before = board.column(ProjectStatus::Active).render_count();

        board.drag(&id, ProjectStatus::Active);

        assert_eq!(ids(board.column(ProjectStatus::Active)), vec![id]);
        assert_eq!(
            board.column(ProjectStatus::Active).render_count(),
            renders_before + 1
        );
    }

    #[test]
    fn test_drag_onto_same_column_quiet_under_on_change() {
        let config = BoardConfig {
            notify: NotifyPolicy::OnChange,
            ..BoardConfig::default()
        };
        let mut board = Board::new(&config);
        let id = board.submit("Build API", "Design the API", "3").unwrap();
        let renders_before = board.column(ProjectStatus::Active).render_count();

        board.drag(&id, ProjectStatus::Active);

        assert_eq!(board.column(ProjectStatus::Active).render_count(), renders_before);
    }

    #[test]
    fn test_drag_unknown_card() {
        let board = Board::default();
        assert_eq!(board.drag(&ProjectId::from("missing"), ProjectStatus::Finished), None);
    }

    #[test]
    fn test_round_trip_between_columns() {
        let mut board = Board::default();
        let id = board.submit("Build API", "Design the API", "3").unwrap();

        board.drag(&id, ProjectStatus::Finished);
        board.drag(&id, ProjectStatus::Active);

        assert_eq!(ids(board.column(ProjectStatus::Active)), vec![id]);
        assert!(board.column(ProjectStatus::Finished).is_empty());
        assert!(!board.column(ProjectStatus::Active).is_droppable());
    }

    #[test]
    fn test_rejected_submission_leaves_board_untouched() {
        let mut board = Board::default();

        let err = board.submit("Build API", "Design the API", "9").unwrap_err();

        assert!(err.is_invalid_input());
        assert!(board.state().borrow().is_empty());
        assert_eq!(board.input().people(), "9");
        assert_eq!(board.column(ProjectStatus::Active).render_count(), 0);
    }

    #[test]
    fn test_columns_in_display_order() {
        let board = Board::default();
        let [first, second] = board.columns();
        assert_eq!(first.status(), ProjectStatus::Active);
        assert_eq!(second.status(), ProjectStatus::Finished);
        assert_eq!(board.state().borrow().subscriber_count(), 2);
    }
}
