//! The new-project form.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::config::FormRules;
use crate::error::{BoardError, BoardResult};
use crate::project::ProjectId;
use crate::state::ProjectState;
use crate::validation::{Validatable, Validator};

/// Message shown when a submission is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again";

/// Form holding the raw text of the three project fields.
pub struct ProjectInput {
    state: Rc<RefCell<ProjectState>>,
    rules: FormRules,
    validator: Validator,
    title: String,
    description: String,
    people: String,
}

impl ProjectInput {
    pub fn new(state: Rc<RefCell<ProjectState>>, rules: FormRules, validator: Validator) -> Self {
        Self {
            state,
            rules,
            validator,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    /// Validate the fields and add the project.
    ///
    /// On success the fields are cleared and the new id returned. On failure
    /// nothing is added and the fields keep their values.
    pub fn submit(&mut self) -> BoardResult<ProjectId> {
        let Some((title, description, people)) = self.gather_user_input() else {
            warn!(
                title_len = self.title.len(),
                description_len = self.description.len(),
                people = %self.people,
                "Project form rejected"
            );
            return Err(BoardError::invalid_input(INVALID_INPUT_MESSAGE));
        };

        let id = self
            .state
            .borrow_mut()
            .add_project(&title, &description, people);
        self.clear();
        Ok(id)
    }

    /// Reset all three fields.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    fn gather_user_input(&self) -> Option<(String, String, u32)> {
        let title = Validatable::new(self.title.as_str())
            .required()
            .min_length(self.rules.title_min_length);
        let description = Validatable::new(self.description.as_str())
            .required()
            .min_length(self.rules.description_min_length);
        let people = Validatable::new(self.people.as_str())
            .required()
            .min(self.rules.people_min)
            .max(self.rules.people_max);

        if !self.validator.validate(&title)
            || !self.validator.validate(&description)
            || !self.validator.validate(&people)
        {
            return None;
        }

        // Fractional counts are truncated; a team needs at least one person.
        let people = self.people.trim().parse::<f64>().ok()?.trunc();
        if people < 1.0 || people > f64::from(u32::MAX) {
            debug!(people, "Team size out of range after truncation");
            return None;
        }

        Some((self.title.clone(), self.description.clone(), people as u32))
    }
}
