//! Observable project state.
//!
//! [`ProjectState`] is the single source of truth for a board. Every mutation
//! goes through it and is followed by a synchronous fan-out to all
//! subscribers, in registration order, each receiving its own copy of the
//! project list.
//!
//! The state is single-threaded. Subscribers must not call back into the
//! mutation methods while being notified.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::project::{Project, ProjectId, ProjectStatus};

/// An owned copy of the project list handed to a subscriber.
pub type Snapshot = Vec<Project>;

/// Callback invoked with a fresh snapshot after every mutation.
pub type Listener = Box<dyn FnMut(Snapshot)>;

/// When `move_project` notifies subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// Notify after every move request, even one that changed nothing.
    #[default]
    Always,
    /// Notify only when a project's status actually changed.
    OnChange,
}

/// In-memory project store with subscriber fan-out.
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
    policy: NotifyPolicy,
}

impl ProjectState {
    pub fn new(policy: NotifyPolicy) -> Self {
        Self {
            projects: Vec::new(),
            listeners: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    /// Register a subscriber. There is no unsubscribe.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Snapshot) + 'static,
    {
        self.listeners.push(Box::new(listener));
        debug!(subscribers = self.listeners.len(), "Subscriber registered");
    }

    /// Append a new active project and notify subscribers.
    pub fn add_project(&mut self, title: &str, description: &str, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();
        info!(project_id = %id, title = %project.title, people, "Project added");
        self.projects.push(project);
        self.notify();
        id
    }

    /// Move a project to `new_status`.
    ///
    /// Looks up the first project with a matching id and flips its status if
    /// it differs. Unknown ids are ignored. Returns whether a status changed.
    pub fn move_project(&mut self, id: &ProjectId, new_status: ProjectStatus) -> bool {
        let changed = match self.projects.iter_mut().find(|p| &p.id == id) {
            Some(project) if project.status != new_status => {
                debug!(
                    project_id = %id,
                    from = %project.status,
                    to = %new_status,
                    "Project moved"
                );
                project.status = new_status;
                true
            }
            Some(_) => {
                debug!(project_id = %id, status = %new_status, "Project already in target status");
                false
            }
            None => {
                debug!(project_id = %id, "Move ignored, no such project");
                false
            }
        };

        if changed || self.policy == NotifyPolicy::Always {
            self.notify();
        }
        changed
    }

    /// A copy of all projects in creation order.
    pub fn projects(&self) -> Snapshot {
        self.projects.clone()
    }

    /// Projects currently in `status`, in creation order.
    pub fn by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        debug!(
            subscribers = self.listeners.len(),
            projects = self.projects.len(),
            "Notifying subscribers"
        );
        for listener in self.listeners.iter_mut() {
            listener(self.projects.clone());
        }
    }
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::new(NotifyPolicy::default())
    }
}
