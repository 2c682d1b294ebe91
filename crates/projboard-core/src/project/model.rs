//! Project domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque project identifier.
///
/// Assigned once at creation and never changed. The value doubles as the
/// element id of the rendered card and as the drag payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Project status (board column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// Both statuses in column order.
    pub const ALL: [ProjectStatus; 2] = [Self::Active, Self::Finished];

    /// Parse from string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// The other status. Moves only ever flip between the two.
    pub fn flipped(&self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }

    /// Column heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Create a new active project with a fresh id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ProjectId::generate(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// `1 person` or `N persons`.
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_is_active() {
        let project = Project::new("Build API", "Design the API", 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.people, 3);
        assert!(!project.id.as_str().is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Project::new("First project", "Something", 2);
        let b = Project::new("First project", "Something", 2);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ProjectStatus::parse("active"), Some(ProjectStatus::Active));
        assert_eq!(ProjectStatus::parse(" Finished "), Some(ProjectStatus::Finished));
        assert_eq!(ProjectStatus::parse("done"), None);
    }

    #[test]
    fn test_status_flip_and_heading() {
        assert_eq!(ProjectStatus::Active.flipped(), ProjectStatus::Finished);
        assert_eq!(ProjectStatus::Finished.flipped(), ProjectStatus::Active);
        assert_eq!(ProjectStatus::Finished.heading(), "FINISHED PROJECTS");
    }

    #[test]
    fn test_persons_label() {
        let mut project = Project::new("Solo work", "Just me", 1);
        assert_eq!(project.persons_label(), "1 person");
        project.people = 4;
        assert_eq!(project.persons_label(), "4 persons");
    }

    #[test]
    fn test_serialized_fields() {
        let mut project = Project::new("Build API", "Design the API", 3);
        project.status = ProjectStatus::Finished;
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["id"], project.id.as_str());
        assert_eq!(json["status"], "finished");
        assert_eq!(json["people"], 3);
    }
}
