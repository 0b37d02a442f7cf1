//! Project domain model.
//!
//! # Responsibility
//! - Define the top-level tracked work item and its progress value.
//! - Validate records that arrive through deserialization.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `name` is never empty (whitespace is kept as typed).
//! - `progress` is always within `0..=100`.
//! - `subcategories` keeps insertion order.

use crate::model::deadline::Deadline;
use crate::model::subcategory::{Subcategory, SubcategoryId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a project within the session.
pub type ProjectId = Uuid;

/// Highest accepted progress value.
pub const MAX_PROGRESS: u8 = 100;

/// Validation errors for project records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// Name is the empty string.
    EmptyName,
    /// Progress outside `0..=100`.
    ProgressOutOfRange(u8),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "project name must not be empty"),
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress ({value}) must be <= {MAX_PROGRESS}")
            }
        }
    }
}

impl Error for ProjectValidationError {}

/// Completion percentage of a project.
///
/// Construction through [`Progress::new`] clamps to `0..=100`, matching the
/// bounds of the range control that produces the value. Deserialization is
/// strict and rejects anything above 100.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Self = Self(0);
    pub const COMPLETE: Self = Self(MAX_PROGRESS);

    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_PROGRESS))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 == MAX_PROGRESS
    }
}

impl TryFrom<u8> for Progress {
    type Error = ProjectValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_PROGRESS {
            return Err(ProjectValidationError::ProgressOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<Progress> for u8 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Top-level tracked work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub deadline: Deadline,
    pub subcategories: Vec<Subcategory>,
    pub progress: Progress,
}

impl Project {
    /// Creates a project with a generated ID, no subcategories and zero
    /// progress.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is the empty string.
    pub fn new(
        name: impl Into<String>,
        deadline: Deadline,
    ) -> Result<Self, ProjectValidationError> {
        let project = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            deadline,
            subcategories: Vec::new(),
            progress: Progress::ZERO,
        };
        project.validate()?;
        Ok(project)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.name.is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        Ok(())
    }

    pub fn subcategory(&self, id: SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|sub| sub.id == id)
    }

    pub fn subcategory_position(&self, id: SubcategoryId) -> Option<usize> {
        self.subcategories.iter().position(|sub| sub.id == id)
    }
}

/// Unvalidated serde shape of [`Project`].
#[derive(Deserialize)]
struct ProjectRecord {
    id: ProjectId,
    name: String,
    deadline: Deadline,
    #[serde(default)]
    subcategories: Vec<Subcategory>,
    #[serde(default)]
    progress: Progress,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectValidationError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let project = Self {
            id: record.id,
            name: record.name,
            deadline: record.deadline,
            subcategories: record.subcategories,
            progress: record.progress,
        };
        project.validate()?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::{Progress, Project, ProjectValidationError, MAX_PROGRESS};
    use chrono::NaiveDate;

    #[test]
    fn progress_new_clamps_to_max() {
        assert_eq!(Progress::new(55).value(), 55);
        assert_eq!(Progress::new(255), Progress::COMPLETE);
        assert!(Progress::new(MAX_PROGRESS).is_complete());
    }

    #[test]
    fn progress_try_from_is_strict() {
        assert_eq!(
            Progress::try_from(101).unwrap_err(),
            ProjectValidationError::ProgressOutOfRange(101)
        );
        assert_eq!(Progress::try_from(100).unwrap(), Progress::COMPLETE);
    }

    #[test]
    fn progress_displays_as_percentage() {
        assert_eq!(Progress::new(42).to_string(), "42%");
    }

    #[test]
    fn new_rejects_empty_name_but_keeps_whitespace() {
        let deadline = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(
            Project::new("", deadline).unwrap_err(),
            ProjectValidationError::EmptyName
        );
        assert_eq!(Project::new("  ", deadline).unwrap().name, "  ");
    }
}
