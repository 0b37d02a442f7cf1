//! In-memory project store and its state transitions.
//!
//! # Responsibility
//! - Hold the ordered project list for one session.
//! - Apply add/update/delete transitions addressed by position or stable ID.
//!
//! # Invariants
//! - Projects keep insertion order; nothing re-sorts them.
//! - A new project never starts with more than `max_subcategories` entries.
//! - A failed transition leaves the store exactly as it was.

use crate::model::deadline::Deadline;
use crate::model::project::{Progress, Project, ProjectId};
use crate::model::subcategory::{
    parse_subcategory_names, Subcategory, SubcategoryId, DEFAULT_MAX_SUBCATEGORIES,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Addressing errors for store transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ProjectIndexOutOfRange {
        index: usize,
        len: usize,
    },
    SubcategoryIndexOutOfRange {
        project_index: usize,
        index: usize,
        len: usize,
    },
    ProjectNotFound(ProjectId),
    SubcategoryNotFound {
        project_id: ProjectId,
        subcategory_id: SubcategoryId,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectIndexOutOfRange { index, len } => {
                write!(f, "project index {index} out of range (len {len})")
            }
            Self::SubcategoryIndexOutOfRange {
                project_index,
                index,
                len,
            } => write!(
                f,
                "subcategory index {index} out of range for project {project_index} (len {len})"
            ),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::SubcategoryNotFound {
                project_id,
                subcategory_id,
            } => write!(
                f,
                "subcategory {subcategory_id} not found in project {project_id}"
            ),
        }
    }
}

impl Error for StoreError {}

/// Ordered, session-scoped collection of projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<Project>,
    max_subcategories: usize,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::with_max_subcategories(DEFAULT_MAX_SUBCATEGORIES)
    }

    /// Creates an empty store with a custom creation-time subcategory cap.
    pub fn with_max_subcategories(max_subcategories: usize) -> Self {
        Self {
            projects: Vec::new(),
            max_subcategories,
        }
    }

    pub fn max_subcategories(&self) -> usize {
        self.max_subcategories
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn project_at(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn position_of(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|project| project.id == id)
    }

    /// Appends a new project built from form input.
    ///
    /// # Contract
    /// - Returns `None` and leaves the store untouched when `name` is empty.
    /// - `name` is stored exactly as given.
    /// - Subcategories come from `raw_subcategories` (comma-separated,
    ///   each token trimmed, truncated to `max_subcategories`) and share
    ///   `deadline`.
    /// - The new project starts at zero progress.
    pub fn add_project(
        &mut self,
        name: &str,
        raw_subcategories: &str,
        deadline: Deadline,
    ) -> Option<ProjectId> {
        let mut project = Project::new(name, deadline).ok()?;
        project.subcategories = parse_subcategory_names(raw_subcategories, self.max_subcategories)
            .into_iter()
            .map(|sub_name| Subcategory::new(sub_name, deadline))
            .collect();

        let id = project.id;
        self.projects.push(project);
        Some(id)
    }

    pub fn update_project_deadline(&mut self, index: usize, deadline: Deadline) -> StoreResult<()> {
        self.project_mut(index)?.deadline = deadline;
        Ok(())
    }

    pub fn update_subcategory_deadline(
        &mut self,
        project_index: usize,
        sub_index: usize,
        deadline: Deadline,
    ) -> StoreResult<()> {
        self.subcategory_mut(project_index, sub_index)?.deadline = deadline;
        Ok(())
    }

    /// Removes the project at `index`; later projects shift left.
    pub fn delete_project(&mut self, index: usize) -> StoreResult<Project> {
        self.check_project_index(index)?;
        Ok(self.projects.remove(index))
    }

    pub fn delete_subcategory(
        &mut self,
        project_index: usize,
        sub_index: usize,
    ) -> StoreResult<Subcategory> {
        self.subcategory_mut(project_index, sub_index)?;
        Ok(self.projects[project_index].subcategories.remove(sub_index))
    }

    /// Overwrites progress; values above 100 are clamped.
    pub fn set_progress(&mut self, index: usize, value: u8) -> StoreResult<()> {
        self.project_mut(index)?.progress = Progress::new(value);
        Ok(())
    }

    pub fn update_project_deadline_by_id(
        &mut self,
        id: ProjectId,
        deadline: Deadline,
    ) -> StoreResult<()> {
        let index = self.index_of(id)?;
        self.update_project_deadline(index, deadline)
    }

    pub fn update_subcategory_deadline_by_id(
        &mut self,
        project_id: ProjectId,
        subcategory_id: SubcategoryId,
        deadline: Deadline,
    ) -> StoreResult<()> {
        let (index, sub_index) = self.indices_of(project_id, subcategory_id)?;
        self.update_subcategory_deadline(index, sub_index, deadline)
    }

    pub fn delete_project_by_id(&mut self, id: ProjectId) -> StoreResult<Project> {
        let index = self.index_of(id)?;
        self.delete_project(index)
    }

    pub fn delete_subcategory_by_id(
        &mut self,
        project_id: ProjectId,
        subcategory_id: SubcategoryId,
    ) -> StoreResult<Subcategory> {
        let (index, sub_index) = self.indices_of(project_id, subcategory_id)?;
        self.delete_subcategory(index, sub_index)
    }

    pub fn set_progress_by_id(&mut self, id: ProjectId, value: u8) -> StoreResult<()> {
        let index = self.index_of(id)?;
        self.set_progress(index, value)
    }

    fn check_project_index(&self, index: usize) -> StoreResult<()> {
        if index >= self.projects.len() {
            return Err(StoreError::ProjectIndexOutOfRange {
                index,
                len: self.projects.len(),
            });
        }
        Ok(())
    }

    fn project_mut(&mut self, index: usize) -> StoreResult<&mut Project> {
        self.check_project_index(index)?;
        Ok(&mut self.projects[index])
    }

    fn subcategory_mut(
        &mut self,
        project_index: usize,
        sub_index: usize,
    ) -> StoreResult<&mut Subcategory> {
        let project = self.project_mut(project_index)?;
        let len = project.subcategories.len();
        project
            .subcategories
            .get_mut(sub_index)
            .ok_or(StoreError::SubcategoryIndexOutOfRange {
                project_index,
                index: sub_index,
                len,
            })
    }

    fn index_of(&self, id: ProjectId) -> StoreResult<usize> {
        self.position_of(id).ok_or(StoreError::ProjectNotFound(id))
    }

    fn indices_of(
        &self,
        project_id: ProjectId,
        subcategory_id: SubcategoryId,
    ) -> StoreResult<(usize, usize)> {
        let index = self.index_of(project_id)?;
        let sub_index = self.projects[index]
            .subcategory_position(subcategory_id)
            .ok_or(StoreError::SubcategoryNotFound {
                project_id,
                subcategory_id,
            })?;
        Ok((index, sub_index))
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectStore, StoreError};
    use chrono::NaiveDate;

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn add_project_keeps_name_as_typed() {
        let mut store = ProjectStore::new();
        let id = store.add_project("  Alpha ", "", deadline()).unwrap();
        assert_eq!(store.project(id).unwrap().name, "  Alpha ");
        assert!(store.project(id).unwrap().subcategories.is_empty());
    }

    #[test]
    fn custom_subcategory_cap_applies() {
        let mut store = ProjectStore::with_max_subcategories(2);
        store.add_project("Alpha", "a,b,c", deadline()).unwrap();
        assert_eq!(store.projects()[0].subcategories.len(), 2);
    }

    #[test]
    fn subcategory_errors_report_project_len() {
        let mut store = ProjectStore::new();
        store.add_project("Alpha", "a", deadline()).unwrap();
        let err = store.delete_subcategory(0, 3).unwrap_err();
        assert_eq!(
            err,
            StoreError::SubcategoryIndexOutOfRange {
                project_index: 0,
                index: 3,
                len: 1
            }
        );
        assert_eq!(
            err.to_string(),
            "subcategory index 3 out of range for project 0 (len 1)"
        );
    }
}
