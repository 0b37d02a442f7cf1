//! Project tracking use-case service.
//!
//! # Responsibility
//! - Turn raw form input (text fields, date picker text, slider values)
//!   into store transitions.
//! - Compute default deadlines from the injected clock and config.
//! - Emit one metadata-only log event per transition.
//!
//! # Invariants
//! - Every public mutator performs at most one store transition.
//! - Input that fails to parse never reaches the store.
//! - Log lines never contain user-entered names.

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, TrackerConfig};
use crate::model::deadline::{
    default_deadline, format_deadline, parse_deadline, DeadlineParseError,
};
use crate::model::project::{Project, ProjectId, MAX_PROGRESS};
use crate::model::subcategory::{Subcategory, SubcategoryId};
use crate::store::project_store::{ProjectStore, StoreError};
use log::{debug, info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for project use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Index or ID did not address an existing item.
    Store(StoreError),
    /// Date picker text was not a `YYYY-MM-DD` date.
    Deadline(DeadlineParseError),
    /// Slider text was not an integer.
    InvalidProgressInput(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Deadline(err) => write!(f, "{err}"),
            Self::InvalidProgressInput(value) => {
                write!(f, "progress input `{value}` is not an integer")
            }
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Deadline(err) => Some(err),
            Self::InvalidProgressInput(_) => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<DeadlineParseError> for ServiceError {
    fn from(value: DeadlineParseError) -> Self {
        Self::Deadline(value)
    }
}

impl ServiceError {
    /// Stable machine-readable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Store(StoreError::ProjectIndexOutOfRange { .. }) => "project_index_out_of_range",
            Self::Store(StoreError::SubcategoryIndexOutOfRange { .. }) => {
                "subcategory_index_out_of_range"
            }
            Self::Store(StoreError::ProjectNotFound(_)) => "project_not_found",
            Self::Store(StoreError::SubcategoryNotFound { .. }) => "subcategory_not_found",
            Self::Deadline(DeadlineParseError::Malformed(_)) => "deadline_malformed",
            Self::Deadline(DeadlineParseError::InvalidDate(_)) => "deadline_invalid_date",
            Self::InvalidProgressInput(_) => "progress_not_integer",
        }
    }
}

/// Render-ready view of one subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcategoryView {
    pub id: SubcategoryId,
    pub name: String,
    /// `YYYY-MM-DD`, ready for a date picker.
    pub deadline: String,
}

/// Render-ready view of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectView {
    pub id: ProjectId,
    pub name: String,
    /// `YYYY-MM-DD`, ready for a date picker.
    pub deadline: String,
    pub progress: u8,
    /// Progress text such as `55%`.
    pub progress_label: String,
    pub subcategories: Vec<SubcategoryView>,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            deadline: format_deadline(project.deadline),
            progress: project.progress.value(),
            progress_label: project.progress.to_string(),
            subcategories: project.subcategories.iter().map(SubcategoryView::from).collect(),
        }
    }
}

impl From<&Subcategory> for SubcategoryView {
    fn from(sub: &Subcategory) -> Self {
        Self {
            id: sub.id,
            name: sub.name.clone(),
            deadline: format_deadline(sub.deadline),
        }
    }
}

/// Use-case facade over one session's `ProjectStore`.
pub struct ProjectService<C: Clock = SystemClock> {
    store: ProjectStore,
    clock: C,
    config: TrackerConfig,
}

impl ProjectService<SystemClock> {
    /// Creates a service on the wall clock with default configuration.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ProjectService<C> {
    /// Creates a service with an empty store and default configuration.
    pub fn new(clock: C) -> Self {
        let config = TrackerConfig::default();
        Self {
            store: ProjectStore::with_max_subcategories(config.max_subcategories),
            clock,
            config,
        }
    }

    /// Creates a service with custom creation defaults.
    ///
    /// # Errors
    /// - Returns `ConfigError` when `config` fails validation.
    pub fn with_config(clock: C, config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store: ProjectStore::with_max_subcategories(config.max_subcategories),
            clock,
            config,
        })
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn into_store(self) -> ProjectStore {
        self.store
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Adds a project from the name and comma-separated subcategory fields.
    ///
    /// # Contract
    /// - Empty `name` is ignored and returns `None`.
    /// - Project and subcategory deadlines default to today plus the
    ///   configured offset.
    pub fn add_project(&mut self, name: &str, raw_subcategories: &str) -> Option<ProjectId> {
        let deadline = default_deadline(self.clock.today(), self.config.deadline_offset_days);
        match self.store.add_project(name, raw_subcategories, deadline) {
            Some(id) => {
                let subcategories = self
                    .store
                    .project(id)
                    .map_or(0, |project| project.subcategories.len());
                info!(
                    "event=project_add module=service status=ok project_id={} subcategories={} total={}",
                    id,
                    subcategories,
                    self.store.len()
                );
                Some(id)
            }
            None => {
                debug!("event=project_add module=service status=skipped reason=empty_name");
                None
            }
        }
    }

    /// Replaces a project deadline from date picker text.
    pub fn update_project_deadline(&mut self, index: usize, raw_date: &str) -> ServiceResult<()> {
        let result = parse_deadline(raw_date)
            .map_err(ServiceError::from)
            .and_then(|deadline| {
                self.store
                    .update_project_deadline(index, deadline)
                    .map_err(ServiceError::from)
            });
        log_transition("project_deadline_update", &result);
        result
    }

    /// Replaces a subcategory deadline from date picker text.
    pub fn update_subcategory_deadline(
        &mut self,
        index: usize,
        sub_index: usize,
        raw_date: &str,
    ) -> ServiceResult<()> {
        let result = parse_deadline(raw_date)
            .map_err(ServiceError::from)
            .and_then(|deadline| {
                self.store
                    .update_subcategory_deadline(index, sub_index, deadline)
                    .map_err(ServiceError::from)
            });
        log_transition("subcategory_deadline_update", &result);
        result
    }

    pub fn delete_project(&mut self, index: usize) -> ServiceResult<Project> {
        let result = self.store.delete_project(index).map_err(ServiceError::from);
        log_transition("project_delete", &result);
        result
    }

    pub fn delete_subcategory(
        &mut self,
        index: usize,
        sub_index: usize,
    ) -> ServiceResult<Subcategory> {
        let result = self
            .store
            .delete_subcategory(index, sub_index)
            .map_err(ServiceError::from);
        log_transition("subcategory_delete", &result);
        result
    }

    /// Overwrites progress; values above 100 are clamped.
    pub fn set_progress(&mut self, index: usize, value: u8) -> ServiceResult<()> {
        let result = self
            .store
            .set_progress(index, value)
            .map_err(ServiceError::from);
        log_transition("progress_set", &result);
        result
    }

    /// Overwrites progress from range-control text.
    ///
    /// Integer text is clamped into `0..=100`; anything else is rejected
    /// before touching the store.
    pub fn set_progress_from_input(&mut self, index: usize, raw: &str) -> ServiceResult<()> {
        let value = match parse_progress_input(raw) {
            Ok(value) => value,
            Err(err) => {
                log_transition::<()>("progress_set", &Err(err.clone()));
                return Err(err);
            }
        };
        self.set_progress(index, value)
    }

    /// Builds render-ready views of every project in store order.
    pub fn snapshot(&self) -> Vec<ProjectView> {
        self.store.projects().iter().map(ProjectView::from).collect()
    }
}

fn parse_progress_input(raw: &str) -> ServiceResult<u8> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| ServiceError::InvalidProgressInput(trimmed.to_string()))?;
    let clamped = value.clamp(0, i64::from(MAX_PROGRESS));
    u8::try_from(clamped).map_err(|_| ServiceError::InvalidProgressInput(trimmed.to_string()))
}

fn log_transition<T>(event: &str, result: &ServiceResult<T>) {
    match result {
        Ok(_) => info!("event={event} module=service status=ok"),
        Err(err) => warn!(
            "event={event} module=service status=error error_code={}",
            err.code()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_progress_input, ServiceError};

    #[test]
    fn progress_input_accepts_integers_and_clamps() {
        assert_eq!(parse_progress_input("55").unwrap(), 55);
        assert_eq!(parse_progress_input(" 7 ").unwrap(), 7);
        assert_eq!(parse_progress_input("-3").unwrap(), 0);
        assert_eq!(parse_progress_input("250").unwrap(), 100);
    }

    #[test]
    fn progress_input_rejects_non_integers() {
        for raw in ["", "abc", "12.5"] {
            let err = parse_progress_input(raw).unwrap_err();
            assert!(matches!(err, ServiceError::InvalidProgressInput(_)));
            assert_eq!(err.code(), "progress_not_integer");
        }
    }
}
