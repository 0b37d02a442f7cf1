//! Core domain logic for the project tracker.
//! This crate is the single source of truth for project/subcategory state
//! and its transitions; presentation layers only render and forward input.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, TrackerConfig, DEFAULT_DEADLINE_OFFSET_DAYS};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::deadline::{
    default_deadline, format_deadline, parse_deadline, Deadline, DeadlineParseError,
};
pub use model::project::{Progress, Project, ProjectId, ProjectValidationError, MAX_PROGRESS};
pub use model::subcategory::{
    parse_subcategory_names, Subcategory, SubcategoryId, DEFAULT_MAX_SUBCATEGORIES,
};
pub use service::draft::ProjectDraft;
pub use service::project_service::{
    ProjectService, ProjectView, ServiceError, ServiceResult, SubcategoryView,
};
pub use store::project_store::{ProjectStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
