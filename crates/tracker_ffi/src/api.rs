//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the project form and card actions to Dart via FRB.
//! - Own the single in-memory session store for the running UI.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutating call is serialized through one session lock.
//! - Indices are positions in the most recent `project_list` result.

use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracker_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ProjectService, ProjectView, ServiceError, SubcategoryView, SystemClock, MAX_PROGRESS,
};

static SESSION: Lazy<Mutex<ProjectService<SystemClock>>> =
    Lazy::new(|| Mutex::new(ProjectService::system()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Subcategory row rendered inside a project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryItem {
    pub subcategory_id: String,
    pub name: String,
    /// `YYYY-MM-DD` value for the date picker.
    pub deadline: String,
}

/// Project card payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub project_id: String,
    pub name: String,
    /// `YYYY-MM-DD` value for the date picker.
    pub deadline: String,
    /// Range control value in `0..=100`.
    pub progress: u32,
    /// Percentage text such as `55%`.
    pub progress_label: String,
    pub subcategories: Vec<SubcategoryItem>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectActionResponse {
    /// Whether the action changed session state.
    pub ok: bool,
    /// Created project ID for add actions.
    pub project_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ProjectActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            project_id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            message: message.into(),
        }
    }

    fn from_result<T>(action: &str, done: &str, result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(_) => Self::success(done),
            Err(err) => Self::failure(format!("{action} failed: {err}")),
        }
    }
}

/// Adds a project from the form's name and comma-separated subcategories.
///
/// # FFI contract
/// - Empty name returns `ok=false` and leaves the session unchanged.
/// - Returns the created project ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn project_add(name: String, subcategories: String) -> ProjectActionResponse {
    match lock_session().add_project(&name, &subcategories) {
        Some(id) => ProjectActionResponse {
            ok: true,
            project_id: Some(id.to_string()),
            message: "Project added.".to_string(),
        },
        None => ProjectActionResponse::failure("Project name is empty; nothing added."),
    }
}

/// Lists projects in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn project_list() -> Vec<ProjectItem> {
    lock_session()
        .snapshot()
        .into_iter()
        .map(to_project_item)
        .collect()
}

/// Replaces a project deadline with date picker text (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn project_update_deadline(index: u32, date: String) -> ProjectActionResponse {
    let result = lock_session().update_project_deadline(to_index(index), &date);
    ProjectActionResponse::from_result("project_update_deadline", "Deadline updated.", result)
}

/// Replaces a subcategory deadline with date picker text (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn subcategory_update_deadline(
    index: u32,
    sub_index: u32,
    date: String,
) -> ProjectActionResponse {
    let result =
        lock_session().update_subcategory_deadline(to_index(index), to_index(sub_index), &date);
    ProjectActionResponse::from_result("subcategory_update_deadline", "Deadline updated.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn project_delete(index: u32) -> ProjectActionResponse {
    let result = lock_session().delete_project(to_index(index));
    ProjectActionResponse::from_result("project_delete", "Project deleted.", result)
}

#[flutter_rust_bridge::frb(sync)]
pub fn subcategory_delete(index: u32, sub_index: u32) -> ProjectActionResponse {
    let result = lock_session().delete_subcategory(to_index(index), to_index(sub_index));
    ProjectActionResponse::from_result("subcategory_delete", "Subcategory deleted.", result)
}

/// Sets progress from the range control; values above 100 are clamped.
#[flutter_rust_bridge::frb(sync)]
pub fn project_set_progress(index: u32, value: u32) -> ProjectActionResponse {
    let clamped = u8::try_from(value.min(u32::from(MAX_PROGRESS))).unwrap_or(MAX_PROGRESS);
    let result = lock_session().set_progress(to_index(index), clamped);
    ProjectActionResponse::from_result("project_set_progress", "Progress updated.", result)
}

/// Discards all session state, as a page reload would.
#[flutter_rust_bridge::frb(sync)]
pub fn session_reset() {
    *lock_session() = ProjectService::system();
}

fn lock_session() -> MutexGuard<'static, ProjectService<SystemClock>> {
    SESSION.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        PoisonError::into_inner(poisoned)
    })
}

fn to_index(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn to_project_item(view: ProjectView) -> ProjectItem {
    ProjectItem {
        project_id: view.id.to_string(),
        name: view.name,
        deadline: view.deadline,
        progress: u32::from(view.progress),
        progress_label: view.progress_label,
        subcategories: view
            .subcategories
            .into_iter()
            .map(to_subcategory_item)
            .collect(),
    }
}

fn to_subcategory_item(view: SubcategoryView) -> SubcategoryItem {
    SubcategoryItem {
        subcategory_id: view.id.to_string(),
        name: view.name,
        deadline: view.deadline,
    }
}
