//! Pending "add project" form input.

use crate::clock::Clock;
use crate::model::project::ProjectId;
use crate::service::project_service::ProjectService;

/// Text currently typed into the add-project form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    /// Comma-separated subcategory names.
    pub subcategories: String,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>, subcategories: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subcategories: subcategories.into(),
        }
    }

    /// Submits the draft to `service`.
    ///
    /// Both fields are cleared when a project was created; an ignored
    /// submission (empty name) keeps them so the user can fix the input.
    pub fn submit<C: Clock>(&mut self, service: &mut ProjectService<C>) -> Option<ProjectId> {
        let id = service.add_project(&self.name, &self.subcategories)?;
        self.name.clear();
        self.subcategories.clear();
        Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.subcategories.is_empty()
    }
}
