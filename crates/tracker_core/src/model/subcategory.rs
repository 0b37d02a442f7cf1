//! Subcategory record and comma-separated name parsing.

use crate::model::deadline::Deadline;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a subcategory within the session.
pub type SubcategoryId = Uuid;

/// Upper bound on subcategories accepted when a project is created.
pub const DEFAULT_MAX_SUBCATEGORIES: usize = 10;

/// Named child item of a project with its own deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
    pub deadline: Deadline,
}

impl Subcategory {
    /// Creates a subcategory with a generated stable ID.
    pub fn new(name: impl Into<String>, deadline: Deadline) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            deadline,
        }
    }
}

/// Splits raw form text into subcategory names.
///
/// # Contract
/// - An empty field yields no names.
/// - Otherwise every comma-separated token becomes one name, trimmed;
///   blank tokens are kept (`"a,,b"` has three names).
/// - At most `limit` tokens are kept, in input order.
pub fn parse_subcategory_names(raw: &str, limit: usize) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',')
        .take(limit)
        .map(|token| token.trim().to_string())
        .collect()
}
