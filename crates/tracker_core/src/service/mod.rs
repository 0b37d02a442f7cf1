//! Core use-case services.
//!
//! # Responsibility
//! - Translate raw UI input into `ProjectStore` transitions.
//! - Keep presentation layers decoupled from store details.

pub mod draft;
pub mod project_service;
