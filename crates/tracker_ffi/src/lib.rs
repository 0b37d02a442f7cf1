//! Flutter bridge for the project tracker core.

pub mod api;
