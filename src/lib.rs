//! Admin delete workflow for a tree-structured content store.
//!
//! The crate talks to the store's admin HTTP API (`/recordinfo`,
//! `/deleterecord`), derives the delete-confirmation plan for a record and
//! its sub-resources, executes the deletion and notifies the rest of the
//! admin UI. Rendering, routing and the backend itself live elsewhere.

pub mod api;
pub mod config;
pub mod events;
pub mod fetch;
pub mod i18n;
pub mod page;
pub mod paths;
pub mod plan;
pub mod records;
