//! In-memory view of the menu catalog.
//!
//! Each order validation runs against a [`CatalogSnapshot`] loaded fresh
//! from storage, so a validation pass sees one consistent menu state.

pub mod graph;
pub mod snapshot;

pub use graph::CompatibilityGraph;
pub use snapshot::CatalogSnapshot;
