//! Client-side data and state modules.
//!
//! DESIGN
//! ======
//! `catalog` holds the build-time tables the page renders; `selection` holds
//! the only mutable UI state. Components depend on these small models rather
//! than on each other.

pub mod catalog;
pub mod selection;
