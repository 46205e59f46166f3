//! Scaffold generation engine
//!
//! This module contains the create-if-absent generation components:
//! - `operation`: describes the outcome of a single scaffold item
//! - `executor`: applies operations to the filesystem and tallies the run

pub mod executor;
pub mod operation;
