//! Shared test utilities for the pods workspace.
//!
//! This crate provides standardised project fixtures so the crate test
//! suites do not each hand-roll temporary directory trees. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`project`] — [`TestProject`] builder for project and sources trees

pub mod project;

pub use project::TestProject;
