//! Filesystem layer for pods projects
//!
//! Provides the well-known project file names, upward manifest discovery and
//! text reads that report the offending path on failure.

pub mod constants;
pub mod discovery;
pub mod error;
pub mod io;

pub use constants::PodPath;
pub use discovery::{Discovery, find_installation_root, manifest_in};
pub use error::{Error, Result};
pub use io::{read_optional, read_text};
