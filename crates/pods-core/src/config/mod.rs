//! Process configuration
//!
//! A [`Config`] holds the boolean feature flags and the well-known project
//! paths for the running process.
//!
//! # Sources
//!
//! Flags are loaded in this order (later sources override earlier):
//!
//! 1. **Built-in defaults** - see [`Settings::default`]
//! 2. **User settings** - `{repos_dir}/config.yaml`, skipped when missing
//!
//! The environment contributes `CP_REPOS_DIR` (sources directory) and
//! `CP_AGGRESSIVE_CACHE` (aggressive caching default), captured once in an
//! [`Environment`].
//!
//! # Paths
//!
//! The installation root is the nearest ancestor of the working directory
//! holding `CocoaPods.podfile.yaml`, `CocoaPods.podfile` or `Podfile`
//! (checked in that order). The sandbox (`Pods/`) and lockfile
//! (`Podfile.lock`) live directly inside it.
//!
//! # Example
//!
//! ```ignore
//! use pods_core::Config;
//!
//! let mut config = Config::load()?;
//! if let Some(manifest) = config.manifest()? {
//!     println!("{} dependencies", manifest.dependencies().len());
//! }
//! println!("sandbox at {}", config.sandbox_root().display());
//! ```

mod environment;
mod instance;
mod report;
mod settings;

pub use environment::{AGGRESSIVE_CACHE_VAR, Environment, REPOS_DIR_VAR};
pub use instance::Config;
pub use report::ConfigReport;
pub use settings::{Flag, Settings, parse_settings, read_settings};
