//! Command implementations
//!
//! Each command takes the already-loaded configuration so that the global
//! flags have been applied before any path is resolved.

use colored::Colorize;
use pods_core::Config;

use crate::error::Result;

/// Print effective flags and resolved paths.
pub fn run_config(config: &mut Config, json: bool) -> Result<()> {
    let report = config.report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Flags".bold());
    for (name, value) in [
        ("verbose", report.verbose),
        ("silent", report.silent),
        ("skip_repo_update", report.skip_repo_update),
        ("aggressive_cache", report.aggressive_cache),
        ("clean", report.clean),
        ("integrate_targets", report.integrate_targets),
        ("new_version_message", report.new_version_message),
    ] {
        let value = if value { "true".green() } else { "false".red() };
        println!("  {name}: {value}");
    }

    println!("{}", "Paths".bold());
    println!("  repos_dir: {}", report.repos_dir.display());
    println!("  installation_root: {}", report.installation_root.display());
    println!("  sandbox_root: {}", report.sandbox_root.display());
    match report.manifest_path {
        Some(ref path) => println!("  manifest: {}", path.display()),
        None => println!("  manifest: {}", "none".dimmed()),
    }
    println!("  lockfile: {}", report.lockfile_path.display());

    if !report.ignored_settings.is_empty() {
        println!(
            "{} ignored settings: {}",
            "warning:".yellow().bold(),
            report.ignored_settings.join(", ")
        );
    }

    Ok(())
}

/// Print the project paths, one `name: path` per line.
pub fn run_paths(config: &mut Config) -> Result<()> {
    println!("installation_root: {}", config.installation_root().display());
    match config.manifest_path() {
        Some(path) => println!("manifest: {}", path.display()),
        None => println!("manifest: none"),
    }
    println!("lockfile: {}", config.lockfile_path().display());
    println!("sandbox: {}", config.sandbox().root().display());
    Ok(())
}

/// List locked pods with their versions.
pub fn run_lockfile(config: &mut Config) -> Result<()> {
    let path = config.lockfile_path().to_path_buf();

    let Some(lockfile) = config.lockfile()? else {
        println!("No lockfile at {}", path.display());
        return Ok(());
    };

    for pod in lockfile.pods() {
        match pod.version {
            Some(ref version) => println!("{} {}", pod.name.green(), version),
            None => println!("{}", pod.name.green()),
        }
    }
    if let Some(version) = lockfile.cocoapods_version() {
        println!("{}", format!("written by {version}").dimmed());
    }

    Ok(())
}
