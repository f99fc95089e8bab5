//! Tests for the process-wide configuration instance
//!
//! All tests in this file share one process-wide instance, so each one holds
//! `SERIAL` for its whole body.

use pods_core::config::{Config, Environment};
use pods_core::global;
use pods_test_utils::TestProject;
use std::sync::Mutex;

static SERIAL: Mutex<()> = Mutex::new(());

fn isolated(project: &TestProject) -> pods_core::Result<Config> {
    Config::with_environment(Environment::isolated(project.root(), project.repos_dir()))
}

#[test]
fn test_first_access_initializes() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    global::reset();
    let project = TestProject::new();

    assert!(!global::is_initialized());
    let clean = global::with_config_or_else(|| isolated(&project), |config| config.clean()).unwrap();

    assert!(clean);
    assert!(global::is_initialized());
    global::reset();
}

#[test]
fn test_state_persists_between_accesses() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let project = TestProject::new();
    global::replace(Some(isolated(&project).unwrap()));

    global::with_config(|config| config.set_verbose(true)).unwrap();
    let verbose = global::with_config(|config| config.verbose()).unwrap();

    assert!(verbose);
    global::reset();
}

#[test]
fn test_reset_yields_fresh_defaults() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let project = TestProject::new();
    global::replace(Some(isolated(&project).unwrap()));
    global::with_config(|config| {
        config.set_clean(false);
        config.set_silent(true);
    })
    .unwrap();

    global::reset();
    assert!(!global::is_initialized());

    let (clean, silent) =
        global::with_config_or_else(|| isolated(&project), |config| (config.clean(), config.silent()))
            .unwrap();
    assert!(clean);
    assert!(!silent);
    global::reset();
}

#[test]
fn test_replace_returns_previous_instance() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let project = TestProject::new();
    let mut first = isolated(&project).unwrap();
    first.set_skip_repo_update(true);
    global::replace(Some(first));

    let previous = global::replace(Some(isolated(&project).unwrap()));

    assert!(previous.unwrap().skip_repo_update());
    let skip = global::with_config(|config| config.skip_repo_update()).unwrap();
    assert!(!skip);
    global::reset();
}

#[test]
fn test_failed_init_stores_nothing() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    global::reset();
    let project = TestProject::new();
    project.write_settings("verbose: [true\n");

    let result = global::with_config_or_else(|| isolated(&project), |_| ());

    assert!(result.is_err());
    assert!(!global::is_initialized());
}

#[test]
fn test_init_is_skipped_when_instance_exists() {
    let _serial = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let project = TestProject::new();
    global::replace(Some(isolated(&project).unwrap()));

    let ran = global::with_config_or_else(|| panic!("init should not run"), |_| true).unwrap();

    assert!(ran);
    global::reset();
}
