//! The configuration object and its lazily resolved paths

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pods_fs::PodPath;
use serde_yaml::Value;

use super::environment::Environment;
use super::settings::{self, Flag, Settings};
use crate::Result;
use crate::lockfile::Lockfile;
use crate::manifest::Manifest;
use crate::notify::{Notifier, StdoutNotifier};
use crate::sandbox::Sandbox;

/// Flags and project paths for the running process.
///
/// Paths and collaborators are computed on first access and cached until
/// overwritten through the matching setter. Passing `None` to a setter
/// clears the cache so the next access recomputes it.
pub struct Config {
    env: Environment,
    settings: Settings,
    unknown_settings: BTreeMap<String, Value>,
    notifier: Box<dyn Notifier>,

    repos_dir: Option<PathBuf>,
    installation_root: Option<PathBuf>,
    sandbox_root: Option<PathBuf>,
    manifest_path: Option<PathBuf>,
    lockfile_path: Option<PathBuf>,

    sandbox: Option<Sandbox>,
    manifest: Option<Manifest>,
    lockfile: Option<Lockfile>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("env", &self.env)
            .field("settings", &self.settings)
            .field("unknown_settings", &self.unknown_settings)
            .field("repos_dir", &self.repos_dir)
            .field("installation_root", &self.installation_root)
            .field("manifest_path", &self.manifest_path)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load configuration for the current process environment.
    pub fn load() -> Result<Self> {
        Self::with_environment(Environment::capture()?)
    }

    /// Load configuration for `env`.
    ///
    /// Starts from the defaults and applies `{repos_dir}/config.yaml` when it
    /// exists. A malformed settings file fails construction.
    pub fn with_environment(env: Environment) -> Result<Self> {
        let mut config = Self::defaults(env);
        let path = config.settings_path();

        if let Some(overrides) = settings::read_settings(&path)? {
            config.unknown_settings = config.settings.merge(&overrides);
        }

        Ok(config)
    }

    /// Configuration with default flags only; the settings file is not read.
    pub fn defaults(env: Environment) -> Self {
        Self {
            env,
            settings: Settings::default(),
            unknown_settings: BTreeMap::new(),
            notifier: Box::new(StdoutNotifier),
            repos_dir: None,
            installation_root: None,
            sandbox_root: None,
            manifest_path: None,
            lockfile_path: None,
            sandbox: None,
            manifest: None,
            lockfile: None,
        }
    }

    /// Send notices to `notifier` instead of standard output.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Entries of the settings file that did not apply to any flag.
    pub fn unknown_settings(&self) -> &BTreeMap<String, Value> {
        &self.unknown_settings
    }

    // ---- flags ----

    /// Effective verbosity; always `false` while silent.
    pub fn verbose(&self) -> bool {
        self.settings.verbose && !self.settings.silent
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.settings.verbose = verbose;
    }

    pub fn silent(&self) -> bool {
        self.settings.silent
    }

    pub fn set_silent(&mut self, silent: bool) {
        self.settings.silent = silent;
    }

    pub fn skip_repo_update(&self) -> bool {
        self.settings.skip_repo_update
    }

    pub fn set_skip_repo_update(&mut self, skip: bool) {
        self.settings.skip_repo_update = skip;
    }

    /// On when set explicitly, or unless `CP_AGGRESSIVE_CACHE=FALSE`.
    ///
    /// Storing `false` cannot turn the cache off while the environment
    /// leaves it enabled.
    pub fn aggressive_cache(&self) -> bool {
        self.settings.aggressive_cache || self.env.aggressive_cache_enabled()
    }

    pub fn set_aggressive_cache(&mut self, aggressive: bool) {
        self.settings.aggressive_cache = aggressive;
    }

    pub fn clean(&self) -> bool {
        self.settings.clean
    }

    pub fn set_clean(&mut self, clean: bool) {
        self.settings.clean = clean;
    }

    pub fn integrate_targets(&self) -> bool {
        self.settings.integrate_targets
    }

    pub fn set_integrate_targets(&mut self, integrate: bool) {
        self.settings.integrate_targets = integrate;
    }

    pub fn new_version_message(&self) -> bool {
        self.settings.new_version_message
    }

    pub fn set_new_version_message(&mut self, show: bool) {
        self.settings.new_version_message = show;
    }

    /// Effective value of `flag`.
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::Verbose => self.verbose(),
            Flag::AggressiveCache => self.aggressive_cache(),
            other => self.settings.get(other),
        }
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.settings.set(flag, value);
    }

    // ---- paths ----

    /// Sources directory, `~/.cocoapods` unless `CP_REPOS_DIR` is set.
    pub fn repos_dir(&mut self) -> &Path {
        let env = &self.env;
        self.repos_dir.get_or_insert_with(|| env.default_repos_dir())
    }

    pub fn set_repos_dir(&mut self, repos_dir: Option<PathBuf>) {
        self.repos_dir = repos_dir;
    }

    /// User settings file inside the sources directory.
    pub fn settings_path(&mut self) -> PathBuf {
        self.repos_dir().join(PodPath::UserSettings)
    }

    /// Project templates inside the sources directory.
    pub fn templates_dir(&mut self) -> PathBuf {
        self.repos_dir().join(PodPath::TemplatesDir)
    }

    /// Nearest ancestor of the working directory holding a manifest, or the
    /// working directory itself.
    ///
    /// When an ancestor other than the working directory is selected a
    /// `[in <dir>]` notice is emitted, unless silent.
    pub fn installation_root(&mut self) -> &Path {
        let root = match self.installation_root.take() {
            Some(root) => root,
            None => self.discover_installation_root(),
        };
        self.installation_root.insert(root)
    }

    fn discover_installation_root(&mut self) -> PathBuf {
        let discovery = pods_fs::find_installation_root(&self.env.working_dir);

        if discovery.root != self.env.working_dir {
            self.notice(&format!("[in {}]", discovery.root.display()));
        }
        if self.manifest_path.is_none() {
            self.manifest_path = discovery.manifest;
        }

        discovery.root
    }

    pub fn set_installation_root(&mut self, root: Option<PathBuf>) {
        self.installation_root = root;
    }

    /// `installation_root/Pods`.
    pub fn sandbox_root(&mut self) -> &Path {
        let root = match self.sandbox_root.take() {
            Some(root) => root,
            None => self.installation_root().join(PodPath::SandboxDir),
        };
        self.sandbox_root.insert(root)
    }

    pub fn set_sandbox_root(&mut self, root: Option<PathBuf>) {
        self.sandbox_root = root;
    }

    /// Highest-priority manifest in the installation root, if any.
    ///
    /// A missing manifest is not cached, so one created later is picked up.
    pub fn manifest_path(&mut self) -> Option<&Path> {
        if self.manifest_path.is_none() {
            let root = self.installation_root().to_path_buf();
            self.manifest_path = pods_fs::manifest_in(&root);
        }
        self.manifest_path.as_deref()
    }

    pub fn set_manifest_path(&mut self, path: Option<PathBuf>) {
        self.manifest_path = path;
    }

    /// `installation_root/Podfile.lock`, whether or not it exists.
    pub fn lockfile_path(&mut self) -> &Path {
        let path = match self.lockfile_path.take() {
            Some(path) => path,
            None => self.installation_root().join(PodPath::Lockfile),
        };
        self.lockfile_path.insert(path)
    }

    pub fn set_lockfile_path(&mut self, path: Option<PathBuf>) {
        self.lockfile_path = path;
    }

    // ---- collaborators ----

    /// Sandbox rooted at [`sandbox_root`](Self::sandbox_root).
    pub fn sandbox(&mut self) -> &Sandbox {
        let sandbox = match self.sandbox.take() {
            Some(sandbox) => sandbox,
            None => Sandbox::new(self.sandbox_root()),
        };
        self.sandbox.insert(sandbox)
    }

    pub fn set_sandbox(&mut self, sandbox: Option<Sandbox>) {
        self.sandbox = sandbox;
    }

    /// Parsed manifest, or `None` without a manifest path.
    pub fn manifest(&mut self) -> Result<Option<&Manifest>> {
        if self.manifest.is_none() {
            if let Some(path) = self.manifest_path().map(Path::to_path_buf) {
                tracing::debug!(?path, "Loading manifest");
                self.manifest = Some(Manifest::from_file(&path)?);
            }
        }
        Ok(self.manifest.as_ref())
    }

    pub fn set_manifest(&mut self, manifest: Option<Manifest>) {
        self.manifest = manifest;
    }

    /// Parsed lockfile, or `None` when the lockfile does not exist.
    pub fn lockfile(&mut self) -> Result<Option<&Lockfile>> {
        if self.lockfile.is_none() {
            let path = self.lockfile_path().to_path_buf();
            self.lockfile = Lockfile::load(&path)?;
        }
        Ok(self.lockfile.as_ref())
    }

    pub fn set_lockfile(&mut self, lockfile: Option<Lockfile>) {
        self.lockfile = lockfile;
    }

    fn notice(&self, message: &str) {
        tracing::info!("{message}");
        if !self.silent() {
            self.notifier.notice(message);
        }
    }
}
