use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variables consulted when `mavenHome` is blank in the config,
/// in order.
const MAVEN_HOME_ENV: &str = "MAVEN_HOME";
const M2_HOME_ENV: &str = "M2_HOME";

const POM_FILE_NAME: &str = "pom.xml";

/// Root configuration structure, loaded once at startup and passed by
/// reference into the cleaner and orchestrator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base directory containing all checked-out modules
    dir_base_checkout: String,
    /// Maven installation path; environment fallback when blank
    #[serde(default)]
    maven_home: String,
    /// Goals passed to every module build, in order
    goals: Vec<String>,
    /// Local repository pruning settings
    #[serde(default)]
    local_repository: LocalRepositoryConfig,
    /// Module names to build, in order
    modules: Vec<String>,
    /// Abort the run on the first failing module
    throw_failure: bool,
}

/// Settings for pruning the local repository before the builds start.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalRepositoryConfig {
    #[serde(default)]
    pub enable: bool,
    /// Maximum age in whole calendar days before a directory is pruned
    #[serde(default)]
    pub max_age_files: u32,
    #[serde(default)]
    pub path: String,
}

/// A module name paired with the pom file its build targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub name: String,
    pub pom_file: PathBuf,
}

impl Config {
    /// Load configuration from `path`, or from the default location under
    /// the user config directory when no path is given.
    ///
    /// A missing or malformed file is fatal; the returned error carries the
    /// offending path and the underlying cause.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        let content =
            std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
                path: path.clone(),
                source,
            })?;

        let config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.local_repository.enable && self.local_repository.path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "localRepository.path must be set when localRepository.enable is true".into(),
            ));
        }
        Ok(())
    }

    /// Base directory for all checked-out modules.
    pub fn checkout_dir(&self) -> &str {
        &self.dir_base_checkout
    }

    /// Maven installation directory.
    ///
    /// The config value wins when non-blank; otherwise `MAVEN_HOME` and then
    /// `M2_HOME` are consulted.
    pub fn maven_home(&self) -> PathBuf {
        resolve_maven_home(
            &self.maven_home,
            env::var(MAVEN_HOME_ENV).ok(),
            env::var(M2_HOME_ENV).ok(),
        )
    }

    /// Goals passed to every module build, in configured order.
    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    /// Modules to build, in configured order, each resolved to its pom file.
    ///
    /// Recomputed on each call; the pom path is the checkout dir, the module
    /// name and the pom filename concatenated.
    pub fn modules(&self) -> Vec<ModuleEntry> {
        self.modules
            .iter()
            .map(|name| ModuleEntry {
                name: name.clone(),
                pom_file: PathBuf::from(format!("{}{}", self.dir_base_checkout, name))
                    .join(POM_FILE_NAME),
            })
            .collect()
    }

    pub fn local_repository(&self) -> &LocalRepositoryConfig {
        &self.local_repository
    }

    /// Whether a failing module aborts the remaining builds.
    pub fn fail_fast(&self) -> bool {
        self.throw_failure
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mvn-shepherd")
        .join("config.json")
}

fn resolve_maven_home(
    configured: &str,
    maven_home: Option<String>,
    m2_home: Option<String>,
) -> PathBuf {
    [Some(configured.to_string()), maven_home, m2_home]
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Config {
        serde_json::from_str(json).unwrap()
    }

    fn sample() -> Config {
        parse(
            r#"{
                "dirBaseCheckout": "/home/ci/checkout/",
                "mavenHome": "/opt/maven",
                "goals": ["clean", "install"],
                "localRepository": { "enable": true, "maxAgeFiles": 30, "path": "/home/ci/.m2/repository" },
                "modules": ["core", "web", "batch"],
                "throwFailure": true
            }"#,
        )
    }

    #[test]
    fn parses_named_fields() {
        let config = sample();
        assert_eq!(config.checkout_dir(), "/home/ci/checkout/");
        assert_eq!(config.goals(), ["clean", "install"]);
        assert!(config.local_repository().enable);
        assert_eq!(config.local_repository().max_age_files, 30);
        assert_eq!(config.local_repository().path, "/home/ci/.m2/repository");
        assert!(config.fail_fast());
    }

    #[test]
    fn modules_keep_configured_order() {
        let config = sample();
        let modules = config.modules();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["core", "web", "batch"]);
    }

    #[test]
    fn module_pom_path_concatenates_checkout_dir() {
        let config = sample();
        let modules = config.modules();
        assert_eq!(
            modules[0].pom_file,
            PathBuf::from("/home/ci/checkout/core/pom.xml")
        );
    }

    #[test]
    fn optional_keys_default() {
        let config = parse(
            r#"{
                "dirBaseCheckout": "/src/",
                "goals": ["install"],
                "modules": [],
                "throwFailure": false
            }"#,
        );
        assert!(!config.local_repository().enable);
        assert_eq!(config.local_repository().max_age_files, 0);
        assert!(config.modules().is_empty());
    }

    #[test]
    fn missing_required_key_is_an_error() {
        let result: Result<Config, _> = serde_json::from_str(
            r#"{ "goals": [], "modules": [], "throwFailure": false }"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("dirBaseCheckout"));
    }

    #[test]
    fn enabled_pruning_requires_a_path() {
        let config = parse(
            r#"{
                "dirBaseCheckout": "/src/",
                "goals": ["install"],
                "localRepository": { "enable": true, "maxAgeFiles": 10, "path": " " },
                "modules": [],
                "throwFailure": false
            }"#,
        );
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn configured_maven_home_wins() {
        let home = resolve_maven_home(
            "/opt/maven",
            Some("/env/maven".into()),
            Some("/env/m2".into()),
        );
        assert_eq!(home, PathBuf::from("/opt/maven"));
    }

    #[test]
    fn blank_config_falls_back_to_maven_home_env() {
        let home = resolve_maven_home("  ", Some("/env/maven".into()), Some("/env/m2".into()));
        assert_eq!(home, PathBuf::from("/env/maven"));
    }

    #[test]
    fn blank_everything_falls_back_to_m2_home_env() {
        let home = resolve_maven_home("", None, Some("/env/m2".into()));
        assert_eq!(home, PathBuf::from("/env/m2"));
    }

    #[test]
    fn maven_home_accessor_uses_config_value() {
        let config = sample();
        assert_eq!(config.maven_home(), PathBuf::from("/opt/maven"));
    }

    #[test]
    fn load_missing_file_is_fatal() {
        let result = Config::load(Some(Path::new("/nonexistent/config.json")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
