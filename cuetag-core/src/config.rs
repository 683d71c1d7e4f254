use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

use crate::variant::DEFAULT_VARIANT;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CuetagConfig {
    #[serde(default)]
    pub eval: EvalConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EvalConfig {
    pub corpus_path: String,
    pub variant: String,
    pub limit: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            corpus_path: "data/samples.csv".to_string(),
            variant: DEFAULT_VARIANT.to_string(),
            limit: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl CuetagConfig {
    /// Load `path` (optional, TOML) overlaid with `CUETAG_*` environment variables.
    ///
    /// Nested keys use a double underscore: `CUETAG_EVAL__VARIANT=27_A`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Self::load_with(path, None)
    }

    /// Like [`CuetagConfig::load`], reading variables from `vars` instead of
    /// the process environment when given.
    pub fn load_with(path: &str, vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let defaults = EvalConfig::default();
        let s = Config::builder()
            .set_default("eval.corpus_path", defaults.corpus_path)?
            .set_default("eval.variant", defaults.variant)?
            .set_default("logging.level", LoggingConfig::default().level)?
            .add_source(File::with_name(path).required(false))
            .add_source(environment().source(vars))
            .build()?;
        s.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CUETAG")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let cfg = CuetagConfig::load("/nonexistent/cuetag-test-config").unwrap();
        assert_eq!(cfg.eval.corpus_path, "data/samples.csv");
        assert_eq!(cfg.eval.variant, "26_C");
        assert_eq!(cfg.eval.limit, None);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[eval]\ncorpus_path = \"corpus/dev.csv\"\nvariant = \"27_A\"\nlimit = 500\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let cfg = CuetagConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.eval.corpus_path, "corpus/dev.csv");
        assert_eq!(cfg.eval.variant, "27_A");
        assert_eq!(cfg.eval.limit, Some(500));
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[eval]\nvariant = \"26_A\"").unwrap();

        let cfg = CuetagConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.eval.variant, "26_A");
        assert_eq!(cfg.eval.corpus_path, "data/samples.csv");
        assert_eq!(cfg.logging.level, "info");
    }

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_vars_use_single_underscore_after_prefix() {
        let env = vars(&[
            ("CUETAG_EVAL__VARIANT", "27_A"),
            ("CUETAG_EVAL__LIMIT", "25"),
            ("CUETAG_LOGGING__LEVEL", "warn"),
        ]);
        let cfg = CuetagConfig::load_with("/nonexistent/cuetag-test-config", Some(env)).unwrap();
        assert_eq!(cfg.eval.variant, "27_A");
        assert_eq!(cfg.eval.limit, Some(25));
        assert_eq!(cfg.logging.level, "warn");
        assert_eq!(cfg.eval.corpus_path, "data/samples.csv");
    }

    #[test]
    fn test_env_vars_override_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[eval]\nvariant = \"26_A\"\nlimit = 500").unwrap();

        let env = vars(&[("CUETAG_EVAL__VARIANT", "27_B")]);
        let cfg = CuetagConfig::load_with(file.path().to_str().unwrap(), Some(env)).unwrap();
        assert_eq!(cfg.eval.variant, "27_B");
        assert_eq!(cfg.eval.limit, Some(500));
    }

    #[test]
    fn test_env_vars_with_other_prefix_are_ignored() {
        let env = vars(&[("OTHER_EVAL__VARIANT", "27_A")]);
        let cfg = CuetagConfig::load_with("/nonexistent/cuetag-test-config", Some(env)).unwrap();
        assert_eq!(cfg.eval.variant, "26_C");
    }
}
