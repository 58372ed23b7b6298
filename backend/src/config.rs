use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::warn;

/// Server settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    /// Directory holding `loan_scaler.json` and `loan_lr_model.json`.
    /// Relative paths resolve against the executable's directory.
    pub model_dir: PathBuf,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
}

pub const DEFAULT_MODEL_DIR: &str = "models";

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_base_dir(&executable_dir())
    }
}

impl ServerConfig {
    fn with_base_dir(base_dir: &Path) -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            workers: num_cpus::get(),
            model_dir: base_dir.join(DEFAULT_MODEL_DIR),
            json_limit: 64 * 1024,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), &executable_dir())
    }

    /// Builds the config from an arbitrary key lookup; unset keys keep their
    /// defaults and unparseable values are logged and ignored. A relative
    /// `MODEL_DIR` (and the default `models`) is joined onto `base_dir`; an
    /// absolute one is used as is.
    pub fn from_lookup<F>(lookup: F, base_dir: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::with_base_dir(base_dir);
        ServerConfig {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "PORT", defaults.port),
            workers: parsed(&lookup, "WORKERS", defaults.workers).max(1),
            model_dir: lookup("MODEL_DIR")
                .map(|dir| base_dir.join(dir))
                .unwrap_or(defaults.model_dir),
            json_limit: parsed(&lookup, "JSON_LIMIT", defaults.json_limit),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Directory of the running binary; artifacts ship alongside it.
pub fn executable_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        Err(e) => {
            warn!(
                "Cannot locate the executable ({}), resolving paths from the working directory",
                e
            );
            PathBuf::from(".")
        }
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned(), Path::new("/opt/loan/bin"))
    }

    #[test]
    fn defaults_when_unset() {
        let c = config(&[]);
        assert_eq!(c.bind_address(), "127.0.0.1:8000");
        assert_eq!(c.model_dir, PathBuf::from("/opt/loan/bin/models"));
        assert_eq!(c.json_limit, 64 * 1024);
        assert!(c.workers >= 1);
    }

    #[test]
    fn default_model_dir_sits_next_to_the_executable() {
        let exe = std::env::current_exe().unwrap();
        let expected = exe.parent().unwrap().join("models");
        assert_eq!(executable_dir().join(DEFAULT_MODEL_DIR), expected);
        assert_eq!(ServerConfig::default().model_dir, expected);
    }

    #[test]
    fn reads_overrides() {
        let c = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("WORKERS", "3"),
            ("MODEL_DIR", "/srv/loan"),
            ("JSON_LIMIT", "1024"),
        ]);
        assert_eq!(c.bind_address(), "0.0.0.0:9090");
        assert_eq!(c.workers, 3);
        assert_eq!(c.model_dir, PathBuf::from("/srv/loan"));
        assert_eq!(c.json_limit, 1024);
    }

    #[test]
    fn relative_model_dir_resolves_from_executable() {
        let c = config(&[("MODEL_DIR", "artifacts/v2")]);
        assert_eq!(c.model_dir, PathBuf::from("/opt/loan/bin/artifacts/v2"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config(&[("PORT", "eighty"), ("WORKERS", "0")]);
        assert_eq!(c.port, 8000);
        assert_eq!(c.workers, 1);
    }
}
