/*
[INPUT]:  Defaults, optional YAML profile file, ADMIN_API_* environment variables
[OUTPUT]: Effective API profile and the client config derived from it
[POS]:    Configuration layer - backend connection setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use admin_api_client::{ClientConfig, Credentials, http::DEFAULT_BASE_URL};
use anyhow::{Context, Result, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix of environment overrides, e.g. `ADMIN_API_BASE_URL`
pub const ENV_PREFIX: &str = "ADMIN_API";

/// Connection settings for one backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiProfile {
    /// Backend base URL, path prefix included
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Success code of the backend's `{code, msg, data}` envelope, if it uses one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_code: Option<String>,
}

impl Default for ApiProfile {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            success_code: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// `<config dir>/admin-api/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("admin-api").join("config.yaml"))
}

impl ApiProfile {
    /// Load configuration from a YAML file only
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let profile: Self = serde_yaml::from_str(&content)?;
        Ok(profile)
    }

    /// Layer defaults, the YAML file and the process environment.
    ///
    /// An explicit `path` must exist; without one the default location is
    /// used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", default_timeout_secs() as i64)?
            .set_default("connect_timeout_secs", default_connect_timeout_secs() as i64)?;

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
            }
            None => {
                if let Some(path) = default_config_path() {
                    builder = builder
                        .add_source(File::from(path).format(FileFormat::Yaml).required(false));
                }
            }
        }

        let profile: Self = builder
            .add_source(env)
            .build()
            .context("assemble configuration")?
            .try_deserialize()
            .context("parse configuration")?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            bail!("base_url cannot be empty");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be positive");
        }
        if self.token.as_deref().is_some_and(|token| token.trim().is_empty()) {
            bail!("token cannot be blank");
        }
        Ok(())
    }

    /// Command-line flags win over every other source
    pub fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(token) = token {
            self.token = Some(token);
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            success_code: self.success_code.clone(),
        }
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.token.clone().map(Credentials::bearer)
    }

    /// Copy safe to print: the token is masked
    pub fn redacted(&self) -> Self {
        Self {
            token: self.token.as_ref().map(|_| "***".to_string()),
            ..self.clone()
        }
    }

    /// Write a starter profile to `path`, creating parent directories
    pub fn write_template(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let yaml = serde_yaml::to_string(&Self::default())?;
        std::fs::write(path, yaml).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let mut profile = ApiProfile::default();
        profile.apply_overrides(Some("http://backend:9000/api".to_string()), Some("t".to_string()));

        assert_eq!(profile.base_url, "http://backend:9000/api");
        assert_eq!(profile.credentials(), Some(Credentials::bearer("t")));
        assert_eq!(profile.redacted().token.as_deref(), Some("***"));
    }

    #[test]
    fn test_client_config_conversion() {
        let profile = ApiProfile {
            timeout_secs: 5,
            success_code: Some("0000".to_string()),
            ..ApiProfile::default()
        };

        let config = profile.client_config();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.success_code.as_deref(), Some("0000"));
    }

    #[test]
    fn test_validate_rejects_blank_token() {
        let profile = ApiProfile {
            token: Some("  ".to_string()),
            ..ApiProfile::default()
        };
        assert!(profile.validate().is_err());
    }
}
