use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_base_path() -> String {
  String::new()
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub firebase: FirebaseConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  pub base_url: String,
  /// URL prefix when the app is served from a sub-directory. Empty for root
  /// deployment; e.g. "/glambill" for project-page hosting.
  #[serde(default = "default_base_path")]
  pub base_path: String,
}

impl ServerConfig {
  /// Base path normalized for use as an actix scope prefix: no trailing
  /// slash, and a bare "/" collapses to the empty root scope.
  pub fn scope_path(&self) -> &str {
    self.base_path.trim_end_matches('/')
  }
}

/// Firebase project connection parameters.
///
/// These are deployment identifiers, not behavior; they come straight from
/// the project console. Only the API key, project id and storage bucket are
/// used on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseConfig {
  pub api_key: String,
  pub auth_domain: String,
  pub project_id: String,
  pub storage_bucket: String,
  pub messaging_sender_id: String,
  pub app_id: String,
  /// Host:port of a local emulator suite. When set, both the document
  /// database and file storage clients talk to it over plain HTTP.
  #[serde(default)]
  pub emulator_host: Option<String>,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override
  /// earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with GLAMBILL_ prefix
  ///
  /// Environment variables use double underscores as separators:
  /// - `GLAMBILL_SERVER__HOST=0.0.0.0`
  /// - `GLAMBILL_SERVER__PORT=8080`
  /// - `GLAMBILL_FIREBASE__API_KEY=...`
  /// - `GLAMBILL_FIREBASE__PROJECT_ID=...`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("GLAMBILL")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_structure() {
    let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            base_url = "http://localhost:8080"

            [firebase]
            api_key = "test-api-key"
            auth_domain = "studio-test.firebaseapp.com"
            project_id = "studio-test"
            storage_bucket = "studio-test.firebasestorage.app"
            messaging_sender_id = "123456789"
            app_id = "1:123456789:web:abc123"
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.base_path, ""); // default
    assert_eq!(config.firebase.project_id, "studio-test");
    assert_eq!(config.firebase.storage_bucket, "studio-test.firebasestorage.app");
    assert!(config.firebase.emulator_host.is_none());
  }

  #[test]
  fn test_scope_path_normalization() {
    let server = ServerConfig {
      host: "127.0.0.1".to_string(),
      port: 8080,
      base_url: "http://localhost:8080".to_string(),
      base_path: "/glambill/".to_string(),
    };
    assert_eq!(server.scope_path(), "/glambill");

    let root = ServerConfig {
      base_path: "/".to_string(),
      ..server
    };
    assert_eq!(root.scope_path(), "");
  }
}
