use braincache_core::AppConfig;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub app: AppConfig,
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    limits: LimitsSection,
    #[serde(default)]
    collaborators: CollaboratorsSection,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct LimitsSection {
    #[serde(default)]
    free_spaces: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct CollaboratorsSection {
    #[serde(default)]
    payment_api_key: Option<String>,
    #[serde(default)]
    mail_api_key: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ServerConfig {
    /// Load configuration once at startup: a TOML file when present,
    /// environment variables otherwise.
    pub fn load() -> anyhow::Result<Self> {
        if let Some(file_config) = load_from_file()? {
            let defaults = AppConfig::default();
            return Ok(Self {
                host: file_config.server.host,
                port: file_config.server.port,
                app: AppConfig {
                    free_space_limit: file_config
                        .limits
                        .free_spaces
                        .unwrap_or(defaults.free_space_limit),
                    payment_api_key: file_config.collaborators.payment_api_key,
                    mail_api_key: file_config.collaborators.mail_api_key,
                },
            });
        }

        Ok(Self::from_env())
    }

    fn from_env() -> Self {
        let host = env::var("BRAINCACHE_SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = env::var("BRAINCACHE_SERVER_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or_else(default_port);

        let defaults = AppConfig::default();
        let free_space_limit = env::var("BRAINCACHE_FREE_SPACE_LIMIT")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or(defaults.free_space_limit);

        Self {
            host,
            port,
            app: AppConfig {
                free_space_limit,
                payment_api_key: env::var("BRAINCACHE_PAYMENT_API_KEY").ok(),
                mail_api_key: env::var("BRAINCACHE_MAIL_API_KEY").ok(),
            },
        }
    }
}

fn load_from_file() -> anyhow::Result<Option<FileConfig>> {
    let config_path = env::var("BRAINCACHE_SERVER_CONFIG").ok();
    let path = if let Some(path) = config_path {
        Some(path)
    } else if Path::new("server.toml").exists() {
        Some("server.toml".to_string())
    } else {
        None
    };

    let Some(path) = path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .map_err(|err| anyhow::anyhow!("Failed to read config {}: {}", path, err))?;
    let parsed: FileConfig = toml::from_str(&contents)
        .map_err(|err| anyhow::anyhow!("Failed to parse config {}: {}", path, err))?;
    Ok(Some(parsed))
}
