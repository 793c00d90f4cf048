use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;
use url::Url;

const ENV_API_URL: &str = "VITE_SUPABASE_URL";
const ENV_API_KEY: &str = "VITE_SUPABASE_ANON_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("VITE_SUPABASE_URL is not a valid URL: {value}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error(
        "No backend configured. Set VITE_SUPABASE_URL and VITE_SUPABASE_ANON_KEY, \
         or add a [backend] section to the config file"
    )]
    MissingBackend,
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub backend: Option<Backend>,
}

/// The key is sent both as the `apikey` header and as a bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct Backend {
    pub api_url: Url,
    pub api_key: String,
}

fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sweep").join("config.toml"))
}

pub fn load() -> Result<Config, ConfigError> {
    match config_file() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(Config::default()),
    }
}

fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn resolve_backend() -> Result<Backend, ConfigError> {
    let env_url = env::var(ENV_API_URL).ok().filter(|value| !value.is_empty());
    let env_key = env::var(ENV_API_KEY).ok().filter(|value| !value.is_empty());
    resolve_backend_from(env_url, env_key, load()?)
}

fn resolve_backend_from(
    env_url: Option<String>,
    env_key: Option<String>,
    config: Config,
) -> Result<Backend, ConfigError> {
    if let (Some(url), Some(key)) = (env_url, env_key) {
        return match Url::parse(&url) {
            Ok(api_url) => Ok(Backend {
                api_url,
                api_key: key,
            }),
            Err(source) => Err(ConfigError::InvalidUrl { value: url, source }),
        };
    }
    config.backend.ok_or(ConfigError::MissingBackend)
}
