//! 配置加载
//!
//! 启动时从进程环境变量读取一次配置。`main` 会在此之前加载 `.env` 文件。

use std::{env, fmt, net::SocketAddr};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// 用户存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub store: StoreKind,
}

/// 配置错误，启动阶段即为致命错误
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingDatabaseUrl,
    Invalid { key: &'static str, value: String },
    DatabaseFeatureDisabled,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDatabaseUrl => write!(
                f,
                "POSTGRES_CONNECTION_STRING (or DATABASE_URL) must be set"
            ),
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
            ConfigError::DatabaseFeatureDisabled => write!(
                f,
                "USER_STORE=postgres requires the `database` feature"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意键值查找函数构建配置，便于测试
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("USER_STORE") {
            None => StoreKind::Postgres,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "postgres" => StoreKind::Postgres,
                "memory" => StoreKind::Memory,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "USER_STORE",
                        value,
                    })
                }
            },
        };

        let database_url = lookup("POSTGRES_CONNECTION_STRING")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty());

        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        let bind_addr: SocketAddr = match lookup("BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value,
            })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::Invalid {
                    key: "BIND_ADDR",
                    value: DEFAULT_BIND_ADDR.to_string(),
                })?,
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DB_MAX_CONNECTIONS",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            store,
        })
    }

    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::MissingDatabaseUrl)
    }
}
