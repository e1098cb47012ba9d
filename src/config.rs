use crate::service::DateReference;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// 判断 "未来日期" 时使用本地日期还是 UTC 日期
    #[serde(default)]
    pub date_reference: DateReference,
}

impl AppConfig {
    /// 加载顺序：默认值 → `receipts.toml` (可选) → `RECEIPTS_` 环境变量
    ///
    /// 例：`RECEIPTS_SERVER__PORT=9000`、`RECEIPTS_VALIDATION__DATE_REFERENCE=utc`
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("receipts").required(false))
            .add_source(
                Environment::with_prefix("RECEIPTS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("validation.date_reference", "local")
    }
}
