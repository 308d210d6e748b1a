use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::TemperatureUnit;

pub const DEFAULT_INPUT_VALUE: f64 = 15.0;

/// 启动时的默认值 (config.toml)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub from: TemperatureUnit,
    pub to: TemperatureUnit,
    pub value: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            from: TemperatureUnit::Celsius,
            to: TemperatureUnit::Fahrenheit,
            value: DEFAULT_INPUT_VALUE,
        }
    }
}

/// 配置文件路径 (~/.config/tempconv/config.toml)
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tempconv").join("config.toml"))
}

/// 解析 TOML 配置
pub fn parse_config(content: &str) -> io::Result<Config> {
    let mut config: Config =
        toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if !config.value.is_finite() {
        config.value = DEFAULT_INPUT_VALUE;
    }

    Ok(config)
}

/// 从文件加载配置，文件不存在时返回默认值
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// 加载配置；出错时记录警告并回退到默认值
pub fn load_or_default() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    match load_config(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), ?config, "配置已加载");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "配置无效，使用默认值");
            Config::default()
        }
    }
}
