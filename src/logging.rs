//! 日志初始化
//!
//! 终端由 UI 独占，所以日志写入文件，且仅在设置了 `RUST_LOG` 时启用

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// 日志文件路径 (~/.cache/tempconv/tempconv.log)
fn log_path() -> io::Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户缓存目录"))?
        .join("tempconv");

    fs::create_dir_all(&dir)?;

    Ok(dir.join("tempconv.log"))
}

/// 安装全局 tracing subscriber，返回日志文件路径；未设置 `RUST_LOG` 时返回 `None`
pub fn init() -> io::Result<Option<PathBuf>> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(None);
    };

    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(format!("tracing 初始化失败: {e}")))?;

    Ok(Some(path))
}
