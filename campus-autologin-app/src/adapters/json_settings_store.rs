//! JSON 文件设置存储
//!
//! 五个字段以一个 JSON 对象保存在 `data.json` 中。写入先落到临时文件再重命名，
//! 避免写到一半时崩溃留下损坏的文件。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use campus_autologin_core::error::{CoreError, CoreResult};
use campus_autologin_core::{SettingsRecord, SettingsStore};
use tokio::sync::Mutex;

/// JSON 文件设置存储
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
    /// 串行化写入：所有保存共用同一个临时文件
    write_lock: Arc<Mutex<()>>,
}

impl JsonSettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn io_error(action: &str, path: &Path, e: &std::io::Error) -> CoreError {
    CoreError::PersistenceError(format!("Failed to {action} {}: {e}", path.display()))
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn save(&self, record: &SettingsRecord) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| CoreError::PersistenceError(format!("Failed to serialize settings: {e}")))?;

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| io_error("create", parent, &e))?;
            }
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| io_error("write", &temp, &e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| io_error("replace", &self.path, &e))?;

        log::debug!("设置已保存到 {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> CoreResult<SettingsRecord> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("设置文件不存在，使用默认值: {}", self.path.display());
                return Ok(SettingsRecord::default());
            }
            Err(e) => return Err(io_error("read", &self.path, &e)),
        };

        serde_json::from_str(&content).map_err(|e| {
            CoreError::PersistenceError(format!("Corrupt settings file {}: {e}", self.path.display()))
        })
    }
}
