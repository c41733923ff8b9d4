//! Per-user autostart entry.
//!
//! | Platform | Entry |
//! |---|---|
//! | Linux / BSD | `~/.config/autostart/campus-autologin.desktop` (XDG) |
//! | macOS | `~/Library/LaunchAgents/com.campus-autologin.plist` |
//! | Windows | `Startup` folder `campus-autologin.cmd` |

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use campus_autologin_core::error::{CoreError, CoreResult};
use campus_autologin_core::AutostartManager;

use crate::config::APP_DIR_NAME;

#[derive(Debug, Clone)]
pub struct DesktopAutostart {
    entry_path: PathBuf,
    command: PathBuf,
}

impl DesktopAutostart {
    /// Entry at an explicit location launching `command`.
    #[must_use]
    pub fn new(entry_path: impl Into<PathBuf>, command: impl Into<PathBuf>) -> Self {
        Self {
            entry_path: entry_path.into(),
            command: command.into(),
        }
    }

    /// Entry at the platform's per-user location launching the running executable.
    pub fn for_current_user() -> CoreResult<Self> {
        let command = std::env::current_exe().map_err(|e| {
            CoreError::SystemIntegrationError(format!("Cannot locate executable: {e}"))
        })?;
        let entry_path = default_entry_path().ok_or_else(|| {
            CoreError::SystemIntegrationError("No per-user autostart directory".to_string())
        })?;
        Ok(Self::new(entry_path, command))
    }

    #[must_use]
    pub fn entry_path(&self) -> &Path {
        &self.entry_path
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.entry_path.exists()
    }

    fn render_entry(&self) -> String {
        render_entry(&self.command)
    }
}

#[cfg(target_os = "macos")]
fn default_entry_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join("Library")
            .join("LaunchAgents")
            .join(format!("com.{APP_DIR_NAME}.plist"))
    })
}

#[cfg(target_os = "windows")]
fn default_entry_path() -> Option<PathBuf> {
    dirs::config_dir().map(|roaming| {
        roaming
            .join("Microsoft")
            .join("Windows")
            .join("Start Menu")
            .join("Programs")
            .join("Startup")
            .join(format!("{APP_DIR_NAME}.cmd"))
    })
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_entry_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| {
        config
            .join("autostart")
            .join(format!("{APP_DIR_NAME}.desktop"))
    })
}

#[cfg(target_os = "macos")]
fn render_entry(command: &Path) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>com.{APP_DIR_NAME}</string>
    <key>ProgramArguments</key>
    <array>
        <string>{}</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
</dict>
</plist>
"#,
        command.display()
    )
}

#[cfg(target_os = "windows")]
fn render_entry(command: &Path) -> String {
    format!("@echo off\r\nstart \"\" \"{}\"\r\n", command.display())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn render_entry(command: &Path) -> String {
    format!(
        "[Desktop Entry]\nType=Application\nName=Campus Autologin\nExec=\"{}\"\nTerminal=true\nX-GNOME-Autostart-enabled=true\n",
        command.display()
    )
}

#[async_trait]
impl AutostartManager for DesktopAutostart {
    async fn enable(&self) -> CoreResult<()> {
        if let Some(parent) = self.entry_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                CoreError::SystemIntegrationError(format!(
                    "Failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }
        tokio::fs::write(&self.entry_path, self.render_entry())
            .await
            .map_err(|e| {
                CoreError::SystemIntegrationError(format!(
                    "Failed to write {}: {e}",
                    self.entry_path.display()
                ))
            })?;
        log::info!("Autostart enabled: {}", self.entry_path.display());
        Ok(())
    }

    async fn disable(&self) -> CoreResult<()> {
        match tokio::fs::remove_file(&self.entry_path).await {
            Ok(()) => {
                log::info!("Autostart disabled: {}", self.entry_path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::SystemIntegrationError(format!(
                "Failed to remove {}: {e}",
                self.entry_path.display()
            ))),
        }
    }
}
