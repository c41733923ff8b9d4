//! 表单实时状态
//!
//! 表单就是设置的唯一内存副本：保存时总是读取这里的当前值。

use std::sync::{Arc, PoisonError, RwLock};

use super::settings::{bool_to_stored, FieldId, SettingsRecord};

/// 自动检测按钮状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectButtonState {
    #[default]
    Idle,
    Detecting,
}

impl DetectButtonState {
    /// 按钮文字
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Auto detect",
            Self::Detecting => "Detecting...",
        }
    }

    /// 按钮是否可点击
    #[must_use]
    pub fn enabled(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// 设置页面的表单值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub web: String,
    pub count: String,
    pub password: String,
    pub operator: String,
    pub autostart: bool,
    pub detect: DetectButtonState,
}

impl FormState {
    /// 读取全部五个字段，生成待持久化记录
    #[must_use]
    pub fn snapshot(&self) -> SettingsRecord {
        SettingsRecord {
            webindex: self.web.clone(),
            countindex: self.count.clone(),
            passwordindex: self.password.clone(),
            operatorindex: self.operator.clone(),
            autostartindex: bool_to_stored(self.autostart),
        }
    }

    /// 将已加载的记录写回表单
    pub fn apply(&mut self, record: &SettingsRecord) {
        self.web.clone_from(&record.webindex);
        self.count.clone_from(&record.countindex);
        self.password.clone_from(&record.passwordindex);
        self.operator.clone_from(&record.operatorindex);
        self.autostart = record.autostart_enabled();
    }

    /// 设置文本字段；对自启动字段按 `"true"` 解释
    pub fn set_value(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Web => self.web = value,
            FieldId::Count => self.count = value,
            FieldId::Password => self.password = value,
            FieldId::Operator => self.operator = value,
            FieldId::Autostart => self.autostart = value == "true",
        }
    }

    #[must_use]
    pub fn value(&self, field: FieldId) -> String {
        match field {
            FieldId::Web => self.web.clone(),
            FieldId::Count => self.count.clone(),
            FieldId::Password => self.password.clone(),
            FieldId::Operator => self.operator.clone(),
            FieldId::Autostart => bool_to_stored(self.autostart),
        }
    }
}

/// 控制器与前端共享的表单句柄
///
/// 同步锁，只在短暂读写时持有，绝不跨 await。
#[derive(Debug, Clone, Default)]
pub struct SharedForm(Arc<RwLock<FormState>>);

impl SharedForm {
    #[must_use]
    pub fn new(state: FormState) -> Self {
        Self(Arc::new(RwLock::new(state)))
    }

    /// 只读访问
    pub fn read<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// 可写访问
    pub fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// 当前表单的完整副本
    #[must_use]
    pub fn state(&self) -> FormState {
        self.read(Clone::clone)
    }

    #[must_use]
    pub fn snapshot(&self) -> SettingsRecord {
        self.read(FormState::snapshot)
    }
}
