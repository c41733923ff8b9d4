//! 持久化设置记录与字段标识

use serde::{Deserialize, Serialize};

/// 设置页面上的五个可编辑字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// 登录 / 检测地址
    Web,
    /// 账号
    Count,
    /// 密码
    Password,
    /// 运营商
    Operator,
    /// 开机自启动
    Autostart,
}

impl FieldId {
    /// 所有字段，按页面顺序
    pub const ALL: [Self; 5] = [
        Self::Web,
        Self::Count,
        Self::Password,
        Self::Operator,
        Self::Autostart,
    ];

    /// 持久化时使用的键名
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Web => "webindex",
            Self::Count => "countindex",
            Self::Password => "passwordindex",
            Self::Operator => "operatorindex",
            Self::Autostart => "autostartindex",
        }
    }

    /// 是否为自由文本输入框
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Web | Self::Count | Self::Password)
    }
}

/// 持久化的设置记录
///
/// 每次提交整体覆盖，五个键永远同时存在。读取时缺失的键按空值处理。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    /// 登录 / 检测地址
    pub webindex: String,
    /// 账号
    pub countindex: String,
    /// 密码（本层为明文字符串）
    pub passwordindex: String,
    /// 运营商（固定候选集中的一个）
    pub operatorindex: String,
    /// `"true"` / `"false"`
    pub autostartindex: String,
}

impl SettingsRecord {
    /// 自启动开关是否打开（仅当存储值严格等于 `"true"`）
    #[must_use]
    pub fn autostart_enabled(&self) -> bool {
        self.autostartindex == "true"
    }

    /// 按字段读取值
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Web => &self.webindex,
            FieldId::Count => &self.countindex,
            FieldId::Password => &self.passwordindex,
            FieldId::Operator => &self.operatorindex,
            FieldId::Autostart => &self.autostartindex,
        }
    }
}

/// 自启动布尔值的存储形式
#[must_use]
pub fn bool_to_stored(checked: bool) -> String {
    if checked { "true" } else { "false" }.to_string()
}
