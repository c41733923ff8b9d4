//! 焦点状态

use campus_autologin_core::FieldId;

/// 当前获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    /// 登录页地址
    #[default]
    Url,
    /// 账号
    Account,
    /// 密码
    Password,
    /// 运营商
    Operator,
    /// 开机自启
    Autostart,
    /// 自动探测按钮
    Detect,
    /// 测试 / 登录按钮
    TestLogin,
    /// 退出按钮
    Quit,
}

impl FormFocus {
    const ORDER: [Self; 8] = [
        Self::Url,
        Self::Account,
        Self::Password,
        Self::Operator,
        Self::Autostart,
        Self::Detect,
        Self::TestLogin,
        Self::Quit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// 下一个控件（末尾回到开头）
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// 上一个控件（开头回到末尾）
    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    /// 可输入文字的字段
    pub fn text_field(self) -> Option<FieldId> {
        match self {
            Self::Url => Some(FieldId::Web),
            Self::Account => Some(FieldId::Count),
            Self::Password => Some(FieldId::Password),
            _ => None,
        }
    }

    pub fn is_text_input(self) -> bool {
        self.text_field().is_some()
    }

    pub fn is_button(self) -> bool {
        matches!(self, Self::Detect | Self::TestLogin | Self::Quit)
    }
}
