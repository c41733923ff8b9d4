//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 相当于将形形色色的按键翻译成 Update 能够看懂的 Messages，
//! Update 层再把它们转交给核心控制器的入口。
//!
//!
//!     按键                            消息                      控制器入口
//!     ─────────────────────────────────────────────────────────────────────────
//!     字符 / Backspace（文本框）       Input / Backspace         on_text_input
//!     ← / →（运营商）                  OperatorPrevious/Next     on_operator_click
//!     Space / Enter（开机自启）        ToggleAutostart           on_autostart_toggle
//!     Enter（按钮）                    Activate                  on_detect_click /
//!                                                                on_test_click / on_quit
//!     l / Alt+l（测试按钮）            LoginActivation           on_login_activation
//!     Esc                              CloseDetail               （通知中心）
//!     o                                DismissOutside            （通知中心）
//!     r                                ToggleRawData             （界面状态）
//!

/// 主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 立即退出（Ctrl+C）
    Quit,
    /// 焦点移到下一个控件
    FocusNext,
    /// 焦点移到上一个控件
    FocusPrevious,
    /// 在当前文本框末尾输入字符
    Input(char),
    /// 删除当前文本框最后一个字符
    Backspace,
    /// 选择上一个运营商
    OperatorPrevious,
    /// 选择下一个运营商
    OperatorNext,
    /// 切换开机自启
    ToggleAutostart,
    /// 激活当前按钮
    Activate,
    /// 测试按钮的备用激活：直接登录
    LoginActivation,
    /// 关闭最新的详情面板
    CloseDetail,
    /// 在面板外“点击”：只关闭状态面板
    DismissOutside,
    /// 展开 / 折叠最新状态面板的原始数据
    ToggleRawData,
    /// 无操作
    Noop,
}
