//! 主应用状态

use crate::backend::Backend;
use crate::model::{FormFocus, RawSections};

/// 应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 当前焦点
    pub focus: FormFocus,
    /// 核心控制器
    pub backend: Backend,
    /// 状态面板原始数据区的展开状态
    pub raw_sections: RawSections,
}

impl App {
    pub fn new(backend: Backend) -> Self {
        Self {
            should_quit: false,
            focus: FormFocus::default(),
            backend,
            raw_sections: RawSections::default(),
        }
    }
}
