//! 详情面板中原始数据区的展开状态

use std::collections::HashSet;

/// 已展开原始数据区的面板 id，默认全部折叠
#[derive(Debug, Default)]
pub struct RawSections {
    expanded: HashSet<u64>,
}

impl RawSections {
    pub fn is_expanded(&self, id: u64) -> bool {
        self.expanded.contains(&id)
    }

    /// 切换一个面板的展开状态，同时丢弃已经消失的面板
    pub fn toggle(&mut self, id: u64, visible: &[u64]) {
        self.expanded.retain(|existing| visible.contains(existing));
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }
}
