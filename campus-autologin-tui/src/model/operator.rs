//! 运营商选项

/// 运营商单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    /// 存储到设置文件中的值
    pub value: &'static str,
    /// 显示文本
    pub label: &'static str,
}

pub const OPERATORS: [Operator; 4] = [
    Operator {
        value: "a",
        label: "Campus",
    },
    Operator {
        value: "b",
        label: "China Mobile",
    },
    Operator {
        value: "c",
        label: "China Telecom",
    },
    Operator {
        value: "d",
        label: "China Unicom",
    },
];

impl Operator {
    /// 查找存储值对应的选项；未知值（含空）返回 None
    pub fn find(value: &str) -> Option<Self> {
        OPERATORS.iter().copied().find(|op| op.value == value)
    }

    /// 循环切换到相邻选项。当前值未知时，前进选中第一项，后退选中最后一项
    pub fn cycle(current: &str, forward: bool) -> Self {
        let len = OPERATORS.len();
        let index = match OPERATORS.iter().position(|op| op.value == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        OPERATORS[index]
    }
}
