//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FormFocus};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let has_details = !app.backend.notifications().details().is_empty();
    let hints = get_hints(app.focus, has_details);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(focus: FormFocus, has_details: bool) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab/↑↓", "Move")];

    match focus {
        FormFocus::Url | FormFocus::Account | FormFocus::Password => {
            hints.push(("Type", "Edit"));
        }
        FormFocus::Operator => {
            hints.push(("←→", "Select"));
        }
        FormFocus::Autostart => {
            hints.push(("Space", "Toggle"));
        }
        FormFocus::TestLogin => {
            hints.push(("Enter", "Test"));
            hints.push(("l", "Login"));
        }
        FormFocus::Detect | FormFocus::Quit => {
            hints.push(("Enter", "Activate"));
        }
    }

    if has_details {
        hints.push(("Esc", "Close panel"));
        if !focus.is_text_input() {
            hints.push(("o", "Click outside"));
            hints.push(("r", "Raw data"));
        }
    }

    hints.push(("Ctrl+C", "Quit"));
    hints
}
