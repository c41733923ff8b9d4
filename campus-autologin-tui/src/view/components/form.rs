//! 设置表单与按钮

use campus_autologin_core::{DetectButtonState, FormState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, FormFocus, Operator};
use crate::view::theme::{colors, Styles};

/// 标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 12;
/// 文本框光标
const CURSOR: &str = "█";
const PASSWORD_MASK: char = '•';

/// 渲染表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form = app.backend.controller().form_state();
    let focus = app.focus;

    let lines = vec![
        Line::from(""),
        render_text_row("Login URL", &form.web, focus == FormFocus::Url),
        render_text_row("Account", &form.count, focus == FormFocus::Account),
        render_text_row(
            "Password",
            &mask(&form.password),
            focus == FormFocus::Password,
        ),
        render_operator_row(&form.operator, focus == FormFocus::Operator),
        render_autostart_row(form.autostart, focus == FormFocus::Autostart),
        Line::from(""),
        render_buttons(&form, focus),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn mask(password: &str) -> String {
    PASSWORD_MASK.to_string().repeat(password.chars().count())
}

fn row_prefix(label: &str, is_selected: bool) -> Vec<Span<'_>> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };
    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    vec![
        Span::styled(prefix, label_style),
        Span::styled(label, label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
    ]
}

fn render_text_row<'a>(label: &'a str, value: &str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let mut spans = row_prefix(label, is_selected);
    spans.push(Span::styled(value.to_string(), Style::default().fg(c.fg)));
    if is_selected {
        spans.push(Span::styled(CURSOR, Style::default().fg(c.highlight)));
    }
    Line::from(spans)
}

fn render_operator_row(value: &str, is_selected: bool) -> Line<'static> {
    let c = colors();
    let label = Operator::find(value).map_or("(none)", |op| op.label);
    let value_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    let mut spans = row_prefix("Operator", is_selected);
    if is_selected {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(label, value_style));
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Yellow)));
    } else {
        // 占位符，与 "◀ " 对齐
        spans.push(Span::raw("  "));
        spans.push(Span::styled(label, value_style));
    }
    Line::from(spans)
}

fn render_autostart_row(checked: bool, is_selected: bool) -> Line<'static> {
    let c = colors();
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if checked {
        Style::default().fg(c.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let mut spans = row_prefix("Autostart", is_selected);
    spans.push(Span::styled(mark, mark_style));
    spans.push(Span::styled(
        " Launch at login and log in automatically",
        Style::default().fg(c.fg),
    ));
    Line::from(spans)
}

fn render_buttons(form: &FormState, focus: FormFocus) -> Line<'static> {
    let detect_enabled = form.detect.enabled();
    let buttons = [
        (form.detect.label(), FormFocus::Detect, detect_enabled),
        ("Test / Login", FormFocus::TestLogin, true),
        ("Quit", FormFocus::Quit, true),
    ];

    let mut spans = vec![Span::raw("  ")];
    for (label, target, enabled) in buttons {
        spans.push(Span::styled(
            format!("[ {label} ]"),
            button_style(focus == target, enabled),
        ));
        spans.push(Span::raw("  "));
    }
    if form.detect == DetectButtonState::Detecting {
        spans.push(Span::styled("⟳", Style::default().fg(colors().warning)));
    }
    Line::from(spans)
}

fn button_style(is_focused: bool, enabled: bool) -> Style {
    let c = colors();
    match (is_focused, enabled) {
        (_, false) => Style::default().fg(c.muted).add_modifier(Modifier::DIM),
        (true, true) => Styles::selected(),
        (false, true) => Style::default().fg(c.fg),
    }
}
