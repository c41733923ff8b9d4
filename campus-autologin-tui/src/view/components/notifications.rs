//! 通知组件：右下角提示与居中详情面板

use campus_autologin_core::services::{DetailPanel, Toast};
use campus_autologin_core::DetailContent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;
const DETAIL_WIDTH: u16 = 72;
/// 多个详情面板依次错开，避免完全重叠
const DETAIL_OFFSET: u16 = 2;

/// 渲染所有可见通知，越新越靠上层
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let notifications = app.backend.notifications();

    for (i, panel) in notifications.details().iter().enumerate() {
        let expanded = app.raw_sections.is_expanded(panel.id);
        render_detail(frame, area, panel, i, expanded);
    }

    render_toasts(frame, area, &notifications.toasts());
}

/// 计算居中的矩形区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let c = colors();
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width);
    let mut bottom = area.y + area.height;

    // 最新的提示在最下方
    for toast in toasts.iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        bottom -= TOAST_HEIGHT;
        let rect = Rect::new(x, bottom, width, TOAST_HEIGHT);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.warning));
        let text = Paragraph::new(toast.text.as_str())
            .style(Style::default().fg(c.fg))
            .block(block);

        frame.render_widget(Clear, rect);
        frame.render_widget(text, rect);
    }
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    panel: &DetailPanel,
    index: usize,
    expanded: bool,
) {
    let c = colors();
    let content = &panel.content;

    let mut lines: Vec<Line> = content
        .body()
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    if let Some(raw) = content.raw() {
        lines.push(Line::from(""));
        lines.extend(raw_section_lines(&raw, expanded));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Esc", Styles::hint_key()),
        Span::styled(" close", Style::default().fg(c.muted)),
    ]));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let offset = u16::try_from(index)
        .unwrap_or(u16::MAX)
        .saturating_mul(DETAIL_OFFSET);
    let mut rect = centered_rect(DETAIL_WIDTH, height, area);
    rect.x = rect.x.saturating_add(offset).min(area.x + area.width.saturating_sub(rect.width));
    rect.y = rect.y.saturating_add(offset).min(area.y + area.height.saturating_sub(rect.height));

    let block = Block::default()
        .title(format!(" {} ", content.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(detail_border_color(content)));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        rect,
    );
}

/// 原始数据区：折叠时只有标题行，展开后附上 JSON
fn raw_section_lines(raw: &str, expanded: bool) -> Vec<Line<'static>> {
    let c = colors();
    let marker = if expanded { "▾" } else { "▸" };
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{marker} Raw data"),
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  r", Styles::hint_key()),
        Span::styled(
            if expanded { " collapse" } else { " expand" },
            Style::default().fg(c.muted),
        ),
    ])];
    if expanded {
        lines.push(Line::from(Span::styled(
            "─".repeat(usize::from(DETAIL_WIDTH.saturating_sub(4))),
            Style::default().fg(c.border),
        )));
        lines.extend(
            raw.lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(c.muted)))),
        );
    }
    lines
}

fn detail_border_color(content: &DetailContent) -> Color {
    let c = colors();
    match content {
        DetailContent::Result { .. } => c.border_focused,
        DetailContent::Status { status, .. } if status.connected => c.success,
        DetailContent::Status { status, .. } if status.detection_error.is_some() => c.error,
        DetailContent::Status { .. } => c.warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(72, 20, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));

        let rect = centered_rect(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn test_raw_section_collapsed_hides_json() {
        let raw = "{\n  \"connected\": false\n}";

        let collapsed = raw_section_lines(raw, false);
        assert_eq!(collapsed.len(), 1);

        let expanded = raw_section_lines(raw, true);
        // 标题 + 分隔线 + 三行 JSON
        assert_eq!(expanded.len(), 5);
        assert_eq!(expanded[3].to_string(), "  \"connected\": false");
    }
}
