//! 通用 UI 组件
//!
//! 弹窗、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 多行输入框，内容为空时显示占位提示，超出高度时保持末尾可见
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    active_color: Color,
) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);

    let (text, style) = if value.is_empty() {
        (placeholder, Style::default().fg(Color::DarkGray))
    } else if is_focused {
        (
            value,
            Style::default()
                .fg(active_color)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (value, Style::default().fg(Color::Gray))
    };

    let paragraph = Paragraph::new(text).style(style).wrap(Wrap { trim: false });
    let scroll = wrapped_rows(&paragraph, value, inner.width).saturating_sub(inner.height as usize);

    let input = paragraph
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(block);
    frame.render_widget(input, area);
}

/// 折行后的屏幕行数；末尾换行后光标所在的空行也算一行
pub fn wrapped_rows(paragraph: &Paragraph, text: &str, width: u16) -> usize {
    let rows = paragraph.line_count(width);
    if text.ends_with('\n') { rows + 1 } else { rows }
}
