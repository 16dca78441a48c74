//! 界面渲染
//!
//! 根据 UiState（phase、intake、history、suggestions）与 input_buffer 绘制：标题栏显示窗口阶段与采集步骤，
//! 主体为对话记录（按角色着色、附时间、按宽度换行），其下为快捷回复行，底部为输入框与快捷键提示。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use crate::concierge::{IntakeStep, Role};
use crate::core::{ConciergePhase, UiState};

/// 输入区焦点：文本框或某个快捷回复
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFocus {
    #[default]
    Input,
    Chip(usize),
}

/// 输入区状态（焦点）
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pub focus: InputFocus,
}

/// 将内容按宽度换行，支持 UTF-8（按字符数，避免在 UTF-8 中间截断）
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    let mut lines = Vec::new();
    for para in s.split('\n') {
        let mut line = String::new();
        for ch in para.chars() {
            if line.chars().count() >= width {
                lines.push(std::mem::take(&mut line));
            }
            line.push(ch);
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn phase_label(state: &UiState) -> &'static str {
    match state.phase {
        ConciergePhase::Closed => "已收起 (Ctrl+O 打开)",
        ConciergePhase::Typing => "正在输入…",
        ConciergePhase::Ready => match state.intake {
            IntakeStep::Idle => "空闲",
            IntakeStep::CollectingName => "请输入姓名",
            IntakeStep::CollectingEmail => "请输入邮箱",
            IntakeStep::CollectingPhone => "请输入电话",
            IntakeStep::Active => "在线",
        },
    }
}

/// 快捷回复行：焦点所在的 chip 反色高亮
fn chips_line<'a>(suggestions: &'a [String], focus: InputFocus) -> Line<'a> {
    let mut spans = Vec::with_capacity(suggestions.len() * 2);
    for (idx, chip) in suggestions.iter().enumerate() {
        let style = if focus == InputFocus::Chip(idx) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(format!(" {} ", chip), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// 绘制一帧：上方对话区（标题 + 记录 + 滚动条），中间快捷回复，下方输入区；
/// 将 (总行数, 可视高度) 写入 out 供外部 clamp 滚动
pub fn draw(
    f: &mut Frame,
    state: &UiState,
    input_buffer: &str,
    conversation_scroll: usize,
    out: &mut (usize, usize),
    input_state: &InputState,
) {
    let chips_height = if state.suggestions.is_empty() { 0 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(chips_height),
            Constraint::Length(3),
        ])
        .split(f.area());

    let conv_area = chunks[0];
    let content_width = conv_area.width.saturating_sub(2).saturating_sub(1) as usize; // 边框 + 滚动条

    let title = format!(" GlobalX Concierge │ {} ", phase_label(state));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    // 每条消息：前缀 + 时间，再按宽度换行；消息之间加空行分隔
    let mut text_lines: Vec<Line> = Vec::new();
    for (idx, m) in state.history.iter().enumerate() {
        if idx > 0 {
            text_lines.push(Line::from(Span::raw("")));
        }
        let (prefix, color) = match m.role {
            Role::Visitor => ("You", Color::Cyan),
            Role::Concierge => ("GlobalX", Color::Green),
        };
        text_lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", m.time), Style::default().fg(Color::DarkGray)),
        ]));
        for line in wrap_text(&m.content, content_width.saturating_sub(2).max(20)) {
            text_lines.push(Line::from(vec![Span::raw("  "), Span::raw(line)]));
        }
    }
    if state.phase == ConciergePhase::Typing {
        if !text_lines.is_empty() {
            text_lines.push(Line::from(Span::raw("")));
        }
        text_lines.push(Line::from(Span::styled(
            "GlobalX is typing…",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let content_height = conv_area.height.saturating_sub(2) as usize; // 边框
    let total_lines = text_lines.len();
    let max_scroll = total_lines.saturating_sub(content_height);
    let scroll_offset = conversation_scroll.min(max_scroll);

    let inner = block.inner(conv_area);
    f.render_widget(block, conv_area);
    let paragraph = Paragraph::new(Text::from(text_lines))
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset as u16, 0));
    f.render_widget(paragraph, inner);

    if total_lines > content_height {
        let mut scrollbar_state = ScrollbarState::new(total_lines)
            .position(scroll_offset)
            .viewport_content_length(content_height);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("█")
            .track_symbol(Some("░"));
        f.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }

    if chips_height > 0 {
        draw_chips(f, chunks[1], &state.suggestions, input_state.focus);
    }

    let input_prompt = if state.input_locked {
        " 等待回复… "
    } else if state.phase == ConciergePhase::Closed {
        " 窗口已收起 "
    } else {
        " 输入 "
    };

    let hint = " Enter 发送 │ Tab 快捷回复 │ Ctrl+R 重置 │ Ctrl+O 收起/展开 │ Ctrl+Q 退出 ";
    let border_color = if input_state.focus == InputFocus::Input {
        Color::Blue
    } else {
        Color::DarkGray
    };
    let input_block = Block::default()
        .title(input_prompt)
        .title_bottom(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let input = Paragraph::new(input_buffer)
        .block(input_block)
        .style(if state.input_locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        });

    f.render_widget(input, chunks[2]);

    out.0 = total_lines;
    out.1 = content_height;
}

fn draw_chips(f: &mut Frame, area: Rect, suggestions: &[String], focus: InputFocus) {
    let block = Block::default()
        .title(" 快捷回复 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let chips = Paragraph::new(chips_line(suggestions, focus)).block(block);
    f.render_widget(chips, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_by_chars() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_text("", 4), vec![""]);
        assert_eq!(wrap_text("a\nb", 4), vec!["a", "b"]);
    }

    #[test]
    fn test_phase_label_follows_intake() {
        let mut state = UiState::default();
        assert!(phase_label(&state).starts_with("已收起"));
        state.phase = ConciergePhase::Ready;
        state.intake = IntakeStep::CollectingEmail;
        assert_eq!(phase_label(&state), "请输入邮箱");
        state.phase = ConciergePhase::Typing;
        assert_eq!(phase_label(&state), "正在输入…");
    }
}
