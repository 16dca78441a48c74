//! TUI 应用主循环
//!
//! 进入全屏/原始模式，启动时展开客服窗口；轮询 state_rx 与键盘事件，
//! 将输入与快捷回复转为 Command 发送给编排器，每帧用 draw 渲染 UiState 与输入缓冲。

use std::io::{self, Stdout};

use crossterm::event::KeyCode;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::{Command, ConciergeHandle};
use crate::ui::event::{AppEvent, EventHandler};
use crate::ui::render::{draw, InputFocus, InputState};

/// Tab 顺序：输入框 -> 各快捷回复 -> 输入框
fn next_focus(focus: InputFocus, chips: usize) -> InputFocus {
    match focus {
        InputFocus::Input if chips > 0 => InputFocus::Chip(0),
        InputFocus::Input => InputFocus::Input,
        InputFocus::Chip(i) if i + 1 < chips => InputFocus::Chip(i + 1),
        InputFocus::Chip(_) => InputFocus::Input,
    }
}

fn prev_focus(focus: InputFocus, chips: usize) -> InputFocus {
    match focus {
        InputFocus::Input if chips > 0 => InputFocus::Chip(chips - 1),
        InputFocus::Input => InputFocus::Input,
        InputFocus::Chip(0) => InputFocus::Input,
        InputFocus::Chip(i) => InputFocus::Chip(i - 1),
    }
}

/// 运行 TUI：启用原始模式与全屏，循环 poll 事件 + 渲染，退出时恢复终端
pub async fn run_app(handle: ConciergeHandle) -> anyhow::Result<()> {
    let ConciergeHandle {
        cmd_tx,
        state_rx,
        supervisor,
    } = handle;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 打开页面即展开客服窗口
    let _ = cmd_tx.send(Command::Toggle);

    let event_handler = EventHandler::new(cmd_tx, supervisor);
    let mut input_buffer = String::new();
    let mut conversation_scroll = 0usize;
    let mut last_history_len = 0usize;
    let mut input_state = InputState::default();

    loop {
        let state = state_rx.borrow().clone();

        if state.history.len() != last_history_len {
            last_history_len = state.history.len();
            conversation_scroll = usize::MAX;
        }
        // 快捷回复被替换或清空后，焦点回到输入框
        if let InputFocus::Chip(i) = input_state.focus {
            if i >= state.suggestions.len() {
                input_state.focus = InputFocus::Input;
            }
        }

        match event_handler.poll() {
            Ok(Some(AppEvent::Command(Command::Quit))) => break,
            Ok(Some(AppEvent::Command(Command::Reset))) => {
                input_buffer.clear();
                input_state.focus = InputFocus::Input;
            }
            Ok(Some(AppEvent::Key(key))) if !state.input_locked => match key.code {
                KeyCode::Enter => match input_state.focus {
                    InputFocus::Input => {
                        let input = input_buffer.trim().to_string();
                        input_buffer.clear();
                        if !input.is_empty() {
                            event_handler.send_submit(input);
                        }
                    }
                    InputFocus::Chip(i) => {
                        if let Some(chip) = state.suggestions.get(i) {
                            event_handler.send_submit(chip.clone());
                        }
                        input_state.focus = InputFocus::Input;
                    }
                },
                KeyCode::Tab => {
                    input_state.focus = next_focus(input_state.focus, state.suggestions.len());
                }
                KeyCode::BackTab => {
                    input_state.focus = prev_focus(input_state.focus, state.suggestions.len());
                }
                KeyCode::Backspace => {
                    if input_state.focus == InputFocus::Input {
                        input_buffer.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if input_state.focus == InputFocus::Input {
                        input_buffer.push(c);
                    }
                }
                KeyCode::Up => {
                    conversation_scroll = conversation_scroll.saturating_sub(1);
                }
                KeyCode::Down => {
                    conversation_scroll = conversation_scroll.saturating_add(1);
                }
                KeyCode::PageUp => {
                    conversation_scroll = conversation_scroll.saturating_sub(10);
                }
                KeyCode::PageDown => {
                    conversation_scroll = conversation_scroll.saturating_add(10);
                }
                KeyCode::Home => {
                    conversation_scroll = 0;
                }
                KeyCode::End => {
                    conversation_scroll = usize::MAX;
                }
                _ => {}
            },
            Ok(_) => {}
            Err(e) => tracing::warn!("Failed to read terminal event: {}", e),
        }

        let mut scroll_info = (0usize, 0usize);
        terminal.draw(|f| {
            draw(
                f,
                &state,
                &input_buffer,
                conversation_scroll,
                &mut scroll_info,
                &input_state,
            );
        })?;
        let (total_lines, viewport_height) = scroll_info;
        let max_scroll = total_lines.saturating_sub(viewport_height);
        conversation_scroll = conversation_scroll.min(max_scroll);

        tokio::task::yield_now().await;
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
