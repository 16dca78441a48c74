//! 事件处理
//!
//! 轮询 crossterm 键盘事件，将 Ctrl+R/Ctrl+O/Ctrl+Q 转为 Command（Reset/Toggle/Quit），
//! 其余按键交给 run_app 拼 input_buffer 或切换快捷回复，Enter 时 send_submit。

use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::core::{Command, SessionSupervisor};

/// 应用事件：来自快捷键的 Command 或原始 KeyEvent
#[derive(Debug, Clone)]
pub enum AppEvent {
    Command(Command),
    Key(KeyEvent),
}

/// 事件处理器：持有 cmd_tx 与会话监管，poll 时读键盘并返回 AppEvent
pub struct EventHandler {
    cmd_tx: mpsc::UnboundedSender<Command>,
    supervisor: Arc<SessionSupervisor>,
}

impl EventHandler {
    pub fn new(cmd_tx: mpsc::UnboundedSender<Command>, supervisor: Arc<SessionSupervisor>) -> Self {
        Self { cmd_tx, supervisor }
    }

    pub fn poll(&self) -> anyhow::Result<Option<AppEvent>> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(self.handle_key(key)));
                }
            }
        }
        Ok(None)
    }

    fn handle_key(&self, key: KeyEvent) -> AppEvent {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r') if ctrl => {
                // 先打断正在显示的回复，再让编排器重置
                self.supervisor.interrupt();
                let _ = self.cmd_tx.send(Command::Reset);
                AppEvent::Command(Command::Reset)
            }
            KeyCode::Char('o') if ctrl => {
                let _ = self.cmd_tx.send(Command::Toggle);
                AppEvent::Command(Command::Toggle)
            }
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
                let _ = self.cmd_tx.send(Command::Quit);
                AppEvent::Command(Command::Quit)
            }
            _ => AppEvent::Key(key),
        }
    }

    pub fn send_submit(&self, input: String) {
        let _ = self.cmd_tx.send(Command::Submit(input));
    }
}
