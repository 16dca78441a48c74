//! 对话记录：访客与客服的消息列表
//!
//! 保留最近 N 轮（visitor/concierge 对），超出时丢弃最旧的消息，供 UI 渲染。

use chrono::Local;
use serde::{Deserialize, Serialize};

/// 消息发送方
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Visitor,
    Concierge,
}

/// 单条消息，附本地时间 HH:MM
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub time: String,
}

impl Message {
    pub fn visitor(content: impl Into<String>) -> Self {
        Self::stamped(Role::Visitor, content)
    }

    pub fn concierge(content: impl Into<String>) -> Self {
        Self::stamped(Role::Concierge, content)
    }

    fn stamped(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            time: Local::now().format("%H:%M").to_string(),
        }
    }
}

/// 最近 N 轮对话（每轮约含 visitor + concierge，故保留 max_turns*2 条）
#[derive(Clone, Debug)]
pub struct Transcript {
    messages: Vec<Message>,
    max_turns: usize,
}

impl Transcript {
    pub fn new(max_turns: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_turns,
        }
    }

    pub fn push(&mut self, msg: Message) {
        self.messages.push(msg);
        self.prune();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    fn prune(&mut self) {
        let keep = self.max_turns.saturating_mul(2);
        if self.messages.len() > keep {
            self.messages.drain(..self.messages.len() - keep);
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_keeps_latest() {
        let mut t = Transcript::new(2);
        for i in 0..7 {
            t.push(Message::visitor(format!("m{i}")));
        }
        assert_eq!(t.len(), 4);
        assert_eq!(t.messages()[0].content, "m3");
        assert_eq!(t.messages()[3].content, "m6");
    }

    #[test]
    fn test_huge_turn_limit_keeps_everything() {
        let mut t = Transcript::new(usize::MAX);
        t.push(Message::visitor("a"));
        t.push(Message::concierge("b"));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_time_format() {
        let m = Message::concierge("hi");
        assert_eq!(m.time.len(), 5);
        assert_eq!(&m.time[2..3], ":");
    }
}
