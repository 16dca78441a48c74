//! 客服回复事件：文本 + 快捷回复，附带模拟打字延迟

use std::time::Duration;

use serde::Serialize;

/// 打字延迟上限
pub const MAX_TYPING_DELAY: Duration = Duration::from_millis(1000);
const BASE_TYPING_MS: u64 = 300;
const PER_CHAR_MS: u64 = 20;

/// 单条客服回复
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    /// 为空表示不更新快捷回复区
    pub suggested_replies: Vec<String>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggested_replies: Vec::new(),
        }
    }

    pub fn with_chips(text: impl Into<String>, chips: &[&str]) -> Self {
        Self {
            text: text.into(),
            suggested_replies: chips.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// 展示前的「思考」时长：300ms + 每字 20ms，封顶 1s
    pub fn typing_delay(&self) -> Duration {
        typing_delay_for(&self.text)
    }
}

pub fn typing_delay_for(text: &str) -> Duration {
    let chars = text.chars().count() as u64;
    let ms = BASE_TYPING_MS.saturating_add(chars.saturating_mul(PER_CHAR_MS));
    Duration::from_millis(ms).min(MAX_TYPING_DELAY)
}
