//! 状态定义：UiState 投影
//!
//! UI 只持有轻量的 UiState（阶段、对话记录、快捷回复、锁）；引擎完整状态由编排器维护并投影到 UiState。

use serde::Serialize;

use crate::concierge::{IntakeStep, Message};

/// UI 看到的「投影」状态
#[derive(Clone, Debug, Serialize)]
pub struct UiState {
    pub phase: ConciergePhase,
    pub intake: IntakeStep,
    pub history: Vec<Message>,
    /// 当前快捷回复（点选等同于输入该文本）
    pub suggestions: Vec<String>,
    pub input_locked: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            phase: ConciergePhase::Closed,
            intake: IntakeStep::Idle,
            history: Vec::new(),
            suggestions: Vec::new(),
            input_locked: false,
        }
    }
}

/// 客服窗口阶段（UI 投影用）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ConciergePhase {
    /// 窗口收起
    Closed,
    /// 等待访客输入
    Ready,
    /// 显示「正在输入」
    Typing,
}
