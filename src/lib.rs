//! GlobalX - 物流门户核心逻辑
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 错误、用户提示、UI 状态投影、会话监管、客服编排器
//! - **concierge**: 智能客服：信息采集状态机、意图识别、知识库、打字延迟
//! - **quotation**: 报价向导：步骤校验、港口/距离表、计费重、报价计算、导出
//! - **tracking**: 货运追踪：内存 Mock 数据集查询
//! - **observability**: 日志初始化
//! - **ui**: Ratatui TUI 界面（客服窗口）

pub mod concierge;
pub mod config;
pub mod core;
pub mod observability;
pub mod quotation;
pub mod tracking;
pub mod ui;

pub use concierge::{ConversationEngine, Intent, Reply};
pub use quotation::{compute_quote, QuotationWizard, QuoteInputs, QuoteResult};
pub use tracking::search_track;
