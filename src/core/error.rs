//! 统一错误类型
//!
//! 与 NoticeEngine 配合：根据错误类别决定原地提示、兜底文案或可重试提示。

use thiserror::Error;

use crate::quotation::{ExportError, ValidationError, WizardError};
use crate::tracking::TrackingError;

/// 各引擎可能出现的错误；都不是致命错误
#[derive(Error, Debug)]
pub enum GlobalxError {
    /// 步骤校验未通过（用户可修正）
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 表单输入无效
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// 运单号不存在
    #[error(transparent)]
    Tracking(#[from] TrackingError),

    /// 报价单导出失败（外部协作方）
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// 面向用户的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub message: String,
    /// 用户可直接重试同一操作
    pub retryable: bool,
    /// 以可关闭的浮层展示，而不是原地提示
    pub dismissible: bool,
}
