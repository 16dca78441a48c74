//! 用户提示引擎
//!
//! 根据 GlobalxError 类型返回 UserNotice：校验错误原地提示；查询未命中给兜底文案；导出失败给可重试提示。

use crate::core::{GlobalxError, UserNotice};

const EXPORT_FAILED: &str = "Could not generate the quotation document. Please try again.";

/// 错误 -> 提示映射
#[derive(Debug, Default)]
pub struct NoticeEngine;

impl NoticeEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn notice(&self, err: &GlobalxError) -> UserNotice {
        match err {
            GlobalxError::Validation(e) => UserNotice {
                message: e.to_string(),
                retryable: false,
                dismissible: false,
            },
            GlobalxError::Wizard(e) => UserNotice {
                message: e.to_string(),
                retryable: false,
                dismissible: false,
            },
            GlobalxError::Tracking(e) => UserNotice {
                message: e.to_string(),
                retryable: false,
                dismissible: false,
            },
            GlobalxError::Export(_) => UserNotice {
                message: EXPORT_FAILED.to_string(),
                retryable: true,
                dismissible: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotation::{ExportError, ValidationError};
    use crate::tracking::TrackingError;

    #[test]
    fn test_validation_notice_inline() {
        let notice = NoticeEngine::new().notice(&ValidationError::MissingDirection.into());
        assert_eq!(notice.message, "Please select Import or Export.");
        assert!(!notice.retryable);
        assert!(!notice.dismissible);
    }

    #[test]
    fn test_tracking_notice() {
        let err = TrackingError::NotFound { id: "X1".into() };
        let notice = NoticeEngine::new().notice(&err.into());
        assert!(notice.message.starts_with("Tracking ID X1 not found"));
    }

    #[test]
    fn test_export_notice_retryable() {
        let err = ExportError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let notice = NoticeEngine::new().notice(&err.into());
        assert_eq!(notice.message, EXPORT_FAILED);
        assert!(notice.retryable);
        assert!(notice.dismissible);
    }
}
