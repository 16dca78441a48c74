//! 报价单导出
//!
//! QuoteExporter 是外部协作方的边界：给定汇总，产出可下载的文档。
//! 导出失败不向上传播为崩溃，而是由 export_with_notice 转成可重试的用户提示。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::config::ExportFormat;
use crate::core::{GlobalxError, NoticeEngine, UserNotice};
use crate::quotation::summary::QuoteSummary;

const DOCUMENT_TITLE: &str = "GlobalX Logistics Quotation";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 报价单导出器
#[async_trait]
pub trait QuoteExporter: Send + Sync {
    /// 导出文档，返回文件路径
    async fn export(&self, summary: &QuoteSummary) -> Result<PathBuf, ExportError>;
}

/// 写入本地目录的导出器（纯文本或 JSON）
#[derive(Debug, Clone)]
pub struct FileExporter {
    output_dir: PathBuf,
    format: ExportFormat,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    title: &'static str,
    reference: &'a str,
    generated: String,
    summary: &'a QuoteSummary,
}

impl FileExporter {
    pub fn new(output_dir: impl AsRef<Path>, format: ExportFormat) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            format,
        }
    }

    fn render(&self, reference: &str, summary: &QuoteSummary) -> Result<String, ExportError> {
        let generated = Local::now().format("%Y-%m-%d").to_string();
        match self.format {
            ExportFormat::Text => {
                let mut doc = format!(
                    "{DOCUMENT_TITLE}\nReference: {reference}\nGenerated: {generated}\n\n"
                );
                for line in summary.to_lines() {
                    doc.push_str(&line);
                    doc.push('\n');
                }
                Ok(doc)
            }
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&JsonDocument {
                title: DOCUMENT_TITLE,
                reference,
                generated,
                summary,
            })?),
        }
    }
}

#[async_trait]
impl QuoteExporter for FileExporter {
    async fn export(&self, summary: &QuoteSummary) -> Result<PathBuf, ExportError> {
        let reference = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
        let ext = match self.format {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        };
        let body = self.render(&reference, summary)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self
            .output_dir
            .join(format!("GlobalX_Quote_Proposal_{reference}.{ext}"));
        tokio::fs::write(&path, body).await?;
        tracing::info!(path = %path.display(), "Quote exported");
        Ok(path)
    }
}

/// 导出并把失败转成可关闭、可重试的用户提示
pub async fn export_with_notice(
    exporter: &dyn QuoteExporter,
    summary: &QuoteSummary,
) -> Result<PathBuf, UserNotice> {
    exporter.export(summary).await.map_err(|e| {
        tracing::error!("Quote export failed: {}", e);
        NoticeEngine::new().notice(&GlobalxError::from(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotation::pricing::{compute_quote, QuoteInputs};
    use crate::quotation::TransportMode;

    fn summary() -> QuoteSummary {
        QuoteSummary::from_result(&compute_quote(&QuoteInputs {
            mode: TransportMode::Air,
            origin_country: "Germany".into(),
            origin_port: "Frankfurt (FRA)".into(),
            dest_country: "UK".into(),
            dest_port: "London (LHR)".into(),
            weight_kg: 20.0,
            length_cm: 40.0,
            width_cm: 30.0,
            height_cm: 20.0,
        }))
    }

    struct BrokenExporter;

    #[async_trait]
    impl QuoteExporter for BrokenExporter {
        async fn export(&self, _summary: &QuoteSummary) -> Result<PathBuf, ExportError> {
            Err(ExportError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "renderer unavailable",
            )))
        }
    }

    #[tokio::test]
    async fn test_text_export() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path(), ExportFormat::Text);
        let path = exporter.export(&summary()).await.unwrap();
        assert_eq!(path.extension().unwrap(), "txt");
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(body.starts_with(DOCUMENT_TITLE));
        assert!(body.contains("Generated: "));
        assert!(body.contains("Frankfurt (FRA), Germany"));
    }

    #[tokio::test]
    async fn test_json_export() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FileExporter::new(dir.path().join("nested"), ExportFormat::Json);
        let path = exporter.export(&summary()).await.unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["title"], DOCUMENT_TITLE);
        assert_eq!(v["summary"]["mode"], "AIR");
        assert_eq!(v["summary"]["distance"], "1,000 km");
    }

    #[tokio::test]
    async fn test_failure_becomes_retryable_notice() {
        let notice = export_with_notice(&BrokenExporter, &summary()).await.unwrap_err();
        assert!(notice.retryable);
        assert!(notice.dismissible);
        assert!(notice.message.contains("Please try again"));
    }
}
