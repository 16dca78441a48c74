//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `GLOBALX__*` 覆盖（双下划线表示嵌套，如 `GLOBALX__CONCIERGE__TYPING_DELAY=false`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub concierge: ConciergeSection,
    #[serde(default)]
    pub quotation: QuotationSection,
    #[serde(default)]
    pub export: ExportSection,
}

/// [app] 段：品牌名称
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    "GlobalX Logistics".to_string()
}

/// [concierge] 段：客服打字延迟、历史轮数、回复随机种子
#[derive(Debug, Clone, Deserialize)]
pub struct ConciergeSection {
    /// 是否模拟「正在输入」延迟；测试与脚本场景可关闭
    #[serde(default = "default_typing_delay")]
    pub typing_delay: bool,
    /// 对话记录保留轮数
    #[serde(default = "default_max_history_turns")]
    pub max_history_turns: usize,
    /// 设置后回复挑选可复现
    #[serde(default)]
    pub reply_seed: Option<u64>,
}

impl Default for ConciergeSection {
    fn default() -> Self {
        Self {
            typing_delay: default_typing_delay(),
            max_history_turns: default_max_history_turns(),
            reply_seed: None,
        }
    }
}

fn default_typing_delay() -> bool {
    true
}

fn default_max_history_turns() -> usize {
    50
}

/// [quotation] 段：向导中的装饰性延迟（毫秒）
#[derive(Debug, Clone, Deserialize)]
pub struct QuotationSection {
    /// 选择运输方式 / 进出口后自动前进前的停顿
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// 第 7 步「路线分析」的模拟耗时
    #[serde(default = "default_analyze_delay_ms")]
    pub analyze_delay_ms: u64,
}

impl Default for QuotationSection {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            analyze_delay_ms: default_analyze_delay_ms(),
        }
    }
}

fn default_auto_advance_ms() -> u64 {
    300
}

fn default_analyze_delay_ms() -> u64 {
    1500
}

/// [export] 段：报价单导出目录与格式
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSection {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ExportFormat::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

/// 报价单文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

/// 从 config 目录加载配置，环境变量 GLOBALX__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 GLOBALX__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("GLOBALX")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}

/// 加载配置，失败时记录告警并回退到默认值
pub fn load_config_or_default(config_path: Option<PathBuf>) -> AppConfig {
    load_config(config_path).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.app.name, "GlobalX Logistics");
        assert!(cfg.concierge.typing_delay);
        assert_eq!(cfg.concierge.max_history_turns, 50);
        assert_eq!(cfg.quotation.auto_advance_ms, 300);
        assert_eq!(cfg.quotation.analyze_delay_ms, 1500);
        assert_eq!(cfg.export.format, ExportFormat::Text);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[concierge]\ntyping_delay = false\nreply_seed = 7\n\n[export]\nformat = \"json\"\noutput_dir = \"out\""
        )
        .unwrap();

        let cfg = load_config(Some(file.path().to_path_buf())).unwrap();
        assert!(!cfg.concierge.typing_delay);
        assert_eq!(cfg.concierge.reply_seed, Some(7));
        assert_eq!(cfg.concierge.max_history_turns, 50);
        assert_eq!(cfg.export.format, ExportFormat::Json);
        assert_eq!(cfg.export.output_dir, PathBuf::from("out"));
    }
}
