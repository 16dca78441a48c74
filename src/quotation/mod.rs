//! 报价向导：10 步表单、步骤校验、模拟定价与报价单导出

pub mod distance;
pub mod export;
pub mod form;
pub mod locations;
pub mod pricing;
pub mod summary;
pub mod types;
pub mod wizard;

pub use distance::compute_distance;
pub use export::{export_with_notice, ExportError, FileExporter, QuoteExporter};
pub use form::QuotationForm;
pub use locations::compute_ports;
pub use pricing::{
    compute_chargeable_weight, compute_quote, ChargeableWeight, QuoteInputs, QuoteResult,
};
pub use summary::{format_money, QuoteSummary};
pub use types::{Direction, FieldId, Side, TransportMode, ValidationError, WizardError};
pub use wizard::{validate, QuotationWizard, StepOutcome, WizardStep, TOTAL_STEPS};
