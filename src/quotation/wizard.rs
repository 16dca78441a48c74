//! 报价向导：10 步线性状态机
//!
//! 只能通过 advance / retreat 移动，两端为无操作；advance 先校验当前步骤，失败则停在原地并返回提示。

use serde::Serialize;

use crate::quotation::form::QuotationForm;
use crate::quotation::locations::compute_ports;
use crate::quotation::pricing::{compute_quote, ChargeableWeight, QuoteResult};
use crate::quotation::{Direction, FieldId, Side, TransportMode, ValidationError, WizardError};

pub const TOTAL_STEPS: u8 = 10;

/// 步骤目录（编号 1..=10）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WizardStep {
    TransportMode,
    Direction,
    Cargo,
    Route,
    Dimensions,
    ServiceOptions,
    RouteAnalysis,
    Parties,
    QuoteGeneration,
    Summary,
}

impl WizardStep {
    pub fn from_number(step: u8) -> Option<Self> {
        Some(match step {
            1 => WizardStep::TransportMode,
            2 => WizardStep::Direction,
            3 => WizardStep::Cargo,
            4 => WizardStep::Route,
            5 => WizardStep::Dimensions,
            6 => WizardStep::ServiceOptions,
            7 => WizardStep::RouteAnalysis,
            8 => WizardStep::Parties,
            9 => WizardStep::QuoteGeneration,
            10 => WizardStep::Summary,
            _ => return None,
        })
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::TransportMode => "Transport Mode",
            WizardStep::Direction => "Direction",
            WizardStep::Cargo => "Cargo",
            WizardStep::Route => "Route",
            WizardStep::Dimensions => "Dimensions",
            WizardStep::ServiceOptions => "Service Options",
            WizardStep::RouteAnalysis => "Route Analysis",
            WizardStep::Parties => "Parties",
            WizardStep::QuoteGeneration => "Quote Generation",
            WizardStep::Summary => "Summary",
        }
    }

    /// 这些步骤有自动前进或专用按钮，不显示 Next
    pub fn shows_next_button(self) -> bool {
        !matches!(
            self,
            WizardStep::TransportMode
                | WizardStep::Direction
                | WizardStep::RouteAnalysis
                | WizardStep::QuoteGeneration
                | WizardStep::Summary
        )
    }
}

/// 每次移动尝试的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub current_step: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<ValidationError>,
}

/// 校验某步骤：只看步骤号与当前表单
pub fn validate(step: u8, form: &QuotationForm) -> Result<(), ValidationError> {
    match step {
        1 if form.mode.is_none() => Err(ValidationError::MissingMode),
        2 if form.direction.is_none() => Err(ValidationError::MissingDirection),
        3 if form.cargo_type.is_empty() => Err(ValidationError::MissingCargoCategory),
        8 if form.consignee_name.is_empty() || form.consignee_email.is_empty() => {
            Err(ValidationError::MissingConsignee)
        }
        8 if form.shipper_name.is_empty() => Err(ValidationError::MissingShipper),
        _ => Ok(()),
    }
}

/// 报价向导实例（每个访客一份）
#[derive(Debug, Clone)]
pub struct QuotationWizard {
    current_step: u8,
    form: QuotationForm,
    quote: Option<QuoteResult>,
}

impl QuotationWizard {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            form: QuotationForm::new(),
            quote: None,
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn step(&self) -> WizardStep {
        // current_step 恒在 1..=TOTAL_STEPS
        WizardStep::from_number(self.current_step).unwrap_or(WizardStep::TransportMode)
    }

    pub fn form(&self) -> &QuotationForm {
        &self.form
    }

    /// 最近一次生成的报价
    pub fn quote(&self) -> Option<&QuoteResult> {
        self.quote.as_ref()
    }

    pub fn set_field(&mut self, field: FieldId, value: &str) -> Result<(), WizardError> {
        self.form.set_field(field, value)
    }

    /// 校验当前步骤，通过则前进一步（末步不再前进）
    pub fn advance(&mut self) -> StepOutcome {
        if let Err(e) = validate(self.current_step, &self.form) {
            tracing::debug!(step = self.current_step, error = %e, "Step validation failed");
            return StepOutcome {
                current_step: self.current_step,
                validation_error: Some(e),
            };
        }
        if self.current_step < TOTAL_STEPS {
            self.current_step += 1;
        }
        self.outcome()
    }

    /// 后退一步，第 1 步时无操作
    pub fn retreat(&mut self) -> StepOutcome {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
        self.outcome()
    }

    /// 选择运输方式并自动前进
    pub fn select_mode(&mut self, mode: TransportMode) -> StepOutcome {
        self.form.mode = Some(mode);
        self.advance()
    }

    /// 选择进出口方向并自动前进
    pub fn select_direction(&mut self, direction: Direction) -> StepOutcome {
        self.form.direction = Some(direction);
        self.advance()
    }

    /// 按当前运输方式列出某侧国家的可选站点
    pub fn ports(&self, side: Side) -> &'static [&'static str] {
        let country = match side {
            Side::Origin => &self.form.origin_country,
            Side::Dest => &self.form.dest_country,
        };
        compute_ports(country, self.form.mode)
    }

    pub fn chargeable_weight(&self) -> ChargeableWeight {
        self.form.chargeable_weight()
    }

    /// 用当前表单计算报价（不改变步骤）
    pub fn compute_quote(&self) -> Result<QuoteResult, WizardError> {
        let inputs = self.form.quote_inputs()?;
        Ok(compute_quote(&inputs))
    }

    /// 生成最终报价并保存，然后前进到汇总页
    pub fn generate_quote(&mut self) -> Result<StepOutcome, WizardError> {
        let result = self.compute_quote()?;
        self.quote = Some(result);
        Ok(self.advance())
    }

    /// 进度 0..=1
    pub fn progress(&self) -> f64 {
        f64::from(self.current_step) / f64::from(TOTAL_STEPS)
    }

    /// 形如 "03 / 10"
    pub fn progress_label(&self) -> String {
        format!("{:02} / {}", self.current_step, TOTAL_STEPS)
    }

    fn outcome(&self) -> StepOutcome {
        StepOutcome {
            current_step: self.current_step,
            validation_error: None,
        }
    }
}

impl Default for QuotationWizard {
    fn default() -> Self {
        Self::new()
    }
}
