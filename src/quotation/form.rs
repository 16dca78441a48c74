//! 报价表单：各步骤采集到的字段值
//!
//! 字段经 set_field 写入并在写入时解析；报价时通过 quote_inputs 一次性组装为 QuoteInputs。

use serde::Serialize;

use crate::quotation::pricing::{compute_chargeable_weight, ChargeableWeight, QuoteInputs};
use crate::quotation::{Direction, FieldId, TransportMode, WizardError};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuotationForm {
    pub mode: Option<TransportMode>,
    pub direction: Option<Direction>,
    pub cargo_type: String,
    pub origin_country: String,
    pub origin_port: String,
    pub dest_country: String,
    pub dest_port: String,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub consignee_name: String,
    pub consignee_email: String,
    pub shipper_name: String,
}

impl QuotationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入字段；数值字段空串视为 0，非数字或负数报错。换国家时清空对应港口
    pub fn set_field(&mut self, field: FieldId, value: &str) -> Result<(), WizardError> {
        let value = value.trim();
        match field {
            FieldId::Mode => {
                self.mode = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            FieldId::Direction => {
                self.direction = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            FieldId::CargoType => self.cargo_type = value.to_string(),
            FieldId::OriginCountry => {
                if self.origin_country != value {
                    self.origin_country = value.to_string();
                    self.origin_port.clear();
                }
            }
            FieldId::OriginPort => self.origin_port = value.to_string(),
            FieldId::DestCountry => {
                if self.dest_country != value {
                    self.dest_country = value.to_string();
                    self.dest_port.clear();
                }
            }
            FieldId::DestPort => self.dest_port = value.to_string(),
            FieldId::Weight => self.weight_kg = parse_measure(field, value)?,
            FieldId::Length => self.length_cm = parse_measure(field, value)?,
            FieldId::Width => self.width_cm = parse_measure(field, value)?,
            FieldId::Height => self.height_cm = parse_measure(field, value)?,
            FieldId::ConsigneeName => self.consignee_name = value.to_string(),
            FieldId::ConsigneeEmail => self.consignee_email = value.to_string(),
            FieldId::ShipperName => self.shipper_name = value.to_string(),
        }
        Ok(())
    }

    /// 实时计费重（尺寸输入变化时展示用）
    pub fn chargeable_weight(&self) -> ChargeableWeight {
        compute_chargeable_weight(
            self.weight_kg,
            self.length_cm,
            self.width_cm,
            self.height_cm,
            self.mode,
        )
    }

    /// 组装报价输入；未选运输方式时报错
    pub fn quote_inputs(&self) -> Result<QuoteInputs, WizardError> {
        let mode = self.mode.ok_or(WizardError::ModeNotSelected)?;
        Ok(QuoteInputs {
            mode,
            origin_country: self.origin_country.clone(),
            origin_port: self.origin_port.clone(),
            dest_country: self.dest_country.clone(),
            dest_port: self.dest_port.clone(),
            weight_kg: self.weight_kg,
            length_cm: self.length_cm,
            width_cm: self.width_cm,
            height_cm: self.height_cm,
        })
    }
}

fn parse_measure(field: FieldId, value: &str) -> Result<f64, WizardError> {
    if value.is_empty() {
        return Ok(0.0);
    }
    let invalid = || WizardError::InvalidNumber {
        field,
        value: value.to_string(),
    };
    let n: f64 = value.parse().map_err(|_| invalid())?;
    if !n.is_finite() || n < 0.0 {
        return Err(invalid());
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_select_fields() {
        let mut form = QuotationForm::new();
        form.set_field(FieldId::Mode, "sea-lcl").unwrap();
        form.set_field(FieldId::Direction, "Export").unwrap();
        assert_eq!(form.mode, Some(TransportMode::SeaLcl));
        assert_eq!(form.direction, Some(Direction::Export));

        form.set_field(FieldId::Mode, "").unwrap();
        assert_eq!(form.mode, None);

        let err = form.set_field(FieldId::Direction, "sideways").unwrap_err();
        assert!(matches!(err, WizardError::InvalidValue { field: FieldId::Direction, .. }));
    }

    #[test]
    fn test_numeric_fields() {
        let mut form = QuotationForm::new();
        form.set_field(FieldId::Weight, " 12.5 ").unwrap();
        assert_eq!(form.weight_kg, 12.5);
        form.set_field(FieldId::Weight, "").unwrap();
        assert_eq!(form.weight_kg, 0.0);

        assert!(form.set_field(FieldId::Length, "abc").is_err());
        assert!(form.set_field(FieldId::Width, "-3").is_err());
        assert!(form.set_field(FieldId::Height, "NaN").is_err());
    }

    #[test]
    fn test_country_change_clears_port() {
        let mut form = QuotationForm::new();
        form.set_field(FieldId::OriginCountry, "China").unwrap();
        form.set_field(FieldId::OriginPort, "Shanghai").unwrap();
        form.set_field(FieldId::OriginCountry, "China").unwrap();
        assert_eq!(form.origin_port, "Shanghai");
        form.set_field(FieldId::OriginCountry, "India").unwrap();
        assert!(form.origin_port.is_empty());
    }

    #[test]
    fn test_quote_inputs_requires_mode() {
        let form = QuotationForm::new();
        assert_eq!(form.quote_inputs(), Err(WizardError::ModeNotSelected));
    }
}
