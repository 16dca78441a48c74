//! 报价向导类型定义
//!
//! 运输方式、进出口方向、表单字段 ID，以及校验/输入错误类型

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 运输方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    Air,
    Courier,
    SeaFcl,
    SeaLcl,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Air,
        TransportMode::Courier,
        TransportMode::SeaFcl,
        TransportMode::SeaLcl,
    ];

    /// 空运类（air / courier）走机场与 167 kg/m³ 折算
    pub fn is_air(self) -> bool {
        matches!(self, TransportMode::Air | TransportMode::Courier)
    }

    pub fn id(self) -> &'static str {
        match self {
            TransportMode::Air => "air",
            TransportMode::Courier => "courier",
            TransportMode::SeaFcl => "sea-fcl",
            TransportMode::SeaLcl => "sea-lcl",
        }
    }

    /// 汇总页显示名：大写且 '-' 换成空格，如 "SEA FCL"
    pub fn label(self) -> String {
        self.id().to_uppercase().replace('-', " ")
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TransportMode {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "air" => Ok(TransportMode::Air),
            "courier" => Ok(TransportMode::Courier),
            "sea-fcl" => Ok(TransportMode::SeaFcl),
            "sea-lcl" => Ok(TransportMode::SeaLcl),
            _ => Err(WizardError::InvalidValue {
                field: FieldId::Mode,
                value: s.to_string(),
            }),
        }
    }
}

/// 进出口方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Import,
    Export,
}

impl FromStr for Direction {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "import" => Ok(Direction::Import),
            "export" => Ok(Direction::Export),
            _ => Err(WizardError::InvalidValue {
                field: FieldId::Direction,
                value: s.to_string(),
            }),
        }
    }
}

/// 表单字段（ID 沿用报价页表单控件的 kebab-case 命名）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Mode,
    Direction,
    CargoType,
    OriginCountry,
    OriginPort,
    DestCountry,
    DestPort,
    Weight,
    Length,
    Width,
    Height,
    ConsigneeName,
    ConsigneeEmail,
    ShipperName,
}

impl FieldId {
    pub const ALL: [FieldId; 14] = [
        FieldId::Mode,
        FieldId::Direction,
        FieldId::CargoType,
        FieldId::OriginCountry,
        FieldId::OriginPort,
        FieldId::DestCountry,
        FieldId::DestPort,
        FieldId::Weight,
        FieldId::Length,
        FieldId::Width,
        FieldId::Height,
        FieldId::ConsigneeName,
        FieldId::ConsigneeEmail,
        FieldId::ShipperName,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FieldId::Mode => "mode",
            FieldId::Direction => "direction",
            FieldId::CargoType => "input-cargo-type",
            FieldId::OriginCountry => "origin-country",
            FieldId::OriginPort => "origin-port",
            FieldId::DestCountry => "dest-country",
            FieldId::DestPort => "dest-port",
            FieldId::Weight => "input-weight",
            FieldId::Length => "input-length",
            FieldId::Width => "input-width",
            FieldId::Height => "input-height",
            FieldId::ConsigneeName => "input-name",
            FieldId::ConsigneeEmail => "input-email",
            FieldId::ShipperName => "input-shipper-name",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FieldId::Weight | FieldId::Length | FieldId::Width | FieldId::Height
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldId {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|f| f.id() == s.trim())
            .ok_or_else(|| WizardError::UnknownField(s.to_string()))
    }
}

/// 起运地 / 目的地
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Origin,
    Dest,
}

/// 步骤校验失败（用户可修正，原地提示）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    #[error("Please select a transport mode.")]
    MissingMode,
    #[error("Please select Import or Export.")]
    MissingDirection,
    #[error("Please select a cargo category.")]
    MissingCargoCategory,
    #[error("Please fill in Consignee Name and Email.")]
    MissingConsignee,
    #[error("Please fill in Shipper Name.")]
    MissingShipper,
}

/// 字段写入或报价计算时的输入错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: FieldId, value: String },

    #[error("Invalid number for {field}: {value}")]
    InvalidNumber { field: FieldId, value: String },

    #[error("Transport mode must be selected before quoting")]
    ModeNotSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_and_label() {
        assert_eq!("sea-fcl".parse::<TransportMode>().unwrap(), TransportMode::SeaFcl);
        assert_eq!(" AIR ".parse::<TransportMode>().unwrap(), TransportMode::Air);
        assert!("rail".parse::<TransportMode>().is_err());
        assert_eq!(TransportMode::SeaLcl.label(), "SEA LCL");
        assert_eq!(TransportMode::Courier.label(), "COURIER");
    }

    #[test]
    fn test_field_id_round_trip() {
        for f in FieldId::ALL {
            assert_eq!(f.id().parse::<FieldId>().unwrap(), f);
        }
        assert_eq!(
            "input-colour".parse::<FieldId>(),
            Err(WizardError::UnknownField("input-colour".to_string()))
        );
    }
}
