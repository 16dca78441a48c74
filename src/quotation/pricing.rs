//! 计费重与报价计算（纯函数，无 UI 依赖）
//!
//! 计费重 = max(实重, 体积重)；体积重 = 体积(m³) × 折算系数（空运 167、海运 1000 kg/m³）。
//! 报价 = 基础运费 + 12% 燃油附加 + 跨境清关费 + 固定操作费。金额全程保持浮点精度，只在展示时保留两位。

use serde::Serialize;

use crate::quotation::distance::compute_distance;
use crate::quotation::TransportMode;

pub const AIR_VOLUMETRIC_FACTOR: f64 = 167.0;
pub const SEA_VOLUMETRIC_FACTOR: f64 = 1000.0;

const DISTANCE_UNIT_KM: f64 = 5000.0;
const LCL_RATE_PER_CBM: f64 = 150.0;
const FUEL_SURCHARGE_RATE: f64 = 0.12;
pub const CUSTOMS_FEE: f64 = 120.0;
pub const HANDLING_FEE: f64 = 50.0;

/// 体积与计费重
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeableWeight {
    pub volume_m3: f64,
    pub volumetric_kg: f64,
    pub chargeable_kg: f64,
}

/// 计算计费重；mode 未选时按海运系数
pub fn compute_chargeable_weight(
    weight_kg: f64,
    length_cm: f64,
    width_cm: f64,
    height_cm: f64,
    mode: Option<TransportMode>,
) -> ChargeableWeight {
    let volume_m3 = (length_cm * width_cm * height_cm) / 1_000_000.0;
    let factor = if mode.is_some_and(TransportMode::is_air) {
        AIR_VOLUMETRIC_FACTOR
    } else {
        SEA_VOLUMETRIC_FACTOR
    };
    let volumetric_kg = volume_m3 * factor;
    ChargeableWeight {
        volume_m3,
        volumetric_kg,
        chargeable_kg: weight_kg.max(volumetric_kg),
    }
}

/// 各运输方式的 (单价, 运输系数)
pub fn mode_rates(mode: TransportMode) -> (f64, f64) {
    match mode {
        TransportMode::Air => (4.50, 1.2),
        TransportMode::Courier => (6.80, 1.5),
        TransportMode::SeaFcl => (0.50, 0.8),
        TransportMode::SeaLcl => (0.90, 0.9),
    }
}

/// 报价输入：由调用方一次性组装
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteInputs {
    pub mode: TransportMode,
    pub origin_country: String,
    pub origin_port: String,
    pub dest_country: String,
    pub dest_port: String,
    pub weight_kg: f64,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub base_cost: f64,
    pub fuel_surcharge: f64,
    pub customs_fee: f64,
    pub handling_fee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInfo {
    pub origin_country: String,
    pub origin_port: String,
    pub dest_country: String,
    pub dest_port: String,
    pub distance_km: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub volume_m3: f64,
    pub chargeable_weight_kg: f64,
}

/// 报价结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub mode: TransportMode,
    pub total: f64,
    pub breakdown: CostBreakdown,
    pub route: RouteInfo,
    pub dimensions: Dimensions,
}

/// 确定性报价：相同输入必得相同结果
pub fn compute_quote(inputs: &QuoteInputs) -> QuoteResult {
    let weight = compute_chargeable_weight(
        inputs.weight_kg,
        inputs.length_cm,
        inputs.width_cm,
        inputs.height_cm,
        Some(inputs.mode),
    );
    let distance_km = compute_distance(&inputs.origin_country, &inputs.dest_country);
    let dist_multiplier = f64::from(distance_km) / DISTANCE_UNIT_KM;

    let (mode_rate, transport_factor) = mode_rates(inputs.mode);
    let mut base_cost =
        weight.chargeable_kg * mode_rate * transport_factor * (1.0 + dist_multiplier * 0.5);

    // LCL 按方计价兜底
    if inputs.mode == TransportMode::SeaLcl {
        let vol_cost = weight.volume_m3 * LCL_RATE_PER_CBM * (1.0 + dist_multiplier);
        base_cost = base_cost.max(vol_cost);
    }

    let fuel_surcharge = base_cost * FUEL_SURCHARGE_RATE;
    let customs_fee = if inputs.origin_country != inputs.dest_country {
        CUSTOMS_FEE
    } else {
        0.0
    };
    let handling_fee = HANDLING_FEE;
    let total = base_cost + fuel_surcharge + customs_fee + handling_fee;

    tracing::info!(
        mode = %inputs.mode,
        distance_km,
        chargeable_kg = weight.chargeable_kg,
        total,
        "Quote computed"
    );

    QuoteResult {
        mode: inputs.mode,
        total,
        breakdown: CostBreakdown {
            base_cost,
            fuel_surcharge,
            customs_fee,
            handling_fee,
        },
        route: RouteInfo {
            origin_country: inputs.origin_country.clone(),
            origin_port: inputs.origin_port.clone(),
            dest_country: inputs.dest_country.clone(),
            dest_port: inputs.dest_port.clone(),
            distance_km,
        },
        dimensions: Dimensions {
            length_cm: inputs.length_cm,
            width_cm: inputs.width_cm,
            height_cm: inputs.height_cm,
            volume_m3: weight.volume_m3,
            chargeable_weight_kg: weight.chargeable_kg,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn inputs(mode: TransportMode, origin: &str, dest: &str, weight: f64, dims: (f64, f64, f64)) -> QuoteInputs {
        QuoteInputs {
            mode,
            origin_country: origin.to_string(),
            origin_port: String::new(),
            dest_country: dest.to_string(),
            dest_port: String::new(),
            weight_kg: weight,
            length_cm: dims.0,
            width_cm: dims.1,
            height_cm: dims.2,
        }
    }

    #[test]
    fn test_chargeable_weight_air_volumetric_wins() {
        let w = compute_chargeable_weight(10.0, 50.0, 40.0, 30.0, Some(TransportMode::Air));
        assert!((w.volume_m3 - 0.06).abs() < EPS);
        assert!((w.volumetric_kg - 10.02).abs() < EPS);
        assert!((w.chargeable_kg - 10.02).abs() < EPS);
    }

    #[test]
    fn test_chargeable_weight_sea_factor() {
        let w = compute_chargeable_weight(10.0, 50.0, 40.0, 30.0, Some(TransportMode::SeaFcl));
        assert!((w.chargeable_kg - 60.0).abs() < EPS);

        // 未选方式按海运
        let w = compute_chargeable_weight(10.0, 50.0, 40.0, 30.0, None);
        assert!((w.volumetric_kg - 60.0).abs() < EPS);
    }

    #[test]
    fn test_chargeable_weight_actual_wins() {
        let w = compute_chargeable_weight(500.0, 10.0, 10.0, 10.0, Some(TransportMode::Courier));
        assert_eq!(w.chargeable_kg, 500.0);
    }

    #[test]
    fn test_air_quote_breakdown() {
        let q = compute_quote(&inputs(TransportMode::Air, "China", "USA", 100.0, (0.0, 0.0, 0.0)));
        // 100 * 4.5 * 1.2 * (1 + 0.5 * 11600/5000) = 1166.4
        assert!((q.breakdown.base_cost - 1166.4).abs() < 1e-6);
        assert!((q.breakdown.fuel_surcharge - 139.968).abs() < 1e-6);
        assert_eq!(q.breakdown.customs_fee, 120.0);
        assert_eq!(q.breakdown.handling_fee, 50.0);
        assert!((q.total - 1476.368).abs() < 1e-6);
        assert_eq!(q.route.distance_km, 11600);
    }

    #[test]
    fn test_domestic_has_no_customs_fee() {
        let q = compute_quote(&inputs(TransportMode::SeaFcl, "UK", "UK", 1000.0, (0.0, 0.0, 0.0)));
        assert_eq!(q.route.distance_km, 500);
        assert_eq!(q.breakdown.customs_fee, 0.0);
        // 1000 * 0.5 * 0.8 * 1.05 = 420
        assert!((q.breakdown.base_cost - 420.0).abs() < 1e-6);
        assert!((q.total - (420.0 * 1.12 + 50.0)).abs() < 1e-6);
    }

    #[test]
    fn test_lcl_base_is_max_of_weight_and_volume_cost() {
        let i = inputs(TransportMode::SeaLcl, "China", "India", 100.0, (100.0, 100.0, 100.0));
        let q = compute_quote(&i);
        let weight_cost: f64 = 1000.0 * 0.9 * 0.9 * (1.0 + 0.5 * 0.6);
        let vol_cost = 1.0 * 150.0 * (1.0 + 0.6);
        assert!((q.breakdown.base_cost - weight_cost.max(vol_cost)).abs() < 1e-6);
        assert!((q.dimensions.volume_m3 - 1.0).abs() < EPS);
    }

    #[test]
    fn test_unknown_countries_use_fallback_distance() {
        let q = compute_quote(&inputs(TransportMode::Courier, "Mars", "Venus", 10.0, (0.0, 0.0, 0.0)));
        assert_eq!(q.route.distance_km, 8000);
        assert_eq!(q.breakdown.customs_fee, CUSTOMS_FEE);
    }

    #[test]
    fn test_quote_is_deterministic() {
        let i = inputs(TransportMode::Air, "Germany", "India", 37.3, (45.0, 33.0, 21.5));
        let a = compute_quote(&i);
        let b = compute_quote(&i);
        assert_eq!(a.total.to_bits(), b.total.to_bits());
        assert_eq!(a, b);
    }
}
