//! 报价汇总：把 QuoteResult 格式化为展示文本（金额两位小数、千分位）

use serde::Serialize;

use crate::quotation::pricing::QuoteResult;

/// 汇总页各栏的展示文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub mode: String,
    pub total: String,
    pub origin: String,
    pub destination: String,
    pub distance: String,
    pub weight: String,
    pub volume: String,
    pub dimensions: String,
    pub base_cost: String,
    pub fuel_cost: String,
    /// 清关费与操作费合并显示
    pub customs_and_handling: String,
}

impl QuoteSummary {
    pub fn from_result(q: &QuoteResult) -> Self {
        Self {
            mode: q.mode.label(),
            total: format_money(q.total),
            origin: format!("{}, {}", q.route.origin_port, q.route.origin_country),
            destination: format!("{}, {}", q.route.dest_port, q.route.dest_country),
            distance: format!("{} km", group_thousands(&q.route.distance_km.to_string())),
            weight: format!("{:.2} kg", q.dimensions.chargeable_weight_kg),
            volume: format!("{:.3} m³", q.dimensions.volume_m3),
            dimensions: format!(
                "{}x{}x{} cm",
                q.dimensions.length_cm, q.dimensions.width_cm, q.dimensions.height_cm
            ),
            base_cost: format!("${:.2}", q.breakdown.base_cost),
            fuel_cost: format!("${:.2}", q.breakdown.fuel_surcharge),
            customs_and_handling: format!(
                "${:.2}",
                q.breakdown.customs_fee + q.breakdown.handling_fee
            ),
        }
    }

    /// 纯文本多行版本（导出 / 终端打印）
    pub fn to_lines(&self) -> Vec<String> {
        vec![
            format!("Service:            {}", self.mode),
            format!("Origin:             {}", self.origin),
            format!("Destination:        {}", self.destination),
            format!("Distance:           {}", self.distance),
            format!("Chargeable weight:  {}", self.weight),
            format!("Volume:             {}", self.volume),
            format!("Dimensions:         {}", self.dimensions),
            format!("Base freight:       {}", self.base_cost),
            format!("Fuel surcharge:     {}", self.fuel_cost),
            format!("Customs & handling: {}", self.customs_and_handling),
            format!("Estimated total:    {}", self.total),
        ]
    }
}

/// "$1,234.56"
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{frac}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotation::pricing::{compute_quote, QuoteInputs};
    use crate::quotation::TransportMode;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(50.0), "$50.00");
        assert_eq!(format_money(1476.368), "$1,476.37");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-12.5), "-$12.50");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("500"), "500");
        assert_eq!(group_thousands("11600"), "11,600");
        assert_eq!(group_thousands("1000000"), "1,000,000");
    }

    #[test]
    fn test_summary_from_result() {
        let q = compute_quote(&QuoteInputs {
            mode: TransportMode::SeaFcl,
            origin_country: "China".into(),
            origin_port: "Shanghai".into(),
            dest_country: "USA".into(),
            dest_port: "Long Beach".into(),
            weight_kg: 10.0,
            length_cm: 50.0,
            width_cm: 40.0,
            height_cm: 30.0,
        });
        let s = QuoteSummary::from_result(&q);
        assert_eq!(s.mode, "SEA FCL");
        assert_eq!(s.origin, "Shanghai, China");
        assert_eq!(s.destination, "Long Beach, USA");
        assert_eq!(s.distance, "11,600 km");
        assert_eq!(s.dimensions, "50x40x30 cm");
        assert_eq!(s.weight, "60.00 kg");
        assert_eq!(s.volume, "0.060 m³");
        assert_eq!(s.customs_and_handling, "$170.00");
        assert!(s.total.starts_with('$'));
        assert_eq!(s.to_lines().len(), 11);
    }
}
