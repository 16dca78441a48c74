//! 国家 -> 机场 / 海港 站点表

use crate::quotation::TransportMode;

/// 单个国家的站点（顺序即下拉框顺序）
#[derive(Debug, Clone, Copy)]
pub struct CountrySites {
    pub country: &'static str,
    pub airports: &'static [&'static str],
    pub seaports: &'static [&'static str],
}

/// 静态站点表
pub const LOCATIONS: &[CountrySites] = &[
    CountrySites {
        country: "China",
        airports: &["Shanghai (PVG)", "Beijing (PEK)", "Guangzhou (CAN)"],
        seaports: &["Shanghai", "Shenzhen", "Ningbo"],
    },
    CountrySites {
        country: "USA",
        airports: &["New York (JFK)", "Los Angeles (LAX)", "Chicago (ORD)"],
        seaports: &["Los Angeles", "Long Beach", "New York"],
    },
    CountrySites {
        country: "Germany",
        airports: &["Frankfurt (FRA)", "Munich (MUC)"],
        seaports: &["Hamburg", "Bremerhaven"],
    },
    CountrySites {
        country: "India",
        airports: &["Mumbai (BOM)", "Delhi (DEL)"],
        seaports: &["Nhava Sheva", "Mundra"],
    },
    CountrySites {
        country: "UK",
        airports: &["London (LHR)", "Manchester (MAN)"],
        seaports: &["Felixstowe", "Southampton"],
    },
    CountrySites {
        country: "UAE",
        airports: &["Dubai (DXB)"],
        seaports: &["Jebel Ali"],
    },
];

/// 可选国家列表
pub fn countries() -> impl Iterator<Item = &'static str> {
    LOCATIONS.iter().map(|c| c.country)
}

/// 按运输方式返回某国站点：air/courier 为机场，其余（含未选）为海港；未知国家返回空
pub fn compute_ports(country: &str, mode: Option<TransportMode>) -> &'static [&'static str] {
    let Some(sites) = LOCATIONS.iter().find(|c| c.country == country) else {
        return &[];
    };
    if mode.is_some_and(TransportMode::is_air) {
        sites.airports
    } else {
        sites.seaports
    }
}
