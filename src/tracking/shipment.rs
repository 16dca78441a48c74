//! 货运追踪数据类型与内存 Mock 数据集

use serde::Serialize;

/// 时间线节点状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventStatus {
    Booked,
    Pickup,
    Transit,
    Customs,
    Delivery,
    Delivered,
    Exception,
}

/// 运单时间线上的一个节点；date 形如 "YYYY-MM-DD HH:MM"、"Est. ..." 或 "-"
#[derive(Debug, Clone, Serialize)]
pub struct TrackingEvent {
    pub status: EventStatus,
    pub title: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FreightMode {
    Air,
    Sea,
    Road,
}

impl FreightMode {
    pub fn label(self) -> &'static str {
        match self {
            FreightMode::Air => "Air Freight",
            FreightMode::Sea => "Sea Freight",
            FreightMode::Road => "Road Freight",
        }
    }
}

/// 运单
#[derive(Debug, Clone, Serialize)]
pub struct Shipment {
    pub id: &'static str,
    pub mode: FreightMode,
    pub origin: &'static str,
    pub destination: &'static str,
    pub eta: &'static str,
    pub weight: &'static str,
    pub pieces: &'static str,
    pub timeline: &'static [TrackingEvent],
    /// 签收凭证图片
    pub pod_url: Option<&'static str>,
    /// 异常提示
    pub exception_msg: Option<&'static str>,
}

const fn ev(
    status: EventStatus,
    title: &'static str,
    location: &'static str,
    date: &'static str,
    completed: bool,
) -> TrackingEvent {
    TrackingEvent {
        status,
        title,
        location,
        date,
        completed,
    }
}

use EventStatus::*;

pub const MOCK_SHIPMENTS: &[Shipment] = &[
    Shipment {
        id: "TRK9001",
        mode: FreightMode::Air,
        origin: "Shanghai (PVG)",
        destination: "Los Angeles (LAX)",
        eta: "2026-10-24",
        weight: "450 kg",
        pieces: "5 Euro Pallets",
        timeline: &[
            ev(Booked, "Pickup Scheduled", "Shanghai, CN", "2026-10-20 09:30", true),
            ev(Pickup, "Picked Up", "Foxconn Factory, CN", "2026-10-20 14:00", true),
            ev(Transit, "Departed Origin", "PVG Airport", "2026-10-21 06:45", true),
            ev(Transit, "In Transit", "Pacific Ocean (Air)", "2026-10-21 18:00", true),
            ev(Customs, "Customs Clearance", "LAX Gateway", "Est. 2026-10-22", false),
            ev(Delivery, "Arrived at Destination", "Los Angeles, CA", "-", false),
            ev(Delivery, "Out for Delivery", "Los Angeles, CA", "-", false),
            ev(Delivered, "Delivered", "Anaheim, CA", "-", false),
        ],
        pod_url: None,
        exception_msg: None,
    },
    Shipment {
        id: "TRK9002",
        mode: FreightMode::Sea,
        origin: "Hamburg (HAM)",
        destination: "Dubai (Jebel Ali)",
        eta: "2026-09-15",
        weight: "12,400 kg",
        pieces: "1x 40HC Container",
        timeline: &[
            ev(Booked, "Pickup Scheduled", "Hamburg, DE", "2026-08-20", true),
            ev(Pickup, "Picked Up", "Hamburg WH", "2026-08-21", true),
            ev(Transit, "Departed Origin", "Port of Hamburg", "2026-08-25", true),
            ev(Transit, "Arrived at Destination", "Jebel Ali Port", "2026-09-14", true),
            ev(Delivered, "Delivered", "Jebel Ali Free Zone", "2026-09-15 10:30", true),
        ],
        pod_url: Some("https://via.placeholder.com/300x150?text=POD+Signature"),
        exception_msg: None,
    },
    Shipment {
        id: "TRK9003",
        mode: FreightMode::Air,
        origin: "New York (JFK)",
        destination: "London (LHR)",
        eta: "Delayed",
        weight: "120 kg",
        pieces: "2 Boxes",
        timeline: &[
            ev(Booked, "Pickup Scheduled", "NY, USA", "2026-10-22", true),
            ev(Pickup, "Picked Up", "Manhattan, NY", "2026-10-22", true),
            ev(Exception, "Customs Hold", "LHR Airport", "2026-10-23", true),
        ],
        pod_url: None,
        exception_msg: Some("Clearance Delay: Missing Commercial Invoice. Action Required."),
    },
];
