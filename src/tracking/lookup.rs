//! 运单查询与展示视图
//!
//! search_track：ID 去空格并转大写后查 Mock 数据集；查不到返回 TrackingError::NotFound。

use serde::Serialize;
use thiserror::Error;

use crate::tracking::shipment::{EventStatus, Shipment, TrackingEvent, MOCK_SHIPMENTS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackingError {
    #[error("Tracking ID {id} not found. Please check your number and try again.")]
    NotFound { id: String },
}

/// 运单状态徽标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusBadge {
    InTransit,
    Delivered,
    Exception,
}

impl StatusBadge {
    pub fn label(self) -> &'static str {
        match self {
            StatusBadge::InTransit => "In Transit",
            StatusBadge::Delivered => "Delivered",
            StatusBadge::Exception => "Exception",
        }
    }
}

/// 时间线节点图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Marker {
    Booked,
    Transit,
    Finish,
    Warning,
    Pin,
}

impl Marker {
    fn for_status(status: EventStatus) -> Self {
        match status {
            EventStatus::Delivered => Marker::Finish,
            EventStatus::Booked => Marker::Booked,
            EventStatus::Transit => Marker::Transit,
            EventStatus::Exception => Marker::Warning,
            _ => Marker::Pin,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Marker::Booked => "📦",
            Marker::Transit => "✈️",
            Marker::Finish => "🏁",
            Marker::Warning => "⚠️",
            Marker::Pin => "📍",
        }
    }
}

/// 时间线展示条目
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub completed: bool,
    /// 最后一个节点且已完成
    pub active: bool,
    pub marker: Marker,
}

/// 查询结果视图
#[derive(Debug, Clone, Serialize)]
pub struct TrackingView {
    pub shipment: &'static Shipment,
    pub badge: StatusBadge,
    /// 仅异常运单显示
    pub alert: Option<&'static str>,
    /// 仅已签收且有凭证时显示
    pub proof_of_delivery: Option<&'static str>,
    pub timeline: Vec<TimelineEntry>,
}

/// 按运单号查询
pub fn search_track(id: &str) -> Result<TrackingView, TrackingError> {
    let raw_id = id.trim().to_uppercase();
    match MOCK_SHIPMENTS.iter().find(|s| s.id == raw_id) {
        Some(shipment) => Ok(TrackingView::from_shipment(shipment)),
        None => {
            tracing::warn!(id = %raw_id, "Tracking ID not found");
            Err(TrackingError::NotFound { id: raw_id })
        }
    }
}

impl TrackingView {
    pub fn from_shipment(shipment: &'static Shipment) -> Self {
        let delivered = shipment
            .timeline
            .last()
            .is_some_and(|e| e.status == EventStatus::Delivered);
        let badge = if shipment.exception_msg.is_some() {
            StatusBadge::Exception
        } else if delivered {
            StatusBadge::Delivered
        } else {
            StatusBadge::InTransit
        };

        let last = shipment.timeline.len().saturating_sub(1);
        let timeline = shipment
            .timeline
            .iter()
            .enumerate()
            .map(|(i, e)| entry(e, i == last))
            .collect();

        Self {
            shipment,
            badge,
            alert: shipment.exception_msg,
            proof_of_delivery: if delivered { shipment.pod_url } else { None },
            timeline,
        }
    }
}

fn entry(event: &TrackingEvent, is_last: bool) -> TimelineEntry {
    let (date, time) = event.date.split_once(' ').unwrap_or((event.date, ""));
    TimelineEntry {
        title: event.title,
        location: event.location,
        date,
        time,
        completed: event.completed,
        active: is_last && event.completed,
        marker: Marker::for_status(event.status),
    }
}
