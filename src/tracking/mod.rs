//! 货运追踪：按运单号查询内存 Mock 数据集

pub mod lookup;
pub mod shipment;

pub use lookup::{search_track, StatusBadge, TimelineEntry, TrackingError, TrackingView};
pub use shipment::{EventStatus, FreightMode, Shipment, TrackingEvent, MOCK_SHIPMENTS};
