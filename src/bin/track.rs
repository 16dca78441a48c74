//! GlobalX 货运追踪 - 按运单号查询
//!
//! 用法：globalx-track <TRACKING_ID>

use globalx::{
    core::{GlobalxError, NoticeEngine},
    observability,
    tracking::{search_track, StatusBadge},
};

fn main() -> anyhow::Result<()> {
    observability::init("info");

    let Some(id) = std::env::args().nth(1) else {
        anyhow::bail!("Usage: globalx-track <TRACKING_ID>");
    };

    let view = match search_track(&id) {
        Ok(view) => view,
        Err(e) => {
            let notice = NoticeEngine::new().notice(&GlobalxError::from(e));
            println!("❌ {}", notice.message);
            return Ok(());
        }
    };

    let s = view.shipment;
    println!("📦 {}  [{}]", s.id, view.badge.label());
    println!("   {} │ {} → {}", s.mode.label(), s.origin, s.destination);
    println!("   ETA {} │ {} │ {} pcs", s.eta, s.weight, s.pieces);
    if let Some(alert) = view.alert {
        println!("⚠️  {}", alert);
    }
    println!();
    for entry in &view.timeline {
        let marker = if entry.active {
            format!("{}*", entry.marker.symbol())
        } else {
            entry.marker.symbol().to_string()
        };
        println!(
            "  {:<3} {:<10} {:<6} {}  ({})",
            marker, entry.date, entry.time, entry.title, entry.location
        );
    }
    if view.badge == StatusBadge::Delivered {
        if let Some(pod) = view.proof_of_delivery {
            println!();
            println!("✅ Proof of delivery: {}", pod);
        }
    }

    Ok(())
}
