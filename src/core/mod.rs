//! 核心层：错误与用户提示、状态投影、会话监管、客服主控循环

pub mod error;
pub mod notice;
pub mod orchestrator;
pub mod session;
pub mod state;

pub use error::{GlobalxError, UserNotice};
pub use notice::NoticeEngine;
pub use orchestrator::{create_concierge, spawn_concierge, Command, ConciergeHandle};
pub use session::SessionSupervisor;
pub use state::{ConciergePhase, UiState};
