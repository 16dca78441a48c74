//! 会话监管：问候标记与打字中断
//!
//! greeted 只在本进程（浏览器会话）内有效；interrupt 取消正在进行的打字延迟，reset 后换新 token。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tokio_util::sync::CancellationToken;

/// 会话级状态：问候标记与中断令牌
#[derive(Debug)]
pub struct SessionSupervisor {
    greeted: AtomicBool,
    interrupt_token: Mutex<CancellationToken>,
}

impl SessionSupervisor {
    pub fn new() -> Self {
        Self {
            greeted: AtomicBool::new(false),
            interrupt_token: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn has_greeted(&self) -> bool {
        self.greeted.load(Ordering::SeqCst)
    }

    /// 标记已问候；返回此前是否未问候过
    pub fn mark_greeted(&self) -> bool {
        !self.greeted.swap(true, Ordering::SeqCst)
    }

    /// 当前中断令牌（打字延迟期间监听）
    pub fn interrupt_token(&self) -> CancellationToken {
        match self.interrupt_token.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 取消当前正在显示的回复
    pub fn interrupt(&self) {
        self.interrupt_token().cancel();
    }

    /// 换发新令牌，后续回复不再受之前的中断影响
    pub fn renew(&self) {
        let fresh = CancellationToken::new();
        match self.interrupt_token.lock() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }
    }
}

impl Default for SessionSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeted_once() {
        let s = SessionSupervisor::new();
        assert!(!s.has_greeted());
        assert!(s.mark_greeted());
        assert!(!s.mark_greeted());
        assert!(s.has_greeted());
    }

    #[test]
    fn test_interrupt_and_renew() {
        let s = SessionSupervisor::new();
        let token = s.interrupt_token();
        s.interrupt();
        assert!(token.is_cancelled());
        assert!(s.interrupt_token().is_cancelled());
        s.renew();
        assert!(!s.interrupt_token().is_cancelled());
    }
}
