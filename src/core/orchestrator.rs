//! 客服编排器：主控循环
//!
//! 负责：加载配置、创建对话引擎与会话监管、建立 cmd/state 两通道，
//! 并在后台任务中消费 UI 命令（Toggle/Submit/Reset/Quit），按打字延迟逐条投递回复并更新 UI 状态。

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::concierge::{ConversationEngine, IntakeStep, Message, RandomPicker, Reply, Transcript};
use crate::config::{load_config_or_default, AppConfig};
use crate::core::{ConciergePhase, SessionSupervisor, UiState};

/// 从 UI 发往编排器的命令
#[derive(Debug, Clone)]
pub enum Command {
    /// 展开/收起客服窗口
    Toggle,
    /// 提交访客输入（快捷回复点选也走这里）
    Submit(String),
    /// 重置对话，回到初始状态
    Reset,
    /// 退出应用
    Quit,
}

/// 编排器句柄：命令发送端、状态接收端、会话监管
pub struct ConciergeHandle {
    pub cmd_tx: mpsc::UnboundedSender<Command>,
    pub state_rx: watch::Receiver<UiState>,
    pub supervisor: Arc<SessionSupervisor>,
}

/// 从配置文件创建客服运行时
pub async fn create_concierge(config_path: Option<PathBuf>) -> anyhow::Result<ConciergeHandle> {
    let cfg = load_config_or_default(config_path);
    Ok(spawn_concierge(&cfg))
}

/// 用给定配置创建客服运行时；需在 tokio 运行时内调用
pub fn spawn_concierge(cfg: &AppConfig) -> ConciergeHandle {
    let picker = match cfg.concierge.reply_seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::new(),
    };
    let runtime = ConciergeRuntime {
        engine: ConversationEngine::with_picker(Box::new(picker)),
        transcript: Transcript::new(cfg.concierge.max_history_turns),
        suggestions: Vec::new(),
        typing_delay: cfg.concierge.typing_delay,
    };
    spawn_runtime(runtime)
}

/// 单会话运行时状态（只在后台任务内访问）
struct ConciergeRuntime {
    engine: ConversationEngine,
    transcript: Transcript,
    suggestions: Vec<String>,
    typing_delay: bool,
}

impl ConciergeRuntime {
    fn project(&self, phase: ConciergePhase) -> UiState {
        let phase = if self.engine.state().open {
            phase
        } else {
            ConciergePhase::Closed
        };
        UiState {
            phase,
            intake: self.engine.step(),
            history: self.transcript.messages().to_vec(),
            suggestions: self.suggestions.clone(),
            input_locked: phase == ConciergePhase::Typing,
        }
    }

    /// 逐条投递回复：先显示「正在输入」，延迟结束后写入记录；被中断则丢弃剩余回复
    async fn deliver(
        &mut self,
        replies: Vec<Reply>,
        state_tx: &watch::Sender<UiState>,
        supervisor: &SessionSupervisor,
    ) {
        let token = supervisor.interrupt_token();
        for reply in replies {
            if self.typing_delay {
                let _ = state_tx.send(self.project(ConciergePhase::Typing));
                tokio::select! {
                    _ = tokio::time::sleep(reply.typing_delay()) => {}
                    _ = token.cancelled() => {
                        tracing::debug!("Reply delivery interrupted");
                        return;
                    }
                }
            }
            self.transcript.push(Message::concierge(reply.text));
            if !reply.suggested_replies.is_empty() {
                self.suggestions = reply.suggested_replies;
            }
        }
        let _ = state_tx.send(self.project(ConciergePhase::Ready));
    }
}

fn spawn_runtime(mut runtime: ConciergeRuntime) -> ConciergeHandle {
    // 两通道：UI -> Core 命令；Core -> UI 状态快照
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<Command>();
    let (state_tx, state_rx) = watch::channel(UiState::default());
    let supervisor = Arc::new(SessionSupervisor::new());
    let session = Arc::clone(&supervisor);

    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                Command::Toggle => {
                    let replies = runtime.engine.toggle();
                    if runtime.engine.state().open && session.mark_greeted() {
                        tracing::info!("Visitor greeted");
                    }
                    let _ = state_tx.send(runtime.project(ConciergePhase::Ready));
                    runtime.deliver(replies, &state_tx, &session).await;
                }
                Command::Submit(input) => {
                    let input = input.trim();
                    if input.is_empty() {
                        continue;
                    }
                    // Idle 时引擎忽略输入，不留下无人应答的消息
                    if runtime.engine.step() != IntakeStep::Idle {
                        runtime.transcript.push(Message::visitor(input));
                    }
                    let replies = runtime.engine.submit(input);
                    runtime.deliver(replies, &state_tx, &session).await;
                }
                Command::Reset => {
                    runtime.engine.reset();
                    runtime.transcript.clear();
                    runtime.suggestions.clear();
                    session.renew();
                    tracing::info!("Conversation reset");
                    let replies = if runtime.engine.state().open {
                        runtime.engine.start()
                    } else {
                        Vec::new()
                    };
                    runtime.deliver(replies, &state_tx, &session).await;
                }
                Command::Quit => break,
            }
        }
    });

    ConciergeHandle {
        cmd_tx,
        state_rx,
        supervisor,
    }
}
