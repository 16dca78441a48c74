//! 智能客服：访客信息采集 + 关键词意图应答

pub mod engine;
pub mod intent;
pub mod knowledge;
pub mod picker;
pub mod reply;
pub mod transcript;

pub use engine::{ConversationEngine, ConversationState, IntakeStep, Profile};
pub use intent::{identify_intent, Intent};
pub use knowledge::KnowledgeBase;
pub use picker::{RandomPicker, ReplyPicker, SequencePicker};
pub use reply::{typing_delay_for, Reply};
pub use transcript::{Message, Role, Transcript};
