//! 静态知识库：意图 -> 候选回复列表（进程内不可变）

use crate::concierge::Intent;

/// 客服知识库
#[derive(Debug, Clone, Copy, Default)]
pub struct KnowledgeBase;

impl KnowledgeBase {
    pub fn new() -> Self {
        Self
    }

    /// 某意图的候选回复（顺序固定，至少一条）
    pub fn replies(&self, intent: Intent) -> &'static [&'static str] {
        match intent {
            Intent::Tracking => &[
                "To track your shipment, please use the 'Track' button below or enter your HAWB/Container ID.",
                "You can find your 12-digit tracking number on your booking confirmation.",
            ],
            Intent::Quote => &[
                "I can help you with a quotation. Would you like to start a new Air or Ocean freight quote?",
                "Please click 'Get Quotation' to access our instant rate calculator.",
            ],
            Intent::Shipping => &[
                "We offer Air Priority, Ocean FCL/LCL, and Global Courier services.",
                "Transit times vary: Air (1-3 days), Ocean (15-45 days) depending on the route.",
            ],
            Intent::Customs => &[
                "Our Customs AI engine handles HTS classification automatically.",
                "For specific documentation requirements (Invoice, Packing List, COO), please check our 'Resources' tab.",
            ],
            Intent::Documents => &[
                "Standard export docs required: Commercial Invoice, Packing List, and Bill of Lading.",
                "Do you need a template? I can guide you to our document center.",
            ],
            Intent::Contact => &[
                "You can reach our 24/7 support team at concierge@globalx.com or +1-800-GLOBALX.",
                "Our headquarters is located at One World Trade Center, New York.",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_intent_has_replies() {
        let kb = KnowledgeBase::new();
        for intent in Intent::PRIORITY {
            assert!(!kb.replies(intent).is_empty(), "{:?} has no replies", intent);
        }
    }
}
