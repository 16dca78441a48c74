//! 意图识别模块
//!
//! 关键词子串匹配（不区分大小写），按固定优先级检查，命中第一个即返回。

use serde::{Deserialize, Serialize};

/// 识别出的意图类型（声明顺序即匹配优先级）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// 货运追踪
    Tracking,
    /// 报价 / 价格
    Quote,
    /// 运输服务介绍
    Shipping,
    /// 清关 / 关税
    Customs,
    /// 单证
    Documents,
    /// 联系人工客服
    Contact,
}

impl Intent {
    /// 匹配优先级：输入同时命中多组关键词时取最靠前的一组
    pub const PRIORITY: [Intent; 6] = [
        Intent::Tracking,
        Intent::Quote,
        Intent::Shipping,
        Intent::Customs,
        Intent::Documents,
        Intent::Contact,
    ];

    /// 该意图的关键词（均为小写）
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Intent::Tracking => &["track", "where", "status", "location", "shipment"],
            Intent::Quote => &["quote", "price", "cost", "rate", "how much", "cheap"],
            Intent::Shipping => &["service", "air", "sea", "ocean", "courier", "freight"],
            Intent::Customs => &["custom", "duty", "tax", "clearance", "tariff"],
            Intent::Documents => &["doc", "invoice", "packing", "bill", "form"],
            Intent::Contact => &["help", "contact", "support", "human", "agent", "manager"],
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Intent::Tracking => "tracking",
            Intent::Quote => "quote",
            Intent::Shipping => "shipping",
            Intent::Customs => "customs",
            Intent::Documents => "documents",
            Intent::Contact => "contact",
        }
    }

    /// 命中该意图后展示的快捷回复
    pub fn follow_up_chips(self) -> &'static [&'static str] {
        match self {
            Intent::Quote => &["Go to Quote Page", "Services"],
            Intent::Tracking => &["Track Now", "Contact Support"],
            _ => &[],
        }
    }
}

/// 识别用户意图；无命中返回 None
pub fn identify_intent(input: &str) -> Option<Intent> {
    let input_lower = input.to_lowercase();
    Intent::PRIORITY
        .into_iter()
        .find(|intent| matches_any(&input_lower, intent.keywords()))
}

fn matches_any(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| input.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_resolves_to_its_set() {
        // 每组挑一个只属于该组的关键词
        let cases = [
            ("track my box", Intent::Tracking),
            ("how much is it", Intent::Quote),
            ("ocean", Intent::Shipping),
            ("tariff", Intent::Customs),
            ("invoice", Intent::Documents),
            ("manager", Intent::Contact),
        ];
        for (input, expected) in cases {
            assert_eq!(identify_intent(input), Some(expected), "input: {input}");
        }
    }

    #[test]
    fn test_full_keyword_table() {
        let table: [(Intent, &[&str]); 6] = [
            (Intent::Tracking, &["track", "where", "status", "location", "shipment"]),
            (Intent::Quote, &["quote", "price", "cost", "rate", "how much", "cheap"]),
            (Intent::Shipping, &["service", "air", "sea", "ocean", "courier", "freight"]),
            (Intent::Customs, &["custom", "duty", "tax", "clearance", "tariff"]),
            (Intent::Documents, &["doc", "invoice", "packing", "bill", "form"]),
            (Intent::Contact, &["help", "contact", "support", "human", "agent", "manager"]),
        ];
        let mut total = 0;
        for (expected, keywords) in table {
            for kw in keywords {
                assert_eq!(identify_intent(kw), Some(expected), "keyword: {kw}");
                assert_eq!(
                    identify_intent(&kw.to_uppercase()),
                    Some(expected),
                    "keyword: {kw}"
                );
                total += 1;
            }
            assert_eq!(expected.keywords().len(), keywords.len(), "{:?}", expected);
        }
        assert_eq!(total, 33);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(identify_intent("WHERE IS IT"), Some(Intent::Tracking));
        assert_eq!(identify_intent("Customs Clearance"), Some(Intent::Customs));
    }

    #[test]
    fn test_priority_order_wins() {
        // quote + customs -> quote
        assert_eq!(identify_intent("price of duty"), Some(Intent::Quote));
        // tracking + contact -> tracking
        assert_eq!(identify_intent("help me track"), Some(Intent::Tracking));
        // shipping + documents -> shipping
        assert_eq!(identify_intent("ocean bill"), Some(Intent::Shipping));
        // documents + contact -> documents
        assert_eq!(identify_intent("invoice support"), Some(Intent::Documents));
    }

    #[test]
    fn test_substring_quirks() {
        // "rate" 藏在 "corporate" 里
        assert_eq!(identify_intent("corporate"), Some(Intent::Quote));
        // "air" 藏在 "chair" 里
        assert_eq!(identify_intent("chair"), Some(Intent::Shipping));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(identify_intent("hello there"), None);
        assert_eq!(identify_intent(""), None);
    }

    #[test]
    fn test_tags() {
        let tags: Vec<_> = Intent::PRIORITY.iter().map(|i| i.tag()).collect();
        assert_eq!(
            tags,
            ["tracking", "quote", "shipping", "customs", "documents", "contact"]
        );
    }
}
