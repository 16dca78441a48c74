//! 回复挑选器：从候选列表中选一条
//!
//! 生产环境均匀随机；测试可注入固定序列，或给 RandomPicker 设定种子以复现。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 回复挑选 trait：返回 [0, len) 内的下标，len 保证大于 0
pub trait ReplyPicker: Send {
    fn pick(&mut self, len: usize) -> usize;
}

/// 均匀随机挑选
#[derive(Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// 按给定序列循环挑选（越界时取模）
#[derive(Debug, Clone)]
pub struct SequencePicker {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }
}

impl ReplyPicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        idx % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_in_range() {
        let mut picker = RandomPicker::new();
        for _ in 0..200 {
            assert!(picker.pick(3) < 3);
        }
    }

    #[test]
    fn test_seeded_picker_reproducible() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);
        let xs: Vec<_> = (0..20).map(|_| a.pick(5)).collect();
        let ys: Vec<_> = (0..20).map(|_| b.pick(5)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_sequence_picker_cycles() {
        let mut picker = SequencePicker::new(vec![0, 1, 5]);
        assert_eq!(picker.pick(2), 0);
        assert_eq!(picker.pick(2), 1);
        assert_eq!(picker.pick(2), 1); // 5 % 2
        assert_eq!(picker.pick(2), 0);
    }
}
