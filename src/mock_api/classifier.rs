//! 模擬分類器
//!
//! 隨機來源與延遲皆可替換，測試時改用固定標籤與零延遲

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// 從標籤集合中挑選一個標籤
pub trait LabelPicker: Send + Sync {
    fn pick(&self, labels: &[&'static str; 2]) -> &'static str;
}

/// 均勻隨機挑選
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPicker;

impl LabelPicker for RandomPicker {
    fn pick(&self, labels: &[&'static str; 2]) -> &'static str {
        let mut rng = rand::thread_rng();
        labels[rng.gen_range(0..labels.len())]
    }
}

/// 固定回傳指定索引的標籤
#[derive(Clone, Copy, Debug)]
pub struct FixedPicker(pub usize);

impl LabelPicker for FixedPicker {
    fn pick(&self, labels: &[&'static str; 2]) -> &'static str {
        labels[self.0 % labels.len()]
    }
}

/// 模擬推論延遲
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// 以 tokio timer 暫停目前的請求
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// 不延遲
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_api::types::LabelSet;
    use std::time::Instant;

    #[test]
    fn test_random_picker_distribution() {
        let labels = LabelSet::TitleCase.labels();
        let human = (0..1000)
            .filter(|_| RandomPicker.pick(labels) == "Human")
            .count();
        // 1000 次均勻抽樣，落在 [400, 600] 外的機率可忽略
        assert!((400..=600).contains(&human), "human count {}", human);
    }

    #[test]
    fn test_random_picker_stays_in_set() {
        let labels = LabelSet::UpperCase.labels();
        for _ in 0..100 {
            assert!(LabelSet::UpperCase.contains(RandomPicker.pick(labels)));
        }
    }

    #[test]
    fn test_fixed_picker() {
        let labels = LabelSet::UpperCase.labels();
        assert_eq!(FixedPicker(0).pick(labels), "HUMAN");
        assert_eq!(FixedPicker(1).pick(labels), "AI");
        assert_eq!(FixedPicker(3).pick(labels), "AI");
    }

    #[tokio::test]
    async fn test_tokio_delay_waits() {
        let start = Instant::now();
        TokioDelay.wait(Duration::from_millis(50)).await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_no_delay_returns_promptly() {
        let start = Instant::now();
        NoDelay.wait(Duration::from_secs(5)).await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
