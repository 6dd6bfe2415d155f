use serde::{Deserialize, Serialize};
use crate::error::LotteryError;

/// Whether landing on a prize is a win or the "try again" slot.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrizeKind {
    #[default]
    Reward,
    Consolation,
}

/// One sector of the wheel. Order in the prize list defines angular position.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub id: u32,
    pub name: String,
    pub value: String,
    pub weight: f64,
    #[serde(default)]
    pub kind: PrizeKind,
}

impl Prize {
    pub fn new(id: u32, name: &str, value: &str, weight: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            value: value.to_string(),
            weight,
            kind: PrizeKind::Reward,
        }
    }

    pub fn consolation(mut self) -> Self {
        self.kind = PrizeKind::Consolation;
        self
    }

    pub fn is_reward(&self) -> bool {
        self.kind == PrizeKind::Reward
    }

    pub fn announcement(&self) -> String {
        match self.kind {
            PrizeKind::Reward => format!("Congratulations! You won {}: {}!", self.name, self.value),
            PrizeKind::Consolation => format!("So close! {}, come back and try again!", self.value),
        }
    }
}

pub fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new(1, "First Prize", "iPhone 15", 0.5),
        Prize::new(2, "Second Prize", "AirPods Pro", 2.0),
        Prize::new(3, "Third Prize", "¥100 Voucher", 5.0),
        Prize::new(4, "Fourth Prize", "¥50 Voucher", 10.0),
        Prize::new(5, "Fifth Prize", "¥20 Voucher", 20.0),
        Prize::new(6, "Thanks for Playing", "Better luck next time", 62.5).consolation(),
    ]
}

pub fn weights(prizes: &[Prize]) -> Vec<f64> {
    prizes.iter().map(|p| p.weight).collect()
}

/// Percentage of the total weight held by each prize, in prize order.
pub fn shares(prizes: &[Prize]) -> Vec<f64> {
    let total: f64 = prizes.iter().map(|p| p.weight).sum();
    if total <= 0.0 {
        return vec![0.0; prizes.len()];
    }
    prizes.iter().map(|p| p.weight / total * 100.0).collect()
}

/// Checks a prize table before it is put on a wheel.
pub fn validate_prizes(prizes: &[Prize]) -> Result<(), LotteryError> {
    if prizes.is_empty() {
        return Err(LotteryError::invalid("prize list is empty"));
    }

    let mut seen = std::collections::HashSet::new();
    for prize in prizes {
        if !seen.insert(prize.id) {
            return Err(LotteryError::invalid(format!("duplicate prize id {}", prize.id)));
        }
        if !prize.weight.is_finite() || prize.weight < 0.0 {
            return Err(LotteryError::invalid(format!(
                "prize {} has invalid weight {}",
                prize.id, prize.weight
            )));
        }
    }

    if prizes.iter().all(|p| p.weight == 0.0) {
        return Err(LotteryError::invalid("all prize weights are zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prizes_are_valid() {
        let prizes = default_prizes();
        assert!(validate_prizes(&prizes).is_ok());
        assert_eq!(prizes.len(), 6);
        assert!(!prizes[5].is_reward());
    }

    #[test]
    fn test_default_shares_sum_to_hundred() {
        let total: f64 = shares(&default_prizes()).iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let prizes = vec![Prize::new(1, "A", "a", 1.0), Prize::new(1, "B", "b", 1.0)];
        assert!(matches!(validate_prizes(&prizes), Err(LotteryError::InvalidInput(_))));
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let prizes = vec![Prize::new(1, "A", "a", 0.0), Prize::new(2, "B", "b", 0.0)];
        assert!(matches!(validate_prizes(&prizes), Err(LotteryError::InvalidInput(_))));
    }

    #[test]
    fn test_kind_defaults_to_reward_when_missing() {
        let prize: Prize = serde_json::from_str(r#"{"id":7,"name":"Bonus","value":"Sticker","weight":3}"#).unwrap();
        assert!(prize.is_reward());
        assert_eq!(prize.announcement(), "Congratulations! You won Bonus: Sticker!");
    }
}
