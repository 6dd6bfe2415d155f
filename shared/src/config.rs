use serde::{Deserialize, Serialize};
use crate::animation::{SpringConfig, SpringEasing};
use crate::constants::{DEFAULT_EXTRA_SPINS, DEFAULT_SPIN_DURATION_MS};
use crate::error::LotteryError;
use crate::prize::{default_prizes, validate_prizes, Prize};

/// Everything the host page may override about the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LotteryConfig {
    pub prizes: Vec<Prize>,
    pub extra_spins: u32,
    pub spin_duration_ms: u32,
    pub spring: SpringConfig,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            prizes: default_prizes(),
            extra_spins: DEFAULT_EXTRA_SPINS,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            spring: SpringConfig::default(),
        }
    }
}

impl LotteryConfig {
    pub fn from_json(raw: &str) -> Result<Self, LotteryError> {
        let config: LotteryConfig = serde_json::from_str(raw)
            .map_err(|e| LotteryError::invalid(format!("malformed lottery config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LotteryError> {
        validate_prizes(&self.prizes)?;
        if self.spin_duration_ms == 0 {
            return Err(LotteryError::invalid("spin duration must be positive"));
        }
        SpringEasing::new(self.spring)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LotteryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extra_spins, 3);
        assert_eq!(config.spin_duration_ms, 5000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = LotteryConfig::from_json(r#"{"extra_spins": 5}"#).unwrap();
        assert_eq!(config.extra_spins, 5);
        assert_eq!(config.prizes, default_prizes());
        assert_eq!(config.spring, SpringConfig::default());
    }

    #[test]
    fn test_custom_prize_table() {
        let raw = r#"{
            "prizes": [
                {"id": 1, "name": "Gold", "value": "Mug", "weight": 1},
                {"id": 2, "name": "Nothing", "value": "Next time", "weight": 9, "kind": "consolation"}
            ],
            "spring": {"stiffness": 200}
        }"#;
        let config = LotteryConfig::from_json(raw).unwrap();
        assert_eq!(config.prizes.len(), 2);
        assert!(!config.prizes[1].is_reward());
        assert_eq!(config.spring.stiffness, 200.0);
        assert_eq!(config.spring.damping, 30.0);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(LotteryConfig::from_json("not json").is_err());
        assert!(LotteryConfig::from_json(r#"{"prizes": []}"#).is_err());
        assert!(LotteryConfig::from_json(r#"{"spin_duration_ms": 0}"#).is_err());
        assert!(LotteryConfig::from_json(
            r#"{"prizes": [{"id": 1, "name": "A", "value": "a", "weight": 0}]}"#
        )
        .is_err());
    }
}
