use serde::{Serialize, Deserialize};
use rand::RngCore;
use crate::config::LotteryConfig;
use crate::draw::DrawEngine;
use crate::error::LotteryError;
use crate::prize::{weights, Prize};
use crate::wheel::{normalize_angle, prize_at, target_angle};

/// A spin that has been decided but not yet animated.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub winner: usize,
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

/// Represents the current state of the wheel
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct WheelState {
    pub rotation: f64,
    pub is_spinning: bool,
    pub last_result: Option<usize>,
    pub pending: Option<SpinPlan>,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_spin(&mut self, plan: SpinPlan) {
        self.is_spinning = true;
        self.last_result = None;
        self.pending = Some(plan);
    }

    pub fn complete_spin(&mut self) -> Option<usize> {
        let plan = self.pending.take()?;
        self.is_spinning = false;
        self.rotation = normalize_angle(plan.to);
        self.last_result = Some(plan.winner);
        Some(plan.winner)
    }

    pub fn cancel_spin(&mut self) {
        self.pending = None;
        self.is_spinning = false;
    }
}

/// Prize table plus wheel state; sequences a draw into an animatable plan.
#[derive(Debug, Clone)]
pub struct LuckyWheel {
    prizes: Vec<Prize>,
    weights: Vec<f64>,
    state: WheelState,
    extra_spins: u32,
    spin_duration_ms: u32,
}

impl LuckyWheel {
    pub fn new(config: &LotteryConfig) -> Result<Self, LotteryError> {
        config.validate()?;
        Ok(Self {
            prizes: config.prizes.clone(),
            weights: weights(&config.prizes),
            state: WheelState::new(),
            extra_spins: config.extra_spins,
            spin_duration_ms: config.spin_duration_ms,
        })
    }

    pub fn with_prizes(prizes: Vec<Prize>) -> Result<Self, LotteryError> {
        let config = LotteryConfig { prizes, ..LotteryConfig::default() };
        Self::new(&config)
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning
    }

    pub fn last_result(&self) -> Option<&Prize> {
        self.state.last_result.and_then(|i| self.prizes.get(i))
    }

    /// Draws a winner and works out where the wheel has to stop.
    ///
    /// Fails with [`LotteryError::AnimationInterrupted`] while a previous spin
    /// has not been completed or cancelled; the state is left untouched then.
    pub fn request_spin<R: RngCore>(&mut self, engine: &mut DrawEngine<R>) -> Result<SpinPlan, LotteryError> {
        if self.state.is_spinning {
            return Err(LotteryError::AnimationInterrupted);
        }

        let winner = engine.select(&self.weights)?;
        let from = self.state.rotation;
        let to = target_angle(from, winner, self.prizes.len(), self.extra_spins)?;

        let plan = SpinPlan {
            winner,
            from,
            to,
            duration_ms: self.spin_duration_ms,
        };
        self.state.start_spin(plan);
        Ok(plan)
    }

    /// Records the outcome of the in-flight spin. `None` if nothing was spinning.
    pub fn complete_spin(&mut self) -> Option<&Prize> {
        let winner = self.state.complete_spin()?;
        self.prizes.get(winner)
    }

    pub fn cancel_spin(&mut self) {
        self.state.cancel_spin();
    }

    pub fn prize_under_pointer(&self) -> Result<&Prize, LotteryError> {
        let index = prize_at(self.state.rotation, self.prizes.len())?;
        self.prizes
            .get(index)
            .ok_or_else(|| LotteryError::invalid(format!("no prize at index {}", index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> LuckyWheel {
        LuckyWheel::new(&LotteryConfig::default()).unwrap()
    }

    #[test]
    fn test_new_wheel_is_idle() {
        let wheel = wheel();
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.rotation(), 0.0);
        assert!(wheel.last_result().is_none());
    }

    #[test]
    fn test_spin_lands_on_drawn_prize() {
        let mut wheel = wheel();
        let mut engine = DrawEngine::seeded(11);

        for _ in 0..25 {
            let plan = wheel.request_spin(&mut engine).unwrap();
            assert!(wheel.is_spinning());
            assert!(plan.to >= plan.from + 3.0 * 360.0);
            assert_eq!(plan.duration_ms, 5000);

            let won = wheel.complete_spin().unwrap().clone();
            assert_eq!(won, wheel.prizes()[plan.winner]);
            assert_eq!(wheel.prize_under_pointer().unwrap(), &won);
            assert_eq!(wheel.last_result(), Some(&won));
            assert!(!wheel.is_spinning());
        }
    }

    #[test]
    fn test_rotation_is_normalized_after_each_spin() {
        let mut wheel = wheel();
        let mut engine = DrawEngine::seeded(5);
        for _ in 0..100 {
            wheel.request_spin(&mut engine).unwrap();
            wheel.complete_spin();
            assert!((0.0..360.0).contains(&wheel.rotation()));
        }
    }

    #[test]
    fn test_second_request_while_spinning_is_interrupted() {
        let mut wheel = wheel();
        let mut engine = DrawEngine::seeded(1);
        let first = wheel.request_spin(&mut engine).unwrap();

        assert_eq!(wheel.request_spin(&mut engine), Err(LotteryError::AnimationInterrupted));
        assert_eq!(wheel.state().pending, Some(first));
    }

    #[test]
    fn test_request_clears_previous_result() {
        let mut wheel = wheel();
        let mut engine = DrawEngine::seeded(8);
        wheel.request_spin(&mut engine).unwrap();
        wheel.complete_spin();
        assert!(wheel.last_result().is_some());

        wheel.request_spin(&mut engine).unwrap();
        assert!(wheel.last_result().is_none());
    }

    #[test]
    fn test_cancel_keeps_starting_angle() {
        let mut wheel = wheel();
        let mut engine = DrawEngine::seeded(2);
        wheel.request_spin(&mut engine).unwrap();
        wheel.complete_spin();
        let before = wheel.rotation();

        wheel.request_spin(&mut engine).unwrap();
        wheel.cancel_spin();
        assert_eq!(wheel.rotation(), before);
        assert!(!wheel.is_spinning());
        assert!(wheel.last_result().is_none());
        assert!(wheel.request_spin(&mut engine).is_ok());
    }

    #[test]
    fn test_late_completion_after_cancel_is_ignored() {
        let mut wheel = wheel();
        let mut engine = DrawEngine::seeded(4);
        let plan = wheel.request_spin(&mut engine).unwrap();
        wheel.cancel_spin();
        assert!(wheel.complete_spin().is_none());
        assert_eq!(wheel.rotation(), plan.from);
        assert!(wheel.last_result().is_none());
    }

    #[test]
    fn test_complete_without_spin_is_none() {
        let mut wheel = wheel();
        assert!(wheel.complete_spin().is_none());
    }

    #[test]
    fn test_only_weighted_prize_can_win() {
        let prizes = vec![
            Prize::new(1, "A", "a", 0.0),
            Prize::new(2, "B", "b", 1.0),
            Prize::new(3, "C", "c", 0.0),
        ];
        let mut wheel = LuckyWheel::with_prizes(prizes).unwrap();
        let mut engine = DrawEngine::seeded(3);
        for _ in 0..20 {
            wheel.request_spin(&mut engine).unwrap();
            assert_eq!(wheel.complete_spin().map(|p| p.id), Some(2));
        }
    }

    #[test]
    fn test_invalid_prize_table_rejected() {
        assert!(matches!(LuckyWheel::with_prizes(vec![]), Err(LotteryError::InvalidInput(_))));
    }
}
