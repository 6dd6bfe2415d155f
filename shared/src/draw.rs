use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng};
use crate::error::LotteryError;

/// Picks an index with probability proportional to its weight.
///
/// Draws `r` uniformly from `[0, total)` and returns the first index whose
/// running sum exceeds `r`. Zero-weight entries are never returned.
pub fn select<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize, LotteryError> {
    if weights.is_empty() {
        return Err(LotteryError::invalid("weight list is empty"));
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(LotteryError::invalid(format!("weight {} is not a non-negative number", bad)));
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(LotteryError::invalid("all weights are zero"));
    }
    if !total.is_finite() {
        return Err(LotteryError::invalid("weights overflow"));
    }

    let r = rng.gen_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative > r {
            return Ok(i);
        }
    }

    // Rounding in the running sum can leave r at the very end.
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .ok_or_else(|| LotteryError::invalid("all weights are zero"))
}

/// Owns the random source used for draws.
pub struct DrawEngine<R = SmallRng> {
    rng: R,
}

impl DrawEngine<SmallRng> {
    /// Seeds a fast generator from the operating system (the browser's crypto API under wasm).
    pub fn from_entropy() -> Result<Self, LotteryError> {
        let rng = SmallRng::from_rng(OsRng)
            .map_err(|e| LotteryError::Initialization(e.to_string()))?;
        Ok(Self { rng })
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl<R: RngCore> DrawEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn select(&mut self, weights: &[f64]) -> Result<usize, LotteryError> {
        select(weights, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    fn frequencies(weights: &[f64], draws: usize, seed: u64) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts = vec![0; weights.len()];
        for _ in 0..draws {
            counts[select(weights, &mut rng).unwrap()] += 1;
        }
        counts
    }

    #[test]
    fn test_distribution_passes_chi_squared() {
        let weights = [1.0, 2.0, 3.0, 4.0];
        let draws = 100_000;
        let counts = frequencies(&weights, draws, 42);
        let total: f64 = weights.iter().sum();

        let chi_squared: f64 = weights
            .iter()
            .zip(&counts)
            .map(|(w, &observed)| {
                let expected = w / total * draws as f64;
                (observed as f64 - expected).powi(2) / expected
            })
            .sum();

        // Critical value for 3 degrees of freedom at p = 0.001.
        assert!(chi_squared < 16.27, "chi-squared {} too large", chi_squared);
    }

    #[test]
    fn test_even_split_stays_within_tolerance() {
        let counts = frequencies(&[50.0, 50.0], 10_000, 7);
        for count in counts {
            let ratio = count as f64 / 10_000.0;
            assert!((0.45..=0.55).contains(&ratio), "ratio {} out of range", ratio);
        }
    }

    #[test]
    fn test_zero_weight_never_selected() {
        let counts = frequencies(&[0.0, 0.0, 1.0], 1_000, 3);
        assert_eq!(counts, vec![0, 0, 1_000]);
    }

    #[test]
    fn test_single_entry_always_wins() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(select(&[1.0], &mut rng), Ok(0));
        }
    }

    #[test]
    fn test_all_zero_weights_fail() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(select(&[0.0, 0.0], &mut rng), Err(LotteryError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_and_malformed_weights_fail() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(select(&[], &mut rng), Err(LotteryError::InvalidInput(_))));
        assert!(matches!(select(&[1.0, -1.0], &mut rng), Err(LotteryError::InvalidInput(_))));
        assert!(matches!(select(&[1.0, f64::NAN], &mut rng), Err(LotteryError::InvalidInput(_))));
    }

    #[test]
    fn test_seeded_engines_agree() {
        let weights = [0.5, 2.0, 5.0, 10.0, 20.0, 62.5];
        let mut a = DrawEngine::seeded(99);
        let mut b = DrawEngine::seeded(99);
        for _ in 0..50 {
            assert_eq!(a.select(&weights), b.select(&weights));
        }
    }

    #[test]
    fn test_engine_from_entropy_is_ready() {
        let mut engine = DrawEngine::from_entropy().unwrap();
        assert!(engine.select(&[1.0, 1.0]).unwrap() < 2);
    }

    /// Returns the same word on every call.
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                chunk.copy_from_slice(&self.0.to_le_bytes()[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_injected_rng_drives_the_draw() {
        let weights = [0.0, 1.0, 1.0];
        // lowest draw skips the zero-weight entry
        assert_eq!(DrawEngine::with_rng(FixedRng(0)).select(&weights), Ok(1));
        // highest draw lands on the last entry
        assert_eq!(DrawEngine::with_rng(FixedRng(u64::MAX)).select(&weights), Ok(2));
    }

    #[test]
    fn test_engine_matches_free_function_for_same_rng() {
        let weights = [3.0, 1.0, 6.0];
        let mut engine = DrawEngine::with_rng(StdRng::seed_from_u64(5));
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            assert_eq!(engine.select(&weights), select(&weights, &mut rng));
        }
    }
}
