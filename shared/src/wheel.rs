//! Geometry of the wheel.
//!
//! Sectors are laid out clockwise starting at the pointer (top of the wheel),
//! index 0 first. The wheel turns clockwise under a fixed pointer, so a
//! rotation of `θ` puts wheel angle `360 - θ` under the pointer.

use crate::constants::{FULL_TURN_DEGREES, SECTOR_LANDING_FRACTION};
use crate::error::LotteryError;

pub fn normalize_angle(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= FULL_TURN_DEGREES { 0.0 } else { normalized }
}

pub fn sector_angle(sector_count: usize) -> Result<f64, LotteryError> {
    if sector_count == 0 {
        return Err(LotteryError::invalid("sector count must be positive"));
    }
    Ok(FULL_TURN_DEGREES / sector_count as f64)
}

/// Index of the sector under the pointer after the wheel has turned `degrees`.
pub fn prize_at(degrees: f64, sector_count: usize) -> Result<usize, LotteryError> {
    let sector = sector_angle(sector_count)?;
    if !degrees.is_finite() {
        return Err(LotteryError::invalid(format!("rotation {} is not finite", degrees)));
    }

    let normalized = normalize_angle(degrees);
    let index = ((FULL_TURN_DEGREES - normalized) / sector).floor() as usize;
    Ok(index % sector_count)
}

/// Rotation that, starting from `current`, turns `extra_spins` full times and
/// then stops with the middle of sector `chosen` under the pointer.
pub fn target_angle(
    current: f64,
    chosen: usize,
    sector_count: usize,
    extra_spins: u32,
) -> Result<f64, LotteryError> {
    let sector = sector_angle(sector_count)?;
    if chosen >= sector_count {
        return Err(LotteryError::invalid(format!(
            "prize index {} out of range for {} sectors",
            chosen, sector_count
        )));
    }
    if !current.is_finite() {
        return Err(LotteryError::invalid(format!("rotation {} is not finite", current)));
    }

    let landing = FULL_TURN_DEGREES - (chosen as f64 + SECTOR_LANDING_FRACTION) * sector;
    let delta = normalize_angle(landing - normalize_angle(current));

    Ok(current + extra_spins as f64 * FULL_TURN_DEGREES + delta)
}

/// Start angle and sweep of sector `index` in wheel coordinates, both in degrees.
pub fn sector_bounds(index: usize, sector_count: usize) -> Result<(f64, f64), LotteryError> {
    let sector = sector_angle(sector_count)?;
    Ok((index as f64 * sector, sector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_angle_maps_like_its_remainder() {
        assert_eq!(prize_at(370.0, 6).unwrap(), prize_at(10.0, 6).unwrap());
    }

    #[test]
    fn test_periodicity() {
        for n in 1..=12 {
            for step in 0..72 {
                let angle = step as f64 * 5.0 + 0.25;
                let base = prize_at(angle, n).unwrap();
                for turns in [-3.0, -1.0, 1.0, 2.0, 10.0] {
                    assert_eq!(prize_at(angle + turns * 360.0, n).unwrap(), base);
                }
            }
        }
    }

    #[test]
    fn test_single_sector_always_zero() {
        for angle in [0.0, 0.1, 90.0, 359.99, 360.0, 12_345.6, -45.0] {
            assert_eq!(prize_at(angle, 1).unwrap(), 0);
        }
    }

    #[test]
    fn test_zero_rotation_points_at_first_sector() {
        assert_eq!(prize_at(0.0, 6).unwrap(), 0);
    }

    #[test]
    fn test_zero_sectors_rejected() {
        assert!(matches!(prize_at(10.0, 0), Err(LotteryError::InvalidInput(_))));
        assert!(matches!(target_angle(0.0, 0, 0, 3), Err(LotteryError::InvalidInput(_))));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        assert!(matches!(target_angle(0.0, 6, 6, 3), Err(LotteryError::InvalidInput(_))));
    }

    #[test]
    fn test_target_for_third_prize() {
        let target = target_angle(0.0, 2, 6, 3).unwrap();
        assert!(target >= 1080.0);
        assert_eq!(prize_at(target, 6).unwrap(), 2);
    }

    #[test]
    fn test_target_and_prize_at_are_inverse() {
        let starts = [0.0, 15.0, 59.999, 123.4, 359.9, 721.0, -90.0, 100_000.25];
        for n in 1..=12 {
            for i in 0..n {
                for k in 0..6 {
                    for &start in &starts {
                        let target = target_angle(start, i, n, k).unwrap();
                        assert!(target >= start + k as f64 * 360.0);
                        assert!(target < start + (k as f64 + 1.0) * 360.0);
                        assert_eq!(prize_at(target, n).unwrap(), i, "start {} index {} of {}", start, i, n);
                    }
                }
            }
        }
    }

    #[test]
    fn test_normalize_handles_negative() {
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(720.0), 0.0);
        assert!(normalize_angle(-1e-20) < 360.0);
    }

    #[test]
    fn test_sector_midpoints_read_back() {
        for n in 1..=12 {
            for i in 0..n {
                let (start, sweep) = sector_bounds(i, n).unwrap();
                assert_eq!(prize_at(360.0 - (start + sweep / 2.0), n).unwrap(), i, "sector {} of {}", i, n);
                assert!((start + sweep) <= 360.0 + 1e-9);
            }
        }
        assert!(sector_bounds(0, 0).is_err());
    }
}
