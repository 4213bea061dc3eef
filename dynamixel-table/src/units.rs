//! Conversions from the units used in Dynamixel datasheets.

/// 1 kgf·cm in N·m.
pub const KGCM_TO_NM: f64 = 0.0980665;

/// 1 RPM in rad/s.
pub const RPM_TO_RADSEC: f64 = 0.104719755;

pub fn kgcm_to_nm(kgcm: f64) -> f64 {
    kgcm * KGCM_TO_NM
}

pub fn rpm_to_radsec(rpm: f64) -> f64 {
    rpm * RPM_TO_RADSEC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpm_matches_two_pi_over_sixty() {
        assert!((rpm_to_radsec(60.0) - 2.0 * core::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn kgcm() {
        assert!((kgcm_to_nm(10.0) - 0.980665).abs() < 1e-12);
        assert!(kgcm_to_nm(f64::NAN).is_nan());
    }
}
