//! Legal values for registers whose range isn't documented per model.
//!
//! The punch range is a guess, the datasheets say nothing about it.

use core::ops::RangeInclusive;

pub const MIN_COMPLIANCE_MARGIN: u8 = 0;
pub const MAX_COMPLIANCE_MARGIN: u8 = 255;

pub const MIN_COMPLIANCE_SLOPE: u8 = 1;
pub const MAX_COMPLIANCE_SLOPE: u8 = 254;

pub const MIN_PUNCH: u16 = 0;
pub const MAX_PUNCH: u16 = 255;

/// Maximum goal speed, in speed ticks.
pub const MAX_SPEED_TICK: u16 = 1023;

/// Maximum torque limit, in torque ticks.
pub const MAX_TORQUE_TICK: u16 = 1023;

pub const COMPLIANCE_MARGIN: RangeInclusive<u8> = MIN_COMPLIANCE_MARGIN..=MAX_COMPLIANCE_MARGIN;
pub const COMPLIANCE_SLOPE: RangeInclusive<u8> = MIN_COMPLIANCE_SLOPE..=MAX_COMPLIANCE_SLOPE;
pub const PUNCH: RangeInclusive<u16> = MIN_PUNCH..=MAX_PUNCH;
pub const SPEED_TICK: RangeInclusive<u16> = 0..=MAX_SPEED_TICK;
pub const TORQUE_TICK: RangeInclusive<u16> = 0..=MAX_TORQUE_TICK;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        assert!(!COMPLIANCE_SLOPE.contains(&0));
        assert!(!COMPLIANCE_SLOPE.contains(&255));
        assert!(COMPLIANCE_SLOPE.contains(&32));
        assert!(PUNCH.contains(&32));
        assert!(!PUNCH.contains(&256));
        assert!(SPEED_TICK.contains(&MAX_SPEED_TICK));
        assert!(!TORQUE_TICK.contains(&1024));
    }
}
