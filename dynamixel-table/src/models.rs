use crate::units::RPM_TO_RADSEC;
use crate::{RegisterAddress, RegistryError};

/// Physical constants of one servo model.
///
/// Torque and velocity are rated per volt of supply, so they can be scaled to the voltage the
/// servo actually reports.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModelParameters {
    /// The value of the MODEL_NUMBER register.
    pub model_number: u16,
    pub name: &'static str,
    /// Encoder ticks over the full mechanical range.
    pub encoder_resolution: u32,
    pub range_degrees: f64,
    /// Stall torque in N·m per volt of supply.
    pub torque_per_volt: f64,
    /// No-load speed in rad/s per volt of supply.
    pub velocity_per_volt: f64,
    /// RPM per unit of the speed registers. Measured, not from the datasheets.
    pub rpm_per_tick: f64,
    /// Optional registers this model implements.
    pub features: &'static [RegisterAddress],
}

impl ModelParameters {
    /// Whether this model implements `register`. Both halves of a two-byte register count, and
    /// the goal torque registers come with TORQUE_CONTROL_MODE.
    pub fn supports(&self, register: RegisterAddress) -> bool {
        let feature = match register.low_byte().unwrap_or(register) {
            RegisterAddress::GoalTorqueL => RegisterAddress::TorqueControlMode,
            low => low,
        };
        self.features.contains(&feature)
    }

    /// Stall torque in N·m at the given supply voltage.
    pub fn rated_torque(&self, supply_voltage: f64) -> f64 {
        self.torque_per_volt * supply_voltage
    }

    /// No-load speed in rad/s at the given supply voltage.
    pub fn rated_velocity(&self, supply_voltage: f64) -> f64 {
        self.velocity_per_volt * supply_voltage
    }

    pub fn range_radians(&self) -> f64 {
        self.range_degrees.to_radians()
    }

    pub fn radians_per_encoder_tick(&self) -> f64 {
        self.range_radians() / f64::from(self.encoder_resolution)
    }

    pub fn encoder_ticks_per_radian(&self) -> f64 {
        f64::from(self.encoder_resolution) / self.range_radians()
    }

    /// rad/s per unit of the speed registers.
    pub fn radians_per_sec_per_speed_tick(&self) -> f64 {
        self.rpm_per_tick * RPM_TO_RADSEC
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        let invalid = |reason: &'static str| RegistryError::InvalidParameters {
            model: self.model_number,
            reason,
        };

        if self.encoder_resolution == 0 {
            return Err(invalid("encoder resolution must be positive"));
        }
        if !(self.range_degrees > 0.0 && self.range_degrees <= 360.0) {
            return Err(invalid("range must be within (0, 360] degrees"));
        }
        if !(self.torque_per_volt.is_finite() && self.torque_per_volt > 0.0) {
            return Err(invalid("torque per volt must be positive and finite"));
        }
        if !(self.velocity_per_volt.is_finite() && self.velocity_per_volt > 0.0) {
            return Err(invalid("velocity per volt must be positive and finite"));
        }
        if !(self.rpm_per_tick.is_finite() && self.rpm_per_tick > 0.0) {
            return Err(invalid("rpm per tick must be positive and finite"));
        }
        if !self.features.iter().all(|feature| feature.is_optional_feature()) {
            return Err(invalid("features must be optional registers"));
        }
        Ok(())
    }
}

/// Looks up the parameters of a model by its model number.
///
/// Servos newer than this table are expected in the wild, so a miss is an ordinary error rather
/// than a reason to give up on the whole bus.
pub fn model_parameters(model_number: u16) -> Result<&'static ModelParameters, RegistryError> {
    MODELS
        .iter()
        .find(|model| model.model_number == model_number)
        .ok_or(RegistryError::UnknownModel(model_number))
}

/// Whether the given model implements `register`. Unknown models support nothing.
pub fn supports_feature(model_number: u16, register: RegisterAddress) -> bool {
    model_parameters(model_number).is_ok_and(|model| model.supports(register))
}

/// Checks every entry of `MODELS`, and that no model number is listed twice.
pub fn validate_models() -> Result<(), RegistryError> {
    for (index, model) in MODELS.iter().enumerate() {
        model.validate()?;
        if MODELS[..index]
            .iter()
            .any(|other| other.model_number == model.model_number)
        {
            return Err(RegistryError::DuplicateModel(model.model_number));
        }
    }
    Ok(())
}

pub static MODELS: [ModelParameters; 18] = [
    ModelParameters {
        model_number: 113,
        name: "DX-113",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 1.0 / 12.0, // 1 N·m @ 12 V
        velocity_per_volt: 54.0 * RPM_TO_RADSEC / 12.0, // 54 RPM @ 12 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 116,
        name: "DX-116",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 2.1 / 12.0, // 2.1 N·m @ 12 V
        velocity_per_volt: 78.0 * RPM_TO_RADSEC / 12.0, // 78 RPM @ 12 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 117,
        name: "DX-117",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 3.7 / 18.5, // 3.7 N·m @ 18.5 V
        velocity_per_volt: 85.0 * RPM_TO_RADSEC / 18.5, // 85 RPM @ 18.5 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 12,
        name: "AX-12",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 1.5 / 12.0, // 1.5 N·m @ 12 V
        velocity_per_volt: 59.0 * RPM_TO_RADSEC / 12.0, // 59 RPM @ 12 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 300,
        name: "AX-12W",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 0.2 / 12.0, // 0.2 N·m @ 12 V
        velocity_per_volt: 470.0 * RPM_TO_RADSEC / 12.0, // 470 RPM @ 12 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 18,
        name: "AX-18",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 1.8 / 12.0, // 1.8 N·m @ 12 V
        velocity_per_volt: 97.0 * RPM_TO_RADSEC / 12.0, // 97 RPM @ 12 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 10,
        name: "RX-10",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 1.3 / 12.0, // 1.3 N·m @ 12 V
        velocity_per_volt: 54.0 * RPM_TO_RADSEC / 12.0, // 54 RPM @ 12 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 24,
        name: "RX-24",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 2.6 / 12.0, // 2.6 N·m @ 12 V
        velocity_per_volt: 126.0 * RPM_TO_RADSEC / 12.0, // 126 RPM @ 12 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 28,
        name: "RX-28",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 3.7 / 18.5, // 3.7 N·m @ 18.5 V
        velocity_per_volt: 85.0 * RPM_TO_RADSEC / 18.5, // 85 RPM @ 18.5 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 64,
        name: "RX-64",
        encoder_resolution: 1024,
        range_degrees: 300.0,
        torque_per_volt: 5.3 / 18.5, // 5.3 N·m @ 18.5 V
        velocity_per_volt: 64.0 * RPM_TO_RADSEC / 18.5, // 64 RPM @ 18.5 V
        rpm_per_tick: 0.111,
        features: &[],
    },
    ModelParameters {
        model_number: 106,
        name: "EX-106",
        encoder_resolution: 4096,
        range_degrees: 250.92,
        torque_per_volt: 10.9 / 18.5, // 10.9 N·m @ 18.5 V
        velocity_per_volt: 91.0 * RPM_TO_RADSEC / 18.5, // 91 RPM @ 18.5 V
        rpm_per_tick: 0.111,
        features: &[RegisterAddress::SensedCurrentL],
    },
    ModelParameters {
        model_number: 107,
        name: "EX-106+",
        encoder_resolution: 4096,
        range_degrees: 250.92,
        torque_per_volt: 10.9 / 18.5, // 10.9 N·m @ 18.5 V
        velocity_per_volt: 91.0 * RPM_TO_RADSEC / 18.5, // 91 RPM @ 18.5 V
        rpm_per_tick: 0.111,
        features: &[RegisterAddress::SensedCurrentL],
    },
    ModelParameters {
        model_number: 360,
        name: "MX-12W",
        encoder_resolution: 4096,
        range_degrees: 360.0,
        torque_per_volt: 0.2 / 12.0, // stall torque not in the datasheet
        velocity_per_volt: 470.0 * RPM_TO_RADSEC / 12.0, // 470 RPM @ 12 V
        rpm_per_tick: 0.114,
        features: &[RegisterAddress::GoalAcceleration],
    },
    ModelParameters {
        model_number: 29,
        name: "MX-28",
        encoder_resolution: 4096,
        range_degrees: 360.0,
        torque_per_volt: 2.5 / 12.0, // 2.5 N·m @ 12 V
        velocity_per_volt: 55.0 * RPM_TO_RADSEC / 12.0, // 55 RPM @ 12 V
        rpm_per_tick: 0.114,
        features: &[RegisterAddress::GoalAcceleration],
    },
    ModelParameters {
        model_number: 310,
        name: "MX-64",
        encoder_resolution: 4096,
        range_degrees: 360.0,
        torque_per_volt: 6.0 / 12.0, // 6 N·m @ 12 V
        velocity_per_volt: 63.0 * RPM_TO_RADSEC / 12.0, // 63 RPM @ 12 V
        rpm_per_tick: 0.114,
        features: &[
            RegisterAddress::CurrentL,
            RegisterAddress::TorqueControlMode,
            RegisterAddress::GoalAcceleration,
        ],
    },
    ModelParameters {
        model_number: 320,
        name: "MX-106",
        encoder_resolution: 4096,
        range_degrees: 360.0,
        torque_per_volt: 8.4 / 12.0, // 8.4 N·m @ 12 V
        velocity_per_volt: 45.0 * RPM_TO_RADSEC / 12.0, // 45 RPM @ 12 V
        rpm_per_tick: 0.114,
        features: &[
            RegisterAddress::CurrentL,
            RegisterAddress::TorqueControlMode,
            RegisterAddress::GoalAcceleration,
        ],
    },
    ModelParameters {
        model_number: 1060,
        name: "XL430-W250-T",
        encoder_resolution: 4096,
        range_degrees: 360.0,
        torque_per_volt: 1.5 / 12.0, // 1.5 N·m @ 12 V
        velocity_per_volt: 61.0 * RPM_TO_RADSEC / 12.0, // 61 RPM @ 12 V
        rpm_per_tick: 0.229,
        features: &[],
    },
    ModelParameters {
        model_number: 1090,
        name: "2XL430-W250-T",
        encoder_resolution: 4096,
        range_degrees: 360.0,
        torque_per_volt: 1.5 / 12.0, // 1.5 N·m @ 12 V
        velocity_per_volt: 61.0 * RPM_TO_RADSEC / 12.0, // 61 RPM @ 12 V
        rpm_per_tick: 0.229,
        features: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn table_is_valid() {
        assert_eq!(validate_models(), Ok(()));
    }

    #[test]
    fn every_model_is_physically_plausible() {
        for model in &MODELS {
            assert!(model.torque_per_volt > 0.0, "{}", model.name);
            assert!(model.velocity_per_volt > 0.0, "{}", model.name);
            assert!(model.encoder_resolution > 0, "{}", model.name);
            assert!(
                model.range_degrees > 0.0 && model.range_degrees <= 360.0,
                "{}",
                model.name
            );
        }
    }

    #[test]
    fn unknown_model() {
        assert_eq!(model_parameters(9999), Err(RegistryError::UnknownModel(9999)));
        assert!(!supports_feature(9999, RegisterAddress::CurrentL));
    }

    #[test_case(12, "AX-12", 1024)]
    #[test_case(29, "MX-28", 4096)]
    #[test_case(107, "EX-106+", 4096)]
    #[test_case(1090, "2XL430-W250-T", 4096)]
    fn lookup(model_number: u16, name: &str, encoder_resolution: u32) {
        let model = model_parameters(model_number).unwrap();
        assert_eq!(model.model_number, model_number);
        assert_eq!(model.name, name);
        assert_eq!(model.encoder_resolution, encoder_resolution);
    }

    #[test]
    fn lookups_are_idempotent() {
        assert_eq!(model_parameters(310), model_parameters(310));
        assert!(core::ptr::eq(
            model_parameters(310).unwrap(),
            model_parameters(310).unwrap()
        ));
    }

    #[test]
    fn current_sensing() {
        assert!(supports_feature(310, RegisterAddress::CurrentL));
        assert!(supports_feature(310, RegisterAddress::CurrentH));
        assert!(!supports_feature(12, RegisterAddress::CurrentL));
        assert!(supports_feature(106, RegisterAddress::SensedCurrentL));
        assert!(!supports_feature(106, RegisterAddress::CurrentL));
        assert!(supports_feature(29, RegisterAddress::GoalAcceleration));
        assert!(!supports_feature(29, RegisterAddress::TorqueControlMode));
    }

    #[test_case(310, true)]
    #[test_case(320, true)]
    #[test_case(29, false)]
    #[test_case(12, false)]
    fn goal_torque_follows_torque_control_mode(model_number: u16, expected: bool) {
        assert_eq!(
            supports_feature(model_number, RegisterAddress::TorqueControlMode),
            expected
        );
        assert_eq!(
            supports_feature(model_number, RegisterAddress::GoalTorqueL),
            expected
        );
        assert_eq!(
            supports_feature(model_number, RegisterAddress::GoalTorqueH),
            expected
        );
    }

    #[test]
    fn rated_torque_scales_with_voltage() {
        let xl430 = model_parameters(1060).unwrap();
        assert_eq!(xl430.torque_per_volt, 1.5 / 12.0);
        assert!((xl430.rated_torque(12.0) - 1.5).abs() < 1e-9);
        assert!((xl430.rated_torque(6.0) - 0.75).abs() < 1e-9);
        assert!(xl430.rated_torque(f64::NAN).is_nan());
    }

    #[test]
    fn rated_velocity_scales_with_voltage() {
        let rx28 = model_parameters(28).unwrap();
        let expected = 85.0 * RPM_TO_RADSEC;
        assert!((rx28.rated_velocity(18.5) - expected).abs() < 1e-9);
        assert!(rx28.rated_velocity(f64::INFINITY).is_infinite());
    }

    #[test]
    fn encoder_conversions() {
        let ax12 = model_parameters(12).unwrap();
        let full_range = ax12.radians_per_encoder_tick() * 1024.0;
        assert!((full_range - 300.0f64.to_radians()).abs() < 1e-9);
        let round_trip = ax12.encoder_ticks_per_radian() * ax12.radians_per_encoder_tick();
        assert!((round_trip - 1.0).abs() < 1e-9);

        let mx28 = model_parameters(29).unwrap();
        assert!((mx28.range_radians() - 2.0 * core::f64::consts::PI).abs() < 1e-9);
        assert!((mx28.radians_per_sec_per_speed_tick() - 0.114 * RPM_TO_RADSEC).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        let good = *model_parameters(12).unwrap();

        let zero_resolution = ModelParameters {
            encoder_resolution: 0,
            ..good
        };
        assert!(matches!(
            zero_resolution.validate(),
            Err(RegistryError::InvalidParameters { model: 12, .. })
        ));

        let too_wide = ModelParameters {
            range_degrees: 361.0,
            ..good
        };
        assert!(too_wide.validate().is_err());

        let no_torque = ModelParameters {
            torque_per_volt: 0.0,
            ..good
        };
        assert!(no_torque.validate().is_err());

        let infinite_velocity = ModelParameters {
            velocity_per_volt: f64::INFINITY,
            ..good
        };
        assert!(infinite_velocity.validate().is_err());

        let plain_feature = ModelParameters {
            features: &[RegisterAddress::Led],
            ..good
        };
        assert!(plain_feature.validate().is_err());
    }
}
