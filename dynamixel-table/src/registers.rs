//! Auto-generated code. Do not modify. See tests/generate_registers.rs for details.

/// A named entry in the Dynamixel control table.
///
/// Which byte offset a register lives at depends on the protocol revision, and some registers
/// don't exist at all on a given revision. See `RegisterAddress::address_in`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum RegisterAddress {
    /// Model number (low byte)
    ///
    /// protocol 1.0: 0
    /// protocol 2.0: 0
    ModelNumberL,

    /// Model number (high byte)
    ///
    /// protocol 1.0: 1
    /// protocol 2.0: 1
    ModelNumberH,

    /// Firmware version
    ///
    /// protocol 1.0: 2
    /// protocol 2.0: 6
    Version,

    /// Unique ID on the bus. 254 is the broadcast ID
    ///
    /// protocol 1.0: 3
    /// protocol 2.0: 7
    Id,

    /// Baud rate
    ///
    /// protocol 1.0: 4
    /// protocol 2.0: 8
    BaudRate,

    /// Delay before a status packet is returned
    ///
    /// protocol 1.0: 5
    /// protocol 2.0: 9
    ReturnDelayTime,

    /// Clockwise angle limit (low byte)
    ///
    /// protocol 1.0: 6
    /// protocol 2.0: not present
    CwAngleLimitL,

    /// Clockwise angle limit (high byte)
    ///
    /// protocol 1.0: 7
    /// protocol 2.0: not present
    CwAngleLimitH,

    /// Counterclockwise angle limit (low byte)
    ///
    /// protocol 1.0: 8
    /// protocol 2.0: not present
    CcwAngleLimitL,

    /// Counterclockwise angle limit (high byte)
    ///
    /// protocol 1.0: 9
    /// protocol 2.0: not present
    CcwAngleLimitH,

    /// Drive mode
    ///
    /// protocol 1.0: 10
    /// protocol 2.0: 10
    DriveMode,

    /// Maximum internal temperature
    ///
    /// protocol 1.0: 11
    /// protocol 2.0: 31
    LimitTemperature,

    /// Minimum input voltage
    ///
    /// protocol 1.0: 12
    /// protocol 2.0: 34
    DownLimitVoltage,

    /// Maximum input voltage
    ///
    /// protocol 1.0: 13
    /// protocol 2.0: 32
    UpLimitVoltage,

    /// Maximum torque (low byte)
    ///
    /// protocol 1.0: 14
    /// protocol 2.0: not present
    MaxTorqueL,

    /// Maximum torque (high byte)
    ///
    /// protocol 1.0: 15
    /// protocol 2.0: not present
    MaxTorqueH,

    /// Status return level
    ///
    /// protocol 1.0: 16
    /// protocol 2.0: 68
    ReturnLevel,

    /// Errors that make the LED blink
    ///
    /// protocol 1.0: 17
    /// protocol 2.0: not present
    AlarmLed,

    /// Errors that turn torque off
    ///
    /// protocol 1.0: 18
    /// protocol 2.0: not present
    AlarmShutdown,

    /// Operating mode
    ///
    /// protocol 1.0: not present
    /// protocol 2.0: 11
    OperatingMode,

    /// Down calibration (low byte)
    ///
    /// protocol 1.0: 20
    /// protocol 2.0: not present
    DownCalibrationL,

    /// Down calibration (high byte)
    ///
    /// protocol 1.0: 21
    /// protocol 2.0: not present
    DownCalibrationH,

    /// Up calibration (low byte)
    ///
    /// protocol 1.0: 22
    /// protocol 2.0: not present
    UpCalibrationL,

    /// Up calibration (high byte)
    ///
    /// protocol 1.0: 23
    /// protocol 2.0: not present
    UpCalibrationH,

    /// Torque on/off
    ///
    /// protocol 1.0: 24
    /// protocol 2.0: 64
    TorqueEnable,

    /// Status LED on/off
    ///
    /// protocol 1.0: 25
    /// protocol 2.0: 65
    Led,

    /// Clockwise compliance margin
    ///
    /// protocol 1.0: 26
    /// protocol 2.0: not present
    CwComplianceMargin,

    /// Counterclockwise compliance margin
    ///
    /// protocol 1.0: 27
    /// protocol 2.0: not present
    CcwComplianceMargin,

    /// Clockwise compliance slope
    ///
    /// protocol 1.0: 28
    /// protocol 2.0: not present
    CwComplianceSlope,

    /// Counterclockwise compliance slope
    ///
    /// protocol 1.0: 29
    /// protocol 2.0: not present
    CcwComplianceSlope,

    /// Position D gain. Shares its protocol 1.0 address with the compliance margin on older models
    ///
    /// protocol 1.0: 26
    /// protocol 2.0: 80
    DGain,

    /// Position I gain. Shares its protocol 1.0 address with the compliance margin on older models
    ///
    /// protocol 1.0: 27
    /// protocol 2.0: 82
    IGain,

    /// Position P gain. Shares its protocol 1.0 address with the compliance slope on older models
    ///
    /// protocol 1.0: 28
    /// protocol 2.0: 84
    PGain,

    /// Goal position (low byte)
    ///
    /// protocol 1.0: 30
    /// protocol 2.0: 116
    GoalPositionL,

    /// Goal position (high byte)
    ///
    /// protocol 1.0: 31
    /// protocol 2.0: 117
    GoalPositionH,

    /// Goal speed (low byte)
    ///
    /// protocol 1.0: 32
    /// protocol 2.0: 104
    GoalSpeedL,

    /// Goal speed (high byte)
    ///
    /// protocol 1.0: 33
    /// protocol 2.0: 105
    GoalSpeedH,

    /// Torque limit (low byte)
    ///
    /// protocol 1.0: 34
    /// protocol 2.0: not present
    TorqueLimitL,

    /// Torque limit (high byte)
    ///
    /// protocol 1.0: 35
    /// protocol 2.0: not present
    TorqueLimitH,

    /// Present position (low byte)
    ///
    /// protocol 1.0: 36
    /// protocol 2.0: 132
    PresentPositionL,

    /// Present position (high byte)
    ///
    /// protocol 1.0: 37
    /// protocol 2.0: 133
    PresentPositionH,

    /// Present speed (low byte)
    ///
    /// protocol 1.0: 38
    /// protocol 2.0: 128
    PresentSpeedL,

    /// Present speed (high byte)
    ///
    /// protocol 1.0: 39
    /// protocol 2.0: 129
    PresentSpeedH,

    /// Present load (low byte)
    ///
    /// protocol 1.0: 40
    /// protocol 2.0: 126
    PresentLoadL,

    /// Present load (high byte)
    ///
    /// protocol 1.0: 41
    /// protocol 2.0: 127
    PresentLoadH,

    /// Present input voltage
    ///
    /// protocol 1.0: 42
    /// protocol 2.0: 144
    PresentVoltage,

    /// Present internal temperature
    ///
    /// protocol 1.0: 43
    /// protocol 2.0: 146
    PresentTemperature,

    /// Set while an instruction registered with REG_WRITE is pending
    ///
    /// protocol 1.0: 44
    /// protocol 2.0: 69
    RegisteredInstruction,

    /// Pause time
    ///
    /// protocol 1.0: 45
    /// protocol 2.0: not present
    PauseTime,

    /// Set while the servo is moving
    ///
    /// protocol 1.0: 46
    /// protocol 2.0: 122
    Moving,

    /// EEPROM lock
    ///
    /// protocol 1.0: 47
    /// protocol 2.0: not present
    Lock,

    /// Minimum current to drive the motor (low byte)
    ///
    /// protocol 1.0: 48
    /// protocol 2.0: not present
    PunchL,

    /// Minimum current to drive the motor (high byte)
    ///
    /// protocol 1.0: 49
    /// protocol 2.0: not present
    PunchH,

    /// Sensed current (low byte). EX-106 only
    ///
    /// protocol 1.0: 56
    /// protocol 2.0: not present
    SensedCurrentL,

    /// Sensed current (high byte). EX-106 only
    ///
    /// protocol 1.0: 57
    /// protocol 2.0: not present
    SensedCurrentH,

    /// Consumed current (low byte). MX-64 and up, in a different unit than the sensed current
    ///
    /// protocol 1.0: 68
    /// protocol 2.0: not present
    CurrentL,

    /// Consumed current (high byte)
    ///
    /// protocol 1.0: 69
    /// protocol 2.0: not present
    CurrentH,

    /// Torque control mode enable
    ///
    /// protocol 1.0: 70
    /// protocol 2.0: not present
    TorqueControlMode,

    /// Goal torque (low byte)
    ///
    /// protocol 1.0: 71
    /// protocol 2.0: not present
    GoalTorqueL,

    /// Goal torque (high byte)
    ///
    /// protocol 1.0: 72
    /// protocol 2.0: not present
    GoalTorqueH,

    /// Goal acceleration
    ///
    /// protocol 1.0: 73
    /// protocol 2.0: not present
    GoalAcceleration,
}

impl RegisterAddress {
    /// Every register, in control table order.
    pub const ALL: [Self; 61] = [
        Self::ModelNumberL,
        Self::ModelNumberH,
        Self::Version,
        Self::Id,
        Self::BaudRate,
        Self::ReturnDelayTime,
        Self::CwAngleLimitL,
        Self::CwAngleLimitH,
        Self::CcwAngleLimitL,
        Self::CcwAngleLimitH,
        Self::DriveMode,
        Self::LimitTemperature,
        Self::DownLimitVoltage,
        Self::UpLimitVoltage,
        Self::MaxTorqueL,
        Self::MaxTorqueH,
        Self::ReturnLevel,
        Self::AlarmLed,
        Self::AlarmShutdown,
        Self::OperatingMode,
        Self::DownCalibrationL,
        Self::DownCalibrationH,
        Self::UpCalibrationL,
        Self::UpCalibrationH,
        Self::TorqueEnable,
        Self::Led,
        Self::CwComplianceMargin,
        Self::CcwComplianceMargin,
        Self::CwComplianceSlope,
        Self::CcwComplianceSlope,
        Self::DGain,
        Self::IGain,
        Self::PGain,
        Self::GoalPositionL,
        Self::GoalPositionH,
        Self::GoalSpeedL,
        Self::GoalSpeedH,
        Self::TorqueLimitL,
        Self::TorqueLimitH,
        Self::PresentPositionL,
        Self::PresentPositionH,
        Self::PresentSpeedL,
        Self::PresentSpeedH,
        Self::PresentLoadL,
        Self::PresentLoadH,
        Self::PresentVoltage,
        Self::PresentTemperature,
        Self::RegisteredInstruction,
        Self::PauseTime,
        Self::Moving,
        Self::Lock,
        Self::PunchL,
        Self::PunchH,
        Self::SensedCurrentL,
        Self::SensedCurrentH,
        Self::CurrentL,
        Self::CurrentH,
        Self::TorqueControlMode,
        Self::GoalTorqueL,
        Self::GoalTorqueH,
        Self::GoalAcceleration,
    ];

    /// The symbol of this register, e.g. `GOAL_POSITION_L`.
    pub fn name(self) -> &'static str {
        match self {
            Self::ModelNumberL => "MODEL_NUMBER_L",
            Self::ModelNumberH => "MODEL_NUMBER_H",
            Self::Version => "VERSION",
            Self::Id => "ID",
            Self::BaudRate => "BAUD_RATE",
            Self::ReturnDelayTime => "RETURN_DELAY_TIME",
            Self::CwAngleLimitL => "CW_ANGLE_LIMIT_L",
            Self::CwAngleLimitH => "CW_ANGLE_LIMIT_H",
            Self::CcwAngleLimitL => "CCW_ANGLE_LIMIT_L",
            Self::CcwAngleLimitH => "CCW_ANGLE_LIMIT_H",
            Self::DriveMode => "DRIVE_MODE",
            Self::LimitTemperature => "LIMIT_TEMPERATURE",
            Self::DownLimitVoltage => "DOWN_LIMIT_VOLTAGE",
            Self::UpLimitVoltage => "UP_LIMIT_VOLTAGE",
            Self::MaxTorqueL => "MAX_TORQUE_L",
            Self::MaxTorqueH => "MAX_TORQUE_H",
            Self::ReturnLevel => "RETURN_LEVEL",
            Self::AlarmLed => "ALARM_LED",
            Self::AlarmShutdown => "ALARM_SHUTDOWN",
            Self::OperatingMode => "OPERATING_MODE",
            Self::DownCalibrationL => "DOWN_CALIBRATION_L",
            Self::DownCalibrationH => "DOWN_CALIBRATION_H",
            Self::UpCalibrationL => "UP_CALIBRATION_L",
            Self::UpCalibrationH => "UP_CALIBRATION_H",
            Self::TorqueEnable => "TORQUE_ENABLE",
            Self::Led => "LED",
            Self::CwComplianceMargin => "CW_COMPLIANCE_MARGIN",
            Self::CcwComplianceMargin => "CCW_COMPLIANCE_MARGIN",
            Self::CwComplianceSlope => "CW_COMPLIANCE_SLOPE",
            Self::CcwComplianceSlope => "CCW_COMPLIANCE_SLOPE",
            Self::DGain => "D_GAIN",
            Self::IGain => "I_GAIN",
            Self::PGain => "P_GAIN",
            Self::GoalPositionL => "GOAL_POSITION_L",
            Self::GoalPositionH => "GOAL_POSITION_H",
            Self::GoalSpeedL => "GOAL_SPEED_L",
            Self::GoalSpeedH => "GOAL_SPEED_H",
            Self::TorqueLimitL => "TORQUE_LIMIT_L",
            Self::TorqueLimitH => "TORQUE_LIMIT_H",
            Self::PresentPositionL => "PRESENT_POSITION_L",
            Self::PresentPositionH => "PRESENT_POSITION_H",
            Self::PresentSpeedL => "PRESENT_SPEED_L",
            Self::PresentSpeedH => "PRESENT_SPEED_H",
            Self::PresentLoadL => "PRESENT_LOAD_L",
            Self::PresentLoadH => "PRESENT_LOAD_H",
            Self::PresentVoltage => "PRESENT_VOLTAGE",
            Self::PresentTemperature => "PRESENT_TEMPERATURE",
            Self::RegisteredInstruction => "REGISTERED_INSTRUCTION",
            Self::PauseTime => "PAUSE_TIME",
            Self::Moving => "MOVING",
            Self::Lock => "LOCK",
            Self::PunchL => "PUNCH_L",
            Self::PunchH => "PUNCH_H",
            Self::SensedCurrentL => "SENSED_CURRENT_L",
            Self::SensedCurrentH => "SENSED_CURRENT_H",
            Self::CurrentL => "CURRENT_L",
            Self::CurrentH => "CURRENT_H",
            Self::TorqueControlMode => "TORQUE_CONTROL_MODE",
            Self::GoalTorqueL => "GOAL_TORQUE_L",
            Self::GoalTorqueH => "GOAL_TORQUE_H",
            Self::GoalAcceleration => "GOAL_ACCELERATION",
        }
    }

    /// Byte offset on protocol 1.0, or `None` if the register doesn't exist there.
    pub fn protocol_1_address(self) -> Option<u8> {
        match self {
            Self::ModelNumberL => Some(0),
            Self::ModelNumberH => Some(1),
            Self::Version => Some(2),
            Self::Id => Some(3),
            Self::BaudRate => Some(4),
            Self::ReturnDelayTime => Some(5),
            Self::CwAngleLimitL => Some(6),
            Self::CwAngleLimitH => Some(7),
            Self::CcwAngleLimitL => Some(8),
            Self::CcwAngleLimitH => Some(9),
            Self::DriveMode => Some(10),
            Self::LimitTemperature => Some(11),
            Self::DownLimitVoltage => Some(12),
            Self::UpLimitVoltage => Some(13),
            Self::MaxTorqueL => Some(14),
            Self::MaxTorqueH => Some(15),
            Self::ReturnLevel => Some(16),
            Self::AlarmLed => Some(17),
            Self::AlarmShutdown => Some(18),
            Self::OperatingMode => None,
            Self::DownCalibrationL => Some(20),
            Self::DownCalibrationH => Some(21),
            Self::UpCalibrationL => Some(22),
            Self::UpCalibrationH => Some(23),
            Self::TorqueEnable => Some(24),
            Self::Led => Some(25),
            Self::CwComplianceMargin => Some(26),
            Self::CcwComplianceMargin => Some(27),
            Self::CwComplianceSlope => Some(28),
            Self::CcwComplianceSlope => Some(29),
            Self::DGain => Some(26),
            Self::IGain => Some(27),
            Self::PGain => Some(28),
            Self::GoalPositionL => Some(30),
            Self::GoalPositionH => Some(31),
            Self::GoalSpeedL => Some(32),
            Self::GoalSpeedH => Some(33),
            Self::TorqueLimitL => Some(34),
            Self::TorqueLimitH => Some(35),
            Self::PresentPositionL => Some(36),
            Self::PresentPositionH => Some(37),
            Self::PresentSpeedL => Some(38),
            Self::PresentSpeedH => Some(39),
            Self::PresentLoadL => Some(40),
            Self::PresentLoadH => Some(41),
            Self::PresentVoltage => Some(42),
            Self::PresentTemperature => Some(43),
            Self::RegisteredInstruction => Some(44),
            Self::PauseTime => Some(45),
            Self::Moving => Some(46),
            Self::Lock => Some(47),
            Self::PunchL => Some(48),
            Self::PunchH => Some(49),
            Self::SensedCurrentL => Some(56),
            Self::SensedCurrentH => Some(57),
            Self::CurrentL => Some(68),
            Self::CurrentH => Some(69),
            Self::TorqueControlMode => Some(70),
            Self::GoalTorqueL => Some(71),
            Self::GoalTorqueH => Some(72),
            Self::GoalAcceleration => Some(73),
        }
    }

    /// Byte offset on protocol 2.0, or `None` if the register doesn't exist there.
    pub fn protocol_2_address(self) -> Option<u8> {
        match self {
            Self::ModelNumberL => Some(0),
            Self::ModelNumberH => Some(1),
            Self::Version => Some(6),
            Self::Id => Some(7),
            Self::BaudRate => Some(8),
            Self::ReturnDelayTime => Some(9),
            Self::CwAngleLimitL => None,
            Self::CwAngleLimitH => None,
            Self::CcwAngleLimitL => None,
            Self::CcwAngleLimitH => None,
            Self::DriveMode => Some(10),
            Self::LimitTemperature => Some(31),
            Self::DownLimitVoltage => Some(34),
            Self::UpLimitVoltage => Some(32),
            Self::MaxTorqueL => None,
            Self::MaxTorqueH => None,
            Self::ReturnLevel => Some(68),
            Self::AlarmLed => None,
            Self::AlarmShutdown => None,
            Self::OperatingMode => Some(11),
            Self::DownCalibrationL => None,
            Self::DownCalibrationH => None,
            Self::UpCalibrationL => None,
            Self::UpCalibrationH => None,
            Self::TorqueEnable => Some(64),
            Self::Led => Some(65),
            Self::CwComplianceMargin => None,
            Self::CcwComplianceMargin => None,
            Self::CwComplianceSlope => None,
            Self::CcwComplianceSlope => None,
            Self::DGain => Some(80),
            Self::IGain => Some(82),
            Self::PGain => Some(84),
            Self::GoalPositionL => Some(116),
            Self::GoalPositionH => Some(117),
            Self::GoalSpeedL => Some(104),
            Self::GoalSpeedH => Some(105),
            Self::TorqueLimitL => None,
            Self::TorqueLimitH => None,
            Self::PresentPositionL => Some(132),
            Self::PresentPositionH => Some(133),
            Self::PresentSpeedL => Some(128),
            Self::PresentSpeedH => Some(129),
            Self::PresentLoadL => Some(126),
            Self::PresentLoadH => Some(127),
            Self::PresentVoltage => Some(144),
            Self::PresentTemperature => Some(146),
            Self::RegisteredInstruction => Some(69),
            Self::PauseTime => None,
            Self::Moving => Some(122),
            Self::Lock => None,
            Self::PunchL => None,
            Self::PunchH => None,
            Self::SensedCurrentL => None,
            Self::SensedCurrentH => None,
            Self::CurrentL => None,
            Self::CurrentH => None,
            Self::TorqueControlMode => None,
            Self::GoalTorqueL => None,
            Self::GoalTorqueH => None,
            Self::GoalAcceleration => None,
        }
    }

    /// For the low byte of a two-byte register, the matching high byte.
    pub fn high_byte(self) -> Option<Self> {
        match self {
            Self::ModelNumberL => Some(Self::ModelNumberH),
            Self::ModelNumberH => None,
            Self::Version => None,
            Self::Id => None,
            Self::BaudRate => None,
            Self::ReturnDelayTime => None,
            Self::CwAngleLimitL => Some(Self::CwAngleLimitH),
            Self::CwAngleLimitH => None,
            Self::CcwAngleLimitL => Some(Self::CcwAngleLimitH),
            Self::CcwAngleLimitH => None,
            Self::DriveMode => None,
            Self::LimitTemperature => None,
            Self::DownLimitVoltage => None,
            Self::UpLimitVoltage => None,
            Self::MaxTorqueL => Some(Self::MaxTorqueH),
            Self::MaxTorqueH => None,
            Self::ReturnLevel => None,
            Self::AlarmLed => None,
            Self::AlarmShutdown => None,
            Self::OperatingMode => None,
            Self::DownCalibrationL => Some(Self::DownCalibrationH),
            Self::DownCalibrationH => None,
            Self::UpCalibrationL => Some(Self::UpCalibrationH),
            Self::UpCalibrationH => None,
            Self::TorqueEnable => None,
            Self::Led => None,
            Self::CwComplianceMargin => None,
            Self::CcwComplianceMargin => None,
            Self::CwComplianceSlope => None,
            Self::CcwComplianceSlope => None,
            Self::DGain => None,
            Self::IGain => None,
            Self::PGain => None,
            Self::GoalPositionL => Some(Self::GoalPositionH),
            Self::GoalPositionH => None,
            Self::GoalSpeedL => Some(Self::GoalSpeedH),
            Self::GoalSpeedH => None,
            Self::TorqueLimitL => Some(Self::TorqueLimitH),
            Self::TorqueLimitH => None,
            Self::PresentPositionL => Some(Self::PresentPositionH),
            Self::PresentPositionH => None,
            Self::PresentSpeedL => Some(Self::PresentSpeedH),
            Self::PresentSpeedH => None,
            Self::PresentLoadL => Some(Self::PresentLoadH),
            Self::PresentLoadH => None,
            Self::PresentVoltage => None,
            Self::PresentTemperature => None,
            Self::RegisteredInstruction => None,
            Self::PauseTime => None,
            Self::Moving => None,
            Self::Lock => None,
            Self::PunchL => Some(Self::PunchH),
            Self::PunchH => None,
            Self::SensedCurrentL => Some(Self::SensedCurrentH),
            Self::SensedCurrentH => None,
            Self::CurrentL => Some(Self::CurrentH),
            Self::CurrentH => None,
            Self::TorqueControlMode => None,
            Self::GoalTorqueL => Some(Self::GoalTorqueH),
            Self::GoalTorqueH => None,
            Self::GoalAcceleration => None,
        }
    }

    /// For the high byte of a two-byte register, the matching low byte.
    pub fn low_byte(self) -> Option<Self> {
        match self {
            Self::ModelNumberL => None,
            Self::ModelNumberH => Some(Self::ModelNumberL),
            Self::Version => None,
            Self::Id => None,
            Self::BaudRate => None,
            Self::ReturnDelayTime => None,
            Self::CwAngleLimitL => None,
            Self::CwAngleLimitH => Some(Self::CwAngleLimitL),
            Self::CcwAngleLimitL => None,
            Self::CcwAngleLimitH => Some(Self::CcwAngleLimitL),
            Self::DriveMode => None,
            Self::LimitTemperature => None,
            Self::DownLimitVoltage => None,
            Self::UpLimitVoltage => None,
            Self::MaxTorqueL => None,
            Self::MaxTorqueH => Some(Self::MaxTorqueL),
            Self::ReturnLevel => None,
            Self::AlarmLed => None,
            Self::AlarmShutdown => None,
            Self::OperatingMode => None,
            Self::DownCalibrationL => None,
            Self::DownCalibrationH => Some(Self::DownCalibrationL),
            Self::UpCalibrationL => None,
            Self::UpCalibrationH => Some(Self::UpCalibrationL),
            Self::TorqueEnable => None,
            Self::Led => None,
            Self::CwComplianceMargin => None,
            Self::CcwComplianceMargin => None,
            Self::CwComplianceSlope => None,
            Self::CcwComplianceSlope => None,
            Self::DGain => None,
            Self::IGain => None,
            Self::PGain => None,
            Self::GoalPositionL => None,
            Self::GoalPositionH => Some(Self::GoalPositionL),
            Self::GoalSpeedL => None,
            Self::GoalSpeedH => Some(Self::GoalSpeedL),
            Self::TorqueLimitL => None,
            Self::TorqueLimitH => Some(Self::TorqueLimitL),
            Self::PresentPositionL => None,
            Self::PresentPositionH => Some(Self::PresentPositionL),
            Self::PresentSpeedL => None,
            Self::PresentSpeedH => Some(Self::PresentSpeedL),
            Self::PresentLoadL => None,
            Self::PresentLoadH => Some(Self::PresentLoadL),
            Self::PresentVoltage => None,
            Self::PresentTemperature => None,
            Self::RegisteredInstruction => None,
            Self::PauseTime => None,
            Self::Moving => None,
            Self::Lock => None,
            Self::PunchL => None,
            Self::PunchH => Some(Self::PunchL),
            Self::SensedCurrentL => None,
            Self::SensedCurrentH => Some(Self::SensedCurrentL),
            Self::CurrentL => None,
            Self::CurrentH => Some(Self::CurrentL),
            Self::TorqueControlMode => None,
            Self::GoalTorqueL => None,
            Self::GoalTorqueH => Some(Self::GoalTorqueL),
            Self::GoalAcceleration => None,
        }
    }
}
