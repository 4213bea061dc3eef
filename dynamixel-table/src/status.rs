use bitflags::bitflags;
use core::fmt::{self, Display, Formatter};

bitflags! {
    /// The error byte of a status packet. Zero means no error.
    pub struct StatusErrors: u8 {
        const INPUT_VOLTAGE = 1;
        const ANGLE_LIMIT = 2;
        const OVERHEATING = 4;
        const RANGE = 8;
        const CHECKSUM = 16;
        const OVERLOAD = 32;
        // XL series report this one differently.
        const INSTRUCTION = 64;
    }
}

/// Decodes the error byte of a status packet.
///
/// Bits that aren't defined here are dropped, so newer firmware that reports more errors doesn't
/// make this fail.
pub fn error_flags(byte: u8) -> StatusErrors {
    StatusErrors::from_bits_truncate(byte)
}

impl StatusErrors {
    /// The individual errors that are set, lowest bit first.
    pub fn flags(self) -> impl Iterator<Item = ErrorFlag> {
        ErrorFlag::ALL
            .into_iter()
            .filter(move |&flag| self.contains(flag.into()))
    }
}

/// A single bit of `StatusErrors`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ErrorFlag {
    /// Input voltage is outside the limits in the control table.
    InputVoltage = 1,
    /// Goal position is outside the angle limits.
    AngleLimit = 2,
    /// Internal temperature is above the temperature limit.
    Overheating = 4,
    /// A parameter of the instruction is out of range.
    Range = 8,
    /// The checksum of the instruction packet is wrong.
    Checksum = 16,
    /// The load can't be driven with the configured maximum torque.
    Overload = 32,
    /// Unknown instruction, or ACTION without a registered instruction.
    Instruction = 64,
}

impl ErrorFlag {
    pub const ALL: [Self; 7] = [
        Self::InputVoltage,
        Self::AngleLimit,
        Self::Overheating,
        Self::Range,
        Self::Checksum,
        Self::Overload,
        Self::Instruction,
    ];

    pub fn bit(self) -> u8 {
        self as u8
    }
}

impl From<ErrorFlag> for StatusErrors {
    fn from(flag: ErrorFlag) -> Self {
        Self::from_bits_truncate(flag.bit())
    }
}

impl Display for ErrorFlag {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let message = match self {
            Self::InputVoltage => "input voltage error",
            Self::AngleLimit => "angle limit error",
            Self::Overheating => "overheating",
            Self::Range => "range error",
            Self::Checksum => "checksum error",
            Self::Overload => "overload",
            Self::Instruction => "instruction error",
        };
        f.write_str(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_error() {
        assert!(error_flags(0).is_empty());
        assert_eq!(error_flags(0).flags().count(), 0);
    }

    #[test]
    fn single_bits() {
        for flag in ErrorFlag::ALL {
            assert_eq!(flag.bit().count_ones(), 1);
            assert_eq!(error_flags(flag.bit()), StatusErrors::from(flag));
            assert!(error_flags(flag.bit()).flags().eq([flag]));
        }
    }

    #[test]
    fn pairs_of_bits_decompose() {
        for (index, &first) in ErrorFlag::ALL.iter().enumerate() {
            for &second in &ErrorFlag::ALL[index + 1..] {
                let errors = error_flags(first.bit() | second.bit());
                assert!(errors.flags().eq([first, second]));
            }
        }
    }

    #[test]
    fn undefined_bits_are_ignored() {
        assert!(error_flags(0x80).is_empty());
        assert_eq!(error_flags(0xff), StatusErrors::all());
        assert_eq!(
            error_flags(0x80 | 0x20),
            StatusErrors::OVERLOAD,
            "bit 7 is not defined"
        );
    }

    #[test]
    fn flags_match_bitflags_constants() {
        assert_eq!(
            StatusErrors::from(ErrorFlag::InputVoltage),
            StatusErrors::INPUT_VOLTAGE
        );
        assert_eq!(
            StatusErrors::from(ErrorFlag::Instruction),
            StatusErrors::INSTRUCTION
        );
        assert_eq!(ErrorFlag::ALL.len(), StatusErrors::all().bits().count_ones() as usize);
    }
}
