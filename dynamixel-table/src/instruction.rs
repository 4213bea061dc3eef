use crate::RegistryError;
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

/// The instruction byte of an instruction packet.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Instruction {
    /// Ask a servo to reply with a status packet.
    Ping = 0x01,
    /// Read a block of the control table.
    ReadData = 0x02,
    /// Write a block of the control table.
    WriteData = 0x03,
    /// Like `WriteData`, but held back until an `Action` arrives.
    RegWrite = 0x04,
    /// Apply the writes registered with `RegWrite`.
    Action = 0x05,
    /// Restore the factory defaults of the control table.
    Reset = 0x06,
    /// Write the same block of the control table on several servos at once.
    SyncWrite = 0x83,
}

impl Instruction {
    pub const ALL: [Self; 7] = [
        Self::Ping,
        Self::ReadData,
        Self::WriteData,
        Self::RegWrite,
        Self::Action,
        Self::Reset,
        Self::SyncWrite,
    ];

    pub fn opcode(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ping => "PING",
            Self::ReadData => "READ_DATA",
            Self::WriteData => "WRITE_DATA",
            Self::RegWrite => "REG_WRITE",
            Self::Action => "ACTION",
            Self::Reset => "RESET",
            Self::SyncWrite => "SYNC_WRITE",
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Instruction {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|instruction| instruction.name() == s)
            .ok_or(RegistryError::UnknownInstruction)
    }
}

impl TryFrom<u8> for Instruction {
    type Error = RegistryError;

    fn try_from(opcode: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|instruction| instruction.opcode() == opcode)
            .ok_or(RegistryError::InvalidOpcode(opcode))
    }
}

impl From<Instruction> for u8 {
    fn from(instruction: Instruction) -> Self {
        instruction.opcode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Instruction::Ping, 1)]
    #[test_case(Instruction::ReadData, 2)]
    #[test_case(Instruction::WriteData, 3)]
    #[test_case(Instruction::RegWrite, 4)]
    #[test_case(Instruction::Action, 5)]
    #[test_case(Instruction::Reset, 6)]
    #[test_case(Instruction::SyncWrite, 131)]
    fn opcodes(instruction: Instruction, opcode: u8) {
        assert_eq!(instruction.opcode(), opcode);
        assert_eq!(Instruction::try_from(opcode), Ok(instruction));
        assert_eq!(instruction.name().parse::<Instruction>(), Ok(instruction));
    }

    #[test]
    fn unknown_opcode() {
        assert_eq!(Instruction::try_from(0), Err(RegistryError::InvalidOpcode(0)));
        assert_eq!(
            Instruction::try_from(0x82),
            Err(RegistryError::InvalidOpcode(0x82))
        );
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            "SYNC_READ".parse::<Instruction>(),
            Err(RegistryError::UnknownInstruction)
        );
    }
}
