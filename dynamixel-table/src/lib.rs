#![cfg_attr(not(feature = "std"), no_std)]

//! Static knowledge about Dynamixel serial bus servos: where each register lives in the control
//! table, the instruction opcodes, the bits of the status packet's error byte, and the physical
//! constants of each known model.
//!
//! There is no I/O in here. Building packets, checksums and talking to the bus is up to the
//! driver that uses these tables.

mod control_table;
mod error;
mod instruction;
pub mod limits;
mod models;
pub mod registers;
mod status;
pub mod units;

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

pub use control_table::ControlTable;
pub use error::RegistryError;
pub use instruction::Instruction;
pub use models::{model_parameters, supports_feature, validate_models, ModelParameters, MODELS};
pub use registers::RegisterAddress;
pub use status::{error_flags, ErrorFlag, StatusErrors};

/// ID No. 254 is the broadcast ID. Servos never reply to a broadcast.
pub const BROADCAST_ID: u8 = 254;

/// Any byte that can go in the ID field of an instruction packet, including the broadcast ID.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ServoIdOrBroadcast(pub u8);

impl ServoIdOrBroadcast {
    pub const BROADCAST: Self = Self(BROADCAST_ID);

    pub fn is_broadcast(self) -> bool {
        self.0 == BROADCAST_ID
    }
}

impl From<ServoId> for ServoIdOrBroadcast {
    fn from(id: ServoId) -> Self {
        Self(id.0)
    }
}

/// The ID of a single servo on the bus.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ServoId(u8);

impl ServoId {
    pub const fn new(id: u8) -> Option<Self> {
        if id >= BROADCAST_ID {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Display for ServoId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which instructions a servo answers with a status packet.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum StatusReturnLevel {
    /// Only PING gets a reply.
    None = 0,
    /// PING and READ_DATA get a reply.
    Read = 1,
    /// Every instruction gets a reply.
    All = 2,
}

impl StatusReturnLevel {
    pub fn parse(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::None),
            1 => Some(Self::Read),
            2 => Some(Self::All),
            _ => None,
        }
    }

    /// Whether a servo at this level replies to `instruction` sent to its own ID.
    pub fn replies_to(self, instruction: Instruction) -> bool {
        match self {
            Self::None => instruction == Instruction::Ping,
            Self::Read => matches!(instruction, Instruction::Ping | Instruction::ReadData),
            Self::All => true,
        }
    }
}

/// Revision of the Dynamixel protocol, which decides the layout of the control table.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ProtocolRevision {
    /// Protocol 1.0: AX, RX, EX and MX series.
    V1,
    /// Protocol 2.0: X series, e.g. the XL430.
    #[default]
    V2,
}

impl Display for ProtocolRevision {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("protocol 1.0"),
            Self::V2 => f.write_str("protocol 2.0"),
        }
    }
}

impl FromStr for ProtocolRevision {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "1.0" => Ok(Self::V1),
            "2" | "2.0" => Ok(Self::V2),
            _ => Err(RegistryError::UnknownProtocolRevision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Most users will create a bunch of static constants like this, so they never need an
    // unwrap() that can panic at runtime.
    const TEST_SERVO_ID: ServoId = match ServoId::new(1) {
        Some(id) => id,
        None => panic!("invalid servo id"),
    };

    #[test]
    fn comparing_const_to_dynamic() {
        assert_eq!(Some(TEST_SERVO_ID), ServoId::new(1));
    }

    #[test]
    fn broadcast_is_not_a_servo_id() {
        assert_eq!(ServoId::new(BROADCAST_ID), None);
        assert_eq!(ServoId::new(255), None);
        assert_eq!(ServoId::new(253).map(ServoId::get), Some(253));
        assert!(ServoIdOrBroadcast::BROADCAST.is_broadcast());
        assert!(!ServoIdOrBroadcast::from(TEST_SERVO_ID).is_broadcast());
    }

    #[test]
    fn status_return_level() {
        assert_eq!(StatusReturnLevel::parse(1), Some(StatusReturnLevel::Read));
        assert_eq!(StatusReturnLevel::parse(3), None);
        assert!(StatusReturnLevel::None.replies_to(Instruction::Ping));
        assert!(!StatusReturnLevel::None.replies_to(Instruction::ReadData));
        assert!(StatusReturnLevel::Read.replies_to(Instruction::ReadData));
        assert!(!StatusReturnLevel::Read.replies_to(Instruction::WriteData));
        assert!(StatusReturnLevel::All.replies_to(Instruction::SyncWrite));
    }

    #[test]
    fn protocol_revision() {
        assert_eq!(ProtocolRevision::default(), ProtocolRevision::V2);
        assert_eq!("1.0".parse::<ProtocolRevision>(), Ok(ProtocolRevision::V1));
        assert_eq!("2".parse::<ProtocolRevision>(), Ok(ProtocolRevision::V2));
        assert_eq!(
            "3.0".parse::<ProtocolRevision>(),
            Err(RegistryError::UnknownProtocolRevision)
        );
    }
}
