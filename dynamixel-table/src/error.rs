#[derive(displaydoc::Display, Debug, Copy, Clone, Eq, PartialEq)]
pub enum RegistryError {
    /// unknown register name
    UnknownRegister,
    /// unknown instruction name
    UnknownInstruction,
    /// got an invalid instruction opcode: `{0}`
    InvalidOpcode(u8),
    /// unknown protocol revision
    UnknownProtocolRevision,
    /// unknown model number: `{0}`
    UnknownModel(u16),
    /// model `{0}` is listed more than once
    DuplicateModel(u16),
    /// model `{model}` has invalid parameters: {reason}
    InvalidParameters { model: u16, reason: &'static str },
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}
