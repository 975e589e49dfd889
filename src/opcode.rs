//! The dispatch key. Script bytecode identifies each instruction by a 16 bit opcode, which is
//! all a `Module` needs to know about an instruction to find its native callback.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::OpcodeParseError;

pub type OpcodeType = u16;

/// A 16 bit script opcode. Ordering is numeric, which is the order opcode listings use.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Opcode(pub OpcodeType);

impl Opcode {
  pub fn code(&self) -> OpcodeType {
    self.0
  }
}

impl From<OpcodeType> for Opcode {
  fn from(code: OpcodeType) -> Opcode {
    Opcode(code)
  }
}

impl From<Opcode> for OpcodeType {
  fn from(opcode: Opcode) -> OpcodeType {
    opcode.0
  }
}

impl Display for Opcode {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "0x{:04X}", self.0)
  }
}

/**
  Accepts either a `0x` prefixed hexadecimal opcode, the form opcode references are written in,
  or a plain decimal number.
*/
impl FromStr for Opcode {
  type Err = OpcodeParseError;

  fn from_str(text: &str) -> Result<Opcode, OpcodeParseError> {
    let trimmed = text.trim();
    let (digits, radix) =
      match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None      => (trimmed, 10)
      };

    // `from_str_radix` tolerates a sign; opcodes are written without one.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
      return Err(OpcodeParseError::Malformed(trimmed.to_string()));
    }

    // Only digits are left, so the one way to fail is overflow.
    OpcodeType::from_str_radix(digits, radix)
      .map(Opcode)
      .map_err(|_| OpcodeParseError::OutOfRange(trimmed.to_string()))
  }
}
