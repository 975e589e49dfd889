use string_cache::DefaultAtom;
use thiserror::Error;

use crate::opcode::Opcode;

/// Configuration errors raised while opcode tables are being built. None of these should ever
/// survive startup.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum BindError {
  #[error("opcode {opcode} is already bound in module `{module}`")]
  DuplicateOpcode {
    module: DefaultAtom,
    opcode: Opcode
  },
  #[error("a module named `{0}` is already installed")]
  DuplicateModule(DefaultAtom),
  #[error("opcode {opcode} of module `{incoming}` is already provided by module `{installed}`")]
  OpcodeConflict {
    opcode: Opcode,
    installed: DefaultAtom,
    incoming: DefaultAtom
  },
}

/// Reasons an interpreter step could not invoke a callback.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DispatchError {
  #[error("unknown opcode {0}")]
  UnknownOpcode(Opcode),
  #[error("opcode {opcode} expects {expected} operands but {given} were decoded")]
  ArgumentCount {
    opcode: Opcode,
    expected: usize,
    given: usize
  },
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum OpcodeParseError {
  #[error("`{0}` is not an opcode")]
  Malformed(String),
  #[error("`{0}` does not fit in a 16 bit opcode")]
  OutOfRange(String),
}
