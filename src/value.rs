//! Decoded instruction operands.

use std::fmt::{Display, Formatter};

use string_cache::DefaultAtom;

/**
  One operand as the interpreter decoded it from the bytecode stream. Variables are carried as
  their slot numbers; reading or writing the slot is the callback's business, through the state
  it is handed in `ScriptArguments`.

  The accessors never convert between kinds. Asking an `Integer` for a float gives `None`.
*/
#[derive(Clone, PartialEq, Debug)]
pub enum ScriptValue {
  Integer(i32),
  Float(f32),
  /// Interned, like every other string in this codebase.
  Text(DefaultAtom),
  /// Index of a global variable slot.
  Global(u16),
  /// Index of a variable slot local to the running script.
  Local(u16),
}

impl ScriptValue {
  pub fn as_integer(&self) -> Option<i32> {
    match self {
      ScriptValue::Integer(value) => Some(*value),
      _ => None
    }
  }

  pub fn as_float(&self) -> Option<f32> {
    match self {
      ScriptValue::Float(value) => Some(*value),
      _ => None
    }
  }

  pub fn as_text(&self) -> Option<&DefaultAtom> {
    match self {
      ScriptValue::Text(text) => Some(text),
      _ => None
    }
  }

  pub fn is_variable(&self) -> bool {
    match self {
      ScriptValue::Global(_) | ScriptValue::Local(_) => true,
      _ => false
    }
  }
}

impl Display for ScriptValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      ScriptValue::Integer(value) => write!(f, "{}", value),
      ScriptValue::Float(value)   => write!(f, "{:?}", value),
      ScriptValue::Text(text)     => write!(f, "\"{}\"", text),
      ScriptValue::Global(slot)   => write!(f, "$G[{}]", slot),
      ScriptValue::Local(slot)    => write!(f, "$L[{}]", slot),
    }
  }
}

impl From<i32> for ScriptValue {
  fn from(value: i32) -> ScriptValue {
    ScriptValue::Integer(value)
  }
}

impl From<f32> for ScriptValue {
  fn from(value: f32) -> ScriptValue {
    ScriptValue::Float(value)
  }
}

impl From<&str> for ScriptValue {
  fn from(text: &str) -> ScriptValue {
    ScriptValue::Text(DefaultAtom::from(text))
  }
}
