//! The execution context a native callback receives.

use string_cache::DefaultAtom;

use crate::opcode::Opcode;
use crate::value::ScriptValue;

/**
  Everything a callback gets to see of the instruction it implements: the opcode, the operands
  the interpreter decoded for it, and the interpreter's state `S`, borrowed mutably for the
  duration of the call.

  The operand count has already been checked against the entry's argument count by the time a
  callback runs, so indexing below `len()` is safe to rely on. Operand kinds are not checked.
*/
pub struct ScriptArguments<'a, S> {
  opcode   : Opcode,
  operands : &'a [ScriptValue],
  state    : &'a mut S,
}

impl<'a, S> ScriptArguments<'a, S> {
  pub fn new(opcode: Opcode, operands: &'a [ScriptValue], state: &'a mut S) -> ScriptArguments<'a, S> {
    ScriptArguments {
      opcode,
      operands,
      state
    }
  }

  pub fn opcode(&self) -> Opcode {
    self.opcode
  }

  pub fn len(&self) -> usize {
    self.operands.len()
  }

  pub fn is_empty(&self) -> bool {
    self.operands.is_empty()
  }

  pub fn operands(&self) -> &[ScriptValue] {
    self.operands
  }

  pub fn operand(&self, index: usize) -> Option<&ScriptValue> {
    self.operands.get(index)
  }

  pub fn integer(&self, index: usize) -> Option<i32> {
    self.operand(index).and_then(ScriptValue::as_integer)
  }

  pub fn float(&self, index: usize) -> Option<f32> {
    self.operand(index).and_then(ScriptValue::as_float)
  }

  pub fn text(&self, index: usize) -> Option<&DefaultAtom> {
    self.operand(index).and_then(ScriptValue::as_text)
  }

  pub fn state(&self) -> &S {
    &*self.state
  }

  pub fn state_mut(&mut self) -> &mut S {
    &mut *self.state
  }
}
