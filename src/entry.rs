use std::fmt::{Debug, Formatter};

use string_cache::DefaultAtom;

use crate::arguments::ScriptArguments;
use crate::callback::{CallResult, CallbackShape, ScriptCallback};

/**
  The record stored for one bound opcode. Both halves are fixed when the entry is built, and
  entries are only built whole by `Module::bind`, so a lookup never sees a partial entry.
*/
pub struct FunctionEntry<S> {
  argument_count : usize,
  callback       : ScriptCallback<S>,
  /// Name shown in opcode listings, if the binder gave one.
  mnemonic       : Option<DefaultAtom>,
}

impl<S> FunctionEntry<S> {
  pub(crate) fn new(
    argument_count: usize,
    callback: ScriptCallback<S>,
    mnemonic: Option<DefaultAtom>
  ) -> FunctionEntry<S> {
    FunctionEntry {
      argument_count,
      callback,
      mnemonic
    }
  }

  /// The number of operands the interpreter decodes before calling this entry.
  pub fn argument_count(&self) -> usize {
    self.argument_count
  }

  pub fn callback(&self) -> &ScriptCallback<S> {
    &self.callback
  }

  pub fn shape(&self) -> CallbackShape {
    self.callback.shape()
  }

  pub fn mnemonic(&self) -> Option<&DefaultAtom> {
    self.mnemonic.as_ref()
  }

  pub fn accepts(&self, operand_count: usize) -> bool {
    operand_count == self.argument_count
  }

  pub fn call(&self, arguments: &mut ScriptArguments<'_, S>) -> CallResult {
    self.callback.invoke(arguments)
  }
}

// Written out so that neither impl requires anything of `S`.
impl<S> Clone for FunctionEntry<S> {
  fn clone(&self) -> FunctionEntry<S> {
    FunctionEntry {
      argument_count : self.argument_count,
      callback       : self.callback.clone(),
      mnemonic       : self.mnemonic.clone(),
    }
  }
}

impl<S> Debug for FunctionEntry<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FunctionEntry")
      .field("argument_count", &self.argument_count)
      .field("shape", &self.shape())
      .field("mnemonic", &self.mnemonic)
      .finish()
  }
}
