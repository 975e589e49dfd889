/*!
  Native callback shapes.

  The interpreter supports a closed set of calling conventions for native functions. Each one is
  a variant of `ScriptCallback`, and which variant a callback lands in is decided by the
  constructor the caller picks, i.e. by the callback's signature at compile time. A function with
  any other signature has no constructor to go through and is rejected by the compiler, so there
  is never a shape to inspect or convert at call time.

  Callbacks are stored behind an `Arc` so that a populated `Module` can be shared between
  interpreter threads without copying its table.
*/

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use strum_macros::{Display as StrumDisplay, EnumString, IntoStaticStr};

use crate::arguments::ScriptArguments;

/// A callback run for its side effects, e.g. setting the time of day.
pub type ScriptFunction<S> = Arc<dyn Fn(&mut ScriptArguments<'_, S>) + Send + Sync>;
/// A callback answering the question asked by a conditional opcode, e.g. "is it raining".
pub type ScriptPredicate<S> = Arc<dyn Fn(&mut ScriptArguments<'_, S>) -> bool + Send + Sync>;

/// The tag of a `ScriptCallback`, for listings and tooling.
#[derive(
  StrumDisplay, IntoStaticStr, EnumString,
  Clone,        Copy,          Eq,  PartialEq, Debug, Hash
)]
pub enum CallbackShape {
  Effect,
  Predicate,
}

pub enum ScriptCallback<S> {
  Effect(ScriptFunction<S>),
  Predicate(ScriptPredicate<S>),
}

/// What a callback handed back. The interpreter uses `Condition` to set its branch flag.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum CallResult {
  Done,
  Condition(bool),
}

impl CallResult {
  pub fn as_condition(&self) -> Option<bool> {
    match self {
      CallResult::Condition(value) => Some(*value),
      CallResult::Done => None
    }
  }
}

impl<S> ScriptCallback<S> {
  pub fn effect<F>(function: F) -> ScriptCallback<S>
    where F: Fn(&mut ScriptArguments<'_, S>) + Send + Sync + 'static
  {
    ScriptCallback::Effect(Arc::new(function))
  }

  pub fn predicate<F>(function: F) -> ScriptCallback<S>
    where F: Fn(&mut ScriptArguments<'_, S>) -> bool + Send + Sync + 'static
  {
    ScriptCallback::Predicate(Arc::new(function))
  }

  pub fn shape(&self) -> CallbackShape {
    match self {
      ScriptCallback::Effect(_)    => CallbackShape::Effect,
      ScriptCallback::Predicate(_) => CallbackShape::Predicate,
    }
  }

  /// Calls the wrapped function with the convention its tag names.
  pub fn invoke(&self, arguments: &mut ScriptArguments<'_, S>) -> CallResult {
    match self {
      ScriptCallback::Effect(function) => {
        function(arguments);
        CallResult::Done
      }
      ScriptCallback::Predicate(function) => {
        CallResult::Condition(function(arguments))
      }
    }
  }
}

// Derived `Clone` would demand `S: Clone`, but only the `Arc` is cloned.
impl<S> Clone for ScriptCallback<S> {
  fn clone(&self) -> ScriptCallback<S> {
    match self {
      ScriptCallback::Effect(function)    => ScriptCallback::Effect(Arc::clone(function)),
      ScriptCallback::Predicate(function) => ScriptCallback::Predicate(Arc::clone(function)),
    }
  }
}

impl<S> Debug for ScriptCallback<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "ScriptCallback::{}", self.shape())
  }
}
