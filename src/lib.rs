/*!
  Opcode dispatch for script bytecode.

  Game scripts are compiled to a stream of instructions, each identified by a 16 bit opcode.
  The interpreter executing them does not know what any opcode means. Native functions are
  bound to opcodes in `Module`s while the engine starts up, and for every instruction the
  interpreter looks up the opcode it decoded, checks that it decoded the number of operands the
  binding expects, and calls the bound function.

  ```text
  startup:   Module::new("Environment") -> bind(opcode, argc, callback) ... -> ModuleSet::install
  execution: decode opcode + operands -> lookup(opcode) -> accepts(operand count) -> call
  ```
*/

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

pub mod arguments;
pub mod callback;
pub mod entry;
pub mod error;
pub mod module;
pub mod moduleset;
pub mod opcode;
pub mod value;

#[cfg(test)]
mod callback_test;

pub use arguments::ScriptArguments;
pub use callback::{CallResult, CallbackShape, ScriptCallback, ScriptFunction, ScriptPredicate};
pub use entry::FunctionEntry;
pub use error::{BindError, DispatchError, OpcodeParseError};
pub use module::{Module, OpcodeDescriptor};
pub use moduleset::{ModuleSet, SharedModuleSet};
pub use opcode::{Opcode, OpcodeType};
pub use value::ScriptValue;
