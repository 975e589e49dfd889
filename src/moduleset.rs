/*!
  The modules an interpreter executes against.

  A script's opcodes are spread over several modules. A `ModuleSet` gathers them and keeps an
  index from each opcode to the one module that provides it, so resolving an instruction costs a
  single hash lookup however many modules are installed. Two modules providing the same opcode
  would make that mapping ambiguous and is refused at install time.

  Sets are built during startup and then shared read-only. To change the bindings of a running
  engine, build a complete new set and publish it through a `SharedModuleSet`.
*/

use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;

use crate::arguments::ScriptArguments;
use crate::callback::CallResult;
use crate::entry::FunctionEntry;
use crate::error::{BindError, DispatchError};
use crate::module::Module;
use crate::opcode::Opcode;
use crate::value::ScriptValue;

pub struct ModuleSet<S> {
  modules : Vec<Arc<Module<S>>>,
  // Opcode -> index into `modules`.
  index   : FxHashMap<Opcode, usize>,
}

impl<S> ModuleSet<S> {

  pub fn new() -> ModuleSet<S> {
    ModuleSet {
      modules : vec![],
      index   : FxHashMap::default(),
    }
  }

  /**
    Adds a populated module. Fails, leaving the set unchanged, if a module of the same name is
    already installed or if any of the module's opcodes is provided by an installed module.
  */
  pub fn install(&mut self, module: impl Into<Arc<Module<S>>>) -> Result<(), BindError> {
    let module = module.into();

    if self.modules.iter().any(|installed| installed.name() == module.name()) {
      tracing::warn!(module = %module.name(), "module installed twice");
      return Err(BindError::DuplicateModule(module.name().clone()));
    }

    // Check every opcode before touching the index so that a failure leaves no trace.
    for opcode in module.opcodes() {
      if let Some(&position) = self.index.get(opcode) {
        let installed = self.modules[position].name().clone();
        tracing::warn!(%opcode, %installed, incoming = %module.name(), "opcode provided by two modules");
        return Err(BindError::OpcodeConflict {
          opcode   : *opcode,
          installed,
          incoming : module.name().clone()
        });
      }
    }

    let position = self.modules.len();
    self.index.reserve(module.len());
    for opcode in module.opcodes() {
      self.index.insert(*opcode, position);
    }

    tracing::debug!(module = %module.name(), opcodes = module.len(), "installed module");
    self.modules.push(module);
    Ok(())
  }

  pub fn lookup(&self, opcode: Opcode) -> Option<&FunctionEntry<S>> {
    self.module_for(opcode).and_then(|module| module.lookup(opcode))
  }

  /// The module providing `opcode`.
  pub fn module_for(&self, opcode: Opcode) -> Option<&Module<S>> {
    self.index.get(&opcode).map(|position| self.modules[*position].as_ref())
  }

  /// Installed modules, in installation order.
  pub fn modules(&self) -> impl Iterator<Item = &Module<S>> + '_ {
    self.modules.iter().map(|module| module.as_ref())
  }

  /// The number of installed modules.
  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  /// The number of opcodes provided across all modules.
  pub fn opcode_count(&self) -> usize {
    self.index.len()
  }

  /**
    Executes one decoded instruction: resolves `opcode`, checks that the interpreter decoded as
    many operands as the binding expects, and calls the bound function with them and `state`.
  */
  pub fn dispatch(
    &self,
    opcode: Opcode,
    operands: &[ScriptValue],
    state: &mut S
  ) -> Result<CallResult, DispatchError> {
    let entry = self.lookup(opcode).ok_or(DispatchError::UnknownOpcode(opcode))?;

    if !entry.accepts(operands.len()) {
      return Err(DispatchError::ArgumentCount {
        opcode,
        expected : entry.argument_count(),
        given    : operands.len()
      });
    }

    #[cfg(feature = "trace_dispatch")]
    tracing::trace!(%opcode, operands = operands.len(), shape = %entry.shape(), "dispatch");

    let mut arguments = ScriptArguments::new(opcode, operands, state);
    Ok(entry.call(&mut arguments))
  }
}

impl<S> Default for ModuleSet<S> {
  fn default() -> ModuleSet<S> {
    ModuleSet::new()
  }
}

/**
  The published module set of a running engine. Readers take a snapshot with `current` and
  dispatch against it without further locking; `replace` swaps in a new, fully built set. A set
  is never modified once it has been published, so a reader never observes a half-updated table.
*/
pub struct SharedModuleSet<S> {
  current: ArcSwap<ModuleSet<S>>,
}

impl<S> SharedModuleSet<S> {
  pub fn new(modules: ModuleSet<S>) -> SharedModuleSet<S> {
    SharedModuleSet {
      current: ArcSwap::new(Arc::new(modules))
    }
  }

  pub fn current(&self) -> Arc<ModuleSet<S>> {
    self.current.load_full()
  }

  /// Publishes `modules` and returns the set it replaces.
  pub fn replace(&self, modules: ModuleSet<S>) -> Arc<ModuleSet<S>> {
    tracing::debug!(modules = modules.len(), opcodes = modules.opcode_count(), "replacing module set");
    self.current.swap(Arc::new(modules))
  }
}
