/*!
  A `Module` is a named collection of native functions exported to game scripts under their
  opcodes. Functions that belong together, say the ones controlling the time of day and the
  weather, or the ones creating and destroying objects, are gathered in one module with a
  sensible name like "Environment" or "Objects".

  Modules are filled in once while the engine starts up and are only read afterwards, by every
  instruction the interpreter executes. The table is therefore a hash map keyed by opcode, which
  is what the interpreter's lookups hit. Listings want the opcodes in ascending order instead;
  that order is computed the first time somebody asks for it and kept until the next `bind`.
*/

use std::collections::hash_map::Entry;
use std::fmt::{Display, Formatter};

use once_cell::sync::OnceCell;
use prettytable::{format as TableFormat, Table};
use rustc_hash::FxHashMap;
use string_cache::DefaultAtom;

use crate::arguments::ScriptArguments;
use crate::callback::{CallbackShape, ScriptCallback};
use crate::entry::FunctionEntry;
use crate::error::BindError;
use crate::opcode::Opcode;

/// One line of an opcode reference: what tooling needs to know about a binding without calling it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct OpcodeDescriptor {
  pub opcode         : Opcode,
  pub argument_count : usize,
  pub shape          : CallbackShape,
  pub mnemonic       : Option<DefaultAtom>,
}

pub struct Module<S> {
  name      : DefaultAtom,
  functions : FxHashMap<Opcode, FunctionEntry<S>>,
  // Ascending opcodes, built on demand for listings.
  sorted    : OnceCell<Vec<Opcode>>,
}

impl<S> Module<S> {

  pub fn new(name: &str) -> Module<S> {
    Module {
      name      : DefaultAtom::from(name),
      functions : FxHashMap::default(),
      sorted    : OnceCell::new(),
    }
  }

  /// The name of this module.
  pub fn name(&self) -> &DefaultAtom {
    &self.name
  }

  // region Binding

  /**
    Binds `opcode` to `callback`, which the interpreter will call with `argument_count` decoded
    operands.

    An opcode can be bound only once. Binding it again is a mistake in the table and fails with
    `BindError::DuplicateOpcode`, leaving the first binding as it was.
  */
  pub fn bind(
    &mut self,
    opcode: Opcode,
    argument_count: usize,
    callback: ScriptCallback<S>
  ) -> Result<(), BindError> {
    self.insert(opcode, FunctionEntry::new(argument_count, callback, None))
  }

  /// Like `bind`, also recording the name the opcode is listed under.
  pub fn bind_named(
    &mut self,
    opcode: Opcode,
    mnemonic: &str,
    argument_count: usize,
    callback: ScriptCallback<S>
  ) -> Result<(), BindError> {
    let entry = FunctionEntry::new(argument_count, callback, Some(DefaultAtom::from(mnemonic)));
    self.insert(opcode, entry)
  }

  pub fn bind_effect<F>(
    &mut self,
    opcode: Opcode,
    argument_count: usize,
    function: F
  ) -> Result<(), BindError>
    where F: Fn(&mut ScriptArguments<'_, S>) + Send + Sync + 'static
  {
    self.bind(opcode, argument_count, ScriptCallback::effect(function))
  }

  pub fn bind_predicate<F>(
    &mut self,
    opcode: Opcode,
    argument_count: usize,
    function: F
  ) -> Result<(), BindError>
    where F: Fn(&mut ScriptArguments<'_, S>) -> bool + Send + Sync + 'static
  {
    self.bind(opcode, argument_count, ScriptCallback::predicate(function))
  }

  fn insert(&mut self, opcode: Opcode, entry: FunctionEntry<S>) -> Result<(), BindError> {
    match self.functions.entry(opcode) {

      Entry::Occupied(_) => {
        tracing::warn!(module = %self.name, %opcode, "opcode bound twice");
        Err(BindError::DuplicateOpcode {
          module: self.name.clone(),
          opcode
        })
      }

      Entry::Vacant(vacant) => {
        tracing::debug!(
          module = %self.name,
          %opcode,
          argc = entry.argument_count(),
          shape = %entry.shape(),
          "bound opcode"
        );
        vacant.insert(entry);
        self.sorted.take();
        Ok(())
      }

    }
  }

  /**
    Makes room for `additional` more bindings. Only a hint to the underlying map: nothing a caller
    can observe through `lookup` or the listings changes.
  */
  pub fn reserve(&mut self, additional: usize) {
    self.functions.reserve(additional);
  }

  // endregion

  // region Lookup

  /**
    Finds the function bound to `opcode`. A missing opcode is an ordinary outcome (a script
    compiled against a newer table, a decoding bug in the caller) and is reported as `None`.
  */
  pub fn lookup(&self, opcode: Opcode) -> Option<&FunctionEntry<S>> {
    self.functions.get(&opcode)
  }

  pub fn contains(&self, opcode: Opcode) -> bool {
    self.functions.contains_key(&opcode)
  }

  pub fn len(&self) -> usize {
    self.functions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.functions.is_empty()
  }

  // endregion

  // region Listings

  /// The bound opcodes in ascending order.
  pub fn opcodes(&self) -> &[Opcode] {
    self.sorted.get_or_init(|| {
      let mut opcodes: Vec<Opcode> = self.functions.keys().copied().collect();
      opcodes.sort_unstable();
      opcodes
    })
  }

  /// The bindings in ascending opcode order.
  pub fn entries(&self) -> impl Iterator<Item = (Opcode, &FunctionEntry<S>)> + '_ {
    self.opcodes()
        .iter()
        .filter_map(move |opcode| self.functions.get(opcode).map(|entry| (*opcode, entry)))
  }

  pub fn descriptors(&self) -> Vec<OpcodeDescriptor> {
    self.entries()
        .map(|(opcode, entry)| OpcodeDescriptor {
          opcode,
          argument_count : entry.argument_count(),
          shape          : entry.shape(),
          mnemonic       : entry.mnemonic().cloned(),
        })
        .collect()
  }

  /// A human readable opcode reference for this module.
  pub fn reference_table(&self) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Opcode", ubl->"Mnemonic", ubr->"Args", ubl->"Shape"]);

    for descriptor in self.descriptors() {
      let opcode = descriptor.opcode.to_string();
      let mnemonic = match &descriptor.mnemonic {
        Some(mnemonic) => mnemonic.to_string(),
        None           => "-".to_string()
      };
      let argc = descriptor.argument_count.to_string();
      let shape = descriptor.shape.to_string();

      table.add_row(row![r->opcode, mnemonic, r->argc, shape]);
    }
    table
  }

  // endregion
}

impl<S> Display for Module<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.is_empty() {
      true  => write!(f, "Module {} (no bindings)", self.name),
      false => write!(f, "Module {} ({} bindings)\n{}", self.name, self.len(), self.reference_table())
    }
  }
}

lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}
