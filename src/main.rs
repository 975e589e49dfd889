//! Prints the opcode reference of the demonstration modules, or resolves a single opcode.

mod demo;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use script_dispatch::{Module, ModuleSet, Opcode};

use crate::demo::{DemoOpcode, World};

#[derive(Parser, Debug)]
#[command(name = "opcode-reference", about = "List the opcodes bound in the script modules")]
struct Cli {
  /// Only list the module with this name.
  #[arg(short, long)]
  module: Option<String>,

  /// Resolve one opcode, written as hex (`0x0107`) or decimal.
  #[arg(short, long)]
  lookup: Option<Opcode>,

  /// Log every binding as the modules are built.
  #[arg(short, long)]
  verbose: bool,
}

fn init_logging(verbose: bool) {
  let default_filter = match verbose {
    true  => "debug",
    false => "warn"
  };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_filter));

  let _ = tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(filter)
    .try_init();
}

fn print_lookup(modules: &ModuleSet<World>, opcode: Opcode) -> Result<()> {
  let (module, entry) = match modules.module_for(opcode).and_then(|module| {
    module.lookup(opcode).map(|entry| (module, entry))
  }) {
    Some(found) => found,
    None        => bail!("unknown opcode {}", opcode)
  };

  let mnemonic = match (entry.mnemonic(), DemoOpcode::from_opcode(opcode)) {
    (Some(mnemonic), _)   => mnemonic.to_string(),
    (None, Some(demo))    => demo.to_string(),
    (None, None)          => "-".to_string()
  };

  println!(
    "{} {} in module {}: {} argument(s), {}",
    opcode,
    mnemonic,
    module.name(),
    entry.argument_count(),
    entry.shape()
  );
  Ok(())
}

fn print_modules<'a>(modules: impl Iterator<Item = &'a Module<World>>) {
  for module in modules {
    println!("{}\n", module);
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let modules = demo::modules()?;

  if let Some(opcode) = cli.lookup {
    return print_lookup(&modules, opcode);
  }

  match &cli.module {
    Some(name) => {
      let selected: Vec<&Module<World>> =
        modules.modules().filter(|module| &**module.name() == name.as_str()).collect();
      if selected.is_empty() {
        bail!("no module named `{}`", name);
      }
      print_modules(selected.into_iter());
    }
    None => print_modules(modules.modules())
  }
  Ok(())
}
