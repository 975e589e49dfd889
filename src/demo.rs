//! A small game world and the modules exporting it to scripts, used by the reference tool.

use std::convert::TryFrom;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display as StrumDisplay, IntoStaticStr};

use script_dispatch::{BindError, Module, ModuleSet, Opcode, ScriptArguments, ScriptCallback};

/// Opcodes of the demonstration modules. Their names are the mnemonics the listings show.
#[derive(
  StrumDisplay, IntoStaticStr, TryFromPrimitive, IntoPrimitive,
  Clone,        Copy,          Eq, PartialEq,  Debug
)]
#[repr(u16)]
pub enum DemoOpcode {
  // Environment
  SetTime         = 0x0005,
  GetTime         = 0x00BF,
  SetWeather      = 0x01B5,
  // Objects
  CreateObject    = 0x0107,
  DestroyObject   = 0x0108,
  ObjectExists    = 0x03CA,
  // Weather
  IsRaining       = 0x0020,
}

impl DemoOpcode {
  pub fn opcode(&self) -> Opcode {
    Opcode(Into::<u16>::into(*self))
  }

  pub fn from_opcode(opcode: Opcode) -> Option<DemoOpcode> {
    DemoOpcode::try_from(opcode.code()).ok()
  }

  fn mnemonic(&self) -> &'static str {
    self.into()
  }
}

#[derive(Default, Debug)]
pub struct World {
  pub hour    : i32,
  pub minute  : i32,
  pub weather : i32,
  pub objects : Vec<i32>,
}

fn bind(
  module: &mut Module<World>,
  opcode: DemoOpcode,
  argument_count: usize,
  callback: ScriptCallback<World>
) -> Result<(), BindError> {
  module.bind_named(opcode.opcode(), opcode.mnemonic(), argument_count, callback)
}

fn set_time(args: &mut ScriptArguments<'_, World>) {
  let hour = args.integer(0).unwrap_or(0);
  let minute = args.integer(1).unwrap_or(0);
  let world = args.state_mut();
  world.hour = hour.rem_euclid(24);
  world.minute = minute.rem_euclid(60);
}

fn get_time(args: &mut ScriptArguments<'_, World>) {
  tracing::info!(hour = args.state().hour, minute = args.state().minute, "time of day");
}

fn set_weather(args: &mut ScriptArguments<'_, World>) {
  let weather = args.integer(0).unwrap_or(0);
  args.state_mut().weather = weather;
}

fn create_object(args: &mut ScriptArguments<'_, World>) {
  if let Some(model) = args.integer(0) {
    args.state_mut().objects.push(model);
  }
}

fn destroy_object(args: &mut ScriptArguments<'_, World>) {
  if let Some(model) = args.integer(0) {
    args.state_mut().objects.retain(|existing| *existing != model);
  }
}

fn object_exists(args: &mut ScriptArguments<'_, World>) -> bool {
  match args.integer(0) {
    Some(model) => args.state().objects.contains(&model),
    None        => false
  }
}

fn is_raining(args: &mut ScriptArguments<'_, World>) -> bool {
  // Weather types 1 and 2 are the rainy ones.
  matches!(args.state().weather, 1 | 2)
}

pub fn environment() -> Result<Module<World>, BindError> {
  let mut module = Module::new("Environment");
  module.reserve(3);
  bind(&mut module, DemoOpcode::SetTime, 2, ScriptCallback::effect(set_time))?;
  bind(&mut module, DemoOpcode::GetTime, 0, ScriptCallback::effect(get_time))?;
  bind(&mut module, DemoOpcode::SetWeather, 1, ScriptCallback::effect(set_weather))?;
  Ok(module)
}

pub fn objects() -> Result<Module<World>, BindError> {
  let mut module = Module::new("Objects");
  module.reserve(3);
  bind(&mut module, DemoOpcode::CreateObject, 4, ScriptCallback::effect(create_object))?;
  bind(&mut module, DemoOpcode::DestroyObject, 1, ScriptCallback::effect(destroy_object))?;
  bind(&mut module, DemoOpcode::ObjectExists, 1, ScriptCallback::predicate(object_exists))?;
  Ok(module)
}

pub fn weather() -> Result<Module<World>, BindError> {
  let mut module = Module::new("Weather");
  bind(&mut module, DemoOpcode::IsRaining, 0, ScriptCallback::predicate(is_raining))?;
  Ok(module)
}

pub fn modules() -> Result<ModuleSet<World>, BindError> {
  let mut modules = ModuleSet::new();
  modules.install(environment()?)?;
  modules.install(objects()?)?;
  modules.install(weather()?)?;
  Ok(modules)
}

#[cfg(test)]
mod tests {
  use super::*;

  use script_dispatch::{CallResult, ScriptValue};

  const ALL: [DemoOpcode; 7] = [
    DemoOpcode::SetTime,
    DemoOpcode::GetTime,
    DemoOpcode::SetWeather,
    DemoOpcode::CreateObject,
    DemoOpcode::DestroyObject,
    DemoOpcode::ObjectExists,
    DemoOpcode::IsRaining,
  ];

  #[test]
  fn test_demo_modules_install_without_conflicts() -> anyhow::Result<()> {
    let modules = modules()?;
    assert_eq!(modules.len(), 3);
    assert_eq!(modules.opcode_count(), ALL.len());

    for demo in ALL.iter() {
      let entry = modules.lookup(demo.opcode()).expect("every demo opcode is bound");
      assert_eq!(entry.mnemonic().map(|name| name.to_string()), Some(demo.to_string()));
      assert_eq!(DemoOpcode::from_opcode(demo.opcode()), Some(*demo));
    }
    assert_eq!(DemoOpcode::from_opcode(Opcode(0x0006)), None);
    Ok(())
  }

  #[test]
  fn test_demo_script_runs() -> anyhow::Result<()> {
    let modules = modules()?;
    let mut world = World::default();

    modules.dispatch(DemoOpcode::SetTime.opcode(), &[ScriptValue::Integer(25), ScriptValue::Integer(5)], &mut world)?;
    assert_eq!((world.hour, world.minute), (1, 5));

    let create = [
      ScriptValue::Integer(1337),
      ScriptValue::Float(0.0),
      ScriptValue::Float(0.0),
      ScriptValue::Float(0.0),
    ];
    modules.dispatch(DemoOpcode::CreateObject.opcode(), &create, &mut world)?;

    let exists = modules.dispatch(DemoOpcode::ObjectExists.opcode(), &[ScriptValue::Integer(1337)], &mut world)?;
    assert_eq!(exists, CallResult::Condition(true));

    modules.dispatch(DemoOpcode::SetWeather.opcode(), &[ScriptValue::Integer(2)], &mut world)?;
    let raining = modules.dispatch(DemoOpcode::IsRaining.opcode(), &[], &mut world)?;
    assert_eq!(raining, CallResult::Condition(true));
    Ok(())
  }
}
