#[cfg(test)]
mod tests {
  use std::str::FromStr;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;

  use crate::{CallResult, CallbackShape, Opcode, ScriptArguments, ScriptCallback, ScriptValue};

  struct Weather {
    raining : bool,
    wind    : f32,
  }

  #[test]
  fn test_constructor_picks_the_tag() {
    let effect = ScriptCallback::<Weather>::effect(|args| args.state_mut().raining = true);
    let predicate = ScriptCallback::<Weather>::predicate(|args| args.state().raining);

    assert_eq!(effect.shape(), CallbackShape::Effect);
    assert_eq!(predicate.shape(), CallbackShape::Predicate);
    assert_eq!(format!("{:?}", predicate), "ScriptCallback::Predicate");
  }

  #[test]
  fn test_invoke_returns_the_callback_result_unchanged() {
    let mut weather = Weather { raining: false, wind: 0.0 };
    let start_rain = ScriptCallback::<Weather>::effect(|args| args.state_mut().raining = true);
    let is_raining = ScriptCallback::<Weather>::predicate(|args| args.state().raining);

    let result = is_raining.invoke(&mut ScriptArguments::new(Opcode(0x0020), &[], &mut weather));
    assert_eq!(result, CallResult::Condition(false));
    assert_eq!(result.as_condition(), Some(false));

    let result = start_rain.invoke(&mut ScriptArguments::new(Opcode(0x0021), &[], &mut weather));
    assert_eq!(result, CallResult::Done);
    assert_eq!(result.as_condition(), None);

    let result = is_raining.invoke(&mut ScriptArguments::new(Opcode(0x0020), &[], &mut weather));
    assert_eq!(result, CallResult::Condition(true));
  }

  #[test]
  fn test_callback_sees_its_operands() {
    let mut weather = Weather { raining: false, wind: 0.0 };
    let set_wind = ScriptCallback::<Weather>::effect(|args| {
      assert_eq!(args.opcode(), Opcode(0x0022));
      assert_eq!(args.len(), 1);
      let wind = args.float(0).unwrap_or_default();
      args.state_mut().wind = wind;
    });

    let operands = [ScriptValue::Float(12.5)];
    set_wind.invoke(&mut ScriptArguments::new(Opcode(0x0022), &operands, &mut weather));
    assert_eq!(weather.wind, 12.5);
  }

  #[test]
  fn test_clones_share_the_function() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let callback: ScriptCallback<()> = ScriptCallback::effect(move |_| {
      counter.fetch_add(1, Ordering::SeqCst);
    });
    let copy = callback.clone();

    let mut state = ();
    callback.invoke(&mut ScriptArguments::new(Opcode(1), &[], &mut state));
    copy.invoke(&mut ScriptArguments::new(Opcode(1), &[], &mut state));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
  }

  #[test]
  fn test_shape_names() {
    assert_eq!(CallbackShape::Effect.to_string(), "Effect");
    assert_eq!(CallbackShape::from_str("Predicate"), Ok(CallbackShape::Predicate));
    assert!(CallbackShape::from_str("Function").is_err());
  }

  #[test]
  fn test_arguments_accessors_do_not_coerce() {
    let operands = [
      ScriptValue::Integer(7),
      ScriptValue::from(2.5f32),
      ScriptValue::from("cheetah"),
      ScriptValue::Global(12),
    ];
    let mut state = ();
    let args = ScriptArguments::new(Opcode(0x00A5), &operands, &mut state);

    assert_eq!(args.integer(0), Some(7));
    assert_eq!(args.float(0), None);
    assert_eq!(args.float(1), Some(2.5));
    assert_eq!(args.text(2).map(|text| text.to_string()), Some("cheetah".to_string()));
    assert_eq!(args.integer(3), None);
    assert!(args.operand(3).map_or(false, ScriptValue::is_variable));
    assert!(args.operand(4).is_none());
    assert_eq!(operands[3].to_string(), "$G[12]");
    assert_eq!(operands[2].to_string(), "\"cheetah\"");
  }
}
