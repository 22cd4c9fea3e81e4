use numex::{ast::Expr, evaluate, AngleUnit, Context, ErrorKind};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src, AngleUnit::Radians) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "`{src}` evaluated to {value}, expected {expected}"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_value_degrees(src: &str, expected: f64) {
    match evaluate(src, AngleUnit::Degrees) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "`{src}` evaluated to {value} in degree mode, expected {expected}"),
        Err(e) => panic!("`{src}` failed in degree mode: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src, AngleUnit::Radians) {
        Ok(value) => panic!("`{src}` evaluated to {value} but should fail with {kind:?}"),
        Err(e) => assert_eq!(e.kind(), kind, "`{src}`: {e}"),
    }
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_value("0", 0.0);
    assert_value("42", 42.0);
    assert_value("3.5", 3.5);
    assert_value("0.125", 0.125);
    assert_value("  7  ", 7.0);
}

#[test]
fn binary_operators_are_left_associative() {
    assert_value("2-3-4", -5.0);
    assert_value("100/10/5", 2.0);
    assert_value("2^3^2", 64.0);
}

#[test]
fn precedence_orders_operators() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3^2", 18.0);
    assert_value("10-4-3*2", 0.0);
}

#[test]
fn unary_prefixes_bind_their_immediate_operand() {
    assert_value("sin 0 + 1", 1.0);
    assert_value("-2^2", 4.0);
    assert_value("+5 - 3", 2.0);
    assert_value("- 3 + 5", 2.0);
    assert_value("sqrt 16 + 9", 13.0);
    assert_value("abs (2 - 5)", 3.0);
}

#[test]
fn trigonometry_follows_the_angle_unit() {
    assert_value_degrees("sin 90", 1.0);
    assert_value_degrees("cos 180", -1.0);
    assert_value_degrees("asin 1", 90.0);
    assert_value("sin (pi/2)", 1.0);
    assert_value("atan 1", std::f64::consts::FRAC_PI_4);
}

#[test]
fn constants_substitute_textually() {
    assert_value("2*pi", 2.0 * std::f64::consts::PI);
    assert_value("ln e", 1.0);
}

#[test]
fn input_is_case_folded() {
    assert_value_degrees("SIN 90", 1.0);
    assert_value("Sqrt(PI - PI) + 4", 4.0);
}

#[test]
fn logarithms_and_factorial() {
    assert_value("log2 8", 3.0);
    assert_value("lg 1000", 3.0);
    assert_value("ln (e^2)", 2.0);
    assert_value("!5", 120.0);
    assert_value("! 3 + 1", 7.0);
}

#[test]
fn percent_truncates_before_the_remainder() {
    assert_value("7 % 3", 1.0);
    assert_value("7.9 % 3.9", 1.0);
    assert!(evaluate("10 % 0", AngleUnit::Radians).unwrap().is_nan());
}

#[test]
fn evaluation_is_idempotent_across_calls() {
    let context = Context::new();
    let first = context.eval("sin (pi/2) + 2^3^2", AngleUnit::Radians).unwrap();
    let second = context.eval("sin (pi/2) + 2^3^2", AngleUnit::Radians).unwrap();
    assert_eq!(first, second);
}

#[test]
fn syntax_failures_classify_as_invalid_syntax() {
    assert_kind("2 $ 3", ErrorKind::InvalidSyntax);
    assert_kind("(2+3", ErrorKind::InvalidSyntax);
    assert_kind("2.", ErrorKind::InvalidSyntax);
    assert_kind("", ErrorKind::InvalidSyntax);
    assert_kind("2 3", ErrorKind::InvalidSyntax);
}

#[test]
fn manual_trees_classify_by_arity() {
    let context = Context::new();

    let binary = Expr::binary("?", Expr::literal("2"), Expr::literal("3"));
    assert_eq!(context.eval_expr(&binary, AngleUnit::Radians).unwrap_err().kind(),
               ErrorKind::UnknownBinaryOperator);

    let unary = Expr::unary("mystery", Expr::literal("2"));
    assert_eq!(context.eval_expr(&unary, AngleUnit::Radians).unwrap_err().kind(),
               ErrorKind::UnknownUnaryOperator);

    let leaf = Expr::literal("not a number");
    assert_eq!(context.eval_expr(&leaf, AngleUnit::Radians).unwrap_err().kind(),
               ErrorKind::UnknownExpressionType);
}

#[test]
fn registered_functions_extend_the_vocabulary() {
    let mut context = Context::new();
    context.register_function("sq", |x| x * x);

    assert_eq!(context.eval("sq 4", AngleUnit::Radians).unwrap(), 16.0);
    assert_eq!(context.eval("sq (1 + 2)", AngleUnit::Radians).unwrap(), 9.0);
    // The new name participates in longest-match tokenization.
    assert_eq!(context.eval("sqrt 16 + sq 2", AngleUnit::Radians).unwrap(), 8.0);
}

#[test]
fn registered_operators_parse_at_their_priority() {
    let mut context = Context::new();
    context.register_operator("min", 1, f64::min);

    assert_eq!(context.eval("4 min 7", AngleUnit::Radians).unwrap(), 4.0);
    // Priority 1 binds looser than `*`.
    assert_eq!(context.eval("2 * 3 min 5", AngleUnit::Radians).unwrap(), 5.0);
}

#[test]
fn registered_constants_substitute_like_builtins() {
    let mut context = Context::new();
    context.register_constant("tau", std::f64::consts::TAU);

    let value = context.eval("tau / 2", AngleUnit::Radians).unwrap();
    assert!((value - std::f64::consts::PI).abs() < 1e-9);
}

#[test]
fn sessions_are_independent() {
    let mut extended = Context::new();
    extended.register_function("sq", |x| x * x);
    let plain = Context::new();

    assert!(extended.eval("sq 4", AngleUnit::Radians).is_ok());
    assert_eq!(plain.eval("sq 4", AngleUnit::Radians).unwrap_err().kind(),
               ErrorKind::InvalidSyntax);
}
