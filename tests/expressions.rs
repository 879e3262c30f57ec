use infixa::{engine::backend::core::BackendKind, engine::validate::validate, eval_expression};

fn eval(source: &str) -> String {
    match eval_expression(source, BackendKind::Array) {
        Ok(value) => value.to_string(),
        Err(error) => panic!("'{source}' failed: {error}"),
    }
}

fn assert_rejected(source: &str) {
    if eval_expression(source, BackendKind::Array).is_ok() {
        panic!("'{source}' succeeded but was expected to fail")
    }
}

#[test]
fn precedence_over_left_to_right() {
    assert_eq!(eval("2+3*4"), "14");
    assert_eq!(eval("2*3+4"), "10");
    assert_eq!(eval("2+3*4-1"), "13");
}

#[test]
fn parenthesization_overrides_precedence() {
    assert_eq!(eval("(2+3)*4"), "20");
    assert_eq!(eval("2*(3+4)"), "14");
    assert_eq!(eval("(1+2)*(3+4)-5"), "16");
}

#[test]
fn same_precedence_reduces_left_to_right() {
    assert_eq!(eval("10-2-3"), "5");
    assert_eq!(eval("8/4/2"), "1");
    assert_eq!(eval("9%4%2"), "1");
}

#[test]
fn implicit_multiplication() {
    assert_eq!(eval("2(3+4)"), "14");
    assert_eq!(eval("(1+1)(3)"), "6");
    assert_eq!(eval("100-3.5(2)"), "93.00");
}

#[test]
fn type_tag_propagation() {
    assert_eq!(eval("3+4"), "7");
    assert_eq!(eval("3+4.0"), "7.00");
    assert_eq!(eval("2.5*4"), "10.00");
    assert_eq!(eval("0.1+0.2"), "0.30");
}

#[test]
fn integer_division_truncates_on_display() {
    // The magnitude stays fractional; only the integer-tagged display
    // truncates.
    assert_eq!(eval("1/2"), "0");
    assert_eq!(eval("7/2"), "3");
    assert_eq!(eval("7.0/2"), "3.50");
}

#[test]
fn modulo() {
    assert_eq!(eval("10%3"), "1");
    assert_eq!(eval("10.5%3"), "1.50");
}

#[test]
fn whitespace_is_stripped_by_the_pipeline() {
    assert_eq!(eval(" 2 + 3 "), "5");
    assert_eq!(eval("2\t*\t3"), "6");
}

#[test]
fn zero_divisors_are_typed_errors() {
    let error = eval_expression("5/0", BackendKind::Array).unwrap_err();
    assert_eq!(error.to_string(), "Division by zero.");

    let error = eval_expression("5%0", BackendKind::Array).unwrap_err();
    assert_eq!(error.to_string(), "Modulo by zero.");

    // A float-tagged zero is still exactly zero.
    let error = eval_expression("5/0.0", BackendKind::Array).unwrap_err();
    assert_eq!(error.to_string(), "Division by zero.");
}

#[test]
fn malformed_input_is_rejected_not_crashed() {
    assert_rejected("2++3");
    assert_rejected("*3+2");
    assert_rejected("2+3*");
    assert_rejected("(2+3");
    assert_rejected("");
    assert_rejected("   ");
    assert_rejected("2a+3");
    assert_rejected("1.2.3");
    assert_rejected("2)(3");
    assert_rejected("2..3");
    assert_rejected("2.");
}

#[test]
fn validation_gaps_fail_during_evaluation() {
    // `+-` passes the narrow repeated-operator check and then fails on the
    // stacks, as a typed error.
    assert_rejected("2+-3");
    assert_rejected("()");
    assert_rejected("(2)3");
}

#[test]
fn validation_is_idempotent() {
    let expression = "2+3*(4-1)";
    assert!(validate(expression).is_ok());
    assert!(validate(expression).is_ok());
}

#[test]
fn display_round_trips_literal_values() {
    use infixa::engine::number::Number;

    assert_eq!(Number::parse("42").unwrap().to_string(), "42");
    assert_eq!(Number::parse("3.50").unwrap().to_string(), "3.50");
    assert_eq!(Number::parse("3.5").unwrap().to_string(), "3.50");
    assert_eq!(Number::parse("0").unwrap().to_string(), "0");
}
