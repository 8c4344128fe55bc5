use romanus::{
    error::{CalcError, Disposition},
    evaluate,
    interpreter::{classifier::NumeralSystem, numeral::int_to_roman},
};

fn assert_answer(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(answer) => assert_eq!(answer, expected, "wrong answer for {src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn assert_error(src: &str, expected: &CalcError) {
    match evaluate(src) {
        Ok(answer) => panic!("Expression {src} succeeded with {answer} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "wrong error for {src}"),
    }
}

#[test]
fn decimal_arithmetic() {
    assert_answer("3+4", "7");
    assert_answer("10-3", "7");
    assert_answer("3-10", "-7");
    assert_answer("10*10", "100");
    assert_answer("1/1", "1");
}

#[test]
fn decimal_division_truncates_toward_zero() {
    assert_answer("7/2", "3");
    assert_answer("1/10", "0");
    assert_answer("9/4", "2");
}

#[test]
fn decimal_leading_zero_is_accepted() {
    assert_answer("05+5", "10");
}

#[test]
fn roman_arithmetic() {
    assert_answer("X+I", "XI");
    assert_answer("X*X", "C");
    assert_answer("IX-IV", "V");
    assert_answer("VIII/III", "II");
    assert_answer("IV*IX", "XXXVI");
}

#[test]
fn roman_result_below_one_is_recoverable() {
    for src in ["I-X", "V-V", "I/II"] {
        assert_error(src, &CalcError::ResultBelowRomanFloor);
    }
    assert_eq!(CalcError::ResultBelowRomanFloor.disposition(), Disposition::Continue);
}

#[test]
fn mixed_numeral_systems_terminate_the_session() {
    assert_error("3+I", &CalcError::MixedNumeralSystems);
    assert_error("X*2", &CalcError::MixedNumeralSystems);
    assert!(CalcError::MixedNumeralSystems.terminates_session());
}

#[test]
fn decimal_operand_out_of_range() {
    let out_of_range = CalcError::OperandOutOfRange { system: NumeralSystem::Decimal };
    assert_error("11+2", &out_of_range);
    assert_error("2+11", &out_of_range);
    assert_error("0+1", &out_of_range);
    assert_error("5/0", &out_of_range);
    assert_error("99999999999999999999+1", &out_of_range);
    assert!(out_of_range.terminates_session());
}

#[test]
fn roman_operand_out_of_range() {
    let out_of_range = CalcError::OperandOutOfRange { system: NumeralSystem::Roman };
    assert_error("XI+I", &out_of_range);
    assert_error("I+MMXXIV", &out_of_range);
    assert!(out_of_range.terminates_session());
}

#[test]
fn mixed_systems_are_checked_before_range() {
    assert_error("11+XX", &CalcError::MixedNumeralSystems);
}

#[test]
fn malformed_expressions_are_recoverable() {
    for src in ["3++4", "34", "", "+", "3+", "+4", "-3+4", "3+4-2", "x+y", "IIII+I", "3.5+1", "ix+i"] {
        assert_error(src, &CalcError::MalformedExpression);
    }
    assert!(!CalcError::MalformedExpression.terminates_session());
}

#[test]
fn malformed_shape_wins_over_mixed_systems() {
    assert_error("3+I+", &CalcError::MalformedExpression);
    assert_error("3+Q", &CalcError::MalformedExpression);
}

#[test]
fn error_messages_name_the_system_and_range() {
    let decimal = CalcError::OperandOutOfRange { system: NumeralSystem::Decimal };
    let roman = CalcError::OperandOutOfRange { system: NumeralSystem::Roman };

    assert_eq!(decimal.to_string(),
               "Input error: decimal operands must be in the range 1 to 10.");
    assert_eq!(roman.to_string(), "Input error: Roman operands must be in the range I to X.");
}

#[test]
fn evaluation_is_thread_safe() {
    let handles: Vec<_> =
        (1..=10_u32).map(|n| {
                        std::thread::spawn(move || {
                            let decimal = evaluate(&format!("{n}*{n}"));
                            let roman = evaluate(&format!("{}+I", int_to_roman(n)));
                            (decimal, roman)
                        })
                    })
                    .collect();

    for (n, handle) in (1..=10_u32).zip(handles) {
        let (decimal, roman) = handle.join().unwrap();
        assert_eq!(decimal, Ok((n * n).to_string()));
        assert_eq!(roman, Ok(int_to_roman(n + 1)));
    }
}
