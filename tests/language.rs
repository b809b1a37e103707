use pretty_assertions::assert_eq;

use tinylang::{run, tokenize, Error, LexError, Number, RuntimeError};

fn output(source: &str) -> Vec<String> {
    match run(source) {
        Ok(result) => result.output,
        Err(err) => panic!("script failed: {err}"),
    }
}

fn failure(source: &str) -> Error {
    match run(source) {
        Ok(result) => panic!(
            "script succeeded but was expected to fail, output: {:?}",
            result.output
        ),
        Err(err) => err,
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(output("let r = 2 + 3 * 4; print(r);"), vec!["14"]);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(output("let r = (2 + 3) * 4; print(r);"), vec!["20"]);
}

#[test]
fn exact_division_still_prints_a_fraction() {
    assert_eq!(output("let r = 10 / 5; print(r);"), vec!["2.0"]);
}

#[test]
fn integer_arithmetic_stays_integer() {
    assert_eq!(output("let r = 6 * 5; print(r);"), vec!["30"]);
}

#[test]
fn a_division_contaminates_later_arithmetic() {
    assert_eq!(output("let r = 10 / 5 + 1; print(r);"), vec!["3.0"]);
}

#[test]
fn float_literals_flow_through() {
    assert_eq!(output("let pi = 3.14; print(pi);"), vec!["3.14"]);
    assert_eq!(output("let r = 1.5 * 2; print(r);"), vec!["3.0"]);
}

#[test]
fn division_by_zero_fails() {
    let err = failure("let r = 1 / 0; print(r);");
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn a_failed_run_yields_no_output() {
    // the first print succeeds before the second statement blows up, but the
    // caller must see only the error
    let err = failure("print(1); print(2 / 0);");
    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn undefined_variables_fail_by_name() {
    let err = failure("print(y);");
    assert_eq!(
        err,
        Error::Runtime(RuntimeError::UndefinedVariable { name: "y".into() })
    );
}

#[test]
fn print_order_follows_source_order() {
    assert_eq!(
        output("let a = 1; let b = 2; print(a); print(b);"),
        vec!["1", "2"]
    );
    assert_eq!(
        output("let a = 1; let b = 2; print(b); print(a);"),
        vec!["2", "1"]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let source = "let x = 10 + 5; let y = x * 2; print(x); print(y);";
    assert_eq!(run(source).unwrap(), run(source).unwrap());
}

#[test]
fn tokenize_and_parse_are_idempotent() {
    let source = "let x = (1 + 2) * 3; print(x);";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
    assert_eq!(
        tinylang::parse(source).unwrap(),
        tinylang::parse(source).unwrap()
    );
}

#[test]
fn comments_do_not_change_behavior() {
    let commented = "\
// compute things
let x = 5; // five
print(x);
";
    assert_eq!(output(commented), output("let x = 5; print(x);"));
}

#[test]
fn lex_errors_carry_exact_positions() {
    let err = tokenize("let x = @;").unwrap_err();
    assert_eq!(
        err,
        LexError::InvalidCharacter {
            ch: '@',
            line: 1,
            column: 9,
        }
    );
}

#[test]
fn a_parse_error_names_what_was_expected() {
    let err = failure("let x 5;");
    assert_eq!(
        err.to_string(),
        "expected '=', found number '5' at line 1, column 7"
    );
}

#[test]
fn a_whole_program_produces_output_and_a_symbol_table() {
    let result = run("\
let x = 10 + 5;
let y = x * 2;
print(x);
print(y);
let z = (x + y) / 5;
print(z);
")
    .unwrap();

    assert_eq!(result.output, vec!["15", "30", "9.0"]);
    assert_eq!(result.symbols.get("x"), Some(&Number::Int(15)));
    assert_eq!(result.symbols.get("y"), Some(&Number::Int(30)));
    assert_eq!(result.symbols.get("z"), Some(&Number::Float(9.0)));
}

#[test]
fn variables_are_case_sensitive() {
    let err = failure("let value = 1; print(Value);");
    assert_eq!(
        err,
        Error::Runtime(RuntimeError::UndefinedVariable {
            name: "Value".into()
        })
    );
}

#[test]
fn subtraction_can_go_negative() {
    assert_eq!(output("let r = 0 - 5; print(r);"), vec!["-5"]);
}

#[test]
fn empty_source_runs_to_an_empty_result() {
    let result = run("").unwrap();
    assert_eq!(result.output, Vec::<String>::new());
    assert!(result.symbols.is_empty());
}
