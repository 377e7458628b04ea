use std::fs;

use linepad::{
    Document, Evaluation, Options, Outcome, Scope,
    error::{LineError, ParseError, RuntimeError},
    interpreter::lexer::{Token, tokenize},
    run,
};
use pretty_assertions::assert_eq;

fn displayed(evaluation: &Evaluation) -> Vec<&str> {
    evaluation.outcomes.iter().map(|o| o.display.as_str()).collect()
}

fn run_fresh(lines: &[&str]) -> Evaluation {
    run(lines, &Scope::new())
}

fn error_of(evaluation: &Evaluation, index: usize) -> &LineError {
    match &evaluation.outcomes[index].kind {
        Outcome::Error(error) => error,
        other => panic!("line {} was expected to fail, got {other:?}", index + 1),
    }
}

#[test]
fn assignments_are_visible_to_later_lines() {
    let evaluation = run_fresh(&["x = 10", "y = x * 2", "y - 5"]);

    assert_eq!(displayed(&evaluation), ["10", "20", "15"]);
    assert_eq!(evaluation.scope, Scope::from([("x".to_string(), 10.0), ("y".to_string(), 20.0)]));
}

#[test]
fn line_references_use_earlier_results() {
    let evaluation = run_fresh(&["10", "#1 + 5"]);
    assert_eq!(displayed(&evaluation), ["10", "15"]);
}

#[test]
fn self_reference_is_invalid() {
    let evaluation = run_fresh(&["#1"]);
    assert_eq!(error_of(&evaluation, 0),
               &LineError::Runtime(RuntimeError::InvalidLineReference { line_number:  1,
                                                                        current_line: 1, }));
}

#[test]
fn forward_and_zero_references_are_invalid() {
    let evaluation = run_fresh(&["#2", "4", "#0", "#99"]);

    assert!(matches!(error_of(&evaluation, 0),
                     LineError::Runtime(RuntimeError::InvalidLineReference { line_number: 2, .. })));
    assert_eq!(evaluation.outcomes[1].raw(), Some(4.0));
    assert!(matches!(error_of(&evaluation, 2),
                     LineError::Runtime(RuntimeError::InvalidLineReference { line_number: 0, .. })));
    assert!(matches!(error_of(&evaluation, 3),
                     LineError::Runtime(RuntimeError::InvalidLineReference { line_number: 99, .. })));
}

#[test]
fn huge_line_reference_is_invalid() {
    let evaluation = run_fresh(&["1", "#99999999999999999999999"]);
    assert!(matches!(error_of(&evaluation, 1),
                     LineError::Runtime(RuntimeError::InvalidLineReference { .. })));
}

#[test]
fn division_by_zero_displays_zero() {
    let evaluation = run_fresh(&["5 / 0"]);
    let outcome = &evaluation.outcomes[0];

    assert_eq!(outcome.display, "0");
    assert!(outcome.raw().is_some_and(f64::is_nan));
    assert!(!outcome.is_error());
}

#[test]
fn referencing_a_division_by_zero_is_not_an_error() {
    let evaluation = run_fresh(&["1 / 0", "#1 + 1"]);

    assert!(!evaluation.outcomes[1].is_error());
    assert!(evaluation.outcomes[1].raw().is_some_and(f64::is_nan));
    assert_eq!(evaluation.outcomes[1].display, "0");
}

#[test]
fn empty_lines_are_kept_in_place() {
    let evaluation = run_fresh(&["z = 5", "", "z + 1", "   \t"]);

    assert_eq!(displayed(&evaluation), ["5", "", "6", ""]);
    assert!(evaluation.outcomes[1].is_empty());
    assert!(evaluation.outcomes[3].is_empty());
}

#[test]
fn referencing_an_empty_line_counts_as_zero() {
    let evaluation = run_fresh(&["", "#1 + 3"]);
    assert_eq!(evaluation.outcomes[1].raw(), Some(3.0));
}

#[test]
fn scope_is_rebuilt_every_pass() {
    let first = run(&["a = 1", "a"], &Scope::new());
    assert_eq!(displayed(&first), ["1", "1"]);
    assert_eq!(first.scope, Scope::from([("a".to_string(), 1.0)]));

    let second = run(&["", "a"], &first.scope);
    assert!(second.outcomes[0].is_empty());
    assert_eq!(error_of(&second, 1),
               &LineError::Runtime(RuntimeError::UndefinedVariable { name: "a".to_string() }));
    assert!(second.scope.is_empty());
}

#[test]
fn variables_are_case_sensitive() {
    let evaluation = run_fresh(&["Total = 3", "total"]);
    assert!(matches!(error_of(&evaluation, 1),
                     LineError::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn reassignment_overwrites() {
    let evaluation = run_fresh(&["n = 1", "n = n + 1", "n * 10"]);

    assert_eq!(displayed(&evaluation), ["1", "2", "20"]);
    assert_eq!(evaluation.scope.get("n"), Some(&2.0));
}

#[test]
fn a_variable_is_not_visible_before_its_assignment() {
    let evaluation = run_fresh(&["b + 1", "b = 2", "b + 1"]);

    assert!(evaluation.outcomes[0].is_error());
    assert_eq!(evaluation.outcomes[2].raw(), Some(3.0));
}

#[test]
fn errors_are_isolated_to_their_line() {
    let evaluation = run_fresh(&["2 +", "7", "(1 + 2", "#2 * 2", "q", "#2 - 1"]);

    assert_eq!(evaluation.outcomes.len(), 6);
    assert_eq!(displayed(&evaluation), ["⚠", "7", "⚠", "14", "⚠", "6"]);
}

#[test]
fn referencing_a_failed_line_fails() {
    let evaluation = run_fresh(&["oops", "#1 + 1", "#2 + 1"]);

    assert_eq!(error_of(&evaluation, 1),
               &LineError::Runtime(RuntimeError::ReferencedLineIsError { line_number: 1 }));
    assert_eq!(error_of(&evaluation, 2),
               &LineError::Runtime(RuntimeError::ReferencedLineIsError { line_number: 2 }));
}

#[test]
fn failed_assignment_does_not_define_the_variable() {
    let evaluation = run_fresh(&["c = missing", "c"]);

    assert!(evaluation.outcomes[0].is_error());
    assert!(evaluation.outcomes[1].is_error());
    assert!(!evaluation.scope.contains_key("c"));
}

#[test]
fn precedence_and_associativity() {
    let evaluation = run_fresh(&["2 + 3 * 4", "(2 + 3) * 4", "8 - 3 - 2", "16 / 4 / 2", "1 + 6 / 3 - 2"]);
    assert_eq!(displayed(&evaluation), ["14", "20", "3", "2", "1"]);
}

#[test]
fn syntax_errors() {
    let evaluation = run_fresh(&["1 +", "(1 + 2", "* 3", "2 3", "1.2.3 + 1", "x = "]);

    assert_eq!(error_of(&evaluation, 0), &LineError::Parse(ParseError::UnexpectedEndOfInput));
    assert_eq!(error_of(&evaluation, 1),
               &LineError::Parse(ParseError::MissingClosingParen { column: 1 }));
    assert_eq!(error_of(&evaluation, 2),
               &LineError::Parse(ParseError::UnexpectedToken { token:  "*".to_string(),
                                                               column: 1, }));
    assert_eq!(error_of(&evaluation, 3),
               &LineError::Parse(ParseError::UnexpectedTrailingTokens { token:  "3".to_string(),
                                                                        column: 3, }));
    assert_eq!(error_of(&evaluation, 4),
               &LineError::Parse(ParseError::MalformedNumber { literal: "1.2.3".to_string(),
                                                               column:  1, }));
    assert_eq!(error_of(&evaluation, 5), &LineError::Parse(ParseError::UnexpectedEndOfInput));
}

#[test]
fn unrecognized_characters_are_dropped() {
    let evaluation = run_fresh(&["$12 + 3%", "-3 + 2", "1,5"]);

    assert_eq!(evaluation.outcomes[0].raw(), Some(15.0));
    // The leading minus is an operator with no left operand.
    assert!(evaluation.outcomes[1].is_error());
    assert!(matches!(error_of(&evaluation, 2),
                     LineError::Parse(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn line_with_only_dropped_characters_is_zero() {
    let evaluation = run_fresh(&["$ , %", "#1 + 1"]);

    assert_eq!(evaluation.outcomes[0].raw(), Some(0.0));
    assert_eq!(evaluation.outcomes[0].display, "0");
    assert_eq!(evaluation.outcomes[1].raw(), Some(2.0));
}

#[test]
fn display_hides_float_artifacts() {
    let evaluation = run_fresh(&["0.1 + 0.2", "1 / 3", ".5 * 3", "1. + 1"]);
    assert_eq!(displayed(&evaluation), ["0.3", "0.3333333333", "1.5", "2"]);
}

#[test]
fn precision_option_controls_display() {
    let evaluation =
        linepad::Interpreter::new(Options { precision: 2 }).run(&["1 / 3", "2 / 3"], &Scope::new());
    assert_eq!(displayed(&evaluation), ["0.33", "0.67"]);
}

#[test]
fn huge_precision_is_capped() {
    let lines = ["1 / 3", "x = 2 / 3", "x * 3", "oops", ""];
    let evaluation =
        linepad::Interpreter::new(Options { precision: 70_000 }).run(&lines, &Scope::new());

    assert_eq!(evaluation.outcomes.len(), lines.len());
    assert!(evaluation.outcomes[0].display.starts_with("0.3333333333333333"));
    assert_eq!(evaluation.outcomes[2].display, "2");
    assert!(evaluation.outcomes[3].is_error());
}

#[test]
fn tiny_values_are_not_shown_as_zero() {
    let evaluation = run_fresh(&["0.00000000001", "1 - 1.0000000000001", "0 * 5"]);

    assert_eq!(evaluation.outcomes[0].display, "1e-11");
    assert!(evaluation.outcomes[1].display.starts_with("-9.99"));
    assert!(evaluation.outcomes[1].display.ends_with("e-14"));
    assert_eq!(evaluation.outcomes[2].display, "0");
}

#[test]
fn run_is_deterministic() {
    let lines = ["a = 3", "b = a * #1", "oops", "#2 / 4", "b - a"];
    assert_eq!(run_fresh(&lines).outcomes, run_fresh(&lines).outcomes);
    assert_eq!(run_fresh(&lines).scope, run_fresh(&lines).scope);
}

#[test]
fn outcome_count_matches_line_count() {
    let cases: [&[&str]; 4] = [&[], &[""], &["1", "(", ")", "#5", "x = y"], &["a = 1"; 40]];
    for lines in cases {
        assert_eq!(run_fresh(lines).outcomes.len(), lines.len());
    }
}

#[test]
fn outcomes_carry_line_numbers_and_messages() {
    let evaluation = run_fresh(&["1", "nope"]);

    assert_eq!(evaluation.outcomes[0].line_number, 1);
    assert_eq!(evaluation.outcomes[1].line_number, 2);
    assert_eq!(evaluation.outcomes[0].error_message(), None);
    assert_eq!(evaluation.outcomes[1].error_message().as_deref(),
               Some("Undefined variable 'nope'."));
}

#[test]
fn document_reruns_on_every_change() {
    let mut document = Document::default();

    document.set_text("w = 4\r\nw * w");
    assert_eq!(displayed(document.evaluation()), ["4", "16"]);

    document.set_text("w * w");
    assert!(document.outcomes()[0].is_error());
    assert!(document.variables().is_empty());
}

#[test]
fn example_document() {
    let text = fs::read_to_string("tests/example.calc").expect("missing file");
    let text = text.strip_suffix('\n').unwrap_or(&text);

    let mut document = Document::default();
    document.set_text(text);

    assert_eq!(displayed(document.evaluation()),
               ["1200", "180.5", "420", "1800.5", "600.1666666667", "", "3", "600.1666666667",
                "7202", "", "0", "0.2", "99.99", "119.988", "19.998", "⚠", "⚠", "0.3", "0",
                "3"]);
    assert_eq!(document.variables().len(), 8);
}

#[test]
fn columns_count_characters_not_bytes() {
    assert_eq!(tokenize("3 × 4"), vec![(Token::Number(3.0), 1), (Token::Number(4.0), 5)]);
}

#[test]
fn dots_without_a_number_are_malformed() {
    assert_eq!(tokenize("."), vec![(Token::MalformedNumber(".".to_string()), 1)]);
    assert_eq!(tokenize("1.."), vec![(Token::MalformedNumber("1..".to_string()), 1)]);
    assert_eq!(tokenize("1. .5"), vec![(Token::Number(1.0), 1), (Token::Number(0.5), 4)]);
}

#[test]
fn hash_without_digits_is_dropped() {
    assert!(tokenize("#").is_empty());
    assert_eq!(tokenize("# 5"), vec![(Token::Number(5.0), 3)]);
    assert_eq!(tokenize("#12"), vec![(Token::LineRef(12), 1)]);
}
