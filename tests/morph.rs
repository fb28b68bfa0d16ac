use std::path::PathBuf;

use morph::{Morph, MorphError, Outcome, RuntimeErrorType, Session, Status};
use pretty_assertions::assert_eq;

fn run(source: &str) -> Outcome { Session::new().run(source).unwrap() }

fn script(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("scripts").join(name) }

#[test]
fn precedence() {
	assert_eq!(run("tulis(1 + 2 * 3)").output, ["7"]);
	assert_eq!(run("tulis((1 + 2) * 3)").output, ["9"]);
}

#[test]
fn truthiness() {
	assert_eq!(run("tulis(!nil)\ntulis(!0)\ntulis(!\"\")").output, ["benar", "salah", "salah"]);
}

#[test]
fn block_scoping() {
	let outcome = run("biar a = 1\n{\n  biar a = 2\n  tulis(a)\n}\ntulis(a)\n");
	assert_eq!(outcome.status, Status::Success);
	assert_eq!(outcome.output, ["2", "1"]);
}

#[test]
fn parse_errors_are_aggregated() {
	let outcome = run("biar = 1\ntulis(1 +)\ntulis(\"tidak\")");
	assert_eq!(outcome.status, Status::BadInput { lexical: 0, parse: 2 });
	assert!(outcome.output.is_empty());
	assert_eq!(outcome.diagnostics, [
		"[Line 1] Error near '=': expected variable name",
		"[Line 2] Error near ')': expected expression",
	]);
}

#[test]
fn lexical_and_parse_errors_are_reported_together() {
	let outcome = run("biar a = $\n\"tidak selesai");
	assert_eq!(outcome.status, Status::BadInput { lexical: 2, parse: 1 });
	assert_eq!(outcome.diagnostics, [
		"[Line 1] Lexical Error: unrecognized character: $",
		"[Line 2] Lexical Error: unterminated string",
		"[Line 1] Error near '\\n': expected expression",
	]);
}

#[test]
fn error_at_end_of_input() {
	let outcome = run("tulis(1");
	assert_eq!(outcome.diagnostics, ["[Line 1] Error at end: expected ')' after arguments"]);
}

#[test]
fn division_by_zero() {
	let outcome = run("biar x = 1 / 0");
	assert!(outcome.output.is_empty());
	assert_eq!(outcome.diagnostics, ["[Line 1] Runtime Error: cannot divide by zero"]);
	assert!(matches!(outcome.status, Status::RuntimeFailure(ref e) if e.r#type == RuntimeErrorType::DivisionByZero));
}

#[test]
fn failed_declaration_binds_nothing() {
	let mut session = Session::new();
	let outcome = session.run("biar x = 1 / 0").unwrap();
	assert_eq!(outcome.diagnostics, ["[Line 1] Runtime Error: cannot divide by zero"]);

	let outcome = session.run("tulis(x)").unwrap();
	assert!(outcome.output.is_empty());
	assert!(matches!(
		outcome.status,
		Status::RuntimeFailure(ref e)
			if e.r#type == RuntimeErrorType::UndefinedVariable { name: "x".to_string(), suggestion: None }
	));
	assert!(session.run("biar x = 2").unwrap().is_success());
}

#[test]
fn undefined_variable_suggestion() {
	assert_eq!(run("tulis(nilai)").diagnostics, ["[Line 1] Runtime Error: undefined variable 'nilai'"]);
	assert_eq!(run("biar nilai = 1\nnila = 2").diagnostics, [
		"[Line 2] Runtime Error: undefined variable 'nila' (did you mean 'nilai'?)"
	]);
}

#[test]
fn type_mismatch() {
	let outcome = run("tulis(1 + \"a\")");
	assert!(outcome.output.is_empty());
	assert_eq!(outcome.diagnostics, ["[Line 1] Runtime Error: operands must be two numbers or two strings"]);
}

#[test]
fn runtime_error_ends_the_run() {
	let outcome = run("tulis(1)\ntulis(tidak_ada)\ntulis(3)");
	assert_eq!(outcome.output, ["1"]);
	assert_eq!(outcome.diagnostics, ["[Line 2] Runtime Error: undefined variable 'tidak_ada'"]);
}

#[test]
fn constants_and_redeclaration() {
	assert_eq!(run("tetap pi = 3\npi = 4").diagnostics, [
		"[Line 2] Runtime Error: cannot assign to constant 'pi'"
	]);
	assert_eq!(run("biar a = 1\nbiar a = 2").diagnostics, [
		"[Line 2] Runtime Error: 'a' is already declared in this scope (line 1)"
	]);
}

#[test]
fn disabled_features_are_parse_errors() {
	let outcome = run("selama benar { }\nfungsi f() {}\ntulis([1])");
	assert_eq!(outcome.status, Status::BadInput { lexical: 0, parse: 3 });
	assert_eq!(outcome.diagnostics, [
		"[Line 1] Error near 'selama': feature 'selama' is not enabled",
		"[Line 2] Error near 'fungsi': feature 'fungsi' is not enabled",
		"[Line 3] Error near '[': feature 'list literal' is not enabled",
	]);
}

#[test]
fn repl_session_persists_between_lines() {
	let mut session = Session::new();
	assert_eq!(session.run("biar hitung = 1\n").unwrap().status, Status::Success);
	assert_eq!(session.run("hitung = hitung +\n").unwrap().status, Status::BadInput { lexical: 0, parse: 1 });
	assert_eq!(session.run("tulis(hitung / 0)\n").unwrap().diagnostics.len(), 1);
	assert_eq!(session.run("hitung = hitung + 1\n").unwrap().status, Status::Success);
	assert_eq!(session.run("tulis(hitung)\n").unwrap().output, ["2"]);
}

#[test]
fn exit_codes() {
	let code = |source: &str| run(source).into_result().err().map(|e| e.exit_code());
	assert_eq!(code("tulis(1)"), None);
	assert_eq!(code("tulis(1"), Some(65));
	assert_eq!(code("@"), Some(65));
	assert_eq!(code("tulis(-nil)"), Some(70));
}

#[test]
fn showcase_script() {
	let source = std::fs::read_to_string(script("showcase.morph")).unwrap();
	let outcome = run(&source);
	assert_eq!(outcome.diagnostics, Vec::<String>::new());
	assert_eq!(outcome.output.join("\n"), [
		"halo, dunia",
		"di dalam: 100",
		"di luar: 1",
		"besar 6",
		"0.25 -3 benar nil",
		"benar salah",
		"salah salah benar",
	]
	.join("\n"));
}

#[test]
fn run_file() {
	assert!(Morph.run_file(script("showcase.morph")).is_ok());
	assert!(matches!(Morph.run_file(script("errors.morph")), Err(MorphError::BadInput { lexical: 0, parse: 2 })));
	assert_eq!(Morph.run_file(script("missing.morph")).unwrap_err().exit_code(), 74);
}
