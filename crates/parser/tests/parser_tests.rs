//! Integration tests for the command language.
//!
//! Each test drives a [`Session`] with a collecting sink and checks what
//! reached the output channel and what state the session kept.

use compsim_common::Output;
use compsim_parser::Session;

// ============================================================
// Helper functions
// ============================================================

fn session() -> Session<Vec<Output>> {
    Session::new(Vec::new())
}

/// Feed lines one at a time and return everything that was emitted.
fn feed(lines: &[&str]) -> Vec<Output> {
    let mut s = session();
    for line in lines {
        s.read_line(line);
    }
    s.into_sink()
}

fn failure(message: &str) -> Output {
    Output::Failure(message.to_string())
}

// ============================================================
// Variables and session end
// ============================================================

#[test]
fn assignment_stores_and_overwrites() {
    let mut s = session();
    s.read_line("x = 5");
    assert_eq!(s.variable("x"), Some(5));
    s.read_line("x = 7");
    assert_eq!(s.variable("x"), Some(7));
    assert_eq!(s.variable("y"), None);
    assert!(s.sink().is_empty());
}

#[test]
fn exit_resets_everything() {
    let mut s = session();
    for line in ["x = 5", "def f", "c = Computer.new(10)", "end", "f"] {
        s.read_line(line);
    }
    assert!(s.computer().is_some());

    s.read_line("exit()");

    assert_eq!(s.variable("x"), None);
    assert!(s.function().is_none());
    assert!(s.computer().is_none());
    assert_eq!(s.computer_name(), None);
    assert_eq!(s.sink(), &vec![Output::SessionEnded]);
}

#[test]
fn comments_and_unknown_lines_do_nothing() {
    let out = feed(&["# hello", "   ", "print 5", "x == 3", "f"]);
    assert!(out.is_empty());
}

// ============================================================
// Function definition and capture
// ============================================================

#[test]
fn definition_captures_body_verbatim() {
    let mut s = session();
    s.read_line("def f");
    assert!(s.is_capturing());
    s.read_line("  x = 1");
    s.read_line("def g");
    s.read_line("# skipped");
    s.read_line("end");
    assert!(!s.is_capturing());

    let f = s.function().unwrap();
    assert_eq!(f.name(), "f");
    assert_eq!(f.body(), ["  x = 1".to_string(), "def g".to_string()]);
    // Assignments inside a body are captured, not executed.
    assert_eq!(s.variable("x"), None);
}

#[test]
fn new_definition_replaces_old_one() {
    let mut s = session();
    for line in ["def f", "a", "end", "def g", "b", "end"] {
        s.read_line(line);
    }
    let g = s.function().unwrap();
    assert_eq!(g.name(), "g");
    assert_eq!(g.body(), ["b".to_string()]);
}

#[test]
fn calling_a_replaced_function_does_nothing() {
    let out = feed(&[
        "def f",
        "c = Computer.new(10)",
        r#"c.insert("PUSH", 1).insert("PRINT").insert("STOP").set_address(0).execute()"#,
        "end",
        "def g",
        "end",
        "f",
    ]);
    assert!(out.is_empty());
}

// ============================================================
// Replay
// ============================================================

#[test]
fn scenario_print_variable() {
    let out = feed(&[
        "x = 5",
        "def f",
        "c = Computer.new(10)",
        r#"c.set_address(0).insert("PUSH", x).insert("PRINT").insert("STOP").set_address(0).execute()"#,
        "end",
        "f",
    ]);
    assert_eq!(out, vec![Output::Printed(5)]);
}

#[test]
fn execute_right_after_inserts_starts_past_the_program() {
    // Inserting advances the program counter, so without a rewind the run
    // starts on the empty cell after STOP.
    let out = feed(&[
        "x = 5",
        "def f",
        "c = Computer.new(10)",
        r#"c.set_address(0).insert("PUSH", x).insert("PRINT").insert("STOP").execute()"#,
        "end",
        "f",
    ]);
    assert_eq!(out, vec![failure("no instruction at address 3")]);
}

#[test]
fn methods_across_several_body_lines() {
    let out = feed(&[
        "a = 6",
        "b = 7",
        "def main",
        "m = Computer.new(20)",
        r#"m.insert("PUSH", a)"#,
        r#"m.insert("PUSH", b)"#,
        r#"m.insert("MULT").insert("PRINT").insert("STOP")"#,
        "m.set_address(0)",
        "m.execute()",
        "end",
        "main()",
    ]);
    assert_eq!(out, vec![Output::Printed(42)]);
}

#[test]
fn function_can_be_called_repeatedly() {
    let out = feed(&[
        "def f",
        "c = Computer.new(5)",
        r#"c.insert("PUSH", 3).insert("PRINT").insert("STOP").set_address(0).execute()"#,
        "end",
        "f",
        "f",
    ]);
    assert_eq!(out, vec![Output::Printed(3), Output::Printed(3)]);
}

#[test]
fn constructor_binds_name() {
    let mut s = session();
    for line in ["def f", "  comp = Computer.new(0)", "end", "f"] {
        s.read_line(line);
    }
    assert_eq!(s.computer_name(), Some("comp"));
    assert_eq!(s.computer().map(|c| c.size()), Some(100));
}

#[test]
fn later_constructor_replaces_computer() {
    let mut s = session();
    for line in [
        "def f",
        "a = Computer.new(10)",
        "b = Computer.new(3)",
        r#"a.insert("STOP")"#,
        "end",
        "f",
    ] {
        s.read_line(line);
    }
    assert_eq!(s.computer_name(), Some("b"));
    assert_eq!(s.computer().map(|c| c.size()), Some(3));
    assert_eq!(s.computer().map(|c| c.program_counter()), Some(0));
}

#[test]
fn methods_before_constructor_are_ignored() {
    let out = feed(&["def f", "c.execute()", "end", "f"]);
    assert!(out.is_empty());
}

#[test]
fn variables_are_read_at_call_time() {
    let out = feed(&[
        "def f",
        "c = Computer.new(10)",
        r#"c.insert("PUSH", v).insert("PRINT").insert("STOP").set_address(0).execute()"#,
        "end",
        "v = 9",
        "f",
    ]);
    assert_eq!(out, vec![Output::Printed(9)]);
}

// ============================================================
// Error forwarding and silent skips
// ============================================================

#[test]
fn engine_failures_are_forwarded_and_processing_continues() {
    let out = feed(&[
        "def f",
        "c = Computer.new(10)",
        "c.set_address(10)",
        r#"c.insert("JUMP")"#,
        r#"c.insert("PUSH")"#,
        "c.execute()",
        r#"c.insert("PUSH", 4).insert("PRINT").insert("STOP").set_address(0).execute()"#,
        "end",
        "f",
    ]);
    assert_eq!(
        out,
        vec![
            failure("program counter 10 is out of bounds (size 10)"),
            failure("invalid instruction 'JUMP'"),
            failure("PUSH requires an argument"),
            failure("no instruction at address 0"),
            Output::Printed(4),
        ]
    );
}

#[test]
fn runtime_failure_after_print() {
    let out = feed(&[
        "def f",
        "c = Computer.new(10)",
        r#"c.insert("PUSH", 2).insert("PRINT").insert("PRINT").set_address(0).execute()"#,
        "end",
        "f",
    ]);
    assert_eq!(
        out,
        vec![
            Output::Printed(2),
            failure("PRINT needs a pushed value at address 2"),
        ]
    );
}

#[test]
fn unknown_variable_skips_the_call() {
    let mut s = session();
    for line in [
        "def f",
        "c = Computer.new(10)",
        "c.set_address(4)",
        "c.set_address(nowhere)",
        r#"c.insert("PUSH", nothing)"#,
        "end",
        "f",
    ] {
        s.read_line(line);
    }
    let computer = s.computer().unwrap();
    assert_eq!(computer.program_counter(), 4);
    assert_eq!(computer.store().peek(4), None);
    assert!(s.sink().is_empty());
}

#[test]
fn malformed_tokens_are_ignored() {
    let out = feed(&[
        "def f",
        "c = Computer.new(10)",
        r#"c.insert(PUSH).jump().insert("STOP").set_address(0).execute()"#,
        "end",
        "f",
    ]);
    assert!(out.is_empty());
}

#[test]
fn negative_literal_address_is_reported() {
    let out = feed(&["def f", "c = Computer.new(10)", "c.set_address(-1)", "end", "f"]);
    assert_eq!(
        out,
        vec![failure("program counter -1 is out of bounds (size 10)")]
    );
}

// ============================================================
// Call and return through the language
// ============================================================

#[test]
fn call_and_return_program() {
    let out = feed(&[
        "ret_to = 2",
        "sub = 6",
        "def f",
        "c = Computer.new(10)",
        r#"c.insert("PUSH", ret_to).insert("CALL", sub).insert("STOP")"#,
        r#"c.set_address(sub).insert("PUSH", 11).insert("PRINT").insert("RET")"#,
        "c.set_address(0).execute()",
        "end",
        "f",
    ]);
    // PUSH 11 lands above the return address, so PRINT consumes it and RET
    // pops the 2 pushed first.
    assert_eq!(out, vec![Output::Printed(11)]);
}

// ============================================================
// File mode
// ============================================================

#[test]
fn read_source_echoes_each_line() {
    let mut s = session();
    s.read_source("x = 3\ndef f\nc = Computer.new(4)\nc.insert(\"PUSH\", x).insert(\"PRINT\").insert(\"STOP\").set_address(0).execute()\nend\nf\n");
    let out = s.into_sink();
    assert_eq!(
        out,
        vec![
            Output::Echo("x = 3".to_string()),
            Output::Echo("def f".to_string()),
            Output::Echo("c = Computer.new(4)".to_string()),
            Output::Echo(
                r#"c.insert("PUSH", x).insert("PRINT").insert("STOP").set_address(0).execute()"#
                    .to_string()
            ),
            Output::Echo("end".to_string()),
            Output::Echo("f".to_string()),
            Output::Printed(3),
            Output::Echo(String::new()),
        ]
    );
}

#[test]
fn read_source_strips_carriage_returns() {
    let mut s = session();
    s.read_source("x = 1\r\ny = 2\r\n");
    assert_eq!(s.variable("x"), Some(1));
    assert_eq!(s.variable("y"), Some(2));
    assert_eq!(s.sink()[0], Output::Echo("x = 1".to_string()));
}

#[test]
fn read_source_continues_after_exit() {
    let mut s = session();
    s.read_source("x = 1\nexit()\ny = 2");
    assert_eq!(s.variable("x"), None);
    assert_eq!(s.variable("y"), Some(2));
    assert!(s.sink().contains(&Output::SessionEnded));
}
