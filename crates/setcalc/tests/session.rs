//! Session scenarios driven through the public API

use bitset::{Bitset, Register, SetOp};
use indoc::{formatdoc, indoc};
use setcalc::{
    run_lines, Flow, Operation, ScriptConfig, Session, SessionError, State, ValidationError,
};

/// Feed every line and return the session.
fn feed_all(input: &str) -> Session {
    let mut session = Session::captured();
    for line in input.lines() {
        session.feed(line);
    }
    session
}

fn printed(session: &mut Session, register: Register) -> String {
    session.clear_output();
    session.feed(&format!("print_set {}", register));
    session.get_output().join("\n")
}

#[test]
fn every_register_starts_empty() {
    let mut session = Session::captured();
    for register in Register::ALL {
        assert_eq!(printed(&mut session, register), "The set is empty.");
    }
}

#[test]
fn terminator_only_read_empties_a_register() {
    let mut session = feed_all(indoc! {"
        read_set SETB, 1, 2, 3, -1
        read_set SETB, -1
    "});
    assert!(session.registers().get(Register::B).is_empty());
    assert_eq!(printed(&mut session, Register::B), "The set is empty.");
}

#[test]
fn input_order_does_not_matter() {
    let mut session = feed_all(indoc! {"
        read_set SETA, 3, 10, 127, -1
        read_set SETB, 127, 3, 10, -1
    "});
    assert_eq!(printed(&mut session, Register::A), "{3, 10, 127}");
    assert_eq!(printed(&mut session, Register::B), "{3, 10, 127}");
}

#[test]
fn union_with_itself_is_unchanged() {
    let mut session = feed_all(indoc! {"
        read_set SETC, 0, 17, 64, 127, -1
        union_set SETC, SETC, SETC
    "});
    assert_eq!(
        session.registers().get(Register::C),
        &Bitset::from_members(&[0, 17, 64, 127])
    );
    assert_eq!(printed(&mut session, Register::C), "{0, 17, 64, 127}");
}

#[test]
fn commutative_operations() {
    for op in [SetOp::Union, SetOp::Intersect, SetOp::SymDiff] {
        let session = feed_all(&formatdoc! {"
            read_set SETA, 1, 2, 3, 90, -1
            read_set SETB, 3, 4, 90, 127, -1
            {op} SETA, SETB, SETC
            {op} SETB, SETA, SETD
            ",
            op = Operation::Combine(op)
        });
        assert_eq!(
            session.registers().get(Register::C),
            session.registers().get(Register::D),
            "{} should commute",
            op
        );
    }
}

#[test]
fn difference_does_not_commute() {
    let session = feed_all(indoc! {"
        read_set SETA, 1, 2, 3, -1
        read_set SETB, 3, 4, -1
        sub_set SETA, SETB, SETC
        sub_set SETB, SETA, SETD
    "});
    let registers = session.registers();
    assert_eq!(registers.get(Register::C), &Bitset::from_members(&[1, 2]));
    assert_eq!(registers.get(Register::D), &Bitset::from_members(&[4]));
    assert_ne!(registers.get(Register::C), registers.get(Register::D));
}

#[test]
fn rejected_lines_leave_state_unchanged() {
    let mut session = feed_all("read_set SETA, 5, 6, -1");
    let before = session.registers().clone();

    for line in [
        "read_set SETA, 7, 128, -1",
        "read_set SETA, 7, -2, -1",
        "read_set SETA, 7, 8",
        "union_set SETA, SETB, SETC, SETD",
        "sub_set SETB, SETA,, SETA",
        "read_set SETA 7, -1",
    ] {
        assert_eq!(session.feed(line), Flow::Continue);
        assert_eq!(session.registers(), &before, "{} changed state", line);
    }
    assert_eq!(session.get_output().len(), 6);
    assert!(session.get_output().iter().all(|line| line.starts_with("Error: ")));
}

#[test]
fn execute_line_reports_the_reason() {
    let mut session = Session::captured();
    assert_eq!(session.execute_line("stop"), Ok(Flow::Stop));

    let mut session = Session::captured();
    assert_eq!(
        session.execute_line("stop ,"),
        Err(SessionError::Rejected(ValidationError::CommaAfterOperation))
    );
    assert_eq!(session.execute_line("read_set SETA,1,2,-1"), Ok(Flow::Continue));
    assert_eq!(
        session.execute_line("union_set SETA, SETB, SETC, SETD"),
        Err(SessionError::Rejected(ValidationError::WrongOperandCount(
            Operation::Combine(SetOp::Union)
        )))
    );
}

#[test]
fn stop_terminates_the_session() {
    let mut session = feed_all(indoc! {"
        read_set SETA, 1, -1
        stop
    "});
    assert_eq!(session.state(), State::Terminated);
    assert_eq!(
        session.execute_line("print_set SETA"),
        Err(SessionError::Terminated)
    );
}

#[test]
fn script_without_stop_fails() {
    let mut session = Session::captured();
    let script = indoc! {"
        read_set SETA, 1, -1
        print_set SETA
    "};
    let err = run_lines(&mut session, script.as_bytes(), &ScriptConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Missing stop command");
    assert_eq!(session.get_output(), ["> read_set SETA, 1, -1", "> print_set SETA", "{1}"]);
}

#[test]
fn strict_script_stops_at_first_rejection() {
    let mut session = Session::captured();
    let script = indoc! {"
        read_set SETA, 1, -1
        read_set SETA, 2, 3
        read_set SETA, 9, -1
        stop
    "};
    let err = run_lines(&mut session, script.as_bytes(), &ScriptConfig { strict: true }).unwrap_err();
    assert_eq!(err.to_string(), "Line 2: aborted on rejected command");
    assert_eq!(session.registers().get(Register::A), &Bitset::from_members(&[1]));
    assert_eq!(
        session.get_output().last().map(String::as_str),
        Some("Error: A read_set command should be terminated with a -1.")
    );
}
