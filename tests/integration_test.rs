// Integration tests for the roster and dispatcher

use rostty::menu::{Flow, Request};
use rostty::roster::Roster;
use rostty::session::{LookupPolicy, Session};

fn since(session: &Session, mark: usize) -> Vec<String> {
    session
        .transcript()
        .since(mark)
        .iter()
        .map(|l| l.text.clone())
        .collect()
}

fn dispatch(session: &mut Session, request: Request) -> Vec<String> {
    let mark = session.transcript().len();
    assert_eq!(session.dispatch(request), Flow::Continue);
    since(session, mark)
}

#[test]
fn test_alice_walkthrough() {
    let mut session = Session::new(Roster::new(), LookupPolicy::Lenient);

    let out = dispatch(
        &mut session,
        Request::AddStudent {
            name: "Alice".to_string(),
        },
    );
    assert_eq!(out, ["Student Alice added successfully. Student ID: 10000"]);
    let alice = session.roster().find_student("10000").expect("Alice exists");
    assert_eq!(alice.balance(), 100.0);

    dispatch(
        &mut session,
        Request::EnrollStudent {
            student_id: "10000".to_string(),
            course: "Math".to_string(),
        },
    );
    assert_eq!(
        session.roster().find_student("10000").unwrap().courses(),
        ["Math"]
    );

    let out = dispatch(
        &mut session,
        Request::PayFees {
            student_id: "10000".to_string(),
            amount: 30.0,
        },
    );
    assert_eq!(
        out,
        [
            "$30 Fees paid successfully for Alice",
            "Remaining Balance: $70"
        ]
    );
    assert_eq!(session.roster().find_student("10000").unwrap().balance(), 70.0);

    let out = dispatch(
        &mut session,
        Request::ViewBalance {
            student_id: "10000".to_string(),
        },
    );
    assert_eq!(out, ["Balance for Alice: 70"]);

    let out = dispatch(
        &mut session,
        Request::ShowStatus {
            student_id: "10000".to_string(),
        },
    );
    assert_eq!(
        out,
        ["Name: Alice", "ID: 10000", "Courses: Math", "Balance: 70"]
    );

    let out = dispatch(
        &mut session,
        Request::ViewBalance {
            student_id: "99999".to_string(),
        },
    );
    assert_eq!(out, ["Student not found. Please enter a correct student ID"]);
}

#[test]
fn test_missing_student_leaves_roster_untouched() {
    let mut session = Session::new(Roster::new(), LookupPolicy::Lenient);
    dispatch(
        &mut session,
        Request::AddStudent {
            name: "Alice".to_string(),
        },
    );

    let enroll = dispatch(
        &mut session,
        Request::EnrollStudent {
            student_id: "10001".to_string(),
            course: "Art".to_string(),
        },
    );
    let status = dispatch(
        &mut session,
        Request::ShowStatus {
            student_id: "10001".to_string(),
        },
    );
    let pay = dispatch(
        &mut session,
        Request::PayFees {
            student_id: "10001".to_string(),
            amount: 50.0,
        },
    );

    assert!(enroll.is_empty());
    assert!(status.is_empty());
    assert_eq!(pay, ["Student not found. Please enter a correct student ID"]);

    let alice = session.roster().find_student("10000").unwrap();
    assert!(alice.courses().is_empty());
    assert_eq!(alice.balance(), 100.0);
    assert_eq!(session.roster().len(), 1);
}

#[test]
fn test_overpayment_goes_negative() {
    let mut session = Session::new(Roster::new(), LookupPolicy::Lenient);
    dispatch(
        &mut session,
        Request::AddStudent {
            name: "Bob".to_string(),
        },
    );
    let out = dispatch(
        &mut session,
        Request::PayFees {
            student_id: "10000".to_string(),
            amount: 250.0,
        },
    );
    assert_eq!(out[1], "Remaining Balance: $-150");
    assert_eq!(session.roster().find_student("10000").unwrap().balance(), -150.0);
}

#[test]
fn test_ids_are_never_reused() {
    let mut session = Session::new(Roster::new(), LookupPolicy::Strict);
    let mut seen = Vec::new();
    for name in ["A", "B", "A", "C"] {
        session.dispatch(Request::AddStudent {
            name: name.to_string(),
        });
        seen.push(session.roster().students().last().unwrap().id().to_string());
    }
    assert_eq!(seen, ["10000", "10001", "10002", "10003"]);
}
