//! Request dispatcher
//!
//! A [`Session`] owns the [`Roster`] and the [`Transcript`] for one run of the
//! program. Front ends feed it one [`Request`] at a time through
//! [`Session::dispatch`] and render whatever it appended to the transcript.
//!
//! # Missing students
//!
//! Viewing a balance or paying fees for an unknown identifier always reports
//! "Student not found". Enrolling and showing status stay silent under
//! [`LookupPolicy::Lenient`] (the historical behavior) and report it too under
//! [`LookupPolicy::Strict`].

use crate::errors::RosterError;
use crate::menu::{Flow, Request};
use crate::roster::Roster;
use crate::transcript::{Tone, Transcript};
use tracing::debug;

pub const WELCOME: &str = "Welcome to the Student Management System";
pub const FAREWELL: &str = "Thank you for using the Student Management System. Exiting...";
const RULE_WIDTH: usize = 60;

/// What enroll and show-status do when the identifier does not resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    /// Say nothing, change nothing
    #[default]
    Lenient,
    /// Report "Student not found" like view-balance and pay-fees do
    Strict,
}

#[derive(Debug)]
pub struct Session {
    roster: Roster,
    transcript: Transcript,
    policy: LookupPolicy,
    opened: bool,
    exited: bool,
}

impl Session {
    pub fn new(roster: Roster, policy: LookupPolicy) -> Self {
        Session {
            roster,
            transcript: Transcript::new(),
            policy,
            opened: false,
            exited: false,
        }
    }

    /// Print the welcome banner. Only the first call has an effect.
    pub fn open(&mut self) {
        if self.opened {
            return;
        }
        self.opened = true;
        self.transcript.push(Tone::Banner, WELCOME);
        self.transcript.push(Tone::Rule, "-".repeat(RULE_WIDTH));
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Report a rejected input line without touching the roster
    pub fn reject(&mut self, message: impl Into<String>) {
        self.transcript.error(message);
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Run one request against the roster and report the outcome.
    pub fn dispatch(&mut self, request: Request) -> Flow {
        debug!(choice = %request.choice(), "dispatching request");
        match request {
            Request::AddStudent { name } => {
                let student = self.roster.add_student(name);
                self.transcript.success(format!(
                    "Student {} added successfully. Student ID: {}",
                    student.name(),
                    student.id()
                ));
            }
            Request::EnrollStudent { student_id, course } => {
                match self.roster.enroll_student(&student_id, course.as_str()) {
                    Ok(student) => self.transcript.success(format!(
                        "{} enrolled in {} successfully",
                        student.name(),
                        course
                    )),
                    Err(err) => self.missing(err, false),
                }
            }
            Request::ViewBalance { student_id } => {
                match self.roster.view_student_balance(&student_id) {
                    Ok(student) => student.report_balance(&mut self.transcript),
                    Err(err) => self.missing(err, true),
                }
            }
            Request::PayFees { student_id, amount } => {
                match self.roster.pay_student_fees(&student_id, amount) {
                    Ok(student) => student.report_payment(amount, &mut self.transcript),
                    Err(err) => self.missing(err, true),
                }
            }
            Request::ShowStatus { student_id } => {
                match self.roster.show_student_status(&student_id) {
                    Ok(student) => student.report_status(&mut self.transcript),
                    Err(err) => self.missing(err, false),
                }
            }
            Request::Exit => {
                self.exited = true;
                self.transcript.push(Tone::Banner, FAREWELL);
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    fn missing(&mut self, err: RosterError, always_report: bool) {
        let reported = always_report || self.policy == LookupPolicy::Strict;
        debug!(id = err.id(), reported, "lookup missed");
        if reported {
            self.transcript.error(err.to_string());
        }
    }
}
