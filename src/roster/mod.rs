//! In-memory student roster
//!
//! This module provides the domain model:
//! - [`student`]: the [`Student`] record and the reports it prints
//! - [`constants`]: first identifier and opening balance
//!
//! # Identifiers
//!
//! Identifiers are strings handed out by the roster's own counter, starting at
//! [`FIRST_STUDENT_ID`] and incremented once per student. They are never reused.
//! Lookups go through an identifier index, so they behave exactly like a
//! first-match scan of the insertion-ordered list.
//!
//! # Missing students
//!
//! Every lookup-backed operation returns [`RosterError::StudentNotFound`] when the
//! identifier does not resolve. Whether the operator gets to see that is decided by
//! the caller (see [`Session`](crate::session::Session)).

pub mod constants;
pub mod student;

pub use constants::{FIRST_STUDENT_ID, OPENING_BALANCE};
pub use student::Student;

use crate::errors::RosterError;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Tunables for a fresh roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterConfig {
    pub first_id: u64,
    pub opening_balance: f64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            first_id: FIRST_STUDENT_ID,
            opening_balance: OPENING_BALANCE,
        }
    }
}

/// All students of the running process, in creation order
#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
    index: FxHashMap<String, usize>,
    next_id: u64,
    opening_balance: f64,
}

impl Roster {
    pub fn new() -> Self {
        Self::with_config(RosterConfig::default())
    }

    pub fn with_config(config: RosterConfig) -> Self {
        Roster {
            students: Vec::new(),
            index: FxHashMap::default(),
            next_id: config.first_id,
            opening_balance: config.opening_balance,
        }
    }

    /// Create a student with the next identifier. Always succeeds.
    pub fn add_student(&mut self, name: impl Into<String>) -> &Student {
        let id = self.next_id.to_string();
        self.next_id += 1;

        let student = Student::new(id.clone(), name.into(), self.opening_balance);
        info!(id = %student.id(), name = %student.name(), "student added");

        let position = self.students.len();
        self.index.insert(id, position);
        self.students.push(student);
        &self.students[position]
    }

    /// Exact-match lookup. Absence is not an error here.
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.index.get(id).map(|&i| &self.students[i])
    }

    fn find_student_mut(&mut self, id: &str) -> Option<&mut Student> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.students[i]),
            None => None,
        }
    }

    fn lookup(&self, id: &str) -> Result<&Student, RosterError> {
        self.find_student(id).ok_or_else(|| not_found(id))
    }

    fn lookup_mut(&mut self, id: &str) -> Result<&mut Student, RosterError> {
        match self.find_student_mut(id) {
            Some(student) => Ok(student),
            None => Err(not_found(id)),
        }
    }

    pub fn enroll_student(
        &mut self,
        id: &str,
        course: impl Into<String>,
    ) -> Result<&Student, RosterError> {
        let student = self.lookup_mut(id)?;
        let course = course.into();
        debug!(id, course = %course, "enrolling student");
        student.enroll(course);
        Ok(student)
    }

    pub fn view_student_balance(&self, id: &str) -> Result<&Student, RosterError> {
        let student = self.lookup(id)?;
        debug!(id, balance = student.balance(), "viewing balance");
        Ok(student)
    }

    pub fn pay_student_fees(&mut self, id: &str, amount: f64) -> Result<&Student, RosterError> {
        let student = self.lookup_mut(id)?;
        let remaining = student.pay_fees(amount);
        info!(id, amount, remaining, "fees paid");
        Ok(student)
    }

    pub fn show_student_status(&self, id: &str) -> Result<&Student, RosterError> {
        let student = self.lookup(id)?;
        debug!(id, "showing status");
        Ok(student)
    }

    /// Students in creation order
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &str) -> RosterError {
    debug!(id, "student not found");
    RosterError::StudentNotFound { id: id.to_string() }
}
