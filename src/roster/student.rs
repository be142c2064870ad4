//! A single student record and its reports

use crate::transcript::Transcript;

/// One managed record: identity, name, enrolled courses and cash balance.
///
/// Students are only created by [`Roster::add_student`](super::Roster::add_student),
/// which hands out the identifier. Name and courses are never validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: String,
    name: String,
    courses: Vec<String>,
    balance: f64,
}

impl Student {
    pub(crate) fn new(id: String, name: String, opening_balance: f64) -> Self {
        Student {
            id,
            name,
            courses: Vec::new(),
            balance: opening_balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Courses in enrollment order, duplicates included
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Append a course. No uniqueness check.
    pub fn enroll(&mut self, course: impl Into<String>) {
        self.courses.push(course.into());
    }

    /// Subtract `amount` from the balance and return what is left.
    ///
    /// There is no floor: zero, negative and overlarge amounts all go through.
    pub fn pay_fees(&mut self, amount: f64) -> f64 {
        self.balance -= amount;
        self.balance
    }

    pub fn report_balance(&self, out: &mut Transcript) {
        out.success(format!("Balance for {}: {}", self.name, self.balance));
    }

    /// Confirmation printed after [`pay_fees`](Self::pay_fees)
    pub fn report_payment(&self, amount: f64, out: &mut Transcript) {
        out.success(format!("${} Fees paid successfully for {}", amount, self.name));
        out.notice(format!("Remaining Balance: ${}", self.balance));
    }

    pub fn report_status(&self, out: &mut Transcript) {
        out.success(format!("Name: {}", self.name));
        out.success(format!("ID: {}", self.id));
        out.success(format!("Courses: {}", self.courses.join(",")));
        out.success(format!("Balance: {}", self.balance));
    }
}
