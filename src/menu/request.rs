// Structured requests built from a menu choice and its answers

use super::{Answer, MenuChoice};
use crate::errors::InputError;

/// One fully-specified operator request
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    AddStudent { name: String },
    EnrollStudent { student_id: String, course: String },
    ViewBalance { student_id: String },
    PayFees { student_id: String, amount: f64 },
    ShowStatus { student_id: String },
    Exit,
}

impl Request {
    /// Assemble a request from answers given in [`MenuChoice::fields`] order.
    pub fn from_answers(choice: MenuChoice, answers: &[Answer]) -> Result<Request, InputError> {
        let incomplete = || InputError::IncompleteForm {
            choice,
            expected: choice.fields().len(),
            got: answers.len(),
        };

        let request = match (choice, answers) {
            (MenuChoice::AddStudent, [Answer::Text(name)]) => Request::AddStudent {
                name: name.clone(),
            },
            (MenuChoice::EnrollStudent, [Answer::Text(id), Answer::Text(course)]) => {
                Request::EnrollStudent {
                    student_id: id.clone(),
                    course: course.clone(),
                }
            }
            (MenuChoice::ViewBalance, [Answer::Text(id)]) => Request::ViewBalance {
                student_id: id.clone(),
            },
            (MenuChoice::PayFees, [Answer::Text(id), Answer::Number(amount)]) => {
                Request::PayFees {
                    student_id: id.clone(),
                    amount: *amount,
                }
            }
            (MenuChoice::ShowStatus, [Answer::Text(id)]) => Request::ShowStatus {
                student_id: id.clone(),
            },
            (MenuChoice::Exit, []) => Request::Exit,
            _ => return Err(incomplete()),
        };
        Ok(request)
    }

    /// The menu entry this request came from
    pub fn choice(&self) -> MenuChoice {
        match self {
            Request::AddStudent { .. } => MenuChoice::AddStudent,
            Request::EnrollStudent { .. } => MenuChoice::EnrollStudent,
            Request::ViewBalance { .. } => MenuChoice::ViewBalance,
            Request::PayFees { .. } => MenuChoice::PayFees,
            Request::ShowStatus { .. } => MenuChoice::ShowStatus,
            Request::Exit => MenuChoice::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    #[test]
    fn payment_request_carries_parsed_amount() {
        let req = Request::from_answers(
            MenuChoice::PayFees,
            &[text("10000"), Answer::Number(30.0)],
        )
        .unwrap();
        assert_eq!(
            req,
            Request::PayFees {
                student_id: "10000".to_string(),
                amount: 30.0
            }
        );
        assert_eq!(req.choice(), MenuChoice::PayFees);
    }

    #[test]
    fn missing_answers_are_reported() {
        let err = Request::from_answers(MenuChoice::EnrollStudent, &[text("10000")]).unwrap_err();
        assert_eq!(
            err,
            InputError::IncompleteForm {
                choice: MenuChoice::EnrollStudent,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn text_in_amount_slot_is_rejected() {
        assert!(Request::from_answers(MenuChoice::PayFees, &[text("10000"), text("30")]).is_err());
    }

    #[test]
    fn exit_takes_no_answers() {
        assert_eq!(Request::from_answers(MenuChoice::Exit, &[]), Ok(Request::Exit));
    }
}
