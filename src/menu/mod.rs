//! Menu surface shared by the TUI and the line prompt
//!
//! - [`MenuChoice`]: the six selectable actions, their labels and prompted fields
//! - [`fields`]: what each field asks for and how a raw answer is parsed
//! - [`request`]: the structured [`Request`] built from a choice and its answers
//!
//! A front end shows [`MenuChoice::ALL`], collects one answer per entry of
//! [`MenuChoice::fields`], builds a [`Request`] and hands it to
//! [`Session::dispatch`](crate::session::Session::dispatch).

pub mod fields;
pub mod request;

pub use fields::{Answer, Field, FieldKey, FieldKind};
pub use request::Request;

use crate::errors::InputError;
use std::fmt;

/// Whether the loop should keep reading requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A selectable menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    EnrollStudent,
    ViewBalance,
    PayFees,
    ShowStatus,
    Exit,
}

const NAME: Field = Field {
    key: FieldKey::Name,
    message: "Enter student name:",
    kind: FieldKind::Text,
};

const STUDENT_ID: Field = Field {
    key: FieldKey::StudentId,
    message: "Enter student ID:",
    kind: FieldKind::Text,
};

const A_STUDENT_ID: Field = Field {
    key: FieldKey::StudentId,
    message: "Enter a student ID:",
    kind: FieldKind::Text,
};

const COURSE: Field = Field {
    key: FieldKey::Course,
    message: "Enter course name:",
    kind: FieldKind::Text,
};

const AMOUNT: Field = Field {
    key: FieldKey::Amount,
    message: "Enter amount:",
    kind: FieldKind::Number,
};

impl MenuChoice {
    /// Menu order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddStudent,
        MenuChoice::EnrollStudent,
        MenuChoice::ViewBalance,
        MenuChoice::PayFees,
        MenuChoice::ShowStatus,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add Student",
            MenuChoice::EnrollStudent => "Enroll Student",
            MenuChoice::ViewBalance => "View Student Balance",
            MenuChoice::PayFees => "Pay Student Fees",
            MenuChoice::ShowStatus => "Show Student Status",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Fields prompted for, in order
    pub fn fields(self) -> &'static [Field] {
        match self {
            MenuChoice::AddStudent => &[NAME],
            MenuChoice::EnrollStudent => &[STUDENT_ID, COURSE],
            MenuChoice::ViewBalance => &[A_STUDENT_ID],
            MenuChoice::PayFees => &[A_STUDENT_ID, AMOUNT],
            MenuChoice::ShowStatus => &[A_STUDENT_ID],
            MenuChoice::Exit => &[],
        }
    }

    /// Position in [`ALL`](Self::ALL)
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&c| c == self)
            .unwrap_or_default()
    }

    /// Parse a typed selection: a 1-based menu number or a label (case-insensitive).
    pub fn parse_selection(input: &str) -> Result<MenuChoice, InputError> {
        let trimmed = input.trim();
        let by_number = trimmed
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied());

        by_number
            .or_else(|| {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| InputError::InvalidSelection {
                input: trimmed.to_string(),
            })
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_by_number_and_label() {
        assert_eq!(MenuChoice::parse_selection("1"), Ok(MenuChoice::AddStudent));
        assert_eq!(MenuChoice::parse_selection(" 4 \n"), Ok(MenuChoice::PayFees));
        assert_eq!(
            MenuChoice::parse_selection("show student status"),
            Ok(MenuChoice::ShowStatus)
        );
        assert_eq!(MenuChoice::parse_selection("EXIT"), Ok(MenuChoice::Exit));
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        for bad in ["0", "7", "", "Delete Student", "-1"] {
            assert!(
                matches!(
                    MenuChoice::parse_selection(bad),
                    Err(InputError::InvalidSelection { .. })
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn index_matches_menu_order() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.index(), i);
        }
    }

    #[test]
    fn only_payment_asks_for_a_number() {
        for choice in MenuChoice::ALL {
            let numeric = choice
                .fields()
                .iter()
                .any(|f| f.kind == FieldKind::Number);
            assert_eq!(numeric, choice == MenuChoice::PayFees, "{choice}");
        }
        assert!(MenuChoice::Exit.fields().is_empty());
    }

    #[test]
    fn fields_ask_in_request_order() {
        let keys = |c: MenuChoice| c.fields().iter().map(|f| f.key).collect::<Vec<_>>();
        assert_eq!(keys(MenuChoice::AddStudent), [FieldKey::Name]);
        assert_eq!(
            keys(MenuChoice::EnrollStudent),
            [FieldKey::StudentId, FieldKey::Course]
        );
        assert_eq!(
            keys(MenuChoice::PayFees),
            [FieldKey::StudentId, FieldKey::Amount]
        );
        assert_eq!(keys(MenuChoice::ShowStatus), [FieldKey::StudentId]);
    }
}
