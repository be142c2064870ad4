// Constants for the roster

/// Identifier handed to the first student of a fresh roster
/// Later students count up from here, one per creation
pub const FIRST_STUDENT_ID: u64 = 10_000;

/// Balance every new student starts with
pub const OPENING_BALANCE: f64 = 100.0;
