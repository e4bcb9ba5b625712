//! Confirmation gate for the destructive path.
//!
//! Deletion only proceeds when the user types the confirmation keyword
//! exactly. The check is a pure predicate; displaying the abort message on
//! refusal is the caller's job.

#[cfg(test)]
#[path = "confirmation_tests.rs"]
mod tests;

/// The literal keyword a user must type to confirm deletion.
pub const CONFIRMATION_KEYWORD: &str = "DELETE";

/// Decides whether the destructive action proceeds.
///
/// Returns `true` only on an exact, case-sensitive match to
/// [`CONFIRMATION_KEYWORD`] after trimming leading and trailing whitespace.
/// Case variants such as `delete` or `Delete` do not confirm.
pub fn confirms_deletion(input: &str) -> bool {
    input.trim() == CONFIRMATION_KEYWORD
}
