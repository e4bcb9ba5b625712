//! Selection expression parsing.
//!
//! Converts a free-text selection expression such as `1,3,5-8` plus the known
//! number of listed repositories into a validated [`SelectionSet`], or a
//! [`SelectionError`] naming exactly what the user got wrong.
//!
//! The grammar is comma-separated tokens, each either a single 1-based index
//! or an inclusive range `A-B`. Whitespace around tokens and around range
//! hyphens is ignored. Overlapping tokens are unioned; a repository referenced
//! twice counts once. Parsing is a pure function with no hidden state.

use std::collections::BTreeSet;

use crate::errors::SelectionError;

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;

/// A validated set of 1-based repository indices.
///
/// Invariants, established by [`parse`] and not otherwise constructible:
/// every index lies within `[1, N]` for the listing of `N` repositories the
/// set was parsed against, indices are deduplicated, and iteration order is
/// ascending so downstream deletion order is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionSet {
    indices: Vec<usize>,
}

impl SelectionSet {
    /// Returns the selected indices in ascending order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of selected repositories.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns whether the selection is empty.
    ///
    /// A set produced by [`parse`] is never empty; an empty expression is a
    /// [`SelectionError::Empty`] instead.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates the selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Parses a selection expression against a listing of `count` repositories.
///
/// # Arguments
///
/// * `expression` - The raw text the user entered, e.g. `1, 3, 5-8`.
/// * `count` - The number of listed repositories; valid indices are
///   `1..=count`.
///
/// # Errors
///
/// The whole expression is rejected on the first problem found; no partial
/// selection is produced.
///
/// * [`SelectionError::Empty`] - the expression is blank after trimming.
/// * [`SelectionError::Malformed`] - a token is not an integer literal or a
///   range of two integer literals (stray commas produce empty tokens, which
///   are malformed too).
/// * [`SelectionError::InvalidRange`] - a range whose start is greater than
///   its end.
/// * [`SelectionError::OutOfRange`] - a resolved index outside `[1, count]`.
///
/// # Examples
///
/// ```
/// use repo_reaper_core::selection;
///
/// let set = selection::parse("1,3,5-8", 10).unwrap();
/// assert_eq!(set.indices(), &[1, 3, 5, 6, 7, 8]);
/// ```
pub fn parse(expression: &str, count: usize) -> Result<SelectionSet, SelectionError> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(SelectionError::Empty);
    }

    let mut indices = BTreeSet::new();
    for raw_token in trimmed.split(',') {
        let token = raw_token.trim();
        if token.is_empty() {
            return Err(SelectionError::Malformed {
                token: token.to_string(),
            });
        }

        match token.split_once('-') {
            Some((start_literal, end_literal)) => {
                if end_literal.contains('-') {
                    return Err(SelectionError::Malformed {
                        token: token.to_string(),
                    });
                }

                let start = parse_index(start_literal, token)?;
                let end = parse_index(end_literal, token)?;
                if start > end {
                    return Err(SelectionError::InvalidRange {
                        token: token.to_string(),
                    });
                }

                // Bounds are checked on the endpoints so a typo like
                // `1-999999` fails before the range is materialized.
                check_bounds(start, count)?;
                check_bounds(end, count)?;
                indices.extend(start..=end);
            }
            None => {
                let index = parse_index(token, token)?;
                check_bounds(index, count)?;
                indices.insert(index);
            }
        }
    }

    Ok(SelectionSet {
        indices: indices.into_iter().collect(),
    })
}

fn parse_index(literal: &str, token: &str) -> Result<usize, SelectionError> {
    literal
        .trim()
        .parse::<usize>()
        .map_err(|_| SelectionError::Malformed {
            token: token.to_string(),
        })
}

fn check_bounds(index: usize, count: usize) -> Result<(), SelectionError> {
    if index < 1 || index > count {
        return Err(SelectionError::OutOfRange {
            index,
            bound: count,
        });
    }

    Ok(())
}
