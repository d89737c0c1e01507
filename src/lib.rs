//! # regex-kcount: occurrence counts of postfix regular expressions
//!
//! **`regex-kcount`** decides whether a regular expression written in postfix
//! (Reverse Polish) notation can match a string containing **exactly `k`**
//! occurrences of a tracked symbol.
//!
//! ## How it works
//!
//! No strings are enumerated and no automaton is built. Instead, every
//! sub-expression is abstracted by a [`CountSummary`][crate::summary::CountSummary]:
//! a quadruple of *zero reachability*, *minimum count*, *maximum count* (possibly `+∞`)
//! and *period*. Summaries are propagated bottom-up through a stack machine
//! by three combinators (union, concatenation and Kleene star), and the final
//! summary answers the membership query for `k`.
//!
//! The summary is an over-approximation, so some answers are looser than the
//! exact language would allow (e.g. a period-0 summary admits every count between its bounds).
//!
//! ## Syntax
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `a`, `b`, `c` | literal letters (configurable) |
//! | `1` | the empty string |
//! | `+` | union (binary) |
//! | `.` | concatenation (binary) |
//! | `*` | Kleene star (unary) |
//! | whitespace | ignored |
//!
//! ## Basic Usage
//!
//! ```rust
//! use regex_kcount::is_k_occurrences_possible;
//!
//! // A starred alternation admits any count
//! assert!(is_k_occurrences_possible("ab+c.aba.*.bac.+.+*", 'a', 2).unwrap());
//!
//! // "aa" has exactly two a's
//! assert!(is_k_occurrences_possible("aa.", 'a', 2).unwrap());
//! assert!(!is_k_occurrences_possible("aa.", 'a', 1).unwrap());
//!
//! // Malformed input is reported with its position
//! let err = is_k_occurrences_possible("a$", 'a', 1).unwrap_err();
//! assert_eq!(err.position(), Some(1));
//! ```
//!
//! ## Core Components
//!
//! - **[`summary`]**: the count summary and its combinators.
//! - **[`eval`]**: the postfix stack machine.
//! - **[`alphabet`]**: recognized symbols and their classification.
//! - **[`error`]**: typed evaluation errors.

pub mod alphabet;
pub mod bound;
pub mod error;
pub mod eval;
pub mod summary;

pub use alphabet::{Alphabet, Token};
pub use bound::Bound;
pub use error::{EvalError, Malformed};
pub use eval::{is_k_occurrences_possible, Evaluator, Step};
pub use summary::CountSummary;
