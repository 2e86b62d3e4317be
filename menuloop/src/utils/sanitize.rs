//! # Input Sanitization & Validation
//!
//! This module provides a small yet flexible input validation framework for
//! interactive CLI applications. It defines a set of composable validation
//! filters (`Sanitize`) that can be applied to user-provided strings. Filters
//! run in order and short-circuit on the first failure, returning a friendly
//! error message describing what went wrong.
//!
//! ## Features
//! - Digits-only validation with [`Sanitize::Digits`]
//! - Inclusive range validation with [`Sanitize::IsBetween`]
//! - Exact string matching with [`Sanitize::MatchString`]
//! - Multiple-option matching with [`Sanitize::MatchStrings`]
//! - Type validation for common Rust primitives via [`DesiredType`]
//! - Human-readable error messages for invalid input
//!
//! ## When to use
//! Use this module whenever you collect raw user input (e.g. via
//! [`crate::utils::Terminal::ask`]) and need to ensure it matches certain
//! constraints before proceeding.
//!
//! ## Examples
//!
//! ### Menu option numbers
//! ```rust,no_run
//! use menuloop::utils::{Sanitize, Terminal};
//!
//! // Only digit strings between 1 and 5 get through.
//! let mut terminal = Terminal::stdio();
//! let option = terminal
//!     .ask(
//!         "Please enter a valid option (1 - 5): ",
//!         &[Sanitize::Digits, Sanitize::IsBetween(1, 5)],
//!     )
//!     .unwrap();
//! println!("Accepted: {option}");
//! ```
//!
//! ### Confirmation answers
//! ```rust,no_run
//! use menuloop::utils::{Sanitize, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! let yn = terminal
//!     .ask(
//!         "Do you want to proceed (only 'y' and 'n' allowed): ",
//!         &[Sanitize::MatchStrings(vec!["y".to_string(), "n".to_string()])],
//!     )
//!     .unwrap();
//! println!("Answer: {yn}");
//! ```
use std::{error::Error, fmt::Display};

/// Represents a validation filter that can be applied to user input.
///
/// - `Digits`: ensures that the input is non-empty and contains only ASCII
///   digits (`0-9`). Leading zeros are accepted.
/// - `MatchString`: ensures that the input matches a specific string.
/// - `MatchStrings`: ensures that the input matches one of the given options.
/// - `IsType`: ensures that the input can be parsed into a certain [`DesiredType`].
/// - `IsBetween`: ensures that a numeric input is within an inclusive range `[min, max]`.
pub enum Sanitize {
    Digits,
    MatchString(String),
    MatchStrings(Vec<String>),
    IsType(DesiredType),
    IsBetween(isize, isize),
}

/// Trait for input validation.
/// Any type that implements this can validate a string input and return
/// either `Ok(())` if the input is valid or a [`FilterError`] on failure.
trait Validate {
    fn validate(&self, input: &str) -> Result<(), FilterError>;
}

/// Represents an error that occurs when input validation fails.
///
/// Each variant describes why the input was rejected:
/// - [`Digits`]: contained something other than ASCII digits, or was empty.
/// - [`Type`]: could not be parsed as the expected primitive type.
/// - [`MatchString`]: did not match the required string.
/// - [`MatchStrings`]: did not match any of the given options.
/// - [`Between`]: was not a number inside the required range.
#[derive(Debug)]
pub(crate) enum FilterError {
    Digits,
    Type(DesiredType),
    MatchString(String),
    MatchStrings(Vec<String>),
    Between(isize, isize),
}

impl Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Digits => write!(f, "The value must contain only digits (0-9), try again!"),
            Self::Type(t) => write!(f, "The value is not a {}, try again!", t),
            Self::MatchString(s) => write!(f, "The value doesn't match with {}, try again!", s),
            Self::MatchStrings(v) => write!(
                f,
                "The value doesn't match with the options: {}, try again!",
                v.join(", ")
            ),
            Self::Between(n1, n2) => {
                write!(f, "The value is not between {} and {}, try again!", n1, n2)
            }
        }
    }
}

impl Error for FilterError {}

/// Macro helper that validates if an input string can be parsed into the given
/// Rust type. Expands into a `Result<(), FilterError>`.
///
/// # Parameters
/// - `$input`: The input string to parse.
/// - `$t`: The Rust type (e.g. `u8`, `i32`, `bool`).
/// - `$v`: The [`DesiredType`] variant reported when parsing fails.
///
/// # Example
/// ```rust,ignore
/// let input = "42";
/// check_type!(input, u8, U8);
/// ```
#[macro_export]
macro_rules! check_type {
    ($input:expr, $t:ty, $v:ident) => {
        match $input.parse::<$t>() {
            Ok(_) => Ok(()),
            Err(_) => Err(FilterError::Type(DesiredType::$v)),
        }
    };
}

impl Sanitize {
    /// Executes all provided filters against the given answer.
    ///
    /// - Trims whitespace before validation.
    /// - Stops and returns the first error encountered.
    /// - Returns the cleaned string if all filters pass.
    pub(crate) fn execute(answer: &str, filters: &[Sanitize]) -> Result<String, FilterError> {
        let clean_answer = answer.trim();

        for filter in filters {
            filter.validate(clean_answer)?;
        }
        Ok(clean_answer.to_string())
    }
}

impl Validate for Sanitize {
    fn validate(&self, input: &str) -> Result<(), FilterError> {
        match self {
            Sanitize::Digits => {
                if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
                    Ok(())
                } else {
                    Err(FilterError::Digits)
                }
            }
            Sanitize::IsType(ty) => ty.parse(input),
            Sanitize::MatchString(s) => {
                if input == s {
                    Ok(())
                } else {
                    Err(FilterError::MatchString(s.to_string()))
                }
            }
            Sanitize::MatchStrings(options) => {
                if options.iter().any(|option| option == input) {
                    Ok(())
                } else {
                    Err(FilterError::MatchStrings(options.clone()))
                }
            }
            Sanitize::IsBetween(n1, n2) => match input.parse::<isize>() {
                Ok(n) if (*n1..=*n2).contains(&n) => Ok(()),
                Ok(_) => Err(FilterError::Between(*n1, *n2)),
                Err(_) => Err(FilterError::Type(DesiredType::Isize)),
            },
        }
    }
}

/// Represents the desired type to which the input should be parsed.
///
/// Used together with [`Sanitize::IsType`] to validate primitive values.
///
/// Currently supports:
/// - `String`
/// - `Bool`
/// - Unsigned integers: `U8`, `U16`, `U32`, `U64`, `Usize`
/// - Signed integers: `I8`, `I16`, `I32`, `I64`, `Isize`
#[derive(Debug)]
pub enum DesiredType {
    String,
    Bool,
    U8,
    U16,
    U32,
    U64,
    Usize,
    I8,
    I16,
    I32,
    I64,
    Isize,
}

impl DesiredType {
    /// Matches a [`DesiredType`] variant and applies the corresponding
    /// [`check_type!`] validation.
    fn parse(&self, input: &str) -> Result<(), FilterError> {
        match self {
            DesiredType::String => check_type!(input, String, String),
            DesiredType::Bool => check_type!(input, bool, Bool),
            DesiredType::U8 => check_type!(input, u8, U8),
            DesiredType::U16 => check_type!(input, u16, U16),
            DesiredType::U32 => check_type!(input, u32, U32),
            DesiredType::U64 => check_type!(input, u64, U64),
            DesiredType::Usize => check_type!(input, usize, Usize),
            DesiredType::I8 => check_type!(input, i8, I8),
            DesiredType::I16 => check_type!(input, i16, I16),
            DesiredType::I32 => check_type!(input, i32, I32),
            DesiredType::I64 => check_type!(input, i64, I64),
            DesiredType::Isize => check_type!(input, isize, Isize),
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::Usize => write!(f, "usize"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::Isize => write!(f, "isize"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_digits_success() {
        let filter = Sanitize::Digits;
        assert!(filter.validate("42").is_ok());
        assert!(filter.validate("0042").is_ok());
        assert!(filter.validate("0").is_ok());
    }

    #[test]
    fn test_sanitize_digits_fail() {
        let filter = Sanitize::Digits;
        assert!(filter.validate("").is_err());
        assert!(filter.validate("-42").is_err());
        assert!(filter.validate("4 2").is_err());
        assert!(filter.validate("42a").is_err());

        let res = filter.validate("y");
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "The value must contain only digits (0-9), try again!"
            );
        }
    }

    #[test]
    fn test_sanitize_match_string() {
        let filter = Sanitize::MatchString("hello".to_string());
        assert!(filter.validate("hello").is_ok());

        let res = filter.validate("world");
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "The value doesn't match with hello, try again!"
            );
        }
    }

    #[test]
    fn test_sanitize_match_strings() {
        let filter = Sanitize::MatchStrings(vec!["y".to_string(), "n".to_string()]);
        assert!(filter.validate("y").is_ok());
        assert!(filter.validate("n").is_ok());

        let res = filter.validate("yes");
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "The value doesn't match with the options: y, n, try again!"
            );
        }
    }

    #[test]
    fn test_sanitize_is_type_bool() {
        let filter = Sanitize::IsType(DesiredType::Bool);
        assert!(filter.validate("true").is_ok());
        assert!(filter.validate("false").is_ok());
        assert!(filter.validate("maybe").is_err());
    }

    #[test]
    fn test_sanitize_is_type_u8() {
        let filter = Sanitize::IsType(DesiredType::U8);
        assert!(filter.validate("42").is_ok());
        assert!(filter.validate("-42").is_err());
        assert!(filter.validate("256").is_err()); // u8 max is 255
        assert!(filter.validate("abc").is_err());
    }

    #[test]
    fn test_sanitize_is_between() {
        let filter = Sanitize::IsBetween(1, 5);
        assert!(filter.validate("1").is_ok());
        assert!(filter.validate("5").is_ok());
        assert!(filter.validate("0").is_err());
        assert!(filter.validate("6").is_err());

        let res = filter.validate("9");
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(format!("{}", e), "The value is not between 1 and 5, try again!");
        }
    }

    #[test]
    fn test_sanitize_is_between_rejects_non_numbers() {
        let filter = Sanitize::IsBetween(1, 5);
        let res = filter.validate("two");
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(format!("{}", e), "The value is not a isize, try again!");
        }
    }

    #[test]
    fn test_sanitize_execute_trims_whitespace() {
        let res = Sanitize::execute("  3\n", &[Sanitize::Digits]);
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), "3".to_string());
    }

    #[test]
    fn test_sanitize_execute_filters_success() {
        let filters = vec![Sanitize::Digits, Sanitize::IsBetween(1, 5)];
        let res = Sanitize::execute("4", &filters);
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), "4".to_string());
    }

    #[test]
    fn test_sanitize_execute_first_error_wins() {
        let filters = vec![Sanitize::Digits, Sanitize::IsBetween(1, 5)];
        let res = Sanitize::execute("-4", &filters);
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "The value must contain only digits (0-9), try again!"
            );
        }
    }

    #[test]
    fn test_sanitize_execute_range_checked_after_digits() {
        let filters = vec![Sanitize::Digits, Sanitize::IsBetween(1, 5)];
        let res = Sanitize::execute("9", &filters);
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(format!("{}", e), "The value is not between 1 and 5, try again!");
        }
    }
}
