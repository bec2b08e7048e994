//! revint: reverse the decimal digits of integers within the signed 32-bit
//! range, returning 0 when the reversal overflows.
//!
//! The workspace crates are re-exported here:
//! - [`revint_core`]: the reversal itself plus shared location/error types
//! - [`revint_lexer`] and [`revint_parser`]: reading integer arguments from text
//! - [`revint_harness`]: judging the reversal against test cases
//!
//! ```
//! assert_eq!(revint::reverse(-123), -321);
//! assert_eq!(revint::reverse(1_534_236_469), 0);
//! ```

pub use revint_core;
pub use revint_harness;
pub use revint_lexer;
pub use revint_parser;

pub use revint_core::{RevintError, checked_reverse, reverse, reverse_wide};
pub use revint_harness::{Judge, Suite, SuiteReport, TestCase, Verdict};
pub use revint_parser::{ParseMode, Parser};
