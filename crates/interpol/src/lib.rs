//! Typed-placeholder SQL templating.
//!
//! Turn a query template containing typed placeholders plus a set of
//! supplied values into one safe, literal SQL string: type coercion, null
//! handling, injection-safe escaping, and sequence-to-list expansion.
//! Execution stays with the caller; the engine only needs an [`Escape`]
//! capability (or a full [`Connection`]) from the driver.
//!
//! # Placeholders
//!
//! Named (`:customerId?sn`) or positional (`?i`), each carrying one-letter
//! flags: a type code (`s`tring, `i`nteger, `f`loat, `d`atetime, `b`oolean)
//! plus the modifiers `n` (emit `NULL` for absent values) and `j` (expand a
//! sequence into a comma-joined list). Empty flags default to `sn`.
//!
//! # Example
//!
//! ```
//! use interpol::{Escape, Params, expand};
//!
//! struct Doubling;
//!
//! impl Escape for Doubling {
//!     fn escape(&self, raw: &str) -> String {
//!         raw.replace('\'', "''")
//!     }
//! }
//!
//! let params = Params::new()
//!     .set("status", "o'pen")
//!     .push(vec![1i64, 2, 3]);
//! let sql = expand(
//!     "SELECT * FROM orders WHERE status = :status?s AND id IN (?ij)",
//!     &params,
//!     &Doubling,
//! )
//! .unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM orders WHERE status = 'o''pen' AND id IN (1, 2, 3)"
//! );
//! ```

mod cast;
mod conn;
mod error;
mod expand;
mod resolve;
mod token;
mod types;
mod value;

pub use cast::*;
pub use conn::*;
pub use error::*;
pub use expand::*;
pub use resolve::*;
pub use token::*;
pub use types::*;
pub use value::*;
