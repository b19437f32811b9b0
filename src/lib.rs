//! Composable boolean operand trees.
//!
//! Trees are built from constant leaves ([`TRUE`], [`FALSE`]), application
//! supplied leaves (any [`Operand`] implementation, or a closure via
//! [`predicate`]) and the combinators [`And`], [`Or`], [`Not`] and [`Xor`].
//! Evaluation threads a borrowed, caller-defined context through every node,
//! short-circuits where the result is already decided, and returns the first
//! leaf error unchanged.
//!
//! ```
//! use logic::{and, not, or, EvalError, Operand, FALSE, TRUE};
//!
//! let tree = not::<(), EvalError>(and![or![TRUE, FALSE, FALSE], TRUE]);
//! assert_eq!(tree.evaluate(&()), Ok(false));
//! ```

mod macros;
mod error;
mod evaluate;
mod types;

pub use error::EvalError;
pub use types::{
    all, and, any, named, not, or, predicate, xor, And, Bool, Named, Node, Not, Operand, Or,
    Predicate, Xor, FALSE, TRUE,
};
