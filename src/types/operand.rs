use std::sync::Arc;

use super::node::Node;
use crate::EvalError;

/// A node of a boolean expression tree.
///
/// Every leaf and combinator implements this. The context is borrowed for the
/// duration of one call and never stored; the error type is left to the
/// embedding application so that errors surface at the root exactly as the
/// failing leaf produced them.
///
/// # Example
///
/// ```
/// use logic::{EvalError, Operand};
///
/// struct AgeAtLeast(u32);
///
/// impl Operand<u32> for AgeAtLeast {
///     fn evaluate(&self, age: &u32) -> Result<bool, EvalError> {
///         Ok(*age >= self.0)
///     }
/// }
///
/// assert_eq!(AgeAtLeast(18).evaluate(&21), Ok(true));
/// ```
pub trait Operand<C: ?Sized, E = EvalError> {
    /// Evaluate this operand against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the operand (or, for combinators, the first failing
    /// child in evaluation order) produced.
    fn evaluate(&self, ctx: &C) -> Result<bool, E>;

    /// Erase this operand into a shared [`Node`] handle.
    #[must_use]
    fn into_node(self) -> Node<C, E>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Node::new(self)
    }
}

impl<C: ?Sized, E> Operand<C, E> for bool {
    fn evaluate(&self, _ctx: &C) -> Result<bool, E> {
        Ok(*self)
    }
}

impl<C: ?Sized, E, T: Operand<C, E> + ?Sized> Operand<C, E> for &T {
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        (**self).evaluate(ctx)
    }
}

impl<C: ?Sized, E, T: Operand<C, E> + ?Sized> Operand<C, E> for Box<T> {
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        (**self).evaluate(ctx)
    }
}

impl<C: ?Sized, E, T: Operand<C, E> + ?Sized> Operand<C, E> for Arc<T> {
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        (**self).evaluate(ctx)
    }
}
