use std::fmt;

use super::node::Node;
use super::operand::Operand;
use crate::EvalError;

/// Conjunction of an ordered list of operands.
///
/// Operands are evaluated in order. The first `false` or the first error ends
/// evaluation; an empty `And` is `true`.
pub struct And<C: ?Sized, E = EvalError> {
    operands: Vec<Node<C, E>>,
}

/// Disjunction of an ordered list of operands.
///
/// Operands are evaluated in order. The first `true` or the first error ends
/// evaluation; an empty `Or` is `false`.
pub struct Or<C: ?Sized, E = EvalError> {
    operands: Vec<Node<C, E>>,
}

/// Negation of a single operand. Errors pass through untouched.
pub struct Not<C: ?Sized, E = EvalError> {
    operand: Node<C, E>,
}

/// Exclusive or of exactly two operands, evaluated first to second.
///
/// Both operands are always evaluated unless the first one fails, in which
/// case its error is returned and the second is skipped.
pub struct Xor<C: ?Sized, E = EvalError> {
    first: Node<C, E>,
    second: Node<C, E>,
}

impl<C: ?Sized, E> And<C, E> {
    pub fn new(operands: impl IntoIterator<Item = Node<C, E>>) -> Self {
        Self {
            operands: operands.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn operands(&self) -> &[Node<C, E>] {
        &self.operands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

impl<C: ?Sized, E> Or<C, E> {
    pub fn new(operands: impl IntoIterator<Item = Node<C, E>>) -> Self {
        Self {
            operands: operands.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn operands(&self) -> &[Node<C, E>] {
        &self.operands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

impl<C: ?Sized, E> Not<C, E> {
    pub fn new(operand: Node<C, E>) -> Self {
        Self { operand }
    }

    #[must_use]
    pub fn operand(&self) -> &Node<C, E> {
        &self.operand
    }
}

impl<C: ?Sized, E> Xor<C, E> {
    pub fn new(first: Node<C, E>, second: Node<C, E>) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn operands(&self) -> (&Node<C, E>, &Node<C, E>) {
        (&self.first, &self.second)
    }
}

impl<C: ?Sized, E> Operand<C, E> for And<C, E> {
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        crate::evaluate::all(&self.operands, ctx)
    }
}

impl<C: ?Sized, E> Operand<C, E> for Or<C, E> {
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        crate::evaluate::any(&self.operands, ctx)
    }
}

impl<C: ?Sized, E> Operand<C, E> for Not<C, E> {
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        crate::evaluate::negate(&self.operand, ctx)
    }
}

impl<C: ?Sized, E> Operand<C, E> for Xor<C, E> {
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        crate::evaluate::exclusive(&self.first, &self.second, ctx)
    }
}

// Manual impls: a derive would demand `C: Clone`/`C: Debug` on the context.

impl<C: ?Sized, E> Clone for And<C, E> {
    fn clone(&self) -> Self {
        Self::new(self.operands.iter().cloned())
    }
}

impl<C: ?Sized, E> Clone for Or<C, E> {
    fn clone(&self) -> Self {
        Self::new(self.operands.iter().cloned())
    }
}

impl<C: ?Sized, E> Clone for Not<C, E> {
    fn clone(&self) -> Self {
        Self::new(self.operand.clone())
    }
}

impl<C: ?Sized, E> Clone for Xor<C, E> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<C: ?Sized, E> fmt::Debug for And<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("And").field(&self.operands).finish()
    }
}

impl<C: ?Sized, E> fmt::Debug for Or<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Or").field(&self.operands).finish()
    }
}

impl<C: ?Sized, E> fmt::Debug for Not<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Not").field(&self.operand).finish()
    }
}

impl<C: ?Sized, E> fmt::Debug for Xor<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Xor")
            .field(&self.first)
            .field(&self.second)
            .finish()
    }
}

/// Build an [`And`] over `operands`. See also the [`and!`](macro@crate::and) macro.
pub fn and<C: ?Sized, E>(operands: impl IntoIterator<Item = Node<C, E>>) -> And<C, E> {
    And::new(operands)
}

/// Alias for [`and`].
pub fn all<C: ?Sized, E>(operands: impl IntoIterator<Item = Node<C, E>>) -> And<C, E> {
    and(operands)
}

/// Build an [`Or`] over `operands`. See also the [`or!`](macro@crate::or) macro.
pub fn or<C: ?Sized, E>(operands: impl IntoIterator<Item = Node<C, E>>) -> Or<C, E> {
    Or::new(operands)
}

/// Alias for [`or`].
pub fn any<C: ?Sized, E>(operands: impl IntoIterator<Item = Node<C, E>>) -> Or<C, E> {
    or(operands)
}

#[must_use]
pub fn not<C: ?Sized, E>(operand: impl Operand<C, E> + Send + Sync + 'static) -> Not<C, E> {
    Not::new(operand.into_node())
}

#[must_use]
pub fn xor<C: ?Sized, E>(
    first: impl Operand<C, E> + Send + Sync + 'static,
    second: impl Operand<C, E> + Send + Sync + 'static,
) -> Xor<C, E> {
    Xor::new(first.into_node(), second.into_node())
}
