use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::sync::Arc;

use super::operand::Operand;
use super::operator::{And, Not as NotOperator, Or, Xor};
use crate::EvalError;

/// Shared, read-only handle to an operand.
///
/// Cloning a `Node` shares the underlying subtree rather than copying it, so a
/// single operand can appear under several parents. Nodes are `Send + Sync`,
/// which lets one tree be evaluated from many threads at once.
pub struct Node<C: ?Sized, E = EvalError> {
    inner: Arc<dyn Operand<C, E> + Send + Sync>,
}

impl<C: ?Sized, E> Node<C, E> {
    pub fn new(operand: impl Operand<C, E> + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(operand),
        }
    }

    /// Returns `true` if both handles point at the same subtree.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: ?Sized + 'static, E: 'static> Node<C, E> {
    #[must_use]
    pub fn and(self, other: impl Operand<C, E> + Send + Sync + 'static) -> Node<C, E> {
        And::new([self, other.into_node()]).into_node()
    }

    #[must_use]
    pub fn or(self, other: impl Operand<C, E> + Send + Sync + 'static) -> Node<C, E> {
        Or::new([self, other.into_node()]).into_node()
    }

    #[must_use]
    pub fn xor(self, other: impl Operand<C, E> + Send + Sync + 'static) -> Node<C, E> {
        Xor::new(self, other.into_node()).into_node()
    }
}

impl<C: ?Sized, E> Operand<C, E> for Node<C, E> {
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        self.inner.evaluate(ctx)
    }

    fn into_node(self) -> Node<C, E> {
        self
    }
}

impl<C: ?Sized, E> Clone for Node<C, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ?Sized, E> fmt::Debug for Node<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").finish_non_exhaustive()
    }
}

impl<C: ?Sized + 'static, E: 'static> Not for Node<C, E> {
    type Output = Node<C, E>;

    fn not(self) -> Node<C, E> {
        NotOperator::new(self).into_node()
    }
}

impl<C: ?Sized + 'static, E: 'static> BitAnd for Node<C, E> {
    type Output = Node<C, E>;

    fn bitand(self, rhs: Node<C, E>) -> Node<C, E> {
        self.and(rhs)
    }
}

impl<C: ?Sized + 'static, E: 'static> BitOr for Node<C, E> {
    type Output = Node<C, E>;

    fn bitor(self, rhs: Node<C, E>) -> Node<C, E> {
        self.or(rhs)
    }
}

impl<C: ?Sized + 'static, E: 'static> BitXor for Node<C, E> {
    type Output = Node<C, E>;

    fn bitxor(self, rhs: Node<C, E>) -> Node<C, E> {
        self.xor(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FALSE, TRUE};

    type N = Node<()>;

    fn t() -> N {
        TRUE.into_node()
    }

    fn f() -> N {
        FALSE.into_node()
    }

    #[test]
    fn into_node_on_node_is_identity() {
        let node = t();
        let again = node.clone().into_node();
        assert!(node.ptr_eq(&again));
    }

    #[test]
    fn clones_share_subtree() {
        let node = t();
        let other = t();
        assert!(node.ptr_eq(&node.clone()));
        assert!(!node.ptr_eq(&other));
    }

    #[test]
    fn and_chaining() {
        assert_eq!(t().and(t()).evaluate(&()), Ok(true));
        assert_eq!(t().and(f()).evaluate(&()), Ok(false));
    }

    #[test]
    fn or_chaining() {
        assert_eq!(f().or(t()).evaluate(&()), Ok(true));
        assert_eq!(f().or(f()).evaluate(&()), Ok(false));
    }

    #[test]
    fn xor_chaining() {
        assert_eq!(t().xor(f()).evaluate(&()), Ok(true));
        assert_eq!(t().xor(t()).evaluate(&()), Ok(false));
    }

    #[test]
    fn operator_overloads() {
        assert_eq!((!t()).evaluate(&()), Ok(false));
        assert_eq!((t() & f()).evaluate(&()), Ok(false));
        assert_eq!((t() | f()).evaluate(&()), Ok(true));
        assert_eq!((t() ^ f()).evaluate(&()), Ok(true));
        assert_eq!((!(t() ^ t())).evaluate(&()), Ok(true));
    }

    #[test]
    fn chaining_accepts_plain_operands() {
        assert_eq!(t().and(true).evaluate(&()), Ok(true));
        assert_eq!(f().or(TRUE).evaluate(&()), Ok(true));
    }

    #[test]
    fn debug_is_opaque() {
        assert_eq!(format!("{:?}", t()), "Node { .. }");
    }
}
