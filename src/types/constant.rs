use std::fmt;

use super::operand::Operand;

/// Constant boolean leaf. Evaluates to its value for every context and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bool(pub bool);

/// The constant `true` leaf.
pub const TRUE: Bool = Bool(true);

/// The constant `false` leaf.
pub const FALSE: Bool = Bool(false);

impl Bool {
    #[must_use]
    pub const fn value(self) -> bool {
        self.0
    }
}

impl<C: ?Sized, E> Operand<C, E> for Bool {
    fn evaluate(&self, _ctx: &C) -> Result<bool, E> {
        Ok(self.0)
    }
}

impl From<bool> for Bool {
    fn from(v: bool) -> Self {
        Bool(v)
    }
}

impl From<Bool> for bool {
    fn from(v: Bool) -> Self {
        v.0
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
