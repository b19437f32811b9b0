/// Build an [`And`](crate::And) from a list of operands of any type.
///
/// Each argument is converted with [`Operand::into_node`](crate::Operand::into_node),
/// so constants, closures wrapped in [`predicate`](crate::predicate), combinators
/// and existing [`Node`](crate::Node)s can be mixed freely.
///
/// ```
/// use logic::{and, or, Operand, FALSE, TRUE};
///
/// let tree: logic::And<()> = and![or![FALSE, TRUE], TRUE];
/// assert_eq!(tree.evaluate(&()), Ok(true));
/// ```
#[macro_export]
macro_rules! and {
    ($($operand:expr),* $(,)?) => {
        $crate::And::new(::std::vec![$($crate::Operand::into_node($operand)),*])
    };
}

/// Alias for [`and!`](crate::and).
#[macro_export]
macro_rules! all {
    ($($operand:expr),* $(,)?) => {
        $crate::and![$($operand),*]
    };
}

/// Build an [`Or`](crate::Or) from a list of operands of any type.
#[macro_export]
macro_rules! or {
    ($($operand:expr),* $(,)?) => {
        $crate::Or::new(::std::vec![$($crate::Operand::into_node($operand)),*])
    };
}

/// Alias for [`or!`](crate::or).
#[macro_export]
macro_rules! any {
    ($($operand:expr),* $(,)?) => {
        $crate::or![$($operand),*]
    };
}
