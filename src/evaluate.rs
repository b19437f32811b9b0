use tracing::trace;

use crate::{Node, Operand};

/// Conjunction over `operands` in order. Stops at the first `false` or the
/// first error; no operands is vacuously true.
pub(crate) fn all<C: ?Sized, E>(operands: &[Node<C, E>], ctx: &C) -> Result<bool, E> {
    for (position, operand) in operands.iter().enumerate() {
        match operand.evaluate(ctx) {
            Ok(true) => {}
            Ok(false) => {
                trace!(
                    position,
                    skipped = operands.len() - position - 1,
                    "and short-circuited on false"
                );
                return Ok(false);
            }
            Err(e) => {
                trace!(position, "and propagating operand error");
                return Err(e);
            }
        }
    }
    Ok(true)
}

/// Disjunction over `operands` in order. Stops at the first `true` or the
/// first error; no operands is false.
pub(crate) fn any<C: ?Sized, E>(operands: &[Node<C, E>], ctx: &C) -> Result<bool, E> {
    for (position, operand) in operands.iter().enumerate() {
        match operand.evaluate(ctx) {
            Ok(false) => {}
            Ok(true) => {
                trace!(
                    position,
                    skipped = operands.len() - position - 1,
                    "or short-circuited on true"
                );
                return Ok(true);
            }
            Err(e) => {
                trace!(position, "or propagating operand error");
                return Err(e);
            }
        }
    }
    Ok(false)
}

pub(crate) fn negate<C: ?Sized, E>(operand: &Node<C, E>, ctx: &C) -> Result<bool, E> {
    operand.evaluate(ctx).map(|v| !v)
}

/// Exclusive or. The first operand is always evaluated first and its error
/// returned without touching the second.
pub(crate) fn exclusive<C: ?Sized, E>(
    first: &Node<C, E>,
    second: &Node<C, E>,
    ctx: &C,
) -> Result<bool, E> {
    let a = first.evaluate(ctx).inspect_err(|_| {
        trace!("xor propagating error from first operand");
    })?;
    let b = second.evaluate(ctx).inspect_err(|_| {
        trace!("xor propagating error from second operand");
    })?;
    Ok(a != b)
}
