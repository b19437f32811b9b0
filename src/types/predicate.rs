use std::fmt;

use tracing::trace;

use super::operand::Operand;

/// Leaf operand backed by a closure over the context.
///
/// This is the usual way to plug application checks into a tree without
/// declaring a type for each one.
///
/// # Example
///
/// ```
/// use logic::{predicate, EvalError, Operand};
///
/// struct Request {
///     region: String,
/// }
///
/// let in_eu = predicate(|req: &Request| Ok::<_, EvalError>(req.region == "eu"));
/// let req = Request { region: "eu".into() };
/// assert_eq!(in_eu.evaluate(&req), Ok(true));
/// ```
#[derive(Clone, Copy)]
pub struct Predicate<F> {
    f: F,
}

/// Wrap a closure as a leaf operand.
pub fn predicate<C, E, F>(f: F) -> Predicate<F>
where
    C: ?Sized,
    F: Fn(&C) -> Result<bool, E>,
{
    Predicate { f }
}

impl<C, E, F> Operand<C, E> for Predicate<F>
where
    C: ?Sized,
    F: Fn(&C) -> Result<bool, E>,
{
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        (self.f)(ctx)
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// An operand tagged with a label. Each evaluation emits a `trace` event
/// carrying the label and its outcome.
#[derive(Debug, Clone)]
pub struct Named<O> {
    label: String,
    operand: O,
}

/// Attach `label` to `operand` for diagnostics.
pub fn named<O>(label: impl Into<String>, operand: O) -> Named<O> {
    Named {
        label: label.into(),
        operand,
    }
}

impl<O> Named<O> {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn inner(&self) -> &O {
        &self.operand
    }
}

impl<C, E, O> Operand<C, E> for Named<O>
where
    C: ?Sized,
    E: fmt::Display,
    O: Operand<C, E>,
{
    fn evaluate(&self, ctx: &C) -> Result<bool, E> {
        let outcome = self.operand.evaluate(ctx);
        match &outcome {
            Ok(value) => trace!(operand = %self.label, value, "evaluated"),
            Err(e) => trace!(operand = %self.label, error = %e, "evaluation failed"),
        }
        outcome
    }
}

impl<O> fmt::Display for Named<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
