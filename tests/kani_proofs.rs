#![cfg(kani)]
//! Kani proof harnesses for the combinator semantics.
//!
//! Each harness builds a small tree from symbolic boolean leaves and checks the
//! result against plain Rust boolean operators. Leaves that may fail carry a
//! symbolic "fails" flag so error precedence is covered as well.
//!
//! Run with: `cargo kani --tests --harness <harness_name>`

use logic::{and, not, or, predicate, xor, Bool, EvalError, Node, Operand};

const N: usize = 3;

fn leaf(value: bool, fails: bool, tag: u8) -> Node<()> {
    predicate(move |_: &()| {
        if fails {
            Err(EvalError::Failed(tag.to_string()))
        } else {
            Ok(value)
        }
    })
    .into_node()
}

#[kani::proof]
#[kani::unwind(5)]
fn and_matches_conjunction() {
    let bits: [bool; N] = kani::any();
    let tree = and(bits.iter().map(|b| Bool(*b).into_node()));
    assert_eq!(tree.evaluate(&()), Ok::<_, EvalError>(bits[0] && bits[1] && bits[2]));
}

#[kani::proof]
#[kani::unwind(5)]
fn or_matches_disjunction() {
    let bits: [bool; N] = kani::any();
    let tree = or(bits.iter().map(|b| Bool(*b).into_node()));
    assert_eq!(tree.evaluate(&()), Ok::<_, EvalError>(bits[0] || bits[1] || bits[2]));
}

#[kani::proof]
fn not_and_xor_match_operators() {
    let a: bool = kani::any();
    let b: bool = kani::any();
    assert_eq!(not::<(), EvalError>(Bool(a)).evaluate(&()), Ok(!a));
    assert_eq!(xor::<(), EvalError>(Bool(a), Bool(b)).evaluate(&()), Ok(a ^ b));
}

/// The first failing leaf reached in order decides the error; a decided
/// result before it hides the failure entirely.
#[kani::proof]
#[kani::unwind(5)]
fn and_error_precedence() {
    let values: [bool; N] = kani::any();
    let fails: [bool; N] = kani::any();
    let tree = and((0..N).map(|i| leaf(values[i], fails[i], i as u8)));

    let mut expected = Ok(true);
    for i in 0..N {
        if fails[i] {
            expected = Err(EvalError::Failed(i.to_string()));
            break;
        }
        if !values[i] {
            expected = Ok(false);
            break;
        }
    }
    assert_eq!(tree.evaluate(&()), expected);
}

#[kani::proof]
fn xor_error_precedence() {
    let a: bool = kani::any();
    let b: bool = kani::any();
    let a_fails: bool = kani::any();
    let b_fails: bool = kani::any();
    let result = xor(leaf(a, a_fails, 0), leaf(b, b_fails, 1)).evaluate(&());

    if a_fails {
        assert_eq!(result, Err(EvalError::Failed("0".into())));
    } else if b_fails {
        assert_eq!(result, Err(EvalError::Failed("1".into())));
    } else {
        assert_eq!(result, Ok(a != b));
    }
}
