mod constant;
mod node;
mod operand;
mod operator;
mod predicate;

pub use constant::{Bool, FALSE, TRUE};
pub use node::Node;
pub use operand::Operand;
pub use operator::{all, and, any, not, or, xor, And, Not, Or, Xor};
pub use predicate::{named, predicate, Named, Predicate};
