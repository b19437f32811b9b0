use std::sync::Arc;
use std::thread;

use logic::{and, predicate, EvalError, Node, Operand};

fn main() {
    let even: Node<u64> = predicate(|n: &u64| Ok::<_, EvalError>(n % 2 == 0)).into_node();
    let small: Node<u64> = predicate(|n: &u64| Ok::<_, EvalError>(*n < 100)).into_node();

    // `even` is shared between both parents rather than copied.
    let even_and_small: Node<u64> = and![even.clone(), small].into_node();
    let odd = !even.clone();
    let tree = Arc::new(even_and_small ^ odd);

    let handles: Vec<_> = [4_u64, 7, 250, 99]
        .into_iter()
        .map(|n| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || (n, tree.evaluate(&n)))
        })
        .collect();

    for handle in handles {
        let (n, result) = handle.join().expect("worker panicked");
        println!("{n}: {result:?}");
    }
}
