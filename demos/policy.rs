use logic::{and, named, not, or, predicate, EvalError, Node, Operand};

struct Request {
    age: u32,
    status: &'static str,
    region: Option<&'static str>,
    banned: bool,
}

fn eligible_age() -> Node<Request> {
    named("eligible_age", predicate(|r: &Request| Ok(r.age >= 18))).into_node()
}

fn active_account() -> Node<Request> {
    named("active_account", predicate(|r: &Request| Ok(r.status == "active"))).into_node()
}

fn not_restricted() -> Node<Request> {
    named(
        "not_restricted",
        predicate(|r: &Request| {
            r.region
                .map(|region| region != "restricted")
                .ok_or_else(|| EvalError::MissingValue("region".into()))
        }),
    )
    .into_node()
}

fn hard_deny() -> Node<Request> {
    named("hard_deny", predicate(|r: &Request| Ok(r.banned))).into_node()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let can_proceed: Node<Request> = and![
        not(hard_deny()),
        eligible_age(),
        active_account(),
        or![not_restricted(), false],
    ]
    .into_node();

    let requests = [
        Request { age: 25, status: "active", region: Some("us-east"), banned: false },
        Request { age: 25, status: "active", region: Some("us-east"), banned: true },
        Request { age: 16, status: "active", region: Some("eu"), banned: false },
        Request { age: 40, status: "active", region: None, banned: false },
    ];

    for (i, request) in requests.iter().enumerate() {
        match can_proceed.evaluate(request) {
            Ok(allowed) => println!("request {i}: allowed = {allowed}"),
            Err(e) => println!("request {i}: {e}"),
        }
    }
}
