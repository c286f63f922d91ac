//! Basic usage of the transducer pipeline.
//!
//! Run with: cargo run --example basic

use transduce::prelude::*;

/// Example 1: one pipeline, pull-driven.
fn pull_example() {
    println!("=== Pull-driven fold ===");

    let pipeline = transduce::compose!(
        filtering(|x: &i64| x % 2 == 0),
        mapping(|x: i64| x * x),
        taking(5),
    );

    let squares = transduce(&pipeline, reducers::append(), Vec::new(), 0..1_000_000);
    println!("first five even squares: {:?}", squares);
    println!();
}

/// Example 2: the same pipeline, push-driven.
fn push_example() {
    println!("=== Push-driven delivery ===");

    let pipeline = transduce::compose!(
        filtering(|x: &i64| x % 2 == 0),
        mapping(|x: i64| x * x),
        taking(5),
    );

    let mut out = Vec::new();
    let mut push = push_pipeline(&pipeline, consumers::Collect::new(&mut out));
    let delivered = consume(&mut push, 0..1_000_000);
    drop(push);

    println!("first five even squares: {:?}", out);
    println!("values delivered before the pipeline stopped: {}", delivered);
    println!();
}

/// Example 3: take-while terminates without touching later input.
fn take_while_example() {
    println!("=== Early termination ===");

    let mut source = 0..;
    let prefix = transduce(
        &taking_while(|x: &i64| *x < 5),
        reducers::append(),
        Vec::new(),
        source.by_ref(),
    );

    println!("prefix: {:?}", prefix);
    println!("next unconsumed element: {:?}", source.next());
}

fn main() {
    pull_example();
    push_example();
    take_while_example();
}
