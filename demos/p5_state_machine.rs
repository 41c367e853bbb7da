//! Pattern 5: State Machines
//! Example: a task that cannot have a timestamp while stopped
//!
//! Run with: cargo run --example p5_state_machine

use std::thread;
use std::time::{Duration, Instant};

use tagged_union_patterns::{Maybe, TaskState};

fn main() {
    println!("=== Task Lifecycle ===\n");

    let task = TaskState::Stopped;
    println!("initial: {:?}", task);
    assert_eq!(task.started_at(), Maybe::Absent);

    // Stopped -> Running is the only way to obtain a timestamp.
    let task = task.start(Instant::now()).unwrap();
    println!("started: running = {}", task.is_running());

    thread::sleep(Duration::from_millis(20));
    if let Maybe::Present(started) = task.started_at() {
        println!("running for {:?}", started.elapsed());
    }

    // Running -> Stopped drops the timestamp with the variant.
    let task = task.stop().unwrap();
    println!("stopped: {:?}", task);
    assert_eq!(task.started_at(), Maybe::Absent);

    println!("\n=== Rejected Transitions ===\n");

    // Stopping again is the wrong transition, reported, not panicked.
    match task.clone().stop() {
        Ok(_) => println!("unexpected: double stop accepted"),
        Err(e) => println!("stop() while stopped: {}", e),
    }

    let running = TaskState::Stopped.start(Instant::now()).unwrap();
    match running.clone().start(Instant::now()) {
        Ok(_) => println!("unexpected: double start accepted"),
        Err(e) => println!("start() while running: {}", e),
    }

    // There is no TaskState::Stopped { started_at: .. } to construct and no
    // accessor that conjures a timestamp from a stopped task; the illegal
    // state simply does not exist.
}
