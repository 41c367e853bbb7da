//! Pattern 2: Dispatch Tables
//! Example: routing protocol events by variant name
//!
//! Run with: cargo run --example p2_dispatch

use tagged_union_patterns::{tagged_union, DispatchError, Dispatcher};

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    enum Frame {
        Ping,
        Text(String),
        Binary(Vec<u8>),
        Close { code: u16 },
    }
}

fn main() -> Result<(), DispatchError> {
    println!("=== Exhaustive Table ===\n");

    // One arm per declared variant; build() accepts full coverage.
    let mut describe = Dispatcher::builder()
        .arm("Ping", |_: &Frame| "keepalive".to_string())?
        .arm("Text", |f: &Frame| match f {
            Frame::Text(body) => format!("text ({} chars)", body.len()),
            _ => String::new(),
        })?
        .arm("Binary", |f: &Frame| match f {
            Frame::Binary(bytes) => format!("binary ({} bytes)", bytes.len()),
            _ => String::new(),
        })?
        .arm("Close", |f: &Frame| match f {
            Frame::Close { code } => format!("close (code {})", code),
            _ => String::new(),
        })?
        .build()?;

    let traffic = [
        Frame::Ping,
        Frame::Text("hello".to_string()),
        Frame::Binary(vec![1, 2, 3]),
        Frame::Close { code: 1000 },
    ];
    for frame in &traffic {
        println!("{:?} -> {}", frame, describe.dispatch(frame));
    }
    assert_eq!(describe.dispatch(&Frame::Ping), "keepalive");

    println!("\n=== Fallback Table ===\n");

    // Handlers are FnMut: this one counts what it ignores.
    let mut ignored = 0u32;
    let mut route = Dispatcher::builder()
        .arm("Text", |_: &Frame| "deliver")?
        .fallback(|_| {
            ignored += 1;
            "drop"
        })
        .build()?;

    for frame in &traffic {
        println!("{:<28} -> {}", format!("{:?}", frame), route.dispatch(frame));
    }
    drop(route);
    println!("ignored {} frames", ignored);
    assert_eq!(ignored, 3);

    println!("\n=== Definition-Time Errors ===\n");

    // Unknown tag: rejected at the arm, not at dispatch.
    let unknown = Dispatcher::<Frame, ()>::builder().arm("Pong", |_| ());
    println!("arm(\"Pong\"): {}", unknown.err().map(|e| e.to_string()).unwrap_or_default());

    // Partial coverage without a fallback: rejected at build().
    let partial = Dispatcher::<Frame, ()>::builder()
        .arm("Ping", |_| ())?
        .build();
    match partial {
        Ok(_) => println!("unexpected: partial table accepted"),
        Err(e) => println!("build(): {}", e),
    }

    Ok(())
}
