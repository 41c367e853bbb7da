//! Pattern 3: Presence and Fallibility
//! Example: a record store that may miss, a config read that may fail
//!
//! Run with: cargo run --example p3_maybe_outcome

use std::collections::HashMap;

use tagged_union_patterns::{Maybe, Outcome};

struct RecordStore {
    rows: HashMap<u64, String>,
}

impl RecordStore {
    fn lookup(&self, id: u64) -> Maybe<&String> {
        // The store keeps Options internally; the shim converts at the edge.
        Maybe::from(self.rows.get(&id))
    }
}

// Fallible read that reports through Outcome instead of panicking or
// throwing: the caller always sees both arms.
fn read_config(source: &str) -> Outcome<u16, String> {
    match source.strip_prefix("port=") {
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) => Outcome::Success(port),
            Err(e) => Outcome::Failure(format!("bad port {:?}: {}", raw, e)),
        },
        None => Outcome::Failure(format!("missing key in {:?}", source)),
    }
}

fn main() {
    println!("=== Maybe: present or absent ===\n");

    let store = RecordStore {
        rows: HashMap::from([(1, "ada".to_string()), (2, "grace".to_string())]),
    };

    for id in [1, 2, 3] {
        match store.lookup(id) {
            Maybe::Present(name) => println!("row {}: {}", id, name),
            Maybe::Absent => println!("row {}: <missing>", id),
        }
    }

    // Fallback extraction instead of matching.
    let anonymous = "anonymous".to_string();
    let name = store.lookup(3).get_or(&anonymous);
    println!("row 3 with default: {}", name);
    assert_eq!(name.as_str(), "anonymous");

    println!("\n=== Outcome: success or failure ===\n");

    for source in ["port=8080", "port=high", "host=db"] {
        match read_config(source) {
            Outcome::Success(port) => println!("{:<12} -> listening on {}", source, port),
            Outcome::Failure(error) => println!("{:<12} -> {}", source, error),
        }
    }

    // Shaping each side independently.
    let doubled = read_config("port=4000").map(|p| u32::from(p) * 2);
    assert_eq!(doubled, Outcome::Success(8000));
    let labeled = read_config("host=db").map_failure(|e| format!("config error: {}", e));
    assert!(labeled.is_failure());

    println!("\n=== Explicit adapter ===\n");

    // Dropping the error detail is a visible, opt-in step.
    let port: Maybe<u16> = read_config("port=high").discard_failure();
    println!("discard_failure(\"port=high\") -> {:?}", port);
    assert_eq!(port, Maybe::Absent);

    let port = read_config("port=8080").discard_failure().get_or(80);
    println!("with default: {}", port);
    assert_eq!(port, 8080);
}
