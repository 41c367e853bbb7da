//! Pattern 4: Recursive Variants
//! Example: walking a directory tree without recursing
//!
//! Run with: cargo run --example p4_recursive_tree

use tagged_union_patterns::FsEntry;

fn main() {
    println!("=== Directory Tree ===\n");

    let tree = FsEntry::dir(
        "root",
        vec![
            FsEntry::file("A"),
            FsEntry::dir("sub", vec![FsEntry::file("B")]),
        ],
    );

    // Pre-order, depth-first; indentation tracks depth.
    for (depth, name) in tree.walk() {
        println!("{}{}", "  ".repeat(depth), name);
    }

    let names: Vec<&str> = tree.walk().map(|(_, name)| name).collect();
    assert_eq!(names, ["root", "A", "sub", "B"]);

    println!("\n{} nodes, height {}", tree.node_count(), tree.depth());
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.depth(), 3);

    println!("\n=== Depth Is Not a Limit ===\n");

    // A chain this deep would overflow the stack under naive recursion; the
    // walk iterator carries its own.
    let mut chain = FsEntry::file("leaf");
    for i in 0..100_000 {
        chain = FsEntry::dir(format!("d{}", i), vec![chain]);
    }
    println!("deep chain: {} nodes, height {}", chain.node_count(), chain.depth());
    assert_eq!(chain.depth(), 100_001);
}
