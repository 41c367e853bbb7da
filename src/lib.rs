//! # Tagged-Union Patterns
//!
//! A small substrate for working with closed variant sets: declaring them,
//! dispatching over them by name, wrapping presence and fallibility, walking
//! recursive shapes, and modeling states that cannot go wrong.
//!
//! ## Patterns Covered
//!
//! 1. **Declaring tagged unions** ([`tagged_union!`], [`Tagged`])
//!    - Unit, tuple, and named-field payloads in one closed set
//!    - The variant set as data: `TAGS` and `tag()`
//!    - One-arm partial matching with [`when`]
//!
//! 2. **Dispatch tables** ([`Dispatcher`])
//!    - One handler per variant, checked for coverage when built
//!    - Fallback arms for deliberate partial coverage
//!    - Definition-time [`DispatchError`]s instead of first-dispatch surprises
//!
//! 3. **Presence and fallibility** ([`Maybe`], [`Outcome`])
//!    - Fallback extraction, mapping, tag-only equality
//!    - Result-style returns instead of thrown errors
//!    - Explicit, never implicit, `Outcome` → `Maybe` adaptation
//!
//! 4. **Recursive variants** ([`FsEntry`])
//!    - Self-referential payloads behind heap indirection
//!    - Stack-safe pre-order traversal
//!
//! 5. **State machines** ([`TaskState`])
//!    - Transitions that consume the old state
//!    - Illegal states unrepresentable by construction
//!
//! ## Running Demos
//!
//! ```bash
//! cargo run --example p1_tagged_union
//! cargo run --example p2_dispatch
//! cargo run --example p3_maybe_outcome
//! cargo run --example p4_recursive_tree
//! cargo run --example p5_state_machine
//! ```

pub mod dispatch;
pub mod fs_tree;
pub mod maybe;
pub mod outcome;
pub mod task;
pub mod variant;

pub use dispatch::{DispatchError, Dispatcher, DispatcherBuilder};
pub use fs_tree::{FsEntry, Walk};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use task::{TaskState, TransitionError};
pub use variant::{when, Tagged};
