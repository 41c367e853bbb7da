//! Recursive variants: a file-system tree and its traversal.
//!
//! `Directory` carries children of the union's own type. The `Vec` payload
//! supplies the heap indirection that gives `FsEntry` a fixed size; callers
//! build and match the variant like any other, never touching the allocation.

use crate::tagged_union;

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum FsEntry {
        File { name: String },
        Directory { name: String, entries: Vec<FsEntry> },
    }
}

impl FsEntry {
    pub fn file(name: impl Into<String>) -> FsEntry {
        FsEntry::File { name: name.into() }
    }

    pub fn dir(name: impl Into<String>, entries: Vec<FsEntry>) -> FsEntry {
        FsEntry::Directory {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FsEntry::File { name } => name,
            FsEntry::Directory { name, .. } => name,
        }
    }

    /// Pre-order walk over the tree, yielding `(depth, name)` with the root
    /// at depth 0.
    ///
    /// The iterator keeps its own stack, so traversal depth is bounded by
    /// memory rather than the call stack.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Height of the tree: 1 for a lone entry.
    pub fn depth(&self) -> usize {
        self.walk().map(|(depth, _)| depth).max().unwrap_or(0) + 1
    }
}

// The derived drop glue recurses per level and would overflow the stack on
// the same deep chains walk() is built to handle, so children are drained
// iteratively instead.
impl Drop for FsEntry {
    fn drop(&mut self) {
        if let FsEntry::Directory { entries, .. } = self {
            let mut pending: Vec<FsEntry> = std::mem::take(entries);
            while let Some(mut entry) = pending.pop() {
                if let FsEntry::Directory { entries, .. } = &mut entry {
                    pending.append(entries);
                }
            }
        }
    }
}

/// Depth-first iterator created by [`FsEntry::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a FsEntry)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, entry) = self.stack.pop()?;
        match entry {
            FsEntry::File { name } => Some((depth, name)),
            FsEntry::Directory { name, entries } => {
                // Reversed so the leftmost child is popped first.
                for child in entries.iter().rev() {
                    self.stack.push((depth + 1, child));
                }
                Some((depth, name))
            }
        }
    }
}
