//! Byte-range safe text rewriter.
//!
//! Applies replacement/deletion edits to a source buffer using byte
//! offsets, preserving all untouched text exactly. The stripper collects
//! one edit per matched guarded block and applies them through this type.
//!
//! # Usage
//!
//! ```
//! use deadbranch::rewrite::{Edit, SpanRewriter};
//!
//! let mut rewriter = SpanRewriter::new("keep drop keep");
//! rewriter.add_edit(Edit::delete(4, 9));
//! assert_eq!(rewriter.apply().expect("should apply"), "keep keep");
//! ```

use thiserror::Error;

/// A single replacement of a byte span with new content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Start byte offset (inclusive)
    pub start_byte: usize,
    /// End byte offset (exclusive)
    pub end_byte: usize,
    /// Replacement content (empty for deletions)
    pub replacement: String,
}

impl Edit {
    /// Create a replacement edit.
    #[must_use]
    pub fn new(start_byte: usize, end_byte: usize, replacement: impl Into<String>) -> Self {
        Self {
            start_byte,
            end_byte,
            replacement: replacement.into(),
        }
    }

    /// Create a deletion edit.
    #[must_use]
    pub fn delete(start_byte: usize, end_byte: usize) -> Self {
        Self::new(start_byte, end_byte, "")
    }

    /// Check if this edit's span overlaps another's.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// Error during rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Two or more edits have overlapping spans.
    #[error("overlapping edits at indices {edit_a} and {edit_b}")]
    OverlappingEdits {
        /// Index of first overlapping edit
        edit_a: usize,
        /// Index of second overlapping edit
        edit_b: usize,
    },
    /// Edit span extends past the end of the source.
    #[error("edit {edit_index} out of bounds: end_byte {end_byte} > source length {source_len}")]
    OutOfBounds {
        /// Index of the bad edit
        edit_index: usize,
        /// End byte of the edit
        end_byte: usize,
        /// Length of the source
        source_len: usize,
    },
}

/// Applies a batch of non-overlapping span edits to a text buffer.
///
/// Edits are applied in reverse start order so earlier byte offsets stay
/// valid while the string shrinks or grows.
#[derive(Debug, Clone)]
pub struct SpanRewriter {
    source: String,
    edits: Vec<Edit>,
}

impl SpanRewriter {
    /// Create a new rewriter for the given source text.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edits: Vec::new(),
        }
    }

    /// Add an edit to the pending list.
    pub fn add_edit(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    /// Add multiple edits.
    pub fn add_edits(&mut self, edits: impl IntoIterator<Item = Edit>) {
        self.edits.extend(edits);
    }

    /// Check if there are any pending edits.
    #[must_use]
    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Validate edits without applying them.
    ///
    /// Disjoint spans can only collide with their neighbor in start
    /// order, so one sorted scan over the edits suffices.
    ///
    /// # Errors
    /// Returns an error if any edit is out of bounds or two edits overlap.
    pub fn validate(&self) -> Result<(), RewriteError> {
        for (i, edit) in self.edits.iter().enumerate() {
            if edit.end_byte > self.source.len() {
                return Err(RewriteError::OutOfBounds {
                    edit_index: i,
                    end_byte: edit.end_byte,
                    source_len: self.source.len(),
                });
            }
        }

        let mut order: Vec<usize> = (0..self.edits.len()).collect();
        order.sort_by_key(|&i| self.edits[i].start_byte);

        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if self.edits[a].overlaps(&self.edits[b]) {
                return Err(RewriteError::OverlappingEdits {
                    edit_a: a.min(b),
                    edit_b: a.max(b),
                });
            }
        }

        Ok(())
    }

    /// Apply all edits and return the modified text.
    ///
    /// # Errors
    /// Returns an error if edits overlap or are out of bounds.
    pub fn apply(self) -> Result<String, RewriteError> {
        self.validate()?;

        let mut result = self.source;
        let mut sorted_edits = self.edits;

        // Apply from end to start so offsets of pending edits stay valid.
        sorted_edits.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

        for edit in sorted_edits {
            result.replace_range(edit.start_byte..edit.end_byte, &edit.replacement);
        }

        Ok(result)
    }
}
