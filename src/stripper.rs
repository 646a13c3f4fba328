//! Dead branch stripping over balanced-brace text.
//!
//! The stripper removes conditional blocks guarded by a literal false
//! condition. `if (false) { ... } else { ... }` collapses to its trimmed
//! alternative body; a guard-less `if (false) { ... }` is deleted whole.
//!
//! Matching is textual, not syntactic: a block body is recognized by the
//! "simple-nested" rule `[^{}]*(?:\{[^{}]*\}[^{}]*)*` — brace-free runs
//! interleaved with fully-balanced single-level `{...}` groups. A body
//! whose nested group itself contains another brace group is NOT matched
//! and the construct is left untouched. The collapse pass is iterated to
//! a fixed point so a guarded block exposed by collapsing its enclosing
//! block still gets processed; the guard-less deletion pass runs exactly
//! once afterwards.
//!
//! The stripper is total: it never fails, and text it cannot match
//! (unbalanced braces, guards inside string literals or comments) passes
//! through byte-identical.

use regex::Regex;
use std::sync::OnceLock;

use crate::rewrite::{Edit, SpanRewriter};

/// Regex for `if (false) { body } else { alt }` with simple-nested bodies.
/// Capture group 1 is the alternative body.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
fn guarded_else_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"if \(false\) \{[^{}]*(?:\{[^{}]*\}[^{}]*)*\} else \{([^{}]*(?:\{[^{}]*\}[^{}]*)*)\}",
        )
        .expect("Invalid guarded else regex pattern")
    })
}

/// Regex for a guard-less `if (false) { body }` with a simple-nested body.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
fn guarded_bare_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"if \(false\) \{[^{}]*(?:\{[^{}]*\}[^{}]*)*\}")
            .expect("Invalid guarded block regex pattern")
    })
}

/// A located guarded block in the current text. Transient match result,
/// only valid for the buffer it was found in.
#[derive(Debug)]
struct GuardedBlock {
    start_byte: usize,
    end_byte: usize,
    /// Trimmed alternative body for `else`-carrying blocks, `None` for
    /// guard-less blocks (deleted whole).
    alt_body: Option<String>,
}

impl GuardedBlock {
    fn into_edit(self) -> Edit {
        match self.alt_body {
            Some(alt) => Edit::new(self.start_byte, self.end_byte, alt),
            None => Edit::delete(self.start_byte, self.end_byte),
        }
    }
}

/// Find all collapsible `if (false) { ... } else { ... }` blocks
/// (leftmost-first, non-overlapping).
fn find_collapsible(text: &str) -> Vec<GuardedBlock> {
    guarded_else_re()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let alt = caps.get(1)?;
            Some(GuardedBlock {
                start_byte: whole.start(),
                end_byte: whole.end(),
                alt_body: Some(alt.as_str().trim().to_owned()),
            })
        })
        .collect()
}

/// Find all remaining guard-less `if (false) { ... }` blocks.
fn find_bare(text: &str) -> Vec<GuardedBlock> {
    guarded_bare_re()
        .find_iter(text)
        .map(|m| GuardedBlock {
            start_byte: m.start(),
            end_byte: m.end(),
            alt_body: None,
        })
        .collect()
}

/// Replace each block's span in one batch. Spans from a single regex pass
/// are disjoint and in bounds, so this cannot fail.
fn apply_blocks(text: String, blocks: Vec<GuardedBlock>) -> String {
    let mut rewriter = SpanRewriter::new(text);
    rewriter.add_edits(blocks.into_iter().map(GuardedBlock::into_edit));
    #[allow(clippy::expect_used)]
    rewriter
        .apply()
        .expect("spans from a single scan pass are disjoint and in bounds")
}

/// Result of stripping one text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    /// The transformed text.
    pub text: String,
    /// Number of blocks collapsed to their `else` alternative.
    pub collapsed: usize,
    /// Number of guard-less blocks deleted.
    pub removed: usize,
}

impl StripOutcome {
    /// Whether any block was collapsed or removed. Every substitution
    /// strictly shortens the text, so this is equivalent to comparing
    /// output against input.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.collapsed > 0 || self.removed > 0
    }
}

/// Strip dead `if (false)` branches from `text`, reporting counts.
///
/// Collapses `else`-carrying blocks to a fixed point, then deletes
/// guard-less blocks in a single pass.
#[must_use]
pub fn strip_with_stats(text: &str) -> StripOutcome {
    let mut current = text.to_owned();
    let mut collapsed = 0;

    // Each substitution strictly shortens the text (the guard prefix is
    // always dropped), so the fixed point is reached exactly when a full
    // pass finds no match.
    loop {
        let blocks = find_collapsible(&current);
        if blocks.is_empty() {
            break;
        }
        collapsed += blocks.len();
        current = apply_blocks(current, blocks);
    }

    let bare = find_bare(&current);
    let removed = bare.len();
    if removed > 0 {
        current = apply_blocks(current, bare);
    }

    StripOutcome {
        text: current,
        collapsed,
        removed,
    }
}

/// Strip dead `if (false)` branches from `text`.
///
/// Pure and total: always returns some string, identical to the input
/// when nothing matches.
#[must_use]
pub fn strip(text: &str) -> String {
    strip_with_stats(text).text
}
