use crate::outline::Heading;

/// Checks a heading sequence for skipped levels.
///
/// Walks the sequence with a level stack seeded with the sentinel level 0.
/// A heading whose level exceeds the current stack top by more than one is a
/// structural error: an h3 directly under an h1 skips h2. The walk stops at
/// the first violation; this is a presence check, not an exhaustive report.
/// Otherwise the stack pops while its top is greater than or equal to the
/// incoming level, then pushes the level.
///
/// Note the deliberate asymmetry with `build_tree`: the builder nests a
/// skipped level silently, while this check flags it. Downward jumps of any
/// size (h4 back to h1) are fine here.
///
/// Returns true when a structural error is present.
///
/// # Examples
///
/// ```
/// use site_outliner::outline::{has_structural_error, Heading};
///
/// let skipped = vec![Heading::new(1, "A"), Heading::new(3, "B")];
/// assert!(has_structural_error(&skipped));
///
/// let clean = vec![Heading::new(1, "A"), Heading::new(2, "B")];
/// assert!(!has_structural_error(&clean));
/// ```
pub fn has_structural_error(headings: &[Heading]) -> bool {
    let mut stack: Vec<u8> = vec![0];

    for heading in headings {
        let top = stack.last().copied().unwrap_or(0);
        if heading.level > top + 1 {
            return true;
        }
        while stack.last().is_some_and(|&level| level >= heading.level) {
            stack.pop();
        }
        stack.push(heading.level);
    }

    false
}
