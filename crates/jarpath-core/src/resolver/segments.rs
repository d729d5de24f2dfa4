//! Dot-segment collapse over a `/`-separated segment sequence.

pub(super) const PARENT_DIR: &str = "..";
pub(super) const CURRENT_DIR: &str = ".";

/// Collapses `.` and `..` segments left to right with a stack.
///
/// The first `floor` pushed segments can never be popped: a `..` reaching
/// them returns `None`. Empty segments are kept as ordinary names. A
/// trailing `.` or `..` leaves a trailing empty segment so the result still
/// denotes a directory.
pub(super) fn collapse_segments<'a, I>(segments: I, floor: usize) -> Option<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<&'a str> = Vec::new();
    let mut ends_with_dot = false;

    for segment in segments {
        ends_with_dot = false;
        match segment {
            PARENT_DIR => {
                if out.len() <= floor {
                    tracing::trace!(?out, floor, "`..` has nothing left to pop");
                    return None;
                }
                out.pop();
                ends_with_dot = true;
            }
            CURRENT_DIR => ends_with_dot = true,
            other => out.push(other),
        }
    }

    if ends_with_dot {
        out.push("");
    }
    Some(out)
}
