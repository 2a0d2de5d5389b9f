//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4], on split path segments.
//!
//! [RFC 3986 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

/// Returns true if the segment is `.` or `..`.
#[inline]
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

/// Removes `.` and `..` segments from a path given as its `/`-separated segments.
///
/// Leading dot segments are dropped. A `..` removes the last output segment only when at least
/// two are present, so the empty segment standing for the leading `/` of an absolute path is
/// never removed. If the last processed segment was a dot segment, a trailing empty segment is
/// appended so that the result keeps its trailing slash.
///
/// The result never contains dot segments, so applying this twice is the same as once.
///
/// # Examples
///
/// ```
/// use uri_norm::normalize::remove_dot_segments;
///
/// assert_eq!(
///     remove_dot_segments(["", "a", "b", "c", ".", "..", "..", "g"]),
///     ["", "a", "g"]
/// );
/// assert_eq!(remove_dot_segments(["mid", "content=5", "..", "6"]), ["mid", "6"]);
/// assert_eq!(remove_dot_segments(["", "b", "c", "."]), ["", "b", "c", ""]);
/// ```
#[must_use]
pub fn remove_dot_segments<I, S>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
{
    let mut output: Vec<String> = Vec::new();
    let mut ends_with_dot = false;
    for segment in segments
        .into_iter()
        .skip_while(|segment| is_dot_segment(segment.as_ref()))
    {
        match segment.as_ref() {
            "." => ends_with_dot = true,
            ".." => {
                if output.len() > 1 {
                    output.pop();
                }
                ends_with_dot = true;
            }
            _ => {
                output.push(segment.into());
                ends_with_dot = false;
            }
        }
    }
    if ends_with_dot {
        output.push(String::new());
    }
    output
}
