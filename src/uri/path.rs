/// Merge `incoming` path segments onto `existing` path segments.
///
/// The last segment of `existing` is always treated as a file and replaced, so a base that names
/// a directory must end with an empty segment (a trailing `/`).
///
/// Only the leading segment of `incoming` is interpreted:
///
/// - `""`, an absolute path, replaces `existing` entirely
/// - `"."` is dropped and the rest is appended
/// - `".."` is dropped and consumes one more segment of `existing`
/// - anything else is appended as is
///
/// Dot segments further down `incoming` are kept verbatim.
///
/// # Examples
///
/// ```
/// use uref::uri::merge;
///
/// assert_eq!(merge(vec!["", "about", "us", ""], &["..", "me", ""]), ["", "about", "me", ""]);
/// assert_eq!(merge(vec!["", "about", "us"], &["me"]), ["", "about", "me"]);
/// assert_eq!(merge(vec!["", "about", "us", ""], &["", "services"]), ["", "services"]);
/// ```
pub fn merge<'a>(mut existing: Vec<&'a str>, mut incoming: &[&'a str]) -> Vec<&'a str> {
    loop {
        let [first, rest @ ..] = incoming else {
            return existing;
        };

        existing.pop();

        match *first {
            "" => return incoming.to_vec(),
            "." => {
                existing.extend_from_slice(rest);
                return existing;
            }
            ".." => incoming = rest,
            _ => {
                existing.extend_from_slice(incoming);
                return existing;
            }
        }
    }
}
