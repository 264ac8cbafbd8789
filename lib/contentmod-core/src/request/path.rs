use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};

/// Regular expression for matching placeholders in the format `{name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Everything but the RFC 3986 unreserved characters is encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Iterates over the placeholder names of a template, in order of appearance.
///
/// A placeholder used twice is yielded twice.
pub fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    RE.captures_iter(template)
        .filter_map(|caps| caps.name("name"))
        .map(|found| found.as_str())
}

/// Replaces every `{name}` occurrence in `template`.
pub fn replace_placeholder(template: &str, name: &str, value: &str) -> String {
    let pattern = ["{", name, "}"].concat();
    template.replace(&pattern, value)
}

/// Replaces every `{name}` token of `template` in a single pass.
///
/// Inserted values are never scanned again, so a value that looks like a placeholder
/// stays as-is.
///
/// # Errors
///
/// Returns the first name `lookup` has no value for.
pub fn substitute<F, V>(template: &str, mut lookup: F) -> Result<String, String>
where
    F: FnMut(&str) -> Option<V>,
    V: AsRef<str>,
{
    let mut missing = None;
    let resolved = RE.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps["name"];
        match lookup(name) {
            Some(value) => value.as_ref().to_string(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) => Err(name),
        None => Ok(resolved.into_owned()),
    }
}

/// Percent-encodes a path parameter value.
pub(crate) fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Joins a resolved host and an operation path with a single `/`.
pub(crate) fn join(host: &str, path: &str) -> String {
    let host = host.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return host.to_string();
    }
    [host, "/", path].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_in_order() {
        let names: Vec<_> =
            placeholders("contentmoderator/review/v1.0/teams/{teamName}/reviews/{reviewId}")
                .collect();

        assert_eq!(names, vec!["teamName", "reviewId"]);
    }

    #[test]
    fn test_placeholders_without_any() {
        assert_eq!(placeholders("contentmoderator/moderate/v1.0/ProcessImage/OCR").count(), 0);
    }

    #[test]
    fn test_replace_duplicated_placeholder() {
        let path = replace_placeholder("/test/{id}/{id}", "id", "123");
        assert_eq!(path, "/test/123/123");
    }

    #[test]
    fn test_encode_path_segment() {
        insta::assert_snapshot!(encode_path_segment("hello world"), @"hello%20world");
        insta::assert_snapshot!(encode_path_segment("a/b?c#d"), @"a%2Fb%3Fc%23d");
        insta::assert_snapshot!(encode_path_segment("list-1.v2_x~y"), @"list-1.v2_x~y");
        insta::assert_snapshot!(encode_path_segment("café"), @"caf%C3%A9");
    }

    #[test]
    fn test_join_normalizes_slashes() {
        assert_eq!(
            join("https://westus.api.cognitive.microsoft.com/", "/contentmoderator/lists"),
            "https://westus.api.cognitive.microsoft.com/contentmoderator/lists"
        );
        assert_eq!(join("https://example.com", ""), "https://example.com");
    }
}
