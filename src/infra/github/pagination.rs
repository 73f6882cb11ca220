//! `Link` header pagination used by GitHub REST list endpoints.

use lazy_regex::regex_captures;
use reqwest::header::{HeaderMap, LINK};

/// URL of the next page advertised by a response, if any.
pub(crate) fn next_page_url(headers: &HeaderMap) -> Option<String> {
    headers
        .get(LINK)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_next_link)
}

/// Find the `rel="next"` target in a `Link` header value such as
/// `<https://api.github.com/...&page=2>; rel="next", <...&page=5>; rel="last"`.
fn parse_next_link(value: &str) -> Option<String> {
    value.split(',').find_map(|link| {
        let (_, url, params) = regex_captures!(r"^\s*<([^>]*)>(.*)$", link)?;
        let is_next = params
            .split(';')
            .filter_map(|param| param.trim().strip_prefix("rel="))
            .any(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"));
        is_next.then(|| url.to_string())
    })
}
