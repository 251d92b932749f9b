//! Small shared helpers: the universal default-resolution rule, tri-state
//! flag resolution, and URL escaping for badge and asset paths.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside a URL path segment. Unreserved characters,
/// sub-delimiters, `:` and `@` pass through; everything else (notably `/`
/// and spaces) is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Percent-encode a string for use as a single URL path segment.
pub fn path_escape(s: &str) -> String {
    utf8_percent_encode(s, PATH_SEGMENT).to_string()
}

/// Encode a string for use as a URL query value. Spaces become `+`.
pub fn query_escape(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Return the first non-empty candidate, or the last candidate if all are
/// empty. This is the one defaulting rule used everywhere: an explicit
/// override always wins over a computed default.
pub fn first_non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    for candidate in candidates {
        if !candidate.is_empty() {
            return candidate;
        }
    }
    candidates.last().copied().unwrap_or_default()
}

/// Resolve a tri-state flag (present-true / present-false / absent) against
/// a default for the absent case.
pub fn resolve_flag(flag: Option<bool>, default: bool) -> bool {
    flag.unwrap_or(default)
}
