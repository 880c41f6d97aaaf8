//! Netscape `cookies.txt` parsing
//!
//! Each data line carries seven tab-separated fields:
//! domain, include-subdomains flag, path, secure, expiry, name, value.

/// Minimum number of tab-separated fields on a usable data line
const MIN_FIELDS: usize = 7;

const NAME_FIELD: usize = 5;
const VALUE_FIELD: usize = 6;

/// A single name/value pair taken from a cookie file line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieRecord<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl std::fmt::Display for CookieRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Parses one line of a cookie file
///
/// Returns `None` for blank lines, comment lines (leading `#`) and lines
/// with fewer than seven fields. The value is trimmed, the name is not.
pub fn parse_cookie_line(line: &str) -> Option<CookieRecord<'_>> {
    if line.is_empty() || line.starts_with('#') || line.trim().is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(CookieRecord {
        name: fields[NAME_FIELD],
        value: fields[VALUE_FIELD].trim(),
    })
}

/// Converts Netscape cookie file text into a `Cookie` header value
///
/// Qualifying lines become `name=value` pairs joined by `"; "` in input
/// order. Nothing is escaped. Empty input, or input with no usable lines,
/// yields an empty string.
///
/// # Example
///
/// ```
/// use shorts_scout::cookies::normalize_cookies;
///
/// let text = "#comment\n.example.com\tTRUE\t/\tFALSE\t0\tsid\tabc123\n";
/// assert_eq!(normalize_cookies(text), "sid=abc123");
/// ```
pub fn normalize_cookies(text: &str) -> String {
    let pairs: Vec<String> = text
        .split('\n')
        .filter_map(parse_cookie_line)
        .map(|record| record.to_string())
        .collect();

    tracing::debug!("Normalized {} cookies", pairs.len());
    pairs.join("; ")
}
