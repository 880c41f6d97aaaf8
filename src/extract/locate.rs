//! Locating the embedded bootstrap JSON in a page
//!
//! The site assigns its initial data to a global variable inside a
//! `<script>` element. Finding it is a heuristic: the default
//! [`RegexLocator`] mirrors a simple non-greedy pattern match, while
//! [`ScriptTagLocator`] parses the document and brace-scans script bodies.

use crate::config::LocatorKind;
use crate::ScoutError;
use regex::Regex;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;

/// Assignment prefix for the data variable, in either spelling the site uses
const ASSIGNMENT_PREFIX: &str = r#"(?:var\s+ytInitialData|window\["ytInitialData"\])\s*=\s*"#;

/// The text found by a locator
#[derive(Debug, Clone)]
pub struct EmbeddedJson<'a> {
    /// Span the locator believes holds the whole object
    pub span: Cow<'a, str>,

    /// Text from the opening brace to the end of the enclosing container,
    /// used to recover when `span` under-matches
    pub remainder: Cow<'a, str>,
}

/// Strategy for finding the embedded JSON object in an HTML document
pub trait JsonLocator: Send + Sync {
    /// Returns the embedded JSON text, or `None` when the marker is absent
    fn locate<'a>(&self, html: &'a str) -> Option<EmbeddedJson<'a>>;
}

/// Builds the locator selected in configuration
pub fn build_locator(kind: LocatorKind) -> Result<Box<dyn JsonLocator>, ScoutError> {
    Ok(match kind {
        LocatorKind::Regex => Box::new(RegexLocator::new()?),
        LocatorKind::ScriptTag => Box::new(ScriptTagLocator::new()?),
    })
}

/// Matches `var ytInitialData = {...};` non-greedily over the raw document
///
/// The match ends at the first `};`, which can fall inside a string
/// literal. [`parse_embedded`] recovers from that case.
#[derive(Debug, Clone)]
pub struct RegexLocator {
    pattern: Regex,
}

impl RegexLocator {
    pub fn new() -> Result<Self, ScoutError> {
        let pattern = Regex::new(&format!(r"{}(\{{.+?\}});", ASSIGNMENT_PREFIX))?;
        Ok(Self { pattern })
    }
}

impl JsonLocator for RegexLocator {
    fn locate<'a>(&self, html: &'a str) -> Option<EmbeddedJson<'a>> {
        let group = self.pattern.captures(html)?.get(1)?;
        Some(EmbeddedJson {
            span: Cow::Borrowed(group.as_str()),
            remainder: Cow::Borrowed(&html[group.start()..]),
        })
    }
}

/// Walks `<script>` elements and brace-scans the first assignment found
#[derive(Debug, Clone)]
pub struct ScriptTagLocator {
    assignment: Regex,
}

impl ScriptTagLocator {
    pub fn new() -> Result<Self, ScoutError> {
        let assignment = Regex::new(&format!(r"{}\{{", ASSIGNMENT_PREFIX))?;
        Ok(Self { assignment })
    }
}

impl JsonLocator for ScriptTagLocator {
    fn locate<'a>(&self, html: &'a str) -> Option<EmbeddedJson<'a>> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("script").ok()?;

        for script in document.select(&selector) {
            let text: String = script.text().collect();
            let Some(found) = self.assignment.find(&text) else {
                continue;
            };

            // The match ends just past the opening brace
            let remainder = &text[found.end() - 1..];
            if let Some(span) = balanced_object(remainder) {
                return Some(EmbeddedJson {
                    span: Cow::Owned(span.to_string()),
                    remainder: Cow::Owned(remainder.to_string()),
                });
            }
        }

        None
    }
}

/// Returns the prefix of `text` holding one brace-balanced JSON object
///
/// `text` must start with `{`. Braces inside string literals (including
/// escaped quotes) are ignored. Returns `None` if the object never closes.
pub fn balanced_object(text: &str) -> Option<&str> {
    if !text.starts_with('{') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..=index]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parses JSON without serde_json's nesting limit
///
/// The parser recursion runs on a growable stack, so nesting depth is
/// bounded by memory rather than by the thread stack.
pub fn parse_unbounded(text: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Parses located text into a JSON tree
///
/// If the located span is not valid JSON, the object is re-scanned from
/// the same opening brace with [`balanced_object`]. When that also fails,
/// the original parse error is returned.
pub fn parse_embedded(embedded: &EmbeddedJson<'_>) -> Result<Value, serde_json::Error> {
    let err = match parse_unbounded(&embedded.span) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    match balanced_object(&embedded.remainder) {
        Some(span) if span.len() != embedded.span.len() => {
            tracing::debug!(
                "Located span did not parse ({}), retrying with {} balanced bytes",
                err,
                span.len()
            );
            parse_unbounded(span).map_err(|_| err)
        }
        _ => Err(err),
    }
}
