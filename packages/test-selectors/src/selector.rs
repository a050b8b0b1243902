//! Test Selectors
//!
//! Builds and parses the CSS attribute selectors that target bound test
//! attributes, e.g. `[data-test-post-title]` or `[data-test-comment-id="3"]`.
//! This is the query-side counterpart of the binder.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::BindingOptions;

/// Regex for parsing attribute selectors
static ATTRIBUTE_SELECTOR_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\[([A-Za-z][-\w]*)(?:="((?:[^"\\]|\\.)*)")?\]$"#).unwrap());

/// A CSS attribute selector targeting a single marker-prefixed attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSelector {
    /// Attribute name without the marker prefix.
    pub name: String,
    /// Optional attribute value to match exactly.
    pub value: Option<String>,
}

impl TestSelector {
    pub fn new(name: impl Into<String>) -> Self {
        TestSelector {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        TestSelector {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Renders the selector using the marker prefix from `options`.
    pub fn to_selector_string(&self, options: &BindingOptions) -> String {
        match &self.value {
            Some(value) => format!(
                "[{}{}=\"{}\"]",
                options.attribute_prefix,
                self.name,
                escape_value(value)
            ),
            None => format!("[{}{}]", options.attribute_prefix, self.name),
        }
    }

    /// Parses a selector rendered with the marker prefix from `options`.
    ///
    /// Accepts exactly the strings this type renders; everything else is
    /// rejected, the bare marker included.
    pub fn parse_with(
        selector: &str,
        options: &BindingOptions,
    ) -> Result<Self, ParseSelectorError> {
        let captures = ATTRIBUTE_SELECTOR_REGEXP
            .captures(selector)
            .ok_or_else(|| ParseSelectorError::new(selector))?;

        let attribute = captures.get(1).unwrap().as_str();
        let name = attribute
            .strip_prefix(options.attribute_prefix.as_str())
            .filter(|rest| !rest.is_empty())
            .ok_or_else(|| ParseSelectorError::new(selector))?;

        let value = captures.get(2).map(|m| unescape_value(m.as_str()));

        Ok(TestSelector {
            name: name.to_owned(),
            value,
        })
    }
}

impl fmt::Display for TestSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_selector_string(&BindingOptions::default()))
    }
}

impl FromStr for TestSelector {
    type Err = ParseSelectorError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        TestSelector::parse_with(selector, &BindingOptions::default())
    }
}

/// Builds `[data-test-<name>]`.
pub fn test_selector(name: &str) -> String {
    TestSelector::new(name).to_string()
}

/// Builds `[data-test-<name>="<value>"]`.
pub fn test_selector_with_value(name: &str, value: &str) -> String {
    TestSelector::with_value(name, value).to_string()
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn unescape_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                unescaped.push(next);
            }
        } else {
            unescaped.push(ch);
        }
    }
    unescaped
}

/// An input string that is not a test attribute selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSelectorError {
    pub selector: String,
}

impl ParseSelectorError {
    fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

impl fmt::Display for ParseSelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a test attribute selector: {}", self.selector)
    }
}

impl std::error::Error for ParseSelectorError {}
