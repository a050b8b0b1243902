//! Binder Configuration

use serde::{Deserialize, Serialize};

/// Default marker prefix for auto-bound attribute properties.
pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "data-test-";

/// Default name of the property that opts a tagless component into binding.
pub const DEFAULT_OPT_IN_PROPERTY: &str = "supportsDataTestProperties";

/// Options controlling property discovery and render-mode eligibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingOptions {
    /// Properties whose names start with this prefix are bound automatically.
    pub attribute_prefix: String,
    /// A component with an empty tag name may opt into binding by setting
    /// this property to `true`.
    pub opt_in_property: String,
}

impl Default for BindingOptions {
    fn default() -> Self {
        BindingOptions {
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_owned(),
            opt_in_property: DEFAULT_OPT_IN_PROPERTY.to_owned(),
        }
    }
}

impl BindingOptions {
    /// Options with a custom marker prefix, e.g. `"data-qa-"`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        BindingOptions {
            attribute_prefix: prefix.into(),
            ..Default::default()
        }
    }

    /// The marker prefix without its trailing separator. The bare marker is
    /// reserved and never bound automatically.
    pub fn bare_marker(&self) -> &str {
        self.attribute_prefix
            .strip_suffix('-')
            .unwrap_or(&self.attribute_prefix)
    }

    /// Returns whether `name` is eligible for automatic binding.
    ///
    /// This is a heuristic based on whether name begins with and is longer
    /// than the marker prefix.
    pub fn is_bindable(&self, name: &str) -> bool {
        name.starts_with(&self.attribute_prefix) && name.len() > self.attribute_prefix.len()
    }

    /// Returns whether `name` belongs to the marker namespace at all, the
    /// bare marker included. Used when stripping properties for production.
    pub fn is_marked(&self, name: &str) -> bool {
        name == self.bare_marker() || name.starts_with(&self.attribute_prefix)
    }
}
