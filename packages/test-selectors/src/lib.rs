#![deny(clippy::all)]

//! Automatic `data-test-*` attribute binding for component-based UI
//! frameworks.
//!
//! Components carry `data-test-*` properties so acceptance tests can find
//! their rendered elements. This crate discovers those properties on a
//! component instance and appends them to the instance's attribute-binding
//! list during initialization; the host framework then reflects every listed
//! property as an HTML attribute on the component's root element. The
//! query-side selector helpers and the production-mode property stripper
//! live here as well.

pub mod bind_attributes;
pub mod component;
pub mod config;
mod error;
pub mod hooks;
pub mod selector;
pub mod strip;

// Re-exports
pub use bind_attributes::{bind_test_attributes, bind_test_attributes_with};
pub use component::{AttributeBindings, ComponentDefinition, ComponentInstance, PropertyMap};
pub use config::{BindingOptions, DEFAULT_ATTRIBUTE_PREFIX, DEFAULT_OPT_IN_PROPERTY};
pub use error::BindError;
pub use hooks::{BindTestAttributesHook, InitHookRegistry, InstanceInitHook};
pub use selector::{test_selector, test_selector_with_value, ParseSelectorError, TestSelector};
pub use strip::{strip_definition_properties, strip_test_properties};
