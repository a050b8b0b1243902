//! Component Data Model
//!
//! Explicit two-layer property model for component-like objects: properties
//! declared on the definition (factory level) merged with overrides supplied
//! at creation time (invocation level). The invocation layer wins for value
//! lookup; both layers contribute to name discovery.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered property bag. Iteration order is declaration order.
pub type PropertyMap = IndexMap<String, Value>;

/// The attribute-binding field of a component.
///
/// `Derived` models a binding list that the host recomputes on read; it can
/// be inspected for membership but never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeBindings {
    /// Field absent.
    #[default]
    Unset,
    /// A single attribute name.
    Single(String),
    /// An ordered list of attribute names.
    List(Vec<String>),
    /// Read-only value recomputed by the host.
    Derived(Vec<String>),
}

impl AttributeBindings {
    pub fn is_unset(&self) -> bool {
        matches!(self, AttributeBindings::Unset)
    }

    /// Returns whether `name` is already bound.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            AttributeBindings::Unset => false,
            AttributeBindings::Single(existing) => existing == name,
            AttributeBindings::List(entries) | AttributeBindings::Derived(entries) => {
                entries.iter().any(|entry| entry == name)
            }
        }
    }
}

/// A component blueprint: the factory-level configuration from which
/// instances are created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    tag_name: Option<String>,
    attribute_bindings: AttributeBindings,
    properties: PropertyMap,
}

impl ComponentDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the wrapping element name. The empty string means the component
    /// renders no wrapping element.
    pub fn tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    pub fn attribute_bindings(mut self, bindings: AttributeBindings) -> Self {
        self.attribute_bindings = bindings;
        self
    }

    /// Declares a factory-level property.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    /// Creates an instance with no invocation-level overrides.
    pub fn create(&self) -> ComponentInstance {
        self.create_with(PropertyMap::new())
    }

    /// Creates an instance, supplying invocation-level property overrides.
    pub fn create_with(&self, invocation_properties: PropertyMap) -> ComponentInstance {
        ComponentInstance {
            tag_name: self.tag_name.clone(),
            attribute_bindings: self.attribute_bindings.clone(),
            factory_properties: self.properties.clone(),
            invocation_properties,
        }
    }
}

/// A live component instance owning its property bag and binding list.
///
/// Instances are created by [`ComponentDefinition::create`] (or
/// [`ComponentDefinition::create_with`]) and mutated in place by the binder
/// during initialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    tag_name: Option<String>,
    attribute_bindings: AttributeBindings,
    factory_properties: PropertyMap,
    invocation_properties: PropertyMap,
}

impl ComponentInstance {
    /// The wrapping element name. `None` means the host default element,
    /// `Some("")` means the instance renders no wrapping element.
    pub fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    pub fn set_tag_name(&mut self, tag_name: impl Into<String>) {
        self.tag_name = Some(tag_name.into());
    }

    pub fn attribute_bindings(&self) -> &AttributeBindings {
        &self.attribute_bindings
    }

    pub fn set_attribute_bindings(&mut self, bindings: AttributeBindings) {
        self.attribute_bindings = bindings;
    }

    /// Looks up a property value, invocation layer first.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.invocation_properties
            .get(name)
            .or_else(|| self.factory_properties.get(name))
    }

    /// Sets an instance-level property.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.invocation_properties.insert(name.into(), value.into());
    }

    pub fn invocation_properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.invocation_properties
    }

    pub fn factory_properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.factory_properties
    }

    /// Enumerates every configured property name exactly once:
    /// invocation-level names in declaration order, then factory-level names
    /// not overridden at the invocation layer.
    pub fn property_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.invocation_properties
            .keys()
            .chain(
                self.factory_properties
                    .keys()
                    .filter(|name| !self.invocation_properties.contains_key(name.as_str())),
            )
            .map(String::as_str)
    }
}
