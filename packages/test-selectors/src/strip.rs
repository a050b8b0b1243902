//! Production Stripping
//!
//! Removes marker-prefixed properties from component definitions and
//! instances. Hosts that exclude test attributes from production builds run
//! this instead of the binder; it is the inverse of discovery, so the bare
//! marker property is removed as well.

use crate::component::{ComponentDefinition, ComponentInstance, PropertyMap};
use crate::config::BindingOptions;

/// Removes every marked property from both property layers of `instance`.
///
/// Returns the removed names in discovery order, invocation layer first,
/// each name reported once. The attribute-binding field and the tag name are
/// left untouched.
pub fn strip_test_properties(
    instance: &mut ComponentInstance,
    options: &BindingOptions,
) -> Vec<String> {
    let mut removed = remove_marked(instance.invocation_properties_mut(), options);
    for name in remove_marked(instance.factory_properties_mut(), options) {
        if !removed.contains(&name) {
            removed.push(name);
        }
    }
    if !removed.is_empty() {
        tracing::debug!("stripped test properties: {:?}", removed);
    }
    removed
}

/// Removes every marked property from a component definition, returning the
/// removed names in declaration order.
pub fn strip_definition_properties(
    definition: &mut ComponentDefinition,
    options: &BindingOptions,
) -> Vec<String> {
    remove_marked(definition.properties_mut(), options)
}

fn remove_marked(properties: &mut PropertyMap, options: &BindingOptions) -> Vec<String> {
    let marked: Vec<String> = properties
        .keys()
        .filter(|name| options.is_marked(name.as_str()))
        .cloned()
        .collect();
    for name in &marked {
        properties.shift_remove(name);
    }
    marked
}
