//! Test Attribute Binding
//!
//! Discovers marker-prefixed properties on a component instance and appends
//! them to its attribute-binding list, so the host framework renders them as
//! HTML attributes on the component's root element. Invoked once per
//! instance during initialization, before the host considers the instance
//! ready.

use serde_json::Value;

use crate::component::{AttributeBindings, ComponentInstance};
use crate::config::BindingOptions;
use crate::error::BindError;

/// Binds all `data-test-*` properties of `instance` using the default
/// options. See [`bind_test_attributes_with`].
pub fn bind_test_attributes(instance: &mut ComponentInstance) -> Result<(), BindError> {
    bind_test_attributes_with(instance, &BindingOptions::default())
}

/// Appends every discovered marker-prefixed property name to the instance's
/// attribute-binding list, in discovery order, skipping names that are
/// already bound.
///
/// Discovery walks the invocation layer first, then the factory layer. The
/// bare marker property is reserved and never bound. When nothing needs to
/// be appended the instance is left entirely untouched, a single-string
/// binding value included.
///
/// Fails without mutating when the component is tagless and has not opted
/// in, or when appending would require replacing a derived binding value.
pub fn bind_test_attributes_with(
    instance: &mut ComponentInstance,
    options: &BindingOptions,
) -> Result<(), BindError> {
    let discovered: Vec<String> = instance
        .property_names()
        .filter(|name| options.is_bindable(name))
        .map(str::to_owned)
        .collect();

    if discovered.is_empty() {
        return Ok(());
    }

    if instance.tag_name() == Some("") && !opted_in(instance, options) {
        return Err(BindError::TaglessComponent {
            properties: discovered,
            opt_in_property: options.opt_in_property.clone(),
        });
    }

    let new_entries: Vec<String> = discovered
        .into_iter()
        .filter(|name| !instance.attribute_bindings().contains(name))
        .collect();

    if new_entries.is_empty() {
        return Ok(());
    }

    let merged = match instance.attribute_bindings() {
        AttributeBindings::Derived(_) => {
            return Err(BindError::DerivedAttributeBindings {
                properties: new_entries,
            });
        }
        AttributeBindings::Unset => new_entries,
        AttributeBindings::Single(existing) => {
            let mut merged = Vec::with_capacity(1 + new_entries.len());
            merged.push(existing.clone());
            merged.extend(new_entries);
            merged
        }
        AttributeBindings::List(existing) => {
            let mut merged = existing.clone();
            merged.extend(new_entries);
            merged
        }
    };

    tracing::debug!("bound test attributes: {:?}", merged);
    instance.set_attribute_bindings(AttributeBindings::List(merged));
    Ok(())
}

/// Returns whether the instance explicitly opted into binding without a
/// wrapping element. Only the boolean `true` counts.
fn opted_in(instance: &ComponentInstance, options: &BindingOptions) -> bool {
    matches!(
        instance.property(&options.opt_in_property),
        Some(Value::Bool(true))
    )
}
