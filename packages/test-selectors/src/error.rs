//! Binder Errors

use thiserror::Error;

/// Errors raised by the attribute binder.
///
/// Both variants signal programming-time misconfiguration rather than a
/// transient runtime condition. The binder never retries and never leaves a
/// partial mutation behind: the instance is unmodified when an error is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The component renders no wrapping element, so there is no place to
    /// put the attributes, and it did not opt into out-of-band binding.
    #[error(
        "could not bind {properties:?} automatically because the component \
         has an empty tag name; set `{opt_in_property}` to true to bind them anyway"
    )]
    TaglessComponent {
        /// The discovered property names that could not be bound.
        properties: Vec<String>,
        /// The property that would have opted the component in.
        opt_in_property: String,
    },

    /// The attribute-binding field is recomputed on read and cannot be
    /// replaced with an extended list.
    #[error(
        "could not add {properties:?} to an `attribute_bindings` value that \
         is derived; declare it as a plain list instead"
    )]
    DerivedAttributeBindings {
        /// The property names that would have been appended.
        properties: Vec<String>,
    },
}
