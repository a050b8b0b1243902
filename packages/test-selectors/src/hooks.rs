//! Instance Initialization Hooks
//!
//! The extension point a host framework drives when a component instance is
//! initialized. The host owns the registry and runs it once per instance;
//! nothing here registers itself globally.

use crate::bind_attributes::bind_test_attributes_with;
use crate::component::ComponentInstance;
use crate::config::BindingOptions;
use crate::error::BindError;

/// A unit of work applied to a component instance during initialization,
/// before the host considers the instance ready.
pub trait InstanceInitHook {
    fn on_instance_init(&self, instance: &mut ComponentInstance) -> Result<(), BindError>;
}

/// The attribute binder packaged as an initialization hook.
#[derive(Debug, Clone, Default)]
pub struct BindTestAttributesHook {
    options: BindingOptions,
}

impl BindTestAttributesHook {
    pub fn new(options: BindingOptions) -> Self {
        Self { options }
    }
}

impl InstanceInitHook for BindTestAttributesHook {
    fn on_instance_init(&self, instance: &mut ComponentInstance) -> Result<(), BindError> {
        bind_test_attributes_with(instance, &self.options)
    }
}

/// An ordered collection of initialization hooks.
#[derive(Default)]
pub struct InitHookRegistry {
    hooks: Vec<Box<dyn InstanceInitHook>>,
}

impl InitHookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the attribute-binding hook using the
    /// default options.
    pub fn with_test_attribute_binding() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(BindTestAttributesHook::default()));
        registry
    }

    pub fn register(&mut self, hook: Box<dyn InstanceInitHook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Runs every hook against `instance` in registration order, stopping at
    /// the first error.
    pub fn run(&self, instance: &mut ComponentInstance) -> Result<(), BindError> {
        for hook in &self.hooks {
            hook.on_instance_init(instance)?;
        }
        Ok(())
    }
}
