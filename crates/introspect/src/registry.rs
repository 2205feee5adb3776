//! Descriptor registry
//!
//! Process-level table of class descriptors keyed by class name, so a
//! viewer can resolve a constants-holding class from a name it got out of
//! band (a dump, a config entry, a picker UI).

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::descriptor::ClassDescriptor;

/// Registry of class descriptors
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    classes: FxHashMap<String, Arc<ClassDescriptor>>,
}

impl DescriptorRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its class name
    pub fn register(&mut self, class: Arc<ClassDescriptor>) {
        self.classes.insert(class.name.clone(), class);
    }

    /// Get a descriptor by class name
    pub fn get(&self, name: &str) -> Option<&Arc<ClassDescriptor>> {
        self.classes.get(name)
    }

    /// Check if a class is registered
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over registered descriptors
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ClassDescriptor>> {
        self.classes.values()
    }
}
