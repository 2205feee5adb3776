//! Descriptor-based runtime introspection
//!
//! This crate is the metadata-lookup helper behind an internals viewer:
//! it discovers the constants a class declares, reverse-maps a runtime
//! value back to the constant name that produced it, enumerates getter
//! results and public fields on a live object, renders arbitrary values
//! into bracketed debug strings, and expands raw scalars or arrays inside
//! a property map into symbolic constant names.
//!
//! There is no runtime reflection to lean on, so introspectable types
//! register an explicit [`ClassDescriptor`]: a declaration-ordered table
//! of constants, fields and zero-argument methods with modifier flags and
//! accessors. Everything read through a descriptor is carried as a closed
//! [`Value`] enum.
//!
//! # Example
//!
//! ```
//! use introspect::{find_constant, find_constants, ClassDescriptor, Value};
//!
//! let sensor = ClassDescriptor::builder("Sensor")
//!     .constant("TYPE_LIGHT", 5)
//!     .constant("TYPE_PROXIMITY", 8)
//!     .build();
//!
//! let constants = find_constants(&sensor, None, Some(r"TYPE_(\w+)")).unwrap();
//! assert_eq!(constants["LIGHT"], Value::Int(5));
//!
//! let name = find_constant(&sensor, &Value::Int(8), Some(r"TYPE_(\w+)")).unwrap();
//! assert_eq!(name.as_deref(), Some("PROXIMITY"));
//! ```
//!
//! Member access failures are never fatal: they are logged at debug level
//! under the `introspect` tracing target and the member is skipped. The
//! only error any operation returns is a malformed name pattern, which is
//! a caller programming error and propagates eagerly.
//!
//! All operations are stateless; every result map is freshly built and
//! owned by the caller.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Class descriptors and the registration seam
pub mod descriptor;

/// Error taxonomy
pub mod error;

/// Property-map expansion
pub mod expand;

/// Descriptor registry
pub mod registry;

/// Debug rendering
pub mod render;

/// Member discovery and reverse lookup
pub mod scan;

/// Tagged value model
pub mod value;

pub use descriptor::{
    downcast_receiver, Accessor, ClassBuilder, ClassDescriptor, ConstantDescriptor,
    FieldDescriptor, MethodDescriptor, MethodOrigin, Modifiers, Reflect,
};
pub use error::{AccessError, Error};
pub use expand::{expand, PropertyMap};
pub use registry::DescriptorRegistry;
pub use render::{render, render_with, RenderOptions};
pub use scan::{
    find_constant, find_constants, find_fields, find_getters, find_methods, GETTER_PATTERN,
};
pub use value::{OpaqueValue, Value, ValueKind};
