//! Class descriptors
//!
//! Rust has no runtime reflection, so introspectable types register an
//! explicit descriptor: a table of constants, fields and zero-argument
//! methods with their modifiers and accessors. Scans in [`crate::scan`]
//! enumerate these tables the way the original enumerated live class
//! metadata.
//!
//! Accessors are plain function pointers over `&dyn Any` so descriptors
//! stay `Clone` and `Debug`; an accessor downcasts its receiver and reads
//! one member, reporting failure as a non-fatal [`AccessError`].

use std::any::Any;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::value::{Value, ValueKind};

/// Reads one member off a receiver.
pub type Accessor = fn(&dyn Any) -> Result<Value, AccessError>;

/// Modifier flags for class members
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Public visibility
    pub is_public: bool,
    /// Static member
    pub is_static: bool,
    /// Immutable after initialization
    pub is_final: bool,
}

impl Modifiers {
    /// Modifiers of a constant: public, static, final
    pub const fn constant() -> Self {
        Self {
            is_public: true,
            is_static: true,
            is_final: true,
        }
    }

    /// Modifiers of a public instance member
    pub const fn instance() -> Self {
        Self {
            is_public: true,
            is_static: false,
            is_final: false,
        }
    }

    /// Clear the public flag
    pub const fn hidden(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Set the static flag
    pub const fn statically(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Clear the final flag
    pub const fn mutable(mut self) -> Self {
        self.is_final = false;
        self
    }
}

/// A named constant on a class.
///
/// The value is captured at registration; a constant may instead record an
/// access failure, which discovery logs and skips exactly like the original
/// skipped an unreadable static field.
#[derive(Debug, Clone)]
pub struct ConstantDescriptor {
    /// Constant name as declared
    pub name: String,
    /// Declared kind
    pub kind: ValueKind,
    /// Modifier flags
    pub modifiers: Modifiers,
    value: Result<Value, AccessError>,
}

impl ConstantDescriptor {
    /// A readable public static final constant
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            kind: value.kind(),
            modifiers: Modifiers::constant(),
            value: Ok(value),
        }
    }

    /// A constant whose value cannot be read
    pub fn denied(name: impl Into<String>, kind: ValueKind) -> Self {
        let name = name.into();
        let value = Err(AccessError::Denied {
            member: name.clone(),
        });
        Self {
            name,
            kind,
            modifiers: Modifiers::constant(),
            value,
        }
    }

    /// Override the modifier flags
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Read the constant's value
    pub fn read(&self) -> Result<Value, AccessError> {
        self.value.clone()
    }
}

/// A field on a class instance.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: String,
    /// Declared kind
    pub kind: ValueKind,
    /// Modifier flags
    pub modifiers: Modifiers,
    read: Accessor,
}

impl FieldDescriptor {
    /// A public instance field
    pub fn new(name: impl Into<String>, kind: ValueKind, read: Accessor) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Modifiers::instance(),
            read,
        }
    }

    /// Override the modifier flags
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Read this field off a receiver
    pub fn read(&self, receiver: &dyn Any) -> Result<Value, AccessError> {
        (self.read)(receiver)
    }
}

/// Where a method was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodOrigin {
    /// Declared on the class itself (or an ancestor descriptor)
    Class,
    /// Inherited from the universal base type; skipped by discovery
    Base,
}

/// A method on a class instance.
///
/// Only zero-argument methods can be invoked through the descriptor; the
/// arity is recorded so discovery can filter the rest out.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    /// Method name as declared
    pub name: String,
    /// Declared return kind
    pub return_kind: ValueKind,
    /// Number of declared parameters
    pub arity: usize,
    /// Modifier flags
    pub modifiers: Modifiers,
    /// Declaration origin
    pub origin: MethodOrigin,
    invoke: Accessor,
}

impl MethodDescriptor {
    /// A public zero-argument instance method
    pub fn new(name: impl Into<String>, return_kind: ValueKind, invoke: Accessor) -> Self {
        Self {
            name: name.into(),
            return_kind,
            arity: 0,
            modifiers: Modifiers::instance(),
            origin: MethodOrigin::Class,
            invoke,
        }
    }

    /// Set the declared parameter count
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Override the modifier flags
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark as inherited from the universal base type
    pub fn from_base(mut self) -> Self {
        self.origin = MethodOrigin::Base;
        self
    }

    /// Invoke this method on a receiver
    pub fn invoke(&self, receiver: &dyn Any) -> Result<Value, AccessError> {
        if self.arity != 0 {
            return Err(AccessError::NotInvocable {
                member: self.name.clone(),
            });
        }
        (self.invoke)(receiver)
    }
}

/// Registered metadata for one class.
///
/// Member vectors preserve declaration order; reverse lookup matches the
/// first constant in declaration order, which is observable behavior.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    /// Class name
    pub name: String,
    /// Parent class, if any
    pub parent: Option<Arc<ClassDescriptor>>,
    /// Constants in declaration order
    pub constants: Vec<ConstantDescriptor>,
    /// Instance fields in declaration order
    pub fields: Vec<FieldDescriptor>,
    /// Instance methods in declaration order
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    /// Start building a descriptor
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            parent: None,
            constants: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Inheritance chain, this class first, root ancestor last
    pub fn hierarchy(&self) -> Vec<&ClassDescriptor> {
        let mut chain = vec![self];
        let mut current = self.parent.as_deref();
        while let Some(class) = current {
            chain.push(class);
            current = class.parent.as_deref();
        }
        chain
    }

    /// Look up a constant declared on this class
    pub fn constant(&self, name: &str) -> Option<&ConstantDescriptor> {
        self.constants.iter().find(|c| c.name == name)
    }

    /// Look up a field declared on this class
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a method declared on this class
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Builder for [`ClassDescriptor`]
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    parent: Option<Arc<ClassDescriptor>>,
    constants: Vec<ConstantDescriptor>,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodDescriptor>,
}

impl ClassBuilder {
    /// Set the parent class
    pub fn parent(mut self, parent: Arc<ClassDescriptor>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Add a public static final constant
    pub fn constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constants.push(ConstantDescriptor::new(name, value));
        self
    }

    /// Add a fully specified constant
    pub fn push_constant(mut self, constant: ConstantDescriptor) -> Self {
        self.constants.push(constant);
        self
    }

    /// Add a public instance field
    pub fn field(mut self, name: impl Into<String>, kind: ValueKind, read: Accessor) -> Self {
        self.fields.push(FieldDescriptor::new(name, kind, read));
        self
    }

    /// Add a fully specified field
    pub fn push_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a public zero-argument instance method
    pub fn method(
        mut self,
        name: impl Into<String>,
        return_kind: ValueKind,
        invoke: Accessor,
    ) -> Self {
        self.methods.push(MethodDescriptor::new(name, return_kind, invoke));
        self
    }

    /// Add a fully specified method
    pub fn push_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Finish the descriptor
    pub fn build(self) -> ClassDescriptor {
        ClassDescriptor {
            name: self.name,
            parent: self.parent,
            constants: self.constants,
            fields: self.fields,
            methods: self.methods,
        }
    }

    /// Finish the descriptor behind an [`Arc`]
    pub fn build_arc(self) -> Arc<ClassDescriptor> {
        Arc::new(self.build())
    }
}

/// The registration seam for introspectable types.
pub trait Reflect: Any {
    /// Descriptor of this object's class
    fn class(&self) -> Arc<ClassDescriptor>;

    /// The receiver for descriptor accessors
    fn as_any(&self) -> &dyn Any;
}

/// Downcast an accessor receiver to its concrete type.
///
/// Accessors registered on a class reach their members through this; a
/// receiver of the wrong concrete type is an access failure, not a panic.
pub fn downcast_receiver<'a, T: Any>(
    receiver: &'a dyn Any,
    class: &str,
) -> Result<&'a T, AccessError> {
    receiver
        .downcast_ref::<T>()
        .ok_or_else(|| AccessError::ReceiverMismatch {
            class: class.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i64,
    }

    fn point_class() -> Arc<ClassDescriptor> {
        ClassDescriptor::builder("Point")
            .constant("ORIGIN_X", 0)
            .field("x", ValueKind::Int, |r| {
                let p = downcast_receiver::<Point>(r, "Point")?;
                Ok(Value::Int(p.x))
            })
            .method("getX", ValueKind::Int, |r| {
                let p = downcast_receiver::<Point>(r, "Point")?;
                Ok(Value::Int(p.x))
            })
            .build_arc()
    }

    #[test]
    fn test_builder_declaration_order() {
        let class = ClassDescriptor::builder("Flags")
            .constant("FLAG_B", 2)
            .constant("FLAG_A", 1)
            .build();
        assert_eq!(class.constants[0].name, "FLAG_B");
        assert_eq!(class.constants[1].name, "FLAG_A");
    }

    #[test]
    fn test_constant_read() {
        let class = point_class();
        let constant = class.constant("ORIGIN_X").unwrap();
        assert_eq!(constant.read().unwrap(), Value::Int(0));
        assert!(constant.modifiers.is_public);
        assert!(constant.modifiers.is_static);
        assert!(constant.modifiers.is_final);
    }

    #[test]
    fn test_denied_constant() {
        let constant = ConstantDescriptor::denied("SECRET", ValueKind::Int);
        assert_eq!(
            constant.read(),
            Err(AccessError::Denied {
                member: "SECRET".to_string()
            })
        );
    }

    #[test]
    fn test_field_and_method_access() {
        let class = point_class();
        let point = Point { x: 7 };

        let field = class.field("x").unwrap();
        assert_eq!(field.read(&point), Ok(Value::Int(7)));

        let method = class.method("getX").unwrap();
        assert_eq!(method.invoke(&point), Ok(Value::Int(7)));
    }

    #[test]
    fn test_receiver_mismatch() {
        let class = point_class();
        let not_a_point = "something else".to_string();
        assert_eq!(
            class.field("x").unwrap().read(&not_a_point),
            Err(AccessError::ReceiverMismatch {
                class: "Point".to_string()
            })
        );
    }

    #[test]
    fn test_arity_guard() {
        let method = MethodDescriptor::new("translate", ValueKind::Null, |_| Ok(Value::Null))
            .with_arity(2);
        let point = Point { x: 0 };
        assert_eq!(
            method.invoke(&point),
            Err(AccessError::NotInvocable {
                member: "translate".to_string()
            })
        );
    }

    #[test]
    fn test_hierarchy() {
        let animal = ClassDescriptor::builder("Animal").build_arc();
        let dog = ClassDescriptor::builder("Dog")
            .parent(animal.clone())
            .build_arc();
        let labrador = ClassDescriptor::builder("Labrador")
            .parent(dog)
            .build_arc();

        let chain = labrador.hierarchy();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].name, "Labrador");
        assert_eq!(chain[1].name, "Dog");
        assert_eq!(chain[2].name, "Animal");

        assert_eq!(animal.hierarchy().len(), 1);
    }
}
