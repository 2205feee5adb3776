//! Member discovery and reverse lookup
//!
//! Free functions that enumerate a descriptor's constants, fields and
//! getter-style methods, mirroring what the original did with live class
//! metadata:
//!
//! - [`find_constants`] — public static final constants, keyed by resolved
//!   name, natural key order
//! - [`find_constant`] — reverse-map a value to the first matching constant
//!   name, in declaration order
//! - [`find_methods`] / [`find_getters`] — invoke public zero-argument
//!   instance methods and collect their results
//! - [`find_fields`] — read public instance fields across the hierarchy
//!
//! Name patterns follow the "one capture group renames" rule: if the
//! pattern has exactly one capture group the resolved name is the captured
//! substring, otherwise it is the full member name. Matching is unanchored.
//!
//! Access failures are never fatal: they are logged at debug level under
//! the `introspect` target and the member is skipped.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::descriptor::{ClassDescriptor, MethodOrigin, Reflect};
use crate::error::Error;
use crate::value::{Value, ValueKind};

/// Preset pattern for getter-style methods: matches `is*`/`get*` and
/// captures the remainder as the resolved name.
pub const GETTER_PATTERN: &str = "(?:is|get)(.*)";

static GETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(GETTER_PATTERN).expect("builtin getter pattern is valid"));

/// Apply the rename rule. `None` means the name does not match at all.
fn resolve_name(pattern: &Regex, name: &str) -> Option<String> {
    let caps = pattern.captures(name)?;
    // captures_len counts the implicit whole-match group
    if pattern.captures_len() == 2 {
        Some(caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string())
    } else {
        Some(name.to_string())
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>, Error> {
    Ok(match pattern {
        Some(p) => Some(Regex::new(p)?),
        None => None,
    })
}

/// Discover the constants declared on a class.
///
/// Only public static final members are considered. `kind` restricts the
/// declared kind when given; `pattern` filters and optionally renames.
/// Unreadable constants are logged and skipped. Keys come back in natural
/// sort order.
pub fn find_constants(
    class: &ClassDescriptor,
    kind: Option<ValueKind>,
    pattern: Option<&str>,
) -> Result<BTreeMap<String, Value>, Error> {
    let pattern = compile(pattern)?;
    Ok(constants_with(class, kind, pattern.as_ref()))
}

fn constants_with(
    class: &ClassDescriptor,
    kind: Option<ValueKind>,
    pattern: Option<&Regex>,
) -> BTreeMap<String, Value> {
    let mut map = BTreeMap::new();
    for constant in &class.constants {
        let m = constant.modifiers;
        if !m.is_public || !m.is_static || !m.is_final {
            continue;
        }
        if kind.is_some_and(|k| constant.kind != k) {
            continue;
        }
        let name = match pattern {
            Some(p) => match resolve_name(p, &constant.name) {
                Some(name) => name,
                None => continue,
            },
            None => constant.name.clone(),
        };
        match constant.read() {
            Ok(value) => {
                map.insert(name, value);
            }
            Err(err) => {
                debug!(
                    target: "introspect",
                    "constant {}.{} skipped: {}", class.name, constant.name, err
                );
            }
        }
    }
    map
}

/// Reverse-map a value to the name of the constant holding it.
///
/// Same filtering as [`find_constants`] minus the kind filter. Returns the
/// first match in declaration order, or `None` when no constant holds the
/// value. Unreadable constants are logged and skipped.
pub fn find_constant(
    class: &ClassDescriptor,
    value: &Value,
    pattern: Option<&str>,
) -> Result<Option<String>, Error> {
    let pattern = compile(pattern)?;
    for constant in &class.constants {
        let m = constant.modifiers;
        if !m.is_public || !m.is_static || !m.is_final {
            continue;
        }
        let name = match pattern.as_ref() {
            Some(p) => match resolve_name(p, &constant.name) {
                Some(name) => name,
                None => continue,
            },
            None => constant.name.clone(),
        };
        match constant.read() {
            Ok(v) if v == *value => return Ok(Some(name)),
            Ok(_) => {}
            Err(err) => {
                debug!(
                    target: "introspect",
                    "constant {}.{} skipped: {}", class.name, constant.name, err
                );
            }
        }
    }
    Ok(None)
}

/// Invoke getter-style methods on an object with the preset
/// [`GETTER_PATTERN`].
pub fn find_getters(object: &dyn Reflect) -> BTreeMap<String, Value> {
    methods_with(object, None, Some(&GETTER_RE))
}

/// Invoke zero-argument methods on an object and collect their results.
///
/// Public, non-static, zero-argument methods across the hierarchy are
/// considered, excluding members inherited from the universal base type.
/// `return_kind` restricts the declared return kind; `pattern` filters and
/// optionally renames. Invocation failures are logged and skipped.
pub fn find_methods(
    object: &dyn Reflect,
    return_kind: Option<ValueKind>,
    pattern: Option<&str>,
) -> Result<BTreeMap<String, Value>, Error> {
    let pattern = compile(pattern)?;
    Ok(methods_with(object, return_kind, pattern.as_ref()))
}

fn methods_with(
    object: &dyn Reflect,
    return_kind: Option<ValueKind>,
    pattern: Option<&Regex>,
) -> BTreeMap<String, Value> {
    let class = object.class();
    let mut map = BTreeMap::new();
    for declaring in class.hierarchy() {
        for method in &declaring.methods {
            let m = method.modifiers;
            if !m.is_public
                || m.is_static
                || method.arity != 0
                || method.origin == MethodOrigin::Base
            {
                continue;
            }
            if return_kind.is_some_and(|k| method.return_kind != k) {
                continue;
            }
            let name = match pattern {
                Some(p) => match resolve_name(p, &method.name) {
                    Some(name) => name,
                    None => continue,
                },
                None => method.name.clone(),
            };
            // most-derived declaration wins
            if map.contains_key(&name) {
                continue;
            }
            match method.invoke(object.as_any()) {
                Ok(value) => {
                    map.insert(name, value);
                }
                Err(err) => {
                    debug!(
                        target: "introspect",
                        "method {}.{} skipped: {}", declaring.name, method.name, err
                    );
                }
            }
        }
    }
    map
}

/// Read the public instance fields of an object.
///
/// `None` yields an empty map rather than an error. Fields declared
/// anywhere in the hierarchy are read off the object; unreadable fields
/// are logged and skipped. Keys come back in natural sort order.
pub fn find_fields(object: Option<&dyn Reflect>) -> BTreeMap<String, Value> {
    let mut map = BTreeMap::new();
    let Some(object) = object else {
        return map;
    };
    let class = object.class();
    for declaring in class.hierarchy() {
        for field in &declaring.fields {
            let m = field.modifiers;
            if !m.is_public || m.is_static {
                continue;
            }
            if map.contains_key(&field.name) {
                continue;
            }
            match field.read(object.as_any()) {
                Ok(value) => {
                    map.insert(field.name.clone(), value);
                }
                Err(err) => {
                    debug!(
                        target: "introspect",
                        "field {}.{} skipped: {}", declaring.name, field.name, err
                    );
                }
            }
        }
    }
    map
}
