//! Property-map expansion
//!
//! Replaces a raw scalar or sequence value in a caller-owned property map
//! with the symbolic constant name(s) it corresponds to, resolved against
//! a constants-holding class.

use std::collections::BTreeMap;

use crate::descriptor::ClassDescriptor;
use crate::error::Error;
use crate::scan::{find_constant, find_constants};
use crate::value::Value;

/// A caller-owned key/value map, ordered by key.
pub type PropertyMap = BTreeMap<String, Value>;

/// Expand the value at `key` into symbolic constant name(s), in place.
///
/// An absent key or a `Null` value is a no-op. A sequence value is
/// replaced by a parallel sequence of constant names: constants are
/// discovered with the element's kind and `pattern`, and each element
/// takes the first name-ordered constant with an equal value, or `Null`
/// when nothing matches. A scalar value is replaced by its reverse-lookup
/// name in declaration order, or `Null` when nothing matches.
///
/// The two paths deliberately match in different orders (name order for
/// sequences, declaration order for scalars); that asymmetry is observable
/// behavior inherited from the original and is kept as is.
pub fn expand(
    map: &mut PropertyMap,
    key: &str,
    class: &ClassDescriptor,
    pattern: &str,
) -> Result<(), Error> {
    let Some(value) = map.get(key).cloned() else {
        return Ok(());
    };
    if value.is_null() {
        return Ok(());
    }

    if let Value::Seq(items) = value {
        // a leading null carries no kind; the element kind comes from the
        // first non-null element
        let elem_kind = items.iter().find(|v| !v.is_null()).map(Value::kind);
        let constants = find_constants(class, elem_kind, Some(pattern))?;
        let names = items
            .iter()
            .map(|item| {
                constants
                    .iter()
                    .find(|(_, v)| *v == item)
                    .map(|(name, _)| Value::Str(name.clone()))
                    .unwrap_or(Value::Null)
            })
            .collect();
        map.insert(key.to_string(), Value::Seq(names));
    } else {
        let name = find_constant(class, &value, Some(pattern))?;
        map.insert(key.to_string(), name.map(Value::Str).unwrap_or(Value::Null));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ConstantDescriptor;
    use crate::value::ValueKind;

    fn flags_class() -> ClassDescriptor {
        ClassDescriptor::builder("InputDevice")
            .constant("FLAG_A", 1)
            .constant("FLAG_B", 2)
            .constant("FLAG_NAME", "name")
            .build()
    }

    #[test]
    fn test_expand_seq() {
        let mut map = PropertyMap::new();
        map.insert(
            "flags".to_string(),
            Value::Seq(vec![Value::Int(1), Value::Int(2)]),
        );

        expand(&mut map, "flags", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(
            map["flags"],
            Value::Seq(vec![Value::from("A"), Value::from("B")])
        );
    }

    #[test]
    fn test_expand_seq_without_capture_keeps_full_names() {
        let mut map = PropertyMap::new();
        map.insert("flags".to_string(), Value::Seq(vec![Value::Int(2)]));

        expand(&mut map, "flags", &flags_class(), "FLAG_").unwrap();

        assert_eq!(map["flags"], Value::Seq(vec![Value::from("FLAG_B")]));
    }

    #[test]
    fn test_expand_seq_unmatched_element() {
        let mut map = PropertyMap::new();
        map.insert(
            "flags".to_string(),
            Value::Seq(vec![Value::Int(1), Value::Int(99)]),
        );

        expand(&mut map, "flags", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(
            map["flags"],
            Value::Seq(vec![Value::from("A"), Value::Null])
        );
    }

    #[test]
    fn test_expand_seq_element_kind_filter() {
        // int elements only match int constants, never FLAG_NAME
        let mut map = PropertyMap::new();
        map.insert("flags".to_string(), Value::Seq(vec![Value::Int(1)]));

        expand(&mut map, "flags", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(map["flags"], Value::Seq(vec![Value::from("A")]));
    }

    #[test]
    fn test_expand_seq_leading_null() {
        let mut map = PropertyMap::new();
        map.insert(
            "flags".to_string(),
            Value::Seq(vec![Value::Null, Value::Int(1), Value::Int(2)]),
        );

        expand(&mut map, "flags", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(
            map["flags"],
            Value::Seq(vec![Value::Null, Value::from("A"), Value::from("B")])
        );
    }

    #[test]
    fn test_expand_empty_seq() {
        let mut map = PropertyMap::new();
        map.insert("flags".to_string(), Value::Seq(vec![]));

        expand(&mut map, "flags", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(map["flags"], Value::Seq(vec![]));
    }

    #[test]
    fn test_expand_scalar() {
        let mut map = PropertyMap::new();
        map.insert("flag".to_string(), Value::Int(2));

        expand(&mut map, "flag", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(map["flag"], Value::from("B"));
    }

    #[test]
    fn test_expand_scalar_no_match() {
        let mut map = PropertyMap::new();
        map.insert("flag".to_string(), Value::Int(99));

        expand(&mut map, "flag", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(map["flag"], Value::Null);
    }

    #[test]
    fn test_expand_absent_key_is_noop() {
        let mut map = PropertyMap::new();
        map.insert("other".to_string(), Value::Int(1));
        let before = map.clone();

        expand(&mut map, "flag", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(map, before);
    }

    #[test]
    fn test_expand_null_value_is_noop() {
        let mut map = PropertyMap::new();
        map.insert("flag".to_string(), Value::Null);

        expand(&mut map, "flag", &flags_class(), r"FLAG_(\w+)").unwrap();

        assert_eq!(map["flag"], Value::Null);
    }

    #[test]
    fn test_expand_bad_pattern_propagates() {
        let mut map = PropertyMap::new();
        map.insert("flag".to_string(), Value::Int(1));

        assert!(expand(&mut map, "flag", &flags_class(), "(").is_err());
        // map untouched on error
        assert_eq!(map["flag"], Value::Int(1));
    }

    #[test]
    fn test_expand_denied_constant_still_matches_rest() {
        let class = ClassDescriptor::builder("Flags")
            .push_constant(ConstantDescriptor::denied("FLAG_HIDDEN", ValueKind::Int))
            .constant("FLAG_A", 1)
            .build();
        let mut map = PropertyMap::new();
        map.insert("flag".to_string(), Value::Int(1));

        expand(&mut map, "flag", &class, r"FLAG_(\w+)").unwrap();

        assert_eq!(map["flag"], Value::from("A"));
    }
}
