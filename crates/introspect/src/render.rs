//! Debug rendering
//!
//! Renders a [`Value`] into a bracketed, separator-delimited string for
//! human inspection. This is display output only, not a deserializable
//! format.

use crate::value::Value;

/// Delimiters for [`render_with`].
///
/// Defaults reproduce the classic debug form: `", "` between elements,
/// `[` / `]` around containers, `:` between map keys and values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Separator between elements and entries
    pub separator: String,
    /// Opening bracket
    pub open: String,
    /// Closing bracket
    pub close: String,
    /// Separator between a map key and its value
    pub key_val_sep: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            open: "[".to_string(),
            close: "]".to_string(),
            key_val_sep: ":".to_string(),
        }
    }
}

/// Render a value with the default delimiters.
pub fn render(value: &Value) -> String {
    render_with(value, &RenderOptions::default())
}

/// Render a value with explicit delimiters.
///
/// - `Null` renders as the literal `null`.
/// - Sequences render each element recursively, joined by the separator
///   and wrapped in brackets; an empty sequence is just the brackets.
/// - Maps render each entry as `key:value` with the same joining.
/// - An opaque value renders its own display form, or an empty string
///   when its display form is inherited from the base type.
/// - Scalars render their default display form.
///
/// Nested containers always render with the default delimiters; the
/// overrides apply to the outermost value only.
pub fn render_with(value: &Value, options: &RenderOptions) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(s) => s.clone(),
        Value::Seq(items) => {
            let body = items
                .iter()
                .map(render)
                .collect::<Vec<_>>()
                .join(&options.separator);
            format!("{}{}{}", options.open, body, options.close)
        }
        Value::Map(entries) => {
            let body = entries
                .iter()
                .map(|(key, val)| format!("{}{}{}", render(key), options.key_val_sep, render(val)))
                .collect::<Vec<_>>()
                .join(&options.separator);
            format!("{}{}{}", options.open, body, options.close)
        }
        Value::Opaque(o) => o.display.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::OpaqueValue;

    #[test]
    fn test_render_null() {
        assert_eq!(render(&Value::Null), "null");
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&Value::Bool(true)), "true");
        assert_eq!(render(&Value::Int(42)), "42");
        assert_eq!(render(&Value::Float(2.5)), "2.5");
        assert_eq!(render(&Value::from("hello")), "hello");
    }

    #[test]
    fn test_render_empty_seq() {
        assert_eq!(render(&Value::Seq(vec![])), "[]");
    }

    #[test]
    fn test_render_seq() {
        let seq = Value::Seq(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(render(&seq), "[1, 2, 3]");
    }

    #[test]
    fn test_render_map() {
        let map = Value::Map(vec![(Value::from("k"), Value::from("v"))]);
        assert_eq!(render(&map), "[k:v]");

        assert_eq!(render(&Value::Map(vec![])), "[]");
    }

    #[test]
    fn test_render_nested_uses_default_delimiters() {
        let nested = Value::Seq(vec![
            Value::Seq(vec![Value::Int(1), Value::Int(2)]),
            Value::Int(3),
        ]);
        let options = RenderOptions {
            separator: "; ".to_string(),
            open: "{".to_string(),
            close: "}".to_string(),
            key_val_sep: "=".to_string(),
        };
        assert_eq!(render_with(&nested, &options), "{[1, 2]; 3}");
    }

    #[test]
    fn test_render_custom_map_delimiters() {
        let map = Value::Map(vec![
            (Value::from("a"), Value::Int(1)),
            (Value::from("b"), Value::Int(2)),
        ]);
        let options = RenderOptions {
            key_val_sep: "=".to_string(),
            ..RenderOptions::default()
        };
        assert_eq!(render_with(&map, &options), "[a=1, b=2]");
    }

    #[test]
    fn test_render_opaque() {
        let named = Value::Opaque(OpaqueValue::new("Point", "Point(1, 2)"));
        assert_eq!(render(&named), "Point(1, 2)");

        // no display form of its own: renders empty
        let bare = Value::Opaque(OpaqueValue::undisplayable("Widget"));
        assert_eq!(render(&bare), "");
    }

    #[test]
    fn test_display_delegates_to_render() {
        let seq = Value::Seq(vec![Value::Int(1), Value::Null]);
        assert_eq!(seq.to_string(), "[1, null]");
    }
}
