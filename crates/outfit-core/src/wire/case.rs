//! Key Case Transforms
//!
//! The backend names fields in snake_case, the client in camelCase. One
//! recursive key-renaming walk serves both directions.

use serde_json::{Map, Value};

/// `position_x` -> `positionX`
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '_' && next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// `zIndex` -> `z_index`
pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Rename every object key, recursing through objects and arrays.
/// Primitive values are left as they are.
pub fn rename_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (rename(&key), rename_keys(inner, rename)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(values) => {
            Value::Array(values.into_iter().map(|inner| rename_keys(inner, rename)).collect())
        }
        primitive => primitive,
    }
}

pub fn keys_to_camel_case(value: Value) -> Value {
    rename_keys(value, &to_camel_case)
}

pub fn keys_to_snake_case(value: Value) -> Value {
    rename_keys(value, &to_snake_case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_conversion() {
        assert_eq!(to_camel_case("preview_image_url"), "previewImageUrl");
        assert_eq!(to_camel_case("z_index"), "zIndex");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_snake_case("clothingItemId"), "clothing_item_id");
        assert_eq!(to_snake_case("positionX"), "position_x");
    }

    #[test]
    fn test_nested_objects_and_arrays() {
        let wire = json!({
            "created_at": "2025-01-01",
            "items": [
                { "z_index": 2, "clothing_item": { "image_url": "a.png", "colors": ["dark_blue"] } }
            ]
        });
        let camel = keys_to_camel_case(wire.clone());

        assert_eq!(camel["createdAt"], "2025-01-01");
        assert_eq!(camel["items"][0]["zIndex"], 2);
        assert_eq!(camel["items"][0]["clothingItem"]["imageUrl"], "a.png");
        // values are never renamed
        assert_eq!(camel["items"][0]["clothingItem"]["colors"][0], "dark_blue");

        assert_eq!(keys_to_snake_case(camel), wire);
    }

    #[test]
    fn test_primitives_untouched() {
        assert_eq!(keys_to_camel_case(json!("some_value")), json!("some_value"));
        assert_eq!(keys_to_snake_case(json!([1, null, true])), json!([1, null, true]));
    }
}
