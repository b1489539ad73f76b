//! Deep merge of configuration tiers.
//!
//! Later tiers override earlier ones key by key. Arrays are replaced
//! whole, never concatenated.

use serde_json::Value;

/// Merge `overlay` onto `base`.
///
/// - Objects merge recursively.
/// - A `null` overlay keeps the base value ("not specified").
/// - Anything else in the overlay replaces the base value.
///
/// # Example
/// ```
/// use serde_json::json;
/// use taskloom::config::deep_merge;
///
/// let base = json!({ "shell": { "banner": true, "prompt": "" } });
/// let overlay = json!({ "shell": { "prompt": "> " } });
/// assert_eq!(
///     deep_merge(base, overlay),
///     json!({ "shell": { "banner": true, "prompt": "> " } })
/// );
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut merged), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                let next = match merged.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                merged.insert(key, next);
            }
            Value::Object(merged)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Fold [`deep_merge`] over tiers, lowest priority first.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_keys_override_individually() {
        let base = json!({
            "storage": {"db_path": "a.db", "create_parent_dirs": true},
            "shell": {"banner": true}
        });
        let overlay = json!({"storage": {"db_path": "b.db"}});
        assert_eq!(
            deep_merge(base, overlay),
            json!({
                "storage": {"db_path": "b.db", "create_parent_dirs": true},
                "shell": {"banner": true}
            })
        );
    }

    #[test]
    fn null_keeps_lower_tier() {
        let base = json!({"storage": {"db_path": "a.db"}});
        let overlay = json!({"storage": {"db_path": null}});
        assert_eq!(
            deep_merge(base, overlay),
            json!({"storage": {"db_path": "a.db"}})
        );
    }

    #[test]
    fn arrays_replaced() {
        let merged = deep_merge(json!({"xs": [1, 2, 3]}), json!({"xs": [4]}));
        assert_eq!(merged, json!({"xs": [4]}));
    }

    #[test]
    fn scalar_replaced_by_object() {
        let merged = deep_merge(json!({"shell": false}), json!({"shell": {"banner": false}}));
        assert_eq!(merged, json!({"shell": {"banner": false}}));
    }

    #[test]
    fn merge_all_applies_in_order() {
        let merged = deep_merge_all(vec![
            json!({"shell": {"prompt": ""}}),
            json!({"shell": {"prompt": "> "}}),
            json!({"shell": {"banner": false}}),
        ]);
        assert_eq!(merged, json!({"shell": {"prompt": "> ", "banner": false}}));
    }

    #[test]
    fn merge_all_of_nothing_is_null() {
        assert_eq!(deep_merge_all(Vec::new()), Value::Null);
    }
}
