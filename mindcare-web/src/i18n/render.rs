use crate::i18n::bundle::I18nBundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        // Objects may carry a `_` default next to nested keys.
        Value::Object(map) => map.get("_").and_then(Value::as_str)?.to_string(),
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{{{k}}}}}"), v);
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

pub(super) fn resolve(
    bundle: &I18nBundle,
    key: &str,
    args: Option<&BTreeMap<&str, &str>>,
) -> Option<String> {
    get_nested_value(&bundle.translations, key)
        .and_then(|v| render_value(v, args))
        .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Ana");
        assert_eq!(render_value(&value, Some(&args)).unwrap(), "Hello, Ana! Ana!");
    }

    #[test]
    fn objects_render_their_default_entry() {
        let value = json!({"_": "Services", "detail": "More"});
        assert_eq!(render_value(&value, None).unwrap(), "Services");
        assert!(render_value(&json!({"detail": "More"}), None).is_none());
        assert!(render_value(&json!(3), None).is_none());
    }

    #[test]
    fn nested_lookup_walks_dotted_keys() {
        let doc = json!({"a": {"b": {"c": "deep"}}});
        assert_eq!(get_nested_value(&doc, "a.b.c"), Some(&json!("deep")));
        assert!(get_nested_value(&doc, "a.x.c").is_none());
    }
}
