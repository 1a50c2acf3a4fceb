//! User-visible strings.
//!
//! Strings live in `i18n/en.json`, addressed by dotted keys. Unknown keys render
//! as the key itself so a missing string is visible rather than blank.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;
use storefront_core::{Currency, Money};

static BUNDLE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../i18n/en.json")).unwrap_or_else(|e| {
        log::error!("Failed to parse string bundle: {e}");
        Value::Object(serde_json::Map::new())
    })
});

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok())
                .map(plural_category);
            category
                .and_then(|c| map.get(c))
                .or_else(|| map.get("other"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Look up a string without substitution.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Look up a string and replace `{name}` placeholders from `args`.
///
/// An entry with `one`/`other` forms is chosen by the `count` argument.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    get_nested_value(&BUNDLE, key)
        .and_then(|v| render_value(v, args))
        .unwrap_or_else(|| key.to_string())
}

/// Shorthand for a single-placeholder lookup.
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut vars = BTreeMap::new();
    vars.insert(name, value);
    tr(key, Some(&vars))
}

/// Render an amount with the currency's symbol, e.g. `$25.00`.
#[must_use]
pub fn fmt_money(currency: &Currency, amount: Money) -> String {
    format!("{}{amount}", currency.symbol)
}
