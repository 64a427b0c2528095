//! `application/x-www-form-urlencoded` bodies to the nested structure the
//! sanitizer expects.
//!
//! `ns[social_accounts][0][url]=…` becomes
//! `{"social_accounts": {"0": {"url": "…"}}}`. Pairs outside the namespace
//! are ignored, repeated keys keep the last value, and `[]` appends.

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
#[error("Malformed form body: {0}")]
pub struct FormError(#[from] serde_urlencoded::de::Error);

/// Decode a form body, keeping only the fields nested under `namespace`.
///
/// # Errors
/// Returns [`FormError`] if the body is not valid URL-encoded data.
pub fn decode_form(body: &[u8], namespace: &str) -> Result<Value, FormError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;

    let mut root = Map::new();
    for (name, value) in pairs {
        let Some(path) = parse_name(&name) else {
            continue;
        };
        let Some((first, rest)) = path.split_first() else {
            continue;
        };
        if first.as_deref() != Some(namespace) || rest.is_empty() {
            continue;
        }
        insert(&mut root, rest, value);
    }
    Ok(Value::Object(root))
}

/// `a[b][]` → `[Some("a"), Some("b"), None]`. `None` is an append segment.
fn parse_name(name: &str) -> Option<Vec<Option<String>>> {
    let (base, mut tail) = match name.find('[') {
        Some(open) => name.split_at(open),
        None => (name, ""),
    };
    if base.is_empty() {
        return None;
    }

    let mut path = vec![Some(base.to_owned())];
    while let Some(inner) = tail.strip_prefix('[') {
        let close = inner.find(']')?;
        let segment = &inner[..close];
        path.push((!segment.is_empty()).then(|| segment.to_owned()));
        tail = &inner[close + 1..];
    }
    tail.is_empty().then_some(path)
}

fn insert(node: &mut Map<String, Value>, path: &[Option<String>], value: String) {
    let Some((segment, rest)) = path.split_first() else {
        return;
    };
    let key = segment.clone().unwrap_or_else(|| node.len().to_string());

    if rest.is_empty() {
        node.insert(key, Value::String(value));
        return;
    }

    let child = node
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    if !child.is_object() {
        *child = Value::Object(Map::new());
    }
    if let Value::Object(map) = child {
        insert(map, rest, value);
    }
}
