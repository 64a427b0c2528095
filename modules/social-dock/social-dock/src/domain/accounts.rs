//! Server-side normalization of the submitted account list.
//!
//! Entries that cannot be rendered are dropped; survivors keep their
//! submission order and their `order` value untouched.

use serde_json::{Map, Value};
use social_dock_sdk::{Platform, SocialAccount};
use url::Url;
use uuid::Uuid;

use super::coerce::{as_text, is_truthy, sanitize_text, to_unsigned};
use super::schema::AccountFields;

const ALLOWED_SCHEMES: [&str; 8] = ["http", "https", "mailto", "tel", "sms", "ftp", "ftps", "xmpp"];
const HOST_REQUIRED: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Normalize a submitted account collection.
///
/// Accepts a JSON array or an index-keyed map (what a decoded form produces).
/// Anything else yields an empty list.
#[must_use]
pub fn sanitize_accounts(raw: Option<&Value>) -> Vec<SocialAccount> {
    let entries: Box<dyn Iterator<Item = &Value>> = match raw {
        Some(Value::Array(items)) => Box::new(items.iter()),
        Some(Value::Object(map)) => Box::new(map.values()),
        _ => return Vec::new(),
    };

    entries
        .filter_map(|entry| match entry {
            Value::Object(fields) => sanitize_account(fields),
            _ => None,
        })
        .collect()
}

fn sanitize_account(fields: &Map<String, Value>) -> Option<SocialAccount> {
    let platform = fields
        .get(AccountFields::PLATFORM)
        .and_then(as_text)
        .map(|p| sanitize_text(&p))
        .and_then(|p| Platform::from_key(&p))?;

    let url = fields
        .get(AccountFields::URL)
        .and_then(as_text)
        .and_then(|u| validate_url(&u))?;

    let id = fields
        .get(AccountFields::ID)
        .and_then(as_text)
        .map(|id| sanitize_text(&id))
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Some(SocialAccount {
        id,
        platform,
        url,
        enabled: is_truthy(fields.get(AccountFields::ENABLED)),
        order: fields.get(AccountFields::ORDER).map_or(0, to_unsigned),
    })
}

/// Returns the trimmed URL if it is an absolute link with an allowed scheme.
#[must_use]
pub fn validate_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return None;
    }

    let parsed = Url::parse(trimmed).ok()?;
    let scheme = parsed.scheme();
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return None;
    }
    if HOST_REQUIRED.contains(&scheme) && parsed.host_str().is_none_or(str::is_empty) {
        return None;
    }

    Some(trimmed.to_owned())
}
