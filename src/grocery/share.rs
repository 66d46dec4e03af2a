//! # Share Codec
//!
//! Turns the list into something that can leave the machine, and back.
//!
//! A share link carries the ordered item texts (never the completion flags) as
//! a JSON array in the `list` query parameter:
//!
//! ```text
//! https://grocery-goblin.app/?list=%5B%22milk%22%2C%22eggs%22%5D
//! ```
//!
//! The value is encoded with the same character set as `encodeURIComponent`,
//! so links produced here and links produced by a browser are interchangeable.

use crate::error::{GroceryError, Result};
use crate::model::Item;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

pub const LIST_PARAM: &str = "list";

pub const PLAIN_TEXT_HEADER: &str = "Grocery Goblin Shopping List:";
pub const PLAIN_TEXT_FOOTER: &str = "Shared via Grocery Goblin!";

const PREVIEW_LEN: usize = 3;

/// Everything `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Decodes a query-string component: `+` is a space, `%XX` escapes are expanded.
/// Escapes that do not form valid UTF-8 are an error.
pub fn decode_component(value: &str) -> Result<String> {
    percent_decode_str(&value.replace('+', " "))
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| GroceryError::InvalidShareLink(e.to_string()))
}

fn key_is(key: &str, name: &str) -> bool {
    decode_component(key).is_ok_and(|key| key == name)
}

/// The address with any query string removed.
pub fn base_url(address: &str) -> &str {
    address.split('?').next().unwrap_or(address)
}

/// Builds a link that imports `texts`, in order, when opened.
pub fn share_link<T: AsRef<str>>(address: &str, texts: &[T]) -> Result<String> {
    let texts: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
    let json = serde_json::to_string(&texts).map_err(GroceryError::Serialization)?;
    Ok(format!(
        "{}?{}={}",
        base_url(address),
        LIST_PARAM,
        encode_component(&json)
    ))
}

/// Renders the list as a checklist suitable for a message body.
pub fn plain_text(items: &[Item]) -> String {
    let mut text = format!("{}\n{}\n", PLAIN_TEXT_HEADER, "=".repeat(27));
    for item in items {
        let status = if item.completed { "[x]" } else { "[ ]" };
        text.push_str(&format!("{} {}\n", status, item.text));
    }
    text.push('\n');
    text.push_str(PLAIN_TEXT_FOOTER);
    text
}

/// An `sms:` compose link with `body` prefilled.
pub fn sms_link(body: &str) -> String {
    format!("sms:?body={}", encode_component(body))
}

fn query(address: &str) -> Option<&str> {
    let (_, rest) = address.split_once('?')?;
    Some(rest.split('#').next().unwrap_or(rest))
}

/// The decoded value of the first `name` parameter in the address's query string.
pub fn query_param(address: &str, name: &str) -> Result<Option<String>> {
    let Some(query) = query(address) else {
        return Ok(None);
    };
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| key_is(key, name))
        .map(|(_, value)| decode_component(value))
        .transpose()
}

/// Removes every `name` parameter from the address, keeping the rest of it intact.
pub fn strip_param(address: &str, name: &str) -> String {
    let (before_fragment, fragment) = match address.split_once('#') {
        Some((head, frag)) => (head, Some(frag)),
        None => (address, None),
    };
    let Some((base, query)) = before_fragment.split_once('?') else {
        return address.to_string();
    };

    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            !key_is(key, name)
        })
        .collect();

    let mut cleaned = base.to_string();
    if !kept.is_empty() {
        cleaned.push('?');
        cleaned.push_str(&kept.join("&"));
    }
    if let Some(fragment) = fragment {
        cleaned.push('#');
        cleaned.push_str(fragment);
    }
    cleaned
}

/// A list received through a share link, before it is merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedList {
    entries: Vec<Value>,
}

impl SharedList {
    /// Parses the decoded `list` parameter. Anything but a JSON array is rejected.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| GroceryError::InvalidShareLink(e.to_string()))?;
        match value {
            Value::Array(entries) => Ok(Self { entries }),
            other => Err(GroceryError::InvalidShareLink(format!(
                "expected an array, got {}",
                kind_of(&other)
            ))),
        }
    }

    /// Reads and parses the `list` parameter of `address`. `Ok(None)` when the
    /// parameter is absent or empty.
    pub fn from_address(address: &str) -> Result<Option<Self>> {
        match query_param(address, LIST_PARAM)? {
            Some(raw) if !raw.is_empty() => Self::parse(&raw).map(Some),
            _ => Ok(None),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The confirmation prompt shown before importing.
    pub fn preview(&self) -> String {
        let shown: Vec<String> = self
            .entries
            .iter()
            .take(PREVIEW_LEN)
            .map(display_entry)
            .collect();
        let more = if self.entries.len() > PREVIEW_LEN {
            "..."
        } else {
            ""
        };
        format!(
            "A goblin sent you {} item(s)!\n\nItems: {}{}\n\nAdd to your list?",
            self.entries.len(),
            shown.join(", "),
            more
        )
    }

    /// Trimmed string entries that are not blank. Other entries are dropped.
    pub fn importable_texts(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn display_entry(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
