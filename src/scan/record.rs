// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Projection of a parsed descriptor into a [`ModRecord`].
//!
//! ```text
//! descriptor key    record key        missing
//! id            --> name              "unknown_modid"
//! name          --> display_name      "N/A"
//! display_name  --> display_name_     "N/A"
//! display_name_ --> display_name__    "N/A"
//! <other>       --> <other>           "N/A"
//! ```
//!
//! Fields spelled `display_name` plus any number of trailing underscores take
//! one more underscore, so every requested field gets a distinct record key.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Record key that always carries the mod id.
pub const NAME_KEY: &str = "name";

/// Record key for the descriptor's own `name`, which cannot use [`NAME_KEY`].
pub const DISPLAY_NAME_KEY: &str = "display_name";

/// Descriptor key holding the mod id.
pub const ID_FIELD: &str = "id";

/// Value of [`NAME_KEY`] when the descriptor has no id.
pub const UNKNOWN_MOD_ID: &str = "unknown_modid";

/// Value of a requested field the descriptor does not define.
pub const MISSING_VALUE: &str = "N/A";

/// One inventoried mod: an ordered mapping from record key to descriptor value.
///
/// `name` always comes first. Values are carried through from JSON as-is, so a
/// field may hold a number, an array or `null` as well as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModRecord(IndexMap<String, Value>);

impl ModRecord {
    /// Projects `fields` out of a parsed descriptor.
    ///
    /// A descriptor whose top level is not an object is treated as an object
    /// with no keys.
    #[must_use]
    pub fn project<S: AsRef<str>>(descriptor: &Value, fields: &[S]) -> Self {
        let object = descriptor.as_object();
        let lookup = |key: &str| object.and_then(|o| o.get(key)).cloned();

        let mut entries = IndexMap::with_capacity(fields.len() + 1);
        entries.insert(
            NAME_KEY.to_string(),
            lookup(ID_FIELD).unwrap_or_else(|| Value::from(UNKNOWN_MOD_ID)),
        );

        for field in fields.iter().map(AsRef::as_ref) {
            if field == ID_FIELD {
                continue;
            }
            let value = lookup(field).unwrap_or_else(|| Value::from(MISSING_VALUE));
            entries.insert(record_key(field).into_owned(), value);
        }

        Self(entries)
    }

    /// The mod id, as carried in the `name` key.
    #[must_use]
    pub fn name(&self) -> &Value {
        // `project` always inserts NAME_KEY first
        &self.0[0]
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterates over `(key, value)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Maps a requested descriptor field to the record key it is stored under.
///
/// The mapping is one-to-one: two different fields never share a key.
#[must_use]
pub fn record_key(field: &str) -> Cow<'_, str> {
    match field {
        ID_FIELD => Cow::Borrowed(NAME_KEY),
        NAME_KEY => Cow::Borrowed(DISPLAY_NAME_KEY),
        other if is_display_name_alias(other) => Cow::Owned(format!("{other}_")),
        other => Cow::Borrowed(other),
    }
}

/// `display_name`, `display_name_`, `display_name__`, ...
fn is_display_name_alias(field: &str) -> bool {
    field
        .strip_prefix(DISPLAY_NAME_KEY)
        .is_some_and(|rest| rest.bytes().all(|b| b == b'_'))
}
