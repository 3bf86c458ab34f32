//! Monitor documents exchanged with the management API.
//!
//! The management API owns the monitor schema, so these types only name the
//! fields the client needs to read or commonly sets. Everything else is kept
//! in a flattened map and round-trips untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A monitor definition sent on create and update.
///
/// The payload is an opaque JSON object; the client never validates its
/// shape; that is the server's job. The builder only offers shortcuts for
/// the well-known fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonitorPayload(Map<String, Value>);

impl MonitorPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing payloads.
    pub fn builder() -> MonitorPayloadBuilder {
        MonitorPayloadBuilder::new()
    }

    /// The monitor name, if set.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Get a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Whether the payload has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for MonitorPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<MonitorPayload> for Value {
    fn from(payload: MonitorPayload) -> Self {
        Value::Object(payload.0)
    }
}

impl TryFrom<Value> for MonitorPayload {
    type Error = Value;

    /// Fails with the original value when it is not a JSON object.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// Builder for `MonitorPayload` instances.
#[derive(Debug, Default)]
pub struct MonitorPayloadBuilder {
    fields: Map<String, Value>,
    rules: Vec<Rule>,
}

impl MonitorPayloadBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the monitor name.
    pub fn name(self, name: impl Into<String>) -> Self {
        self.field("name", name.into())
    }

    /// Set the free-form note.
    pub fn note(self, note: impl Into<String>) -> Self {
        self.field("note", note.into())
    }

    /// Set the notification channels.
    pub fn notifications(self, notifications: Notifications) -> Self {
        self.field("notifications", notifications)
    }

    /// Append an alerting rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set any other field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Build the payload.
    pub fn build(self) -> MonitorPayload {
        let mut fields = self.fields;
        if !self.rules.is_empty() {
            let rules = self.rules.into_iter().map(Value::from).collect();
            fields.insert("rules".to_string(), Value::Array(rules));
        }
        MonitorPayload(fields)
    }
}

/// Notification channels attached to a monitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notifications {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub webhooks: Vec<String>,
    /// Channels this crate has no dedicated field for (slack, pagerduty, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Notifications {
    /// Add an email recipient.
    pub fn email(mut self, address: impl Into<String>) -> Self {
        self.emails.push(address.into());
        self
    }

    /// Add an SMS recipient.
    pub fn phone(mut self, number: impl Into<String>) -> Self {
        self.phones.push(number.into());
        self
    }

    /// Add a webhook URL.
    pub fn webhook(mut self, url: impl Into<String>) -> Self {
        self.webhooks.push(url.into());
        self
    }
}

impl From<Notifications> for Value {
    fn from(notifications: Notifications) -> Self {
        let mut map = notifications.extra;
        map.insert("emails".to_string(), notifications.emails.into());
        map.insert("phones".to_string(), notifications.phones.into());
        map.insert("webhooks".to_string(), notifications.webhooks.into());
        Value::Object(map)
    }
}

/// An alerting rule, e.g. `not_run_in 1 hours`.
///
/// Time-based rules carry a `duration`; threshold rules such as
/// `run_ping_count_greater_than` carry a `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub rule_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Rule {
    /// A time-based rule.
    pub fn new(rule_type: impl Into<String>, duration: u64) -> Self {
        Self {
            rule_type: rule_type.into(),
            duration: Some(duration),
            value: None,
            time_unit: None,
            extra: Map::new(),
        }
    }

    /// A threshold rule.
    pub fn with_value(rule_type: impl Into<String>, value: u64) -> Self {
        Self {
            rule_type: rule_type.into(),
            duration: None,
            value: Some(value),
            time_unit: None,
            extra: Map::new(),
        }
    }

    pub fn time_unit(mut self, unit: impl Into<String>) -> Self {
        self.time_unit = Some(unit.into());
        self
    }
}

impl From<Rule> for Value {
    fn from(rule: Rule) -> Self {
        let mut map = rule.extra;
        map.insert("rule_type".to_string(), rule.rule_type.into());
        if let Some(duration) = rule.duration {
            map.insert("duration".to_string(), duration.into());
        }
        if let Some(value) = rule.value {
            map.insert("value".to_string(), value.into());
        }
        if let Some(unit) = rule.time_unit {
            map.insert("time_unit".to_string(), unit.into());
        }
        Value::Object(map)
    }
}

/// A monitor as returned by the management API.
///
/// Only `code` is guaranteed; every other field is kept as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    /// Unique monitor code, assigned by the server on create.
    pub code: String,

    /// All remaining fields, verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Monitor {
    /// The monitor name, if present.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Get a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// A page of monitors returned by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorList {
    /// Monitors in server order.
    #[serde(default)]
    pub monitors: Vec<Monitor>,

    /// Pagination and any other envelope fields, verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MonitorList {
    /// Number of monitors in this page.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Whether this page is empty.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Iterate over monitors in server order.
    pub fn iter(&self) -> impl Iterator<Item = &Monitor> {
        self.monitors.iter()
    }

    /// Find a monitor by code.
    pub fn get(&self, code: &str) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.code == code)
    }
}

impl IntoIterator for MonitorList {
    type Item = Monitor;
    type IntoIter = std::vec::IntoIter<Monitor>;

    fn into_iter(self) -> Self::IntoIter {
        self.monitors.into_iter()
    }
}
