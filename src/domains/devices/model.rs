//! Device records as reported by the Tailscale API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single node in the tailnet.
///
/// Timestamps are kept as the API's strings and never parsed. Missing or
/// `null` fields fall back to their defaults so a sparse record does not fail
/// the listing. Keys without a typed field are kept in `extra` and written
/// back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Device {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub node_id: String,
    /// Fully-qualified MagicDNS name, e.g. `host.tail1234.ts.net`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub addresses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(deserialize_with = "null_as_default")]
    pub os: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub update_available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_seen: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expires: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key_expiry_disabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub authorized: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub connected_to_control: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub blocks_incoming_connections: bool,
    /// Upstream keys with no typed field (`tags`, `isExternal`, `machineKey`...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /tailnet/{tailnet}/devices`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevicesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: Vec<Device>,
}

impl Device {
    /// Look up a field by its wire name, falling back to untyped upstream
    /// keys. Returns `None` for names the device does not carry.
    pub fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => Value::from(self.id.as_str()),
            "nodeId" => Value::from(self.node_id.as_str()),
            "name" => Value::from(self.name.as_str()),
            "hostname" => Value::from(self.hostname.as_str()),
            "addresses" => Value::from(self.addresses.clone()),
            "user" => Value::from(self.user.as_str()),
            "os" => Value::from(self.os.as_str()),
            "clientVersion" => Value::from(self.client_version.as_str()),
            "updateAvailable" => Value::from(self.update_available),
            "created" => Value::from(self.created.as_str()),
            "lastSeen" => Value::from(self.last_seen.as_str()),
            "expires" => Value::from(self.expires.as_str()),
            "keyExpiryDisabled" => Value::from(self.key_expiry_disabled),
            "authorized" => Value::from(self.authorized),
            "connectedToControl" => Value::from(self.connected_to_control),
            "blocksIncomingConnections" => Value::from(self.blocks_incoming_connections),
            _ => return self.extra.get(name).cloned(),
        };
        Some(value)
    }

    /// Whether the device currently has a session with the control plane.
    pub fn is_online(&self) -> bool {
        self.connected_to_control
    }

    /// Whether `key` names this device by id, MagicDNS name or hostname.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.name == key || self.hostname == key
    }
}
