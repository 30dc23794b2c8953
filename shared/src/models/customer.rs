//! Customer Model

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque customer identifier assigned by the backend.
///
/// The backend may send the id as a JSON number or a JSON string; both are
/// kept as text. Integer ids serialize back as numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer value of the id, if the text is a canonical integer
    pub fn as_i64(&self) -> Option<i64> {
        self.0
            .parse::<i64>()
            .ok()
            .filter(|n| n.to_string() == self.0)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Serialize for CustomerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_i64() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Treat `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_active() -> bool {
    true
}

/// Deserialize bool that treats null as true
fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}

/// Customer entity
///
/// `customer_id` also accepts the `id` key used by older backends. Fields
/// missing from a response, or sent as `null`, decode as empty / inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(alias = "id")]
    pub customer_id: CustomerId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub credit_card: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active: bool,
}

impl Customer {
    /// Request body carrying every field except the id
    pub fn payload(&self) -> CustomerPayload {
        CustomerPayload {
            name: self.name.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            credit_card: self.credit_card.clone(),
            active: self.active,
        }
    }
}

/// Create/update customer payload
///
/// `active` may be left out; new customers are active by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub credit_card: String,
    #[serde(default = "default_active", deserialize_with = "bool_true")]
    pub active: bool,
}

impl CustomerPayload {
    pub fn into_customer(self, customer_id: CustomerId) -> Customer {
        Customer {
            customer_id,
            name: self.name,
            address: self.address,
            phone_number: self.phone_number,
            email: self.email,
            credit_card: self.credit_card,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_id_from_number_or_string() {
        let n: CustomerId = serde_json::from_value(json!(42)).unwrap();
        let s: CustomerId = serde_json::from_value(json!("c-42")).unwrap();
        assert_eq!(n.as_str(), "42");
        assert_eq!(n.as_i64(), Some(42));
        assert_eq!(s.as_str(), "c-42");
        assert_eq!(s.as_i64(), None);
    }

    #[test]
    fn test_customer_id_serializes_integers_as_numbers() {
        assert_eq!(serde_json::to_value(CustomerId::from(7)).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(CustomerId::from("007")).unwrap(), json!("007"));
    }

    #[test]
    fn test_customer_accepts_id_alias() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 3,
            "name": "Alex",
            "address": "Washington Square Park",
            "phone_number": "555-555-1234",
            "email": "alex@jr.com",
            "credit_card": "VISA",
            "active": true
        }))
        .unwrap();
        assert_eq!(customer.customer_id, CustomerId::from(3));
        assert!(customer.active);
    }

    #[test]
    fn test_customer_missing_fields_default() {
        let customer: Customer =
            serde_json::from_value(json!({ "customer_id": "9", "name": "Zed" })).unwrap();
        assert_eq!(customer.customer_id, CustomerId::from(9));
        assert_eq!(customer.email, "");
        assert!(!customer.active);
    }

    #[test]
    fn test_customer_null_fields_default() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 1,
            "name": null,
            "address": "X",
            "phone_number": null,
            "email": "x@y.com",
            "credit_card": null,
            "active": null
        }))
        .unwrap();
        assert_eq!(customer.customer_id, CustomerId::from(1));
        assert_eq!(customer.name, "");
        assert_eq!(customer.address, "X");
        assert_eq!(customer.credit_card, "");
        assert!(!customer.active);
    }

    #[test]
    fn test_payload_active_defaults_to_true() {
        let body = json!({
            "name": "Alex",
            "address": "Washington Square Park",
            "phone_number": "555-555-1234",
            "email": "alex@jr.com",
            "credit_card": "VISA"
        });
        let payload: CustomerPayload = serde_json::from_value(body.clone()).unwrap();
        assert!(payload.active);

        let mut body = body;
        body["active"] = json!(false);
        let payload: CustomerPayload = serde_json::from_value(body).unwrap();
        assert!(!payload.active);
    }

    #[test]
    fn test_payload_requires_text_fields() {
        let result = serde_json::from_value::<CustomerPayload>(json!({ "name": "Alex" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_has_no_id() {
        let customer = CustomerPayload {
            name: "Alice".into(),
            address: "X".into(),
            phone_number: "555".into(),
            email: "a@x.com".into(),
            credit_card: "4111".into(),
            active: false,
        }
        .into_customer(CustomerId::from(1));

        let value = serde_json::to_value(customer.payload()).unwrap();
        assert!(value.get("customer_id").is_none());
        assert_eq!(value["active"], json!(false));
        assert_eq!(value["name"], json!("Alice"));
    }
}
