//! Item and attribute value types
//!
//! Items travel over HTTP in DynamoDB's attribute-value JSON form, e.g.
//! `{"id": {"S": "42"}, "tags": {"SS": ["a", "b"]}}`. Binary values are
//! standard base64 strings; numbers stay strings.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::{primitives::Blob, types::AttributeValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;

/// Partition key attribute every item must carry
pub const PARTITION_KEY: &str = "id";

/// A single attribute value, tagged by its DynamoDB type descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    S(String),
    N(String),
    B(#[serde(with = "base64_bytes")] Vec<u8>),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
    L(Vec<AttrValue>),
    M(BTreeMap<String, AttrValue>),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    #[serde(rename = "BS")]
    Bs(#[serde(with = "base64_bytes_list")] Vec<Vec<u8>>),
}

/// The backend returned a value type this server does not know
#[derive(Error, Debug)]
#[error("Unsupported attribute value: {0}")]
pub struct UnsupportedAttribute(pub String);

impl From<AttrValue> for AttributeValue {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::S(s) => AttributeValue::S(s),
            AttrValue::N(n) => AttributeValue::N(n),
            AttrValue::B(bytes) => AttributeValue::B(Blob::new(bytes)),
            AttrValue::Bool(b) => AttributeValue::Bool(b),
            AttrValue::Null(b) => AttributeValue::Null(b),
            AttrValue::L(list) => AttributeValue::L(list.into_iter().map(Into::into).collect()),
            AttrValue::M(map) => {
                AttributeValue::M(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            AttrValue::Ss(values) => AttributeValue::Ss(values),
            AttrValue::Ns(values) => AttributeValue::Ns(values),
            AttrValue::Bs(values) => AttributeValue::Bs(values.into_iter().map(Blob::new).collect()),
        }
    }
}

impl TryFrom<AttributeValue> for AttrValue {
    type Error = UnsupportedAttribute;

    fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
        Ok(match value {
            AttributeValue::S(s) => AttrValue::S(s),
            AttributeValue::N(n) => AttrValue::N(n),
            AttributeValue::B(blob) => AttrValue::B(blob.into_inner()),
            AttributeValue::Bool(b) => AttrValue::Bool(b),
            AttributeValue::Null(b) => AttrValue::Null(b),
            AttributeValue::L(list) => AttrValue::L(
                list.into_iter()
                    .map(AttrValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            AttributeValue::M(map) => AttrValue::M(
                map.into_iter()
                    .map(|(k, v)| AttrValue::try_from(v).map(|v| (k, v)))
                    .collect::<Result<_, _>>()?,
            ),
            AttributeValue::Ss(values) => AttrValue::Ss(values),
            AttributeValue::Ns(values) => AttrValue::Ns(values),
            AttributeValue::Bs(values) => {
                AttrValue::Bs(values.into_iter().map(Blob::into_inner).collect())
            }
            other => return Err(UnsupportedAttribute(format!("{:?}", other))),
        })
    }
}

/// A record in the key-value table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(BTreeMap<String, AttrValue>);

impl Item {
    /// Parse a request body into an item, requiring the partition key
    pub fn from_json_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let item: Item = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedItem(e.to_string()))?;

        if item.id().is_none() {
            return Err(ValidationError::MissingId);
        }
        Ok(item)
    }

    /// Build an item from a backend attribute map
    pub fn from_attributes(
        attributes: HashMap<String, AttributeValue>,
    ) -> Result<Self, UnsupportedAttribute> {
        attributes
            .into_iter()
            .map(|(k, v)| AttrValue::try_from(v).map(|v| (k, v)))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Item)
    }

    /// Convert into the backend attribute map
    pub fn into_attributes(self) -> HashMap<String, AttributeValue> {
        self.0.into_iter().map(|(k, v)| (k, v.into())).collect()
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// The partition key value
    pub fn id(&self) -> Option<&AttrValue> {
        self.get(PARTITION_KEY)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, AttrValue)> for Item {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Item(iter.into_iter().collect())
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

mod base64_bytes_list {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for bytes in values {
            seq.serialize_element(&STANDARD.encode(bytes))?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<u8>>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .into_iter()
            .map(|encoded| STANDARD.decode(encoded).map_err(serde::de::Error::custom))
            .collect()
    }
}
