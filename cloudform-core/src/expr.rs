//! Expr - Untyped template values
//!
//! Used wherever CloudFormation accepts arbitrary JSON: `Json`-typed
//! properties, resource metadata, conditions, outputs, and intrinsic
//! arguments.

use indexmap::IndexMap;
use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::Schema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use crate::error::Result;
use crate::intrinsic::Intrinsic;

/// An arbitrary template value that may contain intrinsic calls
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Expr>),
    /// Keys keep their source order
    Map(IndexMap<String, Expr>),
    Intrinsic(Box<Intrinsic>),
}

impl Expr {
    /// Decode a JSON value, recognising intrinsic calls at any depth
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let expr = match value {
            JsonValue::Null => Expr::Null,
            JsonValue::Bool(b) => Expr::Bool(*b),
            JsonValue::Number(n) => Expr::Number(n.clone()),
            JsonValue::String(s) => Expr::String(s.clone()),
            JsonValue::Array(items) => {
                Expr::List(items.iter().map(Expr::from_json).collect::<Result<_>>()?)
            }
            JsonValue::Object(object) => match Intrinsic::detect(object) {
                Some((name, args)) => Expr::Intrinsic(Box::new(Intrinsic::from_json(name, args)?)),
                None => Expr::Map(
                    object
                        .iter()
                        .map(|(k, v)| Ok((k.clone(), Expr::from_json(v)?)))
                        .collect::<Result<_>>()?,
                ),
            },
        };
        Ok(expr)
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Expr::Null => JsonValue::Null,
            Expr::Bool(b) => JsonValue::Bool(*b),
            Expr::Number(n) => JsonValue::Number(n.clone()),
            Expr::String(s) => JsonValue::String(s.clone()),
            Expr::List(items) => JsonValue::Array(items.iter().map(Expr::to_json).collect()),
            Expr::Map(map) => {
                JsonValue::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
            }
            Expr::Intrinsic(intrinsic) => intrinsic.to_json(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Expr::Intrinsic(intrinsic) => Some(intrinsic),
            _ => None,
        }
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::String(s.to_string())
    }
}

impl From<String> for Expr {
    fn from(s: String) -> Self {
        Expr::String(s)
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Bool(b)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Number(n.into())
    }
}

impl From<Intrinsic> for Expr {
    fn from(intrinsic: Intrinsic) -> Self {
        Expr::Intrinsic(Box::new(intrinsic))
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Expr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Expr::from_json(&value).map_err(D::Error::custom)
    }
}

impl JsonSchema for Expr {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        "Expr".to_string()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        Schema::Bool(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_intrinsics_are_recognised() {
        let expr: Expr = serde_json::from_value(json!({
            "Bucket": {"Ref": "LogBucket"},
            "Keys": ["a", {"Fn::Sub": "${AWS::StackName}-b"}]
        }))
        .unwrap();

        let Expr::Map(map) = &expr else {
            panic!("expected a map, got {:?}", expr);
        };
        assert_eq!(
            map.get("Bucket").and_then(Expr::as_intrinsic),
            Some(&Intrinsic::reference("LogBucket"))
        );
        let Some(Expr::List(keys)) = map.get("Keys") else {
            panic!("expected a list");
        };
        assert_eq!(keys[0].as_str(), Some("a"));
        assert!(keys[1].as_intrinsic().is_some());
    }

    #[test]
    fn test_multi_key_object_stays_a_map() {
        let expr = Expr::from_json(&json!({"Ref": "A", "Extra": true})).unwrap();
        assert!(matches!(expr, Expr::Map(ref m) if m.len() == 2));
    }

    #[test]
    fn test_malformed_intrinsic_is_an_error() {
        assert!(Expr::from_json(&json!({"Fn::Join": "oops"})).is_err());
    }

    #[test]
    fn test_map_keeps_source_key_order() {
        let source = r#"{"Zeta": 1, "Alpha": {"Ref": "A"}, "Mid": [true]}"#;
        let expr: Expr = serde_json::from_str(source).unwrap();
        let Expr::Map(map) = &expr else {
            panic!("expected a map, got {:?}", expr);
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(
            serde_json::to_string(&expr).unwrap(),
            r#"{"Zeta":1,"Alpha":{"Ref":"A"},"Mid":[true]}"#
        );
    }

    #[test]
    fn test_serializes_back_to_long_form() {
        let source = json!({"Value": {"Fn::GetAtt": ["Queue", "Arn"]}, "Count": 3, "On": null});
        let expr = Expr::from_json(&source).unwrap();
        assert_eq!(serde_json::to_value(&expr).unwrap(), source);
    }
}
