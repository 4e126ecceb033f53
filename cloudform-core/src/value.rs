//! Value - A literal or an intrinsic function call
//!
//! CloudFormation accepts an intrinsic wherever a literal is expected, so the
//! catalog wraps every typed position in [`Value`]: scalars, whole lists,
//! maps, and nested property bags.

use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::{Schema, SchemaObject, SubschemaValidation};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::intrinsic::Intrinsic;

/// A property value: either a literal `T` or any intrinsic function call
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Literal(T),
    Intrinsic(Intrinsic),
}

impl<T> Value<T> {
    pub fn literal(&self) -> Option<&T> {
        match self {
            Value::Literal(v) => Some(v),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Literal(_) => None,
            Value::Intrinsic(i) => Some(i),
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }
}

impl<T> From<Intrinsic> for Value<T> {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(intrinsic)
    }
}

impl From<&str> for Value<String> {
    fn from(s: &str) -> Self {
        Value::Literal(s.to_string())
    }
}

impl From<String> for Value<String> {
    fn from(s: String) -> Self {
        Value::Literal(s)
    }
}

impl From<bool> for Value<bool> {
    fn from(b: bool) -> Self {
        Value::Literal(b)
    }
}

impl From<i64> for Value<i64> {
    fn from(n: i64) -> Self {
        Value::Literal(n)
    }
}

impl From<f64> for Value<f64> {
    fn from(n: f64) -> Self {
        Value::Literal(n)
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(v) => v.serialize(serializer),
            Value::Intrinsic(i) => i.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        if let JsonValue::Object(object) = &value
            && let Some((name, args)) = Intrinsic::detect(object)
        {
            return Intrinsic::from_json(name, args)
                .map(Value::Intrinsic)
                .map_err(D::Error::custom);
        }
        T::deserialize(value)
            .map(Value::Literal)
            .map_err(D::Error::custom)
    }
}

impl<T: JsonSchema> JsonSchema for Value<T> {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        format!("Value_for_{}", T::schema_name())
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            subschemas: Some(Box::new(SubschemaValidation {
                any_of: Some(vec![
                    generator.subschema_for::<T>(),
                    generator.subschema_for::<Intrinsic>(),
                ]),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_literal_string() {
        let v: Value<String> = serde_json::from_value(json!("my-bucket")).unwrap();
        assert_eq!(v, Value::from("my-bucket"));
        assert_eq!(v.literal().map(String::as_str), Some("my-bucket"));
    }

    #[test]
    fn test_intrinsic_in_place_of_integer() {
        let v: Value<i64> = serde_json::from_value(json!({"Ref": "Timeout"})).unwrap();
        assert_eq!(v.intrinsic(), Some(&Intrinsic::reference("Timeout")));
        assert!(v.is_intrinsic());
    }

    #[test]
    fn test_wrong_literal_type_is_rejected() {
        let err = serde_json::from_value::<Value<i64>>(json!("30")).unwrap_err();
        assert!(err.to_string().contains("invalid type"));
        assert!(serde_json::from_value::<Value<bool>>(json!(1)).is_err());
    }

    #[test]
    fn test_float_accepts_integer_literal() {
        let v: Value<f64> = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(v, Value::Literal(5.0));
    }

    #[test]
    fn test_malformed_intrinsic_is_not_treated_as_literal() {
        let err = serde_json::from_value::<Value<String>>(json!({"Fn::Select": "x"})).unwrap_err();
        assert!(err.to_string().contains("Fn::Select"));
    }

    #[test]
    fn test_intrinsic_in_place_of_list() {
        let v: Value<Vec<Value<String>>> =
            serde_json::from_value(json!({"Ref": "SubnetIds"})).unwrap();
        assert_eq!(v, Value::Intrinsic(Intrinsic::reference("SubnetIds")));

        let v: Value<Vec<Value<String>>> =
            serde_json::from_value(json!(["subnet-1", {"Ref": "Subnet2"}])).unwrap();
        let items = v.literal().unwrap();
        assert_eq!(items[0], Value::from("subnet-1"));
        assert!(items[1].is_intrinsic());
    }

    #[test]
    fn test_intrinsic_in_place_of_map() {
        let source = json!({"Fn::If": ["IsProd", {"Size": "large"}, {"Ref": "AWS::NoValue"}]});
        let v: Value<BTreeMap<String, Value<String>>> =
            serde_json::from_value(source.clone()).unwrap();
        assert!(matches!(v.intrinsic(), Some(Intrinsic::If { .. })));
        assert_eq!(serde_json::to_value(&v).unwrap(), source);

        let v: Value<BTreeMap<String, Value<String>>> =
            serde_json::from_value(json!({"Size": "large"})).unwrap();
        assert_eq!(v.literal().unwrap()["Size"], Value::from("large"));
    }

    #[test]
    fn test_serialize_preserves_shape() {
        let literal: Value<bool> = true.into();
        assert_eq!(serde_json::to_value(&literal).unwrap(), json!(true));

        let call: Value<String> = Intrinsic::get_att("Rule", "Arn").into();
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({"Fn::GetAtt": ["Rule", "Arn"]})
        );
    }
}
