//! YAML templates
//!
//! Converts YAML to the JSON data model, expanding the short-form intrinsic
//! tags (`!Ref`, `!GetAtt`, `!Sub`, ...) into their long form.

use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml_ng::Value as YamlValue;

use crate::error::{Error, Result};
use crate::intrinsic::INTRINSIC_KEYS;

/// Parse YAML source into long-form JSON
pub fn to_json(source: &str) -> Result<JsonValue> {
    let value: YamlValue = serde_yaml_ng::from_str(source)?;
    convert(&value)
}

/// Long-form key for a short-form tag name (e.g., "GetAtt" -> "Fn::GetAtt")
pub fn intrinsic_key(tag: &str) -> Option<&'static str> {
    let wanted = match tag {
        "Ref" | "Condition" => tag.to_string(),
        other => format!("Fn::{}", other),
    };
    INTRINSIC_KEYS.iter().copied().find(|k| *k == wanted)
}

fn convert(value: &YamlValue) -> Result<JsonValue> {
    let json = match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => JsonValue::Number(convert_number(n)?),
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(items) => {
            JsonValue::Array(items.iter().map(convert).collect::<Result<_>>()?)
        }
        YamlValue::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                let key = match key {
                    YamlValue::String(s) => s.clone(),
                    YamlValue::Number(n) => n.to_string(),
                    YamlValue::Bool(b) => b.to_string(),
                    other => {
                        return Err(Error::InvalidYaml(format!(
                            "unsupported mapping key {:?}",
                            other
                        )));
                    }
                };
                object.insert(key, convert(value)?);
            }
            JsonValue::Object(object)
        }
        YamlValue::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            let name = tag.trim_start_matches('!');
            let key = intrinsic_key(name).ok_or_else(|| Error::UnknownTag(name.to_string()))?;
            let args = match (key, &tagged.value) {
                ("Fn::GetAtt", YamlValue::String(path)) => match path.split_once('.') {
                    Some((logical_id, attribute)) => JsonValue::Array(vec![
                        JsonValue::String(logical_id.to_string()),
                        JsonValue::String(attribute.to_string()),
                    ]),
                    None => JsonValue::String(path.clone()),
                },
                (_, inner) => convert(inner)?,
            };
            log::debug!("expanded short-form !{} to {}", name, key);
            let mut object = Map::new();
            object.insert(key.to_string(), args);
            JsonValue::Object(object)
        }
    };
    Ok(json)
}

fn convert_number(n: &serde_yaml_ng::Number) -> Result<Number> {
    if let Some(i) = n.as_i64() {
        Ok(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Number::from(u))
    } else {
        n.as_f64().and_then(Number::from_f64).ok_or_else(|| {
            Error::InvalidYaml(format!("number {} has no JSON representation", n))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_yaml() {
        let value = to_json("Resources:\n  Topic:\n    Type: AWS::SNS::Topic\n").unwrap();
        assert_eq!(value, json!({"Resources": {"Topic": {"Type": "AWS::SNS::Topic"}}}));
    }

    #[test]
    fn test_short_form_tags() {
        let source = r#"
Name: !Ref BucketName
Arn: !GetAtt Rule.Arn
Nested: !GetAtt Stack.Outputs.VpcId
Joined: !Join [",", [!Ref A, !Ref B]]
Url: !Sub "https://${Host}/path"
Azs: !GetAZs ""
Flag: !If [IsProd, true, !Ref "AWS::NoValue"]
"#;
        let value = to_json(source).unwrap();
        assert_eq!(value["Name"], json!({"Ref": "BucketName"}));
        assert_eq!(value["Arn"], json!({"Fn::GetAtt": ["Rule", "Arn"]}));
        assert_eq!(value["Nested"], json!({"Fn::GetAtt": ["Stack", "Outputs.VpcId"]}));
        assert_eq!(
            value["Joined"],
            json!({"Fn::Join": [",", [{"Ref": "A"}, {"Ref": "B"}]]})
        );
        assert_eq!(value["Url"], json!({"Fn::Sub": "https://${Host}/path"}));
        assert_eq!(value["Azs"], json!({"Fn::GetAZs": ""}));
        assert_eq!(
            value["Flag"],
            json!({"Fn::If": ["IsProd", true, {"Ref": "AWS::NoValue"}]})
        );
    }

    #[test]
    fn test_get_att_list_form() {
        let source = "Arn: !GetAtt [Rule, Arn]\nBlock:\n  Cidr: !GetAtt\n    - Vpc\n    - CidrBlock\n";
        let value = to_json(source).unwrap();
        assert_eq!(value["Arn"], json!({"Fn::GetAtt": ["Rule", "Arn"]}));
        assert_eq!(
            value["Block"]["Cidr"],
            json!({"Fn::GetAtt": ["Vpc", "CidrBlock"]})
        );
    }

    #[test]
    fn test_condition_tags() {
        let value = to_json("IsProd: !Equals [!Ref Env, prod]\nBoth: !And [!Condition IsProd, !Not [!Condition IsDev]]\n").unwrap();
        assert_eq!(
            value["IsProd"],
            json!({"Fn::Equals": [{"Ref": "Env"}, "prod"]})
        );
        assert_eq!(
            value["Both"],
            json!({"Fn::And": [{"Condition": "IsProd"}, {"Fn::Not": [{"Condition": "IsDev"}]}]})
        );
    }

    #[test]
    fn test_unknown_tag() {
        let err = to_json("Value: !Frobnicate x\n").unwrap_err();
        assert!(matches!(err, Error::UnknownTag(ref t) if t == "Frobnicate"));
    }

    #[test]
    fn test_numeric_keys_become_strings() {
        let value = to_json("Mapping:\n  8080: web\n").unwrap();
        assert_eq!(value, json!({"Mapping": {"8080": "web"}}));
    }

    #[test]
    fn test_intrinsic_key() {
        assert_eq!(intrinsic_key("Ref"), Some("Ref"));
        assert_eq!(intrinsic_key("GetAZs"), Some("Fn::GetAZs"));
        assert_eq!(intrinsic_key("ToJsonString"), Some("Fn::ToJsonString"));
        assert_eq!(intrinsic_key("Include"), None);
    }
}
