//! Intrinsic - CloudFormation intrinsic functions
//!
//! Intrinsics are deferred values. They are carried through decoding and
//! rendering unchanged and are never evaluated here.

use indexmap::IndexMap;
use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use schemars::schema::{InstanceType, Metadata, ObjectValidation, Schema, SchemaObject};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};
use crate::expr::Expr;

/// Keys that mark a single-key object as an intrinsic function call
pub const INTRINSIC_KEYS: &[&str] = &[
    "Ref",
    "Condition",
    "Fn::And",
    "Fn::Base64",
    "Fn::Cidr",
    "Fn::Equals",
    "Fn::FindInMap",
    "Fn::GetAZs",
    "Fn::GetAtt",
    "Fn::If",
    "Fn::ImportValue",
    "Fn::Join",
    "Fn::Length",
    "Fn::Not",
    "Fn::Or",
    "Fn::Select",
    "Fn::Split",
    "Fn::Sub",
    "Fn::ToJsonString",
    "Fn::Transform",
];

/// A CloudFormation intrinsic function call
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    /// `Ref`: a parameter, pseudo parameter, or resource logical ID
    Ref(String),
    /// `Fn::GetAtt`: an attribute of another resource
    GetAtt {
        logical_id: String,
        attribute: Box<Expr>,
    },
    /// `Fn::Join`
    Join { delimiter: String, values: Box<Expr> },
    /// `Fn::Sub` with optional variable map
    Sub {
        template: String,
        variables: Option<IndexMap<String, Expr>>,
    },
    /// `Fn::Select`
    Select { index: Box<Expr>, list: Box<Expr> },
    /// `Fn::Split`
    Split { delimiter: String, source: Box<Expr> },
    /// `Fn::If`
    If {
        condition: String,
        when_true: Box<Expr>,
        when_false: Box<Expr>,
    },
    /// `Fn::ImportValue`
    ImportValue(Box<Expr>),
    /// `Fn::FindInMap`, optionally with a `DefaultValue`
    FindInMap {
        map_name: Box<Expr>,
        top_level_key: Box<Expr>,
        second_level_key: Box<Expr>,
        default: Option<Box<Expr>>,
    },
    /// `Fn::GetAZs`
    GetAzs(Box<Expr>),
    /// `Fn::Base64`
    Base64(Box<Expr>),
    /// `Fn::Cidr`
    Cidr {
        ip_block: Box<Expr>,
        count: Box<Expr>,
        cidr_bits: Box<Expr>,
    },
    /// `Fn::Equals`
    Equals(Box<Expr>, Box<Expr>),
    /// `Fn::And`
    And(Vec<Expr>),
    /// `Fn::Or`
    Or(Vec<Expr>),
    /// `Fn::Not`
    Not(Box<Expr>),
    /// `Condition`: reference to a named condition
    Condition(String),
    /// `Fn::Transform`: macro invocation
    Transform {
        name: String,
        parameters: Option<IndexMap<String, Expr>>,
    },
    /// `Fn::Length`
    Length(Box<Expr>),
    /// `Fn::ToJsonString`
    ToJsonString(Box<Expr>),
}

impl Intrinsic {
    /// `Ref` to a logical ID or parameter
    pub fn reference(target: impl Into<String>) -> Self {
        Intrinsic::Ref(target.into())
    }

    /// `Fn::GetAtt` with a literal attribute name
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Intrinsic::GetAtt {
            logical_id: logical_id.into(),
            attribute: Box::new(Expr::String(attribute.into())),
        }
    }

    /// `Fn::Sub` without a variable map
    pub fn sub(template: impl Into<String>) -> Self {
        Intrinsic::Sub {
            template: template.into(),
            variables: None,
        }
    }

    /// Wire name of this function (e.g., "Fn::GetAtt")
    pub fn function_name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::GetAtt { .. } => "Fn::GetAtt",
            Intrinsic::Join { .. } => "Fn::Join",
            Intrinsic::Sub { .. } => "Fn::Sub",
            Intrinsic::Select { .. } => "Fn::Select",
            Intrinsic::Split { .. } => "Fn::Split",
            Intrinsic::If { .. } => "Fn::If",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::FindInMap { .. } => "Fn::FindInMap",
            Intrinsic::GetAzs(_) => "Fn::GetAZs",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::Cidr { .. } => "Fn::Cidr",
            Intrinsic::Equals(_, _) => "Fn::Equals",
            Intrinsic::And(_) => "Fn::And",
            Intrinsic::Or(_) => "Fn::Or",
            Intrinsic::Not(_) => "Fn::Not",
            Intrinsic::Condition(_) => "Condition",
            Intrinsic::Transform { .. } => "Fn::Transform",
            Intrinsic::Length(_) => "Fn::Length",
            Intrinsic::ToJsonString(_) => "Fn::ToJsonString",
        }
    }

    /// Returns the function name and arguments if `object` is a single-key
    /// object naming a known intrinsic
    pub fn detect(object: &Map<String, JsonValue>) -> Option<(&str, &JsonValue)> {
        if object.len() != 1 {
            return None;
        }
        let (key, args) = object.iter().next()?;
        INTRINSIC_KEYS
            .contains(&key.as_str())
            .then_some((key.as_str(), args))
    }

    /// Parse the arguments of the intrinsic called `name`
    pub fn from_json(name: &str, args: &JsonValue) -> Result<Self> {
        let intrinsic = match name {
            "Ref" => Intrinsic::Ref(expect_string(name, args)?),
            "Condition" => Intrinsic::Condition(expect_string(name, args)?),
            "Fn::GetAtt" => match args {
                JsonValue::String(path) => {
                    let (logical_id, attribute) = path.split_once('.').ok_or_else(|| {
                        Error::invalid_intrinsic(name, format!("'{}' is not Logical.Attribute", path))
                    })?;
                    Intrinsic::get_att(logical_id, attribute)
                }
                _ => {
                    let items = expect_list(name, args, 2)?;
                    Intrinsic::GetAtt {
                        logical_id: expect_string(name, &items[0])?,
                        attribute: boxed(&items[1])?,
                    }
                }
            },
            "Fn::Join" => {
                let items = expect_list(name, args, 2)?;
                Intrinsic::Join {
                    delimiter: expect_string(name, &items[0])?,
                    values: boxed(&items[1])?,
                }
            }
            "Fn::Sub" => match args {
                JsonValue::String(template) => Intrinsic::sub(template.clone()),
                _ => {
                    let items = expect_list(name, args, 2)?;
                    let JsonValue::Object(vars) = &items[1] else {
                        return Err(Error::invalid_intrinsic(name, "variables must be a map"));
                    };
                    let variables = vars
                        .iter()
                        .map(|(k, v)| Ok((k.clone(), Expr::from_json(v)?)))
                        .collect::<Result<IndexMap<_, _>>>()?;
                    Intrinsic::Sub {
                        template: expect_string(name, &items[0])?,
                        variables: Some(variables),
                    }
                }
            },
            "Fn::Select" => {
                let items = expect_list(name, args, 2)?;
                Intrinsic::Select {
                    index: boxed(&items[0])?,
                    list: boxed(&items[1])?,
                }
            }
            "Fn::Split" => {
                let items = expect_list(name, args, 2)?;
                Intrinsic::Split {
                    delimiter: expect_string(name, &items[0])?,
                    source: boxed(&items[1])?,
                }
            }
            "Fn::If" => {
                let items = expect_list(name, args, 3)?;
                Intrinsic::If {
                    condition: expect_string(name, &items[0])?,
                    when_true: boxed(&items[1])?,
                    when_false: boxed(&items[2])?,
                }
            }
            "Fn::FindInMap" => {
                let items = match args {
                    JsonValue::Array(items) if items.len() == 3 || items.len() == 4 => items,
                    _ => {
                        return Err(Error::invalid_intrinsic(
                            name,
                            "expected a 3-element list with an optional DefaultValue",
                        ));
                    }
                };
                let default = match items.get(3) {
                    Some(JsonValue::Object(options)) => match options.get("DefaultValue") {
                        Some(value) => Some(boxed(value)?),
                        None => {
                            return Err(Error::invalid_intrinsic(
                                name,
                                "fourth element must be {\"DefaultValue\": ...}",
                            ));
                        }
                    },
                    Some(_) => {
                        return Err(Error::invalid_intrinsic(
                            name,
                            "fourth element must be {\"DefaultValue\": ...}",
                        ));
                    }
                    None => None,
                };
                Intrinsic::FindInMap {
                    map_name: boxed(&items[0])?,
                    top_level_key: boxed(&items[1])?,
                    second_level_key: boxed(&items[2])?,
                    default,
                }
            }
            "Fn::Cidr" => {
                let items = expect_list(name, args, 3)?;
                Intrinsic::Cidr {
                    ip_block: boxed(&items[0])?,
                    count: boxed(&items[1])?,
                    cidr_bits: boxed(&items[2])?,
                }
            }
            "Fn::Equals" => {
                let items = expect_list(name, args, 2)?;
                Intrinsic::Equals(boxed(&items[0])?, boxed(&items[1])?)
            }
            "Fn::And" => Intrinsic::And(expect_conditions(name, args)?),
            "Fn::Or" => Intrinsic::Or(expect_conditions(name, args)?),
            "Fn::Not" => {
                let items = expect_list(name, args, 1)?;
                Intrinsic::Not(boxed(&items[0])?)
            }
            "Fn::Transform" => {
                let JsonValue::Object(body) = args else {
                    return Err(Error::invalid_intrinsic(name, "expected a map with Name"));
                };
                let transform_name = body
                    .get("Name")
                    .ok_or_else(|| Error::invalid_intrinsic(name, "missing Name"))
                    .and_then(|v| expect_string(name, v))?;
                let parameters = match body.get("Parameters") {
                    Some(JsonValue::Object(params)) => Some(
                        params
                            .iter()
                            .map(|(k, v)| Ok((k.clone(), Expr::from_json(v)?)))
                            .collect::<Result<IndexMap<_, _>>>()?,
                    ),
                    Some(_) => {
                        return Err(Error::invalid_intrinsic(name, "Parameters must be a map"));
                    }
                    None => None,
                };
                Intrinsic::Transform {
                    name: transform_name,
                    parameters,
                }
            }
            "Fn::ImportValue" => Intrinsic::ImportValue(boxed(args)?),
            "Fn::GetAZs" => Intrinsic::GetAzs(boxed(args)?),
            "Fn::Base64" => Intrinsic::Base64(boxed(args)?),
            "Fn::Length" => Intrinsic::Length(boxed(args)?),
            "Fn::ToJsonString" => Intrinsic::ToJsonString(boxed(args)?),
            other => {
                return Err(Error::invalid_intrinsic(other, "unknown intrinsic function"));
            }
        };
        Ok(intrinsic)
    }

    /// Long-form JSON of this call, e.g. `{"Fn::GetAtt": ["Bucket", "Arn"]}`
    pub fn to_json(&self) -> JsonValue {
        let args = match self {
            Intrinsic::Ref(target) | Intrinsic::Condition(target) => {
                JsonValue::String(target.clone())
            }
            Intrinsic::GetAtt {
                logical_id,
                attribute,
            } => JsonValue::Array(vec![
                JsonValue::String(logical_id.clone()),
                attribute.to_json(),
            ]),
            Intrinsic::Join { delimiter, values } => {
                JsonValue::Array(vec![JsonValue::String(delimiter.clone()), values.to_json()])
            }
            Intrinsic::Sub {
                template,
                variables,
            } => match variables {
                None => JsonValue::String(template.clone()),
                Some(vars) => JsonValue::Array(vec![
                    JsonValue::String(template.clone()),
                    map_to_json(vars),
                ]),
            },
            Intrinsic::Select { index, list } => {
                JsonValue::Array(vec![index.to_json(), list.to_json()])
            }
            Intrinsic::Split { delimiter, source } => {
                JsonValue::Array(vec![JsonValue::String(delimiter.clone()), source.to_json()])
            }
            Intrinsic::If {
                condition,
                when_true,
                when_false,
            } => JsonValue::Array(vec![
                JsonValue::String(condition.clone()),
                when_true.to_json(),
                when_false.to_json(),
            ]),
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
                default,
            } => {
                let mut items = vec![
                    map_name.to_json(),
                    top_level_key.to_json(),
                    second_level_key.to_json(),
                ];
                if let Some(default) = default {
                    let mut options = Map::new();
                    options.insert("DefaultValue".to_string(), default.to_json());
                    items.push(JsonValue::Object(options));
                }
                JsonValue::Array(items)
            }
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => JsonValue::Array(vec![
                ip_block.to_json(),
                count.to_json(),
                cidr_bits.to_json(),
            ]),
            Intrinsic::Equals(left, right) => {
                JsonValue::Array(vec![left.to_json(), right.to_json()])
            }
            Intrinsic::And(items) | Intrinsic::Or(items) => {
                JsonValue::Array(items.iter().map(Expr::to_json).collect())
            }
            Intrinsic::Not(inner) => JsonValue::Array(vec![inner.to_json()]),
            Intrinsic::Transform { name, parameters } => {
                let mut body = Map::new();
                body.insert("Name".to_string(), JsonValue::String(name.clone()));
                if let Some(parameters) = parameters {
                    body.insert("Parameters".to_string(), map_to_json(parameters));
                }
                JsonValue::Object(body)
            }
            Intrinsic::ImportValue(inner)
            | Intrinsic::GetAzs(inner)
            | Intrinsic::Base64(inner)
            | Intrinsic::Length(inner)
            | Intrinsic::ToJsonString(inner) => inner.to_json(),
        };

        let mut object = Map::new();
        object.insert(self.function_name().to_string(), args);
        JsonValue::Object(object)
    }
}

impl TryFrom<&JsonValue> for Intrinsic {
    type Error = Error;

    fn try_from(value: &JsonValue) -> Result<Self> {
        let JsonValue::Object(object) = value else {
            return Err(Error::invalid_intrinsic(
                "intrinsic",
                "expected a single-key object",
            ));
        };
        let (name, args) = Intrinsic::detect(object).ok_or_else(|| {
            Error::invalid_intrinsic("intrinsic", "expected a single-key object naming a function")
        })?;
        Intrinsic::from_json(name, args)
    }
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Intrinsic::try_from(&value).map_err(D::Error::custom)
    }
}

impl JsonSchema for Intrinsic {
    fn schema_name() -> String {
        "Intrinsic".to_string()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            metadata: Some(Box::new(Metadata {
                description: Some(
                    "CloudFormation intrinsic function call, e.g. {\"Ref\": \"LogicalId\"}"
                        .to_string(),
                ),
                ..Default::default()
            })),
            instance_type: Some(InstanceType::Object.into()),
            object: Some(Box::new(ObjectValidation {
                min_properties: Some(1),
                max_properties: Some(1),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

fn boxed(value: &JsonValue) -> Result<Box<Expr>> {
    Expr::from_json(value).map(Box::new)
}

fn expect_string(function: &str, value: &JsonValue) -> Result<String> {
    match value {
        JsonValue::String(s) => Ok(s.clone()),
        other => Err(Error::invalid_intrinsic(
            function,
            format!("expected a string, got {}", other),
        )),
    }
}

fn expect_list<'a>(function: &str, value: &'a JsonValue, len: usize) -> Result<&'a [JsonValue]> {
    match value {
        JsonValue::Array(items) if items.len() == len => Ok(items.as_slice()),
        _ => Err(Error::invalid_intrinsic(
            function,
            format!("expected a {}-element list", len),
        )),
    }
}

fn expect_conditions(function: &str, value: &JsonValue) -> Result<Vec<Expr>> {
    match value {
        JsonValue::Array(items) if !items.is_empty() => items.iter().map(Expr::from_json).collect(),
        _ => Err(Error::invalid_intrinsic(
            function,
            "expected a non-empty list of conditions",
        )),
    }
}

fn map_to_json(map: &IndexMap<String, Expr>) -> JsonValue {
    JsonValue::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
}
