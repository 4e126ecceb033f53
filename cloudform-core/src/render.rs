//! Rendering templates back to text

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::template::{SourceFormat, Template};

/// Rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Number of spaces for JSON indentation (default: 2)
    pub indent_size: usize,

    /// Use tabs instead of spaces for indentation (JSON only)
    pub use_tabs: bool,

    /// Output format (default: json)
    pub format: SourceFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            use_tabs: false,
            format: SourceFormat::Json,
        }
    }
}

impl RenderConfig {
    /// Get the string to use for a single level of indentation
    pub fn indent_string(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_size)
        }
    }
}

/// Render a template in the configured format. Intrinsics are always written
/// in long form.
pub fn render_template(template: &Template, config: &RenderConfig) -> Result<String> {
    match config.format {
        SourceFormat::Json => {
            let indent = config.indent_string();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut out = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
            template.serialize(&mut serializer)?;
            out.push(b'\n');
            // serde_json only ever writes valid UTF-8
            Ok(String::from_utf8_lossy(&out).into_owned())
        }
        SourceFormat::Yaml => Ok(serde_yaml_ng::to_string(template)?),
    }
}

/// Check whether `source` differs from its rendered form
pub fn needs_render(source: &str, source_format: SourceFormat, config: &RenderConfig) -> Result<bool> {
    let template = Template::from_str_as(source, source_format)?;
    Ok(render_template(&template, config)? != source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIFIED: &str = r#"{"Resources":{"Topic":{"Type":"AWS::SNS::Topic","Properties":{"TopicName":{"Ref":"Name"}}}}}"#;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_size, 2);
        assert!(!config.use_tabs);
        assert_eq!(config.format, SourceFormat::Json);
    }

    #[test]
    fn test_indent_string_tabs() {
        let config = RenderConfig {
            use_tabs: true,
            ..Default::default()
        };
        assert_eq!(config.indent_string(), "\t");
    }

    #[test]
    fn test_render_json_pretty() {
        let template = Template::from_json_str(MINIFIED).unwrap();
        let rendered = render_template(&template, &RenderConfig::default()).unwrap();
        assert!(rendered.starts_with("{\n  \"Resources\": {\n    \"Topic\": {"));
        assert!(rendered.ends_with("}\n"));
        assert!(!needs_render(&rendered, SourceFormat::Json, &RenderConfig::default()).unwrap());
        assert!(needs_render(MINIFIED, SourceFormat::Json, &RenderConfig::default()).unwrap());
    }

    #[test]
    fn test_render_yaml_uses_long_form() {
        let template = Template::from_yaml_str(
            "Resources:\n  Topic:\n    Type: AWS::SNS::Topic\n    Properties:\n      TopicName: !Ref Name\n",
        )
        .unwrap();
        let config = RenderConfig {
            format: SourceFormat::Yaml,
            ..Default::default()
        };
        let rendered = render_template(&template, &config).unwrap();
        assert!(rendered.contains("TopicName:\n        Ref: Name"));
    }
}
