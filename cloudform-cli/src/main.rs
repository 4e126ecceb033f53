mod config;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use cloudform_core::schema::ResourceSchema;
use cloudform_core::{RenderConfig, SourceFormat, Template, render_template};
use cloudform_resources::{AnyResource, decode_template, find_type_name, type_names};

use config::CliConfig;

#[derive(Parser)]
#[command(name = "cloudform")]
#[command(about = "Typed checks and formatting for CloudFormation templates", long_about = None)]
struct Cli {
    /// Path to a cloudform.toml (default: ./cloudform.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode every resource of a template against the catalog
    Check {
        /// Path to a JSON or YAML template
        file: PathBuf,

        /// Accept resource types that have no catalog module
        #[arg(long)]
        allow_unknown_types: bool,
    },
    /// List the resource types in the catalog
    List,
    /// Show the properties of a resource type
    Describe {
        /// CloudFormation type name (e.g., AWS::EMR::Cluster)
        type_name: String,

        /// Also show nested property types
        #[arg(long, short)]
        all: bool,
    },
    /// Print the JSON Schema of a resource type's Properties
    Schema {
        /// CloudFormation type name (e.g., AWS::EMR::Cluster)
        type_name: String,
    },
    /// Convert a template between JSON and YAML
    Convert {
        /// Path to a JSON or YAML template
        file: PathBuf,

        /// Output format (default: from configuration)
        #[arg(long, value_enum)]
        to: Option<Format>,

        /// Output file (writes to stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Format JSON templates (YAML templates are left as written)
    Fmt {
        /// Path to a template or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Check if files are formatted (don't modify)
        #[arg(long, short)]
        check: bool,

        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,

        /// Recursively format all templates in directory
        #[arg(long, short)]
        recursive: bool,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl From<Format> for SourceFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => SourceFormat::Json,
            Format::Yaml => SourceFormat::Yaml,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Check {
            file,
            allow_unknown_types,
        } => run_check(
            &file,
            allow_unknown_types || config.check.allow_unknown_types,
        ),
        Commands::List => run_list(),
        Commands::Describe { type_name, all } => run_describe(&type_name, all),
        Commands::Schema { type_name } => run_schema(&type_name),
        Commands::Convert { file, to, output } => {
            run_convert(&file, to, output.as_deref(), &config.render)
        }
        Commands::Fmt {
            path,
            check,
            diff,
            recursive,
        } => run_fmt(&path, check, diff, recursive, &config.render),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cloudform", &mut io::stdout());
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_template(file: &Path) -> Result<Template, String> {
    Template::from_path(file).map_err(|e| format!("Failed to load {}: {}", file.display(), e))
}

fn resolve_type_name(name: &str) -> Result<&'static str, String> {
    find_type_name(name).ok_or_else(|| {
        format!(
            "Unknown resource type '{}'. Run `cloudform list` to see the catalog.",
            name
        )
    })
}

fn run_check(file: &Path, allow_unknown_types: bool) -> Result<(), String> {
    let template = load_template(file)?;

    println!("{}", "Checking...".cyan());

    let report = decode_template(&template);
    let mut failures = 0;
    for (logical_id, result) in &report.resources {
        match result {
            Ok(AnyResource::Unknown(raw)) if allow_unknown_types => {
                println!("  {} {} ({}, not in catalog)", "•".dimmed(), logical_id, raw.type_name);
            }
            Ok(AnyResource::Unknown(raw)) => {
                failures += 1;
                println!(
                    "  {} {}: {} is not in the catalog",
                    "✗".red(),
                    logical_id,
                    raw.type_name
                );
            }
            Ok(resource) => {
                println!("  {} {} ({})", "✓".green(), logical_id, resource.type_name());
            }
            Err(e) => {
                failures += 1;
                println!("  {} {}: {}", "✗".red(), logical_id, e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} resource(s) failed the check", failures));
    }

    println!(
        "{}",
        format!("✓ {} resources checked successfully.", report.resources.len())
            .green()
            .bold()
    );
    Ok(())
}

fn run_list() -> Result<(), String> {
    for type_name in type_names() {
        println!("{}", type_name);
    }
    Ok(())
}

fn run_describe(name: &str, all: bool) -> Result<(), String> {
    let type_name = resolve_type_name(name)?;
    let schema = cloudform_resources::schema(type_name)
        .ok_or_else(|| format!("No schema for {}", type_name))?;
    print!("{}", describe(&schema, all));
    Ok(())
}

/// Human-readable summary of a resource schema
fn describe(schema: &ResourceSchema, all: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", schema.type_name.bold()));
    if let Some(description) = &schema.description {
        out.push_str(&format!("{}\n", first_sentence(description)));
    }
    out.push_str(&format!("{}\n", schema.documentation_url.dimmed()));

    out.push_str(&format!("\n{}\n", "Properties:".cyan()));
    for attr in &schema.attributes {
        push_attribute(&mut out, &attr.name, &attr.attr_type.to_string(), attr.required);
    }

    if !schema.return_attributes.is_empty() {
        out.push_str(&format!("\n{}\n", "Return attributes (Fn::GetAtt):".cyan()));
        for name in &schema.return_attributes {
            out.push_str(&format!("  {}\n", name));
        }
    }

    if all {
        for property_type in &schema.property_types {
            out.push_str(&format!("\n{}\n", property_type.name.cyan()));
            for attr in &property_type.attributes {
                push_attribute(&mut out, &attr.name, &attr.attr_type.to_string(), attr.required);
            }
        }
    }
    out
}

fn push_attribute(out: &mut String, name: &str, attr_type: &str, required: bool) {
    let marker = if required {
        " (required)".yellow().to_string()
    } else {
        String::new()
    };
    out.push_str(&format!("  {}: {}{}\n", name, attr_type, marker));
}

fn first_sentence(text: &str) -> &str {
    let line = text.lines().next().unwrap_or_default();
    match line.find(". ") {
        Some(end) => &line[..=end],
        None => line,
    }
}

fn run_schema(name: &str) -> Result<(), String> {
    let type_name = resolve_type_name(name)?;
    let root = cloudform_resources::json_schema(type_name)
        .ok_or_else(|| format!("No schema for {}", type_name))?;
    let json = serde_json::to_string_pretty(&root).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn run_convert(
    file: &Path,
    to: Option<Format>,
    output: Option<&Path>,
    render: &RenderConfig,
) -> Result<(), String> {
    let template = load_template(file)?;
    let config = RenderConfig {
        format: to.map(SourceFormat::from).unwrap_or(render.format),
        ..render.clone()
    };
    let rendered = render_template(&template, &config).map_err(|e| e.to_string())?;

    if let Some(output) = output {
        fs::write(output, &rendered)
            .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
        eprintln!("{} {}", "Converted:".green(), output.display());
    } else {
        print!("{}", rendered);
    }
    Ok(())
}

/// Re-render a JSON template; `None` when already formatted
fn format_json(content: &str, render: &RenderConfig) -> Result<Option<String>, String> {
    let template = Template::from_json_str(content).map_err(|e| e.to_string())?;
    let config = RenderConfig {
        format: SourceFormat::Json,
        ..render.clone()
    };
    let formatted = render_template(&template, &config).map_err(|e| e.to_string())?;
    Ok((formatted != content).then_some(formatted))
}

fn run_fmt(
    path: &Path,
    check: bool,
    show_diff: bool,
    recursive: bool,
    render: &RenderConfig,
) -> Result<(), String> {
    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        let mut files = Vec::new();
        collect_template_files(path, recursive, &mut files)?;
        files.sort();
        files
    };

    if files.is_empty() {
        println!("{}", "No template files found.".yellow());
        return Ok(());
    }

    let mut needs_formatting = Vec::new();
    let mut errors = Vec::new();

    for file in &files {
        let content = fs::read_to_string(file)
            .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
        // Re-rendering YAML would lose comments and short-form tags
        let result = match SourceFormat::detect(file, &content) {
            Ok(SourceFormat::Yaml) => {
                log::debug!("leaving YAML template {} as written", file.display());
                println!(
                    "{} {} (YAML is left as written)",
                    "Skipped:".yellow(),
                    file.display()
                );
                continue;
            }
            Ok(SourceFormat::Json) => format_json(&content, render),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(Some(formatted)) => {
                if show_diff {
                    print_diff(file, &content, &formatted);
                }
                if !check {
                    fs::write(file, &formatted)
                        .map_err(|e| format!("Failed to write {}: {}", file.display(), e))?;
                    println!("{} {}", "Formatted:".green(), file.display());
                }
                needs_formatting.push(file.clone());
            }
            Ok(None) => {}
            Err(e) => errors.push((file.clone(), e)),
        }
    }

    for (file, err) in &errors {
        eprintln!("{} {}: {}", "Error:".red(), file.display(), err);
    }

    if check {
        if needs_formatting.is_empty() && errors.is_empty() {
            println!("{}", "All files are properly formatted.".green());
            Ok(())
        } else {
            if !needs_formatting.is_empty() {
                println!("{}", "The following files need formatting:".yellow());
                for file in &needs_formatting {
                    println!("  {}", file.display());
                }
            }
            Err("Some files are not properly formatted".to_string())
        }
    } else if !errors.is_empty() {
        Err("Some files had formatting errors".to_string())
    } else {
        let count = needs_formatting.len();
        if count > 0 {
            println!("{}", format!("Formatted {} file(s).", count).green().bold());
        } else {
            println!("{}", "All files are already properly formatted.".green());
        }
        Ok(())
    }
}

fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "json" | "yaml" | "yml" | "template"))
}

fn collect_template_files(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();

        if path.is_dir() {
            // Skip hidden directories and common non-source directories
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            if recursive && !name.starts_with('.') && name != "target" && name != "node_modules" {
                collect_template_files(&path, recursive, files)?;
            }
        } else if is_template_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn print_diff(file: &Path, original: &str, formatted: &str) {
    println!("\n{} {}:", "Diff for".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(original, formatted);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIFIED: &str = r#"{"Resources":{"Rule":{"Type":"AWS::Config::ConfigRule","Properties":{"Source":{"Owner":"AWS","SourceIdentifier":"IAM_PASSWORD_POLICY"}}}}}"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_accepts_catalog_types() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "rule.json", MINIFIED);
        assert!(run_check(&file, false).is_ok());
    }

    #[test]
    fn test_check_unknown_types() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            dir.path(),
            "bucket.yaml",
            "Resources:\n  Bucket:\n    Type: AWS::S3::Bucket\n",
        );
        let err = run_check(&file, false).unwrap_err();
        assert!(err.contains("1 resource(s)"));
        assert!(run_check(&file, true).is_ok());
    }

    #[test]
    fn test_check_invalid_properties() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            dir.path(),
            "stack.yaml",
            "Resources:\n  Nested:\n    Type: AWS::CloudFormation::Stack\n    Properties:\n      TimeoutInMinutes: 5\n",
        );
        assert!(run_check(&file, false).is_err());
    }

    #[test]
    fn test_resolve_type_name() {
        assert_eq!(
            resolve_type_name("aws::timestream::scheduledquery").unwrap(),
            "AWS::Timestream::ScheduledQuery"
        );
        assert!(resolve_type_name("AWS::S3::Bucket").unwrap_err().contains("cloudform list"));
    }

    #[test]
    fn test_describe_lists_required_properties() {
        colored::control::set_override(false);
        let schema = cloudform_resources::schema("AWS::EMR::Cluster").unwrap();
        let text = describe(&schema, true);
        assert!(text.starts_with("AWS::EMR::Cluster\n"));
        assert!(text.contains("  Instances: JobFlowInstancesConfig | Intrinsic (required)\n"));
        assert!(text.contains("  MasterPublicDNS\n"));
        assert!(text.contains("\nConfiguration\n"));
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(first_sentence("Creates a rule. It is evaluated."), "Creates a rule.");
        assert_eq!(first_sentence("No period"), "No period");
        assert_eq!(first_sentence(""), "");
    }

    #[test]
    fn test_format_json() {
        let config = RenderConfig::default();
        let formatted = format_json(MINIFIED, &config).unwrap().unwrap();
        assert!(formatted.starts_with("{\n  \"Resources\""));
        assert_eq!(format_json(&formatted, &config).unwrap(), None);
    }

    #[test]
    fn test_format_json_keeps_key_order() {
        let source = r#"{"Metadata":{"Zeta":1,"Alpha":{"Fn::Sub":["${Z}${A}",{"Z":"z","A":"a"}]}},"Resources":{}}"#;
        let formatted = format_json(source, &RenderConfig::default()).unwrap().unwrap();
        let zeta = formatted.find("\"Zeta\"").unwrap();
        let alpha = formatted.find("\"Alpha\"").unwrap();
        assert!(zeta < alpha);
        let z = formatted.find("\"Z\": \"z\"").unwrap();
        let a = formatted.find("\"A\": \"a\"").unwrap();
        assert!(z < a);
    }

    #[test]
    fn test_fmt_keeps_json_template_extension_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "vpc.template", MINIFIED);
        let config = RenderConfig::default();

        run_fmt(dir.path(), false, false, false, &config).unwrap();
        let formatted = fs::read_to_string(&file).unwrap();
        assert!(formatted.starts_with("{\n  \"Resources\""));
        assert_eq!(
            Template::from_path(&file).unwrap(),
            Template::from_json_str(MINIFIED).unwrap()
        );
    }

    #[test]
    fn test_fmt_leaves_yaml_as_written() {
        let dir = tempfile::tempdir().unwrap();
        let source = "# Shared topic\nResources:\n  Topic:\n    Type: AWS::SNS::Topic\n    Properties:\n      TopicName: !Ref   Name\n";
        let file = write(dir.path(), "topic.yaml", source);
        let config = RenderConfig::default();

        assert!(run_fmt(dir.path(), true, false, false, &config).is_ok());
        run_fmt(dir.path(), false, false, false, &config).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), source);
    }

    #[test]
    fn test_fmt_check_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "rule.json", MINIFIED);
        write(dir.path(), "notes.txt", "not a template");
        let config = RenderConfig::default();

        assert!(run_fmt(dir.path(), true, false, false, &config).is_err());
        assert_eq!(fs::read_to_string(&file).unwrap(), MINIFIED);

        run_fmt(dir.path(), false, false, false, &config).unwrap();
        assert!(run_fmt(dir.path(), true, false, false, &config).is_ok());
    }

    #[test]
    fn test_collect_template_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let hidden = dir.path().join(".cache");
        fs::create_dir(&nested).unwrap();
        fs::create_dir(&hidden).unwrap();
        write(dir.path(), "a.yaml", "");
        write(&nested, "b.template", "");
        write(&hidden, "c.json", "");
        write(dir.path(), "README.md", "");

        let mut flat = Vec::new();
        collect_template_files(dir.path(), false, &mut flat).unwrap();
        assert_eq!(flat.len(), 1);

        let mut all = Vec::new();
        collect_template_files(dir.path(), true, &mut all).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_convert_to_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "rule.json", MINIFIED);
        let output = dir.path().join("rule.yaml");

        run_convert(&file, Some(Format::Yaml), Some(&output), &RenderConfig::default()).unwrap();
        let converted = Template::from_path(&output).unwrap();
        assert_eq!(converted, Template::from_path(&file).unwrap());
    }
}
