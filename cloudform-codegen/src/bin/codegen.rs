//! CloudFormation Schema to cloudform Catalog Code Generator
//!
//! Usage:
//!   # Generate from stdin (pipe from aws cli)
//!   aws cloudformation describe-type --type RESOURCE \
//!     --type-name AWS::EMR::Cluster --query 'Schema' --output text | \
//!     cloudform-codegen
//!
//!   # Generate from file
//!   cloudform-codegen --file schemas/aws-emr-cluster.json \
//!     --output cloudform-resources/src/emr/cluster.rs

use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use clap::Parser;

use cloudform_codegen::{generate_module, module_name, parse_schema};

#[derive(Parser, Debug)]
#[command(name = "cloudform-codegen")]
#[command(about = "Generate cloudform catalog modules from CloudFormation schemas")]
struct Args {
    /// Expected CloudFormation type name (e.g., AWS::EMR::Cluster)
    #[arg(long)]
    type_name: Option<String>,

    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let schema_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let schema = parse_schema(&schema_json).context("Failed to parse CloudFormation schema")?;
    if let Some(expected) = &args.type_name
        && expected != &schema.type_name
    {
        bail!(
            "Schema describes {}, not {}",
            schema.type_name,
            expected
        );
    }

    let code = generate_module(&schema)
        .with_context(|| format!("Failed to generate {}", schema.type_name))?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        eprintln!(
            "Generated: {} ({}.rs)",
            output_path,
            module_name(&schema.type_name)?
        );
    } else {
        print!("{}", code);
    }

    Ok(())
}
