//! Command-line interface for gqlsynth.
//!
//! # Usage
//!
//! ```bash
//! # List the resources found in an introspection result
//! gqlsynth resources --schema schema.json
//!
//! # Build one request
//! gqlsynth build --schema schema.json --resource Post --kind GET_LIST \
//!     --variables '{"page": 0, "perPage": 10}'
//!
//! # Build many requests at once
//! gqlsynth batch --schema schema.json requests.json
//! ```

pub mod config;
pub mod error;

pub use config::{Config, FormatConfig};
pub use error::CliError;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use gqlsynth_builder::{BuiltQuery, QueryBuilder};
use gqlsynth_core::{FetchKind, IntrospectedSchema, Variables};
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "gqlsynth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// GraphQL text
    #[default]
    Text,
    /// Operation name, query text and variables as JSON
    Json,
    /// The document AST as JSON
    Ast,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the operation for one request
    Build {
        /// Introspection result (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Resource (type) name
        #[arg(short, long)]
        resource: String,

        /// Fetch kind, e.g. GET_LIST or get-one
        #[arg(short, long)]
        kind: FetchKind,

        /// Variables as a JSON object, or @path to a JSON file
        #[arg(long)]
        variables: Option<String>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        emit: Emit,
    },

    /// List resources and their operations
    Resources {
        /// Introspection result (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Build every request of a JSON array file
    Batch {
        /// Introspection result (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// JSON array of `{ "resource", "kind", "variables" }` objects
        requests: PathBuf,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (`ast` prints the same as `json`)
        #[arg(long, value_enum, default_value = "text")]
        emit: Emit,
    },

    /// Print version information
    Version,
}

/// One entry of a batch requests file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchRequest {
    pub resource: String,
    pub kind: FetchKind,
    #[serde(default)]
    pub variables: Variables,
}

pub fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Commands::Build {
            schema,
            resource,
            kind,
            variables,
            config,
            emit,
        } => {
            let config = Config::load(config.as_deref())?;
            let schema = load_schema(&schema, &config)?;
            let variables = parse_variables(variables.as_deref())?;
            let builder = QueryBuilder::new(&schema).with_format_options(config.format_options());

            let built = builder.build(&resource, &kind, &variables)?;
            print!("{}", render(&built, emit)?);
            Ok(0)
        }
        Commands::Resources { schema, config } => {
            let config = Config::load(config.as_deref())?;
            let schema = load_schema(&schema, &config)?;
            print!("{}", list_resources(&schema));
            Ok(0)
        }
        Commands::Batch {
            schema,
            requests,
            config,
            emit,
        } => {
            let config = Config::load(config.as_deref())?;
            let schema = load_schema(&schema, &config)?;
            let requests: Vec<BatchRequest> = serde_json::from_str(&read_file(&requests)?)
                .map_err(CliError::json("batch requests"))?;
            run_batch(&schema, &config, &requests, emit, cli.verbose)
        }
        Commands::Version => {
            println!("gqlsynth {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_schema(path: &Path, config: &Config) -> Result<IntrospectedSchema, CliError> {
    let schema = IntrospectedSchema::from_json(&read_file(path)?, &config.introspection)?;
    info!(
        path = %path.display(),
        types = schema.types.len(),
        resources = schema.resources.len(),
        "loaded schema"
    );
    Ok(schema)
}

/// Parses `--variables`: inline JSON, or `@path` to read it from a file.
pub fn parse_variables(arg: Option<&str>) -> Result<Variables, CliError> {
    let Some(arg) = arg else {
        return Ok(Variables::new());
    };
    let source = match arg.strip_prefix('@') {
        Some(path) => read_file(Path::new(path))?,
        None => arg.to_string(),
    };
    serde_json::from_str(&source).map_err(CliError::json("variables"))
}

/// Renders a built request in the requested format.
pub fn render(built: &BuiltQuery, emit: Emit) -> Result<String, CliError> {
    let rendered = match emit {
        Emit::Text => return Ok(built.query.clone()),
        Emit::Json => serde_json::to_string_pretty(&request_body(built)),
        Emit::Ast => serde_json::to_string_pretty(&built.document),
    };
    rendered
        .map(|mut text| {
            text.push('\n');
            text
        })
        .map_err(CliError::json("output"))
}

/// The body of a GraphQL-over-HTTP request.
fn request_body(built: &BuiltQuery) -> serde_json::Value {
    json!({
        "operationName": built.operation_name,
        "query": built.query,
        "variables": built.variables,
    })
}

fn list_resources(schema: &IntrospectedSchema) -> String {
    let mut output = String::new();
    for resource in &schema.resources {
        output.push_str(&format!("{}\n", resource.name().bold()));
        for (kind, query_type) in &resource.operations {
            let kind = format!("{:<20}", kind.as_str());
            output.push_str(&format!("  {} {}\n", kind.dimmed(), query_type.name));
        }
    }
    output
}

fn run_batch(
    schema: &IntrospectedSchema,
    config: &Config,
    requests: &[BatchRequest],
    emit: Emit,
    verbose: bool,
) -> Result<i32, CliError> {
    let builder = QueryBuilder::new(schema).with_format_options(config.format_options());
    let results: Vec<_> = requests
        .par_iter()
        .map(|request| builder.build(&request.resource, &request.kind, &request.variables))
        .collect();

    let failed = results.iter().filter(|result| result.is_err()).count();
    debug!(requests = requests.len(), failed, "built batch");

    if emit == Emit::Json || emit == Emit::Ast {
        let entries: Vec<_> = results
            .iter()
            .map(|result| match result {
                Ok(built) => request_body(built),
                Err(e) => json!({ "error": e.to_string() }),
            })
            .collect();
        let text = serde_json::to_string_pretty(&entries).map_err(CliError::json("output"))?;
        println!("{text}");
    } else {
        for (i, (request, result)) in requests.iter().zip(&results).enumerate() {
            if i > 0 {
                println!();
            }
            match result {
                Ok(built) => {
                    println!("# {} {}", request.resource, request.kind);
                    print!("{}", built.query);
                }
                Err(e) => {
                    eprintln!(
                        "{} {} {}: {}",
                        "Error".red().bold(),
                        request.resource,
                        request.kind,
                        e
                    );
                }
            }
        }
    }

    if failed > 0 {
        eprintln!(
            "{} {} of {} request(s) failed",
            "Failed:".red().bold(),
            failed,
            requests.len()
        );
        Ok(1)
    } else {
        if verbose {
            eprintln!(
                "{} {} request(s) built",
                "Success:".green().bold(),
                requests.len()
            );
        }
        Ok(0)
    }
}
