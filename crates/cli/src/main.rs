//! `string-activities` CLI entry-point.
//!
//! Available sub-commands:
//! - `list` — show every registered activity and its parameter contract.
//! - `run`  — invoke one activity with named inputs from a JSON object.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use activities::{ActivityContext, InputParameterSet};
use engine::Invoker;

#[derive(Parser)]
#[command(
    name = "string-activities",
    about = "Reusable string-transformation workflow activities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered activities and their input/output contracts.
    List,
    /// Run an activity with named input parameters.
    Run {
        /// Activity kind identifier, e.g. `regex_replace`.
        kind: String,
        /// Path to a JSON file holding the named input parameters.
        #[arg(long, conflicts_with = "json")]
        params: Option<std::path::PathBuf>,
        /// Inline JSON object of named input parameters.
        #[arg(long)]
        json: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let invoker = Invoker::builtin();

    match cli.command {
        Command::List => {
            for descriptor in invoker.registry().descriptors() {
                println!("{}", descriptor.kind);
                for input in descriptor.inputs {
                    let requirement = match input.default {
                        _ if input.required => "required".to_owned(),
                        Some(default) => format!("optional, default {default:?}"),
                        None => "optional".to_owned(),
                    };
                    println!("  in:  {} ({requirement})", input.name);
                }
                for output in descriptor.outputs {
                    println!("  out: {output}");
                }
            }
        }
        Command::Run { kind, params, json } => {
            let raw = match (params, json) {
                (Some(path), None) => std::fs::read_to_string(&path)
                    .with_context(|| format!("cannot read {}", path.display()))?,
                (None, Some(inline)) => inline,
                _ => bail!("supply the input parameters via --params <file> or --json '<object>'"),
            };

            let object: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(&raw).context("input parameters must be a JSON object")?;
            let inputs = InputParameterSet::new(object);

            // Fresh per-invocation context, discarded after the outputs print.
            let ctx = ActivityContext::for_host();
            info!("invoking '{kind}' (correlation {})", ctx.correlation_id);

            let outputs = invoker
                .invoke(&kind, &inputs, &ctx)
                .await
                .with_context(|| format!("activity '{kind}' failed"))?;

            println!("{}", serde_json::to_string_pretty(&outputs)?);
        }
    }

    Ok(())
}
