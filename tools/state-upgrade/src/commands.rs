//! CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use arm_resourceids::{format_id, ParseMode, Parser as IdParser};
use arm_resources::{bootstrap, Catalog};
use arm_state::{StateMap, Value};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

/// Upgrade persisted resource state and re-case resource IDs.
#[derive(Debug, Parser)]
#[command(name = "arm-state-upgrade")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Upgrade a state document to a newer schema version.
    Upgrade(UpgradeArgs),

    /// Re-case a resource ID of any registered kind.
    Recase {
        /// The ID to re-case.
        id: String,
    },

    /// Parse a resource ID against one ID kind's grammar.
    Parse(ParseArgs),

    /// List resource kinds with state upgrades, and registered ID kinds.
    Resources,
}

#[derive(Debug, Args)]
struct UpgradeArgs {
    /// Resource kind, e.g. `kubernetes_cluster`.
    #[arg(long, env = "ARM_RESOURCE")]
    resource: String,

    /// Schema version the state was written with.
    ///
    /// Optional when the input is a `{"version", "state"}` document.
    #[arg(long)]
    from_version: Option<u32>,

    /// Version to upgrade to. Defaults to the current version.
    #[arg(long)]
    to_version: Option<u32>,

    /// State document to read, or `-` for stdin.
    input: PathBuf,

    /// Where to write the result. Defaults to stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// ID kind, e.g. "Kubernetes Cluster".
    kind: String,

    /// The ID to parse.
    id: String,

    /// Tolerate case drift in literal segments.
    #[arg(long)]
    insensitive: bool,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let catalog = bootstrap().context("bootstrapping resource catalog")?;

        match self.command {
            Commands::Upgrade(args) => upgrade(&catalog, &args),
            Commands::Recase { id } => {
                println!("{}", catalog.recaser().recase(&id));
                Ok(())
            }
            Commands::Parse(args) => {
                let parsed = parse(&catalog, &args)?;
                write_json(&parsed, None)
            }
            Commands::Resources => write_json(&list_resources(&catalog), None),
        }
    }
}

fn upgrade(catalog: &Catalog, args: &UpgradeArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let (state, stored_version) = load_document(&raw)
        .with_context(|| format!("reading state from {}", args.input.display()))?;

    let from = args.from_version.or(stored_version).ok_or_else(|| {
        anyhow!("--from-version is required unless the input is a {{\"version\", \"state\"}} document")
    })?;

    let upgrades = catalog.upgrades();
    let upgraded = match args.to_version {
        Some(to) => upgrades.upgrade_to(&args.resource, &state, from, to),
        None => upgrades.upgrade(&args.resource, &state, from),
    }
    .with_context(|| format!("upgrading {}", args.input.display()))?;

    info!(
        resource = %args.resource,
        from,
        to = upgraded.version,
        steps = upgraded.steps_applied(),
        "state upgraded"
    );
    write_json(&upgraded, args.output.as_deref())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("reading state from stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Reads a bare state object, or a `{"version": n, "state": {...}}` document
/// as written by `upgrade`.
fn load_document(raw: &str) -> Result<(StateMap, Option<u32>)> {
    let value: Value = serde_json::from_str(raw).context("state is not valid JSON")?;
    let Value::Object(mut map) = value else {
        return Err(anyhow!("state must be a JSON object"));
    };

    let is_envelope = map.len() == 2
        && map.get("version").is_some_and(Value::is_u64)
        && map.get("state").is_some_and(Value::is_object);
    if !is_envelope {
        return Ok((map, None));
    }

    let version = map
        .get("version")
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| anyhow!("version is out of range"))?;
    match map.remove("state") {
        Some(Value::Object(state)) => Ok((state, Some(version))),
        _ => Err(anyhow!("state must be a JSON object")),
    }
}

#[derive(Debug, Serialize)]
struct ParsedId {
    kind: &'static str,
    id: String,
    segments: serde_json::Map<String, Value>,
}

fn parse(catalog: &Catalog, args: &ParseArgs) -> Result<ParsedId> {
    let grammar = catalog.recaser().grammar(&args.kind).ok_or_else(|| {
        let kinds: Vec<_> = catalog.recaser().kinds().collect();
        anyhow!("unknown ID kind {:?}; known kinds: {}", args.kind, kinds.join(", "))
    })?;

    let mode = if args.insensitive {
        ParseMode::Insensitive
    } else {
        ParseMode::Strict
    };
    let result = IdParser::new(grammar).parse(&args.id, mode)?;

    Ok(ParsedId {
        kind: grammar.kind(),
        id: format_id(grammar, |segment| result.get(segment).ok()),
        segments: result
            .iter()
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect(),
    })
}

#[derive(Debug, Serialize)]
struct ResourceSummary {
    resource: &'static str,
    current_version: u32,
}

#[derive(Debug, Serialize)]
struct CatalogSummary {
    resources: Vec<ResourceSummary>,
    id_kinds: Vec<&'static str>,
}

fn list_resources(catalog: &Catalog) -> CatalogSummary {
    let upgrades = catalog.upgrades();
    CatalogSummary {
        resources: upgrades
            .resources()
            .map(|resource| ResourceSummary {
                resource,
                current_version: upgrades.current_version(resource).unwrap_or_default(),
            })
            .collect(),
        id_kinds: catalog.recaser().kinds().collect(),
    }
}

fn write_json<T: Serialize>(data: &T, output: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(data).context("serializing output")?;
    json.push('\n');
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
        }
        None => io::stdout()
            .write_all(json.as_bytes())
            .context("writing to stdout"),
    }
}
