//! # NGC Modal State Encoder CLI
//!
//! Encodes a recorded interpreter snapshot and prints what status
//! consumers would see: the active G/M-code arrays, the active settings
//! and the state tag.
//!
//! # Usage
//!
//! ```bash
//! # Arrays and tag as text
//! ngc_modal config/snapshot.toml
//!
//! # State tag only, as JSON
//! ngc_modal config/snapshot.toml --format tag --json
//!
//! # Verbose logging (DEBUG level)
//! ngc_modal config/snapshot.toml -v
//! ```

use clap::{Parser, ValueEnum};
use ngc_common::config::LogLevel;
use ngc_common::consts::DEFAULT_SNAPSHOT_PATH;
use ngc_common::interp::state_tag::{StateField, StateFieldFloat, StateFlags, StateTag};
use ngc_modal::encode::table::{G_CODE_SLOTS, M_CODE_SLOTS, SETTINGS_SLOTS};
use ngc_modal::publish::{LatestTagSink, TracingSink, publish_state_tag};
use ngc_modal::snapshot::{LoadedSnapshot, load_snapshot};
use ngc_modal::ActiveState;
use serde_json::{Map, Value, json};
use std::path::PathBuf;
use std::process;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Active G-code, M-code and settings arrays.
    Arrays,
    /// State tag.
    Tag,
    /// Both.
    All,
}

/// NGC modal state encoder
#[derive(Parser, Debug)]
#[command(name = "ngc_modal")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Encode interpreter modal state into active codes and state tags")]
struct Args {
    /// Path to the snapshot TOML.
    #[arg(default_value = DEFAULT_SNAPSHOT_PATH)]
    snapshot: PathBuf,

    /// Output selection.
    #[arg(long, value_enum, default_value_t = OutputFormat::All)]
    format: OutputFormat,

    /// Print a JSON document instead of text.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // The snapshot carries the log level, so read it before logging starts.
    let loaded = load_snapshot(&args.snapshot);
    let level = loaded
        .as_ref()
        .map(|s| s.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, level);

    info!("NGC modal encoder v{} starting...", env!("CARGO_PKG_VERSION"));

    let snapshot = match loaded {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("FATAL: {}: {e}", args.snapshot.display());
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, &snapshot) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, snapshot: &LoadedSnapshot) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Encoding snapshot for service '{}' (line {})",
        snapshot.shared.service_name, snapshot.settings.sequence_number
    );

    let active = ActiveState::encode(snapshot.block(), &snapshot.settings);

    // Print exactly the tag that was published.
    let mut sinks = (LatestTagSink::new(), TracingSink);
    publish_state_tag(snapshot.block(), &snapshot.settings, &mut sinks);
    let tag = *sinks.0.latest().ok_or("no state tag was published")?;

    let show_arrays = matches!(args.format, OutputFormat::Arrays | OutputFormat::All);
    let show_tag = matches!(args.format, OutputFormat::Tag | OutputFormat::All);

    if args.json {
        let mut doc = Map::new();
        if show_arrays {
            doc.insert("active_g_codes".into(), json!(active.g_codes));
            doc.insert("active_m_codes".into(), json!(active.m_codes));
            doc.insert("active_settings".into(), json!(active.settings));
        }
        if show_tag {
            doc.insert("state_tag".into(), tag_to_json(&tag));
        }
        println!("{}", serde_json::to_string_pretty(&Value::Object(doc))?);
        return Ok(());
    }

    if show_arrays {
        println!("Active G-codes:");
        for (name, value) in G_CODE_SLOTS.iter().zip(active.g_codes) {
            println!("  {name:<22} {value}");
        }
        println!("Active M-codes:");
        for (name, value) in M_CODE_SLOTS.iter().zip(active.m_codes) {
            println!("  {name:<22} {value}");
        }
        println!("Active settings:");
        for (name, value) in SETTINGS_SLOTS.iter().zip(active.settings) {
            println!("  {name:<22} {value}");
        }
    }
    if show_tag {
        println!("State tag (valid: {}):", tag.is_valid());
        for field in StateField::ALL {
            println!("  {:<22} {}", field.name(), tag.field(field));
        }
        for field in StateFieldFloat::ALL {
            println!("  {:<22} {}", field.name(), tag.field_float(field));
        }
        for (name, flag) in StateFlags::all().iter_names() {
            println!("  {:<22} {}", name.to_lowercase(), tag.flag(flag));
        }
    }

    Ok(())
}

/// JSON view of a state tag with named fields and flags.
fn tag_to_json(tag: &StateTag) -> Value {
    let fields: Map<String, Value> = StateField::ALL
        .iter()
        .map(|f| (f.name().to_string(), json!(tag.field(*f))))
        .collect();
    let floats: Map<String, Value> = StateFieldFloat::ALL
        .iter()
        .map(|f| (f.name().to_string(), json!(tag.field_float(*f))))
        .collect();
    let flags: Map<String, Value> = StateFlags::all()
        .iter_names()
        .map(|(name, flag)| (name.to_lowercase(), json!(tag.flag(flag))))
        .collect();

    json!({
        "valid": tag.is_valid(),
        "fields": fields,
        "fields_float": floats,
        "flags": flags,
    })
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Setup tracing subscriber based on CLI arguments and the snapshot level.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        to_tracing_level(configured)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so stdout stays machine-readable.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
