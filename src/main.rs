//! snmp-location - normalize SNMP `sysLocation` strings
//!
//! Turns raw location strings into organizer paths and rack-slot
//! descriptors, one record per input on stdout. Logs go to stderr.
//!
//! Usage:
//!   snmp-location "Albuquerque/DC1/Rack01-25"
//!   snmpget -Ovq host SNMPv2-MIB::sysLocation.0 | snmp-location --device host --format json

use clap::Parser;
use snmp_location::domain::{Device, LocationHolder};
use snmp_location::infra::{Config, OutputFormat};
use snmp_location::io::{read_locations, Emitter};
use snmp_location::services::LocationMap;
use std::ffi::OsString;
use std::io::{self, BufWriter};
use tracing::{debug, info};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Normalize SNMP location strings into organizer paths and rack slots
#[derive(Parser, Debug)]
#[command(name = "snmp-location", version, about)]
struct Args {
    /// Path to TOML configuration file (falls back to CONFIG_FILE, then config/dev.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Device id the locations belong to
    #[arg(short, long, default_value = "localhost")]
    device: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Raw location strings; read one per line from stdin when omitted
    locations: Vec<OsString>,
}

fn init_logging(json: bool) {
    // Default: INFO, use RUST_LOG=debug for per-record events
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);

    info!(version = env!("CARGO_PKG_VERSION"), "snmp_location_starting");

    let config_path = Config::resolve_config_path(args.config.as_deref());
    let config = Config::load_from_path(&config_path);
    let format = args.format.unwrap_or(config.output_format());

    info!(
        config_file = %config.config_file(),
        subchar = %config.subchar(),
        format = %format.as_str(),
        "config_loaded"
    );

    let map = LocationMap::new(&config);
    let mut device = Device::new(args.device.as_str());
    let mut emitter = Emitter::new(BufWriter::new(io::stdout().lock()), format);

    let mut handle = |raw: &str| -> anyhow::Result<()> {
        let update = map.process(device.id(), raw)?;
        emitter.emit(&update)?;
        update.apply_to(&mut device);
        Ok(())
    };

    if args.locations.is_empty() {
        read_locations(io::stdin().lock(), &mut handle)?;
    } else {
        for raw in &args.locations {
            handle(&raw.to_string_lossy())?;
        }
    }

    emitter.flush()?;
    debug!(
        device_id = %device.id(),
        location = %device.location(),
        rack_slot = %device.rack_slot(),
        "device_state"
    );
    info!(records = emitter.written(), "snmp_location_done");
    Ok(())
}
