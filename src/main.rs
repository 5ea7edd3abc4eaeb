//! `enigma` command-line front end.
//!
//! Normalizes the message, builds a machine from flags and/or a JSON config
//! file, and prints the cipher text on stdout. Logs go to stderr.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use enigma::alphabet::normalize;
use enigma::{Enigma, MachineConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Encipher or decipher a message with a rotor cipher machine.
///
/// Rotor-indexed lists (rotors, rings, offsets) start with the entry
/// (rightmost) rotor.
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Message to run through the machine; case and whitespace are ignored
    message: String,

    /// JSON machine configuration; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rotor keys (I-VIII), entry rotor first
    #[arg(short = 'w', long, num_args = 1..)]
    rotors: Option<Vec<String>>,

    /// Ring settings, 0-25, one per rotor
    #[arg(short, long, num_args = 1..)]
    rings: Option<Vec<u8>>,

    /// Starting offsets, 0-25, one per rotor
    #[arg(short, long, num_args = 1..)]
    offsets: Option<Vec<u8>>,

    /// Plugboard letter pairs, e.g. AB CD
    #[arg(short, long, num_args = 1..)]
    plugs: Option<Vec<String>>,

    /// Reflector key (A, B, C, B_thin, C_thin)
    #[arg(long)]
    reflector: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Merges the config file (if any) with explicit flags.
    fn machine_config(&self) -> Result<MachineConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => MachineConfig::default(),
        };

        if let Some(rotors) = &self.rotors {
            config.rotors = rotors.clone();
        }
        if let Some(rings) = &self.rings {
            config.rings = rings.clone();
        }
        if let Some(offsets) = &self.offsets {
            config.offsets = Some(offsets.clone());
        }
        if let Some(plugs) = &self.plugs {
            config.plugs = plugs.clone();
        }
        if let Some(reflector) = &self.reflector {
            config.reflector = reflector.clone();
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = cli.machine_config()?;
    let mut machine = Enigma::from_config(&config).context("invalid machine settings")?;
    info!(machine = %machine, "machine ready");

    let message = normalize(&cli.message);
    machine.codec(&message).context("invalid message")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cipher = run(&cli)?;
    println!("{cipher}");
    Ok(())
}
