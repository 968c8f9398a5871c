//! Command-line interface for the LOKI97 workspace.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use loki97_core::{derive_schedule, KeySchedule};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// LOKI97 CLI.
#[derive(Parser)]
#[command(name = "loki97", version, author, about = "LOKI97 block cipher CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random key and print it as uppercase hex.
    Keygen {
        /// Key size in bits.
        #[arg(long, default_value_t = 256)]
        bits: usize,
        /// Optional RNG seed for reproducible keys.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt 16-byte blocks from a file or a hex string.
    Enc {
        /// Key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Message as hex; result is printed to stdout.
        #[arg(long, value_name = "HEX", conflicts_with_all = ["input", "output"])]
        hex: Option<String>,
        /// Input file (must be a multiple of 16 bytes).
        #[arg(long, value_name = "FILE", requires = "output")]
        input: Option<PathBuf>,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE", requires = "input")]
        output: Option<PathBuf>,
    },
    /// Decrypt 16-byte blocks from a file or a hex string.
    Dec {
        /// Key as 32, 48, or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext as hex; result is printed to stdout.
        #[arg(long, value_name = "HEX", conflicts_with_all = ["input", "output"])]
        hex: Option<String>,
        /// Input file (ciphertext, must be a multiple of 16 bytes).
        #[arg(long, value_name = "FILE", requires = "output")]
        input: Option<PathBuf>,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE", requires = "input")]
        output: Option<PathBuf>,
    },
    /// Run a local demo: random key, encrypt random blocks, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { bits, seed } => cmd_keygen(bits, seed),
        Commands::Enc {
            key_hex,
            hex,
            input,
            output,
        } => cmd_codec(&key_hex, hex.as_deref(), input, output, true),
        Commands::Dec {
            key_hex,
            hex,
            input,
            output,
        } => cmd_codec(&key_hex, hex.as_deref(), input, output, false),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_keygen(bits: usize, seed: Option<u64>) -> Result<()> {
    if !matches!(bits, 128 | 192 | 256) {
        bail!("key size must be 128, 192, or 256 bits");
    }
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; bits / 8];
    rng.fill_bytes(&mut key);
    println!("{}", hex::encode_upper(key));
    Ok(())
}

fn cmd_codec(
    key_hex: &str,
    hex_data: Option<&str>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    encrypting: bool,
) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?;
    let apply = |data: &[u8]| -> Result<Vec<u8>> {
        let transformed = if encrypting {
            loki97_ecb::encrypt(data, &schedule)
        } else {
            loki97_ecb::decrypt(data, &schedule)
        };
        transformed.context("transform message")
    };

    match (hex_data, input, output) {
        (Some(hex_str), _, _) => {
            let data = hex::decode(hex_str.trim()).context("decode message hex")?;
            println!("{}", hex::encode_upper(apply(&data)?));
        }
        (None, Some(input_path), Some(output_path)) => {
            let data = fs::read(&input_path)
                .with_context(|| format!("read {}", input_path.display()))?;
            let transformed = apply(&data)?;
            fs::write(&output_path, transformed)
                .with_context(|| format!("write {}", output_path.display()))?;
        }
        _ => bail!("either --hex or both --input and --output must be given"),
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let schedule = derive_schedule(&key_bytes).context("derive schedule")?;

    let mut message = [0u8; 32];
    rng.fill_bytes(&mut message);
    let plaintext_hex = hex::encode_upper(message);

    let ciphertext = loki97_ecb::encrypt(&message, &schedule).context("encrypt demo message")?;
    let ciphertext_hex = hex::encode_upper(&ciphertext);

    let decrypted = loki97_ecb::decrypt(&ciphertext, &schedule).context("decrypt demo message")?;
    let decrypted_hex = hex::encode_upper(decrypted);

    println!("demo key: {}", hex::encode_upper(key_bytes));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted: {}", decrypted_hex);
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<KeySchedule> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    derive_schedule(&bytes).context("derive schedule")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
