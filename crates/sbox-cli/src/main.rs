//! Command-line interface for the S-box laboratory.

#![forbid(unsafe_code)]

mod catalog;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use aes_core::{decrypt_block, decrypt_bulk, encrypt_block, encrypt_bulk, npcr, shannon_entropy, uaci};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sbox_core::{SBox, SboxSource};
use sbox_metrics::analyze;

use crate::catalog::BuiltinCatalog;

/// S-box laboratory CLI.
#[derive(Parser)]
#[command(
    name = "sboxlab",
    version,
    author,
    about = "Construct affine S-boxes, score them, and run them through AES-128"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the working S-box comes from. Defaults to the KAES catalog entry
/// when no flag is given.
#[derive(Args)]
struct SboxArgs {
    /// Catalog id of a named construction matrix.
    #[arg(long, value_name = "ID", conflicts_with_all = ["matrix_file", "sbox_file"])]
    id: Option<String>,
    /// JSON file holding an 8x8 binary matrix as nested 0/1 rows.
    #[arg(long, value_name = "FILE", conflicts_with = "sbox_file")]
    matrix_file: Option<PathBuf>,
    /// JSON file holding an explicit 16x16 S-box table.
    #[arg(long, value_name = "FILE")]
    sbox_file: Option<PathBuf>,
    /// Affine constant as two hex characters, used with --matrix-file.
    #[arg(long, value_name = "HEX", default_value = "63")]
    constant: String,
}

impl SboxArgs {
    fn to_source(&self) -> Result<SboxSource> {
        if let Some(path) = &self.sbox_file {
            let rows = read_json_rows(path)?;
            return Ok(SboxSource::Explicit(rows));
        }
        if let Some(path) = &self.matrix_file {
            let rows = read_json_rows(path)?;
            let constant = u8::from_str_radix(self.constant.trim(), 16)
                .context("parse --constant as two hex characters")?;
            return Ok(SboxSource::FromMatrix { rows, constant });
        }
        let id = self.id.clone().unwrap_or_else(|| "KAES".to_string());
        Ok(SboxSource::Named(id))
    }

    fn resolve(&self) -> Result<SBox> {
        let catalog = BuiltinCatalog::load()?;
        let source = self.to_source()?;
        source
            .resolve(&catalog)
            .context("resolve S-box source")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the named matrices compiled into the binary.
    Catalog,
    /// Resolve an S-box source and report whether it is usable.
    Validate {
        #[command(flatten)]
        sbox: SboxArgs,
    },
    /// Construct an S-box and print (or save) its 16x16 table.
    Construct {
        #[command(flatten)]
        sbox: SboxArgs,
        /// Write the JSON table to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Run the full cryptanalytic metric suite over an S-box.
    Analyze {
        #[command(flatten)]
        sbox: SboxArgs,
        /// Emit the report as pretty-printed JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Encrypt one 16-byte block given as 32 hex characters.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        #[command(flatten)]
        sbox: SboxArgs,
    },
    /// Decrypt one 16-byte block given as 32 hex characters.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        #[command(flatten)]
        sbox: SboxArgs,
    },
    /// Encrypt a whole file in ECB mode with PKCS#7 padding.
    EncFile {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file of arbitrary length.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        #[command(flatten)]
        sbox: SboxArgs,
    },
    /// Score encryption quality of a ciphertext against its source.
    Quality {
        /// Original plaintext file.
        #[arg(long, value_name = "FILE")]
        original: PathBuf,
        /// Encrypted file to score.
        #[arg(long, value_name = "FILE")]
        encrypted: PathBuf,
    },
    /// Decrypt a file produced by enc-file.
    DecFile {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input ciphertext file (multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        #[command(flatten)]
        sbox: SboxArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Catalog => cmd_catalog(),
        Commands::Validate { sbox } => cmd_validate(&sbox),
        Commands::Construct { sbox, out } => cmd_construct(&sbox, out.as_deref()),
        Commands::Analyze { sbox, json } => cmd_analyze(&sbox, json),
        Commands::Enc {
            key_hex,
            block_hex,
            sbox,
        } => cmd_block(&key_hex, &block_hex, &sbox, Direction::Encrypt),
        Commands::Dec {
            key_hex,
            block_hex,
            sbox,
        } => cmd_block(&key_hex, &block_hex, &sbox, Direction::Decrypt),
        Commands::EncFile {
            key_hex,
            input,
            output,
            sbox,
        } => cmd_file(&key_hex, &input, &output, &sbox, Direction::Encrypt),
        Commands::Quality {
            original,
            encrypted,
        } => cmd_quality(&original, &encrypted),
        Commands::DecFile {
            key_hex,
            input,
            output,
            sbox,
        } => cmd_file(&key_hex, &input, &output, &sbox, Direction::Decrypt),
    }
}

enum Direction {
    Encrypt,
    Decrypt,
}

fn cmd_catalog() -> Result<()> {
    let catalog = BuiltinCatalog::load()?;
    for entry in catalog.entries() {
        let status = if entry.is_placeholder() {
            "placeholder"
        } else {
            "ready"
        };
        match &entry.author {
            Some(author) => println!("{:<12} {:<12} {} ({author})", entry.id, status, entry.name),
            None => println!("{:<12} {:<12} {}", entry.id, status, entry.name),
        }
    }
    Ok(())
}

fn cmd_validate(sbox_args: &SboxArgs) -> Result<()> {
    let sbox = sbox_args.resolve()?;
    println!("ok: bijective 8-bit S-box");
    println!("{}", fixed_points_line(&sbox));
    Ok(())
}

fn cmd_construct(sbox_args: &SboxArgs, out: Option<&std::path::Path>) -> Result<()> {
    let sbox = sbox_args.resolve()?;
    let rows = sbox.to_rows();
    let json = serde_json::to_string_pretty(&rows).context("serialize table")?;
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        }
        None => println!("{json}"),
    }
    eprintln!("{}", fixed_points_line(&sbox));
    Ok(())
}

fn cmd_analyze(sbox_args: &SboxArgs, json: bool) -> Result<()> {
    let sbox = sbox_args.resolve()?;
    let start = Instant::now();
    let report = analyze(&sbox);
    let elapsed = start.elapsed();
    if json {
        let envelope = serde_json::json!({
            "metrics": report,
            "fixed_points": sbox.fixed_points(),
            "elapsed_ms": elapsed.as_millis() as u64,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&envelope).context("serialize report")?
        );
    } else {
        println!("nonlinearity:            {}", report.nonlinearity);
        println!("sac:                     {:.6}", report.sac);
        println!("bic_nl:                  {}", report.bic_nl);
        println!("bic_sac:                 {:.6}", report.bic_sac);
        println!("lap:                     {:.6}", report.lap);
        println!("dap:                     {:.6}", report.dap);
        println!("differential_uniformity: {}", report.differential_uniformity);
        println!("algebraic_degree:        {}", report.algebraic_degree);
        println!("transparency_order:      {:.6}", report.transparency_order);
        println!("correlation_immunity:    {}", report.correlation_immunity);
        println!("{}", fixed_points_line(&sbox));
    }
    eprintln!("analysis took {} ms", elapsed.as_millis());
    Ok(())
}

fn fixed_points_line(sbox: &SBox) -> String {
    let fixed = sbox.fixed_points();
    if fixed.is_empty() {
        "fixed points: none".to_string()
    } else {
        let list: Vec<String> = fixed.iter().map(|x| format!("{x:02x}")).collect();
        format!("fixed points: {}", list.join(" "))
    }
}

fn cmd_quality(original: &PathBuf, encrypted: &PathBuf) -> Result<()> {
    let plain = fs::read(original).with_context(|| format!("read {}", original.display()))?;
    let cipher = fs::read(encrypted).with_context(|| format!("read {}", encrypted.display()))?;
    if cipher.len() < plain.len() {
        bail!("encrypted file is shorter than the original");
    }
    // Ciphertext carries trailing padding; the change-rate scores compare
    // over the original's length.
    println!("entropy: {:.6}", shannon_entropy(&cipher));
    println!("npcr:    {:.4} %", npcr(&plain, &cipher[..plain.len()])?);
    println!("uaci:    {:.4} %", uaci(&plain, &cipher[..plain.len()])?);
    Ok(())
}

fn cmd_block(
    key_hex: &str,
    block_hex: &str,
    sbox_args: &SboxArgs,
    direction: Direction,
) -> Result<()> {
    let sbox = sbox_args.resolve()?;
    let key = parse_hex_16(key_hex).context("parse --key-hex")?;
    let block = parse_hex_16(block_hex).context("parse --block-hex")?;
    let out = match direction {
        Direction::Encrypt => encrypt_block(&block, &key, &sbox)?,
        Direction::Decrypt => decrypt_block(&block, &key, &sbox)?,
    };
    println!("{}", hex::encode(out));
    Ok(())
}

fn cmd_file(
    key_hex: &str,
    input: &PathBuf,
    output: &PathBuf,
    sbox_args: &SboxArgs,
    direction: Direction,
) -> Result<()> {
    let sbox = sbox_args.resolve()?;
    let key = parse_hex_16(key_hex).context("parse --key-hex")?;
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let out = match direction {
        Direction::Encrypt => encrypt_bulk(&data, &key, &sbox)?,
        Direction::Decrypt => decrypt_bulk(&data, &key, &sbox)?,
    };
    fs::write(output, out).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn parse_hex_16(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).context("decode hex")?;
    if bytes.len() != 16 {
        bail!("expected 16 bytes (32 hex characters), got {}", bytes.len());
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn read_json_rows(path: &std::path::Path) -> Result<Vec<Vec<u8>>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {} as nested rows", path.display()))
}
