//! Fair Dice command-line game
//!
//! Plays one game against the computer, printing every commitment before its
//! reveal, and verifies revealed values after the fact.

mod config;
mod game;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Cli, Command, GameConfig, VerifyArgs};
use fair_dice_core::{crypto, parse_dice_sets, GameResolver, Proof, RevealKey, Session};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so the game transcript on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play(args) => run_game(args.into()),
        Command::Verify(args) => run_verify(args),
    }
}

fn run_game(config: GameConfig) -> Result<ExitCode> {
    let dice_sets = parse_dice_sets(&config.dice[..], config.min_dice)?;
    let mut session = Session::new(GameResolver::from_os(), dice_sets);
    info!(session = %session.id(), dice = config.dice.len(), "starting game");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let result = game::play(&mut session, &mut input, &mut out)?;

    if let (Some(result), true) = (result, config.json_transcript) {
        let transcript =
            serde_json::to_string_pretty(&result).context("serializing session transcript")?;
        writeln!(out, "\n{}", transcript)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_verify(args: VerifyArgs) -> Result<ExitCode> {
    let mut out = io::stdout().lock();
    if verify_reveal(&args, &mut out)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Check a revealed value against its proof and key, reporting to `out`
fn verify_reveal<W: Write>(args: &VerifyArgs, out: &mut W) -> Result<bool> {
    let proof = Proof::from_hex(&args.proof).context("proof must be 64 hex characters")?;
    let key = RevealKey::from_hex(&args.key).context("key must be 64 hex characters")?;

    let valid = crypto::verify(&args.value, &proof, &key);
    if valid {
        writeln!(out, "valid: {} is committed by proof {}", args.value, proof)?;
    } else {
        writeln!(
            out,
            "INVALID: {} does not match proof {} under this key",
            args.value, proof
        )?;
    }
    Ok(valid)
}
