//! Interactive game flow: prints commitments, reads the dice choice, shows the verdict.

use anyhow::Result;
use fair_dice_core::{CommitmentRecord, GameResult, Party, Session};
use rand::{CryptoRng, Rng, RngCore};
use std::io::{BufRead, Write};

/// A line typed at the dice menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Dice(usize),
    Help,
    Exit,
    Invalid,
}

impl MenuChoice {
    fn parse(input: &str, dice_count: usize) -> Self {
        let input = input.trim().to_uppercase();
        match input.as_str() {
            "X" => MenuChoice::Exit,
            "H" => MenuChoice::Help,
            _ => match input.parse::<usize>() {
                Ok(index) if index < dice_count => MenuChoice::Dice(index),
                _ => MenuChoice::Invalid,
            },
        }
    }
}

/// Run one session against `input`/`out`.
///
/// Returns `None` when the player exits before choosing dice.
pub fn play<R, O, I, W>(
    session: &mut Session<R, O>,
    input: &mut I,
    out: &mut W,
) -> Result<Option<GameResult>>
where
    R: RngCore + CryptoRng,
    O: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\nDetermining who goes first using HMAC...")?;
    let first = session.start()?;
    print_commitment(out, "Commit Proof", "Reveal Key", &first.commitment)?;
    match first.mover {
        Party::User => writeln!(out, "You start!\n")?,
        Party::Opponent => writeln!(out, "Computer starts!\n")?,
    }

    let index = loop {
        show_menu(out, session)?;
        write!(out, "Your choice: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break None;
        }
        match MenuChoice::parse(&line, session.dice_sets().len()) {
            MenuChoice::Dice(index) => break Some(index),
            MenuChoice::Help => show_help(out)?,
            MenuChoice::Exit => break None,
            MenuChoice::Invalid => writeln!(out, "Invalid choice. Try again.")?,
        }
    };
    let Some(index) = index else {
        session.abort()?;
        writeln!(out, "Exiting. Bye!")?;
        return Ok(None);
    };

    let (user_dice, opponent_dice) = session.choose_dice(index)?;
    writeln!(out, "\nYou chose [{}]. Computer chose [{}].", user_dice, opponent_dice)?;

    let (user_roll, opponent_roll) = session.resolve_rolls()?;
    writeln!(out, "\nYour roll: {}", user_roll.die_face_value)?;
    print_commitment(out, "Proof", "Key", &user_roll.commitment)?;
    writeln!(out, "\nComputer roll: {}", opponent_roll.die_face_value)?;
    print_commitment(out, "Proof", "Key", &opponent_roll.commitment)?;

    let result = session.declare()?;
    writeln!(out, "\n{}", result.verdict)?;
    Ok(Some(result))
}

/// Proof line first, key line second
fn print_commitment<W: Write, T>(
    out: &mut W,
    proof_label: &str,
    key_label: &str,
    record: &CommitmentRecord<T>,
) -> Result<()> {
    writeln!(out, "{}: {}", proof_label, record.proof)?;
    writeln!(out, "{}: {}", key_label, record.reveal_key)?;
    Ok(())
}

fn show_menu<R, O, W>(out: &mut W, session: &Session<R, O>) -> Result<()>
where
    R: RngCore + CryptoRng,
    O: Rng,
    W: Write,
{
    writeln!(out, "\nDice options:")?;
    for (i, dice) in session.dice_sets().iter().enumerate() {
        writeln!(out, "  [{}] {}", i, dice)?;
    }
    writeln!(out, "  [H] Help\n  [X] Exit")?;
    Ok(())
}

fn show_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nInstructions:")?;
    writeln!(out, "- Select a dice using its number.")?;
    writeln!(out, "- Rolls are proven fair with HMAC.")?;
    writeln!(out, "- Highest roll wins.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_dice_core::{
        parse_dice_sets, FairnessEngine, GameResolver, SessionPhase, DEFAULT_MIN_DICE,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn session(seed: u64) -> Session<StdRng, StdRng> {
        let dice = parse_dice_sets(&["1,2,3", "4,5,6", "7,8,9"], DEFAULT_MIN_DICE).unwrap();
        let resolver = GameResolver::new(
            FairnessEngine::with_entropy(StdRng::seed_from_u64(seed)),
            StdRng::seed_from_u64(seed + 100),
        );
        Session::new(resolver, dice)
    }

    fn run(seed: u64, typed: &str) -> (Option<GameResult>, String, SessionPhase) {
        let mut session = session(seed);
        let mut input = Cursor::new(typed.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = play(&mut session, &mut input, &mut out).unwrap();
        (result, String::from_utf8(out).unwrap(), session.phase())
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" x\n", 3), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("h", 3), MenuChoice::Help);
        assert_eq!(MenuChoice::parse("2\n", 3), MenuChoice::Dice(2));
        assert_eq!(MenuChoice::parse("3", 3), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("-1", 3), MenuChoice::Invalid);
        assert_eq!(MenuChoice::parse("", 3), MenuChoice::Invalid);
    }

    #[test]
    fn test_full_game_output() {
        let (result, out, phase) = run(1, "0\n");
        let result = result.unwrap();

        assert_eq!(phase, SessionPhase::VerdictDeclared);
        assert!(result.verify());
        assert!(out.contains(&format!("Your roll: {}", result.user_outcome.die_face_value)));
        assert!(out.contains(result.verdict.as_str()));

        let proof = out.find("Commit Proof:").unwrap();
        let key = out.find("Reveal Key:").unwrap();
        assert!(proof < key);
    }

    #[test]
    fn test_help_then_invalid_then_choice() {
        let (result, out, _) = run(2, "h\n9\n1\n");

        assert!(result.is_some());
        assert!(out.contains("Highest roll wins."));
        assert!(out.contains("Invalid choice. Try again."));
    }

    #[test]
    fn test_exit_gives_no_verdict() {
        let (result, out, phase) = run(3, "X\n");

        assert!(result.is_none());
        assert_eq!(phase, SessionPhase::Aborted);
        assert!(out.contains("Bye!"));
        assert!(!out.contains("Your roll"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (result, _, phase) = run(4, "");

        assert!(result.is_none());
        assert_eq!(phase, SessionPhase::Aborted);
    }
}
