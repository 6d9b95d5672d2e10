use clap::{Args, Parser, Subcommand};
use fair_dice_core::DEFAULT_MIN_DICE;

#[derive(Parser, Debug)]
#[command(name = "fair-dice")]
#[command(about = "Dice game against the computer with HMAC-proven fair rolls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game with the given dice sets
    Play(PlayArgs),
    /// Check a revealed value against its proof and key
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Dice sets as comma-separated faces, e.g. 2,2,4,4,9,9.
    /// Put `--` before the dice if one starts with a negative face.
    #[arg(required = true)]
    pub dice: Vec<String>,

    /// Minimum number of dice sets
    #[arg(long, env = "FAIR_DICE_MIN_DICE", default_value_t = DEFAULT_MIN_DICE)]
    pub min_dice: usize,

    /// Print the full session transcript as JSON after the verdict
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Revealed value: a die face, or 0/1 for the starter draw
    #[arg(long, allow_hyphen_values = true)]
    pub value: i64,

    /// Proof printed before the reveal (64 hex chars)
    #[arg(long)]
    pub proof: String,

    /// Revealed key (64 hex chars)
    #[arg(long)]
    pub key: String,
}

/// Settings for one game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub dice: Vec<String>,
    pub min_dice: usize,
    pub json_transcript: bool,
}

impl From<PlayArgs> for GameConfig {
    fn from(args: PlayArgs) -> Self {
        Self {
            dice: args.dice,
            min_dice: args.min_dice,
            json_transcript: args.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_args() {
        let cli = Cli::parse_from(["fair-dice", "play", "--json", "1,2", "3,-4", "5"]);
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        let config = GameConfig::from(args);

        assert_eq!(config.dice, vec!["1,2", "3,-4", "5"]);
        assert!(config.json_transcript);
    }

    #[test]
    fn test_flags_after_dice() {
        let cli = Cli::parse_from([
            "fair-dice", "play", "1,2", "3,4", "--min-dice", "2", "--json",
        ]);
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };

        assert_eq!(args.dice, vec!["1,2", "3,4"]);
        assert_eq!(args.min_dice, 2);
        assert!(args.json);
    }

    #[test]
    fn test_negative_leading_face_after_separator() {
        let cli = Cli::parse_from(["fair-dice", "play", "--json", "--", "-1,2", "3,4", "5,6"]);
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };

        assert_eq!(args.dice, vec!["-1,2", "3,4", "5,6"]);
        assert!(args.json);
    }

    #[test]
    fn test_verify_args() {
        let cli = Cli::parse_from([
            "fair-dice", "verify", "--value", "-3", "--proof", "ab", "--key", "cd",
        ]);
        let Command::Verify(args) = cli.command else {
            panic!("expected verify");
        };

        assert_eq!(args.value, -3);
        assert_eq!(args.proof, "ab");
    }

    #[test]
    fn test_play_requires_dice() {
        assert!(Cli::try_parse_from(["fair-dice", "play"]).is_err());
    }
}
