use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "typing-status", about = "Lenient decoder for chat typing-status records")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode typing-status JSON and print its canonical form
    Decode {
        /// Input file (default: stdin)
        path: Option<PathBuf>,

        /// Treat input as JSON Lines, one record per line
        #[arg(long)]
        lines: bool,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Decode {
            path: None,
            lines: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_decode_from_stdin_when_command_is_missing() {
        let cli = Cli::parse_from(["typing-status"]);

        assert!(matches!(
            cli.command_or_default(),
            Command::Decode {
                path: None,
                lines: false
            }
        ));
    }

    #[test]
    fn parses_explicit_decode_command() {
        let cli = Cli::parse_from([
            "typing-status",
            "decode",
            "events.jsonl",
            "--lines",
            "--config",
            "custom.toml",
        ]);

        match cli.command_or_default() {
            Command::Decode { path, lines } => {
                assert_eq!(
                    path.map(|p| p.to_string_lossy().to_string()),
                    Some("events.jsonl".to_owned())
                );
                assert!(lines);
            }
        }
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }
}
