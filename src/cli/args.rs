// CLASSIFICATION: COMMUNITY
// Filename: args.rs v2.0
// Date Modified: 2026-10-17
// Author: Lukas Bower

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ConfigError, TermConfig};
use crate::shell::Theme;

/// Command-line surface of the `termfolio` binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "termfolio",
    about = "Interactive portfolio presented as a terminal",
    version
)]
pub struct Cli {
    /// TOML config file (also TERMFOLIO_CONFIG)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Directory holding the JSON content files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Where downloads are written
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,
    /// Milliseconds per revealed character
    #[arg(long, value_name = "MS")]
    pub typing_speed: Option<u64>,
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,
    #[arg(long)]
    pub prompt: Option<String>,
    /// Seed for `fortune`
    #[arg(long)]
    pub seed: Option<u64>,
    /// Skip the welcome splash
    #[arg(long)]
    pub no_welcome: bool,
    /// Ring the terminal bell for sound cues
    #[arg(long)]
    pub sound: bool,
    /// Run a command non-interactively and print its output; repeatable
    #[arg(long = "exec", value_name = "CMD")]
    pub exec: Vec<String>,
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse()
}

impl Cli {
    /// Flags override whatever the file and environment set.
    pub fn apply(&self, cfg: &mut TermConfig) -> Result<(), ConfigError> {
        if let Some(dir) = &self.data_dir {
            cfg.data_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.download_dir {
            cfg.download_dir = dir.clone();
        }
        if let Some(ms) = self.typing_speed {
            cfg.typing_speed_ms = ms;
        }
        if let Some(theme) = self.theme {
            cfg.theme = theme;
        }
        if let Some(prompt) = &self.prompt {
            cfg.prompt = Some(prompt.clone());
        }
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if self.no_welcome {
            cfg.welcome = false;
        }
        if self.sound {
            cfg.sound = true;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        cfg.validate()
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "termfolio",
            "--theme",
            "light",
            "--typing-speed",
            "0",
            "--no-welcome",
            "--exec",
            "ls",
            "--exec",
            "help",
            "-vv",
        ]);
        let mut cfg = TermConfig::default();
        cli.apply(&mut cfg).unwrap();
        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.typing_speed_ms, 0);
        assert!(!cfg.welcome);
        assert_eq!(cli.exec, ["ls", "help"]);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn absurd_typing_speed_is_rejected() {
        let cli = Cli::parse_from(["termfolio", "--typing-speed", "60000"]);
        assert!(cli.apply(&mut TermConfig::default()).is_err());
    }
}
