// CLASSIFICATION: COMMUNITY
// Filename: complete.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Tab completion and the clickable command bar.

/// Candidates in completion order; the first prefix match wins.
pub const COMPLETIONS: &[&str] = &[
    "help", "cd", "ls", "open", "clear", "run", "view", "dashboard", "analyze", "history",
    "exit", "contact", "skills", "certs", "exp", "socials", "education", "stats", "download",
    "downloadCV", "theme", "sql",
];

/// Commands shown in the bar above the output.
pub const COMMAND_BAR: &[&str] = &[
    "help", "cd", "ls", "open", "clear", "run", "view", "dashboard", "analyze", "history",
    "contact", "skills", "certs", "exp", "socials", "education", "stats", "download",
    "downloadCV", "theme", "sql",
];

/// Complete `input` to the first command its lowercased form prefixes.
/// Candidates keep their case, so `downloadCV` is never reached past `download`.
pub fn complete(input: &str) -> Option<&'static str> {
    let needle = input.to_lowercase();
    COMPLETIONS.iter().copied().find(|c| c.starts_with(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_prefix_match_wins() {
        assert_eq!(complete("d"), Some("dashboard"));
        assert_eq!(complete("DOWN"), Some("download"));
        assert_eq!(complete("e"), Some("exit"));
        assert_eq!(complete("download"), Some("download"));
        assert_eq!(complete("downloadc"), None);
        assert_eq!(complete("downloadCV"), None);
        assert_eq!(complete("zz"), None);
    }
}
