// CLASSIFICATION: COMMUNITY
// Filename: commands.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Command parsing and dispatch for [`Terminal`].

use log::{debug, info};
use rand::seq::SliceRandom;

use super::effect::{Asset, Cue, Download, Effect};
use super::format;
use super::Terminal;
use crate::fs::{ChangeDir, FsNode};
use crate::modal::{self, ChatSession, Dashboard, HistoryView, Modal, SqlSession};

const SANDWICH: &str = "make me a sandwich";

/// A tokenized command line. `param` values are already lowercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Clear,
    Ls,
    Cd(Option<&'a str>),
    Open(Option<&'a str>),
    Contact,
    Skills,
    Certs,
    Exp,
    Socials,
    Education,
    Stats,
    RunAssistant,
    Sql,
    View(Option<&'a str>),
    Dashboard,
    Analyze,
    Download(Option<&'a str>),
    DownloadCv,
    Fortune,
    Theme,
    History,
    Exit,
    Sandwich,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Map a lowercased command line onto the dispatch table.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let name = words.next()?;
        let param = words.next();
        Some(match name {
            "help" => Command::Help,
            "clear" => Command::Clear,
            "ls" => Command::Ls,
            "cd" => Command::Cd(param),
            "open" => Command::Open(param),
            "contact" => Command::Contact,
            "skills" => Command::Skills,
            "certs" => Command::Certs,
            "exp" => Command::Exp,
            "socials" => Command::Socials,
            "education" => Command::Education,
            "stats" => Command::Stats,
            "run" if param == Some("ai_assistant") => Command::RunAssistant,
            "sql" => Command::Sql,
            "view" => Command::View(param),
            "dashboard" => Command::Dashboard,
            "analyze" => Command::Analyze,
            "download" => Command::Download(param),
            "downloadcv" => Command::DownloadCv,
            "fortune" => Command::Fortune,
            "theme" => Command::Theme,
            "history" => Command::History,
            "exit" => Command::Exit,
            "sudo" if line.contains(SANDWICH) => Command::Sandwich,
            other => Command::Unknown(other),
        })
    }

    /// Whether the output gets a `> <input>` echo line first.
    fn echoes(&self) -> bool {
        !matches!(self, Command::Clear | Command::Open(Some("about.txt")))
    }
}

impl Terminal {
    /// Run one raw input line.
    pub fn execute(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.history.push(raw);
        self.queue(Effect::Sound(Cue::Blip));

        let line = raw.trim().to_lowercase();
        let Some(cmd) = Command::parse(&line) else {
            return;
        };
        debug!("dispatch {:?} at {}", cmd, self.path);

        let mut out = Vec::new();
        if cmd.echoes() {
            out.push(format!("> {}", raw.trim()));
        }
        match cmd {
            Command::Help => out.push(format::HELP.to_string()),
            Command::Clear => {
                self.clear_output();
                return;
            }
            Command::Ls => out.push(self.ls()),
            Command::Cd(target) => out.extend(self.cd(target)),
            Command::Open(Some("about.txt")) => {
                self.start_about();
                return;
            }
            Command::Open(target) => out.extend(self.open(target)),
            Command::Contact => out.extend(format::contact(&self.content.about.contact)),
            Command::Skills => out.extend(format::skills(&self.content.skills)),
            Command::Certs => out.extend(format::certifications(&self.content.certifications)),
            Command::Exp => out.extend(format::experience(&self.content.experience)),
            Command::Socials => out.extend(format::socials(&self.content.about.contact)),
            Command::Education => out.extend(format::education(&self.content.about.education)),
            Command::Stats => out.extend(format::stats(&self.content.stats)),
            Command::RunAssistant => self.open_modal(Modal::AiAssistant(ChatSession::new())),
            Command::Sql => self.open_modal(Modal::SqlSimulator(SqlSession::open())),
            Command::View(target) => out.extend(self.view(target)),
            Command::Dashboard => {
                let projects = self.content.projects.clone();
                self.open_modal(Modal::Dashboard(Dashboard::new(projects)));
            }
            Command::Analyze => self.open_modal(Modal::Text {
                title: modal::ANALYZE_TITLE.to_string(),
                content: modal::ANALYZE_TEXT.to_string(),
            }),
            Command::Download(target) => out.extend(self.download(target)),
            Command::DownloadCv => out.extend(self.download_cv()),
            Command::Fortune => out.push(self.fortune()),
            Command::Theme => {
                self.theme = self.theme.toggled();
                info!("theme now {}", self.theme);
                out.push(format!("Theme switched to {} mode.", self.theme));
            }
            Command::History => self.history_view = Some(HistoryView::new()),
            Command::Exit => {
                info!("exit requested");
                self.exit_requested = true;
            }
            Command::Sandwich => out.push("Okay, boss 😎".to_string()),
            Command::Unknown(name) => out.push(format!("{}: command not found", name)),
        }
        self.append(out);
    }

    fn ls(&self) -> String {
        let names = self.content.filesystem.list(&self.path);
        if names.is_empty() {
            "dir empty".to_string()
        } else {
            names.join(" ")
        }
    }

    fn cd(&mut self, target: Option<&str>) -> Vec<String> {
        let Some(target) = target else {
            return vec!["cd: missing argument".to_string()];
        };
        match self.path.change_dir(&self.content.filesystem, target) {
            ChangeDir::Moved => {
                info!("cwd {}", self.path);
                Vec::new()
            }
            ChangeDir::AtRoot => Vec::new(),
            ChangeDir::NotADirectory => vec![format!("cd: {}: Not a directory", target)],
            ChangeDir::NotFound => vec![format!("cd: {}: No such directory", target)],
        }
    }

    fn open(&self, target: Option<&str>) -> Vec<String> {
        let Some(target) = target else {
            return vec!["open: missing argument".to_string()];
        };
        let leaf = match self.content.filesystem.entry(&self.path, target) {
            None => return vec![format!("open: {}: No such file", target)],
            Some(FsNode::Dir(_)) => return vec![format!("open: {}: Is a directory", target)],
            Some(FsNode::File(leaf)) => leaf.as_str(),
        };
        if self.path.contains("skills") {
            format::skill_category(&self.content.skills, leaf)
        } else if self.path.contains("certifications") {
            match self.content.certification(leaf) {
                Some(cert) => vec![
                    format!("{} - {}", cert.title, cert.issuer),
                    format!("Image: {}", cert.image),
                ],
                None => vec![format!("open: {}: No such certification", target)],
            }
        } else if self.path.contains("experience") {
            match self.content.experience_entry(leaf) {
                Some(job) => vec![
                    format!("{} ({})", job.title, job.period),
                    job.description.clone(),
                ],
                None => vec![format!("open: {}: No such experience entry", target)],
            }
        } else {
            vec![
                format!("cat {}", target),
                "File content placeholder".to_string(),
            ]
        }
    }

    /// Only names listed in the current directory resolve; elsewhere
    /// `view` is not a command at all.
    fn view(&mut self, target: Option<&str>) -> Vec<String> {
        let in_projects = self.path.contains("projects");
        if !in_projects && !self.path.contains("certifications") {
            return vec!["view: command not found".to_string()];
        }
        let Some(target) = target else {
            return vec!["view: missing argument".to_string()];
        };
        let leaf = self
            .content
            .filesystem
            .entry(&self.path, target)
            .and_then(FsNode::leaf_id)
            .map(str::to_string);
        if in_projects {
            match leaf.and_then(|id| self.content.project(&id).cloned()) {
                Some(project) => {
                    self.open_modal(Modal::Chart(project));
                    Vec::new()
                }
                None => vec![format!("view: {}: No such project", target)],
            }
        } else {
            match leaf.and_then(|id| self.content.certification(&id).cloned()) {
                Some(cert) => {
                    self.open_modal(Modal::Image(cert));
                    Vec::new()
                }
                None => vec![format!("view: {}: No such certification", target)],
            }
        }
    }

    fn download(&mut self, target: Option<&str>) -> Vec<String> {
        let Some(target) = target else {
            return vec![
                "download: missing argument (e.g., download cv.pdf in home/documents)".to_string(),
            ];
        };
        let leaf = self
            .content
            .filesystem
            .entry(&self.path, target)
            .and_then(FsNode::leaf_id)
            .map(str::to_string);
        if self.path.contains("documents") {
            if target == "cv.pdf" {
                return self.download_cv();
            }
            return vec![format!("download: {}: No such file", target)];
        }
        if !self.path.contains("certifications") {
            return vec!["download: not in documents or certifications directory".to_string()];
        }
        let cert = leaf.and_then(|id| self.content.certification(&id).cloned());
        match cert {
            Some(cert) => {
                let file_name = format!("{}.png", cert.title);
                info!("queued download of {}", file_name);
                self.queue(Effect::Download(Download {
                    file_name: file_name.clone(),
                    asset: Asset::Path(cert.image),
                }));
                self.queue(Effect::Sound(Cue::Blip));
                vec![
                    format!("Downloading {}...", target),
                    format!("Download complete: {}", file_name),
                ]
            }
            None => vec![format!("download: {}: No such file", target)],
        }
    }

    fn download_cv(&mut self) -> Vec<String> {
        let file_name = self.content.cv_download_name();
        info!("queued download of {}", file_name);
        self.queue(Effect::Download(Download {
            file_name: file_name.clone(),
            asset: Asset::Cv,
        }));
        self.queue(Effect::Sound(Cue::Blip));
        vec![
            "Downloading CV...".to_string(),
            format!("Download complete: {}", file_name),
        ]
    }

    fn fortune(&mut self) -> String {
        self.content
            .quotes
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| "fortune: no quotes available".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_takes_first_param_only() {
        assert_eq!(Command::parse("cd projects extra"), Some(Command::Cd(Some("projects"))));
        assert_eq!(Command::parse("open"), Some(Command::Open(None)));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn sudo_needs_the_magic_words() {
        assert_eq!(
            Command::parse("sudo please make me a sandwich"),
            Some(Command::Sandwich)
        );
        assert_eq!(Command::parse("sudo ls"), Some(Command::Unknown("sudo")));
    }

    #[test]
    fn run_only_knows_the_assistant() {
        assert_eq!(Command::parse("run ai_assistant"), Some(Command::RunAssistant));
        assert_eq!(Command::parse("run doom"), Some(Command::Unknown("run")));
        assert_eq!(Command::parse("run"), Some(Command::Unknown("run")));
    }

    #[test]
    fn echo_rules() {
        assert!(Command::Help.echoes());
        assert!(Command::Open(Some("notes.txt")).echoes());
        assert!(!Command::Open(Some("about.txt")).echoes());
        assert!(!Command::Clear.echoes());
        assert!(Command::Unknown("xyz").echoes());
    }
}
