// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Static portfolio content.
//!
//! Every JSON document is read once at startup and never mutated. The default
//! set is compiled into the binary from `data/`; a data directory holding the
//! same file names replaces it wholesale.

pub mod ordered;
pub mod types;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::fs::FsTree;
pub use ordered::OrderedMap;
pub use types::{
    About, ChartKind, Certification, Contact, Education, Experience, Project, QaPair, Skills,
    StatValue, Stats,
};

pub const FILESYSTEM_FILE: &str = "filesystem.json";
pub const ABOUT_FILE: &str = "about.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const CERTIFICATIONS_FILE: &str = "certifications.json";
pub const EXPERIENCE_FILE: &str = "experience.json";
pub const STATS_FILE: &str = "stats.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const QUOTES_FILE: &str = "quotes.json";
pub const ASSISTANT_FILE: &str = "ai_assistant.json";
pub const CV_FILE: &str = "CV.pdf";

/// Certificate images compiled into the built-in set, keyed by image path.
const BUILTIN_ASSETS: [(&str, &[u8]); 3] = [
    (
        "/assets/certs/aws_cloud.png",
        include_bytes!("../../data/assets/certs/aws_cloud.png"),
    ),
    (
        "/assets/certs/tensorflow.png",
        include_bytes!("../../data/assets/certs/tensorflow.png"),
    ),
    (
        "/assets/certs/sql_advanced.png",
        include_bytes!("../../data/assets/certs/sql_advanced.png"),
    ),
];

/// Errors produced while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The full read-only content set.
#[derive(Debug, Clone)]
pub struct Content {
    pub filesystem: FsTree,
    pub about: About,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
    pub experience: Vec<Experience>,
    pub stats: Stats,
    pub projects: Vec<Project>,
    pub quotes: Vec<String>,
    pub assistant: Vec<QaPair>,
    /// In-memory CV served by `downloadcv`.
    pub cv: Option<Vec<u8>>,
    /// Embedded asset bytes keyed by image path; checked before `asset_root`.
    pub assets: BTreeMap<String, Vec<u8>>,
    /// Directory relative asset paths (certificate images) resolve against.
    pub asset_root: Option<PathBuf>,
}

fn parse<T: DeserializeOwned>(name: &str, text: &str) -> Result<T, ContentError> {
    serde_json::from_str(text).map_err(|source| ContentError::Parse {
        name: name.to_string(),
        source,
    })
}

impl Content {
    /// Content compiled in from the repository's `data/` directory.
    pub fn builtin() -> Result<Self, ContentError> {
        Ok(Self {
            filesystem: parse(FILESYSTEM_FILE, include_str!("../../data/filesystem.json"))?,
            about: parse(ABOUT_FILE, include_str!("../../data/about.json"))?,
            skills: parse(SKILLS_FILE, include_str!("../../data/skills.json"))?,
            certifications: parse(
                CERTIFICATIONS_FILE,
                include_str!("../../data/certifications.json"),
            )?,
            experience: parse(EXPERIENCE_FILE, include_str!("../../data/experience.json"))?,
            stats: parse(STATS_FILE, include_str!("../../data/stats.json"))?,
            projects: parse(PROJECTS_FILE, include_str!("../../data/projects.json"))?,
            quotes: parse(QUOTES_FILE, include_str!("../../data/quotes.json"))?,
            assistant: parse(ASSISTANT_FILE, include_str!("../../data/ai_assistant.json"))?,
            cv: Some(include_bytes!("../../data/CV.pdf").to_vec()),
            assets: BUILTIN_ASSETS
                .iter()
                .map(|(path, bytes)| (path.to_string(), bytes.to_vec()))
                .collect(),
            asset_root: None,
        })
    }

    /// Load every content file from `dir`. `CV.pdf` is optional.
    pub fn load_dir(dir: &Path) -> Result<Self, ContentError> {
        info!("loading content from {}", dir.display());
        let read = |name: &str| -> Result<String, ContentError> {
            let path = dir.join(name);
            debug!("reading {}", path.display());
            fs::read_to_string(&path).map_err(|source| ContentError::Io { path, source })
        };
        let cv_path = dir.join(CV_FILE);
        let cv = match fs::read(&cv_path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(ContentError::Io {
                    path: cv_path,
                    source,
                })
            }
        };
        Ok(Self {
            filesystem: parse(FILESYSTEM_FILE, &read(FILESYSTEM_FILE)?)?,
            about: parse(ABOUT_FILE, &read(ABOUT_FILE)?)?,
            skills: parse(SKILLS_FILE, &read(SKILLS_FILE)?)?,
            certifications: parse(CERTIFICATIONS_FILE, &read(CERTIFICATIONS_FILE)?)?,
            experience: parse(EXPERIENCE_FILE, &read(EXPERIENCE_FILE)?)?,
            stats: parse(STATS_FILE, &read(STATS_FILE)?)?,
            projects: parse(PROJECTS_FILE, &read(PROJECTS_FILE)?)?,
            quotes: parse(QUOTES_FILE, &read(QUOTES_FILE)?)?,
            assistant: parse(ASSISTANT_FILE, &read(ASSISTANT_FILE)?)?,
            cv,
            assets: BTreeMap::new(),
            asset_root: Some(dir.to_path_buf()),
        })
    }

    pub fn certification(&self, id: &str) -> Option<&Certification> {
        self.certifications.iter().find(|c| c.id == id)
    }

    pub fn experience_entry(&self, id: &str) -> Option<&Experience> {
        self.experience.iter().find(|e| e.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Text revealed by the `open about.txt` sequence.
    pub fn about_text(&self) -> String {
        let about = &self.about;
        let education = about
            .education
            .iter()
            .map(|e| format!("{} - {} ({})", e.degree, e.institution, e.period))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{}\n{}\n\nEducation:\n{}\n\nTarget Roles:\n{}",
            about.name,
            about.bio,
            education,
            about.target_roles.join("\n")
        )
    }

    /// Opening lines of the output log.
    pub fn greeting(&self) -> Vec<String> {
        let intro = if self.about.title.is_empty() {
            format!("Hi, I'm {}.", self.about.name)
        } else {
            format!("Hi, I'm {}, a {}.", self.about.name, self.about.title)
        };
        vec![
            intro,
            "Welcome to my interactive portfolio terminal!".to_string(),
            "Type 'help' to see available commands.".to_string(),
        ]
    }

    /// File name the CV is saved under, e.g. `Alex_Kimani_CV.pdf`.
    pub fn cv_download_name(&self) -> String {
        let stem = self
            .about
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        if stem.is_empty() {
            "CV.pdf".to_string()
        } else {
            format!("{}_CV.pdf", stem)
        }
    }
}
