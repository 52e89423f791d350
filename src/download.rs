// CLASSIFICATION: COMMUNITY
// Filename: download.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Writes queued download requests into a target directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::content::Content;
use crate::shell::{Asset, Download};

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("asset {0} is not available in this content set")]
    MissingAsset(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Downloader {
    target_dir: PathBuf,
}

impl Downloader {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Save `req` and return the written path.
    pub fn save(&self, req: &Download, content: &Content) -> Result<PathBuf, DownloadError> {
        let bytes = match &req.asset {
            Asset::Cv => content
                .cv
                .clone()
                .ok_or_else(|| DownloadError::MissingAsset("CV".to_string()))?,
            Asset::Path(rel) => match content.assets.get(rel) {
                Some(bytes) => bytes.clone(),
                None => read_asset(content, rel)?,
            },
        };
        fs::create_dir_all(&self.target_dir).map_err(|source| DownloadError::Io {
            path: self.target_dir.clone(),
            source,
        })?;
        let dest = self.target_dir.join(sanitize(&req.file_name));
        fs::write(&dest, bytes).map_err(|source| DownloadError::Io {
            path: dest.clone(),
            source,
        })?;
        info!("saved download {}", dest.display());
        Ok(dest)
    }
}

/// Read an asset path relative to the content's data directory.
fn read_asset(content: &Content, rel: &str) -> Result<Vec<u8>, DownloadError> {
    let root = content
        .asset_root
        .as_ref()
        .ok_or_else(|| DownloadError::MissingAsset(rel.to_string()))?;
    let src = root.join(rel.trim_start_matches('/'));
    fs::read(&src).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => DownloadError::MissingAsset(rel.to_string()),
        _ => DownloadError::Io { path: src, source },
    })
}

/// Keep file names to a single path component.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect();
    match cleaned.trim_matches('.') {
        "" => "download".to_string(),
        _ => cleaned,
    }
}
