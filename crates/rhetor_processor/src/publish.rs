/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Writing fragment pages to disk and handing them to a viewer.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use rhetor_core::Fragment;
use tempfile::Builder;
use tracing::{debug, info};

use crate::render::page::render_page;
use crate::ProcessorError;

#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub fragments: &'a [Fragment],
    pub title: Option<&'a str>,
    pub output: Option<PathBuf>,
    pub open: bool,
}

impl<'a> PublishSpec<'a> {
    pub fn new(fragments: &'a [Fragment]) -> Self {
        Self {
            fragments,
            title: None,
            output: None,
            open: false,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn open_in_viewer(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub path: PathBuf,
    pub opened: bool,
}

/// Render the page, write it out and optionally open it.
///
/// Without an explicit output path the page goes to a temporary `.html`
/// file that is kept after the process exits so the viewer can read it.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, ProcessorError> {
    let html = render_page(spec.fragments, spec.title);
    let path = match spec.output {
        Some(path) => {
            fs::write(&path, html.as_bytes())?;
            path
        }
        None => write_temp_page(&html)?,
    };
    info!(path = %path.display(), fragments = spec.fragments.len(), "page written");

    if spec.open {
        open_in_viewer(&path)?;
    }
    Ok(PublishResult {
        path,
        opened: spec.open,
    })
}

fn write_temp_page(html: &str) -> Result<PathBuf, ProcessorError> {
    let file = Builder::new()
        .prefix("rhetor-")
        .suffix(".html")
        .tempfile()?;
    fs::write(file.path(), html.as_bytes())?;
    let (_, path) = file.keep().map_err(|e| ProcessorError::Io(e.error))?;
    Ok(path)
}

/// Launch the platform's default handler for a file.
pub fn open_in_viewer(path: &Path) -> Result<(), ProcessorError> {
    let target = path.display().to_string();
    let mut command = viewer_command(&target)?;
    debug!(?command, "launching viewer");
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

fn viewer_command(target: &str) -> Result<Command, ProcessorError> {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", target]);
        return Ok(cmd);
    }
    let candidates: &[&str] = if cfg!(target_os = "macos") {
        &["open"]
    } else {
        &["xdg-open", "gio", "sensible-browser"]
    };
    for name in candidates {
        if let Ok(program) = which::which(name) {
            let mut cmd = Command::new(program);
            if *name == "gio" {
                cmd.arg("open");
            }
            cmd.arg(target);
            return Ok(cmd);
        }
    }
    Err(ProcessorError::NoViewer(target.to_string()))
}
