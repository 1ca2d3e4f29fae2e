//! Universal converter
//!
//! Some routes can be handed to an external any-to-any converter, which keeps far more
//! of the source structure than the flat-text pipeline. The converter is optional: when
//! it is missing or fails, the dispatcher falls back to its built-in adapters.
//!
//! The only implementation shipped is [`PandocConverter`], which shells out to the
//! `pandoc` executable:
//!
//! ```text
//! pandoc <source> --from markdown --to docx --output <destination>
//! pandoc <source> --from markdown --output <destination.pdf> [--pdf-engine=<engine>]
//! ```
//!
//! Pandoc picks PDF output from the `.pdf` extension of the output path, so the staged
//! destination always keeps the target's extension.

use crate::error::{ConvertError, Result};
use crate::format::DocumentKind;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// An external converter able to turn a source file straight into a target file.
pub trait UniversalConverter: Send + Sync {
    fn name(&self) -> &str;

    /// Convert `source` (of kind `from`) into `destination` as `to`.
    fn convert(
        &self,
        source: &Path,
        from: DocumentKind,
        destination: &Path,
        to: DocumentKind,
    ) -> Result<()>;
}

/// Whether and how to look for the universal converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversalOptions {
    pub enabled: bool,
    /// Program name or path of the pandoc executable
    pub program: String,
    /// Passed as `--pdf-engine` for PDF output
    pub pdf_engine: Option<String>,
}

impl Default for UniversalOptions {
    fn default() -> Self {
        UniversalOptions {
            enabled: true,
            program: "pandoc".to_string(),
            pdf_engine: None,
        }
    }
}

impl UniversalOptions {
    /// Locate the converter, if enabled and installed.
    pub fn discover(&self) -> Option<PandocConverter> {
        if !self.enabled {
            return None;
        }
        match which::which(&self.program) {
            Ok(path) => {
                debug!(program = %path.display(), "found universal converter");
                Some(PandocConverter::new(path).with_pdf_engine(self.pdf_engine.clone()))
            }
            Err(err) => {
                debug!(program = %self.program, error = %err, "universal converter not found");
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PandocConverter {
    program: PathBuf,
    pdf_engine: Option<String>,
}

impl PandocConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        PandocConverter {
            program: program.into(),
            pdf_engine: None,
        }
    }

    pub fn with_pdf_engine(mut self, engine: Option<String>) -> Self {
        self.pdf_engine = engine;
        self
    }

    /// Command line arguments for one conversion.
    pub fn arguments(
        &self,
        source: &Path,
        from: DocumentKind,
        destination: &Path,
        to: DocumentKind,
    ) -> Result<Vec<OsString>> {
        let reader = pandoc_reader(from)
            .ok_or_else(|| ConvertError::unsupported(from.extension(), to))?;

        let mut args: Vec<OsString> = vec![
            source.as_os_str().to_os_string(),
            "--from".into(),
            reader.into(),
        ];
        match to {
            DocumentKind::DocumentModel => {
                args.push("--to".into());
                args.push("docx".into());
            }
            DocumentKind::Pdf => {
                if let Some(engine) = &self.pdf_engine {
                    args.push(format!("--pdf-engine={engine}").into());
                }
            }
            _ => return Err(ConvertError::unsupported(from.extension(), to)),
        }
        args.push("--output".into());
        args.push(destination.as_os_str().to_os_string());
        Ok(args)
    }
}

impl UniversalConverter for PandocConverter {
    fn name(&self) -> &str {
        "pandoc"
    }

    fn convert(
        &self,
        source: &Path,
        from: DocumentKind,
        destination: &Path,
        to: DocumentKind,
    ) -> Result<()> {
        let args = self.arguments(source, from, destination, to)?;
        debug!(program = %self.program.display(), ?args, "running universal converter");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|err| ConvertError::io(&self.program, err))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::Universal(format!(
                "pandoc exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

fn pandoc_reader(kind: DocumentKind) -> Option<&'static str> {
    match kind {
        DocumentKind::Markdown => Some("markdown"),
        DocumentKind::PlainText => Some("plain"),
        DocumentKind::DocumentModel => Some("docx"),
        DocumentKind::Pdf => None,
    }
}
