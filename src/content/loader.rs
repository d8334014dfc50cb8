//! Loader for the RON tuning file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::TuningFile;

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn load_tuning_file(path: &Path) -> Result<TuningFile, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents).map_err(|message| TuningLoadError {
        file: file_name,
        message,
    })
}

pub(crate) fn parse_tuning(contents: &str) -> Result<TuningFile, String> {
    ron_options()
        .from_str(contents)
        .map_err(|e| format!("Parse error: {}", e))
}
