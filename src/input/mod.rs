use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::SpinalAlignment;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse measurements from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

const STDIN_LABEL: &str = "<stdin>";

/// Loads measurements from a JSON file, or from stdin when `path` is `None`.
pub fn load_alignment(path: Option<&Path>) -> Result<SpinalAlignment, InputError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let alignment = parse_alignment(BufReader::new(file), path)?;
            info!(
                path = %path.display(),
                relative = alignment.relative_angles.len(),
                absolute = alignment.absolute_angles.len(),
                "loaded measurements"
            );
            Ok(alignment)
        }
        None => {
            let stdin = io::stdin();
            parse_alignment(stdin.lock(), Path::new(STDIN_LABEL))
        }
    }
}

pub fn parse_alignment<R: Read>(reader: R, origin: &Path) -> Result<SpinalAlignment, InputError> {
    serde_json::from_reader(reader).map_err(|source| InputError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
