//! Collects the source units named on the command line.
//!
//! Files named directly are always scanned. Directories are walked in file
//! name order and contribute only files with a recognised JavaScript or
//! TypeScript extension, skipping dependency and hidden directories.
//!
//! Files that are not UTF-8 text are returned as `UndecodableUnit`s so the
//! caller can report them and carry on with the rest of the batch.

use std::fs;
use std::path::Path;
use std::string::FromUtf8Error;

use starterlint::{SourceUnit, SupportedLanguage};
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::AppError;

const SOURCES_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::sources");

/// Directory names never descended into.
const EXCLUDED_DIRS: [&str; 2] = ["node_modules", "bower_components"];

/// A unit read from disk together with the language implied by its path.
#[derive(Debug)]
pub(crate) struct LoadedUnit {
    pub(crate) unit: SourceUnit,
    pub(crate) language: Option<SupportedLanguage>,
}

/// A file whose bytes could not be decoded as UTF-8.
#[derive(Debug, Error)]
#[error("{path}: not valid UTF-8 text ({source})")]
pub(crate) struct UndecodableUnit {
    pub(crate) path: String,
    source: FromUtf8Error,
}

/// One file found while collecting sources.
#[derive(Debug)]
pub(crate) enum LoadedSource {
    Decoded(LoadedUnit),
    Undecodable(UndecodableUnit),
}

/// Reads every unit reachable from `paths`, in argument order.
///
/// Walk and read failures abort collection; undecodable files do not.
pub(crate) fn load_units<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<LoadedSource>, AppError> {
    let mut units = Vec::new();
    for root in paths {
        collect_from(root.as_ref(), &mut units)?;
    }
    Ok(units)
}

fn collect_from(root: &Path, units: &mut Vec<LoadedSource>) -> Result<(), AppError> {
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry));

    for walked in walker {
        let entry = walked.map_err(|source| AppError::Walk {
            path: root.display().to_string(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let language = SupportedLanguage::from_path(path);
        if entry.depth() > 0 && language.is_none() {
            continue;
        }

        debug!(target: SOURCES_TARGET, path = %path.display(), "reading unit");
        let id = path.display().to_string();
        let bytes = fs::read(path).map_err(|source| AppError::ReadSource {
            path: id.clone(),
            source,
        })?;
        units.push(match String::from_utf8(bytes) {
            Ok(text) => LoadedSource::Decoded(LoadedUnit {
                unit: SourceUnit::new(id, text),
                language,
            }),
            Err(source) => LoadedSource::Undecodable(UndecodableUnit { path: id, source }),
        });
    }
    Ok(())
}

fn is_excluded(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry.file_name().to_str().is_some_and(|name| {
        EXCLUDED_DIRS.contains(&name) || (name.starts_with('.') && name.len() > 1)
    })
}
