use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::processor::count_lines;
use crate::stats::Tally;
use ignore::WalkBuilder;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Sequential recursive directory walk.
///
/// Every non-directory entry under `config.root` is counted as a file and
/// handed to the line counter. Directories that cannot be read are skipped
/// with everything beneath them.
///
/// # Errors
/// Returns an error only if the root itself cannot be inspected. Per-entry
/// failures are returned in the `Ok` vector, in visit order.
pub fn walk(config: &Config, tally: &mut Tally) -> Result<Vec<(PathBuf, EngineError)>> {
    let root = &config.root;
    if root.as_os_str().is_empty() {
        return Err(EngineError::Config("empty root path".to_owned()));
    }
    std::fs::symlink_metadata(root).map_err(|e| EngineError::WalkStart {
        path: root.clone(),
        source: e,
    })?;

    let mut errors = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let (path, err) = classify_walk_error(err);
                report(config, &path, &err);
                errors.push((path, err));
                continue;
            }
        };

        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }

        // The type comes from the directory listing; a parent listed but not
        // searchable only fails once the entry itself is stat'ed.
        if let Err(err) = entry.metadata() {
            let (path, err) = classify_walk_error(err);
            report(config, &path, &err);
            errors.push((path, err));
            continue;
        }

        tally.record_file();
        match count_lines(entry.path()) {
            Ok(lines) => tally.add_lines(lines),
            Err(err) => {
                report(config, entry.path(), &err);
                errors.push((entry.path().to_path_buf(), err));
            }
        }
    }

    Ok(errors)
}

/// Split a walker error into the path it concerns and its engine form.
fn classify_walk_error(err: ignore::Error) -> (PathBuf, EngineError) {
    let path = walk_error_path(&err).unwrap_or_default();
    let denied = err
        .io_error()
        .is_some_and(|io| io.kind() == ErrorKind::PermissionDenied);

    if denied {
        let source = err
            .into_io_error()
            .unwrap_or_else(|| ErrorKind::PermissionDenied.into());
        (
            path.clone(),
            EngineError::AccessDenied { path, source },
        )
    } else {
        (path, EngineError::Walk(err))
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}

fn report(config: &Config, path: &Path, err: &EngineError) {
    if !config.debug {
        return;
    }
    match err {
        EngineError::AccessDenied { .. } => {
            let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            log::debug!(
                "Access to folder '{}' was denied, therefore skipping it.",
                shown.display()
            );
        }
        EngineError::NotUtf8 { .. } => {
            log::debug!("Not a UTF-8 file: {}: {err}", path.display());
        }
        EngineError::FileRead { source, .. } => {
            log::debug!("Error reading file {}: {source}\n{err:#?}", path.display());
        }
        _ => log::debug!("Skipping '{}': {err}", path.display()),
    }
}
