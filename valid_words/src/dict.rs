use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};


pub const DEFAULT_DICT_DIR: &str = "/usr/share/dict";

#[derive(Debug, Error)]
pub enum DictError {
    #[error("cannot list dictionaries in {}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("cannot read dictionary {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("no dictionaries found in {}", .0.display())]
    NoDictionaries(PathBuf),
    #[error("input closed before a dictionary was selected")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Files in `dir`, sorted by name.
pub fn list_dicts(dir: &Path) -> Result<Vec<PathBuf>, DictError> {
    let read_dir_err = |source: io::Error| DictError::ReadDir {
        path: dir.to_owned(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if files.is_empty() {
        return Err(DictError::NoDictionaries(dir.to_owned()));
    }
    debug!(dir = %dir.display(), count = files.len(), "listed dictionaries");
    Ok(files)
}

/// Print a numbered menu of `files` and read choices from `input` until a valid
/// one is entered.
pub fn select_dict<R: BufRead, W: Write>(
    files: &[PathBuf],
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf, DictError> {
    writeln!(out, "Select a file from the following list:")?;
    for (i, file) in files.iter().enumerate() {
        let name = file.file_name().unwrap_or(file.as_os_str());
        writeln!(out, "\t{}. {}", i + 1, name.to_string_lossy())?;
    }
    out.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(DictError::InputClosed);
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=files.len()).contains(&n) => return Ok(files[n - 1].clone()),
            Ok(_) => writeln!(out, "Number must be between 1 and {}", files.len())?,
            Err(_) => writeln!(out, "Input must be an int")?,
        }
        out.flush()?;
    }
}

/// One word per line, trimmed; blank lines are skipped.
pub fn parse_words(contents: &str) -> HashSet<String> {
    contents
        .par_lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn load_dict(path: &Path) -> Result<HashSet<String>, DictError> {
    let contents = fs::read_to_string(path).map_err(|source| DictError::Read {
        path: path.to_owned(),
        source,
    })?;

    let words = parse_words(&contents);
    info!(path = %path.display(), words = words.len(), "loaded dictionary");
    Ok(words)
}
