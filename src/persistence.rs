// File: src/persistence.rs
use crate::core::types::PinyinDict;
use crate::error::{DictError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `dict` as pretty-printed JSON (2-space indent). The file is built
/// next to `path` and renamed over it, so readers never see a partial file.
pub fn save_to_disk(dict: &PinyinDict, path: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| DictError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, dict).map_err(|e| {
            if e.is_io() {
                write_err(e.into())
            } else {
                DictError::Serialize(e)
            }
        })?;
        writer.flush().map_err(write_err)?;
    }

    temp_file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<PinyinDict> {
    let file = File::open(path).map_err(|source| DictError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let dict: PinyinDict = serde_json::from_reader(reader)?;
    Ok(dict)
}
