use crate::query::error::QueryError;
use crate::types::monthly_record::MonthlyRecord;
use bincode::config::{Configuration, Fixint, LittleEndian};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;

const BINCODE_CONFIG: Configuration<LittleEndian, Fixint> =
    bincode::config::standard().with_fixed_int_encoding();

/// Stores decoded row sets as bincode files, one file per query.
#[derive(Debug, Clone)]
pub struct RowCache {
    dir: PathBuf,
}

impl RowCache {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the cached rows for `file_name`, or `None` if nothing is cached.
    pub async fn get(&self, file_name: &str) -> Result<Option<Vec<MonthlyRecord>>, QueryError> {
        let path = self.dir.join(file_name);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(QueryError::CacheRead(path, e)),
        };

        let rows = tokio::task::spawn_blocking(move || {
            bincode::serde::decode_from_slice::<Vec<MonthlyRecord>, _>(&bytes, BINCODE_CONFIG)
                .map(|(rows, _)| rows)
                .map_err(|e| QueryError::CacheDecode(path, Box::new(e)))
        })
        .await??;
        Ok(Some(rows))
    }

    /// Writes `rows` under `file_name`.
    ///
    /// The data goes to a temporary file in the cache directory which is then
    /// renamed over the target, so readers never see a partial file.
    pub async fn put(&self, file_name: &str, rows: &[MonthlyRecord]) -> Result<(), QueryError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| QueryError::CacheDirCreation(self.dir.clone(), e))?;

        let owned = rows.to_vec();
        let dir = self.dir.clone();
        let path = self.dir.join(file_name);
        let target = path.clone();
        let written = tokio::task::spawn_blocking(move || {
            let bytes = bincode::serde::encode_to_vec(owned, BINCODE_CONFIG)
                .map_err(|e| QueryError::CacheEncode(Box::new(e)))?;

            let mut temp_file = NamedTempFile::new_in(&dir)
                .map_err(|e| QueryError::CacheWrite(target.clone(), e))?;
            temp_file
                .write_all(&bytes)
                .map_err(|e| QueryError::CacheWrite(target.clone(), e))?;
            temp_file
                .flush()
                .map_err(|e| QueryError::CacheWrite(target.clone(), e))?;
            temp_file
                .persist(&target)
                .map_err(|e| QueryError::CacheWrite(target.clone(), e.error))?;
            Ok::<usize, QueryError>(bytes.len())
        })
        .await??;

        info!("Cached {} rows ({} bytes) to {:?}", rows.len(), written, path);
        Ok(())
    }

    /// Deletes every cached row set. A missing cache directory is not an error.
    pub async fn clear(&self) -> Result<(), QueryError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(QueryError::CacheDeletion(self.dir.clone(), e)),
        };
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| QueryError::CacheDeletion(self.dir.clone(), e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "bin") {
                fs::remove_file(&path)
                    .await
                    .map_err(|e| QueryError::CacheDeletion(path.clone(), e))?;
            }
        }
        Ok(())
    }
}
