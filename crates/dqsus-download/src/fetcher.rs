//! The dataset fetcher.
//!
//! Streams dataset files into the raw-data cache. Each transfer writes a
//! `.part` file that is renamed into place when complete, so final paths
//! never hold partial data. A failed transfer leaves its `.part` behind;
//! retries truncate and overwrite it.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use dqsus_core::DatasetFile;
use futures_util::StreamExt;
use tracing::{debug, info};
use url::Url;

use crate::config::FetchConfig;
use crate::error::{FetchError, FetchResult};
use crate::progress::{ProgressFn, ProgressThrottle};

/// A dataset file paired with the URL it should be fetched from.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// File to fetch.
    pub file: DatasetFile,
    /// Resolved download URL.
    pub url: Url,
}

impl FetchRequest {
    /// Pair a dataset file with its download URL.
    #[must_use]
    pub const fn new(file: DatasetFile, url: Url) -> Self {
        Self { file, url }
    }
}

/// Outcome of fetching one dataset file.
#[derive(Debug, Clone)]
pub struct FetchedDataset {
    /// File that was fetched.
    pub file: DatasetFile,
    /// Where the file lives in the cache.
    pub path: PathBuf,
    /// Size on disk in bytes.
    pub bytes: u64,
    /// Whether the cached copy was reused instead of downloaded.
    pub cached: bool,
}

/// Streams dataset files into the per-disease cache layout.
pub struct DatasetFetcher {
    http: reqwest::Client,
    config: FetchConfig,
    progress: Option<ProgressFn>,
}

impl DatasetFetcher {
    /// Build a fetcher over the given cache configuration.
    #[must_use]
    pub fn new(config: FetchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            progress: None,
        }
    }

    /// Attach a progress callback, reported per file at most once per
    /// configured interval (plus a final report on completion).
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressFn) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Cache path a dataset file lands at (`<raw_dir>/<CODE>/<name>`).
    #[must_use]
    pub fn destination(&self, file: &DatasetFile) -> PathBuf {
        self.config
            .raw_dir
            .join(file.disease.code())
            .join(&file.name)
    }

    /// Fetch a batch of files, stopping at the first failure.
    ///
    /// Files already in the cache are skipped unless the configuration
    /// forces a re-download. An empty batch is Ok.
    pub async fn fetch(&self, requests: &[FetchRequest]) -> FetchResult<Vec<FetchedDataset>> {
        let mut fetched = Vec::with_capacity(requests.len());
        for request in requests {
            fetched.push(self.fetch_one(request).await?);
        }
        Ok(fetched)
    }

    async fn fetch_one(&self, request: &FetchRequest) -> FetchResult<FetchedDataset> {
        let name = &request.file.name;
        let dest = self.destination(&request.file);

        if !self.config.force && dest.is_file() {
            let bytes = fs::metadata(&dest).map(|meta| meta.len()).unwrap_or(0);
            debug!(file = %name, "already cached, skipping");
            return Ok(FetchedDataset {
                file: request.file.clone(),
                path: dest,
                bytes,
                cached: true,
            });
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| FetchError::Io {
                file: name.clone(),
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let response = self
            .http
            .get(request.url.as_str())
            .send()
            .await
            .map_err(|source| FetchError::Network {
                file: name.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed {
                file: name.clone(),
                status: status.as_u16(),
            });
        }

        let total = response.content_length();
        let part = partial_path(&dest);
        let mut out = File::create(&part).map_err(|source| FetchError::Io {
            file: name.clone(),
            path: part.clone(),
            source,
        })?;

        let mut downloaded: u64 = 0;
        let mut throttle = ProgressThrottle::new(self.config.progress_interval);
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| FetchError::Network {
                file: name.clone(),
                source,
            })?;
            out.write_all(&chunk).map_err(|source| FetchError::Io {
                file: name.clone(),
                path: part.clone(),
                source,
            })?;
            downloaded += chunk.len() as u64;

            if let Some(progress) = &self.progress
                && throttle.should_emit()
            {
                progress(&request.file, downloaded, total);
            }
        }

        out.flush().map_err(|source| FetchError::Io {
            file: name.clone(),
            path: part.clone(),
            source,
        })?;
        drop(out);

        fs::rename(&part, &dest).map_err(|source| FetchError::Io {
            file: name.clone(),
            path: dest.clone(),
            source,
        })?;

        if let Some(progress) = &self.progress {
            progress(&request.file, downloaded, total);
        }
        info!(file = %name, bytes = downloaded, "downloaded");

        Ok(FetchedDataset {
            file: request.file.clone(),
            path: dest,
            bytes: downloaded,
            cached: false,
        })
    }
}

/// The temp path a transfer streams into before the final rename.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map_or_else(Default::default, std::ffi::OsStr::to_os_string);
    name.push(".part");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use dqsus_core::Disease;
    use tempfile::tempdir;

    use super::*;

    fn unreachable_request(disease: Disease, year: u16) -> FetchRequest {
        let file = DatasetFile::new(disease, year);
        let url = Url::parse(&format!("http://127.0.0.1:9/{}", file.name)).unwrap();
        FetchRequest::new(file, url)
    }

    #[test]
    fn destination_groups_files_by_disease_code() {
        let fetcher = DatasetFetcher::new(FetchConfig::new("/data/raw"));
        let dest = fetcher.destination(&DatasetFile::new(Disease::Chikungunya, 2022));
        assert_eq!(dest, PathBuf::from("/data/raw/CHIK/CHIKBR22.csv"));
    }

    #[test]
    fn partial_path_appends_part_suffix() {
        let part = partial_path(Path::new("/data/raw/DENG/DENGBR23.csv"));
        assert_eq!(part, PathBuf::from("/data/raw/DENG/DENGBR23.csv.part"));
    }

    #[tokio::test]
    async fn empty_batch_is_ok() {
        let temp = tempdir().unwrap();
        let fetcher = DatasetFetcher::new(FetchConfig::new(temp.path()));
        let fetched = fetcher.fetch(&[]).await.unwrap();
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn cached_files_are_skipped_without_network() {
        let temp = tempdir().unwrap();
        let request = unreachable_request(Disease::Dengue, 2023);

        let dest = temp.path().join("DENG").join(&request.file.name);
        fs::create_dir_all(dest.parent().unwrap()).unwrap();
        fs::write(&dest, b"NU_NOTIFIC;DT_NOTIFIC\n1;2023-01-02\n").unwrap();

        let reports = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&reports);
        let fetcher = DatasetFetcher::new(FetchConfig::new(temp.path()))
            .with_progress(Box::new(move |_, _, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));

        let fetched = fetcher.fetch(std::slice::from_ref(&request)).await.unwrap();

        assert_eq!(fetched.len(), 1);
        assert!(fetched[0].cached);
        assert_eq!(fetched[0].path, dest);
        assert_eq!(fetched[0].bytes, fs::metadata(&dest).unwrap().len());
        assert_eq!(reports.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn force_refetches_and_keeps_the_old_copy_on_failure() {
        let temp = tempdir().unwrap();
        let request = unreachable_request(Disease::Dengue, 2023);

        let dest = temp.path().join("DENG").join(&request.file.name);
        fs::create_dir_all(dest.parent().unwrap()).unwrap();
        fs::write(&dest, b"stale").unwrap();

        let fetcher = DatasetFetcher::new(FetchConfig::new(temp.path()).with_force(true));

        let result = fetcher.fetch(std::slice::from_ref(&request)).await;

        assert!(result.is_err());
        assert_eq!(fs::read(&dest).unwrap(), b"stale");
    }

    #[tokio::test]
    async fn fetch_failure_names_the_file() {
        let temp = tempdir().unwrap();
        let request = unreachable_request(Disease::Zika, 2016);
        let fetcher = DatasetFetcher::new(FetchConfig::new(temp.path()));

        let error = fetcher
            .fetch(std::slice::from_ref(&request))
            .await
            .unwrap_err();

        assert!(error.to_string().contains("ZIKABR16.csv"));
        assert!(!fetcher.destination(&request.file).exists());
    }
}
