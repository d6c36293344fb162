//! Terminal progress bars for dataset downloads.

use std::sync::Mutex;

use dqsus_core::DatasetFile;
use dqsus_download::ProgressFn;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress callback rendering one terminal bar per dataset file.
///
/// Files are fetched sequentially, so a single bar is kept alive at a
/// time; when the reported file changes the previous bar is finished
/// before a new one starts.
#[must_use]
pub fn fetch_progress() -> ProgressFn {
    let state: Mutex<Option<(String, ProgressBar)>> = Mutex::new(None);
    Box::new(move |file, downloaded, total| {
        let mut guard = state.lock().unwrap();

        if guard.as_ref().is_some_and(|(name, _)| name != &file.name)
            && let Some((_, stale)) = guard.take()
        {
            stale.finish();
        }

        let (_, bar) = guard.get_or_insert_with(|| (file.name.clone(), transfer_bar(file, total)));
        if let Some(total) = total {
            bar.set_length(total);
        }
        bar.set_position(downloaded);

        if total.is_some_and(|total| downloaded >= total)
            && let Some((_, done)) = guard.take()
        {
            done.finish();
        }
    })
}

fn transfer_bar(file: &DatasetFile, total: Option<u64>) -> ProgressBar {
    let bar = match total {
        Some(total) if total > 0 => {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
                    .unwrap()
                    .progress_chars("█▓░"),
            );
            bar
        }
        // The mirror omitted a content length; fall back to a byte spinner.
        _ => {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {bytes} {msg}")
                    .unwrap(),
            );
            bar
        }
    };
    bar.set_message(file.name.clone());
    bar
}

#[cfg(test)]
mod tests {
    use dqsus_core::Disease;

    use super::*;

    #[test]
    fn callback_survives_a_full_transfer() {
        let progress = fetch_progress();
        let file = DatasetFile::new(Disease::Dengue, 2023);

        progress(&file, 0, Some(100));
        progress(&file, 50, Some(100));
        progress(&file, 100, Some(100));
    }

    #[test]
    fn callback_handles_unknown_lengths_and_file_changes() {
        let progress = fetch_progress();
        let first = DatasetFile::new(Disease::Zika, 2016);
        let second = DatasetFile::new(Disease::Chikungunya, 2022);

        progress(&first, 1024, None);
        progress(&second, 0, Some(10));
        progress(&second, 10, Some(10));
    }
}
