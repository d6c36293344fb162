//! Listing discovery and URL resolution.

use dqsus_core::{DatasetFile, Disease};
use url::Url;

use crate::error::{SinanError, SinanResult};
use crate::http::HttpBackend;
use crate::parsing::{availability_sentence, datasets_from_listing, parse_listing, years_of};
use crate::url::{build_dataset_url, build_listing_url};

use super::SinanClient;

impl<B: HttpBackend> SinanClient<B> {
    /// List the dataset files published for a disease.
    ///
    /// Listing entries without a year marker are skipped; the result is
    /// sorted by year.
    pub async fn list_files(&self, disease: Disease) -> SinanResult<Vec<DatasetFile>> {
        let url = build_listing_url(&self.config, disease);
        let json: serde_json::Value = self.backend.get_json(&url).await?;
        let entries = parse_listing(&json)?;
        Ok(datasets_from_listing(disease, &entries))
    }

    /// Distinct years published for a disease, ascending.
    pub async fn available_years(&self, disease: Disease) -> SinanResult<Vec<u16>> {
        let files = self.list_files(disease).await?;
        Ok(years_of(&files))
    }

    /// Find the dataset file for a disease/year pair.
    pub async fn find_file(&self, disease: Disease, year: u16) -> SinanResult<DatasetFile> {
        let files = self.list_files(disease).await?;
        files
            .into_iter()
            .find(|file| file.year == year)
            .ok_or(SinanError::DatasetNotFound { disease, year })
    }

    /// Download URL for a dataset file.
    #[must_use]
    pub fn file_url(&self, file: &DatasetFile) -> Url {
        build_dataset_url(&self.config, file)
    }

    /// Human sentence describing which years are published for a disease.
    pub async fn describe_available_years(&self, disease: Disease) -> SinanResult<String> {
        let years = self.available_years(disease).await?;
        Ok(availability_sentence(disease, &years))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_config;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    fn dengue_listing() -> CannedResponse {
        CannedResponse {
            json: json!([
                {"name": "DENGBR23.csv", "size": 52_428_800},
                {"name": "DENGBR21.csv", "size": 41_943_040},
                {"name": "DENGBR22.csv", "size": 47_185_920},
                {"name": "LEIAME.txt", "size": 1024}
            ]),
        }
    }

    #[tokio::test]
    async fn list_files_sorts_and_skips_non_datasets() {
        let backend = FakeBackend::new().with_response("DENG/files.json", dengue_listing());
        let client = SinanClient::with_backend(test_config(), backend);

        let files = client.list_files(Disease::Dengue).await.unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(files[0].name, "DENGBR21.csv");
        assert_eq!(files[2].year, 2023);
    }

    #[tokio::test]
    async fn available_years_are_ascending() {
        let backend = FakeBackend::new().with_response("DENG/files.json", dengue_listing());
        let client = SinanClient::with_backend(test_config(), backend);

        let years = client.available_years(Disease::Dengue).await.unwrap();

        assert_eq!(years, vec![2021, 2022, 2023]);
    }

    #[tokio::test]
    async fn find_file_returns_the_listed_entry() {
        let backend = FakeBackend::new().with_response("DENG/files.json", dengue_listing());
        let client = SinanClient::with_backend(test_config(), backend);

        let file = client.find_file(Disease::Dengue, 2022).await.unwrap();

        assert_eq!(file.name, "DENGBR22.csv");
        assert_eq!(file.disease, Disease::Dengue);
    }

    #[tokio::test]
    async fn find_file_for_missing_year_is_typed() {
        let backend = FakeBackend::new().with_response("DENG/files.json", dengue_listing());
        let client = SinanClient::with_backend(test_config(), backend);

        let result = client.find_file(Disease::Dengue, 2009).await;

        assert!(matches!(
            result,
            Err(SinanError::DatasetNotFound {
                disease: Disease::Dengue,
                year: 2009
            })
        ));
    }

    #[tokio::test]
    async fn file_url_points_into_the_disease_directory() {
        let backend = FakeBackend::new();
        let client = SinanClient::with_backend(test_config(), backend);

        let file = DatasetFile::new(Disease::Zika, 2016);
        let url = client.file_url(&file);

        assert!(url.as_str().ends_with("/ZIKA/ZIKABR16.csv"));
    }

    #[tokio::test]
    async fn describe_available_years_builds_the_sentence() {
        let backend = FakeBackend::new().with_response("DENG/files.json", dengue_listing());
        let client = SinanClient::with_backend(test_config(), backend);

        let sentence = client
            .describe_available_years(Disease::Dengue)
            .await
            .unwrap();

        assert_eq!(
            sentence,
            "The available data for dengue is from the years: 2021, 2022, 2023."
        );
    }

    #[tokio::test]
    async fn describe_available_years_with_empty_listing() {
        let backend = FakeBackend::new().with_response(
            "ZIKA/files.json",
            CannedResponse { json: json!([]) },
        );
        let client = SinanClient::with_backend(test_config(), backend);

        let sentence = client
            .describe_available_years(Disease::Zika)
            .await
            .unwrap();

        assert_eq!(sentence, "No data is currently available for zika.");
    }
}
