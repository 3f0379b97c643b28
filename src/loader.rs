//! Resolves a city to its trip log and reads it into a [`Dataset`].

use std::io::Read;

use flate2::read::GzDecoder;
use tracing::info;

use crate::error::LoadError;
use crate::infra::CityCatalog;
use crate::model::Dataset;
use crate::parser::parse_trips;
use crate::services::trip_source::TripSource;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads the full, unfiltered trip log for `city`.
///
/// # Errors
///
/// [`LoadError::NotFound`] when the catalog does not know the city or the
/// source has no file for it; parse errors (see [`LoadError::is_parse`]) when
/// the file lacks a required column or holds malformed required values.
#[tracing::instrument(skip(catalog, source), fields(source = %source.describe()))]
pub async fn load_city<S>(
    catalog: &CityCatalog,
    source: &S,
    city: &str,
) -> Result<Dataset, LoadError>
where
    S: TripSource + ?Sized,
{
    let file_name = catalog
        .file_for(city)
        .ok_or_else(|| LoadError::not_found(city))?;

    let bytes = source
        .fetch(file_name)
        .await?
        .ok_or_else(|| LoadError::not_found(city))?;

    let dataset = decode(bytes)?;
    info!(
        file = file_name,
        rows = dataset.len(),
        gender = dataset.columns().gender.is_present(),
        birth_year = dataset.columns().birth_year.is_present(),
        "Trip data loaded"
    );
    Ok(dataset)
}

/// Parses raw file contents, gunzipping them first when they carry the gzip
/// magic bytes.
pub fn decode(bytes: Vec<u8>) -> Result<Dataset, LoadError> {
    let input: Box<dyn Read> = if bytes.starts_with(&GZIP_MAGIC) {
        Box::new(GzDecoder::new(std::io::Cursor::new(bytes)))
    } else {
        Box::new(std::io::Cursor::new(bytes))
    };
    parse_trips(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::collections::HashMap;
    use std::io::Write;

    const CSV: &str = "Start Time,End Time,Start Station,End Station,User Type\n\
                       2017-01-01 00:07:57,2017-01-01 00:20:53,A,B,Subscriber\n";

    struct MemorySource(HashMap<&'static str, Vec<u8>>);

    #[async_trait]
    impl TripSource for MemorySource {
        async fn fetch(&self, file_name: &str) -> Result<Option<Vec<u8>>, LoadError> {
            Ok(self.0.get(file_name).cloned())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[tokio::test]
    async fn test_load_known_city() {
        let source = MemorySource(HashMap::from([("chicago.csv", CSV.as_bytes().to_vec())]));
        let dataset = load_city(&CityCatalog::builtin(), &source, "Chicago")
            .await
            .unwrap();

        assert_eq!(dataset.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_city_not_found() {
        let source = MemorySource(HashMap::new());
        let err = load_city(&CityCatalog::builtin(), &source, "Atlantis")
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::NotFound { city } if city == "Atlantis"));
    }

    #[tokio::test]
    async fn test_missing_file_not_found() {
        let source = MemorySource(HashMap::new());
        let err = load_city(&CityCatalog::builtin(), &source, "Washington")
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_column_is_parse_error() {
        let source = MemorySource(HashMap::from([(
            "washington.csv",
            b"Start Time,End Time\n".to_vec(),
        )]));
        let err = load_city(&CityCatalog::builtin(), &source, "washington")
            .await
            .unwrap_err();

        assert!(err.is_parse());
    }

    #[test]
    fn test_decode_gzip() {
        let dataset = decode(gzip(CSV.as_bytes())).unwrap();
        assert_eq!(dataset.records()[0].start_station, "A");
    }
}
