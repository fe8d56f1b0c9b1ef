#![forbid(unsafe_code)]

use crate::error::Error;
use engine::{Prediction, RaceResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One user's prediction for a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub user: String,
    pub prediction: Prediction,
    /// Points already computed by an external service. Overrides the
    /// configured base-points service when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_points: Option<f64>,
}

/// Every prediction made for one race, with the official result once it is
/// published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceSheet {
    pub grand_prix: String,
    #[serde(default)]
    pub result: Option<RaceResult>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl RaceSheet {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        serde_json::from_reader(reader).map_err(|source| Error::Json {
            path: path.to_owned(),
            source,
        })
    }

    pub fn is_decided(&self) -> bool {
        self.result.is_some()
    }

    /// Check the published result, if any, with [`RaceResult::validate`].
    pub fn validate(&self) -> Result<(), Error> {
        match &self.result {
            Some(result) => result.validate().map_err(|source| Error::InvalidResult {
                grand_prix: self.grand_prix.clone(),
                source,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_sheet_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "grandPrix": "Monza",
                "result": {{"positions": {{"1": "VER", "2": "HAM", "3": "LEC"}}}},
                "entries": [
                    {{"user": "ana", "prediction": {{"positions": {{"1": "VER"}}}}}},
                    {{"user": "ben", "prediction": {{}}, "basePoints": 12}}
                ]
            }}"#
        )
        .unwrap();

        let sheet = RaceSheet::load(file.path()).unwrap();

        assert_eq!(sheet.grand_prix, "Monza");
        assert!(sheet.is_decided());
        assert_eq!(sheet.entries.len(), 2);
        assert_eq!(sheet.entries[0].base_points, None);
        assert_eq!(sheet.entries[1].base_points, Some(12.0));
        assert!(sheet.validate().is_ok());
    }

    #[test]
    fn undecided_sheet_has_no_result() {
        let sheet: RaceSheet =
            serde_json::from_str(r#"{"grandPrix": "Imola", "entries": []}"#).unwrap();
        assert!(!sheet.is_decided());
        assert!(sheet.validate().is_ok());
    }

    #[test]
    fn malformed_sheet_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"grandPrix": 3}}"#).unwrap();

        let err = RaceSheet::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json { ref path, .. } if path == file.path()));
    }

    #[test]
    fn invalid_result_is_reported() {
        let sheet: RaceSheet = serde_json::from_str(
            r#"{"grandPrix": "Spa", "result": {"events": {"SAFETY_CAR": "sometimes"}}}"#,
        )
        .unwrap();
        assert!(matches!(
            sheet.validate(),
            Err(Error::InvalidResult { ref grand_prix, .. }) if grand_prix == "Spa"
        ));
    }
}
