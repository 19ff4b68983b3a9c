use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::quiz::ExportPayload;
use crate::utils::time::epoch_millis;

pub const EXPORT_FILENAME_PREFIX: &str = "gratitude-result-";

pub struct ExportService;

impl ExportService {
    pub fn filename(at: DateTime<Utc>) -> String {
        format!("{}{}.json", EXPORT_FILENAME_PREFIX, epoch_millis(at))
    }

    /// Pretty-printed with two-space indentation.
    pub fn render(payload: &ExportPayload) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(payload)?)
    }
}
