//! Report API methods for [`JotformClient`].

use serde_json::Value;

use crate::client::JotformClient;
use crate::endpoints;
use crate::error::Result;

impl JotformClient {
    /// List report URLs for this account (Excel, CSV, charts, HTML tables).
    pub fn get_reports(&self) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/reports",
            &[],
        )
    }

    /// Get report details such as fields and status.
    pub fn get_report(&self, report_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/report/{report_id}"),
            &[],
        )
    }
}
