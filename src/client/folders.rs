//! Folder API methods for [`JotformClient`].

use serde_json::Value;

use crate::client::JotformClient;
use crate::endpoints;
use crate::error::Result;

impl JotformClient {
    /// List form folders for this account.
    pub fn get_folders(&self) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/folders",
            &[],
        )
    }

    /// Get folder details: contained forms, color and so on.
    pub fn get_folder(&self, folder_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/folder/{folder_id}"),
            &[],
        )
    }
}
