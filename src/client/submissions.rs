//! Submission API methods for [`JotformClient`].
//!
//! Answer maps passed to the write methods use the composite-field encoding
//! described in [`crate::endpoints::form_params`]: keys like `4_first`
//! become `submission[4][first]`, plain keys become `submission[<key>]`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::client::JotformClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ListOptions;

impl JotformClient {
    /// List submissions across all forms of this account.
    pub fn get_submissions(&self, options: &ListOptions) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/submissions",
            &options.to_query(),
        )
    }

    /// List submissions of a single form.
    pub fn get_form_submissions(&self, form_id: u64, options: &ListOptions) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/submissions"),
            &options.to_query(),
        )
    }

    /// Get a single submission's answers and metadata.
    pub fn get_submission(&self, submission_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/submission/{submission_id}"),
            &[],
        )
    }

    /// Submit answers to a form; returns the new submission's ID and URL.
    pub fn create_form_submission(
        &self,
        form_id: u64,
        submission: &BTreeMap<String, String>,
    ) -> Result<Value> {
        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/submissions"),
            &endpoints::submission_params(submission),
        )
    }

    /// Submit multiple submissions from pre-formatted data.
    pub fn create_form_submissions(&self, form_id: u64, submissions: &str) -> Result<Value> {
        endpoints::put_raw(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/submissions"),
            submissions,
        )
    }

    /// Edit a submission's answers.
    pub fn edit_submission(
        &self,
        submission_id: u64,
        submission: &BTreeMap<String, String>,
    ) -> Result<Value> {
        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/submission/{submission_id}"),
            &endpoints::submission_params(submission),
        )
    }

    /// Delete a submission.
    pub fn delete_submission(&self, submission_id: u64) -> Result<Value> {
        endpoints::delete(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/submission/{submission_id}"),
            &[],
        )
    }
}
