//! Form question API methods for [`JotformClient`].

use std::collections::BTreeMap;

use serde_json::Value;

use crate::client::JotformClient;
use crate::endpoints;
use crate::error::Result;

impl JotformClient {
    /// List all questions on a form.
    pub fn get_form_questions(&self, form_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/questions"),
            &[],
        )
    }

    /// Get a single question's properties, e.g. required and validation.
    pub fn get_form_question(&self, form_id: u64, question_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/question/{question_id}"),
            &[],
        )
    }

    /// Add a question to a form; returns the new question's properties.
    pub fn create_form_question(
        &self,
        form_id: u64,
        question: &BTreeMap<String, String>,
    ) -> Result<Value> {
        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/questions"),
            &endpoints::question_params(question),
        )
    }

    /// Add multiple questions from pre-formatted data.
    pub fn create_form_questions(&self, form_id: u64, questions: &str) -> Result<Value> {
        endpoints::put_raw(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/questions"),
            questions,
        )
    }

    /// Add or edit a question's properties; returns the edited properties.
    pub fn edit_form_question(
        &self,
        form_id: u64,
        question_id: u64,
        properties: &BTreeMap<String, String>,
    ) -> Result<Value> {
        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/question/{question_id}"),
            &endpoints::question_params(properties),
        )
    }

    /// Delete a question from a form.
    pub fn delete_form_question(&self, form_id: u64, question_id: u64) -> Result<Value> {
        endpoints::delete(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/question/{question_id}"),
            &[],
        )
    }
}
