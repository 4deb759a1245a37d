//! Form API methods for [`JotformClient`]: form CRUD, webhooks, files and
//! properties.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::client::JotformClient;
use crate::endpoints;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::{FormDefinition, ListOptions};

impl JotformClient {
    /// List forms for this account.
    pub fn get_forms(&self, options: &ListOptions) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/forms",
            &options.to_query(),
        )
    }

    /// Get basic information about a form: status, dates, submission count.
    pub fn get_form(&self, form_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}"),
            &[],
        )
    }

    /// Create a new form from a typed definition; returns the new form.
    pub fn create_form(&self, form: &FormDefinition) -> Result<Value> {
        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/forms",
            &endpoints::form_definition_params(form),
        )
    }

    /// Create multiple forms from pre-formatted data.
    pub fn create_forms(&self, forms: &str) -> Result<Value> {
        endpoints::put_raw(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/forms",
            forms,
        )
    }

    /// Clone a form; returns the clone.
    pub fn clone_form(&self, form_id: u64) -> Result<Value> {
        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/clone"),
            &[],
        )
    }

    /// Delete a form; returns the deleted form's properties.
    pub fn delete_form(&self, form_id: u64) -> Result<Value> {
        endpoints::delete(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}"),
            &[],
        )
    }

    /// List files uploaded through a form.
    pub fn get_form_files(&self, form_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/files"),
            &[],
        )
    }

    /// List webhooks attached to a form.
    pub fn get_form_webhooks(&self, form_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/webhooks"),
            &[],
        )
    }

    /// Attach a webhook URL to a form; returns the updated webhook list.
    pub fn create_form_webhook(&self, form_id: u64, webhook_url: &str) -> Result<Value> {
        let form = vec![("webhookURL".to_string(), webhook_url.to_string())];

        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/webhooks"),
            &form,
        )
    }

    /// Remove a webhook from a form; returns the remaining webhooks.
    pub fn delete_form_webhook(&self, form_id: u64, webhook_id: u64) -> Result<Value> {
        endpoints::delete(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/webhooks/{webhook_id}"),
            &[],
        )
    }

    /// Get all properties of a form.
    pub fn get_form_properties(&self, form_id: u64) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/properties"),
            &[],
        )
    }

    /// Get a single form property by key.
    pub fn get_form_property(&self, form_id: u64, property_key: &str) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!(
                "/form/{form_id}/properties/{}",
                encode_path_segment(property_key)
            ),
            &[],
        )
    }

    /// Add or edit form properties; returns the edited properties.
    pub fn set_form_properties(
        &self,
        form_id: u64,
        properties: &BTreeMap<String, String>,
    ) -> Result<Value> {
        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/properties"),
            &endpoints::properties_params(properties),
        )
    }

    /// Add or edit form properties from pre-formatted data.
    pub fn set_multiple_form_properties(&self, form_id: u64, properties: &str) -> Result<Value> {
        endpoints::put_raw(
            &self.http,
            &self.base_url,
            &self.api_key,
            &format!("/form/{form_id}/properties"),
            properties,
        )
    }
}
