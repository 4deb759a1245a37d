//! Request and response models for the JotForm API.
//!
//! Resource payloads themselves are opaque: every operation hands back the
//! envelope's `content` as raw [`serde_json::Value`]. The types here cover
//! the envelope and the option sets that turn into query parameters.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::serde_helpers::u16_from_string_or_number;

/// The JSON envelope every JotForm endpoint responds with.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// HTTP-style status embedded in the body, arrives as number or string.
    #[serde(
        rename = "responseCode",
        deserialize_with = "u16_from_string_or_number"
    )]
    pub response_code: u16,

    /// Human-readable status, mostly present on failures.
    #[serde(default)]
    pub message: Option<String>,

    /// Resource payload, shape depends on the endpoint.
    #[serde(default)]
    pub content: Option<Value>,
}

/// Pagination and filtering options for the list endpoints
/// (`/user/forms`, `/user/submissions`, `/form/{id}/submissions`).
///
/// Unset fields are omitted from the query string entirely; the default
/// value produces an empty parameter set.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Start of the result set.
    pub offset: Option<u32>,
    /// Number of results in the result set.
    pub limit: Option<u32>,
    /// Field-to-value constraints, sent as a single JSON object string
    /// under the `filter` key.
    pub filter: Option<BTreeMap<String, String>>,
    /// Field name to order results by.
    pub order_by: Option<String>,
}

impl ListOptions {
    /// Build the query pairs for this option set.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(ref filter) = self.filter {
            if !filter.is_empty() {
                // BTreeMap serializes as a JSON object with deterministic
                // key order and no trailing separator.
                let value = serde_json::to_string(filter)
                    .unwrap_or_else(|_| "{}".to_string());
                query.push(("filter".to_string(), value));
            }
        }
        if let Some(ref order_by) = self.order_by {
            if !order_by.is_empty() {
                query.push(("order_by".to_string(), order_by.clone()));
            }
        }

        query
    }
}

/// Options for the `/user/history` activity log.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    /// Activity kind to filter by, e.g. `userCreation`, `formCreation`.
    pub action: Option<String>,
    /// Named date range, e.g. `lastWeek`, `3Months`.
    pub date: Option<String>,
    /// `ASC` or `DESC`.
    pub sort_by: Option<String>,
    /// Only results after this date, `MM/DD/YYYY`.
    pub start_date: Option<String>,
    /// Only results before this date, `MM/DD/YYYY`.
    pub end_date: Option<String>,
}

impl HistoryQuery {
    /// Build the query pairs for this option set, using the wire-level
    /// camelCase parameter names.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let fields = [
            ("action", &self.action),
            ("date", &self.date),
            ("sortBy", &self.sort_by),
            ("startDate", &self.start_date),
            ("endDate", &self.end_date),
        ];

        fields
            .into_iter()
            .filter_map(|(name, value)| {
                value
                    .as_ref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (name.to_string(), v.clone()))
            })
            .collect()
    }
}

/// Definition of a new form for [`create_form`](crate::JotformClient::create_form).
///
/// The three sections are encoded exhaustively into bracket notation:
/// `questions[<i>][<key>]`, `properties[<key>]` and `emails[<i>][<key>]`.
/// Empty sections contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct FormDefinition {
    /// Question definitions in form order; each map holds question
    /// properties such as `type`, `text`, `order`, `name`.
    pub questions: Vec<BTreeMap<String, String>>,
    /// Form-level properties such as `title`, `height`.
    pub properties: BTreeMap<String, String>,
    /// Notification/autoresponder email definitions.
    pub emails: Vec<BTreeMap<String, String>>,
}
