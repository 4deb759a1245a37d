//! User account API methods for [`JotformClient`].

use std::collections::BTreeMap;

use serde_json::Value;

use crate::client::JotformClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::HistoryQuery;

impl JotformClient {
    /// Get account details: account type, name, email, limits.
    pub fn get_user(&self) -> Result<Value> {
        endpoints::get(&self.http, &self.base_url, &self.api_key, "/user", &[])
    }

    /// Get monthly usage: submission counts and upload space.
    pub fn get_usage(&self) -> Result<Value> {
        endpoints::get(&self.http, &self.base_url, &self.api_key, "/user/usage", &[])
    }

    /// Get account settings such as time zone and language.
    pub fn get_settings(&self) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/settings",
            &[],
        )
    }

    /// Update account settings; returns the changed settings.
    pub fn update_settings(&self, settings: &BTreeMap<String, String>) -> Result<Value> {
        let form: Vec<(String, String)> = settings
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/settings",
            &form,
        )
    }

    /// Get the account activity log.
    pub fn get_history(&self, query: &HistoryQuery) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/history",
            &query.to_query(),
        )
    }

    /// List sub-users of this account with their access privileges.
    pub fn get_subusers(&self) -> Result<Value> {
        endpoints::get(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/subusers",
            &[],
        )
    }

    /// Register a new account from `username`, `password` and `email` keys.
    pub fn register_user(&self, user_details: &BTreeMap<String, String>) -> Result<Value> {
        let form: Vec<(String, String)> = user_details
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/register",
            &form,
        )
    }

    /// Log in with the given credentials; returns settings and app key.
    pub fn login_user(&self, credentials: &BTreeMap<String, String>) -> Result<Value> {
        let form: Vec<(String, String)> = credentials
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        endpoints::post(
            &self.http,
            &self.base_url,
            &self.api_key,
            "/user/login",
            &form,
        )
    }
}
