//! Low-level HTTP plumbing shared by the API methods.
//!
//! Everything here is mechanical: one request executor per HTTP verb, the
//! bracket-notation form parameter builders, and path-segment encoding.
//! Resource semantics live in [`crate::client`].

pub mod form_params;
mod request;
pub mod url_encoding;

pub use form_params::{
    form_definition_params, properties_params, question_params, submission_params,
};
pub use request::{delete, get, post, put_raw};
