//! Bracket-notation form parameter builders.
//!
//! JotForm's write endpoints take URL-encoded bodies whose keys use nested
//! bracket notation (`submission[4][first]`, `question[text]`,
//! `questions[0][type]`). The builders here produce ordered key/value pairs
//! ready for the POST executor.

use std::collections::BTreeMap;

use crate::models::FormDefinition;

/// Recognized sub-field suffixes of composite questions (name, date,
/// address, phone, time controls). Order matters: the first suffix contained
/// in an answer key wins, so `hour` shadows `hourSelect` and `min` shadows
/// `minuteSelect`, matching the service's observed contract.
const SUBFIELD_SUFFIXES: &[&str] = &[
    "first",
    "last",
    "month",
    "day",
    "year",
    "hour",
    "min",
    "ampm",
    "addr_line1",
    "addr_line2",
    "city",
    "state",
    "postal",
    "country",
    "area",
    "phone",
    "hourSelect",
    "minuteSelect",
];

/// Encode a submission answer map.
///
/// Keys of the shape `<qid>_<subfield>` where `<subfield>` contains a
/// recognized suffix become `submission[<qid>][<suffix>]`; everything else
/// is wrapped flat as `submission[<key>]`.
pub fn submission_params(submission: &BTreeMap<String, String>) -> Vec<(String, String)> {
    submission
        .iter()
        .map(|(key, value)| {
            let name = match (key.find('_'), matching_suffix(key)) {
                (Some(split), Some(suffix)) => {
                    format!("submission[{}][{}]", &key[..split], suffix)
                }
                _ => format!("submission[{key}]"),
            };
            (name, value.clone())
        })
        .collect()
}

fn matching_suffix(key: &str) -> Option<&'static str> {
    SUBFIELD_SUFFIXES
        .iter()
        .find(|suffix| key.contains(*suffix))
        .copied()
}

/// Encode question properties as `question[<key>]` pairs.
pub fn question_params(question: &BTreeMap<String, String>) -> Vec<(String, String)> {
    wrap("question", question)
}

/// Encode form properties as `properties[<key>]` pairs.
pub fn properties_params(properties: &BTreeMap<String, String>) -> Vec<(String, String)> {
    wrap("properties", properties)
}

fn wrap(prefix: &str, map: &BTreeMap<String, String>) -> Vec<(String, String)> {
    map.iter()
        .map(|(key, value)| (format!("{prefix}[{key}]"), value.clone()))
        .collect()
}

/// Encode a full [`FormDefinition`] for the create-form endpoint.
///
/// Question and email entries are indexed by position
/// (`questions[<i>][<key>]`, `emails[<i>][<key>]`); properties are a flat
/// keyed section (`properties[<key>]`).
pub fn form_definition_params(form: &FormDefinition) -> Vec<(String, String)> {
    let mut params = Vec::new();

    for (i, question) in form.questions.iter().enumerate() {
        for (key, value) in question {
            params.push((format!("questions[{i}][{key}]"), value.clone()));
        }
    }
    for (key, value) in &form.properties {
        params.push((format!("properties[{key}]"), value.clone()));
    }
    for (i, email) in form.emails.iter().enumerate() {
        for (key, value) in email {
            params.push((format!("emails[{i}][{key}]"), value.clone()));
        }
    }

    params
}
