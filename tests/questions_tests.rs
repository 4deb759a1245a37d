//! Form question endpoint tests.

mod common;

use std::collections::BTreeMap;

use common::*;
use mockito::Matcher;
use serde_json::json;

#[test]
fn test_get_form_questions() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/form/2345/questions")
        .match_header("apikey", TEST_API_KEY)
        .with_body(success_body(json!({
            "1": {"type": "control_textbox", "text": "Name"},
            "2": {"type": "control_email", "text": "Email"},
        })))
        .create();

    let client = test_client(&server);
    let questions = client.get_form_questions(2345).unwrap();

    mock.assert();
    assert_eq!(questions["1"]["type"], "control_textbox");
    assert_eq!(questions["2"]["text"], "Email");
}

#[test]
fn test_get_form_question() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/form/2345/question/1")
        .with_body(success_body(json!({"type": "control_textbox", "required": "Yes"})))
        .create();

    let client = test_client(&server);
    let question = client.get_form_question(2345, 1).unwrap();

    mock.assert();
    assert_eq!(question["required"], "Yes");
}

#[test]
fn test_create_form_question_wraps_keys() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/v1/form/2345/questions")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("question[type]".into(), "control_textbox".into()),
            Matcher::UrlEncoded("question[text]".into(), "Your age?".into()),
            Matcher::UrlEncoded("question[order]".into(), "3".into()),
        ]))
        .with_body(success_body(json!({"qid": "3"})))
        .create();

    let mut question = BTreeMap::new();
    question.insert("type".to_string(), "control_textbox".to_string());
    question.insert("text".to_string(), "Your age?".to_string());
    question.insert("order".to_string(), "3".to_string());

    let client = test_client(&server);
    let created = client.create_form_question(2345, &question).unwrap();

    mock.assert();
    assert_eq!(created["qid"], "3");
}

#[test]
fn test_create_form_questions_puts_raw_body() {
    let mut server = mockito::Server::new();

    let raw = r#"[{"type":"control_textbox","text":"Q1"}]"#;

    let mock = server
        .mock("PUT", "/v1/form/2345/questions")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact(raw.to_string()))
        .with_body(success_body(json!({"1": {"text": "Q1"}})))
        .create();

    let client = test_client(&server);
    client.create_form_questions(2345, raw).unwrap();

    mock.assert();
}

#[test]
fn test_edit_form_question() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/v1/form/2345/question/1")
        .match_body(Matcher::UrlEncoded(
            "question[text]".into(),
            "Full name".into(),
        ))
        .with_body(success_body(json!({"text": "Full name"})))
        .create();

    let mut properties = BTreeMap::new();
    properties.insert("text".to_string(), "Full name".to_string());

    let client = test_client(&server);
    let edited = client.edit_form_question(2345, 1, &properties).unwrap();

    mock.assert();
    assert_eq!(edited["text"], "Full name");
}

#[test]
fn test_delete_form_question() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("DELETE", "/v1/form/2345/question/2")
        .with_body(success_body(json!("Question #2 deleted")))
        .create();

    let client = test_client(&server);
    let result = client.delete_form_question(2345, 2).unwrap();

    mock.assert();
    assert_eq!(result, "Question #2 deleted");
}
