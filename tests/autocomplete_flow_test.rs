use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use queryassist::{
    Action, AssistConfig, AutocompletionController, EditorSurface, FacetMode, HttpBackend,
    Position, RecordingFacets, TextBuffer,
};

fn controller_for(
    server: &MockServer,
    text: &str,
    cursor: Position,
) -> AutocompletionController<TextBuffer, RecordingFacets, HttpBackend> {
    let mut editor = TextBuffer::from_text(text);
    editor.set_cursor(cursor);
    let backend = HttpBackend::new(AssistConfig {
        base_url: server.uri(),
        route: "/v1/autocompletion".to_string(),
    });
    AutocompletionController::new(editor, RecordingFacets::new(), backend, "duckdb")
}

#[tokio::test]
async fn forced_choice_round_trips_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/autocompletion"))
        .and(body_string_contains("engine=duckdb"))
        .and(body_string_contains("notCursorLines=from+y"))
        .and(body_string_contains("cursorLine="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": r#"{"rules":{"x":{"values":["region"]}}}"#,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "select <x>\nfrom y", Position::new(0, 9));
    let action = controller.trigger().await.unwrap();

    assert_eq!(
        action,
        Action::Insert {
            value: "region".to_string()
        }
    );
    assert_eq!(controller.editor().text(), "select region\nfrom y");
}

#[tokio::test]
async fn multi_value_round_opens_facets_and_selects_the_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/autocompletion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": r#"{"rules":{"x":{"values":["a","b"]}}}"#,
        })))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "select <x>\nfrom y", Position::new(0, 9));
    controller.trigger().await.unwrap();

    assert_eq!(controller.editor().selection(), "<x>");
    assert_eq!(controller.editor().text(), "select <x>\nfrom y");

    let call = &controller.facets().created[0];
    assert_eq!(call.context_key, "x");
    assert_eq!(call.mode, FacetMode::Patterns);
    assert!(call.multi);
}

#[tokio::test]
async fn next_token_candidates_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/autocompletion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": r#"{"keywords":["from","where"]}"#,
        })))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "select x ", Position::new(0, 9));
    let action = controller.trigger().await.unwrap();

    assert_eq!(action, Action::NextTokenFacets);
    assert_eq!(controller.facets().created[0].context_key, "next_tokens");
}

#[tokio::test]
async fn server_error_propagates_and_leaves_the_editor_alone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/autocompletion"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "select <x>", Position::new(0, 8));
    let result = controller.trigger().await;

    assert!(result.is_err());
    assert_eq!(controller.editor().text(), "select <x>");
    assert!(controller.facets().created.is_empty());
}

#[tokio::test]
async fn malformed_tokens_envelope_is_a_contract_violation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/autocompletion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": "definitely not json",
        })))
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, "select ", Position::new(0, 7));
    assert!(controller.trigger().await.is_err());
}
