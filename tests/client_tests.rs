//! Clipboard client tests against a mock HTTP service

use std::sync::{Arc, Mutex};
use std::time::Duration;

use noteclip::application::ports::{NoteEvent, RecordingNarrator, SilentNarrator};
use noteclip::application::{ClipboardClient, NoteError};
use noteclip::domain::config::DEFAULT_USER_AGENT;
use noteclip::domain::{SaveMode, SlotId};
use noteclip::infrastructure::ReqwestTransport;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const TEST_AGENT: &str = "noteclip-tests/1.0";

/// Render a slot page the way the service does
fn render_page(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>note</title></head><body>\n\
         <div class=\"stack\"><div class=\"layer\">\
         <textarea class=\"content\">{}</textarea>\
         </div></div>\n</body></html>",
        html_escape::encode_safe(content)
    )
}

/// Serves the stored text on GET
struct PageResponder(Arc<Mutex<String>>);

impl Respond for PageResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let stored = self.0.lock().unwrap();
        ResponseTemplate::new(200).set_body_string(render_page(&stored))
    }
}

/// Stores the `t` form field on POST
struct StoreResponder(Arc<Mutex<String>>);

impl Respond for StoreResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let text = form_urlencoded::parse(&request.body)
            .find(|(key, _)| key == "t")
            .map(|(_, value)| value.into_owned());

        match text {
            Some(text) => {
                *self.0.lock().unwrap() = text;
                ResponseTemplate::new(200)
            }
            None => ResponseTemplate::new(400),
        }
    }
}

/// Start a mock service that echoes writes back on reads
async fn echo_service(initial: &str) -> (MockServer, Arc<Mutex<String>>) {
    let server = MockServer::start().await;
    let store = Arc::new(Mutex::new(initial.to_string()));

    Mock::given(method("GET"))
        .and(path("/testid"))
        .respond_with(PageResponder(Arc::clone(&store)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/testid"))
        .respond_with(StoreResponder(Arc::clone(&store)))
        .mount(&server)
        .await;

    (server, store)
}

fn transport() -> ReqwestTransport {
    ReqwestTransport::with_options(TEST_AGENT, None).unwrap()
}

fn client_for(server: &MockServer) -> ClipboardClient<ReqwestTransport> {
    ClipboardClient::with_service_root(
        &server.uri(),
        SlotId::new("testid").unwrap(),
        transport(),
        SilentNarrator,
    )
}

async fn post_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == "POST")
        .count()
}

#[tokio::test]
async fn replace_then_fetch_round_trips_reserved_characters() {
    let (server, _store) = echo_service("").await;
    let client = client_for(&server);

    let text = "<b>\"Tom\" & 'Jerry'</b>\n2 < 3 &amp; done /";
    client.save(text, &SaveMode::Replace).await.unwrap();

    assert_eq!(client.fetch().await.unwrap(), text);
}

#[tokio::test]
async fn round_trips_unicode() {
    let (server, _store) = echo_service("").await;
    let client = client_for(&server);

    let text = "剪切板 ✓ — naïve café";
    client.replace(text).await.unwrap();

    assert_eq!(client.fetch().await.unwrap(), text);
}

#[tokio::test]
async fn append_with_default_separator() {
    let (server, store) = echo_service("A").await;
    let client = client_for(&server);

    let outcome = client.append("B").await.unwrap();

    assert_eq!(outcome.written, "A\nB");
    assert_eq!(*store.lock().unwrap(), "A\nB");
}

#[tokio::test]
async fn append_to_empty_slot_has_no_leading_separator() {
    let (server, store) = echo_service("").await;
    let client = client_for(&server);

    client.append("B").await.unwrap();

    assert_eq!(*store.lock().unwrap(), "B");
}

#[tokio::test]
async fn append_with_custom_separator() {
    let (server, store) = echo_service("A").await;
    let client = client_for(&server);

    client
        .save("B", &SaveMode::append_with(" | "))
        .await
        .unwrap();

    assert_eq!(*store.lock().unwrap(), "A | B");
}

#[tokio::test]
async fn post_body_is_single_urlencoded_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/testid"))
        .respond_with(ResponseTemplate::new(200).set_body_string(render_page("A")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/testid"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("t=A+%7C+B"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .save("B", &SaveMode::append_with(" | "))
        .await
        .unwrap();
}

#[tokio::test]
async fn requests_carry_user_agent_and_referer() {
    let server = MockServer::start().await;
    let slot_url = format!("{}/testid", server.uri());

    Mock::given(method("GET"))
        .and(path("/testid"))
        .and(header("user-agent", TEST_AGENT))
        .and(header("referer", slot_url.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(render_page("x")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/testid"))
        .and(header("user-agent", TEST_AGENT))
        .and(header("referer", slot_url.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.url(), slot_url);
    client.fetch().await.unwrap();
    client.replace("y").await.unwrap();
}

#[tokio::test]
async fn default_transport_sends_browser_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(render_page("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ClipboardClient::with_service_root(
        &server.uri(),
        SlotId::new("testid").unwrap(),
        ReqwestTransport::new().unwrap(),
        SilentNarrator,
    );
    assert_eq!(client.fetch().await.unwrap(), "ok");
}

#[tokio::test]
async fn fetch_follows_redirects() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/testid", server.uri())),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/testid"))
        .respond_with(ResponseTemplate::new(200).set_body_string(render_page("landed")))
        .mount(&server)
        .await;

    let client = ClipboardClient::with_service_root(
        &server.uri(),
        SlotId::new("moved").unwrap(),
        transport(),
        SilentNarrator,
    );

    assert_eq!(client.fetch().await.unwrap(), "landed");
}

#[tokio::test]
async fn missing_marker_is_parse_error_not_empty_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>Under maintenance</body></html>"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.fetch().await;

    assert!(matches!(result, Err(NoteError::Parse(_))), "{:?}", result);
}

#[tokio::test]
async fn empty_marker_is_empty_content() {
    let (server, _store) = echo_service("").await;
    let client = client_for(&server);

    assert_eq!(client.fetch().await.unwrap(), "");
}

#[tokio::test]
async fn append_aborts_without_post_when_marker_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.append("B").await.unwrap_err();

    assert!(matches!(err, NoteError::AppendAborted(_)));
    assert_eq!(post_count(&server).await, 0);
}

#[tokio::test]
async fn append_aborts_when_service_unreachable() {
    let client = ClipboardClient::with_service_root(
        "http://127.0.0.1:1",
        SlotId::new("testid").unwrap(),
        transport(),
        SilentNarrator,
    );

    let err = client.append("B").await.unwrap_err();
    match err {
        NoteError::AppendAborted(cause) => assert!(matches!(*cause, NoteError::Network(_))),
        other => panic!("expected aborted append, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let client = ClipboardClient::with_service_root(
        "http://127.0.0.1:1",
        SlotId::new("testid").unwrap(),
        transport(),
        SilentNarrator,
    );

    let fetch = client.fetch().await;
    assert!(matches!(fetch, Err(NoteError::Network(_))));

    let save = client.replace("x").await;
    assert!(matches!(save, Err(ref e) if e.is_transient()));
}

#[tokio::test]
async fn configured_timeout_surfaces_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(render_page("slow"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = ClipboardClient::with_service_root(
        &server.uri(),
        SlotId::new("testid").unwrap(),
        ReqwestTransport::with_options(TEST_AGENT, Some(Duration::from_millis(200))).unwrap(),
        SilentNarrator,
    );

    assert!(matches!(client.fetch().await, Err(NoteError::Network(_))));
}

#[tokio::test]
async fn rejected_writes_report_status() {
    for status in [403u16, 500] {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.replace("x").await.unwrap_err();

        assert_eq!(err.status(), Some(status));
        assert_eq!(err.is_transient(), status >= 500);
    }
}

#[tokio::test]
async fn non_success_get_with_marker_still_reads() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(render_page("")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.fetch().await.unwrap(), "");
}

#[tokio::test]
async fn narration_reports_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let narrator = RecordingNarrator::new();
    let client = ClipboardClient::with_service_root(
        &server.uri(),
        SlotId::new("testid").unwrap(),
        transport(),
        &narrator,
    );

    client.replace("x").await.unwrap();

    assert_eq!(
        narrator.events().last(),
        Some(&NoteEvent::SaveSucceeded { status: 201 })
    );
}
