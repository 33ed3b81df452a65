//! End-to-end dispatch of host envelopes against a mock reminders API

use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use remindify::{Config, Dispatcher, HttpReminderClient};

const REMINDERS_SCOPE: &str = "alexa::alerts:reminders:skill:readwrite";
const APOLOGY: &str = "<speak>Sorry, there was some problem. Please try again!!</speak>";

fn dispatcher() -> Dispatcher {
    let client = HttpReminderClient::new(5).unwrap();
    Dispatcher::from_config(&Config::default(), Arc::new(client))
}

fn envelope(request: Value, permissions: Option<Value>, endpoint: &str) -> String {
    let mut user = json!({"userId": "amzn1.ask.account.test"});
    if let Some(p) = permissions {
        user["permissions"] = p;
    }
    json!({
        "version": "1.0",
        "context": {
            "System": {
                "apiEndpoint": endpoint,
                "apiAccessToken": "api-token",
                "user": user
            }
        },
        "request": request
    })
    .to_string()
}

fn notify_request() -> Value {
    json!({
        "type": "IntentRequest",
        "requestId": "amzn1.echo-api.request.test",
        "locale": "en-US",
        "intent": {"name": "NotifyMeIntent", "slots": {}}
    })
}

fn granted() -> Value {
    json!({
        "consentToken": "consent",
        "scopes": {"alexa::alerts:reminders:skill:readwrite": {"status": "GRANTED"}}
    })
}

async fn dispatch(raw: &str) -> Value {
    let response = dispatcher().dispatch_json(raw).await;
    serde_json::from_str(&response.to_json().unwrap()).unwrap()
}

#[tokio::test]
async fn launch_welcomes() {
    let raw = envelope(json!({"type": "LaunchRequest"}), None, "http://unused");
    let body = dispatch(&raw).await;

    assert_eq!(
        body["response"]["outputSpeech"]["ssml"],
        "<speak>Welcome to the Alexa Skills Kit, you can say notify me.</speak>"
    );
    assert_eq!(body["response"]["shouldEndSession"], false);
    assert_eq!(body["response"]["card"]["title"], "Welcome");
}

#[tokio::test]
async fn reminder_without_consent_requests_permission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let raw = envelope(notify_request(), None, &server.uri());
    let body = dispatch(&raw).await;

    assert_eq!(
        body["response"]["card"],
        json!({"type": "AskForPermissionsConsent", "permissions": [REMINDERS_SCOPE]})
    );
}

#[tokio::test]
async fn reminder_with_consent_is_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/alerts/reminders"))
        .and(bearer_token("api-token"))
        .and(body_partial_json(json!({
            "requestTime": "2018-12-30T17:50:00.000",
            "trigger": {
                "type": "SCHEDULED_ABSOLUTE",
                "scheduledTime": "2018-12-30T17:50:00.000",
                "timeZoneId": "America/Chicago"
            },
            "pushNotification": {"status": "ENABLED"}
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"alertToken": "alert-7", "status": "ON"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let raw = envelope(notify_request(), Some(granted()), &server.uri());
    let body = dispatch(&raw).await;

    assert_eq!(body["response"]["outputSpeech"]["ssml"], "<speak>reminder created</speak>");
    assert_eq!(body["response"]["shouldEndSession"], true);
    assert_eq!(body["response"]["card"]["title"], "Notify Me");
}

#[tokio::test]
async fn reminder_service_error_becomes_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/alerts/reminders"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "UNAUTHORIZED",
            "message": "Access token is invalid"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let raw = envelope(notify_request(), Some(granted()), &server.uri());
    let body = dispatch(&raw).await;

    assert_eq!(body["response"]["outputSpeech"]["ssml"], APOLOGY);
    assert_eq!(body["response"]["reprompt"]["outputSpeech"]["ssml"], APOLOGY);
}

#[tokio::test]
async fn stop_and_cancel_say_goodbye() {
    for intent in ["AMAZON.StopIntent", "AMAZON.CancelIntent"] {
        let raw = envelope(
            json!({"type": "IntentRequest", "intent": {"name": intent}}),
            None,
            "http://unused",
        );
        let body = dispatch(&raw).await;
        assert_eq!(body["response"]["outputSpeech"]["ssml"], "<speak>Goodbye!</speak>");
    }
}

#[tokio::test]
async fn unknown_request_type_becomes_apology() {
    let raw = envelope(json!({"type": "CanFulfillIntentRequest"}), None, "http://unused");
    let body = dispatch(&raw).await;
    assert_eq!(body["response"]["outputSpeech"]["ssml"], APOLOGY);
}

#[tokio::test]
async fn session_ended_returns_bare_response() {
    let raw = envelope(
        json!({"type": "SessionEndedRequest", "reason": "USER_INITIATED"}),
        None,
        "http://unused",
    );
    let body = dispatch(&raw).await;
    assert_eq!(body, json!({"version": "1.0", "response": {}}));
}
