use axum::{Router, http::StatusCode};
use rstest::{fixture, rstest};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::http::{empty_request, json_request, read_json};
use crate::tests::fixtures::state::make_test_state;

#[fixture]
fn app() -> Router {
    router(make_test_state())
}

#[rstest]
#[tokio::test]
async fn it_should_create_read_patch_and_delete_an_event(app: Router) {
    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/events",
            r#"{"title":"Some event","start":"2001-01-01T00:00:00Z","end":"2001-01-01T12:00:00Z"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = read_json(created).await;
    assert_eq!(created["title"], "Some event");
    assert_eq!(created["start"], "2001-01-01T00:00:00Z");
    assert_eq!(created["end"], "2001-01-01T12:00:00Z");
    let id = created["id"].as_str().expect("missing id").to_string();
    let uri = format!("/api/v1/events/{id}");

    let read = app.clone().oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(read.status(), StatusCode::OK);
    assert_eq!(read_json(read).await, created);

    let patched = app
        .clone()
        .oneshot(json_request("PATCH", &uri, r#"{"title":"Some other event"}"#))
        .await
        .unwrap();
    assert_eq!(patched.status(), StatusCode::OK);
    let patched = read_json(patched).await;
    assert_eq!(patched["id"], id.as_str());
    assert_eq!(patched["title"], "Some other event");
    assert_eq!(patched["start"], created["start"]);
    assert_eq!(patched["end"], created["end"]);

    let deleted = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);

    let gone = app.clone().oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let deleted_again = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(deleted_again.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn it_should_list_created_events_across_pages(app: Router) {
    for i in 0..50 {
        let body = format!(
            r#"{{"title":"event {i}","start":"2001-01-01T00:00:00Z","end":"2001-01-01T12:00:00Z"}}"#
        );
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/v1/events", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let first = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/events?page=0&size=20"))
        .await
        .unwrap();
    let first = read_json(first).await;
    assert_eq!(first["content"].as_array().unwrap().len(), 20);
    assert_eq!(first["content"][0]["title"], "event 0");
    assert_eq!(first["totalElements"], 50);
    assert_eq!(first["totalPages"], 3);

    let last = app
        .oneshot(empty_request("GET", "/api/v1/events?page=2&size=20"))
        .await
        .unwrap();
    let last = read_json(last).await;
    assert_eq!(last["content"].as_array().unwrap().len(), 10);
    assert_eq!(last["content"][9]["title"], "event 49");
    assert_eq!(last["last"], true);
}

#[rstest]
#[case::blank_title("POST", "/api/v1/events", r#"{"title":" ","start":"2001-01-01T00:00:00Z","end":"2001-01-01T12:00:00Z"}"#, StatusCode::BAD_REQUEST)]
#[case::start_after_end("POST", "/api/v1/events", r#"{"title":"Some event","start":"2001-01-01T12:00:00Z","end":"2001-01-01T00:00:00Z"}"#, StatusCode::BAD_REQUEST)]
#[case::patch_unknown("PATCH", "/api/v1/events/38a14a82-d5a2-4210-9d61-cc3577bfa5df", r#"{"title":"Some other event"}"#, StatusCode::NOT_FOUND)]
#[case::patch_malformed("PATCH", "/api/v1/events/foobar", r#"{"title":"Some other event"}"#, StatusCode::BAD_REQUEST)]
#[tokio::test]
async fn it_should_reject_invalid_writes(
    app: Router,
    #[case] method: &str,
    #[case] uri: &str,
    #[case] body: &str,
    #[case] status: StatusCode,
) {
    let response = app.oneshot(json_request(method, uri, body)).await.unwrap();
    assert_eq!(response.status(), status);
}

#[rstest]
#[case::get_malformed("GET", "/api/v1/events/foobar", StatusCode::BAD_REQUEST)]
#[case::delete_malformed("DELETE", "/api/v1/events/foobar", StatusCode::BAD_REQUEST)]
#[case::get_unknown("GET", "/api/v1/events/38a14a82-d5a2-4210-9d61-cc3577bfa5df", StatusCode::NOT_FOUND)]
#[case::delete_unknown("DELETE", "/api/v1/events/38a14a82-d5a2-4210-9d61-cc3577bfa5df", StatusCode::OK)]
#[tokio::test]
async fn it_should_answer_reads_and_deletes_by_id(
    app: Router,
    #[case] method: &str,
    #[case] uri: &str,
    #[case] status: StatusCode,
) {
    let response = app.oneshot(empty_request(method, uri)).await.unwrap();
    assert_eq!(response.status(), status);
}

#[rstest]
#[tokio::test]
async fn it_should_return_405_for_unsupported_methods(app: Router) {
    let response = app
        .oneshot(empty_request("PUT", "/api/v1/events"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
