use assert_fs::TempDir;
use notesd::config::app_config::{AppConfig, ExecutionMode};
use rocket::figment::providers::Serialized;
use rocket::figment::Figment;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::build_rocket;

fn test_client(dir: &TempDir) -> Client {
    let app_config = AppConfig {
        mode: ExecutionMode::Test,
        data_directory: dir.path().join("normal"),
        test_data_directory: dir.path().join("test"),
    };
    let figment = Figment::from(rocket::Config::default())
        .merge(Serialized::defaults(app_config));
    Client::tracked(build_rocket(figment))
        .expect("rocket failed to ignite")
}

fn post_note(client: &Client, body: Value) -> Value {
    let response = client.post("/api/notes")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Created);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    response.into_json().expect("created note is not json")
}

fn all_notes(client: &Client) -> Vec<Value> {
    let response = client.get("/api/notes").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    response.into_json::<Vec<Value>>().expect("note list is not json")
}

fn contents(notes: &[Value]) -> Vec<&str> {
    notes.iter()
        .map(|note| note["content"].as_str().expect("content is not a string"))
        .collect()
}

#[test]
fn unknown_route_is_not_found() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let response = client.get("/test").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_json::<Value>().expect("no json body");
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[test]
fn index_reports_server_running() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::HTML));
    let body = response.into_string().expect("no body");
    assert!(body.contains("Server is running"), "unexpected body: {body}");
}

#[test]
fn responses_carry_cors_header() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let response = client.get("/api/notes").dispatch();
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*"),
    );
}

#[test]
fn notes_are_listed_as_json() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    post_note(&client, json!({ "content": "Test note 1", "important": true }));
    post_note(&client, json!({ "content": "Test note 2", "important": false }));

    let notes = all_notes(&client);
    assert_eq!(notes.len(), 2);
    assert!(contents(&notes).contains(&"Test note 1"));
}

#[test]
fn note_can_be_obtained_by_id() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let note = post_note(&client, json!({ "content": "findable" }));
    let id = note["id"].as_str().expect("id is not a string");

    let response = client.get(format!("/api/notes/{id}")).dispatch();
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let body = response.into_json::<Value>().expect("note is not json");
    assert_eq!(body, note);
}

#[test]
fn note_with_malformed_id_cannot_be_obtained() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let response = client.get("/api/notes/1234").dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let body = response.into_json::<Value>().expect("no json body");
    assert_eq!(body, json!({ "error": "id used is malformed" }));
}

#[test]
fn note_with_well_formed_absent_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let response = client
        .get(format!("/api/notes/{}", Uuid::new_v4()))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_json::<Value>().expect("no json body");
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[test]
fn valid_note_can_be_added() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let note = post_note(
        &client,
        json!({
            "content": "New created note",
            "important": true,
            "date": "1999-12-31T23:59:59Z",
        }),
    );

    assert!(note["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(note["content"], "New created note");
    assert_eq!(note["important"], true);
    let date = OffsetDateTime::parse(
        note["date"].as_str().expect("date is not a string"),
        &Rfc3339,
    ).expect("date is not rfc3339");
    assert!(
        (OffsetDateTime::now_utc() - date).abs() < Duration::seconds(5),
        "client-supplied date was not replaced by the server: {date}",
    );

    let notes = all_notes(&client);
    assert_eq!(notes.len(), 1);
    assert!(contents(&notes).contains(&"New created note"));
}

#[test]
fn note_without_content_is_not_added() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    for body in [
        json!({ "important": true, "date": "2020-01-01T00:00:00Z" }),
        json!({ "content": "" }),
    ] {
        let response = client.post("/api/notes")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
        let body = response.into_json::<Value>().expect("no json body");
        assert_eq!(body, json!({ "error": "Content is missing" }));
    }

    // no body at all behaves the same
    let response = client.post("/api/notes").dispatch();
    assert_eq!(response.status(), Status::BadRequest);

    assert_eq!(all_notes(&client).len(), 0);
}

#[test]
fn note_can_be_updated() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let note = post_note(&client, json!({ "content": "old", "important": true }));
    let id = note["id"].as_str().unwrap().to_owned();

    let response = client.put(format!("/api/notes/{id}"))
        .header(ContentType::JSON)
        .body(json!({ "content": "New updated note", "important": false }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let updated = response.into_json::<Value>().expect("note is not json");
    assert_eq!(updated["content"], "New updated note");
    assert_eq!(updated["important"], false);

    let notes = all_notes(&client);
    assert_eq!(notes.len(), 1);
    assert!(contents(&notes).contains(&"New updated note"));
}

#[test]
fn only_content_and_important_can_be_updated() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let note = post_note(&client, json!({ "content": "old", "important": true }));
    let id = note["id"].as_str().unwrap().to_owned();

    let response = client.put(format!("/api/notes/{id}"))
        .header(ContentType::JSON)
        .body(
            json!({
                "content": "New updated note",
                "important": false,
                "date": "1999-12-31T23:59:59Z",
            }).to_string()
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let updated = response.into_json::<Value>().expect("note is not json");
    assert_eq!(updated["content"], "New updated note");
    assert_eq!(updated["important"], false);
    assert_eq!(updated["date"], note["date"]);
    assert_eq!(updated["id"], note["id"]);
}

#[test]
fn note_with_malformed_id_cannot_be_updated() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let response = client.put("/api/notes/1234")
        .header(ContentType::JSON)
        .body(json!({ "content": "New updated note" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    let body = response.into_json::<Value>().expect("no json body");
    assert_eq!(body, json!({ "error": "id used is malformed" }));
}

#[test]
fn note_with_well_formed_absent_id_cannot_be_updated() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let response = client
        .put(format!("/api/notes/{}", Uuid::new_v4()))
        .header(ContentType::JSON)
        .body(json!({ "content": "New updated note" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_json::<Value>().expect("no json body");
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[test]
fn note_can_be_deleted() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let doomed = post_note(&client, json!({ "content": "doomed" }));
    post_note(&client, json!({ "content": "survivor" }));
    let id = doomed["id"].as_str().unwrap().to_owned();

    let response = client.delete(format!("/api/notes/{id}")).dispatch();
    assert_eq!(response.status(), Status::NoContent);
    assert!(response.into_string().unwrap_or_default().is_empty());

    let notes = all_notes(&client);
    assert_eq!(notes.len(), 1);
    assert!(!contents(&notes).contains(&"doomed"));
}

#[test]
fn note_with_malformed_id_cannot_be_deleted() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    post_note(&client, json!({ "content": "kept" }));

    let response = client.delete("/api/notes/1234").dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    let body = response.into_json::<Value>().expect("no json body");
    assert_eq!(body, json!({ "error": "id used is malformed" }));
    assert_eq!(all_notes(&client).len(), 1);
}

#[test]
fn deleting_an_absent_note_succeeds_repeatedly() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    let id = Uuid::new_v4();
    for _ in 0..2 {
        let response = client.delete(format!("/api/notes/{id}")).dispatch();
        assert_eq!(response.status(), Status::NoContent);
    }
}

#[test]
fn test_mode_selects_test_data_directory() {
    let dir = TempDir::new().unwrap();
    let client = test_client(&dir);
    post_note(&client, json!({ "content": "where am i" }));

    let stored = std::fs::read_dir(dir.path().join("test").join("notes"))
        .expect("test notes directory missing")
        .count();
    assert_eq!(stored, 1);
    assert!(!dir.path().join("normal").exists());
}
