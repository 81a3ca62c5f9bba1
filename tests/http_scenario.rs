// tests/http_scenario.rs

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use contacts_web::contacts::{ContactStore, ListOrder};
use contacts_web::{db, server, state};

/// Build a router over a fresh in-memory database, plus a store handle for
/// asserting on table contents directly.
async fn setup_app() -> (axum::Router, ContactStore) {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");

    db::init_schema(&pool).await.unwrap();

    let store = ContactStore::new(pool.clone());
    let app_state = Arc::new(state::create_app_state(pool, ListOrder::NewestFirst));
    (server::router(app_state), store)
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_renders_empty_page() {
    let (app, _store) = setup_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Add Contacts"));
    assert!(body.contains("Quick Actions"));
    assert!(body.contains("No contacts found."));
}

#[tokio::test]
async fn test_full_contact_lifecycle() {
    let (app, store) = setup_app().await;

    // Random add on an empty table
    let response = app
        .clone()
        .oneshot(form_post("action=add_random"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("added successfully"));

    let contacts = store.list(ListOrder::NewestFirst).await.unwrap();
    assert_eq!(contacts.len(), 1);
    let random_contact = &contacts[0];
    let suffix = random_contact
        .name
        .strip_prefix("User_")
        .expect("random names carry the User_ prefix");
    assert!(suffix.len() == 4 || suffix.len() == 5);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(random_contact.phone.len(), 10);
    assert!(random_contact.phone.chars().all(|c| c.is_ascii_digit()));

    // Manual add
    let response = app
        .clone()
        .oneshot(form_post("name=Alice&phone=5551234567"))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Contact added successfully."));
    assert!(body.contains("Alice"));

    let contacts = store.list(ListOrder::NewestFirst).await.unwrap();
    assert_eq!(contacts.len(), 2);
    let alice = contacts.iter().find(|c| c.name == "Alice").unwrap();
    assert_eq!(alice.phone, "5551234567");

    // Delete Alice; the random contact remains
    let response = app
        .clone()
        .oneshot(form_post(&format!("action=delete&contact_id={}", alice.id)))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Contact deleted successfully."));

    let contacts = store.list(ListOrder::NewestFirst).await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id, random_contact.id);

    // Clear all
    let response = app
        .clone()
        .oneshot(form_post("action=clear_all"))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("cleared successfully"));
    assert!(body.contains("No contacts found."));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_two_random_adds_are_independent() {
    let (app, store) = setup_app().await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(form_post("action=add_random"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let contacts = store.list(ListOrder::NewestFirst).await.unwrap();
    assert_eq!(contacts.len(), 2);
    for contact in &contacts {
        assert!(contact.name.starts_with("User_"));
        assert_eq!(contact.phone.len(), 10);
    }
    // Names and phones may coincide; no uniqueness assertion here.
}

#[tokio::test]
async fn test_manual_add_requires_both_fields() {
    let (app, store) = setup_app().await;

    let response = app
        .clone()
        .oneshot(form_post("name=Bob&phone="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Both name and phone number are required for manual entry."));
    assert!(body.contains(r#"class="status-validation""#));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_missing_contact_id_is_a_validation_error() {
    let (app, store) = setup_app().await;
    store.add("Alice", "5551234567").await.unwrap();

    let response = app
        .clone()
        .oneshot(form_post("action=delete"))
        .await
        .unwrap();
    let body = body_text(response).await;
    assert!(body.contains("Contact ID missing for delete action."));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_empty_contact_id_renders_validation_message() {
    let (app, store) = setup_app().await;
    store.add("Alice", "5551234567").await.unwrap();

    let response = app
        .clone()
        .oneshot(form_post("action=delete&contact_id="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Contact ID missing for delete action."));
    assert!(body.contains(r#"class="status-validation""#));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_nonnumeric_contact_id_renders_validation_message() {
    let (app, store) = setup_app().await;
    store.add("Alice", "5551234567").await.unwrap();

    let response = app
        .clone()
        .oneshot(form_post("action=delete&contact_id=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Invalid contact ID for delete action."));
    assert!(body.contains(r#"class="status-validation""#));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_nonexistent_id_renders_without_error() {
    let (app, store) = setup_app().await;
    store.add("Alice", "5551234567").await.unwrap();

    let response = app
        .clone()
        .oneshot(form_post("action=delete&contact_id=9999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(!body.contains(r#"class="status-storage""#));
    assert_eq!(store.count().await.unwrap(), 1);
    assert!(body.contains("Alice"));
}

#[tokio::test]
async fn test_listing_shows_newest_first() {
    let (app, store) = setup_app().await;
    store.add("First", "1111111111").await.unwrap();
    store.add("Second", "2222222222").await.unwrap();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_text(response).await;

    let first_pos = body.find("First").unwrap();
    let second_pos = body.find("Second").unwrap();
    assert!(second_pos < first_pos, "newest contact should render first");
}
