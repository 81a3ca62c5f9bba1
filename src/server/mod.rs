// src/server/mod.rs

//! The single `/` endpoint: GET renders the contact list, POST dispatches
//! on the form's `action` field and re-renders the list afterwards.
//!
//! Every path responds 200 with a full HTML page; failures surface as a
//! status message tagged with an explicit kind, never as an error page.

pub mod render;

use axum::{
    Form, Router,
    extract::State,
    response::Html,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::contacts::random::{random_name, random_phone};
use crate::state::AppState;

/// Classifies a status message for display styling. The kind tag, not the
/// message wording, selects the CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    ValidationError,
    StorageError,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "status-success",
            StatusKind::ValidationError => "status-validation",
            StatusKind::StorageError => "status-storage",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    fn validation(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::ValidationError, text: text.into() }
    }

    fn storage(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::StorageError, text: text.into() }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub action: Option<String>,
    // Kept as text so a missing, empty, or non-numeric id becomes a
    // validation message instead of a rejected request.
    pub contact_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .with_state(state)
}

async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    respond(&state, None).await
}

async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Html<String> {
    let status = apply_action(&state, &form).await;
    respond(&state, status).await
}

/// Perform the mutation selected by the form, if any, and describe the
/// outcome. A storage failure is flattened to a message; the caller still
/// proceeds to the listing query.
async fn apply_action(state: &AppState, form: &ContactForm) -> Option<StatusMessage> {
    match form.action.as_deref() {
        Some("delete") => match form.contact_id.as_deref().filter(|s| !s.is_empty()) {
            Some(raw_id) => match raw_id.parse::<i64>() {
                Ok(id) => match state.store.delete(id).await {
                    Ok(removed) => {
                        info!("Deleted contact id={} ({} rows)", id, removed);
                        Some(StatusMessage::success("Contact deleted successfully."))
                    }
                    Err(e) => {
                        error!("Delete failed for contact id={}: {}", id, e);
                        Some(StatusMessage::storage(format!("Error deleting contact: {}", e)))
                    }
                },
                Err(_) => Some(StatusMessage::validation(
                    "Invalid contact ID for delete action.",
                )),
            },
            None => Some(StatusMessage::validation(
                "Contact ID missing for delete action.",
            )),
        },
        Some("add_random") => {
            let name = random_name();
            let phone = random_phone();
            match state.store.add(&name, &phone).await {
                Ok(contact) => {
                    info!("Added random contact id={}", contact.id);
                    Some(StatusMessage::success(format!(
                        "Random contact ({}) added successfully.",
                        contact.name
                    )))
                }
                Err(e) => {
                    error!("Random add failed: {}", e);
                    Some(StatusMessage::storage(format!("Error adding contact: {}", e)))
                }
            }
        }
        Some("clear_all") => match state.store.clear_all().await {
            Ok(removed) => {
                info!("Cleared all contacts ({} rows)", removed);
                Some(StatusMessage::success(
                    "All contacts have been cleared successfully.",
                ))
            }
            Err(e) => {
                error!("Clear all failed: {}", e);
                Some(StatusMessage::storage(format!("Error clearing contacts: {}", e)))
            }
        },
        // No recognized action: treat as a manual add attempt
        _ => {
            let name = form.name.as_deref().unwrap_or("");
            let phone = form.phone.as_deref().unwrap_or("");

            if !name.is_empty() && !phone.is_empty() {
                match state.store.add(name, phone).await {
                    Ok(contact) => {
                        info!("Added contact id={}", contact.id);
                        Some(StatusMessage::success("Contact added successfully."))
                    }
                    Err(e) => {
                        error!("Add failed: {}", e);
                        Some(StatusMessage::storage(format!("Error adding contact: {}", e)))
                    }
                }
            } else if form.name.is_some() || form.phone.is_some() {
                Some(StatusMessage::validation(
                    "Both name and phone number are required for manual entry.",
                ))
            } else {
                None
            }
        }
    }
}

/// Fetch the current contact list and render the full page. A listing
/// failure replaces any earlier status message and falls back to an empty
/// list.
async fn respond(state: &AppState, status: Option<StatusMessage>) -> Html<String> {
    match state.store.list(state.list_order).await {
        Ok(contacts) => Html(render::render_page(&contacts, status.as_ref())),
        Err(e) => {
            error!("Listing query failed: {}", e);
            let fallback = StatusMessage::storage(format!("Error retrieving contacts: {}", e));
            Html(render::render_page(&[], Some(&fallback)))
        }
    }
}
