//! Task listing, editing, and submission calls.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use serde::Serialize;
use serde_json::Value;

use super::paging;
use crate::net::api::{ApiClient, MultipartForm};
use crate::net::error::ApiError;

pub const DEFAULT_TASK_PAGE_SIZE: u32 = 10;
pub const USER_TASKS_ENDPOINT: &str = "/api/tasks/user";

fn club_tasks_endpoint(club_id: &str) -> String {
    format!("/api/tasks/club/{club_id}")
}

fn task_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}")
}

fn create_task_endpoint(club_id: &str) -> String {
    format!("/api/tasks/club/{club_id}/create")
}

fn task_details_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}/details")
}

fn task_receivers_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}/receivers")
}

fn delete_task_endpoint(club_id: &str, task_id: &str) -> String {
    format!("/api/tasks/club/{club_id}/tasks/{task_id}")
}

fn attachments_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}/attachments")
}

fn respond_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}/respond")
}

fn complete_endpoint(user_task_id: &str) -> String {
    format!("/api/tasks/{user_task_id}/complete")
}

/// Body for `PUT /api/tasks/{id}/details`: the edited fields plus the task id.
fn details_body(task_id: &str, changes: &Value) -> Value {
    let mut body = serde_json::Map::new();
    body.insert("taskId".to_owned(), Value::String(task_id.to_owned()));
    if let Value::Object(fields) = changes {
        for (key, value) in fields {
            body.insert(key.clone(), value.clone());
        }
    }
    Value::Object(body)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReceiversBody<'a> {
    task_id: &'a str,
    receiver_ids: &'a [String],
}

/// Form for a task response. The text part is omitted when blank.
pub fn response_form(text: Option<&str>) -> MultipartForm {
    match text.filter(|t| !t.is_empty()) {
        Some(text) => MultipartForm::new().text("Text", text),
        None => MultipartForm::new(),
    }
}

/// Tasks assigned to the signed-in user.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn user_tasks(api: &ApiClient, page: u32, page_size: u32) -> Result<Value, ApiError> {
    api.get_json(USER_TASKS_ENDPOINT, &paging("page", "pageSize", page, page_size)).await
}

/// Tasks belonging to a club.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn club_tasks(api: &ApiClient, club_id: &str, page: u32, page_size: u32) -> Result<Value, ApiError> {
    api.get_json(&club_tasks_endpoint(club_id), &paging("page", "pageSize", page, page_size)).await
}

/// Full details of one task.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn task_details(api: &ApiClient, task_id: &str) -> Result<Value, ApiError> {
    api.get_json(&task_endpoint(task_id), &[]).await
}

/// Create a task in a club from a multipart form.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn create_task(api: &ApiClient, club_id: &str, form: &MultipartForm) -> Result<Value, ApiError> {
    api.post_multipart(&create_task_endpoint(club_id), form).await
}

/// Update title/description/deadline fields of a task.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn update_task_details(api: &ApiClient, task_id: &str, changes: &Value) -> Result<(), ApiError> {
    api.put_json(&task_details_endpoint(task_id), &details_body(task_id, changes)).await
}

/// Replace the set of users a task is assigned to.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn update_task_receivers(api: &ApiClient, task_id: &str, receiver_ids: &[String]) -> Result<(), ApiError> {
    api.put_json(&task_receivers_endpoint(task_id), &ReceiversBody { task_id, receiver_ids }).await
}

/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn delete_task(api: &ApiClient, club_id: &str, task_id: &str) -> Result<(), ApiError> {
    api.delete(&delete_task_endpoint(club_id, task_id)).await
}

/// Upload extra files to a task; the form carries them under `files`.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn add_attachments(api: &ApiClient, task_id: &str, form: &MultipartForm) -> Result<Value, ApiError> {
    api.post_multipart(&attachments_endpoint(task_id), form).await
}

/// Submit a response (text and/or `Files`) to a task.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn submit_response(api: &ApiClient, task_id: &str, form: &MultipartForm) -> Result<Value, ApiError> {
    api.post_multipart(&respond_endpoint(task_id), form).await
}

/// Mark the user's copy of a task as done.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn complete_user_task(api: &ApiClient, user_task_id: &str) -> Result<(), ApiError> {
    api.put_empty(&complete_endpoint(user_task_id)).await
}
