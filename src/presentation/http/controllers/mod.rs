pub mod auth;
pub mod blogs;
pub mod comments;
pub mod events;
pub mod forms;
pub mod gallery;
pub mod health;
pub mod ideas;
pub mod media;
pub mod stories;
pub mod subscriptions;

use crate::application::{error::ApplicationError, ports::uploads::FileStore};
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::extract::Multipart;
use std::collections::HashMap;

/// A parsed multipart form: text fields by name, plus the stored paths of
/// any file parts (uploaded through the [`FileStore`] under `category`).
pub(crate) struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, String>,
}

impl FormData {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn require(&self, name: &str) -> HttpResult<String> {
        self.text(name).map(str::to_owned).ok_or_else(|| {
            HttpError::from_error(ApplicationError::validation(format!(
                "missing field: {name}"
            )))
        })
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn bool(&self, name: &str) -> bool {
        matches!(self.text(name), Some("true") | Some("1") | Some("on"))
    }

    /// Parses a field holding a JSON value, e.g. a sections array.
    pub fn json<T: serde::de::DeserializeOwned>(&self, name: &str) -> HttpResult<Option<T>> {
        match self.text(name) {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|err| {
                    HttpError::from_error(ApplicationError::validation(format!(
                        "invalid {name}: {err}"
                    )))
                }),
            None => Ok(None),
        }
    }
}

pub(crate) async fn read_form(
    mut multipart: Multipart,
    store: &dyn FileStore,
    category: &str,
) -> HttpResult<FormData> {
    let mut fields = HashMap::new();
    let mut files = HashMap::new();

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        HttpError::from_error(ApplicationError::validation(err.to_string()))
    })? {
        let name = field.name().unwrap_or_default().to_owned();
        if let Some(file_name) = field.file_name().map(str::to_owned) {
            let bytes = field.bytes().await.map_err(|err| {
                HttpError::from_error(ApplicationError::validation(err.to_string()))
            })?;
            if bytes.is_empty() {
                continue;
            }
            let path = store
                .store(category, &file_name, bytes)
                .await
                .map_err(HttpError::from_error)?;
            files.insert(name, path);
        } else {
            let value = field.text().await.map_err(|err| {
                HttpError::from_error(ApplicationError::validation(err.to_string()))
            })?;
            fields.insert(name, value);
        }
    }

    Ok(FormData { fields, files })
}

/// Tag lists arrive either as a JSON array or comma-separated text.
pub(crate) fn parse_tags(raw: &str) -> Vec<String> {
    if let Ok(tags) = serde_json::from_str::<Vec<String>>(raw) {
        return tags;
    }
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
