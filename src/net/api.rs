//! REST client for the remote platform API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with cookies included
//! so the server-side session travels with every request.
//! Native builds (tests, tooling): stubs returning `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 becomes
//! `ApiError::Unauthorized`; any other non-2xx keeps its status code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{LoginRequest, UserProfile};

pub const CURRENT_USER_ENDPOINT: &str = "/api/user/me";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// The two calls the session gate needs from the network.
///
/// `ApiClient` is the production implementation; tests substitute fakes.
pub trait SessionApi {
    /// Fetch the profile for the current session cookie.
    fn current_user(&self) -> impl Future<Output = Result<UserProfile, ApiError>>;

    /// Invalidate the current session on the server.
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
}

impl<T: SessionApi + ?Sized> SessionApi for Rc<T> {
    fn current_user(&self) -> impl Future<Output = Result<UserProfile, ApiError>> {
        (**self).current_user()
    }

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> {
        (**self).logout()
    }
}

/// Multipart body for endpoints that accept file uploads.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    #[cfg(feature = "csr")]
    files: Vec<(String, web_sys::File)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    #[cfg(feature = "csr")]
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, file: web_sys::File) -> Self {
        self.files.push((name.into(), file));
        self
    }

    pub fn text_fields(&self) -> &[(String, String)] {
        &self.fields
    }

    #[cfg(feature = "csr")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value).map_err(js_err)?;
        }
        for (name, file) in &self.files {
            form.append_with_blob(name, file).map_err(js_err)?;
        }
        Ok(form)
    }
}

/// HTTP client bound to the API base URL.
///
/// An empty base URL means same-origin requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL, tolerating a missing leading slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET path?query` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// does not decode into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_session(gloo_net::http::Request::get(&self.url(path)))
                .query(query.iter().map(|(k, v)| (*k, v.as_str())))
                .build()
                .map_err(transport)?;
            let resp = send(request).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, query);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization, transport, status, or decode failure.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_session(gloo_net::http::Request::post(&self.url(path)))
                .json(body)
                .map_err(transport)?;
            let resp = send(request).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` with a JSON body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization, transport, or status failure.
    pub async fn post_json_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_session(gloo_net::http::Request::post(&self.url(path)))
                .json(body)
                .map_err(transport)?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` with no body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or status failure.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_session(gloo_net::http::Request::post(&self.url(path)))
                .build()
                .map_err(transport)?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT path` with a JSON body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization, transport, or status failure.
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_session(gloo_net::http::Request::put(&self.url(path)))
                .json(body)
                .map_err(transport)?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT path` with no body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or status failure.
    pub async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_session(gloo_net::http::Request::put(&self.url(path)))
                .build()
                .map_err(transport)?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or status failure.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_session(gloo_net::http::Request::delete(&self.url(path)))
                .build()
                .map_err(transport)?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` with a `multipart/form-data` body and decode the JSON response.
    ///
    /// The browser sets the multipart boundary header itself.
    ///
    /// # Errors
    ///
    /// Returns an error on form construction, transport, status, or decode failure.
    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: &MultipartForm) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = with_session(gloo_net::http::Request::post(&self.url(path)))
                .body(form.to_form_data()?)
                .map_err(transport)?;
            let resp = send(request).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, form);
            Err(ApiError::Unavailable)
        }
    }

    /// Submit credentials; the server answers with a session cookie.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for rejected credentials, or any
    /// transport/status failure.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<(), ApiError> {
        self.post_json_no_content(LOGIN_ENDPOINT, credentials).await
    }
}

impl SessionApi for ApiClient {
    fn current_user(&self) -> impl Future<Output = Result<UserProfile, ApiError>> {
        async move { self.get_json(CURRENT_USER_ENDPOINT, &[]).await }
    }

    fn logout(&self) -> impl Future<Output = Result<(), ApiError>> {
        self.post_empty(LOGOUT_ENDPOINT)
    }
}

#[cfg(feature = "csr")]
fn with_session(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    builder.credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let url = request.url();
    let resp = request.send().await.map_err(|e| {
        log::warn!("request to {url} failed: {e}");
        transport(e)
    })?;
    match ApiError::from_status(resp.status()) {
        Some(err) => {
            log::debug!("request to {url} returned {}", resp.status());
            Err(err)
        }
        None => Ok(resp),
    }
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
