use crate::client::responses::error_message;
use crate::{ClientError, ClientResult, MutationReceipt, PhotoFile, ProbeOutcome};

use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use td_config::{Config, HttpConfig};
use td_core::{
    DiscoveryCard, IdentityPayload, MatchCard, Preferences, PreferencesDraft, ProfileDraft,
    ProfileUpdate, UploadedPhoto, check_upload,
};

/// Endpoint paths, relative to the API root
pub mod paths {
    pub const ME: &str = "/api/v1/user/me";
    pub const REFRESH: &str = "/api/v1/auth/refresh";
    pub const EXCHANGE: &str = "/api/v1/auth/tg";
    pub const PROFILE_CREATE: &str = "/api/v1/user/profile/create";
    pub const PROFILE_UPDATE: &str = "/api/v1/user/profile/update";
    pub const PREFERENCES_CREATE: &str = "/api/v1/user/preferences/create";
    pub const PREFERENCES: &str = "/api/v1/user/preferences";
    pub const PHOTO_UPLOAD: &str = "/api/v1/user/photo/upload";
    pub const PHOTO_UPDATE: &str = "/api/v1/user/photo/update";
    pub const PHOTO_DELETE: &str = "/api/v1/user/photo/delete";
    pub const SEARCH: &str = "/api/v1/search";
    pub const MATCHES: &str = "/api/v1/user/match";
}

/// HTTP client for the dating REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a client with default HTTP settings
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.example.com")
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_http(base_url, &HttpConfig::default())
    }

    /// Create a client for the configured mode
    pub fn from_config(config: &Config) -> ClientResult<Self> {
        Self::with_http(config.base_url(), &config.http)
    }

    pub fn with_http(base_url: &str, http: &HttpConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .cookie_store(true)
            .timeout(http.timeout())
            .connect_timeout(http.connect_timeout())
            .user_agent(http.user_agent.as_str())
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send a request and unwrap the response envelope.
    ///
    /// 401 and `{error: "Unauthorized"}` map to `Unauthorized`, other non-2xx
    /// statuses to `Api` or `Status`, and `{success: false}` to `Rejected`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::unauthorized());
        }

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
            let message = error_message(&body).unwrap_or_else(|| status.to_string());
            if let Some(code) = body
                .get("error")
                .and_then(|e| e.get("code"))
                .and_then(Value::as_str)
            {
                return Err(ClientError::api_error(code.to_string(), message));
            }
            return Err(ClientError::status(status.as_u16(), message));
        }

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if body.get("error").and_then(Value::as_str) == Some("Unauthorized") {
            return Err(ClientError::unauthorized());
        }
        if body.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(ClientError::rejected(
                error_message(&body).unwrap_or_else(|| String::from("request was rejected")),
            ));
        }

        Ok(body)
    }

    async fn mutate(&self, req: reqwest::RequestBuilder) -> ClientResult<MutationReceipt> {
        let body = self.execute(req).await?;
        Ok(MutationReceipt::from_body(&body))
    }

    /// Decode `body[field]`; absent or null yields the default
    fn field<T: DeserializeOwned + Default>(mut body: Value, field: &str) -> ClientResult<T> {
        match body.get_mut(field).map(Value::take) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Ask the server who the caller is
    pub async fn whoami(&self) -> ClientResult<ProbeOutcome> {
        let req = self.request(Method::GET, paths::ME);

        match self.execute(req).await {
            Ok(mut body) => match body.get_mut("data").map(Value::take) {
                Some(data @ Value::Object(_)) => Ok(ProbeOutcome::Authenticated(Box::new(
                    serde_json::from_value(data)?,
                ))),
                _ => Ok(ProbeOutcome::Rejected(
                    error_message(&body).unwrap_or_else(|| String::from("no user in response")),
                )),
            },
            Err(e) if e.is_auth_failure() => Ok(ProbeOutcome::Unauthorized),
            Err(
                ClientError::Status { message, .. }
                | ClientError::Api { message, .. }
                | ClientError::Rejected { message, .. },
            ) => Ok(ProbeOutcome::Rejected(message)),
            Err(e) => Err(e),
        }
    }

    /// Renew the session cookies
    pub async fn refresh_session(&self) -> ClientResult<()> {
        let req = self.request(Method::POST, paths::REFRESH);
        self.execute(req).await?;
        Ok(())
    }

    /// Trade the host identity payload for a session
    pub async fn exchange_identity(&self, payload: &IdentityPayload) -> ClientResult<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ExchangeRequest<'a> {
            init_data: &'a str,
        }

        let body = ExchangeRequest {
            init_data: payload.as_str(),
        };
        let req = self.request(Method::POST, paths::EXCHANGE).json(&body);
        let response = self.execute(req).await?;

        match response.get("message").and_then(Value::as_str) {
            Some("success") => Ok(()),
            _ => Err(ClientError::rejected(
                error_message(&response)
                    .unwrap_or_else(|| String::from("identity exchange was not accepted")),
            )),
        }
    }

    // =========================================================================
    // Profile and preferences
    // =========================================================================

    pub async fn create_profile(&self, draft: &ProfileDraft) -> ClientResult<MutationReceipt> {
        let req = self.request(Method::POST, paths::PROFILE_CREATE).json(draft);
        self.mutate(req).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<MutationReceipt> {
        let req = self.request(Method::PUT, paths::PROFILE_UPDATE).json(update);
        self.mutate(req).await
    }

    pub async fn create_preferences(
        &self,
        draft: &PreferencesDraft,
    ) -> ClientResult<MutationReceipt> {
        let req = self
            .request(Method::POST, paths::PREFERENCES_CREATE)
            .json(draft);
        self.mutate(req).await
    }

    /// Saved preferences of a user, if any
    pub async fn get_preferences(&self, user_id: &str) -> ClientResult<Option<Preferences>> {
        let req = self.request(Method::GET, &format!("{}/{}", paths::PREFERENCES, user_id));
        let body = self.execute(req).await?;

        let key = if body.get("preferences").is_some() {
            "preferences"
        } else {
            "data"
        };
        Self::field(body, key)
    }

    // =========================================================================
    // Photos
    // =========================================================================

    /// Upload images as one multipart request with a `file` part per image.
    /// Every file is checked first; one bad file aborts the whole batch.
    pub async fn upload_photos(&self, files: Vec<PhotoFile>) -> ClientResult<Vec<UploadedPhoto>> {
        for file in &files {
            if let Err(rejection) = check_upload(&file.content_type, file.size()) {
                warn!("Refusing to upload {}: {}", file.file_name, rejection);
                return Err(ClientError::invalid_upload(&file.file_name, rejection));
            }
        }
        if files.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Uploading {} photo(s)", files.len());
        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part("file", part);
        }

        let req = self.request(Method::POST, paths::PHOTO_UPLOAD).multipart(form);
        let body = self.execute(req).await?;
        Self::field(body, "photoData")
    }

    /// Make a photo the main one
    pub async fn set_main_photo(&self, photo_id: &str) -> ClientResult<MutationReceipt> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct MainPhotoRequest<'a> {
            photo_id: &'a str,
        }

        let req = self
            .request(Method::PATCH, paths::PHOTO_UPDATE)
            .json(&MainPhotoRequest { photo_id });
        self.mutate(req).await
    }

    pub async fn delete_photo(&self, photo_id: &str) -> ClientResult<MutationReceipt> {
        let req = self.request(
            Method::DELETE,
            &format!("{}/{}", paths::PHOTO_DELETE, photo_id),
        );
        self.mutate(req).await
    }

    // =========================================================================
    // Discovery
    // =========================================================================

    /// Candidates for the swipe deck
    pub async fn discover(&self) -> ClientResult<Vec<DiscoveryCard>> {
        let req = self.request(Method::GET, paths::SEARCH);
        let body = self.execute(req).await?;
        Self::field(body, "data")
    }

    pub async fn matches(&self) -> ClientResult<Vec<MatchCard>> {
        let req = self.request(Method::GET, paths::MATCHES);
        let body = self.execute(req).await?;
        Self::field(body, "data")
    }
}
