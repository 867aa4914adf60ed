use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::error::ActionError;
use crate::model::EndUserView;

const END_USERS_PATH: [&str; 2] = ["v1", "end-users"];
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Network operations on end users. The id is always explicit; binding it to
/// a particular record happens in [`crate::ReviewActions`].
#[async_trait]
pub trait EndUserApi: Send + Sync {
    async fn get_end_user(&self, end_user_id: &str) -> Result<EndUserView, ActionError>;
    async fn approve_end_user(&self, end_user_id: &str) -> Result<EndUserView, ActionError>;
    async fn reject_end_user(&self, end_user_id: &str) -> Result<EndUserView, ActionError>;
    async fn next_end_user(&self, after: Option<&str>) -> Result<Option<EndUserView>, ActionError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

pub struct HttpEndUserApi {
    http: Client,
    base_url: Url,
    token: Secret<String>,
}

impl HttpEndUserApi {
    pub fn new(base_url: impl Into<String>, token: Secret<String>) -> Result<Self, ActionError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ActionError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ActionError::InvalidUrl(base_url));
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: parsed,
            token,
        })
    }

    /// Appends `segments` under `/v1/end-users`, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ActionError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ActionError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(END_USERS_PATH)
            .extend(segments);
        Ok(url)
    }

    async fn decide(&self, end_user_id: &str, action: &str) -> Result<EndUserView, ActionError> {
        let response = self
            .http
            .patch(self.url(&[end_user_id, action])?)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await?;
        read_json(response).await
    }
}

async fn error_from(response: Response) -> ActionError {
    match response.status() {
        StatusCode::UNAUTHORIZED => ActionError::Unauthorized,
        StatusCode::NOT_FOUND => ActionError::NotFound,
        status => {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message.or(b.error))
                .unwrap_or(body);
            ActionError::Status {
                status: status.as_u16(),
                message,
            }
        }
    }
}

async fn read_json(response: Response) -> Result<EndUserView, ActionError> {
    if !response.status().is_success() {
        return Err(error_from(response).await);
    }
    response
        .json::<EndUserView>()
        .await
        .map_err(|e| ActionError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl EndUserApi for HttpEndUserApi {
    async fn get_end_user(&self, end_user_id: &str) -> Result<EndUserView, ActionError> {
        let response = self
            .http
            .get(self.url(&[end_user_id])?)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await?;
        read_json(response).await
    }

    async fn approve_end_user(&self, end_user_id: &str) -> Result<EndUserView, ActionError> {
        self.decide(end_user_id, "approve").await
    }

    async fn reject_end_user(&self, end_user_id: &str) -> Result<EndUserView, ActionError> {
        self.decide(end_user_id, "reject").await
    }

    async fn next_end_user(&self, after: Option<&str>) -> Result<Option<EndUserView>, ActionError> {
        let mut request = self
            .http
            .get(self.url(&["next"])?)
            .bearer_auth(self.token.expose_secret());
        if let Some(after) = after {
            request = request.query(&[("after", after)]);
        }

        let response = request.send().await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        read_json(response).await.map(Some)
    }
}
