//! HTTP adapter for the marketplace API.
//!
//! Wraps a [`reqwest::Client`] and attaches the stored bearer credential to
//! every call when one is present; anonymous calls are only valid for
//! register and login. All bodies are JSON except the apply call, whose
//! body is the raw trimmed price text, a wire-format quirk of the external
//! service reproduced exactly for compatibility.

use crate::credential::ports::TokenStore;
use crate::credential::services::CredentialStore;
use crate::gateway::domain::{
    ApplicationCount, ApplicationId, CreateTaskRequest, LoginRequest, LoginResponse,
    MyApplicationRow, OnboardingRequest, PriceQuote, RegisterRequest, SkillCategory, TaskId,
    TaskSnapshot, TaskSummary,
};
use crate::gateway::ports::MarketplaceApi;
use crate::gateway::{GatewayError, GatewayResult};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use std::sync::Arc;
use tracing::{debug, warn};

/// Marketplace gateway over HTTP.
pub struct HttpGateway<S: TokenStore> {
    client: Client,
    base_url: Url,
    credentials: Arc<CredentialStore<S>>,
}

impl<S: TokenStore> HttpGateway<S> {
    /// Creates a gateway for the given server base URL.
    #[must_use]
    pub fn new(base_url: Url, credentials: Arc<CredentialStore<S>>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            credentials,
        }
    }

    fn endpoint(&self, path: &str) -> GatewayResult<Url> {
        self.base_url.join(path).map_err(GatewayError::transport)
    }

    /// Builds a request with the bearer header attached when a credential
    /// is stored and omitted when none is.
    fn request(&self, method: Method, path: &str) -> GatewayResult<RequestBuilder> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "marketplace request");
        let mut builder = self.client.request(method, url);
        if let Some(token) = self.credentials.token() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn send(builder: RequestBuilder) -> GatewayResult<Response> {
        builder.send().await.map_err(GatewayError::transport)
    }

    /// Reads the status and body text of a non-success response.
    async fn failure_parts(response: Response) -> (u16, String) {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        warn!(status, "marketplace request failed");
        (status, message)
    }

    /// Discards a successful response body; classifies failures with the
    /// default policy.
    async fn expect_success(response: Response) -> GatewayResult<()> {
        if response.status().is_success() {
            return Ok(());
        }
        let (status, message) = Self::failure_parts(response).await;
        Err(GatewayError::from_status(status, message))
    }

    async fn decode_success<T: serde::de::DeserializeOwned>(response: Response) -> GatewayResult<T> {
        if !response.status().is_success() {
            let (status, message) = Self::failure_parts(response).await;
            return Err(GatewayError::from_status(status, message));
        }
        response.json::<T>().await.map_err(GatewayError::transport)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let response = Self::send(self.request(Method::GET, path)?).await?;
        Self::decode_success(response).await
    }

    async fn post_empty(&self, path: &str) -> GatewayResult<Response> {
        Self::send(self.request(Method::POST, path)?).await
    }
}

#[async_trait]
impl<S: TokenStore> MarketplaceApi for HttpGateway<S> {
    async fn register(&self, request: &RegisterRequest) -> GatewayResult<()> {
        let response =
            Self::send(self.request(Method::POST, "api/auth/register")?.json(request)).await?;
        Self::expect_success(response).await
    }

    async fn login(&self, request: &LoginRequest) -> GatewayResult<LoginResponse> {
        let response =
            Self::send(self.request(Method::POST, "api/auth/login")?.json(request)).await?;
        let login: LoginResponse = Self::decode_success(response).await?;
        self.credentials.set(&login.token)?;
        Ok(login)
    }

    async fn fetch_skill_categories(&self) -> GatewayResult<Vec<SkillCategory>> {
        self.get_json("api/profiles/skills").await
    }

    async fn submit_onboarding(&self, request: &OnboardingRequest) -> GatewayResult<()> {
        let response =
            Self::send(self.request(Method::POST, "api/profiles/onboarding")?.json(request))
                .await?;
        Self::expect_success(response).await
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> GatewayResult<()> {
        let response = Self::send(self.request(Method::POST, "api/tasks")?.json(request)).await?;
        Self::expect_success(response).await
    }

    async fn delete_task(&self, id: TaskId) -> GatewayResult<()> {
        let response = Self::send(self.request(Method::DELETE, &format!("api/tasks/{id}"))?).await?;
        Self::expect_success(response).await
    }

    async fn list_my_tasks(&self) -> GatewayResult<Vec<TaskSummary>> {
        self.get_json("api/my").await
    }

    async fn list_all_tasks(&self) -> GatewayResult<Vec<TaskSummary>> {
        self.get_json("api/tasks/all").await
    }

    async fn fetch_task(&self, id: TaskId) -> GatewayResult<TaskSnapshot> {
        self.get_json(&format!("api/task?id={id}")).await
    }

    async fn list_recommendations(&self) -> GatewayResult<Vec<TaskSummary>> {
        let response = Self::send(self.request(Method::GET, "api/recommendations")?).await?;
        // Callers without the executor role see no recommendations rather
        // than a failure; this relaxation is specific to this endpoint.
        if response.status() == StatusCode::FORBIDDEN {
            debug!("recommendations forbidden for caller; returning empty list");
            return Ok(Vec::new());
        }
        Self::decode_success(response).await
    }

    async fn apply_to_task(&self, id: TaskId, price: &PriceQuote) -> GatewayResult<()> {
        // The service expects the raw price text here, not JSON.
        let response = Self::send(
            self.request(Method::POST, &format!("api/tasks/{id}/apply"))?
                .header(CONTENT_TYPE, "text/plain")
                .body(price.as_str().to_owned()),
        )
        .await?;
        if response.status().is_success() {
            return Ok(());
        }
        let (status, message) = Self::failure_parts(response).await;
        Err(GatewayError::from_apply_status(status, message))
    }

    async fn list_my_applications(&self) -> GatewayResult<Vec<MyApplicationRow>> {
        self.get_json("api/my/applications").await
    }

    async fn list_my_task_application_counts(&self) -> GatewayResult<Vec<ApplicationCount>> {
        self.get_json("api/my/tasks/applications-count").await
    }

    async fn approve_application(
        &self,
        task: TaskId,
        application: ApplicationId,
    ) -> GatewayResult<()> {
        let response = self
            .post_empty(&format!("api/tasks/{task}/applications/{application}/approve"))
            .await?;
        if response.status().is_success() {
            return Ok(());
        }
        let (status, message) = Self::failure_parts(response).await;
        Err(GatewayError::from_approve_status(status, message))
    }

    async fn start_work(&self, task: TaskId) -> GatewayResult<()> {
        let response = self.post_empty(&format!("api/tasks/{task}/start-work")).await?;
        Self::expect_success(response).await
    }

    async fn finish_work(&self, task: TaskId) -> GatewayResult<()> {
        let response = self.post_empty(&format!("api/tasks/{task}/finish-work")).await?;
        Self::expect_success(response).await
    }

    async fn complete_task(&self, task: TaskId) -> GatewayResult<()> {
        let response = self.post_empty(&format!("api/tasks/{task}/complete")).await?;
        Self::expect_success(response).await
    }
}
