//! # API client
//!
//! [`FitzClient`] wraps a `reqwest` client and the remote API's base URL. It
//! is cheap to clone; [`FitzClient::with_token`] derives an authenticated
//! copy for a session. No request is ever retried.

mod error;
mod integration_tests;

pub use error::ClientError;

use futures_util::future::join;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::models::{
    AuthResponse, CreateRoutineRequest, CreateWorkoutRequest, Dashboard, ErrorResponse, Exercise,
    ExerciseListResponse, LoginRequest, MuscleInsights, Page, RegisterRequest, Routine,
    RoutineListResponse, User, VolumeSummary, WorkoutListResponse, WorkoutLog,
};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Typed client for the remote fitness API.
#[derive(Clone, Debug)]
pub struct FitzClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl FitzClient {
    /// Create an unauthenticated client for `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    /// Copy of this client that sends `token` as a bearer credential.
    #[must_use]
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "api request");
        let request = self.client.request(method, self.api_url(path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send `request`, turning non-2xx answers into [`ClientError::Server`]
    /// with the server's message or `fallback`.
    async fn send(request: RequestBuilder, fallback: &str) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "api response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = ErrorResponse::message_from_body(&body, fallback);
        warn!(status = status.as_u16(), %message, "api request rejected");
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let response = Self::send(request, fallback).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|error| {
            warn!(%error, "api response did not match the expected shape");
            ClientError::Decode(error)
        })
    }

    fn page_request(&self, path: &str, page: u32) -> RequestBuilder {
        self.request(Method::GET, path).query(&[("page", page)])
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    /// The server's message, or "Login failed".
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let request = self.request(Method::POST, "auth/login").json(payload);
        Self::fetch(request, "Login failed").await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    /// The server's message, or "Registration failed".
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let request = self.request(Method::POST, "auth/register").json(payload);
        Self::fetch(request, "Registration failed").await
    }

    /// `GET /users/profile` for the token this client carries.
    ///
    /// # Errors
    /// A 401 [`ClientError::Server`] when the token is rejected.
    pub async fn profile(&self) -> Result<User, ClientError> {
        let request = self.request(Method::GET, "users/profile");
        Self::fetch(request, "Failed to fetch user profile").await
    }

    /// One page of the exercise catalogue.
    ///
    /// # Errors
    /// Transport, server, and decode failures.
    pub async fn exercises(&self, page: u32) -> Result<Page<Exercise>, ClientError> {
        let request = self.page_request("exercises", page);
        Self::fetch::<ExerciseListResponse>(request, "Failed to fetch exercises")
            .await
            .map(Page::from)
    }

    /// The catalogue's default listing, used by exercise pickers.
    ///
    /// # Errors
    /// Transport, server, and decode failures.
    pub async fn exercise_catalogue(&self) -> Result<Vec<Exercise>, ClientError> {
        let request = self.request(Method::GET, "exercises");
        Self::fetch::<ExerciseListResponse>(request, "Failed to fetch exercises")
            .await
            .map(|response| response.exercises)
    }

    /// One page of routines.
    ///
    /// # Errors
    /// Transport, server, and decode failures.
    pub async fn routines(&self, page: u32) -> Result<Page<Routine>, ClientError> {
        let request = self.page_request("routines", page);
        Self::fetch::<RoutineListResponse>(request, "Failed to fetch routines")
            .await
            .map(Page::from)
    }

    /// Every routine, unpaged, for the workout picker.
    ///
    /// # Errors
    /// Transport, server, and decode failures.
    pub async fn routine_catalogue(&self) -> Result<Vec<Routine>, ClientError> {
        let request = self.request(Method::GET, "routines");
        Self::fetch::<RoutineListResponse>(request, "Failed to fetch routines")
            .await
            .map(|response| response.routines)
    }

    /// `GET /routines/:id`.
    ///
    /// # Errors
    /// Transport, server, and decode failures.
    pub async fn routine(&self, id: &str) -> Result<Routine, ClientError> {
        let request = self.request(Method::GET, &format!("routines/{id}"));
        Self::fetch(request, "Failed to fetch routine details").await
    }

    /// `POST /routines`, returning the stored routine.
    ///
    /// # Errors
    /// The server's message, or "Failed to create routine".
    pub async fn create_routine(
        &self,
        payload: &CreateRoutineRequest,
    ) -> Result<Routine, ClientError> {
        let request = self.request(Method::POST, "routines").json(payload);
        Self::fetch(request, "Failed to create routine").await
    }

    /// One page of logged workouts.
    ///
    /// # Errors
    /// Transport, server, and decode failures.
    pub async fn workouts(&self, page: u32) -> Result<Page<WorkoutLog>, ClientError> {
        let request = self.page_request("workouts", page);
        Self::fetch::<WorkoutListResponse>(request, "Failed to fetch workouts")
            .await
            .map(Page::from)
    }

    /// `POST /workouts`, returning the stored log.
    ///
    /// # Errors
    /// The server's message, or "Failed to log workout".
    pub async fn log_workout(
        &self,
        payload: &CreateWorkoutRequest,
    ) -> Result<WorkoutLog, ClientError> {
        let request = self.request(Method::POST, "workouts").json(payload);
        Self::fetch(request, "Failed to log workout").await
    }

    /// `GET /progress/volume`.
    ///
    /// # Errors
    /// Transport, server, and decode failures.
    pub async fn volume(&self) -> Result<VolumeSummary, ClientError> {
        let request = self.request(Method::GET, "progress/volume");
        Self::fetch(request, "Failed to fetch volume summary").await
    }

    /// `GET /progress/muscle-insights`.
    ///
    /// # Errors
    /// Transport, server, and decode failures.
    pub async fn muscle_insights(&self) -> Result<MuscleInsights, ClientError> {
        let request = self.request(Method::GET, "progress/muscle-insights");
        Self::fetch(request, "Failed to fetch muscle insights").await
    }

    /// Both dashboard aggregates, requested concurrently.
    ///
    /// # Errors
    /// [`ClientError::DashboardUnavailable`] if either request fails.
    pub async fn dashboard(&self) -> Result<Dashboard, ClientError> {
        match join(self.volume(), self.muscle_insights()).await {
            (Ok(volume), Ok(muscle_insights)) => Ok(Dashboard {
                volume,
                muscle_insights,
            }),
            (volume, insights) => {
                if let Err(error) = volume {
                    warn!(%error, "volume summary unavailable");
                }
                if let Err(error) = insights {
                    warn!(%error, "muscle insights unavailable");
                }
                Err(ClientError::DashboardUnavailable)
            }
        }
    }
}
