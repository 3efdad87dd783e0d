//! # API Client Integration Tests
//!
//! Runs the client and the session store against an in-process mock of the
//! remote API, counting every request the mock receives.

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use axum::{
        Json, Router,
        extract::{Path, Query, Request, State},
        http::{HeaderMap, StatusCode},
        middleware::{self, Next},
        response::{IntoResponse, Response},
        routing::{get, post},
    };
    use serde_json::{Value, json};

    use crate::{
        api::{ClientError, FitzClient},
        forms::{RegisterForm, SetField, WorkoutHandoff, prepare_workout_log},
        session::{MemoryStorage, SessionStorage, SessionStore, TOKEN_KEY, USER_KEY},
    };

    #[derive(Clone, Default)]
    struct MockApi {
        hits: Arc<AtomicUsize>,
        posted_workout: Arc<Mutex<Option<Value>>>,
        insights_down: bool,
    }

    impl MockApi {
        fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }
    }

    fn user_json(username: &str) -> Value {
        json!({ "_id": "u1", "username": username, "email": "a@b.com", "age": 30 })
    }

    fn bearer(headers: &HeaderMap) -> Option<&str> {
        headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
    }

    async fn count(State(api): State<MockApi>, request: Request, next: Next) -> Response {
        api.hits.fetch_add(1, Ordering::SeqCst);
        next.run(request).await
    }

    async fn login(Json(body): Json<Value>) -> Response {
        match (body["email"].as_str(), body["password"].as_str()) {
            (Some("a@b.com"), Some("secret")) => {
                Json(json!({ "token": "t1", "user": user_json("lifter") })).into_response()
            }
            (Some("token@only.com"), _) => Json(json!({ "token": "t2" })).into_response(),
            (Some("down@b.com"), _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            _ => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid credentials" })),
            )
                .into_response(),
        }
    }

    async fn register(Json(body): Json<Value>) -> Response {
        if body["username"] == "taken" {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "User already exists" })),
            )
                .into_response();
        }
        Json(json!({ "token": "t3", "user": { "username": body["username"] } })).into_response()
    }

    async fn profile(headers: HeaderMap) -> Response {
        match bearer(&headers) {
            Some("t1" | "t2") => Json(user_json("profiled")).into_response(),
            _ => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Token is not valid" })),
            )
                .into_response(),
        }
    }

    async fn exercises(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
        let page = query.get("page").cloned().unwrap_or_else(|| "none".to_string());
        Json(json!({
            "exercises": [{ "_id": "e1", "name": format!("Squat page {page}"), "muscleGroup": "legs" }],
            "totalPages": 3
        }))
    }

    async fn routines(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
        let page = query.get("page").cloned().unwrap_or_else(|| "none".to_string());
        Json(json!({
            "routines": [{ "_id": "r1", "name": format!("Legs page {page}"), "exercises": [] }],
            "totalPages": 2
        }))
    }

    async fn routine(Path(id): Path<String>) -> Response {
        if id != "r1" {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Routine not found" })),
            )
                .into_response();
        }
        Json(json!({
            "_id": "r1",
            "name": "Legs",
            "difficulty": "Beginner",
            "exercises": [
                { "_id": "re1", "exercise": { "_id": "squat", "name": "Squat" }, "sets": 3, "reps": 5 },
                { "_id": "re2", "exercise": "lunge", "sets": [{}, {}], "reps": 10 }
            ]
        }))
        .into_response()
    }

    async fn log_workout(State(api): State<MockApi>, Json(body): Json<Value>) -> Json<Value> {
        let routine = body["routine"].clone();
        if let Ok(mut posted) = api.posted_workout.lock() {
            *posted = Some(body);
        }
        Json(json!({ "_id": "w1", "routine": routine }))
    }

    async fn volume() -> Json<Value> {
        Json(json!({ "totalWorkouts": 4, "totalVolume": 12000, "averageVolumePerWorkout": 3000 }))
    }

    async fn insights(State(api): State<MockApi>) -> Response {
        if api.insights_down {
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
        Json(json!({
            "legs": { "totalVolume": 8000, "percentageOfTotal": 66.7 },
            "chest": { "totalVolume": 4000, "percentageOfTotal": 33.3 }
        }))
        .into_response()
    }

    async fn spawn(api: MockApi) -> FitzClient {
        let router = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/users/profile", get(profile))
            .route("/api/exercises", get(exercises))
            .route("/api/routines", get(routines))
            .route("/api/routines/{id}", get(routine))
            .route("/api/workouts", post(log_workout))
            .route("/api/progress/volume", get(volume))
            .route("/api/progress/muscle-insights", get(insights))
            .layer(middleware::from_fn_with_state(api.clone(), count))
            .with_state(api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        FitzClient::new(&format!("http://{address}/api/"))
    }

    fn valid_registration(username: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            email: "new@b.com".to_string(),
            password: "long enough".to_string(),
            age: "25".to_string(),
            gender: "male".to_string(),
            height: "180".to_string(),
            weight: "80".to_string(),
            weight_goal: "75".to_string(),
            main_goal: "Lose fat".to_string(),
            fitness_level: "intermediate".to_string(),
            preferred_workout_split: "Full body".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_token_and_user() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());

        let session = store.login(&client, "a@b.com", "secret").await.unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.user.username, "lifter");

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t1"));
        let restored = SessionStore::restore(storage);
        assert_eq!(restored.user().map(|user| user.username.as_str()), Some("lifter"));
        assert_eq!(api.hits(), 1);
    }

    #[tokio::test]
    async fn test_login_without_user_fetches_profile() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;
        let mut store = SessionStore::restore(MemoryStorage::new());

        let session = store.login(&client, "token@only.com", "whatever").await.unwrap();
        assert_eq!(session.token, "t2");
        assert_eq!(session.user.username, "profiled");
        assert_eq!(api.hits(), 2);
    }

    #[tokio::test]
    async fn test_login_failure_keeps_session_empty() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());

        let error = store.login(&client, "a@b.com", "wrong").await.unwrap_err();
        assert_eq!(error.to_string(), "Invalid credentials");
        assert_eq!(error.status(), Some(400));

        let error = store.login(&client, "down@b.com", "secret").await.unwrap_err();
        assert_eq!(error.to_string(), "Login failed");

        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
        assert_eq!(api.hits(), 2);
    }

    #[tokio::test]
    async fn test_invalid_registration_never_reaches_server() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;
        let mut store = SessionStore::restore(MemoryStorage::new());

        let form = RegisterForm {
            email: "not-an-email".to_string(),
            ..valid_registration("newbie")
        };
        let error = store.register(&client, &form).await.unwrap_err();
        assert!(matches!(error, ClientError::Validation(_)));
        assert_eq!(api.hits(), 0);
    }

    #[tokio::test]
    async fn test_register() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;
        let mut store = SessionStore::restore(MemoryStorage::new());

        let error = store
            .register(&client, &valid_registration("taken"))
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "User already exists");

        let session = store
            .register(&client, &valid_registration("newbie"))
            .await
            .unwrap();
        assert_eq!(session.token, "t3");
        assert_eq!(session.user.username, "newbie");
    }

    #[tokio::test]
    async fn test_revalidate_drops_rejected_token() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;
        let storage = MemoryStorage::with_entries([
            (TOKEN_KEY, "stale"),
            (USER_KEY, r#"{"username":"lifter"}"#),
        ]);
        let mut store = SessionStore::restore(storage.clone());
        assert!(store.is_authenticated());

        let error = store.revalidate(&client).await.unwrap_err();
        assert!(error.is_unauthorized());
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_revalidate_refreshes_user() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;
        let storage = MemoryStorage::with_entries([
            (TOKEN_KEY, "t1"),
            (USER_KEY, r#"{"username":"old name"}"#),
        ]);
        let mut store = SessionStore::restore(storage);

        let session = store.revalidate(&client).await.unwrap();
        assert_eq!(session.user.username, "profiled");
    }

    #[tokio::test]
    async fn test_exercise_page_request() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;

        let page = client.with_token("t1").exercises(2).await.unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].name, "Squat page 2");

        let catalogue = client.exercise_catalogue().await.unwrap();
        assert_eq!(catalogue[0].name, "Squat page none");
    }

    #[tokio::test]
    async fn test_routine_catalogue_is_unpaged() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await.with_token("t1");

        let catalogue = client.routine_catalogue().await.unwrap();
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue[0].name, "Legs page none");

        let page = client.routines(2).await.unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].name, "Legs page 2");
        assert_eq!(api.hits(), 2);
    }

    #[tokio::test]
    async fn test_log_workout_without_handoff_sends_nothing() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;

        let error = prepare_workout_log(&client, None).await.unwrap_err();
        assert!(matches!(error, ClientError::NoRoutineSelected));
        assert_eq!(error.to_string(), "No routine selected");
        assert_eq!(api.hits(), 0);
    }

    #[tokio::test]
    async fn test_log_workout_from_handoff() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await.with_token("t1");
        let handoff = WorkoutHandoff {
            routine_id: "r1".to_string(),
        };

        let mut draft = prepare_workout_log(&client, Some(&handoff)).await.unwrap();
        assert_eq!(draft.exercises[0].sets.len(), 3);
        assert_eq!(draft.exercises[1].sets.len(), 2);

        draft.duration = "40".to_string();
        draft.set_field(0, 2, SetField::Weight, "90".to_string());
        draft.set_field(0, 2, SetField::Reps, "5".to_string());
        let request = draft.to_request(Some("u1")).unwrap();
        let stored = client.log_workout(&request).await.unwrap();
        assert_eq!(stored.id, "w1");

        let posted = api.posted_workout.lock().unwrap().clone().unwrap();
        assert_eq!(posted["user"], "u1");
        assert_eq!(posted["routine"], "r1");
        assert_eq!(posted["duration"], 40);
        assert_eq!(posted["feelingRating"], 3);
        assert_eq!(posted["exercises"][0]["exercise"], "squat");
        assert_eq!(posted["exercises"][0]["sets"][2]["weight"], 90.0);
        assert_eq!(posted["exercises"][1]["sets"].as_array().map(Vec::len), Some(2));
        assert_eq!(api.hits(), 2);
    }

    #[tokio::test]
    async fn test_unknown_routine_reports_server_message() {
        let api = MockApi::default();
        let client = spawn(api).await;
        let handoff = WorkoutHandoff {
            routine_id: "missing".to_string(),
        };

        let error = prepare_workout_log(&client, Some(&handoff)).await.unwrap_err();
        assert_eq!(error.to_string(), "Routine not found");
    }

    #[tokio::test]
    async fn test_dashboard_joins_both_panels() {
        let api = MockApi::default();
        let client = spawn(api.clone()).await;

        let dashboard = client.dashboard().await.unwrap();
        assert_eq!(dashboard.volume.total_workouts, 4);
        let ranked = dashboard.ranked_muscle_groups();
        assert_eq!(ranked[0].0, "legs");
        assert_eq!(api.hits(), 2);
    }

    #[tokio::test]
    async fn test_dashboard_fails_when_either_panel_fails() {
        let api = MockApi {
            insights_down: true,
            ..MockApi::default()
        };
        let client = spawn(api.clone()).await;

        let error = client.dashboard().await.unwrap_err();
        assert!(matches!(error, ClientError::DashboardUnavailable));
        assert_eq!(error.to_string(), "Failed to fetch dashboard data");
        assert_eq!(api.hits(), 2);
    }

    #[test]
    fn test_api_url_joins_paths() {
        let client = FitzClient::new("http://localhost:5000/api/");
        assert_eq!(client.api_url("/routines"), "http://localhost:5000/api/routines");
        assert_eq!(client.api_url("routines/r1"), "http://localhost:5000/api/routines/r1");
        assert!(client.token().is_none());
        assert_eq!(client.with_token("t1").token(), Some("t1"));
    }
}
