#![allow(dead_code)]

use axum::Router;
use axum::extract::ConnectInfo;
use exoplanet_proxy::infrastructure::archive::{ArchiveSettings, TapArchiveClient};
use exoplanet_proxy::routes::{RouterSettings, app_router, build_router};
use exoplanet_proxy::state::AppState;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use url::Url;

pub const TAP_PATH: &str = "/TAP/sync";
pub const TEST_USER_AGENT: &str = "ExoplanetVisualization/1.0 (Educational)";

pub fn archive_settings(endpoint: &str, timeout: Duration) -> ArchiveSettings {
    ArchiveSettings {
        endpoint: Url::parse(endpoint).unwrap(),
        timeout,
        user_agent: TEST_USER_AGENT.to_string(),
    }
}

pub fn create_test_state(endpoint: &str) -> AppState {
    create_test_state_with_timeout(endpoint, Duration::from_secs(5))
}

pub fn create_test_state_with_timeout(endpoint: &str, timeout: Duration) -> AppState {
    let client = TapArchiveClient::new(archive_settings(endpoint, timeout)).unwrap();
    AppState::new(Arc::new(client))
}

/// Full router with a fake peer address so the per-IP limiter has a key.
pub fn test_router(state: AppState, settings: &RouterSettings) -> Router {
    build_router(state, settings).layer(MockConnectInfoLayer)
}

/// Same as [`test_router`], but through the trailing-slash normalization
/// that `server::run` serves.
pub fn normalized_test_router(state: AppState, settings: &RouterSettings) -> Router {
    Router::new()
        .fallback_service(app_router(state, settings))
        .layer(MockConnectInfoLayer)
}

pub fn kepler_11_rows() -> Value {
    let planets = [
        ("Kepler-11 b", 10.30375, 0.161, 0.091, 1.9),
        ("Kepler-11 c", 13.02502, 0.256, 0.107, 2.9),
        ("Kepler-11 d", 22.68719, 0.278, 0.155, 7.3),
        ("Kepler-11 e", 31.99590, 0.374, 0.195, 8.0),
        ("Kepler-11 f", 46.68876, 0.222, 0.25, 2.0),
        ("Kepler-11 g", 118.37774, 0.297, 0.466, 0.0),
    ];

    Value::Array(
        planets
            .iter()
            .map(|(name, period, radius, sma, mass)| {
                json!({
                    "pl_name": name,
                    "hostname": "Kepler-11",
                    "pl_orbper": period,
                    "pl_radj": radius,
                    "pl_orbsmax": sma,
                    "pl_masse": mass,
                    "st_rad": 1.065,
                    "st_mass": 0.961
                })
            })
            .collect(),
    )
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
