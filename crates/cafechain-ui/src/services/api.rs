//! HTTP client helpers (REST).

use crate::core::auth::AuthService;
use crate::core::config::UiConfig;
use crate::core::error::ApiError;
use crate::features::cafes::state::{Cafe, build_cafes_path};
use crate::features::leaderboard::state::LeaderboardEntry;
use async_trait::async_trait;
use cafechain_api_models::{CafeDto, ErrorBody, LeaderboardEntryDto, LoginRequest, LoginResponse};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};
use web_sys::AbortController;

const LOGIN_PATH: &str = "/api/auth/login";
const LEADERBOARD_PATH: &str = "/api/leaderboard";

#[derive(Debug)]
pub(crate) struct ApiClient {
    config: UiConfig,
    token: RefCell<Option<String>>,
    inflight_login: RefCell<Option<AbortController>>,
}

impl ApiClient {
    pub(crate) fn new(config: UiConfig) -> Self {
        Self {
            config,
            token: RefCell::new(None),
            inflight_login: RefCell::new(None),
        }
    }

    /// Replace the bearer token attached to authenticated calls.
    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    fn authorize(&self, req: Request) -> Request {
        match self.token.borrow().as_deref() {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.authorize(Request::get(&self.config.endpoint(path)));
        let resp = req.send().await.map_err(network)?;
        decode(resp).await
    }

    pub(crate) async fn fetch_cafes(&self, search: Option<&str>) -> Result<Vec<Cafe>, ApiError> {
        let data: Vec<CafeDto> = self.get_json(&build_cafes_path(search)).await?;
        Ok(data.into_iter().map(Cafe::from).collect())
    }

    pub(crate) async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let data: Vec<LeaderboardEntryDto> = self.get_json(LEADERBOARD_PATH).await?;
        Ok(data.into_iter().map(LeaderboardEntry::from).collect())
    }

    async fn post_login(
        &self,
        request: &LoginRequest,
        controller: &AbortController,
    ) -> Result<LoginResponse, ApiError> {
        let signal = controller.signal();
        let resp = Request::post(&self.config.endpoint(LOGIN_PATH))
            .abort_signal(Some(&signal))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        decode(resp).await
    }
}

#[async_trait(?Send)]
impl AuthService for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let controller = AbortController::new().map_err(|_| ApiError::Network {
            detail: "AbortController unavailable".to_string(),
        })?;
        if let Some(previous) = self.inflight_login.replace(Some(controller.clone())) {
            previous.abort();
        }
        let after_ms = self.config.login_timeout_ms();
        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(after_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };
        let result = self.post_login(request, &controller).await;
        drop(timer);
        self.inflight_login.borrow_mut().take();
        match result {
            Err(ApiError::Network { .. }) if timed_out.get() => {
                warn!(after_ms, "login request timed out");
                Err(ApiError::Timeout { after_ms })
            }
            other => other,
        }
    }

    fn cancel_login(&self) {
        if let Some(controller) = self.inflight_login.borrow_mut().take() {
            debug!("aborting in-flight login");
            controller.abort();
        }
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if resp.ok() {
        return resp.json::<T>().await.map_err(|err| ApiError::Decode {
            detail: err.to_string(),
        });
    }
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(ApiError::Status { status, message })
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network {
        detail: err.to_string(),
    }
}
