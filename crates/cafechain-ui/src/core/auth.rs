//! Session-aware auth controller shared by the navbar and login page.
//!
//! # Design
//! - Built once at startup and passed down as a prop; no ambient lookup.
//! - Depends on three narrow seams: the backend call, store dispatch and
//!   session persistence, so the flow is testable without a browser.
//! - Bad credentials are an ordinary [`LoginResult`]; only transport failures
//!   surface as [`AuthError`].

use crate::core::error::{ApiError, AuthError};
use crate::core::session::Session;
use crate::core::store::{ActionSink, AppAction};
use async_trait::async_trait;
use cafechain_api_models::{LoginRequest, LoginResponse};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Reason shown when the backend rejects credentials without a message.
pub const DEFAULT_REJECTION: &str = "Invalid phone number or password";

/// Backend authentication call.
#[async_trait(?Send)]
pub trait AuthService {
    /// Exchange credentials for a session payload.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Abort an in-flight login, if the transport supports it.
    fn cancel_login(&self) {}
}

/// Durable storage for the active session.
pub trait SessionPersistence {
    /// Read a previously saved session.
    fn load(&self) -> Option<Session>;
    /// Save the active session.
    fn save(&self, session: &Session);
    /// Forget any saved session.
    fn clear(&self);
}

/// Outcome of a login attempt that reached the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginResult {
    /// Whether a session was established.
    pub success: bool,
    /// Human-readable rejection reason.
    pub error: Option<String>,
}

impl LoginResult {
    const fn accepted() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn rejected(reason: Option<String>) -> Self {
        Self {
            success: false,
            error: Some(
                reason
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
            ),
        }
    }
}

/// Auth controller handed to components that sign users in or out.
#[derive(Clone)]
pub struct AuthCtx {
    service: Rc<dyn AuthService>,
    sink: Rc<dyn ActionSink>,
    persistence: Rc<dyn SessionPersistence>,
}

impl AuthCtx {
    /// Wire the controller to its collaborators.
    pub fn new(
        service: Rc<dyn AuthService>,
        sink: Rc<dyn ActionSink>,
        persistence: Rc<dyn SessionPersistence>,
    ) -> Self {
        Self {
            service,
            sink,
            persistence,
        }
    }

    /// Sign in with a phone number and password.
    ///
    /// On success the session is persisted and dispatched to the store before
    /// this returns, so subscribers already see it.
    ///
    /// # Errors
    /// Returns [`AuthError`] for network, timeout, decode and server failures.
    /// Rejected credentials are `Ok` with `success == false`.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<LoginResult, AuthError> {
        info!("login attempt");
        let request = LoginRequest {
            phone: identifier.to_string(),
            password: secret.to_string(),
        };
        match self.service.login(&request).await {
            Ok(response) => self.accept(response),
            Err(err) if err.is_credential_rejection() => {
                info!(error = %err, "login rejected");
                let message = match err {
                    ApiError::Status { message, .. } => message,
                    _ => None,
                };
                Ok(LoginResult::rejected(message))
            }
            Err(err) => {
                warn!(error = %err, "login failed");
                Err(err)
            }
        }
    }

    fn accept(&self, response: LoginResponse) -> Result<LoginResult, AuthError> {
        if !response.success {
            info!("login rejected");
            return Ok(LoginResult::rejected(response.message));
        }
        let Some(user) = response.user else {
            return Err(ApiError::Decode {
                detail: "login succeeded without a user payload".to_string(),
            });
        };
        let session = Session::from_user(user, response.token);
        info!(user_id = %session.user_id, "login succeeded");
        self.persistence.save(&session);
        self.sink.dispatch(AppAction::SignedIn(session));
        Ok(LoginResult::accepted())
    }

    /// Abort a pending login, e.g. when the login page unmounts.
    pub fn cancel_pending(&self) {
        debug!("cancelling pending login");
        self.service.cancel_login();
    }

    /// Drop the active session everywhere.
    pub fn logout(&self) {
        info!("logout");
        self.persistence.clear();
        self.sink.dispatch(AppAction::SignedOut);
    }

    /// Load a persisted session into the store at startup.
    pub fn restore(&self) -> Option<Session> {
        let session = self.persistence.load().filter(|s| s.authenticated);
        match &session {
            Some(s) => info!(user_id = %s.user_id, "session restored"),
            None => info!("no persisted session"),
        }
        self.sink.dispatch(AppAction::SessionRestored(session.clone()));
        session
    }
}

impl PartialEq for AuthCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.service, &other.service)
            && Rc::ptr_eq(&self.sink, &other.sink)
            && Rc::ptr_eq(&self.persistence, &other.persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{AppStore, apply_action, select_is_authenticated, select_session};
    use cafechain_api_models::UserDto;
    use std::cell::{Cell, RefCell};

    struct FakeService {
        reply: RefCell<Option<Result<LoginResponse, ApiError>>>,
        calls: Cell<usize>,
        cancels: Cell<usize>,
        last: RefCell<Option<LoginRequest>>,
    }

    impl FakeService {
        fn replying(reply: Result<LoginResponse, ApiError>) -> Rc<Self> {
            Rc::new(Self {
                reply: RefCell::new(Some(reply)),
                calls: Cell::new(0),
                cancels: Cell::new(0),
                last: RefCell::new(None),
            })
        }
    }

    #[async_trait(?Send)]
    impl AuthService for FakeService {
        async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(request.clone());
            self.reply.borrow_mut().take().unwrap_or(Err(ApiError::Network {
                detail: "no reply scripted".into(),
            }))
        }

        fn cancel_login(&self) {
            self.cancels.set(self.cancels.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        store: RefCell<AppStore>,
        seen: RefCell<Vec<AppAction>>,
    }

    impl ActionSink for RecordingSink {
        fn dispatch(&self, action: AppAction) {
            self.seen.borrow_mut().push(action.clone());
            apply_action(&mut self.store.borrow_mut(), action);
        }
    }

    #[derive(Default)]
    struct MemoryPersistence {
        saved: RefCell<Option<Session>>,
    }

    impl SessionPersistence for MemoryPersistence {
        fn load(&self) -> Option<Session> {
            self.saved.borrow().clone()
        }
        fn save(&self, session: &Session) {
            *self.saved.borrow_mut() = Some(session.clone());
        }
        fn clear(&self) {
            self.saved.borrow_mut().take();
        }
    }

    struct Harness {
        ctx: AuthCtx,
        service: Rc<FakeService>,
        sink: Rc<RecordingSink>,
        persistence: Rc<MemoryPersistence>,
    }

    fn harness(reply: Result<LoginResponse, ApiError>) -> Harness {
        let service = FakeService::replying(reply);
        let sink = Rc::new(RecordingSink::default());
        let persistence = Rc::new(MemoryPersistence::default());
        let ctx = AuthCtx::new(service.clone(), sink.clone(), persistence.clone());
        Harness {
            ctx,
            service,
            sink,
            persistence,
        }
    }

    fn accepted() -> LoginResponse {
        LoginResponse {
            success: true,
            message: None,
            token: Some("tok".into()),
            user: Some(UserDto {
                id: "u-7".into(),
                name: Some("Asha".into()),
                email: Some("asha@example.com".into()),
                phone: Some("9876543210".into()),
                profile_image: None,
            }),
        }
    }

    #[tokio::test]
    async fn success_updates_store_and_persistence() {
        let h = harness(Ok(accepted()));
        let result = h.ctx.login("9876543210", "secret").await.expect("login");
        assert_eq!(result, LoginResult::accepted());
        let store = h.sink.store.borrow();
        assert!(select_is_authenticated(&store));
        assert_eq!(
            select_session(&store).map(|s| s.user_id),
            Some("u-7".to_string())
        );
        assert!(h.persistence.saved.borrow().is_some());
        let sent = h.service.last.borrow().clone().expect("request");
        assert_eq!(sent.phone, "9876543210");
        assert_eq!(sent.password, "secret");
    }

    #[tokio::test]
    async fn backend_rejection_is_a_result_not_an_error() {
        let h = harness(Ok(LoginResponse {
            success: false,
            message: Some("Wrong password".into()),
            ..LoginResponse::default()
        }));
        let result = h.ctx.login("9876543210", "nope").await.expect("result");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Wrong password"));
        assert!(h.sink.seen.borrow().is_empty());
        assert!(h.persistence.saved.borrow().is_none());
    }

    #[tokio::test]
    async fn unauthorized_status_maps_to_rejection() {
        let h = harness(Err(ApiError::Status {
            status: 401,
            message: None,
        }));
        let result = h.ctx.login("9876543210", "nope").await.expect("result");
        assert_eq!(result.error.as_deref(), Some(DEFAULT_REJECTION));
    }

    #[tokio::test]
    async fn transport_failures_propagate() {
        let h = harness(Err(ApiError::Timeout { after_ms: 15_000 }));
        let err = h.ctx.login("9876543210", "secret").await.unwrap_err();
        assert_eq!(err, ApiError::Timeout { after_ms: 15_000 });

        let h = harness(Err(ApiError::Status {
            status: 502,
            message: Some("bad gateway".into()),
        }));
        assert!(h.ctx.login("9876543210", "secret").await.is_err());
        assert_eq!(h.service.calls.get(), 1);
    }

    #[tokio::test]
    async fn success_without_user_is_a_decode_error() {
        let h = harness(Ok(LoginResponse {
            success: true,
            ..LoginResponse::default()
        }));
        let err = h.ctx.login("9876543210", "secret").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(!select_is_authenticated(&h.sink.store.borrow()));
    }

    #[tokio::test]
    async fn logout_clears_store_and_persistence() {
        let h = harness(Ok(accepted()));
        h.ctx.login("9876543210", "secret").await.expect("login");
        h.ctx.logout();
        assert!(!select_is_authenticated(&h.sink.store.borrow()));
        assert!(h.persistence.saved.borrow().is_none());
        assert_eq!(h.sink.seen.borrow().last(), Some(&AppAction::SignedOut));
    }

    #[test]
    fn restore_loads_persisted_session() {
        let h = harness(Ok(accepted()));
        let session = Session::from_user(accepted().user.expect("user"), None);
        h.persistence.save(&session);
        assert_eq!(h.ctx.restore(), Some(session.clone()));
        let store = h.sink.store.borrow();
        assert!(store.session.restored);
        assert_eq!(select_session(&store), Some(session));
    }

    #[test]
    fn restore_without_session_marks_restored() {
        let h = harness(Ok(accepted()));
        assert_eq!(h.ctx.restore(), None);
        assert!(h.sink.store.borrow().session.restored);
        assert!(!select_is_authenticated(&h.sink.store.borrow()));
    }

    #[test]
    fn cancel_pending_reaches_the_transport() {
        let h = harness(Ok(accepted()));
        h.ctx.cancel_pending();
        assert_eq!(h.service.cancels.get(), 1);
        assert!(h.sink.seen.borrow().is_empty());
    }

    #[test]
    fn contexts_compare_by_identity() {
        let h = harness(Ok(accepted()));
        let clone = h.ctx.clone();
        assert!(clone == h.ctx);
        let other = harness(Ok(accepted()));
        assert!(other.ctx != h.ctx);
    }
}
