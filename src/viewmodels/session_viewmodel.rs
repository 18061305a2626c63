// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN (root controller + landing)
// ============================================================================
// Login/logout y sign-in contra el proveedor de identidad.
// Devuelve Result etiquetado; las vistas solo deciden qué re-renderizar.
// ============================================================================

use crate::models::session::Session;
use crate::services::{AuthError, FirebaseIdentityProvider, IdentityProvider};
use crate::state::AppState;

/// ViewModel de sesión - SOLO lógica
pub struct SessionViewModel<P: IdentityProvider = FirebaseIdentityProvider> {
    provider: P,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self::with_provider(FirebaseIdentityProvider::from_config())
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: IdentityProvider> SessionViewModel<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Sign-in: un solo intento por click, sin reintentos.
    /// En error la sesión queda como estaba (sin feedback visible, solo log).
    pub async fn sign_in(&self, state: &AppState) -> Result<Session, AuthError> {
        let attempt = match state.auth.begin_sign_in() {
            Some(attempt) => attempt,
            None => {
                log::warn!("⚠️ [AUTH] Sign-in ya en curso, ignorando click");
                return Err(AuthError::AlreadyInProgress);
            }
        };

        log::info!("🔐 [AUTH] Iniciando sign-in (intento {})", attempt);
        let result = self.provider.sign_in().await;

        if !state.auth.finish_sign_in(attempt) {
            log::warn!("⚠️ [AUTH] Intento {} cancelado, descartando resultado", attempt);
            return Err(AuthError::Cancelled);
        }

        match result {
            Ok(session) => {
                log::info!("✅ [AUTH] Sesión iniciada: {}", session.user.label());
                self.login(state, session.clone());
                Ok(session)
            }
            // Popup cerrado sin usuario: no es un fallo, solo se ignora
            Err(AuthError::NoUser) => {
                log::warn!("⚠️ [AUTH] El proveedor no devolvió usuario");
                Err(AuthError::NoUser)
            }
            Err(e) => {
                log::error!("❌ [AUTH] Login error: {}", e);
                Err(e)
            }
        }
    }

    /// Guardar sesión => la vista pasa de Landing a Home (dashboard recién montado)
    pub fn login(&self, state: &AppState, session: Session) {
        state.home.reset();
        state.auth.login(session);
    }

    /// Limpiar sesión => la vista vuelve a Landing
    pub fn logout(&self, state: &AppState) {
        log::info!("👋 [AUTH] Logout");
        state.auth.logout();
        state.home.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::AuthUser;
    use crate::state::{AppView, AuthState};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct ScriptedProvider {
        result: Result<Session, AuthError>,
        calls: RefCell<u32>,
        // Simula un logout mientras el popup del proveedor está abierto
        cancel_during_call: Option<AuthState>,
    }

    impl ScriptedProvider {
        fn returning(result: Result<Session, AuthError>) -> Self {
            Self {
                result,
                calls: RefCell::new(0),
                cancel_during_call: None,
            }
        }
    }

    #[async_trait(?Send)]
    impl IdentityProvider for ScriptedProvider {
        async fn sign_in(&self) -> Result<Session, AuthError> {
            *self.calls.borrow_mut() += 1;
            if let Some(auth) = &self.cancel_during_call {
                auth.logout();
            }
            self.result.clone()
        }
    }

    fn jane_session() -> Session {
        Session::new(
            AuthUser {
                uid: Some("u1".to_string()),
                display_name: Some("Jane".to_string()),
                email: Some("jane@x.com".to_string()),
            },
            Some("tok".to_string()),
        )
    }

    #[test]
    fn successful_sign_in_moves_to_home() {
        let state = AppState::new();
        let vm = SessionViewModel::with_provider(ScriptedProvider::returning(Ok(jane_session())));

        let session = block_on(vm.sign_in(&state)).unwrap();
        assert_eq!(session.token.as_deref(), Some("tok"));
        assert_eq!(state.current_view(), AppView::Home);
        assert!(!state.auth.is_signing_in());
    }

    #[test]
    fn failed_sign_in_keeps_landing() {
        let state = AppState::new();
        let vm = SessionViewModel::with_provider(ScriptedProvider::returning(Err(
            AuthError::Rejected("popup closed".to_string()),
        )));

        let err = block_on(vm.sign_in(&state)).unwrap_err();
        assert_eq!(err, AuthError::Rejected("popup closed".to_string()));
        assert!(state.auth.get_session().is_none());
        assert_eq!(state.current_view(), AppView::Landing);
        // Se puede volver a intentar
        assert!(!state.auth.is_signing_in());
    }

    #[test]
    fn missing_user_keeps_landing_and_allows_retry() {
        let state = AppState::new();
        let vm = SessionViewModel::with_provider(ScriptedProvider::returning(Err(AuthError::NoUser)));

        let err = block_on(vm.sign_in(&state)).unwrap_err();
        assert_eq!(err, AuthError::NoUser);
        assert_eq!(state.current_view(), AppView::Landing);
        assert!(!state.auth.is_signing_in());
    }

    #[test]
    fn second_click_while_in_flight_is_rejected() {
        let state = AppState::new();
        let provider = ScriptedProvider::returning(Ok(jane_session()));
        let vm = SessionViewModel::with_provider(provider);

        let _first = state.auth.begin_sign_in().unwrap();
        let err = block_on(vm.sign_in(&state)).unwrap_err();
        assert_eq!(err, AuthError::AlreadyInProgress);
        assert_eq!(*vm.provider.calls.borrow(), 0);
        assert_eq!(state.current_view(), AppView::Landing);
    }

    #[test]
    fn result_of_cancelled_attempt_is_discarded() {
        let state = AppState::new();
        let mut provider = ScriptedProvider::returning(Ok(jane_session()));
        provider.cancel_during_call = Some(state.auth.clone());
        let vm = SessionViewModel::with_provider(provider);

        let err = block_on(vm.sign_in(&state)).unwrap_err();
        assert_eq!(err, AuthError::Cancelled);
        assert_eq!(state.current_view(), AppView::Landing);
    }

    #[test]
    fn login_then_logout_round_trip() {
        let state = AppState::new();
        let vm = SessionViewModel::with_provider(ScriptedProvider::returning(Err(AuthError::NoUser)));
        let mut views = vec![state.current_view()];

        vm.login(&state, jane_session());
        views.push(state.current_view());
        vm.logout(&state);
        views.push(state.current_view());

        assert_eq!(views, vec![AppView::Landing, AppView::Home, AppView::Landing]);
    }

    #[test]
    fn dashboard_starts_fresh_after_relogin() {
        let state = AppState::new();
        let vm = SessionViewModel::with_provider(ScriptedProvider::returning(Err(AuthError::NoUser)));

        vm.login(&state, jane_session());
        let id = state.home.take_friend_id();
        state.home.friends.borrow_mut().push(crate::models::Friend::from_email(id, "bob@x.com"));
        state.home.set_show_add_friend(true);
        vm.logout(&state);
        vm.login(&state, jane_session());

        assert_eq!(state.home.friend_count(), 2);
        assert!(!state.home.is_add_friend_open());
    }
}
