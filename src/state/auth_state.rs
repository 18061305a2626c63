// ============================================================================
// AUTH STATE - Sesión actual (root controller)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::session::Session;

/// Estado de autenticación: la sesión (si existe) y el intento de sign-in en curso
#[derive(Clone)]
pub struct AuthState {
    pub session: Rc<RefCell<Option<Session>>>,
    /// Id del intento de sign-in en vuelo (None = ninguno)
    pub pending_attempt: Rc<RefCell<Option<u64>>>,
    next_attempt: Rc<RefCell<u64>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(None)),
            pending_attempt: Rc::new(RefCell::new(None)),
            next_attempt: Rc::new(RefCell::new(1)),
        }
    }

    /// Guardar sesión (login)
    pub fn login(&self, session: Session) {
        *self.session.borrow_mut() = Some(session);
    }

    /// Logout - limpia la sesión e invalida cualquier sign-in en vuelo
    pub fn logout(&self) {
        *self.session.borrow_mut() = None;
        self.cancel_sign_in();
    }

    pub fn get_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Reservar un intento de sign-in. None si ya hay uno en vuelo.
    pub fn begin_sign_in(&self) -> Option<u64> {
        let mut pending = self.pending_attempt.borrow_mut();
        if pending.is_some() {
            return None;
        }
        let mut next = self.next_attempt.borrow_mut();
        let attempt = *next;
        *next += 1;
        *pending = Some(attempt);
        Some(attempt)
    }

    /// Cerrar el intento. Devuelve false si fue cancelado (o reemplazado) entretanto.
    pub fn finish_sign_in(&self, attempt: u64) -> bool {
        let mut pending = self.pending_attempt.borrow_mut();
        if *pending == Some(attempt) {
            *pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel_sign_in(&self) {
        *self.pending_attempt.borrow_mut() = None;
    }

    pub fn is_signing_in(&self) -> bool {
        self.pending_attempt.borrow().is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_attempt_in_flight() {
        let auth = AuthState::new();
        let first = auth.begin_sign_in();
        assert!(first.is_some());
        assert_eq!(auth.begin_sign_in(), None);
        assert!(auth.finish_sign_in(first.unwrap()));
        assert!(!auth.is_signing_in());
        assert!(auth.begin_sign_in().is_some());
    }

    #[test]
    fn cancelled_attempt_is_stale() {
        let auth = AuthState::new();
        let attempt = auth.begin_sign_in().unwrap();
        auth.cancel_sign_in();
        let newer = auth.begin_sign_in().unwrap();
        assert_ne!(attempt, newer);
        assert!(!auth.finish_sign_in(attempt));
        assert!(auth.is_signing_in());
    }
}
