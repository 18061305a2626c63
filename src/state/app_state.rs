// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::{AuthState, HomeState};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (login/logout)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Visibilidad e input del popup "Add Friend"
    AddFriendPopup,
    /// Re-renderizar solo la lista de amigos
    FriendsList,
}

/// Vista raíz que corresponde al estado actual
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Landing,
    Home,
}

type ChangeCallback = Rc<dyn Fn(UpdateType)>;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub home: HomeState,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<ChangeCallback>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            home: HomeState::new(),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Landing sin sesión, Home con sesión
    pub fn current_view(&self) -> AppView {
        if self.auth.is_logged_in() {
            AppView::Home
        } else {
            AppView::Landing
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar re-render completo
    pub fn notify_subscribers(&self) {
        self.notify_subscribers_with_type(UpdateType::FullRender);
    }

    /// Notificar a todos los subscribers con el tipo de actualización
    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Copia para que un callback pueda suscribir otro sin un doble borrow
        let subscribers: Vec<ChangeCallback> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update_type);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn starts_on_landing() {
        assert_eq!(AppState::new().current_view(), AppView::Landing);
    }

    #[test]
    fn subscribers_receive_update_type() {
        let state = AppState::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.subscribe_to_changes(move |update| seen.borrow_mut().push(update));
        }
        state.notify_subscribers();
        state.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::FriendsList));
        assert_eq!(
            *seen.borrow(),
            vec![
                UpdateType::FullRender,
                UpdateType::Incremental(IncrementalUpdate::FriendsList),
            ]
        );
    }
}
