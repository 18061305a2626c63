// ============================================================================
// HOME STATE - Estado del dashboard (amigos, popup, datos estáticos)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Friend, Group, HangoutEntry};

#[derive(Clone)]
pub struct HomeState {
    pub friends: Rc<RefCell<Vec<Friend>>>,
    /// Contador monótono de ids (no depende de la longitud de la lista)
    pub next_friend_id: Rc<RefCell<u32>>,

    // Popup "Add Friend"
    pub show_add_friend: Rc<RefCell<bool>>,
    pub pending_email: Rc<RefCell<String>>,

    // Datos estáticos (solo lectura)
    pub groups: Rc<Vec<Group>>,
    pub history: Rc<Vec<HangoutEntry>>,
}

impl HomeState {
    pub fn new() -> Self {
        let friends = Friend::seed();
        let next_id = next_id_after(&friends);
        Self {
            friends: Rc::new(RefCell::new(friends)),
            next_friend_id: Rc::new(RefCell::new(next_id)),
            show_add_friend: Rc::new(RefCell::new(false)),
            pending_email: Rc::new(RefCell::new(String::new())),
            groups: Rc::new(Group::seed()),
            history: Rc::new(HangoutEntry::seed()),
        }
    }

    /// Volver a los datos iniciales (el dashboard se desmonta al hacer logout).
    /// Se modifica en sitio para que los clones compartidos sigan siendo válidos.
    pub fn reset(&self) {
        let friends = Friend::seed();
        *self.next_friend_id.borrow_mut() = next_id_after(&friends);
        *self.friends.borrow_mut() = friends;
        *self.show_add_friend.borrow_mut() = false;
        self.pending_email.borrow_mut().clear();
    }

    pub fn get_friends(&self) -> Vec<Friend> {
        self.friends.borrow().clone()
    }

    pub fn friend_count(&self) -> usize {
        self.friends.borrow().len()
    }

    pub fn is_add_friend_open(&self) -> bool {
        *self.show_add_friend.borrow()
    }

    pub fn set_show_add_friend(&self, show: bool) {
        *self.show_add_friend.borrow_mut() = show;
    }

    pub fn get_pending_email(&self) -> String {
        self.pending_email.borrow().clone()
    }

    pub fn set_pending_email(&self, email: String) {
        *self.pending_email.borrow_mut() = email;
    }

    /// Reservar el siguiente id de amigo
    pub fn take_friend_id(&self) -> u32 {
        let mut next = self.next_friend_id.borrow_mut();
        let id = *next;
        *next += 1;
        id
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id_after(friends: &[Friend]) -> u32 {
    friends.iter().map(|f| f.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_seed() {
        let home = HomeState::new();
        assert_eq!(home.friend_count(), 2);
        assert!(!home.is_add_friend_open());
        assert_eq!(home.get_pending_email(), "");
        assert_eq!(home.groups.len(), 3);
        assert_eq!(home.history.len(), 2);
    }

    #[test]
    fn ids_are_monotonic() {
        let home = HomeState::new();
        assert_eq!(home.take_friend_id(), 3);
        assert_eq!(home.take_friend_id(), 4);
    }

    #[test]
    fn reset_is_visible_through_clones() {
        let home = HomeState::new();
        let shared = home.clone();
        home.set_show_add_friend(true);
        home.set_pending_email("x@y.z".to_string());
        home.take_friend_id();
        shared.reset();
        assert!(!home.is_add_friend_open());
        assert_eq!(home.get_pending_email(), "");
        assert_eq!(home.take_friend_id(), 3);
    }
}
