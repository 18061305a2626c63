// ============================================================================
// FRIENDS VIEWMODEL - Lista de amigos + popup "Add Friend"
// ============================================================================

use crate::models::Friend;
use crate::state::HomeState;

/// Resultado de confirmar el popup
#[derive(Debug, Clone, PartialEq)]
pub enum AddFriendOutcome {
    /// Email vacío: no cambia nada
    Ignored,
    /// Amigo agregado localmente (no se envía ninguna solicitud real)
    RequestSent(Friend),
}

pub struct FriendsViewModel {
    home: HomeState,
}

impl FriendsViewModel {
    pub fn new(home: &HomeState) -> Self {
        Self { home: home.clone() }
    }

    pub fn open_add_friend_popup(&self) {
        self.home.set_show_add_friend(true);
    }

    pub fn update_pending_email(&self, value: impl Into<String>) {
        self.home.set_pending_email(value.into());
    }

    pub fn confirm_add_friend(&self) -> AddFriendOutcome {
        let email = self.home.get_pending_email();
        if email.is_empty() {
            return AddFriendOutcome::Ignored;
        }

        let friend = Friend::from_email(self.home.take_friend_id(), &email);
        log::info!("👥 [FRIENDS] Amigo agregado: {} (id {})", friend.email, friend.id);
        self.home.friends.borrow_mut().push(friend.clone());
        self.home.set_pending_email(String::new());
        self.home.set_show_add_friend(false);

        AddFriendOutcome::RequestSent(friend)
    }

    /// Cerrar sin agregar. El email pendiente se conserva.
    pub fn cancel_add_friend(&self) {
        self.home.set_show_add_friend(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (HomeState, FriendsViewModel) {
        let home = HomeState::new();
        let vm = FriendsViewModel::new(&home);
        (home, vm)
    }

    #[test]
    fn open_and_type() {
        let (home, vm) = setup();
        vm.open_add_friend_popup();
        vm.update_pending_email("ja");
        vm.update_pending_email("jane@x.com");
        assert!(home.is_add_friend_open());
        assert_eq!(home.get_pending_email(), "jane@x.com");
    }

    #[test]
    fn confirm_with_empty_email_is_a_no_op() {
        let (home, vm) = setup();
        vm.open_add_friend_popup();
        assert_eq!(vm.confirm_add_friend(), AddFriendOutcome::Ignored);
        assert_eq!(home.friend_count(), 2);
        assert!(home.is_add_friend_open());

        let (closed_home, closed_vm) = setup();
        assert_eq!(closed_vm.confirm_add_friend(), AddFriendOutcome::Ignored);
        assert!(!closed_home.is_add_friend_open());
    }

    #[test]
    fn confirm_appends_friend_and_resets_form() {
        let (home, vm) = setup();
        let before = home.friend_count();
        vm.open_add_friend_popup();
        vm.update_pending_email("jane@x.com");

        let outcome = vm.confirm_add_friend();
        let expected = Friend {
            id: before as u32 + 1,
            name: "Jane".to_string(),
            last_hangout: "Never".to_string(),
            initial: "J".to_string(),
            email: "jane@x.com".to_string(),
        };
        assert_eq!(outcome, AddFriendOutcome::RequestSent(expected.clone()));
        assert_eq!(home.get_friends().last(), Some(&expected));
        assert_eq!(home.get_pending_email(), "");
        assert!(!home.is_add_friend_open());
    }

    #[test]
    fn insertion_order_is_kept() {
        let (home, vm) = setup();
        for email in ["amy@x.com", "ben@x.com"] {
            vm.open_add_friend_popup();
            vm.update_pending_email(email);
            vm.confirm_add_friend();
        }
        let names: Vec<String> = home.get_friends().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Selina", "Cindy", "Amy", "Ben"]);
        let ids: Vec<u32> = home.get_friends().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn cancel_closes_but_keeps_email() {
        let (home, vm) = setup();
        vm.open_add_friend_popup();
        vm.update_pending_email("jane@x.com");
        vm.cancel_add_friend();
        assert!(!home.is_add_friend_open());
        assert_eq!(home.get_pending_email(), "jane@x.com");
        assert_eq!(home.friend_count(), 2);
    }
}
