pub mod session_viewmodel;
pub mod friends_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use friends_viewmodel::{AddFriendOutcome, FriendsViewModel};
