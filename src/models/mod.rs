pub mod session;
pub mod friend;
pub mod group;
pub mod hangout;
pub mod calendar;

pub use session::{AuthUser, Session};
pub use friend::Friend;
pub use group::Group;
pub use hangout::HangoutEntry;
pub use calendar::{CalendarDay, calendar_days};
