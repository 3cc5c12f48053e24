pub mod bookings;
pub mod dashboard;
pub mod error;
pub mod guests;
pub mod home;
pub mod login;
pub mod properties;
pub mod rooms;

pub use bookings::{bookings_page, BookingsVm};
pub use dashboard::{dashboard_page, property_dashboard_page, DashboardVm, PropertyDashboardVm};
pub use error::error_page;
pub use guests::{guest_form_page, guest_list_page, GuestFormMode};
pub use home::home_page;
pub use login::{check_email_content, check_email_page, login_page};
pub use properties::properties_page;
pub use rooms::{room_edit_page, rooms_page, RoomsVm};
