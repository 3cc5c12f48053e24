pub mod bookings_xlsx;
pub mod guests_xlsx;
pub mod rooms_xlsx;

pub use bookings_xlsx::bookings_workbook;
pub use guests_xlsx::guests_workbook;
pub use rooms_xlsx::rooms_workbook;
