use crate::domain::booking::Booking;
use crate::domain::dates::format_date;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

const HEADERS: [&str; 7] = ["Guest", "Room", "Check-in", "Check-out", "Nights", "Beds", "Status"];

/// One row per booking, in the order given.
pub fn bookings_workbook(bookings: &[Booking]) -> Result<Vec<u8>, ServerError> {
    build(bookings).map_err(|e| ServerError::XlsxError(e.to_string()))
}

fn build(bookings: &[Booking]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Bookings")?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, b) in bookings.iter().enumerate() {
        let r = (i + 1) as u32;
        let nights = (b.check_out - b.check_in).num_days();

        worksheet.write_string(r, 0, &b.guest_name)?;
        worksheet.write_string(r, 1, &b.room_name)?;
        worksheet.write_string(r, 2, format_date(&b.check_in))?;
        worksheet.write_string(r, 3, format_date(&b.check_out))?;
        worksheet.write_number(r, 4, nights as f64)?;
        worksheet.write_number(r, 5, b.beds as f64)?;
        worksheet.write_string(r, 6, b.status.as_str())?;
    }

    worksheet.autofit();
    workbook.save_to_buffer()
}
