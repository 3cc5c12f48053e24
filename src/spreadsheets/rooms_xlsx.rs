use crate::domain::property::Room;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Room list with a bed total underneath.
pub fn rooms_workbook(rooms: &[Room]) -> Result<Vec<u8>, ServerError> {
    build(rooms).map_err(|e| ServerError::XlsxError(e.to_string()))
}

fn build(rooms: &[Room]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Rooms")?;

    let bold = Format::new().set_bold();
    worksheet.write_string_with_format(0, 0, "Room", &bold)?;
    worksheet.write_string_with_format(0, 1, "Beds", &bold)?;

    for (i, room) in rooms.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &room.name)?;
        worksheet.write_number(r, 1, room.beds as f64)?;
    }

    let total_row = (rooms.len() + 1) as u32;
    let total: i64 = rooms.iter().map(|r| r.beds).sum();
    worksheet.write_string_with_format(total_row, 0, "Total", &bold)?;
    worksheet.write_number_with_format(total_row, 1, total as f64, &bold)?;

    worksheet.autofit();
    workbook.save_to_buffer()
}
