use crate::domain::dates::format_date;
use crate::domain::guest::Guest;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

const HEADERS: [&str; 9] = [
    "Last name",
    "First name",
    "Email",
    "Phone",
    "Nationality",
    "Document type",
    "Document number",
    "Notes",
    "Added",
];

/// One row per guest; returns the workbook bytes.
pub fn guests_workbook(guests: &[Guest]) -> Result<Vec<u8>, ServerError> {
    build(guests).map_err(|e| ServerError::XlsxError(e.to_string()))
}

fn build(guests: &[Guest]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Guests")?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, g) in guests.iter().enumerate() {
        let r = (i + 1) as u32;
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();

        worksheet.write_string(r, 0, &g.last_name)?;
        worksheet.write_string(r, 1, &g.first_name)?;
        worksheet.write_string(r, 2, opt(&g.email))?;
        worksheet.write_string(r, 3, opt(&g.phone))?;
        worksheet.write_string(r, 4, opt(&g.nationality))?;
        worksheet.write_string(r, 5, g.document_type.map(|t| t.label()).unwrap_or(""))?;
        worksheet.write_string(r, 6, opt(&g.document_id))?;
        worksheet.write_string(r, 7, opt(&g.notes))?;
        worksheet.write_string(r, 8, format_date(&g.created_at.saturating_mul(1000)))?;
    }

    worksheet.autofit();
    workbook.save_to_buffer()
}
