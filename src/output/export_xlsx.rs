use crate::domain::reconciled::ReconciledRow;
use crate::errors::PipelineError;
use rust_xlsxwriter::{Workbook, Worksheet};

/// Write the reconciled batch to a spreadsheet, one row per listing.
pub fn export_reconciled_xlsx(rows: &[ReconciledRow], path: &str) -> Result<(), PipelineError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Address",
        "Clean Address",
        "Postal",
        "Zip",
        "Sq Ft",
        "Bedrooms",
        "List Price",
        "Price / Sq Ft",
        "Median Income",
        "School Rating",
        "Crime Index",
        "Lat",
        "Lon",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                PipelineError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;

        write_text(worksheet, r, 0, row.raw_address.as_deref())?;
        write_text(worksheet, r, 1, row.clean_address.as_deref())?;
        write_text(worksheet, r, 2, row.postal_code.as_deref())?;
        write_text(worksheet, r, 3, row.zip_code.as_deref())?;
        write_number(worksheet, r, 4, row.sq_ft)?;
        write_number(worksheet, r, 5, row.bedrooms.map(|b| b as f64))?;
        write_number(worksheet, r, 6, row.listing_price)?;
        write_number(worksheet, r, 7, row.price_per_sqft)?;
        write_number(worksheet, r, 8, row.median_income)?;
        write_number(worksheet, r, 9, row.school_rating)?;
        write_text(worksheet, r, 10, row.crime_index.as_deref())?;
        write_number(worksheet, r, 11, row.lat)?;
        write_number(worksheet, r, 12, row.lon)?;
    }

    workbook
        .save(path)
        .map_err(|e| PipelineError::XlsxError(format!("Failed to save workbook: {}", e)))?;
    Ok(())
}

// Absent values stay blank cells rather than zeros or empty strings.
fn write_number(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
) -> Result<(), PipelineError> {
    if let Some(v) = value {
        worksheet.write_number(row, col, v).map_err(|e| {
            PipelineError::XlsxError(format!("Failed to write cell ({row}, {col}): {e}"))
        })?;
    }
    Ok(())
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&str>,
) -> Result<(), PipelineError> {
    if let Some(v) = value {
        worksheet.write_string(row, col, v).map_err(|e| {
            PipelineError::XlsxError(format!("Failed to write cell ({row}, {col}): {e}"))
        })?;
    }
    Ok(())
}
