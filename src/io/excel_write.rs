use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::group::{QUESTION_COLUMN, QUESTION_SHEET, QuestionTable};

/// Writes the question table to the given path, overwriting any existing
/// file. One worksheet, the column header in the first row, one data row
/// per question, no index column.
pub fn write_table(path: &Path, table: &QuestionTable) -> Result<()> {
    let mut workbook = Workbook::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(QUESTION_SHEET)?;
    worksheet.write_string(0, 0, QUESTION_COLUMN)?;

    for (row_idx, question) in table.rows.iter().enumerate() {
        worksheet.write_string((row_idx + 1) as u32, 0, question)?;
    }

    workbook.save(path)?;
    Ok(())
}
