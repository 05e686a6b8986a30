use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{ConvertError, Result};
use crate::group::{QUESTION_COLUMN, QUESTION_SHEET};

/// Reads question rows from an Excel workbook following the conventions
/// produced by the [`excel_write`](crate::io::excel_write) module.
pub fn read_table(path: &Path) -> Result<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = read_required_sheet(&mut workbook, QUESTION_SHEET)?;

    let header = match range.rows().next() {
        Some(first_row) => cell_to_string(first_row.first()),
        None => {
            return Err(ConvertError::InvalidWorkbook(format!(
                "sheet '{QUESTION_SHEET}' has no header row"
            )));
        }
    };
    if header != QUESTION_COLUMN {
        return Err(ConvertError::InvalidWorkbook(format!(
            "unexpected header '{header}', expected '{QUESTION_COLUMN}'"
        )));
    }

    let mut questions = Vec::new();
    for row in range.rows().skip(1) {
        let value = cell_to_string(row.first());
        if value.is_empty() {
            continue;
        }
        questions.push(value);
    }

    Ok(questions)
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<calamine::Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ConvertError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    let range = range_result.map_err(ConvertError::from)?;
    Ok(range)
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
