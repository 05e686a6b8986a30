use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::group::{self, QuestionTable};
use crate::io::excel_write;

/// Reads the question text file and materialises it as an Excel workbook.
///
/// The whole input is read into memory up front; nothing is written until
/// every line has been grouped, so a failing read leaves no partial output
/// behind.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn text_to_excel(input: &Path, output: &Path) -> Result<()> {
    let source = fs::read_to_string(input)?;
    let questions = group::group_questions(source.lines());
    info!(
        question_count = questions.len(),
        "grouped questions from text source"
    );
    let table = QuestionTable::new(questions);
    debug!(row_count = table.rows.len(), "question table constructed");
    excel_write::write_table(output, &table)
}
