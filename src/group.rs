/// Literal markers opening an answer-choice line. Lines starting with any of
/// these continue the question begun on an earlier line; extending the
/// recognised set is a change to this constant alone.
pub const CHOICE_PREFIXES: [&str; 4] = ["A.", "B.", "C.", "D."];

/// Header of the single question column.
pub const QUESTION_COLUMN: &str = "题目";

/// Name of the worksheet the question table is written to.
pub const QUESTION_SHEET: &str = "Sheet1";

/// The single-column table materialised as the output worksheet. Row order
/// equals the order in which records were completed during the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionTable {
    pub rows: Vec<String>,
}

impl QuestionTable {
    /// Wraps an ordered sequence of question records.
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }
}

/// Returns true when the stripped line carries an answer choice rather than
/// a new question stem. Matching is a literal, case-sensitive prefix check.
pub fn is_choice_line(line: &str) -> bool {
    CHOICE_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Groups raw input lines into one record per question.
///
/// Single forward pass, no lookahead. Each non-choice, non-blank line opens
/// a record; choice lines are appended to the open record behind a single
/// space; blank lines contribute nothing and never terminate a record. The
/// trailing record is flushed after the pass.
///
/// A choice line arriving before any question stem opens a record of its
/// own, consisting of a leading space followed by the choice text.
pub fn group_questions<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut questions = Vec::new();
    let mut current = String::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_choice_line(line) {
            current.push(' ');
            current.push_str(line);
        } else {
            if !current.is_empty() {
                questions.push(current);
            }
            current = line.to_string();
        }
    }

    if !current.is_empty() {
        questions.push(current);
    }

    questions
}
