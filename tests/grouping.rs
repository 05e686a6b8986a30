use questionbank::group::{CHOICE_PREFIXES, group_questions, is_choice_line};

#[test]
fn choice_lines_merge_into_the_preceding_question() {
    let input = "\
1. What is 2+2?
A. 3
B. 4
C. 5
D. 6
2. What color is the sky?
A. Red
B. Blue
";

    let questions = group_questions(input.lines());

    assert_eq!(
        questions,
        vec![
            "1. What is 2+2? A. 3 B. 4 C. 5 D. 6",
            "2. What color is the sky? A. Red B. Blue",
        ]
    );
}

#[test]
fn blank_lines_never_split_a_record() {
    let input = "\
1. What is 2+2?

A. 3
B. 4


C. 5
D. 6

2. What color is the sky?
A. Red

B. Blue

";

    let questions = group_questions(input.lines());

    assert_eq!(
        questions,
        vec![
            "1. What is 2+2? A. 3 B. 4 C. 5 D. 6",
            "2. What color is the sky? A. Red B. Blue",
        ]
    );
}

#[test]
fn bare_questions_each_form_their_own_record() {
    let input = "First question with no choices\nSecond one\n第三题，没有选项\n";

    let questions = group_questions(input.lines());

    assert_eq!(
        questions,
        vec![
            "First question with no choices",
            "Second one",
            "第三题，没有选项",
        ]
    );
}

#[test]
fn empty_input_yields_no_records() {
    assert!(group_questions("".lines()).is_empty());
    assert!(group_questions("\n\n   \n\t\n".lines()).is_empty());
}

#[test]
fn surrounding_whitespace_is_stripped_before_grouping() {
    let input = "  1. Padded question?  \n\tA. indented choice\nB. plain choice   \n";

    let questions = group_questions(input.lines());

    assert_eq!(
        questions,
        vec!["1. Padded question? A. indented choice B. plain choice"]
    );
}

#[test]
fn leading_choice_line_opens_a_degenerate_record() {
    let input = "A. orphaned choice\n1. Real question?\nB. attached choice\n";

    let questions = group_questions(input.lines());

    assert_eq!(
        questions,
        vec![" A. orphaned choice", "1. Real question? B. attached choice"]
    );
}

#[test]
fn record_count_matches_question_start_lines() {
    let input = "\
Q one
A. x
Q two
Q three
B. y
C. z
Q four
";

    let questions = group_questions(input.lines());

    assert_eq!(questions.len(), 4);
    assert_eq!(questions[1], "Q two");
    assert_eq!(questions[2], "Q three B. y C. z");
}

#[test]
fn choice_classification_is_a_literal_prefix_match() {
    for prefix in CHOICE_PREFIXES {
        assert!(is_choice_line(&format!("{prefix} some choice text")));
    }

    // Only the four uppercase dotted markers are recognised.
    assert!(is_choice_line("A.3"));
    assert!(!is_choice_line("a. lowercase"));
    assert!(!is_choice_line("E. out of range"));
    assert!(!is_choice_line("A) parenthesis"));
    assert!(!is_choice_line("1. numbered"));
    assert!(!is_choice_line("Answer: B"));
    assert!(!is_choice_line(""));
}
