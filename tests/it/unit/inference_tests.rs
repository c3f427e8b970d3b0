//! Unit tests for column classification.

use crate::helpers::table_from_csv;
use chartlens::data::{classify, DatasetSummary};

#[test]
fn test_end_to_end_classification() {
    let table = table_from_csv("a,b\n1,x\n2,y\n3,z\n");
    let classification = classify(&table);

    assert_eq!(classification.numeric_columns, vec!["a"]);
    assert_eq!(classification.text_columns, vec!["b"]);
}

#[test]
fn test_classify_twice_is_identical() {
    let table = table_from_csv("q,w,e\n1,x,\n2,3,y");

    let first = classify(&table);
    let second = classify(&table);

    assert_eq!(first, second);
    assert_eq!(first.numeric_columns, vec!["q", "w"]);
    // Empty text cells still count as text
    assert_eq!(first.text_columns, vec!["w", "e"]);
}

#[test]
fn test_summary_counts() {
    let table = table_from_csv("id,name,score\n1,a,9\n2,b,x");
    let summary = DatasetSummary::from_table(&table);

    assert_eq!(summary.total_rows, 2);
    assert_eq!(summary.total_columns, 3);
    assert_eq!(summary.columns, vec!["id", "name", "score"]);
    assert_eq!(summary.numeric_columns, vec!["id", "score"]);
    assert_eq!(summary.text_columns, vec!["name", "score"]);
}
