//! Test assertion helpers for rendered reports

/// Return the table row starting with `label`, panicking with the table if absent
#[allow(dead_code)]
pub fn table_row<'a>(table: &'a str, label: &str) -> &'a str {
    table
        .lines()
        .find(|line| line.split_whitespace().next() == Some(label))
        .unwrap_or_else(|| panic!("no row for '{label}' in:\n{table}"))
}

/// Assert a row's whitespace-separated cells after the label
#[allow(dead_code)]
pub fn assert_row_cells(table: &str, label: &str, expected: &[&str]) {
    let row = table_row(table, label);
    let cells: Vec<&str> = row.split_whitespace().skip(1).collect();
    assert_eq!(cells, expected, "row '{label}' in:\n{table}");
}

/// Assert that `label` has no row in the table
#[allow(dead_code)]
pub fn assert_no_row(table: &str, label: &str) {
    assert!(
        !table
            .lines()
            .any(|line| line.split_whitespace().next() == Some(label)),
        "unexpected row for '{label}' in:\n{table}"
    );
}
