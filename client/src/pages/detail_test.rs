use super::*;

#[test]
fn totals_rows_formats_each_component() {
    let rows = totals_rows(LineTotals::compute(10.0, 5.0, 5.0, 10.0));
    assert_eq!(
        rows,
        vec![
            ("Gross", "50.00".to_owned()),
            ("Discount", "5.00".to_owned()),
            ("Taxable", "45.00".to_owned()),
            ("Tax", "4.50".to_owned()),
            ("Total", "49.50".to_owned()),
        ]
    );
}

#[test]
fn attachment_cell_shows_placeholder_when_absent() {
    assert_eq!(attachment_cell(None), EMPTY);
}

#[test]
fn attachment_cell_shows_file_name() {
    assert_eq!(attachment_cell(Some("grns/note.pdf")), "note.pdf");
}
