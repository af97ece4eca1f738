use growthsum_sheet::{Book, CellValue, Sheet, SheetError, XlsxReadOptions};
use tempfile::tempdir;

fn section_options() -> XlsxReadOptions {
    XlsxReadOptions::default()
        .with_headers(true)
        .with_comment_prefix("#")
        .with_string_column("Sample")
}

// ===== Sheet Creation Tests =====

#[test]
fn test_sheet_from_data() {
    let sheet = Sheet::from_data(vec![vec![1, 2, 3], vec![4, 5, 6]]);

    assert_eq!(sheet.row_count(), 2);
    assert_eq!(sheet.col_count(), 3);
    assert_eq!(sheet.get(0, 0).unwrap(), &CellValue::Int(1));
    assert_eq!(sheet.get(1, 2).unwrap(), &CellValue::Int(6));
}

#[test]
fn test_get_out_of_bounds() {
    let sheet = Sheet::from_data(vec![vec![1, 2]]);
    assert!(matches!(
        sheet.get(3, 0),
        Err(SheetError::IndexOutOfBounds { row: 3, .. })
    ));
}

// ===== Book XLSX Tests =====

#[test]
fn test_book_xlsx_roundtrip_preserves_sheet_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.xlsx");

    let mut book = Book::new();
    book.add_sheet("Overview", Sheet::from_data(vec![vec!["Sample"], vec!["A1"]]))
        .unwrap();
    book.add_sheet("HRXRD", Sheet::from_data(vec![vec!["Phase"], vec!["cubic"]]))
        .unwrap();
    book.save_as_xlsx(&path).unwrap();

    let mut loaded = Book::from_xlsx_with_options(&path, &section_options()).unwrap();
    assert_eq!(loaded.sheet_names(), vec!["Overview", "HRXRD"]);

    let hrxrd = loaded.take_sheet("HRXRD").unwrap();
    assert_eq!(
        hrxrd.column_values("Phase").unwrap(),
        vec![CellValue::String("cubic".to_string())]
    );
}

#[test]
fn test_comment_rows_are_skipped_before_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commented.xlsx");

    let mut sheet = Sheet::with_name("Overview");
    *sheet.data_mut() = vec![
        vec![CellValue::from("# exported by the growth logger"), CellValue::Null],
        vec![CellValue::from("Sample"), CellValue::from("Film")],
        vec![CellValue::from("# recalibrated"), CellValue::from("ignored")],
        vec![CellValue::Int(7), CellValue::from("GaN")],
    ];
    sheet.save_as_xlsx(&path).unwrap();

    let loaded = Sheet::from_xlsx_sheet(&path, "Overview", &section_options()).unwrap();

    assert_eq!(
        loaded.column_names().unwrap(),
        &vec!["Sample".to_string(), "Film".to_string()]
    );
    assert_eq!(loaded.data_row_count(), 1);
    assert_eq!(
        loaded.get_by_name(0, "Sample").unwrap(),
        &CellValue::String("7".to_string())
    );
    assert_eq!(
        loaded.get_by_name(0, "Film").unwrap(),
        &CellValue::String("GaN".to_string())
    );
}

#[test]
fn test_header_only_section_has_no_data_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("header_only.xlsx");

    let mut sheet = Sheet::from_data(vec![vec!["Collaborator"]]);
    sheet.set_name("SampleCut");
    sheet.save_as_xlsx(&path).unwrap();

    let loaded = Sheet::from_xlsx_sheet(&path, "SampleCut", &section_options()).unwrap();
    assert_eq!(loaded.column_names().unwrap(), &vec!["Collaborator".to_string()]);
    assert!(loaded.column_values("Collaborator").unwrap().is_empty());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.xlsx");

    let mut first = Sheet::from_data(vec![vec!["a", "b"], vec!["1", "2"], vec!["3", "4"]]);
    first.set_name("Summary");
    first.save_as_xlsx(&path).unwrap();

    let mut second = Sheet::from_data(vec![vec!["c"], vec!["5"]]);
    second.set_name("Summary");
    second.save_as_xlsx(&path).unwrap();

    let loaded = Sheet::from_xlsx_sheet(&path, "Summary", &XlsxReadOptions::default()).unwrap();
    assert_eq!(loaded.row_count(), 2);
    assert_eq!(loaded.col_count(), 1);
}
