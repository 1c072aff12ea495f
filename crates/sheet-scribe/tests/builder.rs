//! Row builder, formatting and registry behaviour against the memory engine

mod common;

use common::{memory_workbook, FailingEngine, HEADER};
use pretty_assertions::assert_eq;
use sheet_scribe::{
    BooleanLabels, CellRange, CellValue, DocumentEngine, Error, StoredValue, Workbook,
    WorkbookOptions,
};

#[test]
fn test_rows_advance_one_at_a_time() {
    let mut wb = memory_workbook();
    let mut sheet = wb.default_sheet();
    for k in 0..5u32 {
        assert_eq!(sheet.write_row(), 2 + k);
        sheet.add_row([k]).unwrap();
    }
    assert_eq!(sheet.write_row(), 7);
    assert_eq!(sheet.start_index(), 2);
}

#[test]
fn test_failed_row_leaves_cursor_in_place() {
    let engine = FailingEngine::failing_at("B3");
    let mut wb = Workbook::with_engine(engine, "General", 2, WorkbookOptions::default()).unwrap();
    let mut sheet = wb.default_sheet();

    sheet.add_row(["ID", "Nombre", "Estatus"]).unwrap();
    let err = sheet
        .add_row([CellValue::from(1), "Rick".into(), "Alive".into()])
        .unwrap_err();
    assert!(matches!(err, Error::EngineWriteFailure(_)));
    assert_eq!(sheet.write_row(), 3);

    // Cells before the failure stay, cells after it were never written
    let doc = wb.engine().inner.sheet("General").unwrap();
    assert_eq!(doc.value("A3"), Some(&StoredValue::Integer(1)));
    assert_eq!(doc.value("B3"), None);
    assert_eq!(doc.value("C3"), None);
}

#[test]
fn test_style_allocation_failure_propagates() {
    let mut engine = FailingEngine::new();
    engine.fail_styles = true;
    let result = Workbook::with_engine(engine, "General", 2, WorkbookOptions::default());
    assert!(matches!(result, Err(Error::EngineWriteFailure(_))));
}

#[test]
fn test_short_text_keeps_wide_column() {
    let mut wb = memory_workbook();
    let mut sheet = wb.default_sheet();
    sheet.set_cell_value("A1", "a much longer label").unwrap();
    sheet.set_cell_value("A2", "hi").unwrap();

    let doc = wb.engine().sheet("General").unwrap();
    // "a much longer label" is 19 characters, plus padding
    assert_eq!(doc.column_width(1), 23.0);
}

#[test]
fn test_float_resets_column_width() {
    let mut wb = memory_workbook();
    let mut sheet = wb.default_sheet();
    sheet.set_cell_value("A1", "Rick Sanchez de la Tierra C-137").unwrap();
    sheet.set_cell_value("A2", 3.14159).unwrap();

    let doc = wb.engine().sheet("General").unwrap();
    assert_eq!(doc.column_width(1), 15.0);
    assert_eq!(doc.value("A2"), Some(&StoredValue::Number(3.14)));
}

#[test]
fn test_text_at_width_cap_leaves_column_alone() {
    let mut wb = memory_workbook();
    let long = "x".repeat(300);
    wb.default_sheet().set_cell_value("A1", long.as_str()).unwrap();

    let doc = wb.engine().sheet("General").unwrap();
    assert_eq!(doc.column_width(1), 8.43);
    assert_eq!(doc.value("A1"), Some(&StoredValue::String(long)));
}

#[test]
fn test_booleans_are_labels() {
    let mut wb = memory_workbook();
    wb.default_sheet().add_row([true, false]).unwrap();

    let doc = wb.engine().sheet("General").unwrap();
    assert_eq!(doc.value("A2"), Some(&StoredValue::String("Si".into())));
    assert_eq!(doc.value("B2"), Some(&StoredValue::String("No".into())));
}

#[test]
fn test_custom_boolean_labels() {
    let options = WorkbookOptions {
        boolean_labels: BooleanLabels::new("Yes", "No"),
        ..Default::default()
    };
    let mut wb =
        Workbook::with_engine(sheet_scribe::MemoryEngine::new(), "General", 1, options).unwrap();
    wb.default_sheet().add_row([true]).unwrap();

    let doc = wb.engine().sheet("General").unwrap();
    assert_eq!(doc.value("A1"), Some(&StoredValue::String("Yes".into())));
}

#[test]
fn test_header_row_style_and_filter() {
    let mut wb = memory_workbook();
    let styles = wb.styles();
    let mut sheet = wb.default_sheet();
    sheet.add_row_header(HEADER).unwrap();
    assert_eq!(sheet.write_row(), 3);

    let doc = wb.engine().sheet("General").unwrap();
    assert_eq!(doc.auto_filter(), Some(CellRange::parse("A2:F2").unwrap()));
    for cell in ["A2", "C2", "F2"] {
        assert_eq!(doc.style(cell), Some(styles.header), "{}", cell);
    }
    assert_eq!(doc.style("G2"), None);
}

#[test]
fn test_narrower_row_narrows_row_style() {
    let mut wb = memory_workbook();
    let styles = wb.styles();
    let mut sheet = wb.default_sheet();
    sheet.add_row_header(HEADER).unwrap();
    sheet.add_row([1, 2]).unwrap();
    assert_eq!(sheet.column_count(), 2);
    sheet.set_row_style(3).unwrap();

    let doc = wb.engine().sheet("General").unwrap();
    assert_eq!(doc.style("B3"), Some(styles.header));
    assert_eq!(doc.style("C3"), None);
}

#[test]
fn test_column_and_cell_styles() {
    let mut wb = memory_workbook();
    let styles = wb.styles();
    let mut sheet = wb.default_sheet();
    sheet.add_row_header(["Monto"]).unwrap();
    sheet.add_row([10.5]).unwrap();
    sheet.add_row([20.25]).unwrap();
    sheet.set_column_style(styles.money, "A").unwrap();
    sheet.set_cell_style("B1", styles.bold).unwrap();

    let doc = wb.engine().sheet("General").unwrap();
    assert_eq!(doc.style("A2"), Some(styles.header));
    assert_eq!(doc.style("A3"), Some(styles.money));
    assert_eq!(doc.style("A4"), Some(styles.money));
    assert_eq!(doc.style("A5"), None);
    assert_eq!(doc.style("B1"), Some(styles.bold));
}

#[test]
fn test_duplicate_sheet_leaves_registry_unchanged() {
    let mut wb = memory_workbook();
    wb.new_sheet("Demo", 2).unwrap();

    for name in ["Demo", "demo", "General"] {
        assert!(matches!(
            wb.new_sheet(name, 2),
            Err(Error::DuplicateSheet(_))
        ));
    }
    assert_eq!(wb.sheet_names().collect::<Vec<_>>(), vec!["General", "Demo"]);
    assert_eq!(
        wb.engine().sheet_names(),
        vec!["General".to_string(), "Demo".to_string()]
    );
}

#[test]
fn test_invalid_sheet_name() {
    let mut wb = memory_workbook();
    assert!(matches!(
        wb.new_sheet("a/b", 2),
        Err(Error::InvalidSheetName(_))
    ));
    assert_eq!(wb.sheet_count(), 1);

    for name in ["'Demo", "Demo'"] {
        assert!(matches!(
            wb.new_sheet(name, 2),
            Err(Error::InvalidSheetName(_))
        ));
    }
    assert_eq!(wb.sheet_names().collect::<Vec<_>>(), vec!["General"]);
    assert_eq!(wb.engine().sheet_names(), vec!["General".to_string()]);
    assert!(wb.output().is_ok());
}

#[test]
fn test_sheets_keep_separate_cursors() {
    let mut wb = memory_workbook();
    let demo = wb.new_sheet("Demo", 5).unwrap();

    wb.default_sheet().add_row(["a"]).unwrap();
    wb.sheet(demo).unwrap().add_row(["b"]).unwrap();
    wb.sheet_by_name("Demo").unwrap().add_row(["c"]).unwrap();

    assert_eq!(wb.cursor(wb.default_sheet_id()).unwrap().write_row(), 3);
    assert_eq!(wb.cursor(demo).unwrap().write_row(), 7);

    let doc = wb.engine().sheet("Demo").unwrap();
    assert_eq!(doc.value("A5"), Some(&StoredValue::String("b".into())));
    assert_eq!(doc.value("A6"), Some(&StoredValue::String("c".into())));
}

#[test]
fn test_unknown_sheet() {
    let mut wb = memory_workbook();
    assert!(matches!(
        wb.sheet_by_name("Missing"),
        Err(Error::UnknownSheet(_))
    ));
}

#[test]
fn test_json_dump() {
    let mut wb = memory_workbook();
    wb.default_sheet().add_row(["ID"]).unwrap();
    let bytes = wb.output().unwrap();

    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["sheets"][0]["name"], "General");
    assert_eq!(json["sheets"][0]["rows"]["2"]["1"]["value"]["value"], "ID");
}
