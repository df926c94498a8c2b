//! JSON output: row arrays for sheets, an object of row arrays for books.

use rstest::rstest;
use sheetfmt::{Book, Error, Format, RenderOptions, Sheet, render_sheet};

use super::fixtures::*;

#[rstest]
#[case::normal(normal_sheet(), "[[1,2,3],[4,588,6],[7,8,999]]")]
#[case::column_series(
    column_series(),
    r#"[["Column 1","Column 2","Column 3"],[1,2,3],[4,5,6],[7,8,9]]"#
)]
#[case::column_series_irregular(
    column_series_irregular(),
    r#"[["Column 1","Column 2","Column 3"],[1,2,3],[4,5,6],[7,8,""]]"#
)]
#[case::data_frame(
    data_frame(),
    r#"[["","Column 1","Column 2","Column 3"],["Row 1",1,2,3],["Row 2",4,5,6],["Row 3",7,8,9]]"#
)]
#[case::row_series(row_series(), r#"[["Row 1",1,2,3],["Row 2",4,5,6],["Row 3",7,8,9]]"#)]
#[case::floats(float_sheet(), r#"[["name","value"],["a",1.5],["bb",10],["c",0.25]]"#)]
fn encodes_sheet_rows(#[case] sheet: Sheet, #[case] expected: &str) {
    let out = titled(&sheet, Format::Json);
    assert_eq!(out, format!("{expected}\n"));
    serde_json::from_str::<serde_json::Value>(&out).expect("output parses as JSON");
}

#[rstest]
#[case::titled(true)]
#[case::untitled(false)]
fn encodes_book_as_object(two_sheet_book: Book, #[case] write_title: bool) {
    assert_eq!(
        book_text(&two_sheet_book, Format::Json, write_title),
        "{\"sheet 1\":[[1,2],[3,4]],\"sheet 2\":[[5,6],[7,8]]}\n"
    );
}

#[rstest]
fn irregular_rows_fail_to_serialize(irregular_sheet: Sheet) {
    let err = render_sheet(&irregular_sheet, Format::Json, &RenderOptions::default())
        .expect_err("padding cells are not JSON values");
    assert!(matches!(
        err,
        Error::EmptyCell { ref sheet, row: 2, column: 2 } if sheet == SHEET_NAME
    ));
    assert_eq!(
        err.to_string(),
        "sheet `Sheet1` has an empty cell at row 2, column 2"
    );
}

#[test]
fn book_with_irregular_sheet_fails() {
    let book = Book::from_sheets([
        Sheet::new("ok", sheetfmt::cells![[1]]),
        Sheet::new("ragged", sheetfmt::cells![[1, 2], [3]]),
    ])
    .unwrap();
    let err = sheetfmt::render_book(&book, Format::Json, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyCell { ref sheet, .. } if sheet == "ragged"));
}
