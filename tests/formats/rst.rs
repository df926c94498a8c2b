//! reStructuredText table output.

use rstest::rstest;
use sheetfmt::{Format, Sheet};

use super::fixtures::*;
use crate::prelude::*;

#[rstest]
#[case::normal(
    normal_sheet(),
    lines_vec![
        "Sheet1:",
        "=  ===  ===",
        "1    2    3",
        "4  588    6",
        "7    8  999",
        "=  ===  ===",
    ]
)]
#[case::irregular(
    irregular_sheet(),
    lines_vec![
        "Sheet1:",
        "=  ===  =",
        "1    2  3",
        "4  588  6",
        "7    8   ",
        "=  ===  =",
    ]
)]
#[case::column_series(
    column_series(),
    lines_vec![
        "Sheet1:",
        "==========  ==========  ==========",
        "  Column 1    Column 2    Column 3",
        "==========  ==========  ==========",
        "         1           2           3",
        "         4           5           6",
        "         7           8           9",
        "==========  ==========  ==========",
    ]
)]
#[case::column_series_irregular(
    column_series_irregular(),
    lines_vec![
        "Sheet1:",
        "==========  ==========  ==========",
        "  Column 1    Column 2    Column 3",
        "==========  ==========  ==========",
        "         1           2           3",
        "         4           5           6",
        "         7           8            ",
        "==========  ==========  ==========",
    ]
)]
#[case::data_frame(
    data_frame(),
    lines_vec![
        "Sheet1:",
        "=====  ==========  ==========  ==========",
        "         Column 1    Column 2    Column 3",
        "=====  ==========  ==========  ==========",
        "Row 1           1           2           3",
        "Row 2           4           5           6",
        "Row 3           7           8           9",
        "=====  ==========  ==========  ==========",
    ]
)]
#[case::row_series(
    row_series(),
    lines_vec![
        "Sheet1:",
        "=====  =  =  =",
        "Row 1  1  2  3",
        "Row 2  4  5  6",
        "Row 3  7  8  9",
        "=====  =  =  =",
    ]
)]
#[case::floats(
    float_sheet(),
    lines_vec![
        "Sheet1:",
        "======  =======",
        "name      value",
        "======  =======",
        "a          1.5 ",
        "bb        10   ",
        "c          0.25",
        "======  =======",
    ]
)]
fn renders_sheet_shapes(#[case] sheet: Sheet, #[case] expected: Vec<String>) {
    assert_eq!(titled(&sheet, Format::Rst), text_block(&expected));
}

#[rstest]
fn renders_book_with_titles(two_sheet_book: sheetfmt::Book) {
    let expected = lines_vec![
        "sheet 1:",
        "=  =",
        "1  2",
        "3  4",
        "=  =",
        "sheet 2:",
        "=  =",
        "5  6",
        "7  8",
        "=  =",
    ];
    assert_eq!(book_text(&two_sheet_book, Format::Rst, true), text_block(&expected));
}

#[rstest]
fn renders_book_without_titles(two_sheet_book: sheetfmt::Book) {
    let expected = lines_vec![
        "=  =",
        "1  2",
        "3  4",
        "=  =",
        "=  =",
        "5  6",
        "7  8",
        "=  =",
    ];
    assert_eq!(book_text(&two_sheet_book, Format::Rst, false), text_block(&expected));
}
