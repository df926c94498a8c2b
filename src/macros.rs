//! Helper macros used across the crate.

/// Build the rows of a sheet from nested literals.
///
/// Each element is converted with [`Cell::from`](crate::Cell), so a row may
/// mix numbers, booleans and strings.
///
/// # Examples
///
/// ```
/// use sheetfmt::{Cell, cells};
///
/// let rows = cells![["Row 1", 1, 2.5], ["Row 2", 3, true]];
/// assert_eq!(rows[0][0], Cell::Text("Row 1".into()));
/// assert_eq!(rows[1][2], Cell::Bool(true));
/// ```
#[macro_export]
macro_rules! cells {
    ( $( [ $($cell:expr),* $(,)? ] ),* $(,)? ) => {
        vec![ $( vec![ $( $crate::Cell::from($cell) ),* ] ),* ]
    };
}
