//! Oracle type labels as reported by the column listing.
//!
//! `NUMBER` columns with a declared scale of zero are whole numbers and are
//! reported as `INTEGER`, which the UI uses to pick an integer editor. The
//! rule is applied inside the catalog query; [`reported_data_type`] is the
//! same rule for metadata already fetched.

/// Oracle's arbitrary-precision numeric type.
pub const NUMERIC_TYPE: &str = "NUMBER";

/// Label reported for zero-scale numerics.
pub const INTEGER_TYPE: &str = "INTEGER";

/// Type label for a column with native type `data_type` and `data_scale`.
///
/// # Example
/// ```rust
/// use dbadmin_core::adapters::oracle::reported_data_type;
///
/// assert_eq!(reported_data_type("NUMBER", Some(0)), "INTEGER");
/// assert_eq!(reported_data_type("NUMBER", Some(2)), "NUMBER");
/// assert_eq!(reported_data_type("NUMBER", None), "NUMBER");
/// assert_eq!(reported_data_type("VARCHAR2", Some(0)), "VARCHAR2");
/// ```
pub fn reported_data_type(data_type: &str, data_scale: Option<i64>) -> &str {
    if data_type == NUMERIC_TYPE && data_scale == Some(0) {
        INTEGER_TYPE
    } else {
        data_type
    }
}

/// SQL expression applying [`reported_data_type`] to catalog columns.
pub(crate) fn data_type_projection(type_column: &str, scale_column: &str) -> String {
    format!(
        "case when {type_column} = '{NUMERIC_TYPE}' and {scale_column} = '0' then '{INTEGER_TYPE}' else {type_column} end"
    )
}
