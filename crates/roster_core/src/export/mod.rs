//! File export of person records.

pub mod json_export;
