//! Report storage - byte-level API for abuse reports.

use crate::define_simple_storage;

define_simple_storage! {
    /// Abuse reports keyed by report id.
    pub struct ReportStorage { table: "reports" }
}
