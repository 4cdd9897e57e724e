//! Intent boundary macros
//!
//! Every engine operation emits one `start` event and then exactly one of
//! `end` or `end_error`. The macros fix the field names (`component`, `op`,
//! `event`, `duration_ms`, `err_kind`, `err_code`) so the capture layer and
//! JSON output can rely on them. Extra `key = value` fields pass through to
//! `tracing` unchanged.

/// `start` event for an operation
///
/// ```
/// # use worldgeo_core::log_op_start;
/// log_op_start!("search_country");
/// log_op_start!("load_region", record_id = 7);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::worldgeo_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::worldgeo_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// `end` event; `duration_ms` is required
///
/// ```
/// # use worldgeo_core::log_op_end;
/// log_op_end!("search_country", duration_ms = 3, result_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::worldgeo_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::worldgeo_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// `end_error` event at `error` level, tagged with the error's kind and code.
///
/// `$err` may be an `ExError` or a `GeoError`.
///
/// ```
/// # use worldgeo_core::{log_op_error, errors::GeoError};
/// let err = GeoError::UnknownCountry { country_id: 9 };
/// log_op_error!("save_new_region", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::worldgeo_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
