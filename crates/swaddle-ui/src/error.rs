use std::panic::{AssertUnwindSafe, catch_unwind};

use swaddle_core::View;

pub struct ErrorInfo {
    pub message: String,
}

/// Builds `content`, or `fallback` if building it panics.
///
/// Wrapper constructors panic on invalid fields (see
/// [`swaddle_core::WrapError`]); this is the place to turn that into
/// something on screen instead of unwinding further.
pub fn ErrorBoundary(
    fallback: impl FnOnce(ErrorInfo) -> View,
    content: impl FnOnce() -> View,
) -> View {
    match catch_unwind(AssertUnwindSafe(content)) {
        Ok(view) => view,
        Err(err) => {
            let message = if let Some(s) = err.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = err.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("view construction failed: {message}");
            fallback(ErrorInfo { message })
        }
    }
}
