//! Request Context
//!
//! The id of the request being served, readable from anywhere inside the
//! request's future without threading it through every call.

use std::future::Future;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// Run `future` with `request_id` as the current request id
pub async fn scope<F: Future>(request_id: String, future: F) -> F::Output {
    REQUEST_ID.scope(request_id, future).await
}

/// Id of the request being served, `None` outside a request scope
#[must_use]
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}
