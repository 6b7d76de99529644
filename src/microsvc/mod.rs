//! microsvc - convention-based command handler framework.
//!
//! Commands are registered on a `Service` and dispatched by name. Each
//! handler receives a `Context<R>` with access to the input payload and the
//! store.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use catalog_admin::microsvc;
//! use catalog_admin::store::InMemoryModelStore;
//! use serde_json::json;
//!
//! let service = Arc::new(catalog_admin::handlers::service(InMemoryModelStore::new()));
//!
//! // Direct dispatch
//! let created = service.dispatch("category.create", json!({ "name": "Movies" }))?;
//!
//! // HTTP transport (requires "http" feature)
//! let app = microsvc::router(service);
//! ```
//!
//! ## Handler Convention
//!
//! Each handler file follows this convention:
//!
//! ```ignore
//! // src/handlers/category/create.rs
//!
//! pub const COMMAND: &str = "category.create";
//!
//! pub fn guard<S>(ctx: &microsvc::Context<S>) -> bool {
//!     ctx.raw_input().is_object()
//! }
//!
//! pub fn handle<S: ModelStore>(ctx: &microsvc::Context<S>) -> Result<Value, microsvc::HandlerError> {
//!     let input = ctx.input::<CreateCategoryCommand>()?;
//!     let category = category::create(ctx.repo(), input)?;
//!     Ok(json!({ "id": category.id }))
//! }
//! ```

mod context;
mod error;
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use service::Service;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str`, the command name
/// - `guard(ctx) -> bool`, input validation
/// - `handle(ctx) -> Result<Value, HandlerError>`, the handler
///
/// # Example
/// ```ignore
/// let service = catalog_admin::register_handlers!(
///     microsvc::Service::new(InMemoryModelStore::new()),
///     handlers::category::create,
///     handlers::category::get,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command_guarded(
                $($seg)::+::COMMAND,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
