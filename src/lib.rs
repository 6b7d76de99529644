//! Administrative catalog backend for a video platform.
//!
//! - CRUD and paged search for categories, genres and cast members,
//!   dispatched through [`microsvc::Service`] and exposed over HTTP.
//! - A queue consumer that applies video encoder results to the media
//!   status of stored videos.

pub mod application;
pub mod bus;
pub mod codec;
pub mod config;
pub mod domain;
pub mod encoder;
pub mod handlers;
pub mod microsvc;
pub mod store;
pub mod telemetry;

pub use application::{CatalogError, MediaStatusError, UpdateMediaStatusCommand, UpdateMediaStatusUseCase};
pub use codec::{CodecError, JsonCodec, MessageCodec};
pub use config::Config;
pub use encoder::{ListenerError, VideoEncoderListener, VideoEncoderResult};
pub use store::{InMemoryModelStore, Model, ModelStore, ModelsExt, StoreError};
