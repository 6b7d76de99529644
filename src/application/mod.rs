//! Use cases: catalog CRUD and the encoder-driven media status update.

pub mod cast_member;
pub mod category;
pub mod error;
pub mod genre;
pub mod media_status;

pub use error::CatalogError;
pub use media_status::{
    MediaStatusError, UpdateMediaStatus, UpdateMediaStatusCommand, UpdateMediaStatusUseCase,
    VideoGateway,
};
