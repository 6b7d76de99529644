//! Apply an encoder outcome to the media slot of a persisted video.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::video::{MediaStatus, Video};
use crate::store::{ModelStore, StoreError};

/// Normalized instruction produced from either encoder outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMediaStatusCommand {
    /// Owning video. Absent when the encoder only reported the resource.
    pub video_id: Option<String>,
    pub status: MediaStatus,
    pub resource_id: String,
    pub folder: String,
    pub filename: String,
}

impl UpdateMediaStatusCommand {
    /// `folder/filename`, the encoded location recorded on completion.
    pub fn encoded_location(&self) -> String {
        format!("{}/{}", self.folder, self.filename)
    }
}

#[derive(Debug, Error)]
pub enum MediaStatusError {
    #[error("{0}")]
    NotFound(String),
    /// More than one video owns a media slot with the reported resource id.
    #[error("Media resource {resource_id} is shared by videos {}", .video_ids.join(", "))]
    Ambiguous {
        resource_id: String,
        video_ids: Vec<String>,
    },
    #[error("failed to persist video: {0}")]
    Persistence(#[from] StoreError),
}

/// The media-status use case as seen by the queue listener.
pub trait UpdateMediaStatus: Send + Sync {
    fn execute(&self, command: UpdateMediaStatusCommand) -> Result<(), MediaStatusError>;
}

impl<T: UpdateMediaStatus + ?Sized> UpdateMediaStatus for Arc<T> {
    fn execute(&self, command: UpdateMediaStatusCommand) -> Result<(), MediaStatusError> {
        (**self).execute(command)
    }
}

/// Video persistence needed by the use case.
pub trait VideoGateway: Send + Sync {
    fn find_by_id(&self, id: &str) -> Result<Option<Video>, StoreError>;

    /// Every video owning a media slot with this resource id.
    fn find_by_resource_id(&self, resource_id: &str) -> Result<Vec<Video>, StoreError>;

    fn save(&self, video: &Video) -> Result<(), StoreError>;
}

impl<S: ModelStore> VideoGateway for S {
    fn find_by_id(&self, id: &str) -> Result<Option<Video>, StoreError> {
        Ok(self.get_model::<Video>(id)?.map(|v| v.data))
    }

    fn find_by_resource_id(&self, resource_id: &str) -> Result<Vec<Video>, StoreError> {
        let found = self.find_models::<Video>(&|video| video.has_media(resource_id))?;
        Ok(found.into_iter().map(|v| v.data).collect())
    }

    fn save(&self, video: &Video) -> Result<(), StoreError> {
        self.save_model(video).map(|_| ())
    }
}

pub struct UpdateMediaStatusUseCase<G> {
    gateway: G,
}

impl<G: VideoGateway> UpdateMediaStatusUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn load(&self, command: &UpdateMediaStatusCommand) -> Result<Video, MediaStatusError> {
        match &command.video_id {
            Some(id) => self
                .gateway
                .find_by_id(id)?
                .ok_or_else(|| MediaStatusError::NotFound(format!("Video with ID {} was not found", id))),
            None => {
                let mut owners = self.gateway.find_by_resource_id(&command.resource_id)?;
                match owners.len() {
                    0 => Err(MediaStatusError::NotFound(format!(
                        "Video with media resource {} was not found",
                        command.resource_id
                    ))),
                    1 => Ok(owners.remove(0)),
                    _ => {
                        let mut video_ids: Vec<String> = owners.into_iter().map(|v| v.id).collect();
                        video_ids.sort_unstable();
                        Err(MediaStatusError::Ambiguous {
                            resource_id: command.resource_id.clone(),
                            video_ids,
                        })
                    }
                }
            }
        }
    }
}

impl<G: VideoGateway> UpdateMediaStatus for UpdateMediaStatusUseCase<G> {
    fn execute(&self, command: UpdateMediaStatusCommand) -> Result<(), MediaStatusError> {
        let mut video = self.load(&command)?;
        let video_id = video.id.clone();

        let media = video.media_mut(&command.resource_id).ok_or_else(|| {
            MediaStatusError::NotFound(format!(
                "Media with resource {} was not found on video {}",
                command.resource_id, video_id
            ))
        })?;

        match command.status {
            MediaStatus::Completed => media.completed(command.encoded_location()),
            MediaStatus::Error => media.failed(),
            MediaStatus::Processing => media.processing(),
            MediaStatus::Pending => media.mark_pending(),
        }

        self.gateway.save(&video)?;

        info!(
            video_id = %video_id,
            resource_id = %command.resource_id,
            status = ?command.status,
            "media status updated"
        );

        Ok(())
    }
}
