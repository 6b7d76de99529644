//! Video aggregate and its encoded media slots.
//!
//! Videos are registered elsewhere; this service only moves the status of a
//! media slot as encoder results arrive. A slot is addressed by the
//! `resource_id` the encoder echoes back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Model;

/// Encoding state of a media slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VideoMediaType {
    Video,
    Trailer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioVideoMedia {
    pub resource_id: String,
    pub media_type: VideoMediaType,
    pub name: String,
    pub raw_location: String,
    pub encoded_location: String,
    pub status: MediaStatus,
}

impl AudioVideoMedia {
    /// A freshly uploaded, not yet encoded slot.
    pub fn pending(
        resource_id: impl Into<String>,
        media_type: VideoMediaType,
        name: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            media_type,
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: String::new(),
            status: MediaStatus::Pending,
        }
    }

    /// Back to waiting for the encoder. The encoded location is kept.
    pub fn mark_pending(&mut self) {
        self.status = MediaStatus::Pending;
    }

    pub fn processing(&mut self) {
        self.status = MediaStatus::Processing;
    }

    pub fn completed(&mut self, encoded_location: impl Into<String>) {
        self.encoded_location = encoded_location.into();
        self.status = MediaStatus::Completed;
    }

    pub fn failed(&mut self) {
        self.status = MediaStatus::Error;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub medias: Vec<AudioVideoMedia>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: super::new_id(),
            title: title.into(),
            medias: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a media slot, replacing any slot of the same media type.
    pub fn register_media(&mut self, media: AudioVideoMedia) {
        self.medias.retain(|m| m.media_type != media.media_type);
        self.medias.push(media);
        self.updated_at = Utc::now();
    }

    pub fn media(&self, resource_id: &str) -> Option<&AudioVideoMedia> {
        self.medias.iter().find(|m| m.resource_id == resource_id)
    }

    pub fn media_mut(&mut self, resource_id: &str) -> Option<&mut AudioVideoMedia> {
        self.medias.iter_mut().find(|m| m.resource_id == resource_id)
    }

    pub fn has_media(&self, resource_id: &str) -> bool {
        self.media(resource_id).is_some()
    }
}

impl Model for Video {
    const COLLECTION: &'static str = "videos";

    fn id(&self) -> &str {
        &self.id
    }
}
