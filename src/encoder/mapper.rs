//! Encoder result → media status command.

use super::message::VideoEncoderResult;
use crate::application::media_status::UpdateMediaStatusCommand;
use crate::domain::video::MediaStatus;

impl From<&VideoEncoderResult> for UpdateMediaStatusCommand {
    fn from(result: &VideoEncoderResult) -> Self {
        let resource_id = result.resource_id().to_string();
        match result {
            VideoEncoderResult::Completed(completed) => UpdateMediaStatusCommand {
                video_id: Some(completed.id.clone()),
                status: MediaStatus::Completed,
                resource_id,
                folder: completed.video.encoder_video_folder.clone(),
                filename: completed.video.file_path.clone(),
            },
            // The error payload names only the resource; the video is found through it.
            VideoEncoderResult::Error(_) => UpdateMediaStatusCommand {
                video_id: None,
                status: MediaStatus::Error,
                resource_id,
                folder: String::new(),
                filename: String::new(),
            },
        }
    }
}
