//! Listener callback behavior without a queue.

use std::sync::Arc;

use catalog_admin::codec::{CodecError, JsonCodec, MessageCodec};
use catalog_admin::domain::video::MediaStatus;
use catalog_admin::encoder::{ListenerError, VideoEncoderListener, VideoEncoderResult};
use catalog_admin::UpdateMediaStatusCommand;

use crate::support::{RecordingUseCase, COMPLETED, FAILED};

#[test]
fn completed_message_invokes_use_case_with_location() {
    let use_case = Arc::new(RecordingUseCase::default());
    let listener = VideoEncoderListener::new(use_case.clone());

    listener.on_video_encoded_message(COMPLETED.as_bytes()).unwrap();

    assert_eq!(
        use_case.commands(),
        vec![UpdateMediaStatusCommand {
            video_id: Some("123".into()),
            status: MediaStatus::Completed,
            resource_id: "r1".into(),
            folder: "f".into(),
            filename: "a.mp4".into(),
        }]
    );
}

#[test]
fn error_message_maps_to_error_status() {
    let use_case = Arc::new(RecordingUseCase::default());
    let listener = VideoEncoderListener::new(use_case.clone());

    listener.on_video_encoded_message(FAILED.as_bytes()).unwrap();

    let commands = use_case.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].status, MediaStatus::Error);
    assert_eq!(commands[0].resource_id, "r2");
    assert_eq!(commands[0].video_id, None);
    assert_eq!(commands[0].folder, "");
    assert_eq!(commands[0].filename, "");
}

#[test]
fn decode_failures_skip_the_use_case() {
    let use_case = Arc::new(RecordingUseCase::default());
    let listener = VideoEncoderListener::new(use_case.clone());

    for body in ["", "{", "[]", r#"{"id":"1"}"#, r#"{"error":"x"}"#, r#"{"video":{}}"#] {
        let err = listener.on_video_encoded_message(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ListenerError::Decoding(_)), "body {body:?} gave {err:?}");
    }

    assert!(use_case.commands().is_empty());
}

#[test]
fn truncated_body_is_a_syntax_error() {
    let listener = VideoEncoderListener::new(RecordingUseCase::default());
    let err = listener.on_video_encoded_message(&COMPLETED.as_bytes()[..20]).unwrap_err();
    assert!(matches!(err, ListenerError::Decoding(CodecError::Syntax(_))));
}

#[test]
fn use_case_errors_propagate() {
    let listener = VideoEncoderListener::new(RecordingUseCase::failing(1));

    let err = listener.on_video_encoded_message(COMPLETED.as_bytes()).unwrap_err();

    assert!(matches!(err, ListenerError::UseCase(_)));
    assert_eq!(err.to_string(), "Video with ID 123 was not found");
}

#[test]
fn both_variants_survive_reencoding() {
    let codec = JsonCodec;

    for body in [COMPLETED, FAILED] {
        let decoded: VideoEncoderResult = codec.decode(body.as_bytes()).unwrap();
        let encoded = codec.encode(&decoded).unwrap();
        let again: VideoEncoderResult = codec.decode(&encoded).unwrap();

        assert_eq!(again, decoded);
    }

    let completed: VideoEncoderResult = codec.decode(COMPLETED.as_bytes()).unwrap();
    let failed: VideoEncoderResult = codec.decode(FAILED.as_bytes()).unwrap();
    assert!(matches!(completed, VideoEncoderResult::Completed(_)));
    assert!(matches!(failed, VideoEncoderResult::Error(_)));
}
