//! Update media status use case against the in-memory store and a failing
//! gateway.

use std::sync::Mutex;

use catalog_admin::application::{
    MediaStatusError, UpdateMediaStatus, UpdateMediaStatusCommand, UpdateMediaStatusUseCase,
    VideoGateway,
};
use catalog_admin::domain::video::{AudioVideoMedia, MediaStatus, Video, VideoMediaType};
use catalog_admin::store::{InMemoryModelStore, ModelStore, StoreError};

fn sample_video() -> Video {
    let mut video = Video::new("Feature");
    video.register_media(AudioVideoMedia::pending("r1", VideoMediaType::Video, "a.mp4", "raw/a.mp4"));
    video.register_media(AudioVideoMedia::pending("r2", VideoMediaType::Trailer, "b.mp4", "raw/b.mp4"));
    video
}

fn seeded() -> (InMemoryModelStore, Video) {
    let store = InMemoryModelStore::new();
    let video = sample_video();
    store.save_model(&video).unwrap();
    (store, video)
}

fn command(video_id: Option<&str>, status: MediaStatus, resource_id: &str) -> UpdateMediaStatusCommand {
    UpdateMediaStatusCommand {
        video_id: video_id.map(String::from),
        status,
        resource_id: resource_id.into(),
        folder: "encoded".into(),
        filename: "a.mp4".into(),
    }
}

fn load(store: &InMemoryModelStore, id: &str) -> Video {
    store.find_by_id(id).unwrap().unwrap()
}

#[test]
fn completed_changes_only_the_matching_slot() {
    let (store, video) = seeded();
    let use_case = UpdateMediaStatusUseCase::new(store.clone());

    use_case
        .execute(command(Some(&video.id), MediaStatus::Completed, "r1"))
        .unwrap();

    let saved = load(&store, &video.id);
    let mut expected = video.clone();
    let slot = expected.media_mut("r1").unwrap();
    slot.status = MediaStatus::Completed;
    slot.encoded_location = "encoded/a.mp4".into();
    assert_eq!(saved, expected);
    assert_eq!(store.write_count(), 2);
}

#[test]
fn processing_sets_status_without_location() {
    let (store, video) = seeded();
    let use_case = UpdateMediaStatusUseCase::new(store.clone());

    use_case
        .execute(command(Some(&video.id), MediaStatus::Processing, "r2"))
        .unwrap();

    let slot = load(&store, &video.id).media("r2").cloned().unwrap();
    assert_eq!(slot.status, MediaStatus::Processing);
    assert_eq!(slot.encoded_location, "");
}

#[test]
fn error_without_video_id_resolves_by_resource() {
    let (store, video) = seeded();
    let other = sample_video();
    store.save_model(&other).unwrap();
    let use_case = UpdateMediaStatusUseCase::new(store.clone());

    let mut unique = Video::new("Short");
    unique.register_media(AudioVideoMedia::pending("r-unique", VideoMediaType::Video, "c.mp4", "raw/c.mp4"));
    store.save_model(&unique).unwrap();

    use_case
        .execute(command(None, MediaStatus::Error, "r-unique"))
        .unwrap();

    assert_eq!(load(&store, &unique.id).media("r-unique").unwrap().status, MediaStatus::Error);
    assert_eq!(load(&store, &video.id), video);
    assert_eq!(load(&store, &other.id), other);
}

#[test]
fn error_for_a_resource_shared_by_two_videos_marks_neither() {
    let store = InMemoryModelStore::new();
    let mut first = Video::new("A");
    first.register_media(AudioVideoMedia::pending("r2", VideoMediaType::Video, "a.mp4", "raw/a.mp4"));
    let mut second = Video::new("B");
    second.register_media(AudioVideoMedia::pending("r2", VideoMediaType::Video, "b.mp4", "raw/b.mp4"));
    store.save_model(&first).unwrap();
    store.save_model(&second).unwrap();
    let use_case = UpdateMediaStatusUseCase::new(store.clone());

    for _ in 0..20 {
        let err = use_case
            .execute(command(None, MediaStatus::Error, "r2"))
            .unwrap_err();
        assert!(matches!(err, MediaStatusError::Ambiguous { .. }));
        assert!(err.to_string().contains(&first.id));
        assert!(err.to_string().contains(&second.id));
    }

    assert_eq!(load(&store, &first.id), first);
    assert_eq!(load(&store, &second.id), second);
    assert_eq!(store.write_count(), 2);
}

#[test]
fn pending_requeues_a_slot() {
    let (store, video) = seeded();
    let use_case = UpdateMediaStatusUseCase::new(store.clone());

    use_case
        .execute(command(Some(&video.id), MediaStatus::Processing, "r1"))
        .unwrap();
    use_case
        .execute(command(Some(&video.id), MediaStatus::Pending, "r1"))
        .unwrap();

    assert_eq!(load(&store, &video.id), video);
}

#[test]
fn reapplying_a_terminal_status_writes_again() {
    let (store, video) = seeded();
    let use_case = UpdateMediaStatusUseCase::new(store.clone());
    let cmd = command(Some(&video.id), MediaStatus::Completed, "r1");

    use_case.execute(cmd.clone()).unwrap();
    use_case.execute(cmd).unwrap();

    assert_eq!(store.write_count(), 3);
}

#[test]
fn unknown_video_is_not_found() {
    let (store, _) = seeded();
    let use_case = UpdateMediaStatusUseCase::new(store.clone());

    let err = use_case
        .execute(command(Some("missing"), MediaStatus::Completed, "r1"))
        .unwrap_err();

    assert!(matches!(err, MediaStatusError::NotFound(_)));
    assert_eq!(err.to_string(), "Video with ID missing was not found");
    assert_eq!(store.write_count(), 1);
}

#[test]
fn unknown_resource_is_not_found() {
    let (store, video) = seeded();
    let use_case = UpdateMediaStatusUseCase::new(store.clone());

    let err = use_case
        .execute(command(Some(&video.id), MediaStatus::Completed, "r9"))
        .unwrap_err();
    assert!(matches!(err, MediaStatusError::NotFound(_)));

    let err = use_case
        .execute(command(None, MediaStatus::Error, "r9"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Video with media resource r9 was not found");

    assert_eq!(store.write_count(), 1);
}

/// Gateway whose writes always fail; records attempted saves.
struct FailingGateway {
    video: Video,
    saves: Mutex<usize>,
}

impl VideoGateway for FailingGateway {
    fn find_by_id(&self, id: &str) -> Result<Option<Video>, StoreError> {
        Ok((self.video.id == id).then(|| self.video.clone()))
    }

    fn find_by_resource_id(&self, resource_id: &str) -> Result<Vec<Video>, StoreError> {
        Ok(self
            .video
            .has_media(resource_id)
            .then(|| self.video.clone())
            .into_iter()
            .collect())
    }

    fn save(&self, _video: &Video) -> Result<(), StoreError> {
        *self.saves.lock().unwrap() += 1;
        Err(StoreError::Storage("connection reset".into()))
    }
}

#[test]
fn store_failure_is_persistence_error() {
    let video = sample_video();
    let use_case = UpdateMediaStatusUseCase::new(FailingGateway {
        video: video.clone(),
        saves: Mutex::new(0),
    });

    let err = use_case
        .execute(command(Some(&video.id), MediaStatus::Completed, "r1"))
        .unwrap_err();

    assert!(matches!(err, MediaStatusError::Persistence(StoreError::Storage(_))));
    assert_eq!(*use_case.gateway().saves.lock().unwrap(), 1);
}
