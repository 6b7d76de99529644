use catalog_admin::microsvc::HandlerError;
use serde_json::json;

use crate::support::{catalog, create, names};

#[test]
fn create_and_get() {
    let service = catalog();

    let id = create(
        &service,
        "category.create",
        json!({ "name": "Movies", "description": "Most watched", "is_active": true }),
    );
    let category = service.dispatch("category.get", json!({ "id": id })).unwrap();

    assert_eq!(category["id"], id.as_str());
    assert_eq!(category["name"], "Movies");
    assert_eq!(category["description"], "Most watched");
    assert_eq!(category["is_active"], true);
    assert!(category["deleted_at"].is_null());
}

#[test]
fn create_defaults_to_active() {
    let service = catalog();
    let id = create(&service, "category.create", json!({ "name": "Movies" }));
    let category = service.dispatch("category.get", json!({ "id": id })).unwrap();
    assert_eq!(category["is_active"], true);
}

#[test]
fn invalid_name_is_rejected_with_422() {
    let service = catalog();

    let err = service
        .dispatch("category.create", json!({ "name": "ab" }))
        .unwrap_err();

    assert_eq!(err.status_code(), 422);
    assert_eq!(err.to_string(), "'name' must be between 3 and 255 characters");

    let err = service
        .dispatch("category.create", json!({ "description": "no name" }))
        .unwrap_err();
    assert_eq!(err.to_string(), "'name' should not be null");
}

#[test]
fn get_unknown_is_not_found() {
    let service = catalog();

    let err = service.dispatch("category.get", json!({ "id": "123" })).unwrap_err();

    assert!(matches!(err, HandlerError::NotFound(_)));
    assert_eq!(err.to_string(), "Category with ID 123 was not found");
}

#[test]
fn get_without_id_is_guard_rejected() {
    let service = catalog();
    let err = service.dispatch("category.get", json!({})).unwrap_err();
    assert!(matches!(err, HandlerError::GuardRejected(_)));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn update_deactivates() {
    let service = catalog();
    let id = create(&service, "category.create", json!({ "name": "Movies" }));

    let updated = service
        .dispatch(
            "category.update",
            json!({ "id": id, "name": "Films", "description": null, "is_active": false }),
        )
        .unwrap();
    assert_eq!(updated, json!({ "id": id }));

    let category = service.dispatch("category.get", json!({ "id": id })).unwrap();
    assert_eq!(category["name"], "Films");
    assert_eq!(category["is_active"], false);
    assert!(!category["deleted_at"].is_null());
}

#[test]
fn update_unknown_is_not_found() {
    let service = catalog();
    let err = service
        .dispatch("category.update", json!({ "id": "nope", "name": "Films" }))
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[test]
fn delete_is_idempotent() {
    let service = catalog();
    let id = create(&service, "category.create", json!({ "name": "Movies" }));

    service.dispatch("category.delete", json!({ "id": id })).unwrap();
    service.dispatch("category.delete", json!({ "id": id })).unwrap();

    assert!(service.dispatch("category.get", json!({ "id": id })).is_err());
}

#[test]
fn list_searches_sorts_and_pages() {
    let service = catalog();
    for (name, description) in [
        ("Movies", "Feature films"),
        ("Series", "Episodic"),
        ("Documentaries", "Real films"),
        ("Kids", "Animation"),
    ] {
        create(
            &service,
            "category.create",
            json!({ "name": name, "description": description }),
        );
    }

    let page = service.dispatch("category.list", json!({})).unwrap();
    assert_eq!(names(&page), vec!["Documentaries", "Kids", "Movies", "Series"]);
    assert_eq!(page["total"], 4);
    assert_eq!(page["per_page"], 10);
    assert_eq!(page["current_page"], 0);

    let page = service
        .dispatch("category.list", json!({ "search": "FILMS" }))
        .unwrap();
    assert_eq!(names(&page), vec!["Documentaries", "Movies"]);

    let page = service
        .dispatch("category.list", json!({ "page": 1, "perPage": 3, "dir": "desc" }))
        .unwrap();
    assert_eq!(names(&page), vec!["Documentaries"]);
    assert_eq!(page["total"], 4);
    assert_eq!(page["current_page"], 1);
}
