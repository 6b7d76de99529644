use serde_json::json;

use crate::support::{catalog, create, names};

#[test]
fn create_with_categories() {
    let service = catalog();
    let movies = create(&service, "category.create", json!({ "name": "Movies" }));

    let id = create(
        &service,
        "genre.create",
        json!({ "name": "Action", "categories": [movies] }),
    );
    let genre = service.dispatch("genre.get", json!({ "id": id })).unwrap();

    assert_eq!(genre["name"], "Action");
    assert_eq!(genre["is_active"], true);
    assert_eq!(genre["categories"], json!([movies]));
}

#[test]
fn unknown_categories_are_rejected() {
    let service = catalog();

    let err = service
        .dispatch("genre.create", json!({ "name": "Action", "categories": ["c1", "c2"] }))
        .unwrap_err();

    assert_eq!(err.status_code(), 422);
    assert_eq!(err.to_string(), "Some categories could not be found: c1, c2");

    let page = service.dispatch("genre.list", json!({})).unwrap();
    assert_eq!(page["total"], 0);
}

#[test]
fn update_replaces_categories_and_checks_them() {
    let service = catalog();
    let movies = create(&service, "category.create", json!({ "name": "Movies" }));
    let series = create(&service, "category.create", json!({ "name": "Series" }));
    let id = create(
        &service,
        "genre.create",
        json!({ "name": "Action", "categories": [movies] }),
    );

    service
        .dispatch(
            "genre.update",
            json!({ "id": id, "name": "Drama", "categories": [series] }),
        )
        .unwrap();
    let genre = service.dispatch("genre.get", json!({ "id": id })).unwrap();
    assert_eq!(genre["name"], "Drama");
    assert_eq!(genre["categories"], json!([series]));

    let err = service
        .dispatch(
            "genre.update",
            json!({ "id": id, "name": "Drama", "categories": ["gone"] }),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Some categories could not be found: gone");

    let genre = service.dispatch("genre.get", json!({ "id": id })).unwrap();
    assert_eq!(genre["categories"], json!([series]));
}

#[test]
fn empty_name_is_rejected() {
    let service = catalog();
    let err = service
        .dispatch("genre.create", json!({ "name": "" }))
        .unwrap_err();
    assert_eq!(err.to_string(), "'name' should not be empty");
}

#[test]
fn get_unknown_is_not_found() {
    let service = catalog();
    let err = service.dispatch("genre.get", json!({ "id": "g1" })).unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_string(), "Genre with ID g1 was not found");
}

#[test]
fn list_filters_by_name() {
    let service = catalog();
    for name in ["Action", "Drama", "Action Comedy"] {
        create(&service, "genre.create", json!({ "name": name }));
    }

    let page = service
        .dispatch("genre.list", json!({ "search": "action" }))
        .unwrap();
    assert_eq!(names(&page), vec!["Action", "Action Comedy"]);
    assert_eq!(page["total"], 2);
}

#[test]
fn delete_then_get_fails() {
    let service = catalog();
    let id = create(&service, "genre.create", json!({ "name": "Action" }));
    service.dispatch("genre.delete", json!({ "id": id })).unwrap();
    assert!(service.dispatch("genre.get", json!({ "id": id })).is_err());
}
