use catalog_admin::microsvc::HandlerError;
use serde_json::json;

use crate::support::{catalog, create, names};

#[test]
fn create_get_update() {
    let service = catalog();
    let id = create(
        &service,
        "cast_member.create",
        json!({ "name": "Vin Diesel", "type": "ACTOR" }),
    );

    let member = service.dispatch("cast_member.get", json!({ "id": id })).unwrap();
    assert_eq!(member["name"], "Vin Diesel");
    assert_eq!(member["type"], "ACTOR");

    service
        .dispatch(
            "cast_member.update",
            json!({ "id": id, "name": "Vin", "type": "DIRECTOR" }),
        )
        .unwrap();
    let member = service.dispatch("cast_member.get", json!({ "id": id })).unwrap();
    assert_eq!(member["name"], "Vin");
    assert_eq!(member["type"], "DIRECTOR");
}

#[test]
fn missing_name_and_type_report_both_errors() {
    let service = catalog();

    let err = service.dispatch("cast_member.create", json!({})).unwrap_err();

    assert_eq!(err.status_code(), 422);
    match err {
        HandlerError::Invalid { message, errors } => {
            assert_eq!(message, "'name' should not be null");
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            assert_eq!(messages, vec!["'name' should not be null", "'type' should not be null"]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unknown_type_is_a_decode_failure() {
    let service = catalog();
    let err = service
        .dispatch("cast_member.create", json!({ "name": "Vin Diesel", "type": "PRODUCER" }))
        .unwrap_err();
    assert!(matches!(err, HandlerError::DecodeFailed(_)));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn list_sorts_by_name_descending() {
    let service = catalog();
    for name in ["Ana", "Carlos", "Bruna"] {
        create(
            &service,
            "cast_member.create",
            json!({ "name": format!("{name} Silva"), "type": "ACTOR" }),
        );
    }

    let page = service
        .dispatch("cast_member.list", json!({ "sort": "name", "dir": "desc" }))
        .unwrap();
    assert_eq!(names(&page), vec!["Carlos Silva", "Bruna Silva", "Ana Silva"]);
}

#[test]
fn get_unknown_is_not_found() {
    let service = catalog();
    let err = service.dispatch("cast_member.get", json!({ "id": "x" })).unwrap_err();
    assert_eq!(err.to_string(), "CastMember with ID x was not found");
}
