use catalog_admin::handlers;
use catalog_admin::microsvc::Service;
use catalog_admin::store::InMemoryModelStore;
use serde_json::Value;

pub type Catalog = Service<InMemoryModelStore>;

pub fn catalog() -> Catalog {
    handlers::service(InMemoryModelStore::new())
}

/// Dispatch a command expected to succeed and return its `id`.
pub fn create(service: &Catalog, command: &str, input: Value) -> String {
    let created = service.dispatch(command, input).unwrap();
    created["id"].as_str().unwrap().to_string()
}

pub fn names(page: &Value) -> Vec<&str> {
    page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect()
}
