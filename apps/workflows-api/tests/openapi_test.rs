use utoipa::OpenApi;

use workflows_api::openapi::{ApiDoc, BEARER_AUTH};

#[test]
fn test_openapi_spec_has_all_endpoints() {
    let spec = ApiDoc::openapi();
    let json = spec.to_pretty_json().expect("Failed to generate OpenAPI JSON");

    let paths = &spec.paths.paths;

    assert!(paths.contains_key("/end-users"), "Missing /end-users path");
    assert!(paths.contains_key("/end-users/next"), "Missing /end-users/next path");
    assert!(paths.contains_key("/end-users/{id}"), "Missing /end-users/{{id}} path");
    assert!(paths.contains_key("/end-users/{id}/approve"), "Missing approve path");
    assert!(paths.contains_key("/end-users/{id}/reject"), "Missing reject path");
    assert!(paths.contains_key("/me"), "Missing /me path");

    let end_users_path = paths.get("/end-users").unwrap();
    assert!(end_users_path.get.is_some(), "Missing GET /end-users");
    assert!(end_users_path.post.is_some(), "Missing POST /end-users");

    assert!(paths.get("/end-users/{id}/approve").unwrap().patch.is_some(), "Missing PATCH approve");
    assert!(paths.get("/end-users/{id}/reject").unwrap().patch.is_some(), "Missing PATCH reject");
    assert!(paths.get("/end-users/next").unwrap().get.is_some(), "Missing GET next");

    let schemas = &spec.components.as_ref().unwrap().schemas;
    assert!(schemas.contains_key("CreateEndUserRequest"), "Missing CreateEndUserRequest schema");
    assert!(schemas.contains_key("EndUserResponse"), "Missing EndUserResponse schema");
    assert!(schemas.contains_key("MeResponse"), "Missing MeResponse schema");

    println!("OpenAPI Spec:\n{}", json);
}

#[test]
fn test_openapi_declares_bearer_security() {
    let spec = ApiDoc::openapi();
    let components = spec.components.as_ref().unwrap();
    assert!(components.security_schemes.contains_key(BEARER_AUTH));

    let json = spec.to_pretty_json().unwrap();
    assert!(json.contains("\"bearer\""), "Missing bearer scheme in JSON");
    assert!(json.contains("\"end-users\""), "Missing 'end-users' tag in JSON");
    assert!(json.contains("\"/v1\""), "Missing /v1 server in JSON");
}
