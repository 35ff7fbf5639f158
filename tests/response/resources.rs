//! Whole-resource filtering tests.

use crate::common::{api_resolver, group_schema, init_logging, set, user_schema};
use scim_response_filter::schema::registry::{ENTERPRISE_USER_SCHEMA, USER_SCHEMA};
use scim_response_filter::{
    ResourceSchema, ResponseFilter, Schema, ServiceProviderConfig, ValidationError,
};
use serde_json::{Value, json};

const BADGE_EXTENSION: &str = "urn:example:params:scim:schemas:extension:Badge";

/// A resource type whose extension declares a required `badge`.
fn badge_holder(extension_required: bool) -> ResourceSchema {
    let base: Schema = serde_json::from_value(json!({
        "id": "urn:example:params:scim:schemas:BadgeHolder",
        "name": "BadgeHolder",
        "attributes": [
            { "name": "id", "type": "string", "mutability": "readOnly", "returned": "always" }
        ]
    }))
    .unwrap();
    let extension: Schema = serde_json::from_value(json!({
        "id": BADGE_EXTENSION,
        "name": "Badge",
        "attributes": [
            { "name": "badge", "type": "string", "required": true },
            { "name": "issuer", "type": "string" }
        ]
    }))
    .unwrap();
    ResourceSchema::new("BadgeHolder", &base).with_extension(&extension, extension_required)
}

fn assert_badge_missing(result: Result<Value, ValidationError>) {
    match result {
        Err(ValidationError::RequiredAttributeMissing { attribute, .. }) => {
            assert_eq!(attribute, format!("{}:badge", BADGE_EXTENSION));
        }
        other => panic!("expected a missing badge, got {:?}", other),
    }
}

fn bjensen() -> Value {
    json!({
        "schemas": [USER_SCHEMA, ENTERPRISE_USER_SCHEMA],
        "id": "2819c223-7f76-453a-919d-413861904646",
        "userName": "bjensen",
        "password": "t1meMa$heen",
        "name": { "givenName": "Barbara", "familyName": "Jensen", "nickname": "Babs" },
        "emails": [{ "value": "bjensen@example.com", "type": "work" }],
        "favoriteColor": "green",
        ENTERPRISE_USER_SCHEMA: {
            "employeeNumber": "701984",
            "manager": { "value": "26118915", "displayName": "John Smith" }
        }
    })
}

#[test]
fn test_full_resource_without_parameters() {
    init_logging();
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    let response = filter.filter_resource(&user, bjensen()).unwrap();

    assert_eq!(
        response,
        json!({
            "schemas": [USER_SCHEMA, ENTERPRISE_USER_SCHEMA],
            "id": "2819c223-7f76-453a-919d-413861904646",
            "userName": "bjensen",
            "name": { "givenName": "Barbara", "familyName": "Jensen" },
            "emails": [{ "value": "bjensen@example.com", "type": "work" }],
            ENTERPRISE_USER_SCHEMA: {
                "employeeNumber": "701984",
                "manager": { "value": "26118915", "displayName": "John Smith" }
            }
        })
    );
}

#[test]
fn test_minimal_set_keeps_always_and_requested() {
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter =
        ResponseFilter::new(&config, &api_resolver).with_attributes(set(&user, &["emails"]));

    let response = filter.filter_resource(&user, bjensen()).unwrap();

    assert_eq!(
        response,
        json!({
            "schemas": [USER_SCHEMA, ENTERPRISE_USER_SCHEMA],
            "id": "2819c223-7f76-453a-919d-413861904646",
            "userName": "bjensen",
            "emails": [{ "value": "bjensen@example.com", "type": "work" }]
        })
    );
}

#[test]
fn test_extension_emptied_by_exclusion_is_omitted() {
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver)
        .with_excluded_attributes(set(&user, &["employeeNumber", "manager", "emails"]));

    let response = filter.filter_resource(&user, bjensen()).unwrap();

    assert!(response.get(ENTERPRISE_USER_SCHEMA).is_none());
    assert!(response.get("emails").is_none());
    assert_eq!(response["name"]["givenName"], "Barbara");
}

#[test]
fn test_unknown_members_are_dropped() {
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    let response = filter.filter_resource(&user, bjensen()).unwrap();

    assert!(response.get("favoriteColor").is_none());
    assert!(response["name"].get("nickname").is_none());
}

#[test]
fn test_missing_required_attribute_fails_the_resource() {
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    let mut resource = bjensen();
    resource.as_object_mut().unwrap().remove("userName");

    let error = filter.filter_resource(&user, resource).unwrap_err();
    assert!(matches!(error, ValidationError::RequiredAttributeMissing { .. }));

    let lenient = ServiceProviderConfig::ignoring_required_attributes();
    let mut resource = bjensen();
    resource.as_object_mut().unwrap().remove("userName");
    let response = ResponseFilter::new(&lenient, &api_resolver)
        .filter_resource(&user, resource)
        .unwrap();
    assert!(response.get("userName").is_none());
}

#[test]
fn test_non_object_resource_is_rejected() {
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    for resource in [json!([]), json!("bjensen"), Value::Null] {
        let error = filter.filter_resource(&user, resource).unwrap_err();
        assert!(matches!(error, ValidationError::InvalidResource { .. }));
    }
}

#[test]
fn test_document_without_schemas_member() {
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    let response = filter
        .filter_resource(&user, json!({ "id": "1", "userName": "alice" }))
        .unwrap();

    assert_eq!(response, json!({ "id": "1", "userName": "alice" }));
}

#[test]
fn test_meta_survives_filtering() {
    init_logging();
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);
    let meta = json!({
        "resourceType": "User",
        "created": "2010-01-23T04:56:22Z",
        "lastModified": "2011-05-13T04:42:34Z",
        "location": "https://example.com/v2/Users/2819c223",
        "version": "W/\"a330bc54f0671c9\""
    });

    let response = filter
        .filter_resource(&user, json!({ "id": "1", "userName": "b", "meta": meta.clone() }))
        .unwrap();

    assert_eq!(response, json!({ "id": "1", "userName": "b", "meta": meta }));
}

#[test]
fn test_group_meta_follows_parameters() {
    let group = group_schema();
    let config = ServiceProviderConfig::default();
    let document = json!({
        "id": "e9e30dba",
        "displayName": "Tour Guides",
        "meta": { "resourceType": "Group", "location": "https://example.com/v2/Groups/e9e30dba" }
    });

    let plain = ResponseFilter::new(&config, &api_resolver);
    let response = plain.filter_resource(&group, document.clone()).unwrap();
    assert_eq!(response["meta"]["resourceType"], "Group");

    let excluded = ResponseFilter::new(&config, &api_resolver)
        .with_excluded_attributes(set(&group, &["meta"]));
    let response = excluded.filter_resource(&group, document).unwrap();
    assert!(response.get("meta").is_none());
}

#[test]
fn test_required_extension_absent_fails() {
    let schema = badge_holder(true);
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    assert_badge_missing(filter.filter_resource(&schema, json!({ "id": "1" })));
}

#[test]
fn test_required_extension_present_but_empty_fails() {
    let schema = badge_holder(true);
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    assert_badge_missing(filter.filter_resource(&schema, json!({ "id": "1", BADGE_EXTENSION: {} })));
}

#[test]
fn test_required_extension_absent_tolerated_when_ignored() {
    let schema = badge_holder(true);
    let config = ServiceProviderConfig::ignoring_required_attributes();
    let filter = ResponseFilter::new(&config, &api_resolver);

    let response = filter.filter_resource(&schema, json!({ "id": "1" })).unwrap();

    assert_eq!(response, json!({ "id": "1" }));
}

#[test]
fn test_optional_extension_checked_only_when_present() {
    let schema = badge_holder(false);
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    let response = filter.filter_resource(&schema, json!({ "id": "1" })).unwrap();
    assert_eq!(response, json!({ "id": "1" }));

    assert_badge_missing(filter.filter_resource(&schema, json!({ "id": "1", BADGE_EXTENSION: {} })));

    let response = filter
        .filter_resource(&schema, json!({ "id": "1", BADGE_EXTENSION: { "badge": "gold" } }))
        .unwrap();
    assert_eq!(response, json!({ "id": "1", BADGE_EXTENSION: { "badge": "gold" } }));
}

#[test]
fn test_member_names_match_ignoring_case() {
    let user = user_schema();
    let config = ServiceProviderConfig::default();
    let filter = ResponseFilter::new(&config, &api_resolver);

    let response = filter
        .filter_resource(
            &user,
            json!({
                "ID": "1",
                "UserName": "bjensen",
                "NAME": { "GivenName": "Barbara" },
                "URN:IETF:PARAMS:SCIM:SCHEMAS:EXTENSION:ENTERPRISE:2.0:USER": { "EmployeeNumber": "701984" }
            }),
        )
        .unwrap();

    assert_eq!(
        response,
        json!({
            "id": "1",
            "userName": "bjensen",
            "name": { "givenName": "Barbara" },
            ENTERPRISE_USER_SCHEMA: { "employeeNumber": "701984" }
        })
    );
}
