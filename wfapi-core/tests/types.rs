use std::collections::BTreeMap;

use serde_json::json;
use wfapi_core::{
    AnyValue, Envelope, JsonResponse, StatusUpdateRequest, WorkflowCreateRequest, WorkflowId,
    WorkflowUpdateRequest,
};

#[test]
fn create_request_with_only_name_serializes_to_name() {
    let req = WorkflowCreateRequest::new("invoice-flow");
    let v = serde_json::to_value(Envelope::new(&req)).unwrap();
    assert_eq!(v, json!({"data": {"name": "invoice-flow"}}));
}

#[test]
fn create_request_uses_camel_case_wire_names() {
    let req = WorkflowCreateRequest::new("onboarding")
        .with_notification_group("ng_1")
        .with_tags(["a", "b"])
        .with_critical(true)
        .with_active(false);
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(
        v,
        json!({
            "name": "onboarding",
            "notificationGroupId": "ng_1",
            "tags": ["a", "b"],
            "active": false,
            "critical": true,
        })
    );
}

#[test]
fn extra_fields_are_flattened_into_the_record() {
    let req = WorkflowCreateRequest::new("x").with_field("origin", json!("external"));
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(v, json!({"name": "x", "origin": "external"}));
}

#[test]
fn raw_field_replaces_typed_field_of_same_name() {
    let raw: AnyValue = json!("raw");
    let req = WorkflowCreateRequest::new("typed").with_field("name", raw);
    assert_eq!(req.name, None);
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"name":"raw"}"#);

    let req = WorkflowUpdateRequest::new()
        .with_description("typed")
        .with_field("description", json!(null));
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"description":null}"#);
}

#[test]
fn opaque_map_keeps_explicit_nulls() {
    let serde_json::Value::Object(map) = json!({"name": "x", "description": null, "data": null})
    else {
        panic!("expected object");
    };
    let req = WorkflowUpdateRequest::from(map.clone());
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::Value::Object(map));
}

#[test]
fn opaque_map_goes_out_unchanged() {
    let map = json!({"name": "invoice-flow", "steps": [{"type": "email"}], "custom": 1});
    let serde_json::Value::Object(map) = map else {
        panic!("expected object");
    };
    let req = WorkflowCreateRequest::from(map.clone());
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(v, serde_json::Value::Object(map));
}

#[test]
fn create_request_roundtrips_unknown_fields() {
    let raw = json!({"name": "n", "preferenceSettings": {"email": true}, "x-custom": "y"});
    let req: WorkflowCreateRequest = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(req.name.as_deref(), Some("n"));
    assert_eq!(req.preference_settings, Some(json!({"email": true})));
    assert_eq!(req.extra.get("x-custom"), Some(&json!("y")));
    assert_eq!(serde_json::to_value(&req).unwrap(), raw);
}

#[test]
fn empty_update_request_serializes_to_empty_object() {
    let v = serde_json::to_value(WorkflowUpdateRequest::new()).unwrap();
    assert_eq!(v, json!({}));
}

#[test]
fn update_request_partial_fields() {
    let req = WorkflowUpdateRequest::new()
        .with_name("renamed")
        .with_description("now with sms");
    let v = serde_json::to_value(Envelope::new(&req)).unwrap();
    assert_eq!(
        v,
        json!({"data": {"name": "renamed", "description": "now with sms"}})
    );
}

#[test]
fn status_request_shape() {
    let on = serde_json::to_value(Envelope::new(StatusUpdateRequest::new(true))).unwrap();
    let off = serde_json::to_value(Envelope::new(StatusUpdateRequest::new(false))).unwrap();
    assert_eq!(on, json!({"data": {"active": true}}));
    assert_eq!(off, json!({"data": {"active": false}}));
}

#[test]
fn workflow_id_is_transparent() {
    let id = WorkflowId::from("wf_123");
    assert_eq!(serde_json::to_value(&id).unwrap(), json!("wf_123"));
    assert_eq!(id.to_string(), "wf_123");
    assert_eq!(id.as_ref(), "wf_123");
}

#[test]
fn json_response_data_accessor() {
    let resp = JsonResponse::new(200, json!({"data": {"_id": "wf_1"}}));
    assert!(resp.is_success());
    assert_eq!(resp.data(), Some(&json!({"_id": "wf_1"})));

    let bare = JsonResponse::new(204, serde_json::Value::Null);
    assert!(bare.data().is_none());
}

#[test]
fn json_response_deserialize_data() {
    #[derive(serde::Deserialize)]
    struct Wf {
        #[serde(rename = "_id")]
        id: String,
    }
    let resp = JsonResponse::new(200, json!({"data": {"_id": "wf_9"}}));
    let wf: Wf = resp.deserialize_data().unwrap();
    assert_eq!(wf.id, "wf_9");

    let list = JsonResponse::new(200, json!([{"_id": "a"}, {"_id": "b"}]));
    let wfs: Vec<Wf> = list.deserialize_data().unwrap();
    assert_eq!(wfs.len(), 2);
}

#[test]
fn json_response_header_lookup_is_case_insensitive() {
    let headers = BTreeMap::from([("content-type".to_string(), "application/json".to_string())]);
    let resp = JsonResponse::new(404, json!({"message": "not found"})).with_headers(headers);
    assert!(!resp.is_success());
    assert_eq!(resp.header("Content-Type"), Some("application/json"));
    assert_eq!(resp.header("x-missing"), None);
}
