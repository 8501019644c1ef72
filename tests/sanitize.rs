use mftrim::sanitizer::{
    classify, sanitize, sanitize_response, Document, RawResponse, ResourceShape, SanitizeError,
};
use mftrim_test_utils::managed_fields;
use reqwest::StatusCode;
use rstest::*;
use serde_json::{json, Value};

fn sanitize_json(value: &Value) -> Value {
    let out = sanitize(value.to_string().as_bytes()).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[fixture]
fn pod() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": "web-0",
            "namespace": "default",
            "uid": "5b1c4c5e-0d9e-4e8a-9b53-1f7d3c2a9e10",
            "resourceVersion": "1042",
            "labels": {"app": "web"},
            "annotations": {"kubectl.kubernetes.io/last-applied-configuration": "{}"},
            "ownerReferences": [{"kind": "StatefulSet", "name": "web"}],
            "managedFields": managed_fields()
        },
        "spec": {"containers": [{"name": "nginx", "image": "nginx:1.21"}]},
        "status": {"phase": "Running"}
    })
}

#[fixture]
fn pod_list(pod: Value) -> Value {
    let mut second = pod.clone();
    second["metadata"]["name"] = json!("web-1");
    let mut third = pod.clone();
    third["metadata"]["name"] = json!("web-2");
    third["metadata"].as_object_mut().unwrap().remove("managedFields");

    json!({
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": {"resourceVersion": "2048", "continue": ""},
        "items": [pod, second, third]
    })
}

#[rstest]
fn only_managed_fields_disappear(pod: Value) {
    let out = sanitize_json(&pod);

    let mut expected = pod.clone();
    expected["metadata"]
        .as_object_mut()
        .unwrap()
        .remove("managedFields");
    assert_eq!(out, expected);
}

#[rstest]
fn single_resource_is_idempotent(pod: Value) {
    let once = sanitize_json(&pod);
    let twice = sanitize_json(&once);
    assert_eq!(once, twice);
}

#[rstest]
fn list_is_idempotent(pod_list: Value) {
    let once = sanitize(pod_list.to_string().as_bytes()).unwrap();
    let twice = sanitize(&once).unwrap();
    assert_eq!(once, twice);
}

#[rstest]
fn list_keeps_items_and_envelope(pod_list: Value) {
    let out = sanitize_json(&pod_list);

    assert_eq!(out["kind"], "PodList");
    assert_eq!(out["metadata"], pod_list["metadata"]);

    let items = out["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    for (item, name) in items.iter().zip(["web-0", "web-1", "web-2"]) {
        assert_eq!(item["metadata"]["name"], name);
        assert!(item["metadata"].get("managedFields").is_none());
        assert_eq!(item["spec"], pod_list["items"][0]["spec"]);
    }

    let doc: Document = serde_json::from_value(out).unwrap();
    assert!(matches!(
        classify(doc).unwrap(),
        ResourceShape::ResourceList { items, .. } if items.len() == 3
    ));
}

#[test]
fn pod_example() {
    let raw = br#"{"kind":"Pod","metadata":{"name":"p","managedFields":[{"manager":"x"}]},"spec":{}}"#;
    let out: Value = serde_json::from_slice(&sanitize(raw).unwrap()).unwrap();
    assert_eq!(out, json!({"kind":"Pod","metadata":{"name":"p"},"spec":{}}));
}

#[test]
fn pod_list_example() {
    let out = sanitize_json(&json!({
        "kind": "PodList",
        "items": [
            {"metadata": {"name": "a", "managedFields": managed_fields()}},
            {"metadata": {"name": "b"}}
        ]
    }));

    assert_eq!(
        out,
        json!({
            "kind": "PodList",
            "items": [{"metadata": {"name": "a"}}, {"metadata": {"name": "b"}}]
        })
    );
}

#[test]
fn empty_typed_list_goes_through_classification() {
    let raw = br#"{"kind":"List","items":[]}"#;
    let out = sanitize(raw).unwrap();

    // re-encoded, not passed through
    assert_eq!(out, br#"{"items":[],"kind":"List"}"#.to_vec());
}

#[rstest]
#[case::empty(b"", b"")]
#[case::empty_object(b"{}", b"{}")]
#[case::empty_array(b"[]", b"[]")]
#[case::padded_array(b" [] ", b" [] ")]
fn trivial_bodies_pass_through(#[case] input: &[u8], #[case] expected: &[u8]) {
    assert_eq!(sanitize(input).unwrap(), expected.to_vec());
}

#[rstest]
#[case::not_json(b"invalid json")]
#[case::truncated(br#"{"kind":"Pod","metadata":"#)]
#[case::scalar(b"42")]
#[case::array_of_resources(br#"[{"kind":"Pod"}]"#)]
fn malformed_json(#[case] input: &[u8]) {
    assert!(matches!(
        sanitize(input),
        Err(SanitizeError::MalformedJson { .. })
    ));
}

#[test]
fn malformed_metadata_names_the_resource() {
    let raw = json!({"kind": "ConfigMap", "metadata": "cm"}).to_string();

    match sanitize(raw.as_bytes()) {
        Err(e @ SanitizeError::MalformedMetadata { .. }) => {
            assert_eq!(e.to_string(), "Metadata of ConfigMap `` is not an object")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn list_with_a_scalar_item_is_rejected() {
    let raw = json!({"kind": "List", "items": [{"metadata": {}}, "oops"]}).to_string();
    assert!(matches!(
        sanitize(raw.as_bytes()),
        Err(SanitizeError::ListConversionFailed { index: 1 })
    ));
}

#[test]
fn list_fails_as_a_whole() {
    let raw = json!({
        "kind": "List",
        "items": [
            {"metadata": {"name": "a", "managedFields": managed_fields()}},
            {"metadata": {"name": "b", "managedFields": managed_fields()}},
            {"kind": "Secret", "metadata": false}
        ]
    })
    .to_string();

    assert!(matches!(
        sanitize(raw.as_bytes()),
        Err(SanitizeError::ItemProcessingFailed { index: 2, .. })
    ));
}

#[test]
fn missing_response() {
    assert!(matches!(
        sanitize_response(None),
        Err(SanitizeError::NilInput)
    ));
}

#[rstest]
#[case::no_content(StatusCode::NO_CONTENT, None, true)]
#[case::zero_length(StatusCode::OK, Some(0), true)]
#[case::declared_length(StatusCode::OK, Some(512), false)]
#[case::unknown_length(StatusCode::OK, None, false)]
fn absent_body(
    #[case] status: StatusCode,
    #[case] content_length: Option<u64>,
    #[case] ok: bool,
) {
    let response = RawResponse {
        status,
        content_length,
        body: None,
    };

    match sanitize_response(Some(response)) {
        Ok(body) => {
            assert!(ok);
            assert!(body.is_empty());
        }
        Err(e) => {
            assert!(!ok);
            assert!(matches!(e, SanitizeError::UnexpectedEmptyBody { .. }));
        }
    }
}

#[test]
fn present_body_ignores_declared_length() {
    let response = RawResponse {
        status: StatusCode::OK,
        content_length: Some(9999),
        body: Some(br#"{"metadata":{"name":"p","managedFields":[]}}"#.to_vec()),
    };

    assert_eq!(
        sanitize_response(Some(response)).unwrap(),
        br#"{"metadata":{"name":"p"}}"#.to_vec()
    );
}

#[test]
fn numbers_keep_every_digit() {
    let raw = br#"{"metadata":{"big":123456789012345678901234567890,"dec":0.10000000000000000000001,"managedFields":[]},"spec":{"n":18446744073709551616}}"#;

    assert_eq!(
        sanitize(raw).unwrap(),
        br#"{"metadata":{"big":123456789012345678901234567890,"dec":0.10000000000000000000001},"spec":{"n":18446744073709551616}}"#.to_vec()
    );
}
