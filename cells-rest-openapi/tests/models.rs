use cells_rest_openapi::{
    construct_from_object, ConstructFromObject, ConvertError, ConvertOptions,
    RestDeleteVirtualNodeResponse,
};
use ctor::ctor;
use serde_json::{json, Value};
use std::collections::HashMap;

#[cfg(test)]
#[ctor]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn construct(data: Value) -> Option<RestDeleteVirtualNodeResponse> {
    RestDeleteVirtualNodeResponse::construct_from_object(data.as_object(), None).unwrap()
}

#[test]
fn it_builds_an_unset_model_from_an_empty_object() {
    let res = construct(json!({})).unwrap();

    assert_eq!(None, res.success);
}

#[test]
fn it_reads_success() {
    assert_eq!(Some(true), construct(json!({"Success": true})).unwrap().success);
}

#[test]
fn it_keeps_an_explicit_false() {
    assert_eq!(
        Some(false),
        construct(json!({"Success": false})).unwrap().success
    );
}

#[test]
fn it_treats_an_explicit_null_as_unset() {
    assert_eq!(None, construct(json!({"Success": null})).unwrap().success);
}

#[test]
fn an_explicit_null_clears_the_target_while_a_missing_key_keeps_it() {
    let target = RestDeleteVirtualNodeResponse {
        success: Some(true),
    };

    let cleared = RestDeleteVirtualNodeResponse::construct_from_object(
        json!({"Success": null}).as_object(),
        Some(target.clone()),
    )
    .unwrap();
    let kept =
        RestDeleteVirtualNodeResponse::construct_from_object(json!({}).as_object(), Some(target))
            .unwrap();

    assert_eq!(Some(RestDeleteVirtualNodeResponse::new()), cleared);
    assert_eq!(Some(true), kept.unwrap().success);
}

#[test]
fn lenient_mode_still_rejects_other_strings() {
    let data = json!({"Success": "yes"});

    let err = RestDeleteVirtualNodeResponse::construct_from_object_with(
        data.as_object(),
        None,
        &ConvertOptions::lenient(),
    )
    .unwrap_err();

    assert_eq!(Some("Success"), err.path());
    assert!(matches!(
        err.root_cause(),
        ConvertError::InvalidLiteral {
            expected: "Boolean",
            ..
        }
    ));
}

#[test]
fn it_returns_nothing_without_data_or_target() {
    let res = RestDeleteVirtualNodeResponse::construct_from_object(None, None).unwrap();

    assert_eq!(None, res);
}

#[test]
fn it_returns_the_target_untouched_without_data() {
    let target = RestDeleteVirtualNodeResponse {
        success: Some(false),
    };

    let res =
        RestDeleteVirtualNodeResponse::construct_from_object(None, Some(target.clone())).unwrap();

    assert_eq!(Some(target), res);
}

#[test]
fn it_keeps_target_fields_missing_from_data() {
    let target = RestDeleteVirtualNodeResponse {
        success: Some(true),
    };

    let res = RestDeleteVirtualNodeResponse::construct_from_object(
        json!({"Other": 1}).as_object(),
        Some(target),
    )
    .unwrap();

    assert_eq!(Some(true), res.unwrap().success);
}

#[test]
fn it_is_repeatable_on_the_same_target() {
    let data = json!({"Success": false});
    let target = RestDeleteVirtualNodeResponse {
        success: Some(true),
    };

    let first =
        RestDeleteVirtualNodeResponse::construct_from_object(data.as_object(), Some(target.clone()))
            .unwrap();
    let second =
        RestDeleteVirtualNodeResponse::construct_from_object(data.as_object(), Some(target))
            .unwrap();
    let again =
        RestDeleteVirtualNodeResponse::construct_from_object(data.as_object(), first.clone())
            .unwrap();

    assert_eq!(first, second);
    assert_eq!(first, again);
    assert_eq!(Some(false), first.unwrap().success);
}

#[test]
fn it_ignores_unknown_keys() {
    let res = construct(json!({"Success": true, "Extra": 1})).unwrap();

    assert_eq!(Some(true), res.success);
    assert_eq!(
        json!({"Success": true}),
        Value::Object(res.to_object().unwrap())
    );
}

#[test]
fn strict_mode_rejects_a_stringly_boolean() {
    let data = json!({"Success": "true"});

    let err =
        RestDeleteVirtualNodeResponse::construct_from_object(data.as_object(), None).unwrap_err();

    assert_eq!(Some("Success"), err.path());
    assert_eq!(
        "Field \"Success\": Expected: Boolean, Found: String",
        err.to_string()
    );
}

#[test]
fn lenient_mode_coerces_a_stringly_boolean() {
    let data = json!({"Success": "false"});

    let res = RestDeleteVirtualNodeResponse::construct_from_object_with(
        data.as_object(),
        None,
        &ConvertOptions::lenient(),
    )
    .unwrap();

    assert_eq!(Some(false), res.unwrap().success);
}

#[test]
fn it_builds_from_a_response_body() {
    let res = RestDeleteVirtualNodeResponse::construct_from_str(r#"{"Success":true}"#).unwrap();
    assert_eq!(Some(true), res.unwrap().success);

    let res = RestDeleteVirtualNodeResponse::construct_from_str("null").unwrap();
    assert_eq!(None, res);

    assert!(matches!(
        RestDeleteVirtualNodeResponse::construct_from_str("[true]"),
        Err(ConvertError::NotAnObject {
            model: "RestDeleteVirtualNodeResponse",
            found: "Array"
        })
    ));
    assert!(matches!(
        RestDeleteVirtualNodeResponse::construct_from_str("{\"Success\":"),
        Err(ConvertError::Json(_))
    ));
}

#[test]
fn it_agrees_with_serde_on_well_typed_input() {
    for body in [r#"{}"#, r#"{"Success":true}"#, r#"{"Success":false,"Extra":[1]}"#] {
        let from_serde: RestDeleteVirtualNodeResponse = serde_json::from_str(body).unwrap();
        let constructed = RestDeleteVirtualNodeResponse::construct_from_str(body)
            .unwrap()
            .unwrap();

        assert_eq!(from_serde, constructed);
    }
}

#[derive(Debug, Default, PartialEq)]
struct RestVirtualNodeBatch {
    label: Option<String>,
    results: Vec<RestDeleteVirtualNodeResponse>,
    by_uuid: HashMap<String, Box<RestDeleteVirtualNodeResponse>>,
}

construct_from_object!(RestVirtualNodeBatch {
    label: "Label",
    results: "Results",
    by_uuid: "ByUuid",
});

#[test]
fn it_builds_nested_models_and_collections() {
    let data = json!({
        "Label": "cleanup",
        "Results": [{"Success": true}, {"Success": false}],
        "ByUuid": {"a1": {"Success": true}},
    });

    let batch = RestVirtualNodeBatch::construct_from_object(data.as_object(), None)
        .unwrap()
        .unwrap();

    assert_eq!(Some("cleanup"), batch.label.as_deref());
    assert_eq!(
        vec![Some(true), Some(false)],
        batch
            .results
            .iter()
            .map(|r| r.success)
            .collect::<Vec<_>>()
    );
    assert_eq!(Some(true), batch.by_uuid["a1"].success);
}

#[test]
fn it_reports_the_full_path_of_a_nested_failure() {
    let data = json!({"Results": [{"Success": true}, {"Success": 0}]});

    let err = RestVirtualNodeBatch::construct_from_object(data.as_object(), None).unwrap_err();

    assert_eq!(Some("Results.1.Success"), err.path());
    assert!(matches!(
        err.root_cause(),
        ConvertError::TypeMismatch {
            expected: "Boolean",
            found: "Number"
        }
    ));

    let batch = RestVirtualNodeBatch::construct_from_object_with(
        data.as_object(),
        None,
        &ConvertOptions::lenient(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(Some(false), batch.results[1].success);
}
