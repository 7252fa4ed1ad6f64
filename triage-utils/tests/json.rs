use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{env, fs};
use triage_utils::*;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Sample {
    zeta: u32,
    alpha: Vec<u32>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let sample = Sample {
        zeta: 1,
        alpha: vec![3, 2],
    };
    assert_eq!(jsonify(&sample), r#"{"alpha":[3,2],"zeta":1}"#);
}

#[test]
fn test_jsonify_sorts_nested_keys() {
    let value = json!({"b": [{"y": 1, "x": 2}], "a": {"d": 0, "c": 0}});
    assert_eq!(
        jsonify(&value),
        r#"{"a":{"c":0,"d":0},"b":[{"x":2,"y":1}]}"#
    );
}

#[test]
fn test_dejsonify() {
    let sample: Sample = dejsonify(r#"{"zeta": 7, "alpha": []}"#).unwrap();
    assert_eq!(
        sample,
        Sample {
            zeta: 7,
            alpha: vec![]
        }
    );
}

#[test]
fn test_load_json_arg_inline() {
    let sample: Sample = load_json_arg(r#"{"zeta": 1, "alpha": [1]}"#).unwrap();
    assert_eq!(sample.alpha, vec![1]);
}

#[test]
fn test_load_json_arg_file() {
    let path = env::temp_dir().join(format!("triage-utils-{}.json", std::process::id()));
    fs::write(&path, r#"{"zeta": 4, "alpha": [9, 8]}"#).unwrap();
    let sample: Sample = load_json_arg(path.to_str().unwrap()).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(sample.zeta, 4);
}

#[test]
fn test_load_json_arg_errors() {
    assert!(load_json_arg::<Sample>("does-not-exist.json").is_err());
    let err = load_json_arg::<Sample>(r#"{"zeta": -1}"#).unwrap_err();
    assert!(err.to_string().contains("inline json"));
}
