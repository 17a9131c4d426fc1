//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector describes the call, the expected URL, a simulated response
//! and either the expected decoded result or the expected status error.
//! Bodies are compared as parsed JSON, not raw strings.

use api_client::{ApiConfig, ApiError, HttpMethod, HttpRequest, HttpResponse, QueryParams, RequestClient};
use serde_json::Value;

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_params(case: &Value) -> QueryParams {
    case["params"]
        .as_array()
        .map(|pairs| {
            pairs
                .iter()
                .map(|pair| {
                    let arr = pair.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}

fn build(c: &RequestClient, method: HttpMethod, case: &Value) -> HttpRequest {
    let path = case["path"].as_str().unwrap();
    match method {
        HttpMethod::Get => c.build_get(path, &parse_params(case)),
        HttpMethod::Post => c.build_post(path, &case["body"]).unwrap(),
        HttpMethod::Put => c.build_put(path, &case["body"]).unwrap(),
        HttpMethod::Delete => c.build_delete(path),
    }
}

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let endpoint = vectors["endpoint"].as_str().unwrap();

    let c = RequestClient::new(ApiConfig::new(endpoint));
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let method = parse_method(case["method"].as_str().unwrap());

        // Verify build
        let req = build(&c, method, case);
        assert_eq!(req.method, method, "{name}: method");
        assert_eq!(
            req.url,
            format!("{endpoint}{}", case["expected_url"].as_str().unwrap()),
            "{name}: url"
        );
        match case.get("body") {
            Some(expected) => {
                let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected, "{name}: body");
            }
            None => assert!(req.body.is_none(), "{name}: body should be None"),
        }

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };

        let result = if method == HttpMethod::Delete {
            c.parse_empty(response).map(|()| Value::Null)
        } else {
            c.parse_json::<Value>(response)
        };

        if let Some(expected_error) = case.get("expected_error") {
            match result.unwrap_err() {
                ApiError::HttpStatus { status, body } => {
                    assert_eq!(u64::from(status), expected_error["status"].as_u64().unwrap(), "{name}: status");
                    assert_eq!(body, expected_error["body"].as_str().unwrap(), "{name}: error body");
                }
                other => panic!("{name}: unexpected error {other:?}"),
            }
        } else {
            let value = result.unwrap();
            let expected = case.get("expected_result").cloned().unwrap_or(Value::Null);
            assert_eq!(value, expected, "{name}: parsed result");
        }
    }
}
