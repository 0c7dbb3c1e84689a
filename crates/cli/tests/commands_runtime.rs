use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use rigsmith_cli::commands::input::BuildInput;
use rigsmith_cli::commands::suggest::SuggestRequest;
use rigsmith_cli::commands::{badges, check, config, profile, suggest, wattage};
use serde_json::Value;

#[test]
fn suggest_for_am5_cpu_keeps_matching_board_only() {
    with_env(&[], || {
        let result = suggest::run(SuggestRequest {
            input: build_input(&["cpu-9800x3d"]),
            ..SuggestRequest::default()
        });
        assert_eq!(result.exit_code, 0, "expected successful suggest run");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "suggest");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["base"], serde_json::json!(["cpu-9800x3d"]));

        let buckets = &payload["suggestions"]["by_bucket"];
        assert_eq!(bucket_ids(&buckets["motherboard"]), vec!["mb-b650"]);
        assert!(buckets.get("cpu").is_none(), "LGA1700 cpu does not fit the AM5 anchor");
        assert!(buckets.get("peripheral").is_none());

        let gpus = bucket_ids(&buckets["gpu"]);
        assert!(gpus.contains(&"gpu-4080".to_string()));
        assert!(!gpus.contains(&"gpu-4070-sold-out".to_string()));

        let flat = payload["suggestions"]["flat"].as_array().expect("flat array");
        assert!(flat.len() <= 12);
        assert!(flat.iter().all(|entry| entry["score"].as_f64().is_some_and(|score| score > 0.0)));
    });
}

#[test]
fn suggest_applies_co_occurrence_weights_file() {
    with_env(&[], || {
        let dir = tempfile::tempdir().expect("tempdir");
        let weights = dir.path().join("weights.json");
        fs::write(&weights, r#"{ "ssd-990": 500.0 }"#).expect("write weights");

        let result = suggest::run(SuggestRequest {
            input: build_input(&["mb-b650"]),
            weights: Some(weights),
            profile: None,
        });
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["suggestions"]["flat"][0]["part"]["id"], "ssd-990");
        assert_eq!(
            bucket_ids(&payload["suggestions"]["by_bucket"]["ram"]),
            vec!["ram-ddr5-6000"],
            "8000 MT/s kit is past the board's overclock margin"
        );
    });
}

#[test]
fn suggest_with_profile_drops_parts_outside_budget() {
    with_env(&[], || {
        let result = suggest::run(SuggestRequest {
            input: build_input(&["cpu-9800x3d"]),
            weights: None,
            profile: Some("quiet office".to_string()),
        });
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["profile"], "quiet_office");
        assert!(payload["suggestions"]["by_bucket"].get("gpu").is_none());
    });
}

#[test]
fn suggest_with_profile_keeps_in_budget_parts_whose_anchor_is_out_of_budget() {
    with_env(&[], || {
        let result = suggest::run(SuggestRequest {
            input: build_input(&["cpu-9800x3d"]),
            weights: None,
            profile: Some("4K Ultra".to_string()),
        });
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        let buckets = &payload["suggestions"]["by_bucket"];
        assert!(buckets.get("motherboard").is_none(), "mb-b650 is below the 4K board band");
        assert_eq!(bucket_ids(&buckets["storage"]), vec!["ssd-990"]);
        assert_eq!(bucket_ids(&buckets["gpu"]), vec!["gpu-4090"]);
    });
}

#[test]
fn check_reports_socket_mismatch() {
    with_env(&[], || {
        let result = check::run(build_input(&["cpu-9800x3d", "mb-z790"]));
        assert_eq!(result.exit_code, 0, "an incompatible build is still a successful check");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "check");
        assert_eq!(payload["compatible"], false);
        assert_eq!(payload["issues"][0]["code"], "SOCKET_MISMATCH");
    });
}

#[test]
fn check_reports_undersized_psu() {
    with_env(&[], || {
        let result =
            check::run(build_input(&["cpu-9800x3d", "mb-b650", "gpu-4090", "psu-650-bronze"]));

        let payload = parse_payload(&result.output);
        assert_eq!(payload["required_wattage"], 850);
        assert_eq!(payload["compatible"], false);
        let codes: Vec<&str> = payload["issues"]
            .as_array()
            .expect("issues array")
            .iter()
            .filter_map(|issue| issue["code"].as_str())
            .collect();
        assert_eq!(codes, vec!["PSU_INSUFFICIENT"]);
    });
}

#[test]
fn check_passes_a_complete_build() {
    with_env(&[], || {
        let result = check::run(build_input(&[
            "cpu-9800x3d",
            "mb-b650",
            "ram-ddr5-6000",
            "gpu-4080",
            "cooler-aio-360",
            "case-4000d",
            "psu-850-gold",
            "ssd-990",
        ]));

        let payload = parse_payload(&result.output);
        assert_eq!(payload["compatible"], true);
        assert_eq!(payload["issues"], serde_json::json!([]));
    });
}

#[test]
fn wattage_reports_bracketed_estimate() {
    with_env(&[], || {
        let result = wattage::run(build_input(&["cpu-9800x3d", "gpu-4080"]));
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["raw_w"], 490);
        assert_eq!(payload["with_headroom_w"], 662);
        assert_eq!(payload["recommended_w"], 750);
    });
}

#[test]
fn badges_for_flagship_build() {
    with_env(&[], || {
        let result = badges::run(build_input(&[
            "cpu-9800x3d",
            "gpu-4080",
            "cooler-aio-360",
            "psu-850-gold",
        ]));
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        let names: Vec<&str> = payload["badges"]
            .as_array()
            .expect("badges array")
            .iter()
            .filter_map(|badge| badge["badge"].as_str())
            .collect();
        assert_eq!(names, vec!["quiet", "stable", "top_gaming", "three_year_warranty"]);
    });
}

#[test]
fn profile_maps_free_text_label() {
    let result = profile::run("4K gaming rig");
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "profile");
    assert_eq!(payload["display_name"], "4K Ultra");
    assert!(payload["budget_per_category"].get("gpu").is_some());

    let fallback = parse_payload(&profile::run("something else").output);
    assert_eq!(fallback["profile"], "other");
}

#[test]
fn unknown_part_is_an_input_failure() {
    with_env(&[], || {
        let result = check::run(build_input(&["cpu-does-not-exist"]));
        assert_eq!(result.exit_code, 3, "expected input failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "catalog_input");
        assert_eq!(payload["hint"], "The catalog could not be read. Check the snapshot file.");
    });
}

#[test]
fn unreadable_catalog_is_an_input_failure() {
    with_env(&[], || {
        let result = wattage::run(BuildInput {
            catalog: Some(PathBuf::from("/nonexistent/catalog.json")),
            parts: vec!["cpu-9800x3d".to_string()],
        });
        assert_eq!(result.exit_code, 3);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "catalog_input");
        assert!(payload["message"].as_str().is_some_and(|message| message.contains("catalog")));
    });
}

#[test]
fn missing_catalog_is_a_config_failure() {
    with_env(&[], || {
        let result = badges::run(BuildInput { catalog: None, parts: vec!["cpu-9800x3d".into()] });
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "config_validation");
        assert_eq!(payload["hint"], "The configuration is invalid. Run `rigsmith config`.");
    });
}

#[test]
fn catalog_path_can_come_from_env() {
    let catalog = fixture_catalog();
    let catalog = catalog.to_str().expect("utf-8 fixture path");
    with_env(&[("RIGSMITH_CATALOG_PATH", catalog)], || {
        let result = wattage::run(BuildInput { catalog: None, parts: vec!["gpu-4090".into()] });
        assert_eq!(result.exit_code, 0);
        assert_eq!(parse_payload(&result.output)["recommended_w"], 750);
    });
}

#[test]
fn config_reports_env_source_and_rejects_invalid_limits() {
    with_env(&[("RIGSMITH_SUGGESTIONS_FLAT_LIMIT", "5")], || {
        let payload = parse_payload(&config::run().output);
        let field = payload["fields"]
            .as_array()
            .expect("fields array")
            .iter()
            .find(|field| field["key"] == "suggestions.flat_limit")
            .cloned()
            .expect("flat limit field");
        assert_eq!(field["value"], "5");
        assert_eq!(field["source"], "env (RIGSMITH_SUGGESTIONS_FLAT_LIMIT)");
    });

    with_env(&[("RIGSMITH_SUGGESTIONS_PER_BUCKET_LIMIT", "0")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 2);
        assert_eq!(parse_payload(&result.output)["error_class"], "config_validation");
    });
}

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

fn build_input(parts: &[&str]) -> BuildInput {
    BuildInput {
        catalog: Some(fixture_catalog()),
        parts: parts.iter().map(|part| part.to_string()).collect(),
    }
}

fn bucket_ids(bucket: &Value) -> Vec<String> {
    bucket
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry["part"]["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "RIGSMITH_CATALOG_PATH",
        "RIGSMITH_SUGGESTIONS_FLAT_LIMIT",
        "RIGSMITH_SUGGESTIONS_PER_BUCKET_LIMIT",
        "RIGSMITH_LOGGING_LEVEL",
        "RIGSMITH_LOGGING_FORMAT",
        "RIGSMITH_LOG_LEVEL",
        "RIGSMITH_LOG_FORMAT",
    ];

    let previous: Vec<(String, Option<String>)> =
        keys.iter().map(|key| (key.to_string(), env::var(key).ok())).collect();

    for key in keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}
