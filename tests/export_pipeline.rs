//! End-to-end tests for the export pipeline against a mock Dataverse API
//!
//! Exercises the full list → fetch → persist flow: collection listing,
//! default-format export, filename derivation, and the behavior of the
//! on-existing-file policies across repeated runs.

#![allow(clippy::unwrap_used)]

use dataverse_export::{Config, ExistingFileAction, ExportFormat, Exporter};
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "0000aaaa-bbbb-cccc-dddd-eeeeffff0000";

/// Mount a `liss_dc` collection containing exactly one dataset and a
/// default-format export for it returning `{"name": "x"}`.
async fn mount_liss_dc(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/dataverses/liss_dc/contents"))
        .and(query_param("key", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": [
                {"type": "dataset", "protocol": "doi", "authority": "10.1", "identifier": "ABC123"}
            ]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/datasets/export"))
        .and(query_param("exporter", "schema.org"))
        .and(query_param("persistentId", "doi:10.1/ABC123"))
        .and(query_param("key", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "x"})))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer, temp_dir: &TempDir) -> Config {
    Config {
        base_url: server.uri(),
        api_token: Some(TOKEN.to_string()),
        output_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    }
}

#[tokio::test]
async fn exports_liss_dc_collection_to_one_file() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    mount_liss_dc(&server).await;

    let exporter = Exporter::new(config_for(&server, &temp_dir)).unwrap();
    let exported = exporter
        .export_collection("liss_dc", ExportFormat::default())
        .await
        .unwrap();

    assert_eq!(exported, vec!["doi:10.1/ABC123"]);
    let output = temp_dir.path().join("doi:10.1-ABC123.json");
    assert_eq!(fs::read_to_string(&output).unwrap(), r#"{"name":"x"}"#);
}

#[tokio::test]
async fn rerun_with_default_policy_concatenates_documents() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    mount_liss_dc(&server).await;

    let exporter = Exporter::new(config_for(&server, &temp_dir)).unwrap();
    exporter
        .export_collection("liss_dc", ExportFormat::default())
        .await
        .unwrap();
    exporter
        .export_collection("liss_dc", ExportFormat::default())
        .await
        .unwrap();

    // Historical append behavior: the second run's document lands after the
    // first in the same file
    let output = temp_dir.path().join("doi:10.1-ABC123.json");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        r#"{"name":"x"}{"name":"x"}"#
    );
}

#[tokio::test]
async fn rerun_with_overwrite_policy_replaces_the_file() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    mount_liss_dc(&server).await;

    let config = Config {
        on_existing: ExistingFileAction::Overwrite,
        ..config_for(&server, &temp_dir)
    };
    let exporter = Exporter::new(config).unwrap();
    exporter
        .export_collection("liss_dc", ExportFormat::default())
        .await
        .unwrap();
    exporter
        .export_collection("liss_dc", ExportFormat::default())
        .await
        .unwrap();

    let output = temp_dir.path().join("doi:10.1-ABC123.json");
    assert_eq!(fs::read_to_string(&output).unwrap(), r#"{"name":"x"}"#);
}

#[tokio::test]
async fn two_configurations_coexist_in_one_process() {
    // Two servers, two output directories, one process: configuration is
    // explicit, not process-global
    let server_a = MockServer::start().await;
    let server_b = MockServer::start().await;
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    mount_liss_dc(&server_a).await;

    Mock::given(method("GET"))
        .and(path("/api/datasets/export"))
        .and(query_param("exporter", "Datacite"))
        .and(query_param("persistentId", "hdl:20.500/Z9"))
        .and(query_param("key", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"kind": "datacite"})))
        .mount(&server_b)
        .await;

    let exporter_a = Exporter::new(config_for(&server_a, &dir_a)).unwrap();
    let exporter_b = Exporter::new(config_for(&server_b, &dir_b)).unwrap();

    exporter_a
        .export_collection("liss_dc", ExportFormat::default())
        .await
        .unwrap();
    exporter_b
        .export_one("hdl:20.500/Z9", ExportFormat::Datacite)
        .await
        .unwrap();

    assert!(dir_a.path().join("doi:10.1-ABC123.json").exists());
    assert!(dir_b.path().join("hdl:20.500-Z9.json").exists());
    assert!(
        !dir_a.path().join("hdl:20.500-Z9.json").exists(),
        "exports must not leak across configurations"
    );
}

#[tokio::test]
async fn status_check_runs_against_the_configured_service() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path("/api/info/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": {"version": "6.2"}
        })))
        .mount(&server)
        .await;

    let exporter = Exporter::new(config_for(&server, &temp_dir)).unwrap();
    assert_eq!(exporter.client().status().await.unwrap(), "OK");
}
