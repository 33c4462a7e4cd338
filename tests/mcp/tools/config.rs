use phrasebook::mcp::{
    PhrasebookMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_multi_locale};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({}))]).unwrap();
    let server = PhrasebookMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["messagesRoot"], "./messages");
    assert_eq!(json_result["config"]["targetAttribute"], "phrase");
    assert_eq!(json_result["config"]["quiet"], false);
    assert!(json_result["config"]["defaultLocale"].is_null());
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "messagesRoot": "locales",
            "defaultLocale": "de",
            "removeAttributesOnRender": true
        }))
        .unwrap();

    let server = PhrasebookMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["messagesRoot"], "locales");
    assert_eq!(json_result["config"]["defaultLocale"], "de");
    assert_eq!(json_result["config"]["removeAttributesOnRender"], true);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({"targetAttribute": ""})).unwrap();

    let server = PhrasebookMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales_multi() {
    let fixture = fixture_multi_locale().unwrap();
    let server = PhrasebookMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 2);
    assert_eq!(locales[0]["locale"], "de");
    assert_eq!(locales[0]["keyCount"], 2);
    assert_eq!(locales[1]["locale"], "en");
    assert_eq!(locales[1]["keyCount"], 3);
    assert!(
        locales[1]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("en.json")
    );
    assert_eq!(json_result["currentLocale"], "de");
    assert_eq!(json_result["messagesRoot"], "./messages");
}

#[tokio::test]
async fn test_get_locales_default_locale_from_config() {
    let fixture = fixture_multi_locale().unwrap();
    fixture.write_config(&json!({"defaultLocale": "EN"})).unwrap();
    let server = PhrasebookMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["currentLocale"], "en");
}

#[tokio::test]
async fn test_get_locales_reports_broken_files() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({"a": "A"}))]).unwrap();
    fixture.write_raw_message_file("fr.json", "{ broken").unwrap();
    let server = PhrasebookMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locales"].as_array().unwrap().len(), 1);
    let warnings = json_result["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0]["filePath"].as_str().unwrap().ends_with("fr.json"));
}

#[tokio::test]
async fn test_get_locales_without_messages_dir() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({"messagesRoot": "nowhere"})).unwrap();
    let server = PhrasebookMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["locales"].as_array().unwrap().is_empty());
    assert!(json_result["currentLocale"].is_null());
}
