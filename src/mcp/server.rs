use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{ConfigLoadResult, load_config},
    core::{
        CollectingSink, LocaleCode, Provider, StaticEnvironment, TranslationData, Warning,
        parsers::json::{ScanMessagesResult, scan_message_files},
    },
};

use super::types::{
    ConfigDto, ConfigValues, FileWarning, GetConfigParams, GetLocalesParams, LocaleInfo,
    LocalesResult, TranslateParams, TranslateResult,
};

#[derive(Clone)]
pub struct PhrasebookMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for PhrasebookMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PhrasebookMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Translate a token the way the application would
    #[tool(
        description = "Translate a token using the project's message files. Supports interpolation data and a 'count' for plural variants. Returns the result, whether it was actually translated, and any warnings."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = Path::new(&params.project_root_path);

        let config = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;
        let messages = scan_message_files(config.config.messages_dir(root))
            .map_err(|e| McpError::internal_error(format!("Failed to load messages: {}", e), None))?;

        let sink = CollectingSink::new();
        let provider = project_provider(&config, &messages, &sink);

        let data = params.data.map(TranslationData::from_map);
        let locale = match &params.locale {
            Some(code) => Some(LocaleCode::new(code)),
            None => provider.get_language().cloned(),
        };

        let (result, translated) =
            match provider.try_translate(&params.token, data.as_ref(), params.locale.as_deref()) {
                Ok(text) => (text, true),
                Err(error) => {
                    provider.report(Warning::Translate(error));
                    (params.token.clone(), false)
                }
            };

        let translate_result = TranslateResult {
            locale: locale.map(String::from),
            token: params.token,
            result,
            translated,
            warnings: sink.take().iter().map(|w| w.to_string()).collect(),
        };

        json_result(&translate_result)
    }

    /// Get available locales
    #[tool(
        description = "Get available locales with their message files, key counts, and the locale used when none is requested."
    )]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);

        let config = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let messages_dir = config.config.messages_dir(root);
        let messages = if messages_dir.is_dir() {
            scan_message_files(&messages_dir).map_err(|e| {
                McpError::internal_error(format!("Failed to load messages: {}", e), None)
            })?
        } else {
            ScanMessagesResult::default()
        };

        let sink = CollectingSink::new();
        let provider = project_provider(&config, &messages, &sink);

        let locales_result = LocalesResult {
            messages_root: config.config.messages_root.clone(),
            current_locale: provider.get_language().map(|l| l.to_string()),
            locales: messages
                .files
                .iter()
                .map(|file| LocaleInfo {
                    locale: file.dictionary.locale.to_string(),
                    file_path: file.file_path.clone(),
                    key_count: file.dictionary.phrases.leaf_count(),
                })
                .collect(),
            warnings: messages
                .warnings
                .iter()
                .map(|w| FileWarning {
                    file_path: w.file_path.clone(),
                    error: w.error.clone(),
                })
                .collect(),
        };

        json_result(&locales_result)
    }

    /// Get phrasebook configuration
    #[tool(
        description = "Get the effective phrasebook configuration for a project and whether it came from .phrasebookrc.json."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        json_result(&config_dto)
    }
}

/// Provider over a project's files. Host locale preferences are ignored so
/// answers depend only on the project.
fn project_provider(
    config: &ConfigLoadResult,
    messages: &ScanMessagesResult,
    sink: &CollectingSink,
) -> Provider {
    Provider::builder()
        .config(config.config.provider_config())
        .dictionaries(messages.dictionaries().cloned())
        .environment(StaticEnvironment::empty())
        .warnings(sink.clone())
        .build()
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for PhrasebookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Phrasebook MCP lets AI agents inspect and exercise a project's translations.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get available locales, their key counts and the initial locale\n\
                 3. translate - Translate a token with optional locale and interpolation data\n\n\
                 A translate result with translated=false fell back to the token; its warnings\n\
                 say whether the locale or the token was missing."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = PhrasebookMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
