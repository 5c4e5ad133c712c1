//! Serendipity Web UI
//!
//! 渲染 Agent 管理页面，并将 TTS 请求代理到外部语音合成服务

use std::sync::Arc;

use serendipity_web::config::{load_config, print_config, LogConfig};
use serendipity_web::infrastructure::{
    AppState, FileViewRenderer, HttpServer, HttpTtsClient, HttpTtsClientConfig, ServerConfig,
};
use tracing_subscriber::EnvFilter;

fn init_logging(log: &LogConfig) {
    let log_filter = format!(
        "{},serendipity_web={},tower_http=debug",
        log.level, log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received shutdown signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for ctrl-c"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("Serendipity Web UI v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let renderer = Arc::new(FileViewRenderer::new(&config.web.templates_dir));

    let tts_config = HttpTtsClientConfig::with_timeout_secs(config.tts_proxy.timeout_secs);
    let synthesizer = Arc::new(HttpTtsClient::new(tts_config)?);

    let state = AppState::new(renderer, synthesizer);
    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        &config.web.static_dir,
    );

    HttpServer::new(server_config, state)
        .run_with_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
