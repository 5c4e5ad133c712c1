//! 测试辅助：进程内的假 TTS 上游服务

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing, Router,
};
use futures_util::StreamExt;
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::util::ServiceExt;

use crate::application::ports::AudioStream;
use crate::infrastructure::adapters::{FileViewRenderer, HttpTtsClient, HttpTtsClientConfig};
use crate::infrastructure::http::{create_routes, AppState};

#[derive(Clone)]
enum Behavior {
    Audio {
        content_type: Option<&'static str>,
        body: &'static [u8],
    },
    Status(u16),
    Slow(Duration),
}

/// 假 TTS 服务，记录每次收到的 query 参数
#[derive(Clone)]
pub struct FakeTts {
    behavior: Behavior,
    calls: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeTts {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn audio(content_type: &'static str, body: &'static [u8]) -> Self {
        Self::with_behavior(Behavior::Audio {
            content_type: Some(content_type),
            body,
        })
    }

    /// 不带 Content-Type 的响应
    pub fn untyped(body: &'static [u8]) -> Self {
        Self::with_behavior(Behavior::Audio {
            content_type: None,
            body,
        })
    }

    pub fn status(code: u16) -> Self {
        Self::with_behavior(Behavior::Status(code))
    }

    pub fn slow(delay: Duration) -> Self {
        Self::with_behavior(Behavior::Slow(delay))
    }

    pub fn calls(&self) -> Vec<HashMap<String, String>> {
        self.calls.lock().unwrap().clone()
    }
}

async fn synthesize_speech(
    State(fake): State<FakeTts>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.calls.lock().unwrap().push(params);

    match fake.behavior {
        Behavior::Audio {
            content_type: Some(content_type),
            body,
        } => Response::builder()
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap(),
        Behavior::Audio {
            content_type: None,
            body,
        } => Response::new(Body::from(body)),
        Behavior::Status(code) => {
            (StatusCode::from_u16(code).unwrap(), "upstream failure").into_response()
        }
        Behavior::Slow(delay) => {
            tokio::time::sleep(delay).await;
            Response::new(Body::from("late"))
        }
    }
}

/// 启动假 TTS 服务，返回其 base URL（不带末尾斜杠）
pub async fn spawn_fake_tts(fake: FakeTts) -> String {
    let app = Router::new()
        .route("/synthesize_speech/", routing::get(synthesize_speech))
        .with_state(fake);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// 一个没有服务监听的本地地址
pub async fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub async fn collect_stream(mut stream: AudioStream) -> Vec<u8> {
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        body.extend_from_slice(&chunk.unwrap());
    }
    body
}

/// 完整路由（模板目录同时作为静态目录），TTS 客户端使用给定超时
pub fn test_router(templates_dir: &Path, timeout: Duration) -> Router {
    let renderer = Arc::new(FileViewRenderer::new(templates_dir));
    let synthesizer = Arc::new(
        HttpTtsClient::new(HttpTtsClientConfig::default().with_timeout(timeout)).unwrap(),
    );
    let state = Arc::new(AppState::new(renderer, synthesizer));
    create_routes(templates_dir).with_state(state)
}

/// 对 Router 发起 GET，返回状态码、响应头和完整响应体
pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}
