use std::{convert::Infallible, sync::Arc, time::Duration};

use async_stream::stream;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio_stream::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    config::{AppConfig, PublicConfig},
    deck::{Deck, DeckSlide, DeckStore},
    error::AppError,
    export::{export_deck, ExportFormat},
    gemini::{ImageOptions, DEFAULT_RESOLUTION},
    models::{
        GenerateImagesRequest, GenerateImagesResponse, GeneratePromptRequest, GeneratePromptResponse,
        RegenerateRequest, RegenerateResponse, ReorderRequest, SlideImageRequest,
    },
    pipeline::{GenerationEvent, Pipeline},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: DeckStore,
    pub pipeline: Pipeline,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/config", get(get_config))
        .route("/api/generate-prompt", post(generate_prompt))
        .route("/api/generate-prompt-stream", post(generate_prompt_stream))
        .route("/api/regenerate-slide", post(regenerate_slide))
        .route("/api/generate-images", post(generate_images))
        .route("/api/decks/:id", get(get_deck))
        .route("/api/decks/:id/reorder", post(reorder_deck))
        .route("/api/decks/:id/slides/:slide_id/image", post(generate_slide_image))
        .route("/api/decks/:id/export/:format", get(export))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "decks": state.store.len() }))
}

pub async fn get_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(state.config.public())
}

pub async fn generate_prompt(
    State(state): State<AppState>,
    Json(body): Json<GeneratePromptRequest>,
) -> Result<Json<GeneratePromptResponse>, AppError> {
    info!("🚀 Generating {} slide prompts, style {}", body.settings.slide_count, body.style);
    let output = state.pipeline.generate(&body).await?;

    let deck = Deck::new(output.metadata.style, output.metadata.aspect_ratio, output.slides.clone());
    let deck_id = state.store.insert(deck);
    info!(%deck_id, slides = output.slides.len(), "✅ Deck saved");

    Ok(Json(GeneratePromptResponse {
        success: true,
        prompts: output.prompts,
        slides: output.slides,
        metadata: output.metadata,
        deck_id,
    }))
}

pub async fn generate_prompt_stream(
    State(state): State<AppState>,
    Json(body): Json<GeneratePromptRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    info!("🚀 Streaming {} slide prompts, style {}", body.settings.slide_count, body.style);
    let cancel = CancellationToken::new();
    let mut events = state.pipeline.generate_stream(&body, cancel.clone()).await?;
    let store = state.store.clone();

    let stream = stream! {
        // Dropping the response (client gone) cancels the generation.
        let _guard = cancel.drop_guard();
        let mut event_id = 0u64;
        let mut slides = Vec::new();

        while let Some(event) = events.next().await {
            event_id += 1;
            let sse = match event {
                GenerationEvent::Slide(slide) => {
                    let data = json!({ "slideNumber": slide.slide_number, "title": slide.title, "prompt": slide.prompt });
                    slides.push(slide);
                    Event::default().event("slide").data(data.to_string())
                }
                GenerationEvent::Done { total_slides, style, aspect_ratio } => {
                    let deck_id = store.insert(Deck::new(style, aspect_ratio, std::mem::take(&mut slides)));
                    info!(%deck_id, total_slides, "✅ Streamed deck saved");
                    let data = json!({ "totalSlides": total_slides, "style": style, "aspectRatio": aspect_ratio, "deckId": deck_id });
                    Event::default().event("done").data(data.to_string())
                }
                GenerationEvent::Error { message, retryable } => {
                    warn!(error = %message, retryable, "❌ Slide stream failed");
                    let data = json!({ "message": message, "retryable": retryable });
                    Event::default().event("error").data(data.to_string())
                }
            };
            yield Ok::<Event, Infallible>(sse.id(event_id.to_string()));
        }
    };

    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15))))
}

pub async fn regenerate_slide(
    State(state): State<AppState>,
    Json(body): Json<RegenerateRequest>,
) -> Result<Json<RegenerateResponse>, AppError> {
    let slide = state.pipeline.regenerate(&body).await?;
    info!(slide_number = slide.slide_number, "✅ Slide regenerated");
    Ok(Json(RegenerateResponse { success: true, slide }))
}

pub async fn generate_images(
    State(state): State<AppState>,
    Json(body): Json<GenerateImagesRequest>,
) -> Result<Json<GenerateImagesResponse>, AppError> {
    info!("🎨 Generating images for {} slides", body.slides.len());
    Ok(Json(state.pipeline.generate_images(&body).await?))
}

fn deck_or_404(store: &DeckStore, id: Uuid) -> Result<Deck, AppError> {
    store.get(id).ok_or_else(|| AppError::NotFound(format!("deck {id}")))
}

pub async fn get_deck(Path(id): Path<Uuid>, State(state): State<AppState>) -> Result<Json<Deck>, AppError> {
    deck_or_404(&state.store, id).map(Json)
}

pub async fn reorder_deck(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(body): Json<ReorderRequest>,
) -> Result<Json<Deck>, AppError> {
    let (moved, deck) = state
        .store
        .reorder(id, body.active_id, body.over_id)
        .ok_or_else(|| AppError::NotFound(format!("deck {id}")))?;
    if !moved {
        warn!(%id, "Reorder ignored, slide id not in deck");
    }
    Ok(Json(deck))
}

pub async fn generate_slide_image(
    Path((id, slide_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    body: Option<Json<SlideImageRequest>>,
) -> Result<Json<DeckSlide>, AppError> {
    let (slide, aspect_ratio) = {
        let deck = deck_or_404(&state.store, id)?;
        let slide = deck.slide(slide_id).cloned().ok_or_else(|| AppError::NotFound(format!("slide {slide_id}")))?;
        (slide, deck.aspect_ratio)
    };
    let resolution = body
        .and_then(|Json(b)| b.resolution)
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_RESOLUTION.to_string());

    info!("🎯 Generating image for slide {} ({})", slide.slide_number, slide.title);
    let opts = ImageOptions { aspect_ratio: aspect_ratio.to_string(), resolution, title: Some(slide.title.clone()) };
    let images = state.pipeline.generate_image(&slide.prompt, &opts).await?;

    // The deck may have been reordered meanwhile; the slide id still matches.
    let updated = state
        .store
        .set_slide_images(id, slide_id, images)
        .ok_or_else(|| AppError::NotFound(format!("slide {slide_id}")))?;
    info!("✅ Generated image for slide {}", updated.slide_number);
    Ok(Json(updated))
}

/// `attachment` disposition with an ASCII fallback name and the UTF-8 name in `filename*`.
fn content_disposition(filename: &str) -> String {
    let ascii: String = filename.chars().filter(|c| c.is_ascii() && *c != '"').collect();
    let encoded: String = filename
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => (b as char).to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}

pub async fn export(
    Path((id, format)): Path<(Uuid, String)>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let format: ExportFormat = format.parse()?;
    let deck = deck_or_404(&state.store, id)?;
    let file = export_deck(&deck, format)?;
    info!(%id, ?format, bytes = file.body.len(), "📄 Deck exported");

    let headers = [
        (header::CONTENT_TYPE, file.content_type.to_string()),
        (header::CONTENT_DISPOSITION, content_disposition(&file.filename)),
    ];
    Ok((StatusCode::OK, headers, file.body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testing::{FakeImages, FakeText, SLIDES_REPLY};
    use axum::body::Body;
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    fn state_with(text: FakeText) -> AppState {
        AppState {
            config: Arc::new(AppConfig::from_lookup(|_| None)),
            store: DeckStore::default(),
            pipeline: Pipeline::new(Arc::new(text), Arc::new(FakeImages { fail_on: vec![] })),
        }
    }

    fn state() -> AppState {
        state_with(FakeText::with_slides(SLIDES_REPLY))
    }

    fn generate_body(slide_count: usize, text: &str) -> Value {
        json!({
            "content": { "type": "text", "text": text },
            "style": "educational",
            "settings": {
                "aspectRatio": "16:9",
                "slideCount": slide_count,
                "colorPalette": "auto",
                "layoutStructure": "balanced"
            }
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder.header("content-type", "application/json").body(Body::from(v.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec(), headers)
    }

    fn json_of(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn health_and_config() {
        let app = build_router(state());
        let (status, body, _) = send(app.clone(), "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body)["status"], "ok");

        let (status, body, _) = send(app, "GET", "/api/config", None).await;
        assert_eq!(status, StatusCode::OK);
        let config = json_of(&body);
        assert_eq!(config["model"], "gpt-4o");
        assert_eq!(config["imageKeyConfigured"], false);
    }

    #[tokio::test]
    async fn generate_saves_a_deck() {
        let state = state();
        let app = build_router(state.clone());
        let (status, body, _) = send(app.clone(), "POST", "/api/generate-prompt", Some(generate_body(3, "Intro to photosynthesis"))).await;
        assert_eq!(status, StatusCode::OK);
        let resp = json_of(&body);
        assert_eq!(resp["success"], true);
        assert_eq!(resp["slides"].as_array().unwrap().len(), 3);
        assert_eq!(resp["metadata"]["aspectRatio"], "16:9");

        let deck_id = resp["deckId"].as_str().unwrap().to_string();
        let (status, body, _) = send(app, "GET", &format!("/api/decks/{deck_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let deck = json_of(&body);
        assert_eq!(deck["title"], "Intro");
        assert_eq!(deck["slides"][2]["prompt"], "Thanks");
    }

    #[tokio::test]
    async fn input_errors_are_rejected_with_json() {
        let app = build_router(state());
        let (status, body, _) = send(app.clone(), "POST", "/api/generate-prompt", Some(generate_body(3, "   "))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err = json_of(&body);
        assert_eq!(err["success"], false);
        assert_eq!(err["kind"], "no_content");

        let (status, body, _) = send(app, "POST", "/api/generate-prompt", Some(generate_body(25, "topic"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_of(&body)["kind"], "validation");
    }

    #[tokio::test]
    async fn stream_sends_numbered_events() {
        let state = state();
        let app = build_router(state.clone());
        let (status, body, headers) =
            send(app, "POST", "/api/generate-prompt-stream", Some(generate_body(3, "Intro to photosynthesis"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/event-stream"));

        let text = String::from_utf8(body).unwrap();
        assert_eq!(text.matches("event: slide").count(), 3);
        assert_eq!(text.matches("event: done").count(), 1);
        assert!(text.contains("id: 1\n") && text.contains("id: 4\n"));
        assert!(text.contains("\"totalSlides\":3"));
        assert!(text.find("\"slideNumber\":1").unwrap() < text.find("\"slideNumber\":2").unwrap());
        assert_eq!(state.store.len(), 1);
    }

    #[tokio::test]
    async fn stream_failure_ends_with_error_event() {
        let fake = FakeText {
            fail_generation: Some(crate::error::ClientError::Auth("bad key".into())),
            ..FakeText::with_slides("")
        };
        let app = build_router(state_with(fake));
        let (status, body, _) = send(app, "POST", "/api/generate-prompt-stream", Some(generate_body(2, "topic"))).await;
        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(body).unwrap();
        assert!(text.contains("event: error"));
        assert!(text.contains("\"retryable\":false"));
        assert!(!text.contains("event: done"));
    }

    #[tokio::test]
    async fn regenerate_validates_and_returns_slide() {
        let app = build_router(state_with(FakeText::with_slides("**Slide 2: Better**\n```\nSharper visual\n```")));
        let mut body = json!({
            "slideNumber": 2,
            "style": "creative",
            "settings": { "aspectRatio": "4:3", "slideCount": 4, "colorPalette": "auto", "layoutStructure": "balanced" },
            "previousSlide": { "title": "Intro", "prompt": "Opening" }
        });
        let (status, resp, _) = send(app.clone(), "POST", "/api/regenerate-slide", Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let resp = json_of(&resp);
        assert_eq!(resp["slide"]["title"], "Better");
        assert_eq!(resp["slide"]["prompt"], "Sharper visual");

        body["instructions"] = json!("x".repeat(501));
        let (status, _, _) = send(app, "POST", "/api/regenerate-slide", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deck_reorder_image_and_export() {
        let state = state();
        let app = build_router(state.clone());
        let (_, body, _) = send(app.clone(), "POST", "/api/generate-prompt", Some(generate_body(3, "topic"))).await;
        let deck_id = json_of(&body)["deckId"].as_str().unwrap().to_string();
        let deck = state.store.get(deck_id.parse().unwrap()).unwrap();
        let (first, last) = (deck.slides[0].id, deck.slides[2].id);

        let (status, body, _) = send(app.clone(), "POST", &format!("/api/decks/{deck_id}/slides/{first}/image"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body)["images"][0]["data"], "16:9|2K");

        let (status, body, _) = send(
            app.clone(),
            "POST",
            &format!("/api/decks/{deck_id}/reorder"),
            Some(json!({ "activeId": first, "overId": last })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let reordered = json_of(&body);
        assert_eq!(reordered["slides"][2]["title"], "Intro");
        assert_eq!(reordered["slides"][2]["slideNumber"], 3);
        assert_eq!(reordered["slides"][2]["images"].as_array().unwrap().len(), 1);

        let (status, body, headers) = send(app.clone(), "GET", &format!("/api/decks/{deck_id}/export/markdown"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_DISPOSITION].to_str().unwrap().contains("filename=\"Intro.md\""));
        assert!(String::from_utf8(body).unwrap().starts_with("# Intro\n\n## Slide 1: Middle"));

        let (status, body, _) = send(app.clone(), "GET", &format!("/api/decks/{deck_id}/export/pdf"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(b"%PDF"));

        let (status, _, _) = send(app, "GET", &format!("/api/decks/{deck_id}/export/docx"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_deck_is_404() {
        let app = build_router(state());
        let (status, body, _) = send(app, "GET", &format!("/api/decks/{}", Uuid::new_v4()), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_of(&body)["kind"], "not_found");
    }

    #[test]
    fn disposition_encodes_non_ascii_names() {
        assert_eq!(
            content_disposition("光_deck.md"),
            "attachment; filename=\"_deck.md\"; filename*=UTF-8''%E5%85%89_deck.md"
        );
    }
}
