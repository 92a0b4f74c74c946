//! Generation flow shared by the HTTP handlers: collect the source text, fan out the
//! analysis and character calls, assemble the slide prompt, then run the text model
//! either to completion or as a stream of slide events.

use std::pin::Pin;
use std::sync::Arc;

use async_stream::stream;
use tokio_stream::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{AppError, ClientError};
use crate::gemini::{ImageClient, ImageOptions, DEFAULT_ASPECT_RATIO, DEFAULT_RESOLUTION};
use crate::llm::{Attachment, TextClient, TextRequest};
use crate::models::{
    AspectRatio, ContentAnalysis, ContentInput, FileType, GenerateImagesRequest, GenerateImagesResponse,
    GeneratePromptRequest, GeneratedCharacter, GeneratedImage, GenerationMetadata, LlmOverrides, ParsedSlide, RegenerateRequest,
    SlideImageResult, SlideStyle,
};
use crate::prompts::{
    analyzer_system_prompt, build_analysis_prompt, build_character_prompt, build_regenerate_prompt, build_sequence,
    build_user_prompt, parse_character_description, parse_content_analysis, parse_regenerated_slide, PromptConfig,
    RegenerateContext, CHARACTER_SYSTEM_PROMPT, REGENERATE_SYSTEM_PROMPT, SLIDE_SYSTEM_PROMPT,
};
use crate::stream_parser::{parse_slides, SlideStreamParser};

pub const MAX_SLIDE_COUNT: usize = 20;
pub const MAX_REGENERATE_SLIDE_NUMBER: u32 = 200;
pub const MAX_INSTRUCTIONS_CHARS: usize = 500;

/// Source text for the prompts plus an optional binary document for the text model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub text: String,
    pub attachment: Option<Attachment>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn extract_content(content: &ContentInput) -> Result<ExtractedContent, AppError> {
    let mut parts = Vec::new();
    let mut attachment = None;

    if let Some(text) = non_blank(&content.text) {
        parts.push(format!("## User Prompt/Text\n{text}"));
    }
    if let Some(topic) = non_blank(&content.topic) {
        parts.push(format!("## Topic Focus\n{topic}"));
    }
    if let Some(body) = non_blank(&content.file_content) {
        let name = non_blank(&content.file_name).unwrap_or("uploaded file");
        if content.file_type == Some(FileType::Pdf) {
            // Uploads may arrive as a data URL.
            let data = body.split_once(";base64,").map_or(body, |(_, b64)| b64);
            attachment = Some(Attachment { mime_type: "application/pdf".into(), data: data.to_string() });
            parts.push(format!(
                "## PDF Document: \"{name}\"\n[PDF file attached - analyze the document content to create presentation slides]"
            ));
        } else {
            parts.push(format!("## Content from File \"{name}\"\n{body}"));
        }
    }
    if let Some(page) = non_blank(&content.url_content) {
        let url = content.url.as_deref().unwrap_or_default().trim();
        parts.push(format!("## Content from URL \"{url}\"\n{page}"));
    } else if let Some(url) = non_blank(&content.url) {
        parts.push(format!("## Reference URL\nCreate a presentation about the content from: {url}"));
    }

    let text = parts.join("\n\n");
    if text.trim().is_empty() {
        return Err(AppError::NoContent);
    }
    Ok(ExtractedContent { text, attachment })
}

pub fn validate_generate(req: &GeneratePromptRequest) -> Result<(), AppError> {
    let n = req.settings.slide_count;
    if !(1..=MAX_SLIDE_COUNT).contains(&n) {
        return Err(AppError::Validation(format!("slideCount must be between 1 and {MAX_SLIDE_COUNT}, got {n}")));
    }
    Ok(())
}

pub fn validate_regenerate(req: &RegenerateRequest) -> Result<(), AppError> {
    if !(1..=MAX_REGENERATE_SLIDE_NUMBER).contains(&req.slide_number) {
        return Err(AppError::Validation(format!(
            "slideNumber must be between 1 and {MAX_REGENERATE_SLIDE_NUMBER}, got {}",
            req.slide_number
        )));
    }
    if let Some(instructions) = &req.instructions {
        if instructions.chars().count() > MAX_INSTRUCTIONS_CHARS {
            return Err(AppError::Validation(format!(
                "instructions may be at most {MAX_INSTRUCTIONS_CHARS} characters"
            )));
        }
    }
    Ok(())
}

/// Everything the final generation call needs.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub user_prompt: String,
    pub attachment: Option<Attachment>,
    pub sequence: Vec<String>,
    pub character: Option<GeneratedCharacter>,
}

impl Prepared {
    fn into_request(self, overrides: Option<LlmOverrides>) -> TextRequest {
        debug!(
            slide_types = %self.sequence.join(", "),
            persona = self.character.as_ref().map_or("", |c| c.species_or_form.as_str()),
            "Slide plan"
        );
        TextRequest::new(SLIDE_SYSTEM_PROMPT, self.user_prompt)
            .with_attachment(self.attachment)
            .with_overrides(overrides)
    }
}

#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub prompts: String,
    pub slides: Vec<ParsedSlide>,
    pub metadata: GenerationMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationEvent {
    Slide(ParsedSlide),
    Done { total_slides: usize, style: SlideStyle, aspect_ratio: AspectRatio },
    Error { message: String, retryable: bool },
}

impl GenerationEvent {
    fn failed(e: &ClientError) -> Self {
        GenerationEvent::Error { message: e.to_string(), retryable: e.is_retryable() }
    }
}

pub type EventStream = Pin<Box<dyn Stream<Item = GenerationEvent> + Send>>;

#[derive(Clone)]
pub struct Pipeline {
    text: Arc<dyn TextClient>,
    images: Arc<dyn ImageClient>,
}

impl Pipeline {
    pub fn new(text: Arc<dyn TextClient>, images: Arc<dyn ImageClient>) -> Self {
        Self { text, images }
    }

    async fn analyze(&self, req: &GeneratePromptRequest, content: &str) -> Option<ContentAnalysis> {
        let request = TextRequest::new(analyzer_system_prompt(), build_analysis_prompt(content, req.settings.slide_count))
            .with_overrides(req.llm_config.clone());
        match self.text.complete(request).await {
            Ok(raw) => {
                let analysis = parse_content_analysis(&raw);
                if analysis.is_none() {
                    warn!("Content analysis reply had no usable JSON, using default sequence");
                }
                analysis
            }
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "Content analysis failed");
                None
            }
        }
    }

    async fn design_character(&self, req: &GeneratePromptRequest, content: &str) -> Option<GeneratedCharacter> {
        let settings = req.settings.character.filter(|c| c.enabled)?;
        let prompt = build_character_prompt(content, req.style, settings.render_style, settings.gender, req.settings.slide_count);
        let request = TextRequest::new(CHARACTER_SYSTEM_PROMPT, prompt).with_overrides(req.llm_config.clone());
        match self.text.complete(request).await {
            Ok(raw) => parse_character_description(&raw).filter(GeneratedCharacter::is_usable),
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "Character generation failed");
                None
            }
        }
    }

    /// Validates the request, then runs content analysis and character design concurrently.
    /// Either branch failing only degrades the prompt.
    pub async fn prepare(&self, req: &GeneratePromptRequest) -> Result<Prepared, AppError> {
        validate_generate(req)?;
        let ExtractedContent { text, attachment } = extract_content(&req.content)?;

        let (analysis, character) = tokio::join!(self.analyze(req, &text), self.design_character(req, &text));
        let sequence = build_sequence(analysis.as_ref(), req.settings.slide_count);
        info!(
            slide_count = req.settings.slide_count,
            category = ?analysis.as_ref().map(|a| a.content_category),
            character = character.is_some(),
            "🧩 Prompt inputs ready"
        );

        let config = PromptConfig::new(&text, req.style, &req.settings)
            .with_character(character.as_ref())
            .with_sequence(Some(sequence.as_slice()));
        let user_prompt = build_user_prompt(&config);

        Ok(Prepared { user_prompt, attachment, sequence, character })
    }

    fn metadata(req: &GeneratePromptRequest) -> GenerationMetadata {
        GenerationMetadata {
            style: req.style,
            slide_count: req.settings.slide_count,
            aspect_ratio: req.settings.aspect_ratio,
        }
    }

    pub async fn generate(&self, req: &GeneratePromptRequest) -> Result<GenerationOutput, AppError> {
        let request = self.prepare(req).await?.into_request(req.llm_config.clone());

        let prompts = self.text.complete(request).await?;
        let slides = parse_slides(&prompts);
        info!(slides = slides.len(), requested = req.settings.slide_count, "✅ Slide prompts generated");

        Ok(GenerationOutput { prompts, slides, metadata: Self::metadata(req) })
    }

    /// Streams slide events as the model writes them. The stream ends with one `Done` or
    /// `Error`, unless `cancel` fires first, in which case it stops without flushing.
    /// Cancelling before the analysis calls finish returns `ClientError::Cancelled`.
    pub async fn generate_stream(&self, req: &GeneratePromptRequest, cancel: CancellationToken) -> Result<EventStream, AppError> {
        let prepared = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ClientError::Cancelled.into()),
            prepared = self.prepare(req) => prepared?,
        };
        let request = prepared.into_request(req.llm_config.clone());
        let text = Arc::clone(&self.text);
        let GenerationMetadata { style, aspect_ratio, .. } = Self::metadata(req);

        let events = stream! {
            let opened = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                opened = text.stream(request) => Some(opened),
            };
            let mut tokens = match opened {
                None => {
                    debug!("Generation cancelled before the stream opened");
                    return;
                }
                Some(Ok(tokens)) => tokens,
                Some(Err(e)) => {
                    yield GenerationEvent::failed(&e);
                    return;
                }
            };

            let mut parser = SlideStreamParser::new();
            loop {
                let next = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => None,
                    next = tokens.next() => Some(next),
                };
                match next {
                    None => {
                        debug!(
                            emitted = parser.emitted_count(),
                            buffered = parser.buffered().len(),
                            "Generation cancelled, dropping buffer"
                        );
                        return;
                    }
                    Some(Some(Ok(chunk))) => {
                        for slide in parser.push(&chunk) {
                            debug!(slide_number = slide.slide_number, "Slide completed");
                            yield GenerationEvent::Slide(slide);
                        }
                    }
                    Some(Some(Err(e))) => {
                        warn!(kind = ?e.kind(), error = %e, "Completion stream failed");
                        yield GenerationEvent::failed(&e);
                        return;
                    }
                    Some(None) => break,
                }
            }

            for slide in parser.finish() {
                yield GenerationEvent::Slide(slide);
            }
            info!(total_slides = parser.emitted_count(), "✅ Slide stream finished");
            yield GenerationEvent::Done { total_slides: parser.emitted_count(), style, aspect_ratio };
        };
        Ok(Box::pin(events))
    }

    pub async fn regenerate(&self, req: &RegenerateRequest) -> Result<ParsedSlide, AppError> {
        validate_regenerate(req)?;
        let ctx = RegenerateContext {
            slide_number: req.slide_number,
            previous_slide: req.previous_slide.as_ref(),
            next_slide: req.next_slide.as_ref(),
            style: req.style,
            settings: &req.settings,
            instructions: req.instructions.as_deref(),
        };
        let request = TextRequest::new(REGENERATE_SYSTEM_PROMPT, build_regenerate_prompt(&ctx))
            .with_overrides(req.llm_config.clone());

        info!(slide_number = req.slide_number, "🔄 Regenerating slide");
        let response = self.text.complete(request).await?;
        Ok(parse_regenerated_slide(&response, req.slide_number))
    }

    /// One image call per slide, in order. A failed slide is reported, not fatal.
    pub async fn generate_images(&self, req: &GenerateImagesRequest) -> Result<GenerateImagesResponse, AppError> {
        if req.slides.is_empty() {
            return Err(AppError::Validation("slides must not be empty".into()));
        }
        let aspect_ratio = req.aspect_ratio.map_or(DEFAULT_ASPECT_RATIO, AspectRatio::as_str);
        let resolution = non_blank(&req.resolution).unwrap_or(DEFAULT_RESOLUTION);

        let mut results = Vec::with_capacity(req.slides.len());
        for slide in &req.slides {
            let opts = ImageOptions {
                aspect_ratio: aspect_ratio.to_string(),
                resolution: resolution.to_string(),
                title: slide.title.clone(),
            };
            let result = match self.images.generate(&slide.prompt, &opts).await {
                Ok(images) => SlideImageResult { slide_number: slide.slide_number, success: true, images: Some(images), error: None },
                Err(e) => {
                    warn!(slide_number = slide.slide_number, kind = ?e.kind(), error = %e, "Image generation failed");
                    SlideImageResult { slide_number: slide.slide_number, success: false, images: None, error: Some(e.to_string()) }
                }
            };
            results.push(result);
        }

        let total_success = results.iter().filter(|r| r.success).count();
        let total_failed = results.len() - total_success;
        info!(total_success, total_failed, "🎨 Image batch finished");
        Ok(GenerateImagesResponse { results, total_success, total_failed })
    }

    pub async fn generate_image(&self, prompt: &str, opts: &ImageOptions) -> Result<Vec<GeneratedImage>, AppError> {
        Ok(self.images.generate(prompt, opts).await?)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted clients shared by the pipeline and route tests.

    use super::*;
    use crate::llm::TextStream;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    pub const SLIDES_REPLY: &str = "**Slide 1: Intro**\n```\nHello world\n```\n\n**Slide 2: Middle**\n```\nBody2\n```\n\n**Slide 3: Wrap Up**\n```\nThanks\n```\n";

    pub const CHARACTER_REPLY: &str = "CHARACTER_TYPE: mascot\nSPECIES_OR_FORM: leaf sprite\nCORE_DESCRIPTION: A cheerful green leaf with big eyes\n";

    #[derive(Default)]
    pub struct FakeText {
        pub slides: String,
        pub analysis: Option<String>,
        pub character: Option<String>,
        pub fail_generation: Option<ClientError>,
        pub chunk_size: usize,
        pub calls: Mutex<Vec<String>>,
        pub barrier: Option<tokio::sync::Barrier>,
        /// Stream the reply up to this byte offset, then hold the rest until `gate` is notified.
        pub pause_at: Option<usize>,
        pub gate: Arc<tokio::sync::Notify>,
    }

    impl FakeText {
        pub fn with_slides(slides: &str) -> Self {
            Self { slides: slides.to_string(), chunk_size: 7, ..Default::default() }
        }

        pub fn systems(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        fn record(&self, req: &TextRequest) -> &'static str {
            let label = if req.system == CHARACTER_SYSTEM_PROMPT {
                "character"
            } else if req.system == SLIDE_SYSTEM_PROMPT {
                "slides"
            } else if req.system == REGENERATE_SYSTEM_PROMPT {
                "regenerate"
            } else {
                "analysis"
            };
            self.calls.lock().push(label.to_string());
            label
        }
    }

    #[async_trait]
    impl TextClient for FakeText {
        async fn complete(&self, req: TextRequest) -> Result<String, ClientError> {
            let label = self.record(&req);
            match label {
                "analysis" | "character" => {
                    if let Some(barrier) = &self.barrier {
                        barrier.wait().await;
                    }
                    let reply = if label == "analysis" { &self.analysis } else { &self.character };
                    reply.clone().ok_or_else(|| ClientError::Server { status: 500, message: "down".into() })
                }
                _ => match &self.fail_generation {
                    Some(e) => Err(e.clone()),
                    None => Ok(self.slides.clone()),
                },
            }
        }

        async fn stream(&self, req: TextRequest) -> Result<TextStream, ClientError> {
            self.record(&req);
            if let Some(e) = &self.fail_generation {
                return Err(e.clone());
            }
            if let Some(at) = self.pause_at {
                let (head, tail) = self.slides.split_at(at);
                let (head, tail) = (head.to_string(), tail.to_string());
                let gate = Arc::clone(&self.gate);
                return Ok(Box::pin(stream! {
                    yield Ok(head);
                    gate.notified().await;
                    yield Ok(tail);
                }));
            }
            let chars: Vec<char> = self.slides.chars().collect();
            let chunks: Vec<Result<String, ClientError>> =
                chars.chunks(self.chunk_size.max(1)).map(|c| Ok(c.iter().collect())).collect();
            Ok(Box::pin(tokio_stream::iter(chunks)))
        }
    }

    pub struct FakeImages {
        pub fail_on: Vec<u32>,
    }

    #[async_trait]
    impl ImageClient for FakeImages {
        async fn generate(&self, prompt: &str, opts: &ImageOptions) -> Result<Vec<GeneratedImage>, ClientError> {
            if self.fail_on.iter().any(|n| prompt.contains(&format!("slide {n}"))) {
                return Err(ClientError::BadRequest { status: 400, message: "blocked".into() });
            }
            Ok(vec![GeneratedImage { data: format!("{}|{}", opts.aspect_ratio, opts.resolution), mime_type: "image/png".into() }])
        }
    }

    pub fn request(slide_count: usize) -> GeneratePromptRequest {
        serde_json::from_value(serde_json::json!({
            "content": { "type": "text", "text": "Intro to photosynthesis" },
            "style": "educational",
            "settings": {
                "aspectRatio": "16:9",
                "slideCount": slide_count,
                "colorPalette": "nature-green",
                "layoutStructure": "balanced"
            }
        }))
        .unwrap()
    }

    pub fn pipeline(text: FakeText) -> (Pipeline, Arc<FakeText>) {
        let text = Arc::new(text);
        let pipeline = Pipeline::new(text.clone(), Arc::new(FakeImages { fail_on: vec![] }));
        (pipeline, text)
    }
}
