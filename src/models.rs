use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Turns a wire id such as `dark-neon` into the label used inside prompts (`Dark neon`).
pub fn display_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('-', " "),
        None => String::new(),
    }
}

/// Prompt label for the wire enums, derived from the wire id.
pub trait Labelled: Copy {
    fn wire_id(self) -> &'static str;

    fn label(self) -> String {
        display_label(self.wire_id())
    }
}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            #[cfg(test)]
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self { $($name::$variant => $wire),+ }
            }
        }

        impl Labelled for $name {
            fn wire_id(self) -> &'static str { self.as_str() }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(
    /// Visual style of the whole deck.
    SlideStyle {
        Professional => "professional",
        Technical => "technical",
        Creative => "creative",
        Infographic => "infographic",
        Educational => "educational",
        PixelArt => "pixel-art",
        Minimalist => "minimalist",
        DarkNeon => "dark-neon",
        HandDrawn => "hand-drawn",
        Glassmorphism => "glassmorphism",
        Vintage => "vintage",
        Isometric3d => "3d-isometric",
        Watercolor => "watercolor",
        Newspaper => "newspaper",
        FlatDesign => "flat-design",
        GradientMesh => "gradient-mesh",
        SciFiHud => "sci-fi-hud",
        DeepOcean => "deep-ocean",
        DevConsole => "dev-console",
        NeonScientific => "neon-scientific",
    }
);

wire_enum!(
    ColorPalette {
        Auto => "auto",
        CorporateBlue => "corporate-blue",
        ModernPurple => "modern-purple",
        NatureGreen => "nature-green",
        WarmOrange => "warm-orange",
        ElegantMonochrome => "elegant-monochrome",
        VibrantGradient => "vibrant-gradient",
        OceanTeal => "ocean-teal",
        SunsetPink => "sunset-pink",
        ForestEarth => "forest-earth",
        RoyalGold => "royal-gold",
        ArcticFrost => "arctic-frost",
        NeonNight => "neon-night",
    }
);

wire_enum!(
    LayoutStructure {
        VisualHeavy => "visual-heavy",
        TextHeavy => "text-heavy",
        Balanced => "balanced",
    }
);

wire_enum!(
    AspectRatio {
        Widescreen => "16:9",
        Standard => "4:3",
        Square => "1:1",
        Portrait => "9:16",
    }
);

wire_enum!(
    /// How the presenter character is rendered.
    RenderStyle {
        Pixar => "pixar",
        Real => "real",
        Anime => "anime",
        Cartoon => "cartoon",
        Sketch => "sketch",
        Chibi => "chibi",
        LowPoly => "low-poly",
        Mascot => "mascot",
    }
);

wire_enum!(
    CharacterGender {
        Unspecified => "none",
        Male => "male",
        Female => "female",
    }
);

wire_enum!(
    OutputLanguage {
        English => "en",
        Vietnamese => "vi",
        Chinese => "zh",
        Japanese => "ja",
        Korean => "ko",
        Thai => "th",
        Indonesian => "id",
        French => "fr",
        German => "de",
        Spanish => "es",
    }
);

wire_enum!(
    ContentInputType {
        Text => "text",
        Topic => "topic",
        File => "file",
        Url => "url",
    }
);

wire_enum!(
    FileType {
        Text => "text",
        Csv => "csv",
        Pdf => "pdf",
    }
);

impl Default for CharacterGender {
    fn default() -> Self { CharacterGender::Unspecified }
}

impl OutputLanguage {
    pub fn english_name(self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Vietnamese => "Vietnamese",
            OutputLanguage::Chinese => "Chinese (Simplified)",
            OutputLanguage::Japanese => "Japanese",
            OutputLanguage::Korean => "Korean",
            OutputLanguage::Thai => "Thai",
            OutputLanguage::Indonesian => "Indonesian",
            OutputLanguage::French => "French",
            OutputLanguage::German => "German",
            OutputLanguage::Spanish => "Spanish",
        }
    }
}

/// Category reported by the content analyzer. Unknown values collapse to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Technical,
    Business,
    Educational,
    Creative,
    Marketing,
    Scientific,
    #[default]
    #[serde(other)]
    General,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentInput {
    #[serde(rename = "type")]
    pub kind: ContentInputType,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub file_content: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<FileType>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSettings {
    pub enabled: bool,
    pub render_style: RenderStyle,
    #[serde(default)]
    pub gender: CharacterGender,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSettings {
    pub aspect_ratio: AspectRatio,
    pub slide_count: usize,
    pub color_palette: ColorPalette,
    pub layout_structure: LayoutStructure,
    #[serde(default)]
    pub character: Option<CharacterSettings>,
    #[serde(default)]
    pub output_language: Option<OutputLanguage>,
}

/// Per-request override of the text model connection; unset fields keep the server defaults.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LlmOverrides {
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,
    #[serde(default, rename = "baseURL")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptRequest {
    pub content: ContentInput,
    pub style: SlideStyle,
    pub settings: PresentationSettings,
    #[serde(default)]
    pub llm_config: Option<LlmOverrides>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSlide {
    pub slide_number: u32,
    pub title: String,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    pub style: SlideStyle,
    pub slide_count: usize,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptResponse {
    pub success: bool,
    pub prompts: String,
    pub slides: Vec<ParsedSlide>,
    pub metadata: GenerationMetadata,
    pub deck_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalDetails {
    pub build_proportions: String,
    pub distinctive_features: String,
    pub color_scheme: String,
    pub face_expression: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeAndProps {
    pub default_outfit: String,
    pub props_accessories: String,
}

/// Presenter persona synthesized once per generation and shared by every slide.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCharacter {
    pub character_type: String,
    pub species_or_form: String,
    pub core_description: String,
    pub physical_details: PhysicalDetails,
    pub personality_traits: String,
    pub wardrobe_and_props: WardrobeAndProps,
    pub signature_gestures: String,
    pub consistency_notes: String,
    pub raw_description: String,
}

impl GeneratedCharacter {
    /// A character only counts when at least one identifying field survived parsing.
    pub fn is_usable(&self) -> bool {
        !self.core_description.is_empty()
            || !self.species_or_form.is_empty()
            || !self.character_type.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    pub content_category: ContentCategory,
    pub suggested_types: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SlideContext {
    pub title: String,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateRequest {
    pub slide_number: u32,
    #[serde(default)]
    pub previous_slide: Option<SlideContext>,
    #[serde(default)]
    pub next_slide: Option<SlideContext>,
    pub style: SlideStyle,
    pub settings: PresentationSettings,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub llm_config: Option<LlmOverrides>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegenerateResponse {
    pub success: bool,
    pub slide: ParsedSlide,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SlidePromptInput {
    pub slide_number: u32,
    #[serde(default)]
    pub title: Option<String>,
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImagesRequest {
    pub slides: Vec<SlidePromptInput>,
    #[serde(default)]
    pub aspect_ratio: Option<AspectRatio>,
    #[serde(default)]
    pub resolution: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SlideImageResult {
    pub slide_number: u32,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<GeneratedImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImagesResponse {
    pub results: Vec<SlideImageResult>,
    pub total_success: usize,
    pub total_failed: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub active_id: Uuid,
    pub over_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SlideImageRequest {
    #[serde(default)]
    pub resolution: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_capitalize_and_drop_dashes() {
        assert_eq!(SlideStyle::DarkNeon.label(), "Dark neon");
        assert_eq!(SlideStyle::Isometric3d.label(), "3d isometric");
        assert_eq!(RenderStyle::LowPoly.label(), "Low poly");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn enums_use_wire_names() {
        let ratio: AspectRatio = serde_json::from_str("\"9:16\"").unwrap();
        assert_eq!(ratio, AspectRatio::Portrait);
        assert_eq!(serde_json::to_string(&SlideStyle::Isometric3d).unwrap(), "\"3d-isometric\"");
        assert_eq!(SlideStyle::ALL.len(), 20);
        assert_eq!(ColorPalette::ALL.len(), 13);
        assert_eq!(RenderStyle::ALL.len(), 8);
    }

    #[test]
    fn unknown_category_is_general() {
        let category: ContentCategory = serde_json::from_str("\"philosophy\"").unwrap();
        assert_eq!(category, ContentCategory::General);
        let category: ContentCategory = serde_json::from_str("\"marketing\"").unwrap();
        assert_eq!(category, ContentCategory::Marketing);
    }

    #[test]
    fn request_deserializes_with_optional_sections_missing() {
        let body = serde_json::json!({
            "content": { "type": "text", "text": "Intro to photosynthesis" },
            "style": "educational",
            "settings": {
                "aspectRatio": "16:9",
                "slideCount": 3,
                "colorPalette": "auto",
                "layoutStructure": "balanced"
            }
        });
        let req: GeneratePromptRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.settings.slide_count, 3);
        assert!(req.settings.character.is_none());
        assert!(req.llm_config.is_none());
    }
}
