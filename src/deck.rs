use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AspectRatio, GeneratedImage, ParsedSlide, SlideStyle};

const UNTITLED: &str = "Untitled deck";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeckSlide {
    /// Stable across reorders; images hang off this, not the number.
    pub id: Uuid,
    pub slide_number: u32,
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub images: Vec<GeneratedImage>,
}

impl From<ParsedSlide> for DeckSlide {
    fn from(slide: ParsedSlide) -> Self {
        DeckSlide {
            id: Uuid::new_v4(),
            slide_number: slide.slide_number,
            title: slide.title,
            prompt: slide.prompt,
            images: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub style: SlideStyle,
    pub aspect_ratio: AspectRatio,
    pub slides: Vec<DeckSlide>,
}

impl Deck {
    /// Slides are stored in number order whatever order they arrived in.
    pub fn new(style: SlideStyle, aspect_ratio: AspectRatio, mut slides: Vec<ParsedSlide>) -> Self {
        slides.sort_by_key(|s| s.slide_number);
        let title = slides
            .first()
            .map(|s| s.title.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());
        let now = Utc::now();
        Deck {
            id: Uuid::new_v4(),
            title,
            created_at: now,
            updated_at: now,
            style,
            aspect_ratio,
            slides: slides.into_iter().map(DeckSlide::from).collect(),
        }
    }

    pub fn slide(&self, slide_id: Uuid) -> Option<&DeckSlide> {
        self.slides.iter().find(|s| s.id == slide_id)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Moves `active_id` to the position of `over_id` and renumbers every slide from 1.
/// Returns `false` and leaves the slides untouched when either id is unknown.
pub fn reorder_slides(slides: &mut Vec<DeckSlide>, active_id: Uuid, over_id: Uuid) -> bool {
    let old_index = slides.iter().position(|s| s.id == active_id);
    let new_index = slides.iter().position(|s| s.id == over_id);
    let (Some(old_index), Some(new_index)) = (old_index, new_index) else {
        return false;
    };

    let moved = slides.remove(old_index);
    slides.insert(new_index, moved);
    for (i, slide) in slides.iter_mut().enumerate() {
        slide.slide_number = i as u32 + 1;
    }
    true
}

/// In-memory deck storage. Nothing is persisted across restarts.
#[derive(Clone, Default)]
pub struct DeckStore {
    decks: Arc<RwLock<HashMap<Uuid, Deck>>>,
}

impl DeckStore {
    pub fn insert(&self, deck: Deck) -> Uuid {
        let id = deck.id;
        self.decks.write().insert(id, deck);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<Deck> {
        self.decks.read().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.decks.read().len()
    }

    /// Applies `f` under the write lock and bumps `updated_at`.
    pub fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut Deck) -> R) -> Option<R> {
        let mut guard = self.decks.write();
        let deck = guard.get_mut(&id)?;
        let out = f(deck);
        deck.touch();
        Some(out)
    }

    pub fn reorder(&self, id: Uuid, active_id: Uuid, over_id: Uuid) -> Option<(bool, Deck)> {
        self.update(id, |deck| {
            let moved = reorder_slides(&mut deck.slides, active_id, over_id);
            (moved, deck.clone())
        })
    }

    /// Replaces the images of one slide. `None` when the deck or the slide is missing.
    pub fn set_slide_images(&self, id: Uuid, slide_id: Uuid, images: Vec<GeneratedImage>) -> Option<DeckSlide> {
        self.update(id, |deck| {
            let slide = deck.slides.iter_mut().find(|s| s.id == slide_id)?;
            slide.images = images;
            Some(slide.clone())
        })
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deck(n: u32) -> Deck {
        let slides = (1..=n)
            .map(|i| ParsedSlide { slide_number: i, title: format!("T{i}"), prompt: format!("P{i}") })
            .collect();
        Deck::new(SlideStyle::Professional, AspectRatio::Widescreen, slides)
    }

    fn order(slides: &[DeckSlide]) -> Vec<(u32, String)> {
        slides.iter().map(|s| (s.slide_number, s.title.clone())).collect()
    }

    #[test]
    fn move_forward_and_renumber() {
        let mut d = deck(4);
        let (a, b) = (d.slides[0].id, d.slides[2].id);
        assert!(reorder_slides(&mut d.slides, a, b));
        assert_eq!(
            order(&d.slides),
            vec![(1, "T2".into()), (2, "T3".into()), (3, "T1".into()), (4, "T4".into())]
        );
    }

    #[test]
    fn move_backward() {
        let mut d = deck(3);
        let (a, b) = (d.slides[2].id, d.slides[0].id);
        reorder_slides(&mut d.slides, a, b);
        assert_eq!(order(&d.slides), vec![(1, "T3".into()), (2, "T1".into()), (3, "T2".into())]);
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let mut d = deck(3);
        let before = d.slides.clone();
        let first = d.slides[0].id;
        assert!(!reorder_slides(&mut d.slides, Uuid::new_v4(), first));
        assert_eq!(d.slides, before);
    }

    #[test]
    fn no_op_move_is_idempotent() {
        let mut d = deck(3);
        let id = d.slides[1].id;
        reorder_slides(&mut d.slides, id, id);
        let once = d.slides.clone();
        reorder_slides(&mut d.slides, id, id);
        assert_eq!(d.slides, once);
        assert_eq!(order(&once), vec![(1, "T1".into()), (2, "T2".into()), (3, "T3".into())]);
    }

    #[test]
    fn images_follow_the_slide_through_reorder() {
        let store = DeckStore::default();
        let d = deck(3);
        let (deck_id, first, last) = (d.id, d.slides[0].id, d.slides[2].id);
        store.insert(d);

        let image = GeneratedImage { data: "abc".into(), mime_type: "image/png".into() };
        store.set_slide_images(deck_id, first, vec![image.clone()]).unwrap();
        let (moved, deck) = store.reorder(deck_id, first, last).unwrap();
        assert!(moved);

        let slide = deck.slide(first).unwrap();
        assert_eq!(slide.slide_number, 3);
        assert_eq!(slide.images, vec![image]);
        assert!(deck.slides[0].images.is_empty());
    }

    #[test]
    fn title_comes_from_first_slide() {
        assert_eq!(deck(2).title, "T1");
        assert_eq!(Deck::new(SlideStyle::Vintage, AspectRatio::Square, vec![]).title, UNTITLED);
    }

    #[test]
    fn missing_targets() {
        let store = DeckStore::default();
        assert!(store.get(Uuid::new_v4()).is_none());
        let id = store.insert(deck(1));
        assert_eq!(store.len(), 1);
        assert!(store.set_slide_images(id, Uuid::new_v4(), vec![]).is_none());
    }
}
