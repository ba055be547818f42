use serde::{Deserialize, Serialize};

/// Pixel-space bounding box of a recognized text span, top-left origin.
///
/// Coordinates are clamped to non-negative values at the engine boundary
/// and trusted from there on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

impl Location {
    pub fn new(top: u32, left: u32, width: u32, height: u32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// One recognized text span and where it sits in the image.
///
/// The field is named `words` (not `text`) to keep the serialized shape
/// compatible with the Baidu OCR response format consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub words: String,
    pub location: Location,
}

impl Word {
    pub fn new(words: impl Into<String>, location: Location) -> Self {
        Self {
            words: words.into(),
            location,
        }
    }
}

/// The full recognition output for one image: an ordered list of [`Word`]s
/// plus their count.
///
/// `count` always equals `words.len()`; every constructor and transformation
/// rebuilds it rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub words: Vec<Word>,
    pub count: usize,
}

impl Document {
    /// Build a document from raw engine output, sorting fragments by
    /// descending `top` so later stages see a stable vertical order.
    pub fn from_words(mut words: Vec<Word>) -> Self {
        words.sort_by(|a, b| b.location.top.cmp(&a.location.top));
        let count = words.len();
        Self { words, count }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
