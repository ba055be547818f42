//! OCR recognition and result shaping for the `ocrx` CLI.
//!
//! The engine half is a thin wrapper around `rust-paddle-ocr` with the
//! recommended PP-OCRv5 settings (merge detected boxes, efficient cropping,
//! and higher recognition thresholds). The result half holds the recognized
//! fragments in Baidu OCR response shape, merges fragments into visual lines,
//! and renders JSON or CSV output.

mod compact;
mod config;
mod document;
mod engine;
mod format;

pub use config::{ModelConfig, OcrOptions};
pub use document::{Document, Location, Word};
pub use engine::{OcrEngine, recognize_file};

/// Crate-wide result type.
pub type OcrResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::{Document, Location, OcrOptions, Word};
    use imageproc::rect::Rect;

    fn word(text: &str, top: u32, left: u32, width: u32, height: u32) -> Word {
        Word::new(text, Location::new(top, left, width, height))
    }

    #[test]
    fn construction_sorts_by_descending_top_and_sets_count() {
        let doc = Document::from_words(vec![
            word("Hello", 100, 0, 50, 10),
            word("Far", 300, 0, 30, 10),
            word("World", 105, 60, 50, 10),
        ]);

        assert_eq!(doc.count, 3);
        assert_eq!(doc.count, doc.words.len());
        let tops: Vec<u32> = doc.words.iter().map(|w| w.location.top).collect();
        assert_eq!(tops, vec![300, 105, 100]);
    }

    #[test]
    fn compaction_merges_nearby_fragments_into_lines() {
        let doc = Document::from_words(vec![
            word("Hello", 100, 0, 50, 10),
            word("World", 105, 60, 50, 10),
            word("Far", 300, 0, 30, 10),
        ]);

        let compacted = doc.compact();

        // Far stands alone; World and Hello sit within 10px of each other.
        assert_eq!(compacted.count, 2);
        assert_eq!(compacted.words[0], word("Far", 300, 0, 30, 10));
        assert_eq!(compacted.words[1], word("World Hello", 100, 0, 110, 15));
    }

    #[test]
    fn compaction_keeps_count_in_sync() {
        let doc = Document::from_words(vec![
            word("a", 10, 0, 5, 5),
            word("b", 12, 10, 5, 5),
            word("c", 50, 0, 5, 5),
        ]);
        let compacted = doc.compact();
        assert_eq!(compacted.count, compacted.words.len());
    }

    #[test]
    fn empty_document_compacts_to_empty() {
        let doc = Document::from_words(Vec::new());
        let compacted = doc.compact();
        assert!(compacted.is_empty());
        assert_eq!(compacted.count, 0);
    }

    #[test]
    fn single_fragment_compacts_to_itself() {
        let doc = Document::from_words(vec![word("only", 42, 7, 80, 12)]);
        let compacted = doc.compact();
        assert_eq!(compacted.words, doc.words);
        assert_eq!(compacted.count, 1);
    }

    #[test]
    fn compaction_is_idempotent_for_separated_lines() {
        let doc = Document::from_words(vec![
            word("one", 100, 0, 20, 10),
            word("line", 103, 25, 20, 10),
            word("two", 200, 0, 20, 10),
            word("line", 204, 25, 20, 10),
        ]);
        let once = doc.compact();
        let twice = once.compact();
        assert_eq!(once, twice);
    }

    #[test]
    fn gradual_drift_chains_fragments_into_one_line() {
        // Each step is under the 10px threshold even though the ends are
        // 24px apart; the chain merges by design.
        let doc = Document::from_words(vec![
            word("a", 100, 0, 10, 10),
            word("b", 108, 15, 10, 10),
            word("c", 116, 30, 10, 10),
            word("d", 124, 45, 10, 10),
        ]);
        let compacted = doc.compact();
        assert_eq!(compacted.count, 1);
        assert_eq!(compacted.words[0].words, "d c b a");
        assert_eq!(compacted.words[0].location, Location::new(100, 0, 55, 34));
    }

    #[test]
    fn raw_json_matches_field_order() {
        let doc = Document::from_words(vec![word("你好/世界", 1, 2, 3, 4)]);
        let raw = doc.to_raw().unwrap();
        assert_eq!(
            raw,
            "{\"words\":[{\"words\":\"你好/世界\",\"location\":\
             {\"top\":1,\"left\":2,\"width\":3,\"height\":4}}],\"count\":1}"
        );
    }

    #[test]
    fn pretty_and_raw_json_agree_on_values() {
        let doc = Document::from_words(vec![
            word("a", 10, 0, 5, 5),
            word("b", 50, 0, 5, 5),
        ]);
        let pretty: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&doc.to_raw().unwrap()).unwrap();
        assert_eq!(pretty, raw);
        assert_ne!(doc.to_json().unwrap(), doc.to_raw().unwrap());
    }

    #[test]
    fn csv_replaces_literal_commas_with_full_width() {
        let doc = Document::from_words(vec![word("a,b", 1, 0, 2, 3)]);
        let csv = doc.to_csv().unwrap();
        assert_eq!(csv, "text,left,top,width,height\na，b,0,1,2,3\n");
    }

    #[test]
    fn empty_document_serializes_in_all_formats() {
        let doc = Document::from_words(Vec::new());
        assert_eq!(doc.to_csv().unwrap(), "text,left,top,width,height\n");
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(value["count"], 0);
        assert!(doc.to_raw().unwrap().contains("\"count\":0"));
    }

    #[test]
    fn location_from_rect_clamps_negative_origins() {
        let rect = Rect::at(-5, -10).of_size(20, 30);
        let location: Location = rect.into();
        assert_eq!(location.left, 0);
        assert_eq!(location.top, 0);
        assert_eq!(location.width, 20);
        assert_eq!(location.height, 30);
    }

    #[test]
    fn options_apply_defaults() {
        let opts = OcrOptions::default();
        assert!(opts.merge_boxes);
        assert!(opts.efficient_cropping);
        assert_eq!(opts.merge_threshold, 1);
    }
}
