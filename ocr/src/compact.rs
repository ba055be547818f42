use crate::document::{Document, Location, Word};

/// Two fragments whose `top` values differ by less than this many pixels are
/// treated as sitting on the same printed line.
const LINE_MERGE_THRESHOLD: u32 = 10;

impl Document {
    /// Collapse consecutive fragments on the same visual line into single
    /// records, producing a new document.
    ///
    /// Each fragment is compared against the *last fragment appended to the
    /// current line*, not the line's min/max. This tolerates slight drift
    /// between lines, and also means a paragraph whose fragments creep
    /// upward or downward by under the threshold at every step will chain
    /// into one record. That chaining is intentional and kept for
    /// compatibility with existing consumers.
    pub fn compact(&self) -> Document {
        let mut merged: Vec<Word> = Vec::new();
        let mut current_line: Vec<Word> = Vec::new();

        for word in &self.words {
            match current_line.last() {
                Some(last)
                    if last.location.top.abs_diff(word.location.top)
                        < LINE_MERGE_THRESHOLD =>
                {
                    current_line.push(word.clone());
                }
                Some(_) => {
                    merged.push(merge_line(&current_line));
                    current_line = vec![word.clone()];
                }
                None => current_line.push(word.clone()),
            }
        }

        if !current_line.is_empty() {
            merged.push(merge_line(&current_line));
        }

        let count = merged.len();
        Document {
            words: merged,
            count,
        }
    }
}

/// Merge a line's accumulated fragments into one record: texts joined with a
/// single space in encounter order, box set to the union of the fragment
/// boxes.
fn merge_line(words: &[Word]) -> Word {
    let text = words
        .iter()
        .map(|w| w.words.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let top = words.iter().map(|w| w.location.top).min().unwrap_or(0);
    let left = words.iter().map(|w| w.location.left).min().unwrap_or(0);
    let width = words
        .iter()
        .map(|w| w.location.left + w.location.width)
        .max()
        .unwrap_or(0)
        - left;
    let height = words
        .iter()
        .map(|w| w.location.top + w.location.height)
        .max()
        .unwrap_or(0)
        - top;

    Word::new(text, Location::new(top, left, width, height))
}
