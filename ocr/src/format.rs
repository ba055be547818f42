use crate::OcrResult;
use crate::document::Document;
use anyhow::Context;
use csv::{QuoteStyle, WriterBuilder};

impl Document {
    /// Pretty-printed JSON in the Baidu OCR response shape
    /// (`words` / `count` at the top level, nested `location` per fragment).
    pub fn to_json(&self) -> OcrResult<String> {
        serde_json::to_string_pretty(self).context("failed to encode document as pretty JSON")
    }

    /// Same logical structure as [`Document::to_json`], without whitespace.
    pub fn to_raw(&self) -> OcrResult<String> {
        serde_json::to_string(self).context("failed to encode document as compact JSON")
    }

    /// CSV with header `text,left,top,width,height`, one row per fragment.
    ///
    /// Literal commas in the text are swapped for the full-width comma
    /// (U+FF0C) so naive comma-split readers stay happy. Nothing else is
    /// escaped or quoted; newlines and quotes pass through untouched. This
    /// mirrors what downstream spreadsheets already consume, so the
    /// limitation is kept as-is rather than upgraded to real CSV quoting.
    pub fn to_csv(&self) -> OcrResult<String> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(Vec::new());

        writer
            .write_record(["text", "left", "top", "width", "height"])
            .context("failed to write CSV header")?;

        for word in &self.words {
            let text = word.words.replace(',', "，");
            writer
                .write_record([
                    text.as_str(),
                    &word.location.left.to_string(),
                    &word.location.top.to_string(),
                    &word.location.width.to_string(),
                    &word.location.height.to_string(),
                ])
                .context("failed to write CSV row")?;
        }

        writer.flush().context("failed to flush CSV output")?;
        let bytes = writer
            .into_inner()
            .map_err(|err| anyhow::anyhow!("failed to finish CSV output: {err}"))?;
        String::from_utf8(bytes).context("CSV output was not valid UTF-8")
    }
}
