//! Line assembly from Tesseract's TSV result dump
//!
//! Each TSV row is `level page block par line word left top width height
//! conf text`. Level 4 rows carry a text line's box, level 5 rows carry its
//! words with their confidence.

use crate::engine::{BoundingBox, TextLine};

const LEVEL_LINE: u8 = 4;
const LEVEL_WORD: u8 = 5;

type LineKey = (u32, u32, u32, u32);

#[derive(Debug)]
struct Row<'a> {
    level: u8,
    key: LineKey,
    bbox: BoundingBox,
    conf: f32,
    text: &'a str,
}

struct LineAccumulator<'a> {
    key: LineKey,
    bbox: Option<BoundingBox>,
    words: Vec<&'a str>,
    conf_sum: f32,
    conf_count: u32,
}

impl<'a> LineAccumulator<'a> {
    fn new(key: LineKey, bbox: Option<BoundingBox>) -> Self {
        Self {
            key,
            bbox,
            words: Vec::new(),
            conf_sum: 0.0,
            conf_count: 0,
        }
    }

    fn add_word(&mut self, row: &Row<'a>) {
        let text = row.text.trim();
        if !text.is_empty() {
            self.words.push(text);
        }
        if row.conf >= 0.0 {
            self.conf_sum += row.conf;
            self.conf_count += 1;
        }
        self.bbox = Some(match self.bbox {
            Some(b) => BoundingBox::new(
                b.x1.min(row.bbox.x1),
                b.y1.min(row.bbox.y1),
                b.x2.max(row.bbox.x2),
                b.y2.max(row.bbox.y2),
            ),
            None => row.bbox,
        });
    }

    fn finish(self) -> Option<TextLine> {
        if self.words.is_empty() {
            return None;
        }
        let confidence = if self.conf_count > 0 {
            self.conf_sum / self.conf_count as f32
        } else {
            0.0
        };
        Some(TextLine {
            text: self.words.join(" "),
            confidence,
            bbox: self.bbox?,
        })
    }
}

fn parse_row(raw: &str) -> Option<Row<'_>> {
    let mut fields = raw.splitn(12, '\t');
    let mut next_num = || fields.next()?.trim().parse::<i64>().ok();

    let level = u8::try_from(next_num()?).ok()?;
    let page = u32::try_from(next_num()?).ok()?;
    let block = u32::try_from(next_num()?).ok()?;
    let par = u32::try_from(next_num()?).ok()?;
    let line = u32::try_from(next_num()?).ok()?;
    let _word = next_num()?;
    let left = i32::try_from(next_num()?).ok()?;
    let top = i32::try_from(next_num()?).ok()?;
    let width = i32::try_from(next_num()?).ok()?;
    let height = i32::try_from(next_num()?).ok()?;

    let conf = fields.next()?.trim().parse::<f32>().ok()?;
    let text = fields.next().unwrap_or("");

    Some(Row {
        level,
        key: (page, block, par, line),
        bbox: BoundingBox::new(left, top, left + width, top + height),
        conf,
        text,
    })
}

/// Group word rows into text lines, in the order Tesseract reports them.
///
/// Line text is the words joined by single spaces and line confidence is
/// the mean of the word confidences. Lines without any words are dropped,
/// and so are rows that do not parse (including a header row).
pub fn parse_text_lines(tsv: &str) -> Vec<TextLine> {
    let mut lines: Vec<LineAccumulator<'_>> = Vec::new();

    for raw in tsv.lines() {
        let Some(row) = parse_row(raw) else {
            if !raw.trim().is_empty() {
                tracing::trace!("Skipping TSV row: {:?}", raw);
            }
            continue;
        };

        match row.level {
            LEVEL_LINE => lines.push(LineAccumulator::new(row.key, Some(row.bbox))),
            LEVEL_WORD => {
                if let Some(acc) = lines.iter_mut().rev().find(|acc| acc.key == row.key) {
                    acc.add_word(&row);
                } else {
                    let mut acc = LineAccumulator::new(row.key, None);
                    acc.add_word(&row);
                    lines.push(acc);
                }
            }
            _ => {}
        }
    }

    lines.into_iter().filter_map(LineAccumulator::finish).collect()
}
