//! Document sink: the paragraph/flow capability the letter renderer draws
//! through, and its printpdf-backed implementation.
//!
//! The renderer only needs: append a paragraph (with alignment, underline and
//! line gap), advance vertically, and finish to bytes. Everything
//! printpdf-specific stays behind `PdfSink`.
//!
//! `finish` spools the serialized document through a `NamedTempFile` with a
//! request-unique name and reads it back only after `save` has returned;
//! serialization completion is the return, never a timer. The temp file is
//! removed on drop, on the error path included.

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point, Pt,
};
use thiserror::Error;

use crate::pdf::flow::{justified_space_em, wrap_text, FlowLine};
use crate::pdf::font_metrics::{times_roman_metrics, FontMetricTable, PageConfig};

// ────────────────────────────────────────────────────────────────────────────
// Sink interface
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Justify,
}

/// Per-paragraph layout options, mirroring the flow-layout capability the
/// letter template needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphOpts {
    pub align: Align,
    pub underline: bool,
    /// Extra space between lines of this paragraph, in points.
    pub line_gap_pt: f32,
}

impl ParagraphOpts {
    pub fn left(line_gap_pt: f32) -> Self {
        ParagraphOpts {
            align: Align::Left,
            underline: false,
            line_gap_pt,
        }
    }

    pub fn justified(line_gap_pt: f32) -> Self {
        ParagraphOpts {
            align: Align::Justify,
            underline: false,
            line_gap_pt,
        }
    }

    pub fn underlined(line_gap_pt: f32) -> Self {
        ParagraphOpts {
            align: Align::Left,
            underline: true,
            line_gap_pt,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf serialization failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("spool i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The flow-layout capability the letter renderer depends on.
pub trait DocumentSink {
    /// Appends one paragraph block. Hard `\n` breaks inside `text` are
    /// honored as line breaks.
    fn paragraph(&mut self, text: &str, opts: &ParagraphOpts) -> Result<(), RenderError>;

    /// Advances the cursor by one blank line.
    fn advance(&mut self);

    /// Finalizes the document and returns the serialized bytes.
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}

// ────────────────────────────────────────────────────────────────────────────
// printpdf-backed sink
// ────────────────────────────────────────────────────────────────────────────

const UNDERLINE_OFFSET_PT: f32 = 1.5;
const UNDERLINE_THICKNESS_PT: f32 = 0.6;

pub struct PdfSink {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    metrics: &'static FontMetricTable,
    config: PageConfig,
    /// Distance from the page top to the current baseline, in points.
    cursor_pt: f32,
    pages: usize,
    spool_dir: PathBuf,
}

impl PdfSink {
    pub fn new(config: &PageConfig) -> Result<Self, RenderError> {
        Self::with_spool_dir(config, std::env::temp_dir())
    }

    /// Like `new`, but spools the serialized document under `spool_dir`.
    pub fn with_spool_dir(
        config: &PageConfig,
        spool_dir: impl Into<PathBuf>,
    ) -> Result<Self, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            "Hostel Leave Letter",
            Mm::from(Pt(config.page_width_pt)),
            Mm::from(Pt(config.page_height_pt)),
            "Layer 1",
        );
        let font = doc.add_builtin_font(BuiltinFont::TimesRoman)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(PdfSink {
            doc,
            layer,
            font,
            metrics: times_roman_metrics(),
            cursor_pt: config.margin_pt + config.font_size_pt,
            config: config.clone(),
            pages: 1,
            spool_dir: spool_dir.into(),
        })
    }

    /// Number of pages emitted so far. The letter fits one; the overflow
    /// guard below keeps arbitrary input from spilling past the margin.
    pub fn pages_used(&self) -> usize {
        self.pages
    }

    fn line_advance_pt(&self, line_gap_pt: f32) -> f32 {
        self.config.font_size_pt * self.config.line_height_factor + line_gap_pt
    }

    fn ensure_room(&mut self) {
        if self.cursor_pt <= self.config.page_height_pt - self.config.margin_pt {
            return;
        }
        let (page, layer) = self.doc.add_page(
            Mm::from(Pt(self.config.page_width_pt)),
            Mm::from(Pt(self.config.page_height_pt)),
            "Layer 1",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor_pt = self.config.margin_pt + self.config.font_size_pt;
        self.pages += 1;
    }

    fn baseline_y(&self) -> Pt {
        Pt(self.config.page_height_pt - self.cursor_pt)
    }

    fn draw_line(&mut self, line: &FlowLine, opts: &ParagraphOpts) {
        if line.is_blank() {
            return;
        }

        let size = self.config.font_size_pt;
        let y = self.baseline_y();
        let x0 = self.config.margin_pt;

        let drawn_width_pt = match opts.align {
            Align::Justify if !line.ends_segment && line.words.len() > 1 => {
                let space_pt = justified_space_em(line, self.metrics, self.config.text_width_em())
                    * size;
                let mut x = x0;
                for word in &line.words {
                    self.layer.use_text(
                        word.clone(),
                        size,
                        Mm::from(Pt(x)),
                        Mm::from(Pt(y.0)),
                        &self.font,
                    );
                    x += self.metrics.measure_str_pt(word, size) + space_pt;
                }
                self.config.text_width_pt()
            }
            _ => {
                let text = line.words.join(" ");
                self.layer.use_text(
                    text.clone(),
                    size,
                    Mm::from(Pt(x0)),
                    Mm::from(Pt(y.0)),
                    &self.font,
                );
                self.metrics.measure_str_pt(&text, size)
            }
        };

        if opts.underline {
            let rule_y = y.0 - UNDERLINE_OFFSET_PT;
            let rule = Line {
                points: vec![
                    (Point::new(Mm::from(Pt(x0)), Mm::from(Pt(rule_y))), false),
                    (
                        Point::new(Mm::from(Pt(x0 + drawn_width_pt)), Mm::from(Pt(rule_y))),
                        false,
                    ),
                ],
                is_closed: false,
            };
            self.layer.set_outline_thickness(UNDERLINE_THICKNESS_PT);
            self.layer.add_line(rule);
        }
    }
}

impl DocumentSink for PdfSink {
    fn paragraph(&mut self, text: &str, opts: &ParagraphOpts) -> Result<(), RenderError> {
        let lines = wrap_text(text, self.metrics, self.config.text_width_em());
        for line in &lines {
            self.ensure_room();
            self.draw_line(line, opts);
            self.cursor_pt += self.line_advance_pt(opts.line_gap_pt);
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.cursor_pt += self.line_advance_pt(0.0);
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        let PdfSink { doc, spool_dir, .. } = self;

        let spool = tempfile::Builder::new()
            .prefix("leave-letter-")
            .suffix(".pdf")
            .tempfile_in(spool_dir)?;

        {
            let mut writer = BufWriter::new(spool.as_file());
            doc.save(&mut writer)?;
            writer.flush()?;
        }

        // `save` has returned, so the document is fully on disk.
        let bytes = std::fs::read(spool.path())?;
        Ok(bytes)
        // `spool` drops here and unlinks the file, on early-return paths too.
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
