// Fixed-template PDF output: static font metrics, greedy paragraph flow, and
// the printpdf-backed document sink.

pub mod flow;
pub mod font_metrics;
pub mod writer;

pub use font_metrics::{letter_page_config, PageConfig};
pub use writer::{Align, DocumentSink, ParagraphOpts, PdfSink, RenderError};
