//! The letter template: the fixed sequence and wording of paragraph blocks
//! that make up the rendered document, with interpolation points for the
//! record fields.
//!
//! `compose` is a pure function of one record and one date. Only the
//! interpolated text varies between requests; the block order, wording,
//! alignment and gaps never do.

use chrono::NaiveDate;

use crate::models::LeaveRequestRecord;
use crate::pdf::writer::{DocumentSink, ParagraphOpts, RenderError};

/// One unit of the letter's vertical flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { text: String, opts: ParagraphOpts },
    /// One blank line between paragraph blocks.
    Gap,
}

impl Block {
    fn paragraph(text: impl Into<String>, opts: ParagraphOpts) -> Self {
        Block::Paragraph {
            text: text.into(),
            opts,
        }
    }
}

/// Formats the letter's date line value: zero-padded day, full English month
/// name, four-digit year (`06 August 2026`).
pub fn letter_date(today: NaiveDate) -> String {
    today.format("%d %B %Y").to_string()
}

/// Arranges a record into the letter's fixed block sequence.
pub fn compose(record: &LeaveRequestRecord, today: NaiveDate) -> Vec<Block> {
    let body_leave = format!(
        "I am {}, a student of {}, residing in Room No. {} at {}. \
         I would like to request leave from the hostel from {} to {} due to {}.",
        record.full_name,
        record.course,
        record.room_number,
        record.hostel_address,
        record.leave_start,
        record.leave_end,
        record.reason,
    );
    let body_return = format!(
        "During this period, I will be staying at my home located at {}. \
         I assure you that I will return to the hostel on {} and follow all \
         the rules and regulations.",
        record.home_address, record.return_date,
    );

    vec![
        Block::paragraph(
            format!("To\nThe Warden,\n{}\n", record.hostel_address),
            ParagraphOpts::left(5.0),
        ),
        Block::Gap,
        Block::paragraph(format!("Date: {}", letter_date(today)), ParagraphOpts::left(5.0)),
        Block::Gap,
        Block::paragraph(
            "Subject: Request for Leave from Hostel",
            ParagraphOpts::underlined(6.0),
        ),
        Block::Gap,
        Block::paragraph("Respected Sir/Madam,", ParagraphOpts::left(6.0)),
        Block::Gap,
        Block::paragraph(body_leave, ParagraphOpts::justified(6.0)),
        Block::Gap,
        Block::paragraph(body_return, ParagraphOpts::justified(6.0)),
        Block::Gap,
        Block::paragraph(
            "Kindly grant me permission for the same.\n\nThank you for your consideration.",
            ParagraphOpts::left(6.0),
        ),
        Block::Gap,
        Block::paragraph("Yours sincerely,", ParagraphOpts::left(4.0)),
        Block::paragraph(record.full_name.clone(), ParagraphOpts::left(4.0)),
        Block::paragraph(format!("Roll No: {}", record.roll_number), ParagraphOpts::left(4.0)),
        Block::paragraph(
            format!("Contact: {}", record.contact_number),
            ParagraphOpts::left(4.0),
        ),
    ]
}

/// Feeds a composed block sequence through a document sink, in order.
pub fn render_letter<S: DocumentSink>(blocks: &[Block], sink: &mut S) -> Result<(), RenderError> {
    for block in blocks {
        match block {
            Block::Paragraph { text, opts } => sink.paragraph(text, opts)?,
            Block::Gap => sink.advance(),
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
