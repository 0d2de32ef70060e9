//! Single-page PDF generation via lopdf
//!
//! Draw instructions use the same top-left page space as the capture regions
//! (Y increasing downward, `y` naming the top edge of the text line). PDF
//! content streams place text by baseline in bottom-left space, so each
//! instruction is converted when the content stream is built:
//!
//! ```text
//! baseline_y = page_height - (y + font_size)
//! ```

use crate::error::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// A4 portrait, in PDF points
pub const A4_WIDTH: f32 = 595.28;
pub const A4_HEIGHT: f32 = 841.89;

/// Page geometry for a generated document
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
}

impl PageSpec {
    /// A4 portrait
    pub fn a4() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
        }
    }
}

/// One absolute-positioned piece of text to place on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    /// Text to draw (Helvetica, unscaled)
    pub text: String,
    /// X coordinate of the text's left edge
    pub x: f32,
    /// Y coordinate of the text's top edge, measured from the page top
    pub y: f32,
    /// Font size in points
    pub size: f32,
}

impl TextDraw {
    pub fn new(text: impl Into<String>, x: f32, y: f32, size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
        }
    }
}

/// Build the content stream for a list of draw instructions.
fn build_content(page: PageSpec, draws: &[TextDraw]) -> Content {
    let mut operations = Vec::with_capacity(draws.len() * 5);

    for draw in draws {
        if draw.text.is_empty() {
            continue;
        }

        let baseline_y = page.height - (draw.y + draw.size);

        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![Object::Name(b"F1".to_vec()), Object::Real(draw.size)],
        ));
        operations.push(Operation::new(
            "Td",
            vec![Object::Real(draw.x), Object::Real(baseline_y)],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(draw.text.as_str())],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    Content { operations }
}

/// Construct a one-page document with the given draw instructions.
///
/// The page carries a single Helvetica (Type1) font resource; text placement
/// is absolute, with no flowing or wrapping. The returned document has not
/// been written anywhere yet.
pub fn single_page_document(page: PageSpec, draws: &[TextDraw]) -> Result<Document> {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let content = build_content(page, draws);
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let resources = dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(font_id),
        },
    };

    let media_box = vec![
        Object::Real(0.0),
        Object::Real(0.0),
        Object::Real(page.width),
        Object::Real(page.height),
    ];
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => media_box,
        "Contents" => Object::Reference(content_id),
        "Resources" => resources,
    });

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => Object::Integer(1),
    });

    if let Ok(page_obj) = doc.get_object_mut(page_id) {
        if let Ok(dict) = page_obj.as_dict_mut() {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    Ok(doc)
}
