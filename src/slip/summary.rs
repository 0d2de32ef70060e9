//! Summary rendering: FieldMap -> staged one-page PDF
//!
//! The layout is a fixed visual template mirroring the grouping of the source
//! slip, encoded as a literal list of draw instructions rather than a layout
//! engine: one label/value row per field, with the paired fields (taxpayer
//! id/name, tax period/object code, withholder id/name) sharing a row across
//! two columns separated by a `-` glyph.

use crate::error::Result;
use crate::pdf::writer::{single_page_document, PageSpec, TextDraw};
use crate::slip::extractor::FieldMap;
use crate::slip::template::field;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use uuid::Uuid;

/// Title printed at the top of every summary
const TITLE: &str = "Potong Pajak Pembelian Barang";

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 14.0;

/// Column anchors of the summary layout, in points from the page's top-left
const LABEL_X: f32 = 30.0;
const VALUE_X: f32 = 70.0;
const SEPARATOR_X: f32 = 195.0;
const RIGHT_LABEL_X: f32 = 220.0;
const RIGHT_VALUE_X: f32 = 260.0;

/// A staged output file, identified by its generated filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Bare filename (`<uuid>.pdf`) under the staging directory
    pub file_name: String,
}

/// The fixed draw-instruction list for a field map.
///
/// Labels are the section codes of the official form (H1, H2, A1, A3, B1,
/// B2, C1, C5). Missing or empty fields render as an empty value slot.
pub fn draw_instructions(fields: &FieldMap) -> Vec<TextDraw> {
    let value = |name: &str| fields.get(name).cloned().unwrap_or_default();

    let mut draws = vec![TextDraw::new(TITLE, LABEL_X, 60.0, TITLE_SIZE)];

    let label = |text: &str, x: f32, y: f32| TextDraw::new(text, x, y, BODY_SIZE);

    // Row 1: registration number
    draws.push(label("H1 :", LABEL_X, 100.0));
    draws.push(label(&value(field::REGISTRATION_NUMBER), VALUE_X, 100.0));

    // Row 2: amendment flag
    draws.push(label("H2 :", LABEL_X, 120.0));
    draws.push(label(&value(field::AMENDMENT), VALUE_X, 120.0));

    // Row 3: taxpayer id - taxpayer name
    draws.push(label("A1 :", LABEL_X, 140.0));
    draws.push(label(&value(field::TAXPAYER_ID), VALUE_X, 140.0));
    draws.push(label("-", SEPARATOR_X, 140.0));
    draws.push(label("A3 :", RIGHT_LABEL_X, 140.0));
    draws.push(label(&value(field::TAXPAYER_NAME), RIGHT_VALUE_X, 140.0));

    // Row 4: tax period - tax object code
    draws.push(label("B1 :", LABEL_X, 160.0));
    draws.push(label(&value(field::TAX_PERIOD), VALUE_X, 160.0));
    draws.push(label("-", SEPARATOR_X, 160.0));
    draws.push(label("B2 :", RIGHT_LABEL_X, 160.0));
    draws.push(label(&value(field::TAX_OBJECT_CODE), RIGHT_VALUE_X, 160.0));

    // Row 5: withholder id - withholder name
    draws.push(label("C1 :", LABEL_X, 180.0));
    draws.push(label(&value(field::WITHHOLDER_ID), VALUE_X, 180.0));
    draws.push(label("-", SEPARATOR_X, 180.0));
    draws.push(label("C5 :", RIGHT_LABEL_X, 180.0));
    draws.push(label(&value(field::WITHHOLDER_NAME), RIGHT_VALUE_X, 180.0));

    draws
}

/// Render a field map into a new single-page A4 summary under `staging_dir`.
///
/// Creates the staging directory if absent and writes the document through a
/// buffered writer under a fresh `<uuid>.pdf` name; completion is the writer
/// flush, with no re-read. The field map is not validated here - extraction
/// already did.
pub fn render(fields: &FieldMap, staging_dir: &Path) -> Result<GeneratedDocument> {
    let draws = draw_instructions(fields);
    let mut doc = single_page_document(PageSpec::a4(), &draws)?;

    fs::create_dir_all(staging_dir)?;

    let file_name = format!("{}.pdf", Uuid::new_v4());
    let path = staging_dir.join(&file_name);

    let mut writer = BufWriter::new(fs::File::create(&path)?);
    doc.save_to(&mut writer)?;
    writer.flush()?;

    tracing::debug!(file = %file_name, "rendered summary document");

    Ok(GeneratedDocument { file_name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::reader::PositionedToken;
    use crate::slip::extractor::collect_fields;
    use crate::slip::template::{CaptureRegion, FieldKind, FieldSpec, SlipTemplate};
    use pretty_assertions::assert_eq;

    fn sample_fields() -> FieldMap {
        [
            (field::REGISTRATION_NUMBER, "12345678"),
            (field::AMENDMENT, "Pembetulan Ke-0"),
            (field::TAXPAYER_ID, "012345678999000"),
            (field::TAXPAYER_NAME, "PT Maju Jaya"),
            (field::TAX_PERIOD, "01-2023"),
            (field::TAX_OBJECT_CODE, "28-403-02"),
            (field::WITHHOLDER_ID, "098765432111000"),
            (field::WITHHOLDER_NAME, "CV Sumber Rejeki"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// Capture regions placed over the renderer's own value slots, so a
    /// rendered map can be re-extracted from the draw instructions.
    fn recapture_template() -> SlipTemplate {
        let slot = |name: &str, kind: FieldKind, x: f32, y: f32, w: f32| FieldSpec {
            name: name.to_string(),
            kind,
            region: CaptureRegion::new(x - 1.0, y - 1.0, w, BODY_SIZE + 2.0),
        };
        use FieldKind::{FreeText, Identifier};

        SlipTemplate {
            version: 1,
            primary: field::REGISTRATION_NUMBER.to_string(),
            fields: vec![
                slot(field::REGISTRATION_NUMBER, Identifier, VALUE_X, 100.0, 100.0),
                slot(field::AMENDMENT, FreeText, VALUE_X, 120.0, 100.0),
                slot(field::TAXPAYER_ID, Identifier, VALUE_X, 140.0, 100.0),
                slot(field::TAXPAYER_NAME, FreeText, RIGHT_VALUE_X, 140.0, 300.0),
                slot(field::TAX_PERIOD, Identifier, VALUE_X, 160.0, 100.0),
                slot(field::TAX_OBJECT_CODE, Identifier, RIGHT_VALUE_X, 160.0, 300.0),
                slot(field::WITHHOLDER_ID, Identifier, VALUE_X, 180.0, 100.0),
                slot(field::WITHHOLDER_NAME, FreeText, RIGHT_VALUE_X, 180.0, 300.0),
            ],
        }
    }

    #[test]
    fn test_render_then_recapture_round_trip() {
        let fields = sample_fields();
        let tokens: Vec<PositionedToken> = draw_instructions(&fields)
            .into_iter()
            .map(|d| PositionedToken {
                x: d.x,
                y: d.y,
                text: d.text,
            })
            .collect();

        let recovered = collect_fields(&tokens, &recapture_template());
        assert_eq!(recovered, fields);
    }

    #[test]
    fn test_draw_list_starts_with_title() {
        let draws = draw_instructions(&sample_fields());
        assert_eq!(draws[0].text, TITLE);
        assert_eq!(draws[0].size, TITLE_SIZE);
    }

    #[test]
    fn test_paired_rows_carry_separator_glyphs() {
        let draws = draw_instructions(&sample_fields());
        let separators = draws
            .iter()
            .filter(|d| d.text == "-" && d.x == SEPARATOR_X)
            .count();
        assert_eq!(separators, 3);
    }

    #[test]
    fn test_missing_fields_render_as_empty_slots() {
        // A map with only the primary field still renders
        let mut fields = FieldMap::new();
        fields.insert(field::REGISTRATION_NUMBER.to_string(), "1".to_string());

        let draws = draw_instructions(&fields);
        // Title + 8 labels + 3 separators + 8 value slots, empty ones included
        assert_eq!(draws.len(), 20);
    }

    #[test]
    fn test_render_writes_uuid_named_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("staging");

        let generated = render(&sample_fields(), &staging).unwrap();

        assert!(generated.file_name.ends_with(".pdf"));
        // 36-char UUID plus the extension
        assert_eq!(generated.file_name.len(), 40);

        let bytes = fs::read(staging.join(&generated.file_name)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_generates_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let a = render(&sample_fields(), dir.path()).unwrap();
        let b = render(&sample_fields(), dir.path()).unwrap();
        assert_ne!(a.file_name, b.file_name);
    }
}
