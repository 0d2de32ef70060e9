//! Capture-region template for the bukti potong slip layout
//!
//! The template is the one piece of configuration the pipeline shares: a
//! versioned table mapping field names to fixed rectangles on page 1 of the
//! source form. Region coordinates are defined once, in top-left page space,
//! and never recomputed per request; they assume the layout of the source
//! template is constant across all inputs.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Field names of the bukti potong layout.
///
/// The summary renderer and any collaborator reading a [`FieldMap`] key by
/// these constants.
///
/// [`FieldMap`]: crate::slip::FieldMap
pub mod field {
    /// Slip registration number ("Nomor Bukti Potong"). The primary field:
    /// a document that yields no value here is not a recognizable slip.
    pub const REGISTRATION_NUMBER: &str = "registration_number";
    /// Amendment flag ("Pembetulan")
    pub const AMENDMENT: &str = "amendment";
    /// Taxpayer id ("NPWP")
    pub const TAXPAYER_ID: &str = "taxpayer_id";
    /// Taxpayer name ("Nama")
    pub const TAXPAYER_NAME: &str = "taxpayer_name";
    /// Tax period ("Masa Pajak")
    pub const TAX_PERIOD: &str = "tax_period";
    /// Tax object code ("Kode Objek Pajak")
    pub const TAX_OBJECT_CODE: &str = "tax_object_code";
    /// Withholder id ("NPWP Pemotong")
    pub const WITHHOLDER_ID: &str = "withholder_id";
    /// Withholder name ("Nama Pemotong")
    pub const WITHHOLDER_NAME: &str = "withholder_name";
}

/// A rectangle in top-left page space used to select the tokens of one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CaptureRegion {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether an anchor point falls inside the region.
    /// Bounds are inclusive on both axes: a token exactly on an edge counts.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Per-field normalization applied to the concatenated token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Registration numbers, NPWP-style ids, periods, codes: all space
    /// characters are stripped from the extracted value
    Identifier,
    /// Names and flags: carried through as extracted
    FreeText,
}

impl FieldKind {
    /// Apply the kind's normalization to a raw extracted string.
    pub fn normalize(&self, raw: String) -> String {
        match self {
            FieldKind::Identifier => raw.replace(' ', ""),
            FieldKind::FreeText => raw,
        }
    }
}

/// One named field of the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub region: CaptureRegion,
}

impl FieldSpec {
    fn new(name: &str, kind: FieldKind, region: CaptureRegion) -> Self {
        Self {
            name: name.to_string(),
            kind,
            region,
        }
    }
}

/// The versioned capture-region table for one slip layout.
///
/// Regions are not required to be disjoint; a token straddling two regions is
/// assigned to both. The current v1 table is non-overlapping in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipTemplate {
    /// Layout revision, bumped when the source form changes
    pub version: u32,
    /// Name of the mandatory field; must appear in `fields`
    pub primary: String,
    /// Ordered field specifications
    pub fields: Vec<FieldSpec>,
}

impl SlipTemplate {
    /// The built-in table for the current bukti potong form layout.
    pub fn bukti_potong_v1() -> Self {
        use field::*;
        use FieldKind::{FreeText, Identifier};

        Self {
            version: 1,
            primary: REGISTRATION_NUMBER.to_string(),
            fields: vec![
                FieldSpec::new(
                    REGISTRATION_NUMBER,
                    Identifier,
                    CaptureRegion::new(244.0, 86.0, 128.0, 21.0),
                ),
                FieldSpec::new(
                    AMENDMENT,
                    FreeText,
                    CaptureRegion::new(213.0, 104.0, 82.0, 17.0),
                ),
                FieldSpec::new(
                    TAXPAYER_ID,
                    Identifier,
                    CaptureRegion::new(101.0, 146.0, 248.0, 18.0),
                ),
                FieldSpec::new(
                    TAXPAYER_NAME,
                    FreeText,
                    CaptureRegion::new(100.0, 182.0, 455.0, 19.0),
                ),
                FieldSpec::new(
                    TAX_PERIOD,
                    Identifier,
                    CaptureRegion::new(19.0, 275.0, 57.0, 15.0),
                ),
                FieldSpec::new(
                    TAX_OBJECT_CODE,
                    Identifier,
                    CaptureRegion::new(83.0, 275.0, 77.0, 15.0),
                ),
                FieldSpec::new(
                    WITHHOLDER_ID,
                    Identifier,
                    CaptureRegion::new(173.0, 431.0, 255.0, 16.0),
                ),
                FieldSpec::new(
                    WITHHOLDER_NAME,
                    FreeText,
                    CaptureRegion::new(172.0, 492.0, 384.0, 14.0),
                ),
            ],
        }
    }

    /// Load a template from its JSON form and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let template: SlipTemplate = serde_json::from_str(json)?;
        template.validate()?;
        Ok(template)
    }

    /// Check structural invariants: at least one field, and the primary
    /// field present in the table.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::Template {
                reason: "template has no fields".to_string(),
            });
        }
        if !self.fields.iter().any(|f| f.name == self.primary) {
            return Err(Error::Template {
                reason: format!("primary field '{}' not in field table", self.primary),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive_bounds() {
        let region = CaptureRegion::new(244.0, 86.0, 128.0, 21.0);

        // Interior
        assert!(region.contains(250.0, 90.0));
        // All four corners are inside
        assert!(region.contains(244.0, 86.0));
        assert!(region.contains(372.0, 86.0));
        assert!(region.contains(244.0, 107.0));
        assert!(region.contains(372.0, 107.0));
        // Just outside
        assert!(!region.contains(243.9, 90.0));
        assert!(!region.contains(372.1, 90.0));
        assert!(!region.contains(250.0, 85.9));
        assert!(!region.contains(250.0, 107.1));
    }

    #[test]
    fn test_identifier_normalization_strips_spaces() {
        assert_eq!(
            FieldKind::Identifier.normalize("01 234 567 8".to_string()),
            "012345678"
        );
        assert_eq!(
            FieldKind::FreeText.normalize("PT Maju Jaya".to_string()),
            "PT Maju Jaya"
        );
    }

    #[test]
    fn test_v1_table_shape() {
        let template = SlipTemplate::bukti_potong_v1();
        assert_eq!(template.version, 1);
        assert_eq!(template.fields.len(), 8);
        assert_eq!(template.primary, field::REGISTRATION_NUMBER);
        template.validate().unwrap();
    }

    #[test]
    fn test_from_json_round_trip() {
        let v1 = SlipTemplate::bukti_potong_v1();
        let json = serde_json::to_string(&v1).unwrap();
        let reloaded = SlipTemplate::from_json(&json).unwrap();
        assert_eq!(reloaded, v1);
    }

    #[test]
    fn test_from_json_rejects_missing_primary() {
        let json = r#"{
            "version": 2,
            "primary": "registration_number",
            "fields": [
                {
                    "name": "amendment",
                    "kind": "free_text",
                    "region": { "x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0 }
                }
            ]
        }"#;
        let result = SlipTemplate::from_json(json);
        assert!(matches!(result, Err(Error::Template { .. })));
    }

    #[test]
    fn test_from_json_rejects_empty_table() {
        let json = r#"{ "version": 2, "primary": "registration_number", "fields": [] }"#;
        assert!(matches!(
            SlipTemplate::from_json(json),
            Err(Error::Template { .. })
        ));
    }
}
