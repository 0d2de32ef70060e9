//! Field extraction: positioned tokens -> FieldMap

use crate::error::{Error, Result};
use crate::pdf::reader::{first_page_tokens, PositionedToken};
use crate::slip::template::SlipTemplate;
use std::collections::HashMap;

/// Extracted field values keyed by template field name.
///
/// Created fresh per extraction call and consumed by the summary renderer;
/// never persisted. Secondary fields may map to empty strings.
pub type FieldMap = HashMap<String, String>;

/// Aggregate tokens into per-field strings using the template's regions.
///
/// For each field, the tokens whose anchor falls inside the region
/// (inclusive bounds) are concatenated in their original extraction order
/// with no separator, then normalized per the field's kind. Tokens outside
/// every region are dropped; a token inside several regions contributes to
/// each of them.
pub fn collect_fields(tokens: &[PositionedToken], template: &SlipTemplate) -> FieldMap {
    let mut fields = FieldMap::with_capacity(template.fields.len());

    for spec in &template.fields {
        let mut raw = String::new();
        for token in tokens {
            if spec.region.contains(token.x, token.y) {
                raw.push_str(&token.text);
            }
        }
        fields.insert(spec.name.clone(), spec.kind.normalize(raw));
    }

    fields
}

/// Extract the slip fields from a PDF byte buffer.
///
/// Fails with [`Error::InvalidDocument`] when the template's primary field is
/// empty after extraction, meaning the upload is not a recognizable slip of
/// this layout. No other field is validated.
pub fn extract(data: &[u8], template: &SlipTemplate) -> Result<FieldMap> {
    let tokens = first_page_tokens(data)?;
    let fields = collect_fields(&tokens, template);
    validate_primary(&fields, template)?;

    tracing::debug!(
        registration = %fields[&template.primary],
        "extracted slip fields"
    );

    Ok(fields)
}

/// Validate the extracted map against the template's primary field.
///
/// Split out of [`extract`] so the aggregation path can be checked without
/// parsing a document.
pub fn validate_primary(fields: &FieldMap, template: &SlipTemplate) -> Result<()> {
    match fields.get(&template.primary) {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(Error::InvalidDocument),
    }
}
