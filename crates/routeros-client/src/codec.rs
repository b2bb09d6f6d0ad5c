// ── Record codec ──
//
// Converts between typed records and wire words by walking each kind's
// field-descriptor table. Pure functions of their inputs; the CRUD engine
// layers command dispatch and Not-Found inference on top.

use routeros_proto::{Reply, Sentence, Word};

use crate::error::Error;
use crate::resource::Resource;

/// Encode a record into attribute words for `add`/`set`, in field
/// declaration order. Read-only fields and omitted (`None`) fields are
/// skipped.
pub fn encode<R: Resource>(record: &R) -> Vec<Word> {
    debug_assert_unique_keys::<R>();
    R::FIELDS
        .iter()
        .filter(|field| !field.read_only)
        .filter_map(|field| (field.encode)(record).map(|value| Word::attr(field.key, value)))
        .collect()
}

/// Decode one data row into a record.
///
/// Starts from the zero value; every pair whose key matches a descriptor
/// is applied through that field's converter. Unknown keys are ignored
/// (newer devices send fields we don't model); absent keys leave fields at
/// their zero value. The first converter failure aborts the whole decode,
/// naming the offending wire key.
pub fn decode_row<R: Resource>(row: &Sentence) -> Result<R, Error> {
    debug_assert_unique_keys::<R>();
    let mut record = R::default();
    for (key, value) in row.iter() {
        if let Some(field) = R::FIELDS.iter().find(|field| field.key == key) {
            (field.decode)(&mut record, value).map_err(|source| Error::Decode {
                key: key.to_owned(),
                source,
            })?;
        }
    }
    Ok(record)
}

/// Decode the first data row, or the zero-valued record when the reply has
/// none. A zero-match `print` returns zero rows, so the zero value's empty
/// identifier is what lets the engine infer Not-Found.
pub fn decode_first<R: Resource>(reply: &Reply) -> Result<R, Error> {
    match reply.first_row() {
        Some(row) => decode_row(row),
        None => Ok(R::default()),
    }
}

/// Decode every data row, preserving device order. Any row failure aborts
/// the whole decode; never a partial set.
pub fn decode_rows<R: Resource>(reply: &Reply) -> Result<Vec<R>, Error> {
    reply.rows().iter().map(decode_row).collect()
}

/// Wire keys must be unique within a record type.
fn debug_assert_unique_keys<R: Resource>() {
    if cfg!(debug_assertions) {
        for (i, field) in R::FIELDS.iter().enumerate() {
            for other in &R::FIELDS[i + 1..] {
                assert_ne!(
                    field.key, other.key,
                    "{}: duplicate wire key `{}`",
                    R::PATH,
                    field.key
                );
            }
        }
    }
}
