//! Little-endian primitive writers

use std::io::Write;

use crate::error::{EncodeError, Result};
use crate::formats::ChunkTag;

/// Byte length of a length-prefixed string field
pub(crate) fn string_size(s: &str) -> usize {
    4 + s.len()
}

/// Fail if a string is too long for its i32 length prefix
pub(crate) fn check_string(field: &'static str, s: &str) -> Result<i32> {
    i32::try_from(s.len()).map_err(|_| EncodeError::CountOverflow {
        field,
        count: s.len(),
    })
}

pub(crate) fn write_tag<W: Write + ?Sized>(out: &mut W, tag: ChunkTag) -> Result<()> {
    out.write_all(&tag.bytes())?;
    Ok(())
}

pub(crate) fn write_i32<W: Write + ?Sized>(out: &mut W, value: i32) -> Result<()> {
    out.write_all(&value.to_le_bytes())?;
    Ok(())
}

pub(crate) fn write_u32s<W: Write + ?Sized>(out: &mut W, values: &[u32]) -> Result<()> {
    for v in values {
        out.write_all(&v.to_le_bytes())?;
    }
    Ok(())
}

pub(crate) fn write_f32s<W: Write + ?Sized>(out: &mut W, values: &[f32]) -> Result<()> {
    for v in values {
        out.write_all(&v.to_le_bytes())?;
    }
    Ok(())
}

/// UTF-8 bytes preceded by their byte length, no terminator
pub(crate) fn write_string<W: Write + ?Sized>(
    out: &mut W,
    field: &'static str,
    s: &str,
) -> Result<()> {
    let len = check_string(field, s)?;
    write_i32(out, len)?;
    out.write_all(s.as_bytes())?;
    Ok(())
}
