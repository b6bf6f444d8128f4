//! Width- and order-aware field decoding.
//!
//! [`FieldReader`] walks one fixed record using the classified identity, so
//! record decoders never branch on byte order and only branch on width where
//! the field order itself differs.

use super::ident::{ElfClass, ElfData, Identity};
use super::source::ByteSource;
use super::{ElfError, ElfResult};

/// The fixed-size on-disk record shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Header,
    SectionHeader,
    Symbol,
    /// Relocation without addend
    Rel,
    /// Relocation with addend
    Rela,
}

/// Cursor over one on-disk record.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    class: ElfClass,
    data: ElfData,
}

impl<'a> FieldReader<'a> {
    pub fn new(bytes: &'a [u8], identity: &Identity) -> Self {
        Self {
            bytes,
            pos: 0,
            class: identity.class,
            data: identity.data,
        }
    }

    pub fn class(&self) -> ElfClass {
        self.class
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Advance past `n` bytes without decoding them.
    pub fn skip(&mut self, n: usize) -> ElfResult<()> {
        self.take(n).map(|_| ())
    }

    fn take(&mut self, n: usize) -> ElfResult<&'a [u8]> {
        let bytes = self.bytes;
        let start = self.pos;
        match start.checked_add(n).and_then(|end| bytes.get(start..end)) {
            Some(slice) => {
                self.pos += n;
                Ok(slice)
            }
            None => Err(ElfError::Truncated {
                what: "record field".to_string(),
                offset: self.pos as u64,
                needed: n as u64,
                available: self.bytes.len().saturating_sub(self.pos) as u64,
            }),
        }
    }

    fn array<const N: usize>(&mut self) -> ElfResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn u8(&mut self) -> ElfResult<u8> {
        Ok(self.array::<1>()?[0])
    }

    pub fn u16(&mut self) -> ElfResult<u16> {
        let raw = self.array()?;
        Ok(match self.data {
            ElfData::Lsb => u16::from_le_bytes(raw),
            ElfData::Msb => u16::from_be_bytes(raw),
        })
    }

    pub fn u32(&mut self) -> ElfResult<u32> {
        let raw = self.array()?;
        Ok(match self.data {
            ElfData::Lsb => u32::from_le_bytes(raw),
            ElfData::Msb => u32::from_be_bytes(raw),
        })
    }

    pub fn u64(&mut self) -> ElfResult<u64> {
        let raw = self.array()?;
        Ok(match self.data {
            ElfData::Lsb => u64::from_le_bytes(raw),
            ElfData::Msb => u64::from_be_bytes(raw),
        })
    }

    /// An address/offset-typed field: 4 bytes for ELF32, 8 for ELF64.
    pub fn word(&mut self) -> ElfResult<u64> {
        match self.class {
            ElfClass::Elf32 => self.u32().map(u64::from),
            ElfClass::Elf64 => self.u64(),
        }
    }

    /// A signed word (RELA addend), sign-extended for ELF32.
    pub fn sword(&mut self) -> ElfResult<i64> {
        match self.class {
            ElfClass::Elf32 => self.u32().map(|v| i64::from(v as i32)),
            ElfClass::Elf64 => self.u64().map(|v| v as i64),
        }
    }
}

/// A record with one fixed layout per class.
pub trait Decode: Sized {
    const KIND: RecordKind;

    fn decode(reader: &mut FieldReader<'_>) -> ElfResult<Self>;
}

/// Location of an on-disk table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpan {
    pub offset: u64,
    pub size: u64,
    /// Distance between consecutive records; at least the fixed record size.
    pub stride: usize,
}

/// Decode every record of a table with `decode_one`.
///
/// The span must lie inside the source and its size must be an exact
/// multiple of the stride; anything else is [`ElfError::Truncated`]. Each
/// record is decoded from the first `entry_size(kind)` bytes of its stride.
pub fn decode_table<S, T, F>(
    source: &S,
    identity: &Identity,
    what: &str,
    kind: RecordKind,
    span: TableSpan,
    mut decode_one: F,
) -> ElfResult<Vec<T>>
where
    S: ByteSource + ?Sized,
    F: FnMut(&mut FieldReader<'_>) -> ElfResult<T>,
{
    let record = identity.class.entry_size(kind);
    if span.stride < record {
        return Err(ElfError::Truncated {
            what: format!("{what} (entry size {} below record size)", span.stride),
            offset: span.offset,
            needed: record as u64,
            available: span.stride as u64,
        });
    }
    let stride = span.stride as u64;
    if span.size % stride != 0 {
        return Err(ElfError::Truncated {
            what: format!("{what} (size not a multiple of {stride})"),
            offset: span.offset,
            needed: span.size.div_ceil(stride).saturating_mul(stride),
            available: span.size,
        });
    }

    let raw = source.read_vec(what, span.offset, span.size)?;
    raw.chunks_exact(span.stride)
        .map(|chunk| decode_one(&mut FieldReader::new(&chunk[..record], identity)))
        .collect()
}

/// Decode every record of a table of `T`.
pub fn decode_records<S, T>(
    source: &S,
    identity: &Identity,
    what: &str,
    span: TableSpan,
) -> ElfResult<Vec<T>>
where
    S: ByteSource + ?Sized,
    T: Decode,
{
    decode_table(source, identity, what, T::KIND, span, T::decode)
}
