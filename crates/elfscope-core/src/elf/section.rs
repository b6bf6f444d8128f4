//! Section header table decoding and section-name resolution.
//!
//! Section headers describe the file's sections for linking and debugging.
//! 32-bit and 64-bit records are unified into one [`SectionHeader`] with
//! 64-bit fields.

use serde::Serialize;

use super::header::Header;
use super::layout::{Decode, FieldReader, RecordKind, TableSpan, decode_records};
use super::source::ByteSource;
use super::{ElfError, ElfResult};

/// Section header type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionType {
    /// Inactive section
    Null,
    /// Program data
    Progbits,
    /// Symbol table
    Symtab,
    /// String table
    Strtab,
    /// Relocation with addends
    Rela,
    /// Symbol hash table
    Hash,
    /// Dynamic linking information
    Dynamic,
    /// Notes
    Note,
    /// Uninitialized data (BSS)
    Nobits,
    /// Relocation without addends
    Rel,
    /// Reserved
    Shlib,
    /// Dynamic linker symbol table
    Dynsym,
    /// Array of constructors
    InitArray,
    /// Array of destructors
    FiniArray,
    /// Array of pre-constructors
    PreinitArray,
    /// Section group
    Group,
    /// Extended symbol table index
    SymtabShndx,
    /// GNU hash table
    GnuHash,
    /// GNU version definition
    GnuVerdef,
    /// GNU version requirements
    GnuVerneed,
    /// GNU version symbol table
    GnuVersym,
    /// Unknown type
    Unknown(u32),
}

impl From<u32> for SectionType {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Null,
            1 => Self::Progbits,
            2 => Self::Symtab,
            3 => Self::Strtab,
            4 => Self::Rela,
            5 => Self::Hash,
            6 => Self::Dynamic,
            7 => Self::Note,
            8 => Self::Nobits,
            9 => Self::Rel,
            10 => Self::Shlib,
            11 => Self::Dynsym,
            14 => Self::InitArray,
            15 => Self::FiniArray,
            16 => Self::PreinitArray,
            17 => Self::Group,
            18 => Self::SymtabShndx,
            0x6fff_fff6 => Self::GnuHash,
            0x6fff_fffd => Self::GnuVerdef,
            0x6fff_fffe => Self::GnuVerneed,
            0x6fff_ffff => Self::GnuVersym,
            other => Self::Unknown(other),
        }
    }
}

impl SectionType {
    /// Short `SHT_*` suffix used in listings.
    pub fn label(self) -> String {
        let name = match self {
            Self::Null => "NULL",
            Self::Progbits => "PROGBITS",
            Self::Symtab => "SYMTAB",
            Self::Strtab => "STRTAB",
            Self::Rela => "RELA",
            Self::Hash => "HASH",
            Self::Dynamic => "DYNAMIC",
            Self::Note => "NOTE",
            Self::Nobits => "NOBITS",
            Self::Rel => "REL",
            Self::Shlib => "SHLIB",
            Self::Dynsym => "DYNSYM",
            Self::InitArray => "INIT_ARRAY",
            Self::FiniArray => "FINI_ARRAY",
            Self::PreinitArray => "PREINIT_ARRAY",
            Self::Group => "GROUP",
            Self::SymtabShndx => "SYMTAB_SHNDX",
            Self::GnuHash => "GNU_HASH",
            Self::GnuVerdef => "GNU_VERDEF",
            Self::GnuVerneed => "GNU_VERNEED",
            Self::GnuVersym => "GNU_VERSYM",
            Self::Unknown(v) => return format!("{v:#x}"),
        };
        name.to_string()
    }
}

/// Section header flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SectionFlags(pub u64);

impl SectionFlags {
    /// Writable
    pub const SHF_WRITE: u64 = 0x1;
    /// Occupies memory during execution
    pub const SHF_ALLOC: u64 = 0x2;
    /// Executable
    pub const SHF_EXECINSTR: u64 = 0x4;
    /// Might be merged
    pub const SHF_MERGE: u64 = 0x10;
    /// Contains null-terminated strings
    pub const SHF_STRINGS: u64 = 0x20;
    /// Section holds index
    pub const SHF_INFO_LINK: u64 = 0x40;
    /// Preserve link order
    pub const SHF_LINK_ORDER: u64 = 0x80;
    /// OS-specific handling required
    pub const SHF_OS_NONCONFORMING: u64 = 0x100;
    /// Section is member of a group
    pub const SHF_GROUP: u64 = 0x200;
    /// Thread-local storage
    pub const SHF_TLS: u64 = 0x400;

    pub fn is_writable(self) -> bool {
        self.0 & Self::SHF_WRITE != 0
    }

    pub fn is_allocated(self) -> bool {
        self.0 & Self::SHF_ALLOC != 0
    }

    pub fn is_executable(self) -> bool {
        self.0 & Self::SHF_EXECINSTR != 0
    }

    pub fn is_tls(self) -> bool {
        self.0 & Self::SHF_TLS != 0
    }

    /// readelf-style flag letters (`WAX` and friends).
    pub fn letters(self) -> String {
        [
            (Self::SHF_WRITE, 'W'),
            (Self::SHF_ALLOC, 'A'),
            (Self::SHF_EXECINSTR, 'X'),
            (Self::SHF_MERGE, 'M'),
            (Self::SHF_STRINGS, 'S'),
            (Self::SHF_INFO_LINK, 'I'),
            (Self::SHF_LINK_ORDER, 'L'),
            (Self::SHF_OS_NONCONFORMING, 'O'),
            (Self::SHF_GROUP, 'G'),
            (Self::SHF_TLS, 'T'),
        ]
        .iter()
        .filter(|(bit, _)| self.0 & bit != 0)
        .map(|&(_, letter)| letter)
        .collect()
    }
}

/// One section header, widened to 64-bit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    /// Section name (offset into the section-name string table)
    pub sh_name: u32,
    /// Section type
    pub sh_type: SectionType,
    /// Section flags
    pub sh_flags: SectionFlags,
    /// Virtual address in memory
    pub sh_addr: u64,
    /// Offset in file
    pub sh_offset: u64,
    /// Size in bytes
    pub sh_size: u64,
    /// Link to another section
    pub sh_link: u32,
    /// Additional section information
    pub sh_info: u32,
    /// Section alignment
    pub sh_addralign: u64,
    /// Entry size if section holds table
    pub sh_entsize: u64,
}

impl Decode for SectionHeader {
    const KIND: RecordKind = RecordKind::SectionHeader;

    fn decode(r: &mut FieldReader<'_>) -> ElfResult<Self> {
        Ok(Self {
            sh_name: r.u32()?,
            sh_type: SectionType::from(r.u32()?),
            sh_flags: SectionFlags(r.word()?),
            sh_addr: r.word()?,
            sh_offset: r.word()?,
            sh_size: r.word()?,
            sh_link: r.u32()?,
            sh_info: r.u32()?,
            sh_addralign: r.word()?,
            sh_entsize: r.word()?,
        })
    }
}

impl SectionHeader {
    /// Check if this is a relocation section (REL or RELA).
    pub fn is_relocation(&self) -> bool {
        matches!(self.sh_type, SectionType::Rel | SectionType::Rela)
    }

    /// Whether the section occupies bytes in the file.
    pub fn has_file_data(&self) -> bool {
        !matches!(self.sh_type, SectionType::Nobits | SectionType::Null)
    }

    /// Read this section's bytes from `source`.
    pub fn read_data<S: ByteSource + ?Sized>(&self, source: &S, what: &str) -> ElfResult<Vec<u8>> {
        if !self.has_file_data() {
            return Ok(Vec::new());
        }
        source.read_vec(what, self.sh_offset, self.sh_size)
    }
}

/// A pool of NUL-terminated strings referenced by byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringPool {
    bytes: Vec<u8>,
}

impl StringPool {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The string starting at `offset`, up to the first NUL.
    ///
    /// Offset 0 of an empty pool is the empty name. Any other offset at or
    /// past the end, or a string without a terminator inside the pool, is
    /// [`ElfError::NameOutOfBounds`]. Invalid UTF-8 is replaced, not rejected.
    pub fn resolve(&self, offset: u32) -> ElfResult<String> {
        if offset == 0 && self.bytes.is_empty() {
            return Ok(String::new());
        }
        let out_of_bounds = || ElfError::NameOutOfBounds {
            offset,
            pool_len: self.bytes.len(),
        };
        let start = usize::try_from(offset).map_err(|_| out_of_bounds())?;
        let tail = self.bytes.get(start..).ok_or_else(out_of_bounds)?;
        let end = tail.iter().position(|&b| b == 0).ok_or_else(out_of_bounds)?;
        Ok(String::from_utf8_lossy(&tail[..end]).into_owned())
    }
}

/// The section header table with every name resolved.
///
/// Position in the table is the on-disk section index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionTable {
    headers: Vec<SectionHeader>,
    names: Vec<String>,
    shstrndx: u16,
}

impl SectionTable {
    /// Load the section headers described by `header` and resolve their names.
    ///
    /// A header declaring zero sections yields an empty table.
    pub fn load<S: ByteSource + ?Sized>(source: &S, header: &Header) -> ElfResult<Self> {
        let count = usize::from(header.e_shnum);
        if count == 0 {
            return Ok(Self::default());
        }

        let span = TableSpan {
            offset: header.e_shoff,
            size: u64::from(header.e_shnum) * u64::from(header.e_shentsize),
            stride: usize::from(header.e_shentsize),
        };
        let headers: Vec<SectionHeader> =
            decode_records(source, &header.identity, "section header table", span)?;

        let names_section = headers
            .get(usize::from(header.e_shstrndx))
            .ok_or(ElfError::BadShstrndx {
                index: header.e_shstrndx,
                count,
            })?;
        let pool = StringPool::new(names_section.read_data(source, "section name table")?);

        let names = headers
            .iter()
            .map(|sh| pool.resolve(sh.sh_name))
            .collect::<ElfResult<Vec<_>>>()?;

        Ok(Self {
            headers,
            names,
            shstrndx: header.e_shstrndx,
        })
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Index of the section-name string table.
    pub fn shstrndx(&self) -> u16 {
        self.shstrndx
    }

    pub fn get(&self, index: usize) -> Option<&SectionHeader> {
        self.headers.get(index)
    }

    /// Resolved name of section `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// `(index, header, name)` in file order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SectionHeader, &str)> {
        self.headers
            .iter()
            .zip(&self.names)
            .enumerate()
            .map(|(i, (sh, name))| (i, sh, name.as_str()))
    }

    /// Index of the first section called `name`.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Index and header of the first section called `name`.
    pub fn lookup(&self, name: &str) -> Option<(usize, &SectionHeader)> {
        let index = self.find_by_name(name)?;
        self.headers.get(index).map(|sh| (index, sh))
    }

    /// Every REL/RELA section with its index, in file order.
    pub fn relocation_sections(&self) -> impl Iterator<Item = (usize, &SectionHeader)> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, sh)| sh.is_relocation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_conversion() {
        assert!(matches!(SectionType::from(0), SectionType::Null));
        assert!(matches!(SectionType::from(2), SectionType::Symtab));
        assert!(matches!(SectionType::from(4), SectionType::Rela));
        assert!(matches!(SectionType::from(9), SectionType::Rel));
        assert!(matches!(SectionType::from(11), SectionType::Dynsym));
        assert!(matches!(
            SectionType::from(0x6fff_fff6),
            SectionType::GnuHash
        ));
        assert!(matches!(
            SectionType::from(99999),
            SectionType::Unknown(99999)
        ));
        assert_eq!(SectionType::from(99999).label(), "0x1869f");
    }

    #[test]
    fn test_section_flags() {
        let flags = SectionFlags(SectionFlags::SHF_ALLOC | SectionFlags::SHF_EXECINSTR);
        assert!(flags.is_allocated());
        assert!(flags.is_executable());
        assert!(!flags.is_writable());
        assert!(!flags.is_tls());
        assert_eq!(flags.letters(), "AX");
    }

    #[test]
    fn pool_resolves_terminated_strings() {
        let pool = StringPool::new(b"\0.text\0.data\0".to_vec());
        assert_eq!(pool.resolve(0).unwrap(), "");
        assert_eq!(pool.resolve(1).unwrap(), ".text");
        assert_eq!(pool.resolve(3).unwrap(), "ext");
        assert_eq!(pool.resolve(7).unwrap(), ".data");
    }

    #[test]
    fn pool_never_reads_past_end() {
        let pool = StringPool::new(b"\0abc".to_vec());
        assert!(matches!(
            pool.resolve(1),
            Err(ElfError::NameOutOfBounds {
                offset: 1,
                pool_len: 4
            })
        ));
        assert!(matches!(
            pool.resolve(4),
            Err(ElfError::NameOutOfBounds { .. })
        ));
        assert!(matches!(
            pool.resolve(u32::MAX),
            Err(ElfError::NameOutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_pool_only_resolves_offset_zero() {
        let pool = StringPool::default();
        assert_eq!(pool.resolve(0).unwrap(), "");
        assert!(pool.resolve(1).is_err());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let pool = StringPool::new(vec![0, 0xff, b'x', 0]);
        assert_eq!(pool.resolve(1).unwrap(), "\u{fffd}x");
    }
}
