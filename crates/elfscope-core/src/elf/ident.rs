//! Identification prefix (`e_ident`) classification.
//!
//! The first 16 bytes fix the word width and byte order used by every later
//! decode.

use serde::Serialize;

use super::layout::RecordKind;
use super::source::ByteSource;
use super::{EI_NIDENT, ELF_MAGIC, ElfError, ElfResult};

/// Indices into the e_ident array.
mod index {
    pub const EI_CLASS: usize = 4;
    pub const EI_DATA: usize = 5;
    pub const EI_VERSION: usize = 6;
    pub const EI_OSABI: usize = 7;
    pub const EI_ABIVERSION: usize = 8;
}

/// ELF class (32-bit or 64-bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElfClass {
    /// 32-bit objects
    Elf32,
    /// 64-bit objects
    Elf64,
}

impl TryFrom<u8> for ElfClass {
    type Error = ElfError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Elf32),
            2 => Ok(Self::Elf64),
            other => Err(ElfError::UnknownClass(other)),
        }
    }
}

impl ElfClass {
    /// Size of an address/offset-typed field in bytes.
    pub fn word_size(self) -> usize {
        match self {
            Self::Elf32 => 4,
            Self::Elf64 => 8,
        }
    }

    /// Fixed on-disk size of one record of `kind`.
    pub fn entry_size(self, kind: RecordKind) -> usize {
        match (self, kind) {
            (Self::Elf32, RecordKind::Header) => 52,
            (Self::Elf64, RecordKind::Header) => 64,
            (Self::Elf32, RecordKind::SectionHeader) => 40,
            (Self::Elf64, RecordKind::SectionHeader) => 64,
            (Self::Elf32, RecordKind::Symbol) => 16,
            (Self::Elf64, RecordKind::Symbol) => 24,
            (Self::Elf32, RecordKind::Rel) => 8,
            (Self::Elf64, RecordKind::Rel) => 16,
            (Self::Elf32, RecordKind::Rela) => 12,
            (Self::Elf64, RecordKind::Rela) => 24,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::Elf32 => 32,
            Self::Elf64 => 64,
        }
    }
}

/// ELF data encoding (endianness).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElfData {
    /// Little-endian (2's complement)
    Lsb,
    /// Big-endian (2's complement)
    Msb,
}

impl TryFrom<u8> for ElfData {
    type Error = ElfError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Lsb),
            2 => Ok(Self::Msb),
            other => Err(ElfError::UnknownEndianness(other)),
        }
    }
}

/// ELF OS/ABI identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElfOsAbi {
    /// UNIX System V ABI
    SysV,
    /// HP-UX
    HpUx,
    /// NetBSD
    NetBsd,
    /// GNU/Linux
    Gnu,
    /// Sun Solaris
    Solaris,
    /// IBM AIX
    Aix,
    /// SGI Irix
    Irix,
    /// FreeBSD
    FreeBsd,
    /// OpenBSD
    OpenBsd,
    /// ARM EABI
    ArmAeabi,
    /// Standalone (embedded)
    Standalone,
    /// Unknown ABI
    Unknown(u8),
}

impl From<u8> for ElfOsAbi {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::SysV,
            1 => Self::HpUx,
            2 => Self::NetBsd,
            3 => Self::Gnu,
            6 => Self::Solaris,
            7 => Self::Aix,
            8 => Self::Irix,
            9 => Self::FreeBsd,
            12 => Self::OpenBsd,
            64 => Self::ArmAeabi,
            255 => Self::Standalone,
            other => Self::Unknown(other),
        }
    }
}

/// Classified identification prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub class: ElfClass,
    pub data: ElfData,
    /// `EI_VERSION`
    pub version: u8,
    pub osabi: ElfOsAbi,
    pub abi_version: u8,
    /// The identification prefix as read, padding included.
    pub raw: [u8; EI_NIDENT],
}

impl Identity {
    /// Classify a raw identification prefix.
    ///
    /// # Errors
    ///
    /// - [`ElfError::NotElf`] if the magic is absent
    /// - [`ElfError::Truncated`] if the magic is present but the prefix is short
    /// - [`ElfError::UnknownClass`] / [`ElfError::UnknownEndianness`] for
    ///   unrecognized class or encoding bytes
    pub fn classify(ident: &[u8]) -> ElfResult<Self> {
        if ident.get(..ELF_MAGIC.len()) != Some(&ELF_MAGIC[..]) {
            return Err(ElfError::NotElf);
        }
        if ident.len() < EI_NIDENT {
            return Err(ElfError::Truncated {
                what: "identification prefix".to_string(),
                offset: 0,
                needed: EI_NIDENT as u64,
                available: ident.len() as u64,
            });
        }

        let class = ElfClass::try_from(ident[index::EI_CLASS])?;
        let data = ElfData::try_from(ident[index::EI_DATA])?;
        let mut raw = [0u8; EI_NIDENT];
        raw.copy_from_slice(&ident[..EI_NIDENT]);

        Ok(Self {
            class,
            data,
            version: ident[index::EI_VERSION],
            osabi: ElfOsAbi::from(ident[index::EI_OSABI]),
            abi_version: ident[index::EI_ABIVERSION],
            raw,
        })
    }

    /// Read and classify the prefix of `source`.
    pub fn read_from<S: ByteSource + ?Sized>(source: &S) -> ElfResult<Self> {
        let available = usize::try_from(source.len()).unwrap_or(usize::MAX);
        let mut ident = [0u8; EI_NIDENT];
        let take = available.min(EI_NIDENT);
        source.read_exact_at(0, &mut ident[..take])?;
        Self::classify(&ident[..take])
    }
}
