//! ELF file header decoding.
//!
//! The header is the first structure in any ELF file. Its section-table
//! location, entry size, count and name-table index drive every later stage,
//! so a header that cannot be decoded in full is fatal.

use std::fmt;

use serde::Serialize;

use super::ident::Identity;
use super::layout::{FieldReader, RecordKind};
use super::source::ByteSource;
use super::{EI_NIDENT, ElfError, ElfResult};

/// ELF object file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElfType {
    /// No file type
    None,
    /// Relocatable file
    Rel,
    /// Executable file
    Exec,
    /// Shared object file
    Dyn,
    /// Core file
    Core,
    /// Unknown type
    Unknown(u16),
}

impl From<u16> for ElfType {
    fn from(value: u16) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Rel,
            2 => Self::Exec,
            3 => Self::Dyn,
            4 => Self::Core,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for ElfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("ET_NONE"),
            Self::Rel => f.write_str("ET_REL"),
            Self::Exec => f.write_str("ET_EXEC"),
            Self::Dyn => f.write_str("ET_DYN"),
            Self::Core => f.write_str("ET_CORE"),
            Self::Unknown(v) => write!(f, "ET_UNKNOWN({v:#x})"),
        }
    }
}

/// ELF machine architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElfMachine {
    /// No machine
    None,
    /// Intel 80386
    I386,
    /// MIPS
    Mips,
    /// PowerPC
    Ppc,
    /// PowerPC 64-bit
    Ppc64,
    /// IBM S/390
    S390,
    /// ARM
    Arm,
    /// SPARC V9 64-bit
    SparcV9,
    /// AMD x86-64
    X86_64,
    /// ARM AARCH64
    Aarch64,
    /// RISC-V
    RiscV,
    /// Unknown machine
    Unknown(u16),
}

impl From<u16> for ElfMachine {
    fn from(value: u16) -> Self {
        match value {
            0 => Self::None,
            3 => Self::I386,
            8 => Self::Mips,
            20 => Self::Ppc,
            21 => Self::Ppc64,
            22 => Self::S390,
            40 => Self::Arm,
            43 => Self::SparcV9,
            62 => Self::X86_64,
            183 => Self::Aarch64,
            243 => Self::RiscV,
            other => Self::Unknown(other),
        }
    }
}

impl ElfMachine {
    /// Convert to the raw u16 value.
    pub fn to_u16(self) -> u16 {
        match self {
            Self::None => 0,
            Self::I386 => 3,
            Self::Mips => 8,
            Self::Ppc => 20,
            Self::Ppc64 => 21,
            Self::S390 => 22,
            Self::Arm => 40,
            Self::SparcV9 => 43,
            Self::X86_64 => 62,
            Self::Aarch64 => 183,
            Self::RiscV => 243,
            Self::Unknown(v) => v,
        }
    }
}

impl fmt::Display for ElfMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "EM_NONE",
            Self::I386 => "EM_386",
            Self::Mips => "EM_MIPS",
            Self::Ppc => "EM_PPC",
            Self::Ppc64 => "EM_PPC64",
            Self::S390 => "EM_S390",
            Self::Arm => "EM_ARM",
            Self::SparcV9 => "EM_SPARCV9",
            Self::X86_64 => "EM_X86_64",
            Self::Aarch64 => "EM_AARCH64",
            Self::RiscV => "EM_RISCV",
            Self::Unknown(v) => return write!(f, "EM_UNKNOWN({v})"),
        };
        f.write_str(name)
    }
}

/// Decoded ELF file header, widened to 64-bit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Classified identification prefix
    pub identity: Identity,
    /// Object file type
    pub e_type: ElfType,
    /// Machine architecture
    pub e_machine: ElfMachine,
    /// Object file version
    pub e_version: u32,
    /// Entry point virtual address
    pub e_entry: u64,
    /// Program header table file offset
    pub e_phoff: u64,
    /// Section header table file offset
    pub e_shoff: u64,
    /// Processor-specific flags
    pub e_flags: u32,
    /// ELF header size in bytes
    pub e_ehsize: u16,
    /// Program header table entry size
    pub e_phentsize: u16,
    /// Program header table entry count
    pub e_phnum: u16,
    /// Section header table entry size
    pub e_shentsize: u16,
    /// Section header table entry count
    pub e_shnum: u16,
    /// Section header string table index
    pub e_shstrndx: u16,
}

impl Header {
    /// Decode the header at offset 0 of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::HeaderCorrupt`] if the source is shorter than the
    /// fixed header for the classified width, or if `e_ehsize` declares a
    /// header smaller than that.
    pub fn decode<S: ByteSource + ?Sized>(source: &S, identity: Identity) -> ElfResult<Self> {
        let size = identity.class.entry_size(RecordKind::Header);
        let mut raw = vec![0u8; size];
        source
            .read_exact_at(0, &mut raw)
            .map_err(|err| ElfError::HeaderCorrupt {
                reason: format!("{}-byte header unreadable: {err}", size),
            })?;

        let header = Self::parse(&raw, identity).map_err(|err| ElfError::HeaderCorrupt {
            reason: err.to_string(),
        })?;

        if usize::from(header.e_ehsize) < size {
            return Err(ElfError::HeaderCorrupt {
                reason: format!(
                    "e_ehsize {} smaller than the {}-bit header ({size} bytes)",
                    header.e_ehsize,
                    identity.class.bits()
                ),
            });
        }
        Ok(header)
    }

    fn parse(raw: &[u8], identity: Identity) -> ElfResult<Self> {
        let mut r = FieldReader::new(raw, &identity);
        r.skip(EI_NIDENT)?;

        Ok(Self {
            identity,
            e_type: ElfType::from(r.u16()?),
            e_machine: ElfMachine::from(r.u16()?),
            e_version: r.u32()?,
            e_entry: r.word()?,
            e_phoff: r.word()?,
            e_shoff: r.word()?,
            e_flags: r.u32()?,
            e_ehsize: r.u16()?,
            e_phentsize: r.u16()?,
            e_phnum: r.u16()?,
            e_shentsize: r.u16()?,
            e_shnum: r.u16()?,
            e_shstrndx: r.u16()?,
        })
    }
}
