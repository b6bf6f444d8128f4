//! ELF (Executable and Linkable Format) decoding.
//!
//! Decoding proceeds in strict dependency order:
//!
//! 1. [`ident`]: magic, word width and byte order from the 16-byte prefix
//! 2. [`header`]: the fixed file header
//! 3. [`section`]: the section header table and its resolved names
//! 4. [`symbol`]: `.symtab`/`.strtab` and `.dynsym`/`.dynstr`
//! 5. [`relocation`]: every REL/RELA section, joined against its symbol table
//!
//! Every width-dependent read goes through [`layout::FieldReader`], and every
//! read against the input is an explicit-offset read on a [`ByteSource`].
//! The [`decoder`] module drives the stages and keeps the results of every
//! stage that completed even when a later one fails.
//!
//! # Out of scope
//!
//! - Program headers beyond their location in the file header
//! - Extended section numbering (`SHN_XINDEX` in `e_shstrndx`)
//! - Applying relocations

use thiserror::Error;

pub mod decoder;
pub mod header;
pub mod ident;
pub mod layout;
pub mod reloc_names;
pub mod relocation;
pub mod section;
pub mod source;
pub mod symbol;

pub use decoder::{DecodeOutcome, DecodeStage, DecodedObject, ElfDecoder, decode};
pub use header::{ElfMachine, ElfType, Header};
pub use ident::{ElfClass, ElfData, ElfOsAbi, Identity};
pub use layout::{FieldReader, RecordKind};
pub use reloc_names::{RelocTypeName, relocation_type_name};
pub use relocation::{
    RelocationEntry, RelocationRecord, RelocationShape, RelocationTable, RelocationTables,
    ResolvedSymbol,
};
pub use section::{SectionFlags, SectionHeader, SectionTable, SectionType, StringPool};
pub use source::{ByteSource, FileSource};
pub use symbol::{
    Symbol, SymbolBinding, SymbolSection, SymbolTable, SymbolTableKind, SymbolTables, SymbolType,
    SymbolVisibility, TableStatus,
};

/// ELF magic bytes: "\x7fELF"
pub const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// Size of ELF identification array
pub const EI_NIDENT: usize = 16;

/// Error type for ELF decoding.
#[derive(Debug, Error)]
pub enum ElfError {
    /// The source does not start with the ELF magic.
    #[error("not an ELF object: missing \\x7fELF magic")]
    NotElf,
    /// `EI_CLASS` is neither 32-bit nor 64-bit.
    #[error("unknown ELF class: {0}")]
    UnknownClass(u8),
    /// `EI_DATA` is neither little- nor big-endian.
    #[error("unknown data encoding: {0}")]
    UnknownEndianness(u8),
    /// The fixed file header could not be decoded.
    #[error("corrupt ELF header: {reason}")]
    HeaderCorrupt { reason: String },
    /// `e_shstrndx` does not index the section table.
    #[error("section name table index {index} out of range for {count} sections")]
    BadShstrndx { index: u16, count: usize },
    /// A string-table offset runs off the end of its pool.
    #[error("string offset {offset:#x} runs past the {pool_len}-byte string pool")]
    NameOutOfBounds { offset: u32, pool_len: usize },
    /// A symbol table exists but its paired string table does not.
    #[error("{symtab} present but {strtab} missing")]
    MissingStrtab {
        symtab: &'static str,
        strtab: &'static str,
    },
    /// A relocation section links something other than a symbol table.
    #[error(
        "relocation section {section} links section {link} ({linked_name:?}), not .dynsym or .symtab"
    )]
    BadRelocationLink {
        section: usize,
        link: u32,
        linked_name: Option<String>,
    },
    /// A relocation references a symbol past the end of its table.
    #[error("relocation section {section} references symbol {index} of {count}")]
    SymbolIndexOutOfBounds {
        section: usize,
        index: u64,
        count: usize,
    },
    /// A table or record extends past the data that backs it.
    #[error("truncated {what} at offset {offset:#x}: need {needed} bytes, have {available}")]
    Truncated {
        what: String,
        offset: u64,
        needed: u64,
        available: u64,
    },
    /// The underlying source failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ElfError {
    /// Whether this failure leaves no usable width/order for later stages.
    pub fn is_fatal_for_run(&self) -> bool {
        matches!(
            self,
            Self::NotElf
                | Self::UnknownClass(_)
                | Self::UnknownEndianness(_)
                | Self::HeaderCorrupt { .. }
        )
    }
}

/// Result type for ELF operations.
pub type ElfResult<T> = Result<T, ElfError>;
