//! Symbol table decoding and symbol-name resolution.
//!
//! Symbols represent named entities (functions, variables) in an ELF file.
//! Two independent tables are resolved: the regular `.symtab`/`.strtab` pair
//! and the dynamic `.dynsym`/`.dynstr` pair. Either may be absent.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::ident::{ElfClass, Identity};
use super::layout::{Decode, FieldReader, RecordKind, TableSpan, decode_records};
use super::section::{SectionTable, StringPool};
use super::source::ByteSource;
use super::{ElfError, ElfResult};

/// Symbol binding (scope).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolBinding {
    /// Local (not visible outside object file)
    Local,
    /// Global (visible everywhere)
    Global,
    /// Weak (like global, but may be overridden)
    Weak,
    /// GNU unique symbol
    GnuUnique,
    /// Unknown binding
    Unknown(u8),
}

impl From<u8> for SymbolBinding {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Local,
            1 => Self::Global,
            2 => Self::Weak,
            10 => Self::GnuUnique,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for SymbolBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("LOCAL"),
            Self::Global => f.write_str("GLOBAL"),
            Self::Weak => f.write_str("WEAK"),
            Self::GnuUnique => f.write_str("UNIQUE"),
            Self::Unknown(v) => write!(f, "<{v}>"),
        }
    }
}

/// Symbol type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolType {
    /// Unspecified type
    NoType,
    /// Data object (variable)
    Object,
    /// Function
    Func,
    /// Section
    Section,
    /// Source file name
    File,
    /// Common symbol
    Common,
    /// TLS data object
    Tls,
    /// Indirect function (GNU extension)
    IFunc,
    /// Unknown type
    Unknown(u8),
}

impl From<u8> for SymbolType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::NoType,
            1 => Self::Object,
            2 => Self::Func,
            3 => Self::Section,
            4 => Self::File,
            5 => Self::Common,
            6 => Self::Tls,
            10 => Self::IFunc,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoType => f.write_str("NOTYPE"),
            Self::Object => f.write_str("OBJECT"),
            Self::Func => f.write_str("FUNC"),
            Self::Section => f.write_str("SECTION"),
            Self::File => f.write_str("FILE"),
            Self::Common => f.write_str("COMMON"),
            Self::Tls => f.write_str("TLS"),
            Self::IFunc => f.write_str("IFUNC"),
            Self::Unknown(v) => write!(f, "<{v}>"),
        }
    }
}

/// Symbol visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolVisibility {
    /// Default visibility (binding determines visibility)
    Default,
    /// Internal (processor-specific)
    Internal,
    /// Hidden (not exported)
    Hidden,
    /// Protected (exported but not preemptible)
    Protected,
}

impl From<u8> for SymbolVisibility {
    fn from(value: u8) -> Self {
        match value & 0x3 {
            0 => Self::Default,
            1 => Self::Internal,
            2 => Self::Hidden,
            _ => Self::Protected,
        }
    }
}

impl fmt::Display for SymbolVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "DEFAULT",
            Self::Internal => "INTERNAL",
            Self::Hidden => "HIDDEN",
            Self::Protected => "PROTECTED",
        })
    }
}

/// Special section indices.
pub mod section_index {
    /// Undefined symbol
    pub const SHN_UNDEF: u16 = 0;
    /// Start of the reserved range
    pub const SHN_LORESERVE: u16 = 0xff00;
    /// Absolute value
    pub const SHN_ABS: u16 = 0xfff1;
    /// Common symbol
    pub const SHN_COMMON: u16 = 0xfff2;
    /// Real index lives in `SHT_SYMTAB_SHNDX`
    pub const SHN_XINDEX: u16 = 0xffff;
}

/// Where a symbol is defined, classified from `st_shndx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolSection {
    Undefined,
    Absolute,
    Common,
    /// Index stored in an extended section index table
    Extended,
    /// Other value in the reserved range
    Reserved(u16),
    /// Ordinary section index
    Index(u16),
}

impl From<u16> for SymbolSection {
    fn from(value: u16) -> Self {
        use section_index::*;
        match value {
            SHN_UNDEF => Self::Undefined,
            SHN_ABS => Self::Absolute,
            SHN_COMMON => Self::Common,
            SHN_XINDEX => Self::Extended,
            v if v >= SHN_LORESERVE => Self::Reserved(v),
            v => Self::Index(v),
        }
    }
}

impl fmt::Display for SymbolSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("UND"),
            Self::Absolute => f.write_str("ABS"),
            Self::Common => f.write_str("COM"),
            Self::Extended => f.write_str("XINDEX"),
            Self::Reserved(v) => write!(f, "RSV[{v:#x}]"),
            Self::Index(v) => write!(f, "{v}"),
        }
    }
}

/// Which of the two symbol tables a symbol came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SymbolTableKind {
    /// `.symtab` / `.strtab`
    Regular,
    /// `.dynsym` / `.dynstr`
    Dynamic,
}

impl SymbolTableKind {
    pub fn symtab_name(self) -> &'static str {
        match self {
            Self::Regular => ".symtab",
            Self::Dynamic => ".dynsym",
        }
    }

    pub fn strtab_name(self) -> &'static str {
        match self {
            Self::Regular => ".strtab",
            Self::Dynamic => ".dynstr",
        }
    }

    /// The kind whose symbol section is called `name`.
    pub fn from_symtab_name(name: &str) -> Option<Self> {
        match name {
            ".symtab" => Some(Self::Regular),
            ".dynsym" => Some(Self::Dynamic),
            _ => None,
        }
    }
}

/// On-disk symbol record. Field order differs between classes.
#[derive(Debug, Clone, Copy)]
struct RawSymbol {
    st_name: u32,
    st_info: u8,
    st_other: u8,
    st_shndx: u16,
    st_value: u64,
    st_size: u64,
}

impl Decode for RawSymbol {
    const KIND: RecordKind = RecordKind::Symbol;

    fn decode(r: &mut FieldReader<'_>) -> ElfResult<Self> {
        match r.class() {
            ElfClass::Elf32 => {
                let st_name = r.u32()?;
                let st_value = r.word()?;
                let st_size = r.word()?;
                Ok(Self {
                    st_name,
                    st_info: r.u8()?,
                    st_other: r.u8()?,
                    st_shndx: r.u16()?,
                    st_value,
                    st_size,
                })
            }
            ElfClass::Elf64 => Ok(Self {
                st_name: r.u32()?,
                st_info: r.u8()?,
                st_other: r.u8()?,
                st_shndx: r.u16()?,
                st_value: r.word()?,
                st_size: r.word()?,
            }),
        }
    }
}

/// A symbol with its name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: String,
    /// Symbol name (offset into the paired string table)
    pub st_name: u32,
    /// Symbol value (address)
    pub st_value: u64,
    /// Symbol size
    pub st_size: u64,
    /// Symbol info (type and binding)
    pub st_info: u8,
    /// Symbol visibility
    pub st_other: u8,
    /// Section index
    pub st_shndx: u16,
    pub table: SymbolTableKind,
}

impl Symbol {
    /// Get the symbol binding.
    pub fn binding(&self) -> SymbolBinding {
        SymbolBinding::from(self.st_info >> 4)
    }

    /// Get the symbol type.
    pub fn symbol_type(&self) -> SymbolType {
        SymbolType::from(self.st_info & 0xf)
    }

    /// Get the symbol visibility.
    pub fn visibility(&self) -> SymbolVisibility {
        SymbolVisibility::from(self.st_other)
    }

    pub fn section(&self) -> SymbolSection {
        SymbolSection::from(self.st_shndx)
    }

    /// Check if this is an undefined symbol.
    pub fn is_undefined(&self) -> bool {
        self.st_shndx == section_index::SHN_UNDEF
    }

    /// Check if this is a function symbol.
    pub fn is_function(&self) -> bool {
        matches!(self.symbol_type(), SymbolType::Func)
    }
}

/// How a symbol table was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TableStatus {
    /// No section with the table's name
    Absent,
    /// Section present with zero entries
    Empty,
    Populated,
}

/// One resolved symbol table. Position is the on-disk symbol index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    pub kind: SymbolTableKind,
    /// Index of the symbol section, when present.
    pub section_index: Option<usize>,
    pub status: TableStatus,
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn absent(kind: SymbolTableKind) -> Self {
        Self {
            kind,
            section_index: None,
            status: TableStatus::Absent,
            symbols: Vec::new(),
        }
    }

    /// Locate, decode and name the `kind` table of `sections`.
    ///
    /// # Errors
    ///
    /// - [`ElfError::MissingStrtab`] if the symbol section exists without its
    ///   string table
    /// - [`ElfError::Truncated`] if the section size is not a whole number of
    ///   symbol records or runs past the source
    /// - [`ElfError::NameOutOfBounds`] for a bad name offset
    pub fn load<S: ByteSource + ?Sized>(
        source: &S,
        identity: &Identity,
        sections: &SectionTable,
        kind: SymbolTableKind,
    ) -> ElfResult<Self> {
        let Some((symtab_index, symtab)) = sections.lookup(kind.symtab_name()) else {
            return Ok(Self::absent(kind));
        };
        let (_, strtab) = sections
            .lookup(kind.strtab_name())
            .ok_or(ElfError::MissingStrtab {
                symtab: kind.symtab_name(),
                strtab: kind.strtab_name(),
            })?;

        let span = TableSpan {
            offset: symtab.sh_offset,
            size: if symtab.has_file_data() { symtab.sh_size } else { 0 },
            stride: identity.class.entry_size(RecordKind::Symbol),
        };
        let raw: Vec<RawSymbol> = decode_records(source, identity, kind.symtab_name(), span)?;
        let pool = StringPool::new(strtab.read_data(source, kind.strtab_name())?);

        let mut names: HashMap<u32, String> = HashMap::new();
        let mut symbols = Vec::with_capacity(raw.len());
        for sym in raw {
            let name = match names.get(&sym.st_name) {
                Some(name) => name.clone(),
                None => {
                    let name = pool.resolve(sym.st_name)?;
                    names.insert(sym.st_name, name.clone());
                    name
                }
            };
            symbols.push(Symbol {
                name,
                st_name: sym.st_name,
                st_value: sym.st_value,
                st_size: sym.st_size,
                st_info: sym.st_info,
                st_other: sym.st_other,
                st_shndx: sym.st_shndx,
                table: kind,
            });
        }

        Ok(Self {
            kind,
            section_index: Some(symtab_index),
            status: if symbols.is_empty() {
                TableStatus::Empty
            } else {
                TableStatus::Populated
            },
            symbols,
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// First symbol called `name`.
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// Diagnostic for an absent or empty table.
    pub fn note(&self) -> Option<String> {
        match (self.status, self.kind) {
            (TableStatus::Populated, _) => None,
            (TableStatus::Absent, SymbolTableKind::Dynamic) => {
                Some("no dynamic symbols: .dynsym missing from target".to_string())
            }
            (TableStatus::Absent, SymbolTableKind::Regular) => {
                Some(".symtab missing: binary is stripped, no local symbols available".to_string())
            }
            (TableStatus::Empty, kind) => Some(format!(
                "{} present but holds no symbols",
                kind.symtab_name()
            )),
        }
    }
}

/// The regular and dynamic symbol tables of one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTables {
    pub regular: SymbolTable,
    pub dynamic: SymbolTable,
}

impl SymbolTables {
    /// Load both tables; the dynamic table is resolved first.
    pub fn load<S: ByteSource + ?Sized>(
        source: &S,
        identity: &Identity,
        sections: &SectionTable,
    ) -> ElfResult<Self> {
        let dynamic = SymbolTable::load(source, identity, sections, SymbolTableKind::Dynamic)?;
        let regular = SymbolTable::load(source, identity, sections, SymbolTableKind::Regular)?;
        Ok(Self { regular, dynamic })
    }

    pub fn table(&self, kind: SymbolTableKind) -> &SymbolTable {
        match kind {
            SymbolTableKind::Regular => &self.regular,
            SymbolTableKind::Dynamic => &self.dynamic,
        }
    }

    /// Notes for absent or empty tables, dynamic first.
    pub fn notes(&self) -> Vec<String> {
        [&self.dynamic, &self.regular]
            .into_iter()
            .filter_map(SymbolTable::note)
            .collect()
    }
}
