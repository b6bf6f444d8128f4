//! Relocation section decoding.
//!
//! Every REL/RELA section is decoded in section-index order. The packed info
//! field is split per class, the type code is named through
//! [`relocation_type_name`], and the symbol index is resolved against the
//! symbol table that the section's `sh_link` names.

use std::collections::BTreeMap;

use serde::Serialize;

use super::header::{ElfMachine, Header};
use super::ident::ElfClass;
use super::layout::{FieldReader, RecordKind, TableSpan, decode_table};
use super::reloc_names::{RelocTypeName, relocation_type_name};
use super::section::{SectionHeader, SectionTable, SectionType};
use super::source::ByteSource;
use super::symbol::{SymbolTable, SymbolTableKind, SymbolTables};
use super::{ElfError, ElfResult};

/// Record shape of a relocation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelocationShape {
    /// `SHT_REL`: offset and info
    Rel,
    /// `SHT_RELA`: offset, info and explicit addend
    Rela,
}

impl RelocationShape {
    pub fn from_section_type(sh_type: SectionType) -> Option<Self> {
        match sh_type {
            SectionType::Rel => Some(Self::Rel),
            SectionType::Rela => Some(Self::Rela),
            _ => None,
        }
    }

    pub fn record_kind(self) -> RecordKind {
        match self {
            Self::Rel => RecordKind::Rel,
            Self::Rela => RecordKind::Rela,
        }
    }
}

/// One on-disk relocation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelocationRecord {
    WithoutAddend { r_offset: u64, r_info: u64 },
    WithAddend { r_offset: u64, r_info: u64, r_addend: i64 },
}

impl RelocationRecord {
    fn decode(r: &mut FieldReader<'_>, shape: RelocationShape) -> ElfResult<Self> {
        let r_offset = r.word()?;
        let r_info = r.word()?;
        Ok(match shape {
            RelocationShape::Rel => Self::WithoutAddend { r_offset, r_info },
            RelocationShape::Rela => Self::WithAddend {
                r_offset,
                r_info,
                r_addend: r.sword()?,
            },
        })
    }

    /// Location to patch.
    pub fn offset(&self) -> u64 {
        match *self {
            Self::WithoutAddend { r_offset, .. } | Self::WithAddend { r_offset, .. } => r_offset,
        }
    }

    /// Packed symbol index and type code, as stored.
    pub fn info(&self) -> u64 {
        match *self {
            Self::WithoutAddend { r_info, .. } | Self::WithAddend { r_info, .. } => r_info,
        }
    }

    pub fn addend(&self) -> Option<i64> {
        match *self {
            Self::WithoutAddend { .. } => None,
            Self::WithAddend { r_addend, .. } => Some(r_addend),
        }
    }

    pub fn shape(&self) -> RelocationShape {
        match self {
            Self::WithoutAddend { .. } => RelocationShape::Rel,
            Self::WithAddend { .. } => RelocationShape::Rela,
        }
    }
}

/// Split a packed info field into `(symbol index, type code)`.
///
/// ELF32 packs a 24-bit symbol index over an 8-bit type; ELF64 packs 32 bits
/// over 32 bits.
pub fn split_info(class: ElfClass, info: u64) -> (u64, u32) {
    match class {
        ElfClass::Elf32 => ((info & 0xffff_ffff) >> 8, (info & 0xff) as u32),
        ElfClass::Elf64 => (info >> 32, (info & 0xffff_ffff) as u32),
    }
}

/// Recompose an ELF64-style info value from its parts.
pub fn compose_info(symbol_index: u64, type_code: u32) -> u64 {
    (symbol_index << 32) | u64::from(type_code)
}

/// The symbol a relocation refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSymbol {
    pub index: u64,
    /// Empty for symbol index 0.
    pub name: String,
    pub value: u64,
}

/// A decoded relocation joined with its type name and symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelocationEntry {
    pub record: RelocationRecord,
    pub symbol_index: u64,
    pub type_code: u32,
    pub type_name: RelocTypeName,
    pub symbol: ResolvedSymbol,
}

impl RelocationEntry {
    pub fn offset(&self) -> u64 {
        self.record.offset()
    }

    pub fn addend(&self) -> Option<i64> {
        self.record.addend()
    }

    /// Info recomposed as `symbol << 32 | type`, independent of class.
    pub fn canonical_info(&self) -> u64 {
        compose_info(self.symbol_index, self.type_code)
    }
}

/// All entries of one relocation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelocationTable {
    pub section_index: usize,
    pub section_name: String,
    pub shape: RelocationShape,
    pub machine: ElfMachine,
    /// Value of the section's `sh_link`.
    pub link: u32,
    pub symbol_table: SymbolTableKind,
    pub entries: Vec<RelocationEntry>,
}

impl RelocationTable {
    /// Decode relocation section `section_index` and join it against `symbols`.
    ///
    /// `sh` is that section's header and `shape` the record shape its type
    /// implies; [`RelocationTables::load`] only calls this for REL/RELA
    /// sections.
    ///
    /// # Errors
    ///
    /// - [`ElfError::BadRelocationLink`] if `sh_link` does not name `.dynsym`
    ///   or `.symtab`
    /// - [`ElfError::SymbolIndexOutOfBounds`] for a symbol index past the
    ///   linked table
    /// - [`ElfError::Truncated`] for a partial or out-of-bounds table
    fn load<S: ByteSource + ?Sized>(
        source: &S,
        header: &Header,
        sections: &SectionTable,
        symbols: &SymbolTables,
        section_index: usize,
        sh: &SectionHeader,
        shape: RelocationShape,
    ) -> ElfResult<Self> {
        let section_name = sections.name(section_index).unwrap_or_default().to_string();

        let linked_name = usize::try_from(sh.sh_link)
            .ok()
            .and_then(|link| sections.name(link));
        let kind = linked_name
            .and_then(SymbolTableKind::from_symtab_name)
            .ok_or_else(|| ElfError::BadRelocationLink {
                section: section_index,
                link: sh.sh_link,
                linked_name: linked_name.map(str::to_string),
            })?;
        let table = symbols.table(kind);

        let identity = &header.identity;
        let span = TableSpan {
            offset: sh.sh_offset,
            size: sh.sh_size,
            stride: identity.class.entry_size(shape.record_kind()),
        };
        let records = decode_table(
            source,
            identity,
            &section_name,
            shape.record_kind(),
            span,
            |r| RelocationRecord::decode(r, shape),
        )?;

        let entries = records
            .into_iter()
            .map(|record| -> ElfResult<RelocationEntry> {
                let (symbol_index, type_code) = split_info(identity.class, record.info());
                let symbol = resolve_symbol(table, section_index, symbol_index)?;
                Ok(RelocationEntry {
                    record,
                    symbol_index,
                    type_code,
                    type_name: relocation_type_name(header.e_machine, type_code),
                    symbol,
                })
            })
            .collect::<ElfResult<Vec<_>>>()?;

        Ok(Self {
            section_index,
            section_name,
            shape,
            machine: header.e_machine,
            link: sh.sh_link,
            symbol_table: kind,
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index `table` with a relocation's symbol index.
///
/// Index 0 is the undefined/absolute convention and always resolves, with an
/// empty name, even against an empty table.
fn resolve_symbol(
    table: &SymbolTable,
    section: usize,
    index: u64,
) -> ElfResult<ResolvedSymbol> {
    let found = usize::try_from(index).ok().and_then(|i| table.get(i));
    match (index, found) {
        (0, sym) => Ok(ResolvedSymbol {
            index,
            name: String::new(),
            value: sym.map_or(0, |s| s.st_value),
        }),
        (_, Some(sym)) => Ok(ResolvedSymbol {
            index,
            name: sym.name.clone(),
            value: sym.st_value,
        }),
        (_, None) => Err(ElfError::SymbolIndexOutOfBounds {
            section,
            index,
            count: table.len(),
        }),
    }
}

/// Every relocation table of an object, keyed by owning section index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelocationTables {
    tables: BTreeMap<usize, RelocationTable>,
}

impl RelocationTables {
    /// Decode every REL/RELA section of `sections`.
    pub fn load<S: ByteSource + ?Sized>(
        source: &S,
        header: &Header,
        sections: &SectionTable,
        symbols: &SymbolTables,
    ) -> ElfResult<Self> {
        let mut tables = BTreeMap::new();
        for (index, sh) in sections.relocation_sections() {
            let Some(shape) = RelocationShape::from_section_type(sh.sh_type) else {
                continue;
            };
            let table =
                RelocationTable::load(source, header, sections, symbols, index, sh, shape)?;
            tables.insert(index, table);
        }
        Ok(Self { tables })
    }

    pub fn get(&self, section_index: usize) -> Option<&RelocationTable> {
        self.tables.get(&section_index)
    }

    /// Tables in section-index order.
    pub fn iter(&self) -> impl Iterator<Item = &RelocationTable> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Entry count over every table.
    pub fn total_entries(&self) -> usize {
        self.tables.values().map(RelocationTable::len).sum()
    }
}
