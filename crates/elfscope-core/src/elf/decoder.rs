//! Pipeline driver.
//!
//! [`ElfDecoder`] runs the stages in dependency order up to a requested
//! [`DecodeStage`]. A failing stage stops progress, but the output of every
//! stage that completed before it stays available in the [`DecodeOutcome`].

use serde::Serialize;

use super::header::Header;
use super::ident::Identity;
use super::relocation::RelocationTables;
use super::section::SectionTable;
use super::source::ByteSource;
use super::symbol::SymbolTables;
use super::{ElfError, ElfResult};

/// Pipeline states, in the only order they can be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DecodeStage {
    Unclassified,
    Classified,
    HeaderLoaded,
    SectionsLoaded,
    SymbolsLoaded,
    RelocationsLoaded,
}

impl DecodeStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::Classified => "classified",
            Self::HeaderLoaded => "header_loaded",
            Self::SectionsLoaded => "sections_loaded",
            Self::SymbolsLoaded => "symbols_loaded",
            Self::RelocationsLoaded => "relocations_loaded",
        }
    }
}

/// Everything decoded so far. Each field is set once its stage completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodedObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<SectionTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<SymbolTables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relocations: Option<RelocationTables>,
}

impl DecodedObject {
    /// Notes about absent or empty symbol tables.
    pub fn notes(&self) -> Vec<String> {
        self.symbols
            .as_ref()
            .map(SymbolTables::notes)
            .unwrap_or_default()
    }
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct DecodeOutcome {
    /// Last stage that completed.
    pub reached: DecodeStage,
    pub object: DecodedObject,
    /// The failure that stopped progress before the target stage.
    pub error: Option<ElfError>,
}

impl DecodeOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// The decoded object, or the failure if the target was not reached.
    pub fn into_result(self) -> ElfResult<DecodedObject> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.object),
        }
    }
}

/// Stage-by-stage decoder over one byte source.
///
/// Each stage method re-reads what it needs from the source and returns
/// owned results; [`ElfDecoder::run`] memoizes them for the later stages.
#[derive(Debug, Clone, Copy)]
pub struct ElfDecoder<'s, S: ByteSource + ?Sized> {
    source: &'s S,
}

impl<'s, S: ByteSource + ?Sized> ElfDecoder<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    pub fn identity(&self) -> ElfResult<Identity> {
        Identity::read_from(self.source)
    }

    pub fn header(&self, identity: Identity) -> ElfResult<Header> {
        Header::decode(self.source, identity)
    }

    pub fn sections(&self, header: &Header) -> ElfResult<SectionTable> {
        SectionTable::load(self.source, header)
    }

    pub fn symbols(&self, header: &Header, sections: &SectionTable) -> ElfResult<SymbolTables> {
        SymbolTables::load(self.source, &header.identity, sections)
    }

    pub fn relocations(
        &self,
        header: &Header,
        sections: &SectionTable,
        symbols: &SymbolTables,
    ) -> ElfResult<RelocationTables> {
        RelocationTables::load(self.source, header, sections, symbols)
    }

    /// Run every stage up to and including `target`.
    pub fn run(&self, target: DecodeStage) -> DecodeOutcome {
        let mut object = DecodedObject::default();
        let error = self.advance(target, &mut object).err();
        DecodeOutcome {
            reached: reached_stage(&object),
            object,
            error,
        }
    }

    fn advance(&self, target: DecodeStage, object: &mut DecodedObject) -> ElfResult<()> {
        if target < DecodeStage::Classified {
            return Ok(());
        }
        let identity = *object.identity.insert(self.identity()?);

        if target < DecodeStage::HeaderLoaded {
            return Ok(());
        }
        let header = *object.header.insert(self.header(identity)?);

        if target < DecodeStage::SectionsLoaded {
            return Ok(());
        }
        let sections = object.sections.insert(self.sections(&header)?);

        if target < DecodeStage::SymbolsLoaded {
            return Ok(());
        }
        let symbols = object.symbols.insert(self.symbols(&header, sections)?);

        if target < DecodeStage::RelocationsLoaded {
            return Ok(());
        }
        let relocations = self.relocations(&header, sections, symbols)?;
        object.relocations = Some(relocations);
        Ok(())
    }
}

fn reached_stage(object: &DecodedObject) -> DecodeStage {
    if object.relocations.is_some() {
        DecodeStage::RelocationsLoaded
    } else if object.symbols.is_some() {
        DecodeStage::SymbolsLoaded
    } else if object.sections.is_some() {
        DecodeStage::SectionsLoaded
    } else if object.header.is_some() {
        DecodeStage::HeaderLoaded
    } else if object.identity.is_some() {
        DecodeStage::Classified
    } else {
        DecodeStage::Unclassified
    }
}

/// Decode `source` up to `target`.
pub fn decode<S: ByteSource + ?Sized>(source: &S, target: DecodeStage) -> DecodeOutcome {
    ElfDecoder::new(source).run(target)
}
