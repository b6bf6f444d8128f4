//! Inspection reports.
//!
//! An [`InspectReport`] holds the views a run asked for, the stage the
//! pipeline reached, and the length and SHA-256 digest of the input. A
//! [`SelfTestReport`] checks the relocation-type tables.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use elfscope_core::elf::reloc_names::{COVERED_MACHINES, validate_tables};
use elfscope_core::elf::{
    ElfMachine, Header, RelocationTable, SectionTable, SymbolTables, relocation_type_name,
};
use elfscope_core::{ByteSource, DecodeOutcome, DecodeStage, DecodedObject, ElfError, decode};
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Harness-level failures.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Decode(#[from] ElfError),
    #[error("unsupported format '{0}', expected plain|json")]
    UnsupportedFormat(String),
    #[error("no target given; pass a path or use --self-test")]
    MissingTarget,
    #[error("self-test failed: {machine} relocation table out of order at code {code}")]
    SelfTest { machine: String, code: u32 },
    #[error("decode of {target} stopped after {reached}: {message}")]
    Incomplete {
        target: String,
        reached: &'static str,
        message: String,
    },
    #[error("failed writing {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// The views a run asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Actions {
    pub header: bool,
    pub sections: bool,
    pub symbols: bool,
    pub relocations: bool,
    pub self_test: bool,
}

impl Actions {
    /// Whether any view of the target was requested.
    #[must_use]
    pub fn inspects(&self) -> bool {
        self.header || self.sections || self.symbols || self.relocations
    }

    /// Show the header when nothing else about the target was requested.
    #[must_use]
    pub fn with_default_header(mut self) -> Self {
        if !self.inspects() {
            self.header = true;
        }
        self
    }

    /// Deepest stage the requested views depend on.
    #[must_use]
    pub fn target_stage(&self) -> DecodeStage {
        if self.relocations {
            DecodeStage::RelocationsLoaded
        } else if self.symbols {
            DecodeStage::SymbolsLoaded
        } else if self.sections {
            DecodeStage::SectionsLoaded
        } else if self.header {
            DecodeStage::HeaderLoaded
        } else {
            DecodeStage::Classified
        }
    }
}

// ---------------------------------------------------------------------------
// Inspect report
// ---------------------------------------------------------------------------

/// One row of the section listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRow {
    pub index: usize,
    pub name: String,
    pub kind: String,
    pub flags: String,
    pub addr: u64,
    pub offset: u64,
    pub size: u64,
    pub entsize: u64,
    pub link: u32,
    pub info: u32,
    pub align: u64,
}

impl SectionRow {
    fn rows(sections: &SectionTable) -> Vec<Self> {
        sections
            .iter()
            .map(|(index, sh, name)| Self {
                index,
                name: name.to_string(),
                kind: sh.sh_type.label(),
                flags: sh.sh_flags.letters(),
                addr: sh.sh_addr,
                offset: sh.sh_offset,
                size: sh.sh_size,
                entsize: sh.sh_entsize,
                link: sh.sh_link,
                info: sh.sh_info,
                align: sh.sh_addralign,
            })
            .collect()
    }
}

/// Record count produced by one completed stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Everything one inspection produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub target: String,
    pub length: u64,
    pub sha256: String,
    pub reached: &'static str,
    pub stages: Vec<StageSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<SymbolTables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relocations: Option<Vec<RelocationTable>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InspectReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// The report as an error when the pipeline stopped early.
    pub fn ensure_complete(&self) -> Result<(), HarnessError> {
        match &self.error {
            None => Ok(()),
            Some(message) => Err(HarnessError::Incomplete {
                target: self.target.clone(),
                reached: self.reached,
                message: message.clone(),
            }),
        }
    }
}

/// Decode `source` as far as `actions` require and build a report.
///
/// # Errors
///
/// Classification and header failures abort with [`HarnessError::Decode`].
/// Later failures are recorded in [`InspectReport::error`] alongside every
/// view that did complete.
pub fn inspect<S: ByteSource + ?Sized>(
    target: &str,
    source: &S,
    actions: Actions,
) -> Result<InspectReport, HarnessError> {
    let DecodeOutcome {
        reached,
        object,
        error,
    } = decode(source, actions.target_stage());
    let error = match error {
        Some(err) if err.is_fatal_for_run() => return Err(err.into()),
        other => other,
    };

    let sha256 = sha256_hex(source)?;
    let stages = stage_summaries(&object, reached);
    let notes = if actions.symbols {
        object.notes()
    } else {
        Vec::new()
    };

    let DecodedObject {
        header,
        sections,
        symbols,
        relocations,
        ..
    } = object;

    Ok(InspectReport {
        target: target.to_string(),
        length: source.len(),
        sha256,
        reached: reached.as_str(),
        stages,
        header: header.filter(|_| actions.header),
        sections: sections
            .filter(|_| actions.sections)
            .map(|s| SectionRow::rows(&s)),
        symbols: symbols.filter(|_| actions.symbols),
        relocations: relocations
            .filter(|_| actions.relocations)
            .map(|r| r.iter().cloned().collect()),
        notes,
        error: error.map(|e| e.to_string()),
    })
}

fn stage_summaries(object: &DecodedObject, reached: DecodeStage) -> Vec<StageSummary> {
    [
        (DecodeStage::Classified, None),
        (DecodeStage::HeaderLoaded, None),
        (
            DecodeStage::SectionsLoaded,
            object.sections.as_ref().map(SectionTable::len),
        ),
        (
            DecodeStage::SymbolsLoaded,
            object
                .symbols
                .as_ref()
                .map(|s| s.regular.len() + s.dynamic.len()),
        ),
        (
            DecodeStage::RelocationsLoaded,
            object.relocations.as_ref().map(|r| r.total_entries()),
        ),
    ]
    .into_iter()
    .filter(|(stage, _)| *stage <= reached)
    .map(|(stage, count)| StageSummary {
        stage: stage.as_str(),
        count,
    })
    .collect()
}

const DIGEST_CHUNK: usize = 64 * 1024;

/// SHA-256 of the whole source, lowercase hex.
pub fn sha256_hex<S: ByteSource + ?Sized>(source: &S) -> Result<String, HarnessError> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; DIGEST_CHUNK];
    let len = source.len();
    let mut offset = 0u64;
    while offset < len {
        let n = (len - offset).min(DIGEST_CHUNK as u64) as usize;
        source.read_exact_at(offset, &mut buf[..n])?;
        hasher.update(&buf[..n]);
        offset += n as u64;
    }
    Ok(hex_lower(&hasher.finalize()))
}

fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

// ---------------------------------------------------------------------------
// Self-test
// ---------------------------------------------------------------------------

/// Outcome of the relocation-table self-test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfTestReport {
    pub machine: String,
    pub code: u32,
    pub name: &'static str,
    pub machines: usize,
    pub entries: usize,
}

/// Name relocation code 7 for x86-64 and check every table is ordered by code.
pub fn run_self_test() -> Result<SelfTestReport, HarnessError> {
    let entries = validate_tables().map_err(|(machine, code)| HarnessError::SelfTest {
        machine: machine.to_string(),
        code,
    })?;
    let machine = ElfMachine::X86_64;
    let code = 7;
    Ok(SelfTestReport {
        machine: machine.to_string(),
        code,
        name: relocation_type_name(machine, code).as_str(),
        machines: COVERED_MACHINES.len(),
        entries,
    })
}

/// Combined output of one `elfscope` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_test: Option<SelfTestReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<InspectReport>,
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Emit one record per completed stage, one for a failure, and a summary.
pub fn log_report<W: Write>(
    emitter: &mut LogEmitter<W>,
    report: &InspectReport,
    elapsed: Duration,
) -> std::io::Result<()> {
    for summary in &report.stages {
        let mut entry = LogEntry::new("", LogLevel::Info, "stage_complete")
            .with_stage(summary.stage)
            .with_target(&report.target)
            .with_outcome(Outcome::Pass);
        if let Some(count) = summary.count {
            entry = entry.with_count(count as u64);
        }
        emitter.emit_entry(entry)?;
    }
    for note in &report.notes {
        emitter.emit_entry(
            LogEntry::new("", LogLevel::Warn, "symbol_table_note")
                .with_target(&report.target)
                .with_details(serde_json::json!({ "note": note })),
        )?;
    }
    if let Some(error) = &report.error {
        emitter.emit_entry(
            LogEntry::new("", LogLevel::Error, "stage_failed")
                .with_stage(report.reached)
                .with_target(&report.target)
                .with_outcome(Outcome::Fail)
                .with_error(error),
        )?;
    }
    let outcome = if report.is_complete() {
        Outcome::Pass
    } else {
        Outcome::Fail
    };
    emitter.emit_entry(
        LogEntry::new("", LogLevel::Info, "inspect_complete")
            .with_stage(report.reached)
            .with_target(&report.target)
            .with_outcome(outcome)
            .with_duration_ms(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .with_details(serde_json::json!({
                "length": report.length,
                "sha256": report.sha256,
            })),
    )?;
    emitter.flush()
}

/// Emit the self-test result.
pub fn log_self_test<W: Write>(
    emitter: &mut LogEmitter<W>,
    result: &Result<SelfTestReport, HarnessError>,
) -> std::io::Result<()> {
    let entry = match result {
        Ok(report) => LogEntry::new("", LogLevel::Info, "self_test")
            .with_outcome(Outcome::Pass)
            .with_count(report.entries as u64)
            .with_details(serde_json::json!({
                "machine": report.machine,
                "code": report.code,
                "name": report.name,
            })),
        Err(err) => LogEntry::new("", LogLevel::Error, "self_test")
            .with_outcome(Outcome::Fail)
            .with_error(err.to_string()),
    };
    emitter.emit_entry(entry)?;
    emitter.flush()
}
