//! Deterministic plain-text rendering.
//!
//! JSON output goes straight through serde; this module lays the same data out
//! as fixed-width tables for human inspection and diffs.

use std::fmt::Write as _;

use elfscope_core::elf::{ElfClass, ElfData, Header, RelocationTable, SymbolTable};

use crate::report::{InspectReport, RunOutput, SectionRow, SelfTestReport};

#[must_use]
pub fn render_plain(output: &RunOutput) -> String {
    let mut out = String::new();
    if let Some(self_test) = &output.self_test {
        render_self_test(&mut out, self_test);
    }
    if let Some(report) = &output.report {
        if !out.is_empty() {
            out.push('\n');
        }
        render_report(&mut out, report);
    }
    out
}

fn render_self_test(out: &mut String, report: &SelfTestReport) {
    writeln!(
        out,
        "self-test: {} code {} => {}",
        report.machine, report.code, report.name
    )
    .ok();
    writeln!(
        out,
        "self-test: {} relocation tables ordered ({} entries)",
        report.machines, report.entries
    )
    .ok();
}

pub fn render_report(out: &mut String, report: &InspectReport) {
    writeln!(
        out,
        "File: {} ({} bytes, sha256 {})",
        report.target, report.length, report.sha256
    )
    .ok();

    if let Some(header) = &report.header {
        out.push('\n');
        render_header(out, header);
    }
    if let Some(rows) = &report.sections {
        out.push('\n');
        render_sections(out, rows);
    }
    if let Some(symbols) = &report.symbols {
        for table in [&symbols.dynamic, &symbols.regular] {
            if !table.is_empty() {
                out.push('\n');
                render_symbols(out, table);
            }
        }
    }
    for note in &report.notes {
        writeln!(out, "note: {note}").ok();
    }
    if let Some(tables) = &report.relocations {
        if tables.is_empty() {
            writeln!(out, "\nThere are no relocations in this file.").ok();
        }
        for table in tables {
            out.push('\n');
            render_relocations(out, table);
        }
    }
    if let Some(error) = &report.error {
        writeln!(out, "\nerror: stopped after {}: {error}", report.reached).ok();
    }
}

fn render_header(out: &mut String, header: &Header) {
    let id = &header.identity;
    let class = match id.class {
        ElfClass::Elf32 => "ELF32",
        ElfClass::Elf64 => "ELF64",
    };
    let data = match id.data {
        ElfData::Lsb => "2's complement, little endian",
        ElfData::Msb => "2's complement, big endian",
    };
    let magic: Vec<String> = id.raw.iter().map(|b| format!("{b:02x}")).collect();
    let rows: [(&str, String); 17] = [
        ("Class", class.to_string()),
        ("Data", data.to_string()),
        ("Version", id.version.to_string()),
        ("OS/ABI", format!("{:?}", id.osabi)),
        ("ABI Version", id.abi_version.to_string()),
        ("Type", header.e_type.to_string()),
        ("Machine", header.e_machine.to_string()),
        ("Entry point address", format!("{:#x}", header.e_entry)),
        (
            "Start of program headers",
            format!("{} (bytes into file)", header.e_phoff),
        ),
        (
            "Start of section headers",
            format!("{} (bytes into file)", header.e_shoff),
        ),
        ("Flags", format!("{:#x}", header.e_flags)),
        ("Size of this header", format!("{} (bytes)", header.e_ehsize)),
        (
            "Size of program headers",
            format!("{} (bytes)", header.e_phentsize),
        ),
        ("Number of program headers", header.e_phnum.to_string()),
        (
            "Size of section headers",
            format!("{} (bytes)", header.e_shentsize),
        ),
        ("Number of section headers", header.e_shnum.to_string()),
        (
            "Section header string table index",
            header.e_shstrndx.to_string(),
        ),
    ];

    writeln!(out, "ELF Header:").ok();
    writeln!(out, "  Magic:   {}", magic.join(" ")).ok();
    for (label, value) in rows {
        writeln!(out, "  {:<35}{value}", format!("{label}:")).ok();
    }
}

fn render_sections(out: &mut String, rows: &[SectionRow]) {
    let w_name: usize = 20;
    let w_kind: usize = 14;
    writeln!(out, "Section Headers:").ok();
    writeln!(
        out,
        "  [Nr] {:<w_name$} {:<w_kind$} {:<16} {:<8} {:<8} {:<4} {:<4} {:>3} {:>4} {:>3}",
        "Name", "Type", "Address", "Off", "Size", "ES", "Flg", "Lk", "Inf", "Al",
    )
    .ok();
    for row in rows {
        writeln!(
            out,
            "  [{:>2}] {:<w_name$} {:<w_kind$} {:016x} {:08x} {:08x} {:04x} {:<4} {:>3} {:>4} {:>3}",
            row.index,
            truncate(&row.name, w_name),
            truncate(&row.kind, w_kind),
            row.addr,
            row.offset,
            row.size,
            row.entsize,
            row.flags,
            row.link,
            row.info,
            row.align,
        )
        .ok();
    }
}

fn render_symbols(out: &mut String, table: &SymbolTable) {
    writeln!(
        out,
        "Symbol table '{}' contains {} entries:",
        table.kind.symtab_name(),
        table.len()
    )
    .ok();
    writeln!(
        out,
        "{:>6}: {:<16} {:>5} {:<7} {:<6} {:<9} {:>6} Name",
        "Num", "Value", "Size", "Type", "Bind", "Vis", "Ndx",
    )
    .ok();
    for (i, sym) in table.iter().enumerate() {
        writeln!(
            out,
            "{:>6}: {:016x} {:>5} {:<7} {:<6} {:<9} {:>6} {}",
            i,
            sym.st_value,
            sym.st_size,
            sym.symbol_type().to_string(),
            sym.binding().to_string(),
            sym.visibility().to_string(),
            sym.section().to_string(),
            sym.name,
        )
        .ok();
    }
}

fn render_relocations(out: &mut String, table: &RelocationTable) {
    let w_type: usize = 24;
    writeln!(
        out,
        "Relocation section '{}' contains {} entries (symbols from {}):",
        table.section_name,
        table.len(),
        table.symbol_table.symtab_name(),
    )
    .ok();
    writeln!(
        out,
        "{:<16} {:<16} {:<w_type$} {:<16} Sym. Name + Addend",
        "Offset", "Info", "Type", "Sym. Value",
    )
    .ok();
    for entry in &table.entries {
        let addend = match entry.addend() {
            Some(a) if a < 0 => format!(" - {:x}", a.unsigned_abs()),
            Some(a) => format!(" + {a:x}"),
            None => String::new(),
        };
        writeln!(
            out,
            "{:016x} {:016x} {:<w_type$} {:016x} {}{addend}",
            entry.offset(),
            entry.canonical_info(),
            truncate(entry.type_name.as_str(), w_type),
            entry.symbol.value,
            entry.symbol.name,
        )
        .ok();
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('~');
    out
}
