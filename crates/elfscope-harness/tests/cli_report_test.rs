//! Integration test: inspection reports and the `elfscope` binary
//!
//! Validates that:
//! 1. `inspect` builds the requested views with an input digest.
//! 2. Stage failures after the header keep the completed views.
//! 3. Plain rendering lists sections, symbols and relocations.
//! 4. The binary honors combined short flags, formats, output and log paths.
//!
//! Run: cargo test -p elfscope-harness --test cli_report_test

use std::path::PathBuf;
use std::process::Command;

use elfscope_fixtures::{ElfBuilder, Order, RelocSpec, Width, em, scenario, sht};
use elfscope_harness::render::render_plain;
use elfscope_harness::report::{Actions, HarnessError, RunOutput, inspect};
use elfscope_harness::structured_log::validate_log_file;

fn all_views() -> Actions {
    Actions {
        header: true,
        sections: true,
        symbols: true,
        relocations: true,
        self_test: false,
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("elfscope-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn write_fixture(dir: &std::path::Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

fn elfscope() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_elfscope"));
    cmd.env_remove("ELFSCOPE_FORMAT").env_remove("ELFSCOPE_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// Library reports
// ---------------------------------------------------------------------------

#[test]
fn report_contains_requested_views() {
    let image = scenario::dynamic_relocs(Width::W64, Order::Little, em::X86_64, true);
    let report = inspect("fixture.so", &image, all_views()).expect("inspect");

    assert!(report.is_complete());
    assert_eq!(report.reached, "relocations_loaded");
    assert_eq!(report.length, image.len() as u64);
    assert_eq!(report.sha256.len(), 64);
    assert_eq!(report.stages.len(), 5);
    assert_eq!(report.stages[4].count, Some(2));

    let sections = report.sections.as_ref().expect("sections");
    assert_eq!(sections[4].name, ".rela.dyn");
    assert_eq!(sections[4].kind, "RELA");
    assert_eq!(sections[1].flags, "AX");

    let relocations = report.relocations.as_ref().expect("relocations");
    assert_eq!(relocations[0].entries[1].symbol.name, "bar");
    assert_eq!(report.notes.len(), 1, "stripped fixture notes the missing .symtab");
}

#[test]
fn only_requested_views_are_kept() {
    let image = scenario::full(Width::W32, Order::Big, em::PPC);
    let actions = Actions {
        relocations: true,
        ..Actions::default()
    };
    let report = inspect("fixture.o", &image, actions).expect("inspect");
    assert!(report.header.is_none());
    assert!(report.sections.is_none());
    assert!(report.symbols.is_none());
    assert_eq!(report.relocations.as_ref().map(Vec::len), Some(2));
    assert!(report.notes.is_empty());
}

#[test]
fn digest_is_stable_across_runs() {
    let image = scenario::full(Width::W64, Order::Big, em::S390);
    let a = inspect("a", &image, all_views()).expect("inspect");
    let b = inspect("a", &image, all_views()).expect("inspect");
    assert_eq!(a, b);

    let mut changed = image.clone();
    let last = changed.len() - 1;
    changed[last] ^= 0xff;
    let c = inspect("a", &changed, Actions::default().with_default_header()).expect("inspect");
    assert_ne!(a.sha256, c.sha256);
}

#[test]
fn late_failure_keeps_earlier_views() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let text = b.add_section(".text", sht::PROGBITS, vec![0; 16], 0, 0);
    b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    b.add_relocations(".rela.dyn", true, text, &[RelocSpec::new(0, 1, 7, 0)]);
    let image = b.build();

    let report = inspect("bad-link.so", &image, all_views()).expect("non-fatal failure");
    assert!(!report.is_complete());
    assert_eq!(report.reached, "symbols_loaded");
    assert!(report.header.is_some());
    assert!(report.symbols.is_some());
    assert!(report.relocations.is_none());
    let err = report.ensure_complete().unwrap_err();
    assert!(matches!(err, HarnessError::Incomplete { .. }));
    assert!(err.to_string().contains("symbols_loaded"));
}

#[test]
fn plain_render_lists_every_view() {
    let image = scenario::full(Width::W64, Order::Little, em::X86_64);
    let report = inspect("full.o", &image, all_views()).expect("inspect");
    let text = render_plain(&RunOutput {
        self_test: None,
        report: Some(report),
    });

    assert!(text.starts_with("File: full.o ("));
    assert!(
        text.lines()
            .any(|l| l.trim_start().starts_with("Machine:") && l.ends_with("EM_X86_64"))
    );
    assert!(text.contains("Section Headers:"));
    assert!(text.contains(".rela.plt"));
    assert!(text.contains("Symbol table '.dynsym' contains 3 entries:"));
    assert!(text.contains("Symbol table '.symtab' contains 4 entries:"));
    assert!(text.contains("Relocation section '.rel.text' contains 3 entries"));
    assert!(text.contains("R_X86_64_JMP_SLOT"));
    assert!(!text.contains("error:"));
}

#[test]
fn plain_header_lists_ident_and_program_header_fields() {
    let image = scenario::dynamic_relocs(Width::W32, Order::Big, em::MIPS, false);
    let report = inspect("mips.so", &image, Actions::default().with_default_header())
        .expect("inspect");
    let text = render_plain(&RunOutput {
        self_test: None,
        report: Some(report),
    });

    let magic = text
        .lines()
        .find(|l| l.trim_start().starts_with("Magic:"))
        .expect("magic line");
    assert!(magic.contains("7f 45 4c 46 01 02"), "{magic}");
    assert_eq!(magic.split_whitespace().count(), 17);
    for label in [
        "Start of program headers:",
        "Size of program headers:",
        "Number of program headers:",
    ] {
        assert!(
            text.lines().any(|l| l.trim_start().starts_with(label)),
            "missing {label}"
        );
    }
}

#[test]
fn plain_relocations_show_canonical_info_on_32_bit() {
    // ARM R_ARM_JUMP_SLOT (22) against symbol 1: raw r_info 0x116.
    let image = scenario::dynamic_relocs(Width::W32, Order::Little, em::ARM, false);
    let actions = Actions {
        relocations: true,
        ..Actions::default()
    };
    let report = inspect("arm.so", &image, actions).expect("inspect");
    let text = render_plain(&RunOutput {
        self_test: None,
        report: Some(report),
    });

    assert!(text.contains("0000000100000016"), "{text}");
    assert!(!text.contains("0000000000000116"));
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

#[test]
fn binary_prints_header_by_default() {
    let dir = scratch_dir("default");
    let path = write_fixture(
        &dir,
        "mips.so",
        &scenario::dynamic_relocs(Width::W32, Order::Big, em::MIPS, false),
    );
    let output = elfscope().arg(&path).output().expect("run elfscope");
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ELF Header:"));
    assert!(stdout.contains("2's complement, big endian"));
    assert!(!stdout.contains("Section Headers:"));
}

#[test]
fn binary_combined_flags_emit_json() {
    let dir = scratch_dir("json");
    let path = write_fixture(
        &dir,
        "x86.so",
        &scenario::dynamic_relocs(Width::W64, Order::Little, em::X86_64, true),
    );
    let output = elfscope()
        .arg("-hSsr")
        .args(["--format", "json"])
        .arg(&path)
        .output()
        .expect("run elfscope");
    assert!(output.status.success(), "{output:?}");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let report = &json["report"];
    assert_eq!(report["reached"], "relocations_loaded");
    assert!(report["header"].is_object());
    assert_eq!(report["sections"].as_array().map(Vec::len), Some(6));
    let entries = &report["relocations"][0]["entries"];
    assert_eq!(entries[0]["symbol"]["name"], "foo");
    assert_eq!(entries[0]["type_name"], "R_X86_64_JMP_SLOT");
}

#[test]
fn binary_self_test() {
    let output = elfscope().arg("-t").output().expect("run elfscope");
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("EM_X86_64 code 7 => R_X86_64_JMP_SLOT"));
}

#[test]
fn binary_rejects_non_elf_and_unknown_options() {
    let dir = scratch_dir("reject");
    let path = write_fixture(&dir, "script.sh", b"#!/bin/sh\nexit 0\n");
    let output = elfscope().arg(&path).output().expect("run elfscope");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("elfscope: not an ELF object"), "{stderr}");
    assert!(!stderr.contains("Decode("));

    let output = elfscope().arg("-Z").arg(&path).output().expect("run elfscope");
    assert!(!output.status.success());

    let output = elfscope().output().expect("run elfscope");
    assert!(!output.status.success(), "a target or --self-test is required");
}

#[test]
fn binary_writes_output_and_log_files() {
    let dir = scratch_dir("files");
    let path = write_fixture(
        &dir,
        "arm.so",
        &scenario::dynamic_relocs(Width::W32, Order::Little, em::ARM, false),
    );
    let out_path = dir.join("out/report.txt");
    let log_path = dir.join("logs/run.jsonl");

    let output = elfscope()
        .args(["--relocations", "--self-test"])
        .arg("--output")
        .arg(&out_path)
        .arg("--log")
        .arg(&log_path)
        .arg(&path)
        .output()
        .expect("run elfscope");
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());

    let text = std::fs::read_to_string(&out_path).expect("report written");
    assert!(text.contains("self-test:"));
    assert!(text.contains("R_ARM_JUMP_SLOT"));

    let entries = validate_log_file(&log_path).expect("log validates");
    // self_test, five stages, summary
    assert_eq!(entries, 7);
}

#[test]
fn binary_reports_late_failure_with_nonzero_exit() {
    let dir = scratch_dir("late");
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let dynsym = b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    b.add_relocations(".rela.dyn", true, dynsym, &[RelocSpec::new(0, 9, 7, 0)]);
    let path = write_fixture(&dir, "oob.so", &b.build());

    let output = elfscope().arg("-r").arg(&path).output().expect("run elfscope");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error: stopped after symbols_loaded"));
}

#[test]
fn environment_selects_json() {
    let dir = scratch_dir("env");
    let path = write_fixture(
        &dir,
        "rv.so",
        &scenario::dynamic_relocs(Width::W64, Order::Little, em::RISCV, true),
    );
    let output = elfscope()
        .env("ELFSCOPE_FORMAT", "json")
        .arg(&path)
        .output()
        .expect("run elfscope");
    assert!(output.status.success(), "{output:?}");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(json["report"]["header"]["e_machine"], "RiscV");

    let output = elfscope()
        .env("ELFSCOPE_FORMAT", "json")
        .args(["--format", "plain"])
        .arg(&path)
        .output()
        .expect("run elfscope");
    assert!(String::from_utf8_lossy(&output.stdout).contains("ELF Header:"));
}
