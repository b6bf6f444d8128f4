//! Integration test: decode pipeline over synthetic objects
//!
//! Exercises every stage against images built by `elfscope-fixtures`, for
//! both widths and both byte orders, including the corrupt inputs each stage
//! must reject without disturbing earlier results.
//!
//! Run: cargo test -p elfscope-core --test decode_pipeline_test

use elfscope_core::elf::{
    ElfClass, ElfData, ElfMachine, RelocTypeName, RelocationShape, SectionType, StringPool,
    SymbolBinding, SymbolSection, SymbolTableKind, SymbolType, TableStatus,
};
use elfscope_core::{ByteSource, DecodeStage, ElfError, FileSource, decode};
use elfscope_fixtures::{
    ElfBuilder, Order, RelocSpec, SymbolSpec, Width, em, scenario, sht,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ALL_SHAPES: [(Width, Order); 4] = [
    (Width::W64, Order::Little),
    (Width::W64, Order::Big),
    (Width::W32, Order::Little),
    (Width::W32, Order::Big),
];

fn full_decode(image: &[u8]) -> elfscope_core::DecodedObject {
    decode(image, DecodeStage::RelocationsLoaded)
        .into_result()
        .expect("fixture should decode completely")
}

// ---------------------------------------------------------------------------
// 1. The two-entry .rela.dyn scenario
// ---------------------------------------------------------------------------

#[test]
fn rela_dyn_resolves_foo_and_bar() {
    let image = scenario::dynamic_relocs(Width::W64, Order::Little, em::X86_64, true);
    let object = full_decode(&image);

    let identity = object.identity.expect("identity");
    assert_eq!(identity.class, ElfClass::Elf64);
    assert_eq!(identity.data, ElfData::Lsb);

    let sections = object.sections.expect("sections");
    let rela_index = sections.find_by_name(".rela.dyn").expect(".rela.dyn");

    let relocations = object.relocations.expect("relocations");
    assert_eq!(relocations.len(), 1);
    let table = relocations.get(rela_index).expect("table for .rela.dyn");
    assert_eq!(table.shape, RelocationShape::Rela);
    assert_eq!(table.symbol_table, SymbolTableKind::Dynamic);
    assert_eq!(table.entries.len(), 2);

    let names: Vec<&str> = table.entries.iter().map(|e| e.symbol.name.as_str()).collect();
    assert_eq!(names, ["foo", "bar"]);
    assert_eq!(table.entries[0].symbol.value, 0x1000);
    assert_eq!(table.entries[1].symbol.value, 0x2000);

    for entry in &table.entries {
        assert_eq!(entry.type_code, 7);
        assert_eq!(entry.type_name, RelocTypeName::Known("R_X86_64_JMP_SLOT"));
    }
    assert_eq!(table.entries[0].offset(), 0x3000);
    assert_eq!(table.entries[1].addend(), Some(8));
    assert_eq!(table.entries[1].canonical_info(), 0x2_0000_0007);
}

// ---------------------------------------------------------------------------
// 2. Every width/order, REL and RELA
// ---------------------------------------------------------------------------

#[test]
fn both_shapes_on_every_width_and_order() {
    for (width, order) in ALL_SHAPES {
        for rela in [false, true] {
            let image = scenario::dynamic_relocs(width, order, em::I386, rela);
            let object = full_decode(&image);
            let identity = object.identity.expect("identity");
            let expected_class = match width {
                Width::W32 => ElfClass::Elf32,
                Width::W64 => ElfClass::Elf64,
            };
            let expected_data = match order {
                Order::Little => ElfData::Lsb,
                Order::Big => ElfData::Msb,
            };
            assert_eq!(identity.class, expected_class);
            assert_eq!(identity.data, expected_data);

            let relocations = object.relocations.expect("relocations");
            let table = relocations.iter().next().expect("one relocation table");
            let expected_shape = if rela {
                RelocationShape::Rela
            } else {
                RelocationShape::Rel
            };
            assert_eq!(table.shape, expected_shape, "{width:?}/{order:?}");
            assert_eq!(table.entries.len(), 2);
            assert_eq!(table.entries[1].symbol.name, "bar");
            assert_eq!(table.entries[1].type_name.as_str(), "R_386_JMP_SLOT");
            assert_eq!(table.entries[1].addend(), rela.then_some(8));
        }
    }
}

#[test]
fn big_endian_mips_rel_32() {
    let image = scenario::dynamic_relocs(Width::W32, Order::Big, em::MIPS, false);
    let object = full_decode(&image);

    let header = object.header.expect("header");
    assert_eq!(header.e_machine, ElfMachine::Mips);
    assert_eq!(header.e_ehsize, 52);
    assert_eq!(header.e_shentsize, 40);

    let relocations = object.relocations.expect("relocations");
    let table = relocations.iter().next().expect("table");
    assert_eq!(table.section_name, ".rel.dyn");
    let entry = &table.entries[0];
    assert_eq!(entry.record.info(), (1 << 8) | 127);
    assert_eq!(entry.symbol_index, 1);
    assert_eq!(entry.type_name.as_str(), "R_MIPS_JUMP_SLOT");
    assert_eq!(entry.addend(), None);
}

#[test]
fn jump_slot_names_across_machines() {
    let cases = [
        (Width::W64, em::X86_64, "R_X86_64_JMP_SLOT"),
        (Width::W32, em::ARM, "R_ARM_JUMP_SLOT"),
        (Width::W64, em::AARCH64, "R_AARCH64_JUMP_SLOT"),
        (Width::W32, em::PPC, "R_PPC_JMP_SLOT"),
        (Width::W64, em::PPC64, "R_PPC64_JMP_SLOT"),
        (Width::W64, em::RISCV, "R_RISCV_JUMP_SLOT"),
        (Width::W64, em::S390, "R_390_JMP_SLOT"),
        (Width::W64, em::SPARCV9, "R_SPARC_JMP_SLOT"),
    ];
    for (width, machine, name) in cases {
        let image = scenario::dynamic_relocs(width, Order::Little, machine, true);
        let object = full_decode(&image);
        let relocations = object.relocations.expect("relocations");
        let table = relocations.iter().next().expect("table");
        assert_eq!(table.entries[0].type_name.as_str(), name, "machine {machine}");
    }
}

// ---------------------------------------------------------------------------
// 3. Relocations agree with manual symbol-table indexing
// ---------------------------------------------------------------------------

#[test]
fn relocation_symbols_match_linked_table() {
    for (width, order) in ALL_SHAPES {
        let image = scenario::full(width, order, em::X86_64);
        let object = full_decode(&image);
        let sections = object.sections.expect("sections");
        let symbols = object.symbols.expect("symbols");
        let relocations = object.relocations.expect("relocations");
        assert_eq!(relocations.len(), 2);
        assert_eq!(relocations.total_entries(), 4);

        for table in relocations.iter() {
            let linked = sections
                .name(table.link as usize)
                .and_then(SymbolTableKind::from_symtab_name)
                .expect("link names a symbol table");
            assert_eq!(linked, table.symbol_table);
            let symtab = symbols.table(linked);
            for entry in &table.entries {
                let manual = symtab
                    .get(entry.symbol_index as usize)
                    .expect("index within table");
                if entry.symbol_index == 0 {
                    assert_eq!(entry.symbol.name, "");
                } else {
                    assert_eq!(entry.symbol.name, manual.name);
                }
                assert_eq!(entry.symbol.value, manual.st_value);
            }
        }

        let rel_text = sections.find_by_name(".rel.text").expect(".rel.text");
        let table = relocations.get(rel_text).expect("table");
        assert_eq!(table.shape, RelocationShape::Rel);
        let names: Vec<&str> = table.entries.iter().map(|e| e.symbol.name.as_str()).collect();
        assert_eq!(names, ["main", "counter", ""]);
        assert_eq!(table.entries[2].type_name.as_str(), "R_X86_64_NONE");
    }
}

// ---------------------------------------------------------------------------
// 4. Sections and names
// ---------------------------------------------------------------------------

#[test]
fn section_names_match_shstrtab_bytes() {
    let image = scenario::full(Width::W64, Order::Little, em::X86_64);
    let object = full_decode(&image);
    let sections = object.sections.expect("sections");

    let shstrtab = sections
        .get(usize::from(sections.shstrndx()))
        .expect("shstrtab header");
    let bytes = shstrtab.read_data(&image, "names").expect("shstrtab bytes");

    for (_, sh, name) in sections.iter() {
        let start = sh.sh_name as usize;
        assert!(start <= bytes.len());
        let end = bytes[start..]
            .iter()
            .position(|&b| b == 0)
            .map_or(bytes.len(), |p| start + p);
        assert_eq!(name.as_bytes(), &bytes[start..end]);
    }

    assert_eq!(sections.name(0), Some(""));
    assert_eq!(sections.get(0).map(|s| s.sh_type), Some(SectionType::Null));
    let bss = sections.find_by_name(".bss").expect(".bss");
    assert_eq!(sections.get(bss).map(|s| s.sh_type), Some(SectionType::Nobits));
}

#[test]
fn wide_section_stride_is_honored() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    b.add_section(".text", sht::PROGBITS, vec![0x90; 8], 0, 0);
    let image = b.override_shentsize(72).build();
    let object = full_decode(&image);
    let sections = object.sections.expect("sections");
    assert_eq!(sections.len(), 3);
    assert_eq!(sections.name(1), Some(".text"));
    assert_eq!(sections.name(2), Some(".shstrtab"));
}

#[test]
fn short_section_stride_is_truncated() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    b.add_section(".text", sht::PROGBITS, vec![0x90; 8], 0, 0);
    let image = b.override_shentsize(32).build();
    let outcome = decode(&image, DecodeStage::SectionsLoaded);
    assert_eq!(outcome.reached, DecodeStage::HeaderLoaded);
    assert!(matches!(outcome.error, Some(ElfError::Truncated { .. })));
}

#[test]
fn shstrndx_one_past_end_is_rejected() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    b.add_section(".text", sht::PROGBITS, vec![0x90; 8], 0, 0);
    let shnum = (b.shstrtab_index() + 1) as u16;
    let image = b.override_shstrndx(shnum).build();

    let outcome = decode(&image, DecodeStage::RelocationsLoaded);
    assert_eq!(outcome.reached, DecodeStage::HeaderLoaded);
    match outcome.error {
        Some(ElfError::BadShstrndx { index, count }) => {
            assert_eq!(index, shnum);
            assert_eq!(count, usize::from(shnum));
        }
        other => panic!("expected BadShstrndx, got {other:?}"),
    }
    // Earlier stages stay intact.
    let header = outcome.object.header.expect("header survives");
    assert_eq!(header.e_shnum, shnum);
    assert!(outcome.object.sections.is_none());
}

#[test]
fn header_only_request_ignores_broken_sections() {
    let mut b = ElfBuilder::new(Width::W32, Order::Big, em::PPC);
    b.add_section(".text", sht::PROGBITS, vec![0; 4], 0, 0);
    let image = b.override_shstrndx(0x7fff).build();

    let outcome = decode(&image, DecodeStage::HeaderLoaded);
    assert!(outcome.is_complete());
    assert_eq!(outcome.reached, DecodeStage::HeaderLoaded);
    assert_eq!(
        outcome.object.header.map(|h| h.e_machine),
        Some(ElfMachine::Ppc)
    );
}

#[test]
fn name_offset_past_pool_is_rejected() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let text = b.add_section(".text", sht::PROGBITS, vec![0; 4], 0, 0);
    // Point e_shstrndx at .text, whose contents hold no valid names.
    let image = b.override_shstrndx(text as u16).build();
    let outcome = decode(&image, DecodeStage::SectionsLoaded);
    assert!(matches!(
        outcome.error,
        Some(ElfError::NameOutOfBounds { .. })
    ));
}

#[test]
fn string_pool_never_reads_past_end() {
    let pool = StringPool::new(b"\0abc\0de".to_vec());
    assert_eq!(pool.resolve(1).expect("abc"), "abc");
    assert_eq!(pool.resolve(2).expect("suffix"), "bc");
    // "de" has no terminator inside the pool.
    assert!(pool.resolve(5).is_err());
    assert!(pool.resolve(7).is_err());
    assert!(pool.resolve(u32::MAX).is_err());
}

// ---------------------------------------------------------------------------
// 5. Symbol tables
// ---------------------------------------------------------------------------

#[test]
fn stripped_object_has_empty_regular_table() {
    let image = scenario::stripped(Width::W64, Order::Little, em::X86_64);
    let outcome = decode(&image, DecodeStage::SymbolsLoaded);
    assert!(outcome.is_complete());
    let symbols = outcome.object.symbols.as_ref().expect("symbols");

    assert_eq!(symbols.regular.status, TableStatus::Absent);
    assert!(symbols.regular.is_empty());
    assert_eq!(symbols.dynamic.status, TableStatus::Populated);
    assert_eq!(symbols.dynamic.len(), 3);

    let notes = outcome.object.notes();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].contains(".symtab missing"));
}

#[test]
fn empty_symtab_is_distinguished_from_absent() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    b.add_symbols(".symtab", ".strtab", &[]);
    let image = b.build();
    let symbols = full_decode(&image).symbols.expect("symbols");

    assert_eq!(symbols.regular.status, TableStatus::Empty);
    assert!(symbols.regular.is_empty());
    assert_eq!(symbols.dynamic.status, TableStatus::Absent);
    let notes = symbols.notes();
    assert_eq!(
        notes,
        [
            "no dynamic symbols: .dynsym missing from target",
            ".symtab present but holds no symbols",
        ]
    );
}

#[test]
fn symbol_fields_decode_on_both_widths() {
    for (width, order) in ALL_SHAPES {
        let image = scenario::full(width, order, em::X86_64);
        let symbols = full_decode(&image).symbols.expect("symbols");

        let counter = symbols.regular.find("counter").expect("counter");
        assert_eq!(counter.st_value, 0x4000);
        assert_eq!(counter.st_size, 8);
        assert_eq!(counter.binding(), SymbolBinding::Global);
        assert_eq!(counter.symbol_type(), SymbolType::Object);
        assert_eq!(counter.section(), SymbolSection::Index(1));

        let foo = symbols.dynamic.find("foo").expect("foo");
        assert!(foo.is_function());
        assert!(!foo.is_undefined());

        let null = symbols.regular.get(0).expect("null symbol");
        assert!(null.is_undefined());
        assert_eq!(null.name, "");
    }
}

#[test]
fn symbol_count_is_size_over_entry_size() {
    for (width, order) in ALL_SHAPES {
        let image = scenario::full(width, order, em::X86_64);
        let object = full_decode(&image);
        let identity = object.identity.expect("identity");
        let sections = object.sections.expect("sections");
        let symbols = object.symbols.expect("symbols");
        let entry = match identity.class {
            ElfClass::Elf32 => 16,
            ElfClass::Elf64 => 24,
        };
        for table in [&symbols.regular, &symbols.dynamic] {
            let index = table.section_index.expect("present");
            let sh = sections.get(index).expect("header");
            assert_eq!(table.len() as u64, sh.sh_size / entry);
        }
    }
}

#[test]
fn partial_symbol_record_is_truncated() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let dynsym = b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    b.override_size(dynsym, 3 * 24 - 5);
    let image = b.build();

    let outcome = decode(&image, DecodeStage::RelocationsLoaded);
    assert_eq!(outcome.reached, DecodeStage::SectionsLoaded);
    match outcome.error {
        Some(ElfError::Truncated {
            needed, available, ..
        }) => {
            assert_eq!(available, 67);
            assert_eq!(needed, 72);
        }
        other => panic!("expected Truncated, got {other:?}"),
    }
    assert!(outcome.object.sections.is_some());
}

#[test]
fn huge_symbol_section_size_is_truncated() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let dynsym = b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    b.override_size(dynsym, u64::MAX);

    let outcome = decode(&b.build(), DecodeStage::RelocationsLoaded);
    assert_eq!(outcome.reached, DecodeStage::SectionsLoaded);
    assert!(matches!(
        outcome.error,
        Some(ElfError::Truncated {
            needed: u64::MAX,
            available: u64::MAX,
            ..
        })
    ));
}

#[test]
fn symbol_tables_come_from_the_named_sections() {
    let image = scenario::full(Width::W64, Order::Little, em::X86_64);
    let object = full_decode(&image);
    let sections = object.sections.as_ref().expect("sections");
    let symbols = object.symbols.as_ref().expect("symbols");

    for kind in [SymbolTableKind::Dynamic, SymbolTableKind::Regular] {
        let (index, header) = sections.lookup(kind.symtab_name()).expect("symbol section");
        let table = symbols.table(kind);
        assert_eq!(table.section_index, Some(index));
        assert_eq!(table.len() as u64, header.sh_size / 24);
    }
    assert!(sections.lookup(".debug_info").is_none());
}

#[test]
fn symtab_without_strtab_is_missing_strtab() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let mut data = Vec::new();
    b.encoder().symbol(&mut data, 0, &SymbolSpec::null());
    b.add_section(".symtab", sht::SYMTAB, data, 0, 24);
    let image = b.build();

    let outcome = decode(&image, DecodeStage::SymbolsLoaded);
    assert!(matches!(
        outcome.error,
        Some(ElfError::MissingStrtab {
            symtab: ".symtab",
            strtab: ".strtab"
        })
    ));
}

// ---------------------------------------------------------------------------
// 6. Relocation failures and unknowns
// ---------------------------------------------------------------------------

#[test]
fn unknown_type_code_is_not_an_error() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let dynsym = b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    b.add_relocations(".rela.dyn", true, dynsym, &[RelocSpec::new(0x10, 1, 999, 0)]);
    let object = full_decode(&b.build());
    let relocations = object.relocations.expect("relocations");
    let entry = &relocations.iter().next().expect("table").entries[0];
    assert_eq!(entry.type_code, 999);
    assert_eq!(entry.type_name, RelocTypeName::Unknown);
    assert_eq!(entry.type_name.as_str(), "R_UNKNOWN");
    assert_eq!(entry.symbol.name, "foo");
}

#[test]
fn unknown_machine_degrades_like_unknown_code() {
    let image = scenario::dynamic_relocs(Width::W64, Order::Big, 0x1234, true);
    let object = full_decode(&image);
    assert_eq!(
        object.header.map(|h| h.e_machine),
        Some(ElfMachine::Unknown(0x1234))
    );
    let relocations = object.relocations.expect("relocations");
    for entry in &relocations.iter().next().expect("table").entries {
        assert!(!entry.type_name.is_known());
        assert_eq!(entry.type_name.as_str(), "R_UNKNOWN");
    }
}

#[test]
fn relocation_linked_to_non_symbol_table_is_rejected() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let text = b.add_section(".text", sht::PROGBITS, vec![0; 16], 0, 0);
    b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    let rela = b.add_relocations(".rela.dyn", true, text, &[RelocSpec::new(0, 1, 7, 0)]);

    let outcome = decode(&b.build(), DecodeStage::RelocationsLoaded);
    assert_eq!(outcome.reached, DecodeStage::SymbolsLoaded);
    match outcome.error {
        Some(ElfError::BadRelocationLink {
            section,
            link,
            linked_name,
        }) => {
            assert_eq!(section, rela);
            assert_eq!(link as usize, text);
            assert_eq!(linked_name.as_deref(), Some(".text"));
        }
        other => panic!("expected BadRelocationLink, got {other:?}"),
    }
    assert_eq!(
        outcome.object.symbols.map(|s| s.dynamic.len()),
        Some(3)
    );
}

#[test]
fn relocation_link_out_of_range_is_rejected() {
    let mut b = ElfBuilder::new(Width::W32, Order::Little, em::I386);
    b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    b.add_relocations(".rel.dyn", false, 99, &[RelocSpec::new(0, 1, 7, 0)]);
    let outcome = decode(&b.build(), DecodeStage::RelocationsLoaded);
    assert!(matches!(
        outcome.error,
        Some(ElfError::BadRelocationLink {
            link: 99,
            linked_name: None,
            ..
        })
    ));
}

#[test]
fn symbol_index_past_table_is_rejected() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let dynsym = b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    b.add_relocations(".rela.dyn", true, dynsym, &[RelocSpec::new(0, 5, 7, 0)]);
    let outcome = decode(&b.build(), DecodeStage::RelocationsLoaded);
    assert!(matches!(
        outcome.error,
        Some(ElfError::SymbolIndexOutOfBounds {
            index: 5,
            count: 3,
            ..
        })
    ));
}

#[test]
fn relocation_section_past_end_of_file_is_truncated() {
    let mut b = ElfBuilder::new(Width::W64, Order::Little, em::X86_64);
    let dynsym = b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    let rela = b.add_relocations(".rela.dyn", true, dynsym, &[RelocSpec::new(0, 1, 7, 0)]);
    b.override_size(rela, 24 * 4096);
    let outcome = decode(&b.build(), DecodeStage::RelocationsLoaded);
    assert_eq!(outcome.reached, DecodeStage::SymbolsLoaded);
    assert!(matches!(outcome.error, Some(ElfError::Truncated { .. })));
}

#[test]
fn huge_relocation_section_size_is_truncated() {
    let mut b = ElfBuilder::new(Width::W64, Order::Big, em::PPC64);
    let dynsym = b.add_symbols(".dynsym", ".dynstr", &scenario::foo_bar_symbols());
    let rela = b.add_relocations(".rela.dyn", true, dynsym, &[RelocSpec::new(0, 1, 21, 0)]);
    b.override_size(rela, u64::MAX);

    let outcome = decode(&b.build(), DecodeStage::RelocationsLoaded);
    assert_eq!(outcome.reached, DecodeStage::SymbolsLoaded);
    assert!(matches!(
        outcome.error,
        Some(ElfError::Truncated {
            needed: u64::MAX,
            ..
        })
    ));
    assert!(outcome.object.symbols.is_some());
}

#[test]
fn relocation_tables_are_keyed_by_rel_and_rela_sections_only() {
    let image = scenario::full(Width::W32, Order::Little, em::I386);
    let object = full_decode(&image);
    let sections = object.sections.as_ref().expect("sections");
    let relocations = object.relocations.as_ref().expect("relocations");

    let keyed: Vec<usize> = relocations.iter().map(|t| t.section_index).collect();
    let expected: Vec<usize> = sections.relocation_sections().map(|(i, _)| i).collect();
    assert_eq!(keyed, expected);
    assert_eq!(keyed.len(), 2);

    for (index, header, _) in sections.iter() {
        let table = relocations.get(index);
        assert_eq!(table.is_some(), header.is_relocation(), "section {index}");
    }
}

// ---------------------------------------------------------------------------
// 7. Classification and header failures
// ---------------------------------------------------------------------------

#[test]
fn unknown_class_and_encoding() {
    let mut image = scenario::stripped(Width::W64, Order::Little, em::X86_64);
    image[4] = 3;
    let outcome = decode(&image, DecodeStage::HeaderLoaded);
    assert_eq!(outcome.reached, DecodeStage::Unclassified);
    assert!(matches!(outcome.error, Some(ElfError::UnknownClass(3))));

    image[4] = 2;
    image[5] = 0;
    let outcome = decode(&image, DecodeStage::HeaderLoaded);
    assert!(matches!(outcome.error, Some(ElfError::UnknownEndianness(0))));
    assert!(outcome.error.as_ref().is_some_and(ElfError::is_fatal_for_run));
}

#[test]
fn undersized_ehsize_is_header_corrupt() {
    let image = ElfBuilder::new(Width::W64, Order::Little, em::X86_64)
        .override_ehsize(40)
        .build();
    let outcome = decode(&image, DecodeStage::RelocationsLoaded);
    assert_eq!(outcome.reached, DecodeStage::Classified);
    match outcome.error {
        Some(ElfError::HeaderCorrupt { reason }) => assert!(reason.contains("e_ehsize 40")),
        other => panic!("expected HeaderCorrupt, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 8. Determinism and sources
// ---------------------------------------------------------------------------

#[test]
fn rerunning_the_pipeline_is_deterministic() {
    let image = scenario::full(Width::W32, Order::Big, em::PPC);
    let first = full_decode(&image);
    let second = full_decode(&image);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("json"),
        serde_json::to_string(&second).expect("json")
    );
}

#[test]
fn file_source_matches_memory() {
    let image = scenario::full(Width::W64, Order::Little, em::AARCH64);
    let path = std::env::temp_dir().join(format!(
        "elfscope-pipeline-{}.o",
        std::process::id()
    ));
    std::fs::write(&path, &image).expect("write fixture");

    let file = FileSource::open(&path).expect("open fixture");
    assert_eq!(file.len(), image.len() as u64);
    let from_file = decode(&file, DecodeStage::RelocationsLoaded)
        .into_result()
        .expect("decode from file");
    let from_memory = full_decode(&image);
    let _ = std::fs::remove_file(&path);

    assert_eq!(from_file, from_memory);
}
