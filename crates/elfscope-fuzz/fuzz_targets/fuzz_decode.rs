#![no_main]
use libfuzzer_sys::fuzz_target;

use elfscope_core::{DecodeStage, decode};

fuzz_target!(|data: &[u8]| {
    let outcome = decode(data, DecodeStage::RelocationsLoaded);

    // A failure never discards completed stages.
    let object = &outcome.object;
    if outcome.reached >= DecodeStage::HeaderLoaded {
        assert!(object.header.is_some());
    }
    if let Some(relocations) = &object.relocations {
        let symbols = object.symbols.as_ref().expect("symbols precede relocations");
        for table in relocations.iter() {
            let symtab = symbols.table(table.symbol_table);
            for entry in &table.entries {
                assert!(entry.symbol_index == 0 || (entry.symbol_index as usize) < symtab.len());
            }
        }
    }

    // Decoding is deterministic.
    let again = decode(data, DecodeStage::RelocationsLoaded);
    assert_eq!(again.reached, outcome.reached);
    assert_eq!(again.object, outcome.object);
});
