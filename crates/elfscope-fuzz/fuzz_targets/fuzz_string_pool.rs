#![no_main]
use libfuzzer_sys::fuzz_target;

use elfscope_core::elf::StringPool;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let offset = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let pool = StringPool::new(data[4..].to_vec());

    if let Ok(name) = pool.resolve(offset) {
        // A resolved name ends at a NUL inside the pool.
        let start = offset as usize;
        assert!(start + name.len() <= pool.len() || name.contains('\u{fffd}'));
    }
});
