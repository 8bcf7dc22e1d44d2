//! Fuzz target for class names parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yolopost::classes::{resolve_label, ClassTable};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let table = ClassTable::from_names_str(content);
    for class_id in 0..=table.len() {
        let _ = resolve_label(Some(&table), class_id);
    }
});
