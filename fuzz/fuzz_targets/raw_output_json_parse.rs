//! Fuzz target for raw output JSON parsing and decoding.
//!
//! This fuzzer feeds arbitrary byte sequences to the raw output parser and
//! decodes whatever parses, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yolopost::tensor::io_json::fuzz_decode_json;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = fuzz_decode_json(data);
});
