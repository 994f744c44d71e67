#![no_main]

use libfuzzer_sys::fuzz_target;
use tabledesc::TableDescriptor;

// Fuzz target for TableDescriptor decoding.
// Arbitrary input must either fail cleanly or decode to a descriptor that
// re-encodes and decodes to an equal one.
fuzz_target!(|data: &[u8]| {
    let desc = match TableDescriptor::decode(data) {
        Ok(desc) => desc,
        Err(_) => return,
    };

    let encoded = desc.encode();

    let decoded = TableDescriptor::decode(&encoded).expect("re-encoded descriptor must decode");
    assert_eq!(decoded, desc, "descriptor changed across re-encode");
    assert_eq!(decoded.hash_code(), desc.hash_code());
});
