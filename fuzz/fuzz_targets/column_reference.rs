#![no_main]

use libfuzzer_sys::fuzz_target;
use tabledesc::{FamilyDescriptor, FamilyOptions, TableDescriptor};

// Fuzz target for family lookup by qualified column.
// The first byte picks a split point: the prefix becomes a family name and
// the whole input is then looked up as a column reference.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let split = 1 + (data[0] as usize) % (data.len() - 1);
    let family = &data[1..split.max(2)];
    let column = &data[1..];

    let mut desc = TableDescriptor::new("fuzz").expect("legal name");
    if desc
        .add_family(FamilyDescriptor::new(family, FamilyOptions::default()))
        .is_err()
    {
        return;
    }

    let found = desc.has_family(column);
    assert_eq!(found, desc.family(column).is_some());

    // A column that starts with a delimiter-free family name followed by ':'
    // always resolves to that family.
    if !family.contains(&b':') && column.len() > family.len() && column[family.len()] == b':' {
        assert!(found);
    }
});
