#![no_main]

use libfuzzer_sys::fuzz_target;
use motif_grover::matcher::{find_pattern_matches, find_pattern_matches_parallel};

fuzz_target!(|data: &[u8]| {
    // First byte picks the worker count, second the pattern length
    if data.len() < 2 {
        return;
    }
    let threads = (data[0] % 16) as usize;
    let pattern_len = (data[1] % 8) as usize;
    let rest = &data[2..];
    let split = pattern_len.min(rest.len());
    let (pattern, sequence) = rest.split_at(split);

    let serial = find_pattern_matches(sequence, pattern);
    let parallel = find_pattern_matches_parallel(sequence, pattern, threads)
        .expect("matcher workers should never fail on in-memory input");
    assert_eq!(serial, parallel);
});
