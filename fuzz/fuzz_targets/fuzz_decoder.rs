#![no_main]

use libfuzzer_sys::fuzz_target;

use braindog::{decode, Dialect};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // The permissive dialect never fails, whatever the input.
    let bark = decode(text, &Dialect::bark()).unwrap();
    assert!(bark.chars().all(|c| "+-><.,[]".contains(c)));
    // The strict dialect may reject, but must not panic, and any output is
    // drawn from the canonical alphabet.
    if let Ok(kq) = decode(text, &Dialect::kq()) {
        assert!(kq.chars().all(|c| "+-><.,[]".contains(c)));
    }
});
