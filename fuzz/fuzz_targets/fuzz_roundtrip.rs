#![no_main]

use libfuzzer_sys::fuzz_target;

use braindog::{decode, encode, Dialect};
use braindog_fuzz::opcode_string;

fuzz_target!(|data: &[u8]| {
    let code = opcode_string(data);
    for dialect in [Dialect::bark(), Dialect::kq()] {
        let encoded = encode(&code, &dialect).unwrap();
        assert_eq!(decode(&encoded, &dialect).unwrap(), code);
    }
});
