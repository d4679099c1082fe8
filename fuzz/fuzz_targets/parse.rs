#![no_main]

use libfuzzer_sys::fuzz_target;
use rfront::{ParserConfig, parse_with_config, tokenize};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The token stream must always reproduce the input
        let rebuilt: String = tokenize(s).iter().map(|t| t.contents.as_str()).collect();
        assert_eq!(rebuilt, s);

        // Parsing must terminate without panicking, with a small depth limit to exercise degradation too
        let _ = parse_with_config(s, ParserConfig::default());
        let _ = parse_with_config(s, ParserConfig::new().with_max_depth(8));
    }
});
