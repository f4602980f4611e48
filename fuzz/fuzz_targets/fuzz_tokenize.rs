#![no_main]

use calc_lexer::tokenize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let result = tokenize(source);

        // Every token's text is exactly the source slice its span covers
        for token in &result.tokens {
            let start = token.span.start as usize;
            let end = token.span.end as usize;
            assert_eq!(&source[start..end], token.text);
            assert!(!token.text.is_empty());
        }

        // The scan halts on the first unrecognized character
        assert!(result.errors.len() <= 1);
    }
});
