use cartc_lex::{Lexer, Token, TokenKind, Version};
use proptest::prelude::*;

/// Source fragments that lex back to exactly their own text.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[0-9]{1,6}",
        "[0-9]{1,3}\\.[0-9]{1,3}",
        "0x[0-9a-f]{1,4}",
        "[ \t]{1,3}",
        Just("+=".to_string()),
        Just("..".to_string()),
        Just("~=".to_string()),
        Just("!=".to_string()),
        Just("<=".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just(",".to_string()),
        Just("::top::".to_string()),
    ]
}

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.join(" "))
}

fn joined(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn never_panics(s in ".*", version in 0u32..10) {
        let mut lexer = Lexer::new(Version(version));
        let _ = lexer.process_line(&s);
        let _ = lexer.finish();
    }

    #[test]
    fn plain_lines_are_lossless(lines in prop::collection::vec(line(), 1..6)) {
        let source: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let tokens = Lexer::tokenize(&source, Version::CURRENT).unwrap();
        prop_assert_eq!(joined(&tokens), source);
    }

    #[test]
    fn tokens_are_never_empty(lines in prop::collection::vec(line(), 1..6)) {
        let mut lexer = Lexer::new(Version::CURRENT);
        lexer.process_lines(&lines).unwrap();
        for token in lexer.tokens() {
            prop_assert!(!token.is_empty(), "empty token {}", token);
        }
    }

    #[test]
    fn space_never_holds_line_breaks(lines in prop::collection::vec(line(), 1..6)) {
        let source = lines.join("\r\n");
        let tokens = Lexer::tokenize(&source, Version::CURRENT).unwrap();
        for token in &tokens {
            if token.matches(TokenKind::Space) {
                prop_assert!(!token.text().contains(&['\n', '\r'][..]));
            }
        }
    }

    #[test]
    fn positions_never_go_backwards(lines in prop::collection::vec(line(), 1..6)) {
        let mut lexer = Lexer::new(Version::CURRENT);
        lexer.process_lines(&lines).unwrap();
        let positions: Vec<_> = lexer.tokens().iter().map(Token::position).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lexing_is_deterministic(s in "[ -~]{0,40}") {
        let first = Lexer::tokenize(&s, Version::CURRENT);
        let second = Lexer::tokenize(&s, Version::CURRENT);
        prop_assert_eq!(first, second);
    }
}
