//! Integration tests for tokenizer and extractor properties.

use miniparse::prelude::*;

const SAMPLES: &[&str] = &[
    "",
    "a",
    "abc123",
    "Hello, World!  How's it going?\n",
    "a##b ~~ c@@d",
    "café naïve résumé €42 😀 λx.x",
    "\t\r\n",
    "version 3.5 released. Visit https://example.com/path?a=1 now",
    "tabs\tand\u{0}control\u{7f}chars",
];

fn all_configs() -> Vec<TokenizerConfig> {
    let mut configs = Vec::new();
    for lowercase in [true, false] {
        for merge_symbols in [true, false] {
            configs.push(TokenizerConfig {
                lowercase,
                merge_symbols,
            });
        }
    }
    configs
}

#[test]
fn test_tokens_partition_text() {
    for config in all_configs() {
        for text in SAMPLES {
            let tokens = tokenize(text, &config);

            let mut expected_start = 0;
            for token in &tokens {
                assert_eq!(token.start, expected_start, "gap or overlap in {text:?}");
                assert!(token.end > token.start, "empty token in {text:?}");
                expected_start = token.end;
            }
            assert_eq!(expected_start, text.len());

            let rebuilt: String = tokens.iter().map(|t| &text[t.start..t.end]).collect();
            assert_eq!(&rebuilt, text);
        }
    }
}

#[test]
fn test_adjacent_tokens_differ_unless_symbols() {
    for text in SAMPLES {
        let tokens = tokenize(text, &TokenizerConfig::default());
        for pair in tokens.windows(2) {
            assert!(
                pair[0].token_type != pair[1].token_type
                    || pair[0].token_type == TokenType::Symbol,
                "unmerged run in {text:?}"
            );
        }
    }
}

#[test]
fn test_classification_boundary() {
    let tokens = tokenize("abc123", &TokenizerConfig::default());
    assert_eq!(
        tokens,
        vec![
            Token::new("abc", TokenType::Word, 0, 3),
            Token::new("123", TokenType::Number, 3, 6),
        ]
    );
}

#[test]
fn test_symbol_merging_policy() {
    let split = tokenize("a$%b", &TokenizerConfig::default());
    let values: Vec<_> = split.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["a", "$", "%", "b"]);

    let merged = tokenize("a$%b", &TokenizerConfig::default().with_merge_symbols(true));
    let values: Vec<_> = merged.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["a", "$%", "b"]);
    assert_eq!(merged[1].token_type, TokenType::Symbol);
}

#[test]
fn test_lowercase_preserves_offsets() {
    let text = "ÀB Cd";
    let tokens = tokenize(text, &TokenizerConfig::default());
    assert_eq!(tokens[0].value, "àb");
    assert_eq!(&text[tokens[0].start..tokens[0].end], "ÀB");
}

fn entities_of(text: &str, kind: EntityType) -> Vec<Entity> {
    extract(IntentResult::new(text, Vec::new()))
        .entities
        .into_iter()
        .filter(|e| e.entity_type == kind)
        .collect()
}

#[test]
fn test_email_extraction() {
    let emails = entities_of("contact me at jane.doe@example.com please", EntityType::Email);
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].value, "jane.doe@example.com");
}

#[test]
fn test_url_boundary() {
    let text = "see https://example.com/path?a=1 now";
    let urls = entities_of(text, EntityType::Url);
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].value, "https://example.com/path?a=1");
    assert_eq!(&text[urls[0].end..urls[0].end + 1], " ");
}

#[test]
fn test_decimal_disambiguation() {
    let numbers = entities_of("version 3.5 released.", EntityType::Number);
    let values: Vec<_> = numbers.iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["3.5"]);
}

#[test]
fn test_phone_heuristic_boundary() {
    assert!(entities_of("call 123456789", EntityType::Phone).is_empty());

    for phone in ["1234567890", "123-456-7890", "123.456.7890", "123456789012345"] {
        let text = format!("call {phone} now");
        let phones = entities_of(&text, EntityType::Phone);
        assert_eq!(phones.len(), 1, "{phone}");
        assert_eq!(phones[0].value, phone);
        assert_eq!(phones[0].start, 5);
    }
}

#[test]
fn test_overlapping_entities_surface() {
    let result = extract(IntentResult::new("5551234567", Vec::new()));
    let kinds: Vec<_> = result.entities.iter().map(|e| e.entity_type.clone()).collect();
    assert_eq!(kinds, vec![EntityType::Phone, EntityType::Number]);
    assert!(result.entities[0].overlaps(&result.entities[1]));
}

#[test]
fn test_entity_offsets_match_text() {
    let text = "Ping a@b.io, a@b.io again; https://x.io/a http://y.org 1.5 and 2";
    let result = extract(IntentResult::new(text, Vec::new()));

    assert!(!result.entities.is_empty());
    for entity in &result.entities {
        assert_eq!(&text[entity.start..entity.end], entity.value);
    }
}

#[test]
fn test_extraction_is_total() {
    let long = "x".repeat(10_000);
    for text in ["", ".", "@", "http://", "https://", "....", long.as_str()] {
        let result = extract(IntentResult::new(text, Vec::new()));
        assert_eq!(result.text(), text);
    }
}
