use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use taglight::{AnnotatorConfig, Color, OffsetEncoding, StyledText, Token, annotate};

const ALPHABET: &[&str] = &[
    "#", "@", "a", "b", "z", "_", "7", " ", " ", "\n", ".", ",", "é", "日", "😀", "-", "!",
];

fn random_text(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn configs() -> Vec<AnnotatorConfig> {
    let colored = AnnotatorConfig::new()
        .with_base_color(Color::BLACK)
        .with_hashtag_color(Color::rgb(0, 0, 255))
        .with_mention_color(Color::rgb(255, 0, 0));
    vec![
        AnnotatorConfig::new(),
        colored.clone(),
        colored.with_encoding(OffsetEncoding::Utf16),
    ]
}

fn assert_contiguous_indices(tokens: &[Token]) {
    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(token.display_index, i);
    }
}

#[test]
fn test_random_text_invariants() {
    let mut rng = StdRng::seed_from_u64(0x7a91_16b7);

    for _ in 0..500 {
        let text = random_text(&mut rng, 40);
        for config in configs() {
            let result = annotate(&text, &config);

            assert_contiguous_indices(result.hashtags());
            assert_contiguous_indices(result.mentions());

            let all: Vec<&Token> = result.tokens().collect();
            for pair in all.windows(2) {
                assert!(
                    pair[0].range.end <= pair[1].range.start,
                    "overlapping tokens in {text:?}: {:?} / {:?}",
                    pair[0],
                    pair[1]
                );
            }

            for token in &all {
                assert!(!token.range.is_empty());
                assert!(token.range.end <= result.len());
                assert!(!token.value.is_empty());
                for offset in token.range.start..token.range.end {
                    assert_eq!(result.resolve(offset), Some(*token));
                }
            }

            let segments = result.styled().segments();
            let mut cursor = 0;
            for segment in &segments {
                assert_eq!(segment.range.start, cursor);
                assert!(segment.range.end > segment.range.start);
                cursor = segment.range.end;
            }
            assert_eq!(cursor, result.len());
        }
    }
}

#[test]
fn test_text_without_markers_gets_base_styling_only() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let text: String = random_text(&mut rng, 30)
            .chars()
            .filter(|c| *c != '#' && *c != '@')
            .collect();
        for config in configs() {
            let result = annotate(&text, &config);
            assert!(result.hashtags().is_empty());
            assert!(result.mentions().is_empty());
            assert_eq!(
                result.styled(),
                &StyledText::plain(config.encoding.measure(&text), config.base_attributes())
            );
        }
    }
}

#[test]
fn test_annotate_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let text = random_text(&mut rng, 40);
        for config in configs() {
            assert_eq!(annotate(&text, &config), annotate(&text, &config));
        }
    }
}

#[test]
fn test_restricted_mode_never_scans_markers() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        let text = format!("@team {}", random_text(&mut rng, 30));
        let config = AnnotatorConfig::new()
            .with_hashtag_color(Color::BLACK)
            .with_restricted_prefix("@team");
        let result = annotate(&text, &config);

        assert!(result.hashtags().is_empty());
        assert!(result.mentions().is_empty());
        assert_eq!(result.token_count(), 1);
    }
}
