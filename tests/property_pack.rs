//! Property tests for batch packing invariants
//!
//! Ensures packed batches satisfy the padding contract:
//! - Lengths never exceed the configured maxima
//! - Rows past an example's length keep their fill value
//! - Weights are exactly 1.0 where populated, 0.0 elsewhere
//! - Parsing is deterministic

use empacar::{ParserConfig, Record, TokenMode, UtteranceParser, TOKEN_PAD};
use proptest::collection::vec;
use proptest::prelude::*;

const FEATURES_LEN_MAX: usize = 6;
const TOKENS_LEN_MAX: usize = 4;

/// One generated example: a declared frame count, its flat feature values
/// (frame count times the shared width), and a token sequence.
#[derive(Debug, Clone)]
struct GenExample {
    features_len: usize,
    features: Vec<f32>,
    tokens: Vec<i64>,
}

impl GenExample {
    fn to_record_bytes(&self, index: usize) -> Vec<u8> {
        Record::new()
            .with_int64s("features_len", vec![self.features_len as i64])
            .with_floats("features", self.features.clone())
            .with_bytes("text", vec![format!("text-{index}").into_bytes()])
            .with_int64s("tokens", self.tokens.clone())
            .with_bytes("uttid", vec![format!("utt-{index}").into_bytes()])
            .to_bytes()
            .unwrap()
    }
}

/// Generate one example with the given feature width.
fn gen_example(width: usize) -> impl Strategy<Value = GenExample> {
    (1..=FEATURES_LEN_MAX, 0..=TOKENS_LEN_MAX).prop_flat_map(move |(frames, n_tokens)| {
        (
            vec(-100.0f32..100.0, frames * width),
            vec(0i64..500, n_tokens),
        )
            .prop_map(move |(features, tokens)| GenExample {
                features_len: frames,
                features,
                tokens,
            })
    })
}

/// Generate a batch sharing one feature width.
fn gen_batch() -> impl Strategy<Value = (usize, Vec<GenExample>)> {
    (1usize..5).prop_flat_map(|width| {
        (Just(width), vec(gen_example(width), 1..8))
    })
}

fn serialize_batch(examples: &[GenExample]) -> Vec<Vec<u8>> {
    examples
        .iter()
        .enumerate()
        .map(|(i, ex)| ex.to_record_bytes(i))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_lengths_within_bounds((width, examples) in gen_batch()) {
        let parser = UtteranceParser::new(ParserConfig::new(FEATURES_LEN_MAX, TOKENS_LEN_MAX));
        let batch = parser.parse_batch(&serialize_batch(&examples)).unwrap();

        prop_assert_eq!(batch.batch_size(), examples.len());
        prop_assert_eq!(batch.features_width(), width);
        for b in 0..examples.len() {
            prop_assert!(batch.features_len[b] as usize <= FEATURES_LEN_MAX);
            prop_assert!(batch.tokens_len[b] as usize <= TOKENS_LEN_MAX);
            prop_assert_eq!(batch.features_len[b] as usize, examples[b].features_len);
            prop_assert_eq!(batch.tokens_len[b] as usize, examples[b].tokens.len());
        }
    }

    #[test]
    fn prop_padding_beyond_lengths((width, examples) in gen_batch()) {
        let parser = UtteranceParser::new(ParserConfig::new(FEATURES_LEN_MAX, TOKENS_LEN_MAX));
        let batch = parser.parse_batch(&serialize_batch(&examples)).unwrap();

        for (b, ex) in examples.iter().enumerate() {
            for t in ex.features_len..FEATURES_LEN_MAX {
                for c in 0..width {
                    prop_assert_eq!(
                        batch.features[t][[b, c]],
                        0.0,
                        "feature pad dirty at slot {} row {}",
                        t,
                        b
                    );
                }
            }
            for s in ex.tokens.len()..TOKENS_LEN_MAX {
                prop_assert_eq!(batch.tokens[s][b], TOKEN_PAD);
                prop_assert_eq!(batch.tokens_weights[s][b], 0.0);
            }
        }
    }

    #[test]
    fn prop_populated_cells_match_input((width, examples) in gen_batch()) {
        let parser = UtteranceParser::new(ParserConfig::new(FEATURES_LEN_MAX, TOKENS_LEN_MAX));
        let batch = parser.parse_batch(&serialize_batch(&examples)).unwrap();

        for (b, ex) in examples.iter().enumerate() {
            for t in 0..ex.features_len {
                let row = batch.features[t].row(b);
                prop_assert_eq!(&row.to_vec()[..], &ex.features[t * width..(t + 1) * width]);
            }
            let count = ex.tokens.len() as i64;
            for s in 0..ex.tokens.len() {
                prop_assert_eq!(batch.tokens[s][b], count);
                prop_assert_eq!(batch.tokens_weights[s][b], 1.0);
            }
        }
    }

    #[test]
    fn prop_ids_mode_round_trips_tokens((_width, examples) in gen_batch()) {
        let config = ParserConfig::new(FEATURES_LEN_MAX, TOKENS_LEN_MAX)
            .token_mode(TokenMode::Ids);
        let parser = UtteranceParser::new(config);
        let batch = parser.parse_batch(&serialize_batch(&examples)).unwrap();

        for (b, ex) in examples.iter().enumerate() {
            for (s, &token) in ex.tokens.iter().enumerate() {
                prop_assert_eq!(batch.tokens[s][b], token);
            }
        }
    }

    #[test]
    fn prop_parse_is_deterministic((_width, examples) in gen_batch()) {
        let parser = UtteranceParser::new(ParserConfig::new(FEATURES_LEN_MAX, TOKENS_LEN_MAX));
        let bytes = serialize_batch(&examples);

        let first = parser.parse_batch(&bytes).unwrap();
        let second = parser.parse_batch(&bytes).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_oversized_example_aborts(
        (_width, examples) in gen_batch(),
        extra in 1usize..4,
    ) {
        // Shrink the configured bound below the longest example: the batch
        // must abort with an overflow, never truncate.
        let longest = examples.iter().map(|e| e.features_len).max().unwrap_or(1);
        prop_assume!(longest > extra);
        let config = ParserConfig::new(longest - extra, TOKENS_LEN_MAX);
        let parser = UtteranceParser::new(config);

        let err = parser.parse_batch(&serialize_batch(&examples)).unwrap_err();
        prop_assert!(err.is_overflow(), "expected overflow, got {:?}", err);
    }
}
