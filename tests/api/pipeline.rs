//! tests/api/pipeline.rs
use crate::helpers::setup_tracing;
use claims::{assert_matches, assert_ok};
use std::collections::BTreeSet;
use wordfreq::error::PipelineError;
use wordfreq::pipeline::{top_words, Pipeline};
use wordfreq::tokenizer::tokenize;

#[tokio::test]
async fn should_rank_the_most_frequent_words_first() {
    setup_tracing();
    let ranked = assert_ok!(top_words("the cat sat on the mat the cat ran", 2).await);
    let as_pairs: Vec<_> = ranked.iter().map(|e| (e.word(), e.total())).collect();
    assert_eq!(as_pairs, vec![("the", 3), ("cat", 2)]);
}

#[tokio::test]
async fn should_keep_case_variants_distinct() {
    setup_tracing();
    let ranked = assert_ok!(top_words("A a A", 2).await);
    let as_pairs: Vec<_> = ranked.iter().map(|e| (e.word(), e.total())).collect();
    assert_eq!(as_pairs, vec![("A", 2), ("a", 1)]);
}

#[tokio::test]
async fn should_strip_punctuation_and_break_ties_lexicographically() {
    setup_tracing();
    let ranked = assert_ok!(top_words("Hello, world! Hello world.", 2).await);
    let as_pairs: Vec<_> = ranked.iter().map(|e| (e.word(), e.total())).collect();
    assert_eq!(as_pairs, vec![("Hello", 2), ("world", 2)]);
}

#[tokio::test]
async fn should_reject_a_zero_top_n_before_doing_any_work() {
    setup_tracing();
    let result = top_words("some text", 0).await;
    assert_matches!(result, Err(PipelineError::InvalidTopN(0)));
}

#[tokio::test]
async fn should_return_an_empty_ranking_for_empty_text() {
    setup_tracing();
    let ranked = assert_ok!(top_words("", 5).await);
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn should_return_all_words_when_top_n_exceeds_the_distinct_count() {
    setup_tracing();
    let ranked = assert_ok!(top_words("one two two", 50).await);
    assert_eq!(ranked.len(), 2);
}

#[tokio::test]
async fn should_conserve_the_token_count_across_the_pipeline() {
    setup_tracing();
    let text = "It was a bright cold day in April, and the clocks were \
                striking thirteen. It was a bright cold day.";
    let token_count = tokenize(text).len() as u64;
    let ranked = assert_ok!(top_words(text, usize::MAX).await);
    let total: u64 = ranked.iter().map(|e| e.total()).sum();
    assert_eq!(total, token_count);
}

#[tokio::test]
async fn should_rank_every_distinct_token_exactly_once() {
    setup_tracing();
    let text = "to be or not to be that is the question";
    let distinct: BTreeSet<_> = tokenize(text).into_iter().collect();
    let ranked = assert_ok!(top_words(text, usize::MAX).await);
    let ranked_words: BTreeSet<_> = ranked.iter().map(|e| e.word().to_string()).collect();
    assert_eq!(ranked.len(), distinct.len());
    assert_eq!(ranked_words, distinct);
}

#[tokio::test]
async fn should_produce_identical_output_on_repeated_runs() {
    setup_tracing();
    let text = "tie one tie two one two tie one";
    let first = assert_ok!(top_words(text, 10).await);
    let second = assert_ok!(top_words(text, 10).await);
    assert_eq!(first, second);
}

#[tokio::test]
async fn should_produce_the_same_ranking_for_any_worker_count() {
    setup_tracing();
    let text = "the quick brown fox jumps over the lazy dog the fox";
    let single = assert_ok!(Pipeline::new(1).run(text, 5).await);
    let many = assert_ok!(Pipeline::new(16).run(text, 5).await);
    assert_eq!(single, many);
}
