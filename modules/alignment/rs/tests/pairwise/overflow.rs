use biobit_alignment_rs::pairwise::scoring::ScoringConfig;
use biobit_alignment_rs::pairwise::{AlignError, Aligner};

use super::{assert_close, text};

#[test]
fn test_count_overflow() {
    let aligner = Aligner::new(ScoringConfig::<u8>::default());
    let (target, query) = ("A".repeat(40), "C".repeat(40));

    // Every path through the matrix scores zero
    let alignments = aligner.align(&target, &query).unwrap();
    assert_close(alignments.score(), 0.0);
    assert!(!alignments.is_empty());

    let err = alignments.len().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("number of optimal alignments is larger than {}", usize::MAX)
    );
    assert_eq!(err.downcast_ref::<AlignError>(), Some(&AlignError::Overflow));

    // Individual alignments are still addressable
    let first = alignments.get(0).unwrap();
    let expected = format!(
        "{}{}\n{}\n{}{}\n",
        "A".repeat(40),
        "-".repeat(40),
        "-".repeat(80),
        "-".repeat(40),
        "C".repeat(40)
    );
    assert_eq!(text(&target, &query, &first), expected);
    assert_eq!(first.rle(), "40^40v");

    let second = alignments.get(1).unwrap();
    assert_ne!(second, first);
    assert_close(*second.score(), 0.0);
}

#[test]
fn test_small_counts() {
    let aligner = Aligner::new(ScoringConfig::<u8>::default());
    let alignments = aligner.align("AA", "CC").unwrap();
    assert_eq!(alignments.len().unwrap(), 13);
    assert_eq!(alignments.iter().count(), 13);

    // Enumeration order is stable
    let first = alignments.iter().map(|x| x.rle()).collect::<Vec<_>>();
    let second = (&alignments).into_iter().map(|x| x.rle()).collect::<Vec<_>>();
    assert_eq!(first, second);
}
