use biobit_alignment_rs::pairwise::scoring::{ScoringConfig, SubstitutionMatrix};
use biobit_alignment_rs::pairwise::{AlignError, Aligner};
use biobit_core_rs::loc::Strand;

use super::{assert_close, reverse_complement, text, texts};

#[test]
fn test_needleman_wunsch() {
    let aligner = Aligner::new(ScoringConfig::<u8>::default());
    assert_eq!(aligner.algorithm_name(), "Needleman-Wunsch");

    let (target, query) = ("GAACT", "GAT");
    assert_close(aligner.score(target, query).unwrap(), 3.0);

    let alignments = aligner.align(target, query).unwrap();
    assert_eq!(alignments.len().unwrap(), 2);
    assert_eq!(
        texts(target, query, &alignments),
        vec!["GAACT\n||--|\nGA--T\n", "GAACT\n|-|-|\nG-A-T\n"]
    );

    let first = alignments.get(0).unwrap();
    assert_close(*first.score(), 3.0);
    assert_eq!(
        first.aligned(),
        [vec![[0, 2], [4, 5]], vec![[0, 2], [2, 3]]]
    );
    let second = alignments.get(1).unwrap();
    assert_eq!(
        second.aligned(),
        [vec![[0, 1], [2, 3], [4, 5]], vec![[0, 1], [1, 2], [2, 3]]]
    );

    // The query is reverse-complemented by the caller before the reverse-strand run
    let original = reverse_complement(query);
    let computational = reverse_complement(&original);
    assert_close(
        aligner
            .score_with_strand(target, computational.as_str(), Strand::Reverse)
            .unwrap(),
        3.0,
    );
    let alignments = aligner
        .align_with_strand(target, computational.as_str(), Strand::Reverse)
        .unwrap();
    assert_eq!(alignments.len().unwrap(), 2);
    assert_eq!(
        texts(target, computational.as_str(), &alignments),
        vec!["GAACT\n||--|\nGA--T\n", "GAACT\n|-|-|\nG-A-T\n"]
    );
    assert_eq!(
        alignments.get(0).unwrap().aligned(),
        [vec![[0, 2], [4, 5]], vec![[3, 1], [1, 0]]]
    );
}

#[test]
fn test_unicode_characters() {
    let aligner = Aligner::new(ScoringConfig::<char>::default());
    let target: Vec<char> = "ĞĀĀČŦ".chars().collect();
    let query: Vec<char> = "ĞĀŦ".chars().collect();

    assert_close(aligner.score(&target, &query).unwrap(), 3.0);
    let alignments = aligner.align(&target, &query).unwrap();
    assert_eq!(alignments.len().unwrap(), 2);
    assert_eq!(
        texts(&target, &query, &alignments),
        vec!["ĞĀĀČŦ\n||--|\nĞĀ--Ŧ\n", "ĞĀĀČŦ\n|-|-|\nĞ-Ā-Ŧ\n"]
    );
}

#[test]
fn test_wildcard_scores_zero() {
    let config = ScoringConfig::builder()
        .gap_score(-1.0)
        .unwrap()
        .mismatch_score(-1.0)
        .unwrap()
        .wildcard(Some(b'?'))
        .build()
        .unwrap();
    let aligner = Aligner::new(config);

    let alignments = aligner.align("GACT", "GA?T").unwrap();
    assert_close(alignments.score(), 3.0);
    assert_eq!(alignments.len().unwrap(), 1);
    assert_eq!(texts("GACT", "GA?T", &alignments), vec!["GACT\n||.|\nGA?T\n"]);

    let alignments = aligner
        .align_with_strand("GACT", "GA?T", Strand::Reverse)
        .unwrap();
    assert_close(alignments.score(), 3.0);
    assert_eq!(alignments.len().unwrap(), 1);

    // Without a wildcard the same column is an ordinary mismatch
    let aligner = Aligner::new(aligner.config().to_builder().wildcard(None).build().unwrap());
    let alignments = aligner.align("GACT", "GAXT").unwrap();
    assert_close(alignments.score(), 2.0);
    assert_eq!(texts("GACT", "GAXT", &alignments), vec!["GACT\n||.|\nGAXT\n"]);
}

#[test]
fn test_wildcard_with_free_gaps() {
    let config = ScoringConfig::builder()
        .wildcard(Some(b'?'))
        .build()
        .unwrap();
    let aligner = Aligner::new(config);
    let (target, query) = ("GA?AT", "GAA?T");

    assert_close(aligner.score(target, query).unwrap(), 4.0);
    let alignments = aligner.align(target, query).unwrap();
    assert_eq!(alignments.len().unwrap(), 1);

    let alignment = alignments.get(0).unwrap();
    assert_eq!(
        text(target, query, &alignment),
        "GA?A-T\n||-|-|\nGA-A?T\n"
    );
    assert_eq!(
        alignment.aligned(),
        [
            vec![[0, 2], [3, 4], [4, 5]],
            vec![[0, 2], [2, 3], [4, 5]]
        ]
    );

    let alignments = aligner
        .align_with_strand(target, query, Strand::Reverse)
        .unwrap();
    assert_eq!(alignments.len().unwrap(), 1);
    let alignment = alignments.get(0).unwrap();
    assert_eq!(
        text(target, query, &alignment),
        "GA?A-T\n||-|-|\nGA-A?T\n"
    );
    assert_eq!(
        alignment.aligned(),
        [
            vec![[0, 2], [3, 4], [4, 5]],
            vec![[5, 3], [3, 2], [1, 0]]
        ]
    );
}

#[test]
fn test_integer_sequences() {
    let config = ScoringConfig::builder()
        .wildcard(Some(99i32))
        .match_score(3.0)
        .unwrap()
        .mismatch_score(-2.0)
        .unwrap()
        .gap_score(-10.0)
        .unwrap()
        .build()
        .unwrap();
    let aligner = Aligner::new(config);

    let target = [1i32, 5, 6];
    assert_close(aligner.score(&target, &[1, 8, 6]).unwrap(), 4.0);
    // 99 is the wildcard and scores zero against 6
    assert_close(aligner.score(&target, &[1, 8, 99]).unwrap(), 1.0);
    assert_close(aligner.score(&target, &[1, 28, 6]).unwrap(), 4.0);

    // Symbols index the matrix directly
    let matrix = (0..10)
        .map(|row| (0..10).map(|col| if row == col { 5.0 } else { 0.0 }).collect())
        .collect();
    let aligner = Aligner::new(
        aligner
            .config()
            .to_builder()
            .substitution_matrix(SubstitutionMatrix::new(matrix).unwrap())
            .build()
            .unwrap(),
    );
    assert_close(aligner.score(&target, &[1, 8, 6]).unwrap(), 10.0);

    let err = aligner.score(&target, &[1, 8, -6]).unwrap_err();
    assert_eq!(err.to_string(), "sequence item 2 is negative (-6)");
    assert!(matches!(
        err.downcast_ref::<AlignError>(),
        Some(AlignError::Input(_))
    ));
    assert_eq!(
        aligner.score(&target, &[1, 28, 6]).unwrap_err().to_string(),
        "sequence item 1 is out of bound (28, should be < 10)"
    );
    // The wildcard has no special meaning for matrices
    assert_eq!(
        aligner.score(&target, &[1, 8, 99]).unwrap_err().to_string(),
        "sequence item 2 is out of bound (99, should be < 10)"
    );
}

#[test]
fn test_three_letter_amino_acids() {
    let alphabet = vec![
        "Ala", "Arg", "Asn", "Asp", "Cys", "Gln", "Glu", "Gly", "His", "Ile", "Leu", "Lys", "Met",
        "Phe", "Pro", "Ser", "Thr", "Trp", "Tyr", "Val",
    ];
    let config = ScoringConfig::builder().alphabet(alphabet).unwrap().build().unwrap();
    let aligner = Aligner::new(config);

    let target = vec!["Gly", "Ala", "Thr"];
    let query = vec!["Gly", "Ala", "Ala", "Cys", "Thr"];
    assert_close(aligner.score(&target, &query).unwrap(), 3.0);
    let alignments = aligner.align(&target, &query).unwrap();
    assert_eq!(
        texts(&target, &query, &alignments),
        vec![
            "Gly Ala --- --- Thr\n||| ||| --- --- |||\nGly Ala Ala Cys Thr\n",
            "Gly --- Ala --- Thr\n||| --- ||| --- |||\nGly Ala Ala Cys Thr\n",
        ]
    );

    let target = vec!["Pro", "Pro", "Gly", "Ala", "Thr"];
    let query = vec!["Gly", "Ala", "Ala", "Cys", "Thr", "Asn", "Asn"];
    let alignments = aligner.align(&target, &query).unwrap();
    assert_close(alignments.score(), 3.0);
    assert_eq!(
        texts(&target, &query, &alignments),
        vec![
            "Pro Pro Gly Ala --- --- Thr --- ---\n\
             --- --- ||| ||| --- --- ||| --- ---\n\
             --- --- Gly Ala Ala Cys Thr Asn Asn\n",
            "Pro Pro Gly --- Ala --- Thr --- ---\n\
             --- --- ||| --- ||| --- ||| --- ---\n\
             --- --- Gly Ala Ala Cys Thr Asn Asn\n",
        ]
    );
}
