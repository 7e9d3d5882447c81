use biobit_alignment_rs::pairwise::alignment::{Alignment, Format, Formatter};
use biobit_alignment_rs::pairwise::scoring::ScoringConfig;
use biobit_alignment_rs::pairwise::Aligner;
use biobit_core_rs::loc::Strand;

use super::assert_close;

struct Expected {
    text: &'static str,
    psl: &'static str,
    bed: &'static str,
    sam: &'static str,
}

fn single(aligner: &Aligner<u8>, target: &str, query: &str, strand: Strand) -> Alignment {
    let alignments = aligner.align_with_strand(target, query, strand).unwrap();
    assert_eq!(alignments.len().unwrap(), 1);
    alignments.get(0).unwrap()
}

fn check(target: &str, query: &str, alignment: &Alignment, expected: &Expected) {
    let formatter = Formatter::new(target, query);
    for (format, expected) in [
        (Format::Text, expected.text),
        (Format::Psl, expected.psl),
        (Format::Bed, expected.bed),
        (Format::Sam, expected.sam),
    ] {
        assert_eq!(formatter.render(alignment, format).unwrap(), expected);
    }
}

#[test]
fn test_transcript_to_chromosome() {
    let config = ScoringConfig::builder()
        .query_extend_gap_score(0.0)
        .unwrap()
        .query_open_gap_score(-3.0)
        .unwrap()
        .target_gap_score(-3.0)
        .unwrap()
        .end_gap_score(0.0)
        .unwrap()
        .mismatch_score(-1.0)
        .unwrap()
        .build()
        .unwrap();
    let aligner = Aligner::new(config);

    let chromosome =
        "ACGATCAGCGAGCATNGAGCACTACGACAGCGAGTGACCACTATTCGCGATCAGGAGCAGATACTTTACGAGCATCGGC";
    let transcript = "AGCATCGAGCGACTTGAGTACTATTCATACTTTCGAGC";
    let text = "\
ACGATCAGCGAGCATNGAGC-ACTACGACAGCGAGTGACCACTATTCGCGATCAGGAGCAGATACTTTACGAGCATCGGC
----------|||||.||||-|||-----------|||..|||||||--------------|||||||-|||||------
----------AGCATCGAGCGACT-----------TGAGTACTATTC--------------ATACTTT-CGAGC------
";

    let alignment = single(&aligner, chromosome, transcript, Strand::Forward);
    assert_close(*alignment.score(), 19.0);
    // The path spans both sequences, the aligned core is narrower
    assert_eq!(alignment.target(), &(0..79));
    assert_eq!(alignment.query(), &(0..38));
    assert_eq!(alignment.aligned()[0].first(), Some(&[10, 20]));
    assert_eq!(alignment.aligned()[0].last(), Some(&[68, 73]));
    check(
        chromosome,
        transcript,
        &alignment,
        &Expected {
            text,
            psl: "34\t2\t0\t1\t1\t1\t3\t26\t+\tquery\t38\t0\t38\ttarget\t79\t10\t73\t5\t10,3,12,7,5,\t0,11,14,26,33,\t10,20,34,60,68,\n",
            bed: "target\t10\t73\tquery\t19.0\t+\t10\t73\t0\t5\t10,3,12,7,5,\t0,10,24,50,58,\n",
            sam: "query\t0\ttarget\t11\t255\t10M1I3M11D12M14D7M1D5M\t*\t0\t0\tAGCATCGAGCGACTTGAGTACTATTCATACTTTCGAGC\t*\tAS:i:19\n",
        },
    );

    let alignment = single(&aligner, chromosome, transcript, Strand::Reverse);
    assert_close(*alignment.score(), 19.0);
    check(
        chromosome,
        transcript,
        &alignment,
        &Expected {
            text,
            psl: "34\t2\t0\t1\t1\t1\t3\t26\t-\tquery\t38\t0\t38\ttarget\t79\t10\t73\t5\t10,3,12,7,5,\t0,11,14,26,33,\t10,20,34,60,68,\n",
            bed: "target\t10\t73\tquery\t19.0\t-\t10\t73\t0\t5\t10,3,12,7,5,\t0,10,24,50,58,\n",
            sam: "query\t16\ttarget\t11\t255\t10M1I3M11D12M14D7M1D5M\t*\t0\t0\tAGCATCGAGCGACTTGAGTACTATTCATACTTTCGAGC\t*\tAS:i:19\n",
        },
    );
}

#[test]
fn test_free_end_gaps() {
    let config = ScoringConfig::builder()
        .gap_score(-1.0)
        .unwrap()
        .end_gap_score(0.0)
        .unwrap()
        .mismatch_score(-10.0)
        .unwrap()
        .build()
        .unwrap();
    let aligner = Aligner::new(config);
    let (target, query) = ("ACGTAGCATCAGC", "CCCCACGTAGCATCAGC");
    let text = "----ACGTAGCATCAGC\n----|||||||||||||\nCCCCACGTAGCATCAGC\n";

    let alignment = single(&aligner, target, query, Strand::Forward);
    assert_close(*alignment.score(), 13.0);
    check(
        target,
        query,
        &alignment,
        &Expected {
            text,
            psl: "13\t0\t0\t0\t0\t0\t0\t0\t+\tquery\t17\t4\t17\ttarget\t13\t0\t13\t1\t13,\t4,\t0,\n",
            bed: "target\t0\t13\tquery\t13.0\t+\t0\t13\t0\t1\t13,\t0,\n",
            sam: "query\t0\ttarget\t1\t255\t4S13M\t*\t0\t0\tCCCCACGTAGCATCAGC\t*\tAS:i:13\n",
        },
    );

    let alignment = single(&aligner, target, query, Strand::Reverse);
    assert_close(*alignment.score(), 13.0);
    check(
        target,
        query,
        &alignment,
        &Expected {
            text,
            psl: "13\t0\t0\t0\t0\t0\t0\t0\t-\tquery\t17\t0\t13\ttarget\t13\t0\t13\t1\t13,\t4,\t0,\n",
            bed: "target\t0\t13\tquery\t13.0\t-\t0\t13\t0\t1\t13,\t0,\n",
            sam: "query\t16\ttarget\t1\t255\t4S13M\t*\t0\t0\tCCCCACGTAGCATCAGC\t*\tAS:i:13\n",
        },
    );
}

#[test]
fn test_unknown_residues() {
    let config = ScoringConfig::builder()
        .gap_score(-10.0)
        .unwrap()
        .end_gap_score(0.0)
        .unwrap()
        .mismatch_score(-2.0)
        .unwrap()
        .wildcard(Some(b'N'))
        .build()
        .unwrap();
    let aligner = Aligner::new(config);
    let (target, query) = ("TTTTTNACGCTCGAGCAGCTACG", "ACGATCGAGCNGCTACGCCCNC");
    let text = "\
TTTTTNACGCTCGAGCAGCTACG-----
------|||.||||||.||||||-----
------ACGATCGAGCNGCTACGCCCNC
";

    let alignment = single(&aligner, target, query, Strand::Forward);
    assert_close(*alignment.score(), 13.0);
    check(
        target,
        query,
        &alignment,
        &Expected {
            text,
            psl: "15\t1\t0\t1\t0\t0\t0\t0\t+\tquery\t22\t0\t17\ttarget\t23\t6\t23\t1\t17,\t0,\t6,\n",
            bed: "target\t6\t23\tquery\t13.0\t+\t6\t23\t0\t1\t17,\t0,\n",
            sam: "query\t0\ttarget\t7\t255\t17M5S\t*\t0\t0\tACGATCGAGCNGCTACGCCCNC\t*\tAS:i:13\n",
        },
    );

    let alignment = single(&aligner, target, query, Strand::Reverse);
    assert_close(*alignment.score(), 13.0);
    check(
        target,
        query,
        &alignment,
        &Expected {
            text,
            psl: "15\t1\t0\t1\t0\t0\t0\t0\t-\tquery\t22\t5\t22\ttarget\t23\t6\t23\t1\t17,\t0,\t6,\n",
            bed: "target\t6\t23\tquery\t13.0\t-\t6\t23\t0\t1\t17,\t0,\n",
            sam: "query\t16\ttarget\t7\t255\t17M5S\t*\t0\t0\tACGATCGAGCNGCTACGCCCNC\t*\tAS:i:13\n",
        },
    );
}

#[test]
fn test_wildcard_pairs_in_psl() {
    let config = ScoringConfig::builder()
        .gap_score(-1.0)
        .unwrap()
        .wildcard(Some(b'?'))
        .build()
        .unwrap();
    let aligner = Aligner::new(config);
    let alignment = single(&aligner, "A?C", "A?C", Strand::Forward);
    assert_close(*alignment.score(), 2.0);
    check(
        "A?C",
        "A?C",
        &alignment,
        &Expected {
            text: "A?C\n|.|\nA?C\n",
            psl: "2\t1\t0\t0\t0\t0\t0\t0\t+\tquery\t3\t0\t3\ttarget\t3\t0\t3\t1\t3,\t0,\t0,\n",
            bed: "target\t0\t3\tquery\t2.0\t+\t0\t3\t0\t1\t3,\t0,\n",
            sam: "query\t0\ttarget\t1\t255\t3M\t*\t0\t0\tA?C\t*\tAS:i:2\n",
        },
    );
}

#[test]
fn test_custom_names_and_parsing() {
    let aligner = Aligner::new(ScoringConfig::<u8>::default());
    let alignment = single(&aligner, "ACGT", "ACGT", Strand::Forward);

    let bed = Formatter::new("ACGT", "ACGT")
        .with_names("chr1", "read")
        .render(&alignment, "bed".parse().unwrap())
        .unwrap();
    assert_eq!(bed, "chr1\t0\t4\tread\t4.0\t+\t0\t4\t0\t1\t4,\t0,\n");

    assert_eq!("".parse::<Format>().unwrap(), Format::Text);
    assert_eq!("SAM".parse::<Format>().unwrap(), Format::Sam);
    assert!("fasta".parse::<Format>().is_err());

    // Sequences must match the ones that were aligned
    assert!(Formatter::new("ACG", "ACGT")
        .render(&alignment, Format::Text)
        .is_err());
}
