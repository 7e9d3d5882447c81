use biobit_alignment_rs::pairwise::alignment::{Alignment, Format, Formatter};
use biobit_alignment_rs::pairwise::AlignmentSet;
use biobit_core_rs::alignment::{Alignable, Symbol};

mod formats;
mod global;
mod overflow;

pub const EPSILON: f64 = 1e-9;

pub fn text<S, T, Q>(target: &T, query: &Q, alignment: &Alignment) -> String
where
    S: Symbol,
    T: Alignable<Symbol = S> + ?Sized,
    Q: Alignable<Symbol = S> + ?Sized,
{
    Formatter::new(target, query)
        .render(alignment, Format::Text)
        .unwrap()
}

/// Text views of all alignments in the enumeration order.
pub fn texts<S, T, Q>(target: &T, query: &Q, alignments: &AlignmentSet) -> Vec<String>
where
    S: Symbol,
    T: Alignable<Symbol = S> + ?Sized,
    Q: Alignable<Symbol = S> + ?Sized,
{
    alignments
        .iter()
        .map(|x| text(target, query, &x))
        .collect()
}

/// Reverse complement over the nucleotide alphabet extended with the B/V pair.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|x| match x {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            'B' => 'V',
            'V' => 'B',
            other => other,
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{actual} != {expected}"
    );
}
