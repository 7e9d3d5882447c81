use itertools::Itertools;

use biobit_core_rs::alignment::{Alignable, Symbol};
use biobit_core_rs::loc::Strand;

use super::{Core, Formatter};
use crate::pairwise::alignment::{Alignment, Op};

pub(super) fn render<S, T, Q>(formatter: &Formatter<'_, T, Q>, alignment: &Alignment) -> String
where
    S: Symbol,
    T: Alignable<Symbol = S> + ?Sized,
    Q: Alignable<Symbol = S> + ?Sized,
{
    let query = formatter.query;
    let blocks = alignment.blocks();
    let core = Core::new(alignment, &blocks);

    let flag = match alignment.strand() {
        Strand::Forward => 0,
        Strand::Reverse => 16,
    };

    let (position, cigar) = if blocks.is_empty() {
        (0, "*".to_string())
    } else {
        // Query symbols outside of the aligned core are soft-clipped, target overhangs shift
        // the position instead
        let mut cigar: Vec<(char, usize)> = Vec::new();
        if core.query.0 > 0 {
            cigar.push(('S', core.query.0));
        }

        let steps = alignment.steps();
        let first = steps.iter().position(|x| x.op().is_diagonal()).unwrap_or(0);
        let last = steps.iter().rposition(|x| x.op().is_diagonal()).unwrap_or(0);
        for step in &steps[first..=last] {
            let op = match step.op() {
                Op::Match | Op::Mismatch => 'M',
                Op::GapFirst => 'I',
                Op::GapSecond => 'D',
            };
            match cigar.last_mut() {
                Some((last, len)) if *last == op => *len += *step.len(),
                _ => cigar.push((op, *step.len())),
            }
        }

        let clipped = query.len() - core.query.1;
        if clipped > 0 {
            cigar.push(('S', clipped));
        }

        let cigar = cigar
            .into_iter()
            .map(|(op, len)| format!("{len}{op}"))
            .join("");
        (core.target.0 + 1, cigar)
    };

    let sequence = (0..query.len()).map(|x| query.at(x).label()).join("");

    [
        formatter.query_name.to_string(),
        flag.to_string(),
        formatter.target_name.to_string(),
        position.to_string(),
        "255".to_string(),
        cigar,
        "*".to_string(),
        "0".to_string(),
        "0".to_string(),
        sequence,
        "*".to_string(),
        format!("AS:i:{}", alignment.score().round() as i64),
    ]
    .iter()
    .join("\t")
        + "\n"
}
