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
    let (target, query) = (formatter.target, formatter.query);
    let blocks = alignment.blocks();
    let core = Core::new(alignment, &blocks);

    // Identity comes from the ops, so wildcard pairs stay mismatches
    let (mut matches, mut mismatches, mut unknown) = (0usize, 0usize, 0usize);
    let (mut i, mut j) = (alignment.target().start, alignment.query().start);
    for step in alignment.steps() {
        let (op, len) = (*step.op(), *step.len());
        if op.is_diagonal() {
            for k in 0..len {
                if target.at(i + k).is_unknown() || query.at(j + k).is_unknown() {
                    unknown += 1;
                } else if op == Op::Match {
                    matches += 1;
                } else {
                    mismatches += 1;
                }
            }
        }
        op.apply(&mut i, &mut j, len);
    }

    // Only gaps between the first and the last aligned pair are inserts
    let (mut qinserts, mut qbases, mut tinserts, mut tbases) = (0usize, 0usize, 0usize, 0usize);
    let steps = alignment.steps();
    let diagonal = steps.iter().positions(|x| x.op().is_diagonal()).collect_vec();
    if let (Some(&first), Some(&last)) = (diagonal.first(), diagonal.last()) {
        for step in &steps[first..last] {
            match step.op() {
                Op::GapFirst => {
                    qinserts += 1;
                    qbases += *step.len();
                }
                Op::GapSecond => {
                    tinserts += 1;
                    tbases += *step.len();
                }
                Op::Match | Op::Mismatch => {}
            }
        }
    }

    let qlen = query.len();
    let (qstart, qend) = match alignment.strand() {
        Strand::Forward => core.query,
        Strand::Reverse => (qlen - core.query.1, qlen - core.query.0),
    };

    let sizes = blocks.iter().map(|x| format!("{},", x.len())).join("");
    let qstarts = blocks.iter().map(|x| format!("{},", x.query().start)).join("");
    let tstarts = blocks.iter().map(|x| format!("{},", x.target().start)).join("");

    [
        matches.to_string(),
        mismatches.to_string(),
        "0".to_string(),
        unknown.to_string(),
        qinserts.to_string(),
        qbases.to_string(),
        tinserts.to_string(),
        tbases.to_string(),
        alignment.strand().to_string(),
        formatter.query_name.to_string(),
        qlen.to_string(),
        qstart.to_string(),
        qend.to_string(),
        formatter.target_name.to_string(),
        target.len().to_string(),
        core.target.0.to_string(),
        core.target.1.to_string(),
        blocks.len().to_string(),
        sizes,
        qstarts,
        tstarts,
    ]
    .iter()
    .join("\t")
        + "\n"
}
