use std::borrow::Cow;

use itertools::Itertools;

use biobit_core_rs::alignment::{Alignable, Symbol};

use crate::pairwise::alignment::{Alignment, Op};

enum Cell<'a> {
    Symbol(Cow<'a, str>),
    Blank,
    Fill(char),
}

pub(super) fn render<S, T, Q>(target: &T, query: &Q, alignment: &Alignment) -> String
where
    S: Symbol,
    T: Alignable<Symbol = S> + ?Sized,
    Q: Alignable<Symbol = S> + ?Sized,
{
    let tlabels = (0..target.len()).map(|x| target.at(x).label()).collect_vec();
    let qlabels = (0..query.len()).map(|x| query.at(x).label()).collect_vec();
    let width = tlabels
        .iter()
        .chain(qlabels.iter())
        .map(|x| x.chars().count())
        .max()
        .unwrap_or(1);

    let mut rows: [Vec<Cell>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    // Unaligned prefixes (local mode) are right-aligned in front of the alignment
    let (tstart, qstart) = (alignment.target().start, alignment.query().start);
    let prefix = tstart.max(qstart);
    for column in 0..prefix {
        rows[0].push(match (column + tstart).checked_sub(prefix) {
            Some(ind) => Cell::Symbol(tlabels[ind].clone()),
            None => Cell::Blank,
        });
        rows[1].push(Cell::Blank);
        rows[2].push(match (column + qstart).checked_sub(prefix) {
            Some(ind) => Cell::Symbol(qlabels[ind].clone()),
            None => Cell::Blank,
        });
    }

    let (mut i, mut j) = (tstart, qstart);
    for step in alignment.steps() {
        let len = *step.len();
        for k in 0..len {
            let (t, m, q) = match step.op() {
                Op::Match => (
                    Cell::Symbol(tlabels[i + k].clone()),
                    Cell::Fill('|'),
                    Cell::Symbol(qlabels[j + k].clone()),
                ),
                Op::Mismatch => (
                    Cell::Symbol(tlabels[i + k].clone()),
                    Cell::Fill('.'),
                    Cell::Symbol(qlabels[j + k].clone()),
                ),
                Op::GapFirst => (
                    Cell::Fill('-'),
                    Cell::Fill('-'),
                    Cell::Symbol(qlabels[j + k].clone()),
                ),
                Op::GapSecond => (
                    Cell::Symbol(tlabels[i + k].clone()),
                    Cell::Fill('-'),
                    Cell::Fill('-'),
                ),
            };
            rows[0].push(t);
            rows[1].push(m);
            rows[2].push(q);
        }
        step.op().apply(&mut i, &mut j, len);
    }

    // Unaligned suffixes follow the alignment
    rows[0].extend(tlabels[i..].iter().cloned().map(Cell::Symbol));
    rows[2].extend(qlabels[j..].iter().cloned().map(Cell::Symbol));

    let separator = if width > 1 { " " } else { "" };
    let mut result = String::new();
    for row in rows {
        let line = row
            .into_iter()
            .map(|cell| match cell {
                Cell::Symbol(label) => format!("{label:<width$}"),
                Cell::Blank => " ".repeat(width),
                Cell::Fill(symbol) => symbol.to_string().repeat(width),
            })
            .join(separator);
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}
