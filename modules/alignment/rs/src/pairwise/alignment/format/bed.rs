use itertools::Itertools;

use biobit_core_rs::alignment::{Alignable, Symbol};

use super::{Core, Formatter};
use crate::pairwise::alignment::Alignment;

pub(super) fn render<S, T, Q>(formatter: &Formatter<'_, T, Q>, alignment: &Alignment) -> String
where
    S: Symbol,
    T: Alignable<Symbol = S> + ?Sized,
    Q: Alignable<Symbol = S> + ?Sized,
{
    let blocks = alignment.blocks();
    let core = Core::new(alignment, &blocks);
    let (start, end) = core.target;

    let sizes = blocks.iter().map(|x| format!("{},", x.len())).join("");
    let starts = blocks
        .iter()
        .map(|x| format!("{},", x.target().start - start))
        .join("");

    [
        formatter.target_name.to_string(),
        start.to_string(),
        end.to_string(),
        formatter.query_name.to_string(),
        format!("{:?}", alignment.score()),
        alignment.strand().to_string(),
        start.to_string(),
        end.to_string(),
        "0".to_string(),
        blocks.len().to_string(),
        sizes,
        starts,
    ]
    .iter()
    .join("\t")
        + "\n"
}
