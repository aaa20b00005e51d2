//! Chart transformation (spec.md §4.5): drop incomplete items, then
//! re-index by origin so the extractor can walk the chart top-down.

use crate::earley::recognize::Chart;
use crate::rule::Rule;

/// A complete derivation of `rule` starting at the chart index it lives
/// under and ending at `end`. This is the clearly-named equivalent of
/// spec.md's "rewrite the origin field to mean end position" trick: rather
/// than overload `EarleyItem::origin`, the transformed chart holds a
/// distinct type whose field is unambiguously named.
#[derive(Clone, Debug)]
pub struct CompletedSpan {
    pub rule: Rule,
    pub end: usize,
}

/// Indexed by *start* position after transformation (chart index `p` holds
/// every complete derivation that starts at `p`).
pub type TransformedChart = Vec<Vec<CompletedSpan>>;

/// Two passes: drop every incomplete item, then move each retained item
/// from its chart index `i` (where it finished) into a fresh chart slot at
/// its `origin` (where it started), recording `i` as its new `end`.
pub fn transform(chart: &Chart) -> TransformedChart {
    let mut out: TransformedChart = (0..chart.len()).map(|_| Vec::new()).collect();
    for (i, state) in chart.iter().enumerate() {
        for item in state {
            if item.is_complete() {
                out[item.origin].push(CompletedSpan {
                    rule: item.rule.clone(),
                    end: i,
                });
            }
        }
    }
    out
}
