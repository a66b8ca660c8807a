//! 0/1 knapsack by dynamic programming.
//!
//! `dp[i][w]` is the best value using the first `i` items within capacity
//! `w`. Each cell of rows `1..=n` records an `Examine` frame carrying both
//! candidates and the winning choice, then an `Update` committing it. Taking
//! the item wins only on a strictly larger value. The backward walk from
//! `dp[n][capacity]` records one `Decide(Include | Exclude)` per item.

use algotrace_model::DpTable;

use crate::error::{Error, Result};
use crate::event::{Decision, Entity, Event};
use crate::trace::{Outcome, Recorder};

/// A knapsack item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: i64,
    pub value: i64,
}

impl Item {
    pub const fn new(weight: i64, value: i64) -> Self {
        Self { weight, value }
    }
}

impl From<(i64, i64)> for Item {
    fn from((weight, value): (i64, i64)) -> Self {
        Self::new(weight, value)
    }
}

/// State of a knapsack run at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackFrame {
    pub table: DpTable,
    /// Cell being filled or row being reconstructed, `(i, w)`.
    pub cell: Option<(usize, usize)>,
    /// `dp[i-1][w]`.
    pub skip: Option<i64>,
    /// `dp[i-1][w - weight] + value`, when the item fits.
    pub take: Option<i64>,
    /// Winner for the cell being filled: `Include` takes the item,
    /// `Exclude` keeps `skip`.
    pub choice: Option<Decision>,
    /// Items chosen so far during reconstruction.
    pub selected: Vec<usize>,
}

/// Final answer of a knapsack run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackResult {
    pub table: DpTable,
    /// Indices of the chosen items, ascending.
    pub selected: Vec<usize>,
    pub total_weight: i64,
    pub total_value: i64,
}

impl KnapsackResult {
    /// `dp[n][capacity]`.
    pub fn best_value(&self) -> i64 {
        self.table
            .get(self.table.rows().saturating_sub(1), self.table.cols().saturating_sub(1))
            .copied()
            .unwrap_or_default()
    }
}

/// Solve 0/1 knapsack for `items` under `capacity`.
pub fn knapsack(items: &[Item], capacity: i64) -> Result<Outcome<KnapsackResult, KnapsackFrame>> {
    let cap = usize::try_from(capacity).map_err(|_| Error::NegativeCapacity(capacity))?;
    let weights = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            usize::try_from(item.weight).map_err(|_| Error::NegativeItemWeight {
                item: index,
                weight: item.weight,
            })
        })
        .collect::<Result<Vec<usize>>>()?;

    let n = items.len();
    let mut dp = DpTable::filled(n + 1, cap + 1, 0);
    let mut recorder = Recorder::new();
    let frame = |dp: &DpTable,
                 cell: Option<(usize, usize)>,
                 skip: Option<i64>,
                 take: Option<i64>,
                 choice: Option<Decision>,
                 selected: &[usize]| KnapsackFrame {
        table: dp.clone(),
        cell,
        skip,
        take,
        choice,
        selected: selected.to_vec(),
    };

    recorder.record(
        Event::Init,
        frame(&dp, None, None, None, None, &[]),
        format!("Knapsack with {} items, capacity {}", n, capacity),
    );

    for i in 1..=n {
        let item = items[i - 1];
        let item_weight = weights[i - 1];
        for w in 0..=cap {
            let skip = dp[(i - 1, w)];
            let take = (item_weight <= w).then(|| dp[(i - 1, w - item_weight)] + item.value);
            let cell = Entity::Cell(i, w);
            let choice = match take {
                Some(take) if take > skip => Decision::Include,
                _ => Decision::Exclude,
            };

            let status = match take {
                Some(take) => format!(
                    "Item {} (w={}, v={}) at capacity {}: skip {} vs take {}, {} wins",
                    i - 1,
                    item.weight,
                    item.value,
                    w,
                    skip,
                    take,
                    if choice == Decision::Include { "take" } else { "skip" }
                ),
                None => format!(
                    "Item {} (w={}) does not fit capacity {}: skip {}",
                    i - 1,
                    item.weight,
                    w,
                    skip
                ),
            };
            recorder.record(
                Event::examine(cell, Some(Entity::Cell(i - 1, w))),
                frame(&dp, Some((i, w)), Some(skip), take, Some(choice), &[]),
                status,
            );

            let (value, source) = match (choice, take) {
                (Decision::Include, Some(take)) => (take, Entity::Cell(i - 1, w - item_weight)),
                _ => (skip, Entity::Cell(i - 1, w)),
            };
            dp.set(i, w, value);
            recorder.record(
                Event::update(cell, Some(source)),
                frame(&dp, Some((i, w)), Some(skip), take, Some(choice), &[]),
                format!("dp[{}][{}] = {}", i, w, value),
            );
        }
    }

    let mut selected = Vec::new();
    let mut remaining = cap;
    for i in (1..=n).rev() {
        let target = Entity::Item(i - 1);
        if dp[(i, remaining)] != dp[(i - 1, remaining)] {
            selected.push(i - 1);
            remaining -= weights[i - 1];
            recorder.record(
                Event::decide(Decision::Include, target),
                frame(&dp, Some((i, remaining)), None, None, None, &selected),
                format!("Include item {}, remaining capacity {}", i - 1, remaining),
            );
        } else {
            recorder.record(
                Event::decide(Decision::Exclude, target),
                frame(&dp, Some((i, remaining)), None, None, None, &selected),
                format!("Exclude item {}", i - 1),
            );
        }
    }
    selected.reverse();

    let total_weight: i64 = selected.iter().map(|&index| items[index].weight).sum();
    let total_value: i64 = selected.iter().map(|&index| items[index].value).sum();
    recorder.record(
        Event::Complete,
        frame(&dp, None, None, None, None, &selected),
        format!(
            "Optimal value {} using items {:?} (weight {})",
            dp[(n, cap)],
            selected,
            total_weight
        ),
    );
    debug_assert_eq!(recorder.len(), 2 * n * (cap + 1) + n + 2);
    tracing::debug!(
        algorithm = "knapsack",
        frames = recorder.len(),
        total_value,
        total_weight,
        "knapsack complete"
    );

    let result = KnapsackResult {
        table: dp,
        selected,
        total_weight,
        total_value,
    };
    Ok(Outcome::new(result, recorder.finish()))
}
