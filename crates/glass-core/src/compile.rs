// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Step compilers: expand one run of a sort algorithm into step records.
//!
//! Each compiler runs its algorithm once against an internal copy of the
//! input, recording every comparison, exchange, write, and finalization in
//! the exact order an in-place execution performs them. Compilation is pure:
//! the caller's slice is never mutated, and the same input always yields the
//! same step list.
//!
//! Tie-break policy: equal values never swap (bubble/selection compare with
//! strict `>` / `<`), and merge prefers the left run on equality, preserving
//! stability.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::step::{Step, Value};

/// Strategy seam between an algorithm and the generic playback driver.
///
/// Implementations must be deterministic and must terminate the returned
/// list with exactly one [`Step::Complete`] carrying the sorted sequence
/// (STEP-001). Inputs of length zero or one compile to `[Complete]` alone.
pub trait StepCompiler {
    /// Lowercase human name, e.g. `"bubble sort"`.
    fn name(&self) -> &'static str;

    /// Compiles `initial` into an ordered step list.
    fn compile(&self, initial: &[Value]) -> Vec<Step>;
}

/// Adjacent-exchange bubble sort.
///
/// Emits `Compare` for every adjacent pair in every pass, `Swap` when the
/// pair is out of order, and `Mark` for the rightmost position finalized by
/// each pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl StepCompiler for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble sort"
    }

    fn compile(&self, initial: &[Value]) -> Vec<Step> {
        let mut a = initial.to_vec();
        let n = a.len();
        let mut steps = Vec::new();
        if n > 1 {
            for pass in 0..n - 1 {
                for j in 0..n - 1 - pass {
                    let (left, right) = (a[j], a[j + 1]);
                    steps.push(Step::Compare {
                        i: j,
                        j: j + 1,
                        left,
                        right,
                    });
                    if left > right {
                        steps.push(Step::Swap {
                            i: j,
                            j: j + 1,
                            left,
                            right,
                        });
                        a.swap(j, j + 1);
                    }
                }
                let finalized = n - 1 - pass;
                steps.push(Step::Mark {
                    index: finalized,
                    value: a[finalized],
                });
            }
        }
        steps.push(Step::Complete { sorted: a });
        steps
    }
}

/// Minimum-selection sort.
///
/// Every candidate is compared against the running minimum; a `MinFound`
/// marker records each time the minimum moves, `Swap` fires only when the
/// minimum ends up away from the outer position, and `Mark` finalizes the
/// outer position regardless.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionSort;

impl StepCompiler for SelectionSort {
    fn name(&self) -> &'static str {
        "selection sort"
    }

    fn compile(&self, initial: &[Value]) -> Vec<Step> {
        let mut a = initial.to_vec();
        let n = a.len();
        let mut steps = Vec::new();
        if n > 1 {
            for i in 0..n - 1 {
                let mut min = i;
                for j in i + 1..n {
                    steps.push(Step::Compare {
                        i: min,
                        j,
                        left: a[min],
                        right: a[j],
                    });
                    if a[j] < a[min] {
                        min = j;
                        steps.push(Step::MinFound {
                            index: min,
                            value: a[min],
                        });
                    }
                }
                if min != i {
                    steps.push(Step::Swap {
                        i,
                        j: min,
                        left: a[i],
                        right: a[min],
                    });
                    a.swap(i, min);
                }
                steps.push(Step::Mark {
                    index: i,
                    value: a[i],
                });
            }
            steps.push(Step::Mark {
                index: n - 1,
                value: a[n - 1],
            });
        }
        steps.push(Step::Complete { sorted: a });
        steps
    }
}

/// Top-down merge sort over an auxiliary buffer.
///
/// Emits `Compare` for every element-vs-element merge decision and `Write`
/// for every slot placed, carrying the source index from the pre-merge
/// layout. Merge sort exchanges nothing in place, so no `Swap` steps appear.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl StepCompiler for MergeSort {
    fn name(&self) -> &'static str {
        "merge sort"
    }

    fn compile(&self, initial: &[Value]) -> Vec<Step> {
        let mut a = initial.to_vec();
        let n = a.len();
        let mut steps = Vec::new();
        if n > 1 {
            let mut aux = a.clone();
            sort_range(&mut a, &mut aux, 0, n - 1, &mut steps);
        }
        steps.push(Step::Complete { sorted: a });
        steps
    }
}

fn sort_range(a: &mut [Value], aux: &mut [Value], lo: usize, hi: usize, steps: &mut Vec<Step>) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(a, aux, lo, mid, steps);
    sort_range(a, aux, mid + 1, hi, steps);
    merge(a, aux, lo, mid, hi, steps);
}

fn merge(
    a: &mut [Value],
    aux: &mut [Value],
    lo: usize,
    mid: usize,
    hi: usize,
    steps: &mut Vec<Step>,
) {
    aux[lo..=hi].copy_from_slice(&a[lo..=hi]);
    let mut i = lo;
    let mut j = mid + 1;

    for k in lo..=hi {
        if i > mid {
            steps.push(Step::Write {
                index: k,
                value: aux[j],
                source: Some(j),
            });
            a[k] = aux[j];
            j += 1;
        } else if j > hi {
            steps.push(Step::Write {
                index: k,
                value: aux[i],
                source: Some(i),
            });
            a[k] = aux[i];
            i += 1;
        } else {
            steps.push(Step::Compare {
                i,
                j,
                left: aux[i],
                right: aux[j],
            });
            // Left run wins ties to keep the sort stable.
            if aux[i] <= aux[j] {
                steps.push(Step::Write {
                    index: k,
                    value: aux[i],
                    source: Some(i),
                });
                a[k] = aux[i];
                i += 1;
            } else {
                steps.push(Step::Write {
                    index: k,
                    value: aux[j],
                    source: Some(j),
                });
                a[k] = aux[j];
                j += 1;
            }
        }
    }
}

/// Selects one of the three supported algorithms by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortKind {
    /// Adjacent-exchange bubble sort.
    Bubble,
    /// Minimum-selection sort.
    Selection,
    /// Top-down merge sort.
    Merge,
}

impl SortKind {
    /// Returns the compiler implementing this algorithm.
    #[must_use]
    pub fn compiler(self) -> &'static dyn StepCompiler {
        match self {
            Self::Bubble => &BubbleSort,
            Self::Selection => &SelectionSort,
            Self::Merge => &MergeSort,
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Merge => "merge",
        };
        f.write_str(label)
    }
}

/// Error returned when a sort-kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort kind {input:?}; expected bubble, selection, or merge")]
pub struct SortKindParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for SortKind {
    type Err = SortKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "merge" => Ok(Self::Merge),
            other => Err(SortKindParseError {
                input: other.to_owned(),
            }),
        }
    }
}
