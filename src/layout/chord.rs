//! Directed chord layout.
//!
//! Every entity gets a group spanning an angular slice of the circle,
//! proportional to the total weight flowing out of and into it. Inside the
//! group each relationship takes a subgroup span. A chord joins the source
//! entity's outgoing span to the target entity's incoming span.
//!
//! Angles run clockwise from 12 o'clock, in radians.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Whether diagonal entries (an entity related to itself) are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfRelationships {
    /// Diagonal weights take part in the layout and produce a self-ribbon.
    #[default]
    Show,
    /// Diagonal weights are treated as zero.
    Hide,
}

/// Order in which groups are laid out around the circle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOrder {
    /// Largest total weight first; ties keep matrix order.
    #[default]
    Descending,
    /// Matrix order.
    Index,
}

/// Angular slice of one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Total weight in and out of the entity.
    pub value: f64,
}

impl Group {
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Sub-slice of a group taken by one end of a chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
}

impl Span {
    fn same_extent(&self, other: &Self) -> bool {
        (self.start_angle - other.start_angle).abs() < f64::EPSILON
            && (self.end_angle - other.end_angle).abs() < f64::EPSILON
    }
}

/// One relationship `source -> target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chord {
    pub source: Span,
    pub target: Span,
}

impl Chord {
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.source.value
    }

    /// Source and target occupy the same span; the ribbon has no second leg.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.source.same_extent(&self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Outgoing,
    Incoming,
}

#[derive(Debug, Clone, Copy)]
struct Subgroup {
    other: usize,
    direction: Direction,
    value: f64,
}

/// Computed groups (indexed by entity) and chords (heaviest first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChordLayout {
    pub groups: Vec<Group>,
    pub chords: Vec<Chord>,
}

impl ChordLayout {
    /// Lay out a square, non-negative weight matrix.
    ///
    /// The matrix is expected to be validated already; rows shorter than the
    /// matrix contribute zero for their missing entries.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Entity counts are small
    pub fn compute(
        matrix: &[Vec<f64>],
        pad_angle: f64,
        self_relationships: SelfRelationships,
        group_order: GroupOrder,
    ) -> Self {
        let n = matrix.len();
        if n == 0 {
            return Self::default();
        }

        let weight = |i: usize, j: usize| -> f64 {
            if i == j && self_relationships == SelfRelationships::Hide {
                return 0.0;
            }
            matrix[i].get(j).copied().unwrap_or(0.0)
        };

        let group_sums: Vec<f64> = (0..n)
            .map(|i| (0..n).map(|j| weight(i, j) + weight(j, i)).sum())
            .collect();
        let total: f64 = group_sums.iter().sum();

        let k = if total > 0.0 {
            pad_angle.mul_add(-(n as f64), TAU).max(0.0) / total
        } else {
            0.0
        };
        let dx = if k > 0.0 { pad_angle } else { TAU / n as f64 };

        let mut order: Vec<usize> = (0..n).collect();
        if group_order == GroupOrder::Descending {
            order.sort_by(|&a, &b| group_sums[b].total_cmp(&group_sums[a]));
        }

        let mut outgoing: Vec<Option<(f64, f64)>> = vec![None; n * n];
        let mut incoming: Vec<Option<(f64, f64)>> = vec![None; n * n];
        let mut groups: Vec<Option<Group>> = vec![None; n];

        let mut x = 0.0;
        for &i in &order {
            let x0 = x;
            for subgroup in subgroups_of(i, n, &weight) {
                let start = x;
                x += subgroup.value * k;
                match subgroup.direction {
                    Direction::Outgoing => outgoing[i * n + subgroup.other] = Some((start, x)),
                    Direction::Incoming => incoming[subgroup.other * n + i] = Some((start, x)),
                }
            }
            groups[i] = Some(Group {
                index: i,
                start_angle: x0,
                end_angle: x,
                value: group_sums[i],
            });
            x += dx;
        }

        let mut chords = Vec::new();
        for i in 0..n {
            for j in 0..n {
                let value = weight(i, j);
                if value <= 0.0 {
                    continue;
                }
                if let (Some(source), Some(target)) = (outgoing[i * n + j], incoming[i * n + j]) {
                    chords.push(Chord {
                        source: Span {
                            index: i,
                            start_angle: source.0,
                            end_angle: source.1,
                            value,
                        },
                        target: Span {
                            index: j,
                            start_angle: target.0,
                            end_angle: target.1,
                            value,
                        },
                    });
                }
            }
        }
        chords.sort_by(|a, b| b.value().total_cmp(&a.value()));

        Self {
            groups: groups.into_iter().flatten().collect(),
            chords,
        }
    }

    #[must_use]
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }
}

/// Nonzero relationships touching `i`, heaviest first. Ties keep outgoing
/// before incoming, then ascending entity index.
fn subgroups_of(i: usize, n: usize, weight: &impl Fn(usize, usize) -> f64) -> Vec<Subgroup> {
    let outgoing = (0..n).map(|j| Subgroup {
        other: j,
        direction: Direction::Outgoing,
        value: weight(i, j),
    });
    let incoming = (0..n).map(|j| Subgroup {
        other: j,
        direction: Direction::Incoming,
        value: weight(j, i),
    });
    let mut subgroups: Vec<Subgroup> = outgoing
        .chain(incoming)
        .filter(|s| s.value > 0.0)
        .collect();
    subgroups.sort_by(|a, b| b.value.total_cmp(&a.value));
    subgroups
}

#[cfg(test)]
#[path = "chord_tests.rs"]
mod tests;
