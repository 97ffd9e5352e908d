//! Mission catalog for definition lookup.
//!
//! The `MissionCatalog` stores the mission pool a game draws from.
//! It provides fast lookup by `MissionId`, deterministic iteration in
//! registration order, and uniform random draws for mission assignment.
//! Catalogs are plain values: build one explicitly (usually via
//! [`MissionCatalog::standard`]) and share it by reference.

use rustc_hash::FxHashMap;

use crate::core::GameRng;
use crate::rules::victory::ALL_CELLS_THRESHOLD;

use super::definition::{Mission, MissionId, PatternKind, TargetShape};

/// Registry of mission definitions.
///
/// ## Example
///
/// ```
/// use magic_square::missions::{MissionCatalog, MissionId, PatternKind};
///
/// let catalog = MissionCatalog::standard();
/// assert_eq!(catalog.len(), 50);
///
/// let first = catalog.get(MissionId::new(0)).unwrap();
/// assert_eq!(first.pattern, PatternKind::Sum);
/// assert_eq!(first.parameter, 11);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MissionCatalog {
    ids: Vec<MissionId>,
    by_id: FxHashMap<MissionId, Mission>,
}

impl MissionCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 50-mission pool.
    ///
    /// Mission IDs are stable:
    ///
    /// - 0..=26: sums 11 through 19, each over row, column, diagonal
    /// - 27..=38: multiples of 2 through 5, each over row, column, all cells
    /// - 39..=42: arithmetic progressions with differences 0 through 3
    /// - 43..=46: geometric progressions with ratios 0 through 3
    /// - 47..=49: primes over row, column, all cells
    #[must_use]
    pub fn standard() -> Self {
        let mut entries: Vec<(PatternKind, TargetShape, i64, String)> = Vec::new();

        for target_sum in 11..=19i64 {
            for shape in [TargetShape::Row, TargetShape::Column, TargetShape::Diagonal] {
                entries.push((
                    PatternKind::Sum,
                    shape,
                    target_sum,
                    format!("Complete a {} whose values sum to {}", shape_noun(shape), target_sum),
                ));
            }
        }

        for divisor in 2..=5i64 {
            for shape in [TargetShape::Row, TargetShape::Column, TargetShape::AllCells] {
                let description = if shape == TargetShape::AllCells {
                    format!(
                        "Have at least {} cells holding multiples of {}",
                        ALL_CELLS_THRESHOLD, divisor
                    )
                } else {
                    format!("Fill a {} with multiples of {}", shape_noun(shape), divisor)
                };
                entries.push((PatternKind::Multiple, shape, divisor, description));
            }
        }

        for difference in 0..=3i64 {
            let description = if difference == 0 {
                "Complete a row, column, or diagonal forming an arithmetic progression".to_string()
            } else {
                format!(
                    "Complete a row, column, or diagonal forming an arithmetic progression with common difference {}",
                    difference
                )
            };
            entries.push((
                PatternKind::Arithmetic,
                TargetShape::AllDirections,
                difference,
                description,
            ));
        }

        for ratio in 0..=3i64 {
            let description = if ratio == 0 {
                "Complete a row, column, or diagonal forming a geometric progression".to_string()
            } else {
                format!(
                    "Complete a row, column, or diagonal forming a geometric progression with common ratio {}",
                    ratio
                )
            };
            entries.push((
                PatternKind::Geometric,
                TargetShape::AllDirections,
                ratio,
                description,
            ));
        }

        for shape in [TargetShape::Row, TargetShape::Column, TargetShape::AllCells] {
            let description = if shape == TargetShape::AllCells {
                format!("Have at least {} cells holding prime numbers", ALL_CELLS_THRESHOLD)
            } else {
                format!("Fill a {} with prime numbers", shape_noun(shape))
            };
            entries.push((PatternKind::Prime, shape, 0, description));
        }

        let mut catalog = Self::new();
        for (i, (pattern, target, parameter, description)) in entries.into_iter().enumerate() {
            catalog.register(Mission::new(
                MissionId::new(i as u32),
                pattern,
                target,
                parameter,
                description,
            ));
        }
        catalog
    }

    /// Register a mission definition.
    ///
    /// Panics if a mission with the same ID already exists.
    pub fn register(&mut self, mission: Mission) {
        if self.by_id.contains_key(&mission.id) {
            panic!("Mission with ID {:?} already registered", mission.id);
        }
        self.ids.push(mission.id);
        self.by_id.insert(mission.id, mission);
    }

    /// Get a mission definition by ID.
    #[must_use]
    pub fn get(&self, id: MissionId) -> Option<&Mission> {
        self.by_id.get(&id)
    }

    /// Check if a mission ID is registered.
    #[must_use]
    pub fn contains(&self, id: MissionId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Get the number of registered missions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over all missions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Mission> {
        self.ids.iter().map(move |id| &self.by_id[id])
    }

    /// Iterate over all mission IDs in registration order.
    pub fn mission_ids(&self) -> impl Iterator<Item = MissionId> + '_ {
        self.ids.iter().copied()
    }

    /// Draw a mission uniformly at random.
    ///
    /// Returns `None` if the catalog is empty. Consumes exactly one
    /// draw from `rng`.
    pub fn choose(&self, rng: &mut GameRng) -> Option<&Mission> {
        if self.ids.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..self.ids.len());
        self.by_id.get(&self.ids[idx])
    }

    /// Find missions matching a predicate, in registration order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Mission>
    where
        F: Fn(&Mission) -> bool,
    {
        self.iter().filter(move |m| predicate(m))
    }
}

fn shape_noun(shape: TargetShape) -> &'static str {
    match shape {
        TargetShape::Row => "row",
        TargetShape::Column => "column",
        TargetShape::Diagonal => "diagonal",
        TargetShape::AllDirections => "line",
        TargetShape::AllCells => "board",
    }
}
