//! Static mission definitions.
//!
//! A `Mission` names a pattern to produce (`PatternKind`), where it must
//! appear (`TargetShape`), and a numeric parameter whose meaning depends
//! on the pattern. Definitions are immutable; each player is assigned one
//! at game start and pursues it for the whole session.

use serde::{Deserialize, Serialize};

/// Unique identifier for a mission definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(pub u32);

impl MissionId {
    /// Create a new mission ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mission({})", self.0)
    }
}

/// The kind of numeric pattern a mission demands.
///
/// The parameter of the owning [`Mission`] refines the pattern:
///
/// - `Sum`: the line must sum to the parameter.
/// - `Multiple`: every value must be divisible by the parameter.
/// - `Arithmetic`: consecutive differences must be constant; a nonzero
///   parameter fixes the magnitude of the common difference.
/// - `Geometric`: consecutive ratios must be constant; a nonzero
///   parameter must match the ratio or its reciprocal.
/// - `Prime`: every value must be prime. The parameter is unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Sum,
    Multiple,
    Arithmetic,
    Geometric,
    Prime,
}

/// Where on the board the pattern must appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetShape {
    /// Any single row.
    Row,
    /// Any single column.
    Column,
    /// Either diagonal.
    Diagonal,
    /// Any row, column, or diagonal.
    AllDirections,
    /// Counted over every occupied cell instead of a line.
    AllCells,
}

/// Static mission definition.
///
/// ## Example
///
/// ```
/// use magic_square::missions::{Mission, MissionId, PatternKind, TargetShape};
///
/// let mission = Mission::new(
///     MissionId::new(0),
///     PatternKind::Sum,
///     TargetShape::Row,
///     15,
///     "Complete a row whose values sum to 15",
/// );
///
/// assert_eq!(mission.parameter, 15);
/// assert_eq!(mission.to_string(), "Complete a row whose values sum to 15");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique identifier for this mission.
    pub id: MissionId,

    /// The pattern to produce.
    pub pattern: PatternKind,

    /// Where the pattern must appear.
    pub target: TargetShape,

    /// Pattern parameter (sum target, divisor, difference, or ratio).
    pub parameter: i64,

    /// Human-readable description (for display/debugging).
    pub description: String,
}

impl Mission {
    /// Create a new mission definition.
    #[must_use]
    pub fn new(
        id: MissionId,
        pattern: PatternKind,
        target: TargetShape,
        parameter: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            pattern,
            target,
            parameter,
            description: description.into(),
        }
    }
}

impl std::fmt::Display for Mission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}
