//! Target validation run before the reduction pass
//!
//! The pass indexes the working array through decoded targets, so every
//! policy at least checks range and self-merges. Stricter policies reject
//! inputs on which the single forward pass would fold a value into a slot that
//! was already finalized.

use crate::element::Element;
use crate::error::{ReactionError, Result, TargetDefect};
use serde::{Deserialize, Serialize};

/// How strictly targets are checked before reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationPolicy {
    /// Range and self-merge checks only
    Bounds,
    /// Bounds plus rejection of merge cycles
    Acyclic,
    /// Bounds plus every parent must have a strictly smaller target
    #[default]
    Strict,
}

impl ValidationPolicy {
    /// Policy name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationPolicy::Bounds => "bounds",
            ValidationPolicy::Acyclic => "acyclic",
            ValidationPolicy::Strict => "strict",
        }
    }
}

impl std::str::FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bounds" => Ok(ValidationPolicy::Bounds),
            "acyclic" => Ok(ValidationPolicy::Acyclic),
            "strict" => Ok(ValidationPolicy::Strict),
            other => Err(format!("unknown validation policy: {other}")),
        }
    }
}

/// Check `targets` against `policy`
///
/// Reports the first offending element in index order.
pub fn validate_targets(targets: &[i64], policy: ValidationPolicy) -> Result<()> {
    check_bounds(targets)?;

    match policy {
        ValidationPolicy::Bounds => Ok(()),
        ValidationPolicy::Acyclic => check_acyclic(targets),
        ValidationPolicy::Strict => check_ordered(targets),
    }
}

fn invalid(index: usize, target: i64, defect: TargetDefect) -> ReactionError {
    ReactionError::InvalidTarget {
        index,
        target,
        defect,
    }
}

fn check_bounds(targets: &[i64]) -> Result<()> {
    let len = targets.len();

    for (index, &target) in targets.iter().enumerate() {
        let in_range = usize::try_from(target).map_or(false, |t| t <= len);
        if !in_range {
            return Err(invalid(index, target, TargetDefect::OutOfRange { len }));
        }
        if Element::new(index, 0, target).parent() == Some(index) {
            return Err(invalid(index, target, TargetDefect::SelfMerge));
        }
    }

    Ok(())
}

/// Assumes bounds have been checked
fn check_ordered(targets: &[i64]) -> Result<()> {
    for (index, &target) in targets.iter().enumerate() {
        if let Some(parent) = Element::new(index, 0, target).parent() {
            let parent_target = targets[parent];
            if parent_target >= target {
                return Err(invalid(
                    index,
                    target,
                    TargetDefect::Unordered { parent_target },
                ));
            }
        }
    }

    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Assumes bounds have been checked
///
/// Every element has at most one outgoing edge, so each walk either reaches a
/// root, reaches an element finished by an earlier walk, or closes a cycle on
/// its own path.
fn check_acyclic(targets: &[i64]) -> Result<()> {
    let mut marks = vec![Mark::Unvisited; targets.len()];
    let mut path = Vec::new();

    for start in 0..targets.len() {
        let mut current = Some(start);

        while let Some(index) = current {
            match marks[index] {
                Mark::Done => break,
                Mark::OnPath => {
                    // Report the smallest index on the cycle for a stable message
                    let cycle_start = path
                        .iter()
                        .position(|&i| i == index)
                        .unwrap_or_default();
                    let first = path[cycle_start..]
                        .iter()
                        .copied()
                        .min()
                        .unwrap_or(index);
                    return Err(invalid(first, targets[first], TargetDefect::Cycle));
                }
                Mark::Unvisited => {
                    marks[index] = Mark::OnPath;
                    path.push(index);
                    current = Element::new(index, 0, targets[index]).parent();
                }
            }
        }

        for index in path.drain(..) {
            marks[index] = Mark::Done;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defect_of(targets: &[i64], policy: ValidationPolicy) -> Option<(usize, TargetDefect)> {
        match validate_targets(targets, policy) {
            Ok(()) => None,
            Err(ReactionError::InvalidTarget { index, defect, .. }) => Some((index, defect)),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_well_formed_forest_passes_every_policy() {
        let targets = [0, 1, 0, 3, 0, 5, 0, 7, 0, 9];
        for policy in [
            ValidationPolicy::Bounds,
            ValidationPolicy::Acyclic,
            ValidationPolicy::Strict,
        ] {
            assert!(validate_targets(&targets, policy).is_ok());
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            defect_of(&[0, 4, 1], ValidationPolicy::Bounds),
            Some((1, TargetDefect::OutOfRange { len: 3 }))
        );
        assert_eq!(
            defect_of(&[0, -1], ValidationPolicy::Bounds),
            Some((1, TargetDefect::OutOfRange { len: 2 }))
        );
    }

    #[test]
    fn test_target_equal_to_len_is_in_range() {
        // Element 0 merges into the last element, which is a root
        assert!(validate_targets(&[3, 0, 0], ValidationPolicy::Bounds).is_ok());
        assert!(validate_targets(&[3, 0, 0], ValidationPolicy::Acyclic).is_ok());
    }

    #[test]
    fn test_self_merge() {
        assert_eq!(
            defect_of(&[0, 2], ValidationPolicy::Bounds),
            Some((1, TargetDefect::SelfMerge))
        );
    }

    #[test]
    fn test_cycle_rejected_by_acyclic() {
        // 0 -> 1 -> 2 -> 0, plus a tail 3 -> 0
        let targets = [2, 3, 1, 1];
        assert!(validate_targets(&targets, ValidationPolicy::Bounds).is_ok());
        assert_eq!(
            defect_of(&targets, ValidationPolicy::Acyclic),
            Some((0, TargetDefect::Cycle))
        );
    }

    #[test]
    fn test_cycle_reached_from_tail() {
        // 0 -> 1 -> 2 -> 1
        let targets = [2, 3, 2];
        assert_eq!(
            defect_of(&targets, ValidationPolicy::Acyclic),
            Some((1, TargetDefect::Cycle))
        );
    }

    #[test]
    fn test_cycle_rejected_by_strict_as_unordered() {
        // 0 -> 1 -> 0: element 1 points back at a higher target
        let targets = [2, 1];
        assert_eq!(
            defect_of(&targets, ValidationPolicy::Strict),
            Some((1, TargetDefect::Unordered { parent_target: 2 }))
        );
    }

    #[test]
    fn test_forward_merge_is_unordered_but_acyclic() {
        // 0 -> 1 -> 2 (root): parent 1 has target 3 > 2
        let targets = [2, 3, 0];
        assert!(validate_targets(&targets, ValidationPolicy::Acyclic).is_ok());
        assert_eq!(
            defect_of(&targets, ValidationPolicy::Strict),
            Some((0, TargetDefect::Unordered { parent_target: 3 }))
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "STRICT".parse::<ValidationPolicy>(),
            Ok(ValidationPolicy::Strict)
        );
        assert_eq!(
            "acyclic".parse::<ValidationPolicy>(),
            Ok(ValidationPolicy::Acyclic)
        );
        assert!("loose".parse::<ValidationPolicy>().is_err());
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Strict);
    }
}
