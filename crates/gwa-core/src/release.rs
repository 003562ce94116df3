//! Release codes and stiffnesses at the ends of 1D entities.

use crate::enums::{AxisDirection6, ReleaseCode, ReleaseInclusion};

/// Release state of the six axes at one end.
///
/// `stiffnesses` is positionally aligned with `codes`: an entry is `Some`
/// exactly when the axis is [`ReleaseCode::Stiff`]. The codec rejects ends
/// that break this alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReleaseEnd {
    pub codes: [ReleaseCode; 6],
    pub stiffnesses: [Option<f64>; 6],
}

impl ReleaseEnd {
    /// An end with every axis fixed.
    pub fn fixed() -> Self {
        Self::default()
    }

    /// An end with the given codes and no stiffnesses.
    pub fn new(codes: [ReleaseCode; 6]) -> Self {
        Self {
            codes,
            stiffnesses: [None; 6],
        }
    }

    /// Release `axis`.
    pub fn released(mut self, axis: AxisDirection6) -> Self {
        self.codes[axis.position()] = ReleaseCode::Released;
        self.stiffnesses[axis.position()] = None;
        self
    }

    /// Restrain `axis` with a spring of the given stiffness.
    pub fn stiff(mut self, axis: AxisDirection6, stiffness: f64) -> Self {
        self.codes[axis.position()] = ReleaseCode::Stiff;
        self.stiffnesses[axis.position()] = Some(stiffness);
        self
    }

    /// Code of `axis`.
    pub fn code(&self, axis: AxisDirection6) -> ReleaseCode {
        self.codes[axis.position()]
    }

    /// Stiffness of `axis`, present only for stiff axes.
    pub fn stiffness(&self, axis: AxisDirection6) -> Option<f64> {
        self.stiffnesses[axis.position()]
    }

    /// Axes coded [`ReleaseCode::Stiff`], in wire order.
    pub fn stiff_axes(&self) -> impl Iterator<Item = AxisDirection6> + '_ {
        AxisDirection6::ALL
            .iter()
            .copied()
            .filter(|axis| self.code(*axis) == ReleaseCode::Stiff)
    }

    /// `true` when no axis is released or stiff.
    pub fn is_fixed(&self) -> bool {
        self.codes.iter().all(|code| *code == ReleaseCode::Free)
    }
}

/// A flagged release block covering `N` ends.
///
/// `ends` is `Some` exactly when `inclusion` says a block follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Releases<const N: usize> {
    pub inclusion: ReleaseInclusion,
    pub ends: Option<[ReleaseEnd; N]>,
}

impl<const N: usize> Releases<N> {
    /// No release block.
    pub fn none() -> Self {
        Self {
            inclusion: ReleaseInclusion::NotIncluded,
            ends: None,
        }
    }

    /// A release block flagged `RLS`.
    pub fn included(ends: [ReleaseEnd; N]) -> Self {
        Self {
            inclusion: ReleaseInclusion::Included,
            ends: Some(ends),
        }
    }
}

impl<const N: usize> Default for Releases<N> {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_alignment() {
        let end = ReleaseEnd::fixed()
            .released(AxisDirection6::YY)
            .stiff(AxisDirection6::ZZ, 250.0);

        assert_eq!(end.code(AxisDirection6::X), ReleaseCode::Free);
        assert_eq!(end.code(AxisDirection6::YY), ReleaseCode::Released);
        assert_eq!(end.stiffness(AxisDirection6::YY), None);
        assert_eq!(end.stiffness(AxisDirection6::ZZ), Some(250.0));
        assert_eq!(end.stiff_axes().collect::<Vec<_>>(), vec![AxisDirection6::ZZ]);
        assert!(!end.is_fixed());
    }

    #[test]
    fn test_releasing_a_stiff_axis_drops_stiffness() {
        let end = ReleaseEnd::fixed()
            .stiff(AxisDirection6::X, 10.0)
            .released(AxisDirection6::X);

        assert_eq!(end.stiffness(AxisDirection6::X), None);
        assert_eq!(end.stiff_axes().count(), 0);
    }

    #[test]
    fn test_default_block_is_not_included() {
        let releases: Releases<2> = Releases::default();

        assert_eq!(releases.inclusion, ReleaseInclusion::NotIncluded);
        assert!(releases.ends.is_none());
        assert!(Releases::included([ReleaseEnd::fixed()]).ends.is_some());
    }
}
