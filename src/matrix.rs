//! Square matrix transformations for the 8 board symmetries.
//!
//! The dihedral group of the square: identity, three rotations, and a
//! horizontal flip composed with each rotation. The rotate/flip primitives
//! are parameterized by side length so they serve both full board grids and
//! the 3x3 neighborhoods used by pattern collaborators.

use crate::board::OutBoard;
use crate::constants::TOTAL_BOARD_SIZ;

/// One of the 8 symmetries of a square grid.
///
/// The flip variants apply the horizontal flip after the named rotation.
/// The discriminant order is the candidate order of the canonical-form
/// search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    Flip,
    FlipRotate90,
    FlipRotate180,
    FlipRotate270,
}

impl Transform {
    /// The inverse symmetry.
    ///
    /// Reflections are their own inverse; only the quarter turns swap.
    pub fn inverse(self) -> Transform {
        match self {
            Transform::Rotate90 => Transform::Rotate270,
            Transform::Rotate270 => Transform::Rotate90,
            other => other,
        }
    }

    /// Number of quarter turns this transform applies before any flip.
    pub(crate) fn quarter_turns(self) -> u8 {
        match self {
            Transform::Identity | Transform::Flip => 0,
            Transform::Rotate90 | Transform::FlipRotate90 => 1,
            Transform::Rotate180 | Transform::FlipRotate180 => 2,
            Transform::Rotate270 | Transform::FlipRotate270 => 3,
        }
    }

    /// Whether this transform ends with a horizontal flip.
    pub(crate) fn flips(self) -> bool {
        matches!(
            self,
            Transform::Flip
                | Transform::FlipRotate90
                | Transform::FlipRotate180
                | Transform::FlipRotate270
        )
    }
}

/// A reduction to canonical form: a spatial transform plus whether stone
/// colors were inverted to normalize the perspective.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    pub transform: Transform,
    pub inverted: bool,
}

impl Reduction {
    /// The reduction that changes nothing.
    pub const IDENTITY: Reduction = Reduction {
        transform: Transform::Identity,
        inverted: false,
    };

    /// The reduction undoing this one.
    ///
    /// Color inversion is an involution, so only the transform changes.
    pub fn inverse(self) -> Reduction {
        Reduction {
            transform: self.transform.inverse(),
            inverted: self.inverted,
        }
    }
}

/// Rotate a square matrix by the given number of quarter turns.
pub fn matrix_rotate(dst: &mut [u8], src: &[u8], side_len: usize, rotations: u8) {
    debug_assert!(rotations < 4);
    debug_assert_eq!(src.len(), side_len * side_len);
    debug_assert_eq!(dst.len(), src.len());

    let last = side_len - 1;
    match rotations {
        0 => dst.copy_from_slice(src),
        1 => {
            for (m, d) in dst.iter_mut().enumerate() {
                let (x, y) = (m % side_len, m / side_len);
                *d = src[x * side_len + (last - y)];
            }
        }
        2 => {
            for (m, d) in dst.iter_mut().enumerate() {
                *d = src[side_len * side_len - 1 - m];
            }
        }
        _ => {
            for (m, d) in dst.iter_mut().enumerate() {
                let (x, y) = (m % side_len, m / side_len);
                *d = src[(last - x) * side_len + y];
            }
        }
    }
}

/// Flip a square matrix horizontally.
pub fn matrix_flip(dst: &mut [u8], src: &[u8], side_len: usize) {
    debug_assert_eq!(src.len(), side_len * side_len);
    debug_assert_eq!(dst.len(), src.len());

    let last = side_len - 1;
    for (m, d) in dst.iter_mut().enumerate() {
        let (x, y) = (m % side_len, m / side_len);
        *d = src[y * side_len + (last - x)];
    }
}

/// Map a source-frame coordinate to its location in the transformed frame.
///
/// Pulling values from a transformed grid back to original coordinates is
/// done by mapping through the inverse transform.
pub fn reduce_coord(x: usize, y: usize, side_len: usize, t: Transform) -> (usize, usize) {
    let last = side_len - 1;
    match t {
        Transform::Identity => (x, y),
        Transform::Rotate90 => (y, last - x),
        Transform::Rotate180 => (last - x, last - y),
        Transform::Rotate270 => (last - y, x),
        Transform::Flip => (last - x, y),
        Transform::FlipRotate90 => (last - y, last - x),
        Transform::FlipRotate180 => (x, last - y),
        Transform::FlipRotate270 => (y, x),
    }
}

/// Rotate the contents of an output board by the given number of quarter
/// turns.
pub fn oboard_rotate(dst: &mut OutBoard, src: &OutBoard, rotations: u8) {
    debug_assert!(rotations < 4);

    let side = crate::constants::BOARD_SIZ;
    let last = side - 1;
    for m in 0..TOTAL_BOARD_SIZ {
        let n = match rotations {
            0 => m,
            1 => {
                let (x, y) = (m % side, m / side);
                x * side + (last - y)
            }
            2 => TOTAL_BOARD_SIZ - 1 - m,
            _ => {
                let (x, y) = (m % side, m / side);
                (last - x) * side + y
            }
        };
        dst.points[m] = src.points[n];
    }
    dst.pass = src.pass;
}

/// Flip the contents of an output board horizontally.
pub fn oboard_flip(dst: &mut OutBoard, src: &OutBoard) {
    let side = crate::constants::BOARD_SIZ;
    let last = side - 1;
    for m in 0..TOTAL_BOARD_SIZ {
        let (x, y) = (m % side, m / side);
        dst.points[m] = src.points[y * side + (last - x)];
    }
    dst.pass = src.pass;
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIDE: usize = 3;
    const SAMPLE: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

    #[test]
    fn test_rotate_quarter_turn() {
        let mut dst = [0u8; 9];
        matrix_rotate(&mut dst, &SAMPLE, SIDE, 1);
        assert_eq!(dst, [3, 6, 9, 2, 5, 8, 1, 4, 7]);
    }

    #[test]
    fn test_rotate_closure() {
        let mut a = SAMPLE;
        let mut b = [0u8; 9];
        for _ in 0..4 {
            matrix_rotate(&mut b, &a, SIDE, 1);
            a = b;
        }
        assert_eq!(a, SAMPLE);
    }

    #[test]
    fn test_flip_closure() {
        let mut a = [0u8; 9];
        let mut b = [0u8; 9];
        matrix_flip(&mut a, &SAMPLE, SIDE);
        assert_eq!(a, [3, 2, 1, 6, 5, 4, 9, 8, 7]);
        matrix_flip(&mut b, &a, SIDE);
        assert_eq!(b, SAMPLE);
    }

    #[test]
    fn test_rotate_plus_rotate_is_double_rotate() {
        let mut once = [0u8; 9];
        let mut twice = [0u8; 9];
        let mut direct = [0u8; 9];
        matrix_rotate(&mut once, &SAMPLE, SIDE, 1);
        matrix_rotate(&mut twice, &once, SIDE, 1);
        matrix_rotate(&mut direct, &SAMPLE, SIDE, 2);
        assert_eq!(twice, direct);
    }

    /// The coordinate mapping must agree with the matrix primitives: the
    /// value at a source coordinate appears at its reduced coordinate.
    #[test]
    fn test_reduce_coord_matches_matrices() {
        use Transform::*;
        for t in [
            Identity,
            Rotate90,
            Rotate180,
            Rotate270,
            Flip,
            FlipRotate90,
            FlipRotate180,
            FlipRotate270,
        ] {
            let mut rotated = [0u8; 9];
            let mut image = [0u8; 9];
            matrix_rotate(&mut rotated, &SAMPLE, SIDE, t.quarter_turns());
            if t.flips() {
                matrix_flip(&mut image, &rotated, SIDE);
            } else {
                image = rotated;
            }

            for m in 0..9 {
                let (x, y) = (m % SIDE, m / SIDE);
                let (tx, ty) = reduce_coord(x, y, SIDE, t);
                assert_eq!(image[ty * SIDE + tx], SAMPLE[m], "transform {t:?}");
            }
        }
    }

    #[test]
    fn test_transform_inverse() {
        use Transform::*;
        for t in [
            Identity,
            Rotate90,
            Rotate180,
            Rotate270,
            Flip,
            FlipRotate90,
            FlipRotate180,
            FlipRotate270,
        ] {
            for m in 0..9 {
                let (x, y) = (m % SIDE, m / SIDE);
                let (tx, ty) = reduce_coord(x, y, SIDE, t);
                assert_eq!(reduce_coord(tx, ty, SIDE, t.inverse()), (x, y));
            }
        }
    }
}
