use ndarray::Array2;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Count type used for lit-cell and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, row 0 at the top.
pub type Coord2 = (Coord, Coord);

/// Side length of the square board.
pub const SIZE: Coord = 5;

pub(crate) const SIDE: usize = SIZE as usize;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait CrossIterExt {
    fn iter_cross(&self, center: Coord2) -> CrossIter;
}

impl<T> CrossIterExt for Array2<T> {
    fn iter_cross(&self, center: Coord2) -> CrossIter {
        let (rows, cols) = self.dim();
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        CrossIter::new(center, bounds)
    }
}

/// The center first, then up, down, left, right.
const DISPLACEMENTS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds cells covered by a cross-toggle centered on `center`.
///
/// Yields nothing at all when the center itself is out of bounds.
#[derive(Debug)]
pub struct CrossIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl CrossIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        let in_bounds = center.0 < bounds.0 && center.1 < bounds.1;
        Self {
            center,
            bounds,
            index: if in_bounds { 0 } else { DISPLACEMENTS.len() as u8 },
        }
    }
}

impl Iterator for CrossIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn cross(center: Coord2) -> Vec<Coord2> {
        let board: Array2<bool> = Array2::default((SIDE, SIDE));
        board.iter_cross(center).collect()
    }

    #[test]
    fn corner_cross_covers_three_cells() {
        assert_eq!(cross((0, 0)), [(0, 0), (1, 0), (0, 1)]);
        assert_eq!(cross((4, 4)), [(4, 4), (3, 4), (4, 3)]);
    }

    #[test]
    fn edge_cross_covers_four_cells() {
        assert_eq!(cross((0, 2)), [(0, 2), (1, 2), (0, 1), (0, 3)]);
    }

    #[test]
    fn out_of_bounds_center_yields_nothing() {
        assert!(cross((5, 0)).is_empty());
        assert!(cross((4, 5)).is_empty());
        assert!(cross((Coord::MAX, Coord::MAX)).is_empty());
    }
}
