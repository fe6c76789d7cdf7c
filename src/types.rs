/// Single coordinate axis used for board heights, widths, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

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
    // widen first; the largest product still fits in a CellCount
    a as CellCount * b as CellCount
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the up-to-eight in-bounds neighbors of `center` in row-major
/// order. Cells on edges and corners simply yield fewer items.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .into_iter()
        .filter_map(move |delta| step(center, delta, bounds))
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn step((row, col): Coord2, (d_row, d_col): (i16, i16), (rows, cols): Coord2) -> Option<Coord2> {
    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_of_interior_cell_has_all_eight() {
        let got: Vec<Coord2> = neighbors((1, 1), (3, 3)).collect();

        assert_eq!(
            got,
            [
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ]
        );
    }

    #[test]
    fn neighbors_clip_at_corners_and_edges() {
        let top_left: Vec<Coord2> = neighbors((0, 0), (3, 3)).collect();
        assert_eq!(top_left, [(0, 1), (1, 0), (1, 1)]);

        let bottom_right: Vec<Coord2> = neighbors((2, 2), (3, 3)).collect();
        assert_eq!(bottom_right, [(1, 1), (1, 2), (2, 1)]);

        let edge: Vec<Coord2> = neighbors((0, 1), (1, 3)).collect();
        assert_eq!(edge, [(0, 0), (0, 2)]);
    }

    #[test]
    fn neighbors_on_single_cell_board_is_empty() {
        assert_eq!(neighbors((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn mult_widens_before_multiplying() {
        assert_eq!(mult(Coord::MAX, Coord::MAX), 4_294_836_225);
        assert_eq!(mult(14, 35), 490);
    }
}
