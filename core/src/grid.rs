use alloc::string::{String, ToString};
use core::fmt::{self, Write};
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::SIDE;
use crate::*;

/// Starting configuration used when nothing else is configured.
pub const DEFAULT_BASE: [[u8; SIDE]; SIDE] = [
    [1, 0, 1, 0, 1],
    [0, 1, 0, 1, 0],
    [1, 0, 0, 0, 1],
    [0, 1, 0, 1, 0],
    [1, 0, 1, 0, 1],
];

/// Presses that light every cell of [`DEFAULT_BASE`], in any order.
pub const DEFAULT_SOLUTION: [Coord2; 9] = [
    (0, 2),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 2),
    (4, 2),
];

/// Immutable base configuration a [`LightGrid`] starts from and resets to.
///
/// Serialized as its text form, e.g. `"10101/01010/10001/01010/10101"`, so a
/// deserialized pattern always has the board's shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern {
    cells: Array2<bool>,
}

impl Pattern {
    pub fn from_rows(rows: [[bool; SIDE]; SIDE]) -> Self {
        Self {
            cells: Array2::from_shape_fn((SIDE, SIDE), |(r, c)| rows[r][c]),
        }
    }

    /// Builds a pattern from `0`/`1` rows, any non-zero value is on.
    pub fn from_bits(rows: [[u8; SIDE]; SIDE]) -> Self {
        Self {
            cells: Array2::from_shape_fn((SIDE, SIDE), |(r, c)| rows[r][c] != 0),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> bool {
        self.cells[coords.to_nd_index()]
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells.iter().filter(|&&on| on).count() as CellCount
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::from_bits(DEFAULT_BASE)
    }
}

fn is_row_separator(ch: char) -> bool {
    ch == ',' || ch == '/' || ch.is_whitespace()
}

impl FromStr for Pattern {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows = [[false; SIDE]; SIDE];
        let mut row_count = 0;

        for (r, text) in s
            .split(is_row_separator)
            .filter(|text| !text.is_empty())
            .enumerate()
        {
            let row = rows.get_mut(r).ok_or(GameError::InvalidBoardShape)?;
            let mut col_count = 0;
            for (c, ch) in text.chars().enumerate() {
                let on = match ch {
                    '0' => false,
                    '1' => true,
                    other => return Err(GameError::InvalidCell(other)),
                };
                *row.get_mut(c).ok_or(GameError::InvalidBoardShape)? = on;
                col_count += 1;
            }
            if col_count != SIDE {
                return Err(GameError::InvalidBoardShape);
            }
            row_count += 1;
        }

        if row_count != SIDE {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(Self::from_rows(rows))
    }
}

impl TryFrom<String> for Pattern {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.to_string()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.rows().into_iter().enumerate() {
            if r > 0 {
                f.write_char('/')?;
            }
            for &on in row {
                f.write_char(if on { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

/// The playing board: a fixed 5×5 field of lights plus the pattern it was
/// created from.
///
/// Both halves serialize as [`Pattern`] text, so a deserialized grid keeps
/// the board's shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightGrid {
    base: Pattern,
    lights: Pattern,
}

impl LightGrid {
    pub fn new(base: Pattern) -> Self {
        let lights = base.clone();
        Self { base, lights }
    }

    pub fn base(&self) -> &Pattern {
        &self.base
    }

    pub const fn size(&self) -> Coord2 {
        (SIZE, SIZE)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(SIZE, SIZE)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < SIZE && coords.1 < SIZE
    }

    pub fn cell_at(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn lit_count(&self) -> CellCount {
        self.lights.lit_count()
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, bool)> + '_ {
        self.lights
            .cells
            .indexed_iter()
            .map(|((r, c), &on)| ((r as Coord, c as Coord), on))
    }

    /// Cells a cross-toggle at `coords` would flip.
    pub fn cross_cells(&self, coords: Coord2) -> CrossIter {
        self.lights.cells.iter_cross(coords)
    }

    /// Flips `coords` and its orthogonal neighbors that lie on the board.
    ///
    /// Does nothing when `coords` is off the board.
    pub fn toggle_cross(&mut self, coords: Coord2) {
        let cells = &mut self.lights.cells;
        for pos in cells.iter_cross(coords) {
            let cell = &mut cells[pos.to_nd_index()];
            *cell = !*cell;
        }
    }

    pub fn is_solved(&self) -> bool {
        self.lights.cells.iter().all(|&on| on)
    }

    pub fn reset_to_base(&mut self) {
        self.lights.clone_from(&self.base);
    }
}

impl Default for LightGrid {
    fn default() -> Self {
        Self::new(Pattern::default())
    }
}

impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.lights.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn flipped(before: &LightGrid, after: &LightGrid) -> Vec<Coord2> {
        before
            .iter_cells()
            .filter(|&(pos, on)| after.cell_at(pos) != on)
            .map(|(pos, _)| pos)
            .collect()
    }

    #[test]
    fn toggling_corner_flips_three_cells() {
        let mut grid = LightGrid::default();
        let before = grid.clone();

        grid.toggle_cross((0, 0));

        assert_eq!(flipped(&before, &grid), [(0, 0), (0, 1), (1, 0)]);
        let expected = Pattern::from_bits([
            [0, 1, 1, 0, 1],
            [1, 1, 0, 1, 0],
            [1, 0, 0, 0, 1],
            [0, 1, 0, 1, 0],
            [1, 0, 1, 0, 1],
        ]);
        assert_eq!(grid, LightGrid {
            base: Pattern::default(),
            lights: expected,
        });
    }

    #[test]
    fn toggling_center_flips_five_cells() {
        let mut grid = LightGrid::default();
        let before = grid.clone();

        grid.toggle_cross((2, 2));

        assert_eq!(
            flipped(&before, &grid),
            [(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]
        );
    }

    #[test]
    fn toggle_twice_restores_grid() {
        let mut grid = LightGrid::default();
        grid.toggle_cross((1, 3));
        let before = grid.clone();

        for r in 0..SIZE {
            for c in 0..SIZE {
                grid.toggle_cross((r, c));
                grid.toggle_cross((r, c));
                assert_eq!(grid, before, "({r}, {c})");
            }
        }
    }

    #[test]
    fn toggle_off_board_is_noop() {
        let mut grid = LightGrid::default();
        let before = grid.clone();

        grid.toggle_cross((SIZE, 0));
        grid.toggle_cross((0, SIZE));
        grid.toggle_cross((SIZE, SIZE));

        assert_eq!(grid, before);
    }

    #[test]
    fn solved_only_when_every_cell_is_on() {
        let mut rows = [[1; SIDE]; SIDE];
        assert!(LightGrid::new(Pattern::from_bits(rows)).is_solved());

        for r in 0..SIDE {
            for c in 0..SIDE {
                rows[r][c] = 0;
                assert!(!LightGrid::new(Pattern::from_bits(rows)).is_solved());
                rows[r][c] = 1;
            }
        }
    }

    #[test]
    fn known_solution_solves_default_board() {
        let mut grid = LightGrid::default();
        let (last, rest) = DEFAULT_SOLUTION.split_last().unwrap();

        for &pos in rest {
            grid.toggle_cross(pos);
            assert!(!grid.is_solved());
        }
        grid.toggle_cross(*last);

        assert!(grid.is_solved());
        assert_eq!(grid.lit_count(), grid.total_cells());
    }

    #[test]
    fn reset_restores_base_pattern() {
        let mut grid = LightGrid::default();
        grid.toggle_cross((2, 2));
        grid.toggle_cross((4, 0));

        grid.reset_to_base();

        assert_eq!(grid, LightGrid::default());
        assert_eq!(grid.lit_count(), 12);
    }

    #[test]
    fn pattern_parses_separated_rows() {
        let slashes: Pattern = "10101/01010/10001/01010/10101".parse().unwrap();
        let commas: Pattern = "10101,01010,10001,01010,10101".parse().unwrap();
        let lines: Pattern = "10101\n01010\n10001\n01010\n10101\n".parse().unwrap();

        assert_eq!(slashes, Pattern::default());
        assert_eq!(commas, Pattern::default());
        assert_eq!(lines, Pattern::default());
        assert_eq!(slashes.to_string(), "10101/01010/10001/01010/10101");
    }

    #[test]
    fn pattern_rejects_bad_input() {
        assert_eq!(
            "10101/01010/10001/01010".parse::<Pattern>(),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            "10101/01010/10001/01010/10101/11111".parse::<Pattern>(),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            "1010/01010/10001/01010/10101".parse::<Pattern>(),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            "101011/01010/10001/01010/10101".parse::<Pattern>(),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            "10x01/01010/10001/01010/10101".parse::<Pattern>(),
            Err(GameError::InvalidCell('x'))
        );
        assert_eq!("".parse::<Pattern>(), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn grid_serializes_as_pattern_text() {
        let mut grid = LightGrid::default();
        grid.toggle_cross((0, 0));

        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!(
            json,
            r#"{"base":"10101/01010/10001/01010/10101","lights":"01101/11010/10001/01010/10101"}"#
        );
        assert_eq!(serde_json::from_str::<LightGrid>(&json).unwrap(), grid);
    }

    #[test]
    fn grid_of_wrong_shape_is_rejected() {
        let small = r#"{"base":"10101/01010/10001/01010/10101","lights":"10/01"}"#;
        let raw_array = r#"{"base":"10101/01010/10001/01010/10101","lights":{"v":1,"dim":[2,2],"data":[true,true,true,true]}}"#;
        let small_base = r#"{"base":"11/11","lights":"10101/01010/10001/01010/10101"}"#;

        assert!(serde_json::from_str::<LightGrid>(small).is_err());
        assert!(serde_json::from_str::<LightGrid>(raw_array).is_err());
        assert!(serde_json::from_str::<LightGrid>(small_base).is_err());
    }
}
