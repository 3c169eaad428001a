/// The four kinds of items tracked on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Strawberry = 0,
    Mushroom = 1,
    Creature = 2,
    Monster = 3,
}

impl ItemKind {
    /// Get item name
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Strawberry => "strawberry",
            ItemKind::Mushroom => "mushroom",
            ItemKind::Creature => "creature",
            ItemKind::Monster => "monster",
        }
    }

    /// All item kinds in layer order
    pub fn all() -> [ItemKind; 4] {
        [
            ItemKind::Strawberry,
            ItemKind::Mushroom,
            ItemKind::Creature,
            ItemKind::Monster,
        ]
    }
}

/// Occupancy counters for every item kind over a bounded board.
///
/// Each layer is a flat row-major array of counts. Counts only change through
/// [`Grid::place`] and [`Grid::remove`], and can never drop below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    layers: [Vec<u32>; 4],
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = rows * cols;
        Self {
            rows,
            cols,
            layers: [
                vec![0; cells],
                vec![0; cells],
                vec![0; cells],
                vec![0; cells],
            ],
        }
    }

    /// Convert 2D coordinates to flat array index
    #[inline]
    fn cell_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Board dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether a signed coordinate lies on the board
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Add one item of `kind` at the cell
    pub fn place(&mut self, kind: ItemKind, row: usize, col: usize) {
        let idx = self.cell_index(row, col);
        self.layers[kind as usize][idx] += 1;
    }

    /// Take one item of `kind` off the cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell holds no item of that kind.
    pub fn remove(&mut self, kind: ItemKind, row: usize, col: usize) {
        let idx = self.cell_index(row, col);
        let count = &mut self.layers[kind as usize][idx];
        assert!(
            *count > 0,
            "{} counter underflow at ({}, {})",
            kind.name(),
            row,
            col
        );
        *count -= 1;
    }

    /// Number of items of `kind` at the cell
    pub fn occupancy_at(&self, kind: ItemKind, row: usize, col: usize) -> u32 {
        if row >= self.rows || col >= self.cols {
            return 0;
        }
        self.layers[kind as usize][self.cell_index(row, col)]
    }

    /// Read-only row-major view of one layer
    pub fn layer(&self, kind: ItemKind) -> &[u32] {
        &self.layers[kind as usize]
    }

    /// Sum of all counts for `kind`
    pub fn total(&self, kind: ItemKind) -> u64 {
        self.layers[kind as usize].iter().map(|&c| u64::from(c)).sum()
    }

    /// Clear every counter
    pub fn reset(&mut self) {
        for layer in &mut self.layers {
            layer.fill(0);
        }
    }
}
