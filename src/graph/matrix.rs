use fixedbitset::FixedBitSet;

/// Symmetric 0/1 adjacency matrix with a zero diagonal.
///
/// Backed by a linearly indexed bit set. Mutation is crate-internal; the
/// store keeps the matrix consistent with its edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    order: usize,
    bits: FixedBitSet,
}

impl AdjMatrix {
    pub(crate) fn new(order: usize) -> Self {
        Self {
            order,
            bits: FixedBitSet::with_capacity(order * order),
        }
    }

    /// Returns the number of rows (and columns) of the matrix.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns `true` if the cell at the given 0-based row and column is set.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.order && column < self.order && self.bits.contains(row * self.order + column)
    }

    pub(crate) fn insert(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.order && column < self.order);
        debug_assert!(row != column, "diagonal must stay zero");

        self.bits.insert(row * self.order + column);
        self.bits.insert(column * self.order + row);
    }

    pub(crate) fn clear(&mut self) {
        self.bits.clear();
    }

    /// Returns a row-major 0/1 table copy of the matrix for presentation.
    pub fn to_table(&self) -> Vec<Vec<u8>> {
        (0..self.order)
            .map(|row| {
                (0..self.order)
                    .map(|column| u8::from(self.contains(row, column)))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_symmetric() {
        let mut matrix = AdjMatrix::new(3);
        matrix.insert(0, 2);

        assert!(matrix.contains(0, 2));
        assert!(matrix.contains(2, 0));
        assert!(!matrix.contains(0, 1));
        assert_eq!(matrix.to_table(), vec![vec![0, 0, 1], vec![0, 0, 0], vec![1, 0, 0]]);
    }

    #[test]
    fn out_of_range_is_absent() {
        let matrix = AdjMatrix::new(2);
        assert!(!matrix.contains(0, 5));
        assert!(!matrix.contains(5, 0));
    }

    #[test]
    fn clear_keeps_order() {
        let mut matrix = AdjMatrix::new(4);
        matrix.insert(1, 3);
        matrix.clear();

        assert_eq!(matrix.order(), 4);
        assert!(!matrix.contains(1, 3));
        assert!(!matrix.contains(3, 1));
    }
}
