//! Uniform grid spatial index.
//!
//! Keys are bucketed by the cell containing their position at insert time.
//! A radius query returns every key in the cells overlapping the query
//! circle's bounding square, which is a superset of the keys inside the
//! circle: callers filter by exact distance afterwards.

use crate::error::{Error, Result};
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Integer coordinates of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub x: i32,
    pub y: i32,
}

type Bucket<K> = SmallVec<[K; 8]>;

#[derive(Clone, Debug)]
pub struct SpatialIndex<K: Copy = usize> {
    cell_size: f32,
    cells: FnvHashMap<CellKey, Bucket<K>>,
    len: usize,
}

impl<K: Copy> SpatialIndex<K> {
    pub fn new(cell_size: f32) -> Result<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(Error::InvalidConfiguration {
                field: "grid_cell_size",
                value: cell_size as f64,
            });
        }
        Ok(Self {
            cell_size,
            cells: FnvHashMap::default(),
            len: 0,
        })
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of inserted entries (duplicates counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn cell_of(&self, x: f32, y: f32) -> CellKey {
        CellKey {
            x: self.axis_cell(x),
            y: self.axis_cell(y),
        }
    }

    #[inline]
    fn axis_cell(&self, v: f32) -> i32 {
        (v / self.cell_size).floor() as i32
    }

    pub fn insert(&mut self, key: K, x: f32, y: f32) {
        let cell = self.cell_of(x, y);
        self.cells.entry(cell).or_default().push(key);
        self.len += 1;
    }

    pub fn query(&self, x: f32, y: f32, radius: f32) -> Vec<K> {
        let mut out = Vec::new();
        self.query_into(x, y, radius, &mut out);
        out
    }

    /// Like [`query`](Self::query) but reuses `out`, which is cleared first.
    pub fn query_into(&self, x: f32, y: f32, radius: f32, out: &mut Vec<K>) {
        out.clear();
        if self.cells.is_empty() || radius.is_nan() || radius < 0.0 {
            return;
        }
        let (x0, x1) = (self.axis_cell(x - radius), self.axis_cell(x + radius));
        let (y0, y1) = (self.axis_cell(y - radius), self.axis_cell(y + radius));
        // Axis widths fit in u64; their product may not once both saturate.
        let width = (x1 as i64 - x0 as i64 + 1) as u64;
        let height = (y1 as i64 - y0 as i64 + 1) as u64;
        let sparse = width
            .checked_mul(height)
            .map_or(true, |span| span > self.cells.len() as u64);
        if sparse {
            // Sparse relative to the scanned block: walk occupied cells instead.
            let mut hits: Vec<(&CellKey, &Bucket<K>)> = self
                .cells
                .iter()
                .filter(|(c, _)| (x0..=x1).contains(&c.x) && (y0..=y1).contains(&c.y))
                .collect();
            hits.sort_unstable_by_key(|(c, _)| (c.y, c.x));
            for (_, bucket) in hits {
                out.extend_from_slice(bucket);
            }
            return;
        }
        for cy in y0..=y1 {
            for cx in x0..=x1 {
                if let Some(bucket) = self.cells.get(&CellKey { x: cx, y: cy }) {
                    out.extend_from_slice(bucket);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells = FnvHashMap::default();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coordinates_get_distinct_cells() {
        let grid = SpatialIndex::<usize>::new(10.0).unwrap();
        assert_eq!(grid.cell_of(-0.5, 0.0), CellKey { x: -1, y: 0 });
        assert_eq!(grid.cell_of(-10.0, 25.0), CellKey { x: -1, y: 2 });
        assert_eq!(grid.cell_of(-10.5, -1.0), CellKey { x: -2, y: -1 });
        assert_ne!(grid.cell_of(-1.0, 2.0), grid.cell_of(1.0, -2.0));
    }

    #[test]
    fn duplicate_inserts_are_kept() {
        let mut grid = SpatialIndex::new(50.0).unwrap();
        grid.insert(7usize, 1.0, 1.0);
        grid.insert(7usize, 1.0, 1.0);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.query(0.0, 0.0, 1.0), vec![7, 7]);
    }

    #[test]
    fn results_follow_row_major_cell_order() {
        let mut grid = SpatialIndex::new(10.0).unwrap();
        grid.insert('c', 15.0, 15.0);
        grid.insert('a', 5.0, 5.0);
        grid.insert('b', 15.0, 5.0);
        grid.insert('d', 5.0, 15.0);
        assert_eq!(grid.query(10.0, 10.0, 5.0), vec!['a', 'b', 'd', 'c']);
    }

    #[test]
    fn nan_radius_returns_nothing() {
        let mut grid = SpatialIndex::new(10.0).unwrap();
        grid.insert(1usize, 0.0, 0.0);
        assert!(grid.query(0.0, 0.0, f32::NAN).is_empty());
        assert!(grid.query(0.0, 0.0, -1.0).is_empty());
    }

    #[test]
    fn unbounded_radius_walks_occupied_cells() {
        let mut grid = SpatialIndex::new(1.0).unwrap();
        grid.insert(0usize, 0.0, 0.0);
        grid.insert(1usize, -3.0e9, 4.0e9);
        assert_eq!(grid.query(0.0, 0.0, 1.0e10), vec![0, 1]);
        assert_eq!(grid.query(0.0, 0.0, f32::INFINITY), vec![0, 1]);
    }

    #[test]
    fn non_finite_cell_size_is_rejected() {
        assert!(SpatialIndex::<usize>::new(f32::INFINITY).is_err());
        assert!(SpatialIndex::<usize>::new(f32::NAN).is_err());
        assert!(SpatialIndex::<usize>::new(-3.0).is_err());
    }
}
