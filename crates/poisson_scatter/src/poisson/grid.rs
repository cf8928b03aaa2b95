//! Uniform acceleration grid holding at most one accepted sample per cell.
use std::f32::consts::SQRT_2;

use glam::Vec2;

use crate::error::{Error, Result};
use crate::events::RejectReason;

/// Largest grid the builder will allocate.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Relative slack applied to the minimum distance when validating candidates.
///
/// Candidates are spawned exactly `min_dist` away from their parent, so rounding
/// would otherwise reject roughly half of them against that parent.
pub const DISTANCE_TOLERANCE: f32 = 1e-4;

/// Cells scanned on each side of a candidate's cell. Two points closer than
/// `min_dist` can be up to two cells apart along one axis.
const NEIGHBORHOOD_RADIUS: isize = 2;

/// Flat `cols x rows` grid with `index = col + row * cols`.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    min_dist: f32,
    reject_below_sq: f32,
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Option<Vec2>>,
    occupied: usize,
}

impl SampleGrid {
    /// Builds an empty grid covering `[0, width] x [0, height]` with cell size `min_dist / √2`.
    ///
    /// Column and row counts truncate, so the grid never extends past the domain.
    pub fn new(width: f32, height: f32, min_dist: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(Error::InvalidConfig(
                "grid extents must be finite and > 0".into(),
            ));
        }
        if !min_dist.is_finite() || min_dist <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_dist must be finite and > 0".into(),
            ));
        }

        let cell_size = min_dist / SQRT_2;
        let cols = (width / cell_size).floor();
        let rows = (height / cell_size).floor();

        if cols < 1.0 || rows < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "min_dist {min_dist} yields an empty grid for a {width}x{height} domain"
            )));
        }
        if f64::from(cols) * f64::from(rows) > MAX_GRID_CELLS as f64 {
            return Err(Error::InvalidConfig(format!(
                "grid of {cols}x{rows} cells exceeds the limit of {MAX_GRID_CELLS}"
            )));
        }

        let cols = cols as usize;
        let rows = rows as usize;
        let reject_below = min_dist * (1.0 - DISTANCE_TOLERANCE);

        Ok(Self {
            min_dist,
            reject_below_sq: reject_below * reject_below,
            cell_size,
            cols,
            rows,
            cells: vec![None; cols * rows],
            occupied: 0,
        })
    }

    #[inline]
    pub fn min_dist(&self) -> f32 {
        self.min_dist
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        col + row * self.cols
    }

    /// Column and row of the cell containing `point`, or `None` past the grid's edges.
    pub fn cell_coords(&self, point: Vec2) -> Option<(usize, usize)> {
        if !point.is_finite() {
            return None;
        }
        let col = (point.x / self.cell_size).floor();
        let row = (point.y / self.cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    /// Linear cell index of `point`, or `None` past the grid's edges.
    pub fn index_of(&self, point: Vec2) -> Option<usize> {
        self.cell_coords(point)
            .map(|(col, row)| self.index(col, row))
    }

    /// Point stored at `(col, row)`, if any.
    pub fn get(&self, col: usize, row: usize) -> Option<Vec2> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[self.index(col, row)]
    }

    /// Whether `candidate` keeps the minimum distance to every stored neighbor.
    ///
    /// A stored point equal to the candidate is skipped.
    pub fn is_valid(&self, candidate: Vec2) -> bool {
        let col = (candidate.x / self.cell_size).floor() as isize;
        let row = (candidate.y / self.cell_size).floor() as isize;
        let cols = self.cols as isize;
        let rows = self.rows as isize;

        for dr in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
            let r = row.saturating_add(dr);
            if r < 0 || r >= rows {
                continue;
            }
            for dc in -NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS {
                let c = col.saturating_add(dc);
                if c < 0 || c >= cols {
                    continue;
                }
                let Some(existing) = self.cells[self.index(c as usize, r as usize)] else {
                    continue;
                };
                if existing == candidate {
                    continue;
                }
                if existing.distance_squared(candidate) < self.reject_below_sq {
                    return false;
                }
            }
        }

        true
    }

    /// Stores `point` in its cell and returns the cell index.
    ///
    /// Fails with [`RejectReason::OutsideGrid`] past the grid's edges and with
    /// [`RejectReason::TooClose`] when the cell is already taken.
    pub fn insert(&mut self, point: Vec2) -> std::result::Result<usize, RejectReason> {
        let idx = self.index_of(point).ok_or(RejectReason::OutsideGrid)?;
        let cell = &mut self.cells[idx];
        if cell.is_some() {
            return Err(RejectReason::TooClose);
        }
        *cell = Some(point);
        self.occupied += 1;
        Ok(idx)
    }

    /// Occupied cells in grid order (row-major).
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Consumes the grid, returning its points in grid order.
    pub fn into_points(self) -> Vec<Vec2> {
        self.cells.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_truncate_to_whole_cells() {
        let grid = SampleGrid::new(100.0, 50.0, 10.0).expect("grid");
        let cell = 10.0 / SQRT_2;
        assert!((grid.cell_size() - cell).abs() < 1e-6);
        assert_eq!(grid.cols(), (100.0 / cell).floor() as usize);
        assert_eq!(grid.rows(), (50.0 / cell).floor() as usize);
        assert_eq!(grid.cols(), 14);
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cell_count(), 14 * 7);
        assert!(grid.is_empty());
    }

    #[test]
    fn zero_cell_grid_is_a_config_error() {
        let err = SampleGrid::new(10.0, 10.0, 15.0).expect_err("grid should be empty");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn oversized_grid_is_a_config_error() {
        let err = SampleGrid::new(1.0e6, 1.0e6, 0.01).expect_err("grid should be too large");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(SampleGrid::new(0.0, 10.0, 1.0).is_err());
        assert!(SampleGrid::new(10.0, 10.0, 0.0).is_err());
        assert!(SampleGrid::new(10.0, 10.0, f32::NAN).is_err());
    }

    #[test]
    fn cell_coords_map_points_and_reject_outside() {
        let grid = SampleGrid::new(100.0, 100.0, 10.0).expect("grid");
        assert_eq!(grid.cell_coords(Vec2::new(1.0, 1.0)), Some((0, 0)));
        assert_eq!(grid.cell_coords(Vec2::new(15.0, 1.0)), Some((2, 0)));
        assert_eq!(grid.index_of(Vec2::new(1.0, 15.0)), Some(2 * grid.cols()));
        assert_eq!(grid.cell_coords(Vec2::new(-0.5, 1.0)), None);
        assert_eq!(grid.cell_coords(Vec2::new(99.5, 1.0)), None);
        assert_eq!(grid.cell_coords(Vec2::new(f32::NAN, 1.0)), None);
    }

    #[test]
    fn insert_stores_point_and_refuses_taken_cell() {
        let mut grid = SampleGrid::new(100.0, 100.0, 10.0).expect("grid");
        let idx = grid.insert(Vec2::new(3.0, 3.0)).expect("inserted");
        assert_eq!(idx, 0);
        assert_eq!(grid.get(0, 0), Some(Vec2::new(3.0, 3.0)));
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.insert(Vec2::new(4.0, 4.0)), Err(RejectReason::TooClose));
        assert_eq!(
            grid.insert(Vec2::new(99.5, 3.0)),
            Err(RejectReason::OutsideGrid)
        );
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn is_valid_rejects_close_neighbors() {
        let mut grid = SampleGrid::new(100.0, 100.0, 10.0).expect("grid");
        grid.insert(Vec2::new(50.0, 50.0)).expect("inserted");
        assert!(!grid.is_valid(Vec2::new(55.0, 50.0)));
        assert!(!grid.is_valid(Vec2::new(50.0, 41.0)));
        assert!(grid.is_valid(Vec2::new(61.0, 50.0)));
        assert!(grid.is_valid(Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn is_valid_sees_conflicts_two_cells_away() {
        let mut grid = SampleGrid::new(100.0, 100.0, 10.0).expect("grid");
        let a = Vec2::new(7.0, 20.0);
        let b = Vec2::new(16.5, 20.0);
        assert_eq!(grid.cell_coords(a).map(|c| c.0), Some(0));
        assert_eq!(grid.cell_coords(b).map(|c| c.0), Some(2));
        grid.insert(a).expect("inserted");
        assert!(!grid.is_valid(b));
    }

    #[test]
    fn is_valid_accepts_point_exactly_min_dist_away() {
        let mut grid = SampleGrid::new(100.0, 100.0, 10.0).expect("grid");
        let parent = Vec2::new(40.0, 40.0);
        grid.insert(parent).expect("inserted");
        let angle = 0.7_f32;
        let child = parent + Vec2::new(angle.sin(), angle.cos()) * 10.0;
        assert!(grid.is_valid(child));
    }

    #[test]
    fn is_valid_skips_identical_point() {
        let mut grid = SampleGrid::new(100.0, 100.0, 10.0).expect("grid");
        let p = Vec2::new(30.0, 30.0);
        grid.insert(p).expect("inserted");
        assert!(grid.is_valid(p));
    }

    #[test]
    fn points_come_out_in_grid_order() {
        let mut grid = SampleGrid::new(100.0, 100.0, 10.0).expect("grid");
        let late = Vec2::new(3.0, 90.0);
        let early = Vec2::new(90.0, 3.0);
        grid.insert(late).expect("inserted");
        grid.insert(early).expect("inserted");
        let points: Vec<Vec2> = grid.points().collect();
        assert_eq!(points, vec![early, late]);
        assert_eq!(grid.into_points(), vec![early, late]);
    }
}
