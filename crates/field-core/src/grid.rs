use crate::Error;

/// Owned, contiguous, row-major grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = checked_len(rows, cols, data.len())?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { rows, cols, data })
    }

    /// Builds a grid by evaluating `f(row, col)` in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let len = rows.checked_mul(cols).expect("grid size overflow");
        let mut data = Vec::with_capacity(len);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    pub fn as_view(&self) -> GridView<'_, T> {
        GridView {
            rows: self.rows,
            cols: self.cols,
            stride: self.cols,
            data: &self.data,
        }
    }

    pub fn as_view_mut(&mut self) -> GridViewMut<'_, T> {
        GridViewMut {
            rows: self.rows,
            cols: self.cols,
            stride: self.cols,
            data: &mut self.data,
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_fill(rows: usize, cols: usize, value: T) -> Self {
        let len = rows.checked_mul(cols).expect("grid size overflow");
        Self {
            rows,
            cols,
            data: vec![value; len],
        }
    }
}

/// Borrowed read-only grid window.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T> {
    rows: usize,
    cols: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> GridView<'a, T> {
    pub fn from_slice(rows: usize, cols: usize, stride: usize, data: &'a [T]) -> Result<Self, Error> {
        validate_strided(rows, cols, stride, data.len())?;
        Ok(Self {
            rows,
            cols,
            stride,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, r: usize) -> &'a [T] {
        assert!(r < self.rows, "row index out of bounds");
        let start = r * self.stride;
        &self.data[start..start + self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.stride + col)
    }

    /// Window of `rows x cols` starting at `(row, col)`; keeps the parent stride.
    pub fn subview(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<GridView<'a, T>, Error> {
        if row > self.rows || col > self.cols || rows > self.rows - row || cols > self.cols - col {
            return Err(Error::OutOfBounds);
        }

        let start = row
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(col))
            .ok_or(Error::OutOfBounds)?;
        let tail = self.data.get(start..).ok_or(Error::OutOfBounds)?;
        if tail.len() < min_required_len(rows, cols, self.stride).ok_or(Error::OutOfBounds)? {
            return Err(Error::OutOfBounds);
        }

        Ok(GridView {
            rows,
            cols,
            stride: self.stride,
            data: tail,
        })
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.cols
    }
}

/// Borrowed mutable grid window.
#[derive(Debug)]
pub struct GridViewMut<'a, T> {
    rows: usize,
    cols: usize,
    stride: usize,
    data: &'a mut [T],
}

impl<'a, T> GridViewMut<'a, T> {
    pub fn from_slice_mut(
        rows: usize,
        cols: usize,
        stride: usize,
        data: &'a mut [T],
    ) -> Result<Self, Error> {
        validate_strided(rows, cols, stride, data.len())?;
        Ok(Self {
            rows,
            cols,
            stride,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, r: usize) -> &[T] {
        assert!(r < self.rows, "row index out of bounds");
        let start = r * self.stride;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        assert!(r < self.rows, "row index out of bounds");
        let start = r * self.stride;
        &mut self.data[start..start + self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.stride + col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get_mut(row * self.stride + col)
    }

    pub fn as_view(&self) -> GridView<'_, T> {
        GridView {
            rows: self.rows,
            cols: self.cols,
            stride: self.stride,
            data: self.data,
        }
    }
}

fn checked_len(rows: usize, cols: usize, actual: usize) -> Result<usize, Error> {
    rows.checked_mul(cols).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual,
    })
}

fn validate_strided(rows: usize, cols: usize, stride: usize, actual: usize) -> Result<(), Error> {
    if stride < cols {
        return Err(Error::InvalidStride { cols, stride });
    }

    let min_len = min_required_len(rows, cols, stride).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual,
    })?;
    if actual < min_len {
        return Err(Error::SizeMismatch {
            expected: min_len,
            actual,
        });
    }
    Ok(())
}

// The last row only needs `cols` elements, not a full stride.
fn min_required_len(rows: usize, cols: usize, stride: usize) -> Option<usize> {
    if rows == 0 || cols == 0 {
        return Some(0);
    }

    let base = (rows - 1).checked_mul(stride)?;
    base.checked_add(cols)
}

#[cfg(test)]
mod tests {
    use super::{Grid, GridView, GridViewMut};
    use crate::Error;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = Grid::from_vec(3, 4, vec![0.0f32; 11]).expect_err("short buffer");
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let g = Grid::from_fn(2, 3, |r, c| r * 10 + c);
        assert_eq!(g.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(g.get(1, 2), Some(&12));
        assert_eq!(g.get(2, 0), None);
    }

    #[test]
    fn strided_view_skips_padding() {
        let data = vec![1.0f32, 2.0, 3.0, -9.0, 4.0, 5.0, 6.0];
        let view = GridView::from_slice(2, 3, 4, &data).expect("valid view");

        assert_eq!(view.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(view.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(view.get(1, 0), Some(&4.0));
        assert_eq!(view.get(0, 3), None);
        assert!(!view.is_contiguous());
    }

    #[test]
    fn stride_smaller_than_cols_is_rejected() {
        let data = vec![0u8; 16];
        let err = GridView::from_slice(4, 4, 3, &data).expect_err("bad stride");
        assert_eq!(err, Error::InvalidStride { cols: 4, stride: 3 });
    }

    #[test]
    fn subview_keeps_parent_stride() {
        let g = Grid::from_fn(4, 5, |r, c| (r * 5 + c) as i32);
        let sub = g.as_view().subview(1, 2, 3, 3).expect("valid subview");

        assert_eq!(sub.rows(), 3);
        assert_eq!(sub.cols(), 3);
        assert_eq!(sub.stride(), 5);
        assert_eq!(sub.row(0), &[7, 8, 9]);
        assert_eq!(sub.row(2), &[17, 18, 19]);
        assert!(g.as_view().subview(2, 0, 3, 1).is_err());
    }

    #[test]
    fn view_mut_writes_through_stride() {
        let mut data = vec![0i8; 7];
        let mut view = GridViewMut::from_slice_mut(2, 3, 4, &mut data).expect("valid view");
        *view.get_mut(1, 1).expect("in bounds") = 1;
        view.row_mut(0)[2] = -1;

        assert_eq!(view.as_view().row(1), &[0, 1, 0]);
        assert_eq!(data, vec![0, 0, -1, 0, 0, 1, 0]);
    }
}
