//! Dense row-major matrices over an exact ring.
//!
//! The double description and Barvinok algorithms edit their matrices
//! heavily in place: rows and columns are inserted, erased, swapped and
//! recombined as the computation walks over the inequality system. The
//! editing surface below mirrors those access patterns directly rather
//! than going through slices of slices.

use std::fmt;
use std::ops::{Index, IndexMut, Neg};

use ehrhart_integers::{Field, Integer, Rational, Ring};

/// A dense matrix over a ring `R`, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix<R> {
    rows: usize,
    cols: usize,
    data: Vec<R>,
}

/// Dot product of two equal-length slices.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn dot<R: Ring>(a: &[R], b: &[R]) -> R {
    assert_eq!(a.len(), b.len(), "dot product length mismatch");
    let mut acc = R::zero();
    for (x, y) in a.iter().zip(b) {
        acc = acc + x.clone() * y.clone();
    }
    acc
}

impl<R: Ring> Matrix<R> {
    /// Creates a matrix of the given shape filled with zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![R::zero(); rows * cols],
        }
    }

    /// Creates the n-by-n identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Creates a matrix from a list of equal-length rows.
    ///
    /// An empty list gives the 0-by-0 matrix.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            assert_eq!(row.len(), ncols, "rows must have equal length");
            data.extend(row);
        }
        Self {
            rows: nrows,
            cols: ncols,
            data,
        }
    }

    /// Creates a matrix whose entry at `(i, j)` is `f(i, j)`.
    #[must_use]
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> R) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// An empty matrix with zero rows and the given number of columns.
    ///
    /// Useful as the starting point for incremental row insertion.
    #[must_use]
    pub fn empty(cols: usize) -> Self {
        Self {
            rows: 0,
            cols,
            data: Vec::new(),
        }
    }

    /// The number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns true if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A view of row `i` as a slice.
    #[must_use]
    pub fn row(&self, i: usize) -> &[R] {
        assert!(i < self.rows, "row index out of bounds");
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// A mutable view of row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [R] {
        assert!(i < self.rows, "row index out of bounds");
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copies row `i` out into a vector.
    #[must_use]
    pub fn row_vec(&self, i: usize) -> Vec<R> {
        self.row(i).to_vec()
    }

    /// Copies column `j` out into a vector.
    #[must_use]
    pub fn col_vec(&self, j: usize) -> Vec<R> {
        assert!(j < self.cols, "column index out of bounds");
        (0..self.rows).map(|i| self[(i, j)].clone()).collect()
    }

    /// Swaps rows `i` and `k`.
    pub fn swap_rows(&mut self, i: usize, k: usize) {
        assert!(i < self.rows && k < self.rows, "row index out of bounds");
        if i == k {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(i * self.cols + j, k * self.cols + j);
        }
    }

    /// Swaps columns `j` and `l`.
    pub fn swap_cols(&mut self, j: usize, l: usize) {
        assert!(j < self.cols && l < self.cols, "column index out of bounds");
        if j == l {
            return;
        }
        for i in 0..self.rows {
            self.data.swap(i * self.cols + j, i * self.cols + l);
        }
    }

    /// Inserts `row` before index `i` (so `i == nrows()` appends).
    ///
    /// # Panics
    ///
    /// Panics if the row length does not match `ncols()`.
    pub fn insert_row(&mut self, i: usize, row: &[R]) {
        assert!(i <= self.rows, "row index out of bounds");
        assert_eq!(row.len(), self.cols, "row length mismatch");
        let at = i * self.cols;
        self.data.splice(at..at, row.iter().cloned());
        self.rows += 1;
    }

    /// Appends `row` at the bottom.
    pub fn push_row(&mut self, row: &[R]) {
        self.insert_row(self.rows, row);
    }

    /// Removes row `i`.
    pub fn erase_row(&mut self, i: usize) {
        assert!(i < self.rows, "row index out of bounds");
        let at = i * self.cols;
        self.data.drain(at..at + self.cols);
        self.rows -= 1;
    }

    /// Removes every row whose index appears in `indices`.
    ///
    /// Indices may be given in any order; duplicates are ignored.
    pub fn erase_rows(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        for &i in sorted.iter().rev() {
            self.erase_row(i);
        }
    }

    /// Removes row `i` and returns it.
    #[must_use]
    pub fn take_row(&mut self, i: usize) -> Vec<R> {
        let row = self.row_vec(i);
        self.erase_row(i);
        row
    }

    /// The submatrix formed by the given rows, in the given order.
    #[must_use]
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &i in indices {
            data.extend_from_slice(self.row(i));
        }
        Self {
            rows: indices.len(),
            cols: self.cols,
            data,
        }
    }

    /// Appends all rows of `other` at the bottom.
    ///
    /// # Panics
    ///
    /// Panics if the column counts differ.
    pub fn append_rows(&mut self, other: &Self) {
        assert_eq!(self.cols, other.cols, "column count mismatch");
        self.data.extend_from_slice(&other.data);
        self.rows += other.rows;
    }

    /// Inserts `col` before column index `j` (so `j == ncols()` appends).
    ///
    /// # Panics
    ///
    /// Panics if the column length does not match `nrows()`.
    pub fn insert_col(&mut self, j: usize, col: &[R]) {
        assert!(j <= self.cols, "column index out of bounds");
        assert_eq!(col.len(), self.rows, "column length mismatch");
        // Insert back to front so earlier positions stay valid.
        for i in (0..self.rows).rev() {
            self.data.insert(i * self.cols + j, col[i].clone());
        }
        self.cols += 1;
    }

    /// Removes column `j`.
    pub fn erase_col(&mut self, j: usize) {
        assert!(j < self.cols, "column index out of bounds");
        for i in (0..self.rows).rev() {
            self.data.remove(i * self.cols + j);
        }
        self.cols -= 1;
    }

    /// Removes column `j` and returns it.
    #[must_use]
    pub fn take_col(&mut self, j: usize) -> Vec<R> {
        let col = self.col_vec(j);
        self.erase_col(j);
        col
    }

    /// Overwrites column `j` with `col`.
    ///
    /// # Panics
    ///
    /// Panics if the column length does not match `nrows()`.
    pub fn assign_col(&mut self, j: usize, col: &[R]) {
        assert!(j < self.cols, "column index out of bounds");
        assert_eq!(col.len(), self.rows, "column length mismatch");
        for (i, v) in col.iter().enumerate() {
            self[(i, j)] = v.clone();
        }
    }

    /// Multiplies row `i` by `c`.
    pub fn scale_row(&mut self, i: usize, c: &R) {
        for v in self.row_mut(i) {
            *v = v.clone() * c.clone();
        }
    }

    /// Adds `c` times row `src` to row `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst == src`.
    pub fn add_scaled_row(&mut self, dst: usize, src: usize, c: &R) {
        assert_ne!(dst, src, "source and destination rows must differ");
        for j in 0..self.cols {
            let t = self[(src, j)].clone() * c.clone();
            self[(dst, j)] = self[(dst, j)].clone() + t;
        }
    }

    /// Multiplies column `j` by `c`.
    pub fn scale_col(&mut self, j: usize, c: &R) {
        for i in 0..self.rows {
            self[(i, j)] = self[(i, j)].clone() * c.clone();
        }
    }

    /// Adds `c` times column `src` to column `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst == src`.
    pub fn add_scaled_col(&mut self, dst: usize, src: usize, c: &R) {
        assert_ne!(dst, src, "source and destination columns must differ");
        for i in 0..self.rows {
            let t = self[(i, src)].clone() * c.clone();
            self[(i, dst)] = self[(i, dst)].clone() + t;
        }
    }

    /// The transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)].clone())
    }

    /// Matrix product `self * other`.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not agree.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.cols, other.rows, "inner dimension mismatch");
        Self::from_fn(self.rows, other.cols, |i, j| {
            let mut acc = R::zero();
            for k in 0..self.cols {
                acc = acc + self[(i, k)].clone() * other[(k, j)].clone();
            }
            acc
        })
    }

    /// Matrix-vector product `self * v`.
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != ncols()`.
    #[must_use]
    pub fn mv(&self, v: &[R]) -> Vec<R> {
        assert_eq!(v.len(), self.cols, "vector length mismatch");
        (0..self.rows).map(|i| dot(self.row(i), v)).collect()
    }

    /// Applies `f` to every entry, producing a matrix over another ring.
    #[must_use]
    pub fn map<S: Ring>(&self, f: impl Fn(&R) -> S) -> Matrix<S> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Returns true if every entry is zero (vacuously true when empty).
    #[must_use]
    pub fn is_zero_matrix(&self) -> bool {
        self.data.iter().all(R::is_zero)
    }

    /// Returns true if every entry of row `i` is zero.
    #[must_use]
    pub fn row_is_zero(&self, i: usize) -> bool {
        self.row(i).iter().all(R::is_zero)
    }

    /// Returns true if every entry of column `j` is zero.
    #[must_use]
    pub fn col_is_zero(&self, j: usize) -> bool {
        (0..self.rows).all(|i| self[(i, j)].is_zero())
    }
}

impl<R> Index<(usize, usize)> for Matrix<R> {
    type Output = R;

    fn index(&self, (i, j): (usize, usize)) -> &R {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        &self.data[i * self.cols + j]
    }
}

impl<R> IndexMut<(usize, usize)> for Matrix<R> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut R {
        assert!(i < self.rows && j < self.cols, "index out of bounds");
        &mut self.data[i * self.cols + j]
    }
}

impl<R: Ring> Neg for &Matrix<R> {
    type Output = Matrix<R>;

    fn neg(self) -> Matrix<R> {
        self.map(|v| -v.clone())
    }
}

impl<R: Ring + fmt::Display> fmt::Debug for Matrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix {}x{} [", self.rows, self.cols)?;
        for i in 0..self.rows {
            write!(f, "  ")?;
            for j in 0..self.cols {
                write!(f, "{} ", self[(i, j)])?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

impl Matrix<Integer> {
    /// The determinant, computed by fraction-free (Bareiss) elimination.
    ///
    /// All intermediate divisions are exact, so the result is exact and
    /// intermediate entries stay polynomially bounded.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn det(&self) -> Integer {
        assert!(self.is_square(), "determinant of a non-square matrix");
        let n = self.rows;
        if n == 0 {
            return Integer::new(1);
        }
        let mut m = self.clone();
        let mut prev = Integer::new(1);
        let mut sign = 1i8;
        for k in 0..n - 1 {
            if m[(k, k)].is_zero() {
                let Some(p) = (k + 1..n).find(|&i| !m[(i, k)].is_zero()) else {
                    return Integer::new(0);
                };
                m.swap_rows(k, p);
                sign = -sign;
            }
            for i in k + 1..n {
                for j in k + 1..n {
                    let t = &(&m[(i, j)] * &m[(k, k)]) - &(&m[(i, k)] * &m[(k, j)]);
                    m[(i, j)] = &t / &prev;
                }
                m[(i, k)] = Integer::new(0);
            }
            prev = m[(k, k)].clone();
        }
        let d = m[(n - 1, n - 1)].clone();
        if sign < 0 {
            -d
        } else {
            d
        }
    }

    /// The rank over the rationals.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.to_rational().rank()
    }

    /// The gcd of the entries of row `i` (non-negative).
    #[must_use]
    pub fn row_content(&self, i: usize) -> Integer {
        let mut g = Integer::new(0);
        for v in self.row(i) {
            g = g.gcd(v);
        }
        g
    }

    /// Divides row `i` by `c`, which must divide every entry exactly.
    pub fn div_row_exact(&mut self, i: usize, c: &Integer) {
        debug_assert!(!c.is_zero());
        for v in self.row_mut(i) {
            debug_assert!(v.is_divisible_by(c) || num_traits::Zero::is_zero(v));
            *v = &*v / c;
        }
    }

    /// Divides every entry of row `i` by the row's content, making the
    /// row primitive. A zero row is left unchanged.
    pub fn normalize_row(&mut self, i: usize) {
        let g = self.row_content(i);
        if !g.is_zero() && !num_traits::One::is_one(&g) {
            self.div_row_exact(i, &g);
        }
    }

    /// Converts to a rational matrix.
    #[must_use]
    pub fn to_rational(&self) -> Matrix<Rational> {
        self.map(|v| Rational::from_integer(v.clone()))
    }

    /// The adjugate, satisfying `self * adjugate == det * identity`.
    ///
    /// Computed as the transposed cofactor matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn adjugate(&self) -> Self {
        assert!(self.is_square(), "adjugate of a non-square matrix");
        let n = self.rows;
        if n == 0 {
            return Self::zeros(0, 0);
        }
        if n == 1 {
            return Self::identity(1);
        }
        Self::from_fn(n, n, |i, j| {
            // Cofactor C[j][i]: minor with row j and column i removed.
            let minor = Self::from_fn(n - 1, n - 1, |r, c| {
                let rr = if r < j { r } else { r + 1 };
                let cc = if c < i { c } else { c + 1 };
                self[(rr, cc)].clone()
            });
            let d = minor.det();
            if (i + j) % 2 == 0 {
                d
            } else {
                -d
            }
        })
    }
}

impl Matrix<Rational> {
    /// Reduces to reduced row echelon form in place; returns the rank.
    pub fn rref_in_place(&mut self) -> usize {
        let mut pivot_row = 0;
        for col in 0..self.cols {
            if pivot_row >= self.rows {
                break;
            }
            let Some(p) = (pivot_row..self.rows).find(|&i| !self[(i, col)].is_zero()) else {
                continue;
            };
            self.swap_rows(pivot_row, p);
            let inv = self[(pivot_row, col)]
                .inv()
                .unwrap_or_else(Rational::one);
            self.scale_row(pivot_row, &inv);
            for i in 0..self.rows {
                if i != pivot_row && !self[(i, col)].is_zero() {
                    let c = -self[(i, col)].clone();
                    self.add_scaled_row(i, pivot_row, &c);
                }
            }
            pivot_row += 1;
        }
        pivot_row
    }

    /// The reduced row echelon form.
    #[must_use]
    pub fn rref(&self) -> Self {
        let mut m = self.clone();
        m.rref_in_place();
        m
    }

    /// The rank.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.clone().rref_in_place()
    }

    /// The determinant, by Gaussian elimination.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn det(&self) -> Rational {
        assert!(self.is_square(), "determinant of a non-square matrix");
        let n = self.rows;
        let mut m = self.clone();
        let mut det = Rational::one();
        for k in 0..n {
            let Some(p) = (k..n).find(|&i| !m[(i, k)].is_zero()) else {
                return Rational::zero();
            };
            if p != k {
                m.swap_rows(k, p);
                det = -det;
            }
            det = det * m[(k, k)].clone();
            let inv = m[(k, k)].recip();
            for i in k + 1..n {
                if !m[(i, k)].is_zero() {
                    let c = -(m[(i, k)].clone() * inv.clone());
                    m.add_scaled_row(i, k, &c);
                }
            }
        }
        det
    }

    /// The inverse, or `None` if the matrix is singular.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        assert!(self.is_square(), "inverse of a non-square matrix");
        let n = self.rows;
        let mut aug = Self::from_fn(n, 2 * n, |i, j| {
            if j < n {
                self[(i, j)].clone()
            } else if j - n == i {
                Rational::one()
            } else {
                Rational::zero()
            }
        });
        if aug.rref_in_place() < n {
            return None;
        }
        Some(Self::from_fn(n, n, |i, j| aug[(i, j + n)].clone()))
    }

    /// Solves `self * x == b` for a square nonsingular system.
    ///
    /// Returns `None` if the matrix is singular.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square or `b` has the wrong length.
    #[must_use]
    pub fn solve(&self, b: &[Rational]) -> Option<Vec<Rational>> {
        assert!(self.is_square(), "solve needs a square system");
        assert_eq!(b.len(), self.rows, "right-hand side length mismatch");
        let n = self.rows;
        let mut aug = Self::from_fn(n, n + 1, |i, j| {
            if j < n {
                self[(i, j)].clone()
            } else {
                b[i].clone()
            }
        });
        aug.rref_in_place();
        for i in 0..n {
            if aug[(i, i)].is_zero() {
                return None;
            }
        }
        Some((0..n).map(|i| aug[(i, n)].clone()).collect())
    }

    /// Converts to an integer matrix if every entry is an integer.
    #[must_use]
    pub fn to_integer(&self) -> Option<Matrix<Integer>> {
        let mut data = Vec::with_capacity(self.data.len());
        for v in &self.data {
            data.push(v.to_integer()?);
        }
        Some(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Clears denominators row by row: each row is scaled by the lcm of
    /// its denominators and divided by the gcd of the resulting entries,
    /// giving a primitive integer row with the same sign.
    #[must_use]
    pub fn primitive_rows(&self) -> Matrix<Integer> {
        let mut out = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            let mut l = Integer::new(1);
            for v in self.row(i) {
                l = l.lcm(&v.denominator());
            }
            for j in 0..self.cols {
                let scaled = self[(i, j)].clone() * Rational::from_integer(l.clone());
                out[(i, j)] = scaled
                    .to_integer()
                    .unwrap_or_else(|| Integer::new(0));
            }
            out.normalize_row(i);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_matrix(rows: &[&[i64]]) -> Matrix<Integer> {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Integer::new(v)).collect())
                .collect(),
        )
    }

    fn rat_matrix(rows: &[&[i64]]) -> Matrix<Rational> {
        int_matrix(rows).to_rational()
    }

    #[test]
    fn test_row_col_editing() {
        let mut m = int_matrix(&[&[1, 2], &[3, 4], &[5, 6]]);
        m.insert_col(1, &[Integer::new(7), Integer::new(8), Integer::new(9)]);
        assert_eq!(m.row_vec(0), vec![Integer::new(1), Integer::new(7), Integer::new(2)]);

        let col = m.take_col(1);
        assert_eq!(col, vec![Integer::new(7), Integer::new(8), Integer::new(9)]);
        assert_eq!(m, int_matrix(&[&[1, 2], &[3, 4], &[5, 6]]));

        m.erase_rows(&[2, 0]);
        assert_eq!(m, int_matrix(&[&[3, 4]]));

        m.push_row(&[Integer::new(0), Integer::new(1)]);
        assert_eq!(m.nrows(), 2);
    }

    #[test]
    fn test_erase_rows_unsorted() {
        let mut m = int_matrix(&[&[0], &[1], &[2], &[3], &[4]]);
        m.erase_rows(&[3, 1, 3]);
        assert_eq!(m, int_matrix(&[&[0], &[2], &[4]]));
    }

    #[test]
    fn test_mm_mv() {
        let a = int_matrix(&[&[1, 2], &[3, 4]]);
        let b = int_matrix(&[&[0, 1], &[1, 0]]);
        assert_eq!(a.mm(&b), int_matrix(&[&[2, 1], &[4, 3]]));
        assert_eq!(
            a.mv(&[Integer::new(1), Integer::new(-1)]),
            vec![Integer::new(-1), Integer::new(-1)]
        );
    }

    #[test]
    fn test_bareiss_det() {
        assert_eq!(int_matrix(&[&[2]]).det(), Integer::new(2));
        assert_eq!(int_matrix(&[&[1, 2], &[3, 4]]).det(), Integer::new(-2));
        // Singular.
        assert_eq!(
            int_matrix(&[&[1, 2, 3], &[2, 4, 6], &[1, 0, 1]]).det(),
            Integer::new(0)
        );
        // Needs a row swap.
        assert_eq!(
            int_matrix(&[&[0, 1, 2], &[1, 0, 3], &[4, 5, 6]]).det(),
            Integer::new(25)
        );
        // 3x3 with known determinant.
        assert_eq!(
            int_matrix(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 1]]).det(),
            Integer::new(2)
        );
    }

    #[test]
    fn test_adjugate() {
        let m = int_matrix(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 1]]);
        let adj = m.adjugate();
        let d = m.det();
        let prod = m.mm(&adj);
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { d.clone() } else { Integer::new(0) };
                assert_eq!(prod[(i, j)], expect);
            }
        }
    }

    #[test]
    fn test_rank() {
        assert_eq!(int_matrix(&[&[1, 2], &[2, 4]]).rank(), 1);
        assert_eq!(int_matrix(&[&[1, 0], &[0, 1]]).rank(), 2);
        assert_eq!(Matrix::<Integer>::zeros(3, 2).rank(), 0);
    }

    #[test]
    fn test_rref() {
        let m = rat_matrix(&[&[2, 4], &[1, 3]]);
        let r = m.rref();
        assert_eq!(r, rat_matrix(&[&[1, 0], &[0, 1]]));

        let m = rat_matrix(&[&[1, 2, 3], &[2, 4, 6]]);
        let r = m.rref();
        assert_eq!(r.row_vec(1), vec![Rational::from(0); 3]);
    }

    #[test]
    fn test_inverse_and_solve() {
        let m = rat_matrix(&[&[2, 1], &[1, 1]]);
        let inv = m.inverse().unwrap();
        assert_eq!(m.mm(&inv), Matrix::identity(2));

        let x = m
            .solve(&[Rational::from(3), Rational::from(2)])
            .unwrap();
        assert_eq!(x, vec![Rational::from(1), Rational::from(1)]);

        assert!(rat_matrix(&[&[1, 2], &[2, 4]]).inverse().is_none());
    }

    #[test]
    fn test_normalize_row() {
        let mut m = int_matrix(&[&[4, -6, 8]]);
        m.normalize_row(0);
        assert_eq!(m, int_matrix(&[&[2, -3, 4]]));
    }

    #[test]
    fn test_primitive_rows() {
        let m = Matrix::from_rows(vec![
            vec![Rational::from_i64(1, 2), Rational::from_i64(-3, 4)],
            vec![Rational::from(0), Rational::from(2)],
        ]);
        let p = m.primitive_rows();
        assert_eq!(p, int_matrix(&[&[2, -3], &[0, 1]]));
    }

    #[test]
    fn test_transpose_neg() {
        let m = int_matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(m.transpose(), int_matrix(&[&[1, 4], &[2, 5], &[3, 6]]));
        assert_eq!(-&m, int_matrix(&[&[-1, -2, -3], &[-4, -5, -6]]));
    }
}
