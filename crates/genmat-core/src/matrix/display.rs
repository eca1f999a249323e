//! Text rendering for [`Matrix`].
//!
//! One line per row, values separated by a single tab, every row (the last
//! included) terminated by `\n`. The empty matrix renders as `""`.

use core::fmt;

use crate::Scalar;

use super::Matrix;

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for row in self.data.chunks(self.cols) {
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{v}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    /// The rendered text form as an owned string.
    ///
    /// ```
    /// # use genmat_core::Matrix;
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.render(), "1\t2\n3\t4\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}
