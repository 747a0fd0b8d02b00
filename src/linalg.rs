//! Top-level linear algebra: `np.dot`-class products only.
//!
//! Just the products that live in `ndarray::linalg` itself — matrix and
//! matrix-vector multiply, the Kronecker product, and the [`Dot`] trait
//! behind the `dot` method. Decompositions, solvers, and BLAS/LAPACK
//! backends belong to `ndarray-linalg` and are deliberately left out.

pub use ndarray::linalg::{general_mat_mul, general_mat_vec_mul, kron, Dot};

#[cfg(test)]
mod tests {
    use ndarray::{array, Array2};

    use super::*;

    #[test]
    fn test_dot_matches_upstream() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[5.0, 6.0], [7.0, 8.0]];
        assert_eq!(a.dot(&b), array![[19.0, 22.0], [43.0, 50.0]]);
        assert_eq!(Dot::dot(&a, &b), a.dot(&b));
    }

    #[test]
    fn test_general_mat_mul() {
        let a = array![[1.0, 0.0], [0.0, 1.0]];
        let b = array![[2.0, 3.0], [4.0, 5.0]];
        let mut c = Array2::<f64>::zeros((2, 2));
        general_mat_mul(1.0, &a, &b, 0.0, &mut c);
        assert_eq!(c, b);
    }

    #[test]
    fn test_general_mat_vec_mul() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let x = array![1.0, 1.0];
        let mut y = ndarray::Array1::<f64>::zeros(2);
        general_mat_vec_mul(1.0, &a, &x, 0.0, &mut y);
        assert_eq!(y, array![3.0, 7.0]);
    }

    #[test]
    fn test_kron() {
        let a = array![[1.0, 2.0]];
        let b = array![[0.0, 1.0]];
        let k = kron(&a, &b);
        assert_eq!(k, array![[0.0, 1.0, 0.0, 2.0]]);
    }
}
