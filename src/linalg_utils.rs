extern crate ndarray;

use ndarray::*;

///Sum of the diagonal entries of a square matrix.
pub fn trace(a : ArrayView2<f64>) -> f64 {
    a.diag().sum()
}

pub fn is_square(a : ArrayView2<f64>) -> bool {
    a.nrows() == a.ncols()
}

///Computes `(a + a^T) / 2`, which removes the round-off asymmetry
///left behind by triangular solves.
pub fn symmetrize(a : ArrayView2<f64>) -> Array2<f64> {
    let mut result : Array2<f64> = a.t().to_owned();
    result += &a;
    result *= 0.5f64;
    result
}

///Largest absolute difference between `a[[i, j]]` and `a[[j, i]]`.
pub fn max_asymmetry(a : ArrayView2<f64>) -> f64 {
    let n = a.nrows();
    let mut result = 0.0f64;
    for i in 0..n {
        for j in 0..i {
            let diff = (a[[i, j]] - a[[j, i]]).abs();
            result = result.max(diff);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn trace_sums_diagonal() {
        let mat = array![[1.0, 7.0], [-3.0, 4.5]];
        assert_eq!(trace(mat.view()), 5.5);
    }

    #[test]
    fn symmetrize_is_symmetric() {
        let mat = array![[1.0, 2.0], [4.0, 3.0]];
        let sym = symmetrize(mat.view());
        assert_eq!(sym, array![[1.0, 3.0], [3.0, 3.0]]);
        assert_eq!(max_asymmetry(sym.view()), 0.0);
        assert_eq!(max_asymmetry(mat.view()), 2.0);
    }
}
