//! Integration tests for caller-supplied preconditioners.
//!
//! The solver never builds a preconditioner; here the tests build simple ones
//! (identity, Jacobi as a closure over the diagonal) and check that PCG
//! converges to the right answer, and faster than plain CG where it should.

use faer::Mat;
use spdsolve::{CgSolver, Identity, IterationSequence, LinearOperator, PcgSequence};

/// Construct a symmetric positive definite (SPD) tridiagonal matrix of size `n`.
/// Returns the matrix, the right-hand side vector `b` for the solution x = [1, ..., 1],
/// and the true solution vector.
fn spd_matrix(n: usize) -> (Mat<f64>, Vec<f64>, Vec<f64>) {
    let mut a = Mat::zeros(n, n);
    for i in 0..n {
        a[(i, i)] = 2.0;
        if i > 0 {
            a[(i, i - 1)] = -1.0;
            a[(i - 1, i)] = -1.0;
        }
    }
    let x_true = vec![1.0; n];
    let b = LinearOperator::apply(&a, &x_true);
    (a, b, x_true)
}

/// Strongly varying diagonal `1 + i²` with a weak `-0.1` coupling.
fn badly_scaled(n: usize) -> Mat<f64> {
    let mut a = Mat::zeros(n, n);
    for i in 0..n {
        a[(i, i)] = 1.0 + (i * i) as f64;
        if i > 0 {
            a[(i, i - 1)] = -0.1;
            a[(i - 1, i)] = -0.1;
        }
    }
    a
}

/// Jacobi preconditioner `D⁻¹` as a closure.
fn jacobi(a: &Mat<f64>) -> impl Fn(&[f64]) -> Vec<f64> {
    let inv_diag: Vec<f64> = (0..a.nrows()).map(|i| 1.0 / a[(i, i)]).collect();
    move |r: &[f64]| r.iter().zip(&inv_diag).map(|(ri, di)| ri * di).collect()
}

/// Compute the relative L2 error between two vectors.
fn rel_error(x: &[f64], x_true: &[f64]) -> f64 {
    let num: f64 = x.iter().zip(x_true).map(|(xi, ti)| (xi - ti).powi(2)).sum();
    let denom: f64 = x_true.iter().map(|ti| ti.powi(2)).sum();
    (num / denom).sqrt()
}

/// PCG with Jacobi on the 1-D Laplacian converges to the true solution within n steps.
#[test]
fn spd_jacobi_pcg_converges() {
    let n = 10;
    let (a, b, x_true) = spd_matrix(n);
    let pc = jacobi(&a);
    let sol = CgSolver::new(1e-12, 2 * n)
        .solve_preconditioned(&a, &b, &pc, &vec![0.0; n])
        .unwrap();
    assert!(sol.stats.converged);
    assert!(rel_error(&sol.x, &x_true) < 1e-10);
    assert!(sol.stats.iterations <= n);
}

/// CG (no preconditioner) on the same matrix.
#[test]
fn spd_no_pc_cg_converges() {
    let n = 10;
    let (a, b, x_true) = spd_matrix(n);
    let sol = CgSolver::new(1e-12, 2 * n).solve(&a, &b, &vec![0.0; n]).unwrap();
    assert!(sol.stats.converged);
    assert!(rel_error(&sol.x, &x_true) < 1e-10);
}

/// Jacobi removes the bad scaling, so PCG needs far fewer iterations than CG.
#[test]
fn jacobi_beats_plain_cg_on_bad_scaling() {
    let n = 30;
    let a = badly_scaled(n);
    let x_true: Vec<f64> = (0..n).map(|i| (i as f64 * 0.3).cos()).collect();
    let b = LinearOperator::apply(&a, &x_true);
    let x0 = vec![0.0; n];
    let pc = jacobi(&a);

    let cg = CgSolver::new(1e-10, 4 * n).solve(&a, &b, &x0).unwrap();
    let pcg = CgSolver::new(1e-10, 4 * n)
        .solve_preconditioned(&a, &b, &pc, &x0)
        .unwrap();
    assert!(cg.stats.converged && pcg.stats.converged);
    assert!(
        pcg.stats.iterations < cg.stats.iterations,
        "pcg {} vs cg {}",
        pcg.stats.iterations,
        cg.stats.iterations
    );
    assert!(rel_error(&pcg.x, &x_true) < 1e-8);
    assert!(rel_error(&cg.x, &x_true) < 1e-8);
}

/// Reported residuals do not depend on the preconditioner.
#[test]
fn reported_residual_ignores_preconditioner() {
    let n = 6;
    let (a, b, _) = spd_matrix(n);
    let x0: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let pc = jacobi(&a);
    let with_identity = PcgSequence::new(&a, &b, &Identity, &x0).unwrap();
    let with_jacobi = PcgSequence::new(&a, &b, &pc, &x0).unwrap();
    assert_eq!(with_identity.residual(), with_jacobi.residual());
    assert_eq!(with_identity.objective(), with_jacobi.objective());
}
