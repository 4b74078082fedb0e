use faer::Mat;
use rand::Rng;
use spdsolve::{CgSolver, Normal, SolveOptions};

fn main() {
    let (m, n) = (40, 10);
    // random tall V; A = VᵀV is never formed
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..m * n).map(|_| rng.r#gen()).collect();
    let v = Mat::from_fn(m, n, |i, j| data[j * m + i]);
    let a = Normal::new(v.as_ref());

    // rhs
    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let x0 = vec![0.0; n];

    let opts = SolveOptions::default().with_tol(1e-12).with_max_iters(5 * n);
    let mut stdout = std::io::stdout();
    let sol = CgSolver::from_options(&opts)
        .with_diagnostics(&mut stdout)
        .solve(&a, &b, &x0);
    match sol {
        Ok(sol) => println!("x = {:?}, stats = {:?}", sol.x, sol.stats),
        Err(err) => eprintln!("solve failed: {err}"),
    }
}
