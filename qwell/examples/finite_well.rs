use qwell::{
    potential::Potential,
    solve::{ solve_well, Lapack, Well },
};

// solve for the bound states of a deep finite square well

fn main() {
    const DEPTH: f64 = 100.0;
    const WIDTH: f64 = 1.0;
    const POINTS: usize = 2000;

    let well = Well::with_default_domain(
        Potential::Square { depth: DEPTH, width: WIDTH },
        POINTS,
    ).unwrap();
    let sol = solve_well(&well, &Lapack).unwrap();

    // an infinitely deep well of the same width gives a rough upper ladder
    let e_box = |k: usize| {
        let kk = (k + 1) as f64;
        (kk * std::f64::consts::PI / WIDTH).powi(2) / 2.0 - DEPTH
    };

    println!("{} bound states", sol.n_bound);
    for (k, ek) in sol.eig.energies.iter().take(sol.n_bound).enumerate() {
        println!("E({}) = {:.5} (box ladder: {:.5})", k, ek, e_box(k));
    }

    // rms width of the physically normalized ground state
    let dx = well.get_grid().get_dx();
    let q0 = sol.eig.normalized_state(0, dx);
    let x2: ndarray::Array1<f64> = well.get_grid().get_x()
        .iter()
        .zip(&q0)
        .map(|(xk, qk)| xk.powi(2) * qk.powi(2))
        .collect();
    println!("ground state rms width {:.5}", qwell::utils::trapz(&x2, dx).sqrt());

    println!(
        "display scale factor {:.2}, {} states drawn",
        sol.plot.scale_factor,
        sol.plot.display_count,
    );
}
