//! GBM path generation over a pre-drawn random buffer.
//!
//! Both generation routines consume a random buffer that has already been
//! filled (front to back, time-then-path order) by a single seeded
//! generator. Because the randomness is fixed before evolution begins, the
//! sequential and parallel routines produce bit-identical ensembles: the
//! per-path arithmetic is the same sequence of f64 operations either way.
//!
//! The update is the closed-form integration of log-price under GBM,
//!
//! ```text
//! S[i,t] = S[i,t-1] · exp((r − σ²/2)Δt + σ√Δt · Z[t,i])
//! ```
//!
//! which keeps every simulated price strictly positive for any step size —
//! the additive Euler–Maruyama update on the price level does not have that
//! property.

use gbmsim_models::GbmParams;
use rayon::prelude::*;

use super::workspace::EnsembleWorkspace;

/// Evolves all paths sequentially, stepping time in the outer loop.
///
/// Column 0 of every row is set to the spot; step `t` then advances every
/// path using the variates of random row `t`, mirroring the draw order.
///
/// # Panics
///
/// Panics in debug builds if the workspace logical size does not match
/// `n_paths` / `n_steps`.
pub fn generate_paths(
    workspace: &mut EnsembleWorkspace,
    params: &GbmParams,
    n_paths: usize,
    n_steps: usize,
) {
    debug_assert_eq!(workspace.n_paths(), n_paths);
    debug_assert_eq!(workspace.n_steps(), n_steps);

    let dt = params.dt(n_steps);
    let drift_dt = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();
    let spot = params.spot;

    let (paths, randoms) = workspace.paths_mut_and_randoms();
    let stride = n_steps + 1;

    for path_idx in 0..n_paths {
        paths[path_idx * stride] = spot;
    }

    for step in 0..n_steps {
        let step_randoms = &randoms[step * n_paths..(step + 1) * n_paths];
        for (path_idx, &z) in step_randoms.iter().enumerate() {
            let offset = path_idx * stride + step;
            paths[offset + 1] = paths[offset] * (drift_dt + vol_sqrt_dt * z).exp();
        }
    }
}

/// Evolves paths in parallel across the path dimension.
///
/// Reads the same pre-drawn random buffer as [`generate_paths`], so the
/// result is bit-identical to the sequential routine for any worker count.
pub fn generate_paths_par(
    workspace: &mut EnsembleWorkspace,
    params: &GbmParams,
    n_paths: usize,
    n_steps: usize,
) {
    debug_assert_eq!(workspace.n_paths(), n_paths);
    debug_assert_eq!(workspace.n_steps(), n_steps);

    let dt = params.dt(n_steps);
    let drift_dt = (params.rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();
    let spot = params.spot;

    let (paths, randoms) = workspace.paths_mut_and_randoms();
    let stride = n_steps + 1;

    paths
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(path_idx, row)| {
            row[0] = spot;
            for step in 0..n_steps {
                let z = randoms[step * n_paths + path_idx];
                row[step + 1] = row[step] * (drift_dt + vol_sqrt_dt * z).exp();
            }
        });
}

/// Extracts the terminal price of every path.
pub fn terminal_prices(workspace: &EnsembleWorkspace) -> Vec<f64> {
    let n_steps = workspace.n_steps();
    let stride = n_steps + 1;
    let paths = workspace.paths();

    (0..workspace.n_paths())
        .map(|path_idx| paths[path_idx * stride + n_steps])
        .collect()
}
