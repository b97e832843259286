//! Walks through the vector operations on a few 3D vectors.
//!
//! Run with `RUST_LOG=trace` to also see the error constructors log.

use axiom_linalg::*;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Info)
        .filter(Some("axiom_linalg"), LevelFilter::Debug)
        .filter(Some("axiom_core"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let x = Vector::from_vec(vec![1.0, 0.0, 0.0])?;
    let y = Vector::from_vec(vec![0.0, 1.0, 0.0])?;
    let v = Vector::from_vec(vec![3.0, -2.0, 6.0])?;

    log::info!("v = {v}, |v| = {}", len(&v));
    log::info!("x × y = {}", cross(&x, &y)?);
    log::info!("v projected onto x = {}", proj(&v, &x)?);
    log::info!("v reflected off the xz-plane = {}", reflect(&v, &y)?);
    log::info!("v normalized = {}", normalize(&v)?);
    log::info!("halfway from x to y = {}", lerp(&x, &y, 0.5)?);
    log::info!(
        "largest component of v is {} at index {}",
        max_coeff(&v)?,
        arg_max(&v)?
    );

    // Recoverable errors come back as values.
    let short = Vector::from_vec(vec![1.0, 2.0])?;
    if let Err(e) = dot(&v, &short) {
        log::info!("dot with a 2-vector fails: {e} ({})", e.kind());
    }
    let zero = Vector::<f64>::zeros(3)?;
    if let Err(e) = normalize(&zero) {
        log::info!("normalizing the zero vector fails: {e}");
    }

    let id = Matrix::<f64>::identity(3)?;
    log::info!("3x3 identity:\n{id}");

    let mut m = Matrix::from_fn(2, 3, |row, col| (row * 3 + col) as f64)?;
    *m.at_mut(1, 2)? = 42.0;
    log::info!("{}x{} matrix:\n{m}", m.rows(), m.cols());
    log::info!("row 1 is {:?}", m.row(1)?);

    Ok(())
}
