use rayon::prelude::*;
use thiserror::Error;

use pixelpunch_image::{Image, Rgba8};

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how a pixel loop is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

fn fill_row(y: usize, row: &mut [u8], f: &(impl Fn(usize, usize) -> Rgba8 + Send + Sync)) {
    row.chunks_exact_mut(4)
        .enumerate()
        .for_each(|(x, dst_pixel)| {
            let c: [u8; 4] = f(x, y).into();
            dst_pixel.copy_from_slice(&c);
        });
}

/// Set every pixel of an RGBA image to `f(x, y)`.
///
/// Each row is written through its own mutable slice, so pixels never depend on the
/// order in which they are computed.
///
/// # Errors
///
/// Returns an error if a [`ExecutionStrategy::Fixed`] pool cannot be built.
pub fn par_fill_pixels(
    dst: &mut Image<u8, 4>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, usize) -> Rgba8 + Send + Sync,
) -> Result<(), ParallelError> {
    let cols = dst.cols();
    if cols == 0 || dst.rows() == 0 {
        return Ok(());
    }
    let dst_slice = dst.as_slice_mut();

    match strategy {
        ExecutionStrategy::Serial => {
            dst_slice
                .chunks_exact_mut(4 * cols)
                .enumerate()
                .for_each(|(y, row)| fill_row(y, row, &f));
        }
        ExecutionStrategy::ParallelRows => {
            dst_slice
                .par_chunks_exact_mut(4 * cols)
                .enumerate()
                .for_each(|(y, row)| fill_row(y, row, &f));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst_slice
                    .par_chunks_exact_mut(4 * cols)
                    .enumerate()
                    .for_each(|(y, row)| fill_row(y, row, &f));
            });
        }
    }

    Ok(())
}
