//! Parallel batch encoding
//!
//! Lines are independent, so a batch is split across a rayon pool. Every
//! worker encodes with its own fork of the encoder; caches are never shared
//! between threads.

use crate::{
    error::{EngineError, Result},
    sentence::SentenceEncoder,
};
use rayon::prelude::*;

impl SentenceEncoder {
    /// Encode `lines` in parallel, keeping input order.
    ///
    /// `threads` picks a dedicated pool size; `None` uses the global pool.
    /// Each line gets its own result, so one failing line does not discard
    /// the others. Worker caches are dropped afterwards; this encoder's
    /// cache is left untouched.
    pub fn encode_batch<S>(&self, lines: &[S], threads: Option<usize>) -> Result<Vec<Result<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let run = || -> Vec<Result<String>> {
            lines
                .par_iter()
                .map_init(|| self.fork(), |encoder, line| encoder.encode(line.as_ref()))
                .collect()
        };

        match threads {
            Some(count) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(count)
                    .build()
                    .map_err(|e| EngineError::Parallel(e.to_string()))?;
                log::debug!("encoding {} lines on {count} threads", lines.len());
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }
}
