use dn_core::{Error, Grid};

use crate::config::PipelineConfig;
use crate::pipeline::{ProcessedDigit, normalize};

/// Normalises every item independently; `out[i]` belongs to `items[i]`.
pub fn process_batch<G>(items: &[G], cfg: &PipelineConfig) -> Vec<Result<ProcessedDigit, Error>>
where
    G: AsRef<Grid> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        items
            .par_iter()
            .map(|item| normalize(item.as_ref().clone(), cfg))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| normalize(item.as_ref().clone(), cfg))
            .collect()
    }
}
