use dn_core::Error;
use serde::{Deserialize, Serialize};

/// What to do with a grid that has no edge activity after cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankPolicy {
    /// Fail with [`Error::EmptyActivity`].
    #[default]
    Reject,
    /// Skip the bilinear fit and keep the thresholded grid as is.
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    #[default]
    RawValues,
    EdgeHistogram,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub threshold: u8,
    pub filter_islands: bool,
    pub renormalize_threshold: u8,
    pub blank_policy: BlankPolicy,
    pub encoding: Encoding,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: 1,
            filter_islands: true,
            renormalize_threshold: 1,
            blank_policy: BlankPolicy::Reject,
            encoding: Encoding::RawValues,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.threshold == 0 || self.renormalize_threshold == 0 {
            return Err(Error::ZeroThreshold);
        }
        Ok(())
    }
}
