use core::fmt::Write;

use dn_core::Label;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureNode {
    pub index: i32,
    pub value: f64,
}

/// Terminator of every [`SparseVector`].
pub const SENTINEL: FeatureNode = FeatureNode {
    index: -1,
    value: 0.0,
};

/// Sentinel-terminated list of nonzero features.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    nodes: Vec<FeatureNode>,
}

impl SparseVector {
    /// Builds a vector from `(index, value)` pairs already in ascending index
    /// order. Zero values are skipped and the sentinel is appended.
    pub(crate) fn from_ascending<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        let mut nodes: Vec<FeatureNode> = pairs
            .into_iter()
            .filter(|&(_, value)| value != 0.0)
            .map(|(index, value)| FeatureNode { index, value })
            .collect();
        nodes.push(SENTINEL);

        let out = Self { nodes };
        debug_assert!(out.is_well_formed(), "encoder produced unordered indices");
        out
    }

    /// All nodes including the trailing sentinel.
    pub fn nodes(&self) -> &[FeatureNode] {
        &self.nodes
    }

    /// Features without the sentinel.
    pub fn features(&self) -> &[FeatureNode] {
        &self.nodes[..self.nodes.len() - 1]
    }

    pub fn nnz(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_well_formed(&self) -> bool {
        let Some((last, body)) = self.nodes.split_last() else {
            return false;
        };
        if *last != SENTINEL {
            return false;
        }
        let mut prev = 0i32;
        for node in body {
            if node.index <= prev || node.value == 0.0 {
                return false;
            }
            prev = node.index;
        }
        true
    }

    /// Renders `label index:value ...` without the sentinel.
    pub fn to_libsvm_line(&self, label: Label) -> String {
        let mut line = label.to_string();
        for node in self.features() {
            let _ = write!(line, " {}:{}", node.index, node.value);
        }
        line
    }
}
