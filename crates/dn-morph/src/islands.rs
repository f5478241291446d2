use dn_core::{Error, Grid};
use log::debug;

use crate::disjoint_set::DisjointSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentSummary {
    /// Foreground components found before filtering.
    pub components: usize,
    /// Pixels in the surviving component.
    pub kept: usize,
    /// Foreground pixels zeroed.
    pub removed: usize,
}

/// Foreground components as `(representative, size)`, ascending by
/// representative index.
pub fn component_sizes(grid: &Grid) -> Result<Vec<(usize, usize)>, Error> {
    grid.assert_discrete()?;
    let ds = link_foreground(grid);
    let sizes = count_members(grid, &ds);

    Ok(sizes
        .into_iter()
        .enumerate()
        .filter(|&(_, size)| size > 0)
        .collect())
}

/// Keeps only the largest 4-connected foreground component.
///
/// Fails with [`Error::NotDiscrete`] unless the grid is binary. Background
/// pixels are never turned on. A grid without foreground is left unchanged.
pub fn remove_islands(grid: &mut Grid) -> Result<ComponentSummary, Error> {
    grid.assert_discrete()?;
    let ds = link_foreground(grid);
    let sizes = count_members(grid, &ds);

    let mut components = 0usize;
    let mut best: Option<(usize, usize)> = None;
    for (root, &size) in sizes.iter().enumerate() {
        if size == 0 {
            continue;
        }
        components += 1;
        match best {
            Some((_, best_size)) if size <= best_size => {}
            _ => best = Some((root, size)),
        }
    }

    let Some((keep_root, kept)) = best else {
        return Ok(ComponentSummary::default());
    };

    let mut removed = 0usize;
    for (i, px) in grid.data_mut().iter_mut().enumerate() {
        if *px != 0 && ds.find(i) != keep_root {
            *px = 0;
            removed += 1;
        }
    }

    debug!(
        "remove_islands: {components} components, kept {kept} px (root {keep_root}), removed {removed} px"
    );

    Ok(ComponentSummary {
        components,
        kept,
        removed,
    })
}

// Linking each foreground pixel to its lower and right neighbors covers every
// 4-adjacent pair exactly once.
fn link_foreground(grid: &Grid) -> DisjointSet {
    let side = grid.side();
    let data = grid.data();
    let mut ds = DisjointSet::new(data.len());

    for y in 0..side {
        for x in 0..side {
            let p = y * side + x;
            if data[p] == 0 {
                continue;
            }
            if y + 1 < side && data[p + side] != 0 {
                ds.union(p, p + side);
            }
            if x + 1 < side && data[p + 1] != 0 {
                ds.union(p, p + 1);
            }
        }
    }

    ds
}

fn count_members(grid: &Grid, ds: &DisjointSet) -> Vec<usize> {
    let mut sizes = vec![0usize; ds.len()];
    for (i, &px) in grid.data().iter().enumerate() {
        if px != 0 {
            sizes[ds.find(i)] += 1;
        }
    }
    sizes
}
