use std::time::Instant;

use anyhow::Context;
use common::{Color, Disk, classic_move_count, solve};
use rayon::prelude::*;
use serde::Serialize;

/// Feasibility of every coloring of one tower height.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TowerStats {
    pub nr_disks: usize,
    pub nr_colors: usize,
    pub colorings: u64,
    pub solvable: u64,
    /// Length of every solution at this height, if there is any.
    pub moves_when_solvable: Option<u64>,
    /// The solvable coloring with the smallest index, bottom to top.
    pub example: Option<Vec<Color>>,
}

/// Decode a coloring index into a tower of sizes `nr_disks` down to 1.
///
/// The index is read as a base `palette.len()` number whose least significant
/// digit colors the bottom disk.
pub fn colored_tower(mut index: u64, nr_disks: usize, palette: &[Color]) -> Vec<Disk> {
    let base = palette.len() as u64;
    (1..=nr_disks as u32)
        .rev()
        .map(|size| {
            let color = palette[(index % base) as usize];
            index /= base;
            Disk::new(size, color)
        })
        .collect()
}

/// Solve every coloring of a tower with `nr_disks` disks in parallel.
pub fn survey_tower(nr_disks: usize, palette: &[Color]) -> anyhow::Result<TowerStats> {
    let start = Instant::now();

    let colorings = u32::try_from(nr_disks)
        .ok()
        .and_then(|n| (palette.len() as u64).checked_pow(n))
        .with_context(|| format!("too many colorings for {nr_disks} disks"))?;

    let (solvable, first) = (0..colorings)
        .into_par_iter()
        .filter(|&index| solve(&colored_tower(index, nr_disks, palette)).is_solved())
        .map(|index| (1u64, index))
        .reduce(|| (0, u64::MAX), |a, b| (a.0 + b.0, a.1.min(b.1)));

    let example = (solvable > 0).then(|| {
        colored_tower(first, nr_disks, palette)
            .into_iter()
            .map(|disk| disk.color)
            .collect()
    });

    log::info!(
        "{nr_disks} disks: {solvable} of {colorings} colorings solvable, took {}s",
        start.elapsed().as_secs_f32()
    );

    Ok(TowerStats {
        nr_disks,
        nr_colors: palette.len(),
        colorings,
        solvable,
        moves_when_solvable: if solvable > 0 {
            classic_move_count(nr_disks)
        } else {
            None
        },
        example,
    })
}

/// Survey all tower heights from 1 to `max_disks` over the first
/// `nr_colors` palette entries.
pub fn survey(max_disks: usize, nr_colors: usize) -> anyhow::Result<Vec<TowerStats>> {
    anyhow::ensure!(
        (1..=Color::PALETTE.len()).contains(&nr_colors),
        "the palette only has {} colors",
        Color::PALETTE.len()
    );
    let palette = &Color::PALETTE[..nr_colors];

    (1..=max_disks)
        .map(|nr_disks| survey_tower(nr_disks, palette))
        .collect()
}
