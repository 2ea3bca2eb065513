use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use common::{Color, Disk};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub fn read_disks(path: &Path) -> anyhow::Result<Vec<Disk>> {
    let file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let disks = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot read disks from {}", path.display()))?;
    Ok(disks)
}

/// A tower of sizes `nr_disks` down to 1 whose colors are drawn uniformly
/// from the first `nr_colors` palette entries.
pub fn random_tower(nr_disks: usize, nr_colors: usize, seed: u64) -> anyhow::Result<Vec<Disk>> {
    let largest = u32::try_from(nr_disks)
        .with_context(|| format!("{nr_disks} disks do not fit into a disk size"))?;
    let palette = &Color::PALETTE[..nr_colors.clamp(1, Color::PALETTE.len())];
    let mut rng = Pcg64Mcg::seed_from_u64(seed);

    Ok((1..=largest)
        .rev()
        .map(|size| Disk::new(size, palette[rng.random_range(..palette.len())]))
        .collect())
}

pub fn demo_towers() -> Vec<(String, Vec<Disk>)> {
    let tower = |disks: &[(u32, Color)]| -> Vec<Disk> {
        disks.iter().map(|&(size, color)| Disk::new(size, color)).collect()
    };

    vec![
        (
            "example 1: alternating colors".to_string(),
            tower(&[(3, Color::Red), (2, Color::Blue), (1, Color::Red)]),
        ),
        (
            "example 2: two red disks in a row".to_string(),
            tower(&[(3, Color::Red), (2, Color::Red), (1, Color::Blue)]),
        ),
        (
            "example 3: four disks".to_string(),
            tower(&[
                (4, Color::Blue),
                (3, Color::Red),
                (2, Color::Blue),
                (1, Color::Red),
            ]),
        ),
    ]
}
