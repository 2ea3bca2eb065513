use std::fmt;

use colored::{ColoredString, Colorize};
use common::{Color, Disk, Outcome};
use serde::Serialize;

#[derive(Serialize)]
pub struct Report<'a> {
    pub name: &'a str,
    pub disks: &'a [Disk],
    pub outcome: Outcome,
}

fn swatch(color: Color) -> ColoredString {
    let dot = "●";
    match color {
        Color::Red => dot.red(),
        Color::Blue => dot.blue(),
        Color::Green => dot.green(),
        Color::Yellow => dot.yellow(),
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{}", rule.magenta())?;
        writeln!(f, "{}", self.name.magenta().bold())?;
        writeln!(f, "{}", rule.magenta())?;

        writeln!(f, "{}", "disks, bottom to top:".cyan())?;
        for (i, disk) in self.disks.iter().enumerate() {
            writeln!(
                f,
                "  {} disk {}: size {}, {}",
                swatch(disk.color),
                i + 1,
                disk.size,
                disk.color
            )?;
        }
        writeln!(f)?;

        match &self.outcome {
            Outcome::Solved(moves) => {
                writeln!(f, "{}", "solvable".green().bold())?;
                writeln!(f, "{}", format!("{} moves:", moves.len()).blue())?;
                let width = moves.len().to_string().len();
                for (i, mv) in moves.iter().enumerate() {
                    writeln!(
                        f,
                        "  {:>width$}. move disk of size {} from {} to {}",
                        i + 1,
                        mv.size,
                        mv.from,
                        mv.to
                    )?;
                }
            }
            Outcome::Infeasible => {
                writeln!(f, "{}", "infeasible".red().bold())?;
                writeln!(
                    f,
                    "{}",
                    "the recursive transfer runs into a size or color conflict".yellow()
                )?;
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use common::solve;

    use super::*;

    #[test]
    fn test_renders_solution() {
        colored::control::set_override(false);

        let disks = [Disk::new(2, Color::Red), Disk::new(1, Color::Blue)];
        let report = Report {
            name: "two disks",
            disks: &disks,
            outcome: solve(&disks),
        };
        let text = report.to_string();

        assert!(text.contains("two disks"));
        assert!(text.contains("disk 1: size 2, red"));
        assert!(text.contains("3 moves:"));
        assert!(text.contains("1. move disk of size 1 from A to B"));
        assert!(text.contains("3. move disk of size 1 from B to C"));
    }

    #[test]
    fn test_renders_infeasible() {
        colored::control::set_override(false);

        let disks = [Disk::new(2, Color::Red), Disk::new(1, Color::Red)];
        let report = Report {
            name: "red tower",
            disks: &disks,
            outcome: solve(&disks),
        };
        let text = report.to_string();

        assert!(text.contains("infeasible"));
        assert!(!text.contains("moves:"));
    }

    #[test]
    fn test_report_json() {
        let disks = [Disk::new(1, Color::Green)];
        let report = Report {
            name: "one",
            disks: &disks,
            outcome: solve(&disks),
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"name":"one","disks":[{"size":1,"color":"green"}],"outcome":{"outcome":"solved","moves":[{"size":1,"from":"A","to":"C"}]}}"#
        );
    }
}
