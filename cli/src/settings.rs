use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sweeper_core::{CellCount, Coord};

pub const DEFAULT_ROWS: Coord = 9;
pub const DEFAULT_COLUMNS: Coord = 9;

/// Board settings, given as command line flags or read from a TOML file.
///
/// Every field is optional so flags, file and defaults can be layered.
#[derive(clap::Args, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSettings {
    /// Number of rows on the field
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Number of columns on the field
    #[arg(long)]
    pub columns: Option<Coord>,

    /// Number of mines, asked for interactively when not given
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl BoardSettings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Fills every unset field from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            rows: self.rows.or(fallback.rows),
            columns: self.columns.or(fallback.columns),
            mines: self.mines.or(fallback.mines),
            seed: self.seed.or(fallback.seed),
        }
    }

    /// `(rows, columns)` with the classic 9×9 board as default.
    pub fn size(&self) -> (Coord, Coord) {
        (
            self.rows.unwrap_or(DEFAULT_ROWS),
            self.columns.unwrap_or(DEFAULT_COLUMNS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_take_precedence_over_file() {
        let flags = BoardSettings {
            rows: Some(5),
            mines: Some(3),
            ..Default::default()
        };
        let file: BoardSettings = toml::from_str("rows = 16\ncolumns = 30\nmines = 99\nseed = 7\n").unwrap();

        let merged = flags.or(file);

        assert_eq!(merged.size(), (5, 30));
        assert_eq!(merged.mines, Some(3));
        assert_eq!(merged.seed, Some(7));
    }

    #[test]
    fn missing_dimensions_default_to_nine_by_nine() {
        let settings: BoardSettings = toml::from_str("mines = 10").unwrap();

        assert_eq!(settings.size(), (9, 9));
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<BoardSettings>("width = 3").is_err());
    }

    #[test]
    fn load_reports_the_missing_path() {
        let err = BoardSettings::load(Path::new("/nonexistent/sweeper.toml")).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/sweeper.toml"));
    }
}
