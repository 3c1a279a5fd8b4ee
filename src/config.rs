use clap::Parser;

use crate::scale::ScaleFamily;
use crate::selector::FamilySet;

#[derive(Parser, Debug)]
#[command(name = "fretkeys", about = "Random key and scale practice on a guitar fretboard")]
#[command(version)]
pub struct Cli {
    /// Scale family enabled at start-up (repeatable). Defaults to all six
    #[arg(long = "family", value_name = "NAME")]
    pub families: Vec<ScaleFamily>,

    /// Start with every scale family disabled
    #[arg(long, conflicts_with = "families")]
    pub none: bool,

    /// Seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print one generated key and its neck diagram, then exit
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    pub fn enabled_families(&self) -> FamilySet {
        if self.none {
            FamilySet::none()
        } else if self.families.is_empty() {
            FamilySet::all()
        } else {
            self.families.iter().copied().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_enable_everything() {
        let cli = Cli::parse_from(["fretkeys"]);
        assert_eq!(cli.enabled_families(), FamilySet::all());
        assert_eq!(cli.seed, None);
        assert!(!cli.print);
    }

    #[test]
    fn test_family_flags() {
        let cli = Cli::parse_from([
            "fretkeys", "--family", "blues", "--family", "minor-pentatonic", "--seed", "9",
        ]);
        let enabled = cli.enabled_families();
        assert_eq!(
            enabled.iter().collect::<Vec<_>>(),
            vec![ScaleFamily::PentaMinor, ScaleFamily::Blues]
        );
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_none_flag() {
        let cli = Cli::parse_from(["fretkeys", "--none", "--print"]);
        assert!(cli.enabled_families().is_empty());
        assert!(cli.print);
    }

    #[test]
    fn test_unknown_family_is_rejected() {
        assert!(Cli::try_parse_from(["fretkeys", "--family", "lydian"]).is_err());
        assert!(Cli::try_parse_from(["fretkeys", "--none", "--family", "major"]).is_err());
    }
}
