use clap::Parser;

pub const DEFAULT_EXTENSIONS: &str = "dart,c,cc,cpp,h,hpp";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Add an Apache 2.0 copyright header to source files that lack one"
)]
pub struct Cli {
    /// Target directory
    #[arg(long, default_value = "lib")]
    pub path: String,

    /// Copyright owner name
    #[arg(long, default_value = "kozakemi")]
    pub owner: String,

    /// Copyright year (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Only report, do not modify
    #[arg(long)]
    pub dry_run: bool,

    /// Comma-separated list of file extensions to process
    #[arg(long, default_value = DEFAULT_EXTENSIONS)]
    pub ext: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_flags() {
        let cli = Cli::try_parse_from(["apache-header"]).unwrap();
        assert_eq!(cli.path, "lib");
        assert_eq!(cli.owner, "kozakemi");
        assert_eq!(cli.year, None);
        assert!(!cli.dry_run);
        assert_eq!(cli.ext, "dart,c,cc,cpp,h,hpp");
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "apache-header",
            "--path",
            "elinux",
            "--owner",
            "Jane Doe",
            "--year",
            "2021",
            "--dry-run",
            "--ext",
            "c,h",
        ])
        .unwrap();
        assert_eq!(cli.path, "elinux");
        assert_eq!(cli.owner, "Jane Doe");
        assert_eq!(cli.year, Some(2021));
        assert!(cli.dry_run);
        assert_eq!(cli.ext, "c,h");
    }

    #[test]
    fn rejects_non_integer_year() {
        assert!(Cli::try_parse_from(["apache-header", "--year", "soon"]).is_err());
    }
}
