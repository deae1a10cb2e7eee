//! Command-line argument parsing.

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Ping `GET /health` and exit
    Check,
    /// Run the TUI (default)
    #[default]
    RunTui,
}

/// Parsed command line: the command plus configuration overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub command: CliCommand,
    pub base_url: Option<String>,
    pub role: Option<String>,
    pub language: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),
}

/// Parse command-line arguments, skipping the program name.
///
/// Value flags accept `--flag value` and `--flag=value`. Unknown flags are
/// ignored. `--version` wins over `--check`.
///
/// ```
/// use civic::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["civic".to_string(), "--check".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Check);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        let slot = match flag.as_str() {
            "--version" | "-V" => {
                parsed.command = CliCommand::Version;
                continue;
            }
            "--check" => {
                if parsed.command != CliCommand::Version {
                    parsed.command = CliCommand::Check;
                }
                continue;
            }
            "--base-url" => &mut parsed.base_url,
            "--role" => &mut parsed.role,
            "--language" => &mut parsed.language,
            "--location" => &mut parsed.location,
            _ => continue,
        };

        let value = match inline {
            Some(value) => value,
            None => args.next().ok_or_else(|| ArgsError::MissingValue(flag.clone()))?,
        };
        *slot = Some(value);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        let mut all = vec!["civic".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
        assert_eq!(
            parse(&["--version", "--check"]).unwrap().command,
            CliCommand::Version
        );
    }

    #[test]
    fn test_parse_value_flags() {
        let args = parse(&[
            "--base-url",
            "http://localhost:8000",
            "--role=student",
            "--language",
            "es",
            "--location",
            "Champaign, IL",
        ])
        .unwrap();
        assert_eq!(args.command, CliCommand::RunTui);
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(args.role.as_deref(), Some("student"));
        assert_eq!(args.language.as_deref(), Some("es"));
        assert_eq!(args.location.as_deref(), Some("Champaign, IL"));
    }

    #[test]
    fn test_missing_value_is_error() {
        assert_eq!(
            parse(&["--base-url"]).unwrap_err(),
            ArgsError::MissingValue("--base-url".to_string())
        );
    }

    #[test]
    fn test_unknown_flag_ignored() {
        assert_eq!(parse(&["--unknown"]).unwrap().command, CliCommand::RunTui);
    }
}
