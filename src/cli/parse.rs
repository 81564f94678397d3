use clap::error::ErrorKind;
use wgraph_core::error::GraphError;
use wgraph_core::format::OutputFormat;
use wgraph_core::graph::MstStrategy;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse spanning tree strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<MstStrategy, String> {
    s.parse::<MstStrategy>().map_err(|e| e.to_string())
}

/// Whether raw arguments ask for `--format json`.
///
/// Used when clap rejects the command line, so `Cli.format` never exists.
pub fn wants_json<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v.as_ref() == "json") => return true,
            _ => {}
        }
    }
    false
}

/// Classify a clap failure so it gets the usage exit code
pub fn parse_error(err: &clap::Error) -> GraphError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => GraphError::UsageError(err.to_string()),
        _ => GraphError::Other(err.to_string()),
    }
}
