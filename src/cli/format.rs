//! Format output dispatch helpers

/// Dispatch output by format when only the json branch can fail.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => output_json(&rows),
///     human => { output_human(cli, &rows) },
///     records => { output_records(&rows) }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
