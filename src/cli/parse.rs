use rentmap_core::format::OutputFormat;
use rentmap_core::viewport::Bounds;

/// Parse `--format` through the core's own names
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse `south,west,north,east` for clap
pub fn parse_bounds(s: &str) -> Result<Bounds, String> {
    s.parse::<Bounds>().map_err(|e| e.to_string())
}
