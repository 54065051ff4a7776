//! JSON output formatting for list command

use rentmap_core::error::Result;
use rentmap_core::render::ListRow;

/// Output in JSON format
pub fn output_json(rows: &[ListRow]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}
