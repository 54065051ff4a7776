//! `rentmap facets` command - values offered by the filter selects

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use rentmap_core::error::Result;
use rentmap_core::records::escape_quotes;
use rentmap_core::store::RecordStore;

/// Execute the facets command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (_config, data_path) = ctx.resolve()?;
    let (store, _report) = RecordStore::load(&data_path)?;
    let facets = facets(&store);

    output_by_format_result!(ctx.cli.format,
        json => {
            let output: serde_json::Map<_, _> = facets
                .iter()
                .map(|(name, values)| (name.to_string(), serde_json::json!(values)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            for (name, values) in &facets {
                let shown = if values.is_empty() { "-".to_string() } else { values.join(", ") };
                println!("{name}: {shown}");
            }
        },
        records => {
            println!("H rentmap=1 records=1 mode=facets records={}", store.len());
            for (name, values) in &facets {
                for value in values {
                    println!("F {} \"{}\"", name, escape_quotes(value));
                }
            }
        }
    )
}

fn facets(store: &RecordStore) -> [(&'static str, Vec<String>); 4] {
    [
        ("district", store.districts()),
        ("structure", store.structures()),
        ("gender", store.genders()),
        ("supplyType", store.supply_types()),
    ]
}
