//! Records output formatting for list command

use std::path::Path;

use rentmap_core::app::Snapshot;
use rentmap_core::records::format_row_record;

/// Output in records format
pub fn output_records(data_path: &Path, snapshot: &Snapshot) {
    println!(
        "H rentmap=1 records=1 data={} mode=list rows={} generation={}",
        data_path.display(),
        snapshot.rows().len(),
        snapshot.generation()
    );

    for (record, row) in snapshot.display().iter().zip(snapshot.rows()) {
        println!("{}", format_row_record(record, row.highlighted));
    }
}
