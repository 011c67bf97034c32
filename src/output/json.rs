//! JSON output formatting

use std::io;

use crate::stats::{ResultTable, ScanSummary};

/// Serialize the scan results as pretty-printed JSON.
pub fn summary_json(table: &ResultTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ScanSummary::new(table))
}

/// Print the scan results as pretty-printed JSON to stdout.
pub fn print_json(table: &ResultTable) -> io::Result<()> {
    let json = summary_json(table).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::FileLineCounts;

    #[test]
    fn test_summary_json_shape() {
        let mut table = ResultTable::new();
        table.record(
            "api",
            "cs",
            &FileLineCounts {
                total: 4,
                code: 2,
                comment: 1,
                blank: 1,
            },
        );
        table.record(
            "web",
            "cs",
            &FileLineCounts {
                total: 1,
                code: 1,
                comment: 0,
                blank: 0,
            },
        );

        let json = summary_json(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["directories"]["api"]["cs"]["files"], 1);
        assert_eq!(value["directories"]["api"]["cs"]["comment"], 1);
        assert_eq!(value["languages"]["cs"]["files"], 2);
        assert_eq!(value["overall"]["total"], 5);
    }

    #[test]
    fn test_empty_table_json() {
        let json = summary_json(&ResultTable::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value["directories"].as_object().unwrap().is_empty());
        assert_eq!(value["overall"]["files"], 0);
    }
}
