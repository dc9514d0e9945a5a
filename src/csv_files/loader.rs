use crate::csv_files::error::CsvError;
use crate::csv_files::parser::parse_file;
use crate::types::table::Table;
use log::{debug, info};
use std::path::Path;

/// Parses each file in order and concatenates the rows, file order first, then line order.
///
/// Stops at the first file that fails; rows from later files are never read.
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Table, CsvError> {
    let mut combined = Table::new();
    for path in paths {
        let path = path.as_ref();
        let table = parse_file(path)?;
        debug!("Appending {} rows from {:?}", table.len(), path);
        combined.append(table);
    }
    info!("Loaded {} rows from {} files", combined.len(), paths.len());
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::column::Column;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    #[test]
    fn test_concatenates_in_file_order() -> Result<(), CsvError> {
        let dir = tempdir().expect("Failed to create temp dir");
        let january = write_csv(
            &dir,
            "january.csv",
            "Month,Day,Hour,dn,df,tamb,wspd,poa,tcell,dc,ac\n1,1,0,0,0,0,0,0,0,0,0\n1,1,1,0,0,0,0,0,0,0,1\n",
        );
        let february = write_csv(&dir, "february.csv", "2,1,0,0,0,0,0,0,0,0,2\n");

        let combined = load_files(&[&february, &january])?;
        assert_eq!(combined.column(Column::Month), vec![2.0, 1.0, 1.0]);
        assert_eq!(combined.column(Column::AcOutput), vec![2.0, 0.0, 1.0]);

        let mut expected = parse_file(&february)?;
        expected.append(parse_file(&january)?);
        assert_eq!(combined, expected);
        Ok(())
    }

    #[test]
    fn test_same_file_twice_is_not_deduplicated() -> Result<(), CsvError> {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = write_csv(&dir, "day.csv", "5,5,5,1,1,1,1,1,1,1,1\n");
        let combined = load_files(&[path.clone(), path])?;
        assert_eq!(combined.len(), 2);
        Ok(())
    }

    #[test]
    fn test_empty_list() -> Result<(), CsvError> {
        let paths: [&str; 0] = [];
        assert!(load_files(&paths)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_first_failure_stops_loading() {
        let dir = tempdir().expect("Failed to create temp dir");
        let good = write_csv(&dir, "good.csv", "1,1,0,0,0,0,0,0,0,0,0\n");
        let missing = dir.path().join("missing.csv");
        let bad = write_csv(&dir, "bad.csv", "1,1,0,0,0,0,0,0,0,0,oops\n");

        let result = load_files(&[good.clone(), missing.clone(), bad.clone()]);
        match result {
            Err(CsvError::FileOpen(path, _)) => assert_eq!(path, missing),
            other => panic!("Expected the missing file to fail first, got {:?}", other),
        }

        let result = load_files(&[good, bad.clone()]);
        match result {
            Err(CsvError::NumericField { path, .. }) => assert_eq!(path, bad),
            other => panic!("Expected a numeric field error, got {:?}", other),
        }
    }
}
