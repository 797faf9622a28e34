use super::{FileContents, Gateway, Row, SaveMode};
use crate::error::{OrderError, Result};
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub struct CsvFileGateway {
    path: PathBuf,
}

impl CsvFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(OrderError::Io)?;
            }
        }
        Ok(())
    }

    /// True when the last byte of a non-empty file is a line feed.
    fn ends_with_newline(&self) -> Result<bool> {
        let mut file = fs::File::open(&self.path).map_err(OrderError::Io)?;
        file.seek(SeekFrom::End(-1)).map_err(OrderError::Io)?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last).map_err(OrderError::Io)?;
        Ok(last[0] == b'\n')
    }

    fn file_is_empty(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }
}

impl Gateway for CsvFileGateway {
    fn read_all(&self) -> Result<FileContents> {
        let file = fs::File::open(&self.path).map_err(OrderError::Io)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = reader.records();
        let header = match records.next() {
            Some(record) => Some(record?.iter().map(str::to_string).collect::<Row>()),
            None => None,
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(
            "read {} data rows from {}",
            rows.len(),
            self.path.display()
        );
        Ok(FileContents { header, rows })
    }

    fn write_all(&mut self, header: &[String], rows: &[Row], mode: SaveMode) -> Result<()> {
        self.ensure_parent_dir()?;

        let write_header = match mode {
            SaveMode::Overwrite => true,
            SaveMode::Append => self.file_is_empty(),
        };
        let terminate_last_line =
            mode == SaveMode::Append && !write_header && !self.ends_with_newline()?;

        let mut file = match mode {
            SaveMode::Overwrite => fs::File::create(&self.path),
            SaveMode::Append => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path),
        }
        .map_err(OrderError::Io)?;
        if terminate_last_line {
            file.write_all(b"\n").map_err(OrderError::Io)?;
        }

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if write_header {
            writer.write_record(header)?;
        }
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush().map_err(OrderError::Io)?;

        debug!(
            "wrote {} rows to {} ({})",
            rows.len(),
            self.path.display(),
            mode
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::header_row;
    use tempfile::TempDir;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| f.to_string()).collect()
    }

    fn setup() -> (TempDir, CsvFileGateway) {
        let dir = TempDir::new().unwrap();
        let gateway = CsvFileGateway::new(dir.path().join("OrderDetails.csv"));
        (dir, gateway)
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let (_dir, gateway) = setup();
        let err = gateway.read_all().unwrap_err();
        assert!(err.is_missing_file());
    }

    #[test]
    fn zero_byte_file_has_no_header() {
        let (_dir, gateway) = setup();
        fs::write(gateway.path(), "").unwrap();

        let contents = gateway.read_all().unwrap();
        assert_eq!(contents.header, None);
        assert!(contents.rows.is_empty());
    }

    #[test]
    fn overwrite_then_read_keeps_order() {
        let (_dir, mut gateway) = setup();
        let rows = vec![
            row(&["1001", "Jane", "Laptop", "1", "01/05/2025", "999.99", "Shipped"]),
            row(&["1002", "Ali", "Mouse", "2", "02/05/2025", "20.00", "Delivered"]),
        ];
        gateway
            .write_all(&header_row(), &rows, SaveMode::Overwrite)
            .unwrap();

        let on_disk = fs::read_to_string(gateway.path()).unwrap();
        assert!(on_disk
            .starts_with("Order_ID,Customer_Name,Item_Purchased,Qty,Order_Date,Total($),Status"));

        let contents = gateway.read_all().unwrap();
        assert_eq!(contents.header, Some(header_row()));
        assert_eq!(contents.rows, rows);
    }

    #[test]
    fn append_adds_rows_without_repeating_header() {
        let (_dir, mut gateway) = setup();
        let first = row(&["1001", "Jane", "Laptop", "1", "01/05/2025", "999.99", "Shipped"]);
        let second = row(&["1002", "Ali", "Mouse", "2", "02/05/2025", "20.00", "Delivered"]);
        gateway
            .write_all(&header_row(), &[first.clone()], SaveMode::Overwrite)
            .unwrap();
        gateway
            .write_all(&header_row(), &[second.clone()], SaveMode::Append)
            .unwrap();

        let contents = gateway.read_all().unwrap();
        assert_eq!(contents.rows, vec![first, second]);
    }

    #[test]
    fn append_to_missing_file_writes_header_first() {
        let (_dir, mut gateway) = setup();
        let only = row(&["1001", "Jane", "Laptop", "1", "01/05/2025", "999.99", "Shipped"]);
        gateway
            .write_all(&header_row(), &[only.clone()], SaveMode::Append)
            .unwrap();

        let contents = gateway.read_all().unwrap();
        assert_eq!(contents.header, Some(header_row()));
        assert_eq!(contents.rows, vec![only]);
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let (_dir, mut gateway) = setup();
        let tricky = row(&[
            "1001",
            "Doe, Jane",
            "Cable \"USB-C\"",
            "1",
            "01/05/2025",
            "9.99",
            "Shipped",
        ]);
        gateway
            .write_all(&header_row(), &[tricky.clone()], SaveMode::Overwrite)
            .unwrap();

        let contents = gateway.read_all().unwrap();
        assert_eq!(contents.rows, vec![tricky]);
    }

    #[test]
    fn append_after_file_without_trailing_newline_starts_new_line() {
        let (_dir, mut gateway) = setup();
        fs::write(
            gateway.path(),
            "Order_ID,Customer_Name,Item_Purchased,Qty,Order_Date,Total($),Status\n\
             1001,Jane,Laptop,1,01/05/2025,1.00,Shipped",
        )
        .unwrap();
        let added = row(&["1002", "Ali", "Mouse", "2", "02/05/2025", "20.00", "Delivered"]);

        gateway
            .write_all(&header_row(), &[added.clone()], SaveMode::Append)
            .unwrap();

        let contents = gateway.read_all().unwrap();
        assert_eq!(contents.rows.len(), 2);
        assert_eq!(contents.rows[0][6], "Shipped");
        assert_eq!(contents.rows[1], added);
    }
}
