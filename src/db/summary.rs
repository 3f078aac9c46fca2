use super::{FileHeader, PageHeader};
use std::fmt;

/// Summary statistics derived from the two decoded headers of page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbInfo {
    pub page_size: u16,
    pub page_count: u32,
    /// Cell count of page 1, used as a table-count proxy. Exact only
    /// when the schema table's root page is page 1 and none of its
    /// cells has overflowed to another page.
    pub number_of_tables: u16,
}

impl DbInfo {
    pub fn new(file_header: &FileHeader, page_header: &PageHeader) -> Self {
        Self {
            page_size: file_header.page_size,
            page_count: file_header.page_count,
            number_of_tables: page_header.cell_count(),
        }
    }
}

impl fmt::Display for DbInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "database page size: {}", self.page_size)?;
        writeln!(f, "database page count: {}", self.page_count)?;
        writeln!(f, "number of tables: {}", self.number_of_tables)
    }
}
