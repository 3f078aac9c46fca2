mod file_header;
mod layout;
mod page_header;
mod summary;

pub use file_header::{FileHeader, FILE_HEADER_SIZE, MAGIC};
pub use page_header::{
    InteriorPageHeader, LeafPageHeader, PageHeader, PageKind, PAGE_HEADER_SIZE,
};
pub use summary::DbInfo;

use super::{Error, Result};
use std::{
    fs::File,
    io::{Read, Seek, SeekFrom},
    path::Path,
};

/// Page numbers are 32-bit big-endian integers, 1-based on disk.
pub type PageNum = u32;

pub type DbFile = Db<File>;

impl Db<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        File::open(path).map(Self::new).map_err(Error::from)
    }
}

/// A readable database image. Only the first 112 bytes are ever
/// consulted: the file header, then page 1's b-tree header.
#[derive(Debug)]
pub struct Db<R: Read + Seek>(R);

impl<R: Read + Seek> Db<R> {
    pub fn new(r: R) -> Self {
        Self(r)
    }

    pub fn file_header(&mut self) -> Result<FileHeader> {
        let mut buf = [0u8; FILE_HEADER_SIZE];
        self.read(0, &mut buf)?;
        FileHeader::decode(&buf)
    }

    /// B-tree header of page 1, located right after the file header.
    pub fn page_header(&mut self) -> Result<PageHeader> {
        let mut buf = [0u8; PAGE_HEADER_SIZE];
        self.read(FILE_HEADER_SIZE as u64, &mut buf)?;
        PageHeader::decode(&buf)
    }

    pub fn info(&mut self) -> Result<DbInfo> {
        let file_header = self.file_header()?;
        let page_header = self.page_header()?;
        Ok(DbInfo::new(&file_header, &page_header))
    }

    fn read(&mut self, start: u64, buf: &mut [u8]) -> Result<()> {
        self.0.seek(SeekFrom::Start(start))?;
        self.0.read_exact(buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn db_image() -> Vec<u8> {
        let mut image = vec![0u8; 4096];
        image[..16].copy_from_slice(MAGIC);
        image[16..18].copy_from_slice(&4096u16.to_be_bytes());
        image[18] = 1; // write version
        image[19] = 1; // read version
        image[28..32].copy_from_slice(&1u32.to_be_bytes());
        image[100] = 13; // leaf table
        image[103..105].copy_from_slice(&3u16.to_be_bytes());
        image[105..107].copy_from_slice(&4050u16.to_be_bytes());
        image
    }

    #[test]
    fn it_reads_the_headers_of_page_1() {
        let mut db = Db::new(Cursor::new(db_image()));

        let file_header = db.file_header().unwrap();
        assert_eq!(file_header.page_size, 4096);
        assert_eq!(file_header.page_count, 1);

        let page_header = db.page_header().unwrap();
        assert_eq!(page_header.kind(), PageKind::LeafTable);
        assert_eq!(page_header.cell_count(), 3);
    }

    #[test]
    fn it_composes_the_summary() {
        let mut db = Db::new(Cursor::new(db_image()));
        let info = db.info().unwrap();
        assert_eq!(
            info,
            DbInfo {
                page_size: 4096,
                page_count: 1,
                number_of_tables: 3,
            }
        );
    }

    #[test]
    fn it_surfaces_decode_failures() {
        let mut image = db_image();
        image[100] = 0x06;
        let mut db = Db::new(Cursor::new(image));
        assert!(matches!(db.page_header(), Err(Error::UnknownPageKind(0x06))));
    }

    #[test]
    fn it_fails_with_io_error_on_truncated_files() {
        let mut db = Db::new(Cursor::new(vec![0u8; 50]));
        assert!(matches!(db.file_header(), Err(Error::Io(_))));
    }
}
