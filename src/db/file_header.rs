use super::layout::{self, FILE_HEADER_LAYOUT};
use super::Result;
use crate::Error;
use bytes::Buf;

pub const FILE_HEADER_SIZE: usize = 100;

/// Every well-formed database file starts with this banner.
pub const MAGIC: &[u8; 16] = b"SQLite format 3\0";

/// Field offsets derived from the layout table. Indices follow the
/// order of `FILE_HEADER_LAYOUT`.
mod at {
    use super::{layout, FILE_HEADER_LAYOUT};

    pub const BANNER: usize = layout::offset(FILE_HEADER_LAYOUT, 0);
    pub const PAGE_SIZE: usize = layout::offset(FILE_HEADER_LAYOUT, 1);
    pub const WRITE_VERSION: usize = layout::offset(FILE_HEADER_LAYOUT, 2);
    pub const READ_VERSION: usize = layout::offset(FILE_HEADER_LAYOUT, 3);
    pub const RESERVED_SPACE: usize = layout::offset(FILE_HEADER_LAYOUT, 4);
    pub const PAGE_COUNT: usize = layout::offset(FILE_HEADER_LAYOUT, 6);
}

/// The 100-byte file header at offset 0, decoded once per file open.
/// All multi-byte integers are big-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub banner: [u8; 16],
    /// Bytes per page, a power of two in 512..=32768.
    pub page_size: u16,
    pub write_version: u8,
    pub read_version: u8,
    /// Bytes reserved at the end of every page.
    pub reserved_space: u8,
    /// Size of the database file in pages.
    pub page_count: u32,
}

impl FileHeader {
    /// Decodes an exactly 100-byte buffer. Never returns a partially
    /// populated header: length, banner and page size are all checked
    /// before the record is built.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != FILE_HEADER_SIZE {
            return Err(Error::InvalidLength {
                expected: FILE_HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let mut banner = [0u8; 16];
        banner.copy_from_slice(&bytes[at::BANNER..at::BANNER + 16]);
        if &banner != MAGIC {
            return Err(Error::BadMagic(banner));
        }

        // The size 1 encoding for 65536-byte pages is not supported.
        let page_size = (&bytes[at::PAGE_SIZE..]).get_u16();
        if !page_size.is_power_of_two() || !(512..=32768).contains(&page_size) {
            return Err(Error::InvalidPageSize(page_size));
        }

        Ok(Self {
            banner,
            page_size,
            write_version: bytes[at::WRITE_VERSION],
            read_version: bytes[at::READ_VERSION],
            reserved_space: bytes[at::RESERVED_SPACE],
            page_count: (&bytes[at::PAGE_COUNT..]).get_u32(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> [u8; FILE_HEADER_SIZE] {
        let mut bytes = [0u8; FILE_HEADER_SIZE];
        bytes[..16].copy_from_slice(MAGIC);
        bytes[16..18].copy_from_slice(&4096u16.to_be_bytes());
        bytes[18] = 1;
        bytes[19] = 1;
        bytes[28..32].copy_from_slice(&5u32.to_be_bytes());
        bytes
    }

    #[test]
    fn it_decodes_a_well_formed_header() {
        let header = FileHeader::decode(&sample()).unwrap();
        assert_eq!(
            header,
            FileHeader {
                banner: *MAGIC,
                page_size: 4096,
                write_version: 1,
                read_version: 1,
                reserved_space: 0,
                page_count: 5,
            }
        );
    }

    #[test]
    fn it_round_trips_the_interpreted_fields() {
        let original = sample();
        let header = FileHeader::decode(&original).unwrap();

        let mut encoded = original;
        encoded[at::BANNER..at::BANNER + 16].copy_from_slice(&header.banner);
        encoded[at::PAGE_SIZE..at::PAGE_SIZE + 2]
            .copy_from_slice(&header.page_size.to_be_bytes());
        encoded[at::WRITE_VERSION] = header.write_version;
        encoded[at::READ_VERSION] = header.read_version;
        encoded[at::RESERVED_SPACE] = header.reserved_space;
        encoded[at::PAGE_COUNT..at::PAGE_COUNT + 4]
            .copy_from_slice(&header.page_count.to_be_bytes());

        assert_eq!(encoded, original);
    }

    #[test]
    fn it_rejects_buffers_of_any_other_length() {
        for len in [0, 99, 101, 112] {
            let bytes = vec![0u8; len];
            assert!(matches!(
                FileHeader::decode(&bytes),
                Err(Error::InvalidLength {
                    expected: FILE_HEADER_SIZE,
                    actual,
                }) if actual == len
            ));
        }
    }

    #[test]
    fn it_rejects_a_bad_banner() {
        let mut bytes = sample();
        bytes[0] = b'X';
        assert!(matches!(
            FileHeader::decode(&bytes),
            Err(Error::BadMagic(_))
        ));
    }

    #[test]
    fn it_rejects_invalid_page_sizes() {
        // Not a power of two, below 512, above 32768 (zero), and the
        // historic 1-means-65536 encoding.
        for page_size in [1000u16, 256, 0, 1] {
            let mut bytes = sample();
            bytes[16..18].copy_from_slice(&page_size.to_be_bytes());
            assert!(matches!(
                FileHeader::decode(&bytes),
                Err(Error::InvalidPageSize(got)) if got == page_size
            ));
        }
    }
}
