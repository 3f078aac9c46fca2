use super::layout::{self, PAGE_HEADER_LAYOUT};
use super::{PageNum, Result};
use crate::Error;
use bytes::Buf;

/// Bytes reserved at the page-header site. Leaf headers only occupy
/// the first 8 of them.
pub const PAGE_HEADER_SIZE: usize = 12;

/// Field offsets derived from the layout table. Indices follow the
/// order of `PAGE_HEADER_LAYOUT`.
mod at {
    use super::{layout, PAGE_HEADER_LAYOUT};

    pub const PAGE_KIND: usize = layout::offset(PAGE_HEADER_LAYOUT, 0);
    pub const FIRST_FREEBLOCK: usize = layout::offset(PAGE_HEADER_LAYOUT, 1);
    pub const CELL_COUNT: usize = layout::offset(PAGE_HEADER_LAYOUT, 2);
    pub const CELL_CONTENT_START: usize = layout::offset(PAGE_HEADER_LAYOUT, 3);
    pub const FRAGMENTED_FREE_BYTES: usize = layout::offset(PAGE_HEADER_LAYOUT, 4);
    pub const RIGHT_MOST_POINTER: usize = layout::offset(PAGE_HEADER_LAYOUT, 5);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    InteriorIndex = 2,
    InteriorTable = 5,
    LeafIndex = 10,
    LeafTable = 13,
}

impl TryFrom<u8> for PageKind {
    type Error = Error;

    fn try_from(byte: u8) -> std::result::Result<Self, Self::Error> {
        match byte {
            2 => Ok(Self::InteriorIndex),
            5 => Ok(Self::InteriorTable),
            10 => Ok(Self::LeafIndex),
            13 => Ok(Self::LeafTable),
            _ => Err(Error::UnknownPageKind(byte)),
        }
    }
}

impl PageKind {
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::LeafIndex | Self::LeafTable)
    }

    pub fn is_interior(self) -> bool {
        !self.is_leaf()
    }
}

/// Header of a leaf page. Leaf pages have no child references, so no
/// right-most pointer exists for them, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafPageHeader {
    pub kind: PageKind,
    /// Start of the first freeblock on the page, 0 if none.
    pub first_freeblock: u16,
    pub cell_count: u16,
    /// A stored 0 historically means 65536; not reinterpreted here.
    pub cell_content_start: u16,
    pub fragmented_free_bytes: u8,
}

/// Header of an interior page: the leaf fields plus the page number of
/// the right-most child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorPageHeader {
    pub kind: PageKind,
    pub first_freeblock: u16,
    pub cell_count: u16,
    pub cell_content_start: u16,
    pub fragmented_free_bytes: u8,
    pub right_most_pointer: PageNum,
}

/// The b-tree page header, 8 bytes on disk for leaf pages and 12 for
/// interior ones. The shape is selected by the kind tag in byte 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHeader {
    Leaf(LeafPageHeader),
    Interior(InteriorPageHeader),
}

impl PageHeader {
    /// Decodes an exactly 12-byte buffer, the full reservation at the
    /// page-header site. For leaf kinds the last 4 bytes are discarded
    /// unread.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PAGE_HEADER_SIZE {
            return Err(Error::InvalidLength {
                expected: PAGE_HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let kind = PageKind::try_from(bytes[at::PAGE_KIND])?;
        let first_freeblock = (&bytes[at::FIRST_FREEBLOCK..]).get_u16();
        let cell_count = (&bytes[at::CELL_COUNT..]).get_u16();
        let cell_content_start = (&bytes[at::CELL_CONTENT_START..]).get_u16();
        let fragmented_free_bytes = bytes[at::FRAGMENTED_FREE_BYTES];

        if kind.is_leaf() {
            Ok(Self::Leaf(LeafPageHeader {
                kind,
                first_freeblock,
                cell_count,
                cell_content_start,
                fragmented_free_bytes,
            }))
        } else {
            Ok(Self::Interior(InteriorPageHeader {
                kind,
                first_freeblock,
                cell_count,
                cell_content_start,
                fragmented_free_bytes,
                right_most_pointer: (&bytes[at::RIGHT_MOST_POINTER..]).get_u32(),
            }))
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Self::Leaf(h) => h.kind,
            Self::Interior(h) => h.kind,
        }
    }

    pub fn first_freeblock(&self) -> u16 {
        match self {
            Self::Leaf(h) => h.first_freeblock,
            Self::Interior(h) => h.first_freeblock,
        }
    }

    pub fn cell_count(&self) -> u16 {
        match self {
            Self::Leaf(h) => h.cell_count,
            Self::Interior(h) => h.cell_count,
        }
    }

    pub fn cell_content_start(&self) -> u16 {
        match self {
            Self::Leaf(h) => h.cell_content_start,
            Self::Interior(h) => h.cell_content_start,
        }
    }

    pub fn fragmented_free_bytes(&self) -> u8 {
        match self {
            Self::Leaf(h) => h.fragmented_free_bytes,
            Self::Interior(h) => h.fragmented_free_bytes,
        }
    }

    /// Some iff the page is an interior page.
    pub fn right_most_pointer(&self) -> Option<PageNum> {
        match self {
            Self::Leaf(_) => None,
            Self::Interior(h) => Some(h.right_most_pointer),
        }
    }

    /// On-disk size of this header.
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf(_) => 8,
            Self::Interior(_) => PAGE_HEADER_SIZE,
        }
    }
}
