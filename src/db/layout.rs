//! The fixed byte layouts of both header structures, kept as data so
//! that field offsets and total sizes are derived from a single table.

use super::{file_header::FILE_HEADER_SIZE, page_header::PAGE_HEADER_SIZE};

/// One fixed-width field. Fields have no explicit offsets: each one
/// starts where the previous one ends.
#[derive(Debug, Clone, Copy)]
pub(super) struct Field {
    #[allow(unused)]
    pub name: &'static str,
    pub width: usize,
}

const fn field(name: &'static str, width: usize) -> Field {
    Field { name, width }
}

/// The 100-byte file header at offset 0. The unused regions are part
/// of the layout but are never interpreted.
pub(super) const FILE_HEADER_LAYOUT: &[Field] = &[
    field("banner", 16),
    field("page_size", 2),
    field("write_version", 1),
    field("read_version", 1),
    field("reserved_space", 1),
    field("unused", 7),
    field("page_count", 4),
    field("trailer", 68),
];

/// The b-tree page header. The layout always reserves 12 bytes; the
/// trailing right-most pointer is meaningful for interior pages only.
pub(super) const PAGE_HEADER_LAYOUT: &[Field] = &[
    field("page_kind", 1),
    field("first_freeblock", 2),
    field("cell_count", 2),
    field("cell_content_start", 2),
    field("fragmented_free_bytes", 1),
    field("right_most_pointer", 4),
];

pub(super) const fn total_width(fields: &[Field]) -> usize {
    let mut sum = 0;
    let mut i = 0;
    while i < fields.len() {
        sum += fields[i].width;
        i += 1;
    }
    sum
}

/// Byte offset of the field at `index`, the sum of all preceding widths.
pub(super) const fn offset(fields: &[Field], index: usize) -> usize {
    let mut sum = 0;
    let mut i = 0;
    while i < index {
        sum += fields[i].width;
        i += 1;
    }
    sum
}

const _: () = assert!(total_width(FILE_HEADER_LAYOUT) == FILE_HEADER_SIZE);
const _: () = assert!(total_width(PAGE_HEADER_LAYOUT) == PAGE_HEADER_SIZE);
