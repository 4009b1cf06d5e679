/// Column index where the walking aisle is rendered for a row layout,
/// or None when the column count is not a usable layout.
///
/// Six-abreast cabins (A B C | D E F) break after the third column and
/// four-abreast (A B | C D) after the second; any other width breaks at
/// the midpoint.
pub fn get_aisle_index(column_count: i32) -> Option<u32> {
    if column_count <= 0 {
        return None;
    }
    let index = match column_count {
        6 => 3,
        4 => 2,
        n => n / 2,
    };
    Some(index as u32)
}

/// Whether the aisle gap is rendered before the column at `index`.
pub fn is_aisle_position(index: i32, column_count: i32) -> bool {
    if index < 0 {
        return false;
    }
    get_aisle_index(column_count) == Some(index as u32)
}
