use okiya::types::{idx_to_rc, rc_to_idx};
use okiya::{is_winning, WIN_PATTERNS};

#[test]
fn cell_indexing_round_trips() {
    for cell in 0..16 {
        let (r, c) = idx_to_rc(cell);
        assert_eq!(rc_to_idx(r, c), Some(cell));
    }
    assert_eq!(rc_to_idx(4, 0), None);
    assert_eq!(rc_to_idx(0, 4), None);
}

#[test]
fn nineteen_distinct_four_cell_patterns() {
    assert_eq!(WIN_PATTERNS.len(), 19);
    for (i, &pattern) in WIN_PATTERNS.iter().enumerate() {
        assert_eq!(pattern.count_ones(), 4, "pattern {i} is not a 4-cell shape");
        for &other in &WIN_PATTERNS[i + 1..] {
            assert_ne!(pattern, other, "pattern {i} duplicated");
        }
    }
}

#[test]
fn each_pattern_wins_with_its_minimal_covering_mask() {
    for &pattern in &WIN_PATTERNS {
        assert!(is_winning(pattern));
    }
}

#[test]
fn dropping_any_cell_from_a_pattern_no_longer_wins() {
    for &pattern in &WIN_PATTERNS {
        for cell in 0..16 {
            let bit = 1u16 << cell;
            if pattern & bit != 0 {
                assert!(!is_winning(pattern & !bit));
            }
        }
    }
}

#[test]
fn supersets_of_a_pattern_still_win() {
    for &pattern in &WIN_PATTERNS {
        assert!(is_winning(pattern | 0b1000_0000_0000_0000 | 0b1));
    }
    assert!(is_winning(u16::MAX));
}

#[test]
fn empty_and_scattered_tokens_do_not_win() {
    assert!(!is_winning(0));
    // Cells {0, 3, 6, 15} cover no row, column, diagonal or block
    assert!(!is_winning(0b1000_0000_0100_1001));
}

#[test]
fn rows_columns_diagonals_and_blocks_are_all_present() {
    let rows = [0x000F, 0x00F0, 0x0F00, 0xF000];
    let cols = [0x1111, 0x2222, 0x4444, 0x8888];
    let diags = [0x8421, 0x1248];
    for mask in rows.into_iter().chain(cols).chain(diags) {
        assert!(
            WIN_PATTERNS.contains(&mask),
            "missing line pattern {mask:#06x}"
        );
    }
    // The nine 2x2 blocks, anchored at each (row, col) in 0..3
    for row in 0..3u8 {
        for col in 0..3u8 {
            let anchor = rc_to_idx(row, col).unwrap();
            let block = (0b11 << anchor) | (0b11 << (anchor + 4));
            assert!(
                WIN_PATTERNS.contains(&block),
                "missing block pattern at cell {anchor}"
            );
        }
    }
}
