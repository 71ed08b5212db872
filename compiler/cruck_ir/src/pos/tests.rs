use super::*;

#[test]
fn test_pos_display_is_one_based() {
    let pos = SourcePos::new(0, 0);
    assert_eq!(pos.to_string(), "1:1");
    assert_eq!(SourcePos::new(4, 9).to_string(), "5:10");
}

#[test]
fn test_pos_debug_is_zero_based() {
    assert_eq!(format!("{:?}", SourcePos::new(4, 9)), "(4, 9)");
}

#[test]
fn test_pos_at_saturates() {
    let pos = SourcePos::at(usize::MAX, 3);
    assert_eq!(pos.line, u32::MAX);
    assert_eq!(pos.col, 3);
}

#[test]
fn test_pos_ordering_is_line_major() {
    assert!(SourcePos::new(1, 0) > SourcePos::new(0, 50));
    assert!(SourcePos::new(1, 2) < SourcePos::new(1, 3));
}
