//! Ensure that name matching ignores case but nothing else.

use shapegraft_common::{names_eq, NameSet};

#[test]
fn eq_ignores_case() {
    assert!(names_eq("mt_cwire", "MT_CWIRE"));
    assert!(names_eq("DB_TrackSfs1.ace", "db_tracksfs1.ACE"));
    assert!(!names_eq("mt_cwire", "mt_cwire "));
    assert!(!names_eq("Rails", "Rail"));
}

#[test]
fn eq_non_ascii() {
    assert!(names_eq("Gleis_Ä", "gleis_ä"));
}

#[test]
fn set_membership() {
    let set = NameSet::from(["mt_trackbed", "MB_TRACKBED", "mt_cwire"]);
    assert_eq!(set.len(), 3);
    assert!(set.contains("MT_TRACKBED"));
    assert!(set.contains("mb_trackbed"));
    assert!(set.contains("Mt_CWire"));
    assert!(!set.contains("Rails"));
}

#[test]
fn set_insert_reports_duplicates() {
    let mut set = NameSet::new();
    assert!(set.is_empty());
    assert!(set.insert("Rails"));
    assert!(!set.insert("RAILS"));
    assert_eq!(set.len(), 1);
}
