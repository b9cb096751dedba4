use embedfs_fixture::{assets, fixture, GENERATED};
use std::io::{Read, Seek, SeekFrom};

// ============================================================================
// Generated source
// ============================================================================

#[test]
fn test_compiled_module_matches_fresh_render() {
    let fresh = embedfs::generate(&fixture::config()).unwrap();
    assert_eq!(String::from_utf8(fresh).unwrap(), GENERATED);
}

#[test]
fn test_generated_header() {
    assert!(GENERATED.starts_with(
        "// Code generated by \"embedfs --prefix testdata --modtime 1500000000 testdata\"; DO NOT EDIT.\n"
    ));
}

// ============================================================================
// Static filesystem
// ============================================================================

#[test]
fn test_open_read_and_stat() {
    let mut file = assets::fs(false).open("/README.md").unwrap();

    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "ten bytes!");

    let info = file.stat().unwrap();
    assert_eq!(info.name, "README.md");
    assert_eq!(info.size, 10);
    assert!(!info.is_dir);
    assert_eq!(info.mod_time.timestamp(), fixture::MOD_TIME);

    file.seek(SeekFrom::Start(4)).unwrap();
    let mut tail = String::new();
    file.read_to_string(&mut tail).unwrap();
    assert_eq!(tail, "bytes!");

    file.close().unwrap();
}

#[test]
fn test_root_listing_covers_every_entry() {
    let mut root = assets::fs(false).open("/").unwrap();
    assert!(root.stat().unwrap().is_dir);

    let names: Vec<String> = root
        .readdir(0)
        .unwrap()
        .into_iter()
        .map(|info| info.name)
        .collect();
    assert_eq!(names, ["README.md", "sub", "nested.txt", "x.txt"]);
}

#[test]
fn test_missing_name_is_not_found() {
    let err = assets::fs(false).open("/nope.txt").err().unwrap();
    assert!(err.is_not_found());
    assert!(assets::read_bytes(false, "/nope.txt").unwrap_err().is_not_found());
}

#[test]
fn test_sub_directory_view() {
    let sub = assets::dir(false, "/sub");

    let mut file = sub.open("/nested.txt").unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "deep\n");

    assert_eq!(sub.open("/").unwrap().stat().unwrap().name, "sub");
    assert!(sub.open("/README.md").err().unwrap().is_not_found());
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_byte_and_string_accessors() {
    assert_eq!(assets::read_bytes(false, "/x.txt").unwrap(), b"hello, world\n");
    assert_eq!(assets::must_read_bytes(false, "/sub/nested.txt"), b"deep\n");
    assert_eq!(assets::read_string(false, "/README.md").unwrap(), "ten bytes!");
    assert_eq!(assets::must_read_string(false, "/README.md"), "ten bytes!");
}

#[test]
#[should_panic]
fn test_must_read_panics_on_missing() {
    assets::must_read_string(false, "/nope.txt");
}

#[test]
fn test_local_mode_reads_from_disk() {
    assert_eq!(assets::must_read_string(true, "/README.md"), "ten bytes!");

    let mut root = assets::fs(true).open("/").unwrap();
    let names: Vec<String> = root
        .readdir(0)
        .unwrap()
        .into_iter()
        .map(|info| info.name)
        .collect();
    assert_eq!(names, ["README.md", "sub", "x.txt"]);
}

#[test]
fn test_registry_contents() {
    let registry = assets::registry();
    // Three files plus the root and /sub
    assert_eq!(registry.len(), 5);
    assert!(registry.materializations() <= registry.len());
}
