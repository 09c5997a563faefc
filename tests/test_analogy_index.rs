use navtree::file_format::navtree::read_navtree;
use navtree::{builtin, load};

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_every_name_finds_a_target() {
    let index = load();
    for item in index.walk() {
        let target = index
            .find(&item.entry.name)
            .unwrap_or_else(|| panic!("no target for {}", item.path));
        assert!(!target.is_empty(), "empty target for {}", item.path);
        assert!(!target.page.is_empty());
    }
}

#[test]
fn test_unknown_name_is_absent() {
    let index = load();
    assert!(index.find("does_not_exist").is_none());
    assert!(index.entry("").is_none());
    assert!(index.children_of("does_not_exist").is_empty());
}

#[test]
fn test_cmd_desc_fields_in_documented_order() {
    let names: Vec<&str> = builtin()
        .children_of("a4l_cmd_desc")
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    insta::assert_snapshot!(names.join("\n"), @r###"
    chan_descs
    convert_arg
    convert_src
    data
    data_len
    flags
    idx_subd
    nb_chan
    scan_begin_arg
    scan_begin_src
    scan_end_arg
    scan_end_src
    start_arg
    start_src
    stop_arg
    stop_src
    "###);
    assert_eq!(names.len(), 16);
}

#[test]
fn test_leaf_has_no_children() {
    let index = load();
    assert!(index.children_of("A4L_CMD_BULK").is_empty());
    assert!(index.entry("A4L_CMD_BULK").unwrap().is_leaf());
    assert!(index.children_of("flags").is_empty());
}

#[test]
fn test_known_targets() {
    let index = load();
    assert_eq!(
        index.find("a4l_cmd_desc").unwrap().to_string(),
        "structa4l__cmd__desc.html"
    );
    assert_eq!(
        index.find("stop_src").unwrap().to_string(),
        "structa4l__cmd__desc.html#a89b8a0c0cc4937ce414434f140d8bf68"
    );
    assert_eq!(
        index.find("a4l_snd_cancel").unwrap().to_string(),
        "group__analogy__lib__async1.html#ga70dd6f96f60e9c839eb1ffc8538fc6c7"
    );
    // Case matters: the FLAGS macro and the flags field are different symbols.
    assert_ne!(index.find("FLAGS"), index.find("flags"));
}

#[test]
fn test_top_level_order_and_count() {
    let index = load();
    assert_eq!(index.len(), 36);
    let first: Vec<&str> = index.entries()[..4].iter().map(|e| e.name.as_str()).collect();
    assert_eq!(first, vec!["a4l_cmd_desc", "A4L_CMD_BULK", "A4L_CMD_SIMUL", "A4L_CMD_WRITE"]);
    assert_eq!(index.entries().last().unwrap().name, "a4l_snd_command");
}

#[test]
fn test_reload_is_deep_equal() {
    let a = load();
    let b = load();
    assert_eq!(a, b);
    assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
}

#[test]
fn test_doxygen_file_matches_builtin() {
    let parsed = read_navtree(&fixture("group__analogy__lib__async1.js")).unwrap();
    assert_eq!(&parsed, builtin());
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| builtin().find("TRIG_TIMER").map(|t| t.to_string())))
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().unwrap().as_deref(),
            Some("group__analogy__lib__async1.html#gaa8dfbe568cb81f66fe77d574616e378d")
        );
    }
}
