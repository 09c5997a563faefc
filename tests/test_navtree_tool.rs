use clap::Parser;
use navtree::cmd::{build_index_set, run_tool, ToolOpts};
use navtree::errors::IndexError;
use serde_json::Value;

fn opts(args: &[&str]) -> ToolOpts {
    let mut argv = vec!["navtree-tool"];
    argv.extend_from_slice(args);
    ToolOpts::try_parse_from(argv).unwrap()
}

fn run_json(args: &[&str]) -> Value {
    let output = run_tool(opts(args)).unwrap();
    serde_json::from_str(&output).unwrap()
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_find_hits_and_misses() {
    let value = run_json(&[
        "--base-url",
        "https://example.org/xeno3prm/",
        "find",
        "TRIG_NOW",
        "does_not_exist",
        "a4l_cmd_desc::flags",
    ]);

    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["TRIG_NOW", "does_not_exist", "a4l_cmd_desc::flags"]);

    assert_eq!(value["TRIG_NOW"]["group"], "group__analogy__lib__async1");
    assert_eq!(
        value["TRIG_NOW"]["target"],
        "group__analogy__lib__async1.html#gabe9879c2801e26d95673b45dbd04c6c8"
    );
    assert_eq!(
        value["TRIG_NOW"]["url"],
        "https://example.org/xeno3prm/group__analogy__lib__async1.html#gabe9879c2801e26d95673b45dbd04c6c8"
    );
    assert!(value["does_not_exist"].is_null());
    assert_eq!(value["a4l_cmd_desc::flags"]["name"], "flags");
}

#[test]
fn test_children_command() {
    let value = run_json(&["children", "a4l_cmd_desc"]);
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 16);
    assert_eq!(names[0], "chan_descs");
    assert_eq!(names[15], "stop_src");
    assert!(value[0].get("url").is_none());

    assert_eq!(run_json(&["children", "A4L_CMD_BULK"]), Value::Array(vec![]));
    assert_eq!(run_json(&["children", "nope"]), Value::Array(vec![]));
}

#[test]
fn test_search_command() {
    let value = run_json(&["search", "-i", "trig_time"]);
    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["TRIG_TIME", "TRIG_TIMER"]);

    let value = run_json(&["search", "--exact", "--ignore-case", "trig_time"]);
    assert_eq!(value.as_array().unwrap().len(), 1);

    let value = run_json(&["search", "--limit", "3", "TRIG_"]);
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn test_stats_pretty() {
    let output = run_tool(opts(&["-o", "pretty", "stats"])).unwrap();
    insta::assert_snapshot!(output, @r###"
    [
      {
        "group": "group__analogy__lib__async1",
        "top_level": 36,
        "total": 52
      }
    ]
    "###);
}

#[test]
fn test_dump_preserves_order() {
    let value = run_json(&["dump"]);
    assert_eq!(value.as_array().unwrap().len(), 1);
    let entries = value[0]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 36);
    assert_eq!(entries[0]["name"], "a4l_cmd_desc");
    assert_eq!(entries[0]["children"][5]["name"], "flags");
    assert!(entries[1].get("children").is_none());

    assert_eq!(run_json(&["dump", "--group", "group__nope"]), Value::Array(vec![]));
}

#[test]
fn test_config_with_navtree_dir() {
    let config = fixture("config.json");
    let set = build_index_set(&opts(&["--config", &config, "stats"])).unwrap();
    let groups: Vec<&str> = set.indexes.iter().map(|i| i.group.as_str()).collect();
    assert_eq!(
        groups,
        vec![
            "group__analogy__lib__async1",
            "group__analogy__lib__sync1",
            "group__analogy__lib__level2",
        ]
    );
    assert_eq!(
        set.base_url.as_ref().unwrap().as_str(),
        "https://xenomai.org/documentation/xenomai-3/html/xeno3prm/"
    );

    let value = run_json(&["--config", &config, "find", "a4l_snd_insn", "chan_desc"]);
    assert_eq!(value["a4l_snd_insn"]["group"], "group__analogy__lib__sync1");
    assert_eq!(
        value["chan_desc"]["url"],
        "https://xenomai.org/documentation/xenomai-3/html/xeno3prm/structa4l__insn.html#a1f2b"
    );
}

#[test]
fn test_explicit_navtree_without_builtin() {
    let navtree = fixture("html/group__analogy__lib__sync1.js");
    let value = run_json(&["--no-builtin", "--navtree", &navtree, "find", "a4l_insn", "TRIG_NOW"]);
    assert_eq!(value["a4l_insn"]["children"], 2);
    assert!(value["TRIG_NOW"].is_null());
}

#[test]
fn test_read_errors_surface() {
    let err = run_tool(opts(&["--navtree", "/nonexistent/group__x.js", "stats"])).unwrap_err();
    assert!(matches!(err, IndexError::Io(_)));

    let err = run_tool(opts(&["--base-url", "not a url", "stats"])).unwrap_err();
    assert!(matches!(err, IndexError::BadInput(_)));
}
