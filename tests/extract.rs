mod common;
use common::project;
use flagconf::flags::{FlagItem, FlagSources, extract_items, extract_tokens};
use flagconf::output::{SettingsRequest, settings};

#[test]
fn no_files_no_tokens() {
    let td = project(None, None);
    let sources = FlagSources::conventional(td.path());
    assert!(extract_tokens(&sources).unwrap().is_empty());
    assert!(extract_items(&sources).unwrap().is_empty());
}

#[test]
fn tokens_split_on_single_spaces_in_order() {
    let td = project(Some("-I./foo\n-DFOO=1 -DBAR=2\n"), None);
    let got = settings(&FlagSources::conventional(td.path()), &SettingsRequest::default()).unwrap();
    assert_eq!(got.flags, vec!["-I./foo", "-DFOO=1", "-DBAR=2"]);
}

#[test]
fn base_tokens_precede_extra_tokens_without_dedup() {
    let td = project(Some("-Wall -O2\n"), Some("-O2\n-DEXTRA\n"));
    let tokens = extract_tokens(&FlagSources::conventional(td.path())).unwrap();
    assert_eq!(tokens, vec!["-Wall", "-O2", "-O2", "-DEXTRA"]);
}

#[test]
fn extra_alone_is_enough() {
    let td = project(None, Some("-std=c++17\n"));
    let items = extract_items(&FlagSources::conventional(td.path())).unwrap();
    assert_eq!(items, vec![FlagItem::Token("-std=c++17".into()), FlagItem::EndOfLine]);
}

#[test]
fn windows_and_old_mac_line_endings_are_stripped() {
    let td = project(Some("-Wall\r\n-DA -DB\r\n"), Some("-O2\r-g\n"));
    let tokens = extract_tokens(&FlagSources::conventional(td.path())).unwrap();
    assert_eq!(tokens, vec!["-Wall", "-DA", "-DB", "-O2", "-g"]);
}
