//! Candidate-ordering tests.

use std::path::PathBuf;

use rstest::rstest;

use super::{SearchPath, generate_candidates};

fn paths(raw: &[&str]) -> Vec<PathBuf> {
    raw.iter().map(PathBuf::from).collect()
}

#[rstest]
fn orders_paths_then_extensions_then_plain_before_hidden() {
    let candidates = generate_candidates(
        &[SearchPath::from("A"), SearchPath::from("B")],
        &[".json", ".yaml"],
        &["x"],
    );
    assert_eq!(
        candidates,
        paths(&[
            "A/x.json", "A/.x.json", "A/x.yaml", "A/.x.yaml", "B/x.json", "B/.x.json",
            "B/x.yaml", "B/.x.yaml",
        ])
    );
}

#[rstest]
fn basenames_vary_fastest() {
    let candidates = generate_candidates(&[SearchPath::from("d")], &["", ".json"], &["foo", "bar"]);
    assert_eq!(
        candidates,
        paths(&[
            "d/foo", "d/.foo", "d/bar", "d/.bar", "d/foo.json", "d/.foo.json", "d/bar.json",
            "d/.bar.json",
        ])
    );
}

#[rstest]
fn current_dir_candidates_have_no_prefix() {
    let candidates = generate_candidates(&[SearchPath::CurrentDir], &[""], &["config"]);
    assert_eq!(candidates, paths(&["config", ".config"]));
    assert!(candidates.iter().all(|c| c.parent() == Some(std::path::Path::new(""))));
}

#[rstest]
fn duplicate_basenames_are_kept() {
    let candidates = generate_candidates(&[SearchPath::from("d")], &[".json"], &["app", "app"]);
    assert_eq!(
        candidates,
        paths(&["d/app.json", "d/.app.json", "d/app.json", "d/.app.json"])
    );
}

#[rstest]
#[case::no_paths(0, 1, 1)]
#[case::no_extensions(1, 0, 1)]
#[case::no_basenames(1, 1, 0)]
fn any_empty_axis_yields_nothing(
    #[case] path_count: usize,
    #[case] ext_count: usize,
    #[case] name_count: usize,
) {
    let search = vec![SearchPath::from("d"); path_count];
    let extensions = vec![".json"; ext_count];
    let names = vec!["app"; name_count];
    assert!(generate_candidates(&search, &extensions, &names).is_empty());
}

#[rstest]
fn generation_is_restartable() {
    let search = [SearchPath::CurrentDir, SearchPath::from("/etc")];
    let first = generate_candidates(&search, &["", ".yaml"], &["svc"]);
    let second = generate_candidates(&search, &["", ".yaml"], &["svc"]);
    assert_eq!(first, second);
    assert_eq!(first.len(), 8);
}
