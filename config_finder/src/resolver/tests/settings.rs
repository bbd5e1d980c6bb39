//! Builder settings and the inspection helpers on resolver and outcome.

use std::path::PathBuf;

use anyhow::{Result, anyhow, ensure};
use camino::Utf8PathBuf;
use rstest::rstest;
use serde::Deserialize;

use super::fixtures::{DataTree, data_tree};
use crate::{ConfigError, ConfigFormat, ConfigResolver, FixedHomeDir, SearchPath};

#[rstest]
#[case("json", ConfigFormat::Json)]
#[case("yaml", ConfigFormat::Yaml)]
fn format_name_sets_preferred_format(
    #[case] name: &str,
    #[case] expected: ConfigFormat,
) -> Result<()> {
    let resolver = ConfigResolver::builder().try_preferred_format(name)?.build();
    ensure!(resolver.preferred_format() == expected);
    Ok(())
}

#[rstest]
#[case("xml")]
#[case("YAML")]
#[case("yml")]
fn unknown_format_name_is_rejected(#[case] name: &str) -> Result<()> {
    match ConfigResolver::builder().try_preferred_format(name) {
        Err(ConfigError::InvalidArgument { value }) => {
            ensure!(value == name, "unexpected rejected value {value:?}");
            Ok(())
        }
        Err(other) => Err(anyhow!("expected InvalidArgument, got {other}")),
        Ok(_) => Err(anyhow!("{name:?} should not be accepted")),
    }
}

#[rstest]
fn added_path_follows_home_derived_defaults() -> Result<()> {
    let home = PathBuf::from("/srv/home");
    let extra = PathBuf::from("/etc/app");
    let resolver = ConfigResolver::builder()
        .home_dir_provider(FixedHomeDir(Some(home.clone())))
        .add_search_path(extra.clone())
        .build();
    ensure!(
        resolver.search_paths()
            == [
                SearchPath::CurrentDir,
                SearchPath::Dir(home),
                SearchPath::Dir(extra),
            ],
        "unexpected search paths {:?}",
        resolver.search_paths()
    );
    Ok(())
}

#[rstest]
fn added_path_follows_explicit_paths() -> Result<()> {
    let resolver = ConfigResolver::builder()
        .home_dir_provider(FixedHomeDir(None))
        .search_paths(["first"])
        .add_search_path("second")
        .build();
    ensure!(
        resolver.search_paths() == [SearchPath::from("first"), SearchPath::from("second")],
        "unexpected search paths {:?}",
        resolver.search_paths()
    );
    Ok(())
}

#[rstest]
fn utf8_candidates_mirror_candidates() -> Result<()> {
    let dir = Utf8PathBuf::from("etc");
    let resolver = ConfigResolver::builder()
        .search_paths([SearchPath::CurrentDir, SearchPath::from(dir.clone())])
        .extensions([".json"])
        .app_name("app")
        .build();
    let expected = vec![
        Utf8PathBuf::from("app.json"),
        Utf8PathBuf::from(".app.json"),
        dir.join("app.json"),
        dir.join(".app.json"),
    ];
    let utf8 = resolver.utf8_candidates();
    ensure!(utf8 == expected, "unexpected candidates {utf8:?}");
    let std_paths: Vec<PathBuf> = utf8.into_iter().map(Utf8PathBuf::into_std_path_buf).collect();
    ensure!(std_paths == resolver.candidates());
    Ok(())
}

#[derive(Debug, Deserialize)]
struct Sample {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Server {
    port: u16,
}

#[rstest]
fn loaded_value_deserializes_into_typed_config(data_tree: Result<DataTree>) -> Result<()> {
    let tree = data_tree?;
    let resolved = tree.builder(&["config1"]).build().get_named(["appconfig"]);
    let sample: Sample = resolved.deserialize()?;
    ensure!(sample.content == "config1/appconfig.json", "unexpected {sample:?}");
    ensure!(
        resolved.deserialize::<Server>().map(|server| server.port).is_err(),
        "missing fields should fail to deserialize"
    );
    Ok(())
}
