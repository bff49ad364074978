use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

const SVG_FILES: [&str; 8] = [
    "svg.cmp",
    "svgController.js",
    "svgHelper.js",
    "svgRenderer.js",
    "svg.css",
    "svg.auradoc",
    "svg.design",
    "svg.svg",
];

#[test]
fn download_writes_repository_files_into_components_folder() {
    let mut server = mockito::Server::new();
    let mut mocks = Vec::new();
    for file in SVG_FILES {
        let path = format!("/components/svg/{file}");
        let mock = match file {
            "svg.cmp" => server.mock("GET", path.as_str()).with_status(200).with_body("<aura:component/>"),
            "svgRenderer.js" => server.mock("GET", path.as_str()).with_status(200).with_body("404: Not Found\n"),
            _ => server.mock("GET", path.as_str()).with_status(404),
        };
        mocks.push(mock.create());
    }

    let ctx = TestContext::new();
    ctx.write_config(&format!("[repository]\nbase_url = \"{}\"\n", server.url()));
    ctx.write_file("strike-components/stale/stale.cmp", "old");

    ctx.cli()
        .args(["download", "svg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("svg (1 files)"))
        .stdout(predicate::str::contains("Downloaded 1 files"));

    assert_eq!(ctx.read_file("strike-components/svg/svg.cmp"), "<aura:component/>");
    assert!(!ctx.components_dir().join("svg/svgRenderer.js").exists());
    assert!(!ctx.components_dir().join("stale").exists());
    assert_eq!(fs::read_dir(ctx.components_dir()).unwrap().count(), 1);
    for mock in mocks {
        mock.assert();
    }
}

#[test]
fn download_rejects_unknown_bundle_without_touching_folder() {
    let ctx = TestContext::new();
    ctx.write_file("strike-components/svg/svg.cmp", "keep");

    ctx.cli()
        .args(["download", "strike_nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(ctx.read_file("strike-components/svg/svg.cmp"), "keep");
}
