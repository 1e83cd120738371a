use pdf_twoup::{BatchOptions, discover_inputs, image_output_path, mirrored_output_path};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn output_path_mirrors_relative_directories() {
    let output = mirrored_output_path(
        Path::new("in/2020/spring/mondai.pdf"),
        Path::new("in"),
        Path::new("out"),
        "_processed",
    );
    assert_eq!(output, PathBuf::from("out/2020/spring/mondai_processed.pdf"));
}

#[test]
fn output_path_for_top_level_input() {
    let output = mirrored_output_path(
        Path::new("in/mondai.pdf"),
        Path::new("in"),
        Path::new("out"),
        "_no_white",
    );
    assert_eq!(output, PathBuf::from("out/mondai_no_white.pdf"));
}

#[test]
fn single_file_input_maps_to_output_root() {
    let output = mirrored_output_path(
        Path::new("scan.pdf"),
        Path::new("scan.pdf"),
        Path::new("out"),
        "_processed",
    );
    assert_eq!(output, PathBuf::from("out/scan_processed.pdf"));
}

#[test]
fn discovery_filters_sorts_and_recurses() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("sub")).unwrap();
    fs::write(root.path().join("b.pdf"), b"x").unwrap();
    fs::write(root.path().join("A.PDF"), b"x").unwrap();
    fs::write(root.path().join("notes.txt"), b"x").unwrap();
    fs::write(root.path().join("sub/c.pdf"), b"x").unwrap();

    let recursive = discover_inputs(root.path(), &BatchOptions::default()).unwrap();
    let names: Vec<_> = recursive
        .iter()
        .map(|p| p.strip_prefix(root.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("A.PDF"),
            PathBuf::from("b.pdf"),
            PathBuf::from("sub/c.pdf"),
        ]
    );

    let flat = discover_inputs(
        root.path(),
        &BatchOptions {
            recursive: false,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(flat.len(), 2);
}

#[test]
fn discovery_applies_the_name_filter() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("2020_MONDAI.pdf"), b"x").unwrap();
    fs::write(root.path().join("2020_kaitou.pdf"), b"x").unwrap();

    let options = BatchOptions {
        name_filter: Some("mondai".to_string()),
        ..Default::default()
    };
    let inputs = discover_inputs(root.path(), &options).unwrap();
    assert_eq!(inputs.len(), 1);
    assert!(inputs[0].ends_with("2020_MONDAI.pdf"));
}

#[test]
fn a_plain_file_is_its_own_batch() {
    let root = TempDir::new().unwrap();
    let file = root.path().join("single.pdf");
    fs::write(&file, b"x").unwrap();

    let inputs = discover_inputs(&file, &BatchOptions::default()).unwrap();
    assert_eq!(inputs, vec![file]);
}

#[test]
fn image_output_lands_in_the_parent_directory() {
    let output = image_output_path(Path::new("scans/2020_haru"), "_2in1_B4");
    assert_eq!(output, PathBuf::from("scans/2020_haru_2in1_B4.pdf"));
}
