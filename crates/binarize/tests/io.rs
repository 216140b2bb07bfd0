use binarize::{binarize, io, BinarizeConfig, BinarizeError, Palette, Parameters, TrSingh};
use image::{GrayImage, Luma};
use tempfile::tempdir;

fn gradient_page() -> GrayImage {
    // left-to-right illumination falloff with two dark glyph-like blocks
    GrayImage::from_fn(64, 40, |x, y| {
        let paper = 240 - (x * 2) as u8;
        let ink = (8..14).contains(&y) && ((10..16).contains(&x) || (44..50).contains(&x));
        Luma([if ink { paper / 5 } else { paper }])
    })
}

#[test]
fn binarize_file_matches_in_memory_result() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("page.png");
    let output = dir.path().join("page_bin.png");
    let page = gradient_page();
    page.save(&input).expect("write input");

    let params = Parameters::new().with("window", 21).with("k", 0.2);
    let written = io::binarize_file(&input, &output, &params).expect("binarize");
    let expected = binarize::<TrSingh>(io::gray_view(&page), &params);
    assert_eq!(written, expected);

    let reloaded = io::load_grayscale(&output).expect("reload");
    assert_eq!(reloaded, expected);
    assert!(reloaded
        .data
        .iter()
        .all(|&px| px == Palette::BLACK || px == Palette::WHITE));

    // glyph pixels are ink on both the bright and the dim side of the page
    assert_eq!(reloaded.get(12, 10), Palette::BLACK);
    assert_eq!(reloaded.get(46, 10), Palette::BLACK);
    assert_eq!(reloaded.get(30, 30), Palette::WHITE);
}

#[test]
fn config_round_trips_through_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("job.json");
    let cfg = BinarizeConfig {
        input_path: Some("in.png".to_string()),
        output_path: None,
        params: Parameters::new().with("window", 51),
    };
    cfg.write_json(&path).expect("write");

    let loaded = BinarizeConfig::load_json(&path).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.trsingh_params().window, 51);
}

#[test]
fn load_reports_path_on_failure() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.png");
    match io::load_grayscale(&missing) {
        Err(BinarizeError::Open { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[test]
fn malformed_config_is_a_json_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").expect("write");
    assert!(matches!(
        BinarizeConfig::load_json(&path),
        Err(BinarizeError::Json(_))
    ));
}
