use std::path::Path;
use std::process::Command;

use image::{Rgba, RgbaImage};

fn appicons(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_appicons"));
    cmd.current_dir(root);
    cmd
}

#[test]
fn missing_logo_exits_with_one_and_writes_nothing() {
    let root = tempfile::tempdir().unwrap();

    let output = appicons(root.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("assets/images/logo.png"));
    assert!(!root.path().join("android").exists());
    assert!(!root.path().join("ios").exists());
}

#[test]
fn no_arguments_generates_icons_in_current_dir() {
    let root = tempfile::tempdir().unwrap();
    let logo = root.path().join("assets/images/logo.png");
    std::fs::create_dir_all(logo.parent().unwrap()).unwrap();
    RgbaImage::from_pixel(256, 256, Rgba([0, 0, 0, 255]))
        .save(&logo)
        .unwrap();

    let output = appicons(root.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Android: 5/5"));
    assert!(stdout.contains("iOS: 15/15"));
    assert!(stdout.contains("flutter clean"));
    assert_eq!(
        image::image_dimensions(
            root.path()
                .join("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-83.5x83.5@2x.png")
        )
        .unwrap(),
        (167, 167)
    );
}

#[test]
fn corrupted_logo_still_exits_zero_and_reports() {
    let root = tempfile::tempdir().unwrap();
    let logo = root.path().join("assets/images/logo.png");
    std::fs::create_dir_all(logo.parent().unwrap()).unwrap();
    std::fs::write(&logo, b"garbage").unwrap();

    let output = appicons(root.path()).arg("--json").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Android: 0/5"));
    assert!(stdout.contains("iOS: 0/15"));
    assert!(stdout.contains("Some icons could not be generated"));
    assert!(stdout.contains("\"platform\": \"ios\""));
}

#[test]
fn root_flag_targets_another_directory() {
    let root = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    let logo = root.path().join("brand.png");
    RgbaImage::from_pixel(64, 32, Rgba([9, 9, 9, 255]))
        .save(&logo)
        .unwrap();

    let output = appicons(cwd.path())
        .arg("--root")
        .arg(root.path())
        .arg("--logo")
        .arg("brand.png")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(
        root.path()
            .join("android/app/src/main/res/mipmap-mdpi/ic_launcher.png")
            .exists()
    );
    assert!(!cwd.path().join("android").exists());
}
