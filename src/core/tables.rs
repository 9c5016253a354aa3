//! Fixed output layout for Flutter-style projects: the Android density
//! buckets and the iOS `AppIcon.appiconset` file list.
use std::path::PathBuf;

use crate::types::{IconSpec, Platform};

pub const DEFAULT_LOGO_PATH: &str = "assets/images/logo.png";

pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";
pub const ANDROID_ICON_FILE: &str = "ic_launcher.png";

/// Density bucket folder -> launcher icon edge length
pub const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

pub const IOS_APPICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

/// Icon set file name -> edge length (point size times scale)
pub const IOS_ICONS: [(&str, u32); 15] = [
    ("Icon-App-20x20@1x.png", 20),
    ("Icon-App-20x20@2x.png", 40),
    ("Icon-App-20x20@3x.png", 60),
    ("Icon-App-29x29@1x.png", 29),
    ("Icon-App-29x29@2x.png", 58),
    ("Icon-App-29x29@3x.png", 87),
    ("Icon-App-40x40@1x.png", 40),
    ("Icon-App-40x40@2x.png", 80),
    ("Icon-App-40x40@3x.png", 120),
    ("Icon-App-60x60@2x.png", 120),
    ("Icon-App-60x60@3x.png", 180),
    ("Icon-App-76x76@1x.png", 76),
    ("Icon-App-76x76@2x.png", 152),
    ("Icon-App-83.5x83.5@2x.png", 167),
    ("Icon-App-1024x1024@1x.png", 1024),
];

pub fn android_icon_specs() -> Vec<IconSpec> {
    ANDROID_DENSITIES
        .iter()
        .map(|&(folder, size)| IconSpec {
            platform: Platform::Android,
            path: PathBuf::from(ANDROID_RES_DIR)
                .join(folder)
                .join(ANDROID_ICON_FILE),
            size,
        })
        .collect()
}

pub fn ios_icon_specs() -> Vec<IconSpec> {
    IOS_ICONS
        .iter()
        .map(|&(file_name, size)| IconSpec {
            platform: Platform::Ios,
            path: PathBuf::from(IOS_APPICONSET_DIR).join(file_name),
            size,
        })
        .collect()
}
