//! High-level library API: resize one icon to disk and generate the full
//! Android / iOS icon sets for a project root. Per-icon failures never abort
//! a run; they are logged and recorded in the returned reports.
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::params::IconParams;
use crate::core::processing::pipeline::process_icon;
use crate::core::tables::{IOS_APPICONSET_DIR, android_icon_specs, ios_icon_specs};
use crate::error::Result;
use crate::io::source::load_rgba;
use crate::io::writers::png::write_rgba_png;
use crate::types::{GenerationReport, IconOutcome, IconSpec, Platform, PlatformReport};

/// Read `source`, produce a `size`x`size` RGBA icon and write it to `output` as PNG.
///
/// With `maintain_aspect` the logo is shrunk to fit and centered on a
/// transparent square; otherwise it is stretched to fill it.
pub fn resize_icon(source: &Path, output: &Path, size: u32, maintain_aspect: bool) -> Result<()> {
    let params = IconParams {
        size,
        maintain_aspect,
    };
    params.validate()?;

    let logo = load_rgba(source)?;
    let icon = process_icon(&logo, &params)?;
    write_rgba_png(output, &icon)?;
    info!("Wrote {:?} ({}x{})", output, size, size);
    Ok(())
}

fn generate_one(logo: &Path, root: &Path, spec: &IconSpec) -> IconOutcome {
    let output = root.join(&spec.path);
    let prepared: Result<()> = match output.parent() {
        Some(dir) => fs::create_dir_all(dir).map_err(Into::into),
        None => Ok(()),
    };
    let result = prepared.and_then(|()| resize_icon(logo, &output, spec.size, true));

    match result {
        Ok(()) => IconOutcome {
            path: spec.path.clone(),
            size: spec.size,
            error: None,
        },
        Err(e) => {
            warn!("Error generating {:?}: {}", output, e);
            IconOutcome {
                path: spec.path.clone(),
                size: spec.size,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Generate every icon in `specs`, continuing past failures.
pub fn generate_icons(
    logo: &Path,
    root: &Path,
    platform: Platform,
    specs: &[IconSpec],
) -> PlatformReport {
    let mut report = PlatformReport::new(platform);
    for spec in specs {
        report.outcomes.push(generate_one(logo, root, spec));
    }
    info!(
        "{}: {}/{} icons generated",
        platform,
        report.generated(),
        report.total()
    );
    report
}

/// Write `ic_launcher.png` into each `mipmap-*` density folder under `root`.
pub fn generate_android_icons(logo: &Path, root: &Path) -> PlatformReport {
    generate_icons(logo, root, Platform::Android, &android_icon_specs())
}

/// Write the `AppIcon.appiconset` images under `root`.
pub fn generate_ios_icons(logo: &Path, root: &Path) -> PlatformReport {
    let specs = ios_icon_specs();
    let icon_dir = root.join(IOS_APPICONSET_DIR);
    if let Err(e) = fs::create_dir_all(&icon_dir) {
        warn!("Cannot create {:?}: {}", icon_dir, e);
        let mut report = PlatformReport::new(Platform::Ios);
        report.outcomes = specs
            .into_iter()
            .map(|spec| IconOutcome {
                path: spec.path,
                size: spec.size,
                error: Some(format!("I/O error: {e}")),
            })
            .collect();
        return report;
    }
    generate_icons(logo, root, Platform::Ios, &specs)
}

/// Run both platform generators in sequence.
pub fn generate_all_icons(logo: &Path, root: &Path) -> GenerationReport {
    GenerationReport {
        android: generate_android_icons(logo, root),
        ios: generate_ios_icons(logo, root),
    }
}
