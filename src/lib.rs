#![doc = r#"
appicons — launcher icon generation for Flutter-style mobile projects.

Reads a single source logo and writes the fixed set of PNG launcher icons
Android and iOS expect: five `mipmap-*` density buckets and the fifteen images
of `AppIcon.appiconset`. It powers the `appicons` CLI and can be embedded in
your own build tooling.

Quick start: generate everything for a project
----------------------------------------------
```rust,no_run
use std::path::Path;
use appicons::generate_all_icons;

let root = Path::new("/work/my_app");
let report = generate_all_icons(&root.join("assets/images/logo.png"), root);

println!(
    "android={}/{} ios={}/{}",
    report.android.generated(),
    report.android.total(),
    report.ios.generated(),
    report.ios.total(),
);
```

A single icon
-------------
```rust,no_run
use std::path::Path;

fn main() -> appicons::Result<()> {
    // shrink to fit and center on a transparent 192x192 square
    appicons::resize_icon(
        Path::new("logo.png"),
        Path::new("ic_launcher.png"),
        192,
        true,
    )
}
```

Error handling
--------------
`resize_icon` returns `appicons::Result<T>`. The platform generators never
fail as a whole: each icon's error is logged and recorded as an
[`IconOutcome`] in the returned report.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — size tables, parameters and the resize/padding pipeline.
- [`io`] — logo decoding and PNG writing.
- [`types`] — platforms, icon specs and reports.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::IconParams;
pub use crate::core::tables::{ANDROID_DENSITIES, DEFAULT_LOGO_PATH, IOS_ICONS};
pub use error::{Error, Result};
pub use types::{GenerationReport, IconOutcome, IconSpec, Platform, PlatformReport};

pub use api::{
    generate_all_icons, generate_android_icons, generate_icons, generate_ios_icons, resize_icon,
};
