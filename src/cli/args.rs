use clap::Parser;
use std::path::PathBuf;

use appicons::core::tables::DEFAULT_LOGO_PATH;

#[derive(Parser)]
#[command(
    name = "appicons",
    version,
    about = "Generate Android and iOS launcher icons from assets/images/logo.png"
)]
pub struct CliArgs {
    /// Project root; all input and output paths are resolved against it
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Source logo, relative to the project root
    #[arg(long, default_value = DEFAULT_LOGO_PATH)]
    pub logo: PathBuf,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Print the generation report as JSON after the summary
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
