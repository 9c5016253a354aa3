use tracing::info;
use tracing_subscriber::EnvFilter;

use appicons::api::{generate_android_icons, generate_ios_icons};
use appicons::types::{GenerationReport, PlatformReport};

use super::args::CliArgs;
use super::errors::AppError;

const RULE: &str = "==================================================";

fn print_outcomes(report: &PlatformReport) {
    for outcome in &report.outcomes {
        match &outcome.error {
            None => println!(
                "✓ Generated: {} ({}x{})",
                outcome.path.display(),
                outcome.size,
                outcome.size
            ),
            Some(e) => println!("✗ Error generating {}: {}", outcome.path.display(), e),
        }
    }
    println!(
        "✓ {}: {}/{} icons generated",
        report.platform,
        report.generated(),
        report.total()
    );
}

fn print_summary(report: &GenerationReport) {
    println!("\n{RULE}");
    if report.is_complete() {
        println!("🎉 All icons were generated successfully!");
        println!("✓ Android: Complete");
        println!("✓ iOS: Complete");
    } else {
        let mark = |r: &PlatformReport| if r.is_complete() { "✓" } else { "✗" };
        println!("⚠️  Some icons could not be generated:");
        println!("Android: {}", mark(&report.android));
        println!("iOS: {}", mark(&report.ios));
    }
    println!("\n💡 Remember to run 'flutter clean' and 'flutter pub get' after changing the icons.");
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    println!("🚀 App Icon Generator");
    println!("{RULE}");

    let logo = args.root.join(&args.logo);
    if !logo.exists() {
        return Err(AppError::MissingSource { path: args.logo });
    }
    println!("📱 Using logo: {}", args.logo.display());
    info!("Project root: {:?}", args.root);

    println!("\n🤖 Generating Android icons...");
    let android = generate_android_icons(&logo, &args.root);
    print_outcomes(&android);

    println!("\n🍎 Generating iOS icons...");
    let ios = generate_ios_icons(&logo, &args.root);
    print_outcomes(&ios);

    let report = GenerationReport { android, ios };
    print_summary(&report);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
