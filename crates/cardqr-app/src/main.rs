use cardqr_core::config::load_config;
use cardqr_service::barcode::SvgEmitter;
use cardqr_service::generate::generate;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    tracing::info!(
        output = ?config.output,
        qr = ?config.qr,
        "Configuration loaded"
    );

    if !SvgEmitter::is_available() {
        tracing::warn!("Built without the `svg` feature; QR rendering will fail");
    }

    let report = generate(&config, &SvgEmitter::from_config(&config.qr))?;

    tracing::info!(
        svg = %report.svg_path.display(),
        vcf = ?report.vcf_path,
        bytes = report.payload_bytes(),
        "Done"
    );

    Ok(())
}
