use std::time::Duration;

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use qrcode::{render::unicode, QrCode};
use qvapay_client::ApiResponse;
use qvapay_core::primitives::Invoice;
use tracing_subscriber::{prelude::*, EnvFilter};

pub fn progress_bar() -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    Ok(pb)
}

/// Logs go to stderr so the json on stdout stays pipeable. Filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

pub fn show_response(term: &Term, response: &ApiResponse) -> anyhow::Result<()> {
    term.write_line(&serde_json::to_string_pretty(&response.data)?)?;
    Ok(())
}

pub fn show_invoice(term: &Term, invoice: &Invoice, with_qr: bool) -> anyhow::Result<()> {
    term.write_line(&format!(
        "Invoice {} for {} created",
        style(&invoice.transaction_uuid).cyan(),
        style(&invoice.amount).cyan()
    ))?;
    term.write_line(&format!("Pay at: {}", invoice.url))?;

    let payment_url = match &invoice.signed_url {
        Some(signed_url) => {
            term.write_line(&format!("Signed url (valid for 30 minutes): {signed_url}"))?;
            signed_url
        }
        None => &invoice.url,
    };

    if with_qr {
        term.write_line(&render_qr(payment_url)?)?;
    }
    Ok(())
}

pub fn render_qr(data: &str) -> anyhow::Result<String> {
    Ok(QrCode::new(data)?
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build())
}
