use std::time::Duration;

use clap::{Parser, Subcommand};
use console::Term;
use qvapay_client::{
    http::reqwest::ReqwestHttpClient, ApiResponse, HttpOptions, QvapayClient, QvapayError,
};
use qvapay_core::{invoice::InvoiceRequest, params::Credentials, primitives::Invoice};
use qvapaycli::cli;
use url::Url;

#[derive(Parser)]
#[command(arg_required_else_help(true))]
struct Opts {
    #[clap(long, env = "QVAPAY_APP_ID")]
    app_id: String,

    #[clap(long, env = "QVAPAY_APP_SECRET", hide_env_values = true)]
    app_secret: String,

    /// Request timeout in milliseconds
    #[clap(long, env = "QVAPAY_TIMEOUT_MS", default_value_t = 30_000)]
    timeout_ms: u64,

    /// Use another api server, e.g. http://127.0.0.1:8000/api/v1
    #[clap(long, env = "QVAPAY_BASE_URL")]
    base_url: Option<Url>,

    #[clap(long, env = "QVAPAY_PROXY")]
    proxy: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Show app details
    Info,

    /// Create an invoice
    Invoice {
        amount: String,
        description: String,

        /// Invoice id in your own system
        #[clap(long)]
        remote_id: Option<String>,

        /// Create a payment url that does not expire
        #[clap(long)]
        unsigned: bool,

        /// Print the payment url as qr code
        #[clap(long)]
        qr: bool,
    },

    /// List transactions
    Transactions {
        #[clap(long)]
        page: Option<u64>,
    },

    /// Show a single transaction
    Transaction { uuid: String },

    /// Show the app balance
    Balance,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    cli::init_tracing();

    let opts = Opts::parse();
    let term = Term::stdout();

    let mut options = HttpOptions::default().with_timeout(Duration::from_millis(opts.timeout_ms));
    if let Some(proxy) = opts.proxy {
        options = options.with_proxy(proxy);
    }
    let http = match opts.base_url {
        Some(base_url) => ReqwestHttpClient::with_base_url(base_url, &options)?,
        None => ReqwestHttpClient::new(&options)?,
    };
    let client = QvapayClient::new(Credentials::new(opts.app_id, opts.app_secret), http);

    let pb = cli::progress_bar()?;
    pb.set_message("Waiting for QvaPay ...");

    let result = match &opts.command {
        Command::Info => client.get_app_info().await,
        Command::Invoice {
            amount,
            description,
            remote_id,
            unsigned,
            ..
        } => {
            let mut request =
                InvoiceRequest::new(amount.as_str(), description.as_str()).with_signed(!unsigned);
            if let Some(remote_id) = remote_id {
                request = request.with_remote_id(remote_id.as_str());
            }
            client.create_invoice(request).await
        }
        Command::Transactions { page: Some(page) } => client.list_transactions_page(*page).await,
        Command::Transactions { page: None } => client.list_transactions().await,
        Command::Transaction { uuid } => client.get_transaction(uuid).await,
        Command::Balance => client.get_balance().await,
    };
    pb.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(QvapayError::Http { status, body }) => {
            term.write_line(&format!("Error: QvaPay answered with status {status}"))?;
            term.write_line(&body)?;
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    match opts.command {
        Command::Invoice { qr, .. } => show_invoice(&term, &response, qr)?,
        _ => cli::show_response(&term, &response)?,
    }
    Ok(())
}

fn show_invoice(term: &Term, response: &ApiResponse, qr: bool) -> anyhow::Result<()> {
    match response.json::<Invoice>() {
        Ok(invoice) => cli::show_invoice(term, &invoice, qr),
        // unknown shape, print it as received
        Err(_) => cli::show_response(term, response),
    }
}
