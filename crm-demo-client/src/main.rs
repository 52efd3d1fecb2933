use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

use crm_demo_client::{
    render, AuthToken, ClientConfig, ContactForm, DemoClient, ResultDisplay, TerminalSink,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Demo client for the CRM contacts API", long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,

    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a contact
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Bearer token; defaults to the configured token
        #[arg(long)]
        token: Option<String>,
    },
    /// List all contacts
    List {
        /// Bearer token; defaults to the configured token
        #[arg(long)]
        token: Option<String>,
    },
    /// Check that the API is reachable
    Health,
    /// Print the selectable demo tokens
    Tokens,
}

fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = std::path::Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("crm-demo.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file_path.as_deref());

    let mut config = ClientConfig::load_or_default();
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }

    let client = DemoClient::new(&config);
    let sink = TerminalSink::stdout();
    tracing::info!("Using API at {}", client.base_url());

    let display: ResultDisplay = match args.command {
        Command::Create {
            first_name,
            last_name,
            email,
            phone,
            company,
            notes,
            token,
        } => {
            let mut form = ContactForm::new(config.default_token());
            form.first_name = first_name;
            form.last_name = last_name;
            form.email = email;
            form.phone = phone.unwrap_or_default();
            form.company = company.unwrap_or_default();
            form.notes = notes.unwrap_or_default();
            if let Some(token) = token {
                form.token = token;
            }

            client.submit_form(&mut form, &sink).await
        }
        Command::List { token } => {
            let token = token
                .or_else(|| config.default_token().map(str::to_string))
                .map(AuthToken::from);
            let display = client.list_contacts(token.as_ref()).await;
            render(&display, &sink);
            display
        }
        Command::Health => {
            let display = client.check_health().await;
            render(&display, &sink);
            display
        }
        Command::Tokens => {
            let default_token = config.default_token();
            for token in config.tokens() {
                let marker = if Some(token.as_str()) == default_token { "*" } else { " " };
                println!("{} {}", marker, token);
            }
            return Ok(());
        }
    };

    if !display.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
