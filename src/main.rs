use anyhow::{bail, Result};
use content_admin::api::AdminClient;
use content_admin::config::Config;
use content_admin::events::{EventBus, ATTACHMENTS_CHANGED};
use content_admin::i18n::{Catalog, Language};
use content_admin::page::{DeletePage, LogErrorReporter, UrlNavigator};
use content_admin::records::PRIMARY_ALT;
use std::sync::Arc;
use tracing::info;

struct Args {
    path: String,
    alt: String,
    keep_master: bool,
    confirmed: bool,
}

fn parse_args() -> Result<Args> {
    let mut path = None;
    let mut alt = None;
    let mut keep_master = false;
    let mut confirmed = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--keep-master" => keep_master = true,
            "--yes" => confirmed = true,
            _ if arg.starts_with("--") => bail!("Unknown flag: {}", arg),
            _ if path.is_none() => path = Some(arg),
            _ if alt.is_none() => alt = Some(arg),
            _ => bail!("Unexpected argument: {}", arg),
        }
    }

    let Some(path) = path else {
        bail!("Usage: content-admin <record-path> [alt] [--keep-master] [--yes]");
    };

    Ok(Args {
        path,
        alt: alt.unwrap_or_else(|| PRIMARY_ALT.to_string()),
        keep_master,
        confirmed,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content_admin=info".parse()?),
        )
        .init();

    let args = parse_args()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    let language = Language::from_code(&config.language)?;
    let catalog = Catalog::load(&config.translations_dir)?;

    let api = AdminClient::new(&config)?;
    let navigator = UrlNavigator::new(&config);
    let errors = LogErrorReporter;

    let events = EventBus::new();
    events.register(
        ATTACHMENTS_CHANGED,
        Arc::new(|event| {
            info!("Attachments changed under {}", event.payload);
        }),
    );

    let mut page = DeletePage::new(&api, &navigator, &events, &errors, args.path, args.alt);

    info!("Fetching record info for {}", page.path());
    page.refresh().await;

    let Some(record_info) = page.record_info().cloned() else {
        // Fetch failure was already reported through the error reporter.
        return Ok(());
    };

    if args.keep_master {
        page.set_delete_master(false);
    }

    let Some(plan) = page.plan() else {
        println!("{}", catalog.get(language, "RECORD_NOT_DELETABLE"));
        return Ok(());
    };

    let prompt_key = if plan.is_attachment {
        "DELETE_ATTACHMENT_PROMPT"
    } else {
        "DELETE_PAGE_PROMPT"
    };
    println!(
        "{}",
        catalog.format(language, prompt_key, &[("path", page.path())])
    );

    if plan.master_choice_offered {
        let choice_key = if plan.delete_master {
            "DELETE_ALL_ALTERNATIVES"
        } else {
            "DELETE_PRIMARY_ONLY"
        };
        println!("{}", catalog.get(language, choice_key));
    }

    if plan.show_alternatives {
        println!("{}", catalog.get(language, "ALTERNATIVES_TO_BE_DELETED"));
        for alt in record_info.alts.iter().filter(|a| a.exists) {
            println!("  - {}", alt.name.as_deref().unwrap_or(&alt.alt));
        }
    }
    if plan.show_children {
        println!("{}", catalog.get(language, "CHILD_PAGES_TO_BE_DELETED"));
        for child in &record_info.children {
            println!("  - {}", child.label.as_deref().unwrap_or(&child.id));
        }
    }
    if plan.show_attachments {
        println!("{}", catalog.get(language, "ATTACHMENTS_TO_BE_DELETED"));
        for attachment in &record_info.attachments {
            println!(
                "  - {}",
                attachment.label.as_deref().unwrap_or(&attachment.id)
            );
        }
    }

    if args.confirmed {
        page.confirm().await;
    } else {
        println!("{}", catalog.get(language, "CANCEL"));
        page.cancel();
    }

    if let Some(url) = navigator.last_url() {
        println!(
            "{}",
            catalog.format(language, "CONTINUE_AT", &[("url", &url)])
        );
    }

    Ok(())
}
