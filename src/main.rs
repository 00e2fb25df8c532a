//! Form Forge - command line driver for the form editing engine
//!
//! Resumes the in-progress form from the configured storage directory and
//! applies one command to it.

use anyhow::{bail, Context, Result};
use form_forge::model::ElementType;
use form_forge::{BuilderConfig, EditingSession, FileStore, SessionOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: form-forge [summary | list | new | save | export [DIR] | \
                     add-section | add-element TYPE]";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "form_forge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = BuilderConfig::load()?;
    let store = Arc::new(FileStore::new(config.storage_dir()));
    let mut session = EditingSession::resume(store, SessionOptions::from(&config)).await;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = run(&mut session, &config, &args).await;

    session.flush().await;
    for warning in session.take_warnings() {
        eprintln!("warning: {warning}");
    }
    session.shutdown();
    result
}

async fn run(session: &mut EditingSession, config: &BuilderConfig, args: &[String]) -> Result<()> {
    let command = args.first().map(String::as_str).unwrap_or("summary");
    match command {
        "summary" => print_summary(session),
        "list" => {
            for form in session.saved_forms().await {
                println!(
                    "{}\t{}\t{}",
                    form.id,
                    form.title,
                    form.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        "new" => {
            session.create_new_form().await;
            print_summary(session);
        }
        "save" => {
            if let Some(saved) = session.save_form().await {
                println!("Saved '{}'", saved.title);
            }
        }
        "export" => {
            let dir = args
                .get(1)
                .map(PathBuf::from)
                .unwrap_or_else(|| config.export_dir());
            let path = session.export()?.write_to(&dir).await?;
            println!("{}", path.display());
        }
        "add-section" => {
            session.add_section();
            print_summary(session);
        }
        "add-element" => {
            let name = args.get(1).context("add-element needs an element type")?;
            let element_type = ElementType::ALL
                .into_iter()
                .find(|t| t.as_str() == name.as_str())
                .with_context(|| format!("unknown element type '{name}'"))?;
            let section = session
                .form()
                .sections
                .last()
                .context("form has no sections")?;
            let section_id = section.id.clone();
            let group_id = section
                .groups
                .last()
                .context("section has no groups")?
                .id
                .clone();
            session.add_element(element_type, &group_id, &section_id);
            print_summary(session);
        }
        other => bail!("unknown command '{other}'\n{USAGE}"),
    }
    Ok(())
}

fn print_summary(session: &EditingSession) {
    let form = session.form();
    println!("{} ({})", form.title, form.id);
    for section in &form.sections {
        println!("  {}", section.title);
        for group in &section.groups {
            println!("    {} [{:?}]", group.title, group.layout);
            for element in &group.elements {
                println!("      - {} ({})", element.label, element.element_type());
            }
        }
    }
}
