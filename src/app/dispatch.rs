use crate::cli::commands::{Cli, Commands, DraftCommands};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use content_guidelines::Config;
use content_guidelines::core::blocks::{BlockFilter, StaticBlockRegistry, list_blocks};
use content_guidelines::core::guidelines::{
    BlockGuidelines, GuidelinesDocument, export, import, merge_patch, normalize_legacy_keys,
    with_block_guidelines,
};
use content_guidelines::core::lint::LintChecker;
use content_guidelines::core::packet::{
    PacketOptions, Task, build_packet_from_store, build_post_packet,
};
use content_guidelines::core::playground::{Fixture, Playground, PlaygroundRequest};
use content_guidelines::core::store::{
    DocumentStore, DocumentVariant, JsonFileStore, resolve_document, working_copy,
};

/// Read a file argument, treating `-` as stdin.
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn packet_options(
    config: &Config,
    task: Option<&str>,
    max_chars: Option<usize>,
) -> PacketOptions {
    let task = task.map_or_else(|| config.packet.task(), Task::parse_or_default);
    PacketOptions::for_task(task).with_max_chars(max_chars.unwrap_or(config.packet.max_chars))
}

fn parse_variant(raw: &str) -> Result<DocumentVariant> {
    DocumentVariant::from_str(raw.trim().to_ascii_lowercase().as_str())
        .map_err(|_| anyhow::anyhow!("Unknown variant {raw:?}, expected draft or active"))
}

fn load_document(store: &dyn DocumentStore, variant: DocumentVariant) -> Result<GuidelinesDocument> {
    Ok(resolve_document(store, variant)?.unwrap_or_default())
}

/// The playground tests exactly the requested copy. A missing draft runs
/// against the default document rather than active.
fn playground_document(
    store: &dyn DocumentStore,
    source: DocumentVariant,
) -> Result<Option<GuidelinesDocument>> {
    Ok(match source {
        DocumentVariant::Draft => store.draft()?,
        DocumentVariant::Active => store.active()?,
    })
}

#[allow(clippy::too_many_lines)]
pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let store = JsonFileStore::new(config.store_path(), config.store.settings());

    match cli.command {
        Commands::Show { variant } => print_json(&load_document(&store, parse_variant(&variant)?)?),

        Commands::Meta => print_json(&store.metadata()?),

        Commands::Packet {
            task,
            block,
            max_chars,
            variant,
            post_id,
            locale,
            text,
        } => {
            let mut options = packet_options(&config, task.as_deref(), max_chars);
            options.block_name = block;
            options.post_id = post_id;
            options.locale = locale;
            let packet = build_packet_from_store(&store, parse_variant(&variant)?, &options)?;
            if text {
                print!("{}", packet.packet_text);
                Ok(())
            } else {
                print_json(&packet)
            }
        }

        Commands::PostPacket {
            file,
            task,
            max_chars,
            variant,
        } => {
            let variant = parse_variant(&variant)?;
            let content = read_input(&file)?;
            let options = packet_options(&config, task.as_deref(), max_chars);
            let document = resolve_document(&store, variant)?;
            print_json(&build_post_packet(document.as_ref(), &content, &options)?)
        }

        Commands::Blocks {
            configured_only,
            search,
        } => {
            let document = load_document(&store, DocumentVariant::Active)?;
            let filter = BlockFilter {
                configured_only,
                search,
            };
            print_json(&list_blocks(&StaticBlockRegistry::default(), &document, &filter))
        }

        Commands::Lint { file, variant } => {
            let variant = parse_variant(&variant)?;
            let content = read_input(&file)?;
            let document = resolve_document(&store, variant)?;
            print_json(&LintChecker::default().check(&content, document.as_ref()))
        }

        Commands::Playground {
            file,
            task,
            title,
            source,
            compare,
            extra,
        } => {
            let source = parse_variant(&source)?;
            let request = PlaygroundRequest {
                task,
                fixture: Some(Fixture {
                    id: None,
                    title,
                    content: read_input(&file)?,
                }),
                document: playground_document(&store, source)?,
                source,
                extra_instructions: extra.or_else(|| config.playground.extra_instructions.clone()),
                compare,
                active_document: if compare { store.active()? } else { None },
            };
            let playground = Playground::default().with_max_chars(config.packet.max_chars);
            print_json(&playground.run_test(&request).await?)
        }

        Commands::Draft { draft_command } => handle_draft_command(draft_command, &store),

        Commands::History => {
            let meta = store.metadata()?;
            print_json(&store.history(meta.document_id)?)
        }

        Commands::Restore { id } => {
            store.restore_history_entry(id)?;
            info!(id, "history entry restored to draft");
            Ok(())
        }

        Commands::Export { site_url, output } => {
            let document = load_document(&store, DocumentVariant::Active)?;
            let envelope = export(&document, site_url.as_deref());
            let json = serde_json::to_string_pretty(&envelope)?;
            match output {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display())),
                None => {
                    println!("{json}");
                    Ok(())
                }
            }
        }

        Commands::Import { file, merge } => {
            let payload = read_json(&file)?;
            let document = import(&working_copy(&store)?, &payload, merge)?;
            store.save_draft(&document)?;
            info!(merge, "guidelines imported into draft");
            Ok(())
        }
    }
}

fn handle_draft_command(command: DraftCommands, store: &dyn DocumentStore) -> Result<()> {
    match command {
        DraftCommands::Save { file, merge } => {
            let payload = read_json(&file)?;
            let document = if merge {
                merge_patch(&working_copy(store)?, &payload)?
            } else {
                serde_json::from_value(normalize_legacy_keys(&payload))
                    .context("Invalid guidelines document")?
            };
            store.save_draft(&document)?;
            info!("draft saved");
            Ok(())
        }
        DraftCommands::SetBlock { name, file } => {
            let block: BlockGuidelines = match file {
                Some(path) => {
                    serde_json::from_value(read_json(&path)?).context("Invalid block rules")?
                }
                None => BlockGuidelines::default(),
            };
            let document = with_block_guidelines(&working_copy(store)?, &name, block)?;
            store.save_draft(&document)?;
            info!(block = %name, "block guidelines updated");
            Ok(())
        }
        DraftCommands::Publish => {
            store.publish_draft()?;
            let meta = store.metadata()?;
            info!(revision = ?meta.revision_id, "draft published");
            Ok(())
        }
        DraftCommands::Discard => {
            if store.discard_draft()? {
                info!("draft discarded");
            } else {
                println!("No draft to discard.");
            }
            Ok(())
        }
    }
}
