//! TimeTraveler - Main entry point.
//!
//! `timetraveler <photo>` identifies the landmark in the photo, summons a
//! historical figure connected to it and opens a conversation on stdin.

use std::path::Path;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timetraveler_engine::infrastructure::ports::ImageData;
use timetraveler_engine::use_cases::{Journey, Reply, SessionContext};
use timetraveler_engine::{App, EngineConfig};

const HELP: &str = "\
Commands:
  /switch N      talk to alternative narrator N
  /guide KEY     talk to a predefined persona (e.g. shah_jahan)
  /photo PATH    start a new journey from another photo
  /reset         forget the current journey
  /help          show this help
  /quit          leave";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so `.env` works from any crate directory.
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout is the conversation.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timetraveler_engine=debug,timetraveler=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let photo = std::env::args()
        .nth(1)
        .context("usage: timetraveler <photo of a landmark>")?;

    let config = EngineConfig::from_env()?;
    let app = App::from_config(&config)?;
    let journey = &app.use_cases.journey;
    let mut ctx = SessionContext::new();

    tracing::info!(session_id = %ctx.id.as_uuid(), "Starting TimeTraveler");

    begin(journey, &mut ctx, Path::new(&photo)).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) | ("/exit", _) => break,
            ("/help", _) => println!("{HELP}"),
            ("/reset", _) => {
                journey.new_journey(&mut ctx);
                println!("The past grows quiet. Use /photo PATH to begin a new journey.");
            }
            ("/photo", path) => {
                if let Err(e) = begin(journey, &mut ctx, Path::new(path.trim())).await {
                    println!("{e:#}");
                }
            }
            ("/switch", n) => match n.trim().parse::<usize>() {
                Ok(n) if n >= 1 => match journey.switch_narrator(&mut ctx, n - 1).await {
                    Ok(()) => introduce(journey, &mut ctx).await,
                    Err(e) => println!("{e}"),
                },
                _ => println!("Usage: /switch N"),
            },
            ("/guide", key) => match journey.choose_catalog_persona(&mut ctx, key.trim()) {
                Ok(()) => introduce(journey, &mut ctx).await,
                Err(e) => println!("{e}"),
            },
            _ => {
                let reply = journey.converse(&mut ctx, line).await;
                print_reply(&ctx, &reply);
            }
        }
    }

    Ok(())
}

/// Run discovery on the photo at `path` and greet the traveler.
async fn begin(journey: &Journey, ctx: &mut SessionContext, path: &Path) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("could not read photo {}", path.display()))?;
    let image = ImageData::from_bytes(&bytes, media_type_for(path));

    println!("Analyzing monument...");
    let discovery = journey.discover(ctx, &image).await;
    let identification = &discovery.identification;
    if discovery.identified() {
        println!(
            "Identified: {} - {} ({} confidence)",
            identification.name, identification.location, identification.confidence
        );
    } else {
        println!("Could not identify clearly, but a guide will still join you.");
    }

    if !ctx.gallery.is_empty() {
        println!("\nGallery:");
        for image in &ctx.gallery {
            println!("  {} - {}", image.caption, image.url);
        }
    }

    introduce(journey, ctx).await;
    Ok(())
}

/// Show who is speaking, the other narrators and some questions, then greet.
async fn introduce(journey: &Journey, ctx: &mut SessionContext) {
    if let Some(persona) = &ctx.persona {
        println!("\n{}  {}", persona.avatar_glyph, persona.name);
        println!("   {}", persona.title);
        println!("   Era: {} • {}", persona.era, persona.region);
        println!("   \"{}\"", persona.relationship_to_landmark);
    }

    if !ctx.alternatives.is_empty() {
        println!("\nAlso here (use /switch N):");
        for (i, candidate) in ctx.alternatives.iter().enumerate() {
            println!("  {}. {} - {}", i + 1, candidate.label(), candidate.title);
        }
    }

    let questions = journey.suggested_questions(ctx);
    println!("\nYou might ask:");
    for question in questions {
        println!("  - {question}");
    }
    println!();

    let greeting = journey.greet(ctx).await;
    print_reply(ctx, &greeting);
}

fn print_reply(ctx: &SessionContext, reply: &Reply) {
    let speaker = ctx
        .persona
        .as_ref()
        .map(|persona| persona.label())
        .unwrap_or_else(|| "...".to_string());
    println!("{speaker}: {}", reply.text);
    if let Some(audio) = &reply.audio {
        println!("   [narration: {} bytes of {}]", audio.bytes.len(), audio.mime_type);
    }
    println!();
}

fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
