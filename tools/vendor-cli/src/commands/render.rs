//! Render the storefront to static HTML files.

use std::fs;

use anyhow::{anyhow, bail, Context as _, Result};
use chrono::Utc;
use vendor_commerce::catalog::Language;
use vendor_commerce::session::{Session, SessionEvent, StoreTab, VoiceOrder};
use wholesale_storefront::{render_page, StorefrontData};

use super::RenderArgs;
use crate::context::Context;

pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let out_dir = ctx.resolve_path(&args.out);
    if out_dir.exists() && !args.force {
        bail!(
            "Output directory already exists: {}. Use --force to overwrite.",
            out_dir.display()
        );
    }
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let languages: Vec<Language> = if args.lang.is_empty() {
        vec![Language::En, Language::Hi]
    } else {
        args.lang
            .iter()
            .map(|code| {
                Language::from_code(code).ok_or_else(|| anyhow!("Unknown language code: {}", code))
            })
            .collect::<Result<_>>()?
    };

    let now = Utc::now();
    let data = StorefrontData::seed(now);
    let policy = ctx.config.delivery_policy();

    // One page per tab per language, plus a cart view with the demo order.
    let total = (languages.len() * (StoreTab::ALL.len() + 1)) as u64;
    let bar = ctx.output.progress(total, "Rendering pages");
    let mut written = Vec::new();

    for lang in &languages {
        for tab in StoreTab::ALL {
            let mut session = Session::new();
            session.apply(SessionEvent::SetLanguage(*lang));
            session.apply(SessionEvent::SelectTab(tab));

            let name = format!("{}-{}.html", lang.code(), tab.as_str());
            let html = render_page(&data, &session, &policy, now);
            fs::write(out_dir.join(&name), html)
                .with_context(|| format!("Failed to write {}", name))?;
            written.push(name);
            bar.inc(1);
        }

        let mut session = Session::new();
        session.apply(SessionEvent::SetLanguage(*lang));
        for (product, quantity) in VoiceOrder::canned().resolve(&data.products) {
            session.apply(SessionEvent::AddToCart {
                product: product.clone(),
                quantity,
            });
        }
        session.apply(SessionEvent::OpenCart);

        let name = format!("{}-cart.html", lang.code());
        let html = render_page(&data, &session, &policy, now);
        fs::write(out_dir.join(&name), html)
            .with_context(|| format!("Failed to write {}", name))?;
        written.push(name);
        bar.inc(1);
    }
    bar.finish_and_clear();

    tracing::debug!(pages = written.len(), dir = %out_dir.display(), "render complete");

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "out_dir": out_dir.display().to_string(),
            "pages": written,
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "Wrote {} pages to {}",
        written.len(),
        out_dir.display()
    ));
    if ctx.output.is_verbose() {
        for name in &written {
            ctx.output.list_item(name);
        }
    }

    Ok(())
}
