use std::borrow::Cow;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use dinemap_cli::config::{Overrides, Settings};
use dinemap_cli::session::Session;
use dinemap_cli::summary::{categories_table, glyphs_table, write_selected, write_view};
use dinemap_core::{Dataset, DatasetCache, PipelineOptions, find_business, run_pipeline};
use dinemap_glyphs::GlyphTable;
use dinemap_model::DashboardInput;
use dinemap_report::{MapHtmlOptions, write_map_html, write_table_csv_file, write_view_json};

use crate::cli::{Cli, ExploreArgs, RestaurantsArgs, ReviewsArgs};

/// Everything a command needs after startup.
pub struct AppContext {
    pub settings: Settings,
    pub glyphs: Cow<'static, GlyphTable>,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let overrides = Overrides {
            config: cli.config.clone(),
            businesses: cli.businesses.clone(),
            reviews: cli.reviews.clone(),
            zoom: cli.zoom,
            glyphs: cli.glyphs.clone(),
        };
        let settings = Settings::load(&overrides).context("resolve settings")?;
        let glyphs = match &settings.glyphs {
            Some(path) => Cow::Owned(
                GlyphTable::from_path(path)
                    .with_context(|| format!("load glyph table {}", path.display()))?,
            ),
            None => Cow::Borrowed(GlyphTable::canonical()),
        };
        Ok(Self { settings, glyphs })
    }

    fn pipeline_options(&self) -> PipelineOptions<'_> {
        PipelineOptions {
            glyphs: &self.glyphs,
            zoom: self.settings.zoom,
        }
    }

    fn map_options(&self, title: &str) -> MapHtmlOptions {
        MapHtmlOptions {
            tiles_url: self.settings.tiles.clone(),
            ..MapHtmlOptions::new(title)
        }
    }

    /// The process-wide dataset, loading it on first use.
    fn dataset(&self) -> Result<Arc<Dataset>> {
        let spinner = if io::stderr().is_terminal() {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
            spinner.set_style(style);
        }
        spinner.set_message("Loading restaurant data");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = DatasetCache::global().get_or_load(&self.settings.sources);
        spinner.finish_and_clear();
        result.with_context(|| {
            format!(
                "load dataset (businesses: {}, reviews: {})",
                self.settings.sources.businesses, self.settings.sources.reviews
            )
        })
    }
}

pub fn run_categories(ctx: &AppContext) -> Result<()> {
    let dataset = ctx.dataset()?;
    println!("{}", categories_table(dataset.categories(), &ctx.glyphs));
    println!(
        "{} restaurants in {} categories ({} duplicate rows dropped)",
        dataset.businesses().len(),
        dataset.categories().len(),
        dataset.duplicates_dropped()
    );
    Ok(())
}

pub fn run_glyphs(ctx: &AppContext) -> Result<()> {
    println!("{}", glyphs_table(&ctx.glyphs));
    println!("Version: {}", ctx.glyphs.version());
    println!("Fingerprint: {}", ctx.glyphs.fingerprint());
    Ok(())
}

pub fn run_restaurants(ctx: &AppContext, args: &RestaurantsArgs) -> Result<()> {
    let span = info_span!("restaurants");
    let _guard = span.enter();
    let dataset = ctx.dataset()?;
    let input = DashboardInput {
        category: args.filter.category.clone(),
        star_range: args.filter.star_range(),
        ..DashboardInput::default()
    };
    let view = run_pipeline(&dataset, &input, &ctx.pipeline_options());

    if let Some(path) = &args.map {
        write_map_html(path, &view.map, &ctx.map_options(&view.criteria.category))?;
        info!(path = %path.display(), "map written");
    }
    if let Some(path) = &args.csv {
        write_table_csv_file(path, &view.table)?;
        info!(path = %path.display(), "table written");
    }

    let mut stdout = io::stdout().lock();
    if args.json {
        write_view_json(&mut stdout, &view)?;
    } else {
        write_view(&mut stdout, &view)?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn run_reviews(ctx: &AppContext, args: &ReviewsArgs) -> Result<()> {
    let span = info_span!("reviews");
    let _guard = span.enter();
    let dataset = ctx.dataset()?;
    // Without an explicit category, filter on the restaurant's own category.
    let category = match &args.filter.category {
        Some(category) => category.clone(),
        None => find_business(dataset.businesses(), &args.restaurant)
            .map(|business| business.categories_grouped.clone())
            .ok_or_else(|| anyhow!("no restaurant matches `{}`", args.restaurant))?,
    };
    let input = DashboardInput {
        category: Some(category),
        star_range: args.filter.star_range(),
        restaurant: Some(args.restaurant.clone()),
        review_star_range: args.review_star_range(),
    };
    let view = run_pipeline(&dataset, &input, &ctx.pipeline_options());
    let selected = view.selected.ok_or_else(|| {
        anyhow!(
            "no restaurant matches `{}` in {} ({} stars)",
            args.restaurant,
            view.criteria.category,
            view.criteria.star_range
        )
    })?;

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &selected).context("serialize reviews")?;
        writeln!(stdout)?;
    } else {
        write_selected(&mut stdout, &selected)?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn run_explore(ctx: &AppContext, args: &ExploreArgs) -> Result<()> {
    let dataset = ctx.dataset()?;
    let input = DashboardInput {
        category: args.filter.category.clone(),
        star_range: args.filter.star_range(),
        ..DashboardInput::default()
    };
    let mut session = Session::new(
        dataset,
        ctx.pipeline_options(),
        ctx.map_options("Restaurants"),
        input,
    );
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    session.run(stdin, &mut stdout)
}
