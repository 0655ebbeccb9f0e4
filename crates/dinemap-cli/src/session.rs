//! Interactive `explore` session.
//!
//! Each line is one command. Every command that changes the selection
//! re-runs the full pipeline against the cached dataset and prints the view.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, trace, warn};

use dinemap_core::{Dataset, PipelineOptions, run_pipeline};
use dinemap_model::{DashboardInput, DashboardView, ReviewPanel, StarRange};
use dinemap_report::{MapHtmlOptions, write_map_html};

use crate::logging::redact_value;
use crate::summary::{categories_table, write_view};

pub const PROMPT: &str = "dinemap> ";

pub const HELP: &str = "\
Commands:
  category [NAME]         select a category (no name lists categories)
  stars [MIN MAX]         restaurant star range (no values resets)
  restaurant [NAME|ID]    select a restaurant from the table (no value clears)
  review-stars [MIN MAX]  review star range (no values resets)
  map FILE                write the current map as HTML
  show                    print the current view
  help                    show this help
  quit                    leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Category(Option<String>),
    Stars(Option<StarRange>),
    Restaurant(Option<String>),
    ReviewStars(Option<StarRange>),
    Map(PathBuf),
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let argument = (!rest.is_empty()).then(|| rest.to_string());
    let command = match word.to_ascii_lowercase().as_str() {
        "category" => SessionCommand::Category(argument),
        "stars" => SessionCommand::Stars(parse_range(rest)?),
        "restaurant" => SessionCommand::Restaurant(argument),
        "review-stars" => SessionCommand::ReviewStars(parse_range(rest)?),
        "map" => match argument {
            Some(path) => SessionCommand::Map(PathBuf::from(path)),
            None => return Err("map needs an output file".to_string()),
        },
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

fn parse_range(text: &str) -> Result<Option<StarRange>, String> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        [] => Ok(None),
        [min, max] => {
            let min = parse_stars(min)?;
            let max = parse_stars(max)?;
            Ok(Some(StarRange::new(min, max)))
        }
        _ => Err("expected two values: MIN MAX".to_string()),
    }
}

fn parse_stars(text: &str) -> Result<f64, String> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("`{text}` is not a star rating"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<'g> {
    dataset: Arc<Dataset>,
    options: PipelineOptions<'g>,
    map_options: MapHtmlOptions,
    input: DashboardInput,
}

impl<'g> Session<'g> {
    pub fn new(
        dataset: Arc<Dataset>,
        options: PipelineOptions<'g>,
        map_options: MapHtmlOptions,
        input: DashboardInput,
    ) -> Self {
        Self {
            dataset,
            options,
            map_options,
            input,
        }
    }

    pub fn input(&self) -> &DashboardInput {
        &self.input
    }

    /// Run the pipeline for the current selection.
    pub fn view(&self) -> DashboardView {
        run_pipeline(&self.dataset, &self.input, &self.options)
    }

    /// Apply one command, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Flow> {
        match command {
            SessionCommand::Category(None) => {
                let glyphs = self.options.glyphs;
                writeln!(out, "{}", categories_table(self.dataset.categories(), glyphs))?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Category(Some(name)) => match self.resolve_category(&name) {
                Some(category) => {
                    self.input.category = Some(category);
                    self.input.restaurant = None;
                }
                None => {
                    writeln!(out, "Unknown category `{name}`; type `category` to list them.")?;
                    return Ok(Flow::Continue);
                }
            },
            SessionCommand::Stars(range) => self.input.star_range = range,
            SessionCommand::Restaurant(key) => self.input.restaurant = key,
            SessionCommand::ReviewStars(range) => self.input.review_star_range = range,
            SessionCommand::Map(path) => {
                let view = self.view();
                write_map_html(&path, &view.map, &self.map_options)
                    .with_context(|| format!("write map {}", path.display()))?;
                writeln!(
                    out,
                    "Map with {} markers written to {}",
                    view.map.markers.len(),
                    path.display()
                )?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Show => {}
            SessionCommand::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        let view = self.view();
        if self.input.restaurant.is_some() && view.selected.is_none() {
            writeln!(out, "No restaurant in the current table matches that name.")?;
        }
        log_selection(&view);
        write_view(out, &view)?;
        Ok(Flow::Continue)
    }

    /// Read commands until `quit` or end of input.
    ///
    /// A failing command is reported to `out` and the session continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        write_view(out, &self.view())?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
        for line in input.lines() {
            let line = line.context("read command")?;
            match parse_command(&line) {
                Ok(Some(command)) => {
                    debug!(?command, "session command");
                    match self.execute(command, out) {
                        Ok(Flow::Quit) => return Ok(()),
                        Ok(Flow::Continue) => {}
                        Err(error) => {
                            warn!("{error:#}");
                            writeln!(out, "error: {error:#}")?;
                        }
                    }
                }
                Ok(None) => {}
                Err(message) => writeln!(out, "{message}")?,
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Exact label first, then case-insensitive.
    fn resolve_category(&self, name: &str) -> Option<String> {
        let categories = self.dataset.categories();
        categories
            .iter()
            .find(|c| c.category == name)
            .or_else(|| {
                categories
                    .iter()
                    .find(|c| c.category.eq_ignore_ascii_case(name))
            })
            .map(|c| c.category.clone())
    }
}

fn log_selection(view: &DashboardView) {
    if let Some(selected) = &view.selected
        && let ReviewPanel::Reviews(reviews) = &selected.reviews
    {
        for review in reviews {
            trace!(
                business_id = %selected.business.business_id,
                stars = review.stars,
                text = redact_value(&review.text),
                "review selected"
            );
        }
    }
}
