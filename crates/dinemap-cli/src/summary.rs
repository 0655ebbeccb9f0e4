//! Terminal rendering of views with `comfy-table`.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use dinemap_glyphs::GlyphTable;
use dinemap_model::{
    CategoryCount, DashboardView, ReviewDisplay, ReviewPanel, SelectedRestaurant, TABLE_HEADERS,
    TableRow,
};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Name, Address, Postal Code, Stars.
pub fn restaurants_table(rows: &[TableRow]) -> Table {
    let mut table = Table::new();
    table.set_header(TABLE_HEADERS.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(row.cells());
    }
    table
}

pub fn categories_table(categories: &[CategoryCount], glyphs: &GlyphTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Category"),
        header_cell("Restaurants"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for category in categories {
        table.add_row(vec![
            Cell::new(glyphs.icon_for(&category.category)),
            Cell::new(&category.category),
            Cell::new(category.count),
        ]);
    }
    table
}

pub fn glyphs_table(glyphs: &GlyphTable) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Glyph")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for entry in glyphs.entries() {
        table.add_row(vec![Cell::new(&entry.label), Cell::new(&entry.glyph)]);
    }
    table.add_row(vec![
        dim_cell("(default)"),
        Cell::new(glyphs.default_glyph()),
    ]);
    table
}

pub fn reviews_table(reviews: &[ReviewDisplay]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stars"),
        header_cell("Review"),
        header_cell("Funny"),
        header_cell("Useful"),
        header_cell("Cool"),
    ]);
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Percentage(70)),
    ]);
    for column in [0, 2, 3, 4] {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for review in reviews {
        table.add_row(vec![
            stars_cell(review.stars),
            Cell::new(&review.text),
            count_cell(review.funny),
            count_cell(review.useful),
            count_cell(review.cool),
        ]);
    }
    table
}

/// Criteria line, restaurant table, map summary and any selected reviews.
pub fn write_view<W: Write>(out: &mut W, view: &DashboardView) -> io::Result<()> {
    writeln!(
        out,
        "Category: {}  Stars: {}  Matches: {}",
        view.criteria.category,
        view.criteria.star_range,
        view.table.len()
    )?;
    if view.table.is_empty() {
        writeln!(out, "No restaurants match the selected filters.")?;
    } else {
        writeln!(out, "{}", restaurants_table(&view.table))?;
    }
    writeln!(
        out,
        "Map: center {} zoom {} markers {}",
        view.map.center,
        view.map.zoom,
        view.map.markers.len()
    )?;
    if let Some(selected) = &view.selected {
        write_selected(out, selected)?;
    }
    Ok(())
}

pub fn write_selected<W: Write>(out: &mut W, selected: &SelectedRestaurant) -> io::Result<()> {
    writeln!(
        out,
        "Reviews for {} ({} stars)",
        selected.business.name, selected.review_range
    )?;
    match &selected.reviews {
        ReviewPanel::Reviews(reviews) => writeln!(out, "{}", reviews_table(reviews)),
        ReviewPanel::Empty => writeln!(out, "{}", ReviewPanel::EMPTY_MESSAGE),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn stars_cell(stars: f64) -> Cell {
    let color = if stars >= 4.0 {
        Color::Green
    } else if stars >= 3.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{stars:.1}")).fg(color)
}

fn count_cell(count: u32) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinemap_model::{FilterCriteria, GeoPoint, MapView, StarRange};

    fn view(rows: Vec<TableRow>) -> DashboardView {
        DashboardView {
            criteria: FilterCriteria::new("Italian", StarRange::new(3.5, 5.0)),
            table: rows,
            map: MapView {
                center: GeoPoint::new(34.42, -119.7),
                zoom: 12,
                markers: Vec::new(),
            },
            selected: None,
        }
    }

    #[test]
    fn empty_view_says_so() {
        let mut out = Vec::new();
        write_view(&mut out, &view(Vec::new())).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Matches: 0"));
        assert!(text.contains("No restaurants match"));
        assert!(text.contains("zoom 12"));
    }

    #[test]
    fn table_lists_rows() {
        let rows = vec![TableRow {
            name: "Trattoria Uno".to_string(),
            address: "1 State St".to_string(),
            postal_code: "93101".to_string(),
            stars: 4.5,
        }];
        let rendered = restaurants_table(&rows).to_string();
        assert!(rendered.contains("Postal Code"));
        assert!(rendered.contains("Trattoria Uno"));
        assert!(rendered.contains("4.5"));
    }
}
