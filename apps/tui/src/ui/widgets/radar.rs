//! Skill radar drawn on a braille canvas, plus the inverse mapping from a
//! terminal cell back to the axis point or label under it.

use portfolio_core::{BadgeVariant, RadarChart, SkillStat};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

/// Canvas units from the centre to the plot edge; the outer ring sits at 1.0.
const BOUND: f64 = 1.4;
const LABEL_RADIUS: f64 = 1.12;
const MIN_WIDTH: u16 = 16;
const MIN_HEIGHT: u16 = 8;

pub fn radar_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn label_text(skill: &SkillStat) -> String {
    format!("{} {}", skill.icon().glyph(), skill.name())
}

pub fn badge_style(variant: BadgeVariant) -> Style {
    match variant {
        BadgeVariant::Default => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Outline => Style::default().fg(Color::Cyan),
    }
}

/// Maps canvas coordinates to terminal cells the way the canvas places labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    area: Rect,
    x_span: f64,
    y_span: f64,
}

impl RadarGeometry {
    pub fn new(area: Rect) -> Option<Self> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }

        // A terminal cell is about twice as tall as it is wide.
        let width = f64::from(area.width);
        let height = f64::from(area.height);
        let (x_span, y_span) = if width >= 2.0 * height {
            (BOUND * width / (2.0 * height), BOUND)
        } else {
            (BOUND, BOUND * 2.0 * height / width)
        };

        Some(Self {
            area,
            x_span,
            y_span,
        })
    }

    pub const fn x_bounds(&self) -> [f64; 2] {
        [-self.x_span, self.x_span]
    }

    pub const fn y_bounds(&self) -> [f64; 2] {
        [-self.y_span, self.y_span]
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell(&self, x: f64, y: f64) -> (u16, u16) {
        let columns = f64::from(self.area.width - 1);
        let rows = f64::from(self.area.height - 1);
        let column = ((x + self.x_span) * columns / (2.0 * self.x_span)).clamp(0.0, columns);
        let row = ((self.y_span - y) * rows / (2.0 * self.y_span)).clamp(0.0, rows);
        (self.area.x + column as u16, self.area.y + row as u16)
    }

    /// A canvas point that [`Self::cell`] maps back to `(column, row)`.
    pub fn point(&self, column: u16, row: u16) -> (f64, f64) {
        let columns = f64::from(self.area.width - 1);
        let rows = f64::from(self.area.height - 1);
        let dc = f64::from(column.saturating_sub(self.area.x)) + 0.25;
        let dr = f64::from(row.saturating_sub(self.area.y)) + 0.25;
        (
            dc * 2.0 * self.x_span / columns - self.x_span,
            self.y_span - dr * 2.0 * self.y_span / rows,
        )
    }

    pub fn vertex_cell(&self, chart: &RadarChart, index: usize) -> Option<(u16, u16)> {
        chart.vertex(index, 1.0).map(|(x, y)| self.cell(x, y))
    }

    /// `(first column, row, width)` of the axis label.
    pub fn label_span(&self, chart: &RadarChart, index: usize) -> Option<(u16, u16, u16)> {
        let skill = chart.skill(index)?;
        let width = u16::try_from(Line::from(label_text(skill)).width()).unwrap_or(u16::MAX);
        let angle = chart.angle(index);
        let (column, row) = self.cell(angle.cos() * LABEL_RADIUS, angle.sin() * LABEL_RADIUS);

        let start = if angle.cos() < -0.2 {
            column.saturating_sub(width.saturating_sub(1))
        } else if angle.cos() <= 0.2 {
            column.saturating_sub(width / 2)
        } else {
            column
        };
        let last_start = (self.area.x + self.area.width)
            .saturating_sub(width)
            .max(self.area.x);

        Some((start.clamp(self.area.x, last_start), row, width))
    }

    pub fn hit(&self, chart: &RadarChart, column: u16, row: u16) -> Option<usize> {
        (0..chart.len()).find(|&index| {
            let on_label = self
                .label_span(chart, index)
                .is_some_and(|(start, label_row, width)| {
                    row == label_row && column >= start && column < start.saturating_add(width)
                });
            let on_point = self
                .vertex_cell(chart, index)
                .is_some_and(|(x, y)| row == y && column.abs_diff(x) <= 1);
            on_label || on_point
        })
    }
}

/// Axis under terminal cell `(column, row)` for a radar drawn into `area`.
pub fn hit_test(chart: &RadarChart, area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = radar_block(chart.title()).inner(area);
    RadarGeometry::new(inner)?.hit(chart, column, row)
}

pub fn render_skill_radar(f: &mut Frame<'_>, area: Rect, chart: &RadarChart) {
    let block = radar_block(chart.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(geometry) = RadarGeometry::new(inner) else {
        f.render_widget(
            Paragraph::new("Enlarge the terminal to see the radar")
                .centered()
                .style(Style::default().fg(Color::Gray)),
            inner,
        );
        return;
    };

    let count = chart.len();
    let rings: Vec<f64> = chart
        .ticks()
        .into_iter()
        .map(|tick| tick / chart.max_value())
        .collect();
    let labels: Vec<(f64, f64, Line<'static>)> = (0..count)
        .filter_map(|index| {
            let skill = chart.skill(index)?;
            let (column, row, _) = geometry.label_span(chart, index)?;
            let (x, y) = geometry.point(column, row);
            let span = Span::styled(label_text(skill), badge_style(chart.badge_variant(index)));
            Some((x, y, Line::from(span)))
        })
        .collect();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(geometry.x_bounds())
        .y_bounds(geometry.y_bounds())
        .paint(|ctx| {
            for ring in &rings {
                for index in 0..count {
                    let from = chart.angle(index);
                    let to = chart.angle((index + 1) % count);
                    ctx.draw(&CanvasLine {
                        x1: from.cos() * ring,
                        y1: from.sin() * ring,
                        x2: to.cos() * ring,
                        y2: to.sin() * ring,
                        color: Color::DarkGray,
                    });
                }
            }

            for axis in chart.axes() {
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: axis.angle.cos(),
                    y2: axis.angle.sin(),
                    color: Color::DarkGray,
                });
            }

            ctx.layer();

            for index in 0..count {
                if let (Some((x1, y1)), Some((x2, y2))) = (
                    chart.vertex(index, 1.0),
                    chart.vertex((index + 1) % count, 1.0),
                ) {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: Color::Cyan,
                    });
                }
            }

            for index in 0..count {
                let Some((x, y)) = chart.vertex(index, 1.0) else {
                    continue;
                };
                let emphasized = chart.emphasized() == Some(index);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: if emphasized { 0.06 } else { 0.03 },
                    color: if emphasized { Color::Yellow } else { Color::Cyan },
                });
            }

            for (x, y, line) in &labels {
                ctx.print(*x, *y, line.clone());
            }
        });

    f.render_widget(canvas, inner);
}
