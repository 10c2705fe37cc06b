use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, Points};

use crate::color::{viridis, ColorMap};
use crate::data::aggregate::DashboardSummary;

const CHART_HEIGHT: f32 = 320.0;
const MAX_LABEL_CHARS: usize = 32;

// ---------------------------------------------------------------------------
// Top journals – horizontal bar chart
// ---------------------------------------------------------------------------

/// Render the top-journals bar chart, largest at the top.
pub fn top_journals_chart(ui: &mut Ui, summary: &DashboardSummary) {
    let entries = &summary.top_journals;
    let n = entries.len();

    let bars: Vec<Bar> = entries
        .iter()
        .zip(viridis(n))
        .enumerate()
        .map(|(rank, ((journal, count), color))| {
            Bar::new((n - 1 - rank) as f64, *count as f64)
                .name(journal)
                .fill(color)
                .width(0.7)
        })
        .collect();

    // Axis position i (from the bottom) → journal label.
    let labels: Vec<String> = entries
        .iter()
        .rev()
        .map(|(journal, _)| truncate_label(journal))
        .collect();

    Plot::new("top_journals")
        .height(CHART_HEIGHT)
        .x_axis_label("Number of Papers")
        .y_axis_label("Journal")
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let head: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}…")
    }
}

// ---------------------------------------------------------------------------
// Papers per year – line chart with markers
// ---------------------------------------------------------------------------

pub fn papers_per_year_chart(ui: &mut Ui, summary: &DashboardSummary) {
    let series: Vec<[f64; 2]> = summary
        .papers_per_year
        .iter()
        .map(|&(year, count)| [year as f64, count as f64])
        .collect();

    Plot::new("papers_per_year")
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("Number of Papers")
        .x_axis_formatter(integer_ticks)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(series.clone()).name("papers").width(2.0));
            plot_ui.points(Points::new(series).name("papers").radius(4.0));
        });
}

fn integer_ticks(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.value.fract() == 0.0 {
        format!("{:.0}", mark.value)
    } else {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Abstract length distribution – histogram
// ---------------------------------------------------------------------------

/// One equal-width histogram bin `[start, start + width)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub width: f64,
    pub count: usize,
}

/// Bucket `values` into `bins` equal-width bins spanning min..=max.
/// The last bin is closed on the right. Identical values share one bin.
pub fn histogram(values: &[usize], bins: usize) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![HistogramBin {
            start: min as f64 - 0.5,
            width: 1.0,
            count: values.len(),
        }];
    }

    let lo = min as f64;
    let width = (max - min) as f64 / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v as f64 - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + i as f64 * width,
            width,
            count,
        })
        .collect()
}

pub fn abstract_length_histogram(ui: &mut Ui, summary: &DashboardSummary, bins: usize) {
    let bars: Vec<Bar> = histogram(&summary.abstract_lengths, bins)
        .into_iter()
        .map(|bin| {
            Bar::new(bin.start + bin.width / 2.0, bin.count as f64)
                .width(bin.width)
                .fill(Color32::from_rgb(135, 206, 235))
                .stroke(Stroke::new(1.0, Color32::BLACK))
        })
        .collect();

    Plot::new("abstract_lengths")
        .height(CHART_HEIGHT)
        .x_axis_label("Number of Words in Abstract")
        .y_axis_label("Count")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Abstract length vs publication year – scatter, coloured by journal
// ---------------------------------------------------------------------------

pub fn length_scatter(ui: &mut Ui, summary: &DashboardSummary, color_map: Option<&ColorMap>) {
    let mut by_journal: BTreeMap<Option<&str>, Vec<[f64; 2]>> = BTreeMap::new();
    for point in &summary.length_points {
        by_journal
            .entry(point.journal.as_deref())
            .or_default()
            .push([point.year as f64, point.abstract_length as f64]);
    }

    Plot::new("length_vs_year")
        .height(CHART_HEIGHT)
        .x_axis_label("Publication Year")
        .y_axis_label("Abstract Length (words)")
        .x_axis_formatter(integer_ticks)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (journal, points) in by_journal {
                let color = color_map
                    .map(|cm| cm.color_for(journal))
                    .unwrap_or(Color32::LIGHT_BLUE);
                plot_ui.points(
                    Points::new(points)
                        .name(journal.unwrap_or("unknown"))
                        .color(color)
                        .radius(2.5),
                );
            }
        });
}
