// src/charts.rs
//
// Pure builders from tabular rows to Plotly figure JSON. The browser side
// hands these straight to Plotly.newPlot, so field names follow the plotly
// schema rather than Rust conventions.

use crate::quarters::sorted_by_quarter;
use quote_service::models::{FinancialRecord, PriceBar};
use serde::Serialize;

const BLUE: &str = "#1f77b4";
const ORANGE: &str = "#ff7f0e";
const GREEN: &str = "#2ca02c";
const PURPLE: &str = "#9467bd";

// Qualitative Set2 palette, one color per company on the compare charts.
const SET2: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

pub const NO_DATA_TITLE: &str = "No data available";
pub const NOT_ENOUGH_DATA_TITLE: &str = "Not enough data for comparison";

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    /// Titled spec with no traces, used whenever the input cannot be plotted.
    pub fn placeholder(title: &str) -> Self {
        ChartSpec {
            data: Vec::new(),
            layout: Layout::themed(title),
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

impl Trace {
    fn new(kind: &'static str) -> Self {
        Trace {
            kind,
            x: Vec::new(),
            y: Vec::new(),
            name: None,
            mode: None,
            text: None,
            textposition: None,
            hovertext: None,
            marker: None,
            line: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Layout {
    /// Shared visual theme: transparent backgrounds, centered title, fixed
    /// font, light gridlines on the value axis.
    fn themed(title: &str) -> Self {
        Layout {
            title: Title {
                text: title.to_string(),
                x: 0.5,
            },
            plot_bgcolor: "rgba(0,0,0,0)",
            paper_bgcolor: "rgba(0,0,0,0)",
            font: Font {
                family: "Arial",
                size: 14,
                color: "#333",
            },
            xaxis: None,
            yaxis: Axis {
                showgrid: true,
                gridcolor: "lightgrey",
            },
            showlegend: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub family: &'static str,
    pub size: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub showgrid: bool,
    pub gridcolor: &'static str,
}

/// SI-suffix abbreviation for bar value labels: 1.2K, 3.4M, 12B.
pub fn si_format(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (value / 1e12, "T")
    } else if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else if value.fract() == 0.0 {
        return format!("{}", value as i64);
    } else {
        return format!("{:.1}", value);
    };
    if scaled.abs() < 10.0 {
        format!("{:.1}{}", scaled, suffix)
    } else {
        format!("{:.0}{}", scaled, suffix)
    }
}

fn labeled_bar(rows: &[FinancialRecord], value: fn(&FinancialRecord) -> f64, color: &'static str) -> Trace {
    let mut trace = Trace::new("bar");
    trace.x = rows.iter().map(|r| r.quarter.clone()).collect();
    trace.y = rows.iter().map(|r| value(r)).collect();
    trace.text = Some(rows.iter().map(|r| si_format(value(r))).collect());
    trace.textposition = Some("outside");
    trace.marker = Some(Marker {
        color: Some(color.to_string()),
        size: None,
    });
    trace
}

/// Quarterly revenue as a bar chart.
pub fn revenue_chart(rows: &[FinancialRecord], company: &str) -> ChartSpec {
    if rows.is_empty() {
        return ChartSpec::placeholder(NO_DATA_TITLE);
    }
    ChartSpec {
        data: vec![labeled_bar(rows, |r| r.revenue, BLUE)],
        layout: Layout::themed(&format!("{} Revenue per Quarter", company)),
    }
}

/// Quarterly R&D spend as a connected-marker line.
pub fn rd_chart(rows: &[FinancialRecord], company: &str) -> ChartSpec {
    if rows.is_empty() {
        return ChartSpec::placeholder(NO_DATA_TITLE);
    }
    let mut trace = Trace::new("scatter");
    trace.x = rows.iter().map(|r| r.quarter.clone()).collect();
    trace.y = rows.iter().map(|r| r.rd_spending).collect();
    trace.mode = Some("lines+markers");
    trace.line = Some(Line {
        color: ORANGE,
        width: 3.0,
    });
    ChartSpec {
        data: vec![trace],
        layout: Layout::themed(&format!("{} R&D Spending per Quarter", company)),
    }
}

/// Quarterly net income as a bar chart.
pub fn net_income_chart(rows: &[FinancialRecord], company: &str) -> ChartSpec {
    if rows.is_empty() {
        return ChartSpec::placeholder(NO_DATA_TITLE);
    }
    ChartSpec {
        data: vec![labeled_bar(rows, |r| r.net_income, GREEN)],
        layout: Layout::themed(&format!("{} Net Income per Quarter", company)),
    }
}

/// Daily closing price as a line over the fetched window.
pub fn stock_chart(bars: &[PriceBar], company: &str, ticker: &str) -> ChartSpec {
    if bars.is_empty() {
        return ChartSpec::placeholder(NO_DATA_TITLE);
    }
    let mut trace = Trace::new("scatter");
    trace.x = bars.iter().map(|b| b.date.format("%Y-%m-%d").to_string()).collect();
    trace.y = bars.iter().map(|b| b.close).collect();
    trace.mode = Some("lines");
    trace.line = Some(Line {
        color: PURPLE,
        width: 2.0,
    });
    let mut layout = Layout::themed(&format!("{} ({}) Stock Price Trend", company, ticker));
    layout.xaxis = Some(Axis {
        showgrid: true,
        gridcolor: "lightgrey",
    });
    ChartSpec {
        data: vec![trace],
        layout,
    }
}

// Group rows per company, each group in quarter order, companies in
// first-seen order.
fn group_by_company(rows: &[FinancialRecord]) -> Vec<(String, Vec<FinancialRecord>)> {
    let mut groups: Vec<(String, Vec<FinancialRecord>)> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|(name, _)| name == &row.company) {
            Some((_, group)) => group.push(row.clone()),
            None => groups.push((row.company.clone(), vec![row.clone()])),
        }
    }
    for (_, group) in groups.iter_mut() {
        let sorted = sorted_by_quarter(std::mem::take(group));
        *group = sorted;
    }
    groups
}

/// Net-income margin of each company's latest quarter, ranked descending.
/// Companies whose latest revenue is zero are dropped rather than plotted
/// with a non-finite margin.
pub fn leaderboard_chart(rows: &[FinancialRecord]) -> ChartSpec {
    if rows.is_empty() {
        return ChartSpec::placeholder(NO_DATA_TITLE);
    }

    let mut ranked: Vec<(String, f64)> = Vec::new();
    for (company, group) in group_by_company(rows) {
        let latest = match group.last() {
            Some(latest) => latest,
            None => continue,
        };
        if latest.revenue == 0.0 {
            continue;
        }
        ranked.push((company, latest.net_income / latest.revenue * 100.0));
    }
    if ranked.is_empty() {
        return ChartSpec::placeholder(NO_DATA_TITLE);
    }
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let data = ranked
        .into_iter()
        .enumerate()
        .map(|(i, (company, margin))| {
            let mut trace = Trace::new("bar");
            trace.x = vec![company.clone()];
            trace.y = vec![margin];
            trace.name = Some(company);
            trace.marker = Some(Marker {
                color: Some(SET2[i % SET2.len()].to_string()),
                size: None,
            });
            trace
        })
        .collect();

    ChartSpec {
        data,
        layout: Layout::themed("Leaderboard: Net Income Margin (Latest Quarter)"),
    }
}

/// One point per qualifying company: R&D efficiency (x) against revenue
/// growth (y), marker sized by latest net income. A company qualifies with
/// at least two quarters of history; the chart itself needs at least two
/// qualifying companies.
pub fn scatter_efficiency_chart(rows: &[FinancialRecord]) -> ChartSpec {
    struct Point {
        company: String,
        efficiency: f64,
        growth: f64,
        revenue: f64,
        rd_spending: f64,
        net_income: f64,
    }

    let qualifying: Vec<(String, Vec<FinancialRecord>)> = group_by_company(rows)
        .into_iter()
        .filter(|(_, group)| group.len() >= 2)
        .collect();
    if qualifying.len() < 2 {
        return ChartSpec::placeholder(NOT_ENOUGH_DATA_TITLE);
    }

    let mut points: Vec<Point> = Vec::new();
    for (company, group) in qualifying {
        let latest = &group[group.len() - 1];
        let prior = &group[group.len() - 2];
        // Zero denominators drop the company instead of emitting inf.
        if prior.revenue == 0.0 || latest.rd_spending == 0.0 {
            continue;
        }
        points.push(Point {
            company,
            efficiency: latest.revenue / latest.rd_spending,
            growth: (latest.revenue - prior.revenue) / prior.revenue * 100.0,
            revenue: latest.revenue,
            rd_spending: latest.rd_spending,
            net_income: latest.net_income,
        });
    }
    if points.len() < 2 {
        return ChartSpec::placeholder(NOT_ENOUGH_DATA_TITLE);
    }

    let max_income = points.iter().map(|p| p.net_income).fold(0.0_f64, f64::max);
    let data = points
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let size = if max_income > 0.0 {
                10.0 + 30.0 * (point.net_income.max(0.0) / max_income)
            } else {
                10.0
            };
            let mut trace = Trace::new("scatter");
            trace.x = vec![format!("{}", point.efficiency)];
            trace.y = vec![point.growth];
            trace.name = Some(point.company.clone());
            trace.mode = Some("markers+text");
            trace.text = Some(vec![point.company]);
            trace.textposition = Some("top center");
            trace.hovertext = Some(vec![format!(
                "Revenue: {}<br>R&D: {}<br>Net Income: {}",
                si_format(point.revenue),
                si_format(point.rd_spending),
                si_format(point.net_income)
            )]);
            trace.marker = Some(Marker {
                color: Some(SET2[i % SET2.len()].to_string()),
                size: Some(size),
            });
            trace
        })
        .collect();

    ChartSpec {
        data,
        layout: Layout::themed("R&D Efficiency vs Revenue Growth"),
    }
}
