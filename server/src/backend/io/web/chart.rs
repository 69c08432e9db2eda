//! SVG bar chart of the history window, drawn server-side with plotters.

use anyhow::Result;
use plotters::prelude::*;
use shared::RangeAggregate;

const CHART_WIDTH: u32 = 720;
const CHART_HEIGHT: u32 = 320;
const BAR_COLOR: RGBColor = RGBColor(56, 152, 236);
const LABEL_COLOR: RGBColor = RGBColor(90, 110, 140);

/// Render one bar per day; returns the `<svg>` markup
pub fn render_history_chart(aggregate: &RangeAggregate) -> Result<String> {
    let bar_count = aggregate.len() as u32;
    let max_value = aggregate.values.iter().copied().fold(0.0_f64, f64::max);
    // Headroom above the tallest bar; keep a usable axis when everything is zero
    let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1000.0 };

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..bar_count).into_segmented(), 0.0..y_max)?;

        let label_for = |value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(index) => aggregate
                .labels
                .get(*index as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("ml")
            .x_labels(bar_count as usize)
            .x_label_formatter(&label_for)
            .y_label_formatter(&|v| format!("{:.0}", v))
            .label_style(("sans-serif", 12, &LABEL_COLOR))
            .axis_style(RGBColor(220, 220, 220))
            .light_line_style(RGBColor(245, 245, 245))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(3)
                .data(
                    aggregate
                        .values
                        .iter()
                        .enumerate()
                        .map(|(index, value)| (index as u32, *value)),
                ),
        )?;

        root.present()?;
    }

    Ok(svg)
}
