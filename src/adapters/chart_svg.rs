//! SVG chart rendering: candlesticks with the indicator overlays.

use crate::domain::analysis::Analysis;
use crate::domain::indicator::{IndicatorKey, IndicatorSeries};

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 480.0;
const PADDING: f64 = 48.0;

pub fn line_color(key: IndicatorKey) -> &'static str {
    match key {
        IndicatorKey::Ema(9) => "blue",
        IndicatorKey::Ema(20) => "orange",
        IndicatorKey::Ema(50) => "red",
        IndicatorKey::Ema(200) => "purple",
        IndicatorKey::Sma(200) => "green",
        IndicatorKey::Vwap => "black",
        _ => "gray",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

struct Scale {
    min: f64,
    max: f64,
    step_x: f64,
}

impl Scale {
    fn x(&self, index: usize) -> f64 {
        PADDING + (index as f64 + 0.5) * self.step_x
    }

    fn y(&self, price: f64) -> f64 {
        let range = self.max - self.min;
        let plot_height = HEIGHT - 2.0 * PADDING;
        if range > 0.0 {
            HEIGHT - PADDING - (price - self.min) * plot_height / range
        } else {
            HEIGHT / 2.0
        }
    }
}

/// Polyline point lists, split wherever the series is undefined.
fn segments(series: &IndicatorSeries, scale: &Scale) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for (i, point) in series.values.iter().enumerate() {
        match point.value {
            Some(v) => current.push(format!("{:.1},{:.1}", scale.x(i), scale.y(v))),
            None if !current.is_empty() => out.push(std::mem::take(&mut current).join(" ")),
            None => {}
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

pub fn render_chart(analysis: &Analysis) -> String {
    let bars = analysis.series.bars();
    let indicator_values = analysis
        .frame
        .series()
        .iter()
        .flat_map(|s| s.values.iter().filter_map(|p| p.value));
    let (min, max) = bars
        .iter()
        .flat_map(|b| [b.low, b.high])
        .chain(indicator_values)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let scale = Scale {
        min,
        max,
        step_x: (WIDTH - 2.0 * PADDING) / bars.len().max(1) as f64,
    };
    let body_width = (scale.step_x * 0.6).max(1.0);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH:.0}" height="{HEIGHT:.0}" viewBox="0 0 {WIDTH:.0} {HEIGHT:.0}">
<rect width="100%" height="100%" fill="white"/>
<text x="{PADDING:.0}" y="24" font-size="16" font-family="sans-serif">Análise de {}</text>
"#,
        escape(analysis.ticker())
    );
    svg.push_str(&format!(
        r##"<line x1="{p:.0}" y1="{p:.0}" x2="{p:.0}" y2="{b:.0}" stroke="#999"/><line x1="{p:.0}" y1="{b:.0}" x2="{r:.0}" y2="{b:.0}" stroke="#999"/>
"##,
        p = PADDING,
        b = HEIGHT - PADDING,
        r = WIDTH - PADDING
    ));
    svg.push_str(&format!(
        r#"<text x="4" y="{:.1}" font-size="10" font-family="sans-serif">{:.2}</text><text x="4" y="{:.1}" font-size="10" font-family="sans-serif">{:.2}</text>
"#,
        scale.y(max),
        max,
        scale.y(min),
        min
    ));

    svg.push_str("<g id=\"candles\">\n");
    for (i, bar) in bars.iter().enumerate() {
        let x = scale.x(i);
        let color = if bar.close >= bar.open { "#26a69a" } else { "#ef5350" };
        let top = scale.y(bar.open.max(bar.close));
        let bottom = scale.y(bar.open.min(bar.close));
        svg.push_str(&format!(
            r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="{color}"/><rect x="{:.1}" y="{top:.1}" width="{body_width:.1}" height="{:.1}" fill="{color}"/>
"#,
            scale.y(bar.high),
            scale.y(bar.low),
            x - body_width / 2.0,
            (bottom - top).max(0.5)
        ));
    }
    svg.push_str("</g>\n");

    for (n, series) in analysis.frame.series().iter().enumerate() {
        let color = line_color(series.key);
        svg.push_str(&format!("<g id=\"{}\">\n", series.key));
        for points in segments(series, &scale) {
            svg.push_str(&format!(
                "<polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"1\" points=\"{points}\"/>\n"
            ));
        }
        svg.push_str(&format!(
            "<text x=\"{:.0}\" y=\"{:.0}\" font-size=\"11\" font-family=\"sans-serif\" fill=\"{color}\">{}</text>\n",
            PADDING + 90.0 * n as f64,
            HEIGHT - 12.0,
            series.key.to_string().to_uppercase().replace('_', " ")
        ));
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}
