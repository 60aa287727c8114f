//! Text rendering of histogram figures for the terminal.

use super::histogram::Histogram;

/// Partial block characters, indexed by eighths of a cell.
const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Blank columns between side-by-side panels.
const PANEL_GAP: usize = 4;

/// One titled histogram subplot.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub histogram: Histogram,
}

impl Panel {
    pub fn new(title: impl Into<String>, histogram: Histogram) -> Self {
        Self {
            title: title.into(),
            histogram,
        }
    }

    /// Render the panel as equal-width lines.
    ///
    /// Layout: title, `height` bar rows with a count axis, the x axis, and
    /// the value range under it.
    fn render(&self, height: usize) -> Vec<String> {
        let height = height.max(1);
        let counts = self.histogram.counts();
        let max_count = self.histogram.max_count();
        let top_label = max_count.to_string();
        let label_width = top_label.len();
        let width = label_width + 2 + counts.len();

        // Bar heights in eighths of a row; any non-empty bin shows at least one
        let eighths: Vec<usize> = counts
            .iter()
            .map(|&c| {
                if c == 0 || max_count == 0 {
                    0
                } else {
                    let scaled = (c as f64 / max_count as f64 * (height * 8) as f64).round();
                    (scaled as usize).max(1)
                }
            })
            .collect();

        let mut lines = Vec::with_capacity(height + 3);
        lines.push(center(&self.title, width));

        for row in 0..height {
            let level = height - 1 - row;
            let label = if row == 0 {
                format!("{:>w$} ┤", top_label, w = label_width)
            } else {
                format!("{:>w$} │", "", w = label_width)
            };
            let bars: String = eighths
                .iter()
                .map(|&e| {
                    let filled = e.saturating_sub(level * 8).min(8);
                    BLOCKS[filled]
                })
                .collect();
            lines.push(format!("{label}{bars}"));
        }

        lines.push(format!(
            "{:>w$} └{}",
            0,
            "─".repeat(counts.len()),
            w = label_width
        ));

        let (lo, hi) = self.histogram.range();
        let lo = format!("{lo:.3}");
        let hi = format!("{hi:.3}");
        let pad = counts.len().saturating_sub(lo.len() + hi.len());
        lines.push(format!(
            "{:w$}{lo}{:pad$}{hi}",
            "",
            "",
            w = label_width + 2,
            pad = pad
        ));

        let width = lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(width);
        lines
            .into_iter()
            .map(|line| pad_to(line, width))
            .collect()
    }
}

/// A titled row of histogram panels.
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Render the figure with panels side by side, each `height` rows tall.
    pub fn render(&self, height: usize) -> String {
        let rendered: Vec<Vec<String>> = self.panels.iter().map(|p| p.render(height)).collect();
        let rows = rendered.iter().map(Vec::len).max().unwrap_or(0);

        let body: Vec<String> = (0..rows)
            .map(|r| {
                rendered
                    .iter()
                    .map(|lines| lines.get(r).map(String::as_str).unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(&" ".repeat(PANEL_GAP))
                    .trim_end()
                    .to_string()
            })
            .collect();

        let total_width = rendered
            .iter()
            .map(|lines| lines.first().map(|l| l.chars().count()).unwrap_or(0))
            .sum::<usize>()
            + PANEL_GAP * self.panels.len().saturating_sub(1);

        let mut out = String::new();
        out.push_str(center(&self.title, total_width).trim_end());
        out.push('\n');
        out.push('\n');
        for line in body {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    pad_to(format!("{}{}", " ".repeat(left), text), width)
}

fn pad_to(mut line: String, width: usize) -> String {
    let len = line.chars().count();
    if len < width {
        line.push_str(&" ".repeat(width - len));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(title: &str, values: &[f64], bins: usize) -> Panel {
        Panel::new(title, Histogram::new(values, bins).unwrap())
    }

    #[test]
    fn panel_lines_have_equal_width() {
        let p = panel("Before", &[1.0, 2.0, 2.0, 3.0, 9.0], 10);
        let lines = p.render(5);

        assert_eq!(lines.len(), 5 + 3);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn tallest_bin_reaches_top_row() {
        let p = panel("T", &[1.0, 1.0, 1.0, 2.0], 2);
        let lines = p.render(4);

        // row 1 is the top bar row; first bin holds the maximum count
        assert!(lines[1].starts_with("3 ┤█"));
        // second bin (1/3 of max) is not drawn on the top row
        assert!(!lines[1].ends_with('█'));
        // bottom bar row draws both bins
        assert!(lines[4].contains("██"));
    }

    #[test]
    fn figure_contains_titles() {
        let figure = Figure::new("Effect of Box-Cox Transformation")
            .with_panel(panel("Before Box-Cox (x)", &[1.0, 2.0, 8.0], 50))
            .with_panel(panel("After Box-Cox (x)", &[0.1, 0.5, 0.9], 50));
        let text = figure.render(8);

        let first = text.lines().next().unwrap();
        assert_eq!(first.trim(), "Effect of Box-Cox Transformation");
        let titles = text.lines().nth(2).unwrap();
        assert!(titles.contains("Before Box-Cox (x)"));
        assert!(titles.contains("After Box-Cox (x)"));
        let before = titles.find("Before").unwrap();
        let after = titles.find("After").unwrap();
        assert!(before < after);
    }

    #[test]
    fn empty_bins_render_blank() {
        let p = panel("gap", &[0.0, 10.0], 5);
        let lines = p.render(2);
        let bottom = &lines[2];
        let bars: String = bottom.chars().skip(3).collect();
        assert_eq!(bars.trim_end(), "█   █");
    }
}
