// ============================================================================
// Chart - Graphiques du portefeuille
// ============================================================================
// Allocation (barres) et performance (ligne), dessinées par les widgets
// de ratatui. On ne fait que leur passer les données.
//
// CONCEPTS RATATUI :
// 1. BarChart : une barre par part, couleur de la palette
// 2. Chart + Dataset : série de points (x, y)
// 3. Axis : bornes et labels
// ============================================================================

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType},
    Frame,
};

use crate::models::{allocation_color, AllocationSlice, PerformancePoint};
use crate::ui::dashboard::{inert, titled_block};

/// Couleur de la courbe de performance (#0070f3)
const PERFORMANCE_COLOR: Color = Color::Rgb(0x00, 0x70, 0xf3);

/// Convertit "#rrggbb" en couleur terminal
///
/// CONCEPT RUST : FromStr
/// - Color implémente FromStr et accepte la notation hexadécimale
pub fn hex_color(hex: &str) -> Color {
    hex.parse().unwrap_or(Color::Blue)
}

// ============================================================================
// Allocation
// ============================================================================

/// Dessine l'allocation en barres verticales
///
/// Les pourcentages sont affichés tels quels, sans normalisation.
pub fn render_allocation(frame: &mut Frame, slices: &[AllocationSlice], area: Rect) {
    let bars: Vec<Bar> = slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let color = hex_color(allocation_color(index));
            Bar::default()
                .value(slice.value.max(0.0).round() as u64)
                .label(Line::from(slice.name.clone()))
                .text_value(format!("{:.0}%", slice.value))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD))
        })
        .collect();

    let title = Line::from(vec![
        Span::styled(" Portfolio Allocation ", Style::default().add_modifier(Modifier::BOLD)),
        inert("Filter"),
        Span::raw(" "),
    ]);

    let chart = BarChart::default()
        .block(titled_block(title))
        .data(BarGroup::default().bars(&bars))
        .bar_width(8)
        .bar_gap(2)
        .max(100);

    frame.render_widget(chart, area);
}

// ============================================================================
// Performance
// ============================================================================

/// Bornes Y de la courbe, avec 5% de marge
///
/// Les valeurs ne sont pas validées : des points négatifs restent visibles.
/// Le plancher à 0 ne s'applique que si toutes les valeurs sont positives.
pub fn performance_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 1.0);
    }

    // Min et max en un seul passage
    let (min_value, max_value) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), &(_x, y)| (min.min(y), max.max(y)));

    let margin = ((max_value - min_value) * 0.05).max(1.0);
    let lower = min_value - margin;
    let y_min = if min_value >= 0.0 { lower.max(0.0) } else { lower };

    (y_min, max_value + margin)
}

/// Dessine la courbe de performance mensuelle
pub fn render_performance(frame: &mut Frame, performance: &[PerformancePoint], area: Rect) {
    let points: Vec<(f64, f64)> = performance
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect();

    let (y_min, y_max) = performance_bounds(&points);

    let x_max = points.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Span> = match (performance.first(), performance.last()) {
        (Some(first), Some(last)) => {
            let middle = &performance[performance.len() / 2];
            vec![
                Span::raw(first.month.clone()),
                Span::raw(middle.month.clone()),
                Span::raw(last.month.clone()),
            ]
        }
        _ => Vec::new(),
    };

    let datasets = vec![Dataset::default()
        .name("value")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(PERFORMANCE_COLOR))
        .data(&points)];

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, x_max])
        .labels(x_labels);

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(vec![
            Span::raw(format!("{:.0}", y_min)),
            Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
            Span::raw(format!("{:.0}", y_max)),
        ]);

    let title = Line::from(vec![
        Span::styled(" Performance ", Style::default().add_modifier(Modifier::BOLD)),
        inert("Export"),
        Span::raw(" "),
        inert("6M"),
        Span::raw(" "),
    ]);

    let chart = Chart::new(datasets)
        .block(titled_block(title))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn points(values: &[f64]) -> Vec<PerformancePoint> {
        ["Jan", "Feb", "Mar", "Apr"]
            .iter()
            .zip(values)
            .map(|(month, value)| PerformancePoint::new(month, *value))
            .collect()
    }

    /// Nombre de cellules Braille dessinées par la courbe
    fn braille_cells(performance: &[PerformancePoint]) -> usize {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_performance(frame, performance, frame.size()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut count = 0;
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let symbol = buffer.get(x, y).symbol();
                if symbol
                    .chars()
                    .any(|c| ('\u{2801}'..='\u{28FF}').contains(&c))
                {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_bounds_floor_at_zero_for_positive_values() {
        let (y_min, y_max) = performance_bounds(&[(0.0, 10.0), (1.0, 30.0)]);
        assert_eq!(y_min, 9.0);
        assert_eq!(y_max, 31.0);

        let (y_min, _) = performance_bounds(&[(0.0, 0.0), (1.0, 100.0)]);
        assert_eq!(y_min, 0.0);
    }

    #[test]
    fn test_bounds_contain_negative_values() {
        let pts = [(0.0, -400.0), (1.0, -200.0), (2.0, -300.0)];
        let (y_min, y_max) = performance_bounds(&pts);
        assert!(y_min < y_max);
        assert!(pts.iter().all(|&(_, y)| y_min <= y && y <= y_max));

        let mixed = [(0.0, -400.0), (1.0, 200.0), (2.0, -300.0)];
        let (y_min, y_max) = performance_bounds(&mixed);
        assert!(mixed.iter().all(|&(_, y)| y_min <= y && y <= y_max));
    }

    #[test]
    fn test_bounds_empty_series() {
        assert_eq!(performance_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_negative_series_is_drawn() {
        assert!(braille_cells(&points(&[-400.0, -200.0, -300.0])) > 0);
        assert!(braille_cells(&points(&[4000.0, 3800.0, 4200.0])) > 0);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#0070f3"), Color::Rgb(0x00, 0x70, 0xf3));
        assert_eq!(hex_color("not-a-color"), Color::Blue);
    }
}
