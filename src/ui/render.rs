use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Clear, Paragraph},
};
use searchviz_steps::{Algorithm, CellState, Phase, Snapshot};
use throbber_widgets_tui::Throbber;
use tui_logger::TuiLoggerWidget;
use unicode_width::UnicodeWidthStr;

use super::App;
use super::state::StatusLevel;

const BAR_GAP: u16 = 1;
const KEY_HINTS: &str =
    "g generate  enter start  c cancel  r reset  tab algorithm  ←/→ delay  l log  q quit";

const LEGEND: [(CellState, &str); 5] = [
    (CellState::Candidate, "comparing"),
    (CellState::InRange, "in range"),
    (CellState::Eliminated, "eliminated"),
    (CellState::Found, "found"),
    (CellState::NotFound, "not found"),
];

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let main_area = if self.show_log {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(area);
            self.render_log(frame, columns[1]);
            columns[0]
        } else {
            area
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(main_area);

        self.render_controls(frame, rows[0]);
        self.render_chart(frame, rows[1]);
        self.render_legend(frame, rows[2]);
        self.render_status(frame, rows[3]);
        frame.render_widget(
            Paragraph::new(KEY_HINTS).style(self.theme.empty_style()),
            rows[4],
        );
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let header = self.theme.header_style();
        let mut line = Line::from(vec![
            Span::styled("Algorithm: ", header),
            Span::raw(self.algorithm.label()),
            Span::raw("  │  "),
            Span::styled("Delay: ", header),
            Span::raw(format!("{:.1}s", self.delay.as_secs_f64())),
            Span::raw("  │  "),
            Span::styled("Target: ", header),
            Span::raw(self.target.text().to_string()),
            Span::styled("▏", header),
        ]);

        if self.is_running() {
            let spinner = Throbber::default()
                .style(self.theme.status_style())
                .throbber_style(self.theme.status_style());
            let spinner_span = spinner.to_symbol_span(&self.throbber_state);
            let used = line.width() + spinner_span.width() + "running".width() + 2;
            let padding = usize::from(area.width).saturating_sub(used);
            line.spans.push(Span::raw(" ".repeat(padding.max(2))));
            line.spans.push(spinner_span);
            line.spans
                .push(Span::styled("running", self.theme.status_style()));
        }

        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(self.chart_title());
        let Some(values) = self.data() else {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let empty = Paragraph::new("No data. Press g to generate a dataset")
                .alignment(Alignment::Center)
                .style(self.theme.empty_style());
            frame.render_widget(Clear, inner);
            frame.render_widget(empty, centered_row(inner));
            return;
        };

        let states = self.display_states(values.len());
        let bars: Vec<Bar> = values
            .iter()
            .zip(&states)
            .enumerate()
            .map(|(index, (value, state))| {
                let style = self.theme.bar_style(*state);
                Bar::default()
                    .value(u64::try_from(*value).unwrap_or(0))
                    .text_value(value.to_string())
                    .label(Line::from(index.to_string()))
                    .style(style)
                    .value_style(self.theme.label_style().bg(self.theme.bar_color(*state)))
            })
            .collect();

        let inner_width = block.inner(area).width;
        let chart = BarChart::default()
            .block(block)
            .bar_gap(BAR_GAP)
            .bar_width(bar_width(inner_width, values.len()))
            .max(values.iter().copied().max().unwrap_or(0).max(1) as u64)
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, area);
    }

    /// Per-index states for the chart: the latest snapshot if it belongs to
    /// the current data, otherwise every bar idle.
    fn display_states(&self, len: usize) -> Vec<CellState> {
        match &self.snapshot {
            Some(snapshot) if snapshot.states().len() == len => snapshot.states().to_vec(),
            _ => vec![CellState::Idle; len],
        }
    }

    fn chart_title(&self) -> String {
        match &self.snapshot {
            Some(snapshot) => describe_step(self.active_algorithm(), snapshot),
            None => " Bars ".to_string(),
        }
    }

    fn active_algorithm(&self) -> Algorithm {
        self.active.map_or(self.algorithm, |(algorithm, _)| algorithm)
    }

    fn render_legend(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(LEGEND.len() * 2);
        for (state, label) in LEGEND {
            spans.push(Span::styled("■ ", self.theme.bar_style(state)));
            spans.push(Span::raw(format!("{label}   ")));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let style = match self.status.level {
            StatusLevel::Info => self.theme.status_style(),
            StatusLevel::Warning => self.theme.warning_style(),
        };
        frame.render_widget(
            Paragraph::new(self.status.message.as_str()).style(style),
            area,
        );
    }

    fn render_log(&self, frame: &mut Frame, area: Rect) {
        let widget = TuiLoggerWidget::default().block(Block::bordered().title(" Log "));
        frame.render_widget(Clear, area);
        frame.render_widget(widget, area);
    }
}

/// Widest bar that fits `count` bars (plus gaps) into `width` columns.
fn bar_width(width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let available = width.saturating_add(BAR_GAP);
    (available / count).saturating_sub(BAR_GAP).max(1)
}

fn centered_row(area: Rect) -> Rect {
    if area.height == 0 {
        return area;
    }
    Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    }
}

fn describe_step(algorithm: Algorithm, snapshot: &Snapshot<i64>) -> String {
    let values = snapshot.values();
    let step = snapshot.step();
    match snapshot.phase() {
        Phase::Probe { index, bounds } => {
            let bound = algorithm.max_probes(values.len());
            let range = bounds
                .map(|bounds| format!(" • range [{}, {}]", bounds.left, bounds.right))
                .unwrap_or_default();
            format!(
                " {algorithm} • step {step}/≤{bound} • comparing index {index} ({}){range} ",
                values[index]
            )
        }
        Phase::Found { index } => {
            format!(" {algorithm} • found at index {index} • {step} steps ")
        }
        Phase::Exhausted => format!(" {algorithm} • not found • {step} steps "),
    }
}
