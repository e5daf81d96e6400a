//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use gridlock_core::{Position, Square};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Gridlock - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("arrows/1-9 move · enter mark · r restart · s reset scores · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let [one, two] = app.players();
    let line = Line::from(vec![
        Span::styled(
            format!("{} {}", one, one.score()),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("   vs   "),
        Span::styled(
            format!("{} {}", two, two.score()),
            Style::default().fg(Color::Red),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_column(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let first_symbol = app.players()[0].symbol();

    let (text, base_style) = match app.squares()[pos.index()] {
        Square::Empty => (
            format!("{}", pos.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Marked(symbol) => {
            let color = if symbol == first_symbol { Color::Blue } else { Color::Red };
            (
                symbol.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    let style = if app.winning_line().is_some_and(|line| line.contains(&pos)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && app.input_enabled() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", text), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────┼─────────────┼─────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use gridlock_core::{FirstMovePolicy, GameController, Player, Symbol};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 22)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let controller = GameController::with_rng(
            [Player::human("Alice", Symbol::X), Player::human("Bob", Symbol::O)],
            FirstMovePolicy::default(),
            StdRng::seed_from_u64(0),
        )
        .unwrap();
        App::new(controller)
    }

    #[test]
    fn test_renders_title_scores_and_status() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        let screen = render(&app);
        assert!(screen.contains("Gridlock - Tic Tac Toe"));
        assert!(screen.contains("Alice (X) 0"));
        assert!(screen.contains("Bob (O) 0"));
        assert!(screen.contains("Alice (X)'s turn."));
    }

    #[test]
    fn test_renders_marks() {
        let mut app = app();
        app.handle_key(KeyCode::Char('r'));
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('9'));
        let screen = render(&app);
        assert!(screen.contains("  X  "));
        assert!(screen.contains("  O  "));
        // Untouched squares show their key.
        assert!(screen.contains("  5  "));
        assert!(!screen.contains("  1  "));
    }
}
