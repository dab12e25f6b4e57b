//! TUI rendering with ratatui
//!
//! Root word header, input field, word history, score and messages.

use super::app::{App, MessageStyle};
use crate::output::formatters::{length_badge, spaced_root};
use crate::wordlists::{SpellChecker, WordSource};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<C: SpellChecker, W: WordSource>(f: &mut Frame, app: &App<C, W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Root word
            Constraint::Length(3),  // Input
            Constraint::Min(8),     // History and messages
            Constraint::Length(3),  // Score / status
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    render_history(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header<C: SpellChecker, W: WordSource>(f: &mut Frame, app: &App<C, W>, area: Rect) {
    let header = Paragraph::new(spaced_root(app.game.round().root_word()))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<C: SpellChecker, W: WordSource>(f: &mut Frame, app: &App<C, W>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word | Enter: Submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(input, area);
}

fn render_history<C: SpellChecker, W: WordSource>(f: &mut Frame, app: &App<C, W>, area: Rect) {
    let round = app.game.round();

    let items: Vec<ListItem> = if round.history().is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        round
            .history()
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(length_badge(word), Style::default().fg(Color::Cyan)),
                    Span::raw(" "),
                    Span::raw(word.clone()),
                ]))
            })
            .collect()
    };

    let history = List::new(items).block(
        Block::default()
            .title(format!(" Words ({}) ", round.history().len()))
            .borders(Borders::ALL),
    );

    f.render_widget(history, area);
}

fn render_messages<C: SpellChecker, W: WordSource>(f: &mut Frame, app: &App<C, W>, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .rev()
        .flat_map(|msg| {
            let color = match msg.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            [
                Line::from(Span::styled(
                    msg.title.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(msg.text.clone(), Style::default().fg(color))),
            ]
        })
        .collect();

    let messages = Paragraph::new(lines)
        .block(Block::default().title(" Messages ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    f.render_widget(messages, area);
}

fn render_status<C: SpellChecker, W: WordSource>(f: &mut Frame, app: &App<C, W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let score = Paragraph::new(format!(
        "Current root word score: {}",
        app.game.round().score()
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(score, chunks[0]);

    let stats = app.game.stats();
    let stats_text = format!(
        "Round {} | Best: {}",
        stats.rounds_played, stats.best_score
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Ctrl-N: New Round | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use crate::wordlists::{WordListDictionary, WordSourceError};
    use ratatui::{Terminal, backend::TestBackend};

    struct Only(&'static str);

    impl WordSource for Only {
        fn root_word_candidates(&self) -> Result<Vec<String>, WordSourceError> {
            Ok(vec![self.0.to_string()])
        }
    }

    fn rendered(app: &App<WordListDictionary, Only>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn shows_root_word_and_score() {
        let game = Game::new(WordListDictionary::embedded(), Only("silkworm"), "en", Some(1));
        let mut app = App::new(game);
        app.input_buffer.push_str("worm");
        app.submit_input();

        let screen = rendered(&app);
        assert!(screen.contains("S I L K W O R M"));
        assert!(screen.contains("Current root word score: 4"));
        assert!(screen.contains("worm"));
    }

    #[test]
    fn shows_rejection_title() {
        let game = Game::new(WordListDictionary::embedded(), Only("silkworm"), "en", Some(1));
        let mut app = App::new(game);
        app.input_buffer.push_str("zzz");
        app.submit_input();

        assert!(rendered(&app).contains("Word not possible"));
    }
}
