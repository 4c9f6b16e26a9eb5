//! Plain-text rendering for terminals.

use std::fmt::Write as _;

use super::Renderer;
use crate::board::{Board, FeatureKind};
use crate::core::{Cell, Player, PlayerId, PlayerMap, BOARD_SIDE};

/// Token colour per seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenColor {
    Red,
    Blue,
    Green,
    Orange,
}

impl TokenColor {
    const SEATS: [TokenColor; 4] = [
        TokenColor::Red,
        TokenColor::Blue,
        TokenColor::Green,
        TokenColor::Orange,
    ];

    /// Colour of the token for `player`; wraps for seats past the fourth.
    #[must_use]
    pub fn for_player(player: PlayerId) -> Self {
        Self::SEATS[player.index() % Self::SEATS.len()]
    }

    /// Single-letter marker used on the text board.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            TokenColor::Red => 'R',
            TokenColor::Blue => 'B',
            TokenColor::Green => 'G',
            TokenColor::Orange => 'O',
        }
    }
}

impl std::fmt::Display for TokenColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenColor::Red => "red",
            TokenColor::Blue => "blue",
            TokenColor::Green => "green",
            TokenColor::Orange => "orange",
        };
        f.write_str(name)
    }
}

/// Renderer that turns notifications into human-readable lines.
///
/// Lines are buffered; the driver prints them with [`TextRenderer::drain_lines`].
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    names: Vec<String>,
    lines: Vec<String>,
}

impl TextRenderer {
    /// Renderer for players with the given display names, in seat order.
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            lines: Vec::new(),
        }
    }

    fn name(&self, player: PlayerId) -> String {
        self.names
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }

    /// Take the buffered lines.
    pub fn drain_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl Renderer for TextRenderer {
    fn on_dice_rolled(&mut self, value: u8) {
        self.push(format!("Dice: {}", value));
    }

    fn on_position_changed(&mut self, player: PlayerId, position: Cell) {
        let line = format!("{} ({}) is on {}", self.name(player), TokenColor::for_player(player), position);
        self.push(line);
    }

    fn on_turn_changed(&mut self, player: PlayerId) {
        let line = format!("{}'s turn", self.name(player));
        self.push(line);
    }

    fn on_game_over(&mut self, winner: PlayerId) {
        let line = format!("Congratulations {}! You conquered the board!", self.name(winner));
        self.push(line);
    }

    fn on_key_acquired(&mut self, player: PlayerId) {
        let line = format!("{} rolled the magic key and may now move", self.name(player));
        self.push(line);
    }

    fn on_feature(&mut self, player: PlayerId, kind: FeatureKind, from: Cell, to: Cell) {
        let line = match kind {
            FeatureKind::Snake => format!("{} hit a snake at {} and slid down to {}", self.name(player), from, to),
            FeatureKind::Ladder => format!("{} climbed a ladder from {} to {}", self.name(player), from, to),
        };
        self.push(line);
    }
}

/// Marker shown next to a cell number.
fn marker(board: &Board, cell: Cell) -> char {
    if board.snake_at(cell).is_some() {
        'S'
    } else if board.ladder_at(cell).is_some() {
        'L'
    } else {
        match board.feature_touching(cell) {
            Some(FeatureKind::Snake) => 's',
            Some(FeatureKind::Ladder) => 'l',
            None => ' ',
        }
    }
}

/// Draw the board with cell numbers, feature markers and tokens.
///
/// Upper-case `S`/`L` mark where a snake or ladder starts, lower-case where
/// it ends. Tokens are shown by colour letter.
#[must_use]
pub fn draw_board(board: &Board, players: &PlayerMap<Player>) -> String {
    let side = usize::from(BOARD_SIDE);
    let mut grid = vec![vec![String::new(); side]; side];

    for cell in Cell::all() {
        let (row, col) = cell.grid();
        let tokens: String = players
            .iter()
            .filter(|(_, p)| p.position == cell)
            .map(|(id, _)| TokenColor::for_player(id).letter())
            .collect();
        grid[usize::from(row)][usize::from(col)] =
            format!("{:>3}{}{:<4}", cell.value(), marker(board, cell), tokens);
    }

    let rule = format!("+{}\n", "--------+".repeat(side));
    let mut out = rule.clone();
    for row in grid.iter().rev() {
        out.push('|');
        for square in row {
            let _ = write!(out, "{}|", square);
        }
        out.push('\n');
        out.push_str(&rule);
    }

    for (start, end) in board.ladders() {
        let _ = writeln!(out, "Ladder {} -> {}", start, end);
    }
    for (start, end) in board.snakes() {
        let _ = writeln!(out, "Snake  {} -> {}", start, end);
    }
    for (id, player) in players.iter() {
        let key = if player.has_key { " [key]" } else { "" };
        let _ = writeln!(
            out,
            "{} {:<16} Pos: {}{}",
            TokenColor::for_player(id).letter(),
            player.name,
            player.position,
            key
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_colors() {
        assert_eq!(TokenColor::for_player(PlayerId::new(0)), TokenColor::Red);
        assert_eq!(TokenColor::for_player(PlayerId::new(3)), TokenColor::Orange);
        assert_eq!(TokenColor::Blue.to_string(), "blue");
        assert_eq!(TokenColor::Green.letter(), 'G');
    }

    #[test]
    fn test_text_lines() {
        let mut text = TextRenderer::new(vec!["Ada".to_string(), "Bob".to_string()]);
        let ada = PlayerId::new(0);

        text.on_dice_rolled(2);
        text.on_feature(ada, FeatureKind::Ladder, Cell::new(3).unwrap(), Cell::new(22).unwrap());
        text.on_position_changed(ada, Cell::new(22).unwrap());
        text.on_turn_changed(PlayerId::new(1));

        assert_eq!(
            text.drain_lines(),
            vec![
                "Dice: 2",
                "Ada climbed a ladder from 3 to 22",
                "Ada (red) is on 22",
                "Bob's turn",
            ]
        );
        assert!(text.drain_lines().is_empty());
    }

    #[test]
    fn test_unknown_player_falls_back_to_seat_name() {
        let mut text = TextRenderer::new(Vec::new());
        text.on_game_over(PlayerId::new(2));
        assert_eq!(
            text.drain_lines(),
            vec!["Congratulations Player 3! You conquered the board!"]
        );
    }

    #[test]
    fn test_draw_board() {
        let board = Board::from_pairs(&[(17, 4)], &[(3, 22)]).unwrap();
        let mut players = PlayerMap::new(2, |p| Player::new(p.to_string()));
        players[PlayerId::new(1)].position = Cell::new(17).unwrap();

        let drawn = draw_board(&board, &players);
        let lines: Vec<_> = drawn.lines().collect();

        // Top row starts with 100, bottom row starts with 1.
        assert!(lines[1].starts_with("|100 "));
        assert!(lines[19].starts_with("|  1 R   |  2     |  3L    |"));
        assert!(drawn.contains(" 17SB   |"));
        assert!(drawn.contains("  3L    |"));
        assert!(drawn.contains(" 22l    |"));
        assert!(drawn.contains("  4s    |"));
        assert!(drawn.contains("Ladder 3 -> 22"));
        assert!(drawn.contains("Snake  17 -> 4"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("B Player 2") && l.ends_with("Pos: 17")));
    }
}
