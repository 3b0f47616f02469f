use egui::{Color32, Rect, Sense, Vec2};
use engine::{square_label, Color, Command, Game, Outcome, Piece, PieceKind, Square};

#[derive(Default)]
pub struct ChessApp {
    game: Game,
    selected_square: Option<Square>,
    legal_moves: Vec<Square>,
    status: String,
}

impl ChessApp {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Board pixel position to square. Row 0 is drawn at the top, as in the text rendering.
fn square_from_coords(x: f32, y: f32, square_size: f32) -> Option<Square> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / square_size) as u8;
    let row = (y / square_size) as u8;

    if col < 8 && row < 8 {
        Some(Square::new(row, col))
    } else {
        None
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("game_info").min_width(180.0).show(ctx, |ui| {
            self.draw_side_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chess");

            let available_size = ui.available_size();
            let board_size = available_size.x.min(available_size.y) - 20.0;
            let square_size = board_size / 8.0;

            let board_rect = Rect::from_min_size(
                ui.cursor().min,
                Vec2::splat(board_size),
            );

            let response = ui.allocate_rect(board_rect, Sense::click());

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let relative_pos = pos - board_rect.min;
                    if let Some(clicked_square) = square_from_coords(
                        relative_pos.x,
                        relative_pos.y,
                        square_size,
                    ) {
                        self.handle_square_click(clicked_square);
                    }
                }
            }

            self.draw_board(ui, board_rect, square_size);
        });
    }
}

impl ChessApp {
    fn clear_selection(&mut self) {
        self.selected_square = None;
        self.legal_moves.clear();
    }

    fn select(&mut self, square: Square) {
        let to_move = self.game.to_move();
        let own_piece = matches!(self.game.board().piece_at(square), Some(piece) if piece.color == to_move);

        if own_piece {
            self.selected_square = Some(square);
            self.legal_moves = self.game.board().legal_destinations(square);
        } else {
            self.clear_selection();
        }
    }

    fn handle_square_click(&mut self, clicked_square: Square) {
        match self.selected_square {
            Some(selected) if selected == clicked_square => self.clear_selection(),
            Some(selected) if self.legal_moves.contains(&clicked_square) => {
                self.run(Command::Move(selected, clicked_square));
                self.clear_selection();
            }
            _ => self.select(clicked_square),
        }
    }

    fn run(&mut self, command: Command) {
        self.status = match self.game.apply(command) {
            Ok(Outcome::Moved { color, start, end, castling }) => {
                let suffix = if castling { " (castling)" } else { "" };
                format!("{} {} → {}{}", color.name(), square_label(start), square_label(end), suffix)
            }
            Ok(Outcome::Undone(mv)) => {
                let (from, to) = mv.squares();
                format!("undo {} → {}", square_label(from), square_label(to))
            }
            Err(e) => e.to_string(),
        };
    }

    fn draw_side_panel(&mut self, ui: &mut egui::Ui) {
        let (white, black) = self.game.board().move_counts();
        ui.heading(format!("{} to move", self.game.to_move().name()));
        ui.label(format!("White moves: {}", white));
        ui.label(format!("Black moves: {}", black));
        ui.separator();

        if ui.button("Undo").clicked() {
            self.clear_selection();
            self.run(Command::Undo);
        }

        if !self.status.is_empty() {
            ui.separator();
            ui.label(self.status.as_str());
        }
    }

    fn draw_board(&self, ui: &mut egui::Ui, board_rect: Rect, square_size: f32) {
        let painter = ui.painter();
        let board = self.game.board();

        for square in Square::all() {
            let is_light = (square.row() + square.col()) % 2 == 0;

            let square_rect = Rect::from_min_size(
                board_rect.min + Vec2::new(square.col() as f32 * square_size, square.row() as f32 * square_size),
                Vec2::splat(square_size),
            );

            let base_color = if is_light {
                Color32::from_rgb(240, 217, 181)
            } else {
                Color32::from_rgb(181, 136, 99)
            };

            let square_color = if Some(square) == self.selected_square {
                Color32::from_rgb(255, 255, 0)
            } else {
                base_color
            };

            painter.rect_filled(square_rect, 0.0, square_color);

            // Legal move indicators
            if self.legal_moves.contains(&square) {
                let center = square_rect.center();

                if board.piece_at(square).is_some() {
                    // Capture square - draw donut
                    let outer_radius = square_size * 0.4;
                    let inner_radius = square_size * 0.25;
                    painter.circle_filled(center, outer_radius, Color32::from_rgba_premultiplied(128, 128, 128, 179));
                    painter.circle_filled(center, inner_radius, square_color);
                } else {
                    let radius = square_size * 0.15;
                    painter.circle_filled(center, radius, Color32::from_rgba_premultiplied(128, 128, 128, 179));
                }
            }

            if let Some(piece) = board.piece_at(square) {
                self.draw_piece(painter, piece, square_rect);
            }
        }

        painter.rect_stroke(board_rect, 0.0, egui::Stroke::new(2.0, Color32::BLACK));
    }

    fn draw_piece(&self, painter: &egui::Painter, piece: &Piece, square_rect: Rect) {
        let center = square_rect.center();
        let size = square_rect.size() * 0.8;

        let piece_char = match (piece.kind, piece.color) {
            (PieceKind::King, Color::White) => "♔",
            (PieceKind::Queen, Color::White) => "♕",
            (PieceKind::Rook, Color::White) => "♖",
            (PieceKind::Bishop, Color::White) => "♗",
            (PieceKind::Knight, Color::White) => "♘",
            (PieceKind::Pawn, Color::White) => "♙",
            (PieceKind::King, Color::Black) => "♚",
            (PieceKind::Queen, Color::Black) => "♛",
            (PieceKind::Rook, Color::Black) => "♜",
            (PieceKind::Bishop, Color::Black) => "♝",
            (PieceKind::Knight, Color::Black) => "♞",
            (PieceKind::Pawn, Color::Black) => "♟",
        };

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            piece_char,
            egui::FontId::proportional(size.x),
            Color32::BLACK,
        );
    }
}
