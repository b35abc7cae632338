//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Engine, Shape};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Cell;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the engine snapshot into a framebuffer. `paused` belongs to
    /// the driver (the engine has no pause state of its own).
    pub fn render(&self, engine: &Engine, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let rows = engine.board().rows() as u16;
        let cols = engine.board().cols() as u16;
        let board_px_w = cols * self.cell_w;
        let board_px_h = rows * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells over the checkerboard backdrop. The guard row is
        // engine bookkeeping and stays hidden.
        for y in 0..rows {
            for x in 0..cols {
                match engine.board().get(x as i32, y as i32) {
                    Some(0) | None => self.draw_empty_cell(&mut fb, start_x, start_y, x, y),
                    Some(value) => self.draw_board_cell(&mut fb, start_x, start_y, x, y, value),
                }
            }
        }

        // Falling stone.
        let (sx, sy) = engine.stone_pos();
        for (cx, cy, value) in engine.stone().occupied() {
            let x = sx + cx as i32;
            let y = sy + cy as i32;
            if x >= 0 && x < cols as i32 && y >= 0 && y < rows as i32 {
                self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, value);
            }
        }

        self.draw_side_panel(&mut fb, engine, viewport, start_x, start_y, frame_w);

        if engine.game_over() {
            let score_line = format!("SCORE {}", engine.score());
            self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", &score_line, "PRESS SPACE TO RESTART"],
            );
        } else if paused {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, &["PAUSED"]);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        // Subtle checkerboard so the playfield reads as a grid.
        let bg = if x % 2 == y % 2 {
            Rgb::new(35, 35, 35)
        } else {
            Rgb::new(0, 0, 0)
        };
        let style = CellStyle {
            fg: bg,
            bg,
            bold: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, ' ', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        value: Cell,
    ) {
        let style = CellStyle {
            fg: cell_color(value),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        engine: &Engine,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y.saturating_add(1);
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_next_stone(fb, engine.next_stone(), panel_x, y);
        y = y.saturating_add(3);

        for (name, amount) in [
            ("SCORE", engine.score()),
            ("LEVEL", engine.level()),
            ("LINES", engine.lines()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), &format!("{amount}"), value);
            y = y.saturating_add(3);
        }
    }

    fn draw_next_stone(&self, fb: &mut FrameBuffer, stone: &Shape, x: u16, y: u16) {
        for (cx, cy, value) in stone.occupied() {
            let style = CellStyle {
                fg: cell_color(value),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            };
            fb.fill_rect(
                x + cx as u16 * self.cell_w,
                y + cy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let first_y = start_y
            .saturating_add(frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, first_y.saturating_add(i as u16), line, style);
        }
    }
}

/// Stone colors by cell value, matching the classic palette.
fn cell_color(value: Cell) -> Rgb {
    match value {
        1 => Rgb::new(255, 85, 85),
        2 => Rgb::new(100, 200, 115),
        3 => Rgb::new(120, 108, 245),
        4 => Rgb::new(255, 140, 50),
        5 => Rgb::new(50, 120, 52),
        6 => Rgb::new(146, 202, 73),
        _ => Rgb::new(150, 161, 218),
    }
}

/// Columns reserved to the right of the playfield for the side panel.
const SIDE_PANEL_W: u16 = 14;
