//! GameView: maps a [`TermBoard`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::board::{TermBoard, Tile};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Phase;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const FELT: CellStyle = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(20, 60, 40));
const CARD_BACK: CellStyle = CellStyle::new(Rgb::new(120, 140, 200), Rgb::new(40, 50, 110));
const CARD_FACE: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(235, 235, 220));
const CARD_MATCHED: CellStyle = CellStyle::new(Rgb::new(90, 90, 90), Rgb::new(150, 170, 150));
const CURSOR: CellStyle = CellStyle::new(Rgb::new(255, 210, 60), Rgb::new(20, 60, 40));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const BANNER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// A lightweight terminal renderer for the card grid.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Felt between tiles and around the grid.
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x3 reads as roughly square with typical terminal glyphs.
        Self {
            tile_w: 5,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered grid for `board`.
    pub fn frame_size(&self, board: &TermBoard) -> (u16, u16) {
        let cols = board.columns();
        let rows = board.rows();
        let inner_w = cols * (self.tile_w + self.gap) + self.gap;
        let inner_h = rows * (self.tile_h + self.gap) + self.gap;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the board into an existing framebuffer.
    pub fn render_into(
        &self,
        board: &TermBoard,
        phase: Phase,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(board);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', FELT);
        draw_border(fb, start_x, start_y, frame_w, frame_h, BORDER);

        let cols = board.columns().max(1) as usize;
        for (slot, handle) in board.order().iter().enumerate() {
            let Some(tile) = board.tile(*handle) else {
                continue;
            };
            let col = (slot % cols) as u16;
            let row = (slot / cols) as u16;
            let px = start_x + 1 + self.gap + col * (self.tile_w + self.gap);
            let py = start_y + 1 + self.gap + row * (self.tile_h + self.gap);
            self.draw_tile(fb, px, py, tile);
            if slot == board.cursor() && phase == Phase::Selecting {
                self.draw_cursor(fb, px, py);
            }
        }

        self.draw_side_panel(fb, board, viewport, start_x, start_y, frame_w);

        let lines: Vec<String> = match phase {
            Phase::NotStarted => vec!["PRESS S TO START".to_string()],
            Phase::Won => {
                let mut lines = vec!["YOU WON".to_string()];
                if let Some(summary) = board.summary() {
                    lines.push(summary.to_string());
                }
                lines.push("PLAY AGAIN? (Y/N)".to_string());
                lines
            }
            Phase::AwaitingRestart => vec!["PLAY AGAIN? (Y/N)".to_string()],
            Phase::Selecting | Phase::Resolving => Vec::new(),
        };
        if !lines.is_empty() {
            draw_banner(fb, start_x, start_y, frame_w, frame_h, &lines);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &TermBoard, phase: Phase, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, phase, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, px: u16, py: u16, tile: &Tile) {
        let (fill, style) = match (tile.face_up, tile.enabled) {
            (false, _) => ('░', CARD_BACK),
            (true, true) => (' ', CARD_FACE.bold()),
            (true, false) => (' ', CARD_MATCHED.dim()),
        };
        fb.fill_rect(px, py, self.tile_w, self.tile_h, fill, style);
        if tile.face_up {
            fb.put_char(
                px + self.tile_w / 2,
                py + self.tile_h / 2,
                tile.face.symbol(),
                style,
            );
        }
    }

    /// Bracket the tile on the felt on either side.
    fn draw_cursor(&self, fb: &mut FrameBuffer, px: u16, py: u16) {
        if self.gap == 0 {
            return;
        }
        let mid = py + self.tile_h / 2;
        fb.put_char(px - 1, mid, '▶', CURSOR.bold());
        fb.put_char(px + self.tile_w, mid, '◀', CURSOR.bold());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        board: &TermBoard,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        for (label, value) in [
            ("MOVES", board.moves().to_string()),
            ("SCORE", board.score().to_string()),
            ("TIME", board.elapsed().to_string()),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_str(panel_x, y.saturating_add(1), &value, VALUE);
            y = y.saturating_add(3);
        }

        let help = CellStyle { dim: true, ..VALUE };
        for line in ["arrows  move", "space   flip", "s start r reset", "q       quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, bottom, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(right, y + dy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

/// Centered block of text over the grid, one line per entry.
fn draw_banner(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    lines: &[String],
) {
    let top = start_y
        .saturating_add(frame_h / 2)
        .saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        let text_w = line.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, top.saturating_add(i as u16), line, BANNER);
    }
}
