//! GridView: maps the simulation grid and status into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout:
//!
//! ```text
//! row 0        status line (state, generation, population, speed, size, history)
//! rows 1..     bordered grid, horizontally centered, clipped to the viewport
//! last row     message line (last status message or key help)
//! ```

use crate::core::{Grid, StatusSnapshot};
use crate::fb::FrameBuffer;
use crate::theme::{Palette, Theme};
use crate::types::BoardLayout;

pub const HELP_TEXT: &str =
    "space run/pause  n step  click/drag edit  u/y undo/redo  c clear  r random  +/- speed  [/] size  s/o save/load  t theme  q quit";

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

pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    theme: Theme,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            theme: Theme::Dark,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            theme: Theme::Dark,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Where the grid lands for a given grid size and viewport, and how much
    /// of it is drawn.
    ///
    /// Shared with the pointer mapper so clicks hit the drawn cell. Only whole
    /// cells are drawn; rows that would reach the message line are clipped.
    pub fn layout(&self, grid_width: usize, grid_height: usize, viewport: Viewport) -> BoardLayout {
        let frame_w = (grid_width as u64 * self.cell_w as u64 + 2).min(u16::MAX as u64) as u16;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_x = start_x + 1;
        let origin_y = 2;
        let bottom = viewport.height.saturating_sub(1);

        let fit_cols = viewport.width.saturating_sub(origin_x) / self.cell_w;
        let fit_rows = bottom.saturating_sub(origin_y) / self.cell_h;
        BoardLayout {
            origin_x,
            origin_y,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            cols: fit_cols.min(grid_width.min(u16::MAX as usize) as u16),
            rows: fit_rows.min(grid_height.min(u16::MAX as usize) as u16),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        grid: &Grid,
        status: &StatusSnapshot,
        message: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> BoardLayout {
        let palette = self.theme.palette();
        fb.resize(viewport.width, viewport.height);
        fb.fill(crate::fb::Glyph::new(' ', palette.background));

        let layout = self.layout(grid.width(), grid.height(), viewport);
        if viewport.height == 0 {
            return layout;
        }

        self.draw_status(fb, status, &palette);

        let frame_x = layout.origin_x - 1;
        let frame_y = layout.origin_y - 1;
        let frame_w = (grid.width() as u64 * self.cell_w as u64 + 2).min(u16::MAX as u64) as u16;
        let frame_h = (grid.height() as u64 * self.cell_h as u64 + 2).min(u16::MAX as u64) as u16;
        // Keep the message row free.
        let bottom = viewport.height.saturating_sub(1);

        self.draw_border(fb, frame_x, frame_y, frame_w, frame_h, bottom, &palette);
        self.draw_cells(fb, grid, &layout, &palette);

        fb.put_str(0, bottom, message.unwrap_or(HELP_TEXT), palette.message);
        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        grid: &Grid,
        status: &StatusSnapshot,
        message: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, status, message, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, st: &StatusSnapshot, palette: &Palette) {
        let line = format!(
            "{}  gen {}  pop {}  {}ms  {}x{}  undo {} redo {}  [{}]",
            st.state_label(),
            st.generation,
            st.population,
            st.interval_ms,
            st.width,
            st.height,
            st.undo_depth,
            st.redo_depth,
            self.theme.name(),
        );
        fb.put_str(0, 0, &line, palette.status);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        bottom: u16,
        palette: &Palette,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        let style = palette.border;
        let right = x.saturating_add(w - 1);
        let base = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', style);
        }

        // Side walls stop above the message row when the grid is clipped.
        let last_wall_row = base.min(bottom);
        for row in y + 1..last_wall_row {
            fb.put_char(x, row, '│', style);
            fb.put_char(right, row, '│', style);
        }

        if base < bottom {
            fb.put_char(x, base, '└', style);
            fb.put_char(right, base, '┘', style);
            for dx in 1..w - 1 {
                fb.put_char(x.saturating_add(dx), base, '─', style);
            }
        }
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, grid: &Grid, layout: &BoardLayout, palette: &Palette) {
        let cw = self.cell_w as usize;
        let ch = self.cell_h as usize;

        for (y, row) in grid
            .cells()
            .chunks(grid.width())
            .enumerate()
            .take(layout.rows as usize)
        {
            for (x, cell) in row.iter().enumerate().take(layout.cols as usize) {
                let (glyph, style) = if cell.is_alive() {
                    ('█', palette.alive)
                } else {
                    ('·', palette.dead)
                };
                let px = layout.origin_x as usize + x * cw;
                let py = layout.origin_y as usize + y * ch;
                for dy in 0..ch {
                    for dx in 0..cw {
                        // Dead cells show a single dot per cell, not per column.
                        let c = if !cell.is_alive() && dx > 0 { ' ' } else { glyph };
                        fb.put_char((px + dx) as u16, (py + dy) as u16, c, style);
                    }
                }
            }
        }
    }
}
