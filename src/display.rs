/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only projects the
/// simulation's render list onto terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use galaxian::compute::render_list;
use galaxian::entities::{
    self, Background, EntityKind, GameState, GameStatus, Mode, RenderItem,
};
use glam::Vec3;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER_SKY: Color = Color::DarkBlue;
const C_BORDER_SPACE: Color = Color::DarkMagenta;
const C_HUD: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Stage projection ──────────────────────────────────────────────────────────

/// Visible stage in world units.
const STAGE_HALF_WIDTH: f32 = 4.0;
const STAGE_HALF_HEIGHT: f32 = 3.5;

/// Maps world x/y onto the bordered play area. Rows 0 and `height - 1` hold
/// the HUD and the controls hint, the border sits just inside them.
struct Projection {
    width: u16,
    height: u16,
}

impl Projection {
    fn new() -> std::io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Projection { width, height })
    }

    fn play_left(&self) -> f32 {
        1.0
    }
    fn play_right(&self) -> f32 {
        self.width.saturating_sub(2) as f32
    }
    fn play_top(&self) -> f32 {
        2.0
    }
    fn play_bottom(&self) -> f32 {
        self.height.saturating_sub(3) as f32
    }

    /// World → cell. The camera looks from −z, so world +x is screen-left.
    fn cell(&self, position: Vec3) -> Option<(u16, u16)> {
        let u = (STAGE_HALF_WIDTH - position.x) / (2.0 * STAGE_HALF_WIDTH);
        let v = (STAGE_HALF_HEIGHT - position.y) / (2.0 * STAGE_HALF_HEIGHT);
        let col = self.play_left() + u * (self.play_right() - self.play_left());
        let row = self.play_top() + v * (self.play_bottom() - self.play_top());
        if col < self.play_left()
            || col > self.play_right()
            || row < self.play_top()
            || row > self.play_bottom()
        {
            return None;
        }
        Some((col.round() as u16, row.round() as u16))
    }
}

fn to_terminal(color: entities::Color) -> Color {
    let [r, g, b, _] = color.0;
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let projection = Projection::new()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &projection, state.mode.background())?;
    draw_hud(out, &projection, state)?;

    for item in render_list(state) {
        draw_item(out, &projection, &item)?;
    }

    draw_controls_hint(out, &projection)?;

    match state.status {
        GameStatus::Running => {}
        GameStatus::GameOver => draw_banner(out, &projection, "GAME  OVER", Color::Red)?,
        GameStatus::Won => draw_banner(out, &projection, "YOU WIN!!!", Color::Green)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, projection.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(
    out: &mut W,
    projection: &Projection,
    background: Background,
) -> std::io::Result<()> {
    let w = projection.width as usize;
    let h = projection.height;

    let color = match background {
        Background::Sky => C_BORDER_SKY,
        Background::Space => C_BORDER_SPACE,
    };
    out.queue(style::SetForegroundColor(color))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(projection.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    projection: &Projection,
    state: &GameState,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Aliens:{:>3}", state.aliens.len())))?;

    let (mode_str, mode_color) = match state.mode {
        Mode::Normal => ("[ NORMAL ]", Color::Green),
        Mode::Hard => ("[ HARD ]", Color::Red),
    };
    let mx = (projection.width / 2).saturating_sub(mode_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(mx, 0))?;
    out.queue(style::SetForegroundColor(mode_color))?;
    out.queue(Print(mode_str))?;

    let backdrop = format!("bg: {}", state.mode.background().asset());
    let bx = projection
        .width
        .saturating_sub(backdrop.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(bx, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(backdrop))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn sprite(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Ship => "/▲\\",
        EntityKind::Alien => "«▼»",
        EntityKind::PlayerShot => "║",
        EntityKind::AlienShot => "↓",
    }
}

fn draw_item<W: Write>(
    out: &mut W,
    projection: &Projection,
    item: &RenderItem,
) -> std::io::Result<()> {
    let Some((col, row)) = projection.cell(item.position) else {
        return Ok(());
    };
    let glyph = sprite(item.kind);
    let half = glyph.chars().count() as u16 / 2;
    out.queue(cursor::MoveTo(col.saturating_sub(half).max(1), row))?;
    out.queue(style::SetForegroundColor(to_terminal(item.color)))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, projection: &Projection) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, projection.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE : Shoot   ! / M : Mode   Q : Quit",
    ))?;
    Ok(())
}

// ── End-of-game overlay ───────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    projection: &Projection,
    message: &str,
    color: Color,
) -> std::io::Result<()> {
    let lines = [
        "╔════════════════════╗".to_string(),
        format!("║{:^20}║", message),
        "╚════════════════════╝".to_string(),
    ];

    let cx = projection.width / 2;
    let total_rows = lines.len() as u16 + 1;
    let start_row = (projection.height / 2).saturating_sub(total_rows / 2);

    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(line))?;
    }

    let hint = "R - Play Again  Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + lines.len() as u16))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
