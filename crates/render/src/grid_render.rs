//! Cell-by-cell drawing: doors first, then walls, then contents on top.

use dungeon_core::{Cell, Direction, Grid, Monster, TreasureKind};
use image::RgbImage;

use crate::canvas::Canvas;
use crate::glyphs::{GLYPH_HEIGHT, text_width};
use crate::style::{RenderStyle, rgb};
use crate::{MAX_PIXELS, RenderError};


/// Pixel origin and side length of one cell.
#[derive(Clone, Copy, Debug)]
struct CellRect {
    x0: i64,
    y0: i64,
    size: i64,
}

impl CellRect {
    fn at(x: usize, y: usize, cell_size: u32) -> Self {
        let size = i64::from(cell_size);
        Self { x0: x as i64 * size, y0: y as i64 * size, size }
    }
}

fn image_size(grid: &Grid, cell_size: u32) -> Result<(u32, u32), RenderError> {
    let too_large = || RenderError::ImageTooLarge {
        width: grid.width(),
        height: grid.height(),
        cell_size,
    };
    let side = |cells: usize| {
        u32::try_from(cells).ok().and_then(|cells| cells.checked_mul(cell_size))
    };
    let (Some(width), Some(height)) = (side(grid.width()), side(grid.height())) else {
        return Err(too_large());
    };
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(too_large());
    }
    Ok((width, height))
}

pub(crate) fn draw_grid(grid: &Grid, style: &RenderStyle) -> Result<RgbImage, RenderError> {
    let (width, height) = image_size(grid, style.cell_size)?;
    let mut canvas = Canvas::new(width, height, rgb(style.background));

    let mut edges = Vec::with_capacity(grid.width() * grid.height() * Direction::ALL.len());
    for (pos, _) in grid.iter() {
        let rect = CellRect::at(pos.x as usize, pos.y as usize, style.cell_size);
        for dir in Direction::ALL {
            edges.push((rect, dir, grid.edge_walled(pos.x, pos.y, dir)?));
        }
    }

    // Walls go over doors so corners stay solid.
    for &(rect, dir, walled) in &edges {
        if !walled {
            draw_door(&mut canvas, rect, dir, style);
        }
    }
    for &(rect, dir, walled) in &edges {
        if walled {
            draw_wall(&mut canvas, rect, dir, style);
        }
    }

    for (pos, cell) in grid.iter() {
        let rect = CellRect::at(pos.x as usize, pos.y as usize, style.cell_size);
        draw_contents(&mut canvas, rect, cell, style);
    }

    Ok(canvas.into_image())
}

/// Start and end of the edge on side `dir`, along with the fixed coordinate.
fn edge_line(rect: CellRect, dir: Direction) -> (i64, i64, i64) {
    let CellRect { x0, y0, size } = rect;
    match dir {
        Direction::North => (x0, x0 + size, y0),
        Direction::South => (x0, x0 + size, y0 + size),
        Direction::West => (y0, y0 + size, x0),
        Direction::East => (y0, y0 + size, x0 + size),
    }
}

/// One stroke along the edge on side `dir`, spanning `span` and centred on `at`.
fn stroke(canvas: &mut Canvas, dir: Direction, span: (i64, i64), at: i64, width: u32, color: [u8; 3]) {
    let (from, to) = span;
    match dir {
        Direction::North | Direction::South => canvas.hline(from, to, at, width, rgb(color)),
        Direction::East | Direction::West => canvas.vline(at, from, to, width, rgb(color)),
    }
}

fn draw_wall(canvas: &mut Canvas, rect: CellRect, dir: Direction, style: &RenderStyle) {
    let (from, to, at) = edge_line(rect, dir);
    stroke(canvas, dir, (from, to), at, style.wall_width, style.wall);
}

/// An open edge shows its outer thirds as door jambs and leaves the middle third clear.
fn draw_door(canvas: &mut Canvas, rect: CellRect, dir: Direction, style: &RenderStyle) {
    let (from, to, at) = edge_line(rect, dir);
    let third = rect.size / 3;
    stroke(canvas, dir, (from, from + third), at, style.wall_width, style.door);
    stroke(canvas, dir, (to - third, to), at, style.wall_width, style.door);
}

fn nemesis_label(monster: &Monster) -> String {
    monster
        .nemesis()
        .iter()
        .map(|nemesis| format!("{}{}", nemesis.class.code(), nemesis.level))
        .collect::<Vec<_>>()
        .join(" ")
}

fn draw_contents(
    canvas: &mut Canvas,
    rect: CellRect,
    cell: &Cell,
    style: &RenderStyle,
) {
    let CellRect { x0, y0, size } = rect;
    let radius = i64::from(style.dot_radius);
    let spacing = 3 * radius;
    let margin = i64::from(style.wall_width) + 2;

    let scale = style.glyph_scale;
    let line_height = i64::from((GLYPH_HEIGHT + 1) * scale);
    for (row, monster) in cell.monsters().iter().enumerate() {
        let label = nemesis_label(monster);
        if label.is_empty() {
            continue;
        }
        let x = x0 + size - margin - i64::from(text_width(&label, scale));
        canvas.draw_text(x, y0 + margin + row as i64 * line_height, &label, scale, rgb(style.text));
    }

    for index in 0..cell.traps().len() {
        let cx = x0 + 2 * radius + index as i64 * spacing;
        canvas.fill_circle(cx, y0 + size - 2 * radius, style.dot_radius, rgb(style.trap));
    }
    for index in 0..cell.monsters().len() {
        let cx = x0 + 2 * radius + index as i64 * spacing;
        canvas.fill_circle(cx, y0 + 2 * radius, style.dot_radius, rgb(style.monster));
    }
    for (index, treasure) in cell.treasures().iter().enumerate() {
        let color = if treasure.kind == TreasureKind::Gems {
            style.gems
        } else {
            style.treasure
        };
        let cx = x0 + size - 2 * radius - index as i64 * spacing;
        canvas.fill_circle(cx, y0 + size - 2 * radius, style.dot_radius, rgb(color));
    }

    if let Some(boss) = cell.boss() {
        let half = size / 2;
        let (sx, sy) = (x0 + size / 4, y0 + size / 4);
        canvas.fill_rect(sx, sy, half, half, rgb(style.boss));

        let digits = boss.get().to_string();
        let digit_scale = scale * 2;
        let text_x = sx + (half - i64::from(text_width(&digits, digit_scale))) / 2;
        let text_y = sy + (half - i64::from(GLYPH_HEIGHT * digit_scale)) / 2;
        canvas.draw_text(text_x, text_y, &digits, digit_scale, rgb(style.text));
    }
}
