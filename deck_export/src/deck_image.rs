//! Offscreen deck list renderer used for screenshots.
//!
//! Each card becomes one row: a mana gem, a rarity stripe, one tick per
//! mana and one pip per copy on the right edge.

use crate::error::{ExportError, ExportResult};
use crate::services::{Dpi, RenderSurface};
use hs_common::{Card, Rarity};
use image::{Rgba, RgbaImage};
use std::path::Path;

// Sizes at 96 DPI
const ROW_WIDTH: f64 = 240.0;
const ROW_HEIGHT: f64 = 30.0;
const PADDING: f64 = 4.0;
const STRIPE_WIDTH: f64 = 6.0;
const TICK_WIDTH: f64 = 3.0;
const TICK_GAP: f64 = 2.0;
const MAX_TICKS: u32 = 12;

const BACKGROUND: Rgba<u8> = Rgba([30, 30, 30, 255]);
const ROW_SEPARATOR: Rgba<u8> = Rgba([60, 60, 60, 255]);
const MANA_GEM: Rgba<u8> = Rgba([42, 110, 216, 255]);
const MANA_TICK: Rgba<u8> = Rgba([235, 235, 235, 255]);
const COPY_PIP: Rgba<u8> = Rgba([230, 190, 60, 255]);

fn rarity_color(rarity: Rarity) -> Rgba<u8> {
    match rarity {
        Rarity::Common => Rgba([200, 200, 200, 255]),
        Rarity::Rare => Rgba([40, 120, 255, 255]),
        Rarity::Epic => Rgba([170, 60, 220, 255]),
        Rarity::Legendary => Rgba([255, 140, 0, 255]),
        Rarity::Unknown => Rgba([90, 90, 90, 255]),
    }
}

fn scaled(value: f64, scale: f64) -> u32 {
    (value * scale).round().max(1.0) as u32
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = x.saturating_add(width).min(img.width());
    let y_end = y.saturating_add(height).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Draws the deck list at `dpi`. An empty deck still yields a one-row image.
pub fn render_deck_image(cards: &[Card], dpi: Dpi) -> RgbaImage {
    let scale_x = dpi.x / Dpi::BASE;
    let scale_y = dpi.y / Dpi::BASE;

    let width = scaled(ROW_WIDTH, scale_x);
    let row_height = scaled(ROW_HEIGHT, scale_y);
    let rows = cards.len().max(1) as u32;
    let mut img = RgbaImage::from_pixel(width, row_height * rows, BACKGROUND);

    let pad_x = scaled(PADDING, scale_x);
    let pad_y = scaled(PADDING, scale_y);
    let inner_height = row_height.saturating_sub(2 * pad_y).max(1);
    let stripe = scaled(STRIPE_WIDTH, scale_x);
    let tick = scaled(TICK_WIDTH, scale_x);
    let tick_step = tick + scaled(TICK_GAP, scale_x);

    for (i, card) in cards.iter().enumerate() {
        let top = i as u32 * row_height;
        fill_rect(&mut img, 0, top + row_height - 1, width, 1, ROW_SEPARATOR);

        // mana gem is square
        let gem = inner_height;
        fill_rect(&mut img, pad_x, top + pad_y, gem, gem, MANA_GEM);

        let stripe_x = pad_x * 2 + gem;
        fill_rect(&mut img, stripe_x, top + pad_y, stripe, inner_height, rarity_color(card.rarity()));

        let ticks_x = stripe_x + stripe + pad_x;
        for t in 0..card.cost.min(MAX_TICKS) {
            fill_rect(&mut img, ticks_x + t * tick_step, top + pad_y, tick, inner_height, MANA_TICK);
        }

        // pips stay right of the widest tick column
        let pip = inner_height / 2;
        let pip_step = pip + pad_x;
        let pip_room = width.saturating_sub(ticks_x + MAX_TICKS * tick_step);
        let max_pips = pip_room / pip_step.max(1);
        for c in 0..card.count.min(max_pips) {
            let x = width.saturating_sub(pad_x + (c + 1) * pip_step);
            fill_rect(&mut img, x, top + pad_y + pip / 2, pip, pip, COPY_PIP);
        }
    }

    img
}

/// Render surface that draws into memory and writes PNG files
pub struct DeckImageSurface {
    scale: f64,
    cards: Vec<Card>,
    open: bool,
}

impl DeckImageSurface {
    /// `scale` is the device scale the image is drawn at (1.0 = 96 DPI)
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            cards: Vec::new(),
            open: false,
        }
    }
}

impl Default for DeckImageSurface {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RenderSurface for DeckImageSurface {
    fn open(&mut self, cards: &[Card]) -> ExportResult<()> {
        self.cards = cards.to_vec();
        self.open = true;
        Ok(())
    }

    fn scale_factor(&self) -> Option<(f64, f64)> {
        self.open.then_some((self.scale, self.scale))
    }

    fn capture(&mut self, dpi: Dpi, path: &Path) -> ExportResult<()> {
        if !self.open {
            return Err(ExportError::Export("render surface is closed".to_string()));
        }
        let img = render_deck_image(&self.cards, dpi);
        img.save(path)?;
        log::debug!(
            "Rendered {}x{} deck image to {}",
            img.width(),
            img.height(),
            path.display()
        );
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
        self.cards.clear();
    }
}
