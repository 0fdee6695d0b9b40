//! Canvas 2D implementation of [`Surface`]

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Align, Sheet, Surface, TextStyle};
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    images: HashMap<Sheet, HtmlImageElement>,
}

impl CanvasSurface {
    /// Grab the 2D context and every sprite sheet in the page.
    ///
    /// Returns `None` if the canvas has no 2D context. Missing images are
    /// logged and simply not drawn.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_stroke_style_str("black");

        let document = web_sys::window()?.document()?;
        let mut images = HashMap::new();
        for sheet in Sheet::all() {
            let image = document
                .get_element_by_id(sheet.element_id())
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
            match image {
                Some(image) => {
                    images.insert(sheet, image);
                }
                None => log::warn!("Missing <img id=\"{}\">", sheet.element_id()),
            }
        }
        log::info!("Canvas surface ready ({} sprite sheets)", images.len());

        Some(Self { ctx, images })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_sprite(&mut self, sheet: Sheet, src: Rect, dst: Rect) {
        let Some(image) = self.images.get(&sheet) else {
            return;
        };
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                src.x as f64,
                src.y as f64,
                src.width as f64,
                src.height as f64,
                dst.x as f64,
                dst.y as f64,
                dst.width as f64,
                dst.height as f64,
            );
    }

    fn draw_sprite_rotated(&mut self, sheet: Sheet, src: Rect, center: Vec2, size: f32, angle: f32) {
        self.ctx.save();
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        let _ = self.ctx.rotate(angle as f64);
        let half = size * 0.5;
        self.draw_sprite(sheet, src, Rect::new(-half, -half, size, size));
        self.ctx.restore();
    }

    fn draw_image(&mut self, sheet: Sheet, pos: Vec2) {
        if let Some(image) = self.images.get(&sheet) {
            let _ = self
                .ctx
                .draw_image_with_html_image_element(image, pos.x as f64, pos.y as f64);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ctx.stroke_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_font(&format!("{}px {}", style.size, style.family));
        ctx.set_text_align(match style.align {
            Align::Left => "left",
            Align::Center => "center",
        });
        if style.shadow {
            ctx.set_shadow_offset_x(2.0);
            ctx.set_shadow_offset_y(2.0);
            ctx.set_shadow_color("black");
        }
        ctx.set_fill_style_str(style.color);
        let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
        ctx.restore();
    }
}
