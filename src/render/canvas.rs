//! Canvas 2D backend

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawCommand, Surface, TextAlign};
use crate::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::platform::SurfaceError;

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas by element id and acquire its 2D context
    pub fn from_element_id(id: &str) -> Result<Self, SurfaceError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SurfaceError::NoDocument)?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| SurfaceError::MissingElement(id.to_string()))?
            .dyn_into()
            .map_err(|_| SurfaceError::NotACanvas(id.to_string()))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(SurfaceError::NoContext)?
            .dyn_into()
            .map_err(|_| SurfaceError::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to the parent element, or 800x600 if it has none
    pub fn fit_to_parent(&self) -> Vec2 {
        let (w, h) = self
            .canvas
            .parent_element()
            .map(|p| (p.client_width(), p.client_height()))
            .filter(|&(w, h)| w > 0 && h > 0)
            .map(|(w, h)| (w as u32, h as u32))
            .unwrap_or((DEFAULT_SURFACE_WIDTH as u32, DEFAULT_SURFACE_HEIGHT as u32));
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        Vec2::new(w as f32, h as f32)
    }
}

fn css_rgba(color: [f32; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        color[3]
    )
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn execute(&mut self, commands: &[DrawCommand]) {
        let ctx = &self.ctx;
        for cmd in commands {
            match cmd {
                DrawCommand::Clear { size } => {
                    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    glow,
                } => {
                    let opaque = css_rgba([color[0], color[1], color[2], 1.0]);
                    if *glow > 0.0 {
                        ctx.set_shadow_blur(*glow as f64);
                        ctx.set_shadow_color(&opaque);
                    }
                    ctx.set_global_alpha(color[3] as f64);
                    ctx.set_fill_style_str(&opaque);
                    ctx.begin_path();
                    if let Err(e) = ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    ) {
                        log::warn!("arc failed: {:?}", e);
                        continue;
                    }
                    ctx.fill();
                    ctx.set_global_alpha(1.0);
                    ctx.set_shadow_blur(0.0);
                }
                DrawCommand::Text {
                    text,
                    pos,
                    color,
                    font_px,
                    align,
                } => {
                    ctx.set_fill_style_str(&css_rgba(*color));
                    ctx.set_font(&format!("bold {}px monospace", font_px));
                    ctx.set_text_align(match align {
                        TextAlign::Left => "left",
                        TextAlign::Center => "center",
                    });
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }
}
