use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::BarChartEngine;
use crate::core::Viewport;
use crate::render::{CairoContextRenderer, Renderer};

/// Pixels scrolled per wheel/touchpad scroll unit.
pub const SCROLL_STEP_PX: f64 = 32.0;

/// Binds a [`BarChartEngine`] to a `gtk4::DrawingArea`.
///
/// The draw callback resyncs the viewport to the allocated size and renders
/// a fresh frame; a scroll controller drives the horizontal bar strip.
pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: Rc<RefCell<BarChartEngine<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    #[must_use]
    pub fn new(engine: BarChartEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        drawing_area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |_area, context, width, height| {
                let mut engine = engine.borrow_mut();
                if let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) {
                    let viewport = Viewport::new(width, height);
                    if viewport.is_valid() && engine.viewport() != viewport {
                        if let Err(err) = engine.set_viewport(viewport) {
                            warn!(error = %err, "failed to resize bar chart");
                            return;
                        }
                    }
                }
                if let Err(err) = engine.render_on_cairo_context(context) {
                    warn!(error = %err, "failed to draw bar chart");
                }
            }
        });

        let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::BOTH_AXES);
        scroll.connect_scroll({
            let engine = Rc::clone(&engine);
            let area = drawing_area.downgrade();
            move |_controller, dx, dy| {
                let delta = if dx != 0.0 { dx } else { dy };
                engine.borrow_mut().scroll_by(delta * SCROLL_STEP_PX);
                if let Some(area) = area.upgrade() {
                    area.queue_draw();
                }
                gtk::glib::Propagation::Stop
            }
        });
        drawing_area.add_controller(scroll);

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<BarChartEngine<R>>> {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Schedules a redraw after the engine state changed.
    pub fn queue_draw(&self) {
        self.drawing_area.queue_draw();
    }
}
