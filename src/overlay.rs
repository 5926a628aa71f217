//! DOM overlay control: the fireworks burst layer, the cursor-follow
//! halo and the parallax background offset. Burst elements are purely
//! declarative once spawned; their CSS animations run unattended and
//! may outlive the active window (accepted tail-off).

use crate::constants::*;
use crate::core::constants::NARROW_VIEWPORT_PX;
use crate::core::{spark_layout, BurstPlan};
use web_sys as web;

/// Render one trigger's bursts into the fireworks layer and reveal it.
pub fn show_bursts(document: &web::Document, bursts: &[BurstPlan], viewport_width: f32) {
    let Some(layer) = document.get_element_by_id(FIREWORKS_LAYER_ID) else {
        return;
    };
    let travel = if viewport_width < NARROW_VIEWPORT_PX {
        SPARK_TRAVEL_NARROW_PX
    } else {
        SPARK_TRAVEL_WIDE_PX
    };
    let sparks = spark_layout();

    let mut html = String::new();
    for b in bursts {
        html.push_str(&format!(
            "<div class=\"burst\" style=\"left:{:.2}%;top:{:.2}%;animation-delay:{:.2}s;animation-duration:{:.2}s\"><div class=\"burst-core\"></div>",
            b.left_pct, b.top_pct, b.delay_sec, b.duration_sec
        ));
        for s in &sparks {
            html.push_str(&format!(
                "<div class=\"spark\" style=\"transform:rotate({:.0}deg) translateY(-{:.0}px);animation-delay:{:.2}s\"></div>",
                s.angle_deg, travel, s.reveal_delay_sec
            ));
        }
        html.push_str("</div>");
    }
    layer.set_inner_html(&html);
    _ = layer.class_list().remove_1("hidden");
}

/// Tear the burst layer down at the end of the active window.
pub fn clear_bursts(document: &web::Document) {
    if let Some(layer) = document.get_element_by_id(FIREWORKS_LAYER_ID) {
        _ = layer.class_list().add_1("hidden");
        layer.set_inner_html("");
    }
}

/// Center the halo element on the pointer.
pub fn move_cursor_halo(document: &web::Document, x: f64, y: f64) {
    if let Some(el) = document.get_element_by_id(CURSOR_HALO_ID) {
        let half = CURSOR_HALO_SIZE_PX / 2.0;
        _ = el.set_attribute(
            "style",
            &format!("left:{:.1}px;top:{:.1}px", x - half, y - half),
        );
    }
}

/// Shift the background layer against the scroll direction.
pub fn apply_parallax(document: &web::Document, scroll_y: f64) {
    if let Some(el) = document.get_element_by_id(PARALLAX_LAYER_ID) {
        _ = el.set_attribute(
            "style",
            &format!("transform:translateY({:.1}px)", scroll_y * PARALLAX_FACTOR),
        );
    }
}
