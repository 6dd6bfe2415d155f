use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use shared::prize::Prize;
use shared::wheel::sector_bounds;

const SEGMENT_COLORS: [&str; 8] = [
    "#f97316", "#06b6d4", "#8b5cf6", "#ec4899",
    "#22c55e", "#eab308", "#3b82f6", "#ef4444",
];

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub prizes: Vec<Prize>,
    pub rotation: f64,
    pub is_spinning: bool,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map_or(false, |el| el.class_list().contains("dark"))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Sector layout comes from `sector_bounds`, drawn clockwise from the top,
/// so `prize_at` reads the same layout back.
fn draw_wheel(context: &CanvasRenderingContext2d, width: f64, height: f64, props: &WheelCanvasProps) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let dark = is_dark_mode();
    let count = props.prizes.len().max(1);

    context.clear_rect(0.0, 0.0, width, height);

    context.begin_path();
    let glow = if props.is_spinning { 0.25 } else { 0.15 };
    context.set_fill_style_str(&format!("rgba(245, 158, 11, {})", glow));
    let _ = context.arc(center_x, center_y, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(props.rotation * PI / 180.0);

    for (i, prize) in props.prizes.iter().enumerate() {
        let Ok((start_deg, sweep_deg)) = sector_bounds(i, count) else {
            continue;
        };
        // wheel angle 0 sits under the pointer, canvas angle 0 points right
        let start = (start_deg - 90.0).to_radians();
        let sector = sweep_deg.to_radians();
        let end = start + sector;

        context.begin_path();
        context.set_fill_style_str(SEGMENT_COLORS[i % SEGMENT_COLORS.len()]);
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str(if dark { "rgba(255, 255, 255, 0.6)" } else { "rgba(255, 255, 255, 0.9)" });
        context.set_line_width(2.0);
        context.stroke();

        context.save();
        let _ = context.rotate(start + sector / 2.0);
        context.set_text_align("right");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(3.0);
        let _ = context.fill_text(&prize.name, radius - 16.0, 0.0);
        context.restore();
    }
    context.restore();

    context.begin_path();
    context.set_fill_style_str(if dark { "#1f2937" } else { "#ffffff" });
    let _ = context.arc(center_x, center_y, radius * 0.18, 0.0, 2.0 * PI);
    context.fill();

    // pointer, fixed at the top
    context.begin_path();
    context.move_to(center_x, center_y - radius + 10.0);
    context.line_to(center_x - 16.0, center_y - radius - 18.0);
    context.line_to(center_x + 16.0, center_y - radius - 18.0);
    context.close_path();
    context.set_fill_style_str(if props.is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#b45309");
    context.set_line_width(1.5);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let deps = (props.prizes.clone(), props.rotation, props.is_spinning);
        use_effect_with(deps, move |(prizes, rotation, is_spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                match context_2d(&canvas) {
                    Some(context) => {
                        let snapshot = WheelCanvasProps {
                            prizes: prizes.clone(),
                            rotation: *rotation,
                            is_spinning: *is_spinning,
                        };
                        draw_wheel(&context, canvas.width() as f64, canvas.height() as f64, &snapshot);
                    }
                    None => log::warn!("Canvas 2d context unavailable"),
                }
            }
            || ()
        });
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(245, 158, 11, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
