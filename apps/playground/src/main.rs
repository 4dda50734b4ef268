use dollar_canvas::input::{Button, InputEvent, Key};
use dollar_canvas::persistence;
use dollar_canvas::render::{DrawCommand, TextAnchor};
use dollar_canvas::{Shell, ShellConfig, ShellEvent};
use macroquad::prelude as mq;

const SAVE_PATH: &str = "dollargame.json";

fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: "Dollar Game".to_string(),
        window_width: 1200,
        window_height: 900,
        ..Default::default()
    }
}

fn color(v: glam::Vec4) -> mq::Color {
    mq::Color::new(v.x, v.y, v.z, v.w)
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();
    mq::prevent_quit();

    let mut shell = Shell::new(ShellConfig::default());
    let mut graph = persistence::load_from_path(SAVE_PATH).unwrap_or_default();
    let mut draw_list = Vec::new();
    let mut last_mouse = mq::mouse_position();

    loop {
        // 1. Map raw device input to the shell's abstract events.
        let mut events = Vec::new();

        let mouse = mq::mouse_position();
        let pos = glam::Vec2::new(mouse.0, mouse.1);
        if mouse != last_mouse {
            last_mouse = mouse;
            events.push(InputEvent::PointerMove(pos));
        }
        if mq::is_mouse_button_pressed(mq::MouseButton::Left) {
            events.push(InputEvent::PointerDown(Button::Left, pos));
        }
        if mq::is_mouse_button_pressed(mq::MouseButton::Right) {
            events.push(InputEvent::PointerDown(Button::Right, pos));
        }
        if mq::is_mouse_button_released(mq::MouseButton::Left) {
            events.push(InputEvent::PointerUp(Button::Left, pos));
        }
        if mq::is_mouse_button_released(mq::MouseButton::Right) {
            events.push(InputEvent::PointerUp(Button::Right, pos));
        }
        for key in mq::get_keys_pressed() {
            events.push(InputEvent::KeyDown(match key {
                mq::KeyCode::R => Key::R,
                mq::KeyCode::S => Key::S,
                _ => Key::Other,
            }));
        }
        if mq::is_quit_requested() {
            events.push(InputEvent::Quit);
        }

        // 2. Feed the shell and act on its side effects.
        let mut quit = false;
        for event in &events {
            for effect in shell.handle_event(event, &mut graph) {
                match effect {
                    ShellEvent::SaveRequested => {
                        if let Err(err) = persistence::save_to_path(SAVE_PATH, &graph) {
                            tracing::warn!(%err, "saving the game failed");
                        }
                    }
                    ShellEvent::QuitRequested => quit = true,
                }
            }
        }
        if quit {
            break;
        }

        // 3. Rebuild the scene only when something changed.
        if shell.needs_redraw() || draw_list.is_empty() {
            draw_list = shell.render(&graph);
        }

        mq::clear_background(color(shell.config.style.background_color));
        for cmd in &draw_list {
            match cmd {
                DrawCommand::Line {
                    start,
                    end,
                    color: c,
                    width,
                } => {
                    mq::draw_line(start.x, start.y, end.x, end.y, *width, color(*c));
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    fill,
                    stroke_width,
                    stroke_color,
                } => {
                    if fill.w > 0.0 {
                        mq::draw_circle(center.x, center.y, *radius, color(*fill));
                    }
                    if let Some(sc) = stroke_color {
                        mq::draw_circle_lines(
                            center.x,
                            center.y,
                            *radius,
                            *stroke_width,
                            color(*sc),
                        );
                    }
                }
                DrawCommand::Text {
                    pos,
                    anchor,
                    text,
                    color: c,
                    size,
                } => {
                    let dims = mq::measure_text(text, None, *size as u16, 1.0);
                    let (x, y) = match anchor {
                        TextAnchor::TopLeft => (pos.x, pos.y + dims.offset_y),
                        TextAnchor::TopRight => (pos.x - dims.width, pos.y + dims.offset_y),
                        TextAnchor::Center => {
                            (pos.x - dims.width * 0.5, pos.y + dims.offset_y * 0.5)
                        }
                    };
                    mq::draw_text(text, x, y, *size, color(*c));
                }
            }
        }

        mq::next_frame().await
    }
}
