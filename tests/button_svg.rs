//! End-to-end rendering through the SVG surface: one test per button style
//! plus the failure paths a host would hit with bad corner state.

use cornerwise::{
    Bounds, ButtonConfig, ButtonRenderer, ButtonState, ButtonStyle, Corner, CornerSet,
    Orientation, Rgb, ShapeError, SvgSurface, render_button_svg,
};

fn base_config(style: ButtonStyle) -> ButtonConfig {
    let mut config = ButtonConfig::default();
    config.style = style;
    config.caption = "Push".to_string();
    config
}

#[test]
fn rectangular_button_renders_background_body_and_caption() {
    let svg = render_button_svg(&base_config(ButtonStyle::Rectangular), 200.0, 100.0).unwrap();

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
    // Background rect in the back color, then the body path.
    assert!(svg.contains(r#"fill="rgb(255,255,255)""#));
    assert!(svg.contains("<path"));
    assert!(svg.contains("<linearGradient"));
    // Caption shadow and caption.
    assert_eq!(svg.matches("<text").count(), 2);
    assert!(svg.contains(">Push</text>"));
}

#[test]
fn rounded_corners_emit_arc_commands() {
    let mut config = base_config(ButtonStyle::Rectangular);
    config.set_corners(CornerSet::uniform(Corner::new(90, 20)));
    let svg = render_button_svg(&config, 200.0, 100.0).unwrap();

    assert!(svg.contains(" A "));

    // Radius zero stays arc-free.
    let square = render_button_svg(&base_config(ButtonStyle::Rectangular), 200.0, 100.0).unwrap();
    assert!(!square.contains(" A "));
}

#[test]
fn parallelogram_button_slants_with_the_lead_angle() {
    let mut config = base_config(ButtonStyle::Parallelogram);
    let mut corners = config.corners();
    corners.top_left = corners.top_left.with_angle(60);
    config.set_corners(corners);

    let horizontal = render_button_svg(&config, 200.0, 100.0).unwrap();
    config.orientation = Orientation::Vertical;
    let vertical = render_button_svg(&config, 200.0, 100.0).unwrap();

    assert!(horizontal.contains("<path"));
    assert!(vertical.contains("<path"));
    // The two orientations shear along different axes.
    assert_ne!(horizontal, vertical);
}

#[test]
fn elliptical_and_circular_bodies_are_ellipses() {
    let svg = render_button_svg(&base_config(ButtonStyle::Elliptical), 200.0, 100.0).unwrap();
    assert!(svg.contains("<ellipse"));
    assert!(!svg.contains("<path"));

    // Circular squares its control rect to the smaller dimension.
    let mut renderer = ButtonRenderer::default();
    let config = base_config(ButtonStyle::Circular);
    renderer.update(&config, 200.0, 100.0);
    assert_eq!(renderer.control_rect(), Bounds::new(0.0, 0.0, 100.0, 100.0));

    let mut surface = SvgSurface::new(200.0, 100.0);
    renderer.draw(&config, &mut surface).unwrap();
    let svg = surface.finish();
    assert!(svg.contains(r#"cx="49.50" cy="49.50""#));
}

#[test]
fn pressed_state_adds_the_inset_pass() {
    let mut config = base_config(ButtonStyle::Elliptical);
    let released = render_button_svg(&config, 200.0, 100.0).unwrap();
    config.state = ButtonState::Pressed;
    let pressed = render_button_svg(&config, 200.0, 100.0).unwrap();

    assert_eq!(released.matches("<ellipse").count(), 1);
    assert_eq!(pressed.matches("<ellipse").count(), 2);
    // Each body pass registers its own gradient.
    assert_eq!(pressed.matches("<linearGradient").count(), 2);
}

#[test]
fn invalid_corner_sum_fails_the_draw() {
    let mut config = base_config(ButtonStyle::Parallelogram);
    let mut corners = CornerSet::default();
    corners.top_right = corners.top_right.with_angle(91);
    config.set_corners_raw(corners);

    assert_eq!(
        render_button_svg(&config, 200.0, 100.0),
        Err(ShapeError::InvalidCornerConfiguration { sum: 361 })
    );
}

#[test]
fn custom_colors_flow_through_to_the_gradient_stops() {
    let mut config = base_config(ButtonStyle::Rectangular);
    config.button_color = Rgb::new(0, 100, 200);
    let svg = render_button_svg(&config, 200.0, 100.0).unwrap();

    assert!(svg.contains(r#"stop-color="rgb(0,100,200)""#));
    // Darkened end stop keeps 20% of each channel.
    assert!(svg.contains(r#"stop-color="rgb(0,20,40)""#));
}

#[test]
fn serialized_corner_state_survives_a_round_trip() {
    let mut config = base_config(ButtonStyle::Parallelogram);
    let mut corners = config.corners();
    corners.top_left = corners.top_left.with_angle(60).with_radius(3);
    config.set_corners(corners);

    let text = config.corners().to_string();
    let parsed: CornerSet = text.parse().unwrap();
    assert_eq!(parsed, config.corners());

    let mut restored = base_config(ButtonStyle::Parallelogram);
    restored.set_corners_raw(parsed);
    assert_eq!(
        render_button_svg(&restored, 200.0, 100.0).unwrap(),
        render_button_svg(&config, 200.0, 100.0).unwrap()
    );
}
