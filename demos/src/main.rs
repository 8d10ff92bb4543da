// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end planning demo.
//!
//! Drives the planner through a typical session (type a diagonal, fill in
//! the room, validate), lays out the cross-section for an 800x600 container,
//! and writes the handoff SVG next to the working directory. Also prints a
//! short summary of the 3D scene a collaborator would receive.

use kurbo::Size;
use sightline_model::planner::Planner;
use sightline_model::room::RoomField;
use sightline_model::screen::ScreenField;
use sightline_scene::layout_scene;
use sightline_units::Unit;

fn main() -> std::io::Result<()> {
    let mut planner = Planner::new();

    // A 55" screen, entered in inches.
    planner.set_unit(Unit::Imperial);
    planner.edit_screen_field(ScreenField::Diagonal, "55", 0);
    let dims = planner.poll(1_000).expect("debounce fired");
    println!(
        "screen: {:.1} x {:.1} cm (diagonal {:.1} cm)",
        dims.width_cm, dims.height_cm, dims.diagonal_cm
    );

    // Room entered in meters, mount height in centimeters.
    for (field, text) in [
        (RoomField::Width, "4"),
        (RoomField::Depth, "5"),
        (RoomField::Height, "2.44"),
        (RoomField::MountHeight, "100"),
    ] {
        planner.edit_room_field(field, text).expect("well formed");
    }

    assert!(planner.validate(), "all seven fields are positive");
    let snapshot = planner.snapshot().expect("validated");

    let diagram = sightline_diagram::layout(
        &snapshot.screen,
        &snapshot.room,
        Some(Size::new(800.0, 600.0)),
    );
    if diagram.screen_exceeds_room_height {
        println!("warning: the mounted screen pokes above the ceiling");
    }
    let svg = sightline_diagram_svg::to_svg(&diagram);
    std::fs::write("handoff.svg", &svg)?;
    println!(
        "wrote handoff.svg ({} primitives, canvas {} x {})",
        diagram.primitives.len(),
        diagram.canvas.width,
        diagram.canvas.height
    );

    let scene = layout_scene(&snapshot.screen, &snapshot.room);
    println!(
        "scene: {} nodes, camera at ({:.0}, {:.0}, {:.0})",
        scene.nodes.len(),
        scene.camera.eye.x,
        scene.camera.eye.y,
        scene.camera.eye.z
    );

    Ok(())
}
