//! SVG preview output for small scenes

use pretty_assertions::assert_eq;

use edge_router::{render, render_with_config, route_scene, RenderConfig, SvgConfig};

const COMPACT_SCENE: &str = r#"
[[nodes]]
id = "a"

[[nodes]]
id = "b"
position = { x = 4.0 }

[[edges]]
from = "a"
to = "b"
from_side = "right"
to_side = "left"
style = { routing = "straight", divisions = 1, end_arrow = false }
"#;

#[test]
fn test_compact_scene_snapshot() {
    let config = RenderConfig::new().with_svg(SvgConfig::default().inline());
    let svg = render_with_config(COMPACT_SCENE, &config).unwrap();
    insta::assert_snapshot!(svg, @r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-40.00 -40.00 240.00 80.00"><rect id="a" class="er-node" x="-20.00" y="-20.00" width="40.00" height="40.00"/><rect id="b" class="er-node" x="140.00" y="-20.00" width="40.00" height="40.00"/><path class="er-edge" d="M20.00 0.00 L140.00 0.00" fill="none" stroke-width="2.00"/></svg>"#);
}

#[test]
fn test_scene_points_follow_node_faces() {
    let (_, routed) = route_scene(COMPACT_SCENE, &RenderConfig::default()).unwrap();
    assert_eq!(routed.len(), 1);
    let polyline = &routed[0].geometry.polyline;
    assert_eq!(polyline.len(), 2);
    assert_eq!((polyline[0].x, polyline[1].x), (0.5, 3.5));
}

#[test]
fn test_upward_edge_arrow_points_up_on_screen() {
    let svg = render(
        r#"
[[nodes]]
id = "low"

[[nodes]]
id = "high"
position = { y = 3.0 }

[[edges]]
from = "low"
to = "high"
from_side = "top"
to_side = "bottom"
style = { routing = "straight" }
"#,
    )
    .unwrap();
    // Target anchor at y=2.5 projects to -100 on screen
    assert!(svg.contains(r#"transform="translate(0.00 -100.00) rotate(0.00)""#));
}

#[test]
fn test_labels_render_above_edges() {
    let svg = render(
        r#"
[[nodes]]
id = "a"

[[nodes]]
id = "b"
position = { x = 3.0, y = -3.0 }

[[edges]]
from = "a"
to = "b"
label = "a <-> b"
style = { routing = "smooth_step", gap_offset = 0.25 }
"#,
    )
    .unwrap();
    let path_at = svg.find("<path").unwrap();
    let label_at = svg.find("<text").unwrap();
    assert!(path_at < label_at);
    assert!(svg.contains("a &lt;-&gt; b"));
}
