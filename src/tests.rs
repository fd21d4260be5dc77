/*
 * Copyright (C) the Skippy SVG contributors
 *
 * This file is part of Skippy SVG.
 *
 * Skippy SVG is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Skippy SVG is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with Skippy SVG. If not, see <https://www.gnu.org/licenses/>.
 */

use super::list::LevelGenerator;
use super::render::{max_level, validate, Escaped, Layout, Shape};
use super::render::{Line, Text, MAX_DRAWN_LEVEL};
use super::source::{sample_list, sample_words};
use super::*;
use std::vec;

/// Hands out tower heights from a fixed script, then 1 forever.
struct Scripted(vec::IntoIter<usize>);

impl Scripted {
    pub fn new(levels: &[usize]) -> Self {
        Self(levels.to_vec().into_iter())
    }
}

impl LevelGenerator for Scripted {
    fn next_level(&mut self, _max: usize) -> usize {
        self.0.next().unwrap_or(1)
    }
}

fn scripted_list(levels: &[usize]) -> SkipList<usize, String, Scripted> {
    let mut list = SkipList::with_generator(Scripted::new(levels), 8);
    for i in 0..levels.len() {
        list.insert(i, format!("v{i}"));
    }
    list
}

/// Head, three data nodes of levels 1, 2, 1, then tail.
fn fixture() -> Vec<DumpNode> {
    vec![
        DumpNode::head(2),
        DumpNode::data("red", 1),
        DumpNode::data("black", 2),
        DumpNode::data("cat", 1),
        DumpNode::tail(),
    ]
}

fn arrows_at(document: &Document, y: f64) -> Vec<(f64, f64)> {
    document
        .lines()
        .filter(|line| line.y1 == y && line.y2 == y)
        .map(|line| (line.x1, line.x2))
        .collect()
}

#[test]
fn insert_keeps_key_order() {
    let mut list = SkipList::new();
    for key in [50, 10, 40, 20, 30, 0, 60] {
        list.insert(key, key * 2);
    }
    assert_eq!(list.len(), 7);
    assert!(list.iter().map(|(k, _)| *k).eq([0, 10, 20, 30, 40, 50, 60]));
    assert!(list.iter().all(|(k, v)| *v == k * 2));
    for key in [0, 30, 60] {
        assert_eq!(list.get(&key), Some(&(key * 2)));
    }
    assert_eq!(list.get(&35), None);
    assert_eq!(list.get(&70), None);
}

#[test]
fn get_on_empty_list() {
    let list: SkipList<u32, u32> = SkipList::new();
    assert!(list.is_empty());
    assert_eq!(list.level(), 0);
    assert_eq!(list.get(&1), None);
    assert_eq!(list.iter().next(), None);
}

#[test]
fn insert_replaces_existing_value() {
    let mut list = scripted_list(&[2, 1, 3]);
    assert_eq!(list.insert(1, "new".to_owned()), Some("v1".to_owned()));
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(&1).map(String::as_str), Some("new"));
    let levels: Vec<_> = list.towers().map(|(_, level)| level).collect();
    assert_eq!(levels, [2, 1, 3]);
}

#[test]
fn towers_are_clamped_to_max_level() {
    let mut list = SkipList::with_generator(Scripted::new(&[10, 0, 3]), 4);
    for i in 0..3 {
        list.insert(i, i);
    }
    let levels: Vec<_> = list.towers().map(|(_, level)| level).collect();
    assert_eq!(levels, [4, 1, 3]);
    assert_eq!(list.level(), 4);

    let list: SkipList<u8, u8, _> =
        SkipList::with_generator(Scripted::new(&[]), 0);
    assert_eq!(list.max_level(), 1);
}

#[test]
fn tall_towers_link_past_short_ones() {
    let list = scripted_list(&[1, 3, 1, 2, 1]);
    let dump = list.dump();
    assert_eq!(level_spine(&dump, 2), [0, 2, 4, 6]);
    assert_eq!(level_spine(&dump, 3), [0, 2, 6]);
}

#[test]
fn dump_lists_head_data_tail() {
    let list = scripted_list(&[1, 3, 2]);
    let dump = list.dump();
    assert_eq!(
        dump,
        [
            DumpNode::head(3),
            DumpNode::data("v0", 1),
            DumpNode::data("v1", 3),
            DumpNode::data("v2", 2),
            DumpNode::tail(),
        ]
    );
    assert_eq!(dump[0].kind(), Some(NodeKind::Head));
    assert_eq!(dump[4].kind(), Some(NodeKind::Tail));
    assert!(dump[1..4].iter().all(DumpNode::is_data));
}

#[test]
fn geometric_levels_stay_in_range() {
    let mut levels = Geometric::seeded(7);
    let mut seen = [0_usize; 6];
    for _ in 0..2000 {
        let level = levels.next_level(5);
        assert!((1..=5).contains(&level));
        seen[level] += 1;
    }
    // Roughly half of all towers stop at level 1.
    assert!(seen[1] > 800 && seen[1] < 1200);
    assert!(seen[2] > seen[3]);
}

#[test]
fn sample_list_is_deterministic() {
    let a = sample_list(sample_words(), 42, 6);
    let b = sample_list(sample_words(), 42, 6);
    assert_eq!(a.dump(), b.dump());

    let words: Vec<_> = sample_words().collect();
    assert_eq!(words.len(), 14);
    assert_eq!(a.len(), words.len());
    assert!(a.iter().map(|(_, v)| v.as_str()).eq(words.iter().copied()));
    assert_eq!(a.iter().next().map(|(k, _)| k.as_str()), Some("0000"));
    assert!(a.towers().all(|(_, level)| (1..=6).contains(&level)));
}

#[test]
fn spine_of_fixture() {
    let nodes = fixture();
    assert_eq!(level_spine(&nodes, 1), [0, 1, 2, 3, 4]);
    assert_eq!(level_spine(&nodes, 2), [0, 2, 4]);
    assert_eq!(level_spine(&nodes, 3), [0, 4]);
    assert!(level_spine(&[], 1).is_empty());
    assert!(level_spine(&[DumpNode::head(1)], 1).is_empty());
    assert_eq!(level_spine(&[DumpNode::head(1), DumpNode::tail()], 1), [0, 1]);
}

#[test]
fn spines_are_increasing_and_nested() {
    for seed in 0..20 {
        let nodes = sample_list(sample_words(), seed, 8).dump();
        let last = nodes.len() - 1;
        let top = max_level(&nodes).unwrap();
        assert_eq!(level_spine(&nodes, 1).len(), nodes.len());

        let mut below = level_spine(&nodes, 1);
        for level in 1..=top {
            let spine = level_spine(&nodes, level);
            assert_eq!(spine.first(), Some(&0));
            assert_eq!(spine.last(), Some(&last));
            assert!(spine.windows(2).all(|w| w[0] < w[1]));
            assert!(spine.iter().all(|offset| below.contains(offset)));
            below = spine;
        }
    }
}

#[test]
fn max_level_ignores_sentinels() {
    let mut nodes = fixture();
    nodes[0].level = 9;
    nodes[4].level = 7;
    assert_eq!(max_level(&nodes), Some(2));
    assert_eq!(max_level(&[DumpNode::head(3), DumpNode::tail()]), None);
}

#[test]
fn rejects_malformed_dumps() {
    let data = || DumpNode::data("x", 1);
    let head = || DumpNode::head(1);
    let tail = DumpNode::tail;
    let named = |name: &str| DumpNode {
        name: Some(name.to_owned()),
        value: None,
        level: 1,
    };

    assert_eq!(validate(&[]), Err(Error::EmptyDump));
    assert_eq!(validate(&[data(), tail()]), Err(Error::MissingHead));
    assert_eq!(validate(&[head()]), Err(Error::MissingTail));
    assert_eq!(validate(&[head(), data()]), Err(Error::MissingTail));
    assert_eq!(validate(&[head(), tail()]), Err(Error::NoDataNodes));
    assert_eq!(
        validate(&[head(), data(), head(), tail()]),
        Err(Error::MisplacedSentinel {
            offset: 2,
            name: "head".to_owned(),
        }),
    );
    assert_eq!(
        validate(&[head(), tail(), data(), tail()]),
        Err(Error::MisplacedSentinel {
            offset: 1,
            name: "tail".to_owned(),
        }),
    );
    assert_eq!(
        validate(&[head(), named("middle"), tail()]),
        Err(Error::UnknownNode {
            offset: 1,
            name: "middle".to_owned(),
        }),
    );
    assert_eq!(
        validate(&[head(), data(), DumpNode::data("y", 0), tail()]),
        Err(Error::ZeroLevel {
            offset: 2,
        }),
    );
    assert_eq!(
        validate(&[head(), DumpNode::data("y", usize::MAX), tail()]),
        Err(Error::LevelTooHigh {
            offset: 1,
            level: usize::MAX,
            max: MAX_DRAWN_LEVEL,
        }),
    );
    assert_eq!(
        validate(&[head(), DumpNode::data("y", MAX_DRAWN_LEVEL + 1), tail()]),
        Err(Error::LevelTooHigh {
            offset: 1,
            level: MAX_DRAWN_LEVEL + 1,
            max: MAX_DRAWN_LEVEL,
        }),
    );
    assert_eq!(
        validate(&[head(), DumpNode::data("y", MAX_DRAWN_LEVEL), tail()]),
        Ok(()),
    );
    assert_eq!(validate(&[head(), named(""), tail()]), Ok(()));
    assert_eq!(validate(&fixture()), Ok(()));
}

#[test]
fn render_fails_without_partial_output() {
    let options = RenderOptions::default();
    let nodes = [DumpNode::head(1), DumpNode::tail()];
    assert_eq!(render(&nodes, &options), Err(Error::NoDataNodes));
    assert_eq!(render(&[], &options), Err(Error::EmptyDump));

    let tall = [
        DumpNode::head(1),
        DumpNode::data("x", usize::MAX),
        DumpNode::tail(),
    ];
    assert!(matches!(
        render(&tall, &options),
        Err(Error::LevelTooHigh { .. }),
    ));
}

#[test]
fn tallest_allowed_tower_renders() {
    let nodes = [
        DumpNode::head(1),
        DumpNode::data("x", MAX_DRAWN_LEVEL),
        DumpNode::tail(),
    ];
    let document = render(&nodes, &RenderOptions::default()).unwrap();
    let top = -((MAX_DRAWN_LEVEL + 1) as f64) * 100.0;
    assert_eq!(document.view_box.y, top);
    assert_eq!(document.lines().count(), MAX_DRAWN_LEVEL * 2);
}

#[test]
fn rejects_degenerate_geometry() {
    let nodes = fixture();
    let rejects = |geometry: Geometry| {
        let layout = Layout::new(&nodes, &geometry);
        matches!(layout, Err(Error::InvalidGeometry { .. }))
    };
    assert!(rejects(Geometry::with_box_size(f64::NAN)));
    assert!(rejects(Geometry::with_box_size(f64::INFINITY)));
    assert!(rejects(Geometry::with_box_size(0.0)));
    assert!(rejects(Geometry::with_box_size(-10.0)));
    assert!(rejects(Geometry {
        spacing: 100.0,
        ..Geometry::default()
    }));
    assert!(rejects(Geometry {
        spacing: 50.0,
        ..Geometry::default()
    }));
    assert!(rejects(Geometry {
        label_y: f64::NAN,
        ..Geometry::default()
    }));
    assert!(rejects(Geometry {
        circle_radius: -1.0,
        ..Geometry::default()
    }));
    assert!(!rejects(Geometry {
        spacing: 101.0,
        ..Geometry::default()
    }));

    let options = RenderOptions {
        geometry: Geometry::with_box_size(0.0),
        ..RenderOptions::default()
    };
    assert!(render(&nodes, &options).is_err());
}

#[test]
fn text_and_line_attributes_are_configurable() {
    let document = render(&fixture(), &RenderOptions::default()).unwrap();
    let texts: Vec<&Text> = document
        .shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Text(text) => Some(text),
            _ => None,
        })
        .collect();
    assert!(!texts.is_empty());
    assert!(texts.iter().all(|t| t.baseline == "middle"));
    assert!(texts.iter().all(|t| t.anchor == "middle"));
    assert!(document.lines().all(|line| line.marker == "arrowend"));

    let text = Text {
        baseline: "hanging".to_owned(),
        anchor: "start".to_owned(),
        ..texts[0].clone()
    };
    let svg = text.to_string();
    assert!(svg.contains(r#"dominant-baseline="hanging""#));
    assert!(svg.contains(r#"text-anchor="start""#));

    let line = Line {
        marker: "dot".to_owned(),
        ..document.lines().next().unwrap().clone()
    };
    assert!(line.to_string().contains(r#"marker-end="url(#dot)""#));
}

#[test]
fn fixture_shape_counts() {
    let document = render(&fixture(), &RenderOptions::default()).unwrap();
    let style = Style::default();
    let data_columns = [200.0, 400.0, 600.0];

    let base_boxes =
        document.rects().filter(|r| r.fill == style.highlight).count();
    assert_eq!(base_boxes, 3);

    let towers = document
        .rects()
        .filter(|r| r.fill == "none" && data_columns.contains(&r.x))
        .count();
    assert_eq!(towers, 1 + 2 + 1);

    let head = document.rects().filter(|r| r.x == 0.0).count();
    assert_eq!(head, 2);
    let tail: Vec<_> = document.rects().filter(|r| r.x == 800.0).collect();
    assert_eq!(tail.len(), 2);
    assert!(tail.iter().all(|r| r.fill == style.nil_fill));

    // Level 1 links every node; level 2 skips the short towers.
    let level_1 = arrows_at(&document, -50.0);
    assert_eq!(level_1.len(), fixture().len() - 1);
    assert_eq!(level_1[0], (100.0, 200.0));
    let level_2 = arrows_at(&document, -150.0);
    assert_eq!(level_2, [(100.0, 400.0), (500.0, 800.0)]);
    assert_eq!(document.lines().count(), 6);

    let circles = document
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Circle(_)))
        .count();
    assert_eq!(circles, 2 + 4);
}

#[test]
fn fixture_document_bounds() {
    let document = render(&fixture(), &RenderOptions::default()).unwrap();
    let svg = document.to_string();
    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         viewBox=\"-200 -300 2000 400\" height=\"500\">\n<defs>\n",
    ));
    assert!(svg.ends_with("\n</svg>\n"));
    assert_eq!(svg.matches("<defs>").count(), 1);
    assert_eq!(svg.matches("<marker id=\"arrowend\"").count(), 1);
    assert_eq!(svg.matches("marker-end=\"url(#arrowend)\"").count(), 6);
    assert!(svg.contains(
        "<rect x=\"400\" y=\"-200\" width=\"100\" height=\"100\" \
         stroke=\"black\" stroke-width=\"2\" fill=\"none\"/>",
    ));
    assert!(svg.contains(
        "<line x1=\"500\" y1=\"-150\" x2=\"800\" y2=\"-150\" \
         stroke=\"black\" stroke-width=\"2\" \
         marker-end=\"url(#arrowend)\"/>",
    ));
}

#[test]
fn fixture_text() {
    let svg = render(&fixture(), &RenderOptions::default())
        .unwrap()
        .to_string();
    assert!(svg.contains(
        "<text x=\"450\" y=\"50\" dy=\"3\" dominant-baseline=\"middle\" \
         text-anchor=\"middle\" fill=\"black\" font-size=\"400%\">2</text>",
    ));
    assert!(svg.contains(
        "<text x=\"450\" y=\"150\" dominant-baseline=\"middle\" \
         text-anchor=\"middle\" fill=\"black\" font-size=\"400%\">black\
         </text>",
    ));
    assert!(svg.contains("fill=\"gray\" font-size=\"400%\">[head]</text>"));
    assert!(svg.contains("fill=\"gray\" font-size=\"400%\">[tail]</text>"));
    assert_eq!(svg.matches("font-size=\"300%\">NIL</text>").count(), 2);
    assert_eq!(svg.matches(" dy=").count(), 3);
}

#[test]
fn arrows_follow_all_node_shapes() {
    let nodes = sample_list(sample_words(), 3, 6).dump();
    let document = render(&nodes, &RenderOptions::default()).unwrap();
    let first_line = document
        .shapes
        .iter()
        .position(|s| matches!(s, Shape::Line(_)))
        .unwrap();
    assert!(document.shapes[first_line..]
        .iter()
        .all(|s| matches!(s, Shape::Line(_))));
}

#[test]
fn rendering_is_idempotent() {
    let nodes = sample_list(sample_words(), 11, 8).dump();
    let options = RenderOptions::default();
    let a = render(&nodes, &options).unwrap().to_string();
    let b = render(&nodes, &options).unwrap().to_string();
    assert_eq!(a, b);
}

#[test]
fn level_one_links_every_node() {
    let nodes = sample_list(sample_words(), 5, 8).dump();
    let document = render(&nodes, &RenderOptions::default()).unwrap();
    let arrows = arrows_at(&document, -50.0);
    assert_eq!(arrows.len(), nodes.len() - 1);

    let geometry = Geometry::default();
    let layout = Layout::new(&nodes, &geometry).unwrap();
    let top = layout.center_y(layout.max_level());
    assert!(!arrows_at(&document, top).is_empty());
}

#[test]
fn text_is_escaped() {
    assert_eq!(
        Escaped("a<b & \"c\" > 'd'").to_string(),
        "a&lt;b &amp; &quot;c&quot; &gt; &apos;d&apos;",
    );
    assert_eq!(Escaped("plain").to_string(), "plain");

    let nodes = [
        DumpNode::head(1),
        DumpNode::data("<b>&", 1),
        DumpNode::tail(),
    ];
    let svg = render(&nodes, &RenderOptions::default())
        .unwrap()
        .to_string();
    assert!(svg.contains(">&lt;b&gt;&amp;</text>"));
    assert!(!svg.contains("<b>"));
}

#[test]
fn geometry_scales_with_box_size() {
    let geometry = Geometry::with_box_size(50.0);
    assert_eq!(geometry.spacing, 100.0);
    assert_eq!(geometry.circle_radius, 5.0);
    assert_eq!(geometry.label_y, 75.0);
    assert_eq!(geometry.center_offset(), 25.0);

    let layout = Layout::new(&fixture(), &geometry).unwrap();
    assert_eq!(layout.column_x(3), 300.0);
    assert_eq!(layout.tower_y(2), -100.0);
    assert_eq!(layout.document_height(), 250.0);
    let view_box = layout.view_box();
    assert_eq!(
        (view_box.x, view_box.y, view_box.width, view_box.height),
        (-100.0, -150.0, 1000.0, 200.0),
    );
}

#[test]
fn json_dump_renders() {
    let json = r#"[
        {"name": "head", "level": 3},
        {"value": "red", "level": 1},
        {"name": "", "value": "black", "level": 2},
        {"name": "tail", "level": 0}
    ]"#;
    let nodes: Vec<DumpNode> = serde_json::from_str(json).unwrap();
    assert!(nodes[1].is_data() && nodes[2].is_data());
    let document = render(&nodes, &RenderOptions::default()).unwrap();
    assert_eq!(document.lines().count(), 3 + 2);

    let list = scripted_list(&[2, 1]);
    let dump = list.dump();
    let json = serde_json::to_string(&dump).unwrap();
    assert!(!json.contains("null"));
    let back: Vec<DumpNode> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dump);
}
