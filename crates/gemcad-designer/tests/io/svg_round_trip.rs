use gemcad_designer::{export_svg, Element, Scene, Style, SvgImporter};

fn round_trip(elements: Vec<Element>) -> Vec<Element> {
    let mut scene = Scene::new();
    scene.add_elements("Base", elements).unwrap();
    let svg = export_svg(&scene);

    let mut target = Scene::new();
    SvgImporter::new()
        .import_into(&mut target, "Base", &svg)
        .unwrap();
    target.active_elements().to_vec()
}

#[test]
fn test_primitives_survive_round_trip() {
    let mut styled = Element::ellipse(30.0, 40.0, 12.5, 6.25);
    styled.style = Style::new("#ff00ff", 0.75, Some("#123456".to_string()));

    let elements = vec![
        Element::rect(10.0, 10.0, 40.0, 30.0),
        styled,
        Element::circle(-3.0, 4.5, 2.0),
        Element::line(0.0, 0.0, 100.0, 50.0),
    ];
    assert_eq!(round_trip(elements.clone()), elements);
}

#[test]
fn test_style_with_markup_characters_survives_round_trip() {
    let mut element = Element::circle(5.0, 5.0, 2.0);
    element.style = Style::new("a&b", 1.0, Some(r##"url("#g")"##.to_string()));
    let mut quoted = Element::rect(0.0, 0.0, 1.0, 1.0);
    quoted.style = Style::new("<it's>", 0.5, None);

    let elements = vec![element, quoted];
    assert_eq!(round_trip(elements.clone()), elements);
}

#[test]
fn test_path_data_is_verbatim() {
    let d = "M10,10 C 20 20, 40 20, 50 10 q 5 -5 10 0 Z";
    let result = round_trip(vec![Element::path(d)]);
    assert_eq!(result, vec![Element::path(d)]);
}

#[test]
fn test_export_format() {
    let mut scene = Scene::new();
    scene
        .add_element("Base", Element::circle(1.0, 2.0, 3.0))
        .unwrap();
    let svg = export_svg(&scene);
    let lines: Vec<&str> = svg.lines().collect();

    assert_eq!(
        lines[0],
        "<svg xmlns='http://www.w3.org/2000/svg' width='800' height='600'>"
    );
    assert!(lines[1].starts_with("<circle cx=\"1\" cy=\"2\" r=\"3\""));
    assert_eq!(lines[2], "</svg>");
}

#[test]
fn test_import_appends_after_existing_elements() {
    let mut scene = Scene::new();
    scene
        .add_element("Base", Element::rect(0.0, 0.0, 1.0, 1.0))
        .unwrap();
    let summary = SvgImporter::new()
        .import_into(&mut scene, "Base", "<svg><line x2='5'/></svg>")
        .unwrap();

    assert_eq!(summary.imported, 1);
    assert_eq!(scene.active_elements()[1], Element::line(0.0, 0.0, 5.0, 0.0));
}
