use record_meta::{
    GeneratorOptions, TypeName, accessor_method_name, class_type_of, component_class_type,
    container_qualified_name, find_annotation, generated_type_name, type_list_attribute,
};
use record_meta_syn::describe_struct;
use syn::DeriveInput;

fn parse(source: &str) -> DeriveInput {
    syn::parse_str(source).expect("valid declaration")
}

#[test]
fn describes_components_and_identity() {
    let input = parse(
        r#"
        #[record_builder(suffix = "Factory")]
        struct Point {
            x: i64,
            y: i64,
            label: String,
        }
        "#,
    );
    let decl = describe_struct(&input, "io.example.geometry").expect("describable");

    assert_eq!(decl.qualified_name, "io.example.geometry.Point");
    assert_eq!(decl.simple_name, "Point");
    assert_eq!(container_qualified_name(&decl), "io.example.geometry");

    let names: Vec<&str> = decl.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["x", "y", "label"]);
    assert_eq!(decl.components[2].type_name, TypeName::class("", "String"));
}

#[test]
fn empty_package_yields_a_bare_qualified_name() {
    let input = parse("struct Point { x: i64 }");
    let decl = describe_struct(&input, "").expect("describable");

    assert_eq!(decl.qualified_name, "Point");
    assert_eq!(container_qualified_name(&decl), "");
}

#[test]
fn generic_records_declare_type_parameters() {
    let input = parse("struct Holder<T, U> { first: T, second: Vec<U> }");
    let decl = describe_struct(&input, "io.example").expect("describable");

    assert_eq!(decl.type_parameters, ["T", "U"]);
    assert_eq!(decl.components[0].type_name, TypeName::variable("T"));
    assert_eq!(decl.components[1].type_name.to_string(), "Vec<U>");

    let ct = class_type_of(&decl, &decl.type_parameters);
    assert_eq!(ct.name(), "Holder");
    assert_eq!(ct.type_name().to_string(), "io.example.Holder<T, U>");
}

#[test]
fn annotation_type_lists_survive_the_trip() {
    let input = parse(
        r#"
        #[record_builder(interfaces(io::example::Display, Debug))]
        struct Point { x: i64 }
        "#,
    );
    let decl = describe_struct(&input, "io.example").expect("describable");

    let annotation = find_annotation(&decl, "record_builder").expect("present");
    let interfaces =
        type_list_attribute(annotation.attributes.get("interfaces")).expect("well-formed");

    assert_eq!(interfaces.len(), 2);
    assert_eq!(interfaces[0].to_string(), "io.example.Display");
    assert_eq!(interfaces[1].to_string(), "Debug");
}

#[test]
fn described_records_drive_name_generation_end_to_end() {
    let input = parse(
        r#"
        #[record_builder(suffix = "Factory", withPrefix = "having")]
        struct Point { x: i64, row: i64 }
        "#,
    );
    let decl = describe_struct(&input, "io.example").expect("describable");

    let options = match find_annotation(&decl, "record_builder") {
        Some(annotation) => GeneratorOptions::from_annotation(annotation),
        None => GeneratorOptions::default(),
    };
    assert_eq!(options.suffix, "Factory");

    let ct = class_type_of(&decl, &decl.type_parameters);
    assert_eq!(
        generated_type_name(&decl, &options, &ct, &options.suffix),
        "PointFactory"
    );

    let accessors: Vec<String> = decl
        .components
        .iter()
        .map(|component| {
            accessor_method_name(&component_class_type(component), &options.with_prefix)
        })
        .collect();
    assert_eq!(accessors, ["havingX", "havingRow"]);
}

#[test]
fn non_record_shapes_are_rejected() {
    let tuple = parse("struct Pair(i64, i64);");
    assert!(describe_struct(&tuple, "io.example").is_err());

    let unit = parse("struct Marker;");
    assert!(describe_struct(&unit, "io.example").is_err());

    let choice = parse("enum Either { Left, Right }");
    assert!(describe_struct(&choice, "io.example").is_err());
}
